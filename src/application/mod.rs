pub mod services;
pub mod usecases;
pub mod validation;
pub mod views;
