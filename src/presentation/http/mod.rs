pub mod endpoints;
pub mod mappers;
pub mod middleware;
pub mod requests;
pub mod responses;

use std::sync::Arc;

use poem::{Endpoint, EndpointExt, Route};
use poem_openapi::OpenApiService;

use crate::presentation::http::{
    endpoints::{health::HealthEndpoints, root::ApiState, users::UsersEndpoints},
    middleware::RequestTracing,
};

pub const API_PREFIX: &str = "/api/v1";

/// Versioned API under `/api/v1`, the OpenAPI document at `/openapi.json`
/// and Swagger UI under `/docs`.
pub fn build_app(state: Arc<ApiState>, server_url: &str) -> impl Endpoint + use<> {
    let api_service = OpenApiService::new(
        (HealthEndpoints, UsersEndpoints::new(state)),
        "Users API",
        env!("CARGO_PKG_VERSION"),
    )
    .server(format!("{server_url}{API_PREFIX}"));
    let ui = api_service.swagger_ui();
    let spec = api_service.spec_endpoint();

    Route::new()
        .nest(API_PREFIX, api_service)
        .at("/openapi.json", spec)
        .nest("/docs", ui)
        .with(RequestTracing)
}
