//! # Client Configuration Service
//!
//! Exposes `GET /api/config`, which hands the browser the captioning API base
//! URL and the account credentials read from the environment. The frontend
//! loads it once before mounting the meme builder, so no credential is ever
//! compiled into the WASM bundle.

use actix_web::web::{get, scope, Data};
use actix_web::{HttpResponse, Responder, Scope};
use log::debug;

use crate::config::ServerConfig;

const API_PATH: &str = "/api/config";

/// Configures and returns the Actix `Scope` for the configuration route.
///
/// Expects a `web::Data<ServerConfig>` registered on the application.
pub fn configure_routes() -> Scope {
    scope(API_PATH).route("", get().to(process))
}

/// Returns the `ApiConfig` part of the server configuration as JSON.
async fn process(config: Data<ServerConfig>) -> impl Responder {
    debug!("serving client configuration");
    HttpResponse::Ok().json(&config.api)
}
