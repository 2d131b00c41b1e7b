// Mortgage Calculator - HTTP API
// Thin transport over mortgage-calc-core: query/body parsing, JSON envelopes, CORS.

pub mod config;
pub mod error;
pub mod handlers;
pub mod response;
pub mod routes;

use mortgage_calc_core::RateStore;

pub use config::ServerConfig;
pub use error::ApiError;
pub use routes::app;

/// Shared application state
#[derive(Clone, Default)]
pub struct AppState {
    pub rates: RateStore,
}

impl AppState {
    pub fn new(rates: RateStore) -> Self {
        Self { rates }
    }
}
