//! Admin API key authentication for back-office read endpoints.

mod api_key;

pub use api_key::ApiKeyValidator;
