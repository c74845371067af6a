//! Client side of the API: an explicit session value and a typed HTTP
//! client that attaches the bearer token from it.

pub mod api;
pub mod filter;
pub mod session;

pub use api::{ApiClient, ClientError, ClientResult, FALLBACK_ERROR_MESSAGE};
pub use filter::filter_recipes;
pub use session::Session;
