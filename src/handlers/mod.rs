pub mod auth;
pub mod categories;
pub mod health;
pub mod recipes;

pub use auth::*;
pub use categories::*;
pub use health::*;
pub use recipes::*;
