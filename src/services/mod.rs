pub mod categories;
pub mod jwt;
pub mod recipes;
pub mod users;
