pub mod categories;
pub mod recipes;
pub mod users;
