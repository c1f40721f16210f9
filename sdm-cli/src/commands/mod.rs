pub mod check;
pub mod map;
pub mod schema;
