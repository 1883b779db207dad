pub mod errors;
pub mod formatting;
pub mod lifecycle;
