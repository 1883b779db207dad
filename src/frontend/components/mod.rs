pub mod error_indicator;
pub mod nav;
