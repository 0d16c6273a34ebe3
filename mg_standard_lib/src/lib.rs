pub mod app;
pub mod errors;
pub mod gate;
pub mod helpers;
pub mod session_calculator;
pub mod standardized_types;
