pub mod color;
pub mod label;
pub mod plot;
pub mod style;
