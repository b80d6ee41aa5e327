// Presentation of expansion failures to humans

mod display;

pub use display::*;
