pub mod ease;
pub mod lerp;
