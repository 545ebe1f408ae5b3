//! Asset generation
//!
//! - Number textures `number-1.png` .. `number-12.png`

pub mod numbers;

pub use numbers::run;
