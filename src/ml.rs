pub mod classic;

pub use classic::*;
