pub mod aggregate;
pub use aggregate::*;

pub mod materializer;
pub use materializer::*;
