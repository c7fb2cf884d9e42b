pub mod accessor_mode;
pub use accessor_mode::*;
