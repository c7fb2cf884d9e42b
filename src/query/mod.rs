pub mod join_error;
pub use join_error::*;

pub mod join_on;
pub use join_on::*;

pub mod query;
pub use query::*;
