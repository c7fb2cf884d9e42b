pub mod hash_index;
pub use hash_index::*;

pub mod join_plan;
pub use join_plan::*;

pub mod row;
pub use row::*;

pub mod rows;
pub use rows::*;

#[cfg(test)]
mod _tests;
