pub mod element;
pub use element::*;

pub mod key;
pub use key::*;

pub mod collection;
pub use collection::*;

pub mod attributes;
pub use attributes::*;

pub mod shapes;
