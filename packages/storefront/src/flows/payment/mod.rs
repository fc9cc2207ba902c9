//! Payment gateway callback: one delayed verification, three outcomes.

mod effects;
mod machine;
mod query;

pub use effects::*;
pub use machine::*;
pub use query::*;
