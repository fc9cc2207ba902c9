//! Phone number → one-time code → (login | signup) flow.

mod code;
mod directory;
mod effects;
mod machine;

pub use code::*;
pub use directory::*;
pub use effects::*;
pub use machine::*;
