//! Browser/native capabilities injected into the flows.
//!
//! Flows never touch `localStorage`, wall-clock time or timers directly;
//! they go through these traits so tests can substitute fakes.

mod clock;
mod storage;
mod timer;
mod traits;

pub use clock::*;
pub use storage::*;
pub use timer::*;
pub use traits::*;
