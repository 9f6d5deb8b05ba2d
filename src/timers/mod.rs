//! Nested wall-clock timers for engine operations.

mod timers;
pub use timers::*;
