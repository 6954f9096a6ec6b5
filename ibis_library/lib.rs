//! Standard message library for the ibis runtime.

pub mod messages;

pub use messages::*;
