//! # ibis core
//!
//! The core runtime for the ibis framework: a compact, in-process
//! publish/subscribe system built around three pieces:
//!
//! - **Nodes**: independent computational units driven by a scheduler
//! - **Communication**: typed, named, bounded channels between nodes
//! - **Scheduling**: a single-threaded cooperative executor
//!
//! Channels are plain in-process queues; there is no wire format and no
//! cross-process transport. Delivery quality is a single queue-depth knob
//! fixed when a topic is first registered.

pub mod communication;
pub mod core;
pub mod error;
pub mod runtime;
pub mod scheduling;

// Re-export commonly used types for easy access
pub use crate::communication::{Hub, HubMetrics};
pub use crate::core::{LogSummary, Node, NodeConfig, NodeInfo, NodeState, TopicMetadata};
pub use crate::error::{IbisError, IbisResult};
pub use crate::scheduling::Scheduler;
