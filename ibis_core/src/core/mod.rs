//! Core types and traits for the ibis runtime.
//!
//! All nodes follow a consistent lifecycle:
//! 1. **Construction** - the node is created and registers its channels
//! 2. **Initialization** - `init()` is called to set up resources
//! 3. **Execution** - `tick()` is called by the scheduler
//! 4. **Shutdown** - `shutdown()` is called to clean up resources

pub mod node;

pub use node::{
    LogSummary, Node, NodeConfig, NodeInfo, NodeMetrics, NodeState, TopicMetadata,
};
