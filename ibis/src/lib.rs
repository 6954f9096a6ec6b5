//! # ibis
//!
//! A compact in-process publish/subscribe runtime: nodes own typed channel
//! handles, a single-threaded scheduler drives them cooperatively.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use ibis::prelude::*;
//!
//! pub struct MyNode {
//!     publisher: Hub<TextMsg>,
//! }
//!
//! impl Node for MyNode {
//!     fn name(&self) -> &'static str {
//!         "my_node"
//!     }
//!
//!     fn tick(&mut self, mut ctx: Option<&mut NodeInfo>) {
//!         let _ = self.publisher.send(TextMsg::new("hello"), ctx.as_deref_mut());
//!     }
//! }
//! ```

// Re-export core components
pub use ibis_core::{self, *};

// Re-export the message library with alias
pub use ibis_library as library;

/// The ibis prelude - everything you need to get started.
pub mod prelude {
    // Core node types
    pub use ibis_core::core::{
        LogSummary, Node, NodeConfig, NodeInfo, NodeState, TopicMetadata,
    };

    // Communication types
    pub use ibis_core::communication::Hub;

    // Scheduling
    pub use ibis_core::scheduling::Scheduler;

    // Runtime lifecycle
    pub use ibis_core::runtime;

    // Error types
    pub use ibis_core::error::{IbisError, IbisResult};
    pub type Result<T> = IbisResult<T>;

    // Common std types
    pub use std::sync::{Arc, Mutex};
    pub use std::time::{Duration, Instant};

    // Common traits
    pub use serde::{Deserialize, Serialize};

    // Re-export anyhow for error handling
    pub use anyhow::{anyhow, bail, ensure, Context, Result as AnyResult};

    // Re-export all message types for convenience
    pub use ibis_library::messages::*;
}

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Get ibis version
pub fn version() -> &'static str {
    VERSION
}
