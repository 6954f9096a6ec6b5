use crate::error::IbisResult;
use std::collections::HashMap;
use std::fmt;
use std::time::{Duration, Instant};

/// Trait for providing lightweight logging summaries of message types.
///
/// Large payloads should only include metadata; small types can lean on
/// their `Debug` formatting.
pub trait LogSummary {
    /// Return a compact string representation suitable for logging.
    fn log_summary(&self) -> String;
}

/// Node states for lifecycle management.
#[derive(Debug, Clone, PartialEq)]
pub enum NodeState {
    Uninitialized,
    Initializing,
    Running,
    Stopping,
    Stopped,
    Error(String),
}

impl fmt::Display for NodeState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NodeState::Uninitialized => write!(f, "Uninitialized"),
            NodeState::Initializing => write!(f, "Initializing"),
            NodeState::Running => write!(f, "Running"),
            NodeState::Stopping => write!(f, "Stopping"),
            NodeState::Stopped => write!(f, "Stopped"),
            NodeState::Error(msg) => write!(f, "Error: {}", msg),
        }
    }
}

/// Configuration parameters for node behavior.
#[derive(Debug, Clone)]
pub struct NodeConfig {
    pub enable_logging: bool,
    pub log_level: String,
}

impl Default for NodeConfig {
    fn default() -> Self {
        NodeConfig {
            enable_logging: true,
            log_level: "INFO".to_string(),
        }
    }
}

/// Tick and message counters tracked per node.
#[derive(Debug, Clone, Default)]
pub struct NodeMetrics {
    pub total_ticks: u64,
    pub messages_sent: u64,
    pub messages_received: u64,
    pub errors_count: u64,
    pub warnings_count: u64,
    pub last_tick_duration_us: u64,
}

/// Topic metadata for monitoring and introspection.
#[derive(Debug, Clone)]
pub struct TopicMetadata {
    pub topic_name: String,
    pub type_name: String,
}

/// Runtime context handed to a node by the scheduler.
///
/// Holds the node's identity, lifecycle state, and counters, and provides
/// the console logging helpers nodes use during execution.
pub struct NodeInfo {
    name: String,
    instance_id: String,
    state: NodeState,
    config: NodeConfig,
    metrics: NodeMetrics,
    creation_time: Instant,
    tick_start_time: Option<Instant>,
    published_topics: HashMap<String, u64>,
    subscribed_topics: HashMap<String, u64>,
}

impl NodeInfo {
    pub fn new(node_name: String, logging_enabled: bool) -> Self {
        let config = NodeConfig {
            enable_logging: logging_enabled,
            ..Default::default()
        };

        Self {
            name: node_name,
            instance_id: uuid::Uuid::new_v4().to_string(),
            state: NodeState::Uninitialized,
            config,
            metrics: NodeMetrics::default(),
            creation_time: Instant::now(),
            tick_start_time: None,
            published_topics: HashMap::new(),
            subscribed_topics: HashMap::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn instance_id(&self) -> &str {
        &self.instance_id
    }

    pub fn state(&self) -> &NodeState {
        &self.state
    }

    pub fn set_state(&mut self, new_state: NodeState) {
        if self.state != new_state {
            self.state = new_state;
        }
    }

    pub fn transition_to_error(&mut self, error_msg: String) {
        self.log_error(&error_msg);
        self.set_state(NodeState::Error(error_msg));
    }

    pub fn config(&self) -> &NodeConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: NodeConfig) {
        self.config = config;
    }

    pub fn metrics(&self) -> &NodeMetrics {
        &self.metrics
    }

    pub fn uptime(&self) -> Duration {
        self.creation_time.elapsed()
    }

    pub fn published_topics(&self) -> &HashMap<String, u64> {
        &self.published_topics
    }

    pub fn subscribed_topics(&self) -> &HashMap<String, u64> {
        &self.subscribed_topics
    }

    // Tick management

    pub fn start_tick(&mut self) {
        self.tick_start_time = Some(Instant::now());
    }

    pub fn record_tick(&mut self) {
        if let Some(start_time) = self.tick_start_time.take() {
            self.metrics.total_ticks += 1;
            self.metrics.last_tick_duration_us = start_time.elapsed().as_micros() as u64;
        }
    }

    // Logging

    pub fn log_pub<T: LogSummary>(&mut self, topic: &str, data: &T, ipc_ns: u64) {
        let summary = data.log_summary();
        self.log_pub_summary(topic, &summary, ipc_ns);
    }

    pub fn log_sub<T: LogSummary>(&mut self, topic: &str, data: &T, ipc_ns: u64) {
        let summary = data.log_summary();
        self.log_sub_summary(topic, &summary, ipc_ns);
    }

    /// Accepts a pre-computed summary string so `Hub::send` does not need
    /// the message reference after the move.
    pub fn log_pub_summary(&mut self, topic: &str, summary: &str, ipc_ns: u64) {
        if self.config.enable_logging {
            let now = chrono::Local::now();
            let tick_us = self.current_tick_us();
            println!(
                "\x1b[36m[{}]\x1b[0m \x1b[32m[IPC: {}ns | Tick: {}μs]\x1b[0m \x1b[33m{}\x1b[0m \x1b[1;32m--PUB-->\x1b[0m \x1b[35m'{}'\x1b[0m = {}",
                now.format("%H:%M:%S%.3f"),
                ipc_ns,
                tick_us,
                self.name,
                topic,
                summary
            );
        }

        *self.published_topics.entry(topic.to_string()).or_insert(0) += 1;
        self.metrics.messages_sent += 1;
    }

    /// Counterpart of [`NodeInfo::log_pub_summary`] for `Hub::recv`.
    pub fn log_sub_summary(&mut self, topic: &str, summary: &str, ipc_ns: u64) {
        if self.config.enable_logging {
            let now = chrono::Local::now();
            let tick_us = self.current_tick_us();
            println!(
                "\x1b[36m[{}]\x1b[0m \x1b[32m[IPC: {}ns | Tick: {}μs]\x1b[0m \x1b[33m{}\x1b[0m \x1b[1;34m<--SUB--\x1b[0m \x1b[35m'{}'\x1b[0m = {}",
                now.format("%H:%M:%S%.3f"),
                ipc_ns,
                tick_us,
                self.name,
                topic,
                summary
            );
        }

        *self.subscribed_topics.entry(topic.to_string()).or_insert(0) += 1;
        self.metrics.messages_received += 1;
    }

    pub fn log_info(&self, message: &str) {
        if self.config.enable_logging
            && (self.config.log_level == "INFO" || self.config.log_level == "DEBUG")
        {
            eprintln!(
                "\x1b[34m[INFO]\x1b[0m \x1b[33m[{}]\x1b[0m {}",
                self.name, message
            );
        }
    }

    pub fn log_warning(&mut self, message: &str) {
        if self.config.enable_logging {
            eprintln!(
                "\x1b[33m[WARN]\x1b[0m \x1b[33m[{}]\x1b[0m {}",
                self.name, message
            );
        }
        self.metrics.warnings_count += 1;
    }

    pub fn log_error(&mut self, message: &str) {
        if self.config.enable_logging {
            eprintln!(
                "\x1b[31m[ERROR]\x1b[0m \x1b[33m[{}]\x1b[0m {}",
                self.name, message
            );
        }
        self.metrics.errors_count += 1;
    }

    pub fn log_debug(&self, message: &str) {
        if self.config.enable_logging && self.config.log_level == "DEBUG" {
            eprintln!(
                "\x1b[90m[DEBUG]\x1b[0m \x1b[33m[{}]\x1b[0m {}",
                self.name, message
            );
        }
    }

    fn current_tick_us(&self) -> u64 {
        self.tick_start_time
            .map(|start| start.elapsed().as_micros() as u64)
            .unwrap_or(0)
    }
}

/// Trait implemented by every schedulable node.
pub trait Node: Send {
    /// Get the node's name.
    ///
    /// Uniqueness is not enforced; two nodes may share a name within one
    /// executor.
    fn name(&self) -> &'static str;

    /// Initialize the node (called once before the first tick).
    fn init(&mut self, ctx: &mut NodeInfo) -> IbisResult<()> {
        ctx.log_info("Node initialized successfully");
        Ok(())
    }

    /// Main execution step (called once per scheduler iteration).
    fn tick(&mut self, ctx: Option<&mut NodeInfo>);

    /// Shutdown the node (called once at cleanup).
    fn shutdown(&mut self, ctx: &mut NodeInfo) -> IbisResult<()> {
        ctx.log_info("Node shutdown successfully");
        Ok(())
    }

    /// Get list of publishers (topic metadata).
    fn get_publishers(&self) -> Vec<TopicMetadata> {
        Vec::new()
    }

    /// Get list of subscribers (topic metadata).
    fn get_subscribers(&self) -> Vec<TopicMetadata> {
        Vec::new()
    }

    /// Health check (optional override).
    fn is_healthy(&self) -> bool {
        true
    }
}

// LogSummary implementations for primitive types

impl LogSummary for f32 {
    fn log_summary(&self) -> String {
        format!("{:.3}", self)
    }
}

impl LogSummary for f64 {
    fn log_summary(&self) -> String {
        format!("{:.3}", self)
    }
}

impl LogSummary for i32 {
    fn log_summary(&self) -> String {
        self.to_string()
    }
}

impl LogSummary for i64 {
    fn log_summary(&self) -> String {
        self.to_string()
    }
}

impl LogSummary for u32 {
    fn log_summary(&self) -> String {
        self.to_string()
    }
}

impl LogSummary for u64 {
    fn log_summary(&self) -> String {
        self.to_string()
    }
}

impl LogSummary for usize {
    fn log_summary(&self) -> String {
        self.to_string()
    }
}

impl LogSummary for bool {
    fn log_summary(&self) -> String {
        self.to_string()
    }
}

impl LogSummary for String {
    fn log_summary(&self) -> String {
        self.clone()
    }
}
