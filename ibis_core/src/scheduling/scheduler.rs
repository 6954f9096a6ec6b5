use crate::core::{Node, NodeInfo, NodeState};
use crate::error::IbisResult;
use colored::Colorize;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

/// Node registration record with lifecycle tracking.
struct RegisteredNode {
    node: Box<dyn Node>,
    priority: u32,
    logging_enabled: bool,
    initialized: bool,
    context: Option<NodeInfo>,
}

/// Central orchestrator: holds nodes, drives the tick loop.
///
/// Single-threaded and cooperative: every node callback runs on the calling
/// thread, in priority order (lower number = higher priority, registration
/// order within a priority level).
pub struct Scheduler {
    nodes: Vec<RegisteredNode>,
    running: Arc<Mutex<bool>>,
    scheduler_name: String,
    rate_hz: f64,
}

impl Default for Scheduler {
    fn default() -> Self {
        Self::new()
    }
}

impl Scheduler {
    /// Create an empty scheduler.
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            running: Arc::new(Mutex::new(true)),
            scheduler_name: "DefaultScheduler".to_string(),
            rate_hz: 60.0,
        }
    }

    /// Set the scheduler name (for debugging/logging).
    pub fn name(mut self, name: &str) -> Self {
        self.scheduler_name = name.to_string();
        self
    }

    /// Set the loop rate used by [`Scheduler::run`] and
    /// [`Scheduler::run_for`].
    pub fn with_rate(mut self, rate_hz: f64) -> Self {
        self.rate_hz = rate_hz;
        self
    }

    /// Add a node with given priority (lower number = higher priority).
    /// If logging is `None` it defaults to disabled.
    pub fn add(
        &mut self,
        node: Box<dyn Node>,
        priority: u32,
        logging_enabled: Option<bool>,
    ) -> &mut Self {
        let node_name = node.name().to_string();
        let logging_enabled = logging_enabled.unwrap_or(false);
        let context = NodeInfo::new(node_name.clone(), logging_enabled);

        self.nodes.push(RegisteredNode {
            node,
            priority,
            logging_enabled,
            initialized: false,
            context: Some(context),
        });
        // Stable sort: registration order is preserved within a priority.
        self.nodes.sort_by_key(|registered| registered.priority);

        eprintln!(
            "Added node '{}' with priority {} (logging: {})",
            node_name, priority, logging_enabled
        );

        self
    }

    /// Execute exactly one non-blocking iteration.
    ///
    /// Nodes not yet initialized are initialized first, then every
    /// registered node is ticked once in priority order. Never sleeps.
    pub fn tick_once(&mut self) -> IbisResult<()> {
        self.init_pending_nodes();

        for registered in self.nodes.iter_mut() {
            if !registered.initialized {
                continue;
            }
            if let Some(ctx) = registered.context.as_mut() {
                ctx.start_tick();
            }
            registered.node.tick(registered.context.as_mut());
            if let Some(ctx) = registered.context.as_mut() {
                ctx.record_tick();
            }
        }

        Ok(())
    }

    /// Main loop with signal handling and node cleanup on exit.
    pub fn run(&mut self) -> IbisResult<()> {
        self.run_with_limit(None)
    }

    /// Run all nodes for a specified duration, then shutdown gracefully.
    pub fn run_for(&mut self, duration: Duration) -> IbisResult<()> {
        self.run_with_limit(Some(duration))
    }

    fn run_with_limit(&mut self, duration: Option<Duration>) -> IbisResult<()> {
        let start_time = Instant::now();

        let running = self.running.clone();
        if let Err(e) = ctrlc::set_handler(move || {
            eprintln!("{}", "\nCtrl+C received! Shutting down scheduler...".red());
            if let Ok(mut r) = running.lock() {
                *r = false;
            }
        }) {
            eprintln!("Warning: Failed to set signal handler: {}", e);
        }

        if let Ok(mut r) = self.running.lock() {
            *r = true;
        }

        let tick_period = Duration::from_secs_f64(1.0 / self.rate_hz);
        while self.is_running() {
            if let Some(max_duration) = duration {
                if start_time.elapsed() >= max_duration {
                    eprintln!(
                        "Scheduler '{}' reached time limit of {:?}",
                        self.scheduler_name, max_duration
                    );
                    break;
                }
            }

            self.tick_once()?;
            std::thread::sleep(tick_period);
        }

        self.shutdown_nodes();
        eprintln!("Scheduler '{}' shutdown complete", self.scheduler_name);

        Ok(())
    }

    /// Stop the scheduler loop.
    pub fn stop(&self) {
        if let Ok(mut running) = self.running.lock() {
            *running = false;
        }
    }

    /// Check if the scheduler loop is running.
    pub fn is_running(&self) -> bool {
        if let Ok(running) = self.running.lock() {
            *running
        } else {
            false
        }
    }

    /// Get the names of all registered nodes, in execution order.
    pub fn get_node_list(&self) -> Vec<String> {
        self.nodes
            .iter()
            .map(|registered| registered.node.name().to_string())
            .collect()
    }

    fn init_pending_nodes(&mut self) {
        for registered in self.nodes.iter_mut() {
            if registered.initialized {
                continue;
            }
            let node_name = registered.node.name();
            if let Some(ctx) = registered.context.as_mut() {
                // A node whose init already failed stays parked in Error.
                if matches!(ctx.state(), NodeState::Error(_)) {
                    continue;
                }
                ctx.set_state(NodeState::Initializing);
                match registered.node.init(ctx) {
                    Ok(()) => {
                        registered.initialized = true;
                        ctx.set_state(NodeState::Running);
                        if registered.logging_enabled {
                            eprintln!("Initialized node '{}'", node_name);
                        }
                    }
                    Err(e) => {
                        eprintln!("Failed to initialize node '{}': {}", node_name, e);
                        ctx.transition_to_error(format!("Initialization failed: {}", e));
                    }
                }
            }
        }
    }

    fn shutdown_nodes(&mut self) {
        for registered in self.nodes.iter_mut() {
            if !registered.initialized {
                continue;
            }
            let node_name = registered.node.name();
            if let Some(ctx) = registered.context.as_mut() {
                ctx.set_state(NodeState::Stopping);
                match registered.node.shutdown(ctx) {
                    Ok(()) => {
                        if registered.logging_enabled {
                            eprintln!("Shutdown node '{}' successfully", node_name);
                        }
                    }
                    Err(e) => eprintln!("Error shutting down node '{}': {}", node_name, e),
                }
                ctx.set_state(NodeState::Stopped);
            }
        }
    }
}
