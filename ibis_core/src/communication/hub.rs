use super::registry::{self, TopicChannel};
use crate::core::node::{LogSummary, NodeInfo};
use crate::error::IbisResult;
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Instant;

/// Queue depth used by [`Hub::new`] when none is requested.
pub const DEFAULT_QUEUE_DEPTH: usize = 1024;

/// Lock-free counters for Hub monitoring.
#[derive(Debug, Default)]
pub struct AtomicHubMetrics {
    pub messages_sent: AtomicU64,
    pub messages_received: AtomicU64,
    pub send_failures: AtomicU64,
    pub recv_failures: AtomicU64,
}

impl AtomicHubMetrics {
    /// Get current metrics snapshot (for monitoring/debugging).
    pub fn snapshot(&self) -> HubMetrics {
        HubMetrics {
            messages_sent: self.messages_sent.load(Ordering::Relaxed),
            messages_received: self.messages_received.load(Ordering::Relaxed),
            send_failures: self.send_failures.load(Ordering::Relaxed),
            recv_failures: self.recv_failures.load(Ordering::Relaxed),
        }
    }
}

/// Snapshot of Hub counters.
#[derive(Debug, Clone, Default)]
pub struct HubMetrics {
    pub messages_sent: u64,
    pub messages_received: u64,
    pub send_failures: u64,
    pub recv_failures: u64,
}

/// Typed pub/sub channel handle bound to a named topic.
///
/// Handles created with the same name and element type share one bounded
/// queue; clones share metrics as well. The queue depth is fixed by the
/// first registration of the name.
pub struct Hub<T> {
    channel: Arc<TopicChannel<T>>,
    topic_name: String,
    metrics: Arc<AtomicHubMetrics>,
}

impl<T> Clone for Hub<T> {
    fn clone(&self) -> Self {
        Self {
            channel: self.channel.clone(),
            topic_name: self.topic_name.clone(),
            metrics: self.metrics.clone(),
        }
    }
}

impl<T> fmt::Debug for Hub<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Hub")
            .field("topic_name", &self.topic_name)
            .field("depth", &self.channel.depth)
            .finish_non_exhaustive()
    }
}

impl<T: Send + 'static> Hub<T> {
    /// Create a new Hub with the default queue depth.
    pub fn new(topic_name: &str) -> IbisResult<Self> {
        Self::new_with_capacity(topic_name, DEFAULT_QUEUE_DEPTH)
    }

    /// Create a new Hub with an explicit queue depth.
    pub fn new_with_capacity(topic_name: &str, depth: usize) -> IbisResult<Self> {
        let channel = registry::open::<T>(topic_name, depth)?;

        Ok(Hub {
            channel,
            topic_name: topic_name.to_string(),
            metrics: Arc::new(AtomicHubMetrics::default()),
        })
    }

    /// Enqueue a message on the topic.
    ///
    /// Fails with the message handed back when the bounded queue is full.
    pub fn send(&self, msg: T, ctx: Option<&mut NodeInfo>) -> Result<(), T>
    where
        T: LogSummary,
    {
        match ctx {
            Some(ctx) => {
                // Summary is taken before the move into the queue.
                let summary = msg.log_summary();
                let ipc_start = Instant::now();
                match self.channel.queue.push(msg) {
                    Ok(()) => {
                        self.metrics.messages_sent.fetch_add(1, Ordering::Relaxed);
                        let ipc_ns = ipc_start.elapsed().as_nanos() as u64;
                        ctx.log_pub_summary(&self.topic_name, &summary, ipc_ns);
                        Ok(())
                    }
                    Err(msg) => {
                        self.metrics.send_failures.fetch_add(1, Ordering::Relaxed);
                        Err(msg)
                    }
                }
            }
            None => match self.channel.queue.push(msg) {
                Ok(()) => {
                    self.metrics.messages_sent.fetch_add(1, Ordering::Relaxed);
                    Ok(())
                }
                Err(msg) => {
                    self.metrics.send_failures.fetch_add(1, Ordering::Relaxed);
                    Err(msg)
                }
            },
        }
    }

    /// Receive a message from the topic without blocking.
    pub fn recv(&self, ctx: Option<&mut NodeInfo>) -> Option<T>
    where
        T: LogSummary,
    {
        let ipc_start = Instant::now();
        match self.channel.queue.pop() {
            Some(msg) => {
                if let Some(ctx) = ctx {
                    let ipc_ns = ipc_start.elapsed().as_nanos() as u64;
                    let summary = msg.log_summary();
                    ctx.log_sub_summary(&self.topic_name, &summary, ipc_ns);
                }
                self.metrics
                    .messages_received
                    .fetch_add(1, Ordering::Relaxed);
                Some(msg)
            }
            None => {
                self.metrics.recv_failures.fetch_add(1, Ordering::Relaxed);
                None
            }
        }
    }

    /// Get current metrics snapshot for this handle.
    pub fn get_metrics(&self) -> HubMetrics {
        self.metrics.snapshot()
    }

    /// Get the topic name for this Hub.
    pub fn get_topic_name(&self) -> &str {
        &self.topic_name
    }

    /// Queue depth fixed when the topic was first registered.
    pub fn capacity(&self) -> usize {
        self.channel.depth
    }
}
