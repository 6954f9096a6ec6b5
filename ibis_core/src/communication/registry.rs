//! Process-global topic registry.
//!
//! Topics are keyed by name. The first registration fixes the element type
//! and queue depth; later handles on the same name attach to the existing
//! queue. A name registered with a different element type is an error.

use crate::error::{IbisError, IbisResult};
use crossbeam::queue::ArrayQueue;
use once_cell::sync::Lazy;
use parking_lot::RwLock;
use std::any::Any;
use std::collections::HashMap;
use std::sync::Arc;

/// A registered topic: bounded ring plus the depth fixed at registration.
pub(crate) struct TopicChannel<T> {
    pub(crate) queue: ArrayQueue<T>,
    pub(crate) depth: usize,
}

struct TopicEntry {
    channel: Arc<dyn Any + Send + Sync>,
    type_name: &'static str,
}

static TOPICS: Lazy<RwLock<HashMap<String, TopicEntry>>> =
    Lazy::new(|| RwLock::new(HashMap::new()));

pub(crate) fn open<T: Send + 'static>(
    topic: &str,
    depth: usize,
) -> IbisResult<Arc<TopicChannel<T>>> {
    if topic.is_empty() {
        return Err(IbisError::InvalidTopic("empty topic name".to_string()));
    }
    if depth == 0 {
        return Err(IbisError::InvalidInput(format!(
            "topic '{}' requested zero queue depth",
            topic
        )));
    }

    {
        let topics = TOPICS.read();
        if let Some(entry) = topics.get(topic) {
            return attach::<T>(topic, entry);
        }
    }

    let mut topics = TOPICS.write();
    // Re-check: another thread may have registered the name while the
    // read lock was released.
    if let Some(entry) = topics.get(topic) {
        return attach::<T>(topic, entry);
    }

    let channel = Arc::new(TopicChannel {
        queue: ArrayQueue::new(depth),
        depth,
    });
    topics.insert(
        topic.to_string(),
        TopicEntry {
            channel: channel.clone(),
            type_name: std::any::type_name::<T>(),
        },
    );
    Ok(channel)
}

fn attach<T: Send + 'static>(topic: &str, entry: &TopicEntry) -> IbisResult<Arc<TopicChannel<T>>> {
    entry
        .channel
        .clone()
        .downcast::<TopicChannel<T>>()
        .map_err(|_| IbisError::TopicTypeMismatch {
            topic: topic.to_string(),
            existing: entry.type_name,
            requested: std::any::type_name::<T>(),
        })
}

pub(crate) fn clear() {
    TOPICS.write().clear();
}
