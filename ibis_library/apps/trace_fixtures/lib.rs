//! Smoke fixture nodes for the ibis runtime.
//!
//! Every node here is deliberately minimal: the programs in this crate
//! exist to exercise channel registration and the executor, not to move
//! data around.

use ibis::prelude::*;
use std::sync::atomic::{AtomicBool, Ordering};

/// Topic the publisher and subscription fixtures register on.
pub const FIXTURE_TOPIC: &str = "the_topic";

/// Queue depth used by all fixture channels.
pub const FIXTURE_DEPTH: usize = 10;

/// Node owning one outbound channel on [`FIXTURE_TOPIC`].
///
/// It never publishes; the single executor iteration is the whole
/// exercise.
pub struct PubNode {
    publisher: Hub<TextMsg>,
}

impl PubNode {
    pub fn new() -> Result<Self> {
        Ok(Self {
            publisher: Hub::new_with_capacity(FIXTURE_TOPIC, FIXTURE_DEPTH)?,
        })
    }
}

impl Node for PubNode {
    fn name(&self) -> &'static str {
        "test_publisher"
    }

    fn tick(&mut self, _ctx: Option<&mut NodeInfo>) {}

    fn get_publishers(&self) -> Vec<TopicMetadata> {
        vec![TopicMetadata {
            topic_name: self.publisher.get_topic_name().to_string(),
            type_name: "TextMsg".to_string(),
        }]
    }
}

/// Mirror image of [`PubNode`]: drains [`FIXTURE_TOPIC`] on tick.
pub struct SubNode {
    subscriber: Hub<TextMsg>,
    received: u64,
}

impl SubNode {
    pub fn new() -> Result<Self> {
        Ok(Self {
            subscriber: Hub::new_with_capacity(FIXTURE_TOPIC, FIXTURE_DEPTH)?,
            received: 0,
        })
    }

    pub fn received(&self) -> u64 {
        self.received
    }
}

impl Node for SubNode {
    fn name(&self) -> &'static str {
        "test_subscription"
    }

    fn tick(&mut self, mut ctx: Option<&mut NodeInfo>) {
        while self.subscriber.recv(ctx.as_deref_mut()).is_some() {
            self.received += 1;
        }
    }

    fn get_subscribers(&self) -> Vec<TopicMetadata> {
        vec![TopicMetadata {
            topic_name: self.subscriber.get_topic_name().to_string(),
            type_name: "TextMsg".to_string(),
        }]
    }
}

/// Publishes a single ping and waits for the pong reply.
pub struct PingNode {
    ping_publisher: Hub<TextMsg>,
    pong_subscriber: Hub<TextMsg>,
    sent: bool,
    done: Arc<AtomicBool>,
}

impl PingNode {
    pub fn new(done: Arc<AtomicBool>) -> Result<Self> {
        Ok(Self {
            ping_publisher: Hub::new_with_capacity("ping", FIXTURE_DEPTH)?,
            pong_subscriber: Hub::new_with_capacity("pong", FIXTURE_DEPTH)?,
            sent: false,
            done,
        })
    }
}

impl Node for PingNode {
    fn name(&self) -> &'static str {
        "test_ping"
    }

    fn tick(&mut self, mut ctx: Option<&mut NodeInfo>) {
        if !self.sent {
            let _ = self
                .ping_publisher
                .send(TextMsg::new("ping"), ctx.as_deref_mut());
            self.sent = true;
        }

        if self.pong_subscriber.recv(ctx.as_deref_mut()).is_some() {
            self.done.store(true, Ordering::SeqCst);
        }
    }

    fn get_publishers(&self) -> Vec<TopicMetadata> {
        vec![TopicMetadata {
            topic_name: self.ping_publisher.get_topic_name().to_string(),
            type_name: "TextMsg".to_string(),
        }]
    }

    fn get_subscribers(&self) -> Vec<TopicMetadata> {
        vec![TopicMetadata {
            topic_name: self.pong_subscriber.get_topic_name().to_string(),
            type_name: "TextMsg".to_string(),
        }]
    }
}

/// Replies to each ping with a pong.
pub struct PongNode {
    ping_subscriber: Hub<TextMsg>,
    pong_publisher: Hub<TextMsg>,
}

impl PongNode {
    pub fn new() -> Result<Self> {
        Ok(Self {
            ping_subscriber: Hub::new_with_capacity("ping", FIXTURE_DEPTH)?,
            pong_publisher: Hub::new_with_capacity("pong", FIXTURE_DEPTH)?,
        })
    }
}

impl Node for PongNode {
    fn name(&self) -> &'static str {
        "test_pong"
    }

    fn tick(&mut self, mut ctx: Option<&mut NodeInfo>) {
        while self.ping_subscriber.recv(ctx.as_deref_mut()).is_some() {
            let _ = self
                .pong_publisher
                .send(TextMsg::new("pong"), ctx.as_deref_mut());
        }
    }

    fn get_publishers(&self) -> Vec<TopicMetadata> {
        vec![TopicMetadata {
            topic_name: self.pong_publisher.get_topic_name().to_string(),
            type_name: "TextMsg".to_string(),
        }]
    }

    fn get_subscribers(&self) -> Vec<TopicMetadata> {
        vec![TopicMetadata {
            topic_name: self.ping_subscriber.get_topic_name().to_string(),
            type_name: "TextMsg".to_string(),
        }]
    }
}
