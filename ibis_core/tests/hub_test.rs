// Channel registration and delivery tests.
//
// The topic registry is process-global, so every test uses its own topic
// names.
use ibis_core::communication::Hub;
use ibis_core::core::NodeInfo;
use ibis_core::error::IbisError;

#[test]
fn send_then_recv_roundtrip() {
    let publisher = Hub::<String>::new_with_capacity("hub_test_roundtrip", 4).unwrap();
    let subscriber = Hub::<String>::new_with_capacity("hub_test_roundtrip", 4).unwrap();

    publisher.send("hello".to_string(), None).unwrap();

    assert_eq!(subscriber.recv(None), Some("hello".to_string()));
    assert_eq!(subscriber.recv(None), None);
}

#[test]
fn full_queue_rejects_message() {
    let hub = Hub::<u64>::new_with_capacity("hub_test_overflow", 2).unwrap();

    hub.send(1, None).unwrap();
    hub.send(2, None).unwrap();
    // Third message comes back to the caller.
    assert_eq!(hub.send(3, None), Err(3));

    let metrics = hub.get_metrics();
    assert_eq!(metrics.messages_sent, 2);
    assert_eq!(metrics.send_failures, 1);
}

#[test]
fn element_type_is_fixed_by_first_registration() {
    let _text = Hub::<String>::new_with_capacity("hub_test_types", 4).unwrap();

    let conflicting = Hub::<u64>::new_with_capacity("hub_test_types", 4);
    assert!(matches!(
        conflicting,
        Err(IbisError::TopicTypeMismatch { .. })
    ));
}

#[test]
fn depth_is_fixed_by_first_registration() {
    let first = Hub::<u64>::new_with_capacity("hub_test_depth", 2).unwrap();
    let second = Hub::<u64>::new_with_capacity("hub_test_depth", 99).unwrap();

    assert_eq!(first.capacity(), 2);
    assert_eq!(second.capacity(), 2);
}

#[test]
fn empty_topic_name_is_rejected() {
    let hub = Hub::<String>::new("");
    assert!(matches!(hub, Err(IbisError::InvalidTopic(_))));
}

#[test]
fn zero_depth_is_rejected() {
    let hub = Hub::<String>::new_with_capacity("hub_test_zero_depth", 0);
    assert!(matches!(hub, Err(IbisError::InvalidInput(_))));
}

#[test]
fn recv_on_empty_topic_counts_a_failure() {
    let hub = Hub::<String>::new_with_capacity("hub_test_empty", 4).unwrap();

    assert_eq!(hub.recv(None), None);
    assert_eq!(hub.get_metrics().recv_failures, 1);
}

#[test]
fn node_context_tracks_pub_sub_counts() {
    let hub = Hub::<String>::new_with_capacity("hub_test_ctx", 4).unwrap();
    let mut info = NodeInfo::new("hub_test_node".to_string(), false);

    hub.send("one".to_string(), Some(&mut info)).unwrap();
    hub.send("two".to_string(), Some(&mut info)).unwrap();
    assert_eq!(hub.recv(Some(&mut info)), Some("one".to_string()));

    assert_eq!(info.metrics().messages_sent, 2);
    assert_eq!(info.metrics().messages_received, 1);
    assert_eq!(info.published_topics().get("hub_test_ctx"), Some(&2));
    assert_eq!(info.subscribed_topics().get("hub_test_ctx"), Some(&1));
}

#[test]
fn clones_share_the_queue_and_metrics() {
    let hub = Hub::<u64>::new_with_capacity("hub_test_clone", 4).unwrap();
    let clone = hub.clone();

    hub.send(7, None).unwrap();
    assert_eq!(clone.recv(None), Some(7));

    let metrics = hub.get_metrics();
    assert_eq!(metrics.messages_sent, 1);
    assert_eq!(metrics.messages_received, 1);
    assert_eq!(clone.get_topic_name(), "hub_test_clone");
}
