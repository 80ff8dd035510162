mod helpers;

use chrono::{Duration, Utc};
use futures::StreamExt;
use helpers::*;
use std::sync::Arc;
use support_dashboard::domain::entities::{Message, SenderRole};
use support_dashboard::domain::events::SystemEvent;
use support_dashboard::domain::ports::event_bus::EventBus;
use support_dashboard::shared::events::LocalEventBus;
use support_dashboard::DomainError;

fn customer_message(id: &str, text: &str) -> Message {
    Message::new(id, text, SenderRole::User, Utc::now(), "user3")
}

#[test]
fn test_append_is_append_only() {
    let mut store = seeded_store();
    let before = store.conversation("conv3").unwrap().messages.clone();

    store
        .append_message("conv3", customer_message("msg-new", "Any update on the API keys?"))
        .unwrap();

    let after = &store.conversation("conv3").unwrap().messages;
    assert_eq!(after.len(), before.len() + 1);
    assert_eq!(&after[..before.len()], &before[..]);
    assert_eq!(after.last().unwrap().id, "msg-new");
}

#[test]
fn test_append_refreshes_last_message_cache() {
    let mut store = seeded_store();
    let received_at = Utc::now() + Duration::minutes(5);

    store
        .append_message_at("conv2", customer_message("msg-x", "Still waiting on export"), received_at)
        .unwrap();

    let conv = store.conversation("conv2").unwrap();
    assert_eq!(conv.last_message.as_deref(), Some("Still waiting on export"));
    assert_eq!(conv.last_message_time, Some(received_at));
}

#[test]
fn test_append_uses_current_time_for_last_message_time() {
    let mut store = seeded_store();
    let before = Utc::now();
    store.send_reply("conv1", "Checking now").unwrap();
    let after = Utc::now();

    let time = store.conversation("conv1").unwrap().last_message_time.unwrap();
    assert!(time >= before && time <= after);
}

#[test]
fn test_unread_grows_by_one_per_message_when_not_selected() {
    let mut store = seeded_store();
    store.set_selected_conversation(Some("conv1"));
    let start = store.conversation("conv3").unwrap().unread_count;

    for i in 0..4 {
        store
            .append_message("conv3", customer_message(&format!("msg-{}", i), "ping"))
            .unwrap();
    }

    assert_eq!(store.conversation("conv3").unwrap().unread_count, start + 4);
}

#[test]
fn test_unread_unchanged_when_selected() {
    let mut store = seeded_store();
    store.set_selected_conversation(Some("conv5"));
    let start = store.conversation("conv5").unwrap().unread_count;
    assert_eq!(start, 3);

    store.send_reply("conv5", "Could you send a crash log?").unwrap();
    store
        .append_message("conv5", customer_message("msg-log", "Sure, attaching it"))
        .unwrap();

    // Not reset either: only mark_read lowers the counter
    assert_eq!(store.conversation("conv5").unwrap().unread_count, start);
}

#[test]
fn test_selection_does_not_reset_unread() {
    let mut store = seeded_store();
    store.set_selected_conversation(Some("conv1"));
    assert_eq!(store.selected_conversation().unwrap().unread_count, 2);

    store.mark_read("conv1").unwrap();
    assert_eq!(store.selected_conversation().unwrap().unread_count, 0);

    store.set_selected_conversation(None);
    assert!(store.selected_conversation().is_none());
}

#[test]
fn test_unknown_conversation_leaves_state_unchanged() {
    let mut store = seeded_store();
    let before = store.conversations().to_vec();

    let err = store
        .append_message("conv404", customer_message("msg-1", "hello?"))
        .unwrap_err();

    assert_eq!(err, DomainError::NotFound("Conversation conv404 not found".to_string()));
    assert_eq!(store.conversations(), &before[..]);
}

#[test]
fn test_reply_is_authored_by_current_agent() {
    let mut store = seeded_store();
    let reply = store.send_reply("conv2", "The export moved to the Data tab").unwrap();

    assert_eq!(reply.user_id, "team1");
    assert_eq!(reply.sender, SenderRole::Admin);
    assert_eq!(reply.id, format!("msg-{}", reply.timestamp.timestamp_millis()));
    assert_eq!(store.conversation("conv2").unwrap().latest_message(), Some(&reply));
}

#[test]
fn test_message_timestamps_non_decreasing_after_replies() {
    let mut store = seeded_store();
    store.send_reply("conv4", "Reopening the thread for a follow-up").unwrap();
    store.send_reply("conv4", "Anything else?").unwrap();

    let messages = &store.conversation("conv4").unwrap().messages;
    assert!(messages.windows(2).all(|w| w[0].timestamp <= w[1].timestamp));
}

#[test]
fn test_back_to_back_replies_get_distinct_ids() {
    let mut store = seeded_store();
    let first = store.send_reply("conv4", "first").unwrap();
    let second = store.send_reply("conv4", "second").unwrap();
    let third = store.send_reply("conv4", "third").unwrap();

    assert_ne!(first.id, second.id);
    assert_ne!(second.id, third.id);
    assert_ne!(first.id, third.id);
    assert!(second.id.starts_with("msg-"));

    let messages = &store.conversation("conv4").unwrap().messages;
    let mut ids: Vec<&str> = messages.iter().map(|m| m.id.as_str()).collect();
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), messages.len());
}

#[test]
fn test_append_rejects_id_already_in_conversation() {
    let mut store = seeded_store();
    let existing_id = store.conversation("conv3").unwrap().messages[0].id.clone();
    let before = store.conversation("conv3").unwrap().clone();

    let result = store.append_message("conv3", customer_message(&existing_id, "Duplicate"));

    assert!(matches!(result, Err(DomainError::ValidationError(_))));
    assert_eq!(store.conversation("conv3").unwrap(), &before);
}

#[tokio::test]
async fn test_append_publishes_event() {
    let bus = Arc::new(LocalEventBus::new(16));
    let mut events = bus.subscribe();
    let mut store = seeded_store().with_event_bus(bus.clone() as Arc<dyn EventBus>);

    store
        .append_message("conv2", customer_message("msg-evt", "Hello again"))
        .unwrap();

    match events.next().await.unwrap().unwrap() {
        SystemEvent::MessageAppended {
            message_id,
            conversation_id,
            sender,
            unread_count,
            ..
        } => {
            assert_eq!(message_id, "msg-evt");
            assert_eq!(conversation_id, "conv2");
            assert_eq!(sender, SenderRole::User);
            assert_eq!(unread_count, 1);
        }
        other => panic!("Unexpected event: {:?}", other),
    }
}
