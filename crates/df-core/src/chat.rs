use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::entity::new_id;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChatSender {
    User,
    Agent,
    Customer,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub id: String,
    pub deal_id: String,
    pub sender: ChatSender,
    pub content: String,
    pub sent_at: DateTime<Utc>,
}

/// Per-deal conversation threads.
pub trait ChatRepository {
    /// Messages for `deal_id` in send order. Empty for an unknown deal.
    fn thread(&self, deal_id: &str) -> Vec<ChatMessage>;

    fn append(&mut self, deal_id: &str, sender: ChatSender, content: &str) -> ChatMessage;

    /// Drop the thread for `deal_id`, returning how many messages it held.
    fn clear(&mut self, deal_id: &str) -> usize;
}

#[derive(Debug, Clone, Default)]
pub struct InMemoryChatStore {
    threads: HashMap<String, Vec<ChatMessage>>,
}

impl InMemoryChatStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn thread_count(&self) -> usize {
        self.threads.len()
    }
}

impl ChatRepository for InMemoryChatStore {
    fn thread(&self, deal_id: &str) -> Vec<ChatMessage> {
        self.threads.get(deal_id).cloned().unwrap_or_default()
    }

    fn append(&mut self, deal_id: &str, sender: ChatSender, content: &str) -> ChatMessage {
        let message = ChatMessage {
            id: new_id(),
            deal_id: deal_id.to_string(),
            sender,
            content: content.to_string(),
            sent_at: Utc::now(),
        };
        debug!(deal_id, ?sender, "chat message appended");
        self.threads
            .entry(deal_id.to_string())
            .or_default()
            .push(message.clone());
        message
    }

    fn clear(&mut self, deal_id: &str) -> usize {
        self.threads.remove(deal_id).map_or(0, |t| t.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn threads_are_isolated_per_deal() {
        let mut store = InMemoryChatStore::new();
        store.append("deal-1", ChatSender::User, "hello");
        store.append("deal-2", ChatSender::Customer, "hi there");
        store.append("deal-1", ChatSender::Agent, "how can I help?");

        let thread = store.thread("deal-1");
        assert_eq!(thread.len(), 2);
        assert_eq!(thread[0].content, "hello");
        assert_eq!(thread[1].sender, ChatSender::Agent);
        assert_eq!(store.thread("deal-2").len(), 1);
        assert_eq!(store.thread_count(), 2);
    }

    #[test]
    fn unknown_deal_has_empty_thread() {
        let store = InMemoryChatStore::new();
        assert!(store.thread("nope").is_empty());
    }

    #[test]
    fn clear_drops_thread() {
        let mut store = InMemoryChatStore::new();
        store.append("deal-1", ChatSender::User, "a");
        store.append("deal-1", ChatSender::User, "b");
        assert_eq!(store.clear("deal-1"), 2);
        assert_eq!(store.clear("deal-1"), 0);
        assert!(store.thread("deal-1").is_empty());
    }
}
