use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use chrono::{DateTime, Utc};
use df_core::config::NotificationConfig;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum NotificationKind {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Notification {
    pub id: Uuid,
    pub kind: NotificationKind,
    pub title: String,
    pub message: String,
    pub timestamp: DateTime<Utc>,
    pub read: bool,
}

impl Notification {
    pub fn new(kind: NotificationKind, title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            kind,
            title: title.into(),
            message: message.into(),
            timestamp: Utc::now(),
            read: false,
        }
    }
}

// ---------------------------------------------------------------------------
// Notifier
// ---------------------------------------------------------------------------

/// Toast capability consumed by the state containers.
pub trait Notifier {
    fn notify(&self, kind: NotificationKind, title: &str, message: &str);

    fn success(&self, title: &str, message: &str) {
        self.notify(NotificationKind::Success, title, message);
    }
}

// ---------------------------------------------------------------------------
// NotificationManager
// ---------------------------------------------------------------------------

/// Bounded notification feed; the oldest entries fall off past `max`.
#[derive(Debug, Clone)]
pub struct NotificationManager {
    notifications: Vec<Notification>,
    max_notifications: usize,
}

impl NotificationManager {
    pub fn new(max: usize) -> Self {
        Self {
            notifications: Vec::new(),
            max_notifications: max,
        }
    }

    pub fn push(&mut self, n: Notification) {
        self.notifications.push(n);
        if self.notifications.len() > self.max_notifications {
            let overflow = self.notifications.len() - self.max_notifications;
            self.notifications.drain(..overflow);
        }
    }

    pub fn list_unread(&self) -> Vec<&Notification> {
        self.notifications.iter().filter(|n| !n.read).collect()
    }

    pub fn list_all(&self) -> &[Notification] {
        &self.notifications
    }

    pub fn mark_read(&mut self, id: &Uuid) -> bool {
        match self.notifications.iter_mut().find(|n| n.id == *id) {
            Some(n) => {
                n.read = true;
                true
            }
            None => false,
        }
    }

    pub fn mark_all_read(&mut self) {
        for n in &mut self.notifications {
            n.read = true;
        }
    }

    pub fn clear_read(&mut self) {
        self.notifications.retain(|n| !n.read);
    }

    pub fn count_unread(&self) -> usize {
        self.notifications.iter().filter(|n| !n.read).count()
    }
}

// ---------------------------------------------------------------------------
// NotificationCenter
// ---------------------------------------------------------------------------

/// Cloneable handle over one shared [`NotificationManager`], so several
/// containers can post into the same feed.
///
/// Every notification is logged. When disabled, nothing is stored.
#[derive(Debug, Clone)]
pub struct NotificationCenter {
    inner: Arc<Mutex<NotificationManager>>,
    enabled: bool,
}

impl NotificationCenter {
    pub fn new(max: usize) -> Self {
        Self {
            inner: Arc::new(Mutex::new(NotificationManager::new(max))),
            enabled: true,
        }
    }

    pub fn from_config(config: &NotificationConfig) -> Self {
        Self {
            inner: Arc::new(Mutex::new(NotificationManager::new(config.max_notifications))),
            enabled: config.enabled,
        }
    }

    fn manager(&self) -> MutexGuard<'_, NotificationManager> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn snapshot(&self) -> Vec<Notification> {
        self.manager().list_all().to_vec()
    }

    pub fn latest(&self) -> Option<Notification> {
        self.manager().list_all().last().cloned()
    }

    pub fn count_unread(&self) -> usize {
        self.manager().count_unread()
    }

    pub fn mark_read(&self, id: &Uuid) -> bool {
        self.manager().mark_read(id)
    }

    pub fn mark_all_read(&self) {
        self.manager().mark_all_read();
    }

    pub fn clear_read(&self) {
        self.manager().clear_read();
    }
}

impl Default for NotificationCenter {
    fn default() -> Self {
        Self::from_config(&NotificationConfig::default())
    }
}

impl Notifier for NotificationCenter {
    fn notify(&self, kind: NotificationKind, title: &str, message: &str) {
        tracing::info!(?kind, title, message, "notification");
        if self.enabled {
            self.manager().push(Notification::new(kind, title, message));
        }
    }
}
