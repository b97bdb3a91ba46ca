use crate::entity::role::RoleName;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;
use tracing::debug;

/// Emitted when a user is created through registration or the admin surface.
/// Consumed by the realtime admin channel, which is outside this subsystem.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserCreatedEvent {
    pub id: i64,
    pub email: String,
    pub display_name: Option<String>,
    pub full_name: Option<String>,
    pub title: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub avatar_url: Option<String>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub role: RoleName,
}

/// Outbound seam for user-created notifications. Publishing must never block
/// or fail the creating flow, listener or no listener.
pub trait UserEventPublisher: Send + Sync {
    fn publish(&self, event: UserCreatedEvent);
}

/// Fan-out over a tokio broadcast channel. Slow or absent subscribers drop
/// events; the registration flow never notices.
pub struct BroadcastUserEvents {
    tx: broadcast::Sender<UserCreatedEvent>,
}

impl BroadcastUserEvents {
    pub fn new(capacity: usize) -> Self {
        let (tx, _) = broadcast::channel(capacity);
        Self { tx }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<UserCreatedEvent> {
        self.tx.subscribe()
    }
}

impl Default for BroadcastUserEvents {
    fn default() -> Self {
        Self::new(64)
    }
}

impl UserEventPublisher for BroadcastUserEvents {
    fn publish(&self, event: UserCreatedEvent) {
        // send only errors when nobody is subscribed
        if self.tx.send(event).is_err() {
            debug!("user-created event dropped: no subscribers");
        }
    }
}
