//! Subscriptions: directed "tell me about this person's birthday" edges.

use serde::{Deserialize, Serialize};

use crate::user::PlatformId;

/// `subscriber_id` wants to hear about `subscribed_to_id`'s birthday.
///
/// At most one edge exists per ordered pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subscription {
  pub subscriber_id:    PlatformId,
  pub subscribed_to_id: PlatformId,
}

/// The state an edge ended up in after a toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Toggle {
  Subscribed,
  Unsubscribed,
}
