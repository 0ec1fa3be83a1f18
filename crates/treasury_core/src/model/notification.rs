//! User-facing alerts.
//!
//! Notifications live for the session only. They are created by the alert
//! stream in `treasury_risk` and changed afterwards only by explicit user
//! actions (read, close, clear).

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::ids::CheckId;

/// Visual severity of a notification.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Critical incident.
    Danger,
    /// Needs follow-up.
    Warning,
    /// Informational.
    Info,
}

/// Read state of a notification.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationStatus {
    /// Not yet seen.
    #[default]
    New,
    /// Seen by the user.
    Read,
    /// Dismissed by the user.
    Closed,
}

/// One alert shown in the notification feed.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    /// Unique id.
    pub id: String,
    /// Short headline; together with `link_id` identifies the cause.
    pub title: String,
    /// Body text.
    pub message: String,
    /// Visual severity.
    pub severity: Severity,
    /// Read state.
    pub status: NotificationStatus,
    /// When the condition was first observed.
    pub created_at: NaiveDateTime,
    /// Check the alert refers to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link_id: Option<CheckId>,
}

impl Notification {
    /// Creates an unread notification.
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        message: impl Into<String>,
        severity: Severity,
        created_at: NaiveDateTime,
        link_id: Option<CheckId>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            message: message.into(),
            severity,
            status: NotificationStatus::New,
            created_at,
            link_id,
        }
    }

    /// True while the user has not seen the notification.
    #[inline]
    pub fn is_unread(&self) -> bool {
        self.status == NotificationStatus::New
    }

    /// True when this notification reports the given cause.
    pub fn has_cause(&self, title: &str, link_id: Option<&CheckId>) -> bool {
        self.title == title && self.link_id.as_ref() == link_id
    }
}
