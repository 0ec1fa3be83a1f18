//! Alert stream and notification feed.
//!
//! [`NotificationCenter::refresh`] scans a snapshot and adds one notification
//! per cause it has not reported before. A cause is the pair
//! `(title, check id)`, so refreshing against an unchanged snapshot adds
//! nothing. Existing notifications change only through the explicit user
//! actions: [`mark_read`](NotificationCenter::mark_read),
//! [`mark_all_read`](NotificationCenter::mark_all_read),
//! [`close`](NotificationCenter::close) and
//! [`clear`](NotificationCenter::clear).

mod ids;

pub use ids::{IdGenerator, SequentialIdGenerator, UuidIdGenerator};

use std::collections::HashSet;

use chrono::NaiveDateTime;
use tracing::debug;
use treasury_core::model::{
    Check, CheckId, CheckStatus, Notification, NotificationStatus, Severity,
};

/// Title of the alert raised for a returned check.
pub const RETURNED_TITLE: &str = "Alert: Returned check";

/// Title of the alert raised for a pending check past its due date.
pub const OVERDUE_TITLE: &str = "Risk: Maturity passed";

/// Session-scoped notification feed, newest first.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use treasury_core::model::{Check, CheckStatus, CheckType};
/// use treasury_risk::notifications::NotificationCenter;
///
/// let now = NaiveDate::from_ymd_opt(2024, 6, 15).unwrap().and_hms_opt(9, 0, 0).unwrap();
/// let checks = vec![
///     Check::new("a", CheckType::Incoming, CheckStatus::Returned, 300.0).with_number("0042"),
/// ];
///
/// let mut center = NotificationCenter::new();
/// assert_eq!(center.refresh(&checks, now), 1);
/// assert_eq!(center.refresh(&checks, now), 0);
/// assert_eq!(center.unread_count(), 1);
///
/// center.mark_all_read();
/// assert_eq!(center.unread_count(), 0);
/// ```
#[derive(Debug, Default)]
pub struct NotificationCenter<G = UuidIdGenerator> {
    notifications: Vec<Notification>,
    ids: G,
}

impl NotificationCenter<UuidIdGenerator> {
    /// Empty feed with UUID ids.
    pub fn new() -> Self {
        Self::with_id_generator(UuidIdGenerator)
    }
}

impl<G: IdGenerator> NotificationCenter<G> {
    /// Empty feed with a custom id source.
    pub fn with_id_generator(ids: G) -> Self {
        Self {
            notifications: Vec::new(),
            ids,
        }
    }

    /// Adds notifications for causes not already in the feed.
    ///
    /// Returned checks raise a danger alert and pending checks past due a
    /// warning. Each new notification is prepended, so after a refresh the
    /// last cause found is first. Returns how many were added.
    pub fn refresh(&mut self, checks: &[Check], now: NaiveDateTime) -> usize {
        let mut known: HashSet<(&str, Option<&CheckId>)> = self
            .notifications
            .iter()
            .map(|n| (n.title.as_str(), n.link_id.as_ref()))
            .collect();

        let mut fresh = Vec::new();
        for check in checks {
            for (title, message, severity) in causes(check, now) {
                if !known.insert((title, Some(&check.id))) {
                    continue;
                }
                fresh.push(Notification::new(
                    self.ids.next_id(),
                    title,
                    message,
                    severity,
                    now,
                    Some(check.id.clone()),
                ));
            }
        }

        let added = fresh.len();
        if added > 0 {
            fresh.reverse();
            fresh.append(&mut self.notifications);
            self.notifications = fresh;
        }
        debug!(
            added,
            total = self.notifications.len(),
            "notifications refreshed"
        );
        added
    }

    /// All notifications, newest first, closed ones included.
    pub fn notifications(&self) -> &[Notification] {
        &self.notifications
    }

    /// Notifications not yet closed.
    pub fn visible(&self) -> impl Iterator<Item = &Notification> + '_ {
        self.notifications
            .iter()
            .filter(|n| n.status != NotificationStatus::Closed)
    }

    /// Number of notifications with status `new`.
    pub fn unread_count(&self) -> usize {
        self.notifications.iter().filter(|n| n.is_unread()).count()
    }

    /// Marks one notification read. Returns false when the id is unknown.
    ///
    /// Closed notifications stay closed.
    pub fn mark_read(&mut self, id: &str) -> bool {
        match self.find_mut(id) {
            Some(n) => {
                if n.status == NotificationStatus::New {
                    n.status = NotificationStatus::Read;
                }
                true
            }
            None => false,
        }
    }

    /// Marks every unread notification read.
    pub fn mark_all_read(&mut self) {
        for n in self.notifications.iter_mut().filter(|n| n.is_unread()) {
            n.status = NotificationStatus::Read;
        }
    }

    /// Closes one notification. Returns false when the id is unknown.
    ///
    /// A closed notification still blocks its cause from being reported
    /// again; only [`clear`](Self::clear) forgets it.
    pub fn close(&mut self, id: &str) -> bool {
        match self.find_mut(id) {
            Some(n) => {
                n.status = NotificationStatus::Closed;
                true
            }
            None => false,
        }
    }

    /// Removes every notification.
    pub fn clear(&mut self) {
        self.notifications.clear();
    }

    /// Number of notifications in the feed.
    pub fn len(&self) -> usize {
        self.notifications.len()
    }

    /// True when the feed is empty.
    pub fn is_empty(&self) -> bool {
        self.notifications.is_empty()
    }

    fn find_mut(&mut self, id: &str) -> Option<&mut Notification> {
        self.notifications.iter_mut().find(|n| n.id == id)
    }
}

fn causes(check: &Check, now: NaiveDateTime) -> Vec<(&'static str, String, Severity)> {
    let mut out = Vec::new();
    if check.status == CheckStatus::Returned {
        out.push((
            RETURNED_TITLE,
            format!("Instrument #{} was marked as returned.", check.check_number),
            Severity::Danger,
        ));
    }
    if check.is_overdue(now) {
        out.push((
            OVERDUE_TITLE,
            format!("Instrument #{} has reached maturity.", check.check_number),
            Severity::Warning,
        ));
    }
    out
}
