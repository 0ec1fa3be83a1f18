//! Alerts command implementation
//!
//! Builds the notification feed for the snapshot and prints it newest first.

use serde::Serialize;
use tracing::info;
use treasury_core::model::{Notification, Severity};
use treasury_risk::NotificationCenter;

use super::{print_json, Context, OutputFormat};
use crate::Result;

#[derive(Serialize)]
struct AlertView<'a> {
    unread: usize,
    notifications: &'a [Notification],
}

/// Run the alerts command
pub fn run(ctx: &Context) -> Result<()> {
    info!("Refreshing notification feed...");
    let mut feed = NotificationCenter::new();
    let added = feed.refresh(&ctx.snapshot.checks, ctx.now);
    info!(added, "notification feed ready");

    if ctx.format == OutputFormat::Json {
        return print_json(&AlertView {
            unread: feed.unread_count(),
            notifications: feed.notifications(),
        });
    }

    if feed.is_empty() {
        println!("No alerts.");
        return Ok(());
    }

    println!("{} unread", feed.unread_count());
    println!();
    for notification in feed.visible() {
        println!(
            "  {:<7} {:<24} {}",
            severity_tag(notification.severity),
            notification.title,
            notification.message
        );
    }

    Ok(())
}

fn severity_tag(severity: Severity) -> &'static str {
    match severity {
        Severity::Danger => "DANGER",
        Severity::Warning => "WARNING",
        Severity::Info => "INFO",
    }
}
