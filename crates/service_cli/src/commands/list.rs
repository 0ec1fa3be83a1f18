//! List command implementation
//!
//! Filters the snapshot with a [`CheckQuery`] and prints one page of hits.

use chrono::NaiveDate;
use tracing::info;
use treasury_analytics::query::{CheckQuery, Page, Period};
use treasury_core::model::{CheckStatus, CheckType};
use treasury_core::types::parse_instant;

use super::summary::display_name;
use super::{print_json, Context, ListArgs, OutputFormat};
use crate::{CliError, Result};

/// Run the list command
pub fn run(ctx: &Context, args: &ListArgs) -> Result<()> {
    let query = build_query(args)?;
    info!(?query, page = args.page, "Listing checks...");

    let hits = query.apply(&ctx.snapshot.checks, ctx.now);
    let page = Page::of(&hits, args.page, ctx.config.page_size);

    if ctx.format == OutputFormat::Json {
        return print_json(&page);
    }

    if page.items.is_empty() {
        println!("No checks match.");
        return Ok(());
    }

    println!(
        "{:<10} {:<12} {:<9} {:<9} {:<24} {:<20} {:>20}",
        "Due", "Number", "Type", "Status", "Entity", "Bank", "Amount"
    );
    for check in &page.items {
        let due = check
            .due_instant()
            .map(|d| d.date().to_string())
            .unwrap_or_else(|| "-".to_string());
        println!(
            "{:<10} {:<12} {:<9} {:<9} {:<24} {:<20} {:>20}",
            due,
            check.check_number,
            check.check_type,
            check.status,
            display_name(&check.entity_name),
            display_name(&check.bank_name),
            ctx.money(check.amount())
        );
    }
    println!();
    println!(
        "Page {}/{} ({} checks){}",
        page.page,
        page.total_pages,
        page.total_items,
        if page.has_next() { ", more with --page" } else { "" }
    );

    Ok(())
}

/// Translates command-line filters into a query.
fn build_query(args: &ListArgs) -> Result<CheckQuery> {
    let mut query = CheckQuery::new();

    if let Some(term) = &args.search {
        query = query.search(term.as_str());
    }
    if let Some(text) = &args.check_type {
        query = query.with_type(parse_check_type(text)?);
    }
    if let Some(text) = &args.status {
        query = query.with_status(parse_status(text)?);
    }
    if let Some(text) = &args.period {
        let period: Period = text.parse().map_err(CliError::InvalidArgument)?;
        query = query.in_period(period);
    }
    match (&args.from, &args.to) {
        (Some(from), Some(to)) => {
            query = query.due_between(parse_day(from)?, parse_day(to)?);
        }
        (None, None) => {}
        _ => {
            return Err(CliError::invalid_argument(
                "--from and --to must be given together",
            ))
        }
    }

    Ok(query)
}

fn parse_check_type(text: &str) -> Result<CheckType> {
    let wanted = text.trim().to_ascii_lowercase();
    CheckType::ALL
        .into_iter()
        .find(|t| t.as_str() == wanted)
        .ok_or_else(|| {
            CliError::invalid_argument(format!(
                "unknown type '{}' (expected incoming or outgoing)",
                text
            ))
        })
}

fn parse_status(text: &str) -> Result<CheckStatus> {
    let wanted = text.trim().to_ascii_lowercase();
    CheckStatus::ALL
        .into_iter()
        .find(|s| s.as_str() == wanted)
        .ok_or_else(|| {
            CliError::invalid_argument(format!(
                "unknown status '{}' (expected pending, paid, returned or garantie)",
                text
            ))
        })
}

fn parse_day(text: &str) -> Result<NaiveDate> {
    parse_instant(text)
        .map(|instant| instant.date())
        .map_err(|source| CliError::InvalidDate {
            input: text.to_string(),
            source,
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_query_from_args() {
        let args = ListArgs {
            search: Some("orion".into()),
            check_type: Some("Incoming".into()),
            status: Some("pending".into()),
            period: Some("last_7_days".into()),
            page: 1,
            ..ListArgs::default()
        };
        let query = build_query(&args).unwrap();
        assert_eq!(query.check_type, Some(CheckType::Incoming));
        assert_eq!(query.status, Some(CheckStatus::Pending));
        assert_eq!(query.period, Some(Period::Last7Days));
        assert!(query.search.is_some());
    }

    #[test]
    fn test_date_range_requires_both_ends() {
        let args = ListArgs {
            from: Some("2024-06-01".into()),
            ..ListArgs::default()
        };
        assert!(matches!(
            build_query(&args),
            Err(CliError::InvalidArgument(_))
        ));

        let args = ListArgs {
            from: Some("2024-06-01".into()),
            to: Some("2024-06-30".into()),
            ..ListArgs::default()
        };
        let query = build_query(&args).unwrap();
        assert_eq!(query.due_from, NaiveDate::from_ymd_opt(2024, 6, 1));
        assert_eq!(query.due_to, NaiveDate::from_ymd_opt(2024, 6, 30));
    }

    #[test]
    fn test_rejects_unknown_values() {
        let args = ListArgs {
            status: Some("bounced".into()),
            ..ListArgs::default()
        };
        assert!(build_query(&args).is_err());

        let args = ListArgs {
            period: Some("yesterday".into()),
            ..ListArgs::default()
        };
        assert!(build_query(&args).is_err());

        let args = ListArgs {
            from: Some("01/06/2024".into()),
            to: Some("2024-06-30".into()),
            ..ListArgs::default()
        };
        assert!(matches!(
            build_query(&args),
            Err(CliError::InvalidDate { .. })
        ));
    }
}
