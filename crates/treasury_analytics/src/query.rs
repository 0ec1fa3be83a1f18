//! Search, filtering and pagination of check lists.
//!
//! A [`CheckQuery`] is a conjunction of optional criteria. Every criterion
//! that involves a date works on `due_date`; a check whose due date does
//! not parse is excluded as soon as any date criterion is active.

use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime};
use std::fmt;
use std::str::FromStr;
use treasury_core::model::{Check, CheckStatus, CheckType};
use treasury_core::types::time::{end_of_day, start_of_day};

/// Relative due-date period, anchored on the day of `now`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Period {
    /// Due today.
    Today,
    /// Due between seven days ago and today, inclusive.
    Last7Days,
    /// Due between fifteen days ago and today, inclusive.
    Last15Days,
    /// Due in the calendar month of `now`.
    ThisMonth,
}

impl Period {
    /// All periods.
    pub const ALL: [Period; 4] = [
        Period::Today,
        Period::Last7Days,
        Period::Last15Days,
        Period::ThisMonth,
    ];

    /// Stable name used on the command line and in serialised queries.
    pub fn as_str(&self) -> &'static str {
        match self {
            Period::Today => "today",
            Period::Last7Days => "last_7_days",
            Period::Last15Days => "last_15_days",
            Period::ThisMonth => "this_month",
        }
    }

    /// True when `due` falls in the period relative to `now`.
    pub fn contains(&self, due: NaiveDateTime, now: NaiveDateTime) -> bool {
        let today = now.date();
        match self {
            Period::Today => due.date() == today,
            Period::Last7Days => Self::trailing(due.date(), today, 7),
            Period::Last15Days => Self::trailing(due.date(), today, 15),
            Period::ThisMonth => due.year() == today.year() && due.month() == today.month(),
        }
    }

    fn trailing(due: NaiveDate, today: NaiveDate, days: i64) -> bool {
        due <= today && today - due <= Duration::days(days)
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Period {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        Period::ALL
            .into_iter()
            .find(|p| p.as_str() == wanted)
            .ok_or_else(|| {
                format!(
                    "unknown period '{}' (expected one of: today, last_7_days, last_15_days, this_month)",
                    s
                )
            })
    }
}

/// Filter over a check list.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use treasury_analytics::query::CheckQuery;
/// use treasury_core::model::{Check, CheckStatus, CheckType};
///
/// let now = NaiveDate::from_ymd_opt(2024, 6, 15).unwrap().and_hms_opt(12, 0, 0).unwrap();
/// let checks = vec![
///     Check::new("a", CheckType::Incoming, CheckStatus::Pending, 10.0).with_entity("Orion SARL"),
///     Check::new("b", CheckType::Outgoing, CheckStatus::Pending, 20.0).with_entity("Delta"),
///     Check::new("c", CheckType::Incoming, CheckStatus::Paid, 30.0).with_notes("orion, second lot"),
/// ];
///
/// let hits = CheckQuery::new().search("ORION").with_type(CheckType::Incoming).apply(&checks, now);
/// assert_eq!(hits.len(), 2);
///
/// let hits = CheckQuery::new().search("orion").with_status(CheckStatus::Paid).apply(&checks, now);
/// assert_eq!(hits[0].id.as_str(), "c");
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CheckQuery {
    /// Free-text term.
    pub search: Option<String>,
    /// Direction filter.
    pub check_type: Option<CheckType>,
    /// Status filter.
    pub status: Option<CheckStatus>,
    /// Inclusive due-date range; only applied when both ends are set.
    pub due_from: Option<NaiveDate>,
    /// Inclusive due-date range end.
    pub due_to: Option<NaiveDate>,
    /// Relative due-date period.
    pub period: Option<Period>,
}

impl CheckQuery {
    /// Query matching every check.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the free-text term. Blank terms match everything.
    pub fn search(mut self, term: impl Into<String>) -> Self {
        let term = term.into();
        self.search = if term.trim().is_empty() {
            None
        } else {
            Some(term)
        };
        self
    }

    /// Restricts to one direction.
    pub fn with_type(mut self, check_type: CheckType) -> Self {
        self.check_type = Some(check_type);
        self
    }

    /// Restricts to one status.
    pub fn with_status(mut self, status: CheckStatus) -> Self {
        self.status = Some(status);
        self
    }

    /// Restricts to due dates between `from` and `to`, both days inclusive.
    pub fn due_between(mut self, from: NaiveDate, to: NaiveDate) -> Self {
        self.due_from = Some(from);
        self.due_to = Some(to);
        self
    }

    /// Restricts to a relative period.
    pub fn in_period(mut self, period: Period) -> Self {
        self.period = Some(period);
        self
    }

    fn matches_search(&self, check: &Check) -> bool {
        let Some(term) = self.search.as_deref() else {
            return true;
        };
        let needle = term.to_lowercase();
        let contains = |field: &str| field.to_lowercase().contains(&needle);

        contains(&check.entity_name)
            || check.check_number.contains(term)
            || check.fund_name.as_deref().is_some_and(contains)
            || check.notes.as_deref().is_some_and(contains)
    }

    fn date_range(&self) -> Option<(NaiveDateTime, NaiveDateTime)> {
        match (self.due_from, self.due_to) {
            (Some(from), Some(to)) => Some((start_of_day(from), end_of_day(to))),
            _ => None,
        }
    }

    /// True when the check satisfies every active criterion.
    pub fn matches(&self, check: &Check, now: NaiveDateTime) -> bool {
        if self.check_type.is_some_and(|t| t != check.check_type) {
            return false;
        }
        if self.status.is_some_and(|s| s != check.status) {
            return false;
        }
        if !self.matches_search(check) {
            return false;
        }

        let range = self.date_range();
        if range.is_none() && self.period.is_none() {
            return true;
        }
        let Some(due) = check.due_instant() else {
            return false;
        };
        if let Some((from, to)) = range {
            if due < from || due > to {
                return false;
            }
        }
        self.period.map_or(true, |p| p.contains(due, now))
    }

    /// Matching checks, in input order.
    pub fn apply(&self, checks: &[Check], now: NaiveDateTime) -> Vec<Check> {
        checks
            .iter()
            .filter(|check| self.matches(check, now))
            .cloned()
            .collect()
    }
}

/// One page of a list.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Page<T> {
    /// Items on this page.
    pub items: Vec<T>,
    /// 1-based page number actually served.
    pub page: usize,
    /// Page size.
    pub per_page: usize,
    /// Number of pages; zero for an empty list.
    pub total_pages: usize,
    /// Number of items across all pages.
    pub total_items: usize,
}

impl<T: Clone> Page<T> {
    /// Slices `items` into page `page` of `per_page` items.
    ///
    /// Page numbers are 1-based. Zero is read as the first page and numbers
    /// past the end are clamped to the last page. A zero `per_page` is read
    /// as one.
    ///
    /// ```
    /// use treasury_analytics::query::Page;
    ///
    /// let items: Vec<u32> = (1..=10).collect();
    /// let page = Page::of(&items, 2, 8);
    /// assert_eq!(page.items, vec![9, 10]);
    /// assert_eq!(page.total_pages, 2);
    ///
    /// let clamped = Page::of(&items, 9, 8);
    /// assert_eq!(clamped.page, 2);
    /// ```
    pub fn of(items: &[T], page: usize, per_page: usize) -> Self {
        let per_page = per_page.max(1);
        let total_items = items.len();
        let total_pages = total_items.div_ceil(per_page);
        let page = page.clamp(1, total_pages.max(1));
        let start = ((page - 1) * per_page).min(total_items);
        let end = (start + per_page).min(total_items);
        Self {
            items: items[start..end].to_vec(),
            page,
            per_page,
            total_pages,
            total_items,
        }
    }

    /// True when a later page exists.
    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn now() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 6, 15)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap()
    }

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn due(id: &str, date: &str) -> Check {
        Check::new(id, CheckType::Incoming, CheckStatus::Pending, 1.0).with_due_date(date)
    }

    fn ids(checks: &[Check]) -> Vec<&str> {
        checks.iter().map(|c| c.id.as_str()).collect()
    }

    #[test]
    fn test_empty_query_matches_all() {
        let checks = vec![due("a", ""), due("b", "2024-06-01")];
        assert_eq!(CheckQuery::new().apply(&checks, now()).len(), 2);
        assert_eq!(CheckQuery::new().search("  ").apply(&checks, now()).len(), 2);
    }

    #[test]
    fn test_check_number_is_substring_match() {
        let checks = vec![
            due("a", "").with_number("0044100"),
            due("b", "").with_number("9981"),
        ];
        let hits = CheckQuery::new().search("441").apply(&checks, now());
        assert_eq!(ids(&hits), vec!["a"]);
    }

    #[test]
    fn test_search_fund_name_case_insensitive() {
        let checks = vec![due("a", "").with_fund("Main Account"), due("b", "")];
        let hits = CheckQuery::new().search("main").apply(&checks, now());
        assert_eq!(ids(&hits), vec!["a"]);
    }

    #[test]
    fn test_date_range_inclusive() {
        let checks = vec![
            due("first", "2024-06-01"),
            due("last", "2024-06-10T18:00:00"),
            due("after", "2024-06-11"),
            due("undated", ""),
        ];
        let hits = CheckQuery::new()
            .due_between(ymd(2024, 6, 1), ymd(2024, 6, 10))
            .apply(&checks, now());
        assert_eq!(ids(&hits), vec!["first", "last"]);
    }

    #[test]
    fn test_half_open_range_is_ignored() {
        let checks = vec![due("a", ""), due("b", "2020-01-01")];
        let query = CheckQuery {
            due_from: Some(ymd(2024, 6, 1)),
            ..CheckQuery::default()
        };
        assert_eq!(query.apply(&checks, now()).len(), 2);
    }

    #[test]
    fn test_periods() {
        let checks = vec![
            due("today", "2024-06-15"),
            due("week", "2024-06-08"),
            due("fortnight", "2024-05-31"),
            due("older", "2024-05-30"),
            due("future", "2024-06-20"),
        ];
        let run = |period: Period| -> Vec<String> {
            let hits = CheckQuery::new().in_period(period).apply(&checks, now());
            hits.iter().map(|c| c.id.to_string()).collect()
        };

        assert_eq!(run(Period::Today), vec!["today"]);
        assert_eq!(run(Period::Last7Days), vec!["today", "week"]);
        assert_eq!(run(Period::Last15Days), vec!["today", "week", "fortnight"]);
        assert_eq!(run(Period::ThisMonth), vec!["today", "week", "future"]);
    }

    #[test]
    fn test_period_from_str() {
        assert_eq!("last_7_days".parse::<Period>(), Ok(Period::Last7Days));
        assert_eq!(" This_Month ".parse::<Period>(), Ok(Period::ThisMonth));
        assert!("week".parse::<Period>().is_err());
    }

    #[test]
    fn test_page_clamps() {
        let items: Vec<u32> = (1..=17).collect();
        let first = Page::of(&items, 0, 8);
        assert_eq!(first.page, 1);
        assert_eq!(first.items.len(), 8);
        assert!(first.has_next());

        let last = Page::of(&items, 3, 8);
        assert_eq!(last.items, vec![17]);
        assert!(!last.has_next());
        assert_eq!(last.total_items, 17);
    }

    #[test]
    fn test_page_of_empty_list() {
        let page: Page<u32> = Page::of(&[], 4, 8);
        assert_eq!(page.page, 1);
        assert_eq!(page.total_pages, 0);
        assert!(page.items.is_empty());
    }
}
