//! # Transaction Filters
//!
//! Client-side filtering of the transaction list by date range, type and status.
//!
//! ## Key Types:
//! - `TransactionFilters` - the predicate set edited by the filter panel
//! - `DateRange` - optional inclusive bounds, `None` meaning unbounded
//! - `QuickFilter` - preset ranges ("Today", "Last 7 days", ...)
//!
//! ## Key Functions:
//! - `apply_filters()` - stable filter over a transaction slice
//! - `type_options()` - checkbox options for the type filter
//!
//! Empty type/status sets mean "no restriction". Filtering never reorders or
//! mutates its input.

use std::collections::BTreeSet;

use chrono::{Datelike, DateTime, Duration, Months, NaiveDate, TimeZone, Utc};
use log::debug;
use serde::{Deserialize, Serialize};

use crate::dates::{end_of_day, parse_transaction_date, start_of_day};
use crate::{Transaction, TransactionStatus, TransactionType};

/// Inclusive date bounds
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub start: Option<DateTime<Utc>>,
    pub end: Option<DateTime<Utc>>,
}

impl DateRange {
    pub fn new(start: Option<DateTime<Utc>>, end: Option<DateTime<Utc>>) -> Self {
        Self { start, end }
    }

    pub fn is_unbounded(&self) -> bool {
        self.start.is_none() && self.end.is_none()
    }

    pub fn contains(&self, instant: &DateTime<Utc>) -> bool {
        self.start.map_or(true, |start| *instant >= start)
            && self.end.map_or(true, |end| *instant <= end)
    }
}

/// Filter criteria for the transaction list
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionFilters {
    pub date_range: DateRange,
    /// Allowed effective types; matched as free-form strings
    pub transaction_types: BTreeSet<String>,
    /// Allowed status names
    pub transaction_statuses: BTreeSet<String>,
}

impl TransactionFilters {
    pub fn has_active_filters(&self) -> bool {
        !self.date_range.is_unbounded()
            || !self.transaction_types.is_empty()
            || !self.transaction_statuses.is_empty()
    }

    /// Number of active criteria, shown as a badge on the Filter button.
    /// The date range counts once however many bounds it has.
    pub fn active_filter_count(&self) -> usize {
        usize::from(!self.date_range.is_unbounded())
            + self.transaction_types.len()
            + self.transaction_statuses.len()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn toggle_type(&mut self, transaction_type: &str) {
        toggle(&mut self.transaction_types, transaction_type);
    }

    pub fn toggle_status(&mut self, status: &str) {
        toggle(&mut self.transaction_statuses, status);
    }

    /// Whether a single transaction passes every active criterion.
    ///
    /// A date that cannot be parsed fails any active date bound and is ignored
    /// when no bound is set.
    pub fn matches(&self, transaction: &Transaction) -> bool {
        if !self.date_range.is_unbounded() {
            match parse_transaction_date(&transaction.date) {
                Some(date) if self.date_range.contains(&date) => {}
                Some(_) => return false,
                None => {
                    debug!("Excluding transaction with unparseable date {:?}", transaction.date);
                    return false;
                }
            }
        }

        if !self.transaction_types.is_empty()
            && !self.transaction_types.contains(transaction.effective_type())
        {
            return false;
        }

        if !self.transaction_statuses.is_empty()
            && !self.transaction_statuses.contains(transaction.status.as_str())
        {
            return false;
        }

        true
    }

    /// Borrowing variant of [`apply_filters`] for per-frame rendering
    pub fn filter<'a>(&'a self, transactions: &'a [Transaction]) -> impl Iterator<Item = &'a Transaction> + 'a {
        transactions.iter().filter(move |tx| self.matches(tx))
    }
}

fn toggle(set: &mut BTreeSet<String>, value: &str) {
    if !set.remove(value) {
        set.insert(value.to_string());
    }
}

/// Keep the transactions that match `filters`, in their original order
pub fn apply_filters(transactions: &[Transaction], filters: &TransactionFilters) -> Vec<Transaction> {
    filters.filter(transactions).cloned().collect()
}

/// Status checkbox options, in display order
pub fn status_options() -> Vec<&'static str> {
    TransactionStatus::ALL.iter().map(TransactionStatus::as_str).collect()
}

/// Type checkbox options: the two top-level types followed by every distinct
/// metadata category present in `transactions`, sorted.
pub fn type_options(transactions: &[Transaction]) -> Vec<String> {
    let mut options: Vec<String> = TransactionType::ALL
        .iter()
        .map(|t| t.as_str().to_string())
        .collect();

    let categories: BTreeSet<&str> = transactions
        .iter()
        .filter_map(|tx| tx.metadata.as_ref())
        .map(|metadata| metadata.metadata_type.as_str())
        .filter(|category| !category.is_empty())
        .collect();

    for category in categories {
        if !options.iter().any(|existing| existing == category) {
            options.push(category.to_string());
        }
    }
    options
}

/// Preset date ranges offered above the date pickers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuickFilter {
    Today,
    Last7Days,
    ThisMonth,
    Last3Months,
}

impl QuickFilter {
    pub const ALL: [QuickFilter; 4] = [
        QuickFilter::Today,
        QuickFilter::Last7Days,
        QuickFilter::ThisMonth,
        QuickFilter::Last3Months,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            QuickFilter::Today => "Today",
            QuickFilter::Last7Days => "Last 7 days",
            QuickFilter::ThisMonth => "This month",
            QuickFilter::Last3Months => "Last 3 months",
        }
    }

    /// Range relative to `now`; day boundaries follow `now`'s timezone.
    pub fn range_at<Tz: TimeZone>(&self, now: &DateTime<Tz>) -> DateRange {
        let tz = now.timezone();
        let today = now.date_naive();
        let now_utc = now.with_timezone(&Utc);

        match self {
            QuickFilter::Today => DateRange::new(
                Some(start_of_day(&tz, today)),
                Some(end_of_day(&tz, today)),
            ),
            QuickFilter::Last7Days => DateRange::new(Some(now_utc - Duration::days(7)), Some(now_utc)),
            QuickFilter::ThisMonth => {
                let first = today.with_day0(0).unwrap_or(today);
                DateRange::new(Some(start_of_day(&tz, first)), Some(now_utc))
            }
            QuickFilter::Last3Months => {
                DateRange::new(Some(start_of_day(&tz, three_months_before(today))), Some(now_utc))
            }
        }
    }
}

/// Same day-of-month three months back. A day the target month lacks rolls
/// forward into the following month, so May 31 maps to Mar 3 (Mar 2 in leap
/// years) rather than clamping to the end of February.
fn three_months_before(day: NaiveDate) -> NaiveDate {
    let first_of_month = day.with_day0(0).unwrap_or(day);
    first_of_month
        .checked_sub_months(Months::new(3))
        .map(|first| first + Duration::days(i64::from(day.day0())))
        .unwrap_or(day)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{store_tx, tx};
    use crate::{TransactionStatus::*, TransactionType::*};

    fn sample() -> Vec<Transaction> {
        vec![
            tx(1000.0, "2022-01-01", Deposit, Successful),
            tx(250.0, "2022-01-05T14:00:00Z", Withdrawal, Pending),
            store_tx(80.0, "2022-01-10", "coffee", Failed),
            tx(500.0, "not a date", Deposit, Successful),
            store_tx(40.0, "2022-02-01T08:00:00+01:00", "digital_product", Successful),
        ]
    }

    fn utc(y: i32, m: u32, d: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, 0, 0, 0).unwrap()
    }

    #[test]
    fn test_empty_filters_are_identity() {
        let transactions = sample();
        let filters = TransactionFilters::default();
        assert!(!filters.has_active_filters());
        assert_eq!(apply_filters(&transactions, &filters), transactions);
    }

    #[test]
    fn test_empty_input() {
        let mut filters = TransactionFilters::default();
        filters.toggle_status("pending");
        assert!(apply_filters(&[], &filters).is_empty());
    }

    #[test]
    fn test_status_filter_keeps_only_pending() {
        let transactions = vec![
            tx(10.0, "2022-01-01", Deposit, Pending),
            tx(20.0, "2022-01-02", Deposit, Successful),
        ];
        let mut filters = TransactionFilters::default();
        filters.toggle_status("pending");

        let result = apply_filters(&transactions, &filters);
        assert_eq!(result, vec![transactions[0].clone()]);
    }

    #[test]
    fn test_type_filter_uses_effective_type() {
        let transactions = sample();
        let mut filters = TransactionFilters::default();
        filters.toggle_type("deposit");

        // Store transactions carry a metadata category, so "deposit" only
        // matches the plain deposits.
        let result = apply_filters(&transactions, &filters);
        assert_eq!(result.len(), 2);
        assert!(result.iter().all(|t| t.metadata.is_none() && t.transaction_type == Deposit));

        filters.toggle_type("coffee");
        let result = apply_filters(&transactions, &filters);
        assert_eq!(result.len(), 3);
        assert_eq!(result[1].effective_type(), "coffee");
    }

    #[test]
    fn test_type_filter_keeps_metadata_without_category() {
        let body = r#"{
            "amount": 75,
            "metadata": { "name": "Ada", "email": "ada@example.com", "quantity": 2, "country": "Kenya" },
            "status": "successful",
            "type": "deposit",
            "date": "2022-01-07"
        }"#;
        let uncategorized: Transaction = serde_json::from_str(body).unwrap();
        let mut transactions = sample();
        transactions.push(uncategorized);

        let mut filters = TransactionFilters::default();
        filters.toggle_type("deposit");

        let result = apply_filters(&transactions, &filters);
        assert_eq!(result.len(), 3);
        assert_eq!(result[2].amount, 75.0);
        assert!(!type_options(&transactions).iter().any(|option| option.is_empty()));
    }

    #[test]
    fn test_date_range_is_inclusive() {
        let transactions = sample();
        let filters = TransactionFilters {
            date_range: DateRange::new(Some(utc(2022, 1, 5) + Duration::hours(14)), Some(utc(2022, 1, 10))),
            ..Default::default()
        };

        let result = apply_filters(&transactions, &filters);
        let amounts: Vec<f64> = result.iter().map(|t| t.amount).collect();
        assert_eq!(amounts, vec![250.0, 80.0]);
    }

    #[test]
    fn test_open_ended_ranges() {
        let transactions = sample();

        let only_start = TransactionFilters {
            date_range: DateRange::new(Some(utc(2022, 1, 10)), None),
            ..Default::default()
        };
        let amounts: Vec<f64> = apply_filters(&transactions, &only_start).iter().map(|t| t.amount).collect();
        assert_eq!(amounts, vec![80.0, 40.0]);

        let only_end = TransactionFilters {
            date_range: DateRange::new(None, Some(utc(2022, 1, 1))),
            ..Default::default()
        };
        let amounts: Vec<f64> = apply_filters(&transactions, &only_end).iter().map(|t| t.amount).collect();
        assert_eq!(amounts, vec![1000.0]);
    }

    #[test]
    fn test_unparseable_date_only_excluded_by_date_bounds() {
        let transactions = sample();

        let mut by_status = TransactionFilters::default();
        by_status.toggle_status("successful");
        assert!(apply_filters(&transactions, &by_status).iter().any(|t| t.date == "not a date"));

        let by_date = TransactionFilters {
            date_range: DateRange::new(Some(utc(2000, 1, 1)), None),
            ..Default::default()
        };
        assert!(apply_filters(&transactions, &by_date).iter().all(|t| t.date != "not a date"));
    }

    #[test]
    fn test_filters_combine_and_never_fabricate() {
        let transactions = sample();
        let mut filters = TransactionFilters {
            date_range: DateRange::new(Some(utc(2022, 1, 1)), Some(utc(2022, 3, 1))),
            ..Default::default()
        };
        filters.toggle_status("successful");
        filters.toggle_type("digital_product");

        let result = apply_filters(&transactions, &filters);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].amount, 40.0);
        assert!(result.len() <= transactions.len());
        assert!(result.iter().all(|t| transactions.contains(t)));
    }

    #[test]
    fn test_apply_filters_is_idempotent() {
        let transactions = sample();
        let mut filters = TransactionFilters {
            date_range: DateRange::new(Some(utc(2022, 1, 2)), None),
            ..Default::default()
        };
        filters.toggle_status("successful");
        filters.toggle_status("failed");

        let once = apply_filters(&transactions, &filters);
        let twice = apply_filters(&once, &filters);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_toggle_and_clear() {
        let mut filters = TransactionFilters::default();
        filters.toggle_type("withdrawal");
        filters.toggle_status("failed");
        assert!(filters.has_active_filters());
        assert_eq!(filters.active_filter_count(), 2);

        filters.date_range.start = Some(Utc::now());
        filters.date_range.end = Some(Utc::now());
        assert_eq!(filters.active_filter_count(), 3);
        filters.date_range = DateRange::default();

        filters.toggle_type("withdrawal");
        assert!(filters.transaction_types.is_empty());
        assert!(filters.has_active_filters());

        filters.clear();
        assert_eq!(filters, TransactionFilters::default());
    }

    #[test]
    fn test_type_options_include_metadata_categories() {
        let options = type_options(&sample());
        assert_eq!(options, vec!["deposit", "withdrawal", "coffee", "digital_product"]);
        assert_eq!(status_options(), vec!["successful", "pending", "failed"]);
    }

    #[test]
    fn test_quick_filter_today() {
        let now = Utc.with_ymd_and_hms(2023, 8, 17, 15, 30, 0).unwrap();
        let range = QuickFilter::Today.range_at(&now);
        assert_eq!(range.start, Some(utc(2023, 8, 17)));
        assert_eq!(range.end, Some(Utc.with_ymd_and_hms(2023, 8, 17, 23, 59, 59).unwrap()));
    }

    #[test]
    fn test_quick_filter_relative_ranges() {
        let now = Utc.with_ymd_and_hms(2023, 5, 31, 12, 0, 0).unwrap();

        let week = QuickFilter::Last7Days.range_at(&now);
        assert_eq!(week.start, Some(Utc.with_ymd_and_hms(2023, 5, 24, 12, 0, 0).unwrap()));
        assert_eq!(week.end, Some(now));

        let month = QuickFilter::ThisMonth.range_at(&now);
        assert_eq!(month.start, Some(utc(2023, 5, 1)));
        assert_eq!(month.end, Some(now));

        let quarter = QuickFilter::Last3Months.range_at(&now);
        let start = quarter.start.unwrap();
        assert_eq!(start.date_naive(), NaiveDate::from_ymd_opt(2023, 3, 3).unwrap());
        assert_eq!(start.day(), 3);
    }

    #[test]
    fn test_three_months_back_rolls_over_short_months() {
        let day = |y, m, d| NaiveDate::from_ymd_opt(y, m, d).unwrap();

        assert_eq!(three_months_before(day(2023, 5, 15)), day(2023, 2, 15));
        assert_eq!(three_months_before(day(2023, 5, 31)), day(2023, 3, 3));
        assert_eq!(three_months_before(day(2024, 5, 31)), day(2024, 3, 2));
        assert_eq!(three_months_before(day(2023, 12, 31)), day(2023, 10, 1));
        assert_eq!(three_months_before(day(2023, 2, 10)), day(2022, 11, 10));
    }
}
