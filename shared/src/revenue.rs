//! # Revenue Aggregation
//!
//! Turns the transaction list into the daily revenue series behind the chart.
//!
//! Only successful deposits count. Days come from the literal date text (see
//! [`crate::dates::day_key`]), amounts are summed as `f64` in input order, and
//! the output is sorted by day with one point per distinct day.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use log::warn;
use serde::{Deserialize, Serialize};

use crate::dates::day_key;
use crate::format::format_chart_label;
use crate::Transaction;

/// One day's revenue total
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartPoint {
    pub day_key: NaiveDate,
    pub total_amount: f64,
}

impl ChartPoint {
    pub fn new(day_key: NaiveDate, total_amount: f64) -> Self {
        Self { day_key, total_amount }
    }
}

/// Sum successful deposits per calendar day, ascending by day
pub fn aggregate_revenue(transactions: &[Transaction]) -> Vec<ChartPoint> {
    let mut daily_totals: BTreeMap<NaiveDate, f64> = BTreeMap::new();

    for transaction in transactions.iter().filter(|tx| tx.is_successful_deposit()) {
        match day_key(&transaction.date) {
            Some(day) => *daily_totals.entry(day).or_insert(0.0) += transaction.amount,
            None => warn!("Skipping revenue entry with unparseable date {:?}", transaction.date),
        }
    }

    daily_totals
        .into_iter()
        .map(|(day, total)| ChartPoint::new(day, total))
        .collect()
}

/// Chart-ready revenue series with its axis labels
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RevenueSeries {
    pub points: Vec<ChartPoint>,
    pub total: f64,
}

impl RevenueSeries {
    pub fn from_transactions(transactions: &[Transaction]) -> Self {
        let points = aggregate_revenue(transactions);
        let total = points.iter().map(|point| point.total_amount).sum();
        Self { points, total }
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn first_day(&self) -> Option<NaiveDate> {
        self.points.first().map(|point| point.day_key)
    }

    pub fn last_day(&self) -> Option<NaiveDate> {
        self.points.last().map(|point| point.day_key)
    }

    /// Label under the left edge of the chart
    pub fn start_label(&self) -> Option<String> {
        self.first_day().map(format_chart_label)
    }

    /// Label under the right edge of the chart
    pub fn end_label(&self) -> Option<String> {
        self.last_day().map(format_chart_label)
    }

    /// `[days since first point, amount]` pairs for plotting
    pub fn plot_points(&self) -> Vec<[f64; 2]> {
        let Some(first) = self.first_day() else {
            return Vec::new();
        };
        self.points
            .iter()
            .map(|point| [(point.day_key - first).num_days() as f64, point.total_amount])
            .collect()
    }
}
