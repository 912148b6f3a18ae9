//! Aggregation over record sequences
//!
//! Pure functions over slices already fetched from the store. They never
//! perform I/O and never fail: an empty match set sums to zero.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::models::Resource;

/// Sum `selector(record)` over the records matching `predicate`.
///
/// Returns the additive identity (0) when nothing matches.
pub fn total_for<T, N, P, S>(records: &[T], predicate: P, selector: S) -> N
where
    P: Fn(&T) -> bool,
    S: Fn(&T) -> N,
    N: std::iter::Sum,
{
    records
        .iter()
        .filter(|record| predicate(record))
        .map(selector)
        .sum()
}

/// Total for records dated exactly `day`.
pub fn daily_total<T, N, D, S>(records: &[T], date_of: D, selector: S, day: NaiveDate) -> N
where
    D: Fn(&T) -> NaiveDate,
    S: Fn(&T) -> N,
    N: std::iter::Sum,
{
    total_for(records, |record| date_of(record) == day, selector)
}

/// Total for records dated on or after `month_start`.
///
/// Callers pass the first day of the current month to get a month-to-date
/// figure; the same function covers any "since" cutoff.
pub fn month_to_date_total<T, N, D, S>(
    records: &[T],
    date_of: D,
    selector: S,
    month_start: NaiveDate,
) -> N
where
    D: Fn(&T) -> NaiveDate,
    S: Fn(&T) -> N,
    N: std::iter::Sum,
{
    total_for(records, |record| date_of(record) >= month_start, selector)
}

/// Net profit over a period.
///
/// Both totals must be computed over the same date range; this is the
/// caller's contract, not checked here.
pub fn net_profit(revenue_total: Decimal, expense_total: Decimal) -> Decimal {
    revenue_total - expense_total
}

/// Resources below the low-stock threshold, in input order.
pub fn low_stock_items(resources: &[Resource]) -> Vec<&Resource> {
    resources.iter().filter(|r| r.is_low_stock()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ResourceCategory;
    use chrono::Utc;
    use proptest::prelude::*;
    use rust_decimal::Decimal;
    use uuid::Uuid;

    struct Entry {
        date: NaiveDate,
        amount: Decimal,
    }

    fn entry(date: &str, amount: u32) -> Entry {
        Entry {
            date: date.parse().unwrap(),
            amount: Decimal::from(amount),
        }
    }

    #[test]
    fn empty_sequence_totals_to_zero() {
        let entries: Vec<Entry> = Vec::new();
        let total: Decimal = total_for(&entries, |_| true, |e| e.amount);
        assert_eq!(total, Decimal::ZERO);
    }

    #[test]
    fn no_match_totals_to_zero() {
        let entries = vec![entry("2024-03-01", 50)];
        let total: Decimal = daily_total(
            &entries,
            |e| e.date,
            |e| e.amount,
            "2024-03-02".parse().unwrap(),
        );
        assert_eq!(total, Decimal::ZERO);
    }

    #[test]
    fn daily_total_matches_exact_day_only() {
        let entries = vec![
            entry("2024-03-01", 50),
            entry("2024-03-01", 20),
            entry("2024-03-02", 99),
        ];
        let total: Decimal = daily_total(
            &entries,
            |e| e.date,
            |e| e.amount,
            "2024-03-01".parse().unwrap(),
        );
        assert_eq!(total, Decimal::from(70));
    }

    #[test]
    fn month_to_date_includes_the_start_day() {
        let entries = vec![
            entry("2024-02-29", 11),
            entry("2024-03-01", 50),
            entry("2024-03-15", 25),
        ];
        let total: Decimal = month_to_date_total(
            &entries,
            |e| e.date,
            |e| e.amount,
            "2024-03-01".parse().unwrap(),
        );
        assert_eq!(total, Decimal::from(75));
    }

    #[test]
    fn net_profit_can_be_negative() {
        assert_eq!(
            net_profit(Decimal::from(400), Decimal::from(1000)),
            Decimal::from(-600)
        );
    }

    fn resource(name: &str, quantity: u32) -> Resource {
        Resource {
            id: Uuid::new_v4(),
            name: name.to_string(),
            category: ResourceCategory::Other,
            quantity: Decimal::from(quantity),
            unit: "kg".to_string(),
            cost_per_unit: Decimal::from(100),
            last_restocked: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn low_stock_preserves_input_order_and_excludes_at_threshold() {
        let resources = vec![
            resource("chlorine", 40),
            resource("film", 100),
            resource("diesel", 5),
            resource("caps", 250),
        ];
        let low = low_stock_items(&resources);
        let names: Vec<&str> = low.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["chlorine", "diesel"]);
    }

    proptest! {
        /// Summing a matched subset never exceeds summing everything
        /// (all amounts are non-negative in this domain).
        #[test]
        fn matched_total_is_bounded_by_grand_total(
            amounts in prop::collection::vec(0u32..10_000, 0..20)
        ) {
            let entries: Vec<Entry> = amounts
                .iter()
                .enumerate()
                .map(|(i, a)| Entry {
                    date: NaiveDate::from_ymd_opt(2024, 3, 1 + (i % 28) as u32).unwrap(),
                    amount: Decimal::from(*a),
                })
                .collect();

            let cutoff = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
            let grand: Decimal = total_for(&entries, |_| true, |e| e.amount);
            let matched: Decimal =
                month_to_date_total(&entries, |e| e.date, |e| e.amount, cutoff);
            prop_assert!(matched <= grand);
        }
    }
}
