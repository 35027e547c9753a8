//! Tests that generated allocations only contain the business days of their month.

use pensum::allocation::{self, MonthKey, SelectionError, SUPPORTED_YEARS};
use pensum::time::{Month, WeekDay, Year};

use pretty_assertions::assert_eq;
use rust_decimal_macros::dec;

mod common;

#[test]
fn test_rows_are_sorted_business_days_of_the_month() {
    for year in SUPPORTED_YEARS {
        for month in 1..=12 {
            let work_month = allocation::generate(year, month, common::hours(dec!(3.6)))
                .expect("selection should be valid");
            let key = work_month.key();

            assert!(!work_month.days().is_empty());
            for day in work_month.days() {
                assert!(day.date() >= key.first_day(), "{} before {}", day.date(), key);
                assert!(day.date() <= key.last_day(), "{} after {}", day.date(), key);
                assert!(day.week_day().is_business_day(), "{} is a weekend", day.date());
                assert_eq!(day.week_day(), day.date().week_day());
            }

            for pair in work_month.days().windows(2) {
                assert!(pair[0].date() < pair[1].date());
            }
        }
    }
}

#[test]
fn test_every_business_day_is_listed() {
    for month in Month::months() {
        let work_month =
            allocation::generate(2026, month.as_usize(), common::hours(dec!(4))).unwrap();

        let expected = Year::new(2026)
            .iter_days_in(month)
            .filter(|date| !matches!(date.week_day(), WeekDay::Saturday | WeekDay::Sunday))
            .collect::<Vec<_>>();

        assert_eq!(
            work_month.days().iter().map(|day| day.date()).collect::<Vec<_>>(),
            expected
        );
    }
}

#[test]
fn test_known_month_lengths() {
    let count = |year, month| {
        allocation::generate(year, month, common::hours(dec!(3.6)))
            .unwrap()
            .days()
            .len()
    };

    assert_eq!(count(2025, 2), 20);
    assert_eq!(count(2025, 3), 21);
    assert_eq!(count(2026, 3), 22);
    assert_eq!(count(2028, 2), 21);
}

#[test]
fn test_weekend_only_range_is_empty() {
    let key = MonthKey::new(2025, 3).unwrap();

    // 2025-03-01 and 2025-03-02 are a saturday and a sunday
    let start = key.first_day();
    let end = start.next_day();

    assert_eq!(allocation::business_days(start, end).count(), 0);
}

#[test]
fn test_out_of_range_selection() {
    assert_eq!(
        allocation::generate(2024, 5, common::hours(dec!(3.6))),
        Err(SelectionError::InvalidYear { year: 2024 })
    );
    assert!(matches!(
        allocation::generate(2025, 13, common::hours(dec!(3.6))),
        Err(SelectionError::InvalidMonth { month: 13, .. })
    ));
}
