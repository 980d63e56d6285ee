//! Summary values over a record collection.
//!
//! All functions are pure reductions and are recomputed on every call; the
//! collections involved are small fixture sets.

use std::iter::Sum;

pub fn count_where<'a, R, I, P>(records: I, predicate: P) -> usize
where
    R: 'a,
    I: IntoIterator<Item = &'a R>,
    P: Fn(&R) -> bool,
{
    records.into_iter().filter(|record| predicate(*record)).count()
}

pub fn sum_by<'a, R, I, T, F>(records: I, field: F) -> T
where
    R: 'a,
    I: IntoIterator<Item = &'a R>,
    T: Sum<T>,
    F: Fn(&R) -> T,
{
    records.into_iter().map(field).sum()
}

/// Mean of `field`, or `None` for an empty collection.
pub fn average_by<'a, R, I, F>(records: I, field: F) -> Option<f64>
where
    R: 'a,
    I: IntoIterator<Item = &'a R>,
    F: Fn(&R) -> f64,
{
    let (total, count) = records
        .into_iter()
        .fold((0.0_f64, 0_usize), |(total, count), record| {
            (total + field(record), count + 1)
        });
    (count > 0).then(|| total / count as f64)
}

/// `part / whole * 100`, or `None` when `whole` is zero.
pub fn percentage(part: f64, whole: f64) -> Option<f64> {
    (whole != 0.0).then(|| part / whole * 100.0)
}

/// Rounds to the nearest integer with ties going up, matching how the
/// dashboard rounds percentages and averages.
pub fn round_half_up(value: f64) -> i64 {
    (value + 0.5).floor() as i64
}

/// Rounds to one decimal place for display (ratings, success rates).
pub fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0 + 0.5).floor() / 10.0
}
