use serde::Serialize;

use crate::domain::PlayerStanding;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HistogramBucket {
    /// Human-readable range, e.g. `"1400-1450"`.
    pub label: String,
    pub lower: f64,
    pub upper: f64,
    pub count: usize,
}

/// Partition the observed finite-rating range into `bucket_count` equal-width
/// buckets. Records with `NaN` ratings are left out entirely, so bucket
/// counts always sum to the number of finite-rating records. An all-equal
/// rating collection collapses to a single bucket.
pub fn make_rating_histogram(
    players: &[PlayerStanding],
    bucket_count: usize,
) -> Vec<HistogramBucket> {
    let ratings: Vec<f64> = players
        .iter()
        .filter(|p| p.has_rating())
        .map(|p| p.rating)
        .collect();
    if ratings.is_empty() {
        return Vec::new();
    }

    let min = ratings.iter().copied().fold(f64::INFINITY, f64::min);
    let max = ratings.iter().copied().fold(f64::NEG_INFINITY, f64::max);

    if min == max {
        return vec![HistogramBucket {
            label: format!("{min:.0}"),
            lower: min,
            upper: max,
            count: ratings.len(),
        }];
    }

    let bucket_count = bucket_count.max(1);
    let width = (max - min) / bucket_count as f64;

    let mut buckets: Vec<HistogramBucket> = (0..bucket_count)
        .map(|i| {
            let lower = min + width * i as f64;
            let upper = if i == bucket_count - 1 {
                max
            } else {
                min + width * (i + 1) as f64
            };
            HistogramBucket {
                label: format!("{lower:.0}-{upper:.0}"),
                lower,
                upper,
                count: 0,
            }
        })
        .collect();

    for rating in ratings {
        let idx = (((rating - min) / width) as usize).min(bucket_count - 1);
        buckets[idx].count += 1;
    }

    buckets
}
