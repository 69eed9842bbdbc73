use crate::error::{RatingError, Result};
use crate::types::config::Weights;
use crate::types::stats::SecurityCheck;

/// Weighted mean of the checks named in `weights`, halved onto a 0-5 scale.
///
/// Checks scored as not applicable are left out of both the weighted sum and
/// the total weight. Checks absent from `weights` are ignored. The result is
/// `((sum + 1) / total) / 2` with each division truncating separately; prior
/// ratings were produced with exactly this order. Sums that leave the `i64`
/// range are reported as invalid input rather than wrapped.
pub fn aggregate(checks: &[SecurityCheck], weights: &Weights) -> Result<i64> {
    let mut weighted_sum: i64 = 0;
    let mut total_weight: i64 = 0;

    for (name, weight) in weights {
        let check = checks
            .iter()
            .find(|check| check.name == *name)
            .ok_or_else(|| RatingError::MissingCheck(name.clone()))?;
        if !check.is_applicable() {
            continue;
        }
        weighted_sum = check
            .score
            .checked_mul(*weight)
            .and_then(|product| weighted_sum.checked_add(product))
            .ok_or_else(|| overflow(format!("weighted sum overflows at check {name}")))?;
        total_weight = total_weight
            .checked_add(*weight)
            .ok_or_else(|| overflow(format!("total weight overflows at check {name}")))?;
    }

    if total_weight == 0 {
        return Err(RatingError::DivideByZero);
    }
    let rounded = weighted_sum
        .checked_add(1)
        .ok_or_else(|| overflow("weighted sum overflows".to_string()))?;
    let mean = rounded / total_weight;
    Ok(mean / 2)
}

fn overflow(reason: String) -> RatingError {
    RatingError::invalid_input("score_card", reason)
}
