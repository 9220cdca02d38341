//! Goal progress
//!
//! Shared by the dashboard goal gauges and the profile page.

/// Fraction of a goal reached, clamped to `0.0..=1.0`
///
/// Goals like a weight target are met by going *down*; for those, progress
/// is `target / current` once above the target.
///
/// # Examples
/// ```
/// use fitbee::logic::goals::goal_progress;
///
/// assert_eq!(goal_progress(3.0, 5.0, false), 0.6);
/// assert_eq!(goal_progress(12.0, 10.0, false), 1.0);
/// assert_eq!(goal_progress(80.0, 70.0, true), 0.875);
/// assert_eq!(goal_progress(68.0, 70.0, true), 1.0);
/// ```
pub fn goal_progress(current: f64, target: f64, lower_is_better: bool) -> f64 {
    if !(current.is_finite() && target.is_finite()) || target <= 0.0 || current < 0.0 {
        return 0.0;
    }
    let ratio = if lower_is_better {
        if current <= target {
            1.0
        } else {
            target / current
        }
    } else {
        current / target
    };
    ratio.clamp(0.0, 1.0)
}

/// Kilograms still to lose (or gain) to hit the goal weight
pub fn remaining_to_goal(weight_kg: f64, goal_weight_kg: f64) -> f64 {
    (weight_kg - goal_weight_kg).abs()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_inputs_are_zero() {
        assert_eq!(goal_progress(5.0, 0.0, false), 0.0);
        assert_eq!(goal_progress(-1.0, 10.0, false), 0.0);
        assert_eq!(goal_progress(f64::NAN, 10.0, true), 0.0);
    }

    #[test]
    fn test_sleep_goal() {
        assert_eq!(goal_progress(6.5, 8.0, false), 0.8125);
    }

    #[test]
    fn test_remaining_to_goal() {
        assert_eq!(remaining_to_goal(76.0, 70.0), 6.0);
        assert_eq!(remaining_to_goal(60.0, 65.0), 5.0);
    }
}
