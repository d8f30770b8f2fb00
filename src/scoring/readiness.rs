// src/scoring/readiness.rs

/// Weighted composite of the three progress signals.
///
/// Inputs are 0-100; callers pass 0 for a signal whose underlying collection
/// is empty (no skills tracked, no completed attempts, no resume), so the
/// index degrades to 0 rather than dividing by zero upstream.
pub fn compute_readiness(skill_avg: f64, mock_avg: f64, resume_score: i64) -> i64 {
    (skill_avg * 0.4 + mock_avg * 0.4 + resume_score as f64 * 0.2).round() as i64
}

/// Combined solved count across both external platforms. Each side is
/// already 0 when its fetch failed, so the sum is always well-defined.
pub fn total_aggregate(leetcode_solved: i64, gfg_solved: i64) -> i64 {
    leetcode_solved + gfg_solved
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weighted_composite_example() {
        // 80*0.4 + 60*0.4 + 50*0.2 = 32 + 24 + 10 = 66
        assert_eq!(compute_readiness(80.0, 60.0, 50), 66);
    }

    #[test]
    fn zero_state_yields_zero() {
        assert_eq!(compute_readiness(0.0, 0.0, 0), 0);
    }

    #[test]
    fn rounds_rather_than_truncates() {
        // 73*0.4 + 61*0.4 + 52*0.2 = 29.2 + 24.4 + 10.4 = 64.0 -> 64
        assert_eq!(compute_readiness(73.0, 61.0, 52), 64);
        // 81*0.4 + 62*0.4 + 54*0.2 = 32.4 + 24.8 + 10.8 = 68.0 -> 68
        // and a genuinely fractional case:
        // 85*0.4 + 70*0.4 + 49*0.2 = 34 + 28 + 9.8 = 71.8 -> 72
        assert_eq!(compute_readiness(85.0, 70.0, 49), 72);
    }

    #[test]
    fn full_marks_cap_at_100() {
        assert_eq!(compute_readiness(100.0, 100.0, 100), 100);
    }

    #[test]
    fn aggregate_is_a_simple_sum() {
        assert_eq!(total_aggregate(320, 180), 500);
        assert_eq!(total_aggregate(0, 42), 42);
        assert_eq!(total_aggregate(0, 0), 0);
    }
}
