//! Scoring module - score, level and gravity rules
//!
//! One point per cleared line. The level is `score / 10 + 1`; every level
//! gained shortens the drop interval by a fixed step down to a floor.

use crate::types::{
    DROP_INTERVAL_STEP_MS, LINES_PER_LEVEL, MIN_DROP_INTERVAL_MS, STARTING_LEVEL,
};

/// Outcome of applying a line clear to the running totals
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScoreResult {
    pub score: u32,
    pub level: u32,
    pub drop_interval_ms: u32,
    /// Number of levels gained by this clear
    pub levels_gained: u32,
}

impl ScoreResult {
    pub fn leveled_up(&self) -> bool {
        self.levels_gained > 0
    }
}

/// Level reached at a given score
pub fn level_for_score(score: u32) -> u32 {
    score / LINES_PER_LEVEL + STARTING_LEVEL
}

/// Drop interval after one level-up
pub fn next_drop_interval(current_ms: u32) -> u32 {
    current_ms
        .saturating_sub(DROP_INTERVAL_STEP_MS)
        .max(MIN_DROP_INTERVAL_MS)
}

/// Add `lines` cleared lines to the totals.
///
/// The level only moves up; each level gained applies one interval step.
pub fn apply_line_clear(score: u32, level: u32, drop_interval_ms: u32, lines: u32) -> ScoreResult {
    let score = score.saturating_add(lines);
    let target = level_for_score(score);

    let mut result = ScoreResult {
        score,
        level,
        drop_interval_ms,
        levels_gained: 0,
    };
    while result.level < target {
        result.level += 1;
        result.levels_gained += 1;
        result.drop_interval_ms = next_drop_interval(result.drop_interval_ms);
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::INITIAL_DROP_INTERVAL_MS;

    #[test]
    fn test_level_for_score() {
        assert_eq!(level_for_score(0), 1);
        assert_eq!(level_for_score(9), 1);
        assert_eq!(level_for_score(10), 2);
        assert_eq!(level_for_score(25), 3);
    }

    #[test]
    fn test_next_drop_interval_floor() {
        assert_eq!(next_drop_interval(500), 450);
        assert_eq!(next_drop_interval(150), 100);
        assert_eq!(next_drop_interval(120), 100);
        assert_eq!(next_drop_interval(100), 100);
    }

    #[test]
    fn test_no_lines_changes_nothing() {
        let r = apply_line_clear(7, 1, INITIAL_DROP_INTERVAL_MS, 0);
        assert_eq!(
            r,
            ScoreResult {
                score: 7,
                level: 1,
                drop_interval_ms: 500,
                levels_gained: 0
            }
        );
        assert!(!r.leveled_up());
    }

    #[test]
    fn test_crossing_ten_levels_up() {
        let r = apply_line_clear(8, 1, 500, 3);
        assert_eq!(r.score, 11);
        assert_eq!(r.level, 2);
        assert_eq!(r.drop_interval_ms, 450);
        assert!(r.leveled_up());
    }

    #[test]
    fn test_level_never_decreases() {
        // A level above what the score implies is kept.
        let r = apply_line_clear(0, 5, 300, 1);
        assert_eq!(r.level, 5);
        assert_eq!(r.drop_interval_ms, 300);
    }

    #[test]
    fn test_interval_monotonic_across_many_clears() {
        let mut score = 0;
        let mut level = 1;
        let mut interval = INITIAL_DROP_INTERVAL_MS;
        for lines in [1, 4, 2, 3, 4, 4, 1, 2, 4, 4, 4, 4, 3, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4] {
            let r = apply_line_clear(score, level, interval, lines);
            assert!(r.drop_interval_ms <= interval);
            assert!(r.drop_interval_ms >= MIN_DROP_INTERVAL_MS);
            assert!(r.level >= level);
            assert_eq!(r.level, level_for_score(r.score));
            score = r.score;
            level = r.level;
            interval = r.drop_interval_ms;
        }
        assert_eq!(interval, MIN_DROP_INTERVAL_MS);
    }
}
