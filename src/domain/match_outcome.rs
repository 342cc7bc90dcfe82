//! Match outcomes and the consecutive-loss streak evaluator.

/// Outcome of a single match from the watched player's perspective.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchOutcome {
    /// Whether the watched player's team won.
    pub win: bool,
}

impl MatchOutcome {
    /// Outcome of a won match.
    #[must_use]
    pub const fn win() -> Self {
        Self { win: true }
    }

    /// Outcome of a lost match.
    #[must_use]
    pub const fn loss() -> Self {
        Self { win: false }
    }
}

/// Count consecutive losses from the newest match.
///
/// `outcomes` must be ordered newest-first. Counting stops at the first
/// win, which is itself not counted. With no win in the window, the full
/// window length is reported; the bounded lookback can therefore
/// under-report a longer true streak. That approximation is deliberate:
/// it matches the observable alert timing of a fixed-depth history query
/// and must not be "fixed" with an unbounded scan.
#[must_use]
pub fn loss_streak(outcomes: &[MatchOutcome]) -> usize {
    outcomes.iter().take_while(|outcome| !outcome.win).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn outcomes(pattern: &str) -> Vec<MatchOutcome> {
        // 'L' = loss, 'W' = win, newest first.
        pattern
            .chars()
            .map(|c| match c {
                'W' => MatchOutcome::win(),
                'L' => MatchOutcome::loss(),
                other => panic!("bad pattern char {other}"),
            })
            .collect()
    }

    #[test]
    fn test_empty_history_has_no_streak() {
        assert_eq!(loss_streak(&[]), 0);
    }

    #[test]
    fn test_win_first_means_zero() {
        assert_eq!(loss_streak(&outcomes("WLLL")), 0);
    }

    #[test]
    fn test_counts_until_first_win() {
        assert_eq!(loss_streak(&outcomes("LLLWL")), 3);
        assert_eq!(loss_streak(&outcomes("LWLLLL")), 1);
    }

    #[test]
    fn test_win_is_not_counted() {
        assert_eq!(loss_streak(&outcomes("LLW")), 2);
    }

    #[test]
    fn test_all_losses_reports_window_length() {
        assert_eq!(loss_streak(&outcomes("LLLLLLLLLL")), 10);
    }

    #[test]
    fn test_single_outcomes() {
        assert_eq!(loss_streak(&outcomes("L")), 1);
        assert_eq!(loss_streak(&outcomes("W")), 0);
    }
}
