#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ProgressState {
    passed: usize,
    total: usize,
}

impl ProgressState {
    /// Clamps the request: at least one wedge, and `passed` within `0..=total`.
    pub fn new(passed: i64, total: i64) -> Self {
        let total = total.max(1);
        let passed = passed.clamp(0, total);
        Self {
            passed: passed as usize,
            total: total as usize,
        }
    }

    pub fn passed(&self) -> usize {
        self.passed
    }

    pub fn total(&self) -> usize {
        self.total
    }

    pub fn is_passed(&self, index: usize) -> bool {
        index < self.passed
    }

    pub fn is_complete(&self) -> bool {
        self.passed == self.total
    }

    pub fn fraction(&self) -> f64 {
        self.passed as f64 / self.total as f64
    }

    /// Moves `passed` by `delta`, keeping the total.
    pub fn step(&self, delta: i64) -> Self {
        Self::new((self.passed as i64).saturating_add(delta), self.total as i64)
    }

    pub fn resize(&self, delta: i64) -> Self {
        Self::new(self.passed as i64, (self.total as i64).saturating_add(delta))
    }
}

impl Default for ProgressState {
    fn default() -> Self {
        Self::new(0, 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamping() {
        let cases = vec![
            ((0, 0), (0, 1)),
            ((5, -3), (1, 1)),
            ((-2, 4), (0, 4)),
            ((3, 5), (3, 5)),
            ((9, 5), (5, 5)),
            ((i64::MIN, i64::MIN), (0, 1)),
        ];

        for ((passed, total), (want_passed, want_total)) in cases {
            let state = ProgressState::new(passed, total);
            assert_eq!(state.total(), want_total, "({passed}, {total})");
            assert_eq!(state.passed(), want_passed, "({passed}, {total})");
        }
    }

    #[test]
    fn test_clamping_property() {
        for total in -3..20 {
            for passed in -5..25 {
                let state = ProgressState::new(passed, total);
                let stored_total = total.max(1);
                assert_eq!(state.total() as i64, stored_total);
                assert_eq!(state.passed() as i64, passed.clamp(0, stored_total));
            }
        }
    }

    #[test]
    fn test_default_is_single_empty_wedge() {
        let state = ProgressState::default();
        assert_eq!((state.passed(), state.total()), (0, 1));
        assert_eq!(state.fraction(), 0.0);
    }

    #[test]
    fn test_step() {
        let state = ProgressState::new(2, 4);
        assert_eq!(state.step(1).passed(), 3);
        assert_eq!(state.step(10).passed(), 4);
        assert!(state.step(10).is_complete());
        assert_eq!(state.step(-5).passed(), 0);

        assert_eq!(ProgressState::new(3, 5).step(i64::MAX).passed(), 5);
        assert_eq!(ProgressState::new(3, 5).step(i64::MIN).passed(), 0);
    }

    #[test]
    fn test_resize() {
        let state = ProgressState::new(3, 5);
        assert_eq!(state.resize(2), ProgressState::new(3, 7));
        assert_eq!(state.resize(-3), ProgressState::new(2, 2));
        assert_eq!(state.resize(-10), ProgressState::new(1, 1));
        assert_eq!(state.resize(i64::MIN), ProgressState::new(1, 1));
        assert_eq!(state.resize(i64::MAX).total() as i64, i64::MAX);
    }
}
