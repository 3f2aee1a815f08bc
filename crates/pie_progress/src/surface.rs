use crate::layer::ShapeLayer;
use std::time::Duration;

/// Between `begin_transaction` and `commit_transaction` a surface animates
/// property changes itself; outside a transaction they apply immediately.
pub trait DrawingSurface {
    type Layer;

    fn create_layer(&mut self) -> Self::Layer;

    fn remove_layer(&mut self, layer: Self::Layer);

    fn apply(&mut self, layer: &Self::Layer, command: &ShapeLayer);

    fn begin_transaction(&mut self, transaction: &Transaction);

    fn commit_transaction(&mut self);

    fn flush(&mut self) {}
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum TimingFunction {
    Linear,
    #[default]
    EaseInEaseOut,
}

impl TimingFunction {
    fn control_points(&self) -> (f64, f64, f64, f64) {
        match self {
            Self::Linear => (0.0, 0.0, 1.0, 1.0),
            Self::EaseInEaseOut => (0.42, 0.0, 0.58, 1.0),
        }
    }

    pub fn progress(&self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        if matches!(self, Self::Linear) || t == 0.0 || t == 1.0 {
            return t;
        }

        let (x1, y1, x2, y2) = self.control_points();
        // x(s) is monotonic for control x within [0, 1]; bisect for s
        let (mut lo, mut hi) = (0.0, 1.0);
        for _ in 0..48 {
            let mid = (lo + hi) / 2.0;
            if bezier(x1, x2, mid) < t {
                lo = mid;
            } else {
                hi = mid;
            }
        }
        bezier(y1, y2, (lo + hi) / 2.0)
    }
}

fn bezier(p1: f64, p2: f64, s: f64) -> f64 {
    let inv = 1.0 - s;
    3.0 * inv * inv * s * p1 + 3.0 * inv * s * s * p2 + s * s * s
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transaction {
    pub duration: Duration,
    pub timing: TimingFunction,
}

impl Transaction {
    pub fn ease_in_ease_out(duration: Duration) -> Self {
        Self {
            duration,
            timing: TimingFunction::EaseInEaseOut,
        }
    }

    pub fn progress(&self, elapsed: Duration) -> f64 {
        if self.duration.is_zero() {
            return 1.0;
        }
        self.timing
            .progress(elapsed.as_secs_f64() / self.duration.as_secs_f64())
    }
}
