use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn lerp(self, to: Self, t: f64) -> Self {
        Self::new(lerp(self.x, to.x, t), lerp(self.y, to.y, t))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Rect {
    pub origin: Point,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            origin: Point::new(x, y),
            width,
            height,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }

    pub fn translate(&self, dx: f64, dy: f64) -> Self {
        Self {
            origin: Point::new(self.origin.x + dx, self.origin.y + dy),
            ..*self
        }
    }

    pub fn lerp(&self, to: &Self, t: f64) -> Self {
        Self {
            origin: self.origin.lerp(to.origin, t),
            width: lerp(self.width, to.width, t),
            height: lerp(self.height, to.height, t),
        }
    }
}

pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

/// Wedges 1..=3 each push the ring out a full line width, 4..=10 half, the rest a quarter.
pub fn inner_radius(total: usize, line_width: f64) -> f64 {
    let steps = total.saturating_sub(1);
    let full = steps.min(3);
    let half = steps.saturating_sub(3).min(7);
    let quarter = steps.saturating_sub(10);
    full as f64 * line_width
        + half as f64 * line_width / 2.0
        + quarter as f64 * line_width / 4.0
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct WedgeSpan {
    pub start: f64,
    pub end: f64,
}

impl WedgeSpan {
    pub fn mid(&self) -> f64 {
        (self.start + self.end) / 2.0
    }

    pub fn sweep(&self) -> f64 {
        self.end - self.start
    }

    pub fn offset(&self, distance: f64) -> Point {
        let mid = self.mid();
        Point::new(distance * mid.cos(), distance * mid.sin())
    }
}

pub fn wedge_spans(start_angle: f64, end_angle: f64, total: usize) -> Vec<WedgeSpan> {
    let step = (end_angle - start_angle) / total as f64;
    (0..total)
        .map(|index| {
            let start = start_angle + index as f64 * step;
            WedgeSpan {
                start,
                end: start + step,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    const EPS: f64 = 1e-9;

    #[test]
    fn test_inner_radius_bands() {
        let lw = 8.0;
        assert_eq!(inner_radius(1, lw), 0.0);
        assert_eq!(inner_radius(2, lw), 8.0);
        assert_eq!(inner_radius(4, lw), 24.0);
        // indices 4..=10 add half
        assert_eq!(inner_radius(5, lw), 28.0);
        assert_eq!(inner_radius(11, lw), 24.0 + 7.0 * 4.0);
        // indices 11+ add a quarter
        assert_eq!(inner_radius(12, lw), 52.0 + 2.0);
        assert_eq!(inner_radius(20, lw), 52.0 + 9.0 * 2.0);
    }

    #[test]
    fn test_inner_radius_is_non_decreasing() {
        let lw = 3.5;
        let steps: Vec<f64> = (1..40)
            .map(|t| inner_radius(t + 1, lw) - inner_radius(t, lw))
            .collect();

        for (i, step) in steps.iter().enumerate() {
            let index = i + 1;
            let expected = match index {
                1..=3 => lw,
                4..=10 => lw / 2.0,
                _ => lw / 4.0,
            };
            assert!((step - expected).abs() < EPS, "index {index}: {step}");
        }
    }

    #[test]
    fn test_inner_radius_zero_total() {
        assert_eq!(inner_radius(0, 10.0), 0.0);
    }

    #[test]
    fn test_inner_radius_matches_per_wedge_sum() {
        let lw = 6.0;
        for total in 0..100 {
            let summed: f64 = (1..total)
                .map(|index| match index {
                    1..=3 => lw,
                    4..=10 => lw / 2.0,
                    _ => lw / 4.0,
                })
                .sum();
            assert!((inner_radius(total, lw) - summed).abs() < EPS, "total {total}");
        }
    }

    #[test]
    fn test_inner_radius_huge_total() {
        let radius = inner_radius(usize::MAX, 4.0);
        assert!(radius.is_finite());
        assert!(radius > inner_radius(1_000_000, 4.0));
    }

    #[test]
    fn test_wedge_spans_tile_the_sweep() {
        for total in [2, 3, 7, 12, 64] {
            let (start, end) = (-PI / 2.0, PI);
            let spans = wedge_spans(start, end, total);
            assert_eq!(spans.len(), total);

            let sum: f64 = spans.iter().map(WedgeSpan::sweep).sum();
            assert!((sum - (end - start)).abs() < EPS);

            let step = (end - start) / total as f64;
            for (i, span) in spans.iter().enumerate() {
                assert!((span.start - (start + i as f64 * step)).abs() < EPS);
                assert!((span.end - (start + (i + 1) as f64 * step)).abs() < EPS);
            }
            for pair in spans.windows(2) {
                assert_eq!(pair[0].end, pair[1].start);
            }
        }
    }

    #[test]
    fn test_span_offset_follows_mid_angle() {
        let span = WedgeSpan {
            start: 0.0,
            end: PI / 2.0,
        };
        let offset = span.offset(10.0);
        assert!((offset.x - 10.0 * (PI / 4.0).cos()).abs() < EPS);
        assert!((offset.y - 10.0 * (PI / 4.0).sin()).abs() < EPS);
    }

    #[test]
    fn test_rect_empty_and_translate() {
        assert!(Rect::new(0.0, 0.0, 0.0, 10.0).is_empty());
        assert!(Rect::new(0.0, 0.0, 10.0, -1.0).is_empty());
        assert!(!Rect::new(0.0, 0.0, 1.0, 1.0).is_empty());

        let moved = Rect::new(1.0, 2.0, 5.0, 5.0).translate(3.0, -2.0);
        assert_eq!(moved, Rect::new(4.0, 0.0, 5.0, 5.0));
    }
}
