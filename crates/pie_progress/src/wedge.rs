use crate::color::ColorPair;
use crate::config::Configuration;
use crate::geometry::{Point, Rect, WedgeSpan, inner_radius, wedge_spans};
use crate::layer::{LineCap, LineJoin, ShapeLayer};
use crate::path::Path;
use crate::state::ProgressState;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PieGeometry {
    pub center: Point,
    pub radius: f64,
    pub inner_radius: f64,
    pub outer_radius: f64,
}

impl PieGeometry {
    /// `None` when `bounds` has no area.
    pub fn calculate(bounds: &Rect, line_width: f64, total: usize) -> Option<Self> {
        if bounds.is_empty() {
            return None;
        }

        let radius = bounds.height / 2.0;
        let inner_radius = inner_radius(total, line_width);

        Some(Self {
            center: Point::new(radius, radius),
            radius,
            inner_radius,
            outer_radius: radius - inner_radius,
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Wedge {
    pub index: usize,
    pub span: WedgeSpan,
    pub active: bool,
    pub colors: ColorPair,
    pub path: Path,
    pub offset: Point,
}

impl Wedge {
    pub fn into_shape_layer(self, bounds: &Rect, line_width: f64) -> ShapeLayer {
        ShapeLayer {
            fill: self.colors.fill,
            stroke: self.colors.stroke,
            line_width,
            line_cap: LineCap::Round,
            line_join: LineJoin::Round,
            path: self.path,
            frame: bounds.translate(self.offset.x, self.offset.y),
        }
    }
}

pub fn calculate_wedges(
    bounds: &Rect,
    configuration: &Configuration,
    state: &ProgressState,
) -> Option<Vec<Wedge>> {
    let total = state.total();
    let geometry = PieGeometry::calculate(bounds, configuration.line_width, total)?;

    let wedges = wedge_spans(configuration.start_angle, configuration.end_angle, total)
        .into_iter()
        .enumerate()
        .map(|(index, span)| {
            let path = if total == 1 {
                Path::full_span_arc(geometry.center, geometry.outer_radius, &span)
            } else {
                Path::pie_slice(geometry.center, geometry.outer_radius, &span)
            };
            let active = state.is_passed(index);
            let colors = if active {
                configuration.active_colors
            } else {
                configuration.inactive_colors
            };

            Wedge {
                index,
                span,
                active,
                colors,
                path,
                offset: span.offset(geometry.inner_radius),
            }
        })
        .collect();

    Some(wedges)
}
