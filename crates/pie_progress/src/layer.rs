use crate::color::Color;
use crate::geometry::{Rect, lerp};
use crate::path::Path;
use serde::Serialize;
use strum::{Display as StrumDisplay, EnumString};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, EnumString, StrumDisplay)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum LineCap {
    Butt,
    #[default]
    Round,
    Square,
}

impl From<LineCap> for cairo::LineCap {
    fn from(cap: LineCap) -> Self {
        match cap {
            LineCap::Butt => cairo::LineCap::Butt,
            LineCap::Round => cairo::LineCap::Round,
            LineCap::Square => cairo::LineCap::Square,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, EnumString, StrumDisplay)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum LineJoin {
    Miter,
    #[default]
    Round,
    Bevel,
}

impl From<LineJoin> for cairo::LineJoin {
    fn from(join: LineJoin) -> Self {
        match join {
            LineJoin::Miter => cairo::LineJoin::Miter,
            LineJoin::Round => cairo::LineJoin::Round,
            LineJoin::Bevel => cairo::LineJoin::Bevel,
        }
    }
}

/// `path` is in the primitive's own coordinates; `frame` places it in the parent.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShapeLayer {
    pub fill: Color,
    pub stroke: Color,
    pub line_width: f64,
    pub line_cap: LineCap,
    pub line_join: LineJoin,
    pub path: Path,
    pub frame: Rect,
}

impl ShapeLayer {
    pub fn interpolate(&self, to: &Self, t: f64) -> Self {
        Self {
            fill: self.fill.mix(to.fill, t),
            stroke: self.stroke.mix(to.stroke, t),
            line_width: lerp(self.line_width, to.line_width, t),
            line_cap: to.line_cap,
            line_join: to.line_join,
            path: self.path.lerp(&to.path, t).unwrap_or_else(|| to.path.clone()),
            frame: self.frame.lerp(&to.frame, t),
        }
    }
}
