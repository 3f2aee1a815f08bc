use crate::geometry::{Point, WedgeSpan, lerp};
use cairo::Context;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum PathElement {
    MoveTo(Point),
    LineTo(Point),
    /// Arc swept in increasing-angle direction.
    Arc {
        center: Point,
        radius: f64,
        start: f64,
        end: f64,
    },
    Close,
}

impl PathElement {
    fn lerp(&self, to: &Self, t: f64) -> Option<Self> {
        match (self, to) {
            (Self::MoveTo(a), Self::MoveTo(b)) => Some(Self::MoveTo(a.lerp(*b, t))),
            (Self::LineTo(a), Self::LineTo(b)) => Some(Self::LineTo(a.lerp(*b, t))),
            (
                Self::Arc {
                    center: c0,
                    radius: r0,
                    start: s0,
                    end: e0,
                },
                Self::Arc {
                    center: c1,
                    radius: r1,
                    start: s1,
                    end: e1,
                },
            ) => Some(Self::Arc {
                center: c0.lerp(*c1, t),
                radius: lerp(*r0, *r1, t),
                start: lerp(*s0, *s1, t),
                end: lerp(*e0, *e1, t),
            }),
            (Self::Close, Self::Close) => Some(Self::Close),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(transparent)]
pub struct Path {
    elements: Vec<PathElement>,
}

impl Path {
    pub fn new() -> Self {
        Self::default()
    }

    /// Slice of a pie: center, out along the arc and back. Fill closes it implicitly.
    pub fn pie_slice(center: Point, radius: f64, span: &WedgeSpan) -> Self {
        Self::new()
            .move_to(center)
            .arc(center, radius, span.start, span.end)
            .line_to(center)
    }

    /// A bare arc over the whole span. For a full circle this is a disc.
    pub fn full_span_arc(center: Point, radius: f64, span: &WedgeSpan) -> Self {
        Self::new().arc(center, radius, span.start, span.end)
    }

    pub fn move_to(mut self, point: Point) -> Self {
        self.elements.push(PathElement::MoveTo(point));
        self
    }

    pub fn line_to(mut self, point: Point) -> Self {
        self.elements.push(PathElement::LineTo(point));
        self
    }

    pub fn arc(mut self, center: Point, radius: f64, start: f64, end: f64) -> Self {
        self.elements.push(PathElement::Arc {
            center,
            radius,
            start,
            end,
        });
        self
    }

    pub fn close(mut self) -> Self {
        self.elements.push(PathElement::Close);
        self
    }

    pub fn elements(&self) -> &[PathElement] {
        &self.elements
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn has_radial_legs(&self) -> bool {
        self.elements
            .iter()
            .any(|e| matches!(e, PathElement::MoveTo(_) | PathElement::LineTo(_)))
    }

    /// `None` when the paths differ in structure.
    pub fn lerp(&self, to: &Self, t: f64) -> Option<Self> {
        if self.elements.len() != to.elements.len() {
            return None;
        }
        self.elements
            .iter()
            .zip(&to.elements)
            .map(|(a, b)| a.lerp(b, t))
            .collect::<Option<Vec<_>>>()
            .map(|elements| Self { elements })
    }

    pub fn trace(&self, cr: &Context) {
        cr.new_path();
        for element in &self.elements {
            match *element {
                PathElement::MoveTo(p) => cr.move_to(p.x, p.y),
                PathElement::LineTo(p) => cr.line_to(p.x, p.y),
                PathElement::Arc {
                    center,
                    radius,
                    start,
                    end,
                } => cr.arc(center.x, center.y, radius, start, end),
                PathElement::Close => cr.close_path(),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    fn span(start: f64, end: f64) -> WedgeSpan {
        WedgeSpan { start, end }
    }

    #[test]
    fn test_pie_slice_shape() {
        let c = Point::new(50.0, 50.0);
        let path = Path::pie_slice(c, 20.0, &span(0.0, PI / 2.0));

        assert_eq!(
            path.elements(),
            &[
                PathElement::MoveTo(c),
                PathElement::Arc {
                    center: c,
                    radius: 20.0,
                    start: 0.0,
                    end: PI / 2.0
                },
                PathElement::LineTo(c),
            ]
        );
        assert!(path.has_radial_legs());
    }

    #[test]
    fn test_full_span_arc_has_no_legs() {
        let path = Path::full_span_arc(Point::new(5.0, 5.0), 5.0, &span(0.0, 2.0 * PI));
        assert_eq!(path.elements().len(), 1);
        assert!(!path.has_radial_legs());
    }

    #[test]
    fn test_lerp_same_structure() {
        let c = Point::new(10.0, 10.0);
        let a = Path::pie_slice(c, 10.0, &span(0.0, 1.0));
        let b = Path::pie_slice(c, 20.0, &span(1.0, 3.0));

        let mid = a.lerp(&b, 0.5).unwrap();
        match mid.elements()[1] {
            PathElement::Arc {
                radius, start, end, ..
            } => {
                assert_eq!(radius, 15.0);
                assert_eq!(start, 0.5);
                assert_eq!(end, 2.0);
            }
            other => panic!("unexpected element {other:?}"),
        }
        assert_eq!(a.lerp(&b, 1.0).unwrap(), b);
    }

    #[test]
    fn test_lerp_different_structure() {
        let c = Point::new(10.0, 10.0);
        let slice = Path::pie_slice(c, 10.0, &span(0.0, 1.0));
        let disc = Path::full_span_arc(c, 10.0, &span(0.0, 2.0 * PI));
        assert!(slice.lerp(&disc, 0.5).is_none());
        assert!(Path::new().move_to(c).lerp(&Path::new().line_to(c), 0.5).is_none());
    }

    #[test]
    fn test_serializes_elements() {
        let path = Path::new().move_to(Point::new(1.0, 2.0)).close();
        let json = serde_json::to_value(&path).unwrap();
        assert_eq!(json[0]["op"], "move_to");
        assert_eq!(json[1]["op"], "close");
    }
}
