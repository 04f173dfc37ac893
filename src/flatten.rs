//! Conversion of path commands into flat polylines, ready for filling.

use alloc::vec::Vec;

#[allow(unused_imports)]
use vek::num_traits::real::Real;

use vek::bezier::CubicBezier2;

use wizdraw::fill;
use wizdraw::push_cubic_bezier_segments;

use crate::angles::deg_to_rad;
use crate::angles::FULL_ANGLE;
use crate::angles::RIGHT_ANGLE;
use crate::path::Box2;
use crate::path::Couple;
use crate::path::Direction;
use crate::path::Float;
use crate::path::Path;
use crate::path::PathCommand;
use crate::path::PathSink;

/// Flattening tolerance matching the renderer defaults.
pub const DEFAULT_TOLERANCE: Float = 0.4;

/// A [`PathSink`] producing a flat polyline.
///
/// Arcs are split into quarter-turn chunks, approximated by cubic
/// bezier curves and flattened down to line segments.
pub struct FlatteningSink {
    points: Vec<Couple>,
    subpath_start: Option<Couple>,
    tolerance: Float,
}

impl FlatteningSink {
    pub fn new(tolerance: Float) -> Self {
        Self {
            points: Vec::new(),
            subpath_start: None,
            tolerance,
        }
    }

    pub fn points(&self) -> &[Couple] {
        &self.points
    }

    pub fn into_points(self) -> Vec<Couple> {
        self.points
    }

    /// Replays a recorded path into this sink.
    pub fn append_path(&mut self, path: &Path) {
        for command in path.commands() {
            match *command {
                PathCommand::MoveTo(p) => self.move_to(p.x, p.y),
                PathCommand::LineTo(p) => self.line_to(p.x, p.y),
                PathCommand::Arc {
                    bounds,
                    start_angle,
                    sweep_angle,
                    force_move,
                } => self.arc_to(bounds, start_angle, sweep_angle, force_move),
                PathCommand::Circle {
                    center,
                    radius,
                    direction,
                } => self.add_circle(center.x, center.y, radius, direction),
                PathCommand::Close => self.close(),
            }
        }
    }

    fn start_subpath(&mut self, point: Couple) {
        self.subpath_start = Some(point);
        self.points.push(point);
    }

    // one chunk of at most a quarter turn, angles in degrees
    fn push_arc_chunk(&mut self, oval: &OvalGeometry, start: Float, sweep: Float) {
        let k = (4.0 / 3.0) * (deg_to_rad(sweep) / 4.0).tan();
        let (p0, t0) = oval.point_and_tangent(start);
        let (p3, t3) = oval.point_and_tangent(start + sweep);
        let curve = CubicBezier2 {
            start: p0,
            ctrl0: p0 + t0 * k,
            ctrl1: p3 - t3 * k,
            end: p3,
        };
        push_cubic_bezier_segments::<8>(&curve, self.tolerance, &mut self.points);
    }

    fn push_arc(&mut self, oval: &OvalGeometry, start_angle: Float, sweep_angle: Float) {
        let mut start = start_angle;
        let mut sweep = sweep_angle;
        while sweep.abs() > RIGHT_ANGLE {
            let chunk = sweep.signum() * RIGHT_ANGLE;
            self.push_arc_chunk(oval, start, chunk);
            start += chunk;
            sweep -= chunk;
        }
        self.push_arc_chunk(oval, start, sweep);
    }
}

impl PathSink for FlatteningSink {
    fn move_to(&mut self, x: Float, y: Float) {
        self.start_subpath(Couple::new(x, y));
    }

    fn line_to(&mut self, x: Float, y: Float) {
        let point = Couple::new(x, y);
        if self.points.is_empty() {
            self.start_subpath(point);
        } else {
            self.points.push(point);
        }
    }

    fn arc_to(&mut self, bounds: Box2, start_angle: Float, sweep_angle: Float, force_move: bool) {
        let oval = OvalGeometry::from_bounds(bounds);
        let (start, _) = oval.point_and_tangent(start_angle);
        if force_move || self.points.is_empty() {
            self.start_subpath(start);
        } else {
            self.points.push(start);
        }
        self.push_arc(&oval, start_angle, sweep_angle);
    }

    fn add_circle(&mut self, cx: Float, cy: Float, radius: Float, direction: Direction) {
        let oval = OvalGeometry {
            center: Couple::new(cx, cy),
            radii: Couple::new(radius, radius),
        };
        let sweep = match direction {
            Direction::Clockwise => FULL_ANGLE,
            Direction::CounterClockwise => -FULL_ANGLE,
        };
        let (start, _) = oval.point_and_tangent(0.0);
        self.start_subpath(start);
        self.push_arc(&oval, 0.0, sweep);
        self.close();
    }

    fn close(&mut self) {
        if let Some(start) = self.subpath_start {
            self.points.push(start);
        }
    }

    fn reset(&mut self) {
        self.points.clear();
        self.subpath_start = None;
    }
}

struct OvalGeometry {
    center: Couple,
    radii: Couple,
}

impl OvalGeometry {
    fn from_bounds(bounds: Box2) -> Self {
        Self {
            center: (bounds.min + bounds.max) / 2.0,
            radii: (bounds.max - bounds.min) / 2.0,
        }
    }

    // position on the oval at `angle` degrees, and the unit-sweep
    // tangent direction there
    fn point_and_tangent(&self, angle: Float) -> (Couple, Couple) {
        let (sin, cos) = deg_to_rad(angle).sin_cos();
        let point = self.center + Couple::new(self.radii.x * cos, self.radii.y * sin);
        let tangent = Couple::new(-self.radii.x * sin, self.radii.y * cos);
        (point, tangent)
    }
}

/// Fills the polygon described by `points` into an anti-aliased
/// 8-bit coverage mask of `width` × `height` pixels.
pub fn fill_mask(points: &[Couple], mask: &mut [u8], width: usize, height: usize) {
    let mask_size = vek::vec::repr_c::vec2::Vec2::new(width, height);
    fill::<4, 16>(points, mask, mask_size);
}
