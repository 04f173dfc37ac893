use alloc::vec::Vec;

#[allow(unused_imports)]
use vek::num_traits::real::Real;

use crate::angles::deg_to_rad;

pub type Float = f32;
pub type Couple = vek::vec::repr_c::vec2::Vec2<Float>;

/// Axis-aligned box, used as arc bounds.
pub type Box2 = vek::geom::repr_c::Aabr<Float>;

/// Winding direction of a full circle contour.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Direction {
    Clockwise,
    CounterClockwise,
}

/// The axis-aligned bounding square of a circle.
pub fn circle_bounds(cx: Float, cy: Float, radius: Float) -> Box2 {
    oval_bounds(cx, cy, radius, radius)
}

/// The axis-aligned bounding box of an oval with the given semi-axes.
pub fn oval_bounds(cx: Float, cy: Float, rx: Float, ry: Float) -> Box2 {
    Box2 {
        min: Couple::new(cx - rx, cy - ry),
        max: Couple::new(cx + rx, cy + ry),
    }
}

/// Rounds each corner coordinate of a box to the nearest integer.
pub fn rounded_bounds(bounds: Box2) -> vek::geom::repr_c::Aabr<i32> {
    let round = |c: Couple| vek::vec::repr_c::vec2::Vec2::new(c.x.round() as i32, c.y.round() as i32);
    vek::geom::repr_c::Aabr {
        min: round(bounds.min),
        max: round(bounds.max),
    }
}

/// An append-only sequence of path construction commands.
///
/// Angles are measured in degrees, with 0° on the +x axis and positive
/// sweeps going towards +y. Command order is significant and must be
/// preserved exactly as issued.
pub trait PathSink {
    /// Starts a new subpath at the given point.
    fn move_to(&mut self, x: Float, y: Float);

    /// Appends a line segment from the current point.
    fn line_to(&mut self, x: Float, y: Float);

    /// Appends an arc of the oval inscribed in `bounds`.
    ///
    /// With `force_move` set, the arc always starts a new subpath;
    /// otherwise it connects to the current point.
    fn arc_to(&mut self, bounds: Box2, start_angle: Float, sweep_angle: Float, force_move: bool);

    /// Appends a full circle as its own closed contour.
    fn add_circle(&mut self, cx: Float, cy: Float, radius: Float, direction: Direction);

    /// Closes the current subpath.
    fn close(&mut self);

    /// Discards all commands.
    fn reset(&mut self);
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum PathCommand {
    MoveTo(Couple),
    LineTo(Couple),
    Arc {
        bounds: Box2,
        start_angle: Float,
        sweep_angle: Float,
        force_move: bool,
    },
    Circle {
        center: Couple,
        radius: Float,
        direction: Direction,
    },
    Close,
}

/// A recorded path: a growable list of [`PathCommand`]s.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Path {
    commands: Vec<PathCommand>,
}

impl Path {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn commands(&self) -> &[PathCommand] {
        &self.commands
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Resets the path, runs `init` to rebuild it, then optionally
    /// closes the last subpath.
    pub fn rebuild<F: FnOnce(&mut Self)>(&mut self, close: bool, init: F) {
        self.reset();
        init(self);
        if close {
            self.close();
        }
    }
}

impl PathSink for Path {
    fn move_to(&mut self, x: Float, y: Float) {
        self.commands.push(PathCommand::MoveTo(Couple::new(x, y)));
    }

    fn line_to(&mut self, x: Float, y: Float) {
        self.commands.push(PathCommand::LineTo(Couple::new(x, y)));
    }

    fn arc_to(&mut self, bounds: Box2, start_angle: Float, sweep_angle: Float, force_move: bool) {
        self.commands.push(PathCommand::Arc {
            bounds,
            start_angle,
            sweep_angle,
            force_move,
        });
    }

    fn add_circle(&mut self, cx: Float, cy: Float, radius: Float, direction: Direction) {
        self.commands.push(PathCommand::Circle {
            center: Couple::new(cx, cy),
            radius,
            direction,
        });
    }

    fn close(&mut self) {
        self.commands.push(PathCommand::Close);
    }

    fn reset(&mut self) {
        self.commands.clear();
    }
}

/// The translation placing a point at polar coordinates
/// `(distance, angle_deg)` relative to the origin.
pub fn radial_offset(distance: Float, angle_deg: Float) -> Couple {
    let (sin, cos) = deg_to_rad(angle_deg).sin_cos();
    Couple::new(distance * cos, distance * sin)
}

/// Sink adapter shifting every command by a fixed offset.
pub struct TranslatedSink<'a, S: PathSink> {
    inner: &'a mut S,
    offset: Couple,
}

impl<'a, S: PathSink> TranslatedSink<'a, S> {
    pub fn new(inner: &'a mut S, offset: Couple) -> Self {
        Self { inner, offset }
    }

    /// Translates radially: by `distance` in the direction `angle_deg`.
    pub fn radial(inner: &'a mut S, distance: Float, angle_deg: Float) -> Self {
        Self::new(inner, radial_offset(distance, angle_deg))
    }
}

impl<S: PathSink> PathSink for TranslatedSink<'_, S> {
    fn move_to(&mut self, x: Float, y: Float) {
        self.inner.move_to(x + self.offset.x, y + self.offset.y);
    }

    fn line_to(&mut self, x: Float, y: Float) {
        self.inner.line_to(x + self.offset.x, y + self.offset.y);
    }

    fn arc_to(&mut self, bounds: Box2, start_angle: Float, sweep_angle: Float, force_move: bool) {
        let bounds = Box2 {
            min: bounds.min + self.offset,
            max: bounds.max + self.offset,
        };
        self.inner.arc_to(bounds, start_angle, sweep_angle, force_move);
    }

    fn add_circle(&mut self, cx: Float, cy: Float, radius: Float, direction: Direction) {
        self.inner.add_circle(cx + self.offset.x, cy + self.offset.y, radius, direction);
    }

    fn close(&mut self) {
        self.inner.close();
    }

    fn reset(&mut self) {
        self.inner.reset();
    }
}
