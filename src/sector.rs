//! Builders for pie-slice and ring-slice contours.
//!
//! All builders append to a caller-owned [`PathSink`] and never emit a
//! partial contour: either a complete closed shape is appended, or
//! nothing at all.

#[allow(unused_imports)]
use vek::num_traits::real::Real;

use crate::angles::arc_length_to_angle;
use crate::angles::deg_to_rad;
use crate::angles::FULL_ANGLE;
use crate::angles::RIGHT_ANGLE;
use crate::angles::STRAIGHT_ANGLE;
use crate::path::circle_bounds;
use crate::path::Direction;
use crate::path::Float;
use crate::path::PathSink;

/// Appends the specified arc of a circle to the sink.
///
/// With `force_move` set, the arc starts a new subpath; otherwise the
/// sink connects it to the current point.
pub fn arc_to<S: PathSink>(
    sink: &mut S,
    cx: Float,
    cy: Float,
    radius: Float,
    start_angle: Float,
    sweep_angle: Float,
    force_move: bool,
) {
    sink.arc_to(
        circle_bounds(cx, cy, radius),
        start_angle,
        sweep_angle,
        force_move,
    );
}

/// Appends a closed circle sector (pie slice) contour to the sink.
///
/// `inset` is a linear distance by which both radial edges are pulled
/// inward, leaving a gap between adjacent sectors. A sweep of 360° or
/// more appends a plain full circle instead; a sweep too narrow to host
/// the inset appends nothing.
pub fn add_circle_sector<S: PathSink>(
    sink: &mut S,
    cx: Float,
    cy: Float,
    radius: Float,
    start_angle: Float,
    sweep_angle: Float,
    inset: Float,
) {
    if sweep_angle >= FULL_ANGLE {
        sink.add_circle(cx, cy, radius, Direction::CounterClockwise);
        return;
    }

    let start_angle_rad = deg_to_rad(start_angle);
    let sweep_angle_rad = deg_to_rad(sweep_angle);

    let angular_inset = arc_length_to_angle(inset, radius);

    if sweep_angle < 2.0 * angular_inset {
        log::debug!(
            "sector sweep {}° cannot host an inset of {}° per edge; skipping",
            sweep_angle,
            angular_inset,
        );
        return;
    }

    // perpendicular offset along the bisector keeping the inset edges
    // at distance `inset` from the original radii
    let center_inset = inset / (sweep_angle_rad / 2.0).sin();

    arc_to(
        sink,
        cx,
        cy,
        radius,
        start_angle + angular_inset,
        sweep_angle - 2.0 * angular_inset,
        true,
    );

    if sweep_angle > STRAIGHT_ANGLE && inset > 0.0 {
        // reflex sweep: the inset edges meet behind the origin, round
        // the concave corner with a small arc of radius `inset`
        arc_to(
            sink,
            cx,
            cy,
            inset,
            start_angle + sweep_angle - RIGHT_ANGLE,
            STRAIGHT_ANGLE - sweep_angle,
            false,
        );
    } else {
        let mid = start_angle_rad + sweep_angle_rad / 2.0;
        sink.line_to(
            cx + center_inset * mid.cos(),
            cy + center_inset * mid.sin(),
        );
    }

    sink.close();
}

/// Appends a closed ring sector (annulus slice) contour to the sink.
///
/// `thickness` is the difference between the outer and inner radii and
/// must stay below `radius` for a sensible shape; this is not checked.
pub fn add_ring_sector<S: PathSink>(
    sink: &mut S,
    cx: Float,
    cy: Float,
    radius: Float,
    start_angle: Float,
    sweep_angle: Float,
    thickness: Float,
    inset: Float,
) {
    let outer_angular_inset = arc_length_to_angle(inset, radius);
    let inner_angular_inset = arc_length_to_angle(inset, radius - thickness);

    arc_to(
        sink,
        cx,
        cy,
        radius,
        start_angle + outer_angular_inset,
        sweep_angle - 2.0 * outer_angular_inset,
        true,
    );

    // return traversal along the inner radius, swept backwards
    arc_to(
        sink,
        cx,
        cy,
        radius - thickness,
        start_angle + sweep_angle - inner_angular_inset,
        2.0 * inner_angular_inset - sweep_angle,
        false,
    );

    sink.close();
}
