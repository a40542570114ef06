//! Partial-circle geometry for fan and ring markers.
//!
//! All angles handed to callers are in degrees; internally everything runs in
//! radians on a y-down surface, so a positive sweep is clockwise on screen.
//! Every shape starts at 12 o'clock.
//!
//! The rotation pivot of an angle-limited shape is the centre of the bounding
//! box of what is actually drawn, not the centre of the full circle. Rotating
//! a quarter fan therefore spins it in place instead of swinging it around the
//! circle it was cut from.

mod path;

pub use path::{arc_points, polar, Path, PathBuilder, PathCmd, Polyline, Winding, ARC_STEP};

use crate::error::Error;
use macroquad::prelude::*;
use std::f32::consts::{FRAC_PI_2, PI, TAU};

/// Sweep meaning "whole circle, no angular clipping".
pub const FULL_SWEEP_DEG: f32 = 360.0;

/// Start angle of every sector: 12 o'clock.
pub const START_ANGLE: f32 = -FRAC_PI_2;

/// Axis directions and the unit extreme point in each.
const CARDINALS: [(f32, Vec2); 4] = [
    (0.0, Vec2::new(1.0, 0.0)),
    (FRAC_PI_2, Vec2::new(0.0, 1.0)),
    (PI, Vec2::new(-1.0, 0.0)),
    (3.0 * FRAC_PI_2, Vec2::new(0.0, -1.0)),
];

/// How an image is masked.
#[derive(Debug, Clone, PartialEq)]
pub enum Clip {
    /// Draw the full image
    Unclipped,
    /// Keep only the inside of the path
    Path(Path),
}

/// Reject sweeps outside `[0, 360]`.
pub fn validate_sweep(sweep_deg: f32) -> Result<f32, Error> {
    if sweep_deg.is_finite() && (0.0..=FULL_SWEEP_DEG).contains(&sweep_deg) {
        Ok(sweep_deg)
    } else {
        Err(Error::InvalidSweep(sweep_deg))
    }
}

fn end_angle(sweep_deg: f32) -> f32 {
    START_ANGLE + sweep_deg.to_radians()
}

/// Wrap-aware test of whether `angle` lies on the arc `start..=end`.
pub fn arc_contains(start: f32, end: f32, angle: f32) -> bool {
    let start = start.rem_euclid(TAU);
    let mut end = end.rem_euclid(TAU);
    if end < start {
        end += TAU;
    }
    let a = angle.rem_euclid(TAU);
    let check = if a < start { a + TAU } else { a };
    check >= start && check <= end
}

/// Pie-slice clip of `sweep_deg` around the local origin.
///
/// The path runs origin → arc start → clockwise arc → origin. A full sweep
/// needs no clip at all.
pub fn sector_clip(sweep_deg: f32, outer_radius: f32) -> Result<Clip, Error> {
    let sweep = validate_sweep(sweep_deg)?;
    if sweep == FULL_SWEEP_DEG {
        return Ok(Clip::Unclipped);
    }

    let end = end_angle(sweep);
    let path = Path::builder()
        .move_to(Vec2::ZERO)
        .line_to(polar(outer_radius, START_ANGLE))
        .arc(Vec2::ZERO, outer_radius, START_ANGLE, end, Winding::Clockwise)
        .close()
        .build();
    Ok(Clip::Path(path))
}

/// Fill path of a ring (annulus), optionally limited to `sweep_deg`.
///
/// Outer edge clockwise, inner edge counter-clockwise, so the hole stays
/// empty under both even-odd and non-zero filling.
pub fn ring_path(sweep_deg: f32, outer_radius: f32, inner_radius: f32) -> Result<Path, Error> {
    let sweep = validate_sweep(sweep_deg)?;

    if sweep == FULL_SWEEP_DEG {
        return Ok(Path::builder()
            .move_to(polar(outer_radius, 0.0))
            .arc(Vec2::ZERO, outer_radius, 0.0, TAU, Winding::Clockwise)
            .close()
            .move_to(polar(inner_radius, 0.0))
            .arc(Vec2::ZERO, inner_radius, TAU, 0.0, Winding::CounterClockwise)
            .close()
            .build());
    }

    let end = end_angle(sweep);
    Ok(Path::builder()
        .arc(Vec2::ZERO, outer_radius, START_ANGLE, end, Winding::Clockwise)
        .arc(Vec2::ZERO, inner_radius, end, START_ANGLE, Winding::CounterClockwise)
        .close()
        .build())
}

/// Bounding box of the drawn part of a sector or ring, in local coordinates.
pub fn sector_bounds(sweep_deg: f32, outer_radius: f32, inner_radius: f32) -> Result<Rect, Error> {
    let sweep = validate_sweep(sweep_deg)?;

    if sweep == FULL_SWEEP_DEG {
        return Ok(Rect::new(
            -outer_radius,
            -outer_radius,
            outer_radius * 2.0,
            outer_radius * 2.0,
        ));
    }

    let outer_start = polar(outer_radius, START_ANGLE);
    if sweep == 0.0 {
        return Ok(Rect::new(outer_start.x, outer_start.y, 0.0, 0.0));
    }

    let end = end_angle(sweep);
    let mut points = vec![
        outer_start,
        polar(outer_radius, end),
        polar(inner_radius, START_ANGLE),
        polar(inner_radius, end),
    ];
    points.extend(
        CARDINALS
            .iter()
            .filter(|(angle, _)| arc_contains(START_ANGLE, end, *angle))
            .map(|(_, dir)| *dir * outer_radius),
    );

    let (min, max) = points
        .iter()
        .skip(1)
        .fold((points[0], points[0]), |(lo, hi), p| (lo.min(*p), hi.max(*p)));
    Ok(Rect::new(min.x, min.y, max.x - min.x, max.y - min.y))
}

/// Rotation pivot: centre of [`sector_bounds`].
///
/// `(0, 0)` for a full sweep; the outer arc start for a zero sweep.
pub fn sector_bounds_center(
    sweep_deg: f32,
    outer_radius: f32,
    inner_radius: f32,
) -> Result<Vec2, Error> {
    sector_bounds(sweep_deg, outer_radius, inner_radius).map(|r| r.center())
}

#[cfg(test)]
mod tests {
    use super::*;

    const R: f32 = 512.0;
    const EPS: f32 = 1e-2;

    fn close(a: Vec2, b: Vec2) -> bool {
        (a - b).length() < EPS
    }

    #[test]
    fn full_sweep_pivot_is_geometric_center() {
        assert_eq!(sector_bounds_center(360.0, R, 0.0).unwrap(), Vec2::ZERO);
        assert_eq!(sector_bounds_center(360.0, R, 200.0).unwrap(), Vec2::ZERO);
    }

    #[test]
    fn quarter_fan_box_spans_first_quadrant_on_screen() {
        let b = sector_bounds(90.0, R, 0.0).unwrap();
        // 12 o'clock start and 3 o'clock end are inside ...
        assert!(b.y <= -R + EPS);
        assert!(b.x + b.w >= R - EPS);
        // ... 6 o'clock and 9 o'clock are not.
        assert!(b.y + b.h <= EPS);
        assert!(b.x >= -EPS);
        assert!(close(b.center(), vec2(R / 2.0, -R / 2.0)));
    }

    #[test]
    fn half_ring_pivot_ignores_the_hole() {
        // 12 o'clock to 6 o'clock through 3 o'clock.
        let c = sector_bounds_center(180.0, R, 256.0).unwrap();
        assert!(close(c, vec2(R / 2.0, 0.0)));

        // Without a hole the origin is part of the shape.
        let c = sector_bounds_center(180.0, R, 0.0).unwrap();
        assert!(close(c, vec2(R / 2.0, 0.0)));
    }

    #[test]
    fn wide_fan_wraps_past_twelve() {
        // 270 degrees: 12 -> 3 -> 6 -> 9.
        let b = sector_bounds(270.0, R, 0.0).unwrap();
        assert!(close(vec2(b.x, b.y), vec2(-R, -R)));
        assert!(close(vec2(b.x + b.w, b.y + b.h), vec2(R, R)));
    }

    #[test]
    fn zero_sweep_collapses_to_arc_start() {
        let c = sector_bounds_center(0.0, R, 0.0).unwrap();
        assert!(close(c, vec2(0.0, -R)));
    }

    #[test]
    fn out_of_range_sweeps_are_rejected() {
        assert!(matches!(sector_clip(361.0, R), Err(Error::InvalidSweep(_))));
        assert!(matches!(ring_path(-1.0, R, 0.0), Err(Error::InvalidSweep(_))));
        assert!(matches!(
            sector_bounds_center(f32::NAN, R, 0.0),
            Err(Error::InvalidSweep(_))
        ));
    }

    #[test]
    fn contains_handles_wraparound() {
        let start = START_ANGLE;
        let end = START_ANGLE + 90f32.to_radians();
        assert!(arc_contains(start, end, 0.0));
        assert!(!arc_contains(start, end, FRAC_PI_2));
        assert!(!arc_contains(start, end, PI));
    }

    #[test]
    fn clip_is_unclipped_only_for_full_circle() {
        assert_eq!(sector_clip(360.0, R).unwrap(), Clip::Unclipped);
        assert!(matches!(sector_clip(359.0, R).unwrap(), Clip::Path(_)));
    }
}
