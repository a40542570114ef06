//! Scene composition: a decoded [`Board`] in, ordered draw primitives out.
//!
//! Nothing here touches a drawing backend. Each marker is turned into fully
//! parameterised primitives (position, pivot, scale, rotation, opacity, clip)
//! that the renderer only has to rasterise.
//!
//! Draw order is the reverse of decoded order: the last marker of a board is
//! at the bottom, the first one on top.

use crate::assets::CIRCLE_AOE_SHEET;
use crate::atlas::IconAtlas;
use crate::board::{BackgroundId, Board, Marker, Shape, BOARD_SCALE};
use crate::error::Error;
use crate::geometry::{self, Clip, Path};
use macroquad::prelude::*;

/// Font size of text labels.
pub const TEXT_FONT_SIZE: f32 = 28.0;
/// Approximate advance of an ASCII glyph, relative to the font size.
pub const GLYPH_WIDTH_RATIO: f32 = 0.6;
/// Side of the square circle-AOE image.
pub const AOE_IMAGE_SIZE: f32 = 1024.0;
/// Outer radius of donuts in render units.
pub const DONUT_OUTER_RADIUS: f32 = 512.0;
/// Donuts sit this many render units above their anchor.
pub const DONUT_Y_NUDGE: f32 = 10.0;
/// Radius of segment endpoint handles.
pub const HANDLE_RADIUS: f32 = 8.0;

const DONUT_FILL: Color = Color::new(1.0, 165.0 / 255.0, 0.0, 1.0);
const DONUT_STROKE: Color = Color::new(1.0, 140.0 / 255.0, 0.0, 1.0);
const HANDLE_STROKE: Color = Color::new(67.0 / 255.0, 168.0 / 255.0, 216.0 / 255.0, 1.0);

/// Placement of a primitive's local space on the canvas.
///
/// A local point `p` lands at `position + R(rotation) * ((p - offset) * scale)`,
/// so `offset` is both the anchor and the rotation pivot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    /// Anchor on the canvas
    pub position: Vec2,
    /// Local point placed on the anchor
    pub offset: Vec2,
    /// Per-axis scale, negative to mirror
    pub scale: Vec2,
    /// Clockwise rotation in degrees
    pub rotation: f32,
}

impl Transform {
    /// Marker transform with the given pivot.
    pub fn for_marker(marker: &Marker, position: Vec2, offset: Vec2) -> Self {
        Self {
            position,
            offset,
            scale: marker.scale(),
            rotation: marker.angle,
        }
    }

    /// Map a local point to canvas coordinates.
    pub fn apply(&self, local: Vec2) -> Vec2 {
        let v = (local - self.offset) * self.scale;
        let (sin, cos) = self.rotation.to_radians().sin_cos();
        self.position + vec2(v.x * cos - v.y * sin, v.x * sin + v.y * cos)
    }
}

/// Outline settings.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stroke {
    /// Line colour
    pub color: Color,
    /// Line width
    pub width: f32,
}

/// Drop shadow behind text.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Shadow {
    /// Shadow colour
    pub color: Color,
    /// Blur radius
    pub blur: f32,
    /// Displacement from the text
    pub offset: Vec2,
}

/// Shadow applied to every label.
pub const TEXT_SHADOW: Shadow = Shadow {
    color: BLACK,
    blur: 4.0,
    offset: Vec2::new(2.0, 2.0),
};

/// One backend-independent draw call.
#[derive(Debug, Clone, PartialEq)]
pub enum Primitive {
    /// Whole image or a crop of a sprite sheet, optionally clipped
    Image {
        /// Sheet id
        sheet: &'static str,
        /// Source region; `None` for the whole image
        crop: Option<Rect>,
        /// Local size
        size: Vec2,
        /// Mask in local coordinates
        clip: Clip,
        /// Placement
        transform: Transform,
        /// 0..=1
        opacity: f32,
    },
    /// Filled rectangle with its top-left corner at the local origin
    Rect {
        /// Local size
        size: Vec2,
        /// Fill colour
        fill: Color,
        /// Placement
        transform: Transform,
        /// 0..=1
        opacity: f32,
    },
    /// Straight line in canvas coordinates
    Segment {
        /// Start point
        start: Vec2,
        /// End point
        end: Vec2,
        /// Stroke width
        width: f32,
        /// Stroke colour
        color: Color,
        /// 0..=1
        opacity: f32,
    },
    /// Outlined disc in canvas coordinates
    Circle {
        /// Centre
        center: Vec2,
        /// Radius
        radius: f32,
        /// Fill colour
        fill: Color,
        /// Outline
        stroke: Stroke,
        /// 0..=1
        opacity: f32,
    },
    /// Filled and stroked vector path
    Shape {
        /// Outline in local coordinates
        path: Path,
        /// Fill colour
        fill: Color,
        /// Outline
        stroke: Stroke,
        /// Placement
        transform: Transform,
        /// 0..=1
        opacity: f32,
    },
    /// Single-line label with its top-left corner at the local origin
    Text {
        /// Contents
        text: String,
        /// Font size
        font_size: f32,
        /// Text colour
        color: Color,
        /// Drop shadow
        shadow: Shadow,
        /// Placement
        transform: Transform,
        /// 0..=1
        opacity: f32,
    },
}

/// A marker that produced no primitives.
#[derive(Debug)]
pub struct SkippedMarker {
    /// Position in decoded order
    pub index: usize,
    /// Marker type
    pub kind: String,
    /// Why it was skipped
    pub reason: Error,
}

/// Everything needed to draw one board.
#[derive(Debug)]
pub struct Scene {
    /// Background image, drawn first
    pub background: BackgroundId,
    /// Primitives bottom to top
    pub primitives: Vec<Primitive>,
    /// Markers that were left out
    pub skipped: Vec<SkippedMarker>,
}

/// Estimated pixel width of `text`: ASCII glyphs cost one unit, others two.
pub fn text_width(text: &str, font_size: f32) -> f32 {
    let unit = font_size * GLYPH_WIDTH_RATIO;
    text.chars()
        .map(|c| if c.is_ascii() { unit } else { unit * 2.0 })
        .sum()
}

fn icon_primitives(marker: &Marker, kind: &str, atlas: &IconAtlas) -> Result<Vec<Primitive>, Error> {
    let entry = atlas
        .resolve(kind)
        .ok_or_else(|| Error::UnknownMarkerType(kind.to_owned()))?;
    let half = entry.half_size as f32;

    Ok(vec![Primitive::Image {
        sheet: entry.sheet,
        crop: Some(entry.crop.to_rect()),
        size: vec2(half * 2.0, half * 2.0),
        clip: Clip::Unclipped,
        transform: Transform::for_marker(marker, marker.render_pos(), vec2(half, half)),
        opacity: marker.opacity(),
    }])
}

fn sector_primitives(marker: &Marker, sweep: f32) -> Result<Vec<Primitive>, Error> {
    let radius = AOE_IMAGE_SIZE / 2.0;
    let image_center = vec2(radius, radius);
    let pivot = geometry::sector_bounds_center(sweep, radius, 0.0)?;
    let clip = match geometry::sector_clip(sweep, radius)? {
        Clip::Path(path) => Clip::Path(path.translated(image_center)),
        Clip::Unclipped => Clip::Unclipped,
    };

    Ok(vec![Primitive::Image {
        sheet: CIRCLE_AOE_SHEET,
        crop: None,
        size: vec2(AOE_IMAGE_SIZE, AOE_IMAGE_SIZE),
        clip,
        transform: Transform::for_marker(marker, marker.render_pos(), image_center + pivot),
        opacity: marker.opacity(),
    }])
}

fn donut_primitives(marker: &Marker, sweep: f32, donut_radius: f32) -> Result<Vec<Primitive>, Error> {
    let inner = (donut_radius * BOARD_SCALE).max(0.0);
    let path = geometry::ring_path(sweep, DONUT_OUTER_RADIUS, inner)?;
    let pivot = geometry::sector_bounds_center(sweep, DONUT_OUTER_RADIUS, inner)?;
    let position = marker.render_pos() - vec2(0.0, DONUT_Y_NUDGE);

    Ok(vec![Primitive::Shape {
        path,
        fill: DONUT_FILL,
        stroke: Stroke {
            color: DONUT_STROKE,
            width: 2.0,
        },
        transform: Transform::for_marker(marker, position, pivot),
        opacity: marker.opacity(),
    }])
}

fn segment_primitives(marker: &Marker, end: Vec2, thickness: f32, color: Color) -> Vec<Primitive> {
    let start = marker.render_pos();
    let end = end * BOARD_SCALE;
    let opacity = marker.opacity();
    let handle = |center| Primitive::Circle {
        center,
        radius: HANDLE_RADIUS,
        fill: WHITE,
        stroke: Stroke {
            color: HANDLE_STROKE,
            width: 2.0,
        },
        opacity,
    };

    vec![
        Primitive::Segment {
            start,
            end,
            width: thickness * BOARD_SCALE,
            color,
            opacity,
        },
        handle(start),
        handle(end),
    ]
}

/// Primitives for one marker, bottom to top.
pub fn marker_primitives(marker: &Marker, atlas: &IconAtlas) -> Result<Vec<Primitive>, Error> {
    match &marker.shape {
        Shape::Icon { kind } => icon_primitives(marker, kind, atlas),
        Shape::CircleAoe => sector_primitives(marker, geometry::FULL_SWEEP_DEG),
        Shape::FanAoe { arc_angle } => sector_primitives(marker, *arc_angle),
        Shape::Donut {
            arc_angle,
            donut_radius,
        } => donut_primitives(marker, *arc_angle, *donut_radius),
        Shape::LineAoe {
            width,
            height,
            color,
        } => Ok(vec![Primitive::Rect {
            size: vec2(width * 2.0, height * 2.0),
            fill: *color,
            transform: Transform::for_marker(marker, marker.render_pos(), vec2(*width, *height)),
            opacity: marker.opacity(),
        }]),
        Shape::Line {
            end,
            thickness,
            color,
        } => Ok(segment_primitives(marker, *end, *thickness, *color)),
        Shape::Text { text, color } => {
            let offset = vec2(text_width(text, TEXT_FONT_SIZE) / 2.0, TEXT_FONT_SIZE / 2.0);
            Ok(vec![Primitive::Text {
                text: text.clone(),
                font_size: TEXT_FONT_SIZE,
                color: *color,
                shadow: TEXT_SHADOW,
                transform: Transform::for_marker(marker, marker.render_pos(), offset),
                opacity: marker.opacity(),
            }])
        }
    }
}

/// Compose a board into draw primitives.
///
/// A marker that cannot be drawn is logged and skipped; the rest of the board
/// still renders.
pub fn compose(board: &Board, atlas: &IconAtlas) -> Scene {
    let mut primitives = Vec::with_capacity(board.markers.len());
    let mut skipped = Vec::new();
    let last = board.markers.len().saturating_sub(1);

    for (draw_index, marker) in board.draw_order().enumerate() {
        match marker_primitives(marker, atlas) {
            Ok(prims) => primitives.extend(prims),
            Err(reason) => {
                let index = last - draw_index;
                tracing::warn!(
                    index,
                    kind = marker.shape.type_name(),
                    error = %reason,
                    "skipping marker"
                );
                skipped.push(SkippedMarker {
                    index,
                    kind: marker.shape.type_name().to_owned(),
                    reason,
                });
            }
        }
    }

    Scene {
        background: board.background,
        primitives,
        skipped,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-3;

    fn marker(shape: Shape) -> Marker {
        Marker::new(shape, vec2(100.0, 50.0))
    }

    #[test]
    fn ascii_and_wide_glyph_widths() {
        assert!((text_width("ab", 28.0) - 33.6).abs() < EPS);
        assert!((text_width("あ", 28.0) - 33.6).abs() < EPS);
        assert_eq!(text_width("", 28.0), 0.0);
    }

    #[test]
    fn transform_rotates_about_offset() {
        let t = Transform {
            position: vec2(10.0, 10.0),
            offset: vec2(1.0, 0.0),
            scale: vec2(1.0, 1.0),
            rotation: 90.0,
        };
        assert!((t.apply(vec2(1.0, 0.0)) - vec2(10.0, 10.0)).length() < EPS);
        // One unit right of the pivot turns to one unit down (clockwise).
        assert!((t.apply(vec2(2.0, 0.0)) - vec2(10.0, 11.0)).length() < EPS);
    }

    #[test]
    fn line_aoe_is_anchored_at_its_far_corner() {
        let m = marker(Shape::LineAoe {
            width: 20.0,
            height: 64.0,
            color: RED,
        });
        let prims = marker_primitives(&m, &IconAtlas::default()).unwrap();
        match &prims[0] {
            Primitive::Rect { size, transform, .. } => {
                assert_eq!(*size, vec2(40.0, 128.0));
                assert_eq!(transform.offset, vec2(20.0, 64.0));
                assert_eq!(transform.position, vec2(200.0, 100.0));
            }
            other => panic!("expected rect, got {:?}", other),
        }
    }

    #[test]
    fn segment_gets_two_handles_and_doubled_width() {
        let mut m = marker(Shape::Line {
            end: vec2(120.0, 60.0),
            thickness: 6.0,
            color: RED,
        });
        m.transparency = 50.0;
        let prims = marker_primitives(&m, &IconAtlas::default()).unwrap();
        assert_eq!(prims.len(), 3);
        match &prims[0] {
            Primitive::Segment {
                start,
                end,
                width,
                opacity,
                ..
            } => {
                assert_eq!(*start, vec2(200.0, 100.0));
                assert_eq!(*end, vec2(240.0, 120.0));
                assert_eq!(*width, 12.0);
                assert_eq!(*opacity, 0.5);
            }
            other => panic!("expected segment, got {:?}", other),
        }
        assert!(matches!(prims[2], Primitive::Circle { radius, center, .. } if radius == HANDLE_RADIUS && center == vec2(240.0, 120.0)));
    }

    #[test]
    fn full_circle_aoe_is_centered_and_unclipped() {
        let prims = marker_primitives(&marker(Shape::CircleAoe), &IconAtlas::default()).unwrap();
        match &prims[0] {
            Primitive::Image {
                sheet,
                clip,
                transform,
                size,
                ..
            } => {
                assert_eq!(*sheet, CIRCLE_AOE_SHEET);
                assert_eq!(*clip, Clip::Unclipped);
                assert_eq!(transform.offset, vec2(512.0, 512.0));
                assert_eq!(*size, vec2(1024.0, 1024.0));
            }
            other => panic!("expected image, got {:?}", other),
        }
    }

    #[test]
    fn fan_pivot_is_the_slice_box_center_in_image_space() {
        let prims = marker_primitives(
            &marker(Shape::FanAoe { arc_angle: 90.0 }),
            &IconAtlas::default(),
        )
        .unwrap();
        match &prims[0] {
            Primitive::Image { clip, transform, .. } => {
                assert!((transform.offset - vec2(768.0, 256.0)).length() < 0.01);
                match clip {
                    Clip::Path(path) => {
                        assert_eq!(path.commands()[0], geometry::PathCmd::MoveTo(vec2(512.0, 512.0)))
                    }
                    Clip::Unclipped => panic!("fan must be clipped"),
                }
            }
            other => panic!("expected image, got {:?}", other),
        }
    }

    #[test]
    fn donut_doubles_inner_radius_and_sits_nudged_up() {
        let m = marker(Shape::Donut {
            arc_angle: 360.0,
            donut_radius: 100.0,
        });
        let prims = marker_primitives(&m, &IconAtlas::default()).unwrap();
        match &prims[0] {
            Primitive::Shape { path, transform, .. } => {
                let area = path.signed_area().abs();
                let expected = std::f32::consts::PI * (512.0f32.powi(2) - 200.0f32.powi(2));
                assert!((area - expected).abs() / expected < 0.01);
                assert_eq!(transform.position, vec2(200.0, 90.0));
                assert_eq!(transform.offset, Vec2::ZERO);
            }
            other => panic!("expected shape, got {:?}", other),
        }
    }

    #[test]
    fn invalid_sweep_skips_only_that_marker() {
        let board = Board {
            background: BackgroundId::Grey,
            markers: vec![
                marker(Shape::FanAoe { arc_angle: 400.0 }),
                marker(Shape::CircleAoe),
            ],
        };
        let scene = compose(&board, &IconAtlas::default());
        assert_eq!(scene.primitives.len(), 1);
        assert_eq!(scene.skipped.len(), 1);
        assert_eq!(scene.skipped[0].index, 0);
        assert!(matches!(scene.skipped[0].reason, Error::InvalidSweep(s) if s == 400.0));
    }
}
