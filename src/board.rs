// src/board.rs
use macroquad::prelude::*;
use serde::Deserialize;

/// Board-space to render-space factor.
pub const BOARD_SCALE: f32 = 2.0;

/// Default fill for line AOEs and line segments (`#ff8000`).
pub const DEFAULT_MARKER_COLOR: Color = Color::new(1.0, 128.0 / 255.0, 0.0, 1.0);

/// Board background, one of a fixed set of images.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BackgroundId {
    /// Plain board
    #[default]
    None,
    /// Checkered floor
    Checkered,
    /// Checkered floor inside a circular arena
    CheckeredCircle,
    /// Checkered floor inside a square arena
    CheckeredSquare,
    /// Grey floor
    Grey,
    /// Grey floor inside a circular arena
    GreyCircle,
    /// Grey floor inside a square arena
    GreySquare,
}

impl BackgroundId {
    /// Asset number of the background image (1-based).
    pub fn asset_number(self) -> u8 {
        match self {
            BackgroundId::None => 1,
            BackgroundId::Checkered => 2,
            BackgroundId::CheckeredCircle => 3,
            BackgroundId::CheckeredSquare => 4,
            BackgroundId::Grey => 5,
            BackgroundId::GreyCircle => 6,
            BackgroundId::GreySquare => 7,
        }
    }
}

/// Variant-specific part of a marker.
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    /// Sprite from the icon atlas, keyed by its type name.
    Icon {
        /// Marker type, e.g. `"tank"` or `"waymark_a"`
        kind: String,
    },
    /// Rectangle anchored at its far corner.
    LineAoe {
        /// Half width in board units
        width: f32,
        /// Half height in board units
        height: f32,
        /// Fill colour
        color: Color,
    },
    /// Straight segment with endpoint handles.
    Line {
        /// Segment end in board space
        end: Vec2,
        /// Stroke thickness in board units
        thickness: f32,
        /// Stroke colour
        color: Color,
    },
    /// Free text label.
    Text {
        /// Label contents
        text: String,
        /// Text colour
        color: Color,
    },
    /// Full circle AOE.
    CircleAoe,
    /// Fan (pie slice) AOE.
    FanAoe {
        /// Sweep in degrees
        arc_angle: f32,
    },
    /// Ring, optionally angle-limited.
    Donut {
        /// Sweep in degrees
        arc_angle: f32,
        /// Inner radius in board units
        donut_radius: f32,
    },
}

impl Shape {
    /// Type tag as it appears in a board code.
    pub fn type_name(&self) -> &str {
        match self {
            Shape::Icon { kind } => kind,
            Shape::LineAoe { .. } => "line_aoe",
            Shape::Line { .. } => "line",
            Shape::Text { .. } => "text",
            Shape::CircleAoe => "circle_aoe",
            Shape::FanAoe { .. } => "fan_aoe",
            Shape::Donut { .. } => "donut",
        }
    }
}

/// One positioned, typed element of a board.
#[derive(Debug, Clone, PartialEq)]
pub struct Marker {
    /// Variant and its specific fields
    pub shape: Shape,
    /// Anchor in board space
    pub pos: Vec2,
    /// Percent scale
    pub size: f32,
    /// Percent transparency
    pub transparency: f32,
    /// Drawn fully transparent when set
    pub hidden: bool,
    /// Rotation in degrees
    pub angle: f32,
    /// Mirror along the x axis
    pub horizontal_flip: bool,
    /// Mirror along the y axis
    pub vertical_flip: bool,
}

impl Marker {
    /// A marker at `pos` with every optional field at its default.
    pub fn new(shape: Shape, pos: Vec2) -> Self {
        Self {
            shape,
            pos,
            size: 100.0,
            transparency: 0.0,
            hidden: false,
            angle: 0.0,
            horizontal_flip: false,
            vertical_flip: false,
        }
    }

    /// Anchor in render space.
    pub fn render_pos(&self) -> Vec2 {
        self.pos * BOARD_SCALE
    }

    /// 0 when hidden, otherwise `(100 - transparency) / 100`.
    pub fn opacity(&self) -> f32 {
        if self.hidden {
            0.0
        } else {
            (100.0 - self.transparency) / 100.0
        }
    }

    /// `size / 100` with flips applied as sign inversions.
    pub fn scale(&self) -> Vec2 {
        let s = self.size / 100.0;
        vec2(
            if self.horizontal_flip { -s } else { s },
            if self.vertical_flip { -s } else { s },
        )
    }
}

/// A decoded board.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Board {
    /// Background image
    pub background: BackgroundId,
    /// Markers in decoded order (first = topmost)
    pub markers: Vec<Marker>,
}

impl Board {
    /// Markers bottom to top: the last decoded marker is drawn first.
    pub fn draw_order(&self) -> impl Iterator<Item = &Marker> + '_ {
        self.markers.iter().rev()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn icon(kind: &str, x: f32) -> Marker {
        Marker::new(Shape::Icon { kind: kind.to_owned() }, vec2(x, 0.0))
    }

    #[test]
    fn draw_order_is_reverse_and_leaves_board_untouched() {
        let board = Board {
            background: BackgroundId::None,
            markers: vec![icon("a", 1.0), icon("b", 2.0), icon("c", 3.0)],
        };

        let order: Vec<&str> = board.draw_order().map(|m| m.shape.type_name()).collect();
        assert_eq!(order, ["c", "b", "a"]);

        // A second pass sees the same order; the decoded list is never reversed in place.
        let again: Vec<&str> = board.draw_order().map(|m| m.shape.type_name()).collect();
        assert_eq!(again, order);
        assert_eq!(board.markers[0].shape.type_name(), "a");
    }

    #[test]
    fn hidden_wins_over_transparency() {
        let mut m = icon("tank", 0.0);
        m.transparency = 25.0;
        assert_eq!(m.opacity(), 0.75);
        m.hidden = true;
        assert_eq!(m.opacity(), 0.0);
    }

    #[test]
    fn flips_invert_scale_axes() {
        let mut m = icon("tank", 0.0);
        m.size = 50.0;
        m.horizontal_flip = true;
        assert_eq!(m.scale(), vec2(-0.5, 0.5));
        m.vertical_flip = true;
        assert_eq!(m.scale(), vec2(-0.5, -0.5));
    }

    #[test]
    fn render_pos_doubles_board_space() {
        let m = icon("tank", 12.5);
        assert_eq!(m.render_pos(), vec2(25.0, 0.0));
    }

    #[test]
    fn background_asset_numbers_follow_enum_order() {
        let numbers: Vec<u8> = [
            BackgroundId::None,
            BackgroundId::Checkered,
            BackgroundId::CheckeredCircle,
            BackgroundId::CheckeredSquare,
            BackgroundId::Grey,
            BackgroundId::GreyCircle,
            BackgroundId::GreySquare,
        ]
        .iter()
        .map(|b| b.asset_number())
        .collect();
        assert_eq!(numbers, [1, 2, 3, 4, 5, 6, 7]);
    }
}
