// src/loader/json_decoder.rs
use crate::board::{BackgroundId, Board, Marker, Shape, DEFAULT_MARKER_COLOR};
use crate::error::Error;
use macroquad::prelude::*;
use serde::Deserialize;

/// Known-good board used whenever the supplied code cannot be decoded.
pub const DEFAULT_CODE: &str = r##"{
  "boardBackground": "checkered_circle",
  "objects": [
    { "type": "waymark_a", "x": 256, "y": 96 },
    { "type": "tank", "x": 256, "y": 160 },
    { "type": "healer", "x": 200, "y": 230, "angle": 45 },
    { "type": "dps_1", "x": 312, "y": 230, "horizontalFlip": true },
    { "type": "text", "x": 256, "y": 40, "text": "Spread", "color": "#ffffff" },
    { "type": "fan_aoe", "x": 256, "y": 192, "arcAngle": 90, "size": 40, "transparency": 50 },
    { "type": "donut", "x": 256, "y": 192, "donutRadius": 80, "size": 60, "transparency": 60 }
  ]
}"##;

/// Prefix of the native strategy board code, which this decoder does not read.
const NATIVE_CODE_PREFIX: &str = "[stgy:";

/// Turns a board code into a [`Board`].
pub trait BoardDecoder {
    /// Decode `code`, failing on malformed input.
    fn decode(&self, code: &str) -> Result<Board, Error>;
}

/// Decoder for boards serialized as JSON (`boardBackground` + `objects`).
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonDecoder;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct JsonBoard {
    #[serde(default)]
    board_background: Option<BackgroundId>,
    #[serde(default)]
    objects: Vec<JsonObject>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct JsonObject {
    #[serde(rename = "type")]
    kind: String,
    x: f32,
    y: f32,
    size: Option<f32>,
    transparency: Option<f32>,
    hidden: Option<bool>,
    angle: Option<f32>,
    horizontal_flip: Option<bool>,
    vertical_flip: Option<bool>,
    arc_angle: Option<f32>,
    donut_radius: Option<f32>,
    width: Option<f32>,
    height: Option<f32>,
    end_x: Option<f32>,
    end_y: Option<f32>,
    color: Option<String>,
    text: Option<String>,
}

fn shape_from_json(obj: &JsonObject) -> Shape {
    let color = || {
        obj.color
            .as_deref()
            .and_then(parse_color)
            .unwrap_or(DEFAULT_MARKER_COLOR)
    };

    match obj.kind.as_str() {
        "line_aoe" => Shape::LineAoe {
            width: obj.width.unwrap_or(128.0),
            height: obj.height.unwrap_or(128.0),
            color: color(),
        },
        "line" => Shape::Line {
            end: vec2(obj.end_x.unwrap_or(obj.x), obj.end_y.unwrap_or(obj.y)),
            thickness: obj.height.unwrap_or(6.0),
            color: color(),
        },
        "text" => Shape::Text {
            text: obj.text.clone().unwrap_or_default(),
            color: obj.color.as_deref().and_then(parse_color).unwrap_or(WHITE),
        },
        "circle_aoe" => Shape::CircleAoe,
        "fan_aoe" => Shape::FanAoe {
            arc_angle: obj.arc_angle.unwrap_or(90.0),
        },
        "donut" => Shape::Donut {
            arc_angle: obj.arc_angle.unwrap_or(360.0),
            donut_radius: obj.donut_radius.unwrap_or(0.0),
        },
        other => Shape::Icon {
            kind: other.to_owned(),
        },
    }
}

fn object_to_marker(obj: JsonObject) -> Marker {
    let shape = shape_from_json(&obj);
    Marker {
        shape,
        pos: vec2(obj.x, obj.y),
        size: obj.size.unwrap_or(100.0),
        transparency: obj.transparency.unwrap_or(0.0),
        hidden: obj.hidden.unwrap_or(false),
        angle: obj.angle.unwrap_or(0.0),
        horizontal_flip: obj.horizontal_flip.unwrap_or(false),
        vertical_flip: obj.vertical_flip.unwrap_or(false),
    }
}

/// Parse `#rgb`, `#rrggbb` or `#rrggbbaa`.
pub fn parse_color(s: &str) -> Option<Color> {
    let hex = s.trim().strip_prefix('#')?;
    if !hex.is_ascii() {
        return None;
    }
    let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
    match hex.len() {
        3 => {
            let mut out = [0u8; 3];
            for (slot, c) in out.iter_mut().zip(hex.chars()) {
                let v = c.to_digit(16)? as u8;
                *slot = v * 17;
            }
            Some(Color::from_rgba(out[0], out[1], out[2], 255))
        }
        6 => Some(Color::from_rgba(channel(0)?, channel(2)?, channel(4)?, 255)),
        8 => Some(Color::from_rgba(
            channel(0)?,
            channel(2)?,
            channel(4)?,
            channel(6)?,
        )),
        _ => None,
    }
}

impl BoardDecoder for JsonDecoder {
    fn decode(&self, code: &str) -> Result<Board, Error> {
        let code = code.trim();
        if code.is_empty() {
            return Err(Error::EmptyCode);
        }
        if code.starts_with(NATIVE_CODE_PREFIX) {
            return Err(Error::UnsupportedFormat(NATIVE_CODE_PREFIX.to_owned()));
        }

        let j: JsonBoard = serde_json::from_str(code)?;
        Ok(Board {
            background: j.board_background.unwrap_or_default(),
            markers: j.objects.into_iter().map(object_to_marker).collect(),
        })
    }
}

/// Decode `code`, falling back to [`DEFAULT_CODE`] when it is malformed.
///
/// Both the failure and the offending code are logged; the fallback itself
/// never reaches the scene.
pub fn load_board(decoder: &dyn BoardDecoder, code: &str) -> Board {
    match decoder.decode(code) {
        Ok(board) => {
            tracing::debug!(markers = board.markers.len(), "decoded board");
            board
        }
        Err(err) => {
            tracing::error!(error = %err, "Failed to decode board code, using default.");
            tracing::error!(code = %code, "offending board code");
            match decoder.decode(DEFAULT_CODE) {
                Ok(board) => board,
                Err(default_err) => {
                    tracing::error!(error = %default_err, "default board code did not decode");
                    Board::default()
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fills_enumerated_defaults() {
        let board = JsonDecoder
            .decode(r#"{"objects":[{"type":"fan_aoe","x":1,"y":2},{"type":"donut","x":0,"y":0}]}"#)
            .expect("decode");

        assert_eq!(board.background, BackgroundId::None);
        let fan = &board.markers[0];
        assert_eq!(fan.shape, Shape::FanAoe { arc_angle: 90.0 });
        assert_eq!(fan.size, 100.0);
        assert_eq!(fan.transparency, 0.0);
        assert_eq!(fan.angle, 0.0);
        assert!(!fan.hidden);
        assert_eq!(
            board.markers[1].shape,
            Shape::Donut {
                arc_angle: 360.0,
                donut_radius: 0.0
            }
        );
    }

    #[test]
    fn line_end_defaults_to_start() {
        let board = JsonDecoder
            .decode(r#"{"objects":[{"type":"line","x":10,"y":20,"endX":30}]}"#)
            .expect("decode");
        match &board.markers[0].shape {
            Shape::Line {
                end,
                thickness,
                color,
            } => {
                assert_eq!(*end, vec2(30.0, 20.0));
                assert_eq!(*thickness, 6.0);
                assert_eq!(*color, DEFAULT_MARKER_COLOR);
            }
            other => panic!("expected line, got {:?}", other),
        }
    }

    #[test]
    fn null_flags_read_as_false() {
        let board = JsonDecoder
            .decode(
                r#"{"objects":[{"type":"tank","x":0,"y":0,"hidden":null,"horizontalFlip":null,"verticalFlip":true}]}"#,
            )
            .expect("decode");
        let tank = &board.markers[0];
        assert!(!tank.hidden);
        assert!(!tank.horizontal_flip);
        assert!(tank.vertical_flip);
    }

    #[test]
    fn unknown_types_become_icons() {
        let board = JsonDecoder
            .decode(r#"{"objects":[{"type":"not_a_real_icon","x":0,"y":0}]}"#)
            .expect("decode");
        assert_eq!(board.markers[0].shape.type_name(), "not_a_real_icon");
    }

    #[test]
    fn rejects_native_codes_and_empty_input() {
        assert!(matches!(
            JsonDecoder.decode("[stgy:a2mW7zYp]"),
            Err(Error::UnsupportedFormat(_))
        ));
        assert!(matches!(JsonDecoder.decode("   "), Err(Error::EmptyCode)));
        assert!(matches!(JsonDecoder.decode("{ nope"), Err(Error::Decode(_))));
    }

    #[test]
    fn parses_hex_colors() {
        assert_eq!(parse_color("#ff8000"), Some(DEFAULT_MARKER_COLOR));
        assert_eq!(parse_color("#fff"), Some(Color::from_rgba(255, 255, 255, 255)));
        assert_eq!(
            parse_color("#00000080"),
            Some(Color::from_rgba(0, 0, 0, 128))
        );
        assert_eq!(parse_color("ff8000"), None);
        assert_eq!(parse_color("#ff80"), None);
        assert_eq!(parse_color("#éé"), None);
    }
}
