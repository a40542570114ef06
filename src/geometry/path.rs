// src/geometry/path.rs
use macroquad::prelude::*;
use std::f32::consts::{PI, TAU};

/// Largest angular step used when flattening an arc.
///
/// The segment count depends only on the swept angle, so two arcs with the
/// same sweep always flatten to the same number of points.
pub const ARC_STEP: f32 = PI / 90.0;

/// Direction an arc is traced in, as seen on a y-down surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Winding {
    /// Increasing angle
    Clockwise,
    /// Decreasing angle
    CounterClockwise,
}

/// One drawing command.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathCmd {
    /// Start a new subpath
    MoveTo(Vec2),
    /// Straight edge to a point
    LineTo(Vec2),
    /// Circular arc; joined to the current point by a straight edge
    Arc {
        /// Circle centre
        center: Vec2,
        /// Circle radius
        radius: f32,
        /// Start angle in radians, 0 = 3 o'clock
        start: f32,
        /// End angle in radians
        end: f32,
        /// Tracing direction
        winding: Winding,
    },
    /// Close the current subpath
    Close,
}

impl PathCmd {
    /// Signed angle actually traced by an arc (0 for other commands).
    ///
    /// Follows the 2D-canvas rule: a span of a full turn or more is a whole
    /// circle, anything else is reduced modulo a full turn.
    pub fn traced_sweep(&self) -> f32 {
        match *self {
            PathCmd::Arc {
                start,
                end,
                winding,
                ..
            } => {
                let raw = match winding {
                    Winding::Clockwise => end - start,
                    Winding::CounterClockwise => start - end,
                };
                let span = if raw >= TAU { TAU } else { raw.rem_euclid(TAU) };
                match winding {
                    Winding::Clockwise => span,
                    Winding::CounterClockwise => -span,
                }
            }
            _ => 0.0,
        }
    }
}

/// Point at `radius` along `angle` from the origin.
#[inline]
pub fn polar(radius: f32, angle: f32) -> Vec2 {
    vec2(radius * angle.cos(), radius * angle.sin())
}

/// Sample points along an arc command, both ends included.
pub fn arc_points(center: Vec2, radius: f32, start: f32, sweep: f32) -> Vec<Vec2> {
    let n = ((sweep.abs() / ARC_STEP).ceil() as usize).max(1);
    (0..=n)
        .map(|k| center + polar(radius, start + sweep * k as f32 / n as f32))
        .collect()
}

/// A flattened subpath.
#[derive(Debug, Clone, PartialEq)]
pub struct Polyline {
    /// Vertices in tracing order
    pub points: Vec<Vec2>,
    /// Whether the subpath was explicitly closed
    pub closed: bool,
}

impl Polyline {
    /// Shoelace area, treating the polyline as a closed polygon.
    pub fn signed_area(&self) -> f32 {
        let n = self.points.len();
        if n < 3 {
            return 0.0;
        }
        let mut twice = 0.0;
        for i in 0..n {
            let a = self.points[i];
            let b = self.points[(i + 1) % n];
            twice += a.x * b.y - b.x * a.y;
        }
        twice * 0.5
    }
}

/// Backend-independent vector path.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Path {
    cmds: Vec<PathCmd>,
}

impl Path {
    /// Start building a path.
    pub fn builder() -> PathBuilder {
        PathBuilder::default()
    }

    /// The raw commands.
    pub fn commands(&self) -> &[PathCmd] {
        &self.cmds
    }

    /// Arc commands in tracing order.
    pub fn arcs(&self) -> impl Iterator<Item = &PathCmd> + '_ {
        self.cmds
            .iter()
            .filter(|c| matches!(c, PathCmd::Arc { .. }))
    }

    /// Same path moved by `offset`.
    pub fn translated(&self, offset: Vec2) -> Path {
        let cmds = self
            .cmds
            .iter()
            .map(|cmd| match *cmd {
                PathCmd::MoveTo(p) => PathCmd::MoveTo(p + offset),
                PathCmd::LineTo(p) => PathCmd::LineTo(p + offset),
                PathCmd::Arc {
                    center,
                    radius,
                    start,
                    end,
                    winding,
                } => PathCmd::Arc {
                    center: center + offset,
                    radius,
                    start,
                    end,
                    winding,
                },
                PathCmd::Close => PathCmd::Close,
            })
            .collect();
        Path { cmds }
    }

    /// Flatten into one polyline per subpath.
    pub fn flatten(&self) -> Vec<Polyline> {
        let mut out = Vec::new();
        let mut current: Option<Polyline> = None;

        fn push_point(line: &mut Polyline, p: Vec2) {
            if line.points.last() != Some(&p) {
                line.points.push(p);
            }
        }

        for cmd in &self.cmds {
            match *cmd {
                PathCmd::MoveTo(p) => {
                    if let Some(line) = current.take() {
                        out.push(line);
                    }
                    current = Some(Polyline {
                        points: vec![p],
                        closed: false,
                    });
                }
                PathCmd::LineTo(p) => match current.as_mut() {
                    Some(line) => push_point(line, p),
                    None => {
                        current = Some(Polyline {
                            points: vec![p],
                            closed: false,
                        })
                    }
                },
                PathCmd::Arc {
                    center,
                    radius,
                    start,
                    ..
                } => {
                    let pts = arc_points(center, radius, start, cmd.traced_sweep());
                    let line = current.get_or_insert_with(|| Polyline {
                        points: Vec::with_capacity(pts.len()),
                        closed: false,
                    });
                    for p in pts {
                        push_point(line, p);
                    }
                }
                PathCmd::Close => {
                    if let Some(mut line) = current.take() {
                        line.closed = true;
                        out.push(line);
                    }
                }
            }
        }
        if let Some(line) = current {
            out.push(line);
        }
        out
    }

    /// Sum of the signed areas of all subpaths.
    ///
    /// Subpaths traced in opposite directions cancel, so a ring reports the
    /// area of the band only.
    pub fn signed_area(&self) -> f32 {
        self.flatten().iter().map(Polyline::signed_area).sum()
    }
}

/// `move_to / line_to / arc / close` builder for [`Path`].
#[derive(Debug, Default)]
pub struct PathBuilder {
    cmds: Vec<PathCmd>,
}

impl PathBuilder {
    /// Start a new subpath at `p`.
    pub fn move_to(mut self, p: Vec2) -> Self {
        self.cmds.push(PathCmd::MoveTo(p));
        self
    }

    /// Straight edge to `p`.
    pub fn line_to(mut self, p: Vec2) -> Self {
        self.cmds.push(PathCmd::LineTo(p));
        self
    }

    /// Arc around `center` from `start` to `end` (radians).
    pub fn arc(mut self, center: Vec2, radius: f32, start: f32, end: f32, winding: Winding) -> Self {
        self.cmds.push(PathCmd::Arc {
            center,
            radius,
            start,
            end,
            winding,
        });
        self
    }

    /// Close the current subpath.
    pub fn close(mut self) -> Self {
        self.cmds.push(PathCmd::Close);
        self
    }

    /// Finish the path.
    pub fn build(self) -> Path {
        Path { cmds: self.cmds }
    }
}
