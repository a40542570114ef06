//! Macroquad drawing surface for composed scenes.
//!
//! All geometry arrives in logical canvas units; the viewport scale is applied
//! here, on the way to the screen.

/// Triangulation of paths into drawable meshes.
pub mod tessellate;
mod textures;

pub use textures::TextureCache;

use crate::assets::AssetResolver;
use crate::geometry::Clip;
use crate::scene::{Primitive, Scene, Shadow, Stroke, Transform};
use crate::viewport::ViewportScaler;
use macroquad::models::{draw_mesh, Mesh, Vertex};
use macroquad::prelude::*;
use tessellate::Triangle;

// Keeps every mesh below Macroquad's per-draw-call index limit.
const MESH_CHUNK_TRIANGLES: usize = 1600;

fn fade(color: Color, opacity: f32) -> Color {
    Color::new(color.r, color.g, color.b, color.a * opacity)
}

fn quad(size: Vec2) -> Vec<Triangle> {
    let (a, b, c, d) = (Vec2::ZERO, vec2(size.x, 0.0), size, vec2(0.0, size.y));
    vec![[a, b, c], [a, c, d]]
}

/// Draw local-space triangles through `transform`, optionally textured.
///
/// `uv` maps a local point to normalised texture coordinates.
fn draw_triangles(
    tris: &[Triangle],
    transform: &Transform,
    scale: f32,
    color: Color,
    texture: Option<&Texture2D>,
    uv: impl Fn(Vec2) -> Vec2,
) {
    for chunk in tris.chunks(MESH_CHUNK_TRIANGLES) {
        let vertices: Vec<Vertex> = chunk
            .iter()
            .flatten()
            .map(|&local| {
                let p = transform.apply(local) * scale;
                let t = uv(local);
                Vertex::new(p.x, p.y, 0.0, t.x, t.y, color)
            })
            .collect();
        let indices = (0..vertices.len() as u16).collect();
        draw_mesh(&Mesh {
            vertices,
            indices,
            texture: texture.cloned(),
        });
    }
}

fn draw_image(
    texture: &Texture2D,
    crop: Option<Rect>,
    size: Vec2,
    clip: &Clip,
    transform: &Transform,
    opacity: f32,
    scale: f32,
) {
    let tex_size = vec2(texture.width(), texture.height());
    if size.x <= 0.0 || size.y <= 0.0 || tex_size.x <= 0.0 || tex_size.y <= 0.0 {
        return;
    }
    let source = crop.unwrap_or_else(|| Rect::new(0.0, 0.0, tex_size.x, tex_size.y));
    let tris = match clip {
        Clip::Unclipped => quad(size),
        Clip::Path(path) => tessellate::fill(path),
    };
    let uv = |local: Vec2| {
        let frac = local / size;
        (source.point() + frac * source.size()) / tex_size
    };
    draw_triangles(
        &tris,
        transform,
        scale,
        fade(WHITE, opacity),
        Some(texture),
        uv,
    );
}

fn draw_outline(edges: &[(Vec2, Vec2)], transform: &Transform, stroke: Stroke, opacity: f32, scale: f32) {
    let color = fade(stroke.color, opacity);
    for &(a, b) in edges {
        let (a, b) = (transform.apply(a) * scale, transform.apply(b) * scale);
        draw_line(a.x, a.y, b.x, b.y, stroke.width * scale, color);
    }
}

/// Same placement with flips dropped; Macroquad cannot mirror glyphs.
fn upright(transform: &Transform) -> Transform {
    Transform {
        scale: transform.scale.abs(),
        ..*transform
    }
}

/// Baseline origin of a label in logical units, for a font `ascent` above it.
///
/// Flipped labels are placed upright so they stay centred on their anchor.
fn label_baseline(transform: &Transform, ascent: f32) -> Vec2 {
    upright(transform).apply(vec2(0.0, ascent))
}

fn draw_label(
    text: &str,
    font_size: f32,
    color: Color,
    shadow: Shadow,
    transform: &Transform,
    opacity: f32,
    scale: f32,
) {
    let sy = transform.scale.y.abs();
    if sy == 0.0 || scale <= 0.0 {
        return;
    }
    let size = (font_size * scale).round().max(1.0) as u16;
    let ascent = measure_text(text, None, size, 1.0).offset_y / scale;
    let baseline = label_baseline(transform, ascent) * scale;
    let params = |color: Color| TextParams {
        font_size: size,
        font_scale: sy,
        font_scale_aspect: transform.scale.x.abs() / sy,
        rotation: transform.rotation.to_radians(),
        color,
        ..Default::default()
    };

    // Macroquad has no blur, so the shadow is a plain offset copy.
    let shadow_at = baseline + shadow.offset * scale;
    draw_text_ex(text, shadow_at.x, shadow_at.y, params(fade(shadow.color, opacity)));
    draw_text_ex(text, baseline.x, baseline.y, params(fade(color, opacity)));
}

fn draw_primitive(prim: &Primitive, textures: &mut TextureCache, assets: &dyn AssetResolver, scale: f32) {
    match prim {
        Primitive::Image {
            sheet,
            crop,
            size,
            clip,
            transform,
            opacity,
        } => {
            if let Some(tex) = textures.request(&assets.sheet(sheet)) {
                draw_image(tex, *crop, *size, clip, transform, *opacity, scale);
            }
        }
        Primitive::Rect {
            size,
            fill,
            transform,
            opacity,
        } => draw_triangles(
            &quad(*size),
            transform,
            scale,
            fade(*fill, *opacity),
            None,
            |_| Vec2::ZERO,
        ),
        Primitive::Segment {
            start,
            end,
            width,
            color,
            opacity,
        } => {
            let (a, b) = (*start * scale, *end * scale);
            draw_line(a.x, a.y, b.x, b.y, width * scale, fade(*color, *opacity));
        }
        Primitive::Circle {
            center,
            radius,
            fill,
            stroke,
            opacity,
        } => {
            let c = *center * scale;
            draw_circle(c.x, c.y, radius * scale, fade(*fill, *opacity));
            draw_circle_lines(
                c.x,
                c.y,
                radius * scale,
                stroke.width * scale,
                fade(stroke.color, *opacity),
            );
        }
        Primitive::Shape {
            path,
            fill,
            stroke,
            transform,
            opacity,
        } => {
            draw_triangles(
                &tessellate::fill(path),
                transform,
                scale,
                fade(*fill, *opacity),
                None,
                |_| Vec2::ZERO,
            );
            draw_outline(&tessellate::outline(path), transform, *stroke, *opacity, scale);
        }
        Primitive::Text {
            text,
            font_size,
            color,
            shadow,
            transform,
            opacity,
        } => draw_label(text, *font_size, *color, *shadow, transform, *opacity, scale),
    }
}

/// Draw the background and every primitive, bottom to top.
///
/// Images whose texture is still loading (or failed to load) are skipped for
/// this frame.
pub fn draw_scene(
    scene: &Scene,
    textures: &mut TextureCache,
    assets: &dyn AssetResolver,
    viewport: &ViewportScaler,
) {
    let scale = viewport.scale();
    if let Some(bg) = textures.request(&assets.background(scene.background)) {
        draw_texture_ex(
            bg,
            0.0,
            0.0,
            WHITE,
            DrawTextureParams {
                dest_size: Some(viewport.canvas_size()),
                ..Default::default()
            },
        );
    }
    for prim in &scene.primitives {
        draw_primitive(prim, textures, assets, scale);
    }
}
