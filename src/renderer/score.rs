//! Score display: a cached glyph texture at a fixed screen position
//!
//! The score text is rasterized once at construction and uploaded as a
//! texture; each frame only re-draws the cached quad. GPU resources are
//! released when the display is dropped, on every exit path.

use std::fs;
use std::path::Path;

use ab_glyph::{Font, FontVec, Glyph, GlyphId, PxScale, ScaleFont, point};
use anyhow::{Context, Result};
use glam::Vec2;
use wgpu::util::DeviceExt;

use super::pipeline::RenderState;
use super::vertex::TexVertex;
use crate::sim::Rect;

/// Load the score font from disk, failing fast with a diagnostic.
pub fn load_font(path: &Path) -> Result<FontVec> {
    let bytes = fs::read(path)
        .with_context(|| format!("score font not found at {}", path.display()))?;
    FontVec::try_from_vec(bytes)
        .with_context(|| format!("invalid font data in {}", path.display()))
}

/// A white-on-transparent RGBA bitmap of rasterized text
pub struct TextBitmap {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<u8>,
}

/// Rasterize `text` in solid white at `px` pixels.
///
/// The bitmap height spans the font's full line (ascent to descent) so
/// differently-shaped digits share a baseline.
pub fn rasterize(font: &FontVec, text: &str, px: f32) -> TextBitmap {
    let scaled = font.as_scaled(PxScale::from(px));
    let ascent = scaled.ascent();
    let height = (ascent - scaled.descent()).ceil().max(1.0) as u32;

    // Lay out the glyphs on the baseline, tracking total advance
    let mut glyphs: Vec<Glyph> = Vec::with_capacity(text.len());
    let mut caret = 0.0f32;
    let mut prev: Option<GlyphId> = None;
    for ch in text.chars() {
        let mut glyph = scaled.scaled_glyph(ch);
        if let Some(prev_id) = prev {
            caret += scaled.kern(prev_id, glyph.id);
        }
        glyph.position = point(caret, ascent);
        caret += scaled.h_advance(glyph.id);
        prev = Some(glyph.id);
        glyphs.push(glyph);
    }
    let width = caret.ceil().max(1.0) as u32;

    let mut pixels = vec![0u8; (width * height * 4) as usize];
    for glyph in glyphs {
        let Some(outlined) = scaled.outline_glyph(glyph) else {
            continue;
        };
        let bounds = outlined.px_bounds();
        outlined.draw(|x, y, coverage| {
            let col = bounds.min.x as i32 + x as i32;
            let row = bounds.min.y as i32 + y as i32;
            if col < 0 || row < 0 || col as u32 >= width || row as u32 >= height {
                return;
            }
            let idx = ((row as u32 * width + col as u32) * 4) as usize;
            let alpha = (coverage * 255.0) as u8;
            pixels[idx] = 0xFF;
            pixels[idx + 1] = 0xFF;
            pixels[idx + 2] = 0xFF;
            pixels[idx + 3] = pixels[idx + 3].max(alpha);
        });
    }

    TextBitmap {
        width,
        height,
        pixels,
    }
}

/// One player's rendered score
///
/// Owns the uploaded glyph texture and the quad that places it on
/// screen. Nothing updates the texture after construction; the score
/// stays at its initial text.
pub struct ScoreDisplay {
    /// Screen-space rectangle sized to the texture's natural dimensions
    pub rect: Rect,
    pub texture: wgpu::Texture,
    bind_group: wgpu::BindGroup,
    vertex_buffer: wgpu::Buffer,
}

impl ScoreDisplay {
    /// Rasterize `text`, upload it, and cache the draw quad at `position`.
    pub fn new(
        position: Vec2,
        text: &str,
        font: &FontVec,
        render: &RenderState,
    ) -> Result<Self> {
        let bitmap = rasterize(font, text, crate::consts::FONT_SIZE);
        anyhow::ensure!(
            !bitmap.pixels.is_empty(),
            "rasterized score text {text:?} is empty"
        );

        let size = wgpu::Extent3d {
            width: bitmap.width,
            height: bitmap.height,
            depth_or_array_layers: 1,
        };
        let texture = render.device.create_texture(&wgpu::TextureDescriptor {
            label: Some("score_texture"),
            size,
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format: wgpu::TextureFormat::Rgba8UnormSrgb,
            usage: wgpu::TextureUsages::TEXTURE_BINDING | wgpu::TextureUsages::COPY_DST,
            view_formats: &[],
        });

        render.queue.write_texture(
            wgpu::TexelCopyTextureInfo {
                texture: &texture,
                mip_level: 0,
                origin: wgpu::Origin3d::ZERO,
                aspect: wgpu::TextureAspect::All,
            },
            &bitmap.pixels,
            wgpu::TexelCopyBufferLayout {
                offset: 0,
                bytes_per_row: Some(4 * bitmap.width),
                rows_per_image: Some(bitmap.height),
            },
            size,
        );

        let view = texture.create_view(&wgpu::TextureViewDescriptor::default());
        let bind_group = render.device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("score_bind_group"),
            layout: &render.text_bind_group_layout,
            entries: &[
                wgpu::BindGroupEntry {
                    binding: 0,
                    resource: wgpu::BindingResource::TextureView(&view),
                },
                wgpu::BindGroupEntry {
                    binding: 1,
                    resource: wgpu::BindingResource::Sampler(&render.glyph_sampler),
                },
            ],
        });

        let rect = Rect::new(
            position,
            Vec2::new(bitmap.width as f32, bitmap.height as f32),
        );

        // The quad never moves, so its vertices are cached in NDC
        let (x0, y0) = render.pixel_to_ndc(rect.min.x, rect.min.y);
        let (x1, y1) = render.pixel_to_ndc(rect.min.x + rect.size.x, rect.min.y + rect.size.y);
        let quad = [
            TexVertex::new(x0, y0, 0.0, 0.0),
            TexVertex::new(x0, y1, 0.0, 1.0),
            TexVertex::new(x1, y0, 1.0, 0.0),
            TexVertex::new(x1, y0, 1.0, 0.0),
            TexVertex::new(x0, y1, 0.0, 1.0),
            TexVertex::new(x1, y1, 1.0, 1.0),
        ];
        let vertex_buffer = render
            .device
            .create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some("score_vertex_buffer"),
                contents: bytemuck::cast_slice(&quad),
                usage: wgpu::BufferUsages::VERTEX,
            });

        Ok(Self {
            rect,
            texture,
            bind_group,
            vertex_buffer,
        })
    }

    /// Issue the cached quad; the text pipeline must already be set.
    pub fn draw(&self, render_pass: &mut wgpu::RenderPass<'_>) {
        render_pass.set_bind_group(0, &self.bind_group, &[]);
        render_pass.set_vertex_buffer(0, self.vertex_buffer.slice(..));
        render_pass.draw(0..6, 0..1);
    }
}
