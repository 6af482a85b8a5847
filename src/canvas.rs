use crate::core::{Painter, Rgba, StyleCache, TextAlign, TextBaseline, TextStyle};
use glam::Vec2;
use std::f64::consts::TAU;
use wasm_bindgen::JsCast;
use web_sys as web;

/// `Painter` over a 2D canvas context. Scene coordinates are CSS pixels; the
/// backing store is CSS size × devicePixelRatio, so each frame starts by
/// setting a uniform scale.
pub struct CanvasPainter {
    ctx: web::CanvasRenderingContext2d,
    styles: StyleCache,
}

impl CanvasPainter {
    pub fn new(canvas: &web::HtmlCanvasElement) -> anyhow::Result<Self> {
        let ctx = canvas
            .get_context("2d")
            .map_err(|e| anyhow::anyhow!("{:?}", e))?
            .ok_or_else(|| anyhow::anyhow!("2d context unavailable"))?
            .dyn_into::<web::CanvasRenderingContext2d>()
            .map_err(|e| anyhow::anyhow!("{:?}", e))?;
        Ok(Self {
            ctx,
            styles: StyleCache::default(),
        })
    }

    pub fn begin_frame(&mut self, scale: f64) {
        if let Some(c) = self.ctx.canvas() {
            self.styles.begin((c.width(), c.height()));
        }
        _ = self.ctx.set_transform(scale, 0.0, 0.0, scale, 0.0, 0.0);
    }

    fn set_fill(&mut self, color: Rgba) {
        if let Some(css) = self.styles.fill(color) {
            self.ctx.set_fill_style_str(&css);
        }
    }

    fn set_stroke(&mut self, color: Rgba, weight: f32) {
        if let Some(css) = self.styles.stroke(color) {
            self.ctx.set_stroke_style_str(&css);
        }
        self.ctx.set_line_width(weight as f64);
    }
}

impl Painter for CanvasPainter {
    fn clear(&mut self, color: Rgba) {
        self.set_fill(color.alpha(255.0));
        let canvas = self.ctx.canvas();
        _ = self.ctx.save();
        _ = self.ctx.set_transform(1.0, 0.0, 0.0, 1.0, 0.0, 0.0);
        if let Some(c) = canvas {
            self.ctx
                .fill_rect(0.0, 0.0, c.width() as f64, c.height() as f64);
        }
        self.ctx.restore();
    }

    fn fill_rect(&mut self, pos: Vec2, size: Vec2, color: Rgba) {
        if color.is_transparent() {
            return;
        }
        self.set_fill(color);
        self.ctx
            .fill_rect(pos.x as f64, pos.y as f64, size.x as f64, size.y as f64);
    }

    fn fill_round_rect(&mut self, pos: Vec2, size: Vec2, radius: f32, color: Rgba) {
        if color.is_transparent() {
            return;
        }
        self.set_fill(color);
        let r = radius.min(size.x / 2.0).min(size.y / 2.0) as f64;
        let (x, y, w, h) = (pos.x as f64, pos.y as f64, size.x as f64, size.y as f64);
        self.ctx.begin_path();
        self.ctx.move_to(x + r, y);
        _ = self.ctx.arc_to(x + w, y, x + w, y + h, r);
        _ = self.ctx.arc_to(x + w, y + h, x, y + h, r);
        _ = self.ctx.arc_to(x, y + h, x, y, r);
        _ = self.ctx.arc_to(x, y, x + w, y, r);
        self.ctx.close_path();
        self.ctx.fill();
    }

    fn fill_ellipse(&mut self, center: Vec2, size: Vec2, rotation: f32, color: Rgba) {
        if color.is_transparent() || size.x <= 0.0 || size.y <= 0.0 {
            return;
        }
        self.set_fill(color);
        self.ctx.begin_path();
        _ = self.ctx.ellipse(
            center.x as f64,
            center.y as f64,
            size.x as f64 / 2.0,
            size.y as f64 / 2.0,
            rotation as f64,
            0.0,
            TAU,
        );
        self.ctx.fill();
    }

    fn stroke_ellipse(&mut self, center: Vec2, size: Vec2, weight: f32, color: Rgba) {
        if color.is_transparent() || size.x <= 0.0 || size.y <= 0.0 {
            return;
        }
        self.set_stroke(color, weight);
        self.ctx.begin_path();
        _ = self.ctx.ellipse(
            center.x as f64,
            center.y as f64,
            size.x as f64 / 2.0,
            size.y as f64 / 2.0,
            0.0,
            0.0,
            TAU,
        );
        self.ctx.stroke();
    }

    fn line(&mut self, from: Vec2, to: Vec2, weight: f32, color: Rgba) {
        if color.is_transparent() {
            return;
        }
        self.set_stroke(color, weight);
        self.ctx.begin_path();
        self.ctx.move_to(from.x as f64, from.y as f64);
        self.ctx.line_to(to.x as f64, to.y as f64);
        self.ctx.stroke();
    }

    fn fill_polygon(&mut self, points: &[Vec2], color: Rgba) {
        let Some((first, rest)) = points.split_first() else {
            return;
        };
        if color.is_transparent() {
            return;
        }
        self.set_fill(color);
        self.ctx.begin_path();
        self.ctx.move_to(first.x as f64, first.y as f64);
        for p in rest {
            self.ctx.line_to(p.x as f64, p.y as f64);
        }
        self.ctx.close_path();
        self.ctx.fill();
    }

    fn text(&mut self, text: &str, pos: Vec2, style: TextStyle) {
        if style.color.is_transparent() {
            return;
        }
        self.set_fill(style.color);
        self.ctx
            .set_font(&format!("{}px system-ui, sans-serif", style.size));
        self.ctx.set_text_align(match style.align {
            TextAlign::Left => "left",
            TextAlign::Center => "center",
            TextAlign::Right => "right",
        });
        self.ctx.set_text_baseline(match style.baseline {
            TextBaseline::Top => "top",
            TextBaseline::Middle => "middle",
            TextBaseline::Bottom => "bottom",
        });
        _ = self.ctx.fill_text(text, pos.x as f64, pos.y as f64);
    }
}
