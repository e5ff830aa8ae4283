use crate::constants::MAX_DEVICE_PIXEL_RATIO;
use crate::core::{EngineError, Hsl, Paint, Surface};
use glam::Vec2;
use std::f64::consts::TAU;
use wasm_bindgen::JsCast;
use web_sys as web;

/// [`Surface`] backed by a canvas 2D context.
///
/// The backing store is sized in device pixels by `dom::sync_canvas_backing_size`;
/// every frame starts by re-applying the device-pixel-ratio transform so all
/// drawing happens in CSS pixels.
pub struct Canvas2dSurface {
    canvas: web::HtmlCanvasElement,
    ctx: web::CanvasRenderingContext2d,
}

impl Canvas2dSurface {
    pub fn from_canvas(canvas: &web::HtmlCanvasElement) -> Result<Self, EngineError> {
        let ctx = canvas
            .get_context("2d")
            .map_err(|e| EngineError::ContextUnavailable(format!("{:?}", e)))?
            .ok_or(EngineError::NoSurface)?
            .dyn_into::<web::CanvasRenderingContext2d>()
            .map_err(|e| EngineError::ContextUnavailable(format!("{:?}", e)))?;
        Ok(Self {
            canvas: canvas.clone(),
            ctx,
        })
    }

    fn device_pixel_ratio() -> f64 {
        web::window()
            .map(|w| w.device_pixel_ratio())
            .unwrap_or(1.0)
            .min(MAX_DEVICE_PIXEL_RATIO)
    }
}

impl Surface for Canvas2dSurface {
    fn logical_size(&self) -> Vec2 {
        let (cw, ch) = (self.canvas.client_width(), self.canvas.client_height());
        if cw > 0 && ch > 0 {
            Vec2::new(cw as f32, ch as f32)
        } else {
            Vec2::new(self.canvas.width() as f32, self.canvas.height() as f32)
        }
    }

    fn clear(&mut self, color: Hsl) {
        let dpr = Self::device_pixel_ratio();
        _ = self.ctx.set_transform(dpr, 0.0, 0.0, dpr, 0.0, 0.0);
        self.ctx.set_global_alpha(1.0);
        let size = self.logical_size();
        self.ctx.set_fill_style_str(&color.to_css());
        self.ctx
            .fill_rect(0.0, 0.0, size.x as f64, size.y as f64);
    }

    fn save(&mut self) {
        self.ctx.save();
    }

    fn restore(&mut self) {
        self.ctx.restore();
    }

    fn translate(&mut self, offset: Vec2) {
        _ = self.ctx.translate(offset.x as f64, offset.y as f64);
    }

    fn rotate(&mut self, radians: f32) {
        _ = self.ctx.rotate(radians as f64);
    }

    fn scale(&mut self, factor: f32) {
        _ = self.ctx.scale(factor as f64, factor as f64);
    }

    fn set_alpha(&mut self, alpha: f32) {
        self.ctx.set_global_alpha(alpha as f64);
    }

    fn set_fill(&mut self, paint: &Paint) {
        self.ctx.set_fill_style_str(paint.css());
    }

    fn set_stroke(&mut self, paint: &Paint, width: f32) {
        self.ctx.set_stroke_style_str(paint.css());
        self.ctx.set_line_width(width as f64);
    }

    fn begin_path(&mut self) {
        self.ctx.begin_path();
    }

    fn move_to(&mut self, p: Vec2) {
        self.ctx.move_to(p.x as f64, p.y as f64);
    }

    fn line_to(&mut self, p: Vec2) {
        self.ctx.line_to(p.x as f64, p.y as f64);
    }

    fn circle(&mut self, center: Vec2, radius: f32) {
        _ = self
            .ctx
            .arc(center.x as f64, center.y as f64, radius.max(0.0) as f64, 0.0, TAU);
    }

    fn bezier_to(&mut self, c1: Vec2, c2: Vec2, end: Vec2) {
        self.ctx.bezier_curve_to(
            c1.x as f64,
            c1.y as f64,
            c2.x as f64,
            c2.y as f64,
            end.x as f64,
            end.y as f64,
        );
    }

    fn arc_to(&mut self, corner: Vec2, end: Vec2, radius: f32) {
        _ = self.ctx.arc_to(
            corner.x as f64,
            corner.y as f64,
            end.x as f64,
            end.y as f64,
            radius as f64,
        );
    }

    fn close_path(&mut self) {
        self.ctx.close_path();
    }

    fn fill(&mut self) {
        self.ctx.fill();
    }

    fn stroke(&mut self) {
        self.ctx.stroke();
    }
}
