//! Canvas drawing primitives for the spectrum surface.

use anyhow::anyhow;
use radio_core::{
    bar_rect, live_badge, pause_glyph, BarLayout, Rect, SurfaceSize, BACKGROUND_FILL,
    GLYPH_FILL, GRADIENT_BOTTOM, GRADIENT_TOP, LIVE_DOT_FILL, LIVE_FONT,
};
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct Surface {
    canvas: web::HtmlCanvasElement,
    ctx: web::CanvasRenderingContext2d,
}

impl Surface {
    pub fn attach(canvas: web::HtmlCanvasElement) -> anyhow::Result<Self> {
        let ctx = canvas
            .get_context("2d")
            .map_err(|e| anyhow!("get_context error: {:?}", e))?
            .ok_or_else(|| anyhow!("no 2d context on #audio-visualizer"))?
            .dyn_into::<web::CanvasRenderingContext2d>()
            .map_err(|e| anyhow!("{:?}", e))?;
        Ok(Self { canvas, ctx })
    }

    /// Resync the backing store to the element's offset dimensions so bar
    /// geometry is computed against what is actually on screen.
    pub fn sync_backing_size(&self) {
        let w = self.canvas.offset_width().max(1) as u32;
        let h = self.canvas.offset_height().max(1) as u32;
        self.canvas.set_width(w);
        self.canvas.set_height(h);
    }

    pub fn size(&self) -> SurfaceSize {
        SurfaceSize {
            width: self.canvas.width(),
            height: self.canvas.height(),
        }
    }

    fn fill_rect(&self, r: Rect) {
        self.ctx
            .fill_rect(r.x as f64, r.y as f64, r.w as f64, r.h as f64);
    }

    /// Solid background fill over the whole surface.
    pub fn clear(&self) {
        let size = self.size();
        self.ctx.set_fill_style_str(BACKGROUND_FILL);
        self.ctx
            .fill_rect(0.0, 0.0, size.width as f64, size.height as f64);
    }

    /// Blank background plus the centered two-bar paused glyph.
    pub fn paint_idle(&self) {
        self.clear();
        self.ctx.set_fill_style_str(GLYPH_FILL);
        for r in pause_glyph(self.size()) {
            self.fill_rect(r);
        }
    }

    fn draw_live_badge(&self) {
        let badge = live_badge(self.size());
        self.ctx.set_fill_style_str(GLYPH_FILL);
        self.ctx.set_font(LIVE_FONT);
        let _ = self
            .ctx
            .fill_text("Live", badge.text_x as f64, badge.text_y as f64);
        self.ctx.set_fill_style_str(LIVE_DOT_FILL);
        self.fill_rect(badge.dot);
    }

    /// One live frame: background, "Live" badge, one gradient bar per bin.
    pub fn paint_spectrum(&self, levels: &[u8]) {
        self.clear();
        self.draw_live_badge();

        let size = self.size();
        let layout = BarLayout::new(size.width, levels.len());
        let gradient = self
            .ctx
            .create_linear_gradient(0.0, 0.0, 0.0, size.height as f64);
        let _ = gradient.add_color_stop(0.0, GRADIENT_TOP);
        let _ = gradient.add_color_stop(1.0, GRADIENT_BOTTOM);
        self.ctx.set_fill_style_canvas_gradient(&gradient);

        for (i, &magnitude) in levels.iter().enumerate() {
            self.fill_rect(bar_rect(&layout, i, magnitude, size));
        }
    }
}
