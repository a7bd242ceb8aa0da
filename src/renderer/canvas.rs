//! Canvas 2D presentation of frame reports

use std::f64::consts::TAU;

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::consts::EVIL_LINE_WIDTH;
use crate::sim::{DrawCommand, FrameReport, Paint, Rgb};

/// Holds the 2D context for the lifetime of the page
pub struct CanvasRenderer {
    ctx: CanvasRenderingContext2d,
    pub width: f64,
    pub height: f64,
}

impl CanvasRenderer {
    /// Acquire the 2D context of `canvas`
    pub fn new(canvas: &HtmlCanvasElement) -> Result<Self, JsValue> {
        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("canvas has no 2d context"))?
            .dyn_into::<CanvasRenderingContext2d>()?;

        Ok(Self {
            ctx,
            width: canvas.width() as f64,
            height: canvas.height() as f64,
        })
    }

    /// Paint the trail overlay, then every draw command in order
    pub fn render(&self, frame: &FrameReport) -> Result<(), JsValue> {
        self.ctx
            .set_fill_style_str(&Rgb::BLACK.to_css_alpha(frame.overlay_alpha));
        self.ctx.fill_rect(0.0, 0.0, self.width, self.height);

        for cmd in &frame.draw_list {
            self.draw_circle(cmd)?;
        }
        Ok(())
    }

    fn draw_circle(&self, cmd: &DrawCommand) -> Result<(), JsValue> {
        let css = cmd.color.to_css();
        self.ctx.begin_path();
        self.ctx
            .arc(cmd.pos.x as f64, cmd.pos.y as f64, cmd.radius as f64, 0.0, TAU)?;

        match cmd.paint {
            Paint::Fill => {
                self.ctx.set_fill_style_str(&css);
                self.ctx.fill();
            }
            Paint::Stroke => {
                self.ctx.set_stroke_style_str(&css);
                self.ctx.set_line_width(EVIL_LINE_WIDTH);
                self.ctx.stroke();
            }
        }
        Ok(())
    }
}
