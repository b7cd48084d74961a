use crate::constants::CLEAR_RGB;
use super::CanvasContext;
use patatap_core::Particle;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

#[inline]
fn js_err(e: JsValue) -> anyhow::Error {
    anyhow::anyhow!("{:?}", e)
}

/// Fallback renderer for browsers without WebGPU.
pub struct Canvas2dState {
    ctx: web::CanvasRenderingContext2d,
    clear_css: String,
}

impl Canvas2dState {
    pub fn new(canvas: &web::HtmlCanvasElement) -> anyhow::Result<Self> {
        let ctx = canvas
            .get_context(CanvasContext::TwoD.context_id())
            .map_err(js_err)?
            .ok_or_else(|| anyhow::anyhow!("canvas has no 2d context"))?
            .dyn_into::<web::CanvasRenderingContext2d>()
            .map_err(|e| anyhow::anyhow!("{:?}", e))?;
        let byte = |v: f64| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
        let clear_css = format!(
            "rgb({}, {}, {})",
            byte(CLEAR_RGB[0]),
            byte(CLEAR_RGB[1]),
            byte(CLEAR_RGB[2])
        );
        Ok(Self { ctx, clear_css })
    }

    pub fn render(&mut self, width: u32, height: u32, particles: &[Particle]) -> anyhow::Result<()> {
        let ctx = &self.ctx;
        ctx.set_global_composite_operation("source-over")
            .map_err(js_err)?;
        ctx.set_fill_style_str(&self.clear_css);
        ctx.fill_rect(0.0, 0.0, width as f64, height as f64);

        ctx.set_global_composite_operation("screen").map_err(js_err)?;
        for p in particles {
            let pos = p.position();
            ctx.begin_path();
            ctx.arc(
                pos.x as f64,
                pos.y as f64,
                p.radius() as f64,
                0.0,
                std::f64::consts::TAU,
            )
            .map_err(js_err)?;
            ctx.set_fill_style_str(&p.fill().to_css());
            ctx.fill();
            ctx.set_stroke_style_str(&p.stroke().to_css());
            ctx.set_line_width(p.stroke_width() as f64);
            ctx.stroke();
        }
        Ok(())
    }
}
