use glam::Vec2;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

pub fn canvas_by_id(document: &web::Document, id: &str) -> anyhow::Result<web::HtmlCanvasElement> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", id))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))
}

/// Match the canvas backing store to CSS size × devicePixelRatio.
/// Returns the CSS size, which is the coordinate space scenes draw in.
///
/// Assigning width or height resets the 2D context state even when the value
/// is unchanged, so the backing store is only touched when its size differs.
pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement) -> Vec2 {
    let rect = canvas.get_bounding_client_rect();
    if let Some(w) = web::window() {
        let dpr = w.device_pixel_ratio();
        let w_px = ((rect.width() * dpr) as u32).max(1);
        let h_px = ((rect.height() * dpr) as u32).max(1);
        if canvas.width() != w_px {
            canvas.set_width(w_px);
        }
        if canvas.height() != h_px {
            canvas.set_height(h_px);
        }
    }
    Vec2::new(rect.width() as f32, rect.height() as f32)
}

/// Backing pixels per CSS pixel, as currently applied to the canvas.
pub fn backing_scale(canvas: &web::HtmlCanvasElement, css_width: f32) -> f64 {
    if css_width > 0.0 {
        canvas.width() as f64 / css_width as f64
    } else {
        1.0
    }
}

/// Pointer position relative to the canvas, in CSS pixels.
#[inline]
pub fn pointer_css(ev: &web::MouseEvent, canvas: &web::HtmlCanvasElement) -> Vec2 {
    let rect = canvas.get_bounding_client_rect();
    Vec2::new(
        ev.client_x() as f32 - rect.left() as f32,
        ev.client_y() as f32 - rect.top() as f32,
    )
}
