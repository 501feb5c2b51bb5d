use snow_core::viewport;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

/// Keep the canvas backing store at CSS size times the clamped device pixel
/// ratio.
pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement) {
    if let Some(w) = web::window() {
        let rect = canvas.get_bounding_client_rect();
        let (w_px, h_px) =
            viewport::backing_size(rect.width(), rect.height(), w.device_pixel_ratio());
        canvas.set_width(w_px);
        canvas.set_height(h_px);
    }
}
