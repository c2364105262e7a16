use crate::constants::{PANEL_RIGHT_IN, PANEL_RIGHT_OUT};
use crate::dom;
use web_sys as web;

#[inline]
pub fn show(overlay: &web::HtmlElement, panel: &web::HtmlElement) {
    dom::set_style(overlay, "display", "block");
    dom::set_style(panel, "display", "block");
}

#[inline]
pub fn hide(overlay: &web::HtmlElement, panel: &web::HtmlElement) {
    dom::set_style(overlay, "display", "none");
    dom::set_style(panel, "display", "none");
}

/// Fade the backdrop and move the panel; the CSS transitions animate both.
pub fn slide(overlay: &web::HtmlElement, panel: &web::HtmlElement, slid_in: bool) {
    if slid_in {
        dom::set_style(overlay, "opacity", "1");
        dom::set_style(panel, "right", PANEL_RIGHT_IN);
    } else {
        dom::set_style(overlay, "opacity", "0");
        dom::set_style(panel, "right", PANEL_RIGHT_OUT);
    }
}

/// Progress sink helpers.
pub mod sink {
    use crate::core::SinkUpdate;
    use crate::dom;
    use web_sys as web;

    pub fn apply(sink: &web::HtmlElement, update: &SinkUpdate) {
        match update {
            SinkUpdate::Text(text) => sink.set_text_content(Some(text)),
            SinkUpdate::Hide => dom::set_style(sink, "display", "none"),
        }
    }
}
