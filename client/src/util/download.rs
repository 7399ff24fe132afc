//! File-download trigger for exported diagrams.
//!
//! Browsers only offer a save dialog for programmatic downloads through a
//! clicked anchor, so this creates a transient `<a download>` pointing at
//! the data URL, clicks it, and removes it again. Best-effort: a missing
//! document or element-creation failure logs and returns.

use wasm_bindgen::JsCast;

/// Offer `data_url` to the user as a file named `filename`.
pub fn trigger(data_url: &str, filename: &str) {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        log::warn!("download skipped: no document");
        return;
    };
    let anchor = match document.create_element("a") {
        Ok(el) => match el.dyn_into::<web_sys::HtmlAnchorElement>() {
            Ok(anchor) => anchor,
            Err(el) => {
                log::warn!("download skipped: unexpected element {}", el.tag_name());
                return;
            }
        },
        Err(err) => {
            log::warn!("download skipped: {err:?}");
            return;
        }
    };
    anchor.set_href(data_url);
    anchor.set_download(filename);

    let Some(body) = document.body() else {
        log::warn!("download skipped: no body");
        return;
    };
    if let Err(err) = body.append_child(&anchor) {
        log::warn!("download skipped: {err:?}");
        return;
    }
    anchor.click();
    let _ = body.remove_child(&anchor);
}
