//! Native Share
//!
//! Shares the current page for a child's backpack via `navigator.share`,
//! falling back to copying the URL to the clipboard. Failures are caught,
//! logged and surfaced with a browser alert.

use wasm_bindgen::JsValue;
use wasm_bindgen_futures::JsFuture;

/// Share payload per the platform contract: title, message and current URL
pub fn share_payload(child_name: &str) -> (String, String) {
    (
        format!("{}'s Backpack", child_name),
        format!("Check out {}'s school backpack!", child_name),
    )
}

pub async fn share_backpack(child_name: String) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let url = window.location().href().unwrap_or_default();
    let navigator = window.navigator();
    let (title, text) = share_payload(&child_name);

    let has_share =
        js_sys::Reflect::has(navigator.as_ref(), &JsValue::from_str("share")).unwrap_or(false);

    if has_share {
        let data = web_sys::ShareData::new();
        data.set_title(&title);
        data.set_text(&text);
        data.set_url(&url);
        if let Err(err) = JsFuture::from(navigator.share_with_data(&data)).await {
            web_sys::console::warn_1(&err);
            let _ = window.alert_with_message("Sharing failed.");
        }
    } else {
        match JsFuture::from(navigator.clipboard().write_text(&url)).await {
            Ok(_) => {
                let _ = window.alert_with_message("Link copied to clipboard!");
            }
            Err(err) => {
                web_sys::console::warn_1(&err);
                let _ = window.alert_with_message("Could not copy the link.");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn payload_mentions_the_child() {
        let (title, text) = share_payload("Lina");
        assert_eq!(title, "Lina's Backpack");
        assert_eq!(text, "Check out Lina's school backpack!");
    }
}
