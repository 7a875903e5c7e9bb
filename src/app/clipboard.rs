use leptos::{prelude::*, task::spawn_local};
use thiserror::Error;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{HtmlDocument, HtmlTextAreaElement};

use crate::contact::CopyTarget;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ClipboardError {
    #[error("Clipboard API unavailable")]
    Unavailable,
    #[error("Clipboard write rejected: {0}")]
    Rejected(String),
    #[error("Fallback copy failed: {0}")]
    Fallback(String),
}

fn describe(value: wasm_bindgen::JsValue) -> String {
    value
        .as_string()
        .unwrap_or_else(|| format!("{value:?}"))
}

async fn write_with_clipboard_api(text: &str) -> Result<(), ClipboardError> {
    let window = window();
    if !window.is_secure_context() {
        return Err(ClipboardError::Unavailable);
    }
    let clipboard = window.navigator().clipboard();
    if clipboard.is_undefined() {
        return Err(ClipboardError::Unavailable);
    }
    JsFuture::from(clipboard.write_text(text))
        .await
        .map(|_| ())
        .map_err(|e| ClipboardError::Rejected(describe(e)))
}

/// Copies through an off-screen textarea and `execCommand("copy")`.
fn copy_with_selection(text: &str) -> Result<(), ClipboardError> {
    let document = document();
    let body = document
        .body()
        .ok_or_else(|| ClipboardError::Fallback("no document body".to_string()))?;
    let area = document
        .create_element("textarea")
        .map_err(|e| ClipboardError::Fallback(describe(e)))?
        .dyn_into::<HtmlTextAreaElement>()
        .map_err(|_| ClipboardError::Fallback("not a textarea".to_string()))?;
    area.set_value(text);
    let style = web_sys::HtmlElement::style(&area);
    _ = style.set_property("position", "fixed");
    _ = style.set_property("left", "-9999px");
    _ = style.set_property("top", "-9999px");

    body.append_child(&area)
        .map_err(|e| ClipboardError::Fallback(describe(e)))?;
    area.focus().ok();
    area.select();
    let copied = document
        .dyn_into::<HtmlDocument>()
        .map_err(|_| ClipboardError::Fallback("not an HTML document".to_string()))
        .and_then(|doc| {
            doc.exec_command("copy")
                .map_err(|e| ClipboardError::Fallback(describe(e)))
        });
    area.remove();

    match copied? {
        true => Ok(()),
        false => Err(ClipboardError::Fallback("copy command refused".to_string())),
    }
}

pub async fn copy_to_clipboard(text: &str) -> Result<(), ClipboardError> {
    match write_with_clipboard_api(text).await {
        Ok(()) => Ok(()),
        Err(e) => {
            log::debug!("clipboard API failed ({e}), trying selection copy");
            copy_with_selection(text)
        }
    }
}

/// A failed copy is only logged; the visitor still has the text on screen to
/// copy by hand.
fn confirmation(target: CopyTarget, copied: &Result<(), ClipboardError>) -> &'static str {
    if let Err(e) = copied {
        log::error!("copy failed: {e}");
    }
    target.confirmation()
}

pub fn copy_and_confirm(text: String, target: CopyTarget) {
    spawn_local(async move {
        let copied = copy_to_clipboard(&text).await;
        if let Err(e) = window().alert_with_message(confirmation(target, &copied)) {
            log::warn!("alert failed: {}", describe(e));
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_confirmation_ignores_copy_outcome() {
        let failures = [
            Err(ClipboardError::Unavailable),
            Err(ClipboardError::Rejected("NotAllowedError".to_string())),
            Err(ClipboardError::Fallback("copy command refused".to_string())),
        ];
        for target in [CopyTarget::Email, CopyTarget::Message] {
            let copied = confirmation(target, &Ok(()));
            assert_eq!(copied, target.confirmation());
            for failure in &failures {
                assert_eq!(confirmation(target, failure), copied);
            }
        }
        assert_eq!(
            confirmation(CopyTarget::Email, &Err(ClipboardError::Unavailable)),
            "Email address copied to clipboard!"
        );
    }
}
