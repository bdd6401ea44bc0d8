// src/clipboard.rs
use crate::site_config::Timing;
use js_sys::Reflect;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Element, HtmlDocument, HtmlTextAreaElement};

pub const COPY_FAILED_MESSAGE: &str = "Copy failed. Please select and copy manually.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyPath {
    /// `navigator.clipboard.writeText`
    ClipboardApi,
    /// Off-screen textarea plus `execCommand("copy")`.
    ExecCommand,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyOutcome {
    Copied(CopyPath),
    Failed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedbackKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CopyFeedback {
    pub message: String,
    pub kind: FeedbackKind,
    /// `false` while the status is fading out.
    pub visible: bool,
}

impl FeedbackKind {
    pub fn class_name(self) -> &'static str {
        match self {
            FeedbackKind::Success => "success",
            FeedbackKind::Error => "error",
        }
    }
}

impl CopyOutcome {
    pub fn succeeded(self) -> bool {
        matches!(self, CopyOutcome::Copied(_))
    }

    pub fn feedback(self, success_message: &str) -> CopyFeedback {
        match self {
            CopyOutcome::Copied(_) => CopyFeedback {
                message: success_message.to_string(),
                kind: FeedbackKind::Success,
                visible: true,
            },
            CopyOutcome::Failed => CopyFeedback {
                message: COPY_FAILED_MESSAGE.to_string(),
                kind: FeedbackKind::Error,
                visible: true,
            },
        }
    }
}

impl CopyFeedback {
    pub fn class_list(&self) -> String {
        if self.visible {
            format!("copy-feedback {} show", self.kind.class_name())
        } else {
            format!("copy-feedback {}", self.kind.class_name())
        }
    }
}

/// Milliseconds after a copy at which the status fades (loses `show`) and
/// is then cleared.
pub fn feedback_schedule(timing: &Timing) -> (u32, u32) {
    let hide = timing.feedback_ms;
    (hide, hide + timing.feedback_fade_ms)
}

/// Copy `text`, trying the async clipboard API first (secure contexts only)
/// and the legacy `execCommand` path second.
pub async fn copy_text(text: &str) -> CopyOutcome {
    if clipboard_api_available() {
        match write_with_clipboard_api(text).await {
            Ok(()) => return CopyOutcome::Copied(CopyPath::ClipboardApi),
            Err(e) => log::warn!("Clipboard API write failed, trying fallback: {:?}", e),
        }
    }

    match write_with_exec_command(text) {
        Ok(true) => CopyOutcome::Copied(CopyPath::ExecCommand),
        Ok(false) => {
            log::warn!("Fallback copy failed: execCommand returned false");
            CopyOutcome::Failed
        }
        Err(e) => {
            log::warn!("Fallback copy failed: {:?}", e);
            CopyOutcome::Failed
        }
    }
}

fn clipboard_api_available() -> bool {
    let window = gloo_utils::window();
    window.is_secure_context()
        && Reflect::has(&window.navigator(), &JsValue::from_str("clipboard")).unwrap_or(false)
}

async fn write_with_clipboard_api(text: &str) -> Result<(), JsValue> {
    let clipboard = gloo_utils::window().navigator().clipboard();
    JsFuture::from(clipboard.write_text(text)).await?;
    Ok(())
}

fn write_with_exec_command(text: &str) -> Result<bool, JsValue> {
    let document = gloo_utils::document();
    let body = gloo_utils::body();

    let textarea = document
        .create_element("textarea")?
        .dyn_into::<HtmlTextAreaElement>()?;
    textarea.set_value(text);
    textarea.set_attribute("readonly", "")?;
    let style = textarea.style();
    style.set_property("position", "fixed")?;
    style.set_property("left", "-999999px")?;
    style.set_property("top", "-999999px")?;
    body.append_child(&textarea)?;

    let _ = textarea.focus();
    textarea.select();
    let copied = match document.dyn_into::<HtmlDocument>() {
        Ok(doc) => doc.exec_command("copy"),
        Err(_) => Ok(false),
    };
    textarea.remove();

    copied
}

/// Select the contents of `element` so the user can copy by hand.
pub fn select_contents(element: &Element) {
    let result: Result<(), JsValue> = (|| {
        let range = gloo_utils::document().create_range()?;
        range.select_node_contents(element)?;
        if let Some(selection) = gloo_utils::window().get_selection()? {
            selection.remove_all_ranges()?;
            selection.add_range(&range)?;
        }
        Ok(())
    })();
    if let Err(e) = result {
        log::warn!("Text selection failed: {:?}", e);
    }
}
