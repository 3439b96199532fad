//! Dialog Bindings
//!
//! Shows controller dialogs through SweetAlert's global `swal`,
//! falling back to the native `confirm`/`alert` when it is not loaded.

use async_trait::async_trait;
use serde::Serialize;
use shopping_list_core::{Dialog, Prompt};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(catch, js_name = swal)]
    fn swal(options: JsValue) -> Result<js_sys::Promise, JsValue>;
}

/// Options object passed to `swal`
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SwalOptions<'a> {
    title: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    text: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    icon: Option<&'static str>,
    /// `true` shows Cancel next to OK
    #[serde(skip_serializing_if = "is_false")]
    buttons: bool,
    #[serde(skip_serializing_if = "is_false")]
    danger_mode: bool,
}

fn is_false(value: &bool) -> bool {
    !*value
}

impl<'a> SwalOptions<'a> {
    fn from_dialog(dialog: &'a Dialog) -> Self {
        Self {
            title: &dialog.title,
            text: (!dialog.message.is_empty()).then_some(dialog.message.as_str()),
            icon: dialog.severity.map(|severity| severity.as_str()),
            buttons: dialog.choice,
            danger_mode: dialog.is_danger(),
        }
    }
}

fn open(dialog: &Dialog) -> Result<js_sys::Promise, JsValue> {
    let options = serde_wasm_bindgen::to_value(&SwalOptions::from_dialog(dialog))?;
    swal(options)
}

/// Text for the native fallback dialogs
fn plain_text(dialog: &Dialog) -> String {
    if dialog.message.is_empty() {
        dialog.title.clone()
    } else {
        format!("{}\n\n{}", dialog.title, dialog.message)
    }
}

/// Prompt collaborator backed by SweetAlert
pub struct SweetAlert;

#[async_trait(?Send)]
impl Prompt for SweetAlert {
    async fn confirm(&self, dialog: &Dialog) -> bool {
        match open(dialog) {
            // Resolves to `true` on OK and `null` when dismissed
            Ok(promise) => match JsFuture::from(promise).await {
                Ok(answer) => answer.as_bool().unwrap_or(false),
                Err(e) => {
                    log::error!("swal rejected: {:?}", e);
                    false
                }
            },
            Err(e) => {
                log::warn!("swal unavailable, using window.confirm: {:?}", e);
                web_sys::window()
                    .and_then(|w| w.confirm_with_message(&plain_text(dialog)).ok())
                    .unwrap_or(false)
            }
        }
    }

    fn notify(&self, dialog: &Dialog) {
        if let Err(e) = open(dialog) {
            log::warn!("swal unavailable, using window.alert: {:?}", e);
            if let Some(window) = web_sys::window() {
                let _ = window.alert_with_message(&plain_text(dialog));
            }
        }
    }
}
