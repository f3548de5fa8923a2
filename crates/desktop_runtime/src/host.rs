//! Host-side runtime helpers for executing reducer effects and querying browser environment state.
//!
//! Everything that touches `web_sys` lives behind `target_arch = "wasm32"`; native builds (unit
//! tests) see a fixed 1280x800 viewport and no-op DOM effects.

use leptos::logging;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::{closure::Closure, JsCast};

use crate::{
    model::{AppId, ViewportSize},
    reducer::RuntimeEffect,
};

/// Viewport reported when no browser window is available.
pub const FALLBACK_VIEWPORT: ViewportSize = ViewportSize {
    width: 1280,
    height: 800,
};

#[derive(Debug, Clone, Copy, Default)]
/// Browser environment bridge for desktop runtime side effects.
pub struct DesktopHostContext;

impl DesktopHostContext {
    /// Executes a single [`RuntimeEffect`] emitted by the reducer.
    pub fn run_runtime_effect(&self, effect: RuntimeEffect) {
        match effect {
            RuntimeEffect::FocusWindowBody(app_id) => self.focus_window_body(app_id),
            RuntimeEffect::LogReflow { adjusted } => {
                logging::log!("viewport reflow adjusted {adjusted} window(s)");
            }
        }
    }

    /// Moves keyboard focus into `app_id`'s window body on the next tick, after the window has
    /// been rendered.
    pub fn focus_window_body(&self, app_id: AppId) {
        #[cfg(target_arch = "wasm32")]
        {
            let Some(window) = web_sys::window() else {
                return;
            };
            let Some(document) = window.document() else {
                return;
            };
            let body_id = crate::model::window_body_dom_id(app_id);
            let Some(element) = document.get_element_by_id(&body_id) else {
                logging::debug_warn!("window body for `{}` not mounted", app_id.token());
                return;
            };
            let Ok(element) = element.dyn_into::<web_sys::HtmlElement>() else {
                return;
            };
            let callback = Closure::once_into_js(move || {
                let _ = element.focus();
            });
            let _ = window
                .set_timeout_with_callback_and_timeout_and_arguments_0(callback.unchecked_ref(), 0);
        }
        #[cfg(not(target_arch = "wasm32"))]
        let _ = app_id;
    }

    /// Returns the current browser viewport, in CSS pixels.
    pub fn viewport(&self) -> ViewportSize {
        #[cfg(target_arch = "wasm32")]
        {
            if let Some(window) = web_sys::window() {
                let dimension = |value: Result<wasm_bindgen::JsValue, wasm_bindgen::JsValue>,
                                 fallback: i32| {
                    value
                        .ok()
                        .and_then(|value| value.as_f64())
                        .map(|value| value as i32)
                        .unwrap_or(fallback)
                };
                return ViewportSize {
                    width: dimension(window.inner_width(), FALLBACK_VIEWPORT.width),
                    height: dimension(window.inner_height(), FALLBACK_VIEWPORT.height),
                };
            }
        }

        FALLBACK_VIEWPORT
    }
}
