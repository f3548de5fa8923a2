//! `data-ui-*` primitives for the desktop, its windows, and the taskbar.
//!
//! Primitives carry no state. Every element is tagged `data-ui-primitive="true"` plus a
//! `data-ui-kind` token so the stylesheet can target them without class names.

use leptos::ev::{MouseEvent, PointerEvent};
use leptos::*;

mod desktop;
mod taskbar;
mod window;

pub use desktop::{DesktopBackdrop, DesktopIconButton, DesktopIconGrid, DesktopWindowLayer};
pub use taskbar::{Taskbar, TaskbarButton, TaskbarSection};
pub use window::{
    ResizeHandle, WindowBody, WindowControlButton, WindowControls, WindowFrame, WindowTitle,
    WindowTitleBar,
};

/// Event handler that calls `handler` when one was supplied.
pub(crate) fn forward<E: 'static>(handler: Option<Callback<E>>) -> impl Fn(E) {
    move |ev| {
        if let Some(handler) = handler {
            handler.call(ev);
        }
    }
}

pub(crate) fn bool_token(value: bool) -> &'static str {
    if value {
        "true"
    } else {
        "false"
    }
}

#[cfg(test)]
mod tests {
    use std::{cell::Cell, rc::Rc};

    use super::*;

    #[test]
    fn bool_tokens_match_dom_attribute_values() {
        assert_eq!(bool_token(true), "true");
        assert_eq!(bool_token(false), "false");
    }

    #[test]
    fn forward_skips_missing_handler() {
        let runtime = create_runtime();
        let hits = Rc::new(Cell::new(0));
        let counter = Rc::clone(&hits);

        forward::<u8>(None)(1);
        forward(Some(Callback::new(move |n: u8| counter.set(counter.get() + n))))(2);

        assert_eq!(hits.get(), 2);
        runtime.dispose();
    }
}
