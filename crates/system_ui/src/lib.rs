//! Stateless Leptos building blocks for the spy desktop: shell chrome primitives and the icon set.
//!
//! Styling hooks are `data-ui-kind` / `data-ui-slot` attributes rather than class names, so the
//! runtime and the dossier apps share one DOM vocabulary.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod icon;
mod primitives;

pub use icon::{Icon, IconName, IconSize};
pub use primitives::{
    DesktopBackdrop, DesktopIconButton, DesktopIconGrid, DesktopWindowLayer, ResizeHandle,
    Taskbar, TaskbarButton, TaskbarSection, WindowBody, WindowControlButton, WindowControls,
    WindowFrame, WindowTitle, WindowTitleBar,
};
