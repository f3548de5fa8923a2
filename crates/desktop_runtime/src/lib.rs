//! Desktop window manager runtime: window model, reducer, viewport reflow, and the Leptos shell.

pub mod apps;
pub mod components;
pub mod drag;
mod effect_executor;
pub mod host;
pub mod model;
pub mod reducer;
pub mod reflow;
mod runtime_context;
pub mod window_manager;

pub use components::{
    use_desktop_runtime, BootSequence, DesktopProvider, DesktopRuntimeContext, DesktopShell,
};
pub use model::*;
pub use reducer::{reduce_desktop, DesktopAction, ReducerError, RuntimeEffect};
