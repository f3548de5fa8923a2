//! Shared contract between the desktop window manager runtime and the content it hosts.
//!
//! An app supplies a [`AppModule`] whose only capability is rendering its view. The window
//! manager never inspects what the view contains, and nothing in this crate refers back to
//! window state, so apps cannot observe or influence stacking, geometry, or focus.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

use leptos::View;

/// Static render function used by the runtime registry.
pub type AppRenderFn = fn() -> View;

#[derive(Debug, Clone, Copy)]
/// Content module descriptor used by the runtime app registry.
pub struct AppModule {
    render_fn: AppRenderFn,
}

impl AppModule {
    /// Creates a module from a render function.
    pub const fn new(render_fn: AppRenderFn) -> Self {
        Self { render_fn }
    }

    /// Renders the app view for a window body.
    pub fn render(self) -> View {
        (self.render_fn)()
    }
}
