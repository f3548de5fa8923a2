//! App catalog and content mounting.
//!
//! Catalog entries are generated at build time from `app_catalog.toml`; window contents come
//! from the dossier app crate through [`AppModule`] handles.

use desktop_app_contract::AppModule;
use leptos::View;
use system_ui::IconName;

use crate::model::{AppId, WindowRect};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Static launcher metadata and default window geometry for one app.
pub struct AppDescriptor {
    pub app_id: AppId,
    /// Window title, desktop icon label, and taskbar label.
    pub title: &'static str,
    pub icon: IconName,
    /// Geometry used on first open for viewports at or above the mobile breakpoint.
    pub default_rect: WindowRect,
}

include!(concat!(env!("OUT_DIR"), "/app_catalog_generated.rs"));

/// All apps in icon and taskbar order.
pub fn app_registry() -> &'static [AppDescriptor] {
    &APP_REGISTRY
}

/// Content module mounted inside `app_id`'s window.
pub fn app_module(app_id: AppId) -> AppModule {
    match app_id {
        AppId::Profile => desktop_app_dossier::PROFILE_MODULE,
        AppId::Projects => desktop_app_dossier::PROJECTS_MODULE,
        AppId::Skills => desktop_app_dossier::SKILLS_MODULE,
        AppId::Terminal => desktop_app_dossier::TERMINAL_MODULE,
        AppId::Resume => desktop_app_dossier::RESUME_MODULE,
        AppId::Contact => desktop_app_dossier::CONTACT_MODULE,
    }
}

/// Renders the body of `app_id`'s window.
pub fn render_window_contents(app_id: AppId) -> View {
    app_module(app_id).render()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::model::{APP_COUNT, MIN_WINDOW_HEIGHT, MIN_WINDOW_WIDTH};

    #[test]
    fn registry_lists_every_app_once_in_launcher_order() {
        let ids: Vec<AppId> = app_registry().iter().map(|entry| entry.app_id).collect();
        assert_eq!(ids, AppId::ALL.to_vec());
        assert_eq!(app_registry().len(), APP_COUNT);
    }

    #[test]
    fn descriptor_lookup_matches_registry() {
        for entry in app_registry() {
            assert_eq!(app_descriptor(entry.app_id), entry);
        }
    }

    #[test]
    fn catalog_defaults_respect_minimum_size() {
        for entry in app_registry() {
            assert!(entry.default_rect.w >= MIN_WINDOW_WIDTH, "{}", entry.title);
            assert!(entry.default_rect.h >= MIN_WINDOW_HEIGHT, "{}", entry.title);
        }
    }

    #[test]
    fn catalog_carries_titles_and_icons() {
        let terminal = app_descriptor(AppId::Terminal);
        assert_eq!(terminal.title, "COMM_UPLINK.sh");
        assert_eq!(terminal.icon, IconName::Terminal);
        assert_eq!(
            terminal.default_rect,
            WindowRect {
                x: 400,
                y: 200,
                w: 600,
                h: 400,
            }
        );
    }
}
