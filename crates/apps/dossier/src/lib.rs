//! Dossier applications hosted inside the desktop windows.
//!
//! Every app keeps its own view-local state; nothing here can observe or change window state.
//! The runtime reaches each app only through its [`AppModule`] constant.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod contact;
mod data;
mod profile;
mod projects;
mod resume;
mod skills;
mod terminal;

use desktop_app_contract::AppModule;
use leptos::*;

pub use contact::ContactApp;
pub use profile::ProfileApp;
pub use projects::ProjectsApp;
pub use resume::ResumeLockApp;
pub use skills::SkillsApp;
pub use terminal::TerminalApp;

fn mount_profile() -> View {
    view! { <ProfileApp /> }.into_view()
}

fn mount_projects() -> View {
    view! { <ProjectsApp /> }.into_view()
}

fn mount_skills() -> View {
    view! { <SkillsApp /> }.into_view()
}

fn mount_terminal() -> View {
    view! { <TerminalApp /> }.into_view()
}

fn mount_resume() -> View {
    view! { <ResumeLockApp /> }.into_view()
}

fn mount_contact() -> View {
    view! { <ContactApp /> }.into_view()
}

/// Agent profile dossier.
pub const PROFILE_MODULE: AppModule = AppModule::new(mount_profile);
/// Mission files with decryptable entries.
pub const PROJECTS_MODULE: AppModule = AppModule::new(mount_projects);
/// Skill matrix bars.
pub const SKILLS_MODULE: AppModule = AppModule::new(mount_skills);
/// HQ uplink terminal.
pub const TERMINAL_MODULE: AppModule = AppModule::new(mount_terminal);
/// Locked resume viewer.
pub const RESUME_MODULE: AppModule = AppModule::new(mount_resume);
/// Encrypted contact form.
pub const CONTACT_MODULE: AppModule = AppModule::new(mount_contact);

/// Uniform sample in `[0, 1)`; native builds use the midpoint.
pub(crate) fn random_unit() -> f64 {
    #[cfg(target_arch = "wasm32")]
    {
        js_sys::Math::random()
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        0.5
    }
}
