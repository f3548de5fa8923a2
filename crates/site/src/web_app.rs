use desktop_runtime::{BootSequence, DesktopProvider, DesktopShell};
use leptos::*;
use leptos_meta::*;

#[component]
pub fn SiteApp() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text="SpyOS // Agent Dossier" />
        <Meta name="description" content="A spy-themed simulated desktop portfolio." />
        <Meta name="viewport" content="width=device-width, initial-scale=1" />

        <main class="site-root">
            <DesktopEntry />
        </main>
    }
}

/// Boot log first, then the desktop. The desktop is not mounted until boot completes.
#[component]
pub fn DesktopEntry() -> impl IntoView {
    let booted = create_rw_signal(false);
    let on_boot_complete = move |()| {
        logging::log!("boot sequence complete");
        booted.set(true);
    };

    view! {
        <Show
            when=move || booted.get()
            fallback=move || view! { <BootSequence on_complete=on_boot_complete /> }
        >
            <DesktopProvider>
                <DesktopShell />
            </DesktopProvider>
        </Show>
    }
}
