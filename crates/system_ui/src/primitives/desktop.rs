use super::*;

#[component]
/// Full-bleed desktop surface behind the windows.
pub fn DesktopBackdrop(children: Children) -> impl IntoView {
    view! {
        <div class="ui-desktop-backdrop" data-ui-primitive="true" data-ui-kind="desktop-backdrop">
            {children()}
        </div>
    }
}

#[component]
/// Launcher icon column.
pub fn DesktopIconGrid(children: Children) -> impl IntoView {
    view! {
        <nav
            class="ui-desktop-icons"
            aria-label="Applications"
            data-ui-primitive="true"
            data-ui-kind="desktop-icon-grid"
        >
            {children()}
        </nav>
    }
}

#[component]
/// Launcher icon. A single click opens the app.
pub fn DesktopIconButton(
    title: &'static str,
    data_app: &'static str,
    #[prop(optional)] on_click: Option<Callback<MouseEvent>>,
    children: Children,
) -> impl IntoView {
    view! {
        <button
            type="button"
            class="ui-desktop-icon"
            title=title
            data-app=data_app
            data-ui-primitive="true"
            data-ui-kind="desktop-icon-button"
            on:click=forward(on_click)
        >
            {children()}
        </button>
    }
}

#[component]
/// Positioning context for absolutely placed windows.
pub fn DesktopWindowLayer(children: Children) -> impl IntoView {
    view! {
        <div class="ui-window-layer" data-ui-primitive="true" data-ui-kind="desktop-window-layer">
            {children()}
        </div>
    }
}
