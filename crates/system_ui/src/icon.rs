use leptos::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Semantic icon names available to the shell and apps.
pub enum IconName {
    /// Operative profile.
    User,
    /// Mission file folder.
    FolderGit,
    /// Processor / capability matrix.
    Cpu,
    /// Command terminal.
    Terminal,
    /// Locked document.
    FileLock,
    /// Radio transmitter.
    Radio,
    /// Window minimize control.
    WindowMinimize,
    /// Window maximize control.
    WindowMaximize,
    /// Dismiss / close control.
    Dismiss,
    /// Closed padlock.
    Lock,
    /// Open padlock.
    Unlock,
    /// Fingerprint scanner.
    Fingerprint,
    /// Keypad grid.
    Keypad,
    /// Outgoing transmission.
    Send,
    /// Pulse / activity trace.
    Activity,
    /// Network uplink.
    Wifi,
    /// Storage / memory bank.
    Database,
    /// Shield alert.
    ShieldAlert,
    /// Download arrow.
    Download,
    /// External link arrow.
    ExternalLink,
    /// Map pin.
    MapPin,
    /// Hash / channel marker.
    Hash,
    /// Globe.
    Globe,
    /// Award ribbon.
    Award,
    /// Graduation cap.
    GraduationCap,
    /// Confirmation check.
    CheckCircle,
    /// Warning triangle.
    Warning,
}

impl IconName {
    /// Stable token written to `data-icon` for CSS hooks.
    pub fn token(self) -> &'static str {
        match self {
            Self::User => "user",
            Self::FolderGit => "folder-git",
            Self::Cpu => "cpu",
            Self::Terminal => "terminal",
            Self::FileLock => "file-lock",
            Self::Radio => "radio",
            Self::WindowMinimize => "window-minimize",
            Self::WindowMaximize => "window-maximize",
            Self::Dismiss => "dismiss",
            Self::Lock => "lock",
            Self::Unlock => "unlock",
            Self::Fingerprint => "fingerprint",
            Self::Keypad => "keypad",
            Self::Send => "send",
            Self::Activity => "activity",
            Self::Wifi => "wifi",
            Self::Database => "database",
            Self::ShieldAlert => "shield-alert",
            Self::Download => "download",
            Self::ExternalLink => "external-link",
            Self::MapPin => "map-pin",
            Self::Hash => "hash",
            Self::Globe => "globe",
            Self::Award => "award",
            Self::GraduationCap => "graduation-cap",
            Self::CheckCircle => "check-circle",
            Self::Warning => "warning",
        }
    }

    fn glyph(self) -> &'static str {
        match self {
            Self::User => "\u{1F464}",
            Self::FolderGit => "\u{1F5C2}",
            Self::Cpu => "\u{2699}",
            Self::Terminal => "\u{2328}",
            Self::FileLock => "\u{1F512}",
            Self::Radio => "\u{1F4E1}",
            Self::WindowMinimize => "\u{2212}",
            Self::WindowMaximize => "\u{25A1}",
            Self::Dismiss => "\u{2715}",
            Self::Lock => "\u{1F512}",
            Self::Unlock => "\u{1F513}",
            Self::Fingerprint => "\u{25CE}",
            Self::Keypad => "\u{2317}",
            Self::Send => "\u{27A4}",
            Self::Activity => "\u{223F}",
            Self::Wifi => "\u{224B}",
            Self::Database => "\u{2395}",
            Self::ShieldAlert => "\u{26E8}",
            Self::Download => "\u{2913}",
            Self::ExternalLink => "\u{2197}",
            Self::MapPin => "\u{2316}",
            Self::Hash => "#",
            Self::Globe => "\u{25CD}",
            Self::Award => "\u{2605}",
            Self::GraduationCap => "\u{25B2}",
            Self::CheckCircle => "\u{2714}",
            Self::Warning => "\u{26A0}",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Icon size tokens.
pub enum IconSize {
    /// Extra small (titlebar controls).
    Xs,
    /// Small (taskbar, titlebar).
    #[default]
    Sm,
    /// Medium (inline app chrome).
    Md,
    /// Large (desktop launcher icons).
    Lg,
}

impl IconSize {
    fn token(self) -> &'static str {
        match self {
            Self::Xs => "xs",
            Self::Sm => "sm",
            Self::Md => "md",
            Self::Lg => "lg",
        }
    }
}

#[component]
/// Renders a decorative icon glyph.
pub fn Icon(icon: IconName, #[prop(optional)] size: IconSize) -> impl IntoView {
    view! {
        <span
            class="ui-icon"
            aria-hidden="true"
            data-ui-primitive="true"
            data-ui-kind="icon"
            data-icon=icon.token()
            data-ui-size=size.token()
        >
            {icon.glyph()}
        </span>
    }
}
