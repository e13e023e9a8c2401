//! Platform and assistive-technology capabilities.

/// The operating system family the application runs on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Platform {
    /// macOS (VoiceOver).
    MacOs,
    /// iOS and iPadOS (VoiceOver).
    Ios,
    /// Windows (Narrator, NVDA, JAWS).
    Windows,
    /// Linux and other Unix desktops (Orca).
    Linux,
    /// Android (TalkBack).
    Android,
    /// Anything else.
    Other,
}

impl Platform {
    /// The platform this binary was compiled for.
    pub const fn current() -> Self {
        if cfg!(target_os = "macos") {
            Platform::MacOs
        } else if cfg!(target_os = "ios") {
            Platform::Ios
        } else if cfg!(target_os = "windows") {
            Platform::Windows
        } else if cfg!(target_os = "android") {
            Platform::Android
        } else if cfg!(any(
            target_os = "linux",
            target_os = "freebsd",
            target_os = "openbsd",
            target_os = "netbsd"
        )) {
            Platform::Linux
        } else {
            Platform::Other
        }
    }

    /// Whether the platform screen reader is VoiceOver.
    pub fn is_apple(self) -> bool {
        matches!(self, Platform::MacOs | Platform::Ios)
    }
}

/// Decides whether entering a new grid section should be announced.
///
/// Some screen readers announce section changes on their own; announcing
/// again would double up. Inject a policy instead of checking the platform
/// directly so the behaviour can be tested anywhere.
pub trait SectionAnnouncementPolicy: Send + Sync {
    /// Return `true` if section changes must be announced by the application.
    fn should_announce_sections(&self) -> bool;
}

/// Only VoiceOver on macOS omits the section announcement for grids.
impl SectionAnnouncementPolicy for Platform {
    fn should_announce_sections(&self) -> bool {
        *self == Platform::MacOs
    }
}

impl SectionAnnouncementPolicy for bool {
    fn should_announce_sections(&self) -> bool {
        *self
    }
}

impl<F> SectionAnnouncementPolicy for F
where
    F: Fn() -> bool + Send + Sync,
{
    fn should_announce_sections(&self) -> bool {
        self()
    }
}
