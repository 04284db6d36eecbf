//! Desktop identification for the hosted server.
//!
//! The server applies desktop-specific behavior based on a coarse OS label
//! in the user agent instead of sniffing the raw engine string, so the label
//! vocabulary is fixed: Mac, Linux, Windows 7 (NT kernel before 6.2) and
//! Windows 10.

use crate::PRODUCT_NAME;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum OsLabel {
    Mac,
    Linux,
    Windows7,
    Windows10,
}

impl OsLabel {
    pub(crate) fn as_str(self) -> &'static str {
        match self {
            OsLabel::Mac => "Mac",
            OsLabel::Linux => "Linux",
            OsLabel::Windows7 => "Windows 7",
            OsLabel::Windows10 => "Windows 10",
        }
    }
}

/// Maps an NT kernel release string ("6.1", "10.0", ...) to the label the
/// server expects. Anything below 6.2 is the legacy label; unparseable
/// releases are treated as current.
pub(crate) fn windows_label_for_release(release: &str) -> OsLabel {
    let mut parts = release.trim().split('.');
    let major = parts.next().and_then(|part| part.parse::<u32>().ok());
    let minor = parts
        .next()
        .and_then(|part| part.parse::<u32>().ok())
        .unwrap_or(0);

    match major {
        Some(major) if (major, minor) < (6, 2) => OsLabel::Windows7,
        _ => OsLabel::Windows10,
    }
}

#[cfg(target_os = "macos")]
pub(crate) fn detect_os_label() -> OsLabel {
    OsLabel::Mac
}

#[cfg(target_os = "windows")]
pub(crate) fn detect_os_label() -> OsLabel {
    windows_nt_release()
        .as_deref()
        .map(windows_label_for_release)
        .unwrap_or(OsLabel::Windows10)
}

#[cfg(not(any(target_os = "macos", target_os = "windows")))]
pub(crate) fn detect_os_label() -> OsLabel {
    OsLabel::Linux
}

#[cfg(target_os = "windows")]
fn windows_nt_release() -> Option<String> {
    use winreg::enums::HKEY_LOCAL_MACHINE;
    use winreg::RegKey;

    let key = RegKey::predef(HKEY_LOCAL_MACHINE)
        .open_subkey("SOFTWARE\\Microsoft\\Windows NT\\CurrentVersion")
        .ok()?;
    key.get_value::<String, _>("CurrentVersion").ok()
}

/// `"ZulipElectron/<version> <OS label> <engine UA>"`. The first token is
/// the contract with the server and must stay byte-stable.
pub(crate) fn compose_user_agent(
    app_version: &str,
    os_label: OsLabel,
    platform_user_agent: &str,
) -> String {
    format!(
        "{}Electron/{} {} {}",
        PRODUCT_NAME,
        app_version,
        os_label.as_str(),
        platform_user_agent
    )
    .trim_end()
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn windows_label_for_release_maps_legacy_kernels() {
        assert_eq!(windows_label_for_release("6.1"), OsLabel::Windows7);
        assert_eq!(windows_label_for_release("6.0"), OsLabel::Windows7);
        assert_eq!(windows_label_for_release("5.1"), OsLabel::Windows7);
    }

    #[test]
    fn windows_label_for_release_maps_current_kernels() {
        assert_eq!(windows_label_for_release("6.2"), OsLabel::Windows10);
        assert_eq!(windows_label_for_release("6.3"), OsLabel::Windows10);
        assert_eq!(windows_label_for_release("10.0"), OsLabel::Windows10);
    }

    #[test]
    fn windows_label_for_release_defaults_on_garbage() {
        assert_eq!(windows_label_for_release(""), OsLabel::Windows10);
        assert_eq!(windows_label_for_release("unknown"), OsLabel::Windows10);
    }

    #[test]
    fn compose_user_agent_has_stable_prefix() {
        let user_agent = compose_user_agent("0.5.10", OsLabel::Windows7, "Mozilla/5.0");
        assert_eq!(user_agent, "ZulipElectron/0.5.10 Windows 7 Mozilla/5.0");
    }

    #[test]
    fn compose_user_agent_trims_empty_engine_suffix() {
        let user_agent = compose_user_agent("0.5.10", OsLabel::Mac, "");
        assert_eq!(user_agent, "ZulipElectron/0.5.10 Mac");
    }
}
