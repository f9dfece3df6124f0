// clipboard-privacy/src/discovery.rs
//! Runtime discovery of operator-identifying values.
//!
//! Each platform family has its own probe. Probes never fail: a value that
//! cannot be obtained is simply left out of the resulting [`PlatformInfo`].

use clipboard_privacy_core::{PlatformInfo, SystemIdentifier, HOSTNAME_TOKEN, USERDOMAIN_TOKEN};
use log::debug;
use std::env;

use crate::utils::platform::Platform;
use crate::utils::process::capture_stdout;

/// Discovers the identifiers to redact on the current host.
pub trait IdentityProbe {
    fn discover(&self) -> PlatformInfo;
}

/// Picks the probe for a platform.
pub fn probe_for(platform: Platform) -> Box<dyn IdentityProbe> {
    match platform {
        Platform::Windows => Box::new(WindowsProbe),
        Platform::MacOs => Box::new(MacProbe),
        _ => Box::new(UnixProbe),
    }
}

fn env_value(name: &str) -> Option<String> {
    env::var(name).ok().map(|v| v.trim().to_string()).filter(|v| !v.is_empty())
}

/// Current login name from the usual environment variables.
pub fn current_user_name() -> Option<String> {
    ["LOGNAME", "USER", "LNAME", "USERNAME"].iter().find_map(|name| env_value(name))
}

/// Host name as reported by the OS.
pub fn current_host_name() -> Option<String> {
    match hostname::get() {
        Ok(name) => name.into_string().ok().filter(|n| !n.is_empty()),
        Err(e) => {
            debug!("Host name lookup failed: {}", e);
            None
        }
    }
}

fn base_info() -> PlatformInfo {
    PlatformInfo {
        user_name: current_user_name(),
        host_name: current_host_name(),
        extras: Vec::new(),
    }
}

/// Linux and other Unix desktops: user name and host name.
pub struct UnixProbe;

impl IdentityProbe for UnixProbe {
    fn discover(&self) -> PlatformInfo {
        base_info()
    }
}

/// Windows: adds `COMPUTERNAME` and `USERDOMAIN` from the environment.
pub struct WindowsProbe;

impl IdentityProbe for WindowsProbe {
    fn discover(&self) -> PlatformInfo {
        let mut info = base_info();
        info.extras = windows_extras(env_value);
        info
    }
}

/// macOS: adds the `ComputerName` and `LocalHostName` reported by `scutil`.
pub struct MacProbe;

impl IdentityProbe for MacProbe {
    fn discover(&self) -> PlatformInfo {
        let mut info = base_info();
        info.extras = mac_extras(|key| capture_stdout("scutil", &["--get", key]));
        info
    }
}

/// Windows extras, reading variables through `lookup`.
pub fn windows_extras(lookup: impl Fn(&str) -> Option<String>) -> Vec<SystemIdentifier> {
    let mut extras = Vec::new();
    if let Some(computer) = lookup("COMPUTERNAME") {
        extras.push(SystemIdentifier::new(computer, HOSTNAME_TOKEN));
    }
    if let Some(domain) = lookup("USERDOMAIN") {
        extras.push(SystemIdentifier::new(domain, USERDOMAIN_TOKEN));
    }
    extras
}

/// macOS extras, querying `scutil` keys through `query`.
pub fn mac_extras(query: impl Fn(&str) -> Option<String>) -> Vec<SystemIdentifier> {
    ["ComputerName", "LocalHostName"]
        .iter()
        .filter_map(|key| query(key))
        .filter(|value| !value.is_empty())
        .map(|value| SystemIdentifier::new(value, HOSTNAME_TOKEN))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn windows_extras_skip_missing_variables() {
        let extras = windows_extras(|name| match name {
            "USERDOMAIN" => Some("CONTOSO".to_string()),
            _ => None,
        });
        assert_eq!(extras, vec![SystemIdentifier::new("CONTOSO", USERDOMAIN_TOKEN)]);
    }

    #[test]
    fn windows_extras_in_order() {
        let extras = windows_extras(|name| Some(format!("{name}-value")));
        let tokens: Vec<_> = extras.iter().map(|e| e.replacement.as_str()).collect();
        assert_eq!(tokens, vec![HOSTNAME_TOKEN, USERDOMAIN_TOKEN]);
    }

    #[test]
    fn mac_extras_swallow_probe_failures() {
        let extras = mac_extras(|key| match key {
            "LocalHostName" => Some("Carols-MacBook".to_string()),
            _ => None,
        });
        assert_eq!(extras, vec![SystemIdentifier::new("Carols-MacBook", HOSTNAME_TOKEN)]);
    }

    #[test]
    fn probe_never_panics() {
        let info = probe_for(Platform::LinuxX11).discover();
        assert!(info.extras.is_empty());
    }
}
