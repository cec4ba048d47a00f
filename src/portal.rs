// Shared with build.rs through `#[path]`, keep it free of crate imports.

/// Either field empty means the device cannot join as a station and
/// falls back to captive portal provisioning.
pub fn needs_captive_portal(ssid: &str, password: &str) -> bool {
    ssid.is_empty() || password.is_empty()
}
