use crate::error::{HlError, Result};
use crate::portal::needs_captive_portal;

const MAX_SSID_LEN: usize = 32;
const MAX_PASSWORD_LEN: usize = 64;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProvisioningMode {
    Station,
    CaptivePortal,
}

#[derive(Clone, PartialEq, Eq)]
pub enum WifiCredentials {
    Configured {
        ssid: &'static str,
        password: &'static str,
    },
    Unprovisioned,
}

impl WifiCredentials {
    /// Credentials are only usable when both ssid and password are set,
    /// otherwise the device falls back to the captive portal.
    pub fn from_parts(ssid: &'static str, password: &'static str) -> Result<Self> {
        if needs_captive_portal(ssid, password) {
            return Ok(WifiCredentials::Unprovisioned);
        }
        if ssid.len() > MAX_SSID_LEN {
            return Err(HlError::InvalidCredentials("ssid longer than 32 bytes"));
        }
        if password.len() > MAX_PASSWORD_LEN {
            return Err(HlError::InvalidCredentials("password longer than 64 bytes"));
        }
        Ok(WifiCredentials::Configured { ssid, password })
    }

    pub fn mode(&self) -> ProvisioningMode {
        match self {
            WifiCredentials::Configured { .. } => ProvisioningMode::Station,
            WifiCredentials::Unprovisioned => ProvisioningMode::CaptivePortal,
        }
    }

    pub fn ssid(&self) -> Option<&'static str> {
        match self {
            WifiCredentials::Configured { ssid, .. } => Some(*ssid),
            WifiCredentials::Unprovisioned => None,
        }
    }

    /// Station mode `(ssid, password)`, unavailable until provisioned.
    pub fn station(&self) -> Result<(&'static str, &'static str)> {
        match self {
            WifiCredentials::Configured { ssid, password } => Ok((*ssid, *password)),
            WifiCredentials::Unprovisioned => Err(HlError::NotProvisioned),
        }
    }
}

// Never print the password.
impl std::fmt::Debug for WifiCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WifiCredentials::Configured { ssid, .. } => f
                .debug_struct("Configured")
                .field("ssid", ssid)
                .field("password", &"<redacted>")
                .finish(),
            WifiCredentials::Unprovisioned => write!(f, "Unprovisioned"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_fields_select_captive_portal() {
        for (ssid, password) in [("", ""), ("home", ""), ("", "secret")] {
            let creds = WifiCredentials::from_parts(ssid, password).unwrap();
            assert_eq!(creds, WifiCredentials::Unprovisioned);
            assert_eq!(creds.mode(), ProvisioningMode::CaptivePortal);
            assert_eq!(creds.ssid(), None);
        }
    }

    #[test]
    fn full_credentials_select_station() {
        let creds = WifiCredentials::from_parts("home", "secret").unwrap();
        assert_eq!(creds.mode(), ProvisioningMode::Station);
        assert_eq!(creds.ssid(), Some("home"));
    }

    #[test]
    fn station_requires_provisioning() {
        assert!(matches!(
            WifiCredentials::Unprovisioned.station(),
            Err(HlError::NotProvisioned)
        ));
        let creds = WifiCredentials::from_parts("home", "secret").unwrap();
        assert_eq!(creds.station().unwrap(), ("home", "secret"));
    }

    #[test]
    fn oversized_credentials_are_rejected() {
        let long_ssid = "s".repeat(33).leak();
        assert!(matches!(
            WifiCredentials::from_parts(long_ssid, "secret"),
            Err(HlError::InvalidCredentials(_))
        ));

        let long_password = "p".repeat(65).leak();
        assert!(matches!(
            WifiCredentials::from_parts("home", long_password),
            Err(HlError::InvalidCredentials(_))
        ));

        let max_ssid = "s".repeat(32).leak();
        let max_password = "p".repeat(64).leak();
        assert!(WifiCredentials::from_parts(max_ssid, max_password).is_ok());
    }

    #[test]
    fn debug_hides_password() {
        let creds = WifiCredentials::from_parts("home", "hunter22").unwrap();
        let text = format!("{:?}", creds);
        assert!(text.contains("home"));
        assert!(!text.contains("hunter22"));
    }
}
