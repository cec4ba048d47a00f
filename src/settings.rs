use crate::auth::LocAuth;
use crate::config::{Config, CONFIG};
use crate::error::Result;
use crate::location::Coordinate;
use crate::provisioning::{ProvisioningMode, WifiCredentials};

use std::fmt;

/// Validated view of the build time [`Config`].
#[derive(Debug, Clone)]
pub struct Settings {
    pub wifi: WifiCredentials,
    pub home: Coordinate,
    pub loc_auth: LocAuth,
}

impl Settings {
    pub fn from_config(config: &Config) -> Result<Self> {
        Ok(Settings {
            wifi: WifiCredentials::from_parts(config.wifi_ssid, config.wifi_password)?,
            home: Coordinate::new(config.home_lat, config.home_lon)?,
            loc_auth: LocAuth::new(config.loc_token),
        })
    }

    pub fn load() -> Result<Self> {
        Settings::from_config(&CONFIG)
    }

    pub fn mode(&self) -> ProvisioningMode {
        self.wifi.mode()
    }
}

impl fmt::Display for Settings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.wifi.ssid() {
            Some(ssid) => write!(f, "wifi: station ssid={:?} password=set", ssid)?,
            None => write!(f, "wifi: captive portal")?,
        }
        write!(f, ", home: ({}, {})", self.home.lat, self.home.lon)?;
        let auth = if self.loc_auth.is_enabled() { "token" } else { "open" };
        write!(f, ", /loc: {}", auth)
    }
}
