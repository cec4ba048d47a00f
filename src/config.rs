// Build time settings, read from the `[homeloc]` table of `cfg.toml`.
#[toml_cfg::toml_config]
pub struct Config {
    #[default("")]
    pub wifi_ssid: &'static str,
    #[default("")]
    pub wifi_password: &'static str,
    #[default(33.7501)]
    pub home_lat: f64,
    #[default(84.3885)]
    pub home_lon: f64,
    #[default("")]
    pub loc_token: &'static str,
}

/// Empty means captive portal.
pub const WIFI_SSID: &str = CONFIG.wifi_ssid;
/// Empty means captive portal.
pub const WIFI_PASSWORD: &str = CONFIG.wifi_password;
/// Default home, used until a location is pushed at runtime.
pub const HOME_LAT: f64 = CONFIG.home_lat;
pub const HOME_LON: f64 = CONFIG.home_lon;
/// Bearer token for `/loc`, empty disables auth.
pub const LOC_TOKEN: &str = CONFIG.loc_token;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constants_follow_config() {
        assert_eq!(WIFI_SSID, CONFIG.wifi_ssid);
        assert_eq!(WIFI_PASSWORD, CONFIG.wifi_password);
        assert_eq!(HOME_LAT, CONFIG.home_lat);
        assert_eq!(HOME_LON, CONFIG.home_lon);
        assert_eq!(LOC_TOKEN, CONFIG.loc_token);
    }

    #[test]
    fn home_is_in_range() {
        assert!((-90.0..=90.0).contains(&HOME_LAT));
        assert!((-180.0..=180.0).contains(&HOME_LON));
    }
}
