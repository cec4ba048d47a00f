#[cfg(target_os = "espidf")]
use esp_idf_sys::{self as _};
// If using the `binstart` feature of `esp-idf-sys`, always keep this module imported

use homeloc::location::HomeLocation;
use homeloc::provisioning::ProvisioningMode;
use homeloc::Settings;

#[cfg(target_os = "espidf")]
fn main() -> anyhow::Result<()> {
    use esp_idf_hal::peripherals;
    use esp_idf_svc::eventloop::EspSystemEventLoop;
    use esp_idf_svc::nvs::EspDefaultNvsPartition;
    use homeloc::network::{Esp32WifiDevice, WifiDevice};
    use homeloc::HlError;
    use std::{thread::sleep, time::Duration};

    // It is necessary to call this function once. Otherwise some patches to the runtime
    // implemented by esp-idf-sys might not link properly. See https://github.com/esp-rs/esp-idf-template/issues/71
    esp_idf_sys::link_patches();
    esp_idf_svc::log::EspLogger::initialize_default();

    let settings = Settings::load()?;
    log::info!("settings: {}", settings);

    let peripherals = peripherals::Peripherals::take().ok_or(HlError::InvalidArgument)?;
    let eventloop = EspSystemEventLoop::take()?;
    let nvs = EspDefaultNvsPartition::take()?;

    // Keep the driver alive for as long as the device runs.
    let mut _wifi = None;
    match settings.mode() {
        ProvisioningMode::Station => {
            let mut wifi = Esp32WifiDevice::new(peripherals.modem, eventloop, Some(nvs))?;
            wifi.connect(&settings.wifi)?;
            log::info!("wifi up, ip {}", wifi.ip_addr()?);
            _wifi = Some(wifi);
        }
        ProvisioningMode::CaptivePortal => {
            log::warn!("no wifi credentials, waiting for captive portal provisioning");
        }
    }

    let home = HomeLocation::new(settings.home);
    report(&settings, &home);

    loop {
        sleep(Duration::from_secs(60));
    }
}

#[cfg(not(target_os = "espidf"))]
fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let settings = Settings::load()?;
    log::info!("settings: {}", settings);
    if settings.mode() == ProvisioningMode::CaptivePortal {
        log::warn!("no wifi credentials, device will start in captive portal mode");
    }
    report(&settings, &HomeLocation::new(settings.home));
    Ok(())
}

fn report(settings: &Settings, home: &HomeLocation) {
    let coord = home.coordinate();
    log::info!(
        "home ({}, {}) from {:?}",
        coord.lat,
        coord.lon,
        home.source()
    );
    if settings.loc_auth.is_enabled() {
        log::info!("/loc requires a bearer token");
    } else {
        log::warn!("/loc auth disabled, LOC_TOKEN is empty");
    }
}
