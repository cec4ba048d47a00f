#[path = "src/portal.rs"]
mod portal;

#[toml_cfg::toml_config]
pub struct Config {
    #[default("")]
    wifi_ssid: &'static str,
    #[default("")]
    wifi_password: &'static str,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("cargo:rerun-if-changed=cfg.toml");

    if portal::needs_captive_portal(CONFIG.wifi_ssid, CONFIG.wifi_password) {
        println!(
            "cargo:warning=Wi-Fi credentials are empty, device will start in captive portal mode. \
             Use `cfg.toml.example` as a template."
        );
    }

    if std::env::var("CARGO_CFG_TARGET_OS").as_deref() == Ok("espidf") {
        embuild::build::CfgArgs::output_propagated("ESP_IDF")?;
        embuild::build::LinkArgs::output_propagated("ESP_IDF")?;
    }
    Ok(())
}
