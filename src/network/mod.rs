pub mod wifi;

pub use wifi::Esp32WifiDevice;
pub use wifi::WifiDevice;
