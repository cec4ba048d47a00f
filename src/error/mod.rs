#[cfg(target_os = "espidf")]
use esp_idf_sys::EspError;

use std::error;
use std::fmt;

pub type Result<T> = std::result::Result<T, HlError>;

#[derive(Debug)]
pub enum HlError {
    InvalidArgument,
    InvalidCredentials(&'static str),
    InvalidCoordinate { lat: f64, lon: f64 },
    NotProvisioned,
    Unauthorized,
    JsonError(serde_json::Error),
    #[cfg(target_os = "espidf")]
    EspError(EspError),
}

impl error::Error for HlError {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            HlError::JsonError(error) => Some(error),
            _ => None,
        }
    }
}

impl fmt::Display for HlError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            HlError::InvalidArgument => write!(f, "Invalid Argument"),
            HlError::InvalidCredentials(reason) => write!(f, "Invalid Wi-Fi credentials: {}", reason),
            HlError::InvalidCoordinate { lat, lon } => {
                write!(f, "Invalid coordinate ({}, {})", lat, lon)
            }
            HlError::NotProvisioned => write!(f, "Wi-Fi is not provisioned"),
            HlError::Unauthorized => write!(f, "Unauthorized"),
            HlError::JsonError(error) => error.fmt(f),
            #[cfg(target_os = "espidf")]
            HlError::EspError(error) => error.fmt(f),
        }
    }
}

#[cfg(target_os = "espidf")]
impl From<EspError> for HlError {
    fn from(value: EspError) -> Self {
        HlError::EspError(value)
    }
}

impl From<serde_json::Error> for HlError {
    fn from(value: serde_json::Error) -> Self {
        HlError::JsonError(value)
    }
}
