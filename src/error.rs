use serde_json::Error as SerdeError;
use std::{error, fmt};

/// Error type shared by the decoder, geometry and asset layers.
#[derive(Debug)]
pub enum Error {
    /// The board code is not valid board JSON
    Decode(SerdeError),
    /// The board code is empty or whitespace
    EmptyCode,
    /// The code is in a format this decoder does not read (e.g. `[stgy:...]`)
    UnsupportedFormat(String),
    /// No atlas entry exists for this marker type
    UnknownMarkerType(String),
    /// Sweep angle outside `[0, 360]` or not finite
    InvalidSweep(f32),
    /// A sprite sheet or background image failed to load
    Texture {
        /// Locator that was requested
        locator: String,
        /// Backend error message
        message: String,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Decode(err) => write!(f, "Failed to decode board JSON: {}", err),
            Error::EmptyCode => write!(f, "Board code is empty"),
            Error::UnsupportedFormat(prefix) => {
                write!(f, "Unsupported board code format: {}", prefix)
            }
            Error::UnknownMarkerType(kind) => write!(f, "No icon config found for type: {}", kind),
            Error::InvalidSweep(sweep) => {
                write!(f, "Sweep angle {} is outside the range [0, 360]", sweep)
            }
            Error::Texture { locator, message } => {
                write!(f, "Failed to load texture {}: {}", locator, message)
            }
        }
    }
}

impl From<SerdeError> for Error {
    fn from(err: SerdeError) -> Self {
        Error::Decode(err)
    }
}

impl error::Error for Error {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            Error::Decode(err) => Some(err),
            _ => None,
        }
    }
}
