// A tiny error type so we don't rely on anyhow/thiserror.
// Every variant states *where* things went wrong.
use std::fmt::{self, Display};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    WindowInit(String),    // Creating the window failed
    WindowUpdate(String),  // Updating the window buffer failed
    ImageDecode(String),   // Reading/decoding the source image failed
    InvalidBuffer(String), // Pixel data doesn't match its stated dimensions
}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::WindowInit(s) => write!(f, "Window init error: {s}"),
            Error::WindowUpdate(s) => write!(f, "Window update error: {s}"),
            Error::ImageDecode(s) => write!(f, "Image decode error: {s}"),
            Error::InvalidBuffer(s) => write!(f, "Invalid pixel buffer: {s}"),
        }
    }
}

impl std::error::Error for Error {}
