// SPDX-License-Identifier: MPL-2.0
use std::fmt;

#[derive(Debug, Clone)]
pub enum Error {
    Io(String),
    Config(String),
    Catalog(CatalogError),
    Image(String),
}

/// Specific error types for portfolio manifest problems.
/// Used to tell the user exactly which part of the manifest is unusable.
#[derive(Debug, Clone)]
pub enum CatalogError {
    /// The manifest file could not be parsed.
    InvalidManifest(String),

    /// An album declares no images.
    EmptyAlbum(String),

    /// An album references a cover image that is not among its entries.
    MissingCover(String),

    /// An image asset points at a file whose dimensions cannot be determined.
    UnreadableImage(String),

    /// Two entries share the same identifier.
    DuplicateId(String),
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogError::InvalidManifest(msg) => write!(f, "Invalid manifest: {}", msg),
            CatalogError::EmptyAlbum(title) => {
                write!(f, "Album \"{}\" contains no images", title)
            }
            CatalogError::MissingCover(title) => {
                write!(f, "Album \"{}\" has no usable cover image", title)
            }
            CatalogError::UnreadableImage(path) => {
                write!(f, "Cannot determine dimensions of image: {}", path)
            }
            CatalogError::DuplicateId(id) => write!(f, "Duplicate identifier: {}", id),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Catalog(e) => write!(f, "Catalog Error: {}", e),
            Error::Image(e) => write!(f, "Image Error: {}", e),
        }
    }
}

impl From<CatalogError> for Error {
    fn from(err: CatalogError) -> Self {
        Error::Catalog(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<image_rs::ImageError> for Error {
    fn from(err: image_rs::ImageError) -> Self {
        Error::Image(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
