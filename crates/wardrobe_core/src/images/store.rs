//! Image blob storage contract and filesystem implementation.
//!
//! # Responsibility
//! - Own externally-stored image bytes referenced by `image_paths`.
//! - Keep the core oblivious to image contents.
//!
//! # Invariants
//! - References returned by `store` are opaque file names, never paths.
//! - Lookups never resolve outside the store's base directory.

use std::error::Error;
use std::fmt::{Display, Formatter};
use std::fs;
use std::io;
use std::path::PathBuf;
use uuid::Uuid;

pub type ImageResult<T> = Result<T, ImageStoreError>;

/// Image storage failure surfaced to callers.
#[derive(Debug)]
pub enum ImageStoreError {
    /// No blob exists for the given reference.
    NotFound(String),
    Io(io::Error),
}

impl Display for ImageStoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound(reference) => write!(f, "image not found: {reference}"),
            Self::Io(err) => write!(f, "image storage failure: {err}"),
        }
    }
}

impl Error for ImageStoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::NotFound(_) => None,
            Self::Io(err) => Some(err),
        }
    }
}

impl From<io::Error> for ImageStoreError {
    fn from(value: io::Error) -> Self {
        Self::Io(value)
    }
}

/// External collaborator owning image bytes.
///
/// Used only at item create/edit/delete boundaries.
pub trait ImageStore {
    /// Persists the bytes and returns an opaque reference to them.
    fn store(&self, bytes: &[u8]) -> ImageResult<String>;
    /// Loads the bytes behind a reference.
    fn load(&self, reference: &str) -> ImageResult<Vec<u8>>;
    /// Removes the blob behind a reference.
    fn delete(&self, reference: &str) -> ImageResult<()>;
}

/// Image store writing one file per blob under a base directory.
pub struct FsImageStore {
    base_dir: PathBuf,
}

impl FsImageStore {
    /// Creates the store, creating the base directory when missing.
    pub fn new(base_dir: impl Into<PathBuf>) -> ImageResult<Self> {
        let base_dir = base_dir.into();
        fs::create_dir_all(&base_dir)?;
        Ok(Self { base_dir })
    }

    fn resolve(&self, reference: &str) -> ImageResult<PathBuf> {
        // References are flat file names; anything path-shaped cannot have
        // come from `store` and must not escape base_dir.
        if reference.is_empty()
            || reference.contains('/')
            || reference.contains('\\')
            || reference.contains("..")
        {
            return Err(ImageStoreError::NotFound(reference.to_string()));
        }
        Ok(self.base_dir.join(reference))
    }
}

impl ImageStore for FsImageStore {
    fn store(&self, bytes: &[u8]) -> ImageResult<String> {
        let reference = format!("{}.jpg", Uuid::new_v4());
        fs::write(self.base_dir.join(&reference), bytes)?;
        Ok(reference)
    }

    fn load(&self, reference: &str) -> ImageResult<Vec<u8>> {
        let path = self.resolve(reference)?;
        match fs::read(&path) {
            Ok(bytes) => Ok(bytes),
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                Err(ImageStoreError::NotFound(reference.to_string()))
            }
            Err(err) => Err(err.into()),
        }
    }

    fn delete(&self, reference: &str) -> ImageResult<()> {
        let path = self.resolve(reference)?;
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                Err(ImageStoreError::NotFound(reference.to_string()))
            }
            Err(err) => Err(err.into()),
        }
    }
}
