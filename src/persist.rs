//! JSON persistence for trained distributions.
//!
//! The record holds `classes` (centroid, membership distribution, count) and
//! the fitted `partitions`. The dependent index is not stored; it is always
//! the last partition. Decoding runs the same shape checks as
//! [`Distribution::from_parts`], so a record without partitions is rejected.

use std::{fmt, fs, io, path::Path};

use serde::{Serialize, de::DeserializeOwned};
use tracing::debug;

use crate::{distribution::Distribution, partition::Partition};

/// # Overview
///
/// Failure while encoding, decoding, reading or writing a distribution.
#[derive(Debug)]
pub enum PersistError {
    Encode(serde_json::Error),
    Decode(serde_json::Error),
    Io {
        context: &'static str,
        source:  io::Error
    }
}

impl fmt::Display for PersistError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Encode(err) => write!(f, "failed to encode distribution: {err}"),
            Self::Decode(err) => write!(f, "failed to decode distribution: {err}"),
            Self::Io {
                context,
                source
            } => write!(f, "{context}: {source}")
        }
    }
}

impl std::error::Error for PersistError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Encode(err) | Self::Decode(err) => Some(err),
            Self::Io {
                source, ..
            } => Some(source)
        }
    }
}

/// Result type for persistence operations.
pub type PersistResult<T> = core::result::Result<T, PersistError>;

impl<P> Distribution<P>
where
    P: Partition + Serialize + DeserializeOwned
{
    /// # Overview
    ///
    /// Encodes the model as a JSON string.
    pub fn to_json(&self) -> PersistResult<String> {
        serde_json::to_string(self).map_err(PersistError::Encode)
    }

    /// # Overview
    ///
    /// Decodes and validates a model from JSON.
    pub fn from_json(json: &str) -> PersistResult<Self> {
        serde_json::from_str(json).map_err(PersistError::Decode)
    }

    /// # Overview
    ///
    /// Writes the model to `path` as JSON.
    pub fn save<Q: AsRef<Path>>(&self, path: Q) -> PersistResult<()> {
        let path = path.as_ref();
        let json = self.to_json()?;
        fs::write(path, json).map_err(|source| PersistError::Io {
            context: "failed to write distribution file",
            source
        })?;

        debug!(path = %path.display(), classes = self.n_classes(), "saved distribution");
        Ok(())
    }

    /// # Overview
    ///
    /// Reads a model previously written by [`save`](Self::save).
    pub fn load<Q: AsRef<Path>>(path: Q) -> PersistResult<Self> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|source| PersistError::Io {
            context: "failed to read distribution file",
            source
        })?;
        let dist = Self::from_json(&json)?;

        debug!(path = %path.display(), classes = dist.n_classes(), "loaded distribution");
        Ok(dist)
    }
}
