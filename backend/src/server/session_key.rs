//! Session signing key loading.

use std::path::{Path, PathBuf};

use actix_web::cookie::Key;
use tracing::warn;
use zeroize::Zeroize;

/// Minimum key file length accepted by release builds.
pub const SESSION_KEY_MIN_LEN: usize = 64;
/// Shortest master key [`Key::derive_from`] accepts.
const DERIVE_MIN_LEN: usize = 32;

/// Build mode used to decide how strict key loading is.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum BuildMode {
    /// Debug builds fall back to a temporary key.
    Debug,
    /// Release builds require a readable key of sufficient length.
    Release,
}

impl BuildMode {
    /// Determine the build mode from `cfg!(debug_assertions)`.
    #[must_use]
    pub const fn from_debug_assertions() -> Self {
        if cfg!(debug_assertions) {
            Self::Debug
        } else {
            Self::Release
        }
    }

    pub(super) const fn is_debug(self) -> bool {
        matches!(self, Self::Debug)
    }

    const fn min_key_len(self) -> usize {
        match self {
            Self::Debug => DERIVE_MIN_LEN,
            Self::Release => SESSION_KEY_MIN_LEN,
        }
    }
}

/// Errors raised while loading the session key.
#[derive(thiserror::Error, Debug)]
pub enum SessionKeyError {
    /// Reading the key file failed and no fallback is permitted.
    #[error("failed to read session key at {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// The key file is too short for the build mode.
    #[error("session key at {path} too short: need >= {min_len} bytes, got {length}")]
    TooShort {
        path: PathBuf,
        length: usize,
        min_len: usize,
    },
}

/// Derive the cookie signing key from the file at `path`.
///
/// A missing or unreadable file yields a temporary key when `mode` is
/// [`BuildMode::Debug`] or `allow_ephemeral` is set; sessions then do not
/// survive a restart.
///
/// # Errors
/// [`SessionKeyError::Read`] when the file cannot be read and no fallback is
/// allowed; [`SessionKeyError::TooShort`] for keys under 64 bytes in release
/// builds or under 32 bytes in debug builds.
pub fn load_session_key(
    path: &Path,
    mode: BuildMode,
    allow_ephemeral: bool,
) -> Result<Key, SessionKeyError> {
    match std::fs::read(path) {
        Ok(mut bytes) => {
            let length = bytes.len();
            let min_len = mode.min_key_len();
            if length < min_len {
                bytes.zeroize();
                return Err(SessionKeyError::TooShort {
                    path: path.to_path_buf(),
                    length,
                    min_len,
                });
            }
            let key = Key::derive_from(&bytes);
            bytes.zeroize();
            Ok(key)
        }
        Err(source) => {
            if mode.is_debug() || allow_ephemeral {
                warn!(
                    path = %path.display(),
                    error = %source,
                    "using temporary session key (dev only)"
                );
                Ok(Key::generate())
            } else {
                Err(SessionKeyError::Read {
                    path: path.to_path_buf(),
                    source,
                })
            }
        }
    }
}
