//! File-backed persistence for the authenticated session.
//!
//! The bearer token and the serialized user record live in two files under
//! the data directory, mirroring the two storage keys of the web client.
//! Anything in those files that no longer parses is discarded and cleared
//! so the next start is clean.

use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

use tempmail_api::User;
use tracing::{debug, warn};

use super::Identity;
use crate::error::Result;

/// File holding the raw bearer token.
const TOKEN_FILE: &str = "token";

/// File holding the serialized user record.
const USER_FILE: &str = "user.json";

/// Stores and reconstructs the session from disk.
#[derive(Debug, Clone)]
pub struct SessionRepository {
    dir: PathBuf,
}

impl SessionRepository {
    /// Creates a repository rooted at the given data directory.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Persists the bearer token.
    ///
    /// # Errors
    ///
    /// Returns an error if the data directory or file cannot be written.
    pub fn store_token(&self, token: &str) -> Result<()> {
        fs::create_dir_all(&self.dir)?;
        fs::write(self.token_path(), token)?;
        debug!("stored session token");
        Ok(())
    }

    /// Persists the user record.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the write fails.
    pub fn store_user(&self, user: &User) -> Result<()> {
        fs::create_dir_all(&self.dir)?;
        let json = serde_json::to_vec_pretty(user)?;
        fs::write(self.user_path(), json)?;
        debug!(email = %user.email, "stored user record");
        Ok(())
    }

    /// Returns the stored token, if present and non-empty.
    #[must_use]
    pub fn token(&self) -> Option<String> {
        fs::read_to_string(self.token_path())
            .ok()
            .map(|token| token.trim().to_string())
            .filter(|token| !token.is_empty())
    }

    /// Reconstructs the identity from storage.
    ///
    /// Returns `None` when either file is missing. An unparsable user
    /// record clears both files before returning `None`.
    #[must_use]
    pub fn load(&self) -> Option<Identity> {
        let token = self.token()?;
        let raw = fs::read(self.user_path()).ok()?;
        match serde_json::from_slice::<User>(&raw) {
            Ok(user) => Some(Identity { user, token }),
            Err(err) => {
                warn!("discarding unparsable stored session: {err}");
                self.clear();
                None
            }
        }
    }

    /// Removes both session files. Missing files are not an error; other
    /// removal failures are logged and swallowed so logout cannot fail.
    pub fn clear(&self) {
        for path in [self.token_path(), self.user_path()] {
            if let Err(err) = fs::remove_file(&path) {
                if err.kind() != ErrorKind::NotFound {
                    warn!("failed to remove {}: {err}", path.display());
                }
            }
        }
    }

    fn token_path(&self) -> PathBuf {
        self.dir.join(TOKEN_FILE)
    }

    fn user_path(&self) -> PathBuf {
        self.dir.join(USER_FILE)
    }
}
