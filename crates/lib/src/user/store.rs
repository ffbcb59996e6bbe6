//! Flat-file credential storage.
//!
//! Users live in a single YAML mapping of username to Argon2 PHC hash. New
//! users are appended as one-entry mappings so the file is never rewritten.
//! Existing entries are never changed or removed.

use std::{
    collections::BTreeMap,
    path::{Path, PathBuf},
};

use tokio::{fs, io::AsyncWriteExt};
use tracing::{debug, info, warn};

use super::{
    crypto::{hash_password, verify_password},
    errors::UserError,
    signup::validate_signup,
};
use crate::Result;

/// The YAML file mapping usernames to password hashes.
#[derive(Debug, Clone)]
pub struct UserStore {
    path: PathBuf,
}

impl UserStore {
    /// Open the credentials file at `path`, creating an empty one if it is missing.
    pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent).await?;
        }
        fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .await?;
        debug!("Opened credentials file at {}", path.display());
        Ok(Self { path })
    }

    /// Path of the credentials file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load every username and password hash.
    pub async fn load(&self) -> Result<BTreeMap<String, String>> {
        let contents = fs::read_to_string(&self.path).await?;
        if contents.trim().is_empty() {
            return Ok(BTreeMap::new());
        }
        serde_yaml::from_str(&contents).map_err(|e| {
            UserError::CredentialsFile {
                reason: e.to_string(),
            }
            .into()
        })
    }

    /// Registered usernames, sorted.
    pub async fn usernames(&self) -> Result<Vec<String>> {
        Ok(self.load().await?.into_keys().collect())
    }

    /// Append a user without running signup validation.
    pub async fn add(&self, username: &str, password: &str) -> Result<()> {
        let hash = hash_password(password)?;
        let entry = BTreeMap::from([(username, hash)]);
        let yaml = serde_yaml::to_string(&entry).map_err(|e| UserError::CredentialsFile {
            reason: e.to_string(),
        })?;

        let existing = fs::read_to_string(&self.path).await?;
        let mut file = fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .await?;
        if !existing.is_empty() && !existing.ends_with('\n') {
            file.write_all(b"\n").await?;
        }
        file.write_all(yaml.as_bytes()).await?;
        file.flush().await?;

        info!("Added user {username}");
        Ok(())
    }

    /// Validate a signup submission and, if it passes, add the user.
    pub async fn sign_up(&self, username: &str, password: &str, confirmation: &str) -> Result<()> {
        validate_signup(username, password, confirmation, &self.usernames().await?)?;
        self.add(username, password).await
    }

    /// Check a username and password against the stored hashes.
    ///
    /// Unknown users and wrong passwords both fail with
    /// [`UserError::InvalidCredentials`].
    pub async fn authenticate(&self, username: &str, password: &str) -> Result<()> {
        let users = self.load().await?;
        let verified = users
            .get(username)
            .is_some_and(|hash| verify_password(password, hash).is_ok());
        if verified {
            debug!("Authenticated {username}");
            Ok(())
        } else {
            warn!("Failed sign-in attempt for {username}");
            Err(UserError::InvalidCredentials.into())
        }
    }

    /// Number of registered users.
    pub async fn count(&self) -> Result<usize> {
        Ok(self.load().await?.len())
    }
}
