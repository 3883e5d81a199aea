//! # Release Purger
//!
//! A tool for deleting draft releases from GitHub repositories.
//!
//! CI pipelines that create a draft release on every run leave a trail of
//! unpublished drafts behind. This crate lists the releases of a repository
//! and deletes the ones still flagged as drafts, reporting every outcome as it
//! happens.
//!
//! ## Usage
//!
//! ### Command Line
//!
//! ```bash
//! # Delete every draft release of digabi/naksu
//! release-purger digabi/naksu "$GITHUB_TOKEN"
//!
//! # Show what would be deleted
//! release-purger --dry-run digabi/naksu "$GITHUB_TOKEN"
//! ```
//!
//! ### As a Library
//!
//! ```no_run
//! use release_purger::{ClientConfig, DraftPurger, GitHubClient, PurgeConfig};
//! use secrecy::SecretString;
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let token = SecretString::from("ghp_example".to_string());
//! let client = GitHubClient::new("digabi/naksu", &token, &ClientConfig::default())?;
//!
//! let purger = DraftPurger::new(client, PurgeConfig::default());
//! let result = purger.purge().await?;
//! println!("deleted {} drafts", result.deleted.len());
//! # Ok(())
//! # }
//! ```

// Re-export core functionality
pub use release_purger_core::*;

// Re-export commonly used types
pub use release_purger_core::{
    ClientConfig, DraftPurger, GitHubClient, PurgeConfig, PurgeError, PurgeEvent, PurgeResult,
    Release, ReleaseApi,
};
