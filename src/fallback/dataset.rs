// Local profile datasets used when the provider path is unavailable.
//
// The fallback search receives its data through the `ProfileSource` trait so
// tests and callers decide what it searches over.

use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

use crate::models::Profile;

/// Read-only access to a collection of normalized profiles.
pub trait ProfileSource: Send + Sync {
    /// All profiles, in a stable order.
    fn profiles(&self) -> &[Profile];
}

/// A fixed, in-memory list of profiles.
#[derive(Debug, Clone, Default)]
pub struct InMemoryDataset {
    profiles: Vec<Profile>,
}

impl InMemoryDataset {
    pub fn new(profiles: Vec<Profile>) -> Self {
        Self { profiles }
    }

    /// Load a JSON array of profiles from disk.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read dataset at {}", path.display()))?;
        let profiles: Vec<Profile> = serde_json::from_str(&raw)
            .with_context(|| format!("Failed to parse dataset at {}", path.display()))?;

        info!(
            path = %path.display(),
            profiles = profiles.len(),
            "Loaded fallback dataset"
        );

        Ok(Self::new(profiles))
    }

    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }
}

impl ProfileSource for InMemoryDataset {
    fn profiles(&self) -> &[Profile] {
        &self.profiles
    }
}
