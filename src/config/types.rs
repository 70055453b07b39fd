use crate::probe::UsedBasis;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Probe settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProbeConfig {
    /// Path queried when none is given
    pub default_path: PathBuf,
    /// What "used" is measured against
    pub used_basis: UsedBasis,
}

impl Default for ProbeConfig {
    fn default() -> Self {
        Self {
            default_path: PathBuf::from("."),
            used_basis: UsedBasis::Free,
        }
    }
}
