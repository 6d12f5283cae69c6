//! Type result and key/value export format
//!
//! A `TypeResult` is ephemeral: it exists for one quiz submission and is
//! serialized on demand, either as JSON (API responses) or as a key/value
//! TOML document (the downloadable export). Both carry all four axis keys.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

use crate::axis::Axis;
use crate::{Error, Result};

/// One value per axis, always all four keys, fixed EI/SN/TF/JP order
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PerAxis<T> {
    #[serde(rename = "EI")]
    pub ei: T,
    #[serde(rename = "SN")]
    pub sn: T,
    #[serde(rename = "TF")]
    pub tf: T,
    #[serde(rename = "JP")]
    pub jp: T,
}

impl<T> Index<Axis> for PerAxis<T> {
    type Output = T;

    fn index(&self, axis: Axis) -> &T {
        match axis {
            Axis::EI => &self.ei,
            Axis::SN => &self.sn,
            Axis::TF => &self.tf,
            Axis::JP => &self.jp,
        }
    }
}

impl<T> IndexMut<Axis> for PerAxis<T> {
    fn index_mut(&mut self, axis: Axis) -> &mut T {
        match axis {
            Axis::EI => &mut self.ei,
            Axis::SN => &mut self.sn,
            Axis::TF => &mut self.tf,
            Axis::JP => &mut self.jp,
        }
    }
}

/// Outcome of scoring one submission
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeResult {
    /// Four-letter type code, one letter per axis in EI/SN/TF/JP order
    pub code: String,
    /// Signed per-axis totals
    pub totals: PerAxis<i32>,
    /// Per-axis strength percentages, 0..=100
    pub strengths: PerAxis<u8>,
}

impl TypeResult {
    /// Serialize to the key/value export document
    pub fn to_export_string(&self) -> Result<String> {
        toml::to_string(self).map_err(|e| Error::Config(format!("Export serialization failed: {}", e)))
    }

    /// Parse an export document back into a result
    pub fn from_export_str(content: &str) -> Result<TypeResult> {
        toml::from_str(content).map_err(|e| Error::InvalidInput(format!("Export parse error: {}", e)))
    }
}
