//! Serialization support for learned value tables.
//!
//! A saved table is a self-describing MessagePack blob carrying a format
//! version, the agent name, the values and some training metadata.

use serde::{Deserialize, Serialize};

use super::value_table::ValueTable;
use crate::{Error, Result};

/// Bookkeeping stored alongside the values.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TrainingMetadata {
    /// Games whose reward has been fed back into the table
    pub episodes: usize,
    /// Seed of the random source used while learning, if any
    pub seed: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavedValueTable {
    pub version: u32,
    pub name: String,
    pub values: ValueTable,
    pub metadata: TrainingMetadata,
}

impl SavedValueTable {
    pub const VERSION: u32 = 1;

    pub fn new(name: impl Into<String>, values: ValueTable, metadata: TrainingMetadata) -> Self {
        Self {
            version: Self::VERSION,
            name: name.into(),
            values,
            metadata,
        }
    }

    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        rmp_serde::to_vec_named(self).map_err(|e| Error::SerializationContext {
            operation: "serialize value table to MessagePack".to_string(),
            message: e.to_string(),
        })
    }

    /// Decode a blob produced by [`SavedValueTable::to_bytes`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::SerializationContext`] for corrupt data and
    /// [`Error::UnsupportedVersion`] for blobs written by another format version.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let saved: Self =
            rmp_serde::from_slice(bytes).map_err(|e| Error::SerializationContext {
                operation: "deserialize value table from MessagePack".to_string(),
                message: e.to_string(),
            })?;

        if saved.version != Self::VERSION {
            return Err(Error::UnsupportedVersion {
                found: saved.version,
                expected: Self::VERSION,
            });
        }

        Ok(saved)
    }

    /// Pretty JSON rendering, for inspection.
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
