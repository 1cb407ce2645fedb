//! Reference catalog of known and novel-candidate organism profiles
//!
//! A catalog is immutable once built. The engine only reads the two
//! collections, so a catalog can be shared freely between analyses and
//! threads.

mod builtin;

use deepmorph_core::{DeepmorphError, DeepmorphResult};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;
use tracing::debug;

/// Compounds an organism may yield and what they could be used for
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BiosyntheticPotential {
    pub has_potential: bool,
    pub compounds: Vec<String>,
    pub applications: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrganismProfile {
    pub scientific_name: String,
    pub common_name: String,
    pub phylogenetic_group: String,
    pub ecological_role: String,
    pub biosynthetic_potential: BiosyntheticPotential,
}

/// On-disk shape of a catalog file
#[derive(Debug, Deserialize)]
struct CatalogFile {
    known: Vec<OrganismProfile>,
    novel: Vec<OrganismProfile>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReferenceCatalog {
    known: Vec<OrganismProfile>,
    novel: Vec<OrganismProfile>,
}

impl ReferenceCatalog {
    /// Build a catalog, rejecting profiles that appear in both collections
    pub fn new(known: Vec<OrganismProfile>, novel: Vec<OrganismProfile>) -> DeepmorphResult<Self> {
        let known_names: HashSet<&str> = known.iter().map(|p| p.scientific_name.as_str()).collect();

        if let Some(shared) = novel
            .iter()
            .find(|p| known_names.contains(p.scientific_name.as_str()))
        {
            return Err(DeepmorphError::InvalidInput(format!(
                "'{}' is listed as both known and novel",
                shared.scientific_name
            )));
        }

        Ok(Self { known, novel })
    }

    /// The reference data: 7 hydrothermal-vent species and 3 novel candidates
    pub fn builtin() -> Self {
        Self {
            known: builtin::known_profiles(),
            novel: builtin::novel_profiles(),
        }
    }

    pub fn from_json(json: &str) -> DeepmorphResult<Self> {
        let file: CatalogFile = serde_json::from_str(json)?;
        Self::new(file.known, file.novel)
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> DeepmorphResult<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(DeepmorphError::NotFound(format!(
                "reference catalog {}",
                path.display()
            )));
        }

        let contents = std::fs::read_to_string(path)?;
        let catalog = Self::from_json(&contents)?;
        debug!(
            "Loaded catalog from {}: {} known, {} novel",
            path.display(),
            catalog.known.len(),
            catalog.novel.len()
        );
        Ok(catalog)
    }

    pub fn to_json(&self) -> DeepmorphResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn known(&self) -> &[OrganismProfile] {
        &self.known
    }

    pub fn novel(&self) -> &[OrganismProfile] {
        &self.novel
    }
}

impl Default for ReferenceCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}
