use crate::cards::street::Street;
use anyhow::Context;
use serde::Deserialize;
use serde::Serialize;
use std::collections::BTreeMap;

/// The artifact manifest. The offline trainer writes one next to the
/// per-street centroid tables; loading validates it against the compiled
/// feature-space contract before any table is read.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Manifest {
    /// version of the feature-space contract the centroids were trained under
    pub version: u32,
    /// per-street partition descriptors, keyed by street name
    pub streets: BTreeMap<String, Partition>,
}

/// One street's slice of the artifact.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Partition {
    /// number of centroids
    pub k: usize,
    /// feature dimensionality
    pub dims: usize,
    /// table file name, relative to the manifest
    pub table: String,
}

impl Manifest {
    pub const FILE: &'static str = "abstraction.json";

    pub fn load(dir: &std::path::Path) -> anyhow::Result<Self> {
        let path = dir.join(Self::FILE);
        let file = std::fs::File::open(&path)
            .with_context(|| format!("open manifest {}", path.display()))?;
        serde_json::from_reader(std::io::BufReader::new(file))
            .with_context(|| format!("parse manifest {}", path.display()))
    }

    pub fn save(&self, dir: &std::path::Path) -> anyhow::Result<()> {
        let path = dir.join(Self::FILE);
        let file = std::fs::File::create(&path)
            .with_context(|| format!("create manifest {}", path.display()))?;
        serde_json::to_writer_pretty(std::io::BufWriter::new(file), self)
            .with_context(|| format!("write manifest {}", path.display()))
    }

    pub fn partition(&self, street: Street) -> anyhow::Result<&Partition> {
        self.streets
            .get(&street.to_string())
            .with_context(|| format!("manifest missing {} partition", street))
    }
}
