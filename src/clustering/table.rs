use super::bucket::Bucket;
use super::centroid::Centroid;
use super::features::Features;
use super::manifest::Manifest;
use super::manifest::Partition;
use crate::cards::board::Board;
use crate::cards::street::Street;
use crate::ARTIFACT_VERSION;
use crate::FEATURE_DIMS;
use anyhow::bail;
use anyhow::Context;
use byteorder::ReadBytesExt;
use byteorder::WriteBytesExt;
use byteorder::BE;
use std::collections::BTreeMap;
use std::io::Read;
use std::io::Seek;
use std::io::SeekFrom;
use std::io::Write;

/// The trained centroid table: one partition per postflop street, loaded
/// once from the offline artifact and immutable for the life of the
/// process. Assignment is the k-means nearest step performed online.
pub struct ClusterTable(BTreeMap<Street, Vec<Centroid>>);

impl ClusterTable {
    /// Load the artifact from a directory holding the manifest and the
    /// per-street PGCOPY-framed centroid tables. Fails on a missing or
    /// malformed resource, a feature-space version or dimensionality
    /// mismatch, duplicate bucket ids, or an empty partition; nothing is
    /// recoverable online, so the caller decides whether to abort or to
    /// degrade into sentinel answers.
    pub fn load(dir: &std::path::Path) -> anyhow::Result<Self> {
        let manifest = Manifest::load(dir)?;
        if manifest.version != ARTIFACT_VERSION {
            bail!(
                "artifact version {} does not match engine version {}",
                manifest.version,
                ARTIFACT_VERSION,
            );
        }
        let mut partitions = BTreeMap::new();
        for &street in Street::clustered() {
            let partition = manifest.partition(street)?;
            let centroids = Self::read(dir, partition)
                .with_context(|| format!("load {} centroids", street))?;
            partitions.insert(street, centroids);
        }
        log::info!(
            "{:<32}{:<32}",
            "loaded cluster table",
            partitions
                .iter()
                .map(|(street, rows)| format!("{}:{}", street, rows.len()))
                .collect::<Vec<_>>()
                .join(" "),
        );
        Ok(Self(partitions))
    }

    /// Persist the table in the same layout `load` consumes. The offline
    /// trainer and the round-trip tests share this path.
    pub fn save(&self, dir: &std::path::Path) -> anyhow::Result<()> {
        let streets = self
            .0
            .iter()
            .map(|(street, rows)| {
                (
                    street.to_string(),
                    Partition {
                        k: rows.len(),
                        dims: FEATURE_DIMS,
                        table: format!("{}.centroids.pgcopy", street),
                    },
                )
            })
            .collect();
        let manifest = Manifest {
            version: ARTIFACT_VERSION,
            streets,
        };
        manifest.save(dir)?;
        for (street, rows) in self.0.iter() {
            let path = dir.join(format!("{}.centroids.pgcopy", street));
            let file = std::fs::File::create(&path)
                .with_context(|| format!("create {}", path.display()))?;
            let mut writer = std::io::BufWriter::new(file);
            writer.write_all(b"PGCOPY\n\xFF\r\n\0")?;
            writer.write_u32::<BE>(0)?;
            writer.write_u32::<BE>(0)?;
            for row in rows.iter() {
                writer.write_u16::<BE>(1 + FEATURE_DIMS as u16)?;
                writer.write_u32::<BE>(size_of::<i64>() as u32)?;
                writer.write_i64::<BE>(i64::from(row.bucket()))?;
                for &value in row.features().as_slice() {
                    writer.write_u32::<BE>(size_of::<f32>() as u32)?;
                    writer.write_f32::<BE>(value)?;
                }
            }
            writer.write_u16::<BE>(0xFFFF)?;
        }
        Ok(())
    }

    /// Deterministic nearest-centroid assignment: squared Euclidean
    /// distance to every centroid of the street, minimum wins, ties break
    /// to the lowest bucket id.
    pub fn nearest(&self, street: Street, features: &Features) -> Bucket {
        self.0
            .get(&street)
            .expect("centroid partition loaded for postflop street")
            .iter()
            .map(|c| (c.features().distance(features), c.bucket()))
            .min_by(|a, b| a.0.total_cmp(&b.0).then(a.1.cmp(&b.1)))
            .expect("non-empty partition verified at load")
            .1
    }

    /// Board abstraction: preflop boards take the fixed sentinel, postflop
    /// boards take their nearest trained centroid's bucket.
    pub fn bucket(&self, board: &Board) -> Bucket {
        match board.street() {
            Street::Pref => Bucket::PREFLOP,
            street => self.nearest(street, &Features::from(board)),
        }
    }

    fn read(dir: &std::path::Path, partition: &Partition) -> anyhow::Result<Vec<Centroid>> {
        if partition.dims != FEATURE_DIMS {
            bail!(
                "artifact dimensionality {} does not match engine dimensionality {}",
                partition.dims,
                FEATURE_DIMS,
            );
        }
        let path = dir.join(&partition.table);
        let file =
            std::fs::File::open(&path).with_context(|| format!("open {}", path.display()))?;
        let mut reader = std::io::BufReader::new(file);
        reader.seek(SeekFrom::Start(19)).context("seek past header")?;
        let mut rows = Vec::with_capacity(partition.k);
        loop {
            let fields = reader.read_u16::<BE>().context("read row header")?;
            if fields == 0xFFFF {
                break;
            }
            if fields != 1 + FEATURE_DIMS as u16 {
                bail!("unexpected field count: {}", fields);
            }
            let length = reader.read_u32::<BE>().context("read bucket length")?;
            if length as usize != size_of::<i64>() {
                bail!("unexpected bucket width: {}", length);
            }
            let bucket = reader.read_i64::<BE>().context("read bucket")?;
            let bucket = Bucket::try_from(bucket)?;
            let mut values = [0f32; FEATURE_DIMS];
            for value in values.iter_mut() {
                let length = reader.read_u32::<BE>().context("read feature length")?;
                if length as usize != size_of::<f32>() {
                    bail!("unexpected feature width: {}", length);
                }
                *value = reader.read_f32::<BE>().context("read feature")?;
                if !value.is_finite() {
                    bail!("non-finite feature for bucket {}", bucket);
                }
            }
            rows.push(Centroid::from((bucket, Features::from(values))));
        }
        let mut trailing = Vec::new();
        reader.read_to_end(&mut trailing).context("read trailer")?;
        if !trailing.is_empty() {
            bail!("{} bytes past trailer", trailing.len());
        }
        if rows.is_empty() {
            bail!("empty partition");
        }
        if rows.len() != partition.k {
            bail!("expected {} centroids, found {}", partition.k, rows.len());
        }
        let mut seen = std::collections::BTreeSet::new();
        for row in rows.iter() {
            if !seen.insert(row.bucket()) {
                bail!("duplicate bucket id {}", row.bucket());
            }
        }
        Ok(rows)
    }
}

impl From<BTreeMap<Street, Vec<Centroid>>> for ClusterTable {
    fn from(partitions: BTreeMap<Street, Vec<Centroid>>) -> Self {
        Self(partitions)
    }
}
