/// Bucket identifies a cluster of strategically similar board textures
/// within one street's partition of the trained artifact.
///
/// Ids are small non-negative integers assigned by the offline trainer,
/// unique within their street. Bucket 0 is reserved for the preflop
/// sentinel, where no clustering applies.
#[derive(Debug, Default, Clone, Copy, Hash, Eq, PartialEq, Ord, PartialOrd)]
pub struct Bucket(u16);

impl Bucket {
    pub const PREFLOP: Self = Self(0);
}

/// u16 isomorphism
impl From<u16> for Bucket {
    fn from(n: u16) -> Self {
        Self(n)
    }
}
impl From<Bucket> for u16 {
    fn from(b: Bucket) -> Self {
        b.0
    }
}

/// i64 conversion for the on-disk artifact rows
impl TryFrom<i64> for Bucket {
    type Error = anyhow::Error;
    fn try_from(n: i64) -> Result<Self, Self::Error> {
        u16::try_from(n)
            .map(Self)
            .map_err(|_| anyhow::anyhow!("bucket id out of range: {}", n))
    }
}
impl From<Bucket> for i64 {
    fn from(b: Bucket) -> Self {
        b.0 as i64
    }
}

/// f64 injection for the host's numeric boundary
impl From<Bucket> for f64 {
    fn from(b: Bucket) -> Self {
        b.0 as f64
    }
}

impl std::fmt::Display for Bucket {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

impl crate::Arbitrary for Bucket {
    fn random() -> Self {
        use rand::Rng;
        Self(rand::rng().random_range(0..256))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bijective_i64() {
        let bucket = Bucket::from(37u16);
        assert_eq!(bucket, Bucket::try_from(i64::from(bucket)).unwrap());
    }

    #[test]
    fn rejects_out_of_range_ids() {
        assert!(Bucket::try_from(-1i64).is_err());
        assert!(Bucket::try_from(1i64 << 20).is_err());
    }

    #[test]
    fn preflop_sentinel_is_zero() {
        assert_eq!(u16::from(Bucket::PREFLOP), 0);
    }
}
