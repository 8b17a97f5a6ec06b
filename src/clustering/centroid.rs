use super::bucket::Bucket;
use super::features::Features;

/// One trained cluster representative: a point in feature space and the
/// bucket id the offline trainer assigned it. Immutable once loaded.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Centroid {
    bucket: Bucket,
    features: Features,
}

impl Centroid {
    pub fn bucket(&self) -> Bucket {
        self.bucket
    }
    pub fn features(&self) -> &Features {
        &self.features
    }
}

impl From<(Bucket, Features)> for Centroid {
    fn from((bucket, features): (Bucket, Features)) -> Self {
        Self { bucket, features }
    }
}

impl std::fmt::Display for Centroid {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{} {}", self.bucket, self.features)
    }
}

impl crate::Arbitrary for Centroid {
    fn random() -> Self {
        use crate::Arbitrary;
        Self {
            bucket: Bucket::random(),
            features: Features::random(),
        }
    }
}
