#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum Street {
    Pref,
    Flop,
    Turn,
    Rive,
}

impl Street {
    pub const fn all() -> &'static [Self] {
        &[Self::Pref, Self::Flop, Self::Turn, Self::Rive]
    }
    /// streets with a centroid partition in the cluster artifact
    pub const fn clustered() -> &'static [Self] {
        &[Self::Flop, Self::Turn, Self::Rive]
    }
    pub const fn n_observed(&self) -> usize {
        match self {
            Self::Pref => 0,
            Self::Flop => 3,
            Self::Turn => 4,
            Self::Rive => 5,
        }
    }
}

/// i8 isomorphism
/// the host protocol counts streets 1-4, preflop first
impl TryFrom<i8> for Street {
    type Error = anyhow::Error;
    fn try_from(n: i8) -> Result<Self, Self::Error> {
        match n {
            1 => Ok(Self::Pref),
            2 => Ok(Self::Flop),
            3 => Ok(Self::Turn),
            4 => Ok(Self::Rive),
            _ => Err(anyhow::anyhow!("invalid street ordinal: {}", n)),
        }
    }
}
impl From<Street> for i8 {
    fn from(street: Street) -> Self {
        match street {
            Street::Pref => 1,
            Street::Flop => 2,
            Street::Turn => 3,
            Street::Rive => 4,
        }
    }
}

impl TryFrom<&str> for Street {
    type Error = anyhow::Error;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s {
            "preflop" => Ok(Self::Pref),
            "flop" => Ok(Self::Flop),
            "turn" => Ok(Self::Turn),
            "river" => Ok(Self::Rive),
            _ => Err(anyhow::anyhow!("invalid street str: {}", s)),
        }
    }
}

impl std::fmt::Display for Street {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Pref => write!(f, "preflop"),
            Self::Flop => write!(f, "flop"),
            Self::Turn => write!(f, "turn"),
            Self::Rive => write!(f, "river"),
        }
    }
}

impl crate::Arbitrary for Street {
    fn random() -> Self {
        use rand::Rng;
        match rand::rng().random_range(0..4) {
            0 => Self::Pref,
            1 => Self::Flop,
            2 => Self::Turn,
            _ => Self::Rive,
        }
    }
}
