use super::action::Action;
use crate::DIGEST_BITS;

/// A street's betting sequence packed into a u64, four bits per action,
/// first action in the most significant occupied nibble. The packing is a
/// base-16 positional number over the nonzero symbol codes, so distinct
/// sequences of up to thirteen actions produce distinct digests and the
/// empty sequence is exactly zero.
///
/// A fourteenth action shifts the oldest symbol out of the digest window;
/// truncation is the only collision source, and it is deterministic.
#[derive(Debug, Default, Clone, Copy, Eq, Hash, PartialEq, Ord, PartialOrd)]
pub struct Path(u64);

impl Path {
    pub fn length(&self) -> usize {
        (64 - self.0.leading_zeros() as usize).div_ceil(4)
    }
    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }
    /// the low 52 bits, the widest integer window an f64 carries exactly
    pub fn digest(&self) -> u64 {
        self.0 & ((1 << DIGEST_BITS) - 1)
    }
}

/// u64 isomorphism
impl From<u64> for Path {
    fn from(n: u64) -> Self {
        Self(n)
    }
}
impl From<Path> for u64 {
    fn from(path: Path) -> Self {
        path.0
    }
}

/// f64 injection for the host's numeric boundary
impl From<Path> for f64 {
    fn from(path: Path) -> Self {
        path.digest() as f64
    }
}

impl FromIterator<Action> for Path {
    fn from_iter<T: IntoIterator<Item = Action>>(iter: T) -> Self {
        iter.into_iter()
            .map(u8::from)
            .fold(0u64, |hash, code| (hash << 4) | code as u64)
            .into()
    }
}

/// we can replay a path from its first action
/// by popping the most significant occupied nibble
impl Iterator for Path {
    type Item = Action;
    fn next(&mut self) -> Option<Self::Item> {
        match self.length() {
            0 => None,
            n => {
                let shift = (n - 1) * 4;
                let code = ((self.0 >> shift) & 0xF) as u8;
                self.0 &= !(0xF << shift);
                Some(Action::from(code))
            }
        }
    }
}

impl From<Path> for Vec<Action> {
    fn from(path: Path) -> Self {
        path.into_iter().collect()
    }
}

impl std::fmt::Display for Path {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let mut path = *self;
        path.try_for_each(|action| write!(f, ".{}", action))
    }
}

impl crate::Arbitrary for Path {
    fn random() -> Self {
        use crate::Arbitrary;
        use rand::Rng;
        let n = rand::rng().random_range(0..=13);
        (0..n).map(|_| Action::random()).collect()
    }
}
