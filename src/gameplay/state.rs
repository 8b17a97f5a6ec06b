use super::action::Action;
use crate::cards::hand::Hand;
use crate::cards::street::Street;
use crate::Chips;

/// A seat identifier at the host's table. The host protocol spells the
/// hero as -1 and the table seats as 0-9.
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, Ord, PartialOrd)]
pub enum Chair {
    Hero,
    Seat(u8),
}

/// i8 isomorphism over the host's chair ordinals
impl TryFrom<i8> for Chair {
    type Error = anyhow::Error;
    fn try_from(n: i8) -> Result<Self, Self::Error> {
        match n {
            -1 => Ok(Self::Hero),
            0..=9 => Ok(Self::Seat(n as u8)),
            _ => Err(anyhow::anyhow!("invalid chair ordinal: {}", n)),
        }
    }
}
impl From<Chair> for i8 {
    fn from(chair: Chair) -> Self {
        match chair {
            Chair::Hero => -1,
            Chair::Seat(n) => n as i8,
        }
    }
}

impl std::fmt::Display for Chair {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Hero => write!(f, "hero"),
            Self::Seat(n) => write!(f, "seat {}", n),
        }
    }
}

/// The game-state collaborator. The host owns and mutates the live table
/// state; this engine only ever reads it through this seam, once per
/// decision, on the host's thread.
///
/// The host is responsible for clearing each street's action log when the
/// street ends; the engine hashes whatever log it is shown.
pub trait State {
    /// the street the table is currently on
    fn street(&self) -> Street;
    /// community cards revealed so far
    fn board(&self) -> Hand;
    /// current pot size in big blinds
    fn pot(&self) -> Chips;
    /// a player's effective stack in big blinds
    fn stack(&self, chair: Chair) -> Chips;
    /// the ordered betting actions observed on the given street
    fn history(&self, street: Street) -> &[Action];
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bijective_i8() {
        for n in -1..=9i8 {
            let chair = Chair::try_from(n).unwrap();
            assert_eq!(n, i8::from(chair));
        }
    }

    #[test]
    fn rejects_foreign_ordinals() {
        assert!(Chair::try_from(-2i8).is_err());
        assert!(Chair::try_from(10i8).is_err());
    }
}
