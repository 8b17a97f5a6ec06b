use super::card::Card;
use super::hand::Hand;
use super::street::Street;

/// The community cards revealed so far, validated against their street.
///
/// Construction enforces the cardinality invariant (0/3/4/5 cards for
/// preflop/flop/turn/river), so a Board in hand is always well-formed and
/// downstream texture reads need no further checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Board {
    street: Street,
    cards: Hand,
}

impl Board {
    pub fn preflop() -> Self {
        Self {
            street: Street::Pref,
            cards: Hand::empty(),
        }
    }
    pub fn street(&self) -> Street {
        self.street
    }
    pub fn cards(&self) -> Hand {
        self.cards
    }
}

impl TryFrom<(Street, Hand)> for Board {
    type Error = anyhow::Error;
    fn try_from((street, cards): (Street, Hand)) -> Result<Self, Self::Error> {
        if cards.size() == street.n_observed() {
            Ok(Self { street, cards })
        } else {
            Err(anyhow::anyhow!(
                "board cardinality mismatch: {} holds {} cards, saw {}",
                street,
                street.n_observed(),
                cards.size(),
            ))
        }
    }
}

impl TryFrom<(Street, &str)> for Board {
    type Error = anyhow::Error;
    fn try_from((street, s): (Street, &str)) -> Result<Self, Self::Error> {
        Self::try_from((street, Hand::try_from(s)?))
    }
}

/// random board of the given street, for tests and benches
impl From<Street> for Board {
    fn from(street: Street) -> Self {
        use crate::Arbitrary;
        let mut cards = Hand::empty();
        while cards.size() < street.n_observed() {
            cards = cards.insert(Card::random());
        }
        Self { street, cards }
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{} {}", self.street, self.cards)
    }
}
