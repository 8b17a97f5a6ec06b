use super::size::Size;

/// One betting action observed on the current street, as reported by the
/// host. Bets and raises carry the host's bet-size bucket; the passive
/// actions and the all-in carry nothing.
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, Ord, PartialOrd)]
pub enum Action {
    Fold,
    Check,
    Call,
    Shove,
    Bet(Size),
    Raise(Size),
}

impl Action {
    pub fn is_aggro(&self) -> bool {
        matches!(self, Action::Bet(_) | Action::Raise(_) | Action::Shove)
    }
}

/// u8 bijection
/// symbol codes 1-14 over a 4-bit alphabet; 0 is reserved as the Path
/// terminator so no action may encode to it, and 15 stays unassigned
impl From<Action> for u8 {
    fn from(action: Action) -> Self {
        match action {
            Action::Fold => 1,
            Action::Check => 2,
            Action::Call => 3,
            Action::Shove => 4,
            Action::Bet(size) => 5 + size.index(),
            Action::Raise(size) => 10 + size.index(),
        }
    }
}
impl From<u8> for Action {
    fn from(code: u8) -> Self {
        match code {
            1 => Action::Fold,
            2 => Action::Check,
            3 => Action::Call,
            4 => Action::Shove,
            n @ 5..=9 => Action::Bet(Size::new(n - 5)),
            n @ 10..=14 => Action::Raise(Size::new(n - 10)),
            _ => panic!("invalid action encoding: {}", code),
        }
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Action::Fold => write!(f, "F"),
            Action::Check => write!(f, "O"),
            Action::Call => write!(f, "*"),
            Action::Shove => write!(f, "!"),
            Action::Bet(size) => write!(f, "b{}", size),
            Action::Raise(size) => write!(f, "r{}", size),
        }
    }
}

impl TryFrom<&str> for Action {
    type Error = anyhow::Error;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s {
            "F" => Ok(Action::Fold),
            "O" => Ok(Action::Check),
            "*" => Ok(Action::Call),
            "!" => Ok(Action::Shove),
            s if s.starts_with('b') => Ok(Action::Bet(Self::bucket(&s[1..])?)),
            s if s.starts_with('r') => Ok(Action::Raise(Self::bucket(&s[1..])?)),
            _ => Err(anyhow::anyhow!("invalid action str: {}", s)),
        }
    }
}

impl Action {
    fn bucket(s: &str) -> anyhow::Result<Size> {
        s.parse::<u8>()
            .map(Size::new)
            .map_err(|e| anyhow::anyhow!("invalid size bucket: {}", e))
    }
}

impl crate::Arbitrary for Action {
    fn random() -> Self {
        use crate::Arbitrary;
        use rand::Rng;
        match rand::rng().random_range(0..6) {
            0 => Self::Fold,
            1 => Self::Check,
            2 => Self::Call,
            3 => Self::Shove,
            4 => Self::Bet(Size::random()),
            _ => Self::Raise(Size::random()),
        }
    }
}
