use crate::cards::board::Board;
use crate::cards::hand::Hand;
use crate::cards::street::Street;
use crate::Energy;
use crate::FEATURE_DIMS;

/// A fixed-length texture description of a board, every component
/// normalized to [0, 1] so squared Euclidean distance against the trained
/// centroids is meaningful across streets.
///
/// Components, in order:
/// - paired:       share of the board duplicating an already-seen rank
/// - suited:       dominance of the most-represented suit
/// - flush_draw:   progress of that suit toward five cards
/// - straightness: best occupancy of any five-rank window (wheel included)
/// - connectivity: closeness of adjacent distinct ranks
/// - high_card:    top rank
/// - spread:       distance between top and bottom rank
/// - broadway:     share of cards ten or higher
///
/// Extraction reads the Hand bitset, so it is invariant under any
/// permutation of the cards the host revealed them in.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Features([Energy; FEATURE_DIMS]);

impl Features {
    pub const EMPTY: Self = Self([0.; FEATURE_DIMS]);

    /// squared Euclidean distance, the metric the artifact was trained under
    pub fn distance(&self, other: &Self) -> Energy {
        self.0
            .iter()
            .zip(other.0.iter())
            .map(|(a, b)| (a - b) * (a - b))
            .sum()
    }

    pub fn as_slice(&self) -> &[Energy] {
        &self.0
    }

    fn paired(hand: Hand) -> Energy {
        let cards = hand.size() as Energy;
        let ranks = u16::from(hand).count_ones() as Energy;
        (cards - ranks) / (cards - 1.)
    }
    fn suited(hand: Hand) -> Energy {
        (Self::flush_cards(hand) - 1.) / (hand.size() as Energy - 1.)
    }
    fn flush_draw(hand: Hand) -> Energy {
        (Self::flush_cards(hand) - 2.).max(0.) / 3.
    }
    fn straightness(hand: Hand) -> Energy {
        let ranks = u16::from(hand) as u32;
        let wheel = (1 << 12) | 0b1111;
        let filled = (0..=8)
            .map(|lo| 0b11111u32 << lo)
            .chain(std::iter::once(wheel))
            .map(|window| (ranks & window).count_ones())
            .max()
            .expect("ten candidate windows") as Energy;
        (filled - 1.) / 4.
    }
    fn connectivity(hand: Hand) -> Energy {
        let ranks = Self::rank_indices(hand);
        match ranks.len() {
            0 | 1 => 0.,
            n => {
                ranks
                    .windows(2)
                    .map(|pair| pair[1] - pair[0])
                    .map(|gap| (5u8.saturating_sub(gap)) as Energy / 4.)
                    .sum::<Energy>()
                    / (n - 1) as Energy
            }
        }
    }
    fn high_card(hand: Hand) -> Energy {
        let mask = u16::from(hand);
        (15 - mask.leading_zeros()) as Energy / 12.
    }
    fn spread(hand: Hand) -> Energy {
        let mask = u16::from(hand);
        let hi = 15 - mask.leading_zeros();
        let lo = mask.trailing_zeros();
        (hi - lo) as Energy / 12.
    }
    fn broadway(hand: Hand) -> Energy {
        const TEN_OR_BETTER: u64 = 0x000FFFFF_00000000;
        let high = (u64::from(hand) & TEN_OR_BETTER).count_ones() as Energy;
        high / hand.size() as Energy
    }

    fn flush_cards(hand: Hand) -> Energy {
        use crate::cards::suit::Suit;
        Suit::all()
            .iter()
            .map(|suit| hand.of(suit).size())
            .max()
            .expect("four suits") as Energy
    }
    fn rank_indices(hand: Hand) -> Vec<u8> {
        let mask = u16::from(hand);
        (0..13).filter(|i| mask & (1 << i) != 0).collect()
    }
}

impl From<[Energy; FEATURE_DIMS]> for Features {
    fn from(values: [Energy; FEATURE_DIMS]) -> Self {
        Self(values)
    }
}

impl From<&Board> for Features {
    fn from(board: &Board) -> Self {
        match board.street() {
            Street::Pref => Self::EMPTY,
            _ => {
                let hand = board.cards();
                Self([
                    Self::paired(hand),
                    Self::suited(hand),
                    Self::flush_draw(hand),
                    Self::straightness(hand),
                    Self::connectivity(hand),
                    Self::high_card(hand),
                    Self::spread(hand),
                    Self::broadway(hand),
                ])
            }
        }
    }
}

impl std::fmt::Display for Features {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "[")?;
        for value in self.0.iter() {
            write!(f, " {:.2}", value)?;
        }
        write!(f, " ]")
    }
}

impl crate::Arbitrary for Features {
    fn random() -> Self {
        use rand::Rng;
        let mut rng = rand::rng();
        Self(std::array::from_fn(|_| rng.random_range(0f32..=1f32)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flop(s: &str) -> Board {
        Board::try_from((Street::Flop, s)).unwrap()
    }

    #[test]
    fn permutation_invariant() {
        let fwd = Features::from(&flop("Ah Kh Qh"));
        let rev = Features::from(&flop("Qh Ah Kh"));
        assert_eq!(fwd, rev);
    }

    #[test]
    fn preflop_is_empty() {
        assert_eq!(Features::from(&Board::preflop()), Features::EMPTY);
    }

    #[test]
    fn monotone_flop_reads_suited_and_connected() {
        let features = Features::from(&flop("Ah Kh Qh"));
        let [paired, suited, flush_draw, straightness, connectivity, high, _, broadway] =
            features.0;
        assert_eq!(paired, 0.);
        assert_eq!(suited, 1.);
        assert!((flush_draw - 1. / 3.).abs() < 1e-6);
        assert_eq!(straightness, 0.5);
        assert_eq!(connectivity, 1.);
        assert_eq!(high, 1.);
        assert_eq!(broadway, 1.);
    }

    #[test]
    fn paired_rainbow_flop_reads_paired() {
        let features = Features::from(&flop("2c 2d 7h"));
        let [paired, suited, flush_draw, ..] = features.0;
        assert_eq!(paired, 0.5);
        assert_eq!(suited, 0.);
        assert_eq!(flush_draw, 0.);
    }

    #[test]
    fn wheel_window_counts_the_ace() {
        let features = Features::from(&flop("Ac 2d 3h"));
        let straightness = features.0[3];
        assert_eq!(straightness, 0.5);
    }

    #[test]
    fn all_features_are_normalized() {
        for _ in 0..1000 {
            for &street in Street::clustered() {
                let features = Features::from(&Board::from(street));
                for &value in features.as_slice() {
                    assert!((0. ..=1.).contains(&value), "{} out of range", value);
                }
            }
        }
    }

    #[test]
    fn distance_is_zero_on_self() {
        let features = Features::from(&flop("Ah Kh Qh"));
        assert_eq!(features.distance(&features), 0.);
    }
}
