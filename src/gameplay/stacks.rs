use crate::Chips;
use crate::DEPTH_BOUNDS;
use crate::DEPTH_CATEGORIES;
use crate::SPR_CATEGORIES;
use crate::SPR_CEILING;

/// Effective-stack depth category, 1 through 6, over the trained range of
/// 2-30 big blinds. Live stacks drift outside that range transiently, so
/// conversion clamps rather than errors: anything at or below the grid
/// lands in 1, anything above it lands in 6.
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, Ord, PartialOrd)]
pub struct Depth(u8);

impl Depth {
    pub fn category(&self) -> u8 {
        self.0
    }
}

impl From<Chips> for Depth {
    fn from(stack: Chips) -> Self {
        let category = DEPTH_BOUNDS
            .iter()
            .position(|&bound| stack <= bound)
            .map(|i| i as u8 + 1)
            .unwrap_or(DEPTH_CATEGORIES);
        Self(category)
    }
}

impl From<Depth> for f64 {
    fn from(depth: Depth) -> Self {
        depth.0 as f64
    }
}

impl std::fmt::Display for Depth {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "depth:{}", self.0)
    }
}

/// Stack-to-pot-ratio category: one category per unit interval of the
/// ratio, starting at 1 for everything below ratio 1, with an open-ended
/// top category once the ratio reaches the ceiling. A zero pot is an
/// infinite ratio and takes the top category, never an error.
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, Ord, PartialOrd)]
pub struct Spr(u8);

impl Spr {
    pub const TOP: Self = Self(SPR_CATEGORIES);

    pub fn category(&self) -> u8 {
        self.0
    }
}

/// (effective stack, pot) conversion; pot <= 0 means no denominator
impl From<(Chips, Chips)> for Spr {
    fn from((stack, pot): (Chips, Chips)) -> Self {
        if pot <= 0. {
            Self::TOP
        } else {
            let ratio = (stack / pot).max(0.);
            let rung = (ratio.floor() as u8).min(SPR_CEILING);
            Self(rung + 1)
        }
    }
}

impl From<Spr> for f64 {
    fn from(spr: Spr) -> Self {
        spr.0 as f64
    }
}

impl std::fmt::Display for Spr {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "spr:{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn depth_matches_the_trained_grid() {
        assert_eq!(Depth::from(2.).category(), 1);
        assert_eq!(Depth::from(5.).category(), 1);
        assert_eq!(Depth::from(6.).category(), 2);
        assert_eq!(Depth::from(7.).category(), 2);
        assert_eq!(Depth::from(10.).category(), 2);
        assert_eq!(Depth::from(11.).category(), 3);
        assert_eq!(Depth::from(15.).category(), 3);
        assert_eq!(Depth::from(20.).category(), 4);
        assert_eq!(Depth::from(25.).category(), 5);
        assert_eq!(Depth::from(26.).category(), 6);
        assert_eq!(Depth::from(30.).category(), 6);
    }

    #[test]
    fn depth_clamps_outside_the_grid() {
        assert_eq!(Depth::from(0.).category(), 1);
        assert_eq!(Depth::from(1.).category(), 1);
        assert_eq!(Depth::from(31.).category(), 6);
        assert_eq!(Depth::from(1000.).category(), 6);
    }

    #[test]
    fn depth_is_monotone() {
        let mut last = 0u8;
        for stack in 0..200 {
            let category = Depth::from(stack as Chips / 4.).category();
            assert!(category >= last);
            last = category;
        }
    }

    #[test]
    fn spr_takes_unit_bins() {
        assert_eq!(Spr::from((50., 100.)).category(), 1);
        assert_eq!(Spr::from((100., 100.)).category(), 2);
        assert_eq!(Spr::from((150., 100.)).category(), 2);
        assert_eq!(Spr::from((200., 100.)).category(), 3);
        assert_eq!(Spr::from((250., 100.)).category(), 3);
    }

    #[test]
    fn spr_zero_pot_is_infinite() {
        assert_eq!(Spr::from((50., 0.)), Spr::TOP);
        assert_eq!(Spr::from((0., 0.)), Spr::TOP);
    }

    #[test]
    fn spr_caps_at_the_top_category() {
        assert_eq!(Spr::from((1300., 100.)), Spr::TOP);
        assert_eq!(Spr::from((100000., 100.)), Spr::TOP);
        assert_eq!(Spr::TOP.category(), SPR_CATEGORIES);
    }

    #[test]
    fn spr_is_monotone() {
        let mut last = 0u8;
        for stack in 0..2000 {
            let category = Spr::from((stack as Chips, 100.)).category();
            assert!(category >= last);
            last = category;
        }
    }
}
