//! The host boundary. Everything that crosses it is a plain number: the
//! exported functions decode their numeric arguments into the typed domain,
//! read the seated game state, and hand back a numeric id, or the sentinel
//! when the contract is violated. No panic ever crosses the ABI.

use crate::cards::board::Board;
use crate::cards::street::Street;
use crate::clustering::bucket::Bucket;
use crate::clustering::table::ClusterTable;
use crate::gameplay::path::Path;
use crate::gameplay::stacks::Depth;
use crate::gameplay::stacks::Spr;
use crate::gameplay::state::Chair;
use crate::gameplay::state::State;
use std::sync::OnceLock;
use std::sync::RwLock;

/// env var naming the artifact directory, with a compiled default
const ABSTRACTION_ENV: &str = "ABSTRACTION";
const ABSTRACTION_DIR: &str = "pgcopy";
/// the documented out-of-contract answer; the host cannot catch anything
const SENTINEL: f64 = -1.;

/// the cluster table loads once and freezes; a failed load freezes too,
/// degrading every postflop bucket query into the sentinel instead of
/// retrying a broken artifact on the hot path
static TABLE: OnceLock<Option<ClusterTable>> = OnceLock::new();
/// the seated game-state provider; written only at seat/stand time
static SEAT: RwLock<Option<Box<dyn State + Send + Sync>>> = RwLock::new(None);

/// Load the cluster artifact from an explicit directory, once. Subsequent
/// calls (and the lazy env-var path) observe the first outcome.
pub fn boot(dir: &std::path::Path) -> anyhow::Result<()> {
    match TABLE.get_or_init(|| freeze(dir)) {
        Some(_) => Ok(()),
        None => Err(anyhow::anyhow!("cluster table unavailable")),
    }
}

/// Seat the host's game-state provider.
pub fn sit(state: Box<dyn State + Send + Sync>) {
    log::info!("{:<32}", "seating game state");
    *SEAT.write().expect("seat lock") = Some(state);
}

/// Unseat the provider; subsequent queries answer with the sentinel.
pub fn stand() {
    log::info!("{:<32}", "unseating game state");
    *SEAT.write().expect("seat lock") = None;
}

/// Board-texture bucket for the given street. Preflop short-circuits to
/// the reserved sentinel bucket without consulting the table.
pub fn board_bucket(street: Street) -> Option<Bucket> {
    match street {
        Street::Pref => Some(Bucket::PREFLOP),
        street => {
            let table = table()?;
            seated(|state| match Board::try_from((street, state.board())) {
                Ok(ref board) => Some(table.bucket(board)),
                Err(e) => {
                    log::warn!("rejecting board query: {:#}", e);
                    None
                }
            })
        }
    }
}

/// Effective-stack depth category for the given chair.
pub fn depth(chair: Chair) -> Option<Depth> {
    seated(|state| Some(Depth::from(state.stack(chair))))
}

/// SPR category for the given chair against the current pot.
pub fn spr(chair: Chair) -> Option<Spr> {
    seated(|state| Some(Spr::from((state.stack(chair), state.pot()))))
}

/// Canonical hash of the given street's betting sequence so far.
pub fn history(street: Street) -> Option<Path> {
    seated(|state| Some(state.history(street).iter().copied().collect()))
}

fn freeze(dir: &std::path::Path) -> Option<ClusterTable> {
    match ClusterTable::load(dir) {
        Ok(table) => Some(table),
        Err(e) => {
            log::error!("cluster table load failed: {:#}", e);
            None
        }
    }
}

fn table() -> Option<&'static ClusterTable> {
    TABLE
        .get_or_init(|| {
            let ref dir = std::env::var(ABSTRACTION_ENV)
                .unwrap_or_else(|_| String::from(ABSTRACTION_DIR));
            freeze(std::path::Path::new(dir))
        })
        .as_ref()
}

fn seated<T>(read: impl FnOnce(&dyn State) -> Option<T>) -> Option<T> {
    let guard = SEAT.read().expect("seat lock");
    match guard.as_ref() {
        Some(state) => read(state.as_ref()),
        None => {
            log::warn!("no game state seated");
            None
        }
    }
}

/// host numerics arrive as f64; only exact small integers are meaningful
fn ordinal(n: f64) -> Option<i8> {
    (n.is_finite() && n.fract() == 0. && (-128. ..=127.).contains(&n)).then(|| n as i8)
}

#[allow(non_snake_case)]
#[unsafe(no_mangle)]
pub extern "C" fn GetBoardBucketID(street: f64) -> f64 {
    ordinal(street)
        .and_then(|n| Street::try_from(n).ok())
        .and_then(board_bucket)
        .map(f64::from)
        .unwrap_or(SENTINEL)
}

#[allow(non_snake_case)]
#[unsafe(no_mangle)]
pub extern "C" fn GetEffStackCategory(chair: f64) -> f64 {
    ordinal(chair)
        .and_then(|n| Chair::try_from(n).ok())
        .and_then(depth)
        .map(f64::from)
        .unwrap_or(SENTINEL)
}

#[allow(non_snake_case)]
#[unsafe(no_mangle)]
pub extern "C" fn GetSPRCategory(chair: f64) -> f64 {
    ordinal(chair)
        .and_then(|n| Chair::try_from(n).ok())
        .and_then(spr)
        .map(f64::from)
        .unwrap_or(SENTINEL)
}

#[allow(non_snake_case)]
#[unsafe(no_mangle)]
pub extern "C" fn GetActionSequenceHash(street: f64) -> f64 {
    ordinal(street)
        .and_then(|n| Street::try_from(n).ok())
        .and_then(history)
        .map(f64::from)
        .unwrap_or(SENTINEL)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::hand::Hand;
    use crate::clustering::centroid::Centroid;
    use crate::clustering::features::Features;
    use crate::gameplay::action::Action;
    use crate::gameplay::size::Size;
    use crate::Arbitrary;
    use crate::Chips;
    use std::collections::BTreeMap;

    /// a scripted stand-in for the host's live table state
    struct Rigged {
        street: Street,
        board: Hand,
        pot: Chips,
        stacks: BTreeMap<i8, Chips>,
        log: Vec<Action>,
    }

    impl State for Rigged {
        fn street(&self) -> Street {
            self.street
        }
        fn board(&self) -> Hand {
            self.board
        }
        fn pot(&self) -> Chips {
            self.pot
        }
        fn stack(&self, chair: Chair) -> Chips {
            self.stacks
                .get(&i8::from(chair))
                .copied()
                .unwrap_or_default()
        }
        fn history(&self, street: Street) -> &[Action] {
            if street == self.street {
                &self.log
            } else {
                &[]
            }
        }
    }

    fn artifact() -> std::path::PathBuf {
        let dir = std::env::temp_dir().join("bucketeer-facade-artifact");
        std::fs::create_dir_all(&dir).unwrap();
        let partitions: BTreeMap<Street, Vec<Centroid>> = Street::clustered()
            .iter()
            .map(|&street| {
                let centroids = (0..32u16)
                    .map(|i| Centroid::from((crate::clustering::bucket::Bucket::from(i), Features::random())))
                    .collect();
                (street, centroids)
            })
            .collect();
        ClusterTable::from(partitions).save(&dir).unwrap();
        dir
    }

    fn rigged() -> Rigged {
        Rigged {
            street: Street::Flop,
            board: Hand::try_from("Ah Kh Qh").unwrap(),
            pot: 100.,
            stacks: BTreeMap::from([(-1i8, 7.), (3i8, 50.)]),
            log: vec![Action::Bet(Size::new(2)), Action::Call],
        }
    }

    /// the boundary owns process-wide state, so every scenario runs inside
    /// this one sequential test
    #[test]
    fn facade() {
        let dir = artifact();
        boot(&dir).unwrap();
        sit(Box::new(rigged()));

        // preflop short-circuits to the reserved bucket
        assert_eq!(GetBoardBucketID(1.), 0.);
        // postflop assignment is deterministic and permutation does not
        // reach it: the board is a set before the table ever sees it
        let bucket = GetBoardBucketID(2.);
        assert!(bucket >= 0.);
        assert_eq!(bucket, GetBoardBucketID(2.));
        // street/board cardinality mismatch answers the sentinel
        assert_eq!(GetBoardBucketID(4.), SENTINEL);
        // malformed street ordinals answer the sentinel
        assert_eq!(GetBoardBucketID(5.), SENTINEL);
        assert_eq!(GetBoardBucketID(2.5), SENTINEL);
        assert_eq!(GetBoardBucketID(f64::NAN), SENTINEL);

        // 7bb hero stack sits in the second depth category
        assert_eq!(GetEffStackCategory(-1.), 2.);
        // stack 50 into pot 100 is SPR 0.5, the bottom category
        assert_eq!(GetSPRCategory(3.), 1.);
        // chairs outside -1..9 answer the sentinel
        assert_eq!(GetEffStackCategory(12.), SENTINEL);
        assert_eq!(GetSPRCategory(-2.), SENTINEL);

        // the flop log hashes to the packed symbol sequence
        let expected = rigged().log.into_iter().collect::<Path>();
        assert_eq!(GetActionSequenceHash(2.), f64::from(expected));
        // the untouched turn log hashes to zero
        assert_eq!(GetActionSequenceHash(3.), 0.);

        // a different sequence on the same street hashes differently
        sit(Box::new(Rigged {
            log: vec![Action::Raise(Size::new(2)), Action::Fold],
            ..rigged()
        }));
        assert_ne!(GetActionSequenceHash(2.), f64::from(expected));

        // a zero pot reads as infinite SPR, the top category
        sit(Box::new(Rigged {
            pot: 0.,
            ..rigged()
        }));
        assert_eq!(GetSPRCategory(3.), crate::SPR_CATEGORIES as f64);

        // with nobody seated, every read answers the sentinel
        stand();
        assert_eq!(GetEffStackCategory(-1.), SENTINEL);
        assert_eq!(GetBoardBucketID(2.), SENTINEL);
        assert_eq!(GetActionSequenceHash(2.), SENTINEL);
        // except preflop, which never needs the table or the state
        assert_eq!(GetBoardBucketID(1.), 0.);

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn ordinals_reject_inexact_numerics() {
        assert_eq!(ordinal(2.), Some(2));
        assert_eq!(ordinal(-1.), Some(-1));
        assert_eq!(ordinal(2.5), None);
        assert_eq!(ordinal(f64::NAN), None);
        assert_eq!(ordinal(f64::INFINITY), None);
        assert_eq!(ordinal(1e9), None);
    }
}
