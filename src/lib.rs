//! Board-texture and action-history abstraction for live No-Limit Hold-Em
//! decision engines.
//!
//! The host calls four numeric entry points once per decision; this crate
//! collapses the live game state behind them into small integer identifiers:
//! a board-texture bucket, a stack-depth category, an SPR category, and a
//! canonical hash of the street's betting sequence.

pub mod api;
pub mod cards;
pub mod clustering;
pub mod gameplay;

// ============================================================================
// TYPE ALIASES
// ============================================================================
/// Stack sizes and pot sizes in big blinds. Live table reads are fractional.
pub type Chips = f32;
/// Texture features and distances between them.
pub type Energy = f32;

// ============================================================================
// TRAITS
// ============================================================================
/// Random instance generation for tests and benches.
pub trait Arbitrary {
    /// Generate a uniformly random instance.
    fn random() -> Self;
}

// ============================================================================
// BOARD CLUSTERING
// ============================================================================
/// Dimensionality of the texture feature space. The compiled half of the
/// artifact contract; `ClusterTable::load` rejects artifacts that disagree.
pub const FEATURE_DIMS: usize = 8;
/// Version of the feature-space contract carried in the artifact manifest.
pub const ARTIFACT_VERSION: u32 = 1;

// ============================================================================
// STACK & SPR CLASSIFICATION
// ============================================================================
/// Upper bounds of the stack-depth categories, in big blinds.
/// Stacks above the last bound clamp into the top category.
pub const DEPTH_BOUNDS: [Chips; 5] = [5.0, 10.0, 15.0, 20.0, 25.0];
/// Number of stack-depth categories.
pub const DEPTH_CATEGORIES: u8 = 6;
/// Ratios at or above this collapse into the open-ended top SPR category.
pub const SPR_CEILING: u8 = 13;
/// Number of SPR categories, including the open-ended top one.
pub const SPR_CATEGORIES: u8 = SPR_CEILING + 1;

// ============================================================================
// ACTION SEQUENCE ENCODING
// ============================================================================
/// Number of bet-size buckets distinguished within Bet and Raise symbols.
pub const SIZE_BUCKETS: u8 = 5;
/// Width of the path digest. 52 bits is the widest integer window that
/// round-trips exactly through the host's f64 numeric type.
pub const DIGEST_BITS: u32 = 52;

// ============================================================================
// RUNTIME UTILITIES
// ============================================================================
/// Initialize dual logging (terminal + file) with timestamped log files.
/// Creates `logs/` and writes DEBUG level to file, INFO to terminal.
pub fn log() {
    std::fs::create_dir_all("logs").expect("create logs directory");
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let time = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .expect("time moves slow")
        .as_secs();
    let file = simplelog::WriteLogger::new(
        log::LevelFilter::Debug,
        config.clone(),
        std::fs::File::create(format!("logs/{}.log", time)).expect("create log file"),
    );
    let term = simplelog::TermLogger::new(
        log::LevelFilter::Info,
        config.clone(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    );
    simplelog::CombinedLogger::init(vec![term, file]).expect("initialize logger");
}
