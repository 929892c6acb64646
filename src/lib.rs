//! Decision core for autonomous No-Limit Hold'em players.
//!
//! Given a hand, a table snapshot and a behavioural profile, the engine picks
//! exactly one action. It blends a Monte Carlo equity estimate, a closed-form
//! preflop score, board and draw texture, opponent statistics, tournament
//! pressure and a tilt model into that single choice.
//!
//! Shared mutable state (equity memo, opponent models, tilt) lives in a
//! [`engine::Session`] that callers own and drop.
#![allow(dead_code)]

pub mod cards;
pub mod difficulty;
pub mod engine;
pub mod equity;
pub mod heuristic;
pub mod icm;
pub mod opponent;
pub mod profile;
pub mod range;
pub mod table;
pub mod texture;
pub mod tilt;

// ============================================================================
// TYPE ALIASES
// ============================================================================
/// Stack sizes, bets and pots in chips.
pub type Chips = i32;
/// Equities, frequencies, behavioural scalars.
pub type Probability = f32;
/// Expected values and prize amounts.
pub type Utility = f32;

// ============================================================================
// TRAITS
// ============================================================================
/// Random instance generation for testing, benchmarking and batch sweeps.
pub trait Arbitrary {
    /// Generate a uniformly random instance.
    fn random() -> Self;
}

// ============================================================================
// HASHING
// ============================================================================
/// SplitMix64 finalizer. Stable across platforms and releases, so every
/// seed derived from card identities replays identically.
pub const fn scramble(x: u64) -> u64 {
    let mut z = x.wrapping_add(0x9E3779B97F4A7C15);
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58476D1CE4E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D049BB133111EB);
    z ^ (z >> 31)
}

/// Clamp into the unit interval.
pub fn unit(x: f32) -> Probability {
    x.clamp(0.0, 1.0)
}

// ============================================================================
// EQUITY SIMULATION
// ============================================================================
/// Entries held by the equity memo before the oldest half is swept.
pub const EQUITY_CACHE_CAPACITY: usize = 4096;
/// Rollouts per rayon task.
pub const EQUITY_CHUNK: usize = 256;
/// Returned when the unseen deck cannot cover the requested deal.
pub const NEUTRAL_EQUITY: Probability = 0.5;

// ============================================================================
// PREFLOP HEURISTIC
// Chen-style score of two hole cards, normalised over [CHEN_MIN, CHEN_MAX].
// ============================================================================
/// Lowest reachable score (72o).
pub const CHEN_MIN: f32 = -1.5;
/// Highest reachable score (AA).
pub const CHEN_MAX: f32 = 20.0;
/// Score floor of the premium tier.
pub const CHEN_PREMIUM: f32 = 10.0;
/// Score floor of the strong tier.
pub const CHEN_STRONG: f32 = 8.0;
/// Score floor of the playable tier.
pub const CHEN_PLAYABLE: f32 = 5.5;
/// Normalised strength needed to enter with neutral tightness and no position.
pub const ENTRY_BASE: Probability = 0.40;
/// Entry threshold shift per unit of tightness away from 0.5.
pub const ENTRY_TIGHTNESS_SLOPE: f32 = 0.30;
/// Loosest allowed entry threshold.
pub const ENTRY_FLOOR: Probability = 0.15;
/// Tightest allowed entry threshold.
pub const ENTRY_CEILING: Probability = 0.90;

// ============================================================================
// BOARD TEXTURE AND DRAWS
// ============================================================================
/// Wetness at or above which a board counts as wet.
pub const WET_BOARD: Probability = 0.50;
/// Outs for a flush draw.
pub const FLUSH_OUTS: usize = 9;
/// Outs for an open-ended straight draw.
pub const OPEN_ENDED_OUTS: usize = 8;
/// Outs for a gutshot.
pub const GUTSHOT_OUTS: usize = 4;

// ============================================================================
// RANGE ESTIMATION
// ============================================================================
/// Width assumed when the position is unknown.
pub const DEFAULT_RANGE_WIDTH: Probability = 0.30;
/// Equity discount at zero width. Scales linearly to none at full width.
pub const RANGE_EQUITY_PENALTY: f32 = 0.25;

// ============================================================================
// OPPONENT MODELING
// ============================================================================
/// Hands observed before a style is assigned.
pub const MIN_HANDS_FOR_STYLE: u32 = 20;
/// Hands observed for full confidence.
pub const FULL_CONFIDENCE_HANDS: u32 = 100;
/// Confidence above which style adjustments apply.
pub const RELIABLE_CONFIDENCE: Probability = 0.30;
/// Models kept per session.
pub const MAX_OPPONENT_MODELS: usize = 256;
/// Lookups between stale sweeps.
pub const OPPONENT_SWEEP_INTERVAL: u64 = 64;
/// Lookups a model may go unseen before a sweep drops it.
pub const OPPONENT_STALE_AFTER: u64 = 1024;

// ============================================================================
// TOURNAMENT EQUITY
// ============================================================================
/// Stack ratio above which a stack is big.
pub const BIG_STACK_RATIO: f32 = 1.5;
/// Stack ratio below which a stack is short.
pub const SHORT_STACK_RATIO: f32 = 0.7;
/// Players beyond the bubble that still count as near it.
pub const NEAR_BUBBLE_WINDOW: usize = 5;
/// Largest field solved exactly by Malmuth-Harville.
pub const ICM_EXACT_PLAYERS: usize = 10;

// ============================================================================
// TILT
// Effective parameters move linearly with tilt and stop at these bounds.
// ============================================================================
/// Hands for a full recovery from maximum tilt.
pub const TILT_RECOVERY_HANDS: f32 = 20.0;
pub const TILT_TIGHTNESS_SLOPE: f32 = -0.30;
pub const TILT_TIGHTNESS_FLOOR: Probability = 0.05;
pub const TILT_AGGRESSION_SLOPE: f32 = 0.40;
pub const TILT_AGGRESSION_CEILING: Probability = 0.95;
pub const TILT_BLUFF_SLOPE: f32 = 0.30;
pub const TILT_BLUFF_CEILING: Probability = 0.80;
pub const TILT_CALL_DOWN_SLOPE: f32 = 0.25;
pub const TILT_CALL_DOWN_CEILING: Probability = 0.95;

// ============================================================================
// EFFECTIVE PROFILE BOUNDS
// ============================================================================
/// Largest accumulated steal bonus.
pub const MAX_STEAL_BONUS: f32 = 0.5;
/// Smallest value sizing multiplier.
pub const MIN_VALUE_SIZING: f32 = 0.5;
/// Largest value sizing multiplier.
pub const MAX_VALUE_SIZING: f32 = 2.0;

// ============================================================================
// EXPLOITATIVE SIZING AND THRESHOLDS
// ============================================================================
/// Open raise in big blinds.
pub const OPEN_RAISE_BBS: Chips = 3;
/// Added to the open per limper, in big blinds.
pub const LIMPER_INCREMENT_BBS: Chips = 1;
/// 3-bet as a multiple of the current bet.
pub const THREE_BET_MULTIPLIER: f32 = 3.0;
/// 4-bet as a multiple of the current bet.
pub const FOUR_BET_MULTIPLIER: f32 = 2.2;
/// Stack-to-pot below which premiums shove over a 3-bet.
pub const SHORT_SPR_PREFLOP: f32 = 4.0;
/// Stack-to-pot below which monsters shove over a bet.
pub const SHORT_SPR_POSTFLOP: f32 = 3.0;
/// Call-down tendency above which a player calls with any piece.
pub const CALLING_STATION: Probability = 0.6;
/// Category from which a made hand is a monster (flush or better).
pub const MONSTER_CATEGORY: u8 = 5;
/// Category from which a made hand is strong (two pair or better).
pub const STRONG_CATEGORY: u8 = 2;
/// Equity from which any hand is played as strong.
pub const STRONG_EQUITY: Probability = 0.70;
/// Share of bluff frequency spent on preflop bluff 3-bets.
pub const BLUFF_THREE_BET_FACTOR: f32 = 0.25;
/// Share of bluff frequency spent on postflop stabs from late position.
pub const PURE_BLUFF_FACTOR: f32 = 0.5;
/// Equity margin over the price needed before raising a marginal hand.
pub const RAISE_MARGIN: Probability = 0.20;
/// Implied equity credited when stacks are deep.
pub const IMPLIED_DEEP: Probability = 0.04;
/// Implied equity credited to open-ended and flush draws.
pub const IMPLIED_STRONG_DRAW: Probability = 0.06;
/// Implied equity credited to gutshots.
pub const IMPLIED_WEAK_DRAW: Probability = 0.02;

// ============================================================================
// GTO-FLAVOURED PROCEDURE
// Position-indexed thresholds over normalised preflop strength, with
// hash-seeded mixing between two actions near each boundary.
// ============================================================================
/// Open size in big blinds.
pub const GTO_OPEN_BBS: f32 = 2.5;
/// 3-bet multiplier in position.
pub const GTO_THREE_BET_IP: f32 = 3.0;
/// 3-bet multiplier out of position.
pub const GTO_THREE_BET_OOP: f32 = 3.5;
/// Width of the band below a threshold where actions mix.
pub const GTO_MIX_BAND: Probability = 0.05;
/// Percent of boundary hands that take the aggressive option.
pub const GTO_MIX_PCT: u64 = 50;
/// Strength needed to 3-bet for value.
pub const GTO_THREE_BET: Probability = 0.55;
/// Strength needed to 4-bet.
pub const GTO_FOUR_BET: Probability = 0.70;
/// Strength needed to call a 3-bet.
pub const GTO_CONTINUE_THREE_BET: Probability = 0.55;
/// Percent of late-position boundary hands that 3-bet as a bluff.
pub const GTO_BLUFF_THREE_BET_PCT: u64 = 30;
/// Percent of draws that bet as a semi-bluff.
pub const GTO_SEMI_BLUFF_PCT: u64 = 50;
/// Percent of air that bets in position.
pub const GTO_BLUFF_IP_PCT: u64 = 25;
/// Percent of air that bets out of position.
pub const GTO_BLUFF_OOP_PCT: u64 = 15;
/// Percent of continuing nut hands that raise instead of call.
pub const GTO_RAISE_PCT: u64 = 40;
/// Category from which a defending hand may raise.
pub const GTO_RAISE_CATEGORY: u8 = 4;
/// Tolerance on the minimum defense comparison.
pub const MDF_EPSILON: Probability = 1e-6;

// ============================================================================
// RUNTIME UTILITIES
// ============================================================================
/// Initialize dual logging (terminal + file) with timestamped log files.
/// Creates `logs/` directory and writes DEBUG level to file, INFO to terminal.
#[cfg(feature = "server")]
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
        simplelog::TerminalMode::Stderr,
        simplelog::ColorChoice::Auto,
    );
    simplelog::CombinedLogger::init(vec![term, file]).expect("initialize logger");
}
