use std::ops::RangeInclusive;

/// Lowest valid AP poll rank
pub const AP_RANK_MIN: u32 = 1;

/// Highest valid AP poll rank
pub const AP_RANK_MAX: u32 = 25;

/// AP poll tiers and their base hype scores, best tier first
pub const AP_TIERS: [(RangeInclusive<u32>, u32); 4] = [
    (1..=5, 100),  // elite
    (6..=9, 80),   // high
    (10..=15, 60), // mid
    (16..=25, 40), // low
];

/// KenPom thresholds for unranked opponents, ascending. First match wins.
pub const KENPOM_TIERS: [(u32, f64); 3] = [
    (50, 0.9),   // close to ranked quality
    (100, 0.75),
    (200, 0.6),
];

/// Multiplier for an unranked opponent outside the KenPom top 200
pub const KENPOM_DEFAULT_MULTIPLIER: f64 = 0.5;

/// Dampening applied when only one team is ranked
pub const SINGLE_RANKED_MULTIPLIER: f64 = 0.6;

/// Points lost per AP position between two ranked teams
pub const GAP_PENALTY_PER_RANK: f64 = 2.0;

/// Hype cap for games between two unranked teams
pub const UNRANKED_CEILING: f64 = 40.0;

/// Average KenPom rank is divided by this before subtracting from the ceiling
pub const UNRANKED_KENPOM_DIVISOR: f64 = 10.0;

/// Score when neither team has enough ranking data
pub const NO_DATA_FALLBACK_SCORE: f64 = 20.0;
