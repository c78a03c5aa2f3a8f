/// Game configuration constants.
///
/// This module defines the parameters of a dice duel: match size, nickname
/// limits, and die geometry.
pub const MATCH_SIZE: usize = 2; // A duel is always exactly two participants.

/// Maximum nickname length in characters; longer nicknames are truncated, not rejected.
pub const MAX_NICKNAME_LEN: usize = 10;

/// Number of sides on the die.
pub const DIE_SIDES: u32 = 6;

/// Length of the short match identifier token.
pub const MATCH_ID_LEN: usize = 8;
