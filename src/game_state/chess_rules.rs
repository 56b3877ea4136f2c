//! Canonical chess-rule constants and draw-rule configuration.
//!
//! Holds the standard starting position FEN plus the tunable thresholds the
//! result detector reads. `RulesConfig::default()` is standard chess.

/// Standard chess starting position in Forsyth-Edwards Notation (FEN).
pub const STARTING_POSITION_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

/// Plies without a pawn move or capture before the fifty-move draw.
pub const FIFTY_MOVE_RULE_PLIES: u16 = 100;

/// Occurrences of one position that make a repetition draw.
pub const REPETITION_DRAW_COUNT: usize = 3;

/// Which material configurations count as an automatic draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MaterialDrawPolicy {
    /// Only bare king against bare king.
    KingsOnly,
    /// Bare kings, a single minor piece against a bare king, and
    /// bishops-only endings where every bishop stands on one square color.
    #[default]
    Standard,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RulesConfig {
    pub fifty_move_limit: u16,
    pub repetition_limit: usize,
    pub material_draw_policy: MaterialDrawPolicy,
}

impl Default for RulesConfig {
    fn default() -> Self {
        Self {
            fifty_move_limit: FIFTY_MOVE_RULE_PLIES,
            repetition_limit: REPETITION_DRAW_COUNT,
            material_draw_policy: MaterialDrawPolicy::default(),
        }
    }
}

impl RulesConfig {
    pub fn with_material_draw_policy(mut self, policy: MaterialDrawPolicy) -> Self {
        self.material_draw_policy = policy;
        self
    }
}
