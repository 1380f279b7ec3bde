//! Pursuer sensing: the visibility cycle and the contact alert.
//!
//! Visibility is a pure function of the turn counter. On hidden turns the
//! Pursuer only gets a single proximity bit, never a position.

use crate::core::{MatchConfig, MatchSnapshot, MatchState, Position, PursuerView};

/// True if the Pursuer sees the Evader during `turn_number` (1-based).
///
/// ```
/// use shadow_pursuit::core::MatchConfig;
/// use shadow_pursuit::rules::visibility_for_turn;
///
/// let config = MatchConfig::default();
/// let cycle: Vec<_> = (1..=4).map(|t| visibility_for_turn(&config, t)).collect();
/// assert_eq!(cycle, vec![true, true, false, false]);
/// ```
#[must_use]
pub fn visibility_for_turn(config: &MatchConfig, turn_number: u32) -> bool {
    let position_in_cycle = turn_number.saturating_sub(1) % config.visibility_period.max(1);
    position_in_cycle < config.visible_turns
}

/// Degraded-sensor signal: hidden turn and the roles within Chebyshev 1.
#[must_use]
pub fn contact_alert(evader: Position, pursuer: Position, visible: bool) -> bool {
    !visible && evader.is_adjacent(pursuer)
}

/// The Pursuer's knowledge of the current state.
///
/// Built from resolved positions only.
#[must_use]
pub fn pursuer_view(config: &MatchConfig, state: &MatchState) -> PursuerView {
    let visible = visibility_for_turn(config, state.turn_number);
    PursuerView {
        pursuer_pos: state.pursuer_pos,
        visible_evader_pos: visible.then_some(state.evader_pos),
        last_observed_evader_pos: state.last_observed_evader_pos,
        contact_alert: contact_alert(state.evader_pos, state.pursuer_pos, visible),
        lock_streak: state.lock_streak,
        turn_number: state.turn_number,
    }
}

/// Render-oriented summary of `state`.
#[must_use]
pub fn snapshot(config: &MatchConfig, state: &MatchState) -> MatchSnapshot {
    let visible = visibility_for_turn(config, state.turn_number);
    MatchSnapshot {
        evader_pos: state.evader_pos,
        pursuer_pos: state.pursuer_pos,
        last_observed_evader_pos: state.last_observed_evader_pos,
        has_pending_evader_move: state.has_pending_evader_move(),
        turn_number: state.turn_number,
        lock_streak: state.lock_streak,
        phase: state.phase,
        winner: state.winner(),
        visible,
        contact_alert: contact_alert(state.evader_pos, state.pursuer_pos, visible),
    }
}
