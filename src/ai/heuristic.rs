//! One-ply greedy scoring for both roles.
//!
//! Each legal lane gets an integer score from the resulting position; the
//! caller takes the maximum and breaks ties through a `TieBreak` source.
//! All weights come from `AiWeights`.

use smallvec::SmallVec;

use crate::core::{Lane, MatchConfig, Position, PursuerView, Role, TieBreak, LANE_COUNT};
use crate::rules::{apply_move, legal_lanes};

/// Legal lanes paired with their scores, ascending by lane.
pub type ScoredLanes = SmallVec<[(Lane, i32); LANE_COUNT as usize]>;

/// Evader scores: `distance × cheb(result, pursuer) − column × |result.x − centre|`.
#[must_use]
pub fn evader_scores(config: &MatchConfig, evader: Position, pursuer: Position) -> ScoredLanes {
    let w = &config.weights;
    legal_lanes(config, Role::Evader, evader.x)
        .into_iter()
        .map(|lane| {
            let to = apply_move(evader, lane);
            let score = w.distance * to.chebyshev(pursuer) - w.column * to.column_gap(config.center_column);
            (lane, score)
        })
        .collect()
}

/// Pursuer scores against the target the view allows it to know.
///
/// Base score is `−distance × cheb(target, result) − column × |result.x − target.x|`.
/// Ending in lock range adds `lock_bonus`, plus `win_bonus` when that lock
/// would complete the win streak. While hidden with a contact alert, every
/// lane also gets `contact_bonus` less `contact_drift_penalty` per cell moved.
#[must_use]
pub fn pursuer_scores(config: &MatchConfig, view: &PursuerView) -> ScoredLanes {
    let w = &config.weights;
    let target = view.target();
    let from = view.pursuer_pos;
    let searching = !view.is_visible() && view.contact_alert;

    legal_lanes(config, Role::Pursuer, from.x)
        .into_iter()
        .map(|lane| {
            let to = apply_move(from, lane);
            let distance = target.chebyshev(to);
            let mut score = -w.distance * distance - w.column * to.column_gap(target.x);
            if distance <= 1 {
                score += w.lock_bonus;
                if view.lock_streak + 1 >= config.win_streak {
                    score += w.win_bonus;
                }
            }
            if searching {
                score += w.contact_bonus - w.contact_drift_penalty * to.chebyshev(from);
            }
            (lane, score)
        })
        .collect()
}

/// Highest-scoring lane, ties broken by `tie`. Neutral lane if `scored` is empty.
pub fn pick_best(scored: &ScoredLanes, tie: &mut dyn TieBreak) -> Lane {
    let Some(best) = scored.iter().map(|&(_, score)| score).max() else {
        return Lane::NEUTRAL;
    };
    let tied: SmallVec<[Lane; LANE_COUNT as usize]> = scored
        .iter()
        .filter(|&&(_, score)| score == best)
        .map(|&(lane, _)| lane)
        .collect();

    let choice = tie.pick(tied.len());
    tied.get(choice).or_else(|| tied.first()).copied().unwrap_or(Lane::NEUTRAL)
}
