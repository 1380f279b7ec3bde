//! AI-vs-AI batch tests.

use shadow_pursuit::ai::{PolicyKey, PolicyTable};
use shadow_pursuit::core::{Lane, MatchConfig, Position, Role};
use shadow_pursuit::rules::visibility_for_turn;
use shadow_pursuit::training::{MatchRecord, SelfPlayConfig, SelfPlayStats, SelfPlayWorker};

fn worker(games: usize, seed: u64) -> SelfPlayWorker {
    SelfPlayWorker::new(SelfPlayConfig::new().with_games(games).with_seed(seed)).unwrap()
}

#[test]
fn test_batches_replay_exactly() {
    let first = worker(12, 99).play_games();
    let second = worker(12, 99).play_games();

    assert_eq!(first.len(), 12);
    assert_eq!(first, second);
}

#[test]
fn test_each_match_gets_its_own_seed() {
    let records = worker(8, 3).play_games();
    let mut seeds: Vec<u64> = records.iter().map(|r| r.seed).collect();
    seeds.sort_unstable();
    seeds.dedup();
    assert_eq!(seeds.len(), 8);
}

#[test]
fn test_records_are_consistent_with_rules() {
    let config = MatchConfig::default();

    for record in worker(20, 17).play_games() {
        assert!(record.is_complete());
        assert!(!record.is_empty());

        for (i, turn) in record.turns.iter().enumerate() {
            assert_eq!(turn.turn as usize, i + 1);
            assert_eq!(turn.visible, visibility_for_turn(&config, turn.turn));
            if turn.visible {
                assert!(!turn.contact_alert);
            }
        }

        let last = record.turns.last().unwrap();
        match record.winner {
            Some(Role::Pursuer) => {
                assert_eq!(last.lock_streak, 2);
                assert!(last.separation() <= 1);
            }
            Some(Role::Evader) => {
                assert_eq!(record.len(), 20);
                assert!(last.lock_streak < 2);
            }
            None => unreachable!(),
        }
        assert!(record.longest_lock() <= 2);
    }
}

#[test]
fn test_stats_match_records() {
    let w = worker(25, 4);
    let records = w.play_games();
    let stats = w.run();

    assert_eq!(stats, SelfPlayStats::from_records(&records));
    assert_eq!(stats.games, 25);
    assert_eq!(stats.wins[Role::Evader] + stats.wins[Role::Pursuer], 25);

    let turns: usize = records.iter().map(MatchRecord::len).sum();
    assert_eq!(stats.total_turns, turns);
    assert!((stats.mean_length() - turns as f64 / 25.0).abs() < 1e-9);
}

#[test]
fn test_policy_steers_first_move() {
    let config = MatchConfig::default();
    let mut table = PolicyTable::new();
    table.insert(
        PolicyKey::new(config.evader_start, config.pursuer_start, 0, 1),
        Lane::new(0).unwrap(),
    );

    let steered = worker(1, 0).with_policy(table).play_game(0);
    let unsteered = worker(1, 0).play_game(0);

    assert_eq!(steered.turns[0].evader_lane, Lane::new(0).unwrap());
    assert_eq!(steered.turns[0].evader_pos, Position::new(5, 0));
    assert_eq!(unsteered.turns[0].evader_lane, Lane::new(4).unwrap());
}

#[test]
fn test_record_survives_binary_encoding() {
    let record = worker(1, 0).play_game(21);
    let bytes = record.to_bytes().unwrap();
    assert_eq!(MatchRecord::from_bytes(&bytes).unwrap(), record);
    assert!(MatchRecord::from_bytes(&bytes[..bytes.len() / 2]).is_err());
}
