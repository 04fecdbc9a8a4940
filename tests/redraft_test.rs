//! Integration tests for ranking and redraft comparison through the public API

use espn_fhl::{
    classify,
    draft::{calculate_replacement_levels, compare, rank, PickSelection, RosterSpots},
    DraftPick, EspnError, Player, PlayerId, Position, RankingStrategy, StrategyKind, TeamId,
};

fn player(id: u64, position: &str, points: f64) -> Player {
    Player::new(PlayerId::new(id), format!("Player {id}"), position, points)
}

/// Ten-team, one-round draft where every team picked exactly backwards:
/// pick N scored 10 * N points.
fn backwards_draft() -> Vec<DraftPick> {
    DraftPick::chronological((1..=10u16).map(|n| PickSelection {
        round_num: 1,
        pick_num: n,
        team_id: TeamId::new(u32::from(n)),
        team_name: format!("Team {n}"),
        player: player(u64::from(n), "Center", 10.0 * f64::from(n)),
    }))
}

fn ids(players: &[Player]) -> Vec<u64> {
    players.iter().map(|p| p.player_id.as_u64()).collect()
}

#[test]
fn test_position_adjusted_scenario() {
    let players = vec![
        player(1, "Center", 500.0),
        player(2, "Left Wing", 480.0),
        player(3, "Goalie", 600.0),
    ];

    let adjusted = RankingStrategy::from(StrategyKind::Adjusted);
    assert_eq!(ids(&rank(&players, &adjusted)), vec![1, 2, 3]);

    let total = RankingStrategy::from(StrategyKind::Total);
    assert_eq!(ids(&rank(&players, &total)), vec![3, 1, 2]);
}

#[test]
fn test_vor_ranks_across_positions() {
    let players = vec![
        player(1, "Goalie", 100.0),
        player(2, "Right Wing", 80.0),
        player(3, "Defense", 70.0),
    ];

    // Default replacement levels: F 46.1, D 45.0, G 72.6.
    let ranked = rank(&players, &RankingStrategy::default());
    assert_eq!(ids(&ranked), vec![2, 1, 3]);
}

#[test]
fn test_pick_difference_sign_convention() {
    let result = compare(&backwards_draft(), &RankingStrategy::TotalPoints, None).unwrap();

    let first = &result.comparisons[0];
    assert_eq!((first.actual_pick, first.redraft_pick), (1, 10));
    assert_eq!(first.pick_difference(), -9);

    let last = &result.comparisons[9];
    assert_eq!((last.actual_pick, last.redraft_pick), (10, 1));
    assert_eq!(last.pick_difference(), 9);
}

#[test]
fn test_steals_and_busts_top_five() {
    let result = compare(&backwards_draft(), &RankingStrategy::TotalPoints, None).unwrap();

    let busts: Vec<i64> = result.biggest_busts(5).iter().map(|c| c.pick_difference()).collect();
    assert_eq!(busts, vec![9, 7, 5, 3, 1]);

    let steals: Vec<i64> = result.biggest_steals(5).iter().map(|c| c.pick_difference()).collect();
    assert_eq!(steals, vec![-9, -7, -5, -3, -1]);
}

#[test]
fn test_round_filter_keeps_full_pool_ranking() {
    let picks: Vec<DraftPick> = DraftPick::chronological(
        backwards_draft()
            .into_iter()
            .zip(1u16..)
            .map(|(pick, n)| PickSelection {
                round_num: if n <= 5 { 1 } else { 2 },
                pick_num: pick.pick_num,
                team_id: pick.team_id,
                team_name: pick.team_name,
                player: pick.player,
            }),
    );

    for strategy in StrategyKind::ALL.map(RankingStrategy::from) {
        let all = compare(&picks, &strategy, None).unwrap();
        let first = compare(&picks, &strategy, Some(1)).unwrap();

        assert_eq!(first.comparisons.len(), 5);
        assert_eq!(first.ranked_players.len(), 10);
        for (short, full) in first.comparisons.iter().zip(&all.comparisons) {
            assert_eq!(short.player.player_id, full.player.player_id);
            assert_eq!(short.redraft_pick, full.redraft_pick);
        }
    }
}

#[test]
fn test_ideal_player_per_slot() {
    let result = compare(&backwards_draft(), &RankingStrategy::TotalPoints, Some(1)).unwrap();

    assert_eq!(result.ideal_at(0).map(|p| p.player_id.as_u64()), Some(10));
    assert_eq!(result.ideal_at(9).map(|p| p.player_id.as_u64()), Some(1));
    assert!(result.ideal_at(10).is_none());
}

#[test]
fn test_empty_draft() {
    let result = compare(&[], &RankingStrategy::default(), None).unwrap();
    assert!(result.comparisons.is_empty());
    assert!(result.ranked_players.is_empty());
    assert!(result.biggest_busts(5).is_empty());
}

#[test]
fn test_strategy_names_parse() {
    assert_eq!("vor".parse::<StrategyKind>().unwrap(), StrategyKind::Vor);
    assert_eq!("Total".parse::<StrategyKind>().unwrap(), StrategyKind::Total);
    assert_eq!("adjusted".parse::<StrategyKind>().unwrap(), StrategyKind::Adjusted);

    match "war".parse::<StrategyKind>() {
        Err(EspnError::UnknownStrategy { name }) => assert_eq!(name, "war"),
        other => panic!("expected unknown strategy error, got {other:?}"),
    }
}

#[test]
fn test_classification_is_total() {
    assert_eq!(classify("Goalie"), Position::Goalie);
    assert_eq!(classify("defense"), Position::Defense);
    assert_eq!(classify(""), Position::Forward);
    assert_eq!(classify("Left Wing"), Position::Forward);
    assert_eq!(classify("Zamboni Driver"), Position::Forward);
}

#[test]
fn test_computed_baselines_exact_starter_count() {
    let goalies: Vec<Player> = (1..=24u64)
        .map(|n| player(n, "Goalie", 200.0 - n as f64))
        .collect();

    let levels = calculate_replacement_levels(&goalies, &RosterSpots::default());

    // 12 teams x 2 goalies: the 24th goalie is the replacement level.
    assert_eq!(levels.goalie, 176.0);
    assert_eq!(levels.forward, 0.0);
    assert_eq!(levels.defense, 0.0);
}
