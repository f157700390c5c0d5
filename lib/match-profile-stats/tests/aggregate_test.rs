use match_profile_records::{ingest, MatchRecord, TableFormat};
use match_profile_stats::{aggregate, total_matches};
use std::collections::BTreeMap;

const TABLE: &str = "player_id,match_date,score,result_type
P1,2024-01-01,100,胜利
P1,2024-01-02,300,失败
P2,2024-01-01,500,胜利
";

fn record(player_id: &str, match_date: &str, score: i64, is_win: bool) -> MatchRecord {
    MatchRecord {
        player_id: player_id.to_string(),
        match_date: match_date.to_string(),
        score,
        is_win,
        extra: BTreeMap::new(),
    }
}

#[test]
fn test_end_to_end_example() {
    let ingested = ingest(TABLE, &TableFormat::default()).unwrap();
    assert_eq!(total_matches(&ingested.records), 2);

    let stats = aggregate(&ingested.records);
    assert_eq!(stats.len(), 2);

    let p1 = &stats["P1"];
    assert_eq!(p1.total_games, 2);
    assert_eq!(p1.wins, 1);
    assert_eq!(p1.win_rate, 50.0);
    assert_eq!(p1.avg_score, 200);
    assert_eq!(p1.max_score, 300);
    assert_eq!(p1.score_std_dev, 100.0);
    assert_eq!(p1.attendance_rate, 100.0);
    assert_eq!(p1.total_score, 400);

    let p2 = &stats["P2"];
    assert_eq!(p2.total_games, 1);
    assert_eq!(p2.wins, 1);
    assert_eq!(p2.win_rate, 100.0);
    assert_eq!(p2.avg_score, 500);
    assert_eq!(p2.max_score, 500);
    assert_eq!(p2.score_std_dev, 0.0);
    assert_eq!(p2.attendance_rate, 50.0);
}

#[test]
fn test_identical_scores_have_no_dispersion() {
    let records = (1..=6)
        .map(|day| record("P1", &format!("2024-01-0{day}"), 750, day % 2 == 0))
        .collect::<Vec<_>>();
    let stats = aggregate(&records);

    let p1 = &stats["P1"];
    assert_eq!(p1.score_std_dev, 0.0);
    assert_eq!(p1.max_score, 750);
    assert_eq!(p1.avg_score, 750);
    assert_eq!(p1.wins, 3);
}

#[test]
fn test_aggregate_is_idempotent_and_order_independent() {
    let mut records = vec![
        record("A", "d1", 120, true),
        record("B", "d1", 80, false),
        record("A", "d2", 40, false),
        record("C", "d3", 999, true),
        record("B", "d3", 15, true),
    ];
    let first = aggregate(&records);
    assert_eq!(first, aggregate(&records));

    records.reverse();
    assert_eq!(first, aggregate(&records));
}

#[test]
fn test_rates_are_bounded() {
    let records = vec![
        record("A", "d1", 10, true),
        record("A", "d1", 20, true),
        record("A", "d2", 30, false),
        record("B", "d3", 40, false),
        record("C", "d1", -5, false),
    ];
    let stats = aggregate(&records);

    let wins = stats.values().map(|s| s.wins).sum::<usize>();
    let games = stats.values().map(|s| s.total_games).sum::<usize>();
    assert!(wins <= games);
    assert_eq!(games, records.len());

    for s in stats.values() {
        assert!((0.0..=100.0).contains(&s.win_rate));
        assert!((0.0..=100.0).contains(&s.attendance_rate));
    }

    // Two records on the same date count as one attended match
    assert_eq!(stats["A"].attendance_rate, 66.7);
    assert_eq!(stats["B"].attendance_rate, 33.3);
    assert_eq!(stats["A"].win_rate, 66.7);
}

#[test]
fn test_full_attendance() {
    let records = vec![
        record("A", "d1", 1, false),
        record("A", "d2", 1, false),
        record("B", "d2", 1, false),
    ];
    let stats = aggregate(&records);
    assert_eq!(stats["A"].attendance_rate, 100.0);
    assert_eq!(stats["B"].attendance_rate, 50.0);
}

#[test]
fn test_empty_records() {
    assert!(aggregate(&[]).is_empty());
    assert_eq!(total_matches(&[]), 0);
}

#[test]
fn test_score_sum_near_i64_limit() {
    let table = "player_id,match_date,score,result_type
P1,d1,9223372036854775807,胜利
P1,d2,1,失败
";
    let ingested = ingest(table, &TableFormat::default()).unwrap();
    let stats = aggregate(&ingested.records);

    let p1 = &stats["P1"];
    assert_eq!(p1.total_games, 2);
    assert_eq!(p1.total_score, i64::MAX);
    assert_eq!(p1.max_score, i64::MAX);
    assert_eq!(p1.win_rate, 50.0);
}
