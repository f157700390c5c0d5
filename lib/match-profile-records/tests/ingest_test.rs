use match_profile_records::{ingest, parse_leading_integer, Error, TableFormat};

const TABLE: &str = "player_id,match_date,score,result_type
P1,2024-01-01,100,胜利
P1,2024-01-02,300,失败
P2,2024-01-01,500,胜利
";

#[test]
fn test_ingest_typed_records() {
    let ingested = ingest(TABLE, &TableFormat::default()).unwrap();

    assert_eq!(ingested.records.len(), 3);
    assert_eq!(ingested.skipped_rows, 0);

    let first = &ingested.records[0];
    assert_eq!(first.player_id, "P1");
    assert_eq!(first.match_date, "2024-01-01");
    assert_eq!(first.score, 100);
    assert!(first.is_win);
    assert!(!ingested.records[1].is_win);

    assert_eq!(ingested.known_ids.len(), 2);
    assert!(ingested.known_ids.contains("P1"));
    assert!(ingested.known_ids.contains("P2"));
    assert!(!ingested.known_ids.contains("P3"));
}

#[test]
fn test_short_row_is_dropped() {
    let table = "player_id,match_date,score,result_type
P1,2024-01-01,100,胜利
P9,2024-01-02,300
";
    let ingested = ingest(table, &TableFormat::default()).unwrap();

    assert_eq!(ingested.records.len(), 1);
    assert_eq!(ingested.skipped_rows, 1);
    assert!(!ingested.known_ids.contains("P9"));
}

#[test]
fn test_whitespace_and_blank_lines() {
    let table = " player_id , match_date ,score, result_type \r
  P1 , 2024-01-01 , 42 , 胜利 \r
\r
   \r
P2,2024-01-01,7,失败\r
";
    let ingested = ingest(table, &TableFormat::default()).unwrap();

    assert_eq!(ingested.records.len(), 2);
    assert_eq!(ingested.skipped_rows, 0);
    assert_eq!(ingested.records[0].player_id, "P1");
    assert_eq!(ingested.records[0].score, 42);
    assert!(ingested.records[0].is_win);
}

#[test]
fn test_unparsable_score_keeps_known_id() {
    let table = "player_id,match_date,score,result_type
P1,2024-01-01,lots,胜利
P2,2024-01-01,12,胜利
";
    let ingested = ingest(table, &TableFormat::default()).unwrap();

    assert_eq!(ingested.records.len(), 1);
    assert_eq!(ingested.records[0].player_id, "P2");
    assert_eq!(ingested.skipped_rows, 1);
    assert!(ingested.known_ids.contains("P1"));
}

#[test]
fn test_extra_columns_are_passed_through() {
    let table = "match_date;team;player_id;result_type;score
2024-01-01;red;P1;win;10
";
    let format = TableFormat {
        delimiter: ';',
        win_sentinel: "win".to_string(),
    };
    let ingested = ingest(table, &format).unwrap();

    let record = &ingested.records[0];
    assert_eq!(record.player_id, "P1");
    assert_eq!(record.score, 10);
    assert!(record.is_win);
    assert_eq!(record.extra.len(), 1);
    assert_eq!(record.extra.get("team").map(String::as_str), Some("red"));
}

#[test]
fn test_missing_column_fails() {
    let table = "player_id,match_date,result_type\nP1,2024-01-01,胜利\n";
    let err = ingest(table, &TableFormat::default()).unwrap_err();
    assert!(matches!(err, Error::MissingColumn("score")));
}

#[test]
fn test_empty_table_fails() {
    let err = ingest("", &TableFormat::default()).unwrap_err();
    assert!(matches!(err, Error::EmptyTable));
}

#[test]
fn test_multibyte_delimiter_is_rejected() {
    let format = TableFormat {
        delimiter: '，',
        ..TableFormat::default()
    };
    let err = ingest(TABLE, &format).unwrap_err();
    assert!(matches!(err, Error::InvalidDelimiter('，')));
}

#[test]
fn test_score_keeps_leading_integer() {
    let table = "player_id,match_date,score,result_type
P1,2024-01-01,300.0,胜利
P1,2024-01-02,120分,失败
P2,2024-01-01,-45x,失败
P3,2024-01-01,+7,胜利
";
    let ingested = ingest(table, &TableFormat::default()).unwrap();

    let scores = ingested
        .records
        .iter()
        .map(|record| (record.player_id.as_str(), record.score))
        .collect::<Vec<_>>();
    assert_eq!(scores, [("P1", 300), ("P1", 120), ("P2", -45), ("P3", 7)]);
    assert_eq!(ingested.skipped_rows, 0);
}

#[test]
fn test_parse_leading_integer() {
    assert_eq!(parse_leading_integer("42"), Some(42));
    assert_eq!(parse_leading_integer("300.0"), Some(300));
    assert_eq!(parse_leading_integer("-12abc"), Some(-12));
    assert_eq!(parse_leading_integer("abc"), None);
    assert_eq!(parse_leading_integer("-"), None);
    assert_eq!(parse_leading_integer(".5"), None);
    assert_eq!(parse_leading_integer(""), None);
    assert_eq!(parse_leading_integer("99999999999999999999"), None);
}

#[test]
fn test_duplicate_header_uses_last_column() {
    let table = "player_id,score,match_date,score,result_type
P1,1,2024-01-01,900,胜利
";
    let ingested = ingest(table, &TableFormat::default()).unwrap();

    let record = &ingested.records[0];
    assert_eq!(record.score, 900);
    assert!(record.extra.is_empty());
}
