use csv::{ReaderBuilder, StringRecord, Trim};
use std::collections::{BTreeMap, HashSet};
use tracing::debug;

pub use error::Error;
pub use model::{MatchRecord, TableFormat, DEFAULT_WIN_SENTINEL};

pub mod error;
pub mod model;

pub const PLAYER_ID_COLUMN: &str = "player_id";
pub const MATCH_DATE_COLUMN: &str = "match_date";
pub const SCORE_COLUMN: &str = "score";
pub const RESULT_TYPE_COLUMN: &str = "result_type";

/// Every player id that appeared in a structurally valid row. This is the only
/// source used to decide whether an id may log in.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct KnownIds(HashSet<String>);

impl KnownIds {
    pub fn contains(&self, player_id: &str) -> bool {
        self.0.contains(player_id)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    fn insert(&mut self, player_id: String) {
        self.0.insert(player_id);
    }
}

/// Output of a single load cycle.
#[derive(Debug, Default)]
pub struct Ingested {
    pub records: Vec<MatchRecord>,
    pub known_ids: KnownIds,
    /// Rows dropped because of a column count mismatch or an unparsable score.
    pub skipped_rows: usize,
}

/// Header positions of the columns the statistics depend on.
#[derive(Debug)]
struct Columns {
    player_id: usize,
    match_date: usize,
    score: usize,
    result_type: usize,
}

impl Columns {
    fn locate(headers: &StringRecord) -> Result<Self, Error> {
        let find = |name: &'static str| {
            // A repeated header name resolves to its last occurrence
            headers
                .iter()
                .enumerate()
                .filter(|(_, header)| *header == name)
                .map(|(index, _)| index)
                .last()
                .ok_or(Error::MissingColumn(name))
        };
        Ok(Self {
            player_id: find(PLAYER_ID_COLUMN)?,
            match_date: find(MATCH_DATE_COLUMN)?,
            score: find(SCORE_COLUMN)?,
            result_type: find(RESULT_TYPE_COLUMN)?,
        })
    }

    fn is_consumed(header: &str) -> bool {
        [
            PLAYER_ID_COLUMN,
            MATCH_DATE_COLUMN,
            SCORE_COLUMN,
            RESULT_TYPE_COLUMN,
        ]
        .contains(&header)
    }
}

/// Read the base-10 integer at the start of `value`, ignoring whatever follows
/// it, so `"300.0"` is 300 and `"120分"` is 120. `None` when there are no
/// leading digits or the integer does not fit in an `i64`.
pub fn parse_leading_integer(value: &str) -> Option<i64> {
    let unsigned = value.strip_prefix(['+', '-']).unwrap_or(value);
    let sign_len = value.len() - unsigned.len();
    let digits_len = unsigned
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(unsigned.len());
    if digits_len == 0 {
        return None;
    }
    value[..sign_len + digits_len].parse().ok()
}

/// Parse the raw table into typed records and collect the known player ids.
///
/// Rows whose value count differs from the header count are skipped. Rows with
/// a score that does not start with a base-10 integer are skipped as well, but
/// their player id still counts as known since the row itself was well formed.
pub fn ingest(raw: &str, format: &TableFormat) -> Result<Ingested, Error> {
    let mut reader = ReaderBuilder::new()
        .delimiter(format.delimiter_byte()?)
        .quoting(false)
        .flexible(true)
        .trim(Trim::All)
        .has_headers(true)
        .from_reader(raw.as_bytes());

    let headers = reader.headers()?.clone();
    if headers.iter().all(str::is_empty) {
        return Err(Error::EmptyTable);
    }
    let columns = Columns::locate(&headers)?;

    let mut ingested = Ingested::default();
    for row in reader.records() {
        let row = row?;
        let line = row.position().map(csv::Position::line);

        // Whitespace-only lines
        if row.len() == 1 && row[0].is_empty() {
            continue;
        }

        if row.len() != headers.len() {
            debug!(
                "Skipping line {line:?}: expected {} values, found {}",
                headers.len(),
                row.len()
            );
            ingested.skipped_rows += 1;
            continue;
        }

        let player_id = row[columns.player_id].to_string();
        ingested.known_ids.insert(player_id.clone());

        let Some(score) = parse_leading_integer(&row[columns.score]) else {
            debug!(
                "Skipping line {line:?}: score {:?} does not start with an integer",
                &row[columns.score]
            );
            ingested.skipped_rows += 1;
            continue;
        };

        let extra = headers
            .iter()
            .zip(row.iter())
            .filter(|(header, _)| !Columns::is_consumed(header))
            .map(|(header, value)| (header.to_string(), value.to_string()))
            .collect::<BTreeMap<_, _>>();

        ingested.records.push(MatchRecord {
            player_id,
            match_date: row[columns.match_date].to_string(),
            score,
            is_win: row[columns.result_type] == format.win_sentinel,
            extra,
        });
    }

    Ok(ingested)
}
