use crate::error::Error;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Result label that marks a match as won in the default table layout.
pub const DEFAULT_WIN_SENTINEL: &str = "胜利";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchRecord {
    pub player_id: String,
    pub match_date: String,
    pub score: i64,
    pub is_win: bool,
    /// Columns that are not consumed by the statistics, keyed by header name.
    pub extra: BTreeMap<String, String>,
}

/// Layout of the source table. Both values come from configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TableFormat {
    pub delimiter: char,
    pub win_sentinel: String,
}

impl Default for TableFormat {
    fn default() -> Self {
        Self {
            delimiter: ',',
            win_sentinel: DEFAULT_WIN_SENTINEL.to_string(),
        }
    }
}

impl TableFormat {
    pub(crate) fn delimiter_byte(&self) -> Result<u8, Error> {
        u8::try_from(self.delimiter)
            .ok()
            .filter(u8::is_ascii)
            .ok_or(Error::InvalidDelimiter(self.delimiter))
    }
}
