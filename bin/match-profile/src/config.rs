use anyhow::Context;
use match_profile_records::TableFormat;
use serde::Deserialize;
use std::path::Path;
use std::str::FromStr;
use tokio::fs::read_to_string;

const DEFAULT_DATA_SOURCE: &str = "game_records.csv";

#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => anyhow::bail!("Unknown output format: {s}"),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Path or http(s) URL of the match record table
    pub data_source: String,
    pub table: TableFormat,
    pub output: OutputFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_source: DEFAULT_DATA_SOURCE.to_string(),
            table: TableFormat::default(),
            output: OutputFormat::default(),
        }
    }
}

impl Config {
    pub async fn load(path: Option<impl AsRef<Path>>) -> anyhow::Result<Self> {
        let mut config = match path {
            Some(path) => Self::load_file(path).await?,
            None => Default::default(),
        };
        config.apply_overrides(|key| std::env::var(key).ok())?;
        Ok(config)
    }

    async fn load_file(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let contents = read_to_string(path).await?;
        Ok(toml::from_str(&contents)?)
    }

    fn apply_overrides(&mut self, var: impl Fn(&str) -> Option<String>) -> anyhow::Result<()> {
        if let Some(data_source) = var("DATA_SOURCE") {
            self.data_source = data_source;
        }
        if let Some(delimiter) = var("TABLE_DELIMITER") {
            self.table.delimiter = single_char(&delimiter).context("TABLE_DELIMITER")?;
        }
        if let Some(win_sentinel) = var("WIN_SENTINEL") {
            self.table.win_sentinel = win_sentinel;
        }
        if let Some(output) = var("OUTPUT_FORMAT") {
            self.output = output.parse()?;
        }
        Ok(())
    }
}

fn single_char(value: &str) -> anyhow::Result<char> {
    let mut chars = value.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(c),
        _ => anyhow::bail!("Expected a single character, got {value:?}"),
    }
}
