use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    CsvError(#[from] csv::Error),
    #[error("missing column: {0} is not present in the header row")]
    MissingColumn(&'static str),
    #[error("table has no header row")]
    EmptyTable,
    #[error("delimiter {0:?} is not a single-byte character")]
    InvalidDelimiter(char),
}
