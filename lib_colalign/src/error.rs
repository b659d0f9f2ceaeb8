use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("An IO error occurred: {0}.")]
    Io(#[from] std::io::Error),

    #[error("A parsing error of kind '{kind:?}' occurred when the remaining input was '{input}'.")]
    Parser {
        input: String,
        kind: nom::error::ErrorKind,
    },

    #[error("Parsing was unsuccessful due to incomplete input: {0:?}.")]
    ParserIncomplete(nom::Needed),

    #[error("The letter '{letter}' at position {position} is not part of the alphabet {alphabet}.")]
    InvalidLetter {
        letter: char,
        position: usize,
        alphabet: String,
    },

    #[error("The alignment has {labels} row labels, but its columns have {rows} rows.")]
    RowLabelMismatch { labels: usize, rows: usize },

    #[error("Column {column} has {length} letters, but the alignment has {count} rows.")]
    ColumnLengthMismatch {
        column: usize,
        length: usize,
        count: usize,
    },

    #[error("Got {sequences} sequences, but the alignment has {count} rows.")]
    RowCountMismatch { sequences: usize, count: usize },

    #[error("The range {start}..{end} is not within the alignment bounds {lower}..{upper}.")]
    OutOfRange {
        start: isize,
        end: isize,
        lower: isize,
        upper: isize,
    },

    #[error(
        "Feature {feature} with range {start}..{end} is not within the alignment bounds {lower}..{upper}."
    )]
    FeatureOutOfRange {
        feature: usize,
        start: isize,
        end: isize,
        lower: isize,
        upper: isize,
    },

    #[error("Row {row} does not exist in an alignment with {count} rows.")]
    RowOutOfRange { row: usize, count: usize },

    #[error(
        "Joining {length} columns to the alignment at offset {offset} leaves the coordinate space."
    )]
    CoordinateOverflow { offset: isize, length: usize },

    #[error("Cannot join circular sequence: receiver.")]
    CircularReceiver,

    #[error("Cannot join circular sequence: argument.")]
    CircularArgument,
}
