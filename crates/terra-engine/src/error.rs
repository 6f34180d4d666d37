use thiserror::Error;

/// Errors raised while building maps or loading tile configuration.
///
/// Only construction and load-time failures live here. Runtime absence
/// (an empty cell, a tile without a matching formula, an unmatched
/// transition) is expressed with `Option`, never with an error.
#[derive(Debug, Error)]
pub enum TileError {
    /// A tile was placed outside the grid dimensions.
    #[error("tile ({col}, {row}) is outside of the {width}x{height} grid")]
    OutOfRange {
        col: i32,
        row: i32,
        width: u32,
        height: u32,
    },

    /// A tile whose position or size does not match the cell it is stored in.
    #[error("tile at ({x}, {y}) sized {width}x{height} does not fit cell ({col}, {row})")]
    Misplaced {
        col: i32,
        row: i32,
        x: i32,
        y: i32,
        width: u32,
        height: u32,
    },

    #[error("unknown collision formula '{0}'")]
    FormulaNotFound(String),

    #[error("unknown collision group '{0}'")]
    GroupNotFound(String),

    #[error("unknown collision category '{0}'")]
    CategoryNotFound(String),

    /// A formula range with `min > max` on one of its axes.
    #[error("formula '{formula}' has an invalid range: {reason}")]
    InvalidRange { formula: String, reason: String },

    #[error("{kind} '{name}' is defined more than once")]
    DuplicateName { kind: &'static str, name: String },

    /// The caller raised the cancel flag of an offline extraction.
    #[error("extraction cancelled")]
    Cancelled,

    #[error("invalid configuration: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, TileError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn out_of_range_message_names_the_cell() {
        let err = TileError::OutOfRange {
            col: 12,
            row: -1,
            width: 10,
            height: 8,
        };
        assert_eq!(err.to_string(), "tile (12, -1) is outside of the 10x8 grid");
    }

    #[test]
    fn json_errors_convert() {
        let parse: std::result::Result<u32, _> = serde_json::from_str("nope");
        let err: TileError = parse.unwrap_err().into();
        assert!(matches!(err, TileError::Json(_)));
    }
}
