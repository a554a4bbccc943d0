//! Error types.
//!
//! Only failures a caller can act on are errors. Empty selections and
//! removals of unknown ids are silent no-ops and never show up here.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use super::player::PlayerToken;

/// A player token that is neither `p1` nor `p2`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown player token {raw:?} (expected \"p1\" or \"p2\")")]
pub struct ParsePlayerError {
    pub raw: String,
}

/// Failure while exporting a position.
#[derive(Debug, Error)]
pub enum SnapshotError {
    /// A life total field does not hold an integer.
    #[error("life total for {player} is not an integer: {raw:?}")]
    InvalidLife { player: PlayerToken, raw: String },

    #[error("failed to serialize snapshot: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Failure while fetching or decoding a card catalog source.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The remote source answered with a non-success status.
    #[error("HTTP {status} from {url}")]
    Status { url: String, status: u16 },

    #[cfg(feature = "http")]
    #[error("request to {url} failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// A URL was given but the crate was built without the `http` feature.
    #[error("cannot fetch {location}: built without the `http` feature")]
    Unsupported { location: String },

    #[error("invalid catalog JSON from {origin}: {source}")]
    Parse {
        origin: String,
        #[source]
        source: serde_json::Error,
    },
}
