use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::num::ParseIntError;
use std::path::{Path, PathBuf};

use log::{debug, info, warn};
use thiserror::Error;

use super::model::{Feature, FeatureTrack};

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Why a BED file could not be turned into a [`FeatureTrack`].
///
/// Line numbers are 1-based.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("cannot open {}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("error reading line {line}")]
    Read {
        line: usize,
        #[source]
        source: io::Error,
    },

    #[error("line {line}: missing {field} column")]
    MissingField { line: usize, field: &'static str },

    #[error("line {line}: {field} position '{value}' is not an integer")]
    InvalidPosition {
        line: usize,
        field: &'static str,
        value: String,
        #[source]
        source: ParseIntError,
    },

    #[error("line {line}: feature length does not fit in a 64-bit integer")]
    PositionOverflow { line: usize },
}

impl LoadError {
    /// True for errors caused by the file contents rather than by access to it.
    pub fn is_malformed(&self) -> bool {
        match self {
            LoadError::MissingField { .. }
            | LoadError::InvalidPosition { .. }
            | LoadError::PositionOverflow { .. } => true,
            LoadError::Read { source, .. } => source.kind() == io::ErrorKind::InvalidData,
            LoadError::Open { .. } => false,
        }
    }
}

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load every feature of a BED file, in file order.
///
/// The file handle is dropped before this returns. Loading stops at the first
/// malformed line.
pub fn load_bed(path: &Path) -> Result<FeatureTrack, LoadError> {
    let track = {
        let file = File::open(path).map_err(|source| LoadError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        read_features(BufReader::new(file))?
    };

    info!("Loaded {} features from {}", track.len(), path.display());
    Ok(track)
}

/// Parse BED lines from any buffered reader.
pub fn read_features<R: BufRead>(reader: R) -> Result<FeatureTrack, LoadError> {
    let mut track = FeatureTrack::new();

    for (idx, line) in reader.lines().enumerate() {
        let line_no = idx + 1;
        let line = line.map_err(|source| LoadError::Read {
            line: line_no,
            source,
        })?;

        let feature = parse_line(line_no, &line)?;
        debug!("line {line_no}: {feature}");
        if feature.length() < 0 {
            warn!(
                "line {line_no}: feature '{}' ends before it starts ({} < {})",
                feature.name, feature.end, feature.start
            );
        }
        track.push(feature);
    }

    Ok(track)
}

// ---------------------------------------------------------------------------
// Line parser
// ---------------------------------------------------------------------------

/// Parse one BED line: `chrom start end name [ignored...]`.
///
/// Columns are separated by any run of whitespace.
pub fn parse_line(line_no: usize, line: &str) -> Result<Feature, LoadError> {
    let mut fields = line.split_whitespace();
    let mut next = |field: &'static str| {
        fields.next().ok_or(LoadError::MissingField {
            line: line_no,
            field,
        })
    };

    let _chrom = next("chrom")?;
    let start = next("start")?;
    let end = next("end")?;
    let name = next("name")?;

    let start = parse_position(line_no, "start", start)?;
    let end = parse_position(line_no, "end", end)?;
    if end.checked_sub(start).is_none() {
        return Err(LoadError::PositionOverflow { line: line_no });
    }

    Ok(Feature {
        name: name.to_string(),
        start,
        end,
    })
}

fn parse_position(line_no: usize, field: &'static str, value: &str) -> Result<i64, LoadError> {
    value
        .parse::<i64>()
        .map_err(|source| LoadError::InvalidPosition {
            line: line_no,
            field,
            value: value.to_string(),
            source,
        })
}
