use std::fmt;

// ---------------------------------------------------------------------------
// Feature – one line of the BED file
// ---------------------------------------------------------------------------

/// A single genomic interval (e.g. an exon) read from one BED line.
///
/// Positions are signed: an `end` before `start` is carried through as a
/// negative length rather than rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Feature {
    /// Display label (4th BED column).
    pub name: String,
    /// Start position (2nd BED column).
    pub start: i64,
    /// End position (3rd BED column).
    pub end: i64,
}

impl Feature {
    /// `end - start`. The loader rejects lines where this would overflow.
    pub fn length(&self) -> i64 {
        self.end - self.start
    }
}

impl fmt::Display for Feature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [{}, {})", self.name, self.start, self.end)
    }
}

// ---------------------------------------------------------------------------
// FeatureTrack – the complete loaded file
// ---------------------------------------------------------------------------

/// All features of one file, held as three index-aligned sequences.
///
/// The i-th name, length and start always describe the same input line.
/// The fields are private so the only way in is [`FeatureTrack::push`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FeatureTrack {
    names: Vec<String>,
    lengths: Vec<i64>,
    starts: Vec<i64>,
}

impl FeatureTrack {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a track from features, keeping their order.
    pub fn from_features(features: impl IntoIterator<Item = Feature>) -> Self {
        let mut track = Self::new();
        for feature in features {
            track.push(feature);
        }
        track
    }

    /// Append one feature to all three sequences.
    pub fn push(&mut self, feature: Feature) {
        self.lengths.push(feature.length());
        self.starts.push(feature.start);
        self.names.push(feature.name);
    }

    /// Number of features.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Whether the track is empty.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn lengths(&self) -> &[i64] {
        &self.lengths
    }

    pub fn starts(&self) -> &[i64] {
        &self.starts
    }

    /// Iterate `(index, name, start, length)` in input order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &str, i64, i64)> + '_ {
        self.names
            .iter()
            .zip(self.starts.iter().zip(self.lengths.iter()))
            .enumerate()
            .map(|(i, (name, (&start, &length)))| (i, name.as_str(), start, length))
    }

    /// Leftmost and rightmost coordinate covered by any bar.
    ///
    /// Negative-length features extend to the left of their start, so both
    /// ends of every bar are considered.
    pub fn span(&self) -> Option<(i64, i64)> {
        self.iter()
            .flat_map(|(_, _, start, length)| [start, start + length])
            .fold(None, |acc, pos| match acc {
                None => Some((pos, pos)),
                Some((lo, hi)) => Some((lo.min(pos), hi.max(pos))),
            })
    }
}
