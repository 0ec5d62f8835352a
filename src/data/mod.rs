/// Data layer: core types and BED loading.
///
/// Architecture:
/// ```text
///    .bed
///      │
///      ▼
///   ┌──────────┐
///   │  loader   │  parse lines → Feature
///   └──────────┘
///      │
///      ▼
///   ┌──────────────┐
///   │ FeatureTrack  │  names / lengths / starts, index-aligned
///   └──────────────┘
/// ```

pub mod loader;
pub mod model;
