use thiserror::Error;

/// Errors surfaced by the layout engine.
///
/// Layout itself never fails: malformed track text falls back to defaults
/// and out-of-range cell placements are clamped. The only refusal is an
/// indexed track mutation past the end of the list.
#[derive(Debug, Error, PartialEq)]
pub enum LayoutError {
    #[error("track index {index} out of range (track count {count})")]
    TrackIndexOutOfRange { index: usize, count: usize },
}
