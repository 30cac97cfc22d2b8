//! Track list management and the textual track-definition parser.
//!
//! A track is a row or column slot; its index in the list is its identity.
//! The grid's cell-assignment pass grows and shrinks the list to match the
//! number of cells it needs, appending tracks with the configured default
//! size and truncating from the end when shrinking.

use crate::error::LayoutError;

use super::length::TrackSize;

/// A single row or column slot.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Track {
    pub size: TrackSize,
}

impl Track {
    pub fn new(size: TrackSize) -> Self {
        Self { size }
    }
}

/// An ordered list of row or column tracks.
#[derive(Debug, Clone, Default)]
pub struct TrackList {
    tracks: Vec<Track>,
}

impl TrackList {
    pub fn new() -> Self {
        Self { tracks: Vec::new() }
    }

    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Track> {
        self.tracks.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Track> {
        self.tracks.iter()
    }

    /// Grow or shrink the list to exactly `count` tracks.
    ///
    /// New tracks are appended with `default` captured at append time;
    /// shrinking truncates from the end.
    pub fn ensure_count(&mut self, count: usize, default: TrackSize) {
        while self.tracks.len() < count {
            self.tracks.push(Track::new(default));
        }
        self.tracks.truncate(count);
    }

    /// Overwrite every track's size with `size`.
    ///
    /// If the list is empty, one track is created first so a uniform size
    /// configuration always leaves at least one track behind.
    pub fn set_all(&mut self, size: TrackSize) {
        if self.tracks.is_empty() {
            self.tracks.push(Track::default());
        }
        for track in &mut self.tracks {
            track.size = size;
        }
    }

    /// Set the size of the track at `index`.
    ///
    /// This is the engine's only fatal precondition: an out-of-range index
    /// is refused rather than silently extended.
    pub fn set_at(&mut self, index: usize, size: TrackSize) -> Result<(), LayoutError> {
        let count = self.tracks.len();
        match self.tracks.get_mut(index) {
            Some(track) => {
                track.size = size;
                Ok(())
            }
            None => Err(LayoutError::TrackIndexOutOfRange { index, count }),
        }
    }

    /// Reseed the list from a parsed definition sequence.
    pub fn replace(&mut self, sizes: impl IntoIterator<Item = TrackSize>) {
        self.tracks.clear();
        self.tracks.extend(sizes.into_iter().map(Track::new));
    }
}

/// Parse a comma-separated track definition string.
///
/// Each token is either a bare number (fixed length), a number followed by
/// `*` (proportional weight, defaulting to 1 when the number is missing or
/// malformed), or anything else (auto). Tokens are whitespace-tolerant.
/// Parsing never fails; unrecognized content degrades to `Auto`.
pub fn parse_track_list(text: &str) -> Vec<TrackSize> {
    text.split(',')
        .map(|token| {
            let token = token.trim();

            // ratio
            if token.contains('*') {
                let weight = token
                    .replace('*', "")
                    .trim()
                    .parse::<f32>()
                    .unwrap_or(1.0);
                return TrackSize::Star(weight);
            }

            // fixed length
            if let Ok(value) = token.parse::<f32>() {
                return TrackSize::Fixed(value);
            }

            // auto
            TrackSize::Auto
        })
        .collect()
}
