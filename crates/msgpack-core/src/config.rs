//! Per-instance configuration for readers, writers and trees.

use serde::{Deserialize, Serialize};

/// Frames reserved by a tracker on its first push.
pub const DEFAULT_TRACK_CAPACITY: usize = 8;

/// Behaviour switches an owning stream or tree is constructed with.
///
/// Every field has a default, so a partial document deserializes cleanly:
///
/// ```
/// use msgpack_core::Config;
///
/// let config: Config = serde_json::from_str(r#"{"read_tracking": true}"#).unwrap();
/// assert!(config.read_tracking);
/// assert_eq!(config.initial_track_capacity, 8);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Panic when an [`Error::ApiMisuse`](crate::Error::ApiMisuse) is latched.
    pub assert_on_misuse: bool,
    /// Track compound values opened by a reader.
    pub read_tracking: bool,
    /// Track compound values opened by a writer.
    pub write_tracking: bool,
    /// Number of frames reserved when the tracker first grows.
    pub initial_track_capacity: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            assert_on_misuse: cfg!(debug_assertions),
            read_tracking: cfg!(debug_assertions),
            write_tracking: cfg!(debug_assertions),
            initial_track_capacity: DEFAULT_TRACK_CAPACITY,
        }
    }
}

impl Config {
    /// Tracking enabled in both directions, misuse latched without panicking.
    ///
    /// This is the release-build behaviour with tracking forced on.
    pub fn tracking() -> Self {
        Self {
            assert_on_misuse: false,
            read_tracking: true,
            write_tracking: true,
            initial_track_capacity: DEFAULT_TRACK_CAPACITY,
        }
    }

    /// Whether the given direction is tracked.
    #[inline]
    pub fn tracks(&self, read: bool) -> bool {
        if read {
            self.read_tracking
        } else {
            self.write_tracking
        }
    }
}
