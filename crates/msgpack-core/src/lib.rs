//! Shared core of a MessagePack reader and writer.
//!
//! This crate holds the pieces both halves of a codec agree on:
//!
//! - [`Tag`]: a decoded or to-be-encoded object header, with a total order
//! - [`Error`] and [`ErrorLatch`]: sticky first-error-wins failure state
//! - [`endian`]: big-endian loads and stores for the wire's fixed-width fields
//! - [`utf8`]: string body validators
//! - [`Tracker`]: balance checking for nested arrays, maps, strings, blobs
//!   and extensions
//!
//! It performs no I/O. Buffering, header encoding and tree building belong
//! to the readers and writers built on top of it.
//!
//! # Example
//!
//! ```
//! use msgpack_core::{Config, Tag, Tracker, Type};
//!
//! let mut tracker = Tracker::writer(&Config::tracking());
//! let header = Tag::map(1);
//! tracker.push(header.tag_type(), header.count().unwrap_or(0) as u64).unwrap();
//! tracker.element().unwrap(); // key
//! tracker.element().unwrap(); // value
//! tracker.pop(Type::Map).unwrap();
//! assert!(tracker.close(false).is_ok());
//! ```

pub mod config;
pub mod endian;
pub mod error;
pub mod tag;
pub mod track;
pub mod types;
pub mod utf8;

pub use config::Config;
pub use error::{error_to_string, Error, ErrorLatch};
pub use tag::{tag_cmp, tag_equal, Tag};
pub use track::{Track, TrackElement, Tracker};
pub use types::{type_to_string, Type};
pub use utf8::{str_check_no_null, utf8_check, utf8_check_no_null};

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub const VERSION_MAJOR: u32 = parse_version_part(env!("CARGO_PKG_VERSION_MAJOR"));
pub const VERSION_MINOR: u32 = parse_version_part(env!("CARGO_PKG_VERSION_MINOR"));
pub const VERSION_PATCH: u32 = parse_version_part(env!("CARGO_PKG_VERSION_PATCH"));

/// Version as a single comparable number: `major * 10000 + minor * 100 + patch`.
pub const VERSION_NUMBER: u32 = VERSION_MAJOR * 10000 + VERSION_MINOR * 100 + VERSION_PATCH;

/// Whether this crate is at least version `major.minor.patch`.
///
/// ```
/// assert!(msgpack_core::version_at_least(0, 1, 0));
/// assert!(!msgpack_core::version_at_least(99, 0, 0));
/// ```
pub const fn version_at_least(major: u32, minor: u32, patch: u32) -> bool {
    VERSION_NUMBER >= major * 10000 + minor * 100 + patch
}

const fn parse_version_part(digits: &str) -> u32 {
    let bytes = digits.as_bytes();
    let mut value = 0;
    let mut i = 0;
    while i < bytes.len() {
        value = value * 10 + (bytes[i] - b'0') as u32;
        i += 1;
    }
    value
}

/// Library name and version, suffixed `-debug` in debug builds.
pub const LIBRARY_STRING: &str = if cfg!(debug_assertions) {
    concat!("msgpack-core ", env!("CARGO_PKG_VERSION"), "-debug")
} else {
    concat!("msgpack-core ", env!("CARGO_PKG_VERSION"))
};
