//! Error states and the sticky error latch.
//!
//! A reader, writer or tree owns one [`ErrorLatch`]. The first failure it
//! records is kept for the rest of the object's lifetime and every later
//! guarded operation returns a neutral value without doing any work.

use thiserror::Error;
use tracing::{debug, warn};

use crate::Config;

/// Terminal failure classes of a stream or tree.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Error {
    /// The underlying source or sink failed to fill or flush.
    #[error("i/o failure while filling or flushing")]
    Io,
    /// The data read is not valid MessagePack.
    #[error("data is not valid MessagePack")]
    InvalidEncoding,
    /// The type or value range did not match what the caller expected.
    #[error("type or value range mismatch")]
    TypeMismatch,
    /// A read or write exceeded the maximum size allowed for the operation.
    #[error("size limit exceeded")]
    SizeExceeded,
    /// An allocation failed.
    #[error("allocation failure")]
    AllocationFailure,
    /// The API was used incorrectly. Asserts when configured to.
    #[error("api misuse")]
    ApiMisuse,
    /// The contained data is not valid.
    #[error("contained data is invalid")]
    DataInvalid,
}

impl Error {
    /// Short debug name of the error.
    pub fn name(self) -> &'static str {
        match self {
            Error::Io => "io",
            Error::InvalidEncoding => "invalid",
            Error::TypeMismatch => "type",
            Error::SizeExceeded => "too_big",
            Error::AllocationFailure => "memory",
            Error::ApiMisuse => "bug",
            Error::DataInvalid => "data",
        }
    }

    /// Whether this error marks a caller contract violation rather than bad input.
    #[inline]
    pub fn is_contract(self) -> bool {
        self == Error::ApiMisuse
    }
}

/// Debug name of a latch state; `None` is the "no error" state.
pub fn error_to_string(error: Option<Error>) -> &'static str {
    error.map_or("ok", Error::name)
}

/// Sticky first-error-wins status field.
#[derive(Debug, Clone)]
pub struct ErrorLatch {
    error: Option<Error>,
    assert_on_misuse: bool,
}

impl Default for ErrorLatch {
    fn default() -> Self {
        Self::new()
    }
}

impl ErrorLatch {
    pub fn new() -> Self {
        Self::with_config(&Config::default())
    }

    pub fn with_config(config: &Config) -> Self {
        Self {
            error: None,
            assert_on_misuse: config.assert_on_misuse,
        }
    }

    /// The latched error, if any.
    #[inline]
    pub fn error(&self) -> Option<Error> {
        self.error
    }

    #[inline]
    pub fn is_ok(&self) -> bool {
        self.error.is_none()
    }

    /// Records `error` unless an earlier error is already latched.
    ///
    /// # Panics
    ///
    /// Panics on [`Error::ApiMisuse`] when the latch was configured with
    /// `assert_on_misuse`.
    pub fn flag(&mut self, error: Error) {
        self.latch(error, error.is_contract());
    }

    /// Records an error raised by compound tracking.
    ///
    /// Tracking failures are contract violations of the owning reader or
    /// writer, so both [`Error::ApiMisuse`] and [`Error::SizeExceeded`] assert
    /// under `assert_on_misuse`. Allocation failures never assert.
    pub fn flag_violation(&mut self, error: Error) {
        self.latch(error, error != Error::AllocationFailure);
    }

    fn latch(&mut self, error: Error, violation: bool) {
        if self.error.is_some() {
            return;
        }
        if violation {
            warn!(target: "msgpack_core::error", error = error.name(), "api misuse latched");
        } else {
            debug!(target: "msgpack_core::error", error = error.name(), "error latched");
        }
        self.error = Some(error);
        if violation && self.assert_on_misuse {
            panic!("msgpack api misuse: {}", error.name());
        }
    }

    /// Latches the error of a failed result and returns its value or the default.
    pub fn check<T: Default>(&mut self, result: Result<T, Error>) -> T {
        match result {
            Ok(value) => value,
            Err(error) => {
                self.flag(error);
                T::default()
            }
        }
    }

    /// Runs `op` only while no error is latched.
    ///
    /// Returns `T::default()` without calling `op` once the latch is set, and
    /// latches the error of a failing `op`.
    pub fn guard<T: Default>(&mut self, op: impl FnOnce() -> Result<T, Error>) -> T {
        if self.error.is_some() {
            return T::default();
        }
        let result = op();
        self.check(result)
    }
}
