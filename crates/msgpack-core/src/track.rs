//! Compound value tracking.
//!
//! Readers and writers record every array, map, str, bin and ext they open.
//! Each open compound is a [`TrackElement`] on an explicit stack, so nesting
//! depth is bounded by memory rather than by recursion. Any mismatch between a
//! declared header and the children actually read or written is reported as
//! [`Error::ApiMisuse`].

use tracing::debug;

use crate::config::DEFAULT_TRACK_CAPACITY;
use crate::{Config, Error, ErrorLatch, Type};

#[inline]
fn direction(read: bool) -> &'static str {
    if read {
        "read"
    } else {
        "written"
    }
}

/// One open compound value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrackElement {
    pub ty: Type,
    /// Units still expected: elements for arrays, keys plus values for maps,
    /// bytes for str/bin/ext.
    pub left: u64,
}

/// Stack of open compound values.
///
/// A bare `Track` only reports violations through its return values: it does
/// not latch them and never asserts. Readers and writers embed a [`Tracker`],
/// which adds both.
#[derive(Debug, Clone)]
pub struct Track {
    elements: Vec<TrackElement>,
    initial_capacity: usize,
}

impl Default for Track {
    fn default() -> Self {
        Self::new()
    }
}

impl Track {
    /// Creates an empty track. Storage is reserved on the first push.
    pub fn new() -> Self {
        Self {
            elements: Vec::new(),
            initial_capacity: DEFAULT_TRACK_CAPACITY,
        }
    }

    /// Creates an empty track with `capacity` frames reserved up front.
    pub fn with_capacity(capacity: usize) -> Result<Self, Error> {
        let mut elements = Vec::new();
        elements
            .try_reserve_exact(capacity)
            .map_err(|_| Error::AllocationFailure)?;
        Ok(Self {
            elements,
            initial_capacity: capacity.max(1),
        })
    }

    /// Current nesting depth.
    #[inline]
    pub fn depth(&self) -> usize {
        self.elements.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// The innermost open compound.
    #[inline]
    pub fn top(&self) -> Option<&TrackElement> {
        self.elements.last()
    }

    fn grow(&mut self) -> Result<(), Error> {
        let additional = self.elements.capacity().max(self.initial_capacity);
        self.elements
            .try_reserve_exact(additional)
            .map_err(|_| Error::AllocationFailure)
    }

    /// Opens a frame for a compound header of `count` elements, pairs or bytes.
    pub fn push(&mut self, ty: Type, count: u64) -> Result<(), Error> {
        if !ty.is_compound() {
            debug!(target: "msgpack_core::track", ty = ty.name(), "cannot track a scalar type");
            return Err(Error::ApiMisuse);
        }
        let left = if ty == Type::Map {
            count.checked_mul(2).ok_or_else(|| {
                debug!(target: "msgpack_core::track", count, "map pair count overflows tracker");
                Error::SizeExceeded
            })?
        } else {
            count
        };
        if self.elements.len() == self.elements.capacity() {
            self.grow()?;
        }
        self.elements.push(TrackElement { ty, left });
        Ok(())
    }

    /// Closes the innermost compound, which must be of type `ty` and complete.
    pub fn pop(&mut self, ty: Type) -> Result<(), Error> {
        let Some(element) = self.elements.last() else {
            debug!(target: "msgpack_core::track", ty = ty.name(), "closing a compound but nothing is open");
            return Err(Error::ApiMisuse);
        };
        if element.ty != ty {
            debug!(
                target: "msgpack_core::track",
                ty = ty.name(),
                open = element.ty.name(),
                "closing a compound of the wrong type"
            );
            return Err(Error::ApiMisuse);
        }
        if element.left != 0 {
            debug!(
                target: "msgpack_core::track",
                ty = ty.name(),
                left = element.left,
                "closing a compound with units remaining"
            );
            return Err(Error::ApiMisuse);
        }
        self.elements.pop();
        Ok(())
    }

    /// Consumes one child element of the innermost array or map.
    pub fn element(&mut self, read: bool) -> Result<(), Error> {
        let Some(element) = self.elements.last_mut() else {
            debug!(target: "msgpack_core::track", "element {} with nothing open", direction(read));
            return Err(Error::ApiMisuse);
        };
        if element.ty.is_byte_oriented() {
            debug!(
                target: "msgpack_core::track",
                open = element.ty.name(),
                "element {} inside a byte-oriented compound",
                direction(read)
            );
            return Err(Error::ApiMisuse);
        }
        if element.left == 0 {
            debug!(
                target: "msgpack_core::track",
                open = element.ty.name(),
                "too many elements {}",
                direction(read)
            );
            return Err(Error::ApiMisuse);
        }
        element.left -= 1;
        Ok(())
    }

    /// Consumes `count` body bytes of the innermost str, bin or ext.
    pub fn bytes(&mut self, read: bool, count: u64) -> Result<(), Error> {
        let Some(element) = self.elements.last_mut() else {
            debug!(target: "msgpack_core::track", count, "bytes {} with nothing open", direction(read));
            return Err(Error::ApiMisuse);
        };
        if !element.ty.is_byte_oriented() {
            debug!(
                target: "msgpack_core::track",
                open = element.ty.name(),
                count,
                "bytes {} inside an array or map",
                direction(read)
            );
            return Err(Error::ApiMisuse);
        }
        if count > element.left {
            debug!(
                target: "msgpack_core::track",
                open = element.ty.name(),
                count,
                left = element.left,
                "too many bytes {}",
                direction(read)
            );
            return Err(Error::ApiMisuse);
        }
        element.left -= count;
        Ok(())
    }

    /// Fails if any compound is still open.
    pub fn check_empty(&self) -> Result<(), Error> {
        match self.elements.last() {
            None => Ok(()),
            Some(element) => {
                debug!(
                    target: "msgpack_core::track",
                    open = element.ty.name(),
                    depth = self.elements.len(),
                    "unclosed compound"
                );
                Err(Error::ApiMisuse)
            }
        }
    }

    /// Releases the stack. Unless `cancel` is set, open compounds are an error.
    pub fn destroy(self, cancel: bool) -> Result<(), Error> {
        if cancel {
            Ok(())
        } else {
            self.check_empty()
        }
    }
}

/// Tracking state embedded in a reader, writer or tree.
///
/// Couples a [`Track`] with the owner's [`ErrorLatch`]: a failed operation
/// latches its error, and once any error is latched every operation returns
/// it without touching the stack. When tracking is disabled for the
/// tracker's direction every operation succeeds and nothing is recorded.
#[derive(Debug, Clone)]
pub struct Tracker {
    latch: ErrorLatch,
    track: Track,
    read: bool,
    enabled: bool,
}

impl Tracker {
    /// Tracker for a reader.
    pub fn reader(config: &Config) -> Self {
        Self::new(true, config)
    }

    /// Tracker for a writer.
    pub fn writer(config: &Config) -> Self {
        Self::new(false, config)
    }

    fn new(read: bool, config: &Config) -> Self {
        Self {
            latch: ErrorLatch::with_config(config),
            track: Track {
                elements: Vec::new(),
                initial_capacity: config.initial_track_capacity.max(1),
            },
            read,
            enabled: config.tracks(read),
        }
    }

    #[inline]
    pub fn latch(&self) -> &ErrorLatch {
        &self.latch
    }

    #[inline]
    pub fn latch_mut(&mut self) -> &mut ErrorLatch {
        &mut self.latch
    }

    #[inline]
    pub fn error(&self) -> Option<Error> {
        self.latch.error()
    }

    /// Latches an error found by the owner, e.g. invalid input.
    pub fn flag(&mut self, error: Error) {
        self.latch.flag(error);
    }

    #[inline]
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    #[inline]
    pub fn depth(&self) -> usize {
        self.track.depth()
    }

    fn run(&mut self, op: impl FnOnce(&mut Track, bool) -> Result<(), Error>) -> Result<(), Error> {
        if let Some(error) = self.latch.error() {
            return Err(error);
        }
        if !self.enabled {
            return Ok(());
        }
        op(&mut self.track, self.read).inspect_err(|&error| self.latch.flag_violation(error))
    }

    pub fn push(&mut self, ty: Type, count: u64) -> Result<(), Error> {
        self.run(|track, _| track.push(ty, count))
    }

    pub fn pop(&mut self, ty: Type) -> Result<(), Error> {
        self.run(|track, _| track.pop(ty))
    }

    pub fn element(&mut self) -> Result<(), Error> {
        self.run(|track, read| track.element(read))
    }

    pub fn bytes(&mut self, count: u64) -> Result<(), Error> {
        self.run(|track, read| track.bytes(read, count))
    }

    pub fn check_empty(&mut self) -> Result<(), Error> {
        self.run(|track, _| track.check_empty())
    }

    /// Tears the tracker down and returns the owner's final error state.
    ///
    /// Open compounds are only reported when `cancel` is false and no error
    /// was latched before.
    pub fn close(mut self, cancel: bool) -> Result<(), Error> {
        let cancel = cancel || !self.latch.is_ok() || !self.enabled;
        if let Err(error) = self.track.destroy(cancel) {
            self.latch.flag_violation(error);
        }
        match self.latch.error() {
            Some(error) => Err(error),
            None => Ok(()),
        }
    }
}
