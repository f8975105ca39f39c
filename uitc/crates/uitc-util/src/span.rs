//! Span module - Source location tracking.
//!
//! Uit programs are single-line expressions, so a location is fully described
//! by its byte range. The column is derived from the start offset.
//!
//! # Examples
//!
//! ```
//! use uitc_util::span::Span;
//!
//! let span = Span::new(4, 7);
//! assert_eq!(span.len(), 3);
//! assert_eq!(span.column(), 5);
//! ```

use std::fmt;

/// A half-open byte range `start..end` in the source text.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Span {
    /// Start byte offset in source
    pub start: usize,
    /// End byte offset in source (exclusive)
    pub end: usize,
}

impl Span {
    /// Dummy span for testing
    ///
    /// # Examples
    ///
    /// ```
    /// use uitc_util::span::Span;
    ///
    /// assert_eq!(Span::DUMMY.start, 0);
    /// assert!(Span::DUMMY.is_empty());
    /// ```
    pub const DUMMY: Span = Span { start: 0, end: 0 };

    /// Create a new span
    ///
    /// # Arguments
    ///
    /// * `start` - Start byte offset
    /// * `end` - End byte offset (exclusive)
    #[inline]
    pub fn new(start: usize, end: usize) -> Self {
        debug_assert!(start <= end, "span start {} is past end {}", start, end);
        Self { start, end }
    }

    /// Create an empty span at a single offset.
    ///
    /// ```
    /// use uitc_util::span::Span;
    ///
    /// let point = Span::point(3);
    /// assert_eq!(point.start, point.end);
    /// ```
    #[inline]
    pub fn point(offset: usize) -> Self {
        Self {
            start: offset,
            end: offset,
        }
    }

    /// Returns true if this span is empty (start == end)
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Returns the length of the span in bytes
    #[inline]
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Returns the 1-based column of the first byte.
    #[inline]
    pub fn column(&self) -> usize {
        self.start + 1
    }

    /// Check if this span contains a byte offset
    #[inline]
    pub fn contains(&self, offset: usize) -> bool {
        self.start <= offset && offset < self.end
    }

    /// Merge two spans into a single span covering both
    ///
    /// ```
    /// use uitc_util::span::Span;
    ///
    /// let merged = Span::new(0, 2).merge(Span::new(5, 6));
    /// assert_eq!(merged, Span::new(0, 6));
    /// ```
    #[inline]
    pub fn merge(self, other: Span) -> Span {
        Span {
            start: self.start.min(other.start),
            end: self.end.max(other.end),
        }
    }

    /// Returns the slice of `source` covered by this span, if it is in bounds.
    pub fn snippet<'a>(&self, source: &'a str) -> Option<&'a str> {
        source.get(self.start..self.end)
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}
