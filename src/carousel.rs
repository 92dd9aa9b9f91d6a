//! Rotating index controller.
//!
//! A [`Carousel`] owns a single position over a fixed-length sequence of
//! slides. Every carousel on the site uses it: the hero and testimonial
//! rotators (auto-advancing) and the gallery image and offer carousels
//! (arrows only).
//!
//! ## Navigation
//!
//! ```text
//! next()      0 → 1 → 2 → 0 → ...
//! previous()  0 → 2 → 1 → 0 → ...
//! jump_to(i)  any index in [0, len), anything else is an error
//! ```
//!
//! Stepping back from `0` lands on `len - 1`; every other backwards step is a
//! plain decrement, so no intermediate value exceeds `len` for any length.
//!
//! The controller has no timer of its own. Auto-advance is driven by
//! [`crate::autoplay::AutoCarousel`], which calls [`Carousel::tick`] on the
//! configured interval.

use std::time::Duration;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CarouselError {
    #[error("Invalid carousel config: {0}")]
    InvalidConfig(String),
    #[error("Index {index} out of range for carousel of {len} slides")]
    IndexOutOfRange { index: i64, len: usize },
    #[error("Carousel has been cancelled")]
    Cancelled,
}

/// Rotation state for one carousel instance.
///
/// `index` is always in `[0, len)`; `len` never changes after construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Carousel {
    index: usize,
    len: usize,
    auto_advance: bool,
    interval_ms: u64,
}

impl Carousel {
    /// Create a carousel positioned on the first slide.
    ///
    /// Fails with [`CarouselError::InvalidConfig`] when there are no slides,
    /// or when auto-advance is requested with a zero interval.
    pub fn new(len: usize, auto_advance: bool, interval_ms: u64) -> Result<Self, CarouselError> {
        if len < 1 {
            return Err(CarouselError::InvalidConfig(
                "a carousel needs at least one slide".into(),
            ));
        }
        if auto_advance && interval_ms == 0 {
            return Err(CarouselError::InvalidConfig(
                "auto-advance interval must be positive".into(),
            ));
        }
        Ok(Self {
            index: 0,
            len,
            auto_advance,
            interval_ms,
        })
    }

    /// Arrow-driven carousel with no timer.
    pub fn manual(len: usize) -> Result<Self, CarouselError> {
        Self::new(len, false, 0)
    }

    pub fn current(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.len
    }

    /// Always false: construction rejects empty sequences.
    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn auto_advance(&self) -> bool {
        self.auto_advance
    }

    pub fn interval_ms(&self) -> u64 {
        self.interval_ms
    }

    /// Tick period, or `None` for manual carousels.
    pub fn interval(&self) -> Option<Duration> {
        self.auto_advance
            .then(|| Duration::from_millis(self.interval_ms))
    }

    /// Step forward, wrapping from the last slide to the first.
    pub fn next(&mut self) -> usize {
        self.index = (self.index + 1) % self.len;
        self.index
    }

    /// Step backward, wrapping from the first slide to the last.
    pub fn previous(&mut self) -> usize {
        self.index = if self.index == 0 {
            self.len - 1
        } else {
            self.index - 1
        };
        self.index
    }

    /// Jump straight to `index`. Out-of-range targets are rejected, never
    /// clamped, and leave the position untouched.
    pub fn jump_to(&mut self, index: i64) -> Result<usize, CarouselError> {
        match usize::try_from(index) {
            Ok(i) if i < self.len => {
                self.index = i;
                Ok(i)
            }
            _ => Err(CarouselError::IndexOutOfRange {
                index,
                len: self.len,
            }),
        }
    }

    /// One scheduled advancement. Same as [`Carousel::next`].
    pub fn tick(&mut self) -> usize {
        self.next()
    }
}
