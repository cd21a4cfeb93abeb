//! Half-open, step-aware slice ranges with negative index support.

use crate::error::SliceError;

/// A `start:stop:step` range over a deck.
///
/// Missing bounds default to the ends of the deck in the direction of the
/// step. Negative bounds count from the end. Bounds past either end are
/// clamped, so applying a slice never fails.
///
/// ```
/// use fluentdeck::Slice;
///
/// let evens = Slice::range(0, 10).with_step(2).unwrap();
/// assert_eq!(evens.indices(52).collect::<Vec<_>>(), [0, 2, 4, 6, 8]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Slice {
    start: Option<isize>,
    stop: Option<isize>,
    step: isize,
}

impl Slice {
    /// Creates a slice from optional bounds and a step.
    ///
    /// # Errors
    ///
    /// Returns [`SliceError::ZeroStep`] if `step` is zero.
    pub const fn new(
        start: Option<isize>,
        stop: Option<isize>,
        step: isize,
    ) -> Result<Self, SliceError> {
        if step == 0 {
            return Err(SliceError::ZeroStep);
        }
        Ok(Self { start, stop, step })
    }

    /// The whole deck, front to back.
    #[must_use]
    pub const fn full() -> Self {
        Self {
            start: None,
            stop: None,
            step: 1,
        }
    }

    /// Positions `start..stop` with step 1.
    #[must_use]
    pub const fn range(start: isize, stop: isize) -> Self {
        Self {
            start: Some(start),
            stop: Some(stop),
            step: 1,
        }
    }

    /// Positions from `start` to the end.
    #[must_use]
    pub const fn starting_at(start: isize) -> Self {
        Self {
            start: Some(start),
            stop: None,
            step: 1,
        }
    }

    /// Positions from the beginning up to, not including, `stop`.
    #[must_use]
    pub const fn up_to(stop: isize) -> Self {
        Self {
            start: None,
            stop: Some(stop),
            step: 1,
        }
    }

    /// Replaces the step.
    ///
    /// # Errors
    ///
    /// Returns [`SliceError::ZeroStep`] if `step` is zero.
    pub const fn with_step(self, step: isize) -> Result<Self, SliceError> {
        Self::new(self.start, self.stop, step)
    }

    /// Returns the start bound.
    #[must_use]
    pub const fn start(&self) -> Option<isize> {
        self.start
    }

    /// Returns the stop bound.
    #[must_use]
    pub const fn stop(&self) -> Option<isize> {
        self.stop
    }

    /// Returns the step.
    #[must_use]
    pub const fn step(&self) -> isize {
        self.step
    }

    /// Resolves the slice against a sequence of `len` elements and yields
    /// the selected positions in order.
    #[expect(
        clippy::cast_possible_wrap,
        reason = "sequence lengths never exceed isize::MAX"
    )]
    pub fn indices(&self, len: usize) -> impl Iterator<Item = usize> + use<> {
        let len = len as isize;
        let step = self.step;

        let (start, stop) = if step > 0 {
            (
                self.start.map_or(0, |bound| clamp_bound(bound, len, 0, len)),
                self.stop.map_or(len, |bound| clamp_bound(bound, len, 0, len)),
            )
        } else {
            (
                self.start
                    .map_or(len - 1, |bound| clamp_bound(bound, len, -1, len - 1)),
                self.stop
                    .map_or(-1, |bound| clamp_bound(bound, len, -1, len - 1)),
            )
        };

        let span = if step > 0 { stop - start } else { start - stop };
        let stride = step.unsigned_abs();
        let count = if span > 0 {
            (span as usize - 1) / stride + 1
        } else {
            0
        };

        // A non-empty walk never leaves 0..len, so start is non-negative.
        let start = start as usize;
        (0..count).map(move |i| {
            if step > 0 {
                start + i * stride
            } else {
                start - i * stride
            }
        })
    }
}

impl Default for Slice {
    fn default() -> Self {
        Self::full()
    }
}

/// Resolves a negative bound against `len` and clamps it into `low..=high`.
const fn clamp_bound(bound: isize, len: isize, low: isize, high: isize) -> isize {
    let bound = if bound < 0 { bound + len } else { bound };
    if bound < low {
        low
    } else if bound > high {
        high
    } else {
        bound
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;

    use super::*;

    fn collect(slice: Slice, len: usize) -> Vec<usize> {
        slice.indices(len).collect()
    }

    #[test]
    fn forward_ranges_are_half_open() {
        assert_eq!(collect(Slice::range(0, 3), 5), [0, 1, 2]);
        assert_eq!(collect(Slice::starting_at(3), 5), [3, 4]);
        assert_eq!(collect(Slice::up_to(2), 5), [0, 1]);
        assert_eq!(collect(Slice::full(), 3), [0, 1, 2]);
    }

    #[test]
    fn bounds_are_clamped_and_negative_bounds_count_from_end() {
        assert_eq!(collect(Slice::range(-2, 100), 5), [3, 4]);
        assert_eq!(collect(Slice::range(-100, 2), 5), [0, 1]);
        assert!(collect(Slice::range(4, 2), 5).is_empty());
        assert!(collect(Slice::range(10, 20), 5).is_empty());
    }

    #[test]
    fn negative_steps_walk_backwards() {
        let reversed = Slice::full().with_step(-1).unwrap();
        assert_eq!(collect(reversed, 4), [3, 2, 1, 0]);

        let stride = Slice::range(10, 0).with_step(-3).unwrap();
        assert_eq!(collect(stride, 52), [10, 7, 4, 1]);

        let clamped = Slice::range(100, -100).with_step(-2).unwrap();
        assert_eq!(collect(clamped, 5), [4, 2, 0]);
    }

    #[test]
    fn empty_sequence_yields_nothing() {
        assert!(collect(Slice::full(), 0).is_empty());
        assert!(collect(Slice::full().with_step(-1).unwrap(), 0).is_empty());
    }

    #[test]
    fn extreme_steps_take_a_single_position() {
        let forward = Slice::full().with_step(isize::MAX).unwrap();
        assert_eq!(collect(forward, 52), [0]);

        let backward = Slice::full().with_step(isize::MIN).unwrap();
        assert_eq!(collect(backward, 52), [51]);

        let bounded = Slice::range(isize::MIN, isize::MAX)
            .with_step(isize::MIN)
            .unwrap();
        assert!(collect(bounded, 52).is_empty());

        let reversed = Slice::range(isize::MAX, isize::MIN)
            .with_step(isize::MIN)
            .unwrap();
        assert_eq!(collect(reversed, 52), [51]);
    }

    #[test]
    fn zero_step_is_rejected() {
        assert_eq!(Slice::full().with_step(0), Err(SliceError::ZeroStep));
        assert_eq!(Slice::new(None, None, 0), Err(SliceError::ZeroStep));
    }
}
