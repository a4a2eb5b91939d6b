//! Virtual sequence construction and the index arithmetic around it.
//!
//! A wheel never scrolls the option list directly. It scrolls a virtual
//! sequence: the options padded with `visible_rest` empty slots on both ends
//! (so the first and last option can sit under the indicator), and, when
//! looping, the options repeated [`REPEAT`] times inside that padding.
//!
//! Offsets are measured from the top of the sequence. A "top index" is the
//! number of whole items scrolled past; the slot under the indicator is
//! `top_index + visible_rest`, which always lands on option
//! `base_index(top_index)`.

/// Number of times the options are repeated when looping.
pub const REPEAT: usize = 7;

/// Block the wheel is placed in on mount; equal room above and below.
pub const MID_BLOCK: usize = REPEAT / 2;

const _: () = assert!(REPEAT % 2 == 1, "REPEAT must be odd");

/// The slots handed to the scrolling view.
///
/// Each slot is `None` for padding or `Some(i)` for option `i` of the base
/// list. Rebuilt whenever its inputs change; never mutated in place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VirtualSequence {
    slots: Vec<Option<usize>>,
    base_len: usize,
    visible_rest: usize,
    looping: bool,
}

impl VirtualSequence {
    pub fn build(base_len: usize, visible_rest: usize, looping: bool) -> Self {
        let repeats = if looping { REPEAT } else { 1 };
        let mut slots = Vec::with_capacity(base_len * repeats + visible_rest * 2);

        slots.extend(std::iter::repeat_n(None, visible_rest));
        for _ in 0..repeats {
            slots.extend((0..base_len).map(Some));
        }
        slots.extend(std::iter::repeat_n(None, visible_rest));

        Self {
            slots,
            base_len,
            visible_rest,
            looping,
        }
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Base option index at a slot, `None` for padding or out of range.
    pub fn get(&self, slot: usize) -> Option<usize> {
        self.slots.get(slot).copied().flatten()
    }

    pub fn base_len(&self) -> usize {
        self.base_len
    }

    pub fn visible_rest(&self) -> usize {
        self.visible_rest
    }

    pub fn is_looping(&self) -> bool {
        self.looping
    }

    /// Number of real (non-padding) slots.
    pub fn content_len(&self) -> usize {
        self.slots.len() - self.visible_rest * 2
    }

    /// Largest top index that still centers a real option.
    pub fn max_top_index(&self) -> usize {
        self.content_len().saturating_sub(1)
    }

    /// Offsets the view should snap to, one per centerable option.
    pub fn snap_offsets(&self, item_height: f64) -> Vec<f64> {
        if self.content_len() == 0 {
            return vec![];
        }
        (0..=self.max_top_index())
            .map(|i| placement_offset(i, item_height))
            .collect()
    }
}

/// Top index that centers `selected` on mount or re-placement.
pub fn initial_top_index(selected: usize, base_len: usize, looping: bool) -> usize {
    if looping {
        MID_BLOCK * base_len + selected
    } else {
        selected
    }
}

/// Pixel offset for a top index.
pub fn placement_offset(top_index: usize, item_height: f64) -> f64 {
    top_index as f64 * item_height
}

/// Convert a raw offset into a top index.
///
/// Negative (overscrolled) and NaN offsets count as `0`. Rounds half up: a
/// remainder of at least half an item moves to the next index.
pub fn top_index_for_offset(offset: f64, item_height: f64) -> usize {
    if item_height.is_nan() || item_height <= 0.0 {
        return 0;
    }
    let offset = if offset.is_nan() { 0.0 } else { offset.max(0.0) };

    let whole = (offset / item_height).floor();
    let remainder = offset - whole * item_height;
    let index = if remainder * 2.0 >= item_height {
        whole + 1.0
    } else {
        whole
    };

    index as usize
}

/// Position in the base list for any (possibly negative) virtual index.
pub fn base_index(top_index: i64, base_len: usize) -> usize {
    if base_len == 0 {
        return 0;
    }
    top_index.rem_euclid(base_len as i64) as usize
}

/// Which repeated block a top index falls in.
pub fn block_of(top_index: usize, base_len: usize) -> usize {
    if base_len == 0 {
        return 0;
    }
    top_index / base_len
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flat_sequence_is_padded() {
        let seq = VirtualSequence::build(4, 2, false);
        assert_eq!(seq.len(), 8);
        assert_eq!(seq.get(0), None);
        assert_eq!(seq.get(1), None);
        assert_eq!(seq.get(2), Some(0));
        assert_eq!(seq.get(5), Some(3));
        assert_eq!(seq.get(6), None);
        assert_eq!(seq.get(99), None);
        assert_eq!(seq.max_top_index(), 3);
    }

    #[test]
    fn test_looping_sequence_repeats_inside_padding() {
        let seq = VirtualSequence::build(24, 2, true);
        assert_eq!(seq.len(), 24 * REPEAT + 4);
        assert_eq!(seq.content_len(), 168);
        assert_eq!(seq.get(2), Some(0));
        assert_eq!(seq.get(2 + 24), Some(0));
        assert_eq!(seq.get(2 + 167), Some(23));
        assert_eq!(seq.get(2 + 168), None);
    }

    #[test]
    fn test_empty_options_only_padding() {
        let seq = VirtualSequence::build(0, 2, true);
        assert_eq!(seq.len(), 4);
        assert_eq!(seq.content_len(), 0);
        assert!(seq.snap_offsets(40.0).is_empty());
    }

    #[test]
    fn test_initial_top_index() {
        assert_eq!(initial_top_index(2, 4, false), 2);
        assert_eq!(initial_top_index(12, 24, true), 84);
        assert_eq!(initial_top_index(6, 12, true), 42);
        assert_eq!(placement_offset(initial_top_index(30, 60, true), 40.0), 8400.0);
    }

    #[test]
    fn test_round_half_up() {
        assert_eq!(top_index_for_offset(0.0, 40.0), 0);
        assert_eq!(top_index_for_offset(19.9, 40.0), 0);
        assert_eq!(top_index_for_offset(20.0, 40.0), 1);
        assert_eq!(top_index_for_offset(59.0, 40.0), 1);
        assert_eq!(top_index_for_offset(-35.0, 40.0), 0);
        assert_eq!(top_index_for_offset(f64::NAN, 40.0), 0);
        assert_eq!(top_index_for_offset(100.0, 0.0), 0);
    }

    #[test]
    fn test_base_index_is_block_invariant() {
        for len in 1..30usize {
            for top in -100i64..200 {
                let base = base_index(top, len);
                assert!(base < len);
                assert_eq!(base_index(top + len as i64, len), base);
                assert_eq!(base_index(top - 3 * len as i64, len), base);
            }
        }
        assert_eq!(base_index(108, 24), 12);
        assert_eq!(base_index(-1, 24), 23);
    }

    #[test]
    fn test_block_of() {
        assert_eq!(block_of(84, 24), MID_BLOCK);
        assert_eq!(block_of(23, 24), 0);
        assert_eq!(block_of(24 * 6, 24), REPEAT - 1);
    }
}
