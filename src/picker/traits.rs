//! Picker trait definition
//!
//! A generic trait for list-based selection components.

/// A generic picker trait for list selection
///
/// Provides default wrap-around navigation over any indexed collection. The
/// app uses it to move focus between wheel columns.
///
/// # Example
///
/// ```ignore
/// struct Columns {
///     columns: Vec<WheelColumn>,
///     focused: usize,
/// }
///
/// impl Picker for Columns {
///     type Item = WheelColumn;
///
///     fn items(&self) -> &[Self::Item] {
///         &self.columns
///     }
///
///     fn selected_index(&self) -> usize {
///         self.focused
///     }
///
///     fn set_selected_index(&mut self, index: usize) {
///         self.focused = index;
///     }
/// }
/// ```
pub trait Picker {
    /// The type of items in the picker
    type Item;

    /// Get the list of items
    fn items(&self) -> &[Self::Item];

    /// Get the current selected index
    fn selected_index(&self) -> usize;

    /// Set the selected index
    fn set_selected_index(&mut self, index: usize);

    /// Get the number of items
    fn len(&self) -> usize {
        self.items().len()
    }

    /// Check if the picker is empty
    fn is_empty(&self) -> bool {
        self.items().is_empty()
    }

    /// Select the next item (wraps around)
    fn select_next(&mut self) {
        if !self.is_empty() {
            let next = (self.selected_index() + 1) % self.len();
            self.set_selected_index(next);
        }
    }

    /// Select the previous item (wraps around)
    fn select_prev(&mut self) {
        if !self.is_empty() {
            let prev = self
                .selected_index()
                .checked_sub(1)
                .unwrap_or(self.len() - 1);
            self.set_selected_index(prev);
        }
    }

    /// Select a specific index (clamped to valid range)
    fn select_index(&mut self, index: usize) {
        if !self.is_empty() {
            let clamped = index.min(self.len() - 1);
            self.set_selected_index(clamped);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Letters {
        items: Vec<char>,
        selected: usize,
    }

    impl Picker for Letters {
        type Item = char;

        fn items(&self) -> &[char] {
            &self.items
        }

        fn selected_index(&self) -> usize {
            self.selected
        }

        fn set_selected_index(&mut self, index: usize) {
            self.selected = index;
        }
    }

    #[test]
    fn test_wraps_both_ways() {
        let mut picker = Letters {
            items: vec!['a', 'b', 'c'],
            selected: 2,
        };
        picker.select_next();
        assert_eq!(picker.selected_index(), 0);
        picker.select_prev();
        assert_eq!(picker.selected_index(), 2);
        picker.select_index(99);
        assert_eq!(picker.selected_index(), 2);
    }

    #[test]
    fn test_empty_is_noop() {
        let mut picker = Letters {
            items: vec![],
            selected: 0,
        };
        picker.select_next();
        picker.select_prev();
        picker.select_index(3);
        assert_eq!(picker.selected_index(), 0);
    }
}
