//! Bidirectional mutating cursor over a [`WeightedList`].
//!
//! The cursor sits *between* elements: `next` yields the element to its
//! right and moves past it, `previous` yields the element to its left and
//! moves before it. Mutations through the cursor obey the same bounds and
//! ordering rules as the list itself, and a rejected mutation leaves both
//! the cursor and the list unchanged.

use crate::error::WeightError;
use crate::list::WeightedList;

pub struct Cursor<'a, E, W> {
    list: &'a mut WeightedList<E, W>,
    /// Index of the element `next` would yield.
    index: usize,
    /// Index of the element most recently yielded, while it is still legal
    /// to remove or replace it.
    last: Option<usize>,
}

impl<'a, E, W: Fn(&E) -> f64> Cursor<'a, E, W> {
    pub(crate) fn new(list: &'a mut WeightedList<E, W>, index: usize) -> Cursor<'a, E, W> {
        Cursor { list, index, last: None }
    }

    pub fn has_next(&self) -> bool {
        self.index < self.list.len()
    }

    pub fn has_previous(&self) -> bool {
        self.index > 0
    }

    /// Index of the element `next` would yield; `len` when at the end.
    pub fn next_index(&self) -> usize {
        self.index
    }

    /// Index of the element `previous` would yield, or `None` at the front.
    pub fn previous_index(&self) -> Option<usize> {
        self.index.checked_sub(1)
    }

    /// Yields the element to the right and steps past it.
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> Result<&E, WeightError> {
        if self.index >= self.list.len() {
            return Err(WeightError::Exhausted);
        }
        let yielded = self.index;
        self.index += 1;
        self.last = Some(yielded);
        Ok(&self.list.elements[yielded])
    }

    /// Yields the element to the left and steps before it.
    pub fn previous(&mut self) -> Result<&E, WeightError> {
        if self.index == 0 {
            return Err(WeightError::Exhausted);
        }
        self.index -= 1;
        self.last = Some(self.index);
        Ok(&self.list.elements[self.index])
    }

    /// Removes the most recently yielded element. Requires a preceding
    /// `next` or `previous` with no intervening removal or insertion.
    pub fn remove_current(&mut self) -> Result<E, WeightError> {
        let current = self.last.ok_or(WeightError::NoCurrent)?;
        let removed = self.list.remove_at(current)?;
        if current < self.index {
            self.index -= 1;
        }
        self.last = None;
        Ok(removed)
    }

    /// Replaces the most recently yielded element, returning the one it
    /// displaces. Validated against the neighbors of that position, the
    /// same rule as [`WeightedList::set`]. The element stays current, so
    /// further `set_current`/`remove_current` calls remain legal.
    pub fn set_current(&mut self, element: E) -> Result<E, WeightError> {
        let current = self.last.ok_or(WeightError::NoCurrent)?;
        self.list.set(current, element)
    }

    /// Inserts `element` at the cursor position, after whatever `previous`
    /// would yield and before whatever `next` would yield. The weight must
    /// be in bounds and fit between those neighbors. On success the cursor
    /// ends up past the new element, and the element is *not* current: it
    /// cannot be removed or replaced without an intervening `next` or
    /// `previous`.
    pub fn insert_here(&mut self, element: E) -> Result<(), WeightError> {
        self.list.insert(self.index, element)?;
        self.index += 1;
        self.last = None;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bounds::Bounds;

    fn identity(value: &f64) -> f64 {
        *value
    }

    fn list_of(values: &[f64]) -> WeightedList<f64, fn(&f64) -> f64> {
        let mut list = WeightedList::new(Bounds::inclusive(0.0, 100.0), identity as fn(&f64) -> f64);
        for &value in values {
            assert!(list.push(value));
        }
        list
    }

    #[test]
    fn walks_both_directions() {
        let mut list = list_of(&[1.0, 2.0, 3.0]);
        let mut cursor = list.cursor();
        assert_eq!(cursor.next(), Ok(&1.0));
        assert_eq!(cursor.next(), Ok(&2.0));
        assert_eq!(cursor.previous(), Ok(&2.0));
        assert_eq!(cursor.previous(), Ok(&1.0));
        assert_eq!(cursor.previous(), Err(WeightError::Exhausted));
    }

    #[test]
    fn exhausts_at_the_far_end() {
        let mut list = list_of(&[1.0]);
        let mut cursor = list.cursor();
        assert_eq!(cursor.next(), Ok(&1.0));
        assert_eq!(cursor.next(), Err(WeightError::Exhausted));
    }

    #[test]
    fn fresh_cursor_has_no_current() {
        let mut list = list_of(&[1.0, 2.0]);
        let mut cursor = list.cursor();
        assert_eq!(cursor.remove_current(), Err(WeightError::NoCurrent));
        assert_eq!(cursor.set_current(1.5), Err(WeightError::NoCurrent));
        assert_eq!(cursor.next(), Ok(&1.0));
        assert_eq!(cursor.remove_current(), Ok(1.0));
        assert_eq!(list.as_slice(), &[2.0]);
    }

    #[test]
    fn remove_after_next_steps_back() {
        let mut list = list_of(&[1.0, 2.0, 3.0]);
        let mut cursor = list.cursor();
        let _ = cursor.next();
        let _ = cursor.next();
        assert_eq!(cursor.remove_current(), Ok(2.0));
        // The cursor now sits between 1 and 3.
        assert_eq!(cursor.next(), Ok(&3.0));
        assert_eq!(list.as_slice(), &[1.0, 3.0]);
    }

    #[test]
    fn remove_after_previous_keeps_position() {
        let mut list = list_of(&[1.0, 2.0, 3.0]);
        let mut cursor = list.cursor_at(2).unwrap();
        assert_eq!(cursor.previous(), Ok(&2.0));
        assert_eq!(cursor.remove_current(), Ok(2.0));
        assert_eq!(cursor.next(), Ok(&3.0));
        assert_eq!(list.as_slice(), &[1.0, 3.0]);
    }

    #[test]
    fn double_remove_needs_an_intervening_step() {
        let mut list = list_of(&[1.0, 2.0]);
        let mut cursor = list.cursor();
        let _ = cursor.next();
        assert_eq!(cursor.remove_current(), Ok(1.0));
        assert_eq!(cursor.remove_current(), Err(WeightError::NoCurrent));
        assert_eq!(cursor.next(), Ok(&2.0));
        assert_eq!(cursor.remove_current(), Ok(2.0));
        assert!(list.is_empty());
    }

    #[test]
    fn set_current_validates_like_set() {
        let mut list = list_of(&[1.0, 3.0, 5.0]);
        let mut cursor = list.cursor();
        let _ = cursor.next();
        let _ = cursor.next();
        assert_eq!(cursor.set_current(4.0), Ok(3.0));
        // 9 would overtake the right neighbor 5.
        assert_eq!(
            cursor.set_current(9.0),
            Err(WeightError::WouldUnorder { index: 1, weight: 9.0 })
        );
        // Still current after both the success and the rejection.
        assert_eq!(cursor.set_current(4.5), Ok(4.0));
        assert_eq!(list.as_slice(), &[1.0, 4.5, 5.0]);
    }

    #[test]
    fn insert_here_lands_between_neighbors() {
        let mut list = list_of(&[1.0, 5.0]);
        let mut cursor = list.cursor();
        let _ = cursor.next();
        assert_eq!(cursor.insert_here(3.0), Ok(()));
        // Cursor is past the new element; the next step yields 5.
        assert_eq!(cursor.next(), Ok(&5.0));
        assert_eq!(list.as_slice(), &[1.0, 3.0, 5.0]);
    }

    #[test]
    fn insert_here_resets_current() {
        let mut list = list_of(&[1.0, 5.0]);
        let mut cursor = list.cursor();
        let _ = cursor.next();
        assert_eq!(cursor.insert_here(3.0), Ok(()));
        assert_eq!(cursor.remove_current(), Err(WeightError::NoCurrent));
        assert_eq!(list.len(), 3);
    }

    #[test]
    fn insert_here_rejects_misfit_without_moving() {
        let mut list = list_of(&[1.0, 2.0]);
        let mut cursor = list.cursor();
        let _ = cursor.next();
        assert_eq!(
            cursor.insert_here(50.0),
            Err(WeightError::WouldUnorder { index: 1, weight: 50.0 })
        );
        // Position and current element survive the rejection.
        assert_eq!(cursor.remove_current(), Ok(1.0));
        assert_eq!(list.as_slice(), &[2.0]);
    }

    #[test]
    fn cursor_at_validates_start() {
        let mut list = list_of(&[1.0, 2.0]);
        assert!(list.cursor_at(3).is_err());
        let mut cursor = list.cursor_at(2).unwrap();
        assert!(!cursor.has_next());
        assert_eq!(cursor.previous(), Ok(&2.0));
    }

    #[test]
    fn index_helpers_track_position() {
        let mut list = list_of(&[1.0, 2.0]);
        let mut cursor = list.cursor();
        assert_eq!(cursor.next_index(), 0);
        assert_eq!(cursor.previous_index(), None);
        assert!(cursor.has_next());
        assert!(!cursor.has_previous());
        let _ = cursor.next();
        assert_eq!(cursor.next_index(), 1);
        assert_eq!(cursor.previous_index(), Some(0));
        assert!(cursor.has_previous());
    }
}
