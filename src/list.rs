//! A sequence kept continuously sorted by per-element weight.
//!
//! Each element's weight is computed once, on the way in, by the weight
//! function fixed at construction. The list maintains two parallel stores,
//! elements and weights, always the same length, with weights non-decreasing
//! and every weight inside the configured [`Bounds`]. Mutations validate
//! before touching either store, so a rejected call leaves the list exactly
//! as it was.
//!
//! Ties are FIFO-stable: a new element with a weight equal to stored ones
//! lands after them.

use std::cmp::Ordering;
use std::fmt;
use std::hash::Hash;

use rustc_hash::FxHashSet;
use smallvec::SmallVec;

use crate::bounds::Bounds;
use crate::cursor::Cursor;
use crate::error::WeightError;

pub struct WeightedList<E, W> {
    pub(crate) elements: Vec<E>,
    weights: Vec<f64>,
    bounds: Bounds,
    weight_fn: W,
    default_weight: f64,
}

impl<E, W: Fn(&E) -> f64> WeightedList<E, W> {
    /// An empty list with the given bounds and weight function.
    pub fn new(bounds: Bounds, weight_fn: W) -> WeightedList<E, W> {
        WeightedList::with_capacity(0, bounds, weight_fn)
    }

    /// An empty list with room for `capacity` elements in both stores.
    pub fn with_capacity(capacity: usize, bounds: Bounds, weight_fn: W) -> WeightedList<E, W> {
        WeightedList {
            elements: Vec::with_capacity(capacity),
            weights: Vec::with_capacity(capacity),
            bounds,
            weight_fn,
            default_weight: 0.0,
        }
    }

    /// Sets the weight reported by [`weight_of`](WeightedList::weight_of)
    /// when the element is absent. Defaults to `0.0`.
    pub fn with_default_weight(mut self, weight: f64) -> WeightedList<E, W> {
        self.default_weight = weight;
        self
    }

    /// Builds a list from pre-paired stores, validating every invariant
    /// eagerly: equal lengths, every weight in bounds, weights
    /// non-decreasing. Each violation reports a distinct error.
    pub fn from_parts(
        elements: Vec<E>,
        weights: Vec<f64>,
        bounds: Bounds,
        weight_fn: W,
    ) -> Result<WeightedList<E, W>, WeightError> {
        if elements.len() != weights.len() {
            return Err(WeightError::LengthMismatch {
                elements: elements.len(),
                weights: weights.len(),
            });
        }
        for (i, &weight) in weights.iter().enumerate() {
            if !bounds.contains(weight) {
                return Err(WeightError::OutOfBounds { weight, bounds });
            }
            if i > 0 && weight < weights[i - 1] {
                return Err(WeightError::WouldUnorder { index: i, weight });
            }
        }
        Ok(WeightedList { elements, weights, bounds, weight_fn, default_weight: 0.0 })
    }

    /// The smallest index whose stored weight exceeds `weight`, i.e. one
    /// past the last tie. Inserting here keeps ties FIFO-stable. O(log n).
    fn insert_index(&self, weight: f64) -> usize {
        self.weights.partition_point(|&stored| stored <= weight)
    }

    /// Whether a weight may be *inserted* at `index` without breaking
    /// order: at least the left neighbor, at most the element currently
    /// at `index`.
    fn fits_at(&self, index: usize, weight: f64) -> bool {
        (index == 0 || self.weights[index - 1] <= weight)
            && (index == self.len() || weight <= self.weights[index])
    }

    /// Full validation for inserting `weight` at `index`.
    fn check_insertion(&self, index: usize, weight: f64) -> Result<(), WeightError> {
        if !self.bounds.contains(weight) {
            return Err(WeightError::OutOfBounds { weight, bounds: self.bounds });
        }
        if !self.fits_at(index, weight) {
            return Err(WeightError::WouldUnorder { index, weight });
        }
        Ok(())
    }

    /// Full validation for *replacing* the element at `index` with one of
    /// the given weight: the neighbors are the slots on either side of the
    /// replaced element.
    fn check_replacement(&self, index: usize, weight: f64) -> Result<(), WeightError> {
        if !self.bounds.contains(weight) {
            return Err(WeightError::OutOfBounds { weight, bounds: self.bounds });
        }
        let ordered = (index == 0 || self.weights[index - 1] <= weight)
            && (index + 1 >= self.len() || weight <= self.weights[index + 1]);
        if !ordered {
            return Err(WeightError::WouldUnorder { index, weight });
        }
        Ok(())
    }

    /// Inserts `element` at its weight-sorted position. Returns `false`
    /// without mutating if the weight is out of bounds.
    pub fn push(&mut self, element: E) -> bool {
        let weight = (self.weight_fn)(&element);
        if !self.bounds.contains(weight) {
            return false;
        }
        let index = self.insert_index(weight);
        self.elements.insert(index, element);
        self.weights.insert(index, weight);
        true
    }

    /// Inserts `element` at exactly `index`. The index must lie in
    /// `0..=len`, the weight must be in bounds, and it must fit between
    /// the weights flanking `index`.
    pub fn insert(&mut self, index: usize, element: E) -> Result<(), WeightError> {
        if index > self.len() {
            return Err(WeightError::IndexOutOfRange { index, len: self.len() });
        }
        let weight = (self.weight_fn)(&element);
        self.check_insertion(index, weight)?;
        self.elements.insert(index, element);
        self.weights.insert(index, weight);
        Ok(())
    }

    /// Bulk insert of arbitrarily ordered elements. Elements whose weight
    /// is out of bounds are silently dropped. Survivors are stable-sorted
    /// by weight and merged with the existing run in O(m log m + n),
    /// existing elements winning ties. Returns `true` iff anything was
    /// inserted.
    pub fn extend_with<I: IntoIterator<Item = E>>(&mut self, elements: I) -> bool {
        let mut incoming: Vec<(E, f64)> = elements
            .into_iter()
            .map(|element| {
                let weight = (self.weight_fn)(&element);
                (element, weight)
            })
            .filter(|(_, weight)| self.bounds.contains(*weight))
            .collect();
        if incoming.is_empty() {
            return false;
        }
        incoming.sort_by(|a, b| a.1.total_cmp(&b.1));

        let old_elements = std::mem::take(&mut self.elements);
        let old_weights = std::mem::take(&mut self.weights);
        self.elements.reserve(old_elements.len() + incoming.len());
        self.weights.reserve(old_weights.len() + incoming.len());

        let mut old = old_elements.into_iter().zip(old_weights).peekable();
        let mut new = incoming.into_iter().peekable();
        loop {
            let take_new = match (old.peek(), new.peek()) {
                (Some((_, stored)), Some((_, fresh))) => fresh < stored,
                (None, Some(_)) => true,
                (Some(_), None) => false,
                (None, None) => break,
            };
            let next = if take_new { new.next() } else { old.next() };
            if let Some((element, weight)) = next {
                self.elements.push(element);
                self.weights.push(weight);
            }
        }
        true
    }

    /// Splices a whole block in at `index`, all-or-nothing.
    ///
    /// A bad `index` is a hard error. Everything else is soft: if any
    /// block weight is out of bounds, the block's own weights are not
    /// non-decreasing, or the block does not fit between the flanking
    /// stored weights, the call returns `Ok(false)` and the list is
    /// untouched. An empty block changes nothing and reports `Ok(false)`.
    pub fn insert_block_at(&mut self, index: usize, block: Vec<E>) -> Result<bool, WeightError> {
        if index > self.len() {
            return Err(WeightError::IndexOutOfRange { index, len: self.len() });
        }
        if block.is_empty() {
            return Ok(false);
        }
        let mut block_weights: SmallVec<[f64; 8]> = SmallVec::with_capacity(block.len());
        for element in &block {
            block_weights.push((self.weight_fn)(element));
        }
        if !self.block_fits(index, &block_weights) {
            return Ok(false);
        }
        self.elements.splice(index..index, block);
        self.weights.splice(index..index, block_weights);
        Ok(true)
    }

    /// Clone-and-insert a sub-range of `slice` as a block at `index`.
    /// An `offset`/`len` pair that overruns the slice is its own error,
    /// distinct from both the index error and the soft ordering failures.
    pub fn insert_slice_at(
        &mut self,
        index: usize,
        slice: &[E],
        offset: usize,
        len: usize,
    ) -> Result<bool, WeightError>
    where
        E: Clone,
    {
        if index > self.len() {
            return Err(WeightError::IndexOutOfRange { index, len: self.len() });
        }
        let end = offset
            .checked_add(len)
            .filter(|&end| end <= slice.len())
            .ok_or(WeightError::SliceOutOfRange { offset, len, slice_len: slice.len() })?;
        self.insert_block_at(index, slice[offset..end].to_vec())
    }

    fn block_fits(&self, index: usize, block_weights: &[f64]) -> bool {
        for (i, &weight) in block_weights.iter().enumerate() {
            if !self.bounds.contains(weight) {
                return false;
            }
            if i > 0 && weight < block_weights[i - 1] {
                return false;
            }
        }
        match (block_weights.first(), block_weights.last()) {
            (Some(&first), Some(&last)) => {
                (index == 0 || self.weights[index - 1] <= first)
                    && (index == self.len() || last <= self.weights[index])
            }
            _ => true,
        }
    }

    /// Replaces the element at `index`, returning the one it displaces.
    /// The new weight must be in bounds and lie between the weights of the
    /// replaced slot's neighbors.
    pub fn set(&mut self, index: usize, element: E) -> Result<E, WeightError> {
        if index >= self.len() {
            return Err(WeightError::IndexOutOfRange { index, len: self.len() });
        }
        let weight = (self.weight_fn)(&element);
        self.check_replacement(index, weight)?;
        self.weights[index] = weight;
        Ok(std::mem::replace(&mut self.elements[index], element))
    }

    /// Maps every element through `transform`, all-or-nothing: the full
    /// candidate stores are built and validated first, and nothing is
    /// committed unless every new weight is in bounds and the whole new
    /// weight sequence is non-decreasing.
    pub fn replace_all<T: FnMut(&E) -> E>(&mut self, mut transform: T) -> Result<(), WeightError> {
        let mut new_elements = Vec::with_capacity(self.len());
        let mut new_weights: Vec<f64> = Vec::with_capacity(self.len());
        for element in &self.elements {
            let replacement = transform(element);
            let weight = (self.weight_fn)(&replacement);
            if !self.bounds.contains(weight) {
                return Err(WeightError::OutOfBounds { weight, bounds: self.bounds });
            }
            if let Some(&previous) = new_weights.last() {
                if weight < previous {
                    return Err(WeightError::WouldUnorder { index: new_weights.len(), weight });
                }
            }
            new_elements.push(replacement);
            new_weights.push(weight);
        }
        self.elements = new_elements;
        self.weights = new_weights;
        Ok(())
    }

    /// Refused on principle: order here is a function of weight alone, so
    /// sorting by an arbitrary comparator is incoherent.
    pub fn sort_by<C: FnMut(&E, &E) -> Ordering>(
        &mut self,
        _compare: C,
    ) -> Result<(), WeightError> {
        Err(WeightError::Unsupported("order is determined by weight, not by comparator"))
    }

    /// A cursor positioned before the first element.
    pub fn cursor(&mut self) -> Cursor<'_, E, W> {
        Cursor::new(self, 0)
    }

    /// A cursor positioned so that its first `next` yields the element at
    /// `index`. `index == len` positions it past the end.
    pub fn cursor_at(&mut self, index: usize) -> Result<Cursor<'_, E, W>, WeightError> {
        if index > self.len() {
            return Err(WeightError::IndexOutOfRange { index, len: self.len() });
        }
        Ok(Cursor::new(self, index))
    }
}

/// Operations that never touch the weight function.
impl<E, W> WeightedList<E, W> {
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.elements.capacity()
    }

    pub fn get(&self, index: usize) -> Option<&E> {
        self.elements.get(index)
    }

    pub fn first(&self) -> Option<&E> {
        self.elements.first()
    }

    pub fn last(&self) -> Option<&E> {
        self.elements.last()
    }

    pub fn as_slice(&self) -> &[E] {
        &self.elements
    }

    /// The stored weights, index-aligned with the elements.
    pub fn weights(&self) -> &[f64] {
        &self.weights
    }

    pub fn bounds(&self) -> &Bounds {
        &self.bounds
    }

    pub fn default_weight(&self) -> f64 {
        self.default_weight
    }

    pub fn iter(&self) -> std::slice::Iter<'_, E> {
        self.elements.iter()
    }

    pub fn contains(&self, element: &E) -> bool
    where
        E: PartialEq,
    {
        self.elements.contains(element)
    }

    /// Position of the first occurrence of `element`. O(n).
    pub fn index_of(&self, element: &E) -> Option<usize>
    where
        E: PartialEq,
    {
        self.elements.iter().position(|stored| stored == element)
    }

    /// The stored weight of the first occurrence of `key`, or the default
    /// missing weight if `key` is absent. O(n).
    pub fn weight_of(&self, key: &E) -> f64
    where
        E: PartialEq,
    {
        match self.index_of(key) {
            Some(index) => self.weights[index],
            None => self.default_weight,
        }
    }

    /// Removes the first occurrence of `element` and its weight.
    pub fn remove_value(&mut self, element: &E) -> bool
    where
        E: PartialEq,
    {
        match self.index_of(element) {
            Some(index) => {
                self.elements.remove(index);
                self.weights.remove(index);
                true
            }
            None => false,
        }
    }

    /// Removes and returns the element at `index`.
    pub fn remove_at(&mut self, index: usize) -> Result<E, WeightError> {
        if index >= self.len() {
            return Err(WeightError::IndexOutOfRange { index, len: self.len() });
        }
        self.weights.remove(index);
        Ok(self.elements.remove(index))
    }

    /// Removes every element matching `drop`. Returns whether anything
    /// was removed.
    pub fn remove_where<P: FnMut(&E) -> bool>(&mut self, mut drop: P) -> bool {
        self.compact(|element| !drop(element))
    }

    /// Removes every element that occurs in `elements`.
    pub fn remove_all(&mut self, elements: &[E]) -> bool
    where
        E: Eq + Hash,
    {
        let set: FxHashSet<&E> = elements.iter().collect();
        self.compact(|element| !set.contains(element))
    }

    /// Keeps only the elements that occur in `elements`.
    pub fn retain_all(&mut self, elements: &[E]) -> bool
    where
        E: Eq + Hash,
    {
        let set: FxHashSet<&E> = elements.iter().collect();
        self.compact(|element| set.contains(element))
    }

    /// One lockstep compaction pass over both stores: a write cursor
    /// trails a read cursor and surviving pairs slide down. `Vec::retain`
    /// cannot keep two stores aligned, hence the manual pass; no second
    /// buffer is allocated.
    fn compact<K: FnMut(&E) -> bool>(&mut self, mut keep: K) -> bool {
        let mut write = 0;
        for read in 0..self.elements.len() {
            if keep(&self.elements[read]) {
                if write != read {
                    self.elements.swap(write, read);
                    self.weights.swap(write, read);
                }
                write += 1;
            }
        }
        let changed = write != self.elements.len();
        self.elements.truncate(write);
        self.weights.truncate(write);
        changed
    }

    /// Shrink-only resize. Asking the list to grow is refused: there are
    /// no elements to grow it with.
    pub fn truncate(&mut self, new_len: usize) -> Result<(), WeightError> {
        if new_len > self.len() {
            return Err(WeightError::Unsupported("truncate cannot grow the list"));
        }
        self.elements.truncate(new_len);
        self.weights.truncate(new_len);
        Ok(())
    }

    /// Removes the range `from..to` from both stores. A no-op when
    /// `from == to`.
    pub fn remove_range(&mut self, from: usize, to: usize) -> Result<(), WeightError> {
        if from > to {
            return Err(WeightError::IndexOutOfRange { index: from, len: self.len() });
        }
        if to > self.len() {
            return Err(WeightError::IndexOutOfRange { index: to, len: self.len() });
        }
        self.elements.drain(from..to);
        self.weights.drain(from..to);
        Ok(())
    }

    pub fn clear(&mut self) {
        self.elements.clear();
        self.weights.clear();
    }
}

impl<E: fmt::Display, W> fmt::Display for WeightedList<E, W> {
    /// Renders `[e0(w0), e1(w1), ...]`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, (element, weight)) in self.elements.iter().zip(&self.weights).enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{element}({weight})")?;
        }
        write!(f, "]")
    }
}

impl<E: fmt::Debug, W> fmt::Debug for WeightedList<E, W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WeightedList")
            .field("elements", &self.elements)
            .field("weights", &self.weights)
            .field("bounds", &self.bounds)
            .finish()
    }
}

impl<E: PartialEq, W> PartialEq for WeightedList<E, W> {
    fn eq(&self, other: &Self) -> bool {
        self.elements == other.elements && self.weights == other.weights
    }
}

impl<E, W: Fn(&E) -> f64> Extend<E> for WeightedList<E, W> {
    /// Same filtering semantics as [`extend_with`](WeightedList::extend_with);
    /// the changed flag is discarded.
    fn extend<I: IntoIterator<Item = E>>(&mut self, iter: I) {
        self.extend_with(iter);
    }
}

impl<'a, E, W> IntoIterator for &'a WeightedList<E, W> {
    type Item = &'a E;
    type IntoIter = std::slice::Iter<'a, E>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.iter()
    }
}

impl<E, W> IntoIterator for WeightedList<E, W> {
    type Item = E;
    type IntoIter = std::vec::IntoIter<E>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.into_iter()
    }
}
