//! Growable list backed by a single contiguous buffer.
//!
//! This module provides [`ArrayList`], an index-addressable list that owns one
//! fixed-size block of slots and replaces it with a block twice as large whenever an
//! insertion would overflow it. Appends are amortized O(1); positional insertion and
//! removal shift the tail of the buffer and are O(n).

use std::fmt;
use std::num::NonZeroUsize;
use std::ops::{Index, IndexMut};

use tracing::{debug, trace};

use crate::error::IndexError;
use crate::generic::sequence::Sequence;

/// Capacity used by [`ArrayList::new`].
pub const DEFAULT_CAPACITY: usize = 4;

/// A growable list backed by a contiguous buffer.
///
/// # Examples
///
/// ```rust
/// use linear_collections::generic::array_list::ArrayList;
///
/// let mut list = ArrayList::new();
/// list.add("Milk");
/// list.add("Honey");
/// list.insert(1, "Fruits").unwrap();
///
/// assert_eq!(list.len(), 3);
/// assert_eq!(list.get(1), Ok(&"Fruits"));
/// assert_eq!(list.remove(&"Milk"), Some(0));
/// assert_eq!(list.index_of(&"Honey"), Some(1));
/// ```
///
/// # Memory Layout
///
/// Slots `0..len` always hold an element. Slots `len..capacity` hold `None`; they are
/// never read through the public API and removals clear the slot they vacate so the
/// list does not keep dropped elements alive. Capacity only grows: removals never
/// shrink the buffer, and [`clear`](ArrayList::clear) swaps in a fresh buffer of the
/// initial capacity.
#[derive(Clone)]
pub struct ArrayList<T> {
    items: Box<[Option<T>]>,
    len: usize,
    initial_capacity: usize,
}

/// Allocates `capacity` empty slots.
fn allocate<T>(capacity: usize) -> Box<[Option<T>]> {
    std::iter::repeat_with(|| None).take(capacity).collect()
}

impl<T> Default for ArrayList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> ArrayList<T> {
    /// Creates an empty list with [`DEFAULT_CAPACITY`] slots.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use linear_collections::generic::array_list::{ArrayList, DEFAULT_CAPACITY};
    ///
    /// let list: ArrayList<u32> = ArrayList::new();
    /// assert!(list.is_empty());
    /// assert_eq!(list.capacity(), DEFAULT_CAPACITY);
    /// ```
    pub fn new() -> Self {
        Self {
            items: allocate(DEFAULT_CAPACITY),
            len: 0,
            initial_capacity: DEFAULT_CAPACITY,
        }
    }

    /// Creates an empty list with room for `capacity` elements before the first growth.
    ///
    /// The same capacity is restored by [`clear`](ArrayList::clear).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use std::num::NonZeroUsize;
    /// use linear_collections::generic::array_list::ArrayList;
    ///
    /// let list: ArrayList<u32> = ArrayList::with_capacity(NonZeroUsize::new(16).unwrap());
    /// assert_eq!(list.capacity(), 16);
    /// ```
    pub fn with_capacity(capacity: NonZeroUsize) -> Self {
        let capacity = capacity.get();
        Self {
            items: allocate(capacity),
            len: 0,
            initial_capacity: capacity,
        }
    }

    /// Returns the number of elements in the list.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the list contains no elements.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the number of slots in the backing buffer.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use linear_collections::generic::array_list::ArrayList;
    ///
    /// let mut list = ArrayList::new();
    /// for i in 0..5 {
    ///     list.add(i);
    /// }
    /// assert_eq!(list.capacity(), 8);
    /// ```
    pub fn capacity(&self) -> usize {
        self.items.len()
    }

    /// Doubles the buffer if it has no free slot left.
    fn grow_if_full(&mut self) {
        if self.len < self.items.len() {
            return;
        }

        let old_capacity = self.items.len();
        let new_capacity = old_capacity * 2;
        let mut extended = allocate(new_capacity);
        for (dst, src) in extended.iter_mut().zip(self.items[..self.len].iter_mut()) {
            *dst = src.take();
        }
        self.items = extended;

        trace!(old_capacity, new_capacity, "array list grew");
    }

    fn slots(&self) -> &[Option<T>] {
        &self.items[..self.len]
    }

    fn slots_mut(&mut self) -> &mut [Option<T>] {
        &mut self.items[..self.len]
    }

    /// Appends an element to the back of the list, growing the buffer if needed.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use linear_collections::generic::array_list::ArrayList;
    ///
    /// let mut list = ArrayList::new();
    /// list.add(1);
    /// list.add(2);
    /// assert_eq!(list.len(), 2);
    /// ```
    pub fn add(&mut self, item: T) {
        self.grow_if_full();
        self.items[self.len] = Some(item);
        self.len += 1;
    }

    /// Inserts an element at `index`, shifting `index..len` one slot to the right.
    ///
    /// `index == len` appends.
    ///
    /// # Errors
    ///
    /// Returns [`IndexError`] if `index > len`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use linear_collections::generic::array_list::ArrayList;
    ///
    /// let mut list: ArrayList<u32> = [1, 3].into_iter().collect();
    /// list.insert(1, 2).unwrap();
    /// list.insert(3, 4).unwrap();
    /// assert!(list.insert(9, 5).is_err());
    /// assert_eq!(list.iter().copied().collect::<Vec<_>>(), vec![1, 2, 3, 4]);
    /// ```
    pub fn insert(&mut self, index: usize, item: T) -> Result<(), IndexError> {
        IndexError::check_insert(index, self.len)?;

        self.grow_if_full();
        let len = self.len;
        self.items[len] = Some(item);
        // Block move: the new element travels from the end down to `index`.
        self.items[index..=len].rotate_right(1);
        self.len += 1;

        Ok(())
    }

    /// Removes every element and swaps in a fresh buffer of the initial capacity.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use linear_collections::generic::array_list::ArrayList;
    ///
    /// let mut list: ArrayList<u32> = (0..10).collect();
    /// list.clear();
    /// assert!(list.is_empty());
    /// assert_eq!(list.capacity(), 4);
    /// ```
    pub fn clear(&mut self) {
        debug!(
            dropped = self.len,
            capacity = self.initial_capacity,
            "array list cleared"
        );
        self.items = allocate(self.initial_capacity);
        self.len = 0;
    }

    /// Returns a reference to the element at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`IndexError`] if `index >= len`.
    pub fn get(&self, index: usize) -> Result<&T, IndexError> {
        self.slots()
            .get(index)
            .and_then(Option::as_ref)
            .ok_or(IndexError {
                index,
                len: self.len,
            })
    }

    /// Returns a mutable reference to the element at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`IndexError`] if `index >= len`.
    pub fn get_mut(&mut self, index: usize) -> Result<&mut T, IndexError> {
        let len = self.len;
        self.slots_mut()
            .get_mut(index)
            .and_then(Option::as_mut)
            .ok_or(IndexError { index, len })
    }

    /// Overwrites the element at `index` in place, returning the previous value.
    ///
    /// # Errors
    ///
    /// Returns [`IndexError`] if `index >= len`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use linear_collections::generic::array_list::ArrayList;
    ///
    /// let mut list: ArrayList<&str> = ["Water"].into_iter().collect();
    /// assert_eq!(list.set(0, "Beer"), Ok("Water"));
    /// assert_eq!(list[0], "Beer");
    /// ```
    pub fn set(&mut self, index: usize, item: T) -> Result<T, IndexError> {
        self.get_mut(index)
            .map(|slot| std::mem::replace(slot, item))
    }

    /// Removes and returns the element at `index`, shifting later elements left.
    ///
    /// The vacated last slot is cleared; capacity is unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`IndexError`] if `index >= len`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use linear_collections::generic::array_list::ArrayList;
    ///
    /// let mut list: ArrayList<u32> = [10, 20, 30].into_iter().collect();
    /// assert_eq!(list.remove_at(0), Ok(10));
    /// assert_eq!(list.get(0), Ok(&20));
    /// assert!(list.remove_at(2).is_err());
    /// ```
    pub fn remove_at(&mut self, index: usize) -> Result<T, IndexError> {
        let len = self.len;
        let item = self
            .slots_mut()
            .get_mut(index)
            .and_then(Option::take)
            .ok_or(IndexError { index, len })?;

        // The emptied slot rotates to the end of the valid range.
        self.items[index..len].rotate_left(1);
        self.len -= 1;

        Ok(item)
    }

    /// Returns the position of the first element equal to `item`.
    ///
    /// Only the `len` valid slots are searched.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use linear_collections::generic::array_list::ArrayList;
    ///
    /// let list: ArrayList<&str> = ["Milk", "Beer"].into_iter().collect();
    /// assert_eq!(list.index_of(&"Beer"), Some(1));
    /// assert_eq!(list.index_of(&"Bread"), None);
    /// ```
    pub fn index_of<Q>(&self, item: &Q) -> Option<usize>
    where
        T: PartialEq<Q>,
        Q: ?Sized,
    {
        self.iter().position(|i| i == item)
    }

    /// Returns `true` if some element equals `item`.
    pub fn contains<Q>(&self, item: &Q) -> bool
    where
        T: PartialEq<Q>,
        Q: ?Sized,
    {
        self.index_of(item).is_some()
    }

    /// Removes the first element equal to `item` and returns the position it held.
    ///
    /// Returns `None`, leaving the list untouched, if nothing matches.
    pub fn remove<Q>(&mut self, item: &Q) -> Option<usize>
    where
        T: PartialEq<Q>,
        Q: ?Sized,
    {
        let index = self.index_of(item)?;
        self.remove_at(index).ok()?;
        Some(index)
    }

    /// Returns an iterator over the elements in order.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            inner: self.slots().iter().flatten(),
        }
    }

    /// Returns a mutable iterator over the elements in order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use linear_collections::generic::array_list::ArrayList;
    ///
    /// let mut list: ArrayList<u32> = [1, 2].into_iter().collect();
    /// for item in list.iter_mut() {
    ///     *item *= 10;
    /// }
    /// assert_eq!(list.iter().copied().collect::<Vec<_>>(), vec![10, 20]);
    /// ```
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        IterMut {
            inner: self.slots_mut().iter_mut().flatten(),
        }
    }
}

/// Borrowing iterator returned by [`ArrayList::iter`].
pub struct Iter<'a, T> {
    inner: std::iter::Flatten<std::slice::Iter<'a, Option<T>>>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }
}

/// Mutable iterator returned by [`ArrayList::iter_mut`].
pub struct IterMut<'a, T> {
    inner: std::iter::Flatten<std::slice::IterMut<'a, Option<T>>>,
}

impl<'a, T> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }
}

/// Owning iterator returned by [`ArrayList::into_iter`].
pub struct IntoIter<T> {
    inner: std::iter::Flatten<std::vec::IntoIter<Option<T>>>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }
}

impl<T> IntoIterator for ArrayList<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter {
            inner: self.items.into_vec().into_iter().flatten(),
        }
    }
}

impl<'a, T> IntoIterator for &'a ArrayList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut ArrayList<T> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

impl<T> FromIterator<T> for ArrayList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        list.extend(iter);
        list
    }
}

impl<T> Extend<T> for ArrayList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.add(item);
        }
    }
}

impl<T> Index<usize> for ArrayList<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        match self.get(index) {
            Ok(item) => item,
            Err(err) => panic!("{err}"),
        }
    }
}

impl<T> IndexMut<usize> for ArrayList<T> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        match self.get_mut(index) {
            Ok(item) => item,
            Err(err) => panic!("{err}"),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for ArrayList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: PartialEq> PartialEq for ArrayList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for ArrayList<T> {}

impl<T> Sequence<T> for ArrayList<T> {
    fn len(&self) -> usize {
        self.len
    }

    fn get(&self, index: usize) -> Result<&T, IndexError> {
        self.get(index)
    }

    fn set(&mut self, index: usize, item: T) -> Result<T, IndexError> {
        self.set(index, item)
    }

    fn add(&mut self, item: T) {
        self.add(item)
    }

    fn insert(&mut self, index: usize, item: T) -> Result<(), IndexError> {
        self.insert(index, item)
    }

    fn remove_at(&mut self, index: usize) -> Result<T, IndexError> {
        self.remove_at(index)
    }

    fn index_of(&self, item: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        self.index_of(item)
    }

    fn clear(&mut self) {
        self.clear()
    }
}
