//! Common trait for ordered, index-addressable sequences.
//!
//! This module provides [`Sequence`], a trait that abstracts over the positional
//! operations shared by [`ArrayList`] and [`LinkedList`], so generic code can pick a
//! storage strategy purely on performance grounds. It is also implemented for `Vec`.
//!
//! [`ArrayList`]: crate::generic::array_list::ArrayList
//! [`LinkedList`]: crate::generic::linked_list::LinkedList

use crate::error::IndexError;

/// A trait for ordered sequences addressed by position.
///
/// # Examples
///
/// ```rust
/// use linear_collections::generic::{
///     array_list::ArrayList, linked_list::LinkedList, sequence::Sequence,
/// };
///
/// fn work_with_sequence<S: Sequence<&'static str>>(seq: &mut S) {
///     seq.add("Milk");
///     seq.add("Honey");
///     seq.insert(1, "Fruits").unwrap();
///     assert_eq!(seq.len(), 3);
///     assert_eq!(seq.index_of(&"Honey"), Some(2));
///     assert_eq!(seq.remove(&"Milk"), Some(0));
///     assert_eq!(seq.get(0), Ok(&"Fruits"));
/// }
///
/// work_with_sequence(&mut ArrayList::new());
/// work_with_sequence(&mut LinkedList::new());
/// work_with_sequence(&mut Vec::new());
/// ```
pub trait Sequence<T> {
    /// Returns the number of elements in the sequence.
    fn len(&self) -> usize;

    /// Returns `true` if the sequence contains no elements.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns a reference to the element at `index`.
    ///
    /// Returns [`IndexError`] unless `index < len()`.
    fn get(&self, index: usize) -> Result<&T, IndexError>;

    /// Replaces the element at `index`, returning the previous value.
    ///
    /// Returns [`IndexError`] unless `index < len()`.
    fn set(&mut self, index: usize, item: T) -> Result<T, IndexError>;

    /// Appends an element to the back of the sequence.
    fn add(&mut self, item: T);

    /// Inserts an element at `index`, shifting later elements back by one.
    ///
    /// Returns [`IndexError`] unless `index <= len()`.
    fn insert(&mut self, index: usize, item: T) -> Result<(), IndexError>;

    /// Removes and returns the element at `index`.
    ///
    /// Returns [`IndexError`] unless `index < len()`.
    fn remove_at(&mut self, index: usize) -> Result<T, IndexError>;

    /// Returns the position of the first element equal to `item`.
    fn index_of(&self, item: &T) -> Option<usize>
    where
        T: PartialEq;

    /// Returns `true` if some element equals `item`.
    fn contains(&self, item: &T) -> bool
    where
        T: PartialEq,
    {
        self.index_of(item).is_some()
    }

    /// Removes the first element equal to `item`, returning the position it held.
    ///
    /// The sequence is left unchanged when no element matches.
    fn remove(&mut self, item: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        let index = self.index_of(item)?;
        self.remove_at(index).ok()?;
        Some(index)
    }

    /// Removes every element.
    fn clear(&mut self);
}

/// Implementation for standard library [`Vec`].
///
/// Used as the reference model in property tests.
///
/// [`Vec`]: std::vec::Vec
impl<T> Sequence<T> for Vec<T> {
    fn len(&self) -> usize {
        self.len()
    }

    fn get(&self, index: usize) -> Result<&T, IndexError> {
        let len = self.len();
        self.as_slice()
            .get(index)
            .ok_or(IndexError { index, len })
    }

    fn set(&mut self, index: usize, item: T) -> Result<T, IndexError> {
        let len = self.len();
        let slot = self
            .as_mut_slice()
            .get_mut(index)
            .ok_or(IndexError { index, len })?;
        Ok(std::mem::replace(slot, item))
    }

    fn add(&mut self, item: T) {
        self.push(item);
    }

    fn insert(&mut self, index: usize, item: T) -> Result<(), IndexError> {
        IndexError::check_insert(index, self.len())?;
        Vec::insert(self, index, item);
        Ok(())
    }

    fn remove_at(&mut self, index: usize) -> Result<T, IndexError> {
        IndexError::check_element(index, self.len())?;
        Ok(Vec::remove(self, index))
    }

    fn index_of(&self, item: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        self.iter().position(|i| i == item)
    }

    fn clear(&mut self) {
        Vec::clear(self);
    }
}
