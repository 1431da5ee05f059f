//! Singly-linked list with O(1) append.
//!
//! This module provides [`LinkedList`], an index-addressable list whose elements live
//! in individually allocated nodes chained head to tail. Each node is owned by the
//! link that points at it (the list's `head`, or its predecessor's `next`); the list
//! additionally keeps a non-owning alias to the last node so appends never walk the
//! chain.
//!
//! All structural changes go through two primitives, `link_after` and `unlink_after`,
//! which are the only places that touch `head`, `tail` and `len` together.

use std::fmt;
use std::marker::PhantomData;
use std::ops::{Index, IndexMut};
use std::ptr::NonNull;

use tracing::debug;

use crate::error::IndexError;
use crate::generic::sequence::Sequence;

struct Node<T> {
    value: T,
    next: Option<NonNull<Node<T>>>,
}

/// A singly-linked list with a tail reference for constant-time append.
///
/// Positional access walks the chain from the head, so `get`, `set`, `insert` and
/// `remove_at` cost O(index). Appending, reading the first or last element, and
/// unlinking a node once its predecessor is known are O(1).
///
/// # Examples
///
/// ```rust
/// use linear_collections::generic::linked_list::LinkedList;
///
/// let mut list = LinkedList::new();
/// list.add("Honey");
/// list.add("Olives");
/// list.add("Water");
///
/// assert_eq!(list.remove_at(0), Ok("Honey"));
/// assert_eq!(list.first(), Some(&"Olives"));
/// assert_eq!(list.last(), Some(&"Water"));
/// assert_eq!(list.index_of(&"Water"), Some(1));
/// ```
pub struct LinkedList<T> {
    head: Option<NonNull<Node<T>>>,
    tail: Option<NonNull<Node<T>>>,
    len: usize,
    marker: PhantomData<Box<Node<T>>>,
}

// SAFETY: the list exclusively owns every node reachable from `head`; `tail` only ever
// aliases one of them. Moving or sharing the list is equivalent to moving or sharing
// the `T` values it holds.
unsafe impl<T: Send> Send for LinkedList<T> {}
unsafe impl<T: Sync> Sync for LinkedList<T> {}

impl<T> Default for LinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> LinkedList<T> {
    /// Creates an empty list.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use linear_collections::generic::linked_list::LinkedList;
    ///
    /// let list: LinkedList<u32> = LinkedList::new();
    /// assert!(list.is_empty());
    /// assert_eq!(list.first(), None);
    /// ```
    pub fn new() -> Self {
        Self {
            head: None,
            tail: None,
            len: 0,
            marker: PhantomData,
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

    /// Returns the first element, or `None` if the list is empty.
    pub fn first(&self) -> Option<&T> {
        // SAFETY: `head` is either `None` or a live node owned by this list.
        self.head.map(|node| unsafe { &(*node.as_ptr()).value })
    }

    /// Returns the last element, or `None` if the list is empty.
    pub fn last(&self) -> Option<&T> {
        // SAFETY: `tail` is either `None` or a live node owned by this list.
        self.tail.map(|node| unsafe { &(*node.as_ptr()).value })
    }

    /// Follows `next` links from the head exactly `index` times.
    fn node_at(&self, index: usize) -> Option<NonNull<Node<T>>> {
        let mut current = self.head;
        for _ in 0..index {
            // SAFETY: every link reachable from `head` points at a live node.
            current = unsafe { current?.as_ref().next };
        }
        current
    }

    /// Returns the node whose `next` link owns position `index`, or `None` for the head.
    fn predecessor_of(&self, index: usize) -> Result<Option<NonNull<Node<T>>>, IndexError> {
        match index {
            0 => Ok(None),
            _ if index == self.len => Ok(self.tail),
            _ => self
                .node_at(index - 1)
                .map(Some)
                .ok_or(IndexError {
                    index,
                    len: self.len,
                }),
        }
    }

    /// Allocates a node for `value` and links it after `predecessor`, or at the head.
    ///
    /// `tail` moves to the new node when nothing follows it.
    fn link_after(&mut self, predecessor: Option<NonNull<Node<T>>>, value: T) {
        let next = match predecessor {
            // SAFETY: a predecessor handed to this function is a live node of this list.
            Some(pred) => unsafe { pred.as_ref().next },
            None => self.head,
        };

        let node = NonNull::from(Box::leak(Box::new(Node { value, next })));

        match predecessor {
            // SAFETY: as above; `&mut self` guarantees no other access to the chain.
            Some(pred) => unsafe { (*pred.as_ptr()).next = Some(node) },
            None => self.head = Some(node),
        }
        if next.is_none() {
            self.tail = Some(node);
        }
        self.len += 1;
    }

    /// Unlinks the node after `predecessor` (or the head), frees it and returns its value.
    ///
    /// The tail is corrected against the identity of the removed node, independently of
    /// whether the head or a predecessor link was rewritten, because a single-element
    /// list removes a node that is both.
    fn unlink_after(&mut self, predecessor: Option<NonNull<Node<T>>>) -> Option<T> {
        let target = match predecessor {
            // SAFETY: a predecessor handed to this function is a live node of this list.
            Some(pred) => unsafe { pred.as_ref().next },
            None => self.head,
        }?;

        // SAFETY: `target` was allocated by `link_after` through `Box::leak` and is only
        // reachable through the link rewritten below, so ownership returns to this box.
        let node = unsafe { Box::from_raw(target.as_ptr()) };

        self.len -= 1;
        if self.len == 0 {
            self.head = None;
            self.tail = None;
        } else {
            match predecessor {
                // SAFETY: as above.
                Some(pred) => unsafe { (*pred.as_ptr()).next = node.next },
                None => self.head = node.next,
            }
        }
        if self.tail == Some(target) {
            self.tail = predecessor;
        }

        Some(node.value)
    }

    /// Appends an element after the current tail.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use linear_collections::generic::linked_list::LinkedList;
    ///
    /// let mut list = LinkedList::new();
    /// list.add(1);
    /// list.add(2);
    /// assert_eq!(list.len(), 2);
    /// assert_eq!(list.last(), Some(&2));
    /// ```
    pub fn add(&mut self, item: T) {
        self.link_after(self.tail, item);
    }

    /// Inserts an element at `index`, so that it is reached after `index` links.
    ///
    /// `index == 0` and `index == len` are O(1); other positions walk the chain.
    ///
    /// # Errors
    ///
    /// Returns [`IndexError`] if `index > len`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use linear_collections::generic::linked_list::LinkedList;
    ///
    /// let mut list: LinkedList<u32> = [1, 3].into_iter().collect();
    /// list.insert(1, 2).unwrap();
    /// list.insert(0, 0).unwrap();
    /// assert!(list.insert(5, 9).is_err());
    /// assert_eq!(list.iter().copied().collect::<Vec<_>>(), vec![0, 1, 2, 3]);
    /// ```
    pub fn insert(&mut self, index: usize, item: T) -> Result<(), IndexError> {
        IndexError::check_insert(index, self.len)?;
        let predecessor = self.predecessor_of(index)?;
        self.link_after(predecessor, item);
        Ok(())
    }

    /// Removes every element, freeing each node.
    pub fn clear(&mut self) {
        let dropped = self.len;
        while self.unlink_after(None).is_some() {}
        debug!(dropped, "linked list cleared");
    }

    /// Returns a reference to the element at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`IndexError`] if `index >= len`.
    pub fn get(&self, index: usize) -> Result<&T, IndexError> {
        IndexError::check_element(index, self.len)?;
        self.node_at(index)
            // SAFETY: the node is live for as long as `self` is borrowed.
            .map(|node| unsafe { &(*node.as_ptr()).value })
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
        IndexError::check_element(index, self.len)?;
        self.node_at(index)
            // SAFETY: the node is live, and `&mut self` makes this the only access to it.
            .map(|node| unsafe { &mut (*node.as_ptr()).value })
            .ok_or(IndexError {
                index,
                len: self.len,
            })
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
    /// use linear_collections::generic::linked_list::LinkedList;
    ///
    /// let mut list: LinkedList<&str> = ["Honey", "Water"].into_iter().collect();
    /// assert_eq!(list.set(1, "Beer"), Ok("Water"));
    /// assert_eq!(list.last(), Some(&"Beer"));
    /// ```
    pub fn set(&mut self, index: usize, item: T) -> Result<T, IndexError> {
        self.get_mut(index)
            .map(|slot| std::mem::replace(slot, item))
    }

    /// Removes and returns the element at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`IndexError`] if `index >= len`.
    pub fn remove_at(&mut self, index: usize) -> Result<T, IndexError> {
        IndexError::check_element(index, self.len)?;
        let err = IndexError {
            index,
            len: self.len,
        };
        let predecessor = match index {
            0 => None,
            _ => Some(self.node_at(index - 1).ok_or(err)?),
        };
        self.unlink_after(predecessor).ok_or(err)
    }

    /// Removes the first element equal to `item` and returns the position it held.
    ///
    /// Returns `None`, leaving the list untouched, if nothing matches.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use linear_collections::generic::linked_list::LinkedList;
    ///
    /// let mut list: LinkedList<Option<&str>> = [Some("Water"), None, Some("Beer")]
    ///     .into_iter()
    ///     .collect();
    /// let absent: Option<&str> = None;
    /// assert_eq!(list.remove(&absent), Some(1));
    /// assert_eq!(list.remove(&absent), None);
    /// assert_eq!(list.len(), 2);
    /// ```
    pub fn remove<Q>(&mut self, item: &Q) -> Option<usize>
    where
        T: PartialEq<Q>,
        Q: ?Sized,
    {
        let mut predecessor = None;
        let mut current = self.head;
        let mut index = 0;

        while let Some(node) = current {
            // SAFETY: every link reachable from `head` points at a live node.
            let node = unsafe { node.as_ref() };
            if &node.value == item {
                self.unlink_after(predecessor);
                return Some(index);
            }
            predecessor = current;
            current = node.next;
            index += 1;
        }

        None
    }

    /// Returns the position of the first element equal to `item`.
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

    /// Returns an iterator over the elements from head to tail.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            next: self.head,
            remaining: self.len,
            marker: PhantomData,
        }
    }

    /// Returns a mutable iterator over the elements from head to tail.
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        IterMut {
            next: self.head,
            remaining: self.len,
            marker: PhantomData,
        }
    }
}

impl<T> Drop for LinkedList<T> {
    fn drop(&mut self) {
        // Iterative, so long chains never recurse through nested node drops.
        while self.unlink_after(None).is_some() {}
    }
}

/// Borrowing iterator returned by [`LinkedList::iter`].
pub struct Iter<'a, T> {
    next: Option<NonNull<Node<T>>>,
    remaining: usize,
    marker: PhantomData<&'a Node<T>>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.next.map(|node| {
            // SAFETY: the list is borrowed for `'a`, so the node outlives the reference.
            let node = unsafe { &*node.as_ptr() };
            self.next = node.next;
            self.remaining -= 1;
            &node.value
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

/// Mutable iterator returned by [`LinkedList::iter_mut`].
pub struct IterMut<'a, T> {
    next: Option<NonNull<Node<T>>>,
    remaining: usize,
    marker: PhantomData<&'a mut Node<T>>,
}

impl<'a, T> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;

    fn next(&mut self) -> Option<Self::Item> {
        self.next.map(|node| {
            // SAFETY: the list is mutably borrowed for `'a` and each node is yielded once.
            let node = unsafe { &mut *node.as_ptr() };
            self.next = node.next;
            self.remaining -= 1;
            &mut node.value
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for IterMut<'_, T> {}

/// Owning iterator returned by [`LinkedList::into_iter`].
pub struct IntoIter<T> {
    list: LinkedList<T>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.list.unlink_after(None)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.list.len, Some(self.list.len))
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> IntoIterator for LinkedList<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter { list: self }
    }
}

impl<'a, T> IntoIterator for &'a LinkedList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut LinkedList<T> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

impl<T> FromIterator<T> for LinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        list.extend(iter);
        list
    }
}

impl<T> Extend<T> for LinkedList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.add(item);
        }
    }
}

impl<T: Clone> Clone for LinkedList<T> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

impl<T> Index<usize> for LinkedList<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        match self.get(index) {
            Ok(item) => item,
            Err(err) => panic!("{err}"),
        }
    }
}

impl<T> IndexMut<usize> for LinkedList<T> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        match self.get_mut(index) {
            Ok(item) => item,
            Err(err) => panic!("{err}"),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for LinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: PartialEq> PartialEq for LinkedList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for LinkedList<T> {}

impl<T> Sequence<T> for LinkedList<T> {
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

    fn remove(&mut self, item: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        // Single pass: the default would walk the chain twice.
        self.remove(item)
    }

    fn clear(&mut self) {
        self.clear()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Walks the chain and checks the head/tail/len invariants.
    fn assert_links<T>(list: &LinkedList<T>) {
        assert_eq!(list.head.is_none(), list.len == 0);
        assert_eq!(list.tail.is_none(), list.len == 0);

        let mut last = None;
        let mut current = list.head;
        let mut count = 0;
        while let Some(node) = current {
            last = Some(node);
            current = unsafe { node.as_ref().next };
            count += 1;
            assert!(count <= list.len, "chain longer than len");
        }
        assert_eq!(count, list.len);
        assert_eq!(last, list.tail);
    }

    fn contents<T: Clone>(list: &LinkedList<T>) -> Vec<T> {
        list.iter().cloned().collect()
    }

    #[test]
    fn test_default_is_empty() {
        let list = LinkedList::<u32>::default();
        assert_eq!(list.len(), 0);
        assert!(list.is_empty());
        assert_eq!(list.last(), None);
        assert_links(&list);
    }

    #[test]
    fn test_add_links_after_tail() {
        let mut list = LinkedList::new();
        for i in 0..5u32 {
            list.add(i);
            assert_links(&list);
        }
        assert_eq!(contents(&list), vec![0, 1, 2, 3, 4]);
        assert_eq!(list.first(), Some(&0));
        assert_eq!(list.last(), Some(&4));
    }

    #[test]
    fn test_get_and_set() {
        let mut list: LinkedList<&str> = ["a", "b", "c"].into_iter().collect();
        assert_eq!(list.get(2), Ok(&"c"));
        assert_eq!(list.set(1, "x"), Ok("b"));
        assert_eq!(contents(&list), vec!["a", "x", "c"]);
        assert_eq!(list.len(), 3);

        assert_eq!(list.get(3), Err(IndexError { index: 3, len: 3 }));
        assert_eq!(list.set(3, "y"), Err(IndexError { index: 3, len: 3 }));
        assert_eq!(contents(&list), vec!["a", "x", "c"]);
    }

    #[test]
    fn test_insert_positions() {
        let mut list: LinkedList<u32> = LinkedList::new();
        list.insert(0, 2).unwrap();
        assert_links(&list);
        list.insert(0, 0).unwrap();
        list.insert(1, 1).unwrap();
        list.insert(3, 3).unwrap();
        assert_links(&list);
        assert_eq!(contents(&list), vec![0, 1, 2, 3]);
        assert_eq!(list.last(), Some(&3));

        assert_eq!(list.insert(5, 9), Err(IndexError { index: 5, len: 4 }));
        assert_eq!(contents(&list), vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_remove_at_head_middle_tail() {
        let mut list: LinkedList<u32> = (0..5).collect();

        assert_eq!(list.remove_at(0), Ok(0));
        assert_links(&list);
        assert_eq!(list.remove_at(1), Ok(2));
        assert_links(&list);
        assert_eq!(list.remove_at(2), Ok(4));
        assert_links(&list);
        assert_eq!(list.last(), Some(&3));
        assert_eq!(contents(&list), vec![1, 3]);

        list.add(5);
        assert_eq!(contents(&list), vec![1, 3, 5]);
        assert_links(&list);
    }

    #[test]
    fn test_remove_at_out_of_range_leaves_list_unchanged() {
        let mut list: LinkedList<u32> = (0..3).collect();
        assert_eq!(list.remove_at(3), Err(IndexError { index: 3, len: 3 }));
        assert_eq!(contents(&list), vec![0, 1, 2]);
        assert_links(&list);
    }

    #[test]
    fn test_single_element_removal_resets_head_and_tail() {
        let mut list = LinkedList::new();
        list.add("Milk");
        assert_eq!(list.remove(&"Milk"), Some(0));
        assert!(list.is_empty());
        assert_links(&list);

        list.add("Honey");
        assert_eq!(list.first(), Some(&"Honey"));
        assert_eq!(list.last(), Some(&"Honey"));
        assert_links(&list);

        assert_eq!(list.remove_at(0), Ok("Honey"));
        assert_links(&list);
    }

    #[test]
    fn test_remove_tail_by_value_moves_tail_back() {
        let mut list: LinkedList<u32> = (0..3).collect();
        assert_eq!(list.remove(&2), Some(2));
        assert_eq!(list.last(), Some(&1));
        assert_links(&list);
        list.add(7);
        assert_eq!(contents(&list), vec![0, 1, 7]);
    }

    #[test]
    fn test_remove_missing_leaves_list_unchanged() {
        let mut list: LinkedList<u32> = (0..3).collect();
        assert_eq!(list.remove(&9), None);
        assert_eq!(list.index_of(&9), None);
        assert!(!list.contains(&9));
        assert_eq!(contents(&list), vec![0, 1, 2]);
        assert_links(&list);
    }

    #[test]
    fn test_shopping_scenario_with_absent_item() {
        let absent: Option<&str> = None;
        let mut list: LinkedList<Option<&str>> = LinkedList::new();

        list.add(Some("Milk"));
        assert_eq!(list.remove(&Some("Milk")), Some(0));
        list.add(Some("Honey"));
        list.add(Some("Olives"));
        list.add(Some("Water"));
        list[2] = Some("A lot of Water");
        list.add(Some("Fruits"));
        assert_eq!(list.remove_at(0), Ok(Some("Honey")));
        assert_eq!(list.remove_at(2), Ok(Some("Fruits")));
        list.add(absent);
        list.add(Some("Beer"));
        assert_eq!(list.remove(&absent), Some(2));

        assert_eq!(
            contents(&list),
            vec![Some("Olives"), Some("A lot of Water"), Some("Beer")]
        );
        assert_eq!(list.index_of(&Some("Beer")), Some(2));
        assert_eq!(list.index_of(&Some("Water")), None);
        assert!(!list.contains(&Some("Bread")));
        assert_links(&list);
    }

    #[test]
    fn test_clear_then_reuse() {
        let mut list: LinkedList<String> = ["a", "b"].into_iter().map(String::from).collect();
        list.clear();
        assert!(list.is_empty());
        assert_links(&list);
        list.add("c".to_string());
        assert_eq!(contents(&list), vec!["c".to_string()]);
    }

    #[test]
    fn test_long_chain_drops_without_recursion() {
        let list: LinkedList<u64> = (0..200_000).collect();
        assert_eq!(list.len(), 200_000);
        drop(list);
    }

    #[test]
    fn test_iterators() {
        let mut list: LinkedList<u32> = (1..=3).collect();
        for item in &mut list {
            *item *= 2;
        }
        assert_eq!(list.iter().len(), 3);
        let owned: Vec<_> = list.clone().into_iter().collect();
        assert_eq!(owned, vec![2, 4, 6]);
        assert_eq!(format!("{list:?}"), "[2, 4, 6]");
    }

    #[test]
    fn test_partial_into_iter_frees_rest() {
        let list: LinkedList<String> = ["a", "b", "c"].into_iter().map(String::from).collect();
        let mut iter = list.into_iter();
        assert_eq!(iter.next(), Some("a".to_string()));
        assert_eq!(iter.len(), 2);
    }

    #[test]
    #[should_panic(expected = "Invalid index: 0 (len 0)")]
    fn test_index_operator_on_empty() {
        let list: LinkedList<u32> = LinkedList::new();
        let _ = list[0];
    }

    #[test]
    fn test_sequence_trait() {
        let mut list = LinkedList::<u8>::new();
        Sequence::add(&mut list, 1);
        Sequence::insert(&mut list, 0, 0).unwrap();
        assert_eq!(Sequence::remove(&mut list, &0), Some(0));
        assert_eq!(Sequence::get(&list, 0), Ok(&1));
        Sequence::clear(&mut list);
        assert!(Sequence::is_empty(&list));
        assert_links(&list);
    }
}
