//! Ordered sequence with O(1) push at either end and O(1) pop-front.
//!
//! Used for s-expression lists (where the compiler peels the head off a call
//! form with [`Sequence::take_front`]) and for evaluated argument lists.

use std::collections::vec_deque::{self, VecDeque};
use std::fmt;

/// Ordered sequence of `T`, iterated front to back.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Sequence<T> {
    items: VecDeque<T>,
}

impl<T> Sequence<T> {
    /// Create an empty sequence.
    #[inline]
    pub fn new() -> Self {
        Sequence {
            items: VecDeque::new(),
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[inline]
    pub fn front(&self) -> Option<&T> {
        self.items.front()
    }

    #[inline]
    pub fn back(&self) -> Option<&T> {
        self.items.back()
    }

    #[inline]
    pub fn push_front(&mut self, item: T) {
        self.items.push_front(item);
    }

    #[inline]
    pub fn push_back(&mut self, item: T) {
        self.items.push_back(item);
    }

    /// Remove and return the first element.
    ///
    /// Returns `None` on an empty sequence; callers that consider emptiness
    /// a precondition violation check [`is_empty`](Self::is_empty) first.
    #[inline]
    pub fn take_front(&mut self) -> Option<T> {
        self.items.pop_front()
    }

    /// Iterate front to back.
    #[inline]
    pub fn iter(&self) -> vec_deque::Iter<'_, T> {
        self.items.iter()
    }
}

impl<T> Default for Sequence<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for Sequence<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.items.iter()).finish()
    }
}

impl<T> FromIterator<T> for Sequence<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Sequence {
            items: iter.into_iter().collect(),
        }
    }
}

impl<T> Extend<T> for Sequence<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.items.extend(iter);
    }
}

impl<T> From<Vec<T>> for Sequence<T> {
    fn from(items: Vec<T>) -> Self {
        Sequence {
            items: items.into(),
        }
    }
}

impl<T> IntoIterator for Sequence<T> {
    type Item = T;
    type IntoIter = vec_deque::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Sequence<T> {
    type Item = &'a T;
    type IntoIter = vec_deque::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
