//! # Digit storage
//!
//! A growable, ordered sequence with value semantics. At most one element is stored inline; longer
//! sequences live in a reference counted array that is shared between copies until one of them is
//! written to.
//!
//! Without the `sync` feature the shared array is reference counted with `Rc`, so sequences (and
//! anything containing them) can't be sent across threads. With it, `Arc` is used.
use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::{Index, IndexMut};
use std::slice;

use itertools::repeat_n;
use log::trace;

#[cfg(not(feature = "sync"))]
type Shared<T> = std::rc::Rc<T>;
#[cfg(feature = "sync")]
type Shared<T> = std::sync::Arc<T>;

/// An ordered sequence of values with small size optimization and copy-on-write sharing.
///
/// Cloning is `O(1)`. Any operation taking `&mut self` first makes sure that the backing array is
/// not shared with another sequence, copying it if it is.
///
/// Once the sequence has grown beyond a single element, it stays backed by the shared array, also
/// when it shrinks again.
#[derive(Clone)]
pub struct DigitSequence<T> {
    storage: Storage<T>,
}

#[derive(Clone)]
enum Storage<T> {
    /// Zero or one element, no allocation.
    Inline(Option<T>),
    /// Any number of elements, possibly referenced by other sequences as well.
    Shared(Shared<Vec<T>>),
}

impl<T: Clone> DigitSequence<T> {
    /// Create a sequence of length one.
    pub fn new(value: T) -> Self {
        Self { storage: Storage::Inline(Some(value)) }
    }

    /// Number of elements.
    pub fn len(&self) -> usize {
        match &self.storage {
            Storage::Inline(slot) => slot.iter().len(),
            Storage::Shared(values) => values.len(),
        }
    }

    /// Whether there are no elements.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Whether the elements are stored inline, without a heap allocation.
    pub fn is_inline(&self) -> bool {
        matches!(self.storage, Storage::Inline(_))
    }

    /// Whether the backing array is currently referenced by more than one sequence.
    pub fn is_shared(&self) -> bool {
        match &self.storage {
            Storage::Inline(_) => false,
            Storage::Shared(values) => Shared::strong_count(values) > 1,
        }
    }

    /// All elements, front to back.
    pub fn as_slice(&self) -> &[T] {
        match &self.storage {
            Storage::Inline(None) => &[],
            Storage::Inline(Some(value)) => slice::from_ref(value),
            Storage::Shared(values) => values.as_slice(),
        }
    }

    /// All elements, front to back, after taking exclusive ownership of the backing array.
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        match &mut self.storage {
            Storage::Inline(None) => &mut [],
            Storage::Inline(Some(value)) => slice::from_mut(value),
            Storage::Shared(values) => make_unique(values).as_mut_slice(),
        }
    }

    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.as_slice().iter()
    }

    /// Last element.
    ///
    /// # Panics
    ///
    /// If the sequence is empty.
    pub fn back(&self) -> &T {
        &self[self.len() - 1]
    }

    /// Last element, mutably.
    ///
    /// # Panics
    ///
    /// If the sequence is empty.
    pub fn back_mut(&mut self) -> &mut T {
        let last = self.len() - 1;
        &mut self[last]
    }

    pub fn push_back(&mut self, value: T) {
        if let Storage::Inline(slot @ None) = &mut self.storage {
            *slot = Some(value);
            return;
        }

        self.unique_array().push(value);
    }

    /// Insert `count` copies of `value` at the front.
    pub fn push_front(&mut self, value: T, count: usize) {
        if count == 0 {
            return;
        }
        if count == 1 {
            if let Storage::Inline(slot @ None) = &mut self.storage {
                *slot = Some(value);
                return;
            }
        }

        self.unique_array().splice(0..0, repeat_n(value, count));
    }

    /// Remove the last element, if there is one.
    pub fn pop_back(&mut self) -> Option<T> {
        match &mut self.storage {
            Storage::Inline(slot) => slot.take(),
            Storage::Shared(values) => make_unique(values).pop(),
        }
    }

    /// Remove the first `count` elements.
    ///
    /// # Panics
    ///
    /// If `count` is larger than the length.
    pub fn pop_front(&mut self, count: usize) {
        if count == 0 {
            return;
        }

        match &mut self.storage {
            Storage::Inline(slot) => {
                assert!(count <= 1 && slot.is_some(), "can't remove {} elements", count);
                *slot = None;
            },
            Storage::Shared(values) => {
                make_unique(values).drain(..count);
            },
        }
    }

    /// Truncate to, or extend with copies of `fill` up to, length `new_len`.
    ///
    /// A `new_len` of zero clears the sequence.
    pub fn resize(&mut self, new_len: usize, fill: T) {
        if new_len == self.len() {
            return;
        }

        if new_len <= 1 {
            if let Storage::Inline(slot) = &mut self.storage {
                *slot = if new_len == 1 { Some(fill) } else { None };
                return;
            }
        }

        self.unique_array().resize(new_len, fill);
    }

    /// Exchange the contents of two sequences in constant time.
    pub fn swap(&mut self, other: &mut Self) {
        std::mem::swap(self, other);
    }

    /// Move to shared storage if needed and take exclusive ownership of the array.
    fn unique_array(&mut self) -> &mut Vec<T> {
        if let Storage::Inline(slot) = &mut self.storage {
            let values = slot.take().into_iter().collect();
            self.storage = Storage::Shared(Shared::new(values));
        }

        match &mut self.storage {
            Storage::Shared(values) => make_unique(values),
            Storage::Inline(_) => unreachable!("storage was just moved to the heap"),
        }
    }
}

/// Copy the array if another sequence references it as well.
fn make_unique<T: Clone>(values: &mut Shared<Vec<T>>) -> &mut Vec<T> {
    if Shared::strong_count(values) > 1 {
        trace!("Copying shared digit array of length {} before writing", values.len());
    }

    Shared::make_mut(values)
}

impl<T: Clone> Index<usize> for DigitSequence<T> {
    type Output = T;

    fn index(&self, index: usize) -> &Self::Output {
        &self.as_slice()[index]
    }
}

impl<T: Clone> IndexMut<usize> for DigitSequence<T> {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.as_mut_slice()[index]
    }
}

impl<T: Clone + PartialEq> PartialEq for DigitSequence<T> {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}
impl<T: Clone + Eq> Eq for DigitSequence<T> {}

impl<T: Clone + Hash> Hash for DigitSequence<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_slice().hash(state);
    }
}

impl<T> Default for DigitSequence<T> {
    fn default() -> Self {
        Self { storage: Storage::Inline(None) }
    }
}

impl<T: Clone + fmt::Debug> fmt::Debug for DigitSequence<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}
