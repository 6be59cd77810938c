use self::{heap_helpers::*, heap_iterators::*};
use crate::utils::{child_indices, fanout_of, parent_index, validate_power};
use crate::PowerHeapError;
use alloc::vec::Vec;
use core::mem::swap;
use core::slice;

pub(crate) mod heap_helpers;
pub mod heap_iterators;
mod heap_trait_impls;

/// A priority queue implemented with a max-heap in which every node has `2^power` children,
/// where `power` is chosen once at construction. A `power` of 1 gives an ordinary binary heap,
/// 2 gives a 4-ary heap, and so on. A `power` of 0 is also allowed, in which case every node has
/// exactly one child and the heap degenerates into a sorted chain.
///
/// Elements are kept in a single `Vec` in level order, so the tree is always complete.
/// A wider fan-out makes the tree shallower, which makes [`insert`](Self::insert) cheaper, while
/// [`pop_max`](Self::pop_max) has to compare up to `2^power` children at every level it descends.
///
/// It is a logic error for an item to be modified in such a way that the
/// item's ordering relative to any other item, as determined by the `Ord`
/// trait, changes while it is in the heap. This is normally only possible
/// through `Cell`, `RefCell`, global state, I/O, or unsafe code.
///
/// # Examples
///
/// ```
/// use powerheap::{PowerHeap, PowerHeapError};
///
/// // Every node of this heap has 2^2 = 4 children.
/// let mut heap = PowerHeap::new(2)?;
///
/// // There's nothing in the heap yet, so there's no maximum either.
/// assert_eq!(heap.peek_max(), Err(PowerHeapError::EmptyContainer));
///
/// heap.insert(10);
/// heap.insert(20);
/// heap.insert(5);
///
/// assert_eq!(heap.peek_max(), Ok(&20));
/// assert_eq!(heap.len(), 3);
///
/// // Popping returns the values from greatest to smallest.
/// assert_eq!(heap.pop_max(), Ok(20));
/// assert_eq!(heap.pop_max(), Ok(10));
/// assert_eq!(heap.pop_max(), Ok(5));
/// assert_eq!(heap.pop_max(), Err(PowerHeapError::EmptyContainer));
/// assert!(heap.is_empty());
/// # Ok::<(), PowerHeapError>(())
/// ```
///
/// ## Min-heap
///
/// `core::cmp::Reverse` can be used to make `PowerHeap` a min-heap.
///
/// ```
/// use core::cmp::Reverse;
/// use powerheap::PowerHeap;
///
/// let mut heap = PowerHeap::new(3).unwrap();
/// heap.extend([Reverse(1), Reverse(5), Reverse(2)]);
/// assert_eq!(heap.pop_max(), Ok(Reverse(1)));
/// assert_eq!(heap.pop_max(), Ok(Reverse(2)));
/// assert_eq!(heap.pop_max(), Ok(Reverse(5)));
/// ```
///
/// # Time complexity
///
/// With `d = 2^power`:
///
/// | [insert]     | [pop_max]        | [peek_max] |
/// |--------------|------------------|------------|
/// | O(log_d n)   | O(d * log_d n)   | O(1)       |
///
/// [insert]: #method.insert
/// [pop_max]: #method.pop_max
/// [peek_max]: #method.peek_max
pub struct PowerHeap<T> {
  pub(crate) data: Vec<T>,
  pub(crate) power: u32,
}

impl<T: Ord> PowerHeap<T> {
  /// Creates an empty `PowerHeap` whose nodes have `2^power` children.
  ///
  /// Returns [`PowerHeapError::InvalidArgument`] if `power` is negative, or too large for
  /// `2^power` to fit in a `usize`.
  ///
  /// # Examples
  ///
  /// Basic usage:
  /// ```
  /// # use powerheap::*;
  /// let heap = PowerHeap::<i32>::new(1).unwrap();
  /// assert_eq!(heap.fanout(), 2);
  /// assert_eq!(
  ///   PowerHeap::<i32>::new(-1).unwrap_err(),
  ///   PowerHeapError::InvalidArgument { power: -1 }
  /// );
  /// ```
  #[inline]
  pub fn new(power: i32) -> Result<PowerHeap<T>, PowerHeapError> {
    Self::with_capacity(power, 0)
  }

  /// Creates an empty `PowerHeap` with `2^power` children per node and room for at least
  /// `capacity` elements before reallocating.
  ///
  /// # Examples
  ///
  /// Basic usage:
  /// ```
  /// # use powerheap::*;
  /// let mut heap = PowerHeap::with_capacity(2, 10).unwrap();
  /// assert!(heap.capacity() >= 10);
  /// heap.insert(4);
  /// ```
  ///
  /// # Panics
  ///
  /// Panics if the new capacity exceeds `isize::MAX` bytes, as `Vec::with_capacity` does.
  #[inline]
  pub fn with_capacity(power: i32, capacity: usize) -> Result<PowerHeap<T>, PowerHeapError> {
    let power = validate_power(power).map_err(|err| {
      heap_log!(warn, power, "rejected branching exponent");
      err
    })?;
    heap_log!(
      debug,
      power,
      fanout = fanout_of(power),
      capacity,
      "created power heap"
    );
    Ok(PowerHeap {
      data: Vec::with_capacity(capacity),
      power,
    })
  }

  /// Builds a `PowerHeap` with `2^power` children per node out of the contents of `vec`,
  /// reordering them in place to satisfy the heap property. This takes `O(n)` time.
  ///
  /// # Examples
  ///
  /// Basic usage:
  /// ```
  /// # use powerheap::*;
  /// let mut heap = PowerHeap::from_vec(2, vec![1, 9, 3, 7, 5, 8, 2]).unwrap();
  /// assert_eq!(heap.pop_max(), Ok(9));
  /// assert_eq!(heap.peek_max(), Ok(&8));
  /// ```
  #[inline]
  pub fn from_vec(power: i32, vec: Vec<T>) -> Result<PowerHeap<T>, PowerHeapError> {
    let power = validate_power(power).map_err(|err| {
      heap_log!(warn, power, "rejected branching exponent");
      err
    })?;
    let mut heap = PowerHeap { data: vec, power };
    heap_log!(
      trace,
      len = heap.len(),
      fanout = heap.fanout(),
      "heapifying vector"
    );
    heap.rebuild();
    Ok(heap)
  }

  /// Pushes an item onto the heap, then moves it towards the root for as long as it is strictly
  /// greater than its parent.
  ///
  /// # Examples
  ///
  /// Basic usage:
  /// ```
  /// # use powerheap::*;
  /// let mut heap = PowerHeap::new(1).unwrap();
  /// heap.insert(3);
  /// heap.insert(5);
  /// heap.insert(1);
  /// assert_eq!(heap.len(), 3);
  /// assert_eq!(heap.peek_max(), Ok(&5));
  /// ```
  ///
  /// # Time complexity
  ///
  /// At most `ceil(log_d(n))` comparisons against a heap containing *n* elements with fan-out
  /// *d*, plus the amortized cost of growing the underlying `Vec`.
  #[inline]
  pub fn insert(&mut self, value: T) {
    let old_len = self.len();
    self.data.push(value);
    self.sift_up(old_len);
  }

  /// Removes the greatest item from the heap and returns it, or
  /// [`PowerHeapError::EmptyContainer`] if there is nothing to remove.
  ///
  /// # Examples
  ///
  /// Basic usage:
  /// ```
  /// # use powerheap::*;
  /// let mut heap = PowerHeap::from_vec(1, vec![1, 3]).unwrap();
  /// assert_eq!(heap.pop_max(), Ok(3));
  /// assert_eq!(heap.pop_max(), Ok(1));
  /// assert_eq!(heap.pop_max(), Err(PowerHeapError::EmptyContainer));
  /// ```
  ///
  /// # Panics
  ///
  /// If the `Ord` implementation of `T` panics while the heap is being restored, the element
  /// being popped is dropped during unwinding. The other `n - 1` elements stay in the heap and
  /// each is still dropped exactly once, but they may no longer be in heap order.
  ///
  /// # Time complexity
  ///
  /// The worst case cost of `pop_max` on a heap containing *n* elements with fan-out *d* is
  /// O(d * log_d n) comparisons.
  #[inline]
  pub fn pop_max(&mut self) -> Result<T, PowerHeapError> {
    let mut item = self.data.pop().ok_or(PowerHeapError::EmptyContainer)?;
    if !self.is_empty() {
      // Safe: the heap still holds at least one element.
      swap(&mut item, unsafe { self.data.get_unchecked_mut(0) });
      let len = self.len();
      self.sift_down_range(0, len);
    }
    Ok(item)
  }

  /// Consumes the `PowerHeap` and returns a vector in sorted (ascending) order.
  ///
  /// # Examples
  ///
  /// Basic usage:
  /// ```
  /// # use powerheap::*;
  /// let mut heap = PowerHeap::from_vec(3, vec![1, 2, 4, 5, 7]).unwrap();
  /// heap.insert(6);
  /// heap.insert(3);
  /// assert_eq!(heap.into_sorted_vec(), [1, 2, 3, 4, 5, 6, 7]);
  /// ```
  #[inline]
  pub fn into_sorted_vec(mut self) -> Vec<T> {
    let mut end = self.len();
    while end > 1 {
      end -= 1;
      self.data.swap(0, end);
      self.sift_down_range(0, end);
    }
    self.into_vec()
  }

  /// Returns an iterator which retrieves elements in heap order (greatest first).
  /// The retrieved elements are removed from the original heap.
  /// The remaining elements will be removed on drop in heap order.
  ///
  /// # Examples
  ///
  /// Basic usage:
  /// ```
  /// # use powerheap::*;
  /// let mut heap = PowerHeap::from_vec(2, vec![1, 2, 3, 4, 5]).unwrap();
  /// assert_eq!(heap.drain_sorted().take(2).collect::<Vec<_>>(), [5, 4]);
  /// assert!(heap.is_empty());
  /// ```
  #[inline(always)]
  pub fn drain_sorted(&mut self) -> PowerHeapDrainSorted<'_, T> {
    PowerHeapDrainSorted { inner: self }
  }

  // The implementations of sift_up and sift_down_range use unsafe blocks in
  // order to move an element out of the vector (leaving behind a
  // hole), shift along the others and move the removed element back into the
  // vector at the final location of the hole.
  // The `PowerHeapHole` type is used to represent this, and make sure
  // the hole is filled back at the end of its scope, even on panic.
  #[inline]
  fn sift_up(&mut self, position: usize) {
    let power = self.power;
    unsafe {
      // Take out the value at `position` and create a hole.
      let mut hole = PowerHeapHole::new(&mut self.data, position);
      // The root has no parent, so the parent index is only computed below it.
      while hole.pos() > 0 {
        let parent = parent_index(hole.pos(), power);
        if hole.element() <= hole.get(parent) {
          break;
        }
        hole.move_to(parent);
      }
    }
  }

  /// Take an element at `position` and move it down the heap while its greatest child is
  /// strictly greater than it, considering only the first `end` elements.
  #[inline]
  fn sift_down_range(&mut self, position: usize, end: usize) {
    let power = self.power;
    unsafe {
      let mut hole = PowerHeapHole::new(&mut self.data[..end], position);
      loop {
        let children = child_indices(hole.pos(), power, end);
        if children.is_empty() {
          break;
        }
        let child = hole.greatest_of(children);
        // if we are already in order, stop.
        if hole.element() >= hole.get(child) {
          break;
        }
        hole.move_to(child);
      }
    }
  }

  #[inline]
  fn rebuild(&mut self) {
    let len = self.len();
    if len < 2 {
      return;
    }
    // Everything after the parent of the last element is a leaf.
    let mut n = parent_index(len - 1, self.power) + 1;
    while n > 0 {
      n -= 1;
      self.sift_down_range(n, len);
    }
  }
}

impl<T> PowerHeap<T> {
  /// Returns the greatest item in the heap, or [`PowerHeapError::EmptyContainer`] if it is
  /// empty.
  ///
  /// # Examples
  ///
  /// Basic usage:
  /// ```
  /// # use powerheap::*;
  /// let mut heap = PowerHeap::new(2).unwrap();
  /// assert_eq!(heap.peek_max(), Err(PowerHeapError::EmptyContainer));
  /// heap.insert(1);
  /// heap.insert(5);
  /// heap.insert(2);
  /// assert_eq!(heap.peek_max(), Ok(&5));
  /// ```
  ///
  /// # Time complexity
  ///
  /// Cost is O(1) in the worst case.
  #[inline(always)]
  pub fn peek_max(&self) -> Result<&T, PowerHeapError> {
    self.data.first().ok_or(PowerHeapError::EmptyContainer)
  }

  /// Returns the branching exponent the heap was created with.
  #[inline(always)]
  pub const fn power(&self) -> u32 {
    self.power
  }

  /// Returns the number of children each node of the heap can have, i.e. `2^power`.
  ///
  /// # Examples
  ///
  /// Basic usage:
  /// ```
  /// # use powerheap::*;
  /// assert_eq!(PowerHeap::<u8>::new(0).unwrap().fanout(), 1);
  /// assert_eq!(PowerHeap::<u8>::new(3).unwrap().fanout(), 8);
  /// ```
  #[inline(always)]
  pub const fn fanout(&self) -> usize {
    fanout_of(self.power)
  }

  /// Returns the number of elements in the heap.
  ///
  /// # Examples
  ///
  /// Basic usage:
  /// ```
  /// # use powerheap::*;
  /// let heap = PowerHeap::from_vec(1, vec![1, 3]).unwrap();
  /// assert_eq!(heap.len(), 2);
  /// ```
  #[inline(always)]
  pub fn len(&self) -> usize {
    self.data.len()
  }

  /// Checks if the heap is empty.
  #[inline(always)]
  pub fn is_empty(&self) -> bool {
    self.len() == 0
  }

  /// Returns the number of elements the heap can hold without reallocating.
  #[inline(always)]
  pub fn capacity(&self) -> usize {
    self.data.capacity()
  }

  /// Reserves capacity for at least `additional` more elements.
  #[inline(always)]
  pub fn reserve(&mut self, additional: usize) {
    self.data.reserve(additional);
  }

  /// Discards as much additional capacity as possible.
  #[inline(always)]
  pub fn shrink_to_fit(&mut self) {
    self.data.shrink_to_fit();
  }

  /// Returns the contents of the heap in level order: the root first, then its children from
  /// left to right, then their children, and so on.
  ///
  /// # Examples
  ///
  /// Basic usage:
  /// ```
  /// # use powerheap::*;
  /// let mut heap = PowerHeap::new(1).unwrap();
  /// heap.insert(10);
  /// heap.insert(20);
  /// heap.insert(5);
  /// assert_eq!(heap.as_slice(), [20, 10, 5]);
  /// ```
  #[inline(always)]
  pub fn as_slice(&self) -> &[T] {
    &self.data
  }

  /// Returns an iterator visiting all values in the heap, in level (so arbitrary) order.
  ///
  /// # Examples
  ///
  /// Basic usage:
  /// ```
  /// # use powerheap::*;
  /// let heap = PowerHeap::from_vec(2, vec![1, 2, 3, 4]).unwrap();
  /// // Print 1, 2, 3, 4 in arbitrary order
  /// for x in heap.iter() {
  ///   println!("{}", x);
  /// }
  /// ```
  #[inline(always)]
  pub fn iter(&self) -> slice::Iter<'_, T> {
    self.data.iter()
  }

  /// Returns an iterator which retrieves elements in heap order (greatest first).
  /// This method consumes the original heap.
  ///
  /// # Examples
  ///
  /// Basic usage:
  /// ```
  /// # use powerheap::*;
  /// let heap = PowerHeap::from_vec(1, vec![1, 2, 3, 4, 5]).unwrap();
  /// assert_eq!(heap.into_iter_sorted().take(2).collect::<Vec<_>>(), [5, 4]);
  /// ```
  #[inline(always)]
  pub fn into_iter_sorted(self) -> PowerHeapIntoIterSorted<T> {
    PowerHeapIntoIterSorted { inner: self }
  }

  /// Consumes the `PowerHeap` and returns the underlying vector in level order.
  #[inline(always)]
  pub fn into_vec(self) -> Vec<T> {
    self.data
  }

  /// Drops all items from the heap. The branching exponent is kept.
  ///
  /// # Examples
  ///
  /// Basic usage:
  /// ```
  /// # use powerheap::*;
  /// let mut heap = PowerHeap::from_vec(4, vec![1, 3]).unwrap();
  /// heap.clear();
  /// assert!(heap.is_empty());
  /// assert_eq!(heap.power(), 4);
  /// ```
  #[inline(always)]
  pub fn clear(&mut self) {
    self.data.clear();
  }
}
