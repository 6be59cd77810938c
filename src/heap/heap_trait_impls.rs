use super::PowerHeap;
use alloc::vec::{self, Vec};
use core::fmt::{self, Debug, Formatter};
use core::slice;

#[cfg(feature = "serde_support")]
use serde::{de::Error as _, ser::SerializeStruct, Deserialize, Deserializer, Serialize, Serializer};

impl<T: Clone> Clone for PowerHeap<T> {
  #[inline(always)]
  fn clone(&self) -> Self {
    PowerHeap {
      data: self.data.clone(),
      power: self.power,
    }
  }

  #[inline(always)]
  fn clone_from(&mut self, source: &Self) {
    self.data.clone_from(&source.data);
    self.power = source.power;
  }
}

impl<T: Ord> Default for PowerHeap<T> {
  /// Creates an empty binary `PowerHeap<T>`, i.e. one with a branching exponent of 1.
  #[inline(always)]
  fn default() -> PowerHeap<T> {
    PowerHeap {
      data: Vec::new(),
      power: 1,
    }
  }
}

impl<T: Debug> Debug for PowerHeap<T> {
  #[inline(always)]
  fn fmt(&self, f: &mut Formatter) -> fmt::Result {
    f.debug_struct("PowerHeap")
      .field("power", &self.power)
      .field("data", &self.data)
      .finish()
  }
}

impl<T: Ord> Extend<T> for PowerHeap<T> {
  #[inline]
  fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
    let iter = iter.into_iter();
    self.reserve(iter.size_hint().0);
    for item in iter {
      self.insert(item);
    }
  }
}

impl<'a, T: 'a + Copy + Ord> Extend<&'a T> for PowerHeap<T> {
  #[inline(always)]
  fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
    <Self as Extend<T>>::extend(self, iter.into_iter().copied());
  }
}

impl<T> From<PowerHeap<T>> for Vec<T> {
  /// Converts a `PowerHeap<T>` into a `Vec<T>` holding its elements in level order.
  #[inline(always)]
  fn from(heap: PowerHeap<T>) -> Vec<T> {
    heap.data
  }
}

impl<T> IntoIterator for PowerHeap<T> {
  type Item = T;
  type IntoIter = vec::IntoIter<T>;

  /// Creates a consuming iterator, that is, one that moves each value out of
  /// the heap in arbitrary order. The heap cannot be used after calling this.
  ///
  /// # Examples
  ///
  /// Basic usage:
  /// ```
  /// # use powerheap::*;
  /// let heap = PowerHeap::from_vec(2, vec![1, 2, 3, 4]).unwrap();
  /// // Print 1, 2, 3, 4 in arbitrary order
  /// for x in heap.into_iter() {
  ///   // x has type i32, not &i32
  ///   println!("{}", x);
  /// }
  /// ```
  #[inline(always)]
  fn into_iter(self) -> vec::IntoIter<T> {
    self.data.into_iter()
  }
}

impl<'a, T> IntoIterator for &'a PowerHeap<T> {
  type Item = &'a T;
  type IntoIter = slice::Iter<'a, T>;

  #[inline(always)]
  fn into_iter(self) -> slice::Iter<'a, T> {
    self.iter()
  }
}

#[cfg(feature = "serde_support")]
impl<T: Serialize> Serialize for PowerHeap<T> {
  #[inline]
  fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
    let mut state = serializer.serialize_struct("PowerHeap", 2)?;
    // Always below `usize::BITS`, so this can't truncate.
    state.serialize_field("power", &(self.power as i32))?;
    state.serialize_field("data", &self.data)?;
    state.end()
  }
}

/// The serialized shape of a [`PowerHeap`], which is validated and re-heapified on the way in.
#[cfg(feature = "serde_support")]
#[derive(Deserialize)]
#[serde(rename = "PowerHeap")]
struct PowerHeapRepr<T> {
  power: i32,
  data: Vec<T>,
}

#[cfg(feature = "serde_support")]
impl<'de, T: Deserialize<'de> + Ord> Deserialize<'de> for PowerHeap<T> {
  #[inline]
  fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
    let repr = PowerHeapRepr::<T>::deserialize(deserializer)?;
    PowerHeap::from_vec(repr.power, repr.data).map_err(D::Error::custom)
  }
}
