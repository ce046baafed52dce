//! Hybrid inline/heap storage for digit sequences.
//!
//! A `DigitVec` behaves like a `Vec<Digit>` restricted to the operations the
//! arithmetic kernel needs, with one extra guarantee: sequences of up to
//! [`INLINE_CAP`] digits live directly in the value and never touch the heap.
//! The representation is an explicit tagged union; every access dispatches on
//! the tag, so the two modes are indistinguishable to callers.

use alloc::vec::Vec;
use core::fmt::{self, Debug};
use core::ops::{Deref, DerefMut};

/// One element of the internal base-10^9 representation. Not a decimal digit.
pub(crate) type Digit = u32;

/// Number of digits stored without allocating.
///
/// Sized so the inline buffer matches the footprint of the heap variant's
/// `Vec` header (three words) on 64-bit targets, making the inline mode free.
pub(crate) const INLINE_CAP: usize = 6;

/// Growable little-endian digit sequence with a small-size optimization.
///
/// Invariants maintained by this type:
///
/// - `Inline.len <= INLINE_CAP` at all times.
/// - A grow event promotes inline data to the heap and never the reverse;
///   demotion back to inline happens only through `clone`.
/// - Capacity at least doubles on overflow and never shrinks.
pub(crate) enum DigitVec {
    Inline { len: u8, buf: [Digit; INLINE_CAP] },
    Heap(Vec<Digit>),
}

impl DigitVec {
    /// Empty sequence in inline mode.
    pub(crate) fn new() -> Self {
        DigitVec::Inline {
            len: 0,
            buf: [0; INLINE_CAP],
        }
    }

    /// Empty sequence with room for `capacity` digits. Allocates only when
    /// the request exceeds the inline buffer.
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        if capacity <= INLINE_CAP {
            DigitVec::new()
        } else {
            DigitVec::Heap(Vec::with_capacity(capacity))
        }
    }

    /// Copy of `digits`, stored inline when it fits.
    pub(crate) fn from_slice(digits: &[Digit]) -> Self {
        if digits.len() <= INLINE_CAP {
            let mut buf = [0; INLINE_CAP];
            buf[..digits.len()].copy_from_slice(digits);
            DigitVec::Inline {
                len: digits.len() as u8,
                buf,
            }
        } else {
            DigitVec::Heap(digits.to_vec())
        }
    }

    pub(crate) fn capacity(&self) -> usize {
        match self {
            DigitVec::Inline { .. } => INLINE_CAP,
            DigitVec::Heap(vec) => vec.capacity(),
        }
    }

    /// Appends a digit, promoting to heap storage when the inline buffer is
    /// full. Amortized O(1): overflow reserves at least double the old size.
    pub(crate) fn push(&mut self, digit: Digit) {
        match self {
            DigitVec::Inline { len, buf } => {
                if (*len as usize) < INLINE_CAP {
                    buf[*len as usize] = digit;
                    *len += 1;
                } else {
                    self.spill(2 * INLINE_CAP);
                    self.push(digit);
                }
            }
            DigitVec::Heap(vec) => vec.push(digit),
        }
    }

    /// Removes and returns the most significant stored digit.
    pub(crate) fn pop(&mut self) -> Option<Digit> {
        match self {
            DigitVec::Inline { len, buf } => {
                if *len == 0 {
                    None
                } else {
                    *len -= 1;
                    Some(buf[*len as usize])
                }
            }
            DigitVec::Heap(vec) => vec.pop(),
        }
    }

    /// Sets the logical length to `new_len`, zero-filling any newly exposed
    /// positions. Shrinking never releases storage.
    pub(crate) fn resize(&mut self, new_len: usize) {
        match self {
            DigitVec::Inline { len, buf } => {
                if new_len <= INLINE_CAP {
                    if new_len > *len as usize {
                        buf[*len as usize..new_len].fill(0);
                    }
                    *len = new_len as u8;
                } else {
                    self.spill(new_len);
                    if let DigitVec::Heap(vec) = self {
                        vec.resize(new_len, 0);
                    }
                }
            }
            DigitVec::Heap(vec) => vec.resize(new_len, 0),
        }
    }

    /// Ensures room for `additional` more digits beyond the current length.
    pub(crate) fn reserve(&mut self, additional: usize) {
        match self {
            DigitVec::Inline { len, .. } => {
                let needed = *len as usize + additional;
                if needed > INLINE_CAP {
                    self.spill(needed);
                }
            }
            DigitVec::Heap(vec) => vec.reserve(additional),
        }
    }

    /// Logically empties the sequence without releasing storage.
    pub(crate) fn clear(&mut self) {
        match self {
            DigitVec::Inline { len, .. } => *len = 0,
            DigitVec::Heap(vec) => vec.clear(),
        }
    }

    pub(crate) fn as_slice(&self) -> &[Digit] {
        self
    }

    pub(crate) fn as_mut_slice(&mut self) -> &mut [Digit] {
        self
    }

    /// One-way transition to heap storage with at least `capacity` digits of
    /// room. No-op when already on the heap.
    fn spill(&mut self, capacity: usize) {
        if let DigitVec::Inline { len, buf } = self {
            let mut vec = Vec::with_capacity(capacity);
            vec.extend_from_slice(&buf[..*len as usize]);
            *self = DigitVec::Heap(vec);
        }
    }
}

impl Deref for DigitVec {
    type Target = [Digit];

    fn deref(&self) -> &[Digit] {
        match self {
            DigitVec::Inline { len, buf } => &buf[..*len as usize],
            DigitVec::Heap(vec) => vec,
        }
    }
}

impl DerefMut for DigitVec {
    fn deref_mut(&mut self) -> &mut [Digit] {
        match self {
            DigitVec::Inline { len, buf } => &mut buf[..*len as usize],
            DigitVec::Heap(vec) => vec,
        }
    }
}

impl Clone for DigitVec {
    /// Deep copy. Heap data short enough for the inline buffer is demoted,
    /// so cloning a value that shrank below the threshold drops the
    /// allocation.
    fn clone(&self) -> Self {
        DigitVec::from_slice(self)
    }
}

impl Default for DigitVec {
    fn default() -> Self {
        DigitVec::new()
    }
}

impl PartialEq for DigitVec {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl Eq for DigitVec {}

impl Debug for DigitVec {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}
