//! Views over the significant digits of a [`BigNumber`].
//!
//! Both views stop at the significant length, so high zero digits kept in
//! storage never show up during traversal.

use std::iter::FusedIterator;

use radix_types::ArithError;

use crate::bignum::{significant_len_of, BigNumber, Digit};

/// Double-ended iterator over significant digits, least significant first.
///
/// Clone it to fork a traversal at the current point.
#[derive(Clone, Debug)]
pub struct Digits<'a> {
    iter: std::slice::Iter<'a, Digit>,
}

impl Iterator for Digits<'_> {
    type Item = Digit;

    fn next(&mut self) -> Option<Digit> {
        self.iter.next().copied()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }
}

impl DoubleEndedIterator for Digits<'_> {
    fn next_back(&mut self) -> Option<Digit> {
        self.iter.next_back().copied()
    }
}

impl ExactSizeIterator for Digits<'_> {}

impl FusedIterator for Digits<'_> {}

/// Mutable bidirectional cursor over the significant digits of a number.
///
/// The cursor sits between digits. `insert` places a digit at the cursor
/// and moves past it; `set` overwrites the digit most recently returned by
/// `next_digit` or `previous_digit`. The owning number's significant length
/// is kept consistent after every mutation.
#[derive(Debug)]
pub struct DigitCursor<'a> {
    number: &'a mut BigNumber,
    position: usize,
    last: Option<usize>,
}

impl DigitCursor<'_> {
    /// Index of the digit `next_digit` would return.
    pub fn position(&self) -> usize {
        self.position
    }

    pub fn has_next(&self) -> bool {
        self.position < self.number.significant_len()
    }

    pub fn has_previous(&self) -> bool {
        self.position > 0
    }

    /// Return the digit at the cursor and advance.
    ///
    /// Fails once the cursor reaches the significant length.
    pub fn next_digit(&mut self) -> Result<Digit, ArithError> {
        if !self.has_next() {
            return Err(self.exhausted());
        }
        let digit = self.number.digits()[self.position];
        self.last = Some(self.position);
        self.position += 1;
        Ok(digit)
    }

    /// Step back and return the digit behind the cursor.
    pub fn previous_digit(&mut self) -> Result<Digit, ArithError> {
        if !self.has_previous() {
            return Err(self.exhausted());
        }
        self.position -= 1;
        self.last = Some(self.position);
        Ok(self.number.storage()[self.position])
    }

    /// Overwrite the most recently returned digit, returning the old value.
    ///
    /// Returns `None` and leaves the number untouched if no digit has been
    /// returned since the last `insert`.
    pub fn set(&mut self, value: Digit) -> Option<Digit> {
        let index = self.last?;
        debug_assert!(value < self.number.base(), "digit {value} out of range");
        let len = self.number.significant_len();
        let storage = self.number.storage_mut();
        let old = std::mem::replace(&mut storage[index], value);
        if value != 0 {
            let len = len.max(index + 1);
            self.number.set_significant_len(len);
        } else if index + 1 == len {
            let len = significant_len_of(&storage[..index]);
            self.number.set_significant_len(len);
        }
        Some(old)
    }

    /// Insert a digit at the cursor and move past it.
    ///
    /// Inserting below the significant length shifts the higher digits up;
    /// inserting at or above it only extends the value if `value` is nonzero.
    pub fn insert(&mut self, value: Digit) {
        debug_assert!(value < self.number.base(), "digit {value} out of range");
        let index = self.position;
        let len = self.number.significant_len();
        self.number.storage_mut().insert(index, value);
        if index < len {
            self.number.set_significant_len(len + 1);
        } else if value != 0 {
            self.number.set_significant_len(index + 1);
        }
        self.position += 1;
        self.last = None;
    }

    fn exhausted(&self) -> ArithError {
        ArithError::CursorExhausted {
            position: self.position,
            len: self.number.significant_len(),
        }
    }
}

impl BigNumber {
    /// Iterate over all significant digits.
    pub fn significant_digits(&self) -> Digits<'_> {
        Digits {
            iter: self.digits().iter(),
        }
    }

    /// Iterate over significant digits starting at index `start`.
    pub fn significant_digits_from(&self, start: usize) -> Result<Digits<'_>, ArithError> {
        let digits = self.digits();
        if start > digits.len() {
            return Err(ArithError::CursorExhausted {
                position: start,
                len: digits.len(),
            });
        }
        Ok(Digits {
            iter: digits[start..].iter(),
        })
    }

    /// Cursor positioned before the least significant digit.
    pub fn cursor(&mut self) -> DigitCursor<'_> {
        DigitCursor {
            number: self,
            position: 0,
            last: None,
        }
    }

    /// Cursor positioned before the digit at `position`.
    pub fn cursor_at(&mut self, position: usize) -> Result<DigitCursor<'_>, ArithError> {
        let len = self.significant_len();
        if position > len {
            return Err(ArithError::CursorExhausted { position, len });
        }
        Ok(DigitCursor {
            number: self,
            position,
            last: None,
        })
    }
}
