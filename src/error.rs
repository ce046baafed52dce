//! When parsing, converting, or dividing big integers goes wrong.

use alloc::boxed::Box;
use core::fmt::{self, Debug, Display};
use core::result;
#[cfg(feature = "std")]
use std::error;

/// This type represents all possible errors that can occur when parsing a
/// decimal string, dividing by zero, or converting a `BigInt` to a native
/// integer.
pub struct Error {
    /// This `Box` allows us to keep the size of `Error` as small as possible,
    /// so that `Result<T, Error>` stays cheap to pass around.
    err: Box<ErrorImpl>,
}

/// Alias for a `Result` with the error type `longint::Error`.
pub type Result<T> = result::Result<T, Error>;

impl Error {
    /// Zero-based byte offset at which a parse error was detected.
    ///
    /// Only meaningful for errors in the [`Category::Syntax`] category; for
    /// every other category the position is 0.
    pub fn position(&self) -> usize {
        self.err.position
    }

    /// Specifies the cause of this error.
    pub fn code(&self) -> &ErrorCode {
        &self.err.code
    }

    /// Categorizes the cause of this error.
    ///
    /// - `Category::Syntax` - input that is not a valid decimal integer
    /// - `Category::Arithmetic` - an operation with no defined result
    /// - `Category::Conversion` - a value that does not fit the native target
    pub fn classify(&self) -> Category {
        match self.err.code {
            ErrorCode::ExpectedDigit | ErrorCode::InvalidDigit => Category::Syntax,
            ErrorCode::DivisionByZero => Category::Arithmetic,
            ErrorCode::NumberOutOfRange => Category::Conversion,
        }
    }

    /// Returns true if this error was caused by input that was not a
    /// syntactically valid decimal integer.
    pub fn is_syntax(&self) -> bool {
        self.classify() == Category::Syntax
    }

    /// Returns true if this error was caused by an arithmetic operation with
    /// no defined result, such as division by zero.
    pub fn is_arithmetic(&self) -> bool {
        self.classify() == Category::Arithmetic
    }

    /// Returns true if this error was caused by a value too large to
    /// represent in the requested native integer type.
    pub fn is_conversion(&self) -> bool {
        self.classify() == Category::Conversion
    }

    #[cold]
    pub(crate) fn syntax(code: ErrorCode, position: usize) -> Self {
        Error {
            err: Box::new(ErrorImpl { code, position }),
        }
    }

    #[cold]
    pub(crate) fn division_by_zero() -> Self {
        Error {
            err: Box::new(ErrorImpl {
                code: ErrorCode::DivisionByZero,
                position: 0,
            }),
        }
    }

    #[cold]
    pub(crate) fn number_out_of_range() -> Self {
        Error {
            err: Box::new(ErrorImpl {
                code: ErrorCode::NumberOutOfRange,
                position: 0,
            }),
        }
    }
}

/// Categorizes the cause of a `longint::Error`.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Category {
    /// The error was caused by input that was not a valid decimal integer.
    Syntax,

    /// The error was caused by an arithmetic operation with no defined
    /// result, such as a zero divisor.
    Arithmetic,

    /// The error was caused by a value whose magnitude does not fit the
    /// requested native integer type.
    Conversion,
}

struct ErrorImpl {
    code: ErrorCode,
    position: usize,
}

/// This type describes all possible errors that can occur when working with
/// big integers.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum ErrorCode {
    /// The input contained no decimal digit where at least one was required,
    /// for example an empty string or a lone sign.
    ExpectedDigit,

    /// A character that is not a decimal digit appeared after the optional
    /// sign.
    InvalidDigit,

    /// The divisor of a division or modulus operation was zero.
    DivisionByZero,

    /// The value does not fit in the requested native integer type.
    NumberOutOfRange,
}

impl Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ErrorCode::ExpectedDigit => f.write_str("expected at least one decimal digit"),
            ErrorCode::InvalidDigit => f.write_str("invalid character in decimal string"),
            ErrorCode::DivisionByZero => f.write_str("division by zero"),
            ErrorCode::NumberOutOfRange => {
                f.write_str("number out of range of the native integer type")
            }
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.is_syntax() {
            write!(f, "{} at position {}", self.err.code, self.err.position)
        } else {
            Display::fmt(&self.err.code, f)
        }
    }
}

impl Debug for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Error({:?}, position: {})", self.err.code, self.err.position)
    }
}

#[cfg(feature = "std")]
impl error::Error for Error {}
