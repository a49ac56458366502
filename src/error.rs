// Copyright (c) 2024 Via Technology Ltd.

// Permission is hereby granted, free of charge, to any person obtaining a copy
// of this software and associated documentation files (the "Software"),
// to deal in the Software without restriction, including without limitation the
// rights to use, copy, modify, merge, publish, distribute, sublicense, and/or
// sell copies of the Software, and to permit persons to whom the Software is
// furnished to do so, subject to the following conditions:

// The above copyright notice and this permission notice shall be included in
// all copies or substantial portions of the Software.

// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
// FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
// AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
// LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
// OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN
// THE SOFTWARE.

//! The error module contains the `Error` type returned by the operations
//! that can fail on a contract violation.
//!
//! Arc constructions that find no geometric solution do not return an
//! `Error`, see [`crate::arc::ArcSolution`].

use thiserror::Error;

/// A contract violation by the caller of an operation.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum Error {
    /// An argument is out of its valid domain or has the wrong arity,
    /// e.g. a negative length or radius.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The operation is not defined for the current state of the value,
    /// e.g. setting the direction of a zero length line.
    #[error("invalid operation: {0}")]
    InvalidOperation(String),

    /// Division of a `Point` by zero.
    #[error("division by zero")]
    DivisionByZero,

    /// The result of the operation is mathematically undefined,
    /// e.g. the slope of a vertical line.
    #[error("undefined operation: {0}")]
    UndefinedOperation(String),
}

/// Convenience type alias for results using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;
