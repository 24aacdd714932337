// Copyright 2015-2021 Brian Smith.
// SPDX-License-Identifier: ISC
// Modifications copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0 OR ISC

//! Error reporting.

extern crate std;

use core::num::TryFromIntError;
// The Error trait is not in core: https://github.com/rust-lang/rust/issues/103765
use std::error::Error;

/// An underlying allocation could not be satisfied.
///
/// Returned when a container, or one of the objects it owns, cannot be
/// created. By the time a caller sees this error every object allocated by the
/// failing call has already been released; there is nothing left to clean up
/// and no need to know which step failed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AllocationFailure;

impl core::fmt::Display for AllocationFailure {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        f.write_str("AllocationFailure")
    }
}

impl Error for AllocationFailure {
    #[allow(clippy::unnecessary_literal_bound)]
    fn description(&self) -> &str {
        "AllocationFailure"
    }

    #[inline]
    fn cause(&self) -> Option<&dyn Error> {
        None
    }
}

impl From<()> for AllocationFailure {
    fn from((): ()) -> Self {
        AllocationFailure
    }
}

// A length that does not fit the C `int` cannot be allocated by the library.
impl From<TryFromIntError> for AllocationFailure {
    fn from(_: TryFromIntError) -> Self {
        AllocationFailure
    }
}

/// An error with absolutely no details.
///
/// Used where a request is rejected by the underlying library for a reason
/// other than memory, e.g. an unknown algorithm identifier.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Unspecified;

// This is required for the implementation of `std::error::Error`.
impl core::fmt::Display for Unspecified {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        f.write_str("Unspecified")
    }
}

impl Error for Unspecified {
    #[allow(clippy::unnecessary_literal_bound)]
    fn description(&self) -> &str {
        "Unspecified"
    }

    #[inline]
    fn cause(&self) -> Option<&dyn Error> {
        None
    }
}

impl From<()> for Unspecified {
    fn from((): ()) -> Self {
        Unspecified
    }
}

impl From<AllocationFailure> for Unspecified {
    fn from(_: AllocationFailure) -> Self {
        Unspecified
    }
}
