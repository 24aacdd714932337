// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0 OR ISC

use core::fmt;

use crate::aws_lc::{EVP_PKEY_bits, EVP_PKEY_id, EVP_PKEY_new, EVP_PKEY};
use crate::error::AllocationFailure;
use crate::ptr::LcPtr;

/// The decoded, directly usable form of a private key.
///
/// `DecodedKey::new` allocates an empty key for a decode step to populate.
/// Once attached to a [`crate::PrivateKeyContainer`] it is released with the
/// container unless taken back out first.
pub struct DecodedKey {
    evp_pkey: LcPtr<EVP_PKEY>,
}

impl DecodedKey {
    /// Allocates an empty key.
    ///
    /// # Errors
    /// `AllocationFailure` if the key cannot be allocated.
    pub fn new() -> Result<Self, AllocationFailure> {
        Ok(Self {
            evp_pkey: LcPtr::new(unsafe { EVP_PKEY_new() })?,
        })
    }

    /// The AWS-LC key type (`EVP_PKEY_*`); `EVP_PKEY_NONE` for an empty key.
    #[must_use]
    pub fn key_type(&self) -> i32 {
        unsafe { EVP_PKEY_id(*self.evp_pkey.as_const()) }
    }

    /// Size of the key in bits; zero for an empty key.
    #[must_use]
    pub fn bits(&self) -> i32 {
        unsafe { EVP_PKEY_bits(*self.evp_pkey.as_const()) }
    }
}

unsafe impl Send for DecodedKey {}

unsafe impl Sync for DecodedKey {}

impl fmt::Debug for DecodedKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DecodedKey")
            .field("key_type", &self.key_type())
            .finish_non_exhaustive()
    }
}
