// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0 OR ISC

use crate::aws_lc::{ASN1_OCTET_STRING_new, X509_ALGOR_new, ASN1_OCTET_STRING, X509_ALGOR};
use crate::decoded_key::DecodedKey;
use crate::key_data::KeyMaterial;
use crate::ptr::{IntoPointer, Pointer};

/// The objects a private key container owns, and the constructors for the two
/// it creates itself.
///
/// A constructor reports an allocation failure by returning `None`.
pub(crate) trait Allocator {
    /// Algorithm identifier describing how the encoded key was produced.
    type Algorithm: Pointer;
    /// Octet string holding the encoded key bytes.
    type EncodedKey: Pointer;
    /// Usable in-memory key, attached after construction.
    type DecodedKey;
    /// Format-specific auxiliary payload, attached after construction.
    type KeyData;

    fn new_algorithm(&self) -> Option<Self::Algorithm>;

    fn new_encoded_key(&self) -> Option<Self::EncodedKey>;
}

/// Objects allocated by AWS-LC.
#[derive(Clone, Copy, Debug, Default)]
pub(crate) struct AwsLc;

impl Allocator for AwsLc {
    type Algorithm = *mut X509_ALGOR;
    type EncodedKey = *mut ASN1_OCTET_STRING;
    type DecodedKey = DecodedKey;
    type KeyData = KeyMaterial;

    #[inline]
    fn new_algorithm(&self) -> Option<*mut X509_ALGOR> {
        unsafe { X509_ALGOR_new() }.into_pointer()
    }

    #[inline]
    fn new_encoded_key(&self) -> Option<*mut ASN1_OCTET_STRING> {
        unsafe { ASN1_OCTET_STRING_new() }.into_pointer()
    }
}
