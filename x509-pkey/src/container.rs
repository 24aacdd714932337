// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0 OR ISC

use tracing::{debug, trace};

use crate::allocator::Allocator;
use crate::error::AllocationFailure;
use crate::key_data::KeyData;
use crate::ptr::ManagedPointer;

/// A private key held as an encoded algorithm identifier and key bytes, plus an
/// optional decoded key and auxiliary payload.
///
/// Both encoded fields exist for the whole life of the container. The decoded
/// key and the payload are attached, replaced and taken independently.
pub(crate) struct Container<'a, A: Allocator> {
    algorithm: ManagedPointer<A::Algorithm>,
    encoded_key: ManagedPointer<A::EncodedKey>,
    decoded_key: Option<A::DecodedKey>,
    key_data: Option<KeyData<'a, A::KeyData>>,
}

impl<'a, A: Allocator> Container<'a, A> {
    /// Builds the algorithm identifier and then the encoded key.
    ///
    /// If the second allocation fails, the first is released before the error
    /// is returned.
    pub(crate) fn new_in(allocator: &A) -> Result<Self, AllocationFailure> {
        let algorithm = ManagedPointer::new(allocator.new_algorithm()).map_err(|()| {
            debug!("private key container: algorithm identifier allocation failed");
            AllocationFailure
        })?;
        let encoded_key = ManagedPointer::new(allocator.new_encoded_key()).map_err(|()| {
            debug!("private key container: encoded key allocation failed");
            AllocationFailure
        })?;
        trace!("private key container constructed");
        Ok(Self {
            algorithm,
            encoded_key,
            decoded_key: None,
            key_data: None,
        })
    }

    pub(crate) fn algorithm(&self) -> &ManagedPointer<A::Algorithm> {
        &self.algorithm
    }

    pub(crate) fn algorithm_mut(&mut self) -> &mut ManagedPointer<A::Algorithm> {
        &mut self.algorithm
    }

    pub(crate) fn encoded_key(&self) -> &ManagedPointer<A::EncodedKey> {
        &self.encoded_key
    }

    pub(crate) fn encoded_key_mut(&mut self) -> &mut ManagedPointer<A::EncodedKey> {
        &mut self.encoded_key
    }

    pub(crate) fn decoded_key(&self) -> Option<&A::DecodedKey> {
        self.decoded_key.as_ref()
    }

    /// Stores `key`, releasing any key attached before it.
    pub(crate) fn attach_decoded_key(&mut self, key: A::DecodedKey) {
        if self.decoded_key.replace(key).is_some() {
            trace!("private key container: replaced decoded key");
        }
    }

    pub(crate) fn take_decoded_key(&mut self) -> Option<A::DecodedKey> {
        self.decoded_key.take()
    }

    pub(crate) fn key_data(&self) -> Option<&KeyData<'a, A::KeyData>> {
        self.key_data.as_ref()
    }

    /// Stores `data`. A previously attached payload is released only if it was owned.
    pub(crate) fn attach_key_data(&mut self, data: KeyData<'a, A::KeyData>) {
        if let Some(previous) = self.key_data.replace(data) {
            trace!(
                owned = previous.is_owned(),
                "private key container: replaced key data"
            );
        }
    }

    pub(crate) fn take_key_data(&mut self) -> Option<KeyData<'a, A::KeyData>> {
        self.key_data.take()
    }
}

// Fields are released in declaration order once this returns.
impl<A: Allocator> Drop for Container<'_, A> {
    fn drop(&mut self) {
        trace!(
            decoded_key = self.decoded_key.is_some(),
            key_data = self.key_data.is_some(),
            owned_key_data = self.key_data.as_ref().is_some_and(KeyData::is_owned),
            "releasing private key container"
        );
    }
}
