// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0 OR ISC

use core::fmt;

use crate::allocator::AwsLc;
use crate::aws_lc::NID_undef;
use crate::container::Container;
use crate::decoded_key::DecodedKey;
use crate::error::{AllocationFailure, Unspecified};
use crate::key_data::{KeyData, KeyMaterial};

/// A private key in encoded form (algorithm identifier plus key bytes) and,
/// optionally, decoded form.
///
/// Dropping the container releases the algorithm identifier, the encoded key,
/// any attached [`DecodedKey`], and any [`KeyData::Owned`] payload. A
/// [`KeyData::Borrowed`] payload is left to its lender, who must outlive `'a`.
pub struct PrivateKeyContainer<'a> {
    inner: Container<'a, AwsLc>,
}

impl<'a> PrivateKeyContainer<'a> {
    /// Allocates a container with an undefined algorithm, empty encoded key, no
    /// decoded key and no auxiliary data.
    ///
    /// # Errors
    /// `AllocationFailure` if any part cannot be allocated. Parts allocated
    /// before the failure have already been released.
    pub fn new() -> Result<Self, AllocationFailure> {
        Ok(Self {
            inner: Container::new_in(&AwsLc)?,
        })
    }

    /// The NID of the encoding algorithm, or `None` if it has not been set.
    #[must_use]
    pub fn algorithm_nid(&self) -> Option<i32> {
        let nid = self.inner.algorithm().nid();
        (nid != NID_undef).then_some(nid)
    }

    /// Sets the encoding algorithm to the object named by `nid`, without parameters.
    ///
    /// # Errors
    /// `Unspecified` if `nid` does not name a known object.
    pub fn set_algorithm_nid(&mut self, nid: i32) -> Result<(), Unspecified> {
        self.inner.algorithm_mut().set_nid(nid)
    }

    /// The encoded key bytes; empty until set.
    #[must_use]
    pub fn encoded_key(&self) -> &[u8] {
        self.inner.encoded_key().as_bytes()
    }

    /// Replaces the encoded key with a copy of `bytes`.
    ///
    /// # Errors
    /// `AllocationFailure` if the copy cannot be allocated.
    pub fn set_encoded_key(&mut self, bytes: &[u8]) -> Result<(), AllocationFailure> {
        self.inner.encoded_key_mut().set_bytes(bytes)
    }

    /// The attached decoded key, if any.
    #[must_use]
    pub fn decoded_key(&self) -> Option<&DecodedKey> {
        self.inner.decoded_key()
    }

    /// Attaches `key`. A previously attached key is released.
    pub fn attach_decoded_key(&mut self, key: DecodedKey) {
        self.inner.attach_decoded_key(key);
    }

    /// Detaches the decoded key and returns ownership of it to the caller.
    pub fn take_decoded_key(&mut self) -> Option<DecodedKey> {
        self.inner.take_decoded_key()
    }

    /// The attached auxiliary payload, if any.
    #[must_use]
    pub fn key_data(&self) -> Option<&KeyData<'a, KeyMaterial>> {
        self.inner.key_data()
    }

    /// Attaches `data`. A previously attached payload is released if it was owned.
    pub fn attach_key_data(&mut self, data: KeyData<'a, KeyMaterial>) {
        self.inner.attach_key_data(data);
    }

    /// Detaches the auxiliary payload and returns it to the caller.
    pub fn take_key_data(&mut self) -> Option<KeyData<'a, KeyMaterial>> {
        self.inner.take_key_data()
    }
}

// The container may move to another thread but is not safe to mutate concurrently.
unsafe impl Send for PrivateKeyContainer<'_> {}

impl fmt::Debug for PrivateKeyContainer<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PrivateKeyContainer")
            .field("algorithm_nid", &self.algorithm_nid())
            .field("encoded_key_len", &self.encoded_key().len())
            .field("decoded_key", &self.decoded_key())
            .field("key_data", &self.key_data())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use crate::aws_lc::{NID_rsaEncryption, EVP_PKEY_NONE};
    use crate::{test, DecodedKey, KeyData, KeyMaterial, PrivateKeyContainer};

    #[test]
    fn fresh_container() {
        let container = PrivateKeyContainer::new().unwrap();
        assert_eq!(None, container.algorithm_nid());
        assert!(container.encoded_key().is_empty());
        assert!(container.decoded_key().is_none());
        assert!(container.key_data().is_none());
    }

    #[test]
    fn encoded_fields_round_trip() {
        let mut container = PrivateKeyContainer::new().unwrap();
        container.set_algorithm_nid(NID_rsaEncryption).unwrap();
        container.set_encoded_key(&[0x30, 0x00]).unwrap();
        assert_eq!(Some(NID_rsaEncryption), container.algorithm_nid());
        assert_eq!(container.encoded_key(), &[0x30, 0x00]);
    }

    #[test]
    fn decoded_key_attach_and_take() {
        let mut container = PrivateKeyContainer::new().unwrap();
        container.attach_decoded_key(DecodedKey::new().unwrap());
        container.attach_decoded_key(DecodedKey::new().unwrap());
        assert_eq!(
            EVP_PKEY_NONE,
            container.decoded_key().map(DecodedKey::key_type).unwrap()
        );

        let key = container.take_decoded_key().unwrap();
        assert!(container.decoded_key().is_none());
        drop(container);
        assert_eq!(0, key.bits());
    }

    #[test]
    fn debug_omits_key_bytes() {
        let lent = KeyMaterial::from_slice(b"lent-secret");
        let mut container = PrivateKeyContainer::new().unwrap();
        container.set_encoded_key(b"encoded-secret").unwrap();
        container.attach_key_data(KeyData::Borrowed(&lent));

        let debug = format!("{container:?}");
        assert_eq!(
            "PrivateKeyContainer { algorithm_nid: None, encoded_key_len: 14, decoded_key: None, key_data: Some(Borrowed(..)) }",
            debug
        );
    }

    #[test]
    fn auto_traits() {
        test::compile_time_assert_send::<PrivateKeyContainer<'static>>();
    }
}
