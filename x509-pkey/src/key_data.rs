// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0 OR ISC

//! Auxiliary key data and who is responsible for releasing it.

use core::fmt;

use zeroize::{Zeroize, ZeroizeOnDrop};

/// A format-specific auxiliary payload attached to a decoded key.
///
/// The variant decides whether the holder releases the payload:
///
/// * `Owned` payloads are dropped together with the holder.
/// * `Borrowed` payloads are lent for `'a` and are never released by the
///   holder. The lender must outlive the holder; the borrow checker enforces it.
#[allow(clippy::exhaustive_enums)]
pub enum KeyData<'a, T> {
    /// The holder owns the payload and releases it on drop.
    Owned(T),
    /// The payload is lent by the caller and outlives the holder.
    Borrowed(&'a T),
}

impl<'a, T> KeyData<'a, T> {
    /// Returns true if the payload is released together with its holder.
    #[must_use]
    pub fn is_owned(&self) -> bool {
        matches!(self, KeyData::Owned(_))
    }

    /// Returns the payload, whichever way it is held.
    #[must_use]
    pub fn get(&self) -> &T {
        match self {
            KeyData::Owned(value) => value,
            KeyData::Borrowed(value) => value,
        }
    }

    /// Returns the owned payload, or `None` if it was only borrowed.
    #[must_use]
    pub fn into_owned(self) -> Option<T> {
        match self {
            KeyData::Owned(value) => Some(value),
            KeyData::Borrowed(_) => None,
        }
    }
}

impl<T> AsRef<T> for KeyData<'_, T> {
    #[inline]
    fn as_ref(&self) -> &T {
        self.get()
    }
}

// Never prints the payload.
impl<T> fmt::Debug for KeyData<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KeyData::Owned(_) => f.write_str("Owned(..)"),
            KeyData::Borrowed(_) => f.write_str("Borrowed(..)"),
        }
    }
}

/// Owned auxiliary key bytes, zeroized on drop.
pub struct KeyMaterial {
    bytes: Vec<u8>,
}

impl KeyMaterial {
    /// Takes ownership of `bytes`.
    #[must_use]
    pub fn new(bytes: Vec<u8>) -> Self {
        Self { bytes }
    }

    /// Copies `bytes` into a new payload.
    #[must_use]
    pub fn from_slice(bytes: &[u8]) -> Self {
        Self::new(bytes.to_vec())
    }

    /// Copies `slice` into a new payload and zeroizes `slice`.
    #[must_use]
    pub fn take_from_slice(slice: &mut [u8]) -> Self {
        let owned = slice.to_vec();
        slice.zeroize();
        Self::new(owned)
    }
}

impl AsRef<[u8]> for KeyMaterial {
    #[inline]
    fn as_ref(&self) -> &[u8] {
        &self.bytes
    }
}

impl Zeroize for KeyMaterial {
    fn zeroize(&mut self) {
        self.bytes.zeroize();
    }
}

impl Drop for KeyMaterial {
    fn drop(&mut self) {
        self.zeroize();
    }
}

impl ZeroizeOnDrop for KeyMaterial {}

impl fmt::Debug for KeyMaterial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("KeyMaterial(...)")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test;
    use std::cell::Cell;

    struct DropCounter<'c>(&'c Cell<usize>);

    impl Drop for DropCounter<'_> {
        fn drop(&mut self) {
            self.0.set(self.0.get() + 1);
        }
    }

    #[test]
    fn owned_payload_is_dropped_with_holder() {
        let drops = Cell::new(0);
        let data = KeyData::Owned(DropCounter(&drops));
        assert!(data.is_owned());
        drop(data);
        assert_eq!(1, drops.get());
    }

    #[test]
    fn borrowed_payload_outlives_holder() {
        let drops = Cell::new(0);
        let lender = DropCounter(&drops);
        let data = KeyData::Borrowed(&lender);
        assert!(!data.is_owned());
        assert!(data.into_owned().is_none());
        assert_eq!(0, drops.get());
        drop(lender);
        assert_eq!(1, drops.get());
    }

    #[test]
    fn get_reads_either_variant() {
        let lent = KeyMaterial::from_slice(b"lent");
        let owned: KeyData<KeyMaterial> = KeyData::Owned(KeyMaterial::from_slice(b"owned"));
        let borrowed = KeyData::Borrowed(&lent);
        assert_eq!(b"owned", owned.get().as_ref());
        assert_eq!(b"lent", borrowed.as_ref().as_ref());
    }

    #[test]
    fn debug_hides_contents() {
        let material = KeyMaterial::from_slice(b"secret");
        assert_eq!("KeyMaterial(...)", format!("{material:?}"));
        assert_eq!("Borrowed(..)", format!("{:?}", KeyData::Borrowed(&material)));
        assert_eq!("Owned(..)", format!("{:?}", KeyData::Owned(material)));
    }

    #[test]
    fn take_from_slice_zeroizes_source() {
        let mut slice = [1, 2, 3];
        let material = KeyMaterial::take_from_slice(&mut slice);
        assert_eq!(material.as_ref(), &[1, 2, 3]);
        assert_eq!(slice, [0, 0, 0]);
    }

    #[test]
    fn zeroize_wipes_bytes() {
        let mut material = KeyMaterial::new(vec![0xAA; 16]);
        material.zeroize();
        assert!(material.as_ref().is_empty());
    }

    #[test]
    fn key_material_is_wiped_on_drop() {
        test::compile_time_assert_zeroize_on_drop::<KeyMaterial>();
        test::compile_time_assert_zeroize::<KeyMaterial>();
    }
}
