// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0 OR ISC

#![allow(clippy::doc_markdown)]
//! Lifecycle management for the X.509 private-key container (`X509_PKEY`) using
//! [*AWS-LC*](https://github.com/awslabs/aws-lc) through either the
//! [*aws-lc-sys*](https://crates.io/crates/aws-lc-sys) or
//! [*aws-lc-fips-sys*](https://crates.io/crates/aws-lc-fips-sys) FFI crates.
//!
//! A [`PrivateKeyContainer`] holds a private key in two parallel forms:
//!
//! * the encoded form: an algorithm identifier together with the serialized key
//!   bytes, both always present;
//! * the decoded form: an optional usable [`DecodedKey`] and an optional
//!   format-specific auxiliary payload ([`KeyData`]).
//!
//! Construction either yields a complete container or fails with
//! [`error::AllocationFailure`] after releasing everything it had built so far.
//! Teardown is `Drop`; it releases every present field exactly once, except for
//! a [`KeyData::Borrowed`] payload, which belongs to the caller.
//!
//! ```
//! use x509_pkey::{KeyData, KeyMaterial, PrivateKeyContainer};
//!
//! let mut container = PrivateKeyContainer::new().unwrap();
//! assert!(container.encoded_key().is_empty());
//! assert!(container.algorithm_nid().is_none());
//!
//! container.set_encoded_key(&[0x30, 0x03, 0x02, 0x01, 0x00]).unwrap();
//! container.attach_key_data(KeyData::Owned(KeyMaterial::from_slice(b"aux")));
//! assert!(container.key_data().unwrap().is_owned());
//! ```
//!
//! # Feature Flags
//!
//! #### aws-lc-sys (default)
//!
//! Use the [*aws-lc-sys*](https://crates.io/crates/aws-lc-sys) crate for the
//! underlying ASN.1 and key objects.
//!
//! #### fips
//!
//! Use the [*aws-lc-fips-sys*](https://crates.io/crates/aws-lc-fips-sys) crate instead.
//! When both features are enabled, `fips` wins.
//!
//! #### asan
//!
//! Performs an "address sanitizer" build of AWS-LC. This is the easiest way to confirm
//! that no container path leaks an allocation.
//!
//! #### bindgen
//!
//! Causes the selected FFI crate to generate fresh bindings instead of using the
//! pre-generated ones. This requires `libclang`.

#![warn(missing_docs)]
#![warn(clippy::exhaustive_enums)]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]

#[cfg(feature = "fips")]
extern crate aws_lc_fips_sys as aws_lc;

#[cfg(not(feature = "fips"))]
extern crate aws_lc_sys as aws_lc;
extern crate core;

pub mod error;

mod algorithm;
mod allocator;
mod container;
mod decoded_key;
mod key_data;
mod octet_string;
mod pkey;
mod ptr;

pub use decoded_key::DecodedKey;
pub use key_data::{KeyData, KeyMaterial};
pub use pkey::PrivateKeyContainer;

use aws_lc::CRYPTO_library_init;
use std::sync::Once;

static START: Once = Once::new();

#[inline]
/// Initialize the *AWS-LC* library. (This should generally not be needed.)
pub fn init() {
    START.call_once(|| unsafe {
        CRYPTO_library_init();
    });
}
