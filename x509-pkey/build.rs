// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0 OR ISC

fn main() {
    let has_backend = cfg!(feature = "aws-lc-sys") || cfg!(feature = "fips");
    assert!(
        has_backend,
        "one of the `aws-lc-sys` or `fips` crate features must be enabled."
    );

    if cfg!(feature = "fips") && cfg!(feature = "bindgen") {
        println!("cargo:warning=### `bindgen` regenerates the FIPS bindings; expect a slow build ###");
    }
}
