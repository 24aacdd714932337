// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0 OR ISC

use crate::aws_lc::{
    OBJ_nid2obj, OBJ_obj2nid, X509_ALGOR_get0, X509_ALGOR_set0, ASN1_OBJECT, NID_undef,
    V_ASN1_UNDEF, X509_ALGOR,
};
use crate::error::Unspecified;
use crate::ptr::LcPtr;
use core::ffi::c_int;
use core::ptr::{null, null_mut};

impl LcPtr<X509_ALGOR> {
    /// The NID of the algorithm OID, or `NID_undef` if none is set.
    pub(crate) fn nid(&self) -> c_int {
        let mut object: *const ASN1_OBJECT = null();
        unsafe {
            X509_ALGOR_get0(&mut object, null_mut(), null_mut(), *self.as_const());
            OBJ_obj2nid(object)
        }
    }

    /// Sets the algorithm OID to the object named by `nid`, with absent parameters.
    pub(crate) fn set_nid(&mut self, nid: c_int) -> Result<(), Unspecified> {
        if nid == NID_undef {
            return Err(Unspecified);
        }
        // Objects for known NIDs are static; `X509_ALGOR_set0` takes them without copying.
        let object = unsafe { OBJ_nid2obj(nid) };
        if object.is_null() {
            return Err(Unspecified);
        }
        if 1 != unsafe { X509_ALGOR_set0(*self.as_mut(), object, V_ASN1_UNDEF, null_mut()) } {
            return Err(Unspecified);
        }
        Ok(())
    }
}
