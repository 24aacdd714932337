// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0 OR ISC

use crate::aws_lc::{
    ASN1_OCTET_STRING_set, ASN1_STRING_get0_data, ASN1_STRING_length, ASN1_OCTET_STRING,
};
use crate::error::AllocationFailure;
use crate::ptr::LcPtr;
use core::ffi::c_int;

impl LcPtr<ASN1_OCTET_STRING> {
    pub(crate) fn as_bytes(&self) -> &[u8] {
        let (data, len) = unsafe {
            (
                ASN1_STRING_get0_data(*self.as_const()),
                ASN1_STRING_length(*self.as_const()),
            )
        };
        // A freshly allocated string has no buffer at all.
        match usize::try_from(len) {
            Ok(len) if len > 0 && !data.is_null() => unsafe {
                core::slice::from_raw_parts(data, len)
            },
            _ => &[],
        }
    }

    /// Replaces the contents with a copy of `bytes`.
    pub(crate) fn set_bytes(&mut self, bytes: &[u8]) -> Result<(), AllocationFailure> {
        let len = c_int::try_from(bytes.len())?;
        if 1 != unsafe { ASN1_OCTET_STRING_set(*self.as_mut(), bytes.as_ptr(), len) } {
            return Err(AllocationFailure);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::aws_lc::ASN1_OCTET_STRING_new;
    use crate::ptr::LcPtr;

    #[test]
    fn fresh_string_is_empty() {
        let string = LcPtr::new(unsafe { ASN1_OCTET_STRING_new() }).unwrap();
        assert!(string.as_bytes().is_empty());
    }

    #[test]
    fn set_bytes_copies_and_replaces() {
        let mut string = LcPtr::new(unsafe { ASN1_OCTET_STRING_new() }).unwrap();
        let mut source = vec![0x04, 0x02, 0xAB, 0xCD];
        string.set_bytes(&source).unwrap();
        source.fill(0);
        assert_eq!(string.as_bytes(), &[0x04, 0x02, 0xAB, 0xCD]);

        string.set_bytes(&[0x05, 0x00]).unwrap();
        assert_eq!(string.as_bytes(), &[0x05, 0x00]);

        string.set_bytes(&[]).unwrap();
        assert!(string.as_bytes().is_empty());
    }

    // The length check happens before AWS-LC reads from `bytes`, so the pages
    // of this buffer are never touched.
    #[cfg(target_pointer_width = "64")]
    #[test]
    fn set_bytes_rejects_length_beyond_c_int() {
        use crate::error::AllocationFailure;
        use core::ffi::c_int;
        use std::alloc::{alloc_zeroed, dealloc, Layout};

        let len = usize::try_from(c_int::MAX).unwrap() + 1;
        let layout = Layout::array::<u8>(len).unwrap();
        let data = unsafe { alloc_zeroed(layout) };
        if data.is_null() {
            // No address space for the buffer; nothing to check.
            return;
        }
        let too_long = unsafe { core::slice::from_raw_parts(data, len) };

        let mut string = LcPtr::new(unsafe { ASN1_OCTET_STRING_new() }).unwrap();
        string.set_bytes(&[0x01, 0x02]).unwrap();
        assert_eq!(Err(AllocationFailure), string.set_bytes(too_long));
        assert_eq!(string.as_bytes(), &[0x01, 0x02]);

        unsafe { dealloc(data, layout) };
    }
}
