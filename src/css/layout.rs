// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Byte layout of the GENDATA record.
//!
//! The record mirrors a packed C struct, so offsets are spelled out here
//! instead of being derived from Rust type layout. `CssBody::attributes`
//! sits at body offset 28, which a naturally aligned `u64` array would pad.

use static_assertions::const_assert_eq;
use std::ops::Range;

pub const CSS_HEADER_SIZE: usize = 128;
pub const CSS_BODY_SIZE: usize = 128;
pub const GENDATA_SIZE: usize = CSS_HEADER_SIZE + CSS_BODY_SIZE;

pub const HEADER_RANGE: Range<usize> = 0..CSS_HEADER_SIZE;
pub const BODY_RANGE: Range<usize> = CSS_HEADER_SIZE..GENDATA_SIZE;

const fn field(offset: usize, width: usize) -> Range<usize> {
    offset..(offset + width)
}

/// Field ranges relative to the start of the header.
pub mod header {
    use super::field;
    use std::ops::Range;

    pub const HEADER: Range<usize> = field(0, 12);
    pub const TYPE: Range<usize> = field(12, 4);
    pub const MODULE_VENDOR: Range<usize> = field(16, 4);
    pub const DATE: Range<usize> = field(20, 4);
    pub const HEADER2: Range<usize> = field(24, 16);
    pub const HW_VERSION: Range<usize> = field(40, 4);
    pub const RESERVED: Range<usize> = field(44, 84);
}

/// Field ranges relative to the start of the body.
pub mod body {
    use super::field;
    use std::ops::Range;

    pub const MISC_SELECT: Range<usize> = field(0, 4);
    pub const MISC_MASK: Range<usize> = field(4, 4);
    pub const RESERVED: Range<usize> = field(8, 4);
    pub const ISV_FAMILY_ID: Range<usize> = field(12, 16);
    pub const ATTRIBUTES: Range<usize> = field(28, 16);
    pub const ATTRIBUTE_MASK: Range<usize> = field(44, 16);
    pub const ENCLAVE_HASH: Range<usize> = field(60, 32);
    pub const RESERVED2: Range<usize> = field(92, 16);
    pub const ISVEXT_PROD_ID: Range<usize> = field(108, 16);
    pub const ISV_PROD_ID: Range<usize> = field(124, 2);
    pub const ISV_SVN: Range<usize> = field(126, 2);
}

/// Translate a body-relative range into a record offset.
pub const fn in_body(range: Range<usize>) -> Range<usize> {
    (BODY_RANGE.start + range.start)..(BODY_RANGE.start + range.end)
}

// fields tile each region with no gap or overlap
const_assert_eq!(header::HEADER.start, 0);
const_assert_eq!(header::HEADER.end, header::TYPE.start);
const_assert_eq!(header::TYPE.end, header::MODULE_VENDOR.start);
const_assert_eq!(header::MODULE_VENDOR.end, header::DATE.start);
const_assert_eq!(header::DATE.end, header::HEADER2.start);
const_assert_eq!(header::HEADER2.end, header::HW_VERSION.start);
const_assert_eq!(header::HW_VERSION.end, header::RESERVED.start);
const_assert_eq!(header::RESERVED.end, CSS_HEADER_SIZE);

const_assert_eq!(body::MISC_SELECT.start, 0);
const_assert_eq!(body::MISC_SELECT.end, body::MISC_MASK.start);
const_assert_eq!(body::MISC_MASK.end, body::RESERVED.start);
const_assert_eq!(body::RESERVED.end, body::ISV_FAMILY_ID.start);
const_assert_eq!(body::ISV_FAMILY_ID.end, body::ATTRIBUTES.start);
const_assert_eq!(body::ATTRIBUTES.end, body::ATTRIBUTE_MASK.start);
const_assert_eq!(body::ATTRIBUTE_MASK.end, body::ENCLAVE_HASH.start);
const_assert_eq!(body::ENCLAVE_HASH.end, body::RESERVED2.start);
const_assert_eq!(body::RESERVED2.end, body::ISVEXT_PROD_ID.start);
const_assert_eq!(body::ISVEXT_PROD_ID.end, body::ISV_PROD_ID.start);
const_assert_eq!(body::ISV_PROD_ID.end, body::ISV_SVN.start);
const_assert_eq!(body::ISV_SVN.end, CSS_BODY_SIZE);

const_assert_eq!(HEADER_RANGE.end, BODY_RANGE.start);
const_assert_eq!(GENDATA_SIZE, 256);
