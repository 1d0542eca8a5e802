// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

// Types follow the SGX SIGSTRUCT header and body as emitted by
// `sgx_sign gendata`, without the key, signature and key-dependent
// trailer that only exist in the signed structure.

pub mod layout;

use layout::GENDATA_SIZE;
use log::{debug, trace};
use serde::{Deserialize, Serialize};
use serde_big_array::BigArray;
use std::fmt;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use thiserror::Error;

pub const CSS_HEADER_MAGIC: [u8; 12] = [
    0x06, 0x00, 0x00, 0x00, 0xE1, 0x00, 0x00, 0x00, 0x00, 0x00, 0x01, 0x00,
];
pub const CSS_HEADER2_MAGIC: [u8; 16] = [
    0x01, 0x01, 0x00, 0x00, 0x60, 0x00, 0x00, 0x00, 0x60, 0x00, 0x00, 0x00, 0x01, 0x00, 0x00, 0x00,
];
pub const MODULE_VENDOR_INTEL: u32 = 0x8086;
pub const MODULE_VENDOR_ISV: u32 = 0x0000;
pub const CSS_TYPE_DEBUG: u32 = 1 << 31;

#[derive(Error, Debug)]
pub enum GendataError {
    #[error("insufficient data for GENDATA: expected {expected} bytes, got {actual}")]
    InsufficientData { expected: usize, actual: usize },
    #[error("IO error")]
    Io(#[from] std::io::Error),
    #[error("binary parse error")]
    Parse(#[from] bincode::Error),
}

#[derive(Copy, Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct CssHeader {
    pub header: [u8; 12],
    /// Bit 31 set for debug enclaves, all other bits zero.
    pub r#type: u32,
    pub module_vendor: u32,
    /// Build date as `yyyymmdd`.
    pub date: u32,
    pub header2: [u8; 16],
    /// Nonzero only for launch enclaves.
    pub hw_version: u32,
    #[serde(with = "BigArray")]
    pub reserved: [u8; 84],
}

impl CssHeader {
    pub fn is_debug(&self) -> bool {
        self.r#type & CSS_TYPE_DEBUG != 0
    }

    pub fn is_launch_enclave(&self) -> bool {
        self.hw_version != 0
    }
}

#[derive(Copy, Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct CssBody {
    pub misc_select: u32,
    pub misc_mask: u32,
    pub reserved: [u8; 4],
    pub isv_family_id: [u8; 16],
    /// Flags followed by XFRM.
    pub attributes: [u64; 2],
    pub attribute_mask: [u64; 2],
    /// MRENCLAVE
    pub enclave_hash: [u8; 32],
    pub reserved2: [u8; 16],
    pub isvext_prod_id: [u8; 16],
    pub isv_prod_id: u16,
    pub isv_svn: u16,
}

/// The unsigned CSS data produced by `sgx_sign gendata`.
///
/// Decoding is purely structural: magic values, reserved fields and
/// vendor ids are exposed as read and left for the caller to check.
#[derive(Copy, Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Gendata {
    pub header: CssHeader,
    pub body: CssBody,
}

impl Gendata {
    /// Read a GENDATA record from the current position of `reader`.
    ///
    /// At most `GENDATA_SIZE` bytes are consumed, trailing data is left
    /// in the reader.
    pub fn load<R: Read>(reader: R) -> Result<Self, GendataError> {
        let mut bytes = Vec::with_capacity(GENDATA_SIZE);
        reader.take(GENDATA_SIZE as u64).read_to_end(&mut bytes)?;
        trace!("read {} GENDATA bytes", bytes.len());
        Self::from_bytes(&bytes)
    }

    /// Read a GENDATA record from the start of the file at `path`.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, GendataError> {
        let file = File::open(path)?;
        Self::load(file)
    }

    /// Parse a GENDATA record from a byte slice, ignoring bytes past the
    /// record.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, GendataError> {
        if bytes.len() < GENDATA_SIZE {
            debug!(
                "GENDATA too short: expected {} bytes, got {}",
                GENDATA_SIZE,
                bytes.len()
            );
            return Err(GendataError::InsufficientData {
                expected: GENDATA_SIZE,
                actual: bytes.len(),
            });
        }
        let gendata: Gendata = bincode::deserialize(&bytes[..GENDATA_SIZE])?;
        debug!(
            "parsed GENDATA: module_vendor={:#06x} isv_prod_id={} isv_svn={}",
            gendata.header.module_vendor, gendata.body.isv_prod_id, gendata.body.isv_svn
        );
        Ok(gendata)
    }
}

impl TryFrom<&[u8]> for Gendata {
    type Error = GendataError;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        Self::from_bytes(bytes)
    }
}

struct Hex<'a>(&'a [u8]);

impl fmt::Display for Hex<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in self.0 {
            write!(f, "{:02x}", byte)?;
        }
        Ok(())
    }
}

impl fmt::Display for Gendata {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let CssHeader {
            header,
            r#type,
            module_vendor,
            date,
            header2,
            hw_version,
            reserved,
        } = &self.header;
        writeln!(f, "Header:")?;
        writeln!(f, "  header:         {}", Hex(header))?;
        writeln!(f, "  type:           {:#010x}", r#type)?;
        writeln!(f, "  module_vendor:  {:#06x}", module_vendor)?;
        writeln!(f, "  date:           {:#010x}", date)?;
        writeln!(f, "  header2:        {}", Hex(header2))?;
        writeln!(f, "  hw_version:     {:#010x}", hw_version)?;
        writeln!(f, "  reserved:       {}", Hex(reserved))?;

        let body = &self.body;
        writeln!(f, "Body:")?;
        writeln!(f, "  misc_select:    {:#010x}", body.misc_select)?;
        writeln!(f, "  misc_mask:      {:#010x}", body.misc_mask)?;
        writeln!(f, "  reserved:       {}", Hex(&body.reserved))?;
        writeln!(f, "  isv_family_id:  {}", Hex(&body.isv_family_id))?;
        writeln!(
            f,
            "  attributes:     {:#018x} {:#018x}",
            body.attributes[0], body.attributes[1]
        )?;
        writeln!(
            f,
            "  attribute_mask: {:#018x} {:#018x}",
            body.attribute_mask[0], body.attribute_mask[1]
        )?;
        writeln!(f, "  enclave_hash:   {}", Hex(&body.enclave_hash))?;
        writeln!(f, "  reserved2:      {}", Hex(&body.reserved2))?;
        writeln!(f, "  isvext_prod_id: {}", Hex(&body.isvext_prod_id))?;
        writeln!(f, "  isv_prod_id:    {}", body.isv_prod_id)?;
        write!(f, "  isv_svn:        {}", body.isv_svn)
    }
}
