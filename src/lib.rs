// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//!  This library parses the GENDATA record written by `sgx_sign gendata`, the unsigned code
//!  signing structure (CSS) of an SGX enclave that is handed to an external signer.
//!
//!  The record is 256 bytes: a 128 byte CSS header followed by a 128 byte CSS body. It is
//!  read from a file with `Gendata::from_file()`, from any reader with `Gendata::load()` or
//!  from a byte slice with `Gendata::from_bytes()`. Field values are not validated; the
//!  expected constants are available in the `css` module for callers that want to check them.
//!
//!  #
//!  ```no_run
//!  use sgx_gendata::Gendata;
//!  use std::error::Error;
//!
//!  fn main() -> Result<(), Box<dyn Error>> {
//!    let gendata = Gendata::from_file("gendata")?;
//!    println!("MRENCLAVE: {:02x?}", gendata.body.enclave_hash);
//!    println!("ISV_PRODID: {} ISV_SVN: {}", gendata.body.isv_prod_id, gendata.body.isv_svn);
//!    Ok(())
//!  }
//!  ```

pub mod css;

pub use css::layout::GENDATA_SIZE;
pub use css::{CssBody, CssHeader, Gendata, GendataError};
