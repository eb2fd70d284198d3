//! Bit-exact, aligned constant tables for JIT-emitted sin/cos stubs.
//!
//! A code generator that emits transcendental math routines as raw machine
//! code needs its constants at stable, suitably aligned addresses. This crate
//! owns those tables ([`consts`]) and a scalar evaluator built on them
//! ([`reference`]) that serves as an oracle for the generated code.
//!
//! ```
//! use stubconsts::{TableId, reference};
//!
//! let ctable = TableId::Ctable.table();
//! assert_eq!(ctable.len(), 512);
//! assert_eq!(ctable.addr() % 16, 0);
//! assert_eq!(TableId::One.table().lane(0), Some(1.0));
//! assert!((reference::sin(1.0) - 0.8414709848078965).abs() < 1e-15);
//! ```

#![no_std]

#[cfg(test)]
extern crate std;

pub mod consts;
mod error;
pub mod reference;

pub use consts::{ConstTable, TableId, table_address, verify_tables};
pub use error::TableError;
