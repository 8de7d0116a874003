//! # sigfmt-core
//!
//! Buffered output and integer formatting that is safe to call while a
//! signal handler is running: no heap allocation, no locks, no global
//! mutable state, no recursion, and no calls into non-reentrant library
//! code. All working storage is caller-supplied or stack-resident, and
//! all I/O funnels through a single raw-write seam ([`writebuf::RawWrite`]).
//!
//! The companion `sigfmt-fd` crate binds that seam to a Unix file
//! descriptor; this crate contains only pure logic and is `unsafe`-free.

#![deny(unsafe_code)]

pub mod bitset;
pub mod fmt;
pub mod rand;
pub mod writebuf;

pub use fmt::{IntArg, IntConv, IntFormat, Precision, printf_int};
pub use writebuf::{RawWrite, WriteBuf};
