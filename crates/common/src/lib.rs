//! Common ABI utilities for Blacksmith's contract tooling.

#![cfg_attr(not(test), warn(unused_crate_dependencies))]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[macro_use]
extern crate tracing;

pub mod abi;
pub mod contracts;
pub mod fmt;
