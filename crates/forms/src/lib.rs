//! # blacksmith-forms
//!
//! Per-function argument form state for invoking smart-contract functions.
//!
//! A [`FunctionForm`] owns one editable text value per parameter of a
//! contract function and derives, on demand, the best-effort typed argument
//! list ([`CoercedArg`]s) to hand to an invocation layer. Coercion never
//! fails: text that does not parse as its parameter's type is passed through
//! unchanged, so the form stays renderable on every keystroke.

#![cfg_attr(not(test), warn(unused_crate_dependencies))]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[macro_use]
extern crate tracing;

mod coerce;
mod form;

pub use coerce::{CoercedArg, coerce};
pub use form::FunctionForm;
