//! Best-effort coercion of raw text into typed call arguments.

use alloy_dyn_abi::{DynSolType, DynSolValue};
use alloy_primitives::{I256, U256};
use blacksmith_common::fmt::format_value;
use std::fmt;

/// The outcome of best-effort coercion for a single parameter.
///
/// Unlike [`blacksmith_common::abi::coerce_value`], producing one of these
/// can never fail: text that does not parse as its parameter's type is kept
/// as [`CoercedArg::Raw`] and it is up to the invocation layer to reject it.
#[derive(Clone, Debug, PartialEq)]
pub enum CoercedArg {
    /// The text parsed as the parameter's type.
    Typed(DynSolValue),
    /// The unmodified raw text, kept when parsing failed or the type takes
    /// strings as-is.
    Raw(String),
    /// Per-element outcomes for an array parameter, in input order.
    Array(Vec<CoercedArg>),
}

impl CoercedArg {
    /// Upgrades this argument to a strictly typed [`DynSolValue`] of the
    /// expected type, or `None` if any raw text in it is not valid for that
    /// type.
    pub fn as_sol_value(&self, ty: &DynSolType) -> Option<DynSolValue> {
        match self {
            Self::Typed(value) => Some(value.clone()),
            Self::Raw(raw) => ty.coerce_str(raw).ok(),
            Self::Array(elements) => {
                let (DynSolType::Array(inner) | DynSolType::FixedArray(inner, _)) = ty else {
                    return None;
                };
                let values = elements
                    .iter()
                    .map(|element| element.as_sol_value(inner))
                    .collect::<Option<Vec<_>>>()?;
                match ty {
                    DynSolType::FixedArray(_, len) if values.len() != *len => None,
                    DynSolType::FixedArray(..) => Some(DynSolValue::FixedArray(values)),
                    _ => Some(DynSolValue::Array(values)),
                }
            }
        }
    }
}

impl fmt::Display for CoercedArg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Typed(value) => f.write_str(&format_value(value)),
            Self::Raw(raw) => f.write_str(raw),
            Self::Array(elements) => {
                f.write_str("[")?;
                for (i, element) in elements.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{element}")?;
                }
                f.write_str("]")
            }
        }
    }
}

/// Coerces a raw text value against a parameter type string.
///
/// Total over its inputs: an unrecognized type tag or unparseable text
/// degrades to [`CoercedArg::Raw`] rather than erroring, so a single bad
/// parameter never breaks the surrounding form.
pub fn coerce(ty: &str, raw: &str) -> CoercedArg {
    let Ok(ty) = DynSolType::parse(ty) else {
        trace!(ty, "unrecognized parameter type, passing value through");
        return CoercedArg::Raw(raw.to_string());
    };
    coerce_typed(&ty, raw)
}

fn coerce_typed(ty: &DynSolType, raw: &str) -> CoercedArg {
    match ty {
        DynSolType::Uint(bits) => match raw.parse::<U256>() {
            Ok(value) => CoercedArg::Typed(DynSolValue::Uint(value, *bits)),
            Err(_) => CoercedArg::Raw(raw.to_string()),
        },
        DynSolType::Int(bits) => match raw.parse::<I256>() {
            Ok(value) => CoercedArg::Typed(DynSolValue::Int(value, *bits)),
            Err(_) => CoercedArg::Raw(raw.to_string()),
        },
        DynSolType::Array(inner) | DynSolType::FixedArray(inner, _) => {
            // Plain split semantics: an empty input is one empty element.
            CoercedArg::Array(
                raw.split(',').map(str::trim).map(|piece| element(inner, piece)).collect(),
            )
        }
        // Addresses, strings, bools, bytes and the rest are handed to the
        // invocation layer as typed.
        _ => CoercedArg::Raw(raw.to_string()),
    }
}

/// Array elements only get the numeric treatment; everything else stays the
/// split substring.
fn element(inner: &DynSolType, piece: &str) -> CoercedArg {
    match inner {
        DynSolType::Uint(_) | DynSolType::Int(_) => coerce_typed(inner, piece),
        _ => CoercedArg::Raw(piece.to_string()),
    }
}
