//! Helpers for formatting ethereum types

use alloy_dyn_abi::DynSolValue;
use alloy_json_abi::{Function, Param, StateMutability};
use alloy_primitives::hex;
use itertools::Itertools;
use std::fmt;

/// [`DynSolValue`] formatter.
struct DynValueFormatter;

impl DynValueFormatter {
    /// Recursively formats a [`DynSolValue`].
    fn value(&self, value: &DynSolValue, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match value {
            DynSolValue::Address(inner) => write!(f, "{inner}"),
            DynSolValue::Function(inner) => write!(f, "{inner}"),
            DynSolValue::Bytes(inner) => f.write_str(&hex::encode_prefixed(inner)),
            DynSolValue::FixedBytes(inner, _) => write!(f, "{inner}"),
            DynSolValue::Uint(inner, _) => write!(f, "{inner}"),
            DynSolValue::Int(inner, _) => write!(f, "{inner}"),
            DynSolValue::Array(values) | DynSolValue::FixedArray(values) => {
                f.write_str("[")?;
                self.list(values, f)?;
                f.write_str("]")
            }
            DynSolValue::Tuple(values) => {
                f.write_str("(")?;
                self.list(values, f)?;
                f.write_str(")")
            }
            DynSolValue::String(inner) => write!(f, "{inner:?}"), // escape strings
            DynSolValue::Bool(inner) => write!(f, "{inner}"),
        }
    }

    /// Recursively formats a comma-separated list of [`DynSolValue`]s.
    fn list(&self, values: &[DynSolValue], f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, value) in values.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            self.value(value, f)?;
        }
        Ok(())
    }
}

/// Wrapper that implements [`fmt::Display`] for a [`DynSolValue`].
struct DynValueDisplay<'a>(&'a DynSolValue);

impl fmt::Display for DynValueDisplay<'_> {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        DynValueFormatter.value(self.0, f)
    }
}

/// Pretty-prints the given value into a string suitable for user output.
pub fn format_value(value: &DynSolValue) -> String {
    DynValueDisplay(value).to_string()
}

/// Formats a single parameter as it appears in a signature, `type name`.
pub fn format_param(param: &Param) -> String {
    let ty = param.selector_type();
    if param.name.is_empty() { ty.into_owned() } else { format!("{ty} {}", param.name) }
}

/// Formats a function as a one-line human-readable signature,
/// `name(type name, ...) -> (types)`, for display next to its input form.
pub fn format_function(func: &Function) -> String {
    let inputs = func.inputs.iter().map(format_param).join(", ");
    let mut out = format!("{}({inputs})", func.name);
    match func.state_mutability {
        StateMutability::Pure => out.push_str(" pure"),
        StateMutability::View => out.push_str(" view"),
        StateMutability::Payable => out.push_str(" payable"),
        StateMutability::NonPayable => {}
    }
    if !func.outputs.is_empty() {
        let outputs = func.outputs.iter().map(format_param).join(", ");
        out.push_str(&format!(" -> ({outputs})"));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy_primitives::{U256, address};

    #[test]
    fn formats_signatures() {
        let func = crate::abi::get_func(
            "function transfer(address to, uint256 amount) returns (bool)",
        )
        .unwrap();
        assert_eq!(format_function(&func), "transfer(address to, uint256 amount) -> (bool)");

        let func = crate::abi::get_func("function greet() view returns (string)").unwrap();
        assert_eq!(format_function(&func), "greet() view -> (string)");

        let func = crate::abi::get_func("function deposit() payable").unwrap();
        assert_eq!(format_function(&func), "deposit() payable");
    }

    #[test]
    fn formats_values() {
        // copied from testcases in https://github.com/ethereum/EIPs/blob/master/EIPS/eip-55.md
        assert_eq!(
            format_value(&DynSolValue::Address(address!(
                "0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed"
            ))),
            "0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed",
        );
        assert_eq!(format_value(&DynSolValue::Uint(U256::from(1234), 256)), "1234");
        assert_eq!(
            format_value(&DynSolValue::Array(vec![
                DynSolValue::String("foo".into()),
                DynSolValue::String("bar".into()),
            ])),
            r#"["foo", "bar"]"#,
        );
    }
}
