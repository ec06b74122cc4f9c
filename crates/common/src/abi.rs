//! ABI related helper functions.
//!
//! This is the strict counterpart of the form layer's best-effort coercion:
//! every raw value must parse as its parameter's type, or the whole operation
//! fails with a contextual error. It sits at the boundary to whatever
//! prepares and submits the actual call.

use alloy_dyn_abi::{DynSolType, DynSolValue, JsonAbiExt};
use alloy_json_abi::{Function, Param};
use eyre::{Context, Result};

/// Coerces a single string to a [`DynSolValue`] given a type string.
pub fn coerce_value(ty: &str, arg: &str) -> Result<DynSolValue> {
    let ty = DynSolType::parse(ty)?;
    Ok(ty.coerce_str(arg)?)
}

/// Coerces each string argument to the matching parameter's type.
///
/// Arguments are zipped with `inputs` in order; extra arguments are ignored.
pub fn encode_args<I, S>(inputs: &[Param], args: I) -> Result<Vec<DynSolValue>>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    std::iter::zip(inputs, args)
        .map(|(input, arg)| {
            coerce_value(&input.selector_type(), arg.as_ref())
                .wrap_err_with(|| format!("could not coerce argument `{}`", input.name))
        })
        .collect()
}

/// Given a function and its string arguments, coerces the args to
/// [`DynSolValue`]s and ABI-encodes them into calldata, selector included.
pub fn encode_function_args<I, S>(func: &Function, args: I) -> Result<Vec<u8>>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    trace!(func = %func.signature(), "encoding function call");
    Ok(func.abi_encode_input(&encode_args(&func.inputs, args)?)?)
}

/// Given a function signature string, it tries to parse it as a `Function`.
pub fn get_func(sig: &str) -> Result<Function> {
    Function::parse(sig).wrap_err("could not parse function signature")
}
