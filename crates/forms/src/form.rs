//! Editable argument state for a single contract function.

use crate::{CoercedArg, coerce};
use alloy_json_abi::Function;
use blacksmith_common::{abi, fmt::format_function};
use eyre::Result;

/// One editable text value per parameter of a contract function.
///
/// The form is created all-empty when a function is selected for display and
/// discarded with it; values are only ever overwritten in place, one slot at
/// a time. [`Self::args`] is a pure projection of the current values and is
/// recomputed on every call, so there is no staleness to invalidate.
#[derive(Clone, Debug)]
pub struct FunctionForm {
    func: Function,
    values: Vec<String>,
}

impl FunctionForm {
    /// Creates a form for `func` with every value initialized to the empty
    /// string.
    pub fn new(func: Function) -> Self {
        let values = vec![String::new(); func.inputs.len()];
        Self { func, values }
    }

    /// The function this form collects arguments for.
    pub fn func(&self) -> &Function {
        &self.func
    }

    /// The function's name.
    pub fn name(&self) -> &str {
        &self.func.name
    }

    /// The function's one-line signature, for display next to the inputs.
    pub fn signature(&self) -> String {
        format_function(&self.func)
    }

    /// The current raw text values, one per parameter, for echoing back into
    /// editable fields.
    pub fn values(&self) -> &[String] {
        &self.values
    }

    /// Overwrites the value at `index`, leaving all other slots untouched.
    ///
    /// `index` must be within the parameter list; out of range is a caller
    /// contract violation and a no-op in release builds.
    pub fn update_value(&mut self, index: usize, value: impl Into<String>) {
        debug_assert!(index < self.values.len(), "argument index {index} out of range");
        if let Some(slot) = self.values.get_mut(index) {
            *slot = value.into();
            trace!(func = %self.func.name, index, "updated argument");
        }
    }

    /// Derives the typed argument list from the current values.
    ///
    /// Same arity and order as the parameter list. Values that do not parse
    /// as their parameter's type come back as [`CoercedArg::Raw`].
    pub fn args(&self) -> Vec<CoercedArg> {
        std::iter::zip(&self.func.inputs, &self.values)
            .map(|(input, value)| coerce(&input.selector_type(), value))
            .collect()
    }

    /// Replaces the function descriptor, resetting every value to the empty
    /// string regardless of prior state.
    pub fn set_function(&mut self, func: Function) {
        self.values = vec![String::new(); func.inputs.len()];
        self.func = func;
    }

    /// ABI-encodes the current values into calldata for the invocation
    /// layer, selector included.
    ///
    /// Unlike [`Self::args`] this is strict: any value that does not parse
    /// as its parameter's type is an error.
    pub fn calldata(&self) -> Result<Vec<u8>> {
        abi::encode_function_args(&self.func, &self.values)
    }
}
