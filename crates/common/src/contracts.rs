//! Commonly used contract interface types and functions.

use alloy_json_abi::{Function, JsonAbi, StateMutability};
use eyre::{Context, Result};

/// Parses a contract's published interface description (a JSON ABI document).
pub fn parse_abi(json: &str) -> Result<JsonAbi> {
    serde_json::from_str(json).wrap_err("could not parse contract ABI")
}

/// Returns the callable functions of an ABI, in the ABI's iteration order.
pub fn abi_functions(abi: &JsonAbi) -> Vec<Function> {
    abi.functions().cloned().collect()
}

/// Whether calling the function cannot mutate contract state, so it can be
/// dispatched as a read call instead of a transaction.
pub fn is_read_function(func: &Function) -> bool {
    matches!(func.state_mutability, StateMutability::Pure | StateMutability::View)
}

/// Whether invoking the function requires a transaction.
pub fn is_write_function(func: &Function) -> bool {
    !is_read_function(func)
}

/// Whether the function accepts value along with the call.
pub fn is_payable(func: &Function) -> bool {
    func.state_mutability == StateMutability::Payable
}

#[cfg(test)]
mod tests {
    use super::*;
    use similar_asserts::assert_eq;

    const ABI: &str = r#"[
        {
            "type": "function",
            "name": "greet",
            "inputs": [],
            "outputs": [{ "name": "", "type": "string" }],
            "stateMutability": "view"
        },
        {
            "type": "function",
            "name": "setGreeting",
            "inputs": [{ "name": "greeting", "type": "string" }],
            "outputs": [],
            "stateMutability": "nonpayable"
        },
        {
            "type": "function",
            "name": "deposit",
            "inputs": [],
            "outputs": [],
            "stateMutability": "payable"
        }
    ]"#;

    #[test]
    fn parses_abi_documents() {
        let abi = parse_abi(ABI).unwrap();
        let funcs = abi_functions(&abi);
        assert_eq!(funcs.len(), 3);

        assert!(parse_abi("not json").is_err());
    }

    #[test]
    fn partitions_by_mutability() {
        let abi = parse_abi(ABI).unwrap();
        let funcs = abi_functions(&abi);

        let reads: Vec<_> =
            funcs.iter().filter(|f| is_read_function(f)).map(|f| f.name.as_str()).collect();
        let writes: Vec<_> =
            funcs.iter().filter(|f| is_write_function(f)).map(|f| f.name.as_str()).collect();

        assert_eq!(reads, ["greet"]);
        assert_eq!(writes.len(), 2);
        assert!(funcs.iter().any(|f| is_payable(f) && f.name == "deposit"));
    }
}
