use ::serde::{Deserialize, Serialize};
use noether_core::errors::{AlgebraError, ErrorInfo};

fn serde_error(code: &str, err: impl ToString) -> AlgebraError {
    AlgebraError::Serde(ErrorInfo::new(code, err.to_string()))
}

/// Serializes a value into JSON bytes with object keys in sorted order.
///
/// Structs are routed through `serde_json::Value`, whose maps keep keys
/// sorted, so field declaration order never reaches the output.
pub fn to_canonical_json_bytes<T: Serialize>(value: &T) -> Result<Vec<u8>, AlgebraError> {
    let value = serde_json::to_value(value).map_err(|err| serde_error("json-encode", err))?;
    serde_json::to_vec(&value).map_err(|err| serde_error("json-write", err))
}

/// Restores a value from JSON bytes.
pub fn from_json_slice<T: for<'de> Deserialize<'de>>(data: &[u8]) -> Result<T, AlgebraError> {
    serde_json::from_slice(data).map_err(|err| serde_error("json-read", err))
}
