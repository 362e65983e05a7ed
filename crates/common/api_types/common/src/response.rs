use alloy_primitives::B256;
use serde::{Deserialize, Serialize};

/// A DataResponse data struct that can be used to wrap data type
/// used for json rpc responses
///
/// Fields that sit next to `data` in the envelope, such as `execution_optimistic`,
/// `finalized` or `version`, are ignored when decoding.
///
/// # Example
/// {
///  "data": json!(T)
/// }
#[derive(Debug, Serialize, Deserialize)]
pub struct DataResponse<T> {
    pub data: T,
}

impl<T: Serialize> DataResponse<T> {
    pub fn new(data: T) -> Self {
        Self { data }
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RootResponse {
    pub root: B256,
}

impl RootResponse {
    pub fn new(root: B256) -> Self {
        Self { root }
    }
}

/// Error body returned by beacon nodes for failed requests.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorMessage {
    pub code: u16,
    pub message: String,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_data_response_ignores_envelope_metadata() -> anyhow::Result<()> {
        let response: DataResponse<RootResponse> = serde_json::from_value(json!({
            "execution_optimistic": false,
            "finalized": true,
            "data": {
                "root": "0x00000000000000000000000000000000000000000000000000000000000000ab"
            }
        }))?;

        assert_eq!(response.data.root, B256::with_last_byte(0xab));

        Ok(())
    }
}
