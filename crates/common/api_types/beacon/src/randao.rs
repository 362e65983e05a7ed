use alloy_primitives::B256;
use serde::{Deserialize, Serialize};

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RandaoMixResponse {
    pub randao: B256,
}
