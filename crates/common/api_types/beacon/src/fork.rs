use alloy_primitives::FixedBytes;
use serde::{Deserialize, Serialize};

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fork {
    pub previous_version: FixedBytes<4>,
    pub current_version: FixedBytes<4>,
    #[serde(with = "serde_utils::quoted_u64")]
    pub epoch: u64,
}
