use std::{fmt, str::FromStr};

use alloy_primitives::hex;

use crate::PublicKey;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValidatorID {
    Index(u64),
    /// Rendered as a 0x-prefixed hex string
    PublicKey(PublicKey),
}

impl FromStr for ValidatorID {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.starts_with("0x") {
            PublicKey::from_str(s)
                .map(ValidatorID::PublicKey)
                .map_err(|err| format!("Invalid public key: {err}"))
        } else {
            s.parse::<u64>()
                .map(ValidatorID::Index)
                .map_err(|err| format!("Invalid validator index: {err}"))
        }
    }
}

impl fmt::Display for ValidatorID {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidatorID::Index(index) => write!(f, "{index}"),
            ValidatorID::PublicKey(public_key) => write!(f, "0x{}", hex::encode(public_key)),
        }
    }
}

impl From<u64> for ValidatorID {
    fn from(index: u64) -> Self {
        ValidatorID::Index(index)
    }
}

impl From<PublicKey> for ValidatorID {
    fn from(public_key: PublicKey) -> Self {
        ValidatorID::PublicKey(public_key)
    }
}
