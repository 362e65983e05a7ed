use std::{fmt, str::FromStr};

use alloy_primitives::{B256, hex};

/// Identifies a beacon state or block in a request path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ID {
    Head,
    Genesis,
    Finalized,
    Justified,
    Slot(u64),
    /// Rendered as a 0x-prefixed hex string
    Root(B256),
}

impl FromStr for ID {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "head" => Ok(ID::Head),
            "genesis" => Ok(ID::Genesis),
            "finalized" => Ok(ID::Finalized),
            "justified" => Ok(ID::Justified),
            _ if s.starts_with("0x") => B256::from_str(s)
                .map(ID::Root)
                .map_err(|err| format!("Invalid hex root: {err}")),
            _ => s
                .parse::<u64>()
                .map(ID::Slot)
                .map_err(|err| format!("Invalid slot: {err}")),
        }
    }
}

impl fmt::Display for ID {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ID::Head => write!(f, "head"),
            ID::Genesis => write!(f, "genesis"),
            ID::Finalized => write!(f, "finalized"),
            ID::Justified => write!(f, "justified"),
            ID::Slot(slot) => write!(f, "{slot}"),
            ID::Root(root) => write!(f, "0x{}", hex::encode(root)),
        }
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("head", ID::Head)]
    #[case("genesis", ID::Genesis)]
    #[case("finalized", ID::Finalized)]
    #[case("justified", ID::Justified)]
    #[case("123", ID::Slot(123))]
    #[case(
        "0x00000000000000000000000000000000000000000000000000000000000000ab",
        ID::Root(B256::with_last_byte(0xab))
    )]
    fn test_id_canonical_string(#[case] input: &str, #[case] expected: ID) {
        let id: ID = input.parse().expect("valid id");
        assert_eq!(id, expected);
        assert_eq!(id.to_string(), input);
    }

    #[test]
    fn test_id_rejects_garbage() {
        assert!("latest".parse::<ID>().is_err());
        assert!("0x1234".parse::<ID>().is_err());
        assert!("-1".parse::<ID>().is_err());
    }
}
