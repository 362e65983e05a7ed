pub mod blob_sidecar;
pub mod checkpoint;
pub mod committee;
pub mod fork;
pub mod id;
pub mod randao;
pub mod validator;
pub mod withdrawal;

use alloy_primitives::FixedBytes;

/// Compressed BLS public key, 0x-prefixed hex on the wire.
pub type PublicKey = FixedBytes<48>;

/// BLS signature, 0x-prefixed hex on the wire.
pub type Signature = FixedBytes<96>;
