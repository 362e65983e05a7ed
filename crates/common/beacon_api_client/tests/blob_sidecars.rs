mod common;

use alloy_primitives::{B256, Bytes};
use beacon_query_api_types_beacon::blob_sidecar::BlobSidecar;
use beacon_query_api_types_common::id::ID;
use beacon_query_client::{RequestContext, beacon::blob_sidecars::blob_sidecars};
use common::{MockClient, hex_of};
use serde_json::json;

fn blob_sidecar_json(index: u64) -> serde_json::Value {
    json!({
        "index": index.to_string(),
        "blob": "0x01020304",
        "kzg_commitment": hex_of("a0", 48),
        "kzg_proof": hex_of("b0", 48),
        "signed_block_header": {
            "message": {
                "slot": "100",
                "proposer_index": "12",
                "parent_root": hex_of("01", 32),
                "state_root": hex_of("02", 32),
                "body_root": hex_of("03", 32)
            },
            "signature": hex_of("c0", 96)
        },
        "kzg_commitment_inclusion_proof": [hex_of("04", 32), hex_of("05", 32)]
    })
}

#[tokio::test]
async fn test_blob_sidecars_found() -> anyhow::Result<()> {
    let client = MockClient::with_data(json!([blob_sidecar_json(0), blob_sidecar_json(1)]));
    let mut sidecars = Vec::new();

    let exists =
        blob_sidecars(&RequestContext::new(), &client, &ID::Slot(100), &mut sidecars).await?;

    assert!(exists);
    assert_eq!(client.last_target(), "/eth/v1/beacon/blob_sidecars/100");
    assert_eq!(sidecars.len(), 2);
    assert_eq!(sidecars[1].index, 1);
    assert_eq!(sidecars[0].blob, Bytes::from(vec![1u8, 2, 3, 4]));
    assert_eq!(sidecars[0].signed_block_header.message.proposer_index, 12);
    assert_eq!(
        sidecars[0].kzg_commitment_inclusion_proof,
        vec![B256::repeat_byte(0x04), B256::repeat_byte(0x05)]
    );

    Ok(())
}

#[tokio::test]
async fn test_blob_sidecars_not_found() -> anyhow::Result<()> {
    let client = MockClient::not_found();
    let original = vec![BlobSidecar::default()];
    let mut sidecars = original.clone();
    let block_root = B256::repeat_byte(0xee);

    let exists = blob_sidecars(
        &RequestContext::new(),
        &client,
        &ID::Root(block_root),
        &mut sidecars,
    )
    .await?;

    assert!(!exists);
    assert_eq!(sidecars, original);
    assert_eq!(
        client.last_target(),
        format!("/eth/v1/beacon/blob_sidecars/{}", hex_of("ee", 32))
    );

    Ok(())
}
