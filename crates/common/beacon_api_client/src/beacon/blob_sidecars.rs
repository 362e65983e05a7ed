use beacon_query_api_types_beacon::blob_sidecar::BlobSidecar;
use beacon_query_api_types_common::id::ID;

use crate::{
    context::RequestContext,
    error::Error,
    http_client::{ApiClient, ApiRequest},
    request::simple_request,
};

/// `GET /eth/v1/beacon/blob_sidecars/{block_id}`
///
/// Retrieves the blob sidecars of the given block.
pub async fn blob_sidecars<C: ApiClient + ?Sized>(
    ctx: &RequestContext,
    client: &C,
    block_id: &ID,
    dest: &mut Vec<BlobSidecar>,
) -> Result<bool, Error> {
    simple_request(
        ctx,
        client,
        ApiRequest::new(format!("/eth/v1/beacon/blob_sidecars/{block_id}")),
        dest,
    )
    .await
}
