use beacon_query_api_types_beacon::withdrawal::Withdrawal;
use beacon_query_api_types_common::id::ID;

use crate::{
    context::RequestContext,
    error::Error,
    http_client::{ApiClient, ApiRequest},
    request::simple_request,
};

/// `GET /eth/v1/builder/states/{state_id}/expected_withdrawals`
///
/// Retrieves the withdrawals expected in the block built on top of the given state.
pub async fn expected_withdrawals<C: ApiClient + ?Sized>(
    ctx: &RequestContext,
    client: &C,
    state_id: &ID,
    dest: &mut Vec<Withdrawal>,
) -> Result<bool, Error> {
    simple_request(
        ctx,
        client,
        ApiRequest::new(format!(
            "/eth/v1/builder/states/{state_id}/expected_withdrawals"
        )),
        dest,
    )
    .await
}
