use alloy_primitives::B256;
use beacon_query_api_types_beacon::{
    checkpoint::FinalityCheckpoints,
    committee::{Committee, SyncCommittees},
    fork::Fork,
    id::ValidatorID,
    randao::RandaoMixResponse,
    validator::{ValidatorBalance, ValidatorData, ValidatorStatus},
};
use beacon_query_api_types_common::{id::ID, response::RootResponse};

use crate::{
    context::RequestContext,
    error::Error,
    http_client::{ApiClient, ApiRequest},
    query::Query,
    request::{get_opt, simple_request},
};

/// `GET /eth/v1/beacon/states/{state_id}/committees`
///
/// Retrieves the committees for the given state.
///
/// Optional query parameters:
/// - `epoch`: fetch committees for the given epoch instead of the epoch of the state.
/// - `index`: restrict returned values to those matching the supplied committee index.
/// - `slot`: restrict returned values to those matching the supplied slot.
pub async fn epoch_committees<C: ApiClient + ?Sized>(
    ctx: &RequestContext,
    client: &C,
    state_id: &ID,
    epoch: Option<u64>,
    index: Option<u64>,
    slot: Option<u64>,
    dest: &mut Vec<Committee>,
) -> Result<bool, Error> {
    let mut query = Query::new();
    query
        .insert_opt("epoch", epoch)
        .insert_opt("index", index)
        .insert_opt("slot", slot);

    simple_request(
        ctx,
        client,
        ApiRequest::with_query(format!("/eth/v1/beacon/states/{state_id}/committees"), query),
        dest,
    )
    .await
}

/// `GET /eth/v1/beacon/states/{state_id}/sync_committees`
///
/// Retrieves the sync committees for the given state, optionally for `epoch` instead of the
/// epoch of the state.
pub async fn sync_committees<C: ApiClient + ?Sized>(
    ctx: &RequestContext,
    client: &C,
    state_id: &ID,
    epoch: Option<u64>,
    dest: &mut SyncCommittees,
) -> Result<bool, Error> {
    let mut query = Query::new();
    query.insert_opt("epoch", epoch);

    simple_request(
        ctx,
        client,
        ApiRequest::with_query(
            format!("/eth/v1/beacon/states/{state_id}/sync_committees"),
            query,
        ),
        dest,
    )
    .await
}

/// `GET /eth/v1/beacon/states/{state_id}/finality_checkpoints`
pub async fn finality_checkpoints<C: ApiClient + ?Sized>(
    ctx: &RequestContext,
    client: &C,
    state_id: &ID,
    dest: &mut FinalityCheckpoints,
) -> Result<bool, Error> {
    simple_request(
        ctx,
        client,
        ApiRequest::new(format!(
            "/eth/v1/beacon/states/{state_id}/finality_checkpoints"
        )),
        dest,
    )
    .await
}

/// `GET /eth/v1/beacon/states/{state_id}/fork`
pub async fn fork<C: ApiClient + ?Sized>(
    ctx: &RequestContext,
    client: &C,
    state_id: &ID,
    dest: &mut Fork,
) -> Result<bool, Error> {
    simple_request(
        ctx,
        client,
        ApiRequest::new(format!("/eth/v1/beacon/states/{state_id}/fork")),
        dest,
    )
    .await
}

/// `GET /eth/v1/beacon/states/{state_id}/root`
///
/// Returns the hash tree root of the state, or `None` if the state is unknown. If `state_id` is
/// a root, the same value is returned.
pub async fn state_root<C: ApiClient + ?Sized>(
    ctx: &RequestContext,
    client: &C,
    state_id: &ID,
) -> Result<Option<B256>, Error> {
    Ok(get_opt::<_, RootResponse>(
        ctx,
        client,
        ApiRequest::new(format!("/eth/v1/beacon/states/{state_id}/root")),
    )
    .await?
    .map(|response| response.root))
}

/// `GET /eth/v1/beacon/states/{state_id}/validators/{validator_id}`
///
/// Returns the validator identified by index or public key, along with its status and balance.
pub async fn state_validator<C: ApiClient + ?Sized>(
    ctx: &RequestContext,
    client: &C,
    state_id: &ID,
    validator_id: &ValidatorID,
    dest: &mut ValidatorData,
) -> Result<bool, Error> {
    simple_request(
        ctx,
        client,
        ApiRequest::new(format!(
            "/eth/v1/beacon/states/{state_id}/validators/{validator_id}"
        )),
        dest,
    )
    .await
}

/// `GET /eth/v1/beacon/states/{state_id}/validator_balances`
///
/// Nodes may silently omit validators with unknown ids from an otherwise valid response.
pub async fn state_validator_balances<C: ApiClient + ?Sized>(
    ctx: &RequestContext,
    client: &C,
    state_id: &ID,
    validator_ids: Option<&[ValidatorID]>,
    dest: &mut Vec<ValidatorBalance>,
) -> Result<bool, Error> {
    let mut query = Query::new();
    query.insert_list("id", validator_ids);

    simple_request(
        ctx,
        client,
        ApiRequest::with_query(
            format!("/eth/v1/beacon/states/{state_id}/validator_balances"),
            query,
        ),
        dest,
    )
    .await
}

/// `GET /eth/v1/beacon/states/{state_id}/validators`
///
/// Returns validators with their balance, status and index, filtered by id and by status.
/// Nodes may silently omit validators with unknown ids from an otherwise valid response.
pub async fn state_validators<C: ApiClient + ?Sized>(
    ctx: &RequestContext,
    client: &C,
    state_id: &ID,
    validator_ids: Option<&[ValidatorID]>,
    statuses: Option<&[ValidatorStatus]>,
    dest: &mut Vec<ValidatorData>,
) -> Result<bool, Error> {
    let mut query = Query::new();
    query
        .insert_list("id", validator_ids)
        .insert_list("status", statuses);

    simple_request(
        ctx,
        client,
        ApiRequest::with_query(format!("/eth/v1/beacon/states/{state_id}/validators"), query),
        dest,
    )
    .await
}

/// `GET /eth/v1/beacon/states/{state_id}/randao`
pub async fn randao_mix<C: ApiClient + ?Sized>(
    ctx: &RequestContext,
    client: &C,
    state_id: &ID,
    dest: &mut RandaoMixResponse,
) -> Result<bool, Error> {
    simple_request(
        ctx,
        client,
        ApiRequest::new(format!("/eth/v1/beacon/states/{state_id}/randao")),
        dest,
    )
    .await
}
