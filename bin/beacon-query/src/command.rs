use beacon_query_api_types_beacon::{
    checkpoint::FinalityCheckpoints, committee::SyncCommittees, fork::Fork,
    randao::RandaoMixResponse, validator::ValidatorData,
};
use beacon_query_client::{
    ApiClient, Error, RequestContext,
    beacon::{
        blob_sidecars::blob_sidecars,
        states::{
            epoch_committees, finality_checkpoints, fork, randao_mix, state_root,
            state_validator, state_validator_balances, state_validators, sync_committees,
        },
    },
    builder::states::expected_withdrawals,
};
use serde::Serialize;
use serde_json::Value;

use crate::cli::query::QueryCommand;

fn found<T: Serialize>(exists: bool, dest: T) -> Result<Option<Value>, Error> {
    if !exists {
        return Ok(None);
    }
    Ok(Some(serde_json::to_value(dest)?))
}

/// Runs `command` against the beacon node, returning the found resource as JSON or `None` when
/// the node does not know it.
pub async fn run_query<C: ApiClient + ?Sized>(
    ctx: &RequestContext,
    client: &C,
    command: &QueryCommand,
) -> Result<Option<Value>, Error> {
    match command {
        QueryCommand::BlobSidecars(args) => {
            let mut dest = Vec::new();
            let exists = blob_sidecars(ctx, client, &args.block_id, &mut dest).await?;
            found(exists, dest)
        }
        QueryCommand::Committees(args) => {
            let mut dest = Vec::new();
            let exists = epoch_committees(
                ctx,
                client,
                &args.state_id,
                args.epoch,
                args.index,
                args.slot,
                &mut dest,
            )
            .await?;
            found(exists, dest)
        }
        QueryCommand::SyncCommittees(args) => {
            let mut dest = SyncCommittees::default();
            let exists = sync_committees(ctx, client, &args.state_id, args.epoch, &mut dest).await?;
            found(exists, dest)
        }
        QueryCommand::FinalityCheckpoints(args) => {
            let mut dest = FinalityCheckpoints::default();
            let exists = finality_checkpoints(ctx, client, &args.state_id, &mut dest).await?;
            found(exists, dest)
        }
        QueryCommand::Fork(args) => {
            let mut dest = Fork::default();
            let exists = fork(ctx, client, &args.state_id, &mut dest).await?;
            found(exists, dest)
        }
        QueryCommand::StateRoot(args) => match state_root(ctx, client, &args.state_id).await? {
            Some(root) => Ok(Some(serde_json::json!({ "root": root }))),
            None => Ok(None),
        },
        QueryCommand::Validator(args) => {
            let mut dest = ValidatorData::default();
            let exists =
                state_validator(ctx, client, &args.state_id, &args.validator_id, &mut dest).await?;
            found(exists, dest)
        }
        QueryCommand::ValidatorBalances(args) => {
            let mut dest = Vec::new();
            let exists = state_validator_balances(
                ctx,
                client,
                &args.state_id,
                args.ids.as_deref(),
                &mut dest,
            )
            .await?;
            found(exists, dest)
        }
        QueryCommand::Validators(args) => {
            let mut dest = Vec::new();
            let exists = state_validators(
                ctx,
                client,
                &args.state_id,
                args.ids.as_deref(),
                args.statuses.as_deref(),
                &mut dest,
            )
            .await?;
            found(exists, dest)
        }
        QueryCommand::Randao(args) => {
            let mut dest = RandaoMixResponse::default();
            let exists = randao_mix(ctx, client, &args.state_id, &mut dest).await?;
            found(exists, dest)
        }
        QueryCommand::ExpectedWithdrawals(args) => {
            let mut dest = Vec::new();
            let exists = expected_withdrawals(ctx, client, &args.state_id, &mut dest).await?;
            found(exists, dest)
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use alloy_primitives::B256;
    use async_trait::async_trait;
    use beacon_query_client::{ApiRequest, ApiResponse};
    use clap::Parser;
    use serde_json::json;

    use super::*;
    use crate::cli::Cli;

    struct RecordingClient {
        body: Option<Value>,
        targets: Mutex<Vec<String>>,
    }

    #[async_trait]
    impl ApiClient for RecordingClient {
        async fn get(&self, request: ApiRequest) -> Result<Option<ApiResponse>, Error> {
            self.targets
                .lock()
                .expect("poisoned lock")
                .push(request.path_and_query());
            Ok(self
                .body
                .as_ref()
                .map(|data| ApiResponse::json(json!({ "data": data }).to_string())))
        }
    }

    #[tokio::test]
    async fn test_run_query_state_root() -> Result<(), Error> {
        let root = B256::repeat_byte(0x42);
        let client = RecordingClient {
            body: Some(json!({ "root": root })),
            targets: Mutex::new(Vec::new()),
        };
        let cli = Cli::parse_from(["program", "state-root", "finalized"]);

        let result = run_query(&RequestContext::new(), &client, &cli.command).await?;

        assert_eq!(result, Some(json!({ "root": root })));
        assert_eq!(
            client.targets.lock().expect("poisoned lock").as_slice(),
            ["/eth/v1/beacon/states/finalized/root".to_string()]
        );
        Ok(())
    }

    #[tokio::test]
    async fn test_run_query_validator_balances_empty_filter() -> Result<(), Error> {
        let client = RecordingClient {
            body: None,
            targets: Mutex::new(Vec::new()),
        };
        let cli = Cli::parse_from(["program", "validator-balances", "head", "--id"]);

        let result = run_query(&RequestContext::new(), &client, &cli.command).await?;

        assert_eq!(result, None);
        assert_eq!(
            client.targets.lock().expect("poisoned lock").as_slice(),
            ["/eth/v1/beacon/states/head/validator_balances?id=".to_string()]
        );
        Ok(())
    }
}
