use beacon_query_api_types_beacon::{id::ValidatorID, validator::ValidatorStatus};
use beacon_query_api_types_common::id::ID;
use clap::{Args, Subcommand};

#[derive(Debug, Subcommand)]
pub enum QueryCommand {
    /// Blob sidecars of a block
    #[command(name = "blob-sidecars")]
    BlobSidecars(BlockArgs),

    /// Committees of a state
    #[command(name = "committees")]
    Committees(CommitteesArgs),

    /// Sync committees of a state
    #[command(name = "sync-committees")]
    SyncCommittees(SyncCommitteesArgs),

    /// Justification and finality checkpoints of a state
    #[command(name = "finality-checkpoints")]
    FinalityCheckpoints(StateArgs),

    /// Fork of a state
    #[command(name = "fork")]
    Fork(StateArgs),

    /// Hash tree root of a state
    #[command(name = "state-root")]
    StateRoot(StateArgs),

    /// A single validator of a state
    #[command(name = "validator")]
    Validator(ValidatorArgs),

    /// Validator balances of a state
    #[command(name = "validator-balances")]
    ValidatorBalances(ValidatorBalancesArgs),

    /// Validators of a state
    #[command(name = "validators")]
    Validators(ValidatorsArgs),

    /// Randao mix of a state
    #[command(name = "randao")]
    Randao(StateArgs),

    /// Withdrawals expected in the block built on a state
    #[command(name = "expected-withdrawals")]
    ExpectedWithdrawals(StateArgs),
}

#[derive(Debug, Args)]
pub struct StateArgs {
    /// head, genesis, finalized, justified, a slot or a 0x-prefixed state root
    pub state_id: ID,
}

#[derive(Debug, Args)]
pub struct BlockArgs {
    /// head, genesis, finalized, justified, a slot or a 0x-prefixed block root
    pub block_id: ID,
}

#[derive(Debug, Args)]
pub struct CommitteesArgs {
    pub state_id: ID,

    #[arg(long, help = "Fetch committees for this epoch instead of the epoch of the state")]
    pub epoch: Option<u64>,

    #[arg(long, help = "Only return the committee with this index")]
    pub index: Option<u64>,

    #[arg(long, help = "Only return committees for this slot")]
    pub slot: Option<u64>,
}

#[derive(Debug, Args)]
pub struct SyncCommitteesArgs {
    pub state_id: ID,

    #[arg(
        long,
        help = "Fetch the sync committee for this epoch instead of the epoch of the state"
    )]
    pub epoch: Option<u64>,
}

#[derive(Debug, Args)]
pub struct ValidatorArgs {
    pub state_id: ID,

    /// Validator index or 0x-prefixed public key
    pub validator_id: ValidatorID,
}

#[derive(Debug, Args)]
pub struct ValidatorBalancesArgs {
    pub state_id: ID,

    #[arg(
        long = "id",
        num_args = 0..,
        value_delimiter = ',',
        help = "Validator index or public key to filter by, repeatable"
    )]
    pub ids: Option<Vec<ValidatorID>>,
}

#[derive(Debug, Args)]
pub struct ValidatorsArgs {
    pub state_id: ID,

    #[arg(
        long = "id",
        num_args = 0..,
        value_delimiter = ',',
        help = "Validator index or public key to filter by, repeatable"
    )]
    pub ids: Option<Vec<ValidatorID>>,

    #[arg(
        long = "status",
        num_args = 0..,
        value_delimiter = ',',
        help = "Validator status to filter by, repeatable"
    )]
    pub statuses: Option<Vec<ValidatorStatus>>,
}
