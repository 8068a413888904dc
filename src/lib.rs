//! Deterministic deployment planning for liquidity-bootstrapping token auctions.
//!
//! The crate mines CREATE2 salts for hook and token deployments, derives the
//! per-epoch price movement of timed auctions, normalizes weighted liquidity
//! curves, and assembles the factory `create` payload for each auction kind.

pub mod address;
pub mod curve;
pub mod encode;
pub mod error;
pub mod mine;
pub mod order;
pub mod params;
pub mod schedule;

pub use address::{OrderingSide, compute_address, init_code_hash};
pub use curve::{Curve, normalize};
pub use encode::{
    AuctionKind, Beneficiary, BytecodeHashes, CreateRequest, CreateSimulator, Deployment,
    DynamicAuction, GovernanceKind, InitCodeHashes, MigrationKind, MulticurveAuction,
    ParameterEncoder, ProtocolAddresses, SaleConfig, StaticAuction, TokenConfig, Vesting,
};
pub use error::{CurveError, EncodeError, MiningError, ScheduleError};
pub use mine::{Create2Deployer, Deployer, FlagMiner, MinedSalt};
pub use order::{Clock, FixedClock, OrderMiner, SystemClock, TokenPredictor};
pub use params::{HookFlags, ProtocolParams};
pub use schedule::{AuctionSchedule, compute_gamma};
