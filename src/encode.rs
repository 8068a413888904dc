use std::future::Future;

use alloy_primitives::{
    Address, B256, Bytes, U256,
    aliases::{I24, U24, U48, U96},
};
use alloy_sol_types::{SolCall, SolValue};

use crate::{
    address::{OrderingSide, init_code_hash},
    curve::{Curve, normalize},
    error::{EncodeError, ScheduleError},
    mine::{Create2Deployer, FlagMiner},
    order::{Clock, OrderMiner, SystemClock},
    params::ProtocolParams,
    schedule::AuctionSchedule,
};

/// ABI shapes of the factory call and of the data blobs handed to each module.
pub mod abi {
    alloy_sol_types::sol! {
        #[derive(Debug, PartialEq, Eq)]
        struct CreateParams {
            uint256 initialSupply;
            uint256 numTokensToSell;
            address numeraire;
            address tokenFactory;
            bytes tokenFactoryData;
            address governanceFactory;
            bytes governanceFactoryData;
            address poolInitializer;
            bytes poolInitializerData;
            address liquidityMigrator;
            bytes liquidityMigratorData;
            address integrator;
            bytes32 salt;
        }

        function create(CreateParams createData)
            external
            returns (
                address asset,
                address pool,
                address governance,
                address timelock,
                address migrationPool
            );

        #[derive(Debug, PartialEq, Eq)]
        struct TokenFactoryData {
            string name;
            string symbol;
            uint256 yearlyMintRate;
            uint256 vestingDuration;
            address[] recipients;
            uint256[] amounts;
            string tokenURI;
        }

        #[derive(Debug, PartialEq, Eq)]
        struct TokenArgs {
            string name;
            string symbol;
            uint256 initialSupply;
            address recipient;
            address owner;
            uint256 yearlyMintRate;
            uint256 vestingDuration;
            address[] recipients;
            uint256[] amounts;
            string tokenURI;
        }

        #[derive(Debug, PartialEq, Eq)]
        struct GovernanceFactoryData {
            string name;
            uint48 initialVotingDelay;
            uint32 initialVotingPeriod;
            uint256 initialProposalThreshold;
        }

        #[derive(Debug, PartialEq, Eq)]
        struct StaticPoolData {
            uint24 fee;
            int24 tickLower;
            int24 tickUpper;
            uint16 numPositions;
            uint256 maxShareToBeSold;
        }

        #[derive(Debug, PartialEq, Eq)]
        struct DopplerPoolData {
            uint256 minimumProceeds;
            uint256 maximumProceeds;
            uint256 startingTime;
            uint256 endingTime;
            int24 startingTick;
            int24 endingTick;
            uint256 epochLength;
            int24 gamma;
            bool isToken0;
            uint256 numPDSlugs;
            uint24 lpFee;
            int24 tickSpacing;
        }

        #[derive(Debug, PartialEq, Eq)]
        struct DopplerHookArgs {
            address poolManager;
            uint256 numTokensToSell;
            uint256 minimumProceeds;
            uint256 maximumProceeds;
            uint256 startingTime;
            uint256 endingTime;
            int24 startingTick;
            int24 endingTick;
            uint256 epochLength;
            int24 gamma;
            bool isToken0;
            uint256 numPDSlugs;
            address initializer;
            uint24 lpFee;
        }

        #[derive(Debug, PartialEq, Eq)]
        struct CurveData {
            int24 tickLower;
            int24 tickUpper;
            uint16 numPositions;
            uint256 shares;
        }

        #[derive(Debug, PartialEq, Eq)]
        struct BeneficiaryData {
            address beneficiary;
            uint96 shares;
        }

        #[derive(Debug, PartialEq, Eq)]
        struct MulticurvePoolData {
            uint24 fee;
            int24 tickSpacing;
            CurveData[] curves;
            BeneficiaryData[] beneficiaries;
        }

        #[derive(Debug, PartialEq, Eq)]
        struct V4MigratorData {
            uint24 fee;
            int24 tickSpacing;
            uint32 lockDuration;
            BeneficiaryData[] beneficiaries;
        }
    }
}

/// Deployed protocol contracts the encoder chooses between.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProtocolAddresses {
    pub airlock: Address,
    pub pool_manager: Address,
    pub token_factory: Address,
    pub governance_factory: Address,
    pub no_op_governance_factory: Address,
    pub v3_initializer: Address,
    pub v4_initializer: Address,
    pub multicurve_initializer: Address,
    pub doppler_deployer: Address,
    pub v2_migrator: Address,
    pub v4_migrator: Address,
    pub no_op_migrator: Address,
}

/// Supply and pairing of the sale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SaleConfig {
    pub initial_supply: U256,
    pub num_tokens_to_sell: U256,
    pub numeraire: Address,
    pub integrator: Address,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vesting {
    pub duration: u64,
    pub allocations: Vec<(Address, U256)>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenConfig {
    pub name: String,
    pub symbol: String,
    pub token_uri: String,
    pub yearly_mint_rate: U256,
    pub vesting: Option<Vesting>,
}

/// A fee recipient and its WAD share.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Beneficiary {
    pub beneficiary: Address,
    pub shares: U256,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GovernanceKind {
    /// Full governor, named after the token.
    Standard {
        voting_delay: u64,
        voting_period: u32,
        proposal_threshold: U256,
    },
    NoOp,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MigrationKind {
    UniswapV2,
    UniswapV4 {
        fee: u32,
        tick_spacing: i32,
        lock_duration: u32,
        beneficiaries: Vec<Beneficiary>,
    },
    NoOp,
}

/// Single-range auction on a v3 pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StaticAuction {
    pub fee: u32,
    pub tick_lower: i32,
    pub tick_upper: i32,
    pub num_positions: u16,
    pub max_share_to_be_sold: U256,
}

/// Dutch auction driven by the Doppler v4 hook.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DynamicAuction {
    pub minimum_proceeds: U256,
    pub maximum_proceeds: U256,
    pub start_time: u64,
    pub end_time: u64,
    pub start_tick: i32,
    pub end_tick: i32,
    pub epoch_length: u64,
    pub tick_spacing: i32,
    pub fee: u32,
    pub num_pd_slugs: u64,
}

/// Liquidity spread over several weighted curves on a v4 pool.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MulticurveAuction {
    pub fee: u32,
    pub tick_spacing: i32,
    pub curves: Vec<Curve>,
    pub beneficiaries: Vec<Beneficiary>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuctionKind {
    Static(StaticAuction),
    Dynamic(DynamicAuction),
    Multicurve(MulticurveAuction),
}

/// Everything needed to build one `create` call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateRequest {
    /// Account the creation is simulated from; also seeds ordering salts.
    pub user: Address,
    pub sale: SaleConfig,
    pub token: TokenConfig,
    pub governance: GovernanceKind,
    pub migration: MigrationKind,
    pub auction: AuctionKind,
}

/// Supplies the init code hashes of the contracts deployed alongside an auction.
pub trait InitCodeHashes {
    fn hook_init_code_hash(&self, args: &abi::DopplerHookArgs) -> B256;

    fn token_init_code_hash(&self, args: &abi::TokenArgs) -> B256;
}

/// Hashes creation bytecode followed by the ABI-encoded constructor arguments.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BytecodeHashes {
    pub hook_bytecode: Bytes,
    pub token_bytecode: Bytes,
}

impl InitCodeHashes for BytecodeHashes {
    fn hook_init_code_hash(&self, args: &abi::DopplerHookArgs) -> B256 {
        init_code_hash(&self.hook_bytecode, &args.abi_encode_params())
    }

    fn token_init_code_hash(&self, args: &abi::TokenArgs) -> B256 {
        init_code_hash(&self.token_bytecode, &args.abi_encode_params())
    }
}

/// Simulates the factory call and reports the token address it would create.
pub trait CreateSimulator {
    type Error: std::error::Error + Send + Sync + 'static;

    fn simulate_create(
        &self,
        params: abi::CreateParams,
        account: Address,
    ) -> impl Future<Output = Result<Address, Self::Error>>;
}

/// A fully assembled deployment request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deployment {
    pub params: abi::CreateParams,
    /// Calldata of `create(params)`.
    pub payload: Bytes,
    /// Mined or predicted token address.
    pub token: Address,
    pub hook: Option<Address>,
    pub gamma: Option<i32>,
    pub side: OrderingSide,
}

impl Deployment {
    fn new(params: abi::CreateParams, token: Address, side: OrderingSide) -> Self {
        let payload = abi::createCall {
            createData: params.clone(),
        }
        .abi_encode()
        .into();
        Self {
            params,
            payload,
            token,
            hook: None,
            gamma: None,
            side,
        }
    }
}

/// Turns a [`CreateRequest`] into the `create` payload, mining the salt the
/// chosen auction kind requires.
#[derive(Debug, Clone)]
pub struct ParameterEncoder<H, C = SystemClock> {
    addresses: ProtocolAddresses,
    params: ProtocolParams,
    hashes: H,
    clock: C,
}

impl<H: InitCodeHashes> ParameterEncoder<H> {
    pub fn new(addresses: ProtocolAddresses, params: ProtocolParams, hashes: H) -> Self {
        Self::with_clock(addresses, params, hashes, SystemClock)
    }
}

impl<H: InitCodeHashes, C: Clock> ParameterEncoder<H, C> {
    pub fn with_clock(
        addresses: ProtocolAddresses,
        params: ProtocolParams,
        hashes: H,
        clock: C,
    ) -> Self {
        Self {
            addresses,
            params,
            hashes,
            clock,
        }
    }

    /// Builds the deployment for `request`.
    ///
    /// Dynamic auctions mine their salt locally; static and multicurve auctions
    /// ask `simulator` for the token address each candidate salt produces.
    pub async fn encode<S: CreateSimulator>(
        &self,
        request: &CreateRequest,
        simulator: &S,
    ) -> Result<Deployment, EncodeError> {
        match &request.auction {
            AuctionKind::Dynamic(auction) => self.encode_dynamic(request, auction),
            AuctionKind::Static(auction) => {
                let data = static_pool_data(auction)?;
                self.encode_ordered(request, self.addresses.v3_initializer, data, simulator)
                    .await
            }
            AuctionKind::Multicurve(auction) => {
                let data = self.multicurve_pool_data(auction)?;
                self.encode_ordered(request, self.addresses.multicurve_initializer, data, simulator)
                    .await
            }
        }
    }

    /// Builds a dynamic auction deployment, mining a salt that gives the hook
    /// its permission flags and the token its pool side.
    pub fn encode_dynamic(
        &self,
        request: &CreateRequest,
        auction: &DynamicAuction,
    ) -> Result<Deployment, EncodeError> {
        self.check_tick(auction.start_tick, "startingTick")?;
        self.check_tick(auction.end_tick, "endingTick")?;

        let duration = auction
            .end_time
            .checked_sub(auction.start_time)
            .ok_or(ScheduleError::ZeroDuration)?;
        let schedule = AuctionSchedule::new(
            auction.start_tick,
            auction.end_tick,
            duration,
            auction.epoch_length,
            auction.tick_spacing,
        )?;

        let numeraire = request.sale.numeraire;
        let side = OrderingSide::for_numeraire(numeraire);

        let hook_args = abi::DopplerHookArgs {
            poolManager: self.addresses.pool_manager,
            numTokensToSell: request.sale.num_tokens_to_sell,
            minimumProceeds: auction.minimum_proceeds,
            maximumProceeds: auction.maximum_proceeds,
            startingTime: U256::from(auction.start_time),
            endingTime: U256::from(auction.end_time),
            startingTick: int24(schedule.start_tick, "startingTick")?,
            endingTick: int24(schedule.end_tick, "endingTick")?,
            epochLength: U256::from(schedule.epoch_length),
            gamma: int24(schedule.gamma, "gamma")?,
            isToken0: side.is_token0(),
            numPDSlugs: U256::from(auction.num_pd_slugs),
            initializer: self.addresses.v4_initializer,
            lpFee: uint24(auction.fee, "lpFee")?,
        };
        let token_args = self.token_args(request);

        let mined = FlagMiner::new(
            Create2Deployer::new(
                self.addresses.doppler_deployer,
                self.hashes.hook_init_code_hash(&hook_args),
            ),
            Create2Deployer::new(
                self.addresses.token_factory,
                self.hashes.token_init_code_hash(&token_args),
            ),
            numeraire,
            self.params.hook_flags,
            self.params.max_flag_attempts,
        )
        .mine()?;

        let data = abi::DopplerPoolData {
            minimumProceeds: hook_args.minimumProceeds,
            maximumProceeds: hook_args.maximumProceeds,
            startingTime: hook_args.startingTime,
            endingTime: hook_args.endingTime,
            startingTick: hook_args.startingTick,
            endingTick: hook_args.endingTick,
            epochLength: hook_args.epochLength,
            gamma: hook_args.gamma,
            isToken0: hook_args.isToken0,
            numPDSlugs: hook_args.numPDSlugs,
            lpFee: hook_args.lpFee,
            tickSpacing: int24(schedule.tick_spacing, "tickSpacing")?,
        }
        .abi_encode_params();

        let mut params = self.create_params(request, self.addresses.v4_initializer, data)?;
        params.salt = mined.salt;

        let mut deployment = Deployment::new(params, mined.token, side);
        deployment.hook = Some(mined.hook);
        deployment.gamma = Some(schedule.gamma);
        Ok(deployment)
    }

    async fn encode_ordered<S: CreateSimulator>(
        &self,
        request: &CreateRequest,
        initializer: Address,
        pool_data: Vec<u8>,
        simulator: &S,
    ) -> Result<Deployment, EncodeError> {
        let mut params = self.create_params(request, initializer, pool_data)?;
        let template = params.clone();
        let account = request.user;
        let predictor = move |salt: B256| {
            let mut candidate = template.clone();
            candidate.salt = salt;
            simulator.simulate_create(candidate, account)
        };

        let miner = OrderMiner::with_clock(
            account,
            request.sale.numeraire,
            self.params.max_order_attempts,
            &self.clock,
        );
        let (salt, token) = miner.mine(&predictor).await?;

        params.salt = salt;
        Ok(Deployment::new(params, token, miner.side()))
    }

    fn create_params(
        &self,
        request: &CreateRequest,
        initializer: Address,
        pool_data: Vec<u8>,
    ) -> Result<abi::CreateParams, EncodeError> {
        let (governance_factory, governance_data) = self.governance(request)?;
        let (migrator, migration_data) = self.migration(&request.migration)?;

        Ok(abi::CreateParams {
            initialSupply: request.sale.initial_supply,
            numTokensToSell: request.sale.num_tokens_to_sell,
            numeraire: request.sale.numeraire,
            tokenFactory: self.addresses.token_factory,
            tokenFactoryData: token_factory_data(&request.token).abi_encode_params().into(),
            governanceFactory: governance_factory,
            governanceFactoryData: governance_data,
            poolInitializer: initializer,
            poolInitializerData: pool_data.into(),
            liquidityMigrator: migrator,
            liquidityMigratorData: migration_data,
            integrator: request.sale.integrator,
            salt: B256::ZERO,
        })
    }

    fn governance(&self, request: &CreateRequest) -> Result<(Address, Bytes), EncodeError> {
        match &request.governance {
            GovernanceKind::Standard {
                voting_delay,
                voting_period,
                proposal_threshold,
            } => {
                let data = abi::GovernanceFactoryData {
                    name: request.token.name.clone(),
                    initialVotingDelay: uint48(*voting_delay, "initialVotingDelay")?,
                    initialVotingPeriod: *voting_period,
                    initialProposalThreshold: *proposal_threshold,
                };
                Ok((
                    self.addresses.governance_factory,
                    data.abi_encode_params().into(),
                ))
            }
            GovernanceKind::NoOp => Ok((self.addresses.no_op_governance_factory, Bytes::new())),
        }
    }

    fn migration(&self, migration: &MigrationKind) -> Result<(Address, Bytes), EncodeError> {
        match migration {
            MigrationKind::UniswapV2 => Ok((self.addresses.v2_migrator, Bytes::new())),
            MigrationKind::UniswapV4 {
                fee,
                tick_spacing,
                lock_duration,
                beneficiaries,
            } => {
                if beneficiaries.is_empty() {
                    return Err(EncodeError::Beneficiaries("v4 migration requires beneficiaries"));
                }
                let data = abi::V4MigratorData {
                    fee: uint24(*fee, "fee")?,
                    tickSpacing: int24(*tick_spacing, "tickSpacing")?,
                    lockDuration: *lock_duration,
                    beneficiaries: self.beneficiary_data(beneficiaries)?,
                };
                Ok((self.addresses.v4_migrator, data.abi_encode_params().into()))
            }
            MigrationKind::NoOp => Ok((self.addresses.no_op_migrator, Bytes::new())),
        }
    }

    fn multicurve_pool_data(&self, auction: &MulticurveAuction) -> Result<Vec<u8>, EncodeError> {
        let curves = normalize(
            auction.curves.clone(),
            auction.tick_spacing,
            self.params.max_tick,
            self.params.wad,
        )?
        .iter()
        .map(|curve| {
            Ok(abi::CurveData {
                tickLower: int24(curve.tick_lower, "tickLower")?,
                tickUpper: int24(curve.tick_upper, "tickUpper")?,
                numPositions: curve.num_positions,
                shares: curve.shares,
            })
        })
        .collect::<Result<Vec<_>, EncodeError>>()?;

        let beneficiaries = if auction.beneficiaries.is_empty() {
            Vec::new()
        } else {
            self.beneficiary_data(&auction.beneficiaries)?
        };

        Ok(abi::MulticurvePoolData {
            fee: uint24(auction.fee, "fee")?,
            tickSpacing: int24(auction.tick_spacing, "tickSpacing")?,
            curves,
            beneficiaries,
        }
        .abi_encode_params())
    }

    /// Beneficiaries must be sorted by strictly ascending address and their
    /// shares must sum to exactly one WAD.
    fn beneficiary_data(
        &self,
        beneficiaries: &[Beneficiary],
    ) -> Result<Vec<abi::BeneficiaryData>, EncodeError> {
        if beneficiaries
            .windows(2)
            .any(|pair| pair[0].beneficiary >= pair[1].beneficiary)
        {
            return Err(EncodeError::Beneficiaries(
                "beneficiaries must be sorted by ascending address without duplicates",
            ));
        }

        let mut total = U256::ZERO;
        let mut data = Vec::with_capacity(beneficiaries.len());
        for entry in beneficiaries {
            if entry.shares.is_zero() {
                return Err(EncodeError::Beneficiaries("beneficiary shares must be positive"));
            }
            total = total.saturating_add(entry.shares);
            data.push(abi::BeneficiaryData {
                beneficiary: entry.beneficiary,
                shares: uint96(entry.shares, "shares")?,
            });
        }
        if total != self.params.wad {
            return Err(EncodeError::Beneficiaries("beneficiary shares must sum to one WAD"));
        }
        Ok(data)
    }

    fn token_args(&self, request: &CreateRequest) -> abi::TokenArgs {
        let data = token_factory_data(&request.token);
        abi::TokenArgs {
            name: data.name,
            symbol: data.symbol,
            initialSupply: request.sale.initial_supply,
            recipient: self.addresses.airlock,
            owner: self.addresses.airlock,
            yearlyMintRate: data.yearlyMintRate,
            vestingDuration: data.vestingDuration,
            recipients: data.recipients,
            amounts: data.amounts,
            tokenURI: data.tokenURI,
        }
    }

    fn check_tick(&self, tick: i32, field: &'static str) -> Result<(), EncodeError> {
        if tick < self.params.min_tick || tick > self.params.max_tick {
            return Err(EncodeError::OutOfRange { field });
        }
        Ok(())
    }
}

fn token_factory_data(token: &TokenConfig) -> abi::TokenFactoryData {
    let (vesting_duration, allocations) = match &token.vesting {
        Some(vesting) => (vesting.duration, vesting.allocations.as_slice()),
        None => (0, [].as_slice()),
    };
    abi::TokenFactoryData {
        name: token.name.clone(),
        symbol: token.symbol.clone(),
        yearlyMintRate: token.yearly_mint_rate,
        vestingDuration: U256::from(vesting_duration),
        recipients: allocations.iter().map(|(recipient, _)| *recipient).collect(),
        amounts: allocations.iter().map(|(_, amount)| *amount).collect(),
        tokenURI: token.token_uri.clone(),
    }
}

fn static_pool_data(auction: &StaticAuction) -> Result<Vec<u8>, EncodeError> {
    Ok(abi::StaticPoolData {
        fee: uint24(auction.fee, "fee")?,
        tickLower: int24(auction.tick_lower, "tickLower")?,
        tickUpper: int24(auction.tick_upper, "tickUpper")?,
        numPositions: auction.num_positions,
        maxShareToBeSold: auction.max_share_to_be_sold,
    }
    .abi_encode_params())
}

fn uint24(value: u32, field: &'static str) -> Result<U24, EncodeError> {
    if value >> 24 != 0 {
        return Err(EncodeError::OutOfRange { field });
    }
    Ok(U24::from_limbs([u64::from(value)]))
}

fn int24(value: i32, field: &'static str) -> Result<I24, EncodeError> {
    I24::try_from(value).map_err(|_| EncodeError::OutOfRange { field })
}

fn uint48(value: u64, field: &'static str) -> Result<U48, EncodeError> {
    if value >> 48 != 0 {
        return Err(EncodeError::OutOfRange { field });
    }
    Ok(U48::from_limbs([value]))
}

fn uint96(value: U256, field: &'static str) -> Result<U96, EncodeError> {
    if value.bit_len() > 96 {
        return Err(EncodeError::OutOfRange { field });
    }
    let limbs = value.as_limbs();
    Ok(U96::from_limbs([limbs[0], limbs[1]]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy_primitives::address;

    #[test]
    fn narrowing_bounds() {
        assert!(uint24(0xff_ffff, "fee").is_ok());
        assert!(matches!(
            uint24(0x100_0000, "fee"),
            Err(EncodeError::OutOfRange { field: "fee" })
        ));
        assert!(int24(-8_388_608, "tick").is_ok());
        assert!(int24(8_388_608, "tick").is_err());
        assert!(uint48((1 << 48) - 1, "delay").is_ok());
        assert!(uint48(1 << 48, "delay").is_err());
        assert!(uint96(U256::from(1u64) << 96, "shares").is_err());
        assert_eq!(
            uint96(U256::from(u64::MAX) + U256::from(5u64), "shares").unwrap(),
            U96::from_limbs([4, 1])
        );
    }

    #[test]
    fn static_pool_data_layout() {
        let data = static_pool_data(&StaticAuction {
            fee: 10_000,
            tick_lower: -92_100,
            tick_upper: 6_000,
            num_positions: 15,
            max_share_to_be_sold: U256::from(350_000_000_000_000_000u64),
        })
        .unwrap();

        assert_eq!(data.len(), 5 * 32);
        assert_eq!(U256::from_be_slice(&data[..32]), U256::from(10_000u64));
        // Negative ticks are sign-extended across the whole word.
        assert!(data[32..61].iter().all(|b| *b == 0xff));
        assert_eq!(U256::from_be_slice(&data[96..128]), U256::from(15u64));
    }

    #[test]
    fn token_data_without_vesting() {
        let data = token_factory_data(&TokenConfig {
            name: "Bootstrap".into(),
            symbol: "BOOT".into(),
            token_uri: "ipfs://boot".into(),
            yearly_mint_rate: U256::ZERO,
            vesting: None,
        });
        assert_eq!(data.vestingDuration, U256::ZERO);
        assert!(data.recipients.is_empty());
        assert!(data.amounts.is_empty());
    }

    #[test]
    fn token_data_splits_allocations() {
        let alice = address!("0x00000000000000000000000000000000000a11ce");
        let data = token_factory_data(&TokenConfig {
            name: "Bootstrap".into(),
            symbol: "BOOT".into(),
            token_uri: String::new(),
            yearly_mint_rate: U256::ZERO,
            vesting: Some(Vesting {
                duration: 365 * 24 * 60 * 60,
                allocations: vec![(alice, U256::from(1_000u64))],
            }),
        });
        assert_eq!(data.vestingDuration, U256::from(31_536_000u64));
        assert_eq!(data.recipients, vec![alice]);
        assert_eq!(data.amounts, vec![U256::from(1_000u64)]);
    }
}
