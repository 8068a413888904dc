use alloy_primitives::{Address, FixedBytes, U256};

/// Highest tick a Uniswap v4 pool accepts.
pub const MAX_TICK: i32 = 887_272;

/// Lowest tick a Uniswap v4 pool accepts.
pub const MIN_TICK: i32 = -MAX_TICK;

/// Salt budget for the flag miner.
pub const DEFAULT_MAX_FLAG_ATTEMPTS: u64 = 1_000_000;

/// Prediction budget for the ordering miner.
pub const DEFAULT_MAX_ORDER_ATTEMPTS: u32 = 256;

/// Hook permission bits, as laid out in the low 14 bits of a v4 hook address.
pub mod hook_bits {
    pub const BEFORE_INITIALIZE: u16 = 1 << 13;
    pub const AFTER_INITIALIZE: u16 = 1 << 12;
    pub const BEFORE_ADD_LIQUIDITY: u16 = 1 << 11;
    pub const AFTER_ADD_LIQUIDITY: u16 = 1 << 10;
    pub const BEFORE_REMOVE_LIQUIDITY: u16 = 1 << 9;
    pub const AFTER_REMOVE_LIQUIDITY: u16 = 1 << 8;
    pub const BEFORE_SWAP: u16 = 1 << 7;
    pub const AFTER_SWAP: u16 = 1 << 6;
    pub const BEFORE_DONATE: u16 = 1 << 5;
    pub const AFTER_DONATE: u16 = 1 << 4;
    pub const BEFORE_SWAP_RETURNS_DELTA: u16 = 1 << 3;
    pub const AFTER_SWAP_RETURNS_DELTA: u16 = 1 << 2;
    pub const AFTER_ADD_LIQUIDITY_RETURNS_DELTA: u16 = 1 << 1;
    pub const AFTER_REMOVE_LIQUIDITY_RETURNS_DELTA: u16 = 1;

    /// Every permission bit.
    pub const ALL: u16 = 0x3fff;

    /// Permissions implemented by the Doppler dynamic auction hook.
    pub const DOPPLER: u16 = BEFORE_INITIALIZE
        | AFTER_INITIALIZE
        | BEFORE_ADD_LIQUIDITY
        | BEFORE_SWAP
        | AFTER_SWAP
        | BEFORE_DONATE;
}

/// The bit pattern a mined hook address must carry.
///
/// A candidate address matches when `candidate & mask == required`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HookFlags {
    pub required: Address,
    pub mask: Address,
}

impl HookFlags {
    /// Builds flags from the low 16 bits of an address.
    pub const fn from_low_bits(required: u16, mask: u16) -> Self {
        Self {
            required: low_bits_address(required),
            mask: low_bits_address(mask),
        }
    }

    /// Whether `candidate` carries exactly the required flags under the mask.
    #[inline]
    pub fn matches(&self, candidate: Address) -> bool {
        candidate.bit_and(self.mask) == self.required
    }
}

impl Default for HookFlags {
    fn default() -> Self {
        Self::from_low_bits(hook_bits::DOPPLER, hook_bits::ALL)
    }
}

const fn low_bits_address(bits: u16) -> Address {
    let [hi, lo] = bits.to_be_bytes();
    Address(FixedBytes([
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x00, 0x00, hi, lo,
    ]))
}

/// Protocol constants threaded explicitly through the mining, schedule and
/// curve computations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProtocolParams {
    pub min_tick: i32,
    pub max_tick: i32,
    pub hook_flags: HookFlags,
    pub max_flag_attempts: u64,
    pub max_order_attempts: u32,
    /// Fixed-point unit that curve and beneficiary shares sum to.
    pub wad: U256,
}

impl Default for ProtocolParams {
    fn default() -> Self {
        Self {
            min_tick: MIN_TICK,
            max_tick: MAX_TICK,
            hook_flags: HookFlags::default(),
            max_flag_attempts: DEFAULT_MAX_FLAG_ATTEMPTS,
            max_order_attempts: DEFAULT_MAX_ORDER_ATTEMPTS,
            wad: WAD,
        }
    }
}

/// `1.0` in 18-decimal fixed point.
pub const WAD: U256 = U256::from_limbs([1_000_000_000_000_000_000, 0, 0, 0]);
