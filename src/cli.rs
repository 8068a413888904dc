use alloy_primitives::{Address, FixedBytes};
use doppler_mint::params::{DEFAULT_MAX_FLAG_ATTEMPTS, hook_bits};

/// Command-line interface for doppler-mint.
///
/// Mines deployment salts and derives auction schedule parameters ahead of a
/// token launch.
#[derive(Clone, Debug, clap::Parser)]
#[command(
    name = "doppler-mint",
    about = "Salt miner and schedule calculator for liquidity bootstrapping auctions."
)]
pub(super) enum Cli {
    /// Mines a salt shared by a hook and a token deployment.
    ///
    /// The hook address must carry the required flag bits and the token must
    /// sort on the correct side of the numeraire.
    Mine {
        /// Address of the contract deploying the hook.
        hook_deployer: Address,

        /// Hash of the hook's initialization code.
        hook_init_code_hash: FixedBytes<32>,

        /// Address of the token factory.
        token_factory: Address,

        /// Hash of the token's initialization code.
        token_init_code_hash: FixedBytes<32>,

        /// Asset the token is paired against.
        #[clap(short, long, default_value_t = Address::ZERO)]
        numeraire: Address,

        /// Hex string representing the required flags.
        #[clap(short, long, default_value_t = format!("{:04x}", hook_bits::DOPPLER))]
        flags: String,

        /// Hex string representing the bits the flags are tested under.
        #[clap(short, long, default_value_t = format!("{:04x}", hook_bits::ALL))]
        mask: String,

        /// Number of salts to try.
        #[clap(long, default_value_t = DEFAULT_MAX_FLAG_ATTEMPTS)]
        max_attempts: u64,
    },

    /// Computes the per-epoch tick movement of a timed auction.
    Gamma {
        /// Tick the auction starts at.
        #[clap(allow_hyphen_values = true)]
        start_tick: i32,

        /// Tick the auction ends at.
        #[clap(allow_hyphen_values = true)]
        end_tick: i32,

        /// Auction duration in seconds.
        duration: u64,

        /// Epoch length in seconds.
        epoch_length: u64,

        /// Pool tick spacing.
        tick_spacing: i32,
    },
}

/// Parses a hex string of at most two bytes, such as `38e0` or `0x3fff`.
pub(super) fn parse_flags(flags: &str) -> anyhow::Result<u16> {
    let digits = flags.strip_prefix("0x").unwrap_or(flags);
    let padded = format!("{digits:0>4}");
    let bytes = hex::decode(&padded)?;
    match bytes.as_slice() {
        [hi, lo] => Ok(u16::from_be_bytes([*hi, *lo])),
        _ => anyhow::bail!("flags {flags:?} do not fit in 16 bits"),
    }
}

#[test]
fn test_parse_flags() {
    assert_eq!(parse_flags("38e0").unwrap(), 0x38e0);
    assert_eq!(parse_flags("0x3fff").unwrap(), 0x3fff);
    assert_eq!(parse_flags("1").unwrap(), 0x0001);
    assert!(parse_flags("10000").is_err());
    assert!(parse_flags("zz").is_err());
}
