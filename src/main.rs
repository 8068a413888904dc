mod cli;

use anyhow::Context;
use clap::Parser;
use doppler_mint::{Create2Deployer, FlagMiner, HookFlags, compute_gamma};
use tracing_subscriber::EnvFilter;

use cli::{Cli, parse_flags};

/// Entry point for the doppler-mint tool.
///
/// Logs go to stderr; results are printed to stdout.
fn main() -> anyhow::Result<()> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    match Cli::parse() {
        Cli::Mine {
            hook_deployer,
            hook_init_code_hash,
            token_factory,
            token_init_code_hash,
            numeraire,
            flags,
            mask,
            max_attempts,
        } => {
            let flags = HookFlags::from_low_bits(
                parse_flags(&flags).context("invalid flags")?,
                parse_flags(&mask).context("invalid mask")?,
            );

            // Both contracts are deployed with the same salt
            let mined = FlagMiner::new(
                Create2Deployer::new(hook_deployer, hook_init_code_hash),
                Create2Deployer::new(token_factory, token_init_code_hash),
                numeraire,
                flags,
                max_attempts,
            )
            .mine()?;

            println!(
                "Found salt {:?} ==> hook {:?}, token {:?}",
                mined.salt, mined.hook, mined.token
            );
        }
        Cli::Gamma {
            start_tick,
            end_tick,
            duration,
            epoch_length,
            tick_spacing,
        } => {
            let gamma = compute_gamma(start_tick, end_tick, duration, epoch_length, tick_spacing)?;
            println!("{gamma}");
        }
    }

    Ok(())
}
