use alloy_primitives::{Address, B256, U256};
use rayon::prelude::{IntoParallelIterator, ParallelIterator};

use crate::{
    address::{OrderingSide, compute_address},
    error::MiningError,
    params::HookFlags,
};

/// Something that deploys contracts at salt-determined addresses.
///
/// Implementations must be thread-safe so that salt ranges can be searched in
/// parallel.
pub trait Deployer: Sync {
    /// Calculates the contract address that deploying with `salt` would produce.
    fn compute_address(&self, salt: B256) -> Address;
}

/// A CREATE2 deployment: a deployer contract and the hash of the init code it
/// deploys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Create2Deployer {
    /// Address of the contract executing CREATE2
    pub deployer: Address,
    /// Keccak256 hash of the creation bytecode and constructor arguments
    pub init_code_hash: B256,
}

impl Create2Deployer {
    pub fn new(deployer: Address, init_code_hash: B256) -> Self {
        Self {
            deployer,
            init_code_hash,
        }
    }
}

impl Deployer for Create2Deployer {
    #[inline]
    fn compute_address(&self, salt: B256) -> Address {
        compute_address(self.deployer, salt, self.init_code_hash)
    }
}

/// A salt accepted by [`FlagMiner`], with the two addresses it produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MinedSalt {
    pub salt: B256,
    pub hook: Address,
    pub token: Address,
}

/// Searches for a salt shared by a hook and a token deployment such that the
/// hook address carries the required flag bits and the token sorts on the
/// required side of the numeraire.
///
/// Salts are the integers `0..max_attempts` encoded as 32-byte big-endian words.
/// The search runs across threads, but always returns the lowest accepted salt,
/// so results are identical to a sequential scan.
#[derive(Debug, Clone, Copy)]
pub struct FlagMiner<H, T> {
    hook: H,
    token: T,
    numeraire: Address,
    side: OrderingSide,
    flags: HookFlags,
    max_attempts: u64,
}

impl<H: Deployer, T: Deployer> FlagMiner<H, T> {
    /// Creates a miner; the ordering side is derived once from `numeraire`.
    ///
    /// # Arguments
    /// * `hook` - Deployment of the flag-carrying hook contract
    /// * `token` - Deployment of the token, sharing the hook's salt
    /// * `numeraire` - Asset the token is paired against
    /// * `flags` - Required flag bits and the mask they are tested under
    /// * `max_attempts` - Number of salts to try before giving up
    pub fn new(hook: H, token: T, numeraire: Address, flags: HookFlags, max_attempts: u64) -> Self {
        Self {
            hook,
            token,
            numeraire,
            side: OrderingSide::for_numeraire(numeraire),
            flags,
            max_attempts,
        }
    }

    pub fn side(&self) -> OrderingSide {
        self.side
    }

    /// Tests a single salt.
    ///
    /// The token address is only computed once the hook address passes the
    /// flag test.
    pub fn try_salt(&self, salt: B256) -> Option<MinedSalt> {
        let hook = self.hook.compute_address(salt);
        if !self.flags.matches(hook) {
            return None;
        }

        let token = self.token.compute_address(salt);
        self.side
            .accepts(token, self.numeraire)
            .then_some(MinedSalt { salt, hook, token })
    }

    /// Returns the lowest salt below `max_attempts` satisfying both constraints.
    pub fn mine(&self) -> Result<MinedSalt, MiningError> {
        tracing::debug!(
            numeraire = %self.numeraire,
            side = ?self.side,
            required = %self.flags.required,
            mask = %self.flags.mask,
            max_attempts = self.max_attempts,
            "mining hook salt"
        );

        let found = (0..self.max_attempts)
            .into_par_iter()
            .find_map_first(|nonce| self.try_salt(B256::from(U256::from(nonce))));

        match found {
            Some(mined) => {
                tracing::info!(
                    salt = %mined.salt,
                    hook = %mined.hook,
                    token = %mined.token,
                    "found hook salt"
                );
                Ok(mined)
            }
            None => Err(MiningError::Exhausted {
                attempts: self.max_attempts,
            }),
        }
    }
}
