use std::{
    future::Future,
    time::{SystemTime, UNIX_EPOCH},
};

use alloy_primitives::{Address, B256, U160, keccak256};

use crate::{address::OrderingSide, error::MiningError};

/// Predicts the token address a deployment with a given salt would produce.
///
/// Used when the token address depends on remote state and cannot be computed
/// locally, typically by simulating the creation call against a node.
pub trait TokenPredictor {
    type Error: std::error::Error + Send + Sync + 'static;

    fn predict(&self, salt: B256) -> impl Future<Output = Result<Address, Self::Error>>;
}

impl<F, Fut, E> TokenPredictor for F
where
    F: Fn(B256) -> Fut,
    Fut: Future<Output = Result<Address, E>>,
    E: std::error::Error + Send + Sync + 'static,
{
    type Error = E;

    fn predict(&self, salt: B256) -> impl Future<Output = Result<Address, E>> {
        self(salt)
    }
}

/// Source of the time entropy mixed into salt seeds.
pub trait Clock {
    fn now(&self) -> u64;
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now(&self) -> u64 {
        (**self).now()
    }
}

/// Wall-clock nanoseconds since the unix epoch.
///
/// The reading is only salt entropy, so wall time stands in for a monotonic
/// source. Readings need not increase between calls.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> u64 {
        nanos_since_epoch(SystemTime::now())
    }
}

/// Nanoseconds from the unix epoch to `time`, or 0 with a warning when the
/// clock is set before the epoch.
fn nanos_since_epoch(time: SystemTime) -> u64 {
    match time.duration_since(UNIX_EPOCH) {
        Ok(elapsed) => elapsed.as_nanos() as u64,
        Err(err) => {
            tracing::warn!(
                behind = ?err.duration(),
                "system clock is before the unix epoch, seeding salts from 0"
            );
            0
        }
    }
}

/// A fixed reading, for reproducible salts.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub u64);

impl Clock for FixedClock {
    fn now(&self) -> u64 {
        self.0
    }
}

/// Derives a salt from an account and a clock reading.
///
/// The salt is the hash of the big-endian reading with the account bytes XORed
/// into its low 20 bytes.
pub fn seed_salt(account: Address, reading: u64) -> B256 {
    let mut salt = keccak256(reading.to_be_bytes());
    for (byte, mix) in salt[12..].iter_mut().zip(account.iter()) {
        *byte ^= mix;
    }
    salt
}

/// The account a retry seeds from: `account + attempt` over 160 bits.
fn offset_account(account: Address, attempt: u64) -> Address {
    let offset = U160::from_be_slice(account.as_slice()).wrapping_add(U160::from(attempt));
    Address::from(offset.to_be_bytes::<20>())
}

/// Searches for a salt whose predicted token sorts on the required side of the
/// numeraire.
///
/// Each attempt reseeds from `seed_account + attempt` and awaits a single
/// prediction; attempts are strictly sequential.
#[derive(Debug, Clone, Copy)]
pub struct OrderMiner<C> {
    seed_account: Address,
    numeraire: Address,
    side: OrderingSide,
    max_attempts: u32,
    clock: C,
}

impl OrderMiner<SystemClock> {
    pub fn new(seed_account: Address, numeraire: Address, max_attempts: u32) -> Self {
        Self::with_clock(seed_account, numeraire, max_attempts, SystemClock)
    }
}

impl<C: Clock> OrderMiner<C> {
    pub fn with_clock(
        seed_account: Address,
        numeraire: Address,
        max_attempts: u32,
        clock: C,
    ) -> Self {
        Self {
            seed_account,
            numeraire,
            side: OrderingSide::for_numeraire(numeraire),
            max_attempts,
            clock,
        }
    }

    pub fn side(&self) -> OrderingSide {
        self.side
    }

    /// The salt tried on a given attempt.
    pub fn salt_for_attempt(&self, attempt: u32) -> B256 {
        seed_salt(
            offset_account(self.seed_account, u64::from(attempt)),
            self.clock.now(),
        )
    }

    /// Runs the search, returning the accepted salt and its predicted token.
    ///
    /// A predictor failure ends the search immediately.
    pub async fn mine<P: TokenPredictor>(
        &self,
        predictor: &P,
    ) -> Result<(B256, Address), MiningError> {
        tracing::debug!(
            account = %self.seed_account,
            numeraire = %self.numeraire,
            side = ?self.side,
            max_attempts = self.max_attempts,
            "mining token ordering salt"
        );

        for attempt in 0..self.max_attempts {
            let salt = self.salt_for_attempt(attempt);
            let token = predictor
                .predict(salt)
                .await
                .map_err(|err| MiningError::Predictor {
                    attempt: u64::from(attempt),
                    source: Box::new(err),
                })?;

            if self.side.accepts(token, self.numeraire) {
                tracing::info!(%salt, %token, attempt, "found ordering salt");
                return Ok((salt, token));
            }
            tracing::debug!(%salt, %token, attempt, "predicted token on wrong side");
        }

        Err(MiningError::Exhausted {
            attempts: u64::from(self.max_attempts),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy_primitives::address;
    use std::{cell::RefCell, convert::Infallible, fmt, time::Duration};

    const ACCOUNT: Address = address!("0x00000000000000000000000000000000000000ff");

    #[derive(Debug)]
    struct RpcDown;

    impl fmt::Display for RpcDown {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("rpc unavailable")
        }
    }

    impl std::error::Error for RpcDown {}

    #[test]
    fn seed_is_reproducible_with_fixed_clock() {
        let miner = OrderMiner::with_clock(ACCOUNT, Address::ZERO, 4, FixedClock(1_700_000_000));
        assert_eq!(miner.salt_for_attempt(0), miner.salt_for_attempt(0));
        assert_ne!(miner.salt_for_attempt(0), miner.salt_for_attempt(1));
        assert_eq!(miner.salt_for_attempt(0), seed_salt(ACCOUNT, 1_700_000_000));
    }

    #[test]
    fn clock_before_epoch_reads_zero() {
        let before = UNIX_EPOCH - Duration::from_secs(1);
        assert_eq!(nanos_since_epoch(before), 0);
        let after = UNIX_EPOCH + Duration::from_nanos(1_700_000_000_000_000_123);
        assert_eq!(nanos_since_epoch(after), 1_700_000_000_000_000_123);
    }

    #[test]
    fn seed_mixes_account_into_low_bytes() {
        let a = seed_salt(Address::ZERO, 7);
        let b = seed_salt(ACCOUNT, 7);
        assert_eq!(a[..31], b[..31]);
        assert_eq!(a[31] ^ b[31], 0xff);
        assert_eq!(a, keccak256(7u64.to_be_bytes()));
    }

    #[test]
    fn retry_account_wraps() {
        let max = address!("0xffffffffffffffffffffffffffffffffffffffff");
        assert_eq!(offset_account(max, 1), Address::ZERO);
        assert_eq!(
            offset_account(ACCOUNT, 1),
            address!("0x0000000000000000000000000000000000000100")
        );
    }

    #[tokio::test]
    async fn retries_until_ordering_holds() {
        let numeraire = address!("0x1111111111111111111111111111111111111111");
        let miner = OrderMiner::with_clock(ACCOUNT, numeraire, 8, FixedClock(42));
        let calls = RefCell::new(Vec::new());
        let predictor = |salt: B256| {
            calls.borrow_mut().push(salt);
            let token = if calls.borrow().len() < 3 {
                address!("0x0000000000000000000000000000000000000001")
            } else {
                address!("0x2222222222222222222222222222222222222222")
            };
            async move { Ok::<_, Infallible>(token) }
        };

        let (salt, token) = miner.mine(&predictor).await.unwrap();
        assert_eq!(token, address!("0x2222222222222222222222222222222222222222"));
        assert_eq!(salt, miner.salt_for_attempt(2));
        assert_eq!(
            *calls.borrow(),
            vec![
                miner.salt_for_attempt(0),
                miner.salt_for_attempt(1),
                miner.salt_for_attempt(2)
            ]
        );
    }

    #[tokio::test]
    async fn high_numeraire_requires_lower_token() {
        let numeraire = address!("0xffffffffffffffffffffffffffffffffffffffff");
        let miner = OrderMiner::with_clock(ACCOUNT, numeraire, 1, FixedClock(0));
        let predictor = |_salt: B256| async {
            Ok::<_, Infallible>(address!("0x1111111111111111111111111111111111111111"))
        };
        assert!(miner.mine(&predictor).await.is_ok());
    }

    #[tokio::test]
    async fn exhausts_after_budget() {
        let miner = OrderMiner::with_clock(ACCOUNT, Address::ZERO, 5, FixedClock(0));
        let calls = RefCell::new(0u32);
        let predictor = |_salt: B256| {
            *calls.borrow_mut() += 1;
            async { Ok::<_, Infallible>(Address::ZERO) }
        };

        let err = miner.mine(&predictor).await.unwrap_err();
        assert!(matches!(err, MiningError::Exhausted { attempts: 5 }));
        assert_eq!(*calls.borrow(), 5);
    }

    #[tokio::test]
    async fn predictor_failure_is_not_retried() {
        let miner = OrderMiner::with_clock(ACCOUNT, Address::ZERO, 5, FixedClock(0));
        let calls = RefCell::new(0u32);
        let predictor = |_salt: B256| {
            *calls.borrow_mut() += 1;
            async { Err::<Address, _>(RpcDown) }
        };

        let err = miner.mine(&predictor).await.unwrap_err();
        assert!(matches!(err, MiningError::Predictor { attempt: 0, .. }));
        assert_eq!(*calls.borrow(), 1);
    }
}
