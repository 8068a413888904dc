use alloy_primitives::U256;

/// Failure of a salt search.
#[derive(Debug, thiserror::Error)]
pub enum MiningError {
    /// No salt satisfied the acceptance predicate within the attempt budget.
    #[error("no valid salt found after {attempts} attempts")]
    Exhausted { attempts: u64 },

    /// The external token predictor could not evaluate a candidate salt.
    #[error("token prediction failed on attempt {attempt}")]
    Predictor {
        attempt: u64,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

/// A violated precondition of an auction schedule.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ScheduleError {
    #[error("auction duration must be positive")]
    ZeroDuration,

    #[error("epoch length must be positive")]
    ZeroEpochLength,

    #[error("tick spacing must be positive, got {0}")]
    NonPositiveTickSpacing(i32),

    #[error("duration {duration}s is not a whole number of {epoch_length}s epochs")]
    UnevenEpochs { duration: u64, epoch_length: u64 },

    #[error("gamma {gamma} is not a multiple of tick spacing {tick_spacing}")]
    NotSpacingMultiple { gamma: i64, tick_spacing: i32 },

    #[error("gamma {0} does not fit in a tick")]
    GammaOverflow(u128),
}

/// Which numeric curve field failed the positivity check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CurveField {
    NumPositions,
    Shares,
}

impl std::fmt::Display for CurveField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::NumPositions => "numPositions",
            Self::Shares => "shares",
        })
    }
}

/// An invalid curve, reported with the index of the offending entry.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CurveError {
    #[error("curve set is empty")]
    Empty,

    #[error("tick spacing must be positive, got {0}")]
    NonPositiveTickSpacing(i32),

    #[error("curve {index}: tickLower {tick_lower} must be below tickUpper {tick_upper}")]
    NonMonotonicTicks {
        index: usize,
        tick_lower: i32,
        tick_upper: i32,
    },

    #[error("curve {index}: {field} must be positive")]
    NonPositive { index: usize, field: CurveField },

    #[error("curve {index}: cumulative shares {total} exceed {target}")]
    SharesExceedTotal {
        index: usize,
        total: U256,
        target: U256,
    },
}

/// Failure to assemble a deployment request.
#[derive(Debug, thiserror::Error)]
pub enum EncodeError {
    #[error(transparent)]
    Mining(#[from] MiningError),

    #[error("invalid schedule: {0}")]
    Schedule(#[from] ScheduleError),

    #[error("invalid curves: {0}")]
    Curve(#[from] CurveError),

    #[error("invalid beneficiaries: {0}")]
    Beneficiaries(&'static str),

    #[error("{field} is out of range for its ABI type")]
    OutOfRange { field: &'static str },
}
