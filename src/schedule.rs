use crate::error::ScheduleError;

/// Computes the per-epoch tick movement of a descending-price auction.
///
/// The tick range is spread over `duration / epoch_length` epochs (a real-valued
/// count), rounded up to a whole tick, then up again to a multiple of
/// `tick_spacing`, and never below one spacing unit.
///
/// # Errors
///
/// Returns an error if the duration or epoch length is zero, if the tick spacing
/// is not positive, or if the result does not fit in a tick.
pub fn compute_gamma(
    start_tick: i32,
    end_tick: i32,
    duration: u64,
    epoch_length: u64,
    tick_spacing: i32,
) -> Result<i32, ScheduleError> {
    if duration == 0 {
        return Err(ScheduleError::ZeroDuration);
    }
    if epoch_length == 0 {
        return Err(ScheduleError::ZeroEpochLength);
    }
    if tick_spacing <= 0 {
        return Err(ScheduleError::NonPositiveTickSpacing(tick_spacing));
    }

    let tick_delta = u128::from((i64::from(end_tick) - i64::from(start_tick)).unsigned_abs());
    let spacing = tick_spacing.unsigned_abs() as u128;

    // ceil(tick_delta / (duration / epoch_length)), kept exact in integers.
    let raw = (tick_delta * u128::from(epoch_length)).div_ceil(u128::from(duration));
    let gamma = raw.div_ceil(spacing).max(1) * spacing;

    let gamma = i32::try_from(gamma).map_err(|_| ScheduleError::GammaOverflow(gamma))?;
    if gamma % tick_spacing != 0 {
        return Err(ScheduleError::NotSpacingMultiple {
            gamma: i64::from(gamma),
            tick_spacing,
        });
    }
    Ok(gamma)
}

/// A timed price schedule moving from `start_tick` towards `end_tick` by `gamma`
/// every epoch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuctionSchedule {
    pub start_tick: i32,
    pub end_tick: i32,
    pub duration: u64,
    pub epoch_length: u64,
    pub tick_spacing: i32,
    pub gamma: i32,
}

impl AuctionSchedule {
    /// Validates the schedule and derives its gamma.
    ///
    /// Unlike [`compute_gamma`], the duration must be a whole number of epochs.
    pub fn new(
        start_tick: i32,
        end_tick: i32,
        duration: u64,
        epoch_length: u64,
        tick_spacing: i32,
    ) -> Result<Self, ScheduleError> {
        let gamma = compute_gamma(start_tick, end_tick, duration, epoch_length, tick_spacing)?;
        if duration % epoch_length != 0 {
            return Err(ScheduleError::UnevenEpochs {
                duration,
                epoch_length,
            });
        }

        Ok(Self {
            start_tick,
            end_tick,
            duration,
            epoch_length,
            tick_spacing,
            gamma,
        })
    }

    pub fn total_epochs(&self) -> u64 {
        self.duration / self.epoch_length
    }

    /// `1` when the tick rises over the auction, `-1` when it falls.
    pub fn direction(&self) -> i64 {
        if self.end_tick >= self.start_tick { 1 } else { -1 }
    }

    /// Number of whole epochs completed `elapsed` seconds into the auction,
    /// capped at the total.
    pub fn epochs_elapsed(&self, elapsed: u64) -> u64 {
        (elapsed / self.epoch_length).min(self.total_epochs())
    }

    /// The scheduled tick after `epochs` epochs: `start + direction * epochs * gamma`.
    ///
    /// Gamma is rounded up, so late epochs may overshoot `end_tick`.
    pub fn tick_after_epochs(&self, epochs: u64) -> i64 {
        let movement = i64::try_from(epochs)
            .unwrap_or(i64::MAX)
            .saturating_mul(i64::from(self.gamma));
        i64::from(self.start_tick).saturating_add(self.direction().saturating_mul(movement))
    }
}
