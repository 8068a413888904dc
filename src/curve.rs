use alloy_primitives::U256;

use crate::error::{CurveError, CurveField};

/// A band of liquidity positions between two ticks, holding a WAD-denominated
/// share of the tokens for sale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Curve {
    pub tick_lower: i32,
    pub tick_upper: i32,
    pub num_positions: u16,
    pub shares: U256,
}

/// Largest multiple of `tick_spacing` not above `max_tick`.
pub fn max_aligned_tick(max_tick: i32, tick_spacing: i32) -> i32 {
    max_tick / tick_spacing * tick_spacing
}

/// Validates `curves` and tops their shares up to `total_target`.
///
/// Curves are checked in order and the first violation is returned. When the
/// shares fall short of the target, one filler curve is appended spanning from
/// the highest `tick_upper` to the highest usable tick, with the last curve's
/// position count and the missing shares. A set that already sums to the
/// target is returned as is.
pub fn normalize(
    mut curves: Vec<Curve>,
    tick_spacing: i32,
    max_tick: i32,
    total_target: U256,
) -> Result<Vec<Curve>, CurveError> {
    if tick_spacing <= 0 {
        return Err(CurveError::NonPositiveTickSpacing(tick_spacing));
    }
    let Some(last) = curves.last().copied() else {
        return Err(CurveError::Empty);
    };

    let mut total = U256::ZERO;
    let mut highest_upper = i32::MIN;
    for (index, curve) in curves.iter().enumerate() {
        if curve.tick_lower >= curve.tick_upper {
            return Err(CurveError::NonMonotonicTicks {
                index,
                tick_lower: curve.tick_lower,
                tick_upper: curve.tick_upper,
            });
        }
        if curve.num_positions == 0 {
            return Err(CurveError::NonPositive {
                index,
                field: CurveField::NumPositions,
            });
        }
        if curve.shares.is_zero() {
            return Err(CurveError::NonPositive {
                index,
                field: CurveField::Shares,
            });
        }

        total = match total.checked_add(curve.shares) {
            Some(sum) if sum <= total_target => sum,
            sum => {
                return Err(CurveError::SharesExceedTotal {
                    index,
                    total: sum.unwrap_or(U256::MAX),
                    target: total_target,
                });
            }
        };

        if curve.tick_lower <= 0 || curve.tick_upper <= 0 {
            tracing::warn!(
                index,
                tick_lower = curve.tick_lower,
                tick_upper = curve.tick_upper,
                "curve ticks are not strictly positive"
            );
        }
        highest_upper = highest_upper.max(curve.tick_upper);
    }

    if total == total_target {
        return Ok(curves);
    }

    let filler = Curve {
        tick_lower: highest_upper,
        tick_upper: max_aligned_tick(max_tick, tick_spacing),
        num_positions: last.num_positions,
        shares: total_target - total,
    };
    if filler.tick_lower >= filler.tick_upper {
        return Err(CurveError::NonMonotonicTicks {
            index: curves.len(),
            tick_lower: filler.tick_lower,
            tick_upper: filler.tick_upper,
        });
    }

    tracing::debug!(
        tick_lower = filler.tick_lower,
        tick_upper = filler.tick_upper,
        shares = %filler.shares,
        "appending filler curve"
    );
    curves.push(filler);
    Ok(curves)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::{MAX_TICK, WAD};
    use std::sync::{
        Arc,
        atomic::{AtomicUsize, Ordering},
    };
    use tracing::{Event, Level, Subscriber};
    use tracing_subscriber::{
        layer::{Context, SubscriberExt},
        Layer, registry,
    };

    /// Counts warning events.
    #[derive(Clone, Default)]
    struct Warnings(Arc<AtomicUsize>);

    impl<S: Subscriber> Layer<S> for Warnings {
        fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
            if *event.metadata().level() == Level::WARN {
                self.0.fetch_add(1, Ordering::SeqCst);
            }
        }
    }

    fn count_warnings(f: impl FnOnce()) -> usize {
        let warnings = Warnings::default();
        let subscriber = registry().with(warnings.clone());
        tracing::subscriber::with_default(subscriber, f);
        warnings.0.load(Ordering::SeqCst)
    }

    fn wad_fraction(tenths: u64) -> U256 {
        WAD * U256::from(tenths) / U256::from(10u64)
    }

    fn curve(tick_lower: i32, tick_upper: i32, num_positions: u16, tenths: u64) -> Curve {
        Curve {
            tick_lower,
            tick_upper,
            num_positions,
            shares: wad_fraction(tenths),
        }
    }

    #[test]
    fn aligned_max_tick() {
        assert_eq!(max_aligned_tick(MAX_TICK, 60), 887_220);
        assert_eq!(max_aligned_tick(MAX_TICK, 1), MAX_TICK);
        assert_eq!(max_aligned_tick(MAX_TICK, 200), 887_200);
    }

    #[test]
    fn appends_filler_for_missing_shares() {
        let curves = vec![curve(160_000, 180_000, 10, 2), curve(180_000, 202_000, 8, 4)];
        let normalized = normalize(curves.clone(), 60, MAX_TICK, WAD).unwrap();

        assert_eq!(normalized.len(), 3);
        assert_eq!(normalized[..2], curves[..]);
        assert_eq!(
            normalized[2],
            Curve {
                tick_lower: 202_000,
                tick_upper: MAX_TICK / 60 * 60,
                num_positions: 8,
                shares: wad_fraction(4),
            }
        );
        let total = normalized.iter().fold(U256::ZERO, |acc, c| acc + c.shares);
        assert_eq!(total, WAD);
    }

    #[test]
    fn filler_starts_at_highest_upper_tick() {
        let curves = vec![curve(180_000, 210_000, 3, 5), curve(100_000, 150_000, 6, 1)];
        let normalized = normalize(curves, 60, MAX_TICK, WAD).unwrap();
        assert_eq!(normalized[2].tick_lower, 210_000);
        assert_eq!(normalized[2].num_positions, 6);
    }

    #[test]
    fn full_set_is_unchanged() {
        let curves = vec![curve(0, 60_000, 5, 3), curve(60_000, 120_000, 5, 7)];
        let normalized = normalize(curves.clone(), 60, MAX_TICK, WAD).unwrap();
        assert_eq!(normalized, curves);
        assert_eq!(normalize(normalized.clone(), 60, MAX_TICK, WAD).unwrap(), normalized);
    }

    #[test]
    fn rejects_inverted_ticks() {
        let curves = vec![curve(100, 200, 1, 1), curve(300, 300, 1, 1)];
        assert_eq!(
            normalize(curves, 60, MAX_TICK, WAD),
            Err(CurveError::NonMonotonicTicks {
                index: 1,
                tick_lower: 300,
                tick_upper: 300
            })
        );
    }

    #[test]
    fn rejects_non_positive_fields() {
        assert_eq!(
            normalize(vec![curve(100, 200, 0, 1)], 60, MAX_TICK, WAD),
            Err(CurveError::NonPositive {
                index: 0,
                field: CurveField::NumPositions
            })
        );
        assert_eq!(
            normalize(vec![curve(100, 200, 1, 1), curve(200, 300, 1, 0)], 60, MAX_TICK, WAD),
            Err(CurveError::NonPositive {
                index: 1,
                field: CurveField::Shares
            })
        );
    }

    #[test]
    fn rejects_overflow_at_first_offending_curve() {
        let curves = vec![
            curve(100, 200, 1, 6),
            curve(200, 300, 1, 5),
            curve(300, 200, 1, 1),
        ];
        assert_eq!(
            normalize(curves, 60, MAX_TICK, WAD),
            Err(CurveError::SharesExceedTotal {
                index: 1,
                total: wad_fraction(11),
                target: WAD
            })
        );
    }

    #[test]
    fn rejects_empty_set_and_bad_spacing() {
        assert_eq!(normalize(Vec::new(), 60, MAX_TICK, WAD), Err(CurveError::Empty));
        assert_eq!(
            normalize(vec![curve(100, 200, 1, 1)], 0, MAX_TICK, WAD),
            Err(CurveError::NonPositiveTickSpacing(0))
        );
    }

    #[test]
    fn rejects_filler_without_room() {
        let curves = vec![curve(800_000, 887_220, 2, 5)];
        assert_eq!(
            normalize(curves, 60, MAX_TICK, WAD),
            Err(CurveError::NonMonotonicTicks {
                index: 1,
                tick_lower: 887_220,
                tick_upper: 887_220
            })
        );
    }

    #[test]
    fn accepts_non_positive_ticks() {
        let curves = vec![curve(-120_000, -60_000, 4, 10)];
        assert_eq!(normalize(curves.clone(), 60, MAX_TICK, WAD).unwrap(), curves);
    }

    #[test]
    fn warns_once_per_non_positive_curve() {
        let mixed = vec![
            curve(-120_000, -60_000, 4, 3),
            curve(0, 60_000, 4, 3),
            curve(60_000, 120_000, 4, 4),
        ];
        let warnings = count_warnings(|| {
            assert!(normalize(mixed, 60, MAX_TICK, WAD).is_ok());
        });
        assert_eq!(warnings, 2);

        let positive = vec![curve(60, 120_000, 4, 10)];
        let warnings = count_warnings(|| {
            assert!(normalize(positive, 60, MAX_TICK, WAD).is_ok());
        });
        assert_eq!(warnings, 0);
    }
}
