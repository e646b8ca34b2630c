//! Synthetic historical-series generation.
//!
//! The dashboard has no real price history; every chart is a randomized
//! walk anchored so it ends exactly at the symbol's current price. All
//! chart surfaces share this one implementation, with the tuning constants
//! collected in [`SynthesizerConfig`] rather than scattered per caller.
//!
//! Generation is intentionally non-deterministic: two calls with the same
//! inputs produce different plausible series. Consumers assert invariants
//! (anchoring, length, bar ordering), never literal values.

use fastrand::Rng;

use crate::{RangeCode, StockReference, SynthesisError, TimeSeries, TimeSeriesPoint, UtcDateTime};

/// Tuning knobs for the synthetic walk.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SynthesizerConfig {
    /// Per-step perturbation scale applied to the walk.
    pub volatility: f64,
    /// Width of the open's random offset around the close.
    pub open_jitter: f64,
    /// Upper bound of the random inflation/deflation applied to high/low.
    pub shadow_jitter: f64,
    /// Long-range start anchor as a fraction of the current price when the
    /// growth scenario is selected.
    pub growth_anchor: f64,
    /// Long-range start anchor fraction for the decline scenario.
    pub decline_anchor: f64,
    /// Growth scenario is selected when `price > threshold * low_52_week`.
    pub growth_threshold: f64,
    /// Volume draw ceiling when the reference carries no average volume.
    pub fallback_volume: u64,
}

impl Default for SynthesizerConfig {
    fn default() -> Self {
        Self {
            volatility: 0.02,
            open_jitter: 0.005,
            shadow_jitter: 0.01,
            growth_anchor: 0.4,
            decline_anchor: 1.4,
            growth_threshold: 1.3,
            fallback_volume: 10_000_000,
        }
    }
}

/// Produces a plausible OHLCV series for a symbol over a requested range,
/// anchored so the final close equals the reference's current price.
///
/// Stateless and synchronous; each call owns its rng, so concurrent calls
/// need no coordination.
#[derive(Debug, Clone, Default)]
pub struct SeriesSynthesizer {
    config: SynthesizerConfig,
}

impl SeriesSynthesizer {
    pub fn new(config: SynthesizerConfig) -> Self {
        Self { config }
    }

    pub const fn config(&self) -> &SynthesizerConfig {
        &self.config
    }

    /// Generate a series of `range.shape().points` bars ending at `now`.
    ///
    /// # Errors
    ///
    /// [`SynthesisError::InvalidInput`] when the reference price is
    /// non-finite or non-positive; callers are expected to have resolved
    /// the symbol before getting here.
    pub fn synthesize(
        &self,
        reference: &StockReference,
        range: RangeCode,
        now: UtcDateTime,
    ) -> Result<TimeSeries, SynthesisError> {
        let price = reference.price;
        if !price.is_finite() || price <= 0.0 {
            return Err(SynthesisError::InvalidInput { value: price });
        }

        let shape = range.shape();
        let total = shape.points;
        let anchor = self.start_anchor(reference, range);
        let volume_ceiling = reference.avg_volume.unwrap_or(self.config.fallback_volume);

        let mut rng = Rng::new();
        let mut points = Vec::with_capacity(total);
        let mut noise = 1.0_f64;

        // Walk oldest (index total-1) to newest (index 0). The interpolation
        // target leans toward the synthetic anchor early and toward the real
        // price late; the multiplicative noise track compounds on top, with
        // perturbations scaled up as the series approaches "now".
        for index in (0..total).rev() {
            let timestamp = now.minus(shape.spacing * index as i32).unix_timestamp();

            let progress = index as f64 / total as f64;
            let target = price * (anchor * progress + (1.0 - progress));

            if index != total - 1 {
                let drift = (total - index) as f64 / total as f64;
                let perturbation = (rng.f64() - 0.5) * self.config.volatility * drift;
                noise *= 1.0 + perturbation;
            }

            let close = round_cents((target * noise).max(0.01));
            points.push(self.bar(&mut rng, timestamp, close, volume_ceiling));
        }

        // Anchoring fix-up: the last close is the reference price exactly,
        // with open/high/low re-derived from the forced close.
        if let Some(last) = points.last_mut() {
            *last = self.bar(&mut rng, last.timestamp, price, volume_ceiling);
        }

        Ok(TimeSeries::new(reference.symbol.clone(), range, points))
    }

    /// Starting multiplier for the walk.
    ///
    /// Short ranges start at the current price. Long ranges pick a growth or
    /// decline narrative from where the price sits against its 52-week low:
    /// comfortably above it means the stock presumably grew into its price,
    /// so the walk starts low; otherwise it starts high and declines.
    fn start_anchor(&self, reference: &StockReference, range: RangeCode) -> f64 {
        if !range.is_long_range() {
            return 1.0;
        }

        if reference.price > reference.low_52_week * self.config.growth_threshold {
            self.config.growth_anchor
        } else {
            self.config.decline_anchor
        }
    }

    /// Derive a full bar from a close.
    ///
    /// High inflates from `max(close, open)` and low deflates from
    /// `min(close, open)`, then both clamp against the bar body so rounding
    /// can never invert the ordering.
    fn bar(&self, rng: &mut Rng, timestamp: i64, close: f64, volume_ceiling: u64) -> TimeSeriesPoint {
        let open = round_cents(close * (1.0 + (rng.f64() - 0.5) * self.config.open_jitter));
        let body_high = close.max(open);
        let body_low = close.min(open);

        let high = round_cents(body_high * (1.0 + rng.f64() * self.config.shadow_jitter)).max(body_high);
        let low = round_cents(body_low * (1.0 - rng.f64() * self.config.shadow_jitter)).min(body_low);

        TimeSeriesPoint {
            timestamp,
            open,
            high,
            low,
            close,
            volume: rng.u64(0..=volume_ceiling),
        }
    }
}

fn round_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Symbol;

    fn reference(price: f64, low_52_week: f64, avg_volume: Option<u64>) -> StockReference {
        StockReference {
            symbol: Symbol::parse("AAPL").expect("symbol"),
            name: String::from("Apple Inc."),
            price,
            change: 1.78,
            change_percent: 0.97,
            high_52_week: 199.62,
            low_52_week,
            market_cap: None,
            volume: 48_521_400,
            avg_volume,
        }
    }

    fn now() -> UtcDateTime {
        UtcDateTime::parse("2024-06-03T20:00:00Z").expect("timestamp")
    }

    #[test]
    fn anchors_final_close_to_reference_price() {
        let synthesizer = SeriesSynthesizer::default();
        for range in RangeCode::ALL {
            let series = synthesizer
                .synthesize(&reference(185.92, 141.39, Some(56_395_400)), range, now())
                .expect("series");
            assert_eq!(series.last_close(), Some(185.92), "range {range}");
        }
    }

    #[test]
    fn every_bar_keeps_open_and_close_inside_shadows() {
        let synthesizer = SeriesSynthesizer::default();
        // Random construction; a generous number of draws guards the clamp.
        for _ in 0..50 {
            let series = synthesizer
                .synthesize(
                    &reference(185.92, 141.39, Some(56_395_400)),
                    RangeCode::OneMonth,
                    now(),
                )
                .expect("series");
            for point in &series.points {
                assert!(point.low <= point.open && point.open <= point.high);
                assert!(point.low <= point.close && point.close <= point.high);
            }
        }
    }

    #[test]
    fn rejects_non_finite_price() {
        let synthesizer = SeriesSynthesizer::default();
        let err = synthesizer
            .synthesize(&reference(f64::NAN, 141.39, None), RangeCode::OneMonth, now())
            .expect_err("must fail");
        assert!(matches!(err, SynthesisError::InvalidInput { .. }));
    }

    #[test]
    fn rejects_zero_price() {
        let synthesizer = SeriesSynthesizer::default();
        let err = synthesizer
            .synthesize(&reference(0.0, 141.39, None), RangeCode::OneDay, now())
            .expect_err("must fail");
        assert!(matches!(err, SynthesisError::InvalidInput { value } if value == 0.0));
    }

    #[test]
    fn long_range_growth_scenario_starts_low() {
        let synthesizer = SeriesSynthesizer::default();
        // price = 200, low = 50: comfortably above 1.3x the low, so the walk
        // starts near 0.4 * price = 80.
        let series = synthesizer
            .synthesize(&reference(200.0, 50.0, None), RangeCode::FiveYears, now())
            .expect("series");
        let first = series.points.first().expect("non-empty");
        assert!(
            (70.0..=95.0).contains(&first.close),
            "growth anchor should start near 80, got {}",
            first.close
        );
    }

    #[test]
    fn long_range_decline_scenario_starts_high() {
        let synthesizer = SeriesSynthesizer::default();
        // price = 100, low = 90: under 1.3x the low, so the walk starts near
        // 1.4 * price = 140.
        let series = synthesizer
            .synthesize(&reference(100.0, 90.0, None), RangeCode::TenYears, now())
            .expect("series");
        let first = series.points.first().expect("non-empty");
        assert!(
            (125.0..=155.0).contains(&first.close),
            "decline anchor should start near 140, got {}",
            first.close
        );
    }

    #[test]
    fn survives_reference_violating_52_week_band() {
        let synthesizer = SeriesSynthesizer::default();
        // low above price: nonsense input, but generation must not fail.
        let series = synthesizer
            .synthesize(&reference(50.0, 400.0, None), RangeCode::Max, now())
            .expect("series");
        assert_eq!(series.last_close(), Some(50.0));
    }

    #[test]
    fn volume_respects_ceiling() {
        let synthesizer = SeriesSynthesizer::default();
        let series = synthesizer
            .synthesize(
                &reference(185.92, 141.39, Some(1_000)),
                RangeCode::OneYear,
                now(),
            )
            .expect("series");
        assert!(series.points.iter().all(|point| point.volume <= 1_000));
    }

    #[test]
    fn missing_avg_volume_uses_fallback_ceiling() {
        let synthesizer = SeriesSynthesizer::default();
        let ceiling = synthesizer.config().fallback_volume;
        let series = synthesizer
            .synthesize(&reference(185.92, 141.39, None), RangeCode::OneMonth, now())
            .expect("series");
        assert!(series.points.iter().all(|point| point.volume <= ceiling));
    }
}
