use crate::config::Config;
use crate::models::energy::{EnergyProduction, EnergyReading, EnergySource};

/// Uniform random numbers for the telemetry simulation
pub trait RandomSource {
    /// A value in `[0, 1)`
    fn unit(&mut self) -> f64;
}

impl RandomSource for fastrand::Rng {
    fn unit(&mut self) -> f64 {
        self.f64()
    }
}

/// Draws a fresh sample: solar, wind, hydro and biomass output, then total consumption.
///
/// Each production value lies in `[0, max_output)` for its source and consumption
/// in `[CONSUMPTION_MIN_KW, CONSUMPTION_MAX_KW)`.
pub fn generate_reading<R: RandomSource + ?Sized>(random: &mut R) -> EnergyReading {
    let mut sample = |source: EnergySource| random.unit() * source.max_output();

    let production = EnergyProduction::new(
        sample(EnergySource::Solar),
        sample(EnergySource::Wind),
        sample(EnergySource::Hydro),
        sample(EnergySource::Biomass),
    );

    EnergyReading {
        production,
        consumption: sample_consumption(random.unit()),
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn sample_consumption(unit: f64) -> u32 {
    let span = Config::CONSUMPTION_MAX_KW - Config::CONSUMPTION_MIN_KW;
    let offset = (unit * f64::from(span)).floor() as u32;
    (Config::CONSUMPTION_MIN_KW + offset).min(Config::CONSUMPTION_MAX_KW - 1)
}
