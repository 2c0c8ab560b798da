//! Randomized but bounded vitals generation.
//!
//! Produces physiologically plausible snapshots for the monitor loop.
//! The generator is seedable so tests can assert deterministic output.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::vitals::{BloodPressure, VitalSigns};

/// Generates randomized [`VitalSigns`] within fixed healthy-adjacent bounds.
///
/// Every bound here classifies as non-critical, so a freshly simulated
/// patient never starts in an alarm state.
pub struct VitalsGenerator {
    rng: StdRng,
}

impl VitalsGenerator {
    /// Create a generator seeded from the operating system.
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Create a deterministic generator for tests.
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Produce a fresh snapshot.
    ///
    /// Bounds: heart rate 65–89 bpm, blood pressure 110–134 / 70–84 mmHg,
    /// SpO₂ 95–99 %, temperature 36.2–37.4 °C (one decimal place),
    /// respiratory rate 14–19 breaths/min.
    pub fn generate(&mut self) -> VitalSigns {
        let temperature = self.rng.random_range(36.2..37.4_f64);

        VitalSigns {
            heart_rate: self.rng.random_range(65..90),
            blood_pressure: BloodPressure {
                systolic: self.rng.random_range(110..135),
                diastolic: self.rng.random_range(70..85),
            },
            oxygen_saturation: self.rng.random_range(95..100),
            // One decimal place, matching bedside thermometer resolution.
            temperature: (temperature * 10.0).round() / 10.0,
            respiratory_rate: self.rng.random_range(14..20),
        }
    }
}

impl Default for VitalsGenerator {
    fn default() -> Self {
        Self::new()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vitals::{classify, HealthStatus};

    #[test]
    fn fixed_seed_stays_in_bounds_for_1000_samples() {
        let mut generator = VitalsGenerator::from_seed(42);
        for i in 0..1000 {
            let vitals = generator.generate();
            assert!(
                (65..90).contains(&vitals.heart_rate),
                "sample {i}: heart rate {} out of bounds",
                vitals.heart_rate
            );
            assert!((110..135).contains(&vitals.blood_pressure.systolic));
            assert!((70..85).contains(&vitals.blood_pressure.diastolic));
            assert!((95..100).contains(&vitals.oxygen_saturation));
            assert!(
                (36.2..=37.4).contains(&vitals.temperature),
                "sample {i}: temperature {} out of bounds",
                vitals.temperature
            );
            assert!((14..20).contains(&vitals.respiratory_rate));
        }
    }

    #[test]
    fn generated_vitals_are_never_critical() {
        let mut generator = VitalsGenerator::from_seed(7);
        for _ in 0..1000 {
            let status = classify(&generator.generate());
            assert_ne!(status.overall, HealthStatus::Critical);
        }
    }

    #[test]
    fn same_seed_produces_same_sequence() {
        let mut a = VitalsGenerator::from_seed(99);
        let mut b = VitalsGenerator::from_seed(99);
        for _ in 0..10 {
            assert_eq!(a.generate(), b.generate());
        }
    }

    #[test]
    fn temperature_has_one_decimal_place() {
        let mut generator = VitalsGenerator::from_seed(3);
        for _ in 0..100 {
            let t = generator.generate().temperature;
            let scaled = t * 10.0;
            assert!(
                (scaled - scaled.round()).abs() < 1e-9,
                "temperature {t} not rounded to one decimal"
            );
        }
    }
}
