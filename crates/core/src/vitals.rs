//! Vital sign types and the threshold classifier.
//!
//! Pure logic — no timers, no RNG. The caller (the monitor loop) is
//! responsible for producing [`VitalSigns`] snapshots and passing them in.

use serde::{Deserialize, Serialize};

/// Arterial blood pressure in mmHg.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BloodPressure {
    pub systolic: i32,
    pub diastolic: i32,
}

/// A single snapshot of the five monitored vitals.
///
/// Regenerated wholesale on each monitor tick; never mutated in place.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VitalSigns {
    /// Heart rate in beats per minute.
    pub heart_rate: i32,
    pub blood_pressure: BloodPressure,
    /// Peripheral oxygen saturation in percent.
    pub oxygen_saturation: i32,
    /// Body temperature in degrees Celsius.
    pub temperature: f64,
    /// Breaths per minute.
    pub respiratory_rate: i32,
}

/// Three-level severity classification for a vital sign.
///
/// The derived `Ord` ranks `Normal < Warning < Critical`, so the
/// aggregate status is simply the maximum over all fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    Normal,
    Warning,
    Critical,
}

/// Per-field classification of a [`VitalSigns`] snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct VitalStatus {
    pub heart_rate: HealthStatus,
    pub blood_pressure: HealthStatus,
    pub oxygen_saturation: HealthStatus,
    pub temperature: HealthStatus,
    pub respiratory_rate: HealthStatus,
    /// Worst severity across the five fields.
    pub overall: HealthStatus,
}

/// Classify a vitals snapshot against the fixed clinical thresholds.
///
/// Deterministic and side-effect free. Thresholds are two-tier per field:
///
/// | Field            | Normal    | Warning             | Critical       |
/// |------------------|-----------|---------------------|----------------|
/// | heart rate       | 60–100    | 50–59 or 101–120    | <50 or >120    |
/// | systolic/diastolic | ≤140 / ≤90 | ≤160 / ≤100      | >160 or >100   |
/// | SpO₂             | ≥95       | 90–94               | <90            |
/// | temperature °C   | 36.0–37.5 | 35.0–38.5           | <35 or >38.5   |
/// | respiratory rate | 12–20     | 10–11 or 21–25      | <10 or >25     |
pub fn classify(vitals: &VitalSigns) -> VitalStatus {
    let heart_rate = classify_heart_rate(vitals.heart_rate);
    let blood_pressure = classify_blood_pressure(&vitals.blood_pressure);
    let oxygen_saturation = classify_oxygen_saturation(vitals.oxygen_saturation);
    let temperature = classify_temperature(vitals.temperature);
    let respiratory_rate = classify_respiratory_rate(vitals.respiratory_rate);

    let overall = [
        heart_rate,
        blood_pressure,
        oxygen_saturation,
        temperature,
        respiratory_rate,
    ]
    .into_iter()
    .max()
    .unwrap_or(HealthStatus::Normal);

    VitalStatus {
        heart_rate,
        blood_pressure,
        oxygen_saturation,
        temperature,
        respiratory_rate,
        overall,
    }
}

fn classify_heart_rate(bpm: i32) -> HealthStatus {
    if (60..=100).contains(&bpm) {
        HealthStatus::Normal
    } else if bpm < 50 || bpm > 120 {
        HealthStatus::Critical
    } else {
        HealthStatus::Warning
    }
}

fn classify_blood_pressure(bp: &BloodPressure) -> HealthStatus {
    if bp.systolic > 160 || bp.diastolic > 100 {
        HealthStatus::Critical
    } else if bp.systolic > 140 || bp.diastolic > 90 {
        HealthStatus::Warning
    } else {
        HealthStatus::Normal
    }
}

fn classify_oxygen_saturation(percent: i32) -> HealthStatus {
    if percent >= 95 {
        HealthStatus::Normal
    } else if percent >= 90 {
        HealthStatus::Warning
    } else {
        HealthStatus::Critical
    }
}

fn classify_temperature(celsius: f64) -> HealthStatus {
    if (36.0..=37.5).contains(&celsius) {
        HealthStatus::Normal
    } else if celsius < 35.0 || celsius > 38.5 {
        HealthStatus::Critical
    } else {
        HealthStatus::Warning
    }
}

fn classify_respiratory_rate(breaths: i32) -> HealthStatus {
    if (12..=20).contains(&breaths) {
        HealthStatus::Normal
    } else if breaths < 10 || breaths > 25 {
        HealthStatus::Critical
    } else {
        HealthStatus::Warning
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    /// A snapshot squarely inside every normal range.
    fn healthy() -> VitalSigns {
        VitalSigns {
            heart_rate: 72,
            blood_pressure: BloodPressure {
                systolic: 118,
                diastolic: 76,
            },
            oxygen_saturation: 98,
            temperature: 36.8,
            respiratory_rate: 16,
        }
    }

    #[test]
    fn healthy_snapshot_is_normal_everywhere() {
        let status = classify(&healthy());
        assert_eq!(status.heart_rate, HealthStatus::Normal);
        assert_eq!(status.blood_pressure, HealthStatus::Normal);
        assert_eq!(status.oxygen_saturation, HealthStatus::Normal);
        assert_eq!(status.temperature, HealthStatus::Normal);
        assert_eq!(status.respiratory_rate, HealthStatus::Normal);
        assert_eq!(status.overall, HealthStatus::Normal);
    }

    #[test]
    fn heart_rate_boundaries() {
        let cases = [
            (49, HealthStatus::Critical),
            (50, HealthStatus::Warning),
            (59, HealthStatus::Warning),
            (60, HealthStatus::Normal),
            (100, HealthStatus::Normal),
            (101, HealthStatus::Warning),
            (120, HealthStatus::Warning),
            (121, HealthStatus::Critical),
        ];
        for (bpm, expected) in cases {
            assert_eq!(
                classify_heart_rate(bpm),
                expected,
                "heart rate {bpm} misclassified"
            );
        }
    }

    /// Every bpm in [50, 120) is warning or normal, never critical,
    /// and matches the two-tier table.
    #[test]
    fn heart_rate_full_sweep_50_to_119() {
        for bpm in 50..120 {
            let expected = if (60..=100).contains(&bpm) {
                HealthStatus::Normal
            } else {
                HealthStatus::Warning
            };
            assert_eq!(classify_heart_rate(bpm), expected, "bpm {bpm}");
        }
    }

    #[test]
    fn blood_pressure_boundaries() {
        let bp = |systolic, diastolic| BloodPressure {
            systolic,
            diastolic,
        };
        assert_eq!(classify_blood_pressure(&bp(140, 90)), HealthStatus::Normal);
        assert_eq!(classify_blood_pressure(&bp(141, 80)), HealthStatus::Warning);
        assert_eq!(classify_blood_pressure(&bp(120, 91)), HealthStatus::Warning);
        assert_eq!(classify_blood_pressure(&bp(160, 100)), HealthStatus::Warning);
        assert_eq!(
            classify_blood_pressure(&bp(161, 80)),
            HealthStatus::Critical
        );
        assert_eq!(
            classify_blood_pressure(&bp(120, 101)),
            HealthStatus::Critical
        );
    }

    #[test]
    fn oxygen_saturation_boundaries() {
        assert_eq!(classify_oxygen_saturation(95), HealthStatus::Normal);
        assert_eq!(classify_oxygen_saturation(94), HealthStatus::Warning);
        assert_eq!(classify_oxygen_saturation(90), HealthStatus::Warning);
        assert_eq!(classify_oxygen_saturation(89), HealthStatus::Critical);
    }

    #[test]
    fn temperature_boundaries() {
        assert_eq!(classify_temperature(36.0), HealthStatus::Normal);
        assert_eq!(classify_temperature(37.5), HealthStatus::Normal);
        assert_eq!(classify_temperature(35.9), HealthStatus::Warning);
        assert_eq!(classify_temperature(37.6), HealthStatus::Warning);
        assert_eq!(classify_temperature(38.5), HealthStatus::Warning);
        assert_eq!(classify_temperature(34.9), HealthStatus::Critical);
        assert_eq!(classify_temperature(38.6), HealthStatus::Critical);
    }

    #[test]
    fn respiratory_rate_boundaries() {
        assert_eq!(classify_respiratory_rate(12), HealthStatus::Normal);
        assert_eq!(classify_respiratory_rate(20), HealthStatus::Normal);
        assert_eq!(classify_respiratory_rate(11), HealthStatus::Warning);
        assert_eq!(classify_respiratory_rate(21), HealthStatus::Warning);
        assert_eq!(classify_respiratory_rate(25), HealthStatus::Warning);
        assert_eq!(classify_respiratory_rate(9), HealthStatus::Critical);
        assert_eq!(classify_respiratory_rate(26), HealthStatus::Critical);
    }

    #[test]
    fn overall_is_warning_when_one_field_warns() {
        let mut vitals = healthy();
        vitals.heart_rate = 55;
        let status = classify(&vitals);
        assert_eq!(status.heart_rate, HealthStatus::Warning);
        assert_eq!(status.overall, HealthStatus::Warning);
    }

    #[test]
    fn overall_is_critical_when_any_field_is_critical() {
        let mut vitals = healthy();
        vitals.respiratory_rate = 16;
        vitals.heart_rate = 55; // warning
        vitals.oxygen_saturation = 85; // critical
        let status = classify(&vitals);
        assert_eq!(status.overall, HealthStatus::Critical);
    }

    /// `overall` always equals the maximum severity over the five fields.
    ///
    /// Exercises one representative input per status for all five fields,
    /// covering every combination of per-field severities.
    #[test]
    fn overall_equals_max_severity_for_all_combinations() {
        let heart_rates = [72, 55, 40];
        let pressures = [
            BloodPressure {
                systolic: 118,
                diastolic: 76,
            },
            BloodPressure {
                systolic: 150,
                diastolic: 85,
            },
            BloodPressure {
                systolic: 170,
                diastolic: 105,
            },
        ];
        let saturations = [98, 92, 85];
        let temperatures = [36.8, 38.0, 39.2];
        let respiratory_rates = [16, 23, 30];

        for (hi, &heart_rate) in heart_rates.iter().enumerate() {
            for (bi, &blood_pressure) in pressures.iter().enumerate() {
                for (oi, &oxygen_saturation) in saturations.iter().enumerate() {
                    for (ti, &temperature) in temperatures.iter().enumerate() {
                        for (ri, &respiratory_rate) in respiratory_rates.iter().enumerate() {
                            let vitals = VitalSigns {
                                heart_rate,
                                blood_pressure,
                                oxygen_saturation,
                                temperature,
                                respiratory_rate,
                            };
                            let status = classify(&vitals);
                            let expected = [
                                status.heart_rate,
                                status.blood_pressure,
                                status.oxygen_saturation,
                                status.temperature,
                                status.respiratory_rate,
                            ]
                            .into_iter()
                            .max()
                            .unwrap();
                            assert_eq!(
                                status.overall, expected,
                                "combination ({hi},{bi},{oi},{ti},{ri})"
                            );
                        }
                    }
                }
            }
        }
    }

    #[test]
    fn status_serializes_lowercase() {
        let json = serde_json::to_string(&HealthStatus::Critical).unwrap();
        assert_eq!(json, "\"critical\"");
    }
}
