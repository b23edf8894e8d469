//! Waist circumference implied by a target body-fat percentage, by solving the
//! Navy formula for the waist term.

use tracing::debug;

use crate::core::composition::navy;
use crate::core::units::{cm_to_in, in_to_cm, round1};
use crate::models::measurement::Sex;

/// Results above this are treated as unsolvable rather than reported.
pub const MAX_PLAUSIBLE_WAIST_CM: f64 = 250.0;

/// Infer the waist (belly) circumference in cm that yields `target_fat_pct`.
///
/// Female and other without `hip_cm` use the simplified female formula.
/// Returns `None` when a required input is missing or the answer is not
/// plausible (non-finite, below the neck, or above 250 cm). Rounded to 0.1 cm.
pub fn infer_waist(
    target_fat_pct: Option<f64>,
    neck_cm: Option<f64>,
    height_cm: Option<f64>,
    sex: Option<Sex>,
    hip_cm: Option<f64>,
) -> Option<f64> {
    let fat = target_fat_pct.filter(|v| v.is_finite())?;
    let neck_cm = neck_cm.filter(|v| v.is_finite() && *v > 0.0)?;
    let height_cm = height_cm.filter(|v| v.is_finite() && *v > 0.0)?;
    let sex = sex?;

    let neck = cm_to_in(neck_cm);
    let height_log = cm_to_in(height_cm).log10();

    let waist_in = match (sex, hip_cm.filter(|h| h.is_finite() && *h > 0.0)) {
        (Sex::Male, _) => {
            let x = (fat - navy::MALE_OFFSET + navy::MALE_HEIGHT * height_log) / navy::MALE_CIRC;
            10f64.powf(x) + neck
        }
        (_, None) => {
            let x = (fat + navy::FEMALE_OFFSET_NO_HIP + navy::FEMALE_HEIGHT * height_log)
                / navy::FEMALE_CIRC;
            10f64.powf(x) + neck
        }
        (_, Some(hip_cm)) => {
            let x = (fat + navy::FEMALE_OFFSET_HIP + navy::FEMALE_HEIGHT * height_log)
                / navy::FEMALE_CIRC;
            10f64.powf(x) + neck - cm_to_in(hip_cm)
        }
    };

    let waist_cm = in_to_cm(waist_in);
    if !waist_cm.is_finite() || waist_cm < neck_cm || waist_cm > MAX_PLAUSIBLE_WAIST_CM {
        debug!(target_fat_pct = fat, waist_cm, "implausible inferred waist");
        return None;
    }
    Some(round1(waist_cm))
}
