//! Body composition: muscle mass from weight and fat percentage, and the
//! forward Navy circumference formula for body-fat percentage.

use crate::core::units::cm_to_in;
use crate::models::measurement::Sex;

/// Share of body weight treated as bone, organs and water.
pub const ESSENTIAL_MASS_RATIO: f64 = 0.20;

/// Plausible range the forward Navy estimate is clamped to.
pub const MIN_BODY_FAT: f64 = 3.0;
pub const MAX_BODY_FAT: f64 = 50.0;

pub(crate) mod navy {
    pub const MALE_CIRC: f64 = 86.010;
    pub const MALE_HEIGHT: f64 = 70.041;
    pub const MALE_OFFSET: f64 = 36.76;

    pub const FEMALE_CIRC: f64 = 163.205;
    pub const FEMALE_HEIGHT: f64 = 97.684;
    pub const FEMALE_OFFSET_NO_HIP: f64 = 78.387;
    pub const FEMALE_OFFSET_HIP: f64 = 104.912;
}

/// Estimate muscle mass in kg.
///
/// Returns `None` when either input is missing or non-finite, or when
/// `weight <= 0`. Implausible fat percentages are not rejected; the result
/// floors at 0.
pub fn muscle_mass(weight: Option<f64>, fat_percentage: Option<f64>) -> Option<f64> {
    let weight = weight.filter(|w| w.is_finite() && *w > 0.0)?;
    let fat = fat_percentage.filter(|f| f.is_finite())?;

    let fat_mass = weight * fat / 100.0;
    let essential_mass = weight * ESSENTIAL_MASS_RATIO;
    Some((weight - fat_mass - essential_mass).max(0.0))
}

/// Unclamped Navy body-fat estimate. Inputs in cm.
///
/// Female and other use the female constants; `hip_cm` selects the full
/// female variant. `None` when the log argument is not positive.
pub fn navy_body_fat_raw(
    neck_cm: f64,
    belly_cm: f64,
    height_cm: f64,
    sex: Sex,
    hip_cm: Option<f64>,
) -> Option<f64> {
    if !(neck_cm > 0.0 && belly_cm > 0.0 && height_cm > 0.0) {
        return None;
    }
    let neck = cm_to_in(neck_cm);
    let belly = cm_to_in(belly_cm);
    let height = cm_to_in(height_cm);

    let fat = match (sex, hip_cm.filter(|h| *h > 0.0)) {
        (Sex::Male, _) => {
            let span = positive(belly - neck)?;
            navy::MALE_CIRC * span.log10() - navy::MALE_HEIGHT * height.log10() + navy::MALE_OFFSET
        }
        (_, None) => {
            let span = positive(belly - neck)?;
            navy::FEMALE_CIRC * span.log10() - navy::FEMALE_HEIGHT * height.log10()
                - navy::FEMALE_OFFSET_NO_HIP
        }
        (_, Some(hip_cm)) => {
            let span = positive(belly + cm_to_in(hip_cm) - neck)?;
            navy::FEMALE_CIRC * span.log10() - navy::FEMALE_HEIGHT * height.log10()
                - navy::FEMALE_OFFSET_HIP
        }
    };
    Some(fat).filter(|f| f.is_finite())
}

/// Navy body-fat estimate clamped to [3, 50] %.
pub fn body_fat_percentage(
    neck_cm: Option<f64>,
    belly_cm: Option<f64>,
    height_cm: f64,
    sex: Sex,
    hip_cm: Option<f64>,
) -> Option<f64> {
    let fat = navy_body_fat_raw(neck_cm?, belly_cm?, height_cm, sex, hip_cm)?;
    Some(fat.clamp(MIN_BODY_FAT, MAX_BODY_FAT))
}

fn positive(v: f64) -> Option<f64> {
    (v > 0.0).then_some(v)
}
