mod common;

use bodyline::core::composition::{self, MAX_BODY_FAT, MIN_BODY_FAT};
use bodyline::models::Sex;
use common::approx;

// ─── muscle_mass ─────────────────────────────────────────────────────────────

#[test]
fn test_muscle_mass_reference_case() {
    // 80 kg, 20% fat: 80 - 16 fat - 16 essential
    let m = composition::muscle_mass(Some(80.0), Some(20.0)).unwrap();
    assert!(approx(m, 48.0, 1e-9));
}

#[test]
fn test_muscle_mass_never_negative() {
    for w in [0.5, 40.0, 80.0, 150.0] {
        for f in [0.1, 10.0, 50.0, 79.0, 85.0, 99.9] {
            let m = composition::muscle_mass(Some(w), Some(f)).unwrap();
            assert!(m >= 0.0, "muscle_mass({w}, {f}) = {m}");
        }
    }
}

#[test]
fn test_muscle_mass_floors_at_zero_for_high_fat() {
    assert_eq!(composition::muscle_mass(Some(80.0), Some(90.0)), Some(0.0));
}

#[test]
fn test_muscle_mass_missing_inputs() {
    assert_eq!(composition::muscle_mass(None, Some(20.0)), None);
    assert_eq!(composition::muscle_mass(Some(80.0), None), None);
    assert_eq!(composition::muscle_mass(None, None), None);
}

#[test]
fn test_muscle_mass_invalid_inputs() {
    assert_eq!(composition::muscle_mass(Some(f64::NAN), Some(20.0)), None);
    assert_eq!(composition::muscle_mass(Some(80.0), Some(f64::INFINITY)), None);
    assert_eq!(composition::muscle_mass(Some(0.0), Some(20.0)), None);
    assert_eq!(composition::muscle_mass(Some(-5.0), Some(20.0)), None);
}

#[test]
fn test_muscle_mass_out_of_range_fat_floors_at_zero() {
    assert_eq!(composition::muscle_mass(Some(80.0), Some(100.0)), Some(0.0));
    assert_eq!(composition::muscle_mass(Some(80.0), Some(120.0)), Some(0.0));
    // No fat at all leaves only the essential mass subtracted.
    assert_eq!(composition::muscle_mass(Some(80.0), Some(0.0)), Some(64.0));
    assert_eq!(composition::muscle_mass(Some(80.0), Some(-5.0)), Some(68.0));
}

// ─── Navy forward formula ────────────────────────────────────────────────────

#[test]
fn test_body_fat_male_typical() {
    let fat = composition::body_fat_percentage(Some(38.0), Some(90.1), 180.0, Sex::Male, None)
        .unwrap();
    assert!(approx(fat, 20.0, 0.05), "got {fat}");
}

#[test]
fn test_body_fat_male_ignores_hip() {
    let without = composition::body_fat_percentage(Some(38.0), Some(90.0), 180.0, Sex::Male, None);
    let with = composition::body_fat_percentage(Some(38.0), Some(90.0), 180.0, Sex::Male, Some(100.0));
    assert_eq!(without, with);
}

#[test]
fn test_body_fat_other_uses_female_formula() {
    let female =
        composition::body_fat_percentage(Some(34.0), Some(80.0), 165.0, Sex::Female, Some(100.0));
    let other =
        composition::body_fat_percentage(Some(34.0), Some(80.0), 165.0, Sex::Other, Some(100.0));
    assert!(female.is_some());
    assert_eq!(female, other);
}

#[test]
fn test_body_fat_is_clamped() {
    // Belly barely above neck gives a hugely negative raw estimate.
    let low = composition::body_fat_percentage(Some(40.0), Some(41.0), 180.0, Sex::Male, None)
        .unwrap();
    assert_eq!(low, MIN_BODY_FAT);
    let raw = composition::navy_body_fat_raw(40.0, 41.0, 180.0, Sex::Male, None).unwrap();
    assert!(raw < MIN_BODY_FAT);

    let high = composition::body_fat_percentage(Some(30.0), Some(200.0), 150.0, Sex::Male, None)
        .unwrap();
    assert_eq!(high, MAX_BODY_FAT);
}

#[test]
fn test_body_fat_belly_not_above_neck() {
    assert_eq!(
        composition::body_fat_percentage(Some(40.0), Some(40.0), 180.0, Sex::Male, None),
        None
    );
    assert_eq!(
        composition::body_fat_percentage(Some(40.0), Some(35.0), 165.0, Sex::Female, None),
        None
    );
}

#[test]
fn test_body_fat_missing_circumference() {
    assert_eq!(
        composition::body_fat_percentage(None, Some(90.0), 180.0, Sex::Male, None),
        None
    );
    assert_eq!(
        composition::body_fat_percentage(Some(38.0), None, 180.0, Sex::Male, None),
        None
    );
}
