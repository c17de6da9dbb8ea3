use tracing::debug;

use growth_guide_data::{Gender, Metric, ReferenceTableStore};

use crate::entities::growth::{
    AdultBmiCategory, AdultBmiResult, BmiPercentileResult, PercentileResult,
};
use crate::services::descriptions::describe_label;
use crate::services::growth::GrowthServiceError;
use crate::services::percentile::resolve_percentile;

/// Oldest age, in months, covered by the child reference tables
pub const MAX_CHILD_AGE_MONTHS: i32 = 228;

pub const AGE_OUT_OF_RANGE: &str = "age out of range";
pub const UNSUPPORTED_GENDER: &str = "unsupported gender";

/// BMI from height in centimetres and weight in kilograms.
///
/// Rounded to two decimals, halves away from zero.
pub fn calculate_bmi(height_cm: f64, weight_kg: f64) -> Result<f64, GrowthServiceError> {
    if !height_cm.is_finite() || !weight_kg.is_finite() || height_cm <= 0.0 || weight_kg <= 0.0 {
        return Err(GrowthServiceError::InvalidMeasurement(format!(
            "Height and weight must be greater than 0 (height_cm={}, weight_kg={})",
            height_cm, weight_kg
        )));
    }

    let height_m = height_cm / 100.0;
    let bmi = weight_kg / (height_m * height_m);
    Ok(round_to_hundredths(bmi))
}

fn round_to_hundredths(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Whether an age falls inside the child reference tables
pub fn is_child_age_in_range(age_months: i32) -> bool {
    (0..=MAX_CHILD_AGE_MONTHS).contains(&age_months)
}

/// Percentile of a measurement against the store's table for a metric.
///
/// Out-of-range ages and genders without a table come back as `unknown`
/// with the reason as the description.
pub fn classify_measurement(
    store: &dyn ReferenceTableStore,
    metric: Metric,
    gender: Gender,
    age: i32,
    value: f64,
) -> PercentileResult {
    if !is_child_age_in_range(age) {
        return PercentileResult::unknown(AGE_OUT_OF_RANGE);
    }

    let Some(table) = store.table(metric, gender) else {
        debug!("No {} reference table for {}", metric, gender);
        return PercentileResult::unknown(UNSUPPORTED_GENDER);
    };

    let percentile = resolve_percentile(metric, table, i64::from(age), value);
    let age_for_description = (metric == Metric::Bmi).then_some(age);
    let description = describe_label(&percentile, metric, age_for_description);

    PercentileResult::new(percentile, description)
}

/// BMI-for-age percentile of an already computed BMI
pub fn calculate_bmi_percentile(
    store: &dyn ReferenceTableStore,
    gender: Gender,
    age_months: i32,
    bmi: f64,
) -> PercentileResult {
    classify_measurement(store, Metric::Bmi, gender, age_months, bmi)
}

/// BMI and its percentile from raw measurements
pub fn calculate_bmi_with_percentile(
    store: &dyn ReferenceTableStore,
    gender: Gender,
    age_months: i32,
    height_cm: f64,
    weight_kg: f64,
) -> Result<BmiPercentileResult, GrowthServiceError> {
    let bmi = calculate_bmi(height_cm, weight_kg)?;
    let result = calculate_bmi_percentile(store, gender, age_months, bmi);

    Ok(BmiPercentileResult {
        bmi,
        percentile: result.percentile,
        description: result.description,
    })
}

/// Adult BMI category using gender-specific thresholds
pub fn calculate_adult_bmi_category(bmi: f64, gender: Gender) -> AdultBmiResult {
    let (category, description) = match gender {
        Gender::Boy => {
            if bmi < 20.0 {
                (AdultBmiCategory::Underweight, "Underweight (BMI<20)")
            } else if bmi < 25.0 {
                (AdultBmiCategory::Normal, "Normal (20≤BMI<25)")
            } else if bmi < 30.0 {
                (AdultBmiCategory::Overweight, "Overweight (25≤BMI<30)")
            } else {
                (AdultBmiCategory::Obese, "Obese (BMI≥30)")
            }
        }
        Gender::Girl => {
            if bmi < 19.0 {
                (AdultBmiCategory::Underweight, "Underweight (BMI<19)")
            } else if bmi < 24.0 {
                (AdultBmiCategory::Normal, "Normal (19≤BMI<24)")
            } else if bmi < 29.0 {
                (AdultBmiCategory::Overweight, "Overweight (24≤BMI<29)")
            } else {
                (AdultBmiCategory::Obese, "Obese (BMI≥29)")
            }
        }
    };

    AdultBmiResult {
        category,
        description: description.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::descriptions::{describe, UNKNOWN_DESCRIPTION};
    use growth_guide_data::reference::fixtures::fixture_store;
    use growth_guide_data::reference::load_bundled;

    #[test]
    fn test_calculate_bmi() {
        assert_eq!(calculate_bmi(95.0, 14.2).unwrap(), 15.73);
        assert_eq!(calculate_bmi(180.0, 81.0).unwrap(), 25.0);
    }

    #[test]
    fn test_calculate_bmi_rounds_half_away_from_zero() {
        assert_eq!(round_to_hundredths(0.125), 0.13);
        assert_eq!(round_to_hundredths(15.734), 15.73);
    }

    #[test]
    fn test_calculate_bmi_rejects_non_positive_measurements() {
        assert!(matches!(calculate_bmi(0.0, 14.2), Err(GrowthServiceError::InvalidMeasurement(_))));
        assert!(matches!(calculate_bmi(95.0, 0.0), Err(GrowthServiceError::InvalidMeasurement(_))));
        assert!(matches!(calculate_bmi(-10.0, 14.2), Err(GrowthServiceError::InvalidMeasurement(_))));
        assert!(matches!(calculate_bmi(f64::NAN, 14.2), Err(GrowthServiceError::InvalidMeasurement(_))));
    }

    #[test]
    fn test_bmi_percentile_for_thirty_month_old_boy() {
        let store = fixture_store();
        let result = calculate_bmi_with_percentile(&store, Gender::Boy, 30, 95.0, 14.2).unwrap();

        assert_eq!(result.bmi, 15.73);
        assert_eq!(result.percentile, "p50");
        assert_eq!(result.description, describe("p50", Metric::Bmi, Some(30)));
        assert_eq!(result.description, "Normal (15-85%)");
    }

    #[test]
    fn test_bmi_percentile_against_bundled_data() {
        let store = load_bundled().unwrap();
        let result = calculate_bmi_with_percentile(&store, Gender::Boy, 30, 95.0, 14.2).unwrap();

        assert_eq!(result.bmi, 15.73);
        assert!(!result.percentile.is_unknown());
        assert_eq!(result.description, describe(result.percentile.as_str(), Metric::Bmi, Some(30)));
    }

    #[test]
    fn test_bmi_percentile_uses_under_two_descriptions() {
        let store = fixture_store();
        let result = calculate_bmi_percentile(&store, Gender::Girl, 12, 19.0);
        assert_eq!(result.percentile, "p97");
        assert_eq!(result.description, "Normal (15-97.7%)");
    }

    #[test]
    fn test_age_out_of_range() {
        let store = fixture_store();
        for age in [-1, 229, 250] {
            let result = calculate_bmi_percentile(&store, Gender::Boy, age, 15.0);
            assert!(result.percentile.is_unknown());
            assert_eq!(result.description, AGE_OUT_OF_RANGE);
        }
    }

    #[test]
    fn test_range_edges_are_accepted() {
        let store = fixture_store();
        // In range but not tabulated: a data gap, not an out-of-range age
        for age in [0, MAX_CHILD_AGE_MONTHS] {
            let result = calculate_bmi_percentile(&store, Gender::Boy, age, 15.0);
            assert!(result.percentile.is_unknown());
            assert_eq!(result.description, UNKNOWN_DESCRIPTION);
        }
    }

    #[test]
    fn test_gender_without_table() {
        let store = fixture_store();
        let result = classify_measurement(&store, Metric::Height, Gender::Girl, 12, 75.0);
        assert!(result.percentile.is_unknown());
        assert_eq!(result.description, UNSUPPORTED_GENDER);
    }

    #[test]
    fn test_invalid_height_computes_no_percentile() {
        let store = fixture_store();
        let result = calculate_bmi_with_percentile(&store, Gender::Boy, 30, 0.0, 14.2);
        assert!(matches!(result, Err(GrowthServiceError::InvalidMeasurement(_))));
    }

    #[test]
    fn test_classify_height_and_weight() {
        let store = fixture_store();

        let height = classify_measurement(&store, Metric::Height, Gender::Boy, 12, 90.0);
        assert_eq!(height.percentile, "p99");
        assert_eq!(height.description, "Extremely tall (≥97%)");

        let weight = classify_measurement(&store, Metric::Weight, Gender::Girl, 6, 7.3);
        assert_eq!(weight.percentile, "p50");
        assert_eq!(weight.description, "Average weight (25-50%)");
    }

    #[test]
    fn test_adult_category_girl() {
        let result = calculate_adult_bmi_category(23.5, Gender::Girl);
        assert_eq!(result.category, AdultBmiCategory::Normal);
        assert_eq!(result.category.to_string(), "normal");
    }

    #[test]
    fn test_adult_category_thresholds() {
        let cases = [
            (19.9, Gender::Boy, AdultBmiCategory::Underweight),
            (20.0, Gender::Boy, AdultBmiCategory::Normal),
            (25.0, Gender::Boy, AdultBmiCategory::Overweight),
            (30.0, Gender::Boy, AdultBmiCategory::Obese),
            (18.9, Gender::Girl, AdultBmiCategory::Underweight),
            (19.0, Gender::Girl, AdultBmiCategory::Normal),
            (24.0, Gender::Girl, AdultBmiCategory::Overweight),
            (29.0, Gender::Girl, AdultBmiCategory::Obese),
        ];

        for (bmi, gender, expected) in cases {
            assert_eq!(calculate_adult_bmi_category(bmi, gender).category, expected, "{} {}", gender, bmi);
        }
    }
}
