use std::collections::HashMap;
use std::path::Path;

use tracing::{debug, info};

use crate::models::{AgeTable, Gender, Metric, ReferenceRow};
use super::errors::ReferenceDataError;
use super::in_memory::InMemoryReferenceStore;
use super::ReferenceTableStore;

/// Reference document compiled into the binary.
///
/// Holds approximate BMI-for-age rows for every month from 0 to 228,
/// interpolated between anchor ages. Deployments that need the published
/// WHO values or height/weight tables point `REFERENCE_DATA_PATH` at their
/// own document.
pub const BUNDLED_REFERENCE_DATA: &str = include_str!("../../data/bmi_for_age_approximate.json");

/// metric → gender → age → row
type ReferenceDocument = HashMap<String, HashMap<String, HashMap<String, ReferenceRow>>>;

/// Load the compiled-in reference document
pub fn load_bundled() -> Result<InMemoryReferenceStore, ReferenceDataError> {
    debug!("Loading bundled reference data");
    load_from_str(BUNDLED_REFERENCE_DATA)
}

/// Load a reference document from disk
pub fn load_from_path(path: impl AsRef<Path>) -> Result<InMemoryReferenceStore, ReferenceDataError> {
    let path = path.as_ref();
    debug!("Loading reference data from {}", path.display());

    let contents = std::fs::read_to_string(path).map_err(|source| ReferenceDataError::Io {
        path: path.display().to_string(),
        source,
    })?;

    load_from_str(&contents)
}

/// Parse a reference document of the shape
/// `{ "<metric>": { "<gender>": { "<age>": { "<label>": value } } } }`
pub fn load_from_str(contents: &str) -> Result<InMemoryReferenceStore, ReferenceDataError> {
    let document: ReferenceDocument = serde_json::from_str(contents)?;
    let mut store = InMemoryReferenceStore::new();

    for (metric_name, genders) in document {
        let metric: Metric = metric_name.parse().map_err(ReferenceDataError::Validation)?;

        for (gender_name, ages) in genders {
            let gender: Gender = gender_name.parse().map_err(ReferenceDataError::Validation)?;
            let mut table = AgeTable::new();

            for (age, row) in ages {
                validate_row(metric, gender, &age, &row)?;
                table.insert(age, row);
            }

            debug!("Loaded {} rows for {}/{}", table.len(), metric, gender);
            store.insert_table(metric, gender, table);
        }
    }

    info!(
        "Reference data loaded: {} tables, {} rows",
        store.available_tables().len(),
        store.row_count()
    );

    Ok(store)
}

fn validate_row(metric: Metric, gender: Gender, age: &str, row: &ReferenceRow) -> Result<(), ReferenceDataError> {
    if row.is_empty() {
        return Err(ReferenceDataError::Validation(format!(
            "{}/{} age {} has no percentile values",
            metric, gender, age
        )));
    }

    if let Some((label, value)) = row.iter().find(|(_, value)| !value.is_finite()) {
        return Err(ReferenceDataError::Validation(format!(
            "{}/{} age {} has a non-finite value for {}: {}",
            metric, gender, age, label, value
        )));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const SAMPLE: &str = r#"{
        "height": {
            "girl": {
                "0": { "p3": 45.6, "p50": 49.1, "p97": 52.7 }
            }
        },
        "bmi": {
            "boy": {
                "24": { "p50": 16.0, "p3": 14.0 }
            }
        }
    }"#;

    #[test]
    fn test_load_from_str() {
        let store = load_from_str(SAMPLE).unwrap();

        let bmi = store.table(Metric::Bmi, Gender::Boy).unwrap();
        let row = bmi.row_for(24).unwrap();
        assert_eq!(row.get("p50"), Some(16.0));
        assert_eq!(row.len(), 2);

        let height = store.table(Metric::Height, Gender::Girl).unwrap();
        assert!(height.row_for(0).is_some());
        assert!(store.table(Metric::Weight, Gender::Girl).is_none());
    }

    #[test]
    fn test_load_rejects_unknown_metric() {
        let result = load_from_str(r#"{ "length": { "boy": {} } }"#);
        assert!(matches!(result, Err(ReferenceDataError::Validation(_))));
    }

    #[test]
    fn test_load_rejects_unknown_gender() {
        let result = load_from_str(r#"{ "bmi": { "adult": {} } }"#);
        assert!(matches!(result, Err(ReferenceDataError::Validation(_))));
    }

    #[test]
    fn test_load_rejects_empty_row() {
        let result = load_from_str(r#"{ "bmi": { "boy": { "12": {} } } }"#);
        let err = result.unwrap_err();
        assert!(err.to_string().contains("no percentile values"));
    }

    #[test]
    fn test_load_rejects_malformed_json() {
        let result = load_from_str("{ not json");
        assert!(matches!(result, Err(ReferenceDataError::Parse(_))));
    }

    #[test]
    fn test_load_from_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SAMPLE.as_bytes()).unwrap();

        let store = load_from_path(file.path()).unwrap();
        assert_eq!(store.row_count(), 2);
    }

    #[test]
    fn test_load_from_missing_path() {
        let result = load_from_path("/definitely/not/here.json");
        assert!(matches!(result, Err(ReferenceDataError::Io { .. })));
    }

    #[test]
    fn test_bundled_data_covers_bmi_for_both_genders() {
        let store = load_bundled().unwrap();

        for gender in [Gender::Boy, Gender::Girl] {
            let table = store.table(Metric::Bmi, gender).unwrap();
            for age in [0, 24, 30, 60, 228] {
                let row = table.row_for(age).unwrap();
                assert_eq!(row.len(), 15, "{} age {}", gender, age);
            }
        }
    }

    #[test]
    fn test_bundled_data_has_every_month() {
        let store = load_bundled().unwrap();

        for gender in [Gender::Boy, Gender::Girl] {
            let table = store.table(Metric::Bmi, gender).unwrap();
            assert_eq!(table.len(), 229);

            let missing: Vec<i64> = (0..=228).filter(|age| table.row_for(*age).is_none()).collect();
            assert!(missing.is_empty(), "{} missing ages {:?}", gender, missing);
        }
    }

    #[test]
    fn test_bundled_rows_ascend_in_label_order() {
        let store = load_bundled().unwrap();
        let table = store.table(Metric::Bmi, Gender::Girl).unwrap();

        for age in [1, 37, 100, 227] {
            let values: Vec<f64> = table.row_for(age).unwrap().iter().map(|(_, value)| value).collect();
            assert!(values.windows(2).all(|pair| pair[0] < pair[1]), "age {}", age);
        }
    }
}
