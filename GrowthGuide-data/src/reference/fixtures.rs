//! Small deterministic reference tables for tests

use crate::models::{AgeTable, Gender, Metric, ReferenceRow};
use super::in_memory::InMemoryReferenceStore;

/// BMI row used for 12 and 30 months, deliberately inserted out of order
pub fn bmi_row() -> ReferenceRow {
    ReferenceRow::new()
        .with("p50", 15.6)
        .with("p3", 13.5)
        .with("p999", 20.4)
        .with("p15", 14.4)
        .with("p97", 18.3)
        .with("p85", 17.0)
}

/// Height row for a 12 month old boy, topped by the extreme tier
pub fn height_row() -> ReferenceRow {
    ReferenceRow::new()
        .with("p01", 68.0)
        .with("p3", 71.0)
        .with("p50", 75.7)
        .with("p97", 80.5)
        .with("p999", 83.6)
}

/// Weight row for a 6 month old girl, topped by p99
pub fn weight_row() -> ReferenceRow {
    ReferenceRow::new()
        .with("p3", 6.1)
        .with("p50", 7.3)
        .with("p97", 9.2)
        .with("p99", 9.7)
}

/// Store with BMI tables for both genders (boys keyed by integer, girls by
/// text), a boys' height table and a girls' weight table
pub fn fixture_store() -> InMemoryReferenceStore {
    let boys_bmi = AgeTable::new()
        .with_row(12u32, bmi_row())
        .with_row(30u32, bmi_row());
    let girls_bmi = AgeTable::new()
        .with_row("12", bmi_row())
        .with_row("30", bmi_row());

    InMemoryReferenceStore::new()
        .with_table(Metric::Bmi, Gender::Boy, boys_bmi)
        .with_table(Metric::Bmi, Gender::Girl, girls_bmi)
        .with_table(Metric::Height, Gender::Boy, AgeTable::new().with_row(12u32, height_row()))
        .with_table(Metric::Weight, Gender::Girl, AgeTable::new().with_row("6", weight_row()))
}
