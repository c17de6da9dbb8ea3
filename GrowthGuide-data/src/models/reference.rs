use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

#[cfg(feature = "with-api")]
use utoipa::ToSchema;

/// Gender of the child a reference table applies to
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "with-api", derive(ToSchema))]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    /// Reference tables for boys
    Boy,

    /// Reference tables for girls
    Girl,
}

impl Gender {
    /// Lowercase name used as the document key in reference files
    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Boy => "boy",
            Gender::Girl => "girl",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Gender {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "boy" => Ok(Gender::Boy),
            "girl" => Ok(Gender::Girl),
            other => Err(format!("Unsupported gender: {}", other)),
        }
    }
}

/// Growth metric a reference table tabulates
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "with-api", derive(ToSchema))]
#[serde(rename_all = "lowercase")]
pub enum Metric {
    /// Height-for-age (cm)
    Height,

    /// Weight-for-age (kg)
    Weight,

    /// BMI-for-age (kg/m²)
    Bmi,
}

impl Metric {
    /// Lowercase name used as the document key in reference files
    pub fn as_str(&self) -> &'static str {
        match self {
            Metric::Height => "height",
            Metric::Weight => "weight",
            Metric::Bmi => "bmi",
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Metric {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "height" => Ok(Metric::Height),
            "weight" => Ok(Metric::Weight),
            "bmi" => Ok(Metric::Bmi),
            other => Err(format!("Unknown metric type: {}", other)),
        }
    }
}

/// Opaque percentile tag such as `p3`, `p50` or `p999`.
///
/// Labels carry no numeric meaning of their own; their order only comes from
/// the reference value they are paired with in a row.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "with-api", derive(ToSchema))]
#[serde(transparent)]
pub struct PercentileLabel(String);

impl PercentileLabel {
    /// Sentinel used when no reference data exists for an age/gender
    pub const UNKNOWN: &'static str = "unknown";

    pub fn new(label: impl Into<String>) -> Self {
        Self(label.into())
    }

    /// The `unknown` sentinel label
    pub fn unknown() -> Self {
        Self(Self::UNKNOWN.to_string())
    }

    pub fn is_unknown(&self) -> bool {
        self.0 == Self::UNKNOWN
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PercentileLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for PercentileLabel {
    fn from(label: &str) -> Self {
        Self::new(label)
    }
}

impl PartialEq<&str> for PercentileLabel {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// Key of an age row.
///
/// Reference sources are inconsistent about key typing: some tables are
/// keyed by integer ages and others by their decimal text. Both forms are
/// accepted and normalized in [`AgeTable::row_for`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum AgeKey {
    Int(u32),
    Text(String),
}

impl From<u32> for AgeKey {
    fn from(age: u32) -> Self {
        AgeKey::Int(age)
    }
}

impl From<&str> for AgeKey {
    fn from(age: &str) -> Self {
        AgeKey::Text(age.to_string())
    }
}

impl From<String> for AgeKey {
    fn from(age: String) -> Self {
        AgeKey::Text(age)
    }
}

/// Label → reference value pairs for one (metric, gender, age).
///
/// Insertion order is kept but carries no meaning; consumers sort by value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReferenceRow(IndexMap<String, f64>);

impl ReferenceRow {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace the value for a label
    pub fn with(mut self, label: impl Into<String>, value: f64) -> Self {
        self.0.insert(label.into(), value);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn get(&self, label: &str) -> Option<f64> {
        self.0.get(label).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.0.iter().map(|(label, value)| (label.as_str(), *value))
    }

    /// Pairs ordered by reference value, ascending.
    ///
    /// The sort is stable, so equal values keep their insertion order.
    pub fn sorted_by_value(&self) -> Vec<(&str, f64)> {
        let mut pairs: Vec<(&str, f64)> = self.iter().collect();
        pairs.sort_by(|a, b| a.1.total_cmp(&b.1));
        pairs
    }
}

impl<L: Into<String>> FromIterator<(L, f64)> for ReferenceRow {
    fn from_iter<I: IntoIterator<Item = (L, f64)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(label, value)| (label.into(), value)).collect())
    }
}

/// Age rows for one (metric, gender) pair
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AgeTable {
    rows: HashMap<AgeKey, ReferenceRow>,
}

impl AgeTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a row under the given key, replacing any previous one
    pub fn insert(&mut self, key: impl Into<AgeKey>, row: ReferenceRow) {
        self.rows.insert(key.into(), row);
    }

    /// Builder form of [`AgeTable::insert`]
    pub fn with_row(mut self, key: impl Into<AgeKey>, row: ReferenceRow) -> Self {
        self.insert(key, row);
        self
    }

    /// Row for an age, trying the integer key before its decimal text.
    ///
    /// Negative ages never match a row.
    pub fn row_for(&self, age: i64) -> Option<&ReferenceRow> {
        let age = u32::try_from(age).ok()?;
        self.rows
            .get(&AgeKey::Int(age))
            .or_else(|| self.rows.get(&AgeKey::Text(age.to_string())))
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &AgeKey> {
        self.rows.keys()
    }

    pub fn rows(&self) -> impl Iterator<Item = (&AgeKey, &ReferenceRow)> {
        self.rows.iter()
    }
}
