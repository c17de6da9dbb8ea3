//! Domain layer health check functionality
//! This module provides health check services for the application

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use growth_guide_data::{Gender, Metric, ReferenceTableStore};

use crate::services::bmi::MAX_CHILD_AGE_MONTHS;

/// System health status
#[derive(Debug, Clone, PartialEq)]
pub enum SystemStatus {
    /// All components are healthy
    Healthy,
    /// Some components are degraded but the system is functional
    Degraded,
    /// System is not functioning properly
    Unhealthy,
}

/// Component health status
#[derive(Debug, Clone, PartialEq)]
pub enum ComponentStatus {
    /// Component is functioning normally
    Healthy,
    /// Component is functioning with missing capabilities
    Degraded,
    /// Component is not functioning
    Unhealthy,
}

/// Represents a health component with status and optional details
#[derive(Debug, Clone)]
pub struct HealthComponent {
    /// Status of the component
    pub status: ComponentStatus,
    /// Optional details about the component status
    pub details: Option<String>,
}

/// Represents the overall health of the system
#[derive(Debug, Clone)]
pub struct SystemHealth {
    /// Overall system status
    pub status: SystemStatus,
    /// Map of component names to their health status
    pub components: HashMap<String, HealthComponent>,
}

/// Name of the reference data component in [`SystemHealth::components`]
pub const REFERENCE_DATA_COMPONENT: &str = "reference_data";

/// Trait for health services
#[async_trait]
pub trait HealthServiceTrait: Send + Sync + std::fmt::Debug {
    /// Get the overall system health
    async fn get_system_health(&self) -> SystemHealth;
}

/// Status of the reference data: BMI tables for both genders are required,
/// each with a row for every month from 0 to 228
pub fn check_reference_data(store: &dyn ReferenceTableStore) -> HealthComponent {
    let tables = store.available_tables();

    if tables.is_empty() {
        return HealthComponent {
            status: ComponentStatus::Unhealthy,
            details: Some("No reference tables loaded".to_string()),
        };
    }

    let missing: Vec<String> = [Gender::Boy, Gender::Girl]
        .into_iter()
        .filter(|gender| !tables.contains(&(Metric::Bmi, *gender)))
        .map(|gender| format!("bmi/{}", gender))
        .collect();

    if !missing.is_empty() {
        return HealthComponent {
            status: ComponentStatus::Degraded,
            details: Some(format!("Missing reference tables: {}", missing.join(", "))),
        };
    }

    let gaps: Vec<String> = [Gender::Boy, Gender::Girl]
        .into_iter()
        .filter_map(|gender| {
            let table = store.table(Metric::Bmi, gender)?;
            let uncovered = (0..=MAX_CHILD_AGE_MONTHS)
                .filter(|age| table.row_for(i64::from(*age)).is_none())
                .count();
            (uncovered > 0).then(|| format!("bmi/{} lacks {} of {} months", gender, uncovered, MAX_CHILD_AGE_MONTHS + 1))
        })
        .collect();

    if gaps.is_empty() {
        HealthComponent {
            status: ComponentStatus::Healthy,
            details: Some(format!("{} reference tables loaded", tables.len())),
        }
    } else {
        HealthComponent {
            status: ComponentStatus::Degraded,
            details: Some(format!("Incomplete reference tables: {}", gaps.join(", "))),
        }
    }
}

/// Overall status from component statuses
pub fn overall_status<'a>(components: impl IntoIterator<Item = &'a HealthComponent>) -> SystemStatus {
    let statuses: Vec<&ComponentStatus> = components.into_iter().map(|c| &c.status).collect();

    if statuses.iter().any(|s| **s == ComponentStatus::Unhealthy) {
        SystemStatus::Unhealthy
    } else if statuses.iter().any(|s| **s == ComponentStatus::Degraded) {
        SystemStatus::Degraded
    } else {
        SystemStatus::Healthy
    }
}

/// Health service backed by the loaded reference store
#[derive(Debug)]
pub struct ReferenceHealthService {
    store: Arc<dyn ReferenceTableStore>,
}

impl ReferenceHealthService {
    /// Create a new health service
    pub fn new(store: Arc<dyn ReferenceTableStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl HealthServiceTrait for ReferenceHealthService {
    async fn get_system_health(&self) -> SystemHealth {
        let reference = check_reference_data(self.store.as_ref());
        let status = overall_status([&reference]);

        SystemHealth {
            status,
            components: vec![(REFERENCE_DATA_COMPONENT.to_string(), reference)]
                .into_iter()
                .collect(),
        }
    }
}
