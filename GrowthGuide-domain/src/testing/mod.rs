// Testing utilities and mock implementations for the domain layer
// This module is only available when the "mock" feature is enabled

// Re-export the small reference tables from the data layer
pub use growth_guide_data::reference::fixtures::{bmi_row, fixture_store, height_row, weight_row};

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;

use crate::health::{
    ComponentStatus, HealthComponent, HealthServiceTrait, SystemHealth, SystemStatus,
    REFERENCE_DATA_COMPONENT,
};
use crate::services::growth::{create_default_growth_service, GrowthServiceTrait};

/// Growth service over the fixture tables
pub fn fixture_growth_service() -> Arc<dyn GrowthServiceTrait + Send + Sync> {
    create_default_growth_service(Arc::new(fixture_store()))
}

/// Mock implementation of the HealthServiceTrait for testing
#[derive(Debug)]
pub struct MockHealthService {
    /// Reference data component status
    reference_status: ComponentStatus,
    /// System status
    system_status: SystemStatus,
    /// Additional components
    components: HashMap<String, HealthComponent>,
}

impl Default for MockHealthService {
    fn default() -> Self {
        Self::new()
    }
}

impl MockHealthService {
    /// Create a new mock health service with all components healthy
    pub fn new() -> Self {
        Self {
            reference_status: ComponentStatus::Healthy,
            system_status: SystemStatus::Healthy,
            components: HashMap::new(),
        }
    }

    /// Configure the mock with partially loaded reference data
    pub fn with_degraded_reference_data(mut self) -> Self {
        self.reference_status = ComponentStatus::Degraded;
        self.system_status = SystemStatus::Degraded;
        self
    }

    /// Configure the mock with no reference data
    pub fn with_unhealthy_reference_data(mut self) -> Self {
        self.reference_status = ComponentStatus::Unhealthy;
        self.system_status = SystemStatus::Unhealthy;
        self
    }

    /// Add a custom component with a specific status
    pub fn with_component(mut self, name: &str, status: ComponentStatus, details: Option<String>) -> Self {
        self.components
            .insert(name.to_string(), HealthComponent { status, details });
        self
    }
}

#[async_trait]
impl HealthServiceTrait for MockHealthService {
    async fn get_system_health(&self) -> SystemHealth {
        let mut components = HashMap::new();

        components.insert(
            REFERENCE_DATA_COMPONENT.to_string(),
            HealthComponent {
                status: self.reference_status.clone(),
                details: match self.reference_status {
                    ComponentStatus::Healthy => None,
                    ComponentStatus::Degraded => Some("Missing reference tables: bmi/girl".to_string()),
                    ComponentStatus::Unhealthy => Some("No reference tables loaded".to_string()),
                },
            },
        );

        for (name, component) in &self.components {
            components.insert(name.clone(), component.clone());
        }

        SystemHealth {
            status: self.system_status.clone(),
            components,
        }
    }
}
