//! Plan catalog configuration

use serde::Deserialize;

use super::error::ValidationError;
use crate::domain::plan::{PlanCatalog, PlanEntry};

/// Plan catalog configuration
///
/// The plan-to-seat-limit mapping is configuration, not business logic.
/// Defaults match the platform's launch plans.
#[derive(Debug, Clone, Deserialize)]
pub struct PlansConfig {
    /// Catalog entries: plan name and doctor seat limit
    #[serde(default = "default_plans")]
    pub plans: Vec<PlanEntry>,
}

impl Default for PlansConfig {
    fn default() -> Self {
        Self {
            plans: default_plans(),
        }
    }
}

fn default_plans() -> Vec<PlanEntry> {
    [
        ("CRM Basic", 5),
        ("CRM", 10),
        ("CRM + Telegram", 10),
        ("CRM Premium", 20),
    ]
    .into_iter()
    .map(|(name, doctors_limit)| PlanEntry {
        name: name.to_string(),
        doctors_limit,
    })
    .collect()
}

impl PlansConfig {
    /// Build the domain catalog from this configuration
    pub fn catalog(&self) -> PlanCatalog {
        PlanCatalog::new(self.plans.iter().cloned())
    }

    /// Validate plan configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.plans.is_empty() {
            return Err(ValidationError::EmptyPlanCatalog);
        }
        let mut seen = std::collections::HashSet::new();
        for plan in &self.plans {
            if !seen.insert(plan.name.as_str()) {
                return Err(ValidationError::DuplicatePlanName(plan.name.clone()));
            }
            if plan.doctors_limit == 0 {
                return Err(ValidationError::ZeroDoctorLimit(plan.name.clone()));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_catalog_has_launch_plans() {
        let catalog = PlansConfig::default().catalog();
        assert_eq!(catalog.doctors_limit_for("CRM Basic"), Some(5));
        assert_eq!(catalog.doctors_limit_for("CRM"), Some(10));
        assert_eq!(catalog.doctors_limit_for("CRM + Telegram"), Some(10));
        assert_eq!(catalog.doctors_limit_for("CRM Premium"), Some(20));
    }

    #[test]
    fn default_config_validates() {
        assert!(PlansConfig::default().validate().is_ok());
    }

    #[test]
    fn empty_catalog_fails_validation() {
        let config = PlansConfig { plans: vec![] };
        assert_eq!(config.validate(), Err(ValidationError::EmptyPlanCatalog));
    }

    #[test]
    fn duplicate_plan_name_fails_validation() {
        let config = PlansConfig {
            plans: vec![
                PlanEntry { name: "CRM".into(), doctors_limit: 10 },
                PlanEntry { name: "CRM".into(), doctors_limit: 20 },
            ],
        };
        assert!(matches!(
            config.validate(),
            Err(ValidationError::DuplicatePlanName(_))
        ));
    }

    #[test]
    fn zero_doctor_limit_fails_validation() {
        let config = PlansConfig {
            plans: vec![PlanEntry { name: "CRM".into(), doctors_limit: 0 }],
        };
        assert!(matches!(
            config.validate(),
            Err(ValidationError::ZeroDoctorLimit(_))
        ));
    }
}
