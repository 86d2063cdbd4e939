//! Plan catalog: plan name to doctor seat limit lookup.
//!
//! The catalog is built from configuration, not hardcoded into workflow
//! logic. A clinic's `doctors_limit` is derived from the catalog at the
//! moment of a plan change and never silently re-derived on read.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A single catalog entry: plan name and its doctor seat limit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanEntry {
    pub name: String,
    pub doctors_limit: u32,
}

/// Static lookup from plan name to doctor seat limit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlanCatalog {
    limits: HashMap<String, u32>,
}

impl PlanCatalog {
    /// Builds a catalog from a list of entries.
    ///
    /// Later entries override earlier ones with the same name.
    pub fn new(entries: impl IntoIterator<Item = PlanEntry>) -> Self {
        Self {
            limits: entries
                .into_iter()
                .map(|e| (e.name, e.doctors_limit))
                .collect(),
        }
    }

    /// Returns the doctor seat limit for a plan, or None if unknown.
    pub fn doctors_limit_for(&self, plan_name: &str) -> Option<u32> {
        self.limits.get(plan_name).copied()
    }

    /// Returns true if the plan exists in the catalog.
    pub fn is_known(&self, plan_name: &str) -> bool {
        self.limits.contains_key(plan_name)
    }

    /// Returns all known plan names, sorted for stable output.
    pub fn plan_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.limits.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}
