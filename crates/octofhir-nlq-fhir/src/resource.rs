//! Supported FHIR resource types

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Resource types a natural-language query can target
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ResourceType {
    Patient,
    Observation,
    Condition,
    MedicationRequest,
    Appointment,
}

impl ResourceType {
    /// Every supported type, in the order reported to users
    pub const SUPPORTED: [ResourceType; 5] = [
        Self::Patient,
        Self::Observation,
        Self::Condition,
        Self::MedicationRequest,
        Self::Appointment,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Patient => "Patient",
            Self::Observation => "Observation",
            Self::Condition => "Condition",
            Self::MedicationRequest => "MedicationRequest",
            Self::Appointment => "Appointment",
        }
    }
}

impl fmt::Display for ResourceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ResourceType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::SUPPORTED
            .into_iter()
            .find(|r| r.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("unsupported resource type: {s}"))
    }
}
