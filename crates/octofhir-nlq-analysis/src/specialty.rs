//! Medical specialty detection

use crate::entities::{EntityBag, EntityCategory};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MedicalSpecialty {
    Cardiology,
    Endocrinology,
    Respiratory,
    Neurology,
    Psychiatry,
    Orthopedics,
    GeneralMedicine,
}

impl MedicalSpecialty {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Cardiology => "cardiology",
            Self::Endocrinology => "endocrinology",
            Self::Respiratory => "respiratory",
            Self::Neurology => "neurology",
            Self::Psychiatry => "psychiatry",
            Self::Orthopedics => "orthopedics",
            Self::GeneralMedicine => "general_medicine",
        }
    }

    /// Most likely specialty for the extracted entities
    ///
    /// Each specialty scores one point per entity value containing any of its
    /// indicator words. The highest score wins; ties go to the earlier row of
    /// [`SPECIALTY_INDICATORS`]. No hits yields general medicine.
    pub fn identify(entities: &EntityBag) -> Self {
        let terms: Vec<String> = EntityCategory::ALL
            .iter()
            .flat_map(|c| entities.values(*c))
            .map(|v| v.to_lowercase())
            .collect();

        let mut best: Option<(Self, usize)> = None;
        for (specialty, indicators) in SPECIALTY_INDICATORS {
            let score = terms
                .iter()
                .filter(|term| indicators.iter().any(|i| term.contains(i)))
                .count();
            if score > 0 && best.is_none_or(|(_, top)| score > top) {
                best = Some((*specialty, score));
            }
        }

        best.map_or(Self::GeneralMedicine, |(specialty, _)| specialty)
    }
}

impl fmt::Display for MedicalSpecialty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

pub const SPECIALTY_INDICATORS: &[(MedicalSpecialty, &[&str])] = &[
    (
        MedicalSpecialty::Cardiology,
        &["heart", "blood pressure", "chest pain", "heart rate", "cholesterol"],
    ),
    (
        MedicalSpecialty::Endocrinology,
        &["diabetes", "glucose", "insulin", "hormone"],
    ),
    (
        MedicalSpecialty::Respiratory,
        &["asthma", "breathing", "lung", "cough", "oxygen"],
    ),
    (
        MedicalSpecialty::Neurology,
        &["migraine", "headache", "brain", "seizure"],
    ),
    (
        MedicalSpecialty::Psychiatry,
        &["depression", "anxiety", "mental health"],
    ),
    (
        MedicalSpecialty::Orthopedics,
        &["arthritis", "bone", "joint", "back pain"],
    ),
    (
        MedicalSpecialty::GeneralMedicine,
        &["fever", "weight", "general", "routine"],
    ),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_entities_is_general_medicine() {
        assert_eq!(
            MedicalSpecialty::identify(&EntityBag::new()),
            MedicalSpecialty::GeneralMedicine
        );
    }

    #[test]
    fn test_highest_count_wins() {
        let entities = EntityBag {
            conditions: vec!["asthma".into()],
            observations: vec!["oxygen saturation".into()],
            medications: vec!["insulin".into()],
            ..Default::default()
        };
        assert_eq!(MedicalSpecialty::identify(&entities), MedicalSpecialty::Respiratory);
    }

    #[test]
    fn test_tie_goes_to_table_order() {
        let entities = EntityBag {
            conditions: vec!["depression".into(), "diabetes".into()],
            ..Default::default()
        };
        assert_eq!(MedicalSpecialty::identify(&entities), MedicalSpecialty::Endocrinology);
    }
}
