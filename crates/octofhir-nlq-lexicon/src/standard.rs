//! Built-in lexicon tables

use crate::entry::{LexiconEntry, TermLexicon};
use crate::lexicon::{Lexicon, UrgencyTable};

impl Lexicon {
    /// The compiled-in lexicon
    pub fn standard() -> Self {
        Self::new(
            standard_conditions(),
            standard_observations(),
            standard_medications(),
            standard_urgency(),
        )
    }
}

/// SNOMED CT coded conditions
fn standard_conditions() -> TermLexicon {
    TermLexicon::new()
        .with(
            "diabetes",
            LexiconEntry::new("73211009", "Diabetes mellitus", "endocrine").alias("diabetic"),
        )
        .with(
            "hypertension",
            LexiconEntry::new("38341003", "Hypertensive disorder", "cardiovascular")
                .alias("high blood pressure")
                .alias("hypertensive"),
        )
        .with(
            "asthma",
            LexiconEntry::new("195967001", "Asthma", "respiratory").alias("asthmatic"),
        )
        .with(
            "heart disease",
            LexiconEntry::new("56265001", "Heart disease", "cardiovascular"),
        )
        .with(
            "cancer",
            LexiconEntry::new("363346000", "Malignant neoplastic disease", "oncology"),
        )
        .with(
            "depression",
            LexiconEntry::new("35489007", "Depressive disorder", "mental_health"),
        )
        .with(
            "anxiety",
            LexiconEntry::new("48694002", "Anxiety disorder", "mental_health"),
        )
        .with(
            "migraine",
            LexiconEntry::new("37796009", "Migraine", "neurological"),
        )
        .with(
            "arthritis",
            LexiconEntry::new("3723001", "Arthritis", "musculoskeletal"),
        )
        .with(
            "pneumonia",
            LexiconEntry::new("233604007", "Pneumonia", "respiratory"),
        )
}

/// LOINC coded observations
fn standard_observations() -> TermLexicon {
    TermLexicon::new()
        .with(
            "blood pressure",
            LexiconEntry::new("85354-9", "Blood pressure panel", "vital_signs"),
        )
        .with(
            "temperature",
            LexiconEntry::new("8310-5", "Body temperature", "vital_signs"),
        )
        .with(
            "heart rate",
            LexiconEntry::new("8867-4", "Heart rate", "vital_signs").alias("pulse"),
        )
        .with(
            "weight",
            LexiconEntry::new("29463-7", "Body weight", "physical_measurement"),
        )
        .with(
            "glucose",
            LexiconEntry::new("33747-0", "Glucose measurement", "laboratory"),
        )
        .with(
            "cholesterol",
            LexiconEntry::new("14647-2", "Cholesterol", "laboratory"),
        )
        .with(
            "hemoglobin",
            LexiconEntry::new("718-7", "Hemoglobin", "laboratory"),
        )
        .with(
            "oxygen saturation",
            LexiconEntry::new("59408-5", "Oxygen saturation", "vital_signs"),
        )
        .with(
            "bmi",
            LexiconEntry::new("39156-5", "Body mass index", "physical_measurement"),
        )
}

/// RxNorm coded medications
fn standard_medications() -> TermLexicon {
    TermLexicon::new()
        .with("insulin", LexiconEntry::new("5856", "Insulin", "antidiabetic"))
        .with("metformin", LexiconEntry::new("6809", "Metformin", "antidiabetic"))
        .with("lisinopril", LexiconEntry::new("29046", "Lisinopril", "antihypertensive"))
        .with("aspirin", LexiconEntry::new("1191", "Aspirin", "analgesic"))
        .with("amoxicillin", LexiconEntry::new("723", "Amoxicillin", "antibiotic"))
        .with("ibuprofen", LexiconEntry::new("5640", "Ibuprofen", "analgesic"))
        .with("albuterol", LexiconEntry::new("435", "Albuterol", "bronchodilator"))
}

fn standard_urgency() -> UrgencyTable {
    UrgencyTable::new()
        .with("emergency", 5)
        .with("urgent", 4)
        .with("severe", 4)
        .with("critical", 5)
        .with("pain", 3)
        .with("bleeding", 4)
        .with("difficulty breathing", 5)
        .with("chest pain", 5)
        .with("allergic reaction", 4)
        .with("fever", 3)
        .with("routine", 1)
        .with("follow-up", 2)
        .with("check-up", 1)
}
