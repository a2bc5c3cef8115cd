//! Medical lexicons for natural-language FHIR query translation
//!
//! A [`Lexicon`] bundles three coded term tables and an urgency table:
//! - conditions (SNOMED CT codes)
//! - observations (LOINC codes)
//! - medications (RxNorm codes)
//! - urgency keywords with weights 1-5
//!
//! Terms match by case-insensitive substring containment against the query
//! text. A lexicon is built once, either from the compiled-in
//! [`Lexicon::standard`] tables or from a JSON document, and is read-only
//! afterwards.
//!
//! # Example
//!
//! ```
//! use octofhir_nlq_lexicon::Lexicon;
//!
//! let lexicon = Lexicon::standard();
//! let found: Vec<_> = lexicon.conditions().matches("show me diabetic patients").collect();
//! assert_eq!(found, vec!["diabetes"]);
//! ```

mod entry;
mod lexicon;
mod standard;

pub use entry::{LexiconEntry, TermLexicon};
pub use lexicon::{Lexicon, LexiconDocument, UrgencyTable, MAX_URGENCY, MIN_URGENCY};
