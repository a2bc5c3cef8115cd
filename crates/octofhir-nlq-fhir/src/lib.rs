//! FHIR search query construction
//!
//! Turns an analyzed natural-language query (intent plus extracted entities)
//! into a FHIR REST search descriptor: resource type, method, base URL and
//! ordered search parameters. Coded parameters (`code`,
//! `_has:Condition:patient:code`) are looked up in the same
//! [`Lexicon`](octofhir_nlq_lexicon::Lexicon) used for extraction.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use octofhir_nlq_analysis::NlpPipeline;
//! use octofhir_nlq_fhir::{QueryBuilder, ResourceType};
//!
//! let pipeline = NlpPipeline::default();
//! let builder = QueryBuilder::new(pipeline.lexicon().clone());
//!
//! let text = "List all female patients named Sarah";
//! let analysis = pipeline.analyze(text);
//! let outcome = builder.build(analysis.intent, &analysis.entities, text);
//!
//! let query = outcome.query().unwrap();
//! assert_eq!(query.resource_type, ResourceType::Patient);
//! assert_eq!(query.full_url(), "https://hapi.fhir.org/baseR4/Patient?name=Sarah&gender=female");
//! ```

pub mod builder;
pub mod format;
pub mod params;
pub mod query;
pub mod resource;

pub use builder::{resource_for, sniff_resource, QueryBuilder};
pub use format::format_request;
pub use params::SearchParameters;
pub use query::{FhirQuery, QueryOutcome, DEFAULT_BASE_URL, UNRESOLVABLE_MESSAGE};
pub use resource::ResourceType;
