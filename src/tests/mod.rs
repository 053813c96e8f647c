//! Integration and unit tests for the Kinothek application.
//!
//! - **api_tests**: endpoint tests against the real router
//! - **store_tests**: entity store queries and mutations
//! - **db_tests**: schema bootstrap and relation semantics
//! - **config_tests**: configuration loading and validation
//! - **error_tests**: error taxonomy and HTTP mapping

pub mod config_tests;
pub mod db_tests;
pub mod error_tests;
