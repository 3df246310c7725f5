//! Response script subsystem.
//!
//! # Data Flow
//! ```text
//! script file (TOML)
//!     → loader.rs (parse & deserialize, resolve body_file)
//!     → validation.rs (semantic checks)
//!     → ResponseScript (validated)
//!     → schema.rs build() → Box<dyn ScriptedResponse>
//! ```
//!
//! # Design Decisions
//! - All fields have defaults, so an empty script is an empty `200 OK`
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_script, parse_script, ConfigError};
pub use schema::{ObservabilityConfig, ResponseScript};
pub use validation::ValidationError;
