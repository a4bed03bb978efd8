//! Password complexity checking library
//!
//! This library evaluates a single password against fixed composition rules
//! (length, character-class coverage) and produces a categorical strength
//! rating plus improvement suggestions.
//!
//! Character classes are ASCII-only: anything outside `[A-Za-z0-9]` counts
//! as a special character, including non-ASCII letters and digits.
//!
//! # Features
//!
//! - `tracing`: Enables logging via tracing crate
//!
//! # Example
//!
//! ```rust
//! use pwd_complexity::{assess, render, Strength};
//! use secrecy::SecretString;
//!
//! let password = SecretString::new("MyP@ssw0rd!".to_string().into());
//!
//! let report = assess(&password);
//! assert_eq!(report.strength, Strength::Strong);
//!
//! for line in render(&report) {
//!     println!("{}", line);
//! }
//! ```

// Internal modules
mod assessor;
mod cli;
mod report;
mod reporter;

// Public API
pub use assessor::{assess, MIN_LENGTH, STRONG_MIN_LENGTH, VERY_STRONG_MIN_LENGTH};
pub use cli::{read_password, InputError, BANNER, PROMPT};
pub use report::{AssessmentReport, Strength};
pub use reporter::{render, suggestions};
