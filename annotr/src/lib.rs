//! # annotr - Annotation Session Engine for Tabular Data
//!
//! The in-memory core of a one-row-at-a-time labeling tool: a session state
//! machine over a parsed tabular dataset, a pure read-model projection for
//! rendering, and an export builder that re-emits the dataset with the label
//! column inserted.
//!
//! ## Key Features
//! - Owned session state mutated through a small command surface
//! - Header-aware row/label index arithmetic with clamped navigation
//! - Deterministic, side-effect-free export builder
//! - CSV decode/encode with UTF-8 BOM round-trip handling
//! - No dependency on any rendering technology

pub mod codec;
pub mod error;
pub mod export;
pub mod labels;
pub mod session;
pub mod snapshot;

// Re-export main types for easy use
pub use codec::{decode, encode};
pub use error::{SessionError, SessionResult};
pub use export::build_annotated_rows;
pub use labels::{LabelKind, LabelSet};
pub use session::Session;
pub use snapshot::{PLACEHOLDER, SessionSnapshot};
