//! Markdown presentation of domain models and operation results.
//!
//! Domain models implement `Display` directly (see [`models`]); collections
//! and create/update/delete outcomes go through the newtype wrappers in
//! [`collections`] and [`results`]. The CLI feeds this markdown to its
//! terminal renderer and the MCP server returns it verbatim.
//!
//! ```rust
//! use stride_core::display::{Clock, OperationStatus};
//!
//! assert_eq!(Clock(125).to_string(), "02:05");
//!
//! let status = OperationStatus::failure("Custom workout with ID 9 not found".to_string());
//! assert!(status.to_string().starts_with("Error:"));
//! ```

pub mod collections;
pub mod datetime;
pub mod models;
pub mod results;
pub mod status;

pub use collections::{CustomWorkouts, WorkoutLogs, WorkoutPlans};
pub use datetime::{Clock, LocalDateTime};
pub use results::{CreateResult, DeleteResult, UpdateResult};
pub use status::OperationStatus;
