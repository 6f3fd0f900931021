//! # Meeting Guides
//!
//! Static workflow guides that tell an agent which external tools to call, in which order,
//! to turn a recorded meeting into tracker tasks and a written record.
//!
//! ## Architecture
//!
//! ```text
//! Catalog (static, declaration order)
//!     │
//!     ├──> OperationDescriptor { name, summary, description, params }
//!     │      └─ input_schema() -> JSON object schema
//!     │
//!     └──> Dispatcher (name -> renderer lookup table)
//!            ├─ Arguments (string map, absent -> "")
//!            ├─ templates::* (pure string expansion)
//!            └─ Vec<String> | GuideError::UnknownOperation
//! ```
//!
//! Nothing here performs I/O. Every render is deterministic.

mod arguments;
mod catalog;
mod dispatch;
mod error;
mod templates;

pub use arguments::Arguments;
pub use catalog::{
    find_operation, list_operations, operation_names, OperationDescriptor, ParamSpec, Renderer,
    DETAILS_GUIDE, DOCUMENTATION_GUIDE, FULL_WORKFLOW_GUIDE, QUICK_COMMANDS_GUIDE, SEARCH_GUIDE,
    TASK_CREATION_GUIDE,
};
pub use dispatch::Dispatcher;
pub use error::{GuideError, Result};
pub use templates::{excerpt, EXCERPT_CHARS, EXCERPT_MARKER};
