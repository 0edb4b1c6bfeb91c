//! Request and response plumbing shared by all endpoints

pub mod error;
pub mod json;
pub mod path;

pub use error::{ApiError, ApiErrorResponse};
pub use json::Json;
pub use path::Path;
