//! Declarative REST layer.
//!
//! Resources and collections describe their remote endpoints with
//! associated constants; the corresponding clients validate those schemas
//! at construction time and perform the enabled operations over the
//! transport in [`crate::clients`].

mod collection;
mod errors;
mod operations;
mod path;
mod resource;

pub use collection::{Collection, CollectionClient};
pub use errors::{ApiError, SchemaError};
pub use operations::Operation;
pub use path::resolve_path;
pub use resource::{Resource, ResourceClient};
