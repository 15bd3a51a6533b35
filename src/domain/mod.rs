//! Core types of the console: what is sent, what comes back, and how it is shown.

pub mod error;
pub mod payload;
pub mod response;
pub mod selection;
pub mod status;

pub use error::{SubmitError, TransportError};
pub use payload::RequestPayload;
pub use response::{Projection, ResponseObject};
pub use selection::{FieldSelection, ResponseField};
pub use status::{HealthReply, ServerStatus};
