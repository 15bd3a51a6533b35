//! Use cases and ports: the controller, its state store and the transport seam.

pub mod controller;
pub mod store;
pub mod transport;

pub use controller::Controller;
pub use store::{Action, ConsoleState, Store, SubmissionPhase};
pub use transport::{BfhlTransport, DEFAULT_BASE_URL, SUBMIT_PATH};
