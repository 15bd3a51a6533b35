pub mod health_handler;
pub mod reqwest_transport;
pub mod ui_handler;

pub use reqwest_transport::ReqwestTransport;
