pub mod logging;
pub mod request_id;

pub use logging::log_requests;
pub use request_id::{RequestId, RequestIdLayer, REQUEST_ID_HEADER};
