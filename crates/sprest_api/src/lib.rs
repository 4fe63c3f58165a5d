mod api;
mod sprest_api;

pub use api::*;
pub use sprest_api::*;
pub use sprest_domain::*;
pub use sprest_services::Error;
