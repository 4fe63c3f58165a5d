mod infra;
mod services;

pub use infra::*;
pub use services::*;
pub use sprest_domain as domain;
