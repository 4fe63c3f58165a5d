mod command;
mod error;
mod log;
mod response;
mod sprest_services;

#[cfg(test)]
pub mod test_fixtures;

pub use command::*;
pub use error::*;
pub use log::*;
pub use sprest_services::*;
