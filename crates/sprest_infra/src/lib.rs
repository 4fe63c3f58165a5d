mod env;
mod http;
mod sprest_infra;

pub use env::{
    ACCESS_TOKEN_VAR, SERVER_RELATIVE_URL_VAR, SITE_URL_VAR, SprestEnvironmentInfra,
    TIMEOUT_SECS_VAR,
};
pub use http::SprestHttpInfra;
pub use sprest_infra::*;
