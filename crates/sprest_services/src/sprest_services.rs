use std::sync::Arc;

use sprest_app::{EnvironmentInfra, HttpInfra, Services};

use crate::SprestCommandService;

/// Container for every service the client exposes, built on top of a single
/// infrastructure implementation.
pub struct SprestServices<F> {
    command_service: Arc<SprestCommandService<F>>,
}

impl<F: HttpInfra + EnvironmentInfra> SprestServices<F> {
    pub fn new(infra: Arc<F>) -> Self {
        let command_service = Arc::new(SprestCommandService::new(infra));
        Self { command_service }
    }
}

impl<F> Clone for SprestServices<F> {
    fn clone(&self) -> Self {
        Self { command_service: self.command_service.clone() }
    }
}

impl<F: HttpInfra + EnvironmentInfra> Services for SprestServices<F> {
    type CommandService = SprestCommandService<F>;

    fn command_service(&self) -> &Self::CommandService {
        &self.command_service
    }
}
