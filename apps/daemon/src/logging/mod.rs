//! Process-wide logger handle.
//!
//! Records go through `tracing`; a [`Logger`] only pins the component span
//! that callers run their work inside.

use once_cell::sync::OnceCell;
use tracing::{info_span, Span};

use crate::telemetry;

const DAEMON_COMPONENT: &str = "daemon";

static LOGGER: OnceCell<Logger> = OnceCell::new();

#[derive(Debug)]
pub struct Logger {
    component: &'static str,
    span: Span,
}

impl Logger {
    pub fn new(component: &'static str) -> Self {
        Self {
            component,
            span: info_span!("component", name = component),
        }
    }

    pub fn component(&self) -> &'static str {
        self.component
    }

    pub fn span(&self) -> &Span {
        &self.span
    }
}

/// Returns the shared logger, installing the subscriber on first use.
pub fn get_logger() -> &'static Logger {
    LOGGER.get_or_init(|| {
        let installed = telemetry::init_tracing();
        let logger = Logger::new(DAEMON_COMPONENT);
        tracing::debug!(
            parent: logger.span(),
            subscriber_installed = installed,
            "logger=ready"
        );
        logger
    })
}
