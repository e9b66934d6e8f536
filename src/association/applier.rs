//! Writes bindings into the OS association registry.
//!
//! Content types go through the modern asynchronous call, awaited with a
//! bounded wait. A recoverable failure of that call falls back to the legacy
//! role handler registration. Schemes are a register-then-set pair.

use std::sync::Arc;
use std::sync::mpsc::{self, RecvTimeoutError};
use std::time::Duration;

use tracing::{Span, debug, info, warn};

use crate::app::ApplicationRecord;
use crate::error::{Result, registry};
use crate::platform::{AssociationRegistry, Role};
use crate::uti::TypeIdentifier;

/// Bound on waiting for the OS to complete a content type binding
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

pub struct AssociationApplier {
    registry: Arc<dyn AssociationRegistry>,
    timeout: Duration,
    span: Span,
}

impl AssociationApplier {
    pub fn new(registry: Arc<dyn AssociationRegistry>, timeout: Duration, span: Span) -> Self {
        Self {
            registry,
            timeout,
            span,
        }
    }

    /// Make `app` the default application for a content type.
    ///
    /// Times out with [`OperationTimeout`](crate::error::InfatError::OperationTimeout)
    /// if the OS never completes; the OS may still finish the write later.
    pub fn bind_file(&self, app: &ApplicationRecord, content_type: &TypeIdentifier) -> Result<()> {
        let identifier = content_type.identifier.as_str();
        let (tx, rx) = mpsc::sync_channel(1);

        debug!(parent: &self.span, app = %app.bundle_id, identifier, "Setting default application");
        self.registry.set_default_application(
            &app.location,
            identifier,
            Box::new(move |result| {
                // The receiver is gone once the wait timed out
                let _ = tx.send(result);
            }),
        );

        match rx.recv_timeout(self.timeout) {
            Ok(Ok(())) => {
                info!(parent: &self.span, app = %app.name, identifier, "Default application set");
                Ok(())
            }
            Ok(Err(e)) if e.is_recoverable() => {
                warn!(
                    parent: &self.span,
                    identifier,
                    error = %e,
                    "Default application call refused, falling back to role handler"
                );
                self.bind_role_handler(app, identifier)
            }
            Ok(Err(e)) => Err(registry::default_app_setting(identifier, e.to_string())),
            Err(RecvTimeoutError::Timeout) => Err(registry::timeout(
                format!("set default application for {identifier}"),
                self.timeout,
            )),
            Err(RecvTimeoutError::Disconnected) => Err(registry::default_app_setting(
                identifier,
                "completion dropped without a result",
            )),
        }
    }

    /// Make `app` the default handler for a URL scheme.
    ///
    /// The application is registered first; a failed registration never
    /// reaches the set-default step.
    pub fn bind_scheme(&self, app: &ApplicationRecord, scheme: &str) -> Result<()> {
        let status = self.registry.register_application(&app.location);
        if status != 0 {
            return Err(registry::cannot_register_scheme(scheme, status));
        }
        debug!(parent: &self.span, path = %app.location.display(), "Application registered");

        let status = self
            .registry
            .set_default_scheme_handler(scheme, &app.bundle_id);
        if status != 0 {
            return Err(registry::cannot_register_scheme(scheme, status));
        }

        info!(parent: &self.span, app = %app.name, scheme, "Default scheme handler set");
        Ok(())
    }

    fn bind_role_handler(&self, app: &ApplicationRecord, identifier: &str) -> Result<()> {
        let status = self
            .registry
            .set_default_role_handler(identifier, Role::Viewer, &app.bundle_id);
        if status != 0 {
            return Err(registry::cannot_register_type(identifier, status));
        }
        info!(parent: &self.span, app = %app.name, identifier, "Default role handler set");
        Ok(())
    }
}
