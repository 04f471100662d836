//! Application context - dependency injection container

use std::sync::Arc;

use chrono::{DateTime, Utc};
use helpdesk_core::{Clock, DirectoryService, PayrollService, TicketService};
use helpdesk_domain::{Config, Result};
use helpdesk_infra::store::seeded_store;
use helpdesk_infra::{InMemoryStore, SystemClock};
use tracing::info;

use crate::utils::health::{ComponentHealth, HealthStatus};

/// Application context - holds all services and dependencies
pub struct AppContext {
    pub config: Config,
    pub store: Arc<InMemoryStore>,
    pub clock: Arc<dyn Clock>,
    pub tickets: Arc<TicketService>,
    pub payroll: Arc<PayrollService>,
    pub directory: Arc<DirectoryService>,
    started_at: DateTime<Utc>,
}

impl AppContext {
    /// Build the context over a freshly seeded store and the system clock.
    ///
    /// # Errors
    /// Returns an error if the SLA configuration is invalid or seeding fails.
    pub fn new(config: Config) -> Result<Self> {
        let clock: Arc<dyn Clock> = Arc::new(SystemClock);
        let store = Arc::new(seeded_store(clock.now())?);
        Self::with_parts(config, store, clock)
    }

    /// Build the context over an existing store and clock.
    ///
    /// # Errors
    /// Returns `HelpdeskError::Validation` if the SLA configuration is invalid.
    pub fn with_parts(config: Config, store: Arc<InMemoryStore>, clock: Arc<dyn Clock>) -> Result<Self> {
        let policy = config.sla.policy()?;

        let tickets = TicketService::new(
            store.clone(),
            store.clone(),
            store.clone(),
            store.clone(),
            Arc::clone(&clock),
        )
        .with_policy(policy);
        let payroll =
            PayrollService::new(store.clone(), store.clone(), store.clone(), Arc::clone(&clock));
        let directory = DirectoryService::new(store.clone(), store.clone(), store.clone());

        let stats = store.stats();
        info!(
            tickets = stats.tickets,
            clients = stats.clients,
            employees = stats.employees,
            payroll_sheets = stats.payroll_sheets,
            "app_context_initialized"
        );

        Ok(Self {
            config,
            started_at: clock.now(),
            store,
            clock,
            tickets: Arc::new(tickets),
            payroll: Arc::new(payroll),
            directory: Arc::new(directory),
        })
    }

    /// Health of the context components.
    pub fn health_check(&self) -> HealthStatus {
        let now = self.clock.now();
        let stats = self.store.stats();

        let store = if stats.tickets > 0 {
            ComponentHealth::healthy("store")
        } else {
            ComponentHealth::unhealthy("store", "no tickets loaded")
        };

        let static_dir = std::path::Path::new(&self.config.server.static_dir);
        let spa = if helpdesk_infra::http::entry_document_exists(static_dir) {
            ComponentHealth::healthy("spa_bundle")
        } else {
            ComponentHealth::unhealthy("spa_bundle", "entry document missing")
        };

        let sla = match self.tickets.sla_overview() {
            Ok(_) => ComponentHealth::healthy("ticket_service"),
            Err(err) => ComponentHealth::unhealthy("ticket_service", err.to_string()),
        };

        let mut status = HealthStatus::new(now)
            .add_component(store)
            .add_component(spa)
            .add_component(sla)
            .with_store(stats)
            .with_uptime(now - self.started_at);
        status.calculate_score();
        status
    }
}
