//! Health reporting for AppContext components
//!
//! Provides HealthStatus and ComponentHealth types served by `/api/health`.

use chrono::{DateTime, Duration, Utc};
use helpdesk_infra::StoreStats;
use serde::Serialize;

/// Share of healthy components required for the service to report healthy
const HEALTHY_THRESHOLD: f64 = 0.8;

/// Overall health status of the application
///
/// # Example
/// ```
/// use chrono::Utc;
/// use helpdesk_api::utils::health::{ComponentHealth, HealthStatus};
///
/// let mut status = HealthStatus::new(Utc::now())
///     .add_component(ComponentHealth::healthy("store"))
///     .add_component(ComponentHealth::unhealthy("spa_bundle", "entry document missing"));
/// status.calculate_score();
///
/// assert_eq!(status.score, 0.5);
/// assert!(!status.is_healthy);
/// ```
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthStatus {
    pub is_healthy: bool,

    /// Health score from 0.0 (completely unhealthy) to 1.0 (fully healthy)
    ///
    /// Calculated as: (healthy_components / total_components)
    pub score: f64,

    pub message: Option<String>,

    pub components: Vec<ComponentHealth>,

    /// Record counts of the backing store
    #[serde(skip_serializing_if = "Option::is_none")]
    pub store: Option<StoreStats>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub uptime_secs: Option<i64>,

    pub timestamp: DateTime<Utc>,
}

impl HealthStatus {
    /// Healthy status with score 1.0 and no components
    pub fn new(timestamp: DateTime<Utc>) -> Self {
        Self {
            is_healthy: true,
            score: 1.0,
            message: None,
            components: Vec::new(),
            store: None,
            uptime_secs: None,
            timestamp,
        }
    }

    pub fn add_component(mut self, component: ComponentHealth) -> Self {
        self.components.push(component);
        self
    }

    pub fn with_store(mut self, stats: StoreStats) -> Self {
        self.store = Some(stats);
        self
    }

    pub fn with_uptime(mut self, uptime: Duration) -> Self {
        self.uptime_secs = Some(uptime.num_seconds().max(0));
        self
    }

    /// Recompute `score` and `is_healthy` from the components.
    ///
    /// Should be called after all components have been added.
    pub fn calculate_score(&mut self) {
        if self.components.is_empty() {
            return;
        }

        let healthy_count = self.components.iter().filter(|c| c.is_healthy).count();

        self.score = healthy_count as f64 / self.components.len() as f64;
        self.is_healthy = self.score >= HEALTHY_THRESHOLD;
        self.message = (!self.is_healthy).then(|| {
            let failing: Vec<_> = self
                .components
                .iter()
                .filter(|c| !c.is_healthy)
                .map(|c| c.name.as_str())
                .collect();
            format!("degraded: {}", failing.join(", "))
        });
    }
}

/// Health status of an individual component
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentHealth {
    /// Component identifier (e.g., "store", "spa_bundle")
    pub name: String,
    pub is_healthy: bool,
    pub message: Option<String>,
}

impl ComponentHealth {
    pub fn healthy(name: impl Into<String>) -> Self {
        Self { name: name.into(), is_healthy: true, message: None }
    }

    pub fn unhealthy(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self { name: name.into(), is_healthy: false, message: Some(message.into()) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_health_status_new() {
        let status = HealthStatus::new(Utc::now());
        assert!(status.is_healthy);
        assert_eq!(status.score, 1.0);
        assert!(status.message.is_none());
        assert!(status.components.is_empty());
    }

    #[test]
    fn test_calculate_score_all_healthy() {
        let mut status = HealthStatus::new(Utc::now())
            .add_component(ComponentHealth::healthy("store"))
            .add_component(ComponentHealth::healthy("ticket_service"));

        status.calculate_score();

        assert_eq!(status.score, 1.0);
        assert!(status.is_healthy);
        assert!(status.message.is_none());
    }

    #[test]
    fn test_calculate_score_names_failing_components() {
        let mut status = HealthStatus::new(Utc::now())
            .add_component(ComponentHealth::healthy("store"))
            .add_component(ComponentHealth::unhealthy("spa_bundle", "entry document missing"));

        status.calculate_score();

        assert_eq!(status.score, 0.5);
        assert!(!status.is_healthy);
        assert_eq!(status.message.as_deref(), Some("degraded: spa_bundle"));
    }

    #[test]
    fn test_calculate_score_threshold() {
        let mut status = HealthStatus::new(Utc::now())
            .add_component(ComponentHealth::healthy("a"))
            .add_component(ComponentHealth::healthy("b"))
            .add_component(ComponentHealth::healthy("c"))
            .add_component(ComponentHealth::healthy("d"))
            .add_component(ComponentHealth::unhealthy("e", "error"));

        status.calculate_score();

        assert_eq!(status.score, 0.8);
        assert!(status.is_healthy);
    }

    #[test]
    fn test_serialized_shape() {
        let status = HealthStatus::new(Utc::now())
            .add_component(ComponentHealth::healthy("store"))
            .with_uptime(Duration::seconds(42));
        let json = serde_json::to_value(&status).unwrap();

        assert_eq!(json["isHealthy"], true);
        assert_eq!(json["uptimeSecs"], 42);
        assert!(json.get("store").is_none());
        assert_eq!(json["components"][0]["name"], "store");
    }
}
