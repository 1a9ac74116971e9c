//! Shared type definitions for the Storyloom interface.

/// Health status of a backend.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum HealthStatus {
    /// Backend is fully operational
    Healthy,
    /// Backend is operational but with reduced performance
    Degraded {
        /// Description of the degradation
        message: String,
    },
    /// Backend is not operational
    Unhealthy {
        /// Description of the problem
        message: String,
    },
}
