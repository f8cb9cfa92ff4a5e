//! API configuration module.
//!
//! Configuration is loaded from environment variables with fallback to
//! defaults - except the reconciliation strategy, which must be chosen
//! explicitly: the business changed how expected cash is derived once
//! already, so the server refuses to guess.

use std::env;

use masa_core::{Money, ReconcilePolicy, ReconcileStrategy, DEFAULT_UNIT_COST_CENTS};

/// API server configuration.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// HTTP listen port
    pub port: u16,

    /// Path to the SQLite database file
    pub database_path: String,

    /// Unit cost per produced piece, in centavos
    pub unit_cost_cents: i64,

    /// How the expected cash amount is derived (required, no default)
    pub strategy: ReconcileStrategy,
}

impl ApiConfig {
    /// Load configuration from environment variables.
    ///
    /// ## Variables
    /// - `PORT` - listen port (default: 3000)
    /// - `DATABASE_PATH` - SQLite file (default: masa.db)
    /// - `UNIT_COST_CENTS` - centavos per piece (default: 2200 = $22.00)
    /// - `RECONCILE_STRATEGY` - `production` or `sales` (**required**)
    pub fn load() -> Result<Self, ConfigError> {
        let config = ApiConfig {
            port: env::var("PORT")
                .unwrap_or_else(|_| "3000".to_string())
                .parse()
                .map_err(|_| ConfigError::InvalidValue("PORT".to_string()))?,

            database_path: env::var("DATABASE_PATH").unwrap_or_else(|_| "masa.db".to_string()),

            unit_cost_cents: env::var("UNIT_COST_CENTS")
                .unwrap_or_else(|_| DEFAULT_UNIT_COST_CENTS.to_string())
                .parse()
                .map_err(|_| ConfigError::InvalidValue("UNIT_COST_CENTS".to_string()))?,

            strategy: env::var("RECONCILE_STRATEGY")
                .map_err(|_| ConfigError::MissingRequired("RECONCILE_STRATEGY".to_string()))?
                .parse()
                .map_err(|_| ConfigError::InvalidValue("RECONCILE_STRATEGY".to_string()))?,
        };

        if config.unit_cost_cents < 0 {
            return Err(ConfigError::InvalidValue("UNIT_COST_CENTS".to_string()));
        }

        Ok(config)
    }

    /// The reconciliation policy this configuration selects.
    pub fn policy(&self) -> ReconcilePolicy {
        ReconcilePolicy::new(self.strategy, Money::from_cents(self.unit_cost_cents))
    }
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(String),

    #[error("Missing required configuration: {0}")]
    MissingRequired(String),
}
