//! Configuration for ticket purchases.
//!
//! Loads configuration from environment variables with sensible defaults.

use serde::{Deserialize, Serialize};
use std::env;

/// Default maximum number of tickets (all types) in one purchase
pub const DEFAULT_MAX_TICKETS_PER_PURCHASE: u32 = 25;

/// Default maximum number of infants per adult
pub const DEFAULT_MAX_INFANTS_PER_ADULT: u32 = 2;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Purchase rule limits
    pub rules: PurchaseRules,
    /// Log level filter (trace, debug, info, warn, error)
    pub log_level: String,
}

/// Limits applied to every purchase after aggregation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PurchaseRules {
    /// Maximum tickets of all types in a single purchase
    pub max_tickets_per_purchase: u32,
    /// Maximum infant tickets per adult ticket
    pub max_infants_per_adult: u32,
}

impl Default for PurchaseRules {
    fn default() -> Self {
        Self {
            max_tickets_per_purchase: DEFAULT_MAX_TICKETS_PER_PURCHASE,
            max_infants_per_adult: DEFAULT_MAX_INFANTS_PER_ADULT,
        }
    }
}

impl PurchaseRules {
    /// Load rule limits from environment variables.
    ///
    /// Unset or unparseable variables fall back to the defaults.
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            max_tickets_per_purchase: env::var("TICKETS_MAX_PER_PURCHASE")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(DEFAULT_MAX_TICKETS_PER_PURCHASE),
            max_infants_per_adult: env::var("TICKETS_MAX_INFANTS_PER_ADULT")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(DEFAULT_MAX_INFANTS_PER_ADULT),
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            rules: PurchaseRules::from_env(),
            log_level: env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        }
    }
}
