//! # Clubdesk Config
//!
//! Configuration types for the Clubdesk console.
//!
//! This crate provides configuration structures loaded from environment variables:
//!
//! - [`batch`]: Academic-year boundary and batch picker ranges
//! - [`listing`]: Founder ordering and hidden listing entries
//!
//! # Example
//!
//! ```ignore
//! use clubdesk_config::AppConfig;
//!
//! dotenvy::dotenv().ok();
//! let config = AppConfig::from_env();
//! println!("batches roll over in {:?}", config.batch.boundary_month);
//! ```

pub mod batch;
pub mod listing;

// Re-export commonly used types at crate root
pub use batch::BatchConfig;
pub use listing::ListingConfig;

/// All configuration sections, loaded together.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AppConfig {
    pub batch: BatchConfig,
    pub listing: ListingConfig,
}

impl AppConfig {
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            batch: BatchConfig::from_env(),
            listing: ListingConfig::from_env(),
        }
    }

    #[must_use]
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            batch: BatchConfig::from_lookup(&lookup),
            listing: ListingConfig::from_lookup(&lookup),
        }
    }
}
