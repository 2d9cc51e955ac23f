//! Constants used throughout the PharmOps registry crate.

/// Product name shown in health responses and exported catalogs.
pub const PRODUCT_NAME: &str = "PharmOps";

/// Catalog schema version written into every export.
pub const CATALOG_VERSION: u32 = 1;

/// Default REST bind address when none is configured.
pub const DEFAULT_REST_ADDR: &str = "0.0.0.0:3000";

/// Default organisation name when none is configured.
pub const DEFAULT_ORGANISATION_NAME: &str = "PharmOps Hospital";

/// Environment variable holding the REST bind address.
pub const REST_ADDR_ENV: &str = "PHARMOPS_REST_ADDR";

/// Environment variable holding the organisation display name.
pub const ORGANISATION_NAME_ENV: &str = "PHARMOPS_ORGANISATION";

/// Longest organisation name accepted in configuration.
pub const MAX_ORGANISATION_NAME_LEN: usize = 120;
