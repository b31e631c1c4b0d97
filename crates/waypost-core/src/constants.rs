/// Environment variable holding the RPC bridge base URL
pub const ENV_RPC_URL: &str = "WAYPOST_RPC_URL";

/// Environment variable overriding the HTTP client timeout, in seconds
pub const ENV_RPC_TIMEOUT_SECS: &str = "WAYPOST_RPC_TIMEOUT_SECS";

/// When set, logs are appended to this file instead of stderr
pub const ENV_LOG_FILE: &str = "WAYPOST_LOG_FILE";

pub const DEFAULT_RPC_TIMEOUT_SECS: u64 = 30;

/// Page size used when the caller does not ask for one
pub const DEFAULT_PAGE_LIMIT: i32 = 50;
