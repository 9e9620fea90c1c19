// * Configuration Constants
// * Central location for status ranges, cookie names and timeouts

use std::ops::RangeInclusive;

// * Request timeout in milliseconds
pub const REQUEST_TIMEOUT_MS: u64 = 30_000;

// * Artificial latency injected before each send (0 = disabled)
pub const DEBUG_NETWORK_LATENCY_MS: u64 = 0;

// * Cookie carrying the auth session id on secured requests
pub const SESSION_COOKIE_KEY: &str = "JSESSIONID";

// * Status codes treated as authentication/authorization failures
pub const AUTH_ERROR_STATUSES: [u16; 2] = [401, 403];

// * Status range treated as server-side failures
pub const SERVER_ERROR_STATUSES: RangeInclusive<u16> = 500..=599;

// * Status range treated as success when deriving the success flag
pub const SUCCESS_STATUSES: RangeInclusive<u16> = 200..=299;
