/// Default number of tables per venue; summon links exist for 1..=capacity.
/// Deployments with more tables override via TABLE_CAPACITY.
pub const DEFAULT_TABLE_CAPACITY: u32 = 40;

/// Default lifetime of an issued login token, in days
pub const DEFAULT_TOKEN_TTL_DAYS: i64 = 7;

// =============================================================================
// Guest-Facing Messages
// =============================================================================

/// Confirmation shown to a guest when the magician is taking requests
pub const MSG_SUMMON_LIVE: &str = "The magician has been summoned. Magic will begin soon!";

/// Confirmation shown to a guest while the magician is paused; the
/// request is still queued
pub const MSG_SUMMON_PAUSED: &str =
    "The magician is mid-performance right now. Your table is in the queue.";

// =============================================================================
// Error Messages
// =============================================================================

/// Error message for a malformed or out-of-range summon link
pub const ERR_INVALID_SUMMON_LINK: &str = "Invalid summon link";

/// Error message for an out-of-range table number on a dashboard action
pub const ERR_INVALID_TABLE_NUMBER: &str = "Invalid table number";

/// Error message for a registration or login request missing credentials
pub const ERR_EMAIL_PASSWORD_REQUIRED: &str = "Email and password required";
