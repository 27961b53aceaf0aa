/// Prefix of generated lead ids
pub const LEAD_ID_PREFIX: &str = "lead_";

/// Header carrying the admin API key on the leads read path
pub const ADMIN_API_KEY_HEADER: &str = "x-api-key";

// =============================================================================
// NAME LIMITS
// =============================================================================

/// Minimum length of a farmer's name, in characters
pub const NAME_MIN_CHARS: usize = 2;

/// Maximum length of a farmer's name, in characters
pub const NAME_MAX_CHARS: usize = 100;

/// User-agent strings longer than this are truncated before storing
pub const MAX_USER_AGENT_CHARS: usize = 512;
