//! Application-wide constants and configuration values
//!
//! Centralizes the season rules, HTTP tuning and cache TTL values so the
//! rest of the codebase never carries magic numbers.

#![allow(dead_code)]

/// Number of regular-season weeks in an NFL season
pub const WEEKS_IN_SEASON: u8 = 18;

/// First week in which entries must submit two picks instead of one
pub const TWO_PICK_START_WEEK: u8 = 12;

/// Number of teams in the league (and the size of every entry's starting pool)
pub const LEAGUE_TEAM_COUNT: usize = 32;

/// Default timeout for HTTP requests in seconds
pub const DEFAULT_HTTP_TIMEOUT_SECONDS: u64 = 30;

/// Maximum number of connections per host in the HTTP client pool
pub const HTTP_POOL_MAX_IDLE_PER_HOST: usize = 100;

/// Cache TTL (Time To Live) values in seconds for scoreboard responses
pub mod cache_ttl {
    /// TTL for scoreboards that still contain live games. Short enough that
    /// a re-poll during a game window sees fresh scores.
    pub const LIVE_SCOREBOARD_SECONDS: u64 = 30;

    /// TTL for scoreboards where every game is final (1 hour)
    pub const FINAL_SCOREBOARD_SECONDS: u64 = 3600;

    /// TTL for future-week schedules with no started games (30 minutes)
    pub const SCHEDULE_SECONDS: u64 = 1800;

    /// Bounded capacity of the scoreboard response cache. One entry per
    /// (season, week) URL, so a full season fits with room to spare.
    pub const RESPONSE_CACHE_CAPACITY: usize = 64;
}

/// Environment variable names
pub mod env_vars {
    /// Environment variable for scoreboard API domain override
    pub const API_DOMAIN: &str = "SURVIVOR_API_DOMAIN";

    /// Environment variable for log file path override
    pub const LOG_FILE: &str = "SURVIVOR_LOG_FILE";

    /// Environment variable for HTTP timeout override in seconds
    pub const HTTP_TIMEOUT: &str = "SURVIVOR_HTTP_TIMEOUT";
}

/// Retry configuration for scoreboard fetches
pub mod retry {
    /// Maximum number of retry attempts for API calls
    pub const MAX_ATTEMPTS: u32 = 3;

    /// Base delay for exponential backoff (milliseconds). Doubles per
    /// attempt unless the server sends Retry-After.
    pub const BASE_DELAY_MS: u64 = 250;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_season_constants_are_consistent() {
        // The two-pick rule has to kick in inside the season
        assert!(TWO_PICK_START_WEEK > 1);
        assert!(TWO_PICK_START_WEEK <= WEEKS_IN_SEASON);
        // 18 weeks, 32 teams: a flawless entry never runs out of teams
        assert!(LEAGUE_TEAM_COUNT >= WEEKS_IN_SEASON as usize);
    }

    #[test]
    fn test_ttl_constants_are_reasonable() {
        let live = cache_ttl::LIVE_SCOREBOARD_SECONDS;
        let finals = cache_ttl::FINAL_SCOREBOARD_SECONDS;
        let schedule = cache_ttl::SCHEDULE_SECONDS;

        // Live data must expire faster than anything settled
        assert!(live < schedule);
        assert!(schedule < finals);
        assert!(cache_ttl::RESPONSE_CACHE_CAPACITY >= WEEKS_IN_SEASON as usize);
    }

    #[test]
    fn test_retry_constants_are_reasonable() {
        assert!(retry::MAX_ATTEMPTS > 0);
        assert!(retry::BASE_DELAY_MS > 0);
    }

    #[test]
    fn test_env_var_names_are_not_empty() {
        assert!(!env_vars::API_DOMAIN.is_empty());
        assert!(!env_vars::LOG_FILE.is_empty());
        assert!(!env_vars::HTTP_TIMEOUT.is_empty());
    }
}
