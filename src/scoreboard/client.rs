//! HTTP client for the scoreboard feed
//!
//! Cache-first fetching with retry/backoff on transient failures and
//! per-status error mapping. The cache lives inside the client (behind a
//! mutex so week fetches can run concurrently), never in module-level
//! state.

use futures::future::join_all;
use reqwest::Client;
use std::time::Duration;
use tokio::sync::Mutex;
use tracing::{debug, error, info, instrument, warn};

use crate::calendar::SeasonCalendar;
use crate::config::Config;
use crate::constants::{
    HTTP_POOL_MAX_IDLE_PER_HOST, WEEKS_IN_SEASON, cache_ttl, retry,
};
use crate::error::AppError;
use crate::models::Game;
use crate::scoreboard::cache::ResponseCache;
use crate::scoreboard::models::ScoreboardResponse;

/// Creates a pooled HTTP client with the configured request timeout.
pub fn create_http_client(timeout_seconds: u64) -> Result<Client, reqwest::Error> {
    Client::builder()
        .timeout(Duration::from_secs(timeout_seconds))
        .pool_max_idle_per_host(HTTP_POOL_MAX_IDLE_PER_HOST)
        .build()
}

/// Builds the scoreboard URL for one (season, week).
fn build_scoreboard_url(api_domain: &str, season: u16, week: u8) -> String {
    format!("{}/v1/scoreboard/{season}/{week}", api_domain.trim_end_matches('/'))
}

/// Async client for the scoreboard feed.
#[derive(Debug)]
pub struct ScoreboardClient {
    client: Client,
    api_domain: String,
    cache: Mutex<ResponseCache>,
}

impl ScoreboardClient {
    /// Builds a client from config. Fails when no API domain is
    /// configured; fetch commands cannot run without one.
    pub fn new(config: &Config) -> Result<Self, AppError> {
        if config.api_domain.is_empty() {
            return Err(AppError::config_error(
                "Scoreboard API domain is not configured (use --config or SURVIVOR_API_DOMAIN)",
            ));
        }
        let client = create_http_client(config.http_timeout_seconds)?;
        Ok(ScoreboardClient {
            client,
            api_domain: config.api_domain.clone(),
            cache: Mutex::new(ResponseCache::with_system_clock(
                cache_ttl::RESPONSE_CACHE_CAPACITY,
            )),
        })
    }

    /// Fetches one week's games, converted into domain [`Game`]s.
    pub async fn fetch_week(&self, season: u16, week: u8) -> Result<Vec<Game>, AppError> {
        let response = self.fetch_scoreboard(season, week).await?;
        response.into_games()
    }

    /// Fetches every week of a season concurrently and assembles a
    /// [`SeasonCalendar`]. Weeks the feed does not know yet (404) are
    /// skipped; any other failure aborts.
    pub async fn fetch_season(&self, season: u16) -> Result<SeasonCalendar, AppError> {
        let fetches = (1..=WEEKS_IN_SEASON).map(|week| self.fetch_week(season, week));
        let mut games = Vec::new();
        for (week, result) in (1..=WEEKS_IN_SEASON).zip(join_all(fetches).await) {
            match result {
                Ok(week_games) => games.extend(week_games),
                Err(AppError::ApiNotFound { .. }) => {
                    warn!("Feed has no scoreboard for season {season} week {week}, skipping");
                }
                Err(e) => return Err(e),
            }
        }
        info!("Assembled season {season} calendar with {} games", games.len());
        Ok(SeasonCalendar::new(season, games))
    }

    /// Cache-first scoreboard fetch with retry on transient failures.
    #[instrument(skip(self))]
    async fn fetch_scoreboard(
        &self,
        season: u16,
        week: u8,
    ) -> Result<ScoreboardResponse, AppError> {
        let url = build_scoreboard_url(&self.api_domain, season, week);

        {
            let mut cache = self.cache.lock().await;
            if let Some(body) = cache.get(&url) {
                match serde_json::from_str::<ScoreboardResponse>(&body) {
                    Ok(parsed) => return Ok(parsed),
                    Err(e) => {
                        // Stale or corrupt entry; fall through to the network
                        warn!("Failed to parse cached response for {url}: {e}");
                    }
                }
            }
        }

        let body = self.fetch_with_retry(&url).await?;
        let parsed = parse_scoreboard(&body, &url)?;

        // Settled scoreboards can live in cache for a long time; live ones
        // must expire before the next poll.
        let ttl = if parsed.has_live_games() {
            cache_ttl::LIVE_SCOREBOARD_SECONDS
        } else if parsed.all_final() {
            cache_ttl::FINAL_SCOREBOARD_SECONDS
        } else {
            cache_ttl::SCHEDULE_SECONDS
        };
        self.cache.lock().await.put(url, body, ttl);

        Ok(parsed)
    }

    /// GET with exponential backoff on 429/5xx and network-level
    /// timeouts/connection failures, honoring Retry-After when present.
    async fn fetch_with_retry(&self, url: &str) -> Result<String, AppError> {
        info!("Fetching scoreboard from {url}");

        let mut attempt = 0u32;
        let mut backoff = Duration::from_millis(retry::BASE_DELAY_MS);
        let response = loop {
            match self.client.get(url).send().await {
                Ok(resp) => {
                    let status = resp.status();
                    if (status.as_u16() == 429 || status.is_server_error())
                        && attempt < retry::MAX_ATTEMPTS
                    {
                        let retry_after = resp
                            .headers()
                            .get(reqwest::header::RETRY_AFTER)
                            .and_then(|h| h.to_str().ok())
                            .and_then(|s| s.parse::<u64>().ok())
                            .map(Duration::from_secs);
                        let wait = retry_after.unwrap_or(backoff);
                        warn!(
                            "Transient {} from {}. Retrying in {:?} (attempt {}/{})",
                            status,
                            url,
                            wait,
                            attempt + 1,
                            retry::MAX_ATTEMPTS
                        );
                        tokio::time::sleep(wait).await;
                        attempt += 1;
                        backoff = backoff.saturating_mul(2);
                        continue;
                    }
                    break resp;
                }
                Err(e) => {
                    if (e.is_timeout() || e.is_connect()) && attempt < retry::MAX_ATTEMPTS {
                        warn!(
                            "Request error {} for {}. Retrying in {:?} (attempt {}/{})",
                            e,
                            url,
                            backoff,
                            attempt + 1,
                            retry::MAX_ATTEMPTS
                        );
                        tokio::time::sleep(backoff).await;
                        attempt += 1;
                        backoff = backoff.saturating_mul(2);
                        continue;
                    }
                    error!("Request failed for URL {url}: {e}");
                    return if e.is_timeout() {
                        Err(AppError::network_timeout(url))
                    } else if e.is_connect() {
                        Err(AppError::network_connection(url, e.to_string()))
                    } else {
                        Err(AppError::ApiFetch(e))
                    };
                }
            }
        };

        let status = response.status();
        debug!("Response status: {status}");

        if !status.is_success() {
            let status_code = status.as_u16();
            let reason = status.canonical_reason().unwrap_or("Unknown error");
            error!("HTTP {status_code} - {reason} (URL: {url})");

            return Err(match status_code {
                404 => AppError::api_not_found(url),
                429 => AppError::api_rate_limit(reason, url),
                400..=499 => AppError::api_client_error(status_code, reason, url),
                502 | 503 => AppError::api_service_unavailable(status_code, reason, url),
                _ => AppError::api_server_error(status_code, reason, url),
            });
        }

        let body = response.text().await.map_err(AppError::ApiFetch)?;
        debug!("Response length: {} bytes", body.len());
        Ok(body)
    }
}

/// Parses a scoreboard body, distinguishing empty, non-JSON and
/// valid-but-unexpected payloads.
fn parse_scoreboard(body: &str, url: &str) -> Result<ScoreboardResponse, AppError> {
    match serde_json::from_str::<ScoreboardResponse>(body) {
        Ok(parsed) => Ok(parsed),
        Err(e) => {
            error!("Failed to parse scoreboard response: {e} (URL: {url})");
            if body.trim().is_empty() {
                Err(AppError::api_no_data("Response body is empty", url))
            } else if !body.trim_start().starts_with('{') && !body.trim_start().starts_with('[') {
                Err(AppError::api_malformed_json("Response is not valid JSON", url))
            } else {
                Err(AppError::api_unexpected_structure(e.to_string(), url))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_builder_trims_trailing_slash() {
        assert_eq!(
            build_scoreboard_url("https://api.example.com/", 2025, 4),
            "https://api.example.com/v1/scoreboard/2025/4"
        );
        assert_eq!(
            build_scoreboard_url("https://api.example.com", 2025, 18),
            "https://api.example.com/v1/scoreboard/2025/18"
        );
    }

    #[test]
    fn test_parse_scoreboard_error_kinds() {
        let url = "https://api.example.com/v1/scoreboard/2025/1";

        assert!(matches!(
            parse_scoreboard("", url).unwrap_err(),
            AppError::ApiNoData { .. }
        ));
        assert!(matches!(
            parse_scoreboard("<html>oops</html>", url).unwrap_err(),
            AppError::ApiMalformedJson { .. }
        ));
        assert!(matches!(
            parse_scoreboard(r#"{"unexpected": true}"#, url).unwrap_err(),
            AppError::ApiUnexpectedStructure { .. }
        ));
    }

    #[test]
    fn test_client_requires_api_domain() {
        let config = Config {
            api_domain: String::new(),
            log_file_path: None,
            http_timeout_seconds: 30,
        };
        assert!(matches!(
            ScoreboardClient::new(&config).unwrap_err(),
            AppError::Config(_)
        ));
    }
}
