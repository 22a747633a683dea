//! HTTP client with automatic rate limiting and retry logic
//!
//! Keeps request pacing and retry handling out of the provider adapter.

use super::retry_policy::{is_retryable_error, RateLimitInfo, RetryPolicy};
use crate::shared::errors::{AppError, AppResult};
use governor::{Quota, RateLimiter as GovernorRateLimiter};
use reqwest::{Client, Response};
use std::num::NonZeroU32;
use std::time::Duration;
use tokio::time::sleep;

type DirectRateLimiter = GovernorRateLimiter<
    governor::state::direct::NotKeyed,
    governor::state::InMemoryState,
    governor::clock::DefaultClock,
    governor::middleware::NoOpMiddleware,
>;

/// HTTP client that handles rate limiting and retries for one provider
pub struct RateLimitClient {
    client: Client,
    rate_limiter: DirectRateLimiter,
    retry_policy: RetryPolicy,
    user_agent: String,
    provider_name: String,
}

impl RateLimitClient {
    /// Create a new client for the OMDb API
    pub fn for_omdb() -> Self {
        Self::new(
            "OMDb",
            RetryPolicy::omdb(),
            // OMDb free tier budgets by day; 4 req/sec with a small burst
            // keeps search enrichment fan-outs from spiking.
            Self::create_rate_limiter(4.0, 8),
            "cinescope/0.1".to_string(),
        )
    }

    /// Create a rate limiter with specified requests per second and burst capacity
    fn create_rate_limiter(requests_per_second: f64, burst_size: u32) -> DirectRateLimiter {
        let duration = if requests_per_second > 0.0 {
            Duration::from_secs_f64(1.0 / requests_per_second)
        } else {
            Duration::MAX // Effectively disable if rate is 0
        };

        let burst = NonZeroU32::new(burst_size.max(1)).unwrap();
        let quota = Quota::with_period(duration).unwrap().allow_burst(burst);

        GovernorRateLimiter::direct(quota)
    }

    /// Create a custom client
    pub fn new(
        provider_name: &str,
        retry_policy: RetryPolicy,
        rate_limiter: DirectRateLimiter,
        user_agent: String,
    ) -> Self {
        Self {
            client: Client::new(),
            rate_limiter,
            retry_policy,
            user_agent,
            provider_name: provider_name.to_string(),
        }
    }

    /// Make a GET request with rate limiting and retries
    pub async fn get<T>(&self, url: &str) -> AppResult<T>
    where
        T: serde::de::DeserializeOwned,
    {
        let mut last_error = None;

        for attempt in 0..=self.retry_policy.max_retries {
            // Wait for rate limiter before attempting request
            self.rate_limiter.until_ready().await;

            match self.send_request(url).await {
                Ok(response) => {
                    if response.status() == 429 {
                        let rate_limit_info = RateLimitInfo::from_headers(response.headers());

                        if attempt < self.retry_policy.max_retries {
                            let delay = self.calculate_retry_delay(attempt, &rate_limit_info);
                            log::warn!(
                                "{} API rate limited (attempt {}/{}). Waiting {:?} before retry.",
                                self.provider_name,
                                attempt + 1,
                                self.retry_policy.max_retries + 1,
                                delay
                            );
                            sleep(delay).await;
                            continue;
                        } else {
                            return Err(AppError::RateLimitError(format!(
                                "{} API rate limit exceeded after {} attempts",
                                self.provider_name,
                                self.retry_policy.max_retries + 1
                            )));
                        }
                    }

                    if !response.status().is_success() {
                        let error_msg = format!(
                            "{} API returned error: {}",
                            self.provider_name,
                            response.status()
                        );

                        // Only retry server errors
                        if response.status().is_server_error()
                            && attempt < self.retry_policy.max_retries
                        {
                            let delay = self.retry_policy.calculate_delay(attempt, None);
                            log::warn!(
                                "{} (attempt {}/{}). Retrying in {:?}",
                                error_msg,
                                attempt + 1,
                                self.retry_policy.max_retries + 1,
                                delay
                            );
                            sleep(delay).await;
                            continue;
                        } else {
                            return Err(AppError::ApiError(error_msg));
                        }
                    }

                    return self.parse_response(response).await;
                }
                Err(e) => {
                    let retryable = is_retryable_error(&e);
                    last_error = Some(AppError::ApiError(e.to_string()));

                    if retryable && attempt < self.retry_policy.max_retries {
                        let delay = self.retry_policy.calculate_delay(attempt, None);
                        log::warn!(
                            "{} API request failed (attempt {}/{}): {}. Retrying in {:?}",
                            self.provider_name,
                            attempt + 1,
                            self.retry_policy.max_retries + 1,
                            e,
                            delay
                        );
                        sleep(delay).await;
                        continue;
                    } else {
                        return Err(AppError::ExternalServiceError(format!(
                            "{} API request failed: {}",
                            self.provider_name, e
                        )));
                    }
                }
            }
        }

        Err(AppError::ApiError(format!(
            "{} API request failed after {} attempts: {}",
            self.provider_name,
            self.retry_policy.max_retries + 1,
            last_error.map_or_else(|| "Unknown error".to_string(), |e| e.to_string())
        )))
    }

    async fn send_request(&self, url: &str) -> Result<Response, reqwest::Error> {
        self.client
            .get(url)
            .header("User-Agent", &self.user_agent)
            .header("Accept", "application/json")
            .send()
            .await
    }

    async fn parse_response<T>(&self, response: Response) -> AppResult<T>
    where
        T: serde::de::DeserializeOwned,
    {
        let response_text = response.text().await.map_err(|e| {
            AppError::SerializationError(format!(
                "Failed to read {} response: {}",
                self.provider_name, e
            ))
        })?;

        serde_json::from_str(&response_text).map_err(|e| {
            AppError::SerializationError(format!(
                "Failed to parse {} response: {}. Response: {}",
                self.provider_name,
                e,
                if response_text.len() > 200 {
                    format!("{}...", &response_text[..200])
                } else {
                    response_text
                }
            ))
        })
    }

    /// Calculate delay for retry based on rate limit info and policy
    fn calculate_retry_delay(&self, attempt: u32, rate_limit_info: &RateLimitInfo) -> Duration {
        // Use server-provided delay if available
        if let Some(server_delay) = rate_limit_info.recommended_delay() {
            return server_delay.min(self.retry_policy.max_delay);
        }

        self.retry_policy.calculate_delay(attempt, None)
    }

    /// Check if a request can be made now (for testing/debugging)
    pub fn can_make_request_now(&self) -> bool {
        self.rate_limiter.check().is_ok()
    }

    /// Get provider name
    pub fn provider_name(&self) -> &str {
        &self.provider_name
    }
}
