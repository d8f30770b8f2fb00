// src/external/mod.rs
//
// Best-effort client for public coding-platform statistics. Every failure
// mode (timeout, non-200, malformed body) degrades to a zero default and a
// warn-level log line; nothing here ever surfaces an error to a handler.

use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;

use crate::config::STATS_FETCH_TIMEOUT_SECS;

/// External platforms we aggregate solved counts from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    LeetCode,
    Gfg,
}

/// Solved-problem stats for one platform profile.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExternalProfile {
    pub solved: i64,
    pub rank: Option<String>,
}

/// Narrow seam around the external stat fetches so handlers can be tested
/// against a fake and the implementation swapped for a caching one later.
#[async_trait]
pub trait StatsProvider: Send + Sync {
    /// Fetches the profile for `username` on `platform`. Must fail soft:
    /// any error returns `ExternalProfile::default()`.
    async fn fetch_profile(&self, platform: Platform, username: &str) -> ExternalProfile;
}

const LEETCODE_STATS_URL: &str = "https://leetcode-stats-api.herokuapp.com";
const GFG_PROFILE_URL: &str = "https://www.geeksforgeeks.org/user";

/// Shape of the LeetCode stats proxy response (fields we care about).
#[derive(Debug, Deserialize)]
struct LeetCodeStats {
    #[serde(default)]
    status: String,
    #[serde(rename = "totalSolved", default)]
    total_solved: i64,
    #[serde(default)]
    ranking: Option<i64>,
}

pub struct HttpStatsProvider {
    client: reqwest::Client,
}

impl HttpStatsProvider {
    pub fn new() -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(STATS_FETCH_TIMEOUT_SECS))
            .user_agent("Mozilla/5.0")
            .build()
            .unwrap_or_default();
        Self { client }
    }

    async fn fetch_leetcode(&self, username: &str) -> Option<ExternalProfile> {
        let url = format!("{}/{}", LEETCODE_STATS_URL, username);
        let resp = self.client.get(&url).send().await.ok()?;
        if !resp.status().is_success() {
            return None;
        }
        let stats: LeetCodeStats = resp.json().await.ok()?;
        if stats.status != "success" {
            return None;
        }
        Some(ExternalProfile {
            solved: stats.total_solved,
            rank: stats.ranking.map(|r| r.to_string()),
        })
    }

    /// GFG publishes no stats API; the original tracker scraped the profile
    /// page's score card, and we do the same with a plain marker scan.
    async fn fetch_gfg(&self, username: &str) -> Option<ExternalProfile> {
        let url = format!("{}/{}/", GFG_PROFILE_URL, username);
        let resp = self.client.get(&url).send().await.ok()?;
        if !resp.status().is_success() {
            return None;
        }
        let body = resp.text().await.ok()?;
        let solved = scrape_solved_count(&body)?;
        Some(ExternalProfile {
            solved,
            rank: None,
        })
    }
}

impl Default for HttpStatsProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl StatsProvider for HttpStatsProvider {
    async fn fetch_profile(&self, platform: Platform, username: &str) -> ExternalProfile {
        if username.is_empty() {
            return ExternalProfile::default();
        }

        let fetched = match platform {
            Platform::LeetCode => self.fetch_leetcode(username).await,
            Platform::Gfg => self.fetch_gfg(username).await,
        };

        fetched.unwrap_or_else(|| {
            tracing::warn!(
                "External stats fetch failed for {:?} user '{}', defaulting to 0",
                platform,
                username
            );
            ExternalProfile::default()
        })
    }
}

/// Pulls the solved count out of a GFG profile page by scanning for the
/// score-card marker and taking the first integer after it.
fn scrape_solved_count(html: &str) -> Option<i64> {
    let idx = html.find("scoreCard_head_left--score__")?;
    // The class name itself carries a hashed suffix with digits, so skip past
    // the closing '>' of the tag before scanning for the count.
    let tail = &html[idx..];
    let gt = tail.find('>')?;
    let digits: String = tail[gt + 1..]
        .chars()
        .skip_while(|c| !c.is_ascii_digit())
        .take_while(|c| c.is_ascii_digit())
        .collect();
    digits.parse().ok()
}
