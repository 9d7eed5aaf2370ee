//! Page retrieval from the archive site.
//!
//! Fetching is deliberately naive: GET with a retry/backoff loop, plus a
//! randomized delay between episode downloads to stay polite. Season pages
//! are scraped for episode links; already-saved episodes are skipped so a
//! season download can be resumed.

use std::fs;
use std::path::Path;
use std::sync::LazyLock;
use std::time::Duration;

use rand::Rng;
use regex::Regex;
use reqwest::Client;
use url::Url;

use crate::archive::season_dir;
use crate::document::Document;
use crate::extract::EPISODE_NUMBER;
use crate::{CluecardsError, Result};

/// Archive site root.
pub const BASE_URL: &str = "http://j-archive.com";

/// An anchor href that points at a game page.
static EPISODE_LINK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(https?://(www\.)?j-archive\.com/)?showgame\.php\?game_id=\d+$").expect("episode link pattern")
});

/// The game id inside a game-page href.
static GAME_ID: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"game_id=(\d+)").expect("game id pattern"));

/// URL of one season's index page.
pub fn season_url(season: u32) -> String {
    format!("{}/showseason.php?season={}", BASE_URL, season)
}

/// URL of one game page.
pub fn game_url(game_id: &str) -> String {
    format!("{}/showgame.php?game_id={}", BASE_URL, game_id)
}

/// HTTP client configuration for fetching archive pages.
#[derive(Debug, Clone)]
pub struct FetchConfig {
    /// Request timeout in seconds.
    pub timeout: u64,
    /// Custom User-Agent string.
    pub user_agent: String,
    /// Retry attempts after a failed request.
    pub retries: u32,
    /// Base backoff in seconds; grows linearly with the attempt number.
    pub backoff_secs: u64,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            timeout: 30,
            user_agent: "Mozilla/5.0 (compatible; Cluecards/1.0; +https://github.com/stormlightlabs/cluecards)"
                .to_string(),
            retries: 3,
            backoff_secs: 2,
        }
    }
}

/// Fetches a page body from a URL, retrying with backoff on failure.
pub async fn fetch_url(url: &str, config: &FetchConfig) -> Result<String> {
    let parsed_url = Url::parse(url).map_err(|e| CluecardsError::InvalidUrl(e.to_string()))?;

    if !matches!(parsed_url.scheme(), "http" | "https") {
        return Err(CluecardsError::InvalidUrl(
            "URL must use an http:// or https:// scheme".to_string(),
        ));
    }

    let client = Client::builder()
        .timeout(Duration::from_secs(config.timeout))
        .build()
        .map_err(CluecardsError::HttpError)?;

    let mut last_err = None;
    for attempt in 0..=config.retries {
        if attempt > 0 {
            tokio::time::sleep(Duration::from_secs(config.backoff_secs * u64::from(attempt))).await;
        }

        let response = client
            .get(parsed_url.clone())
            .header("User-Agent", &config.user_agent)
            .header(
                "Accept",
                "text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8",
            )
            .send()
            .await;

        match response {
            Ok(response) => return Ok(response.text().await?),
            Err(e) if e.is_timeout() => last_err = Some(CluecardsError::Timeout { timeout: config.timeout }),
            Err(e) => last_err = Some(CluecardsError::HttpError(e)),
        }
    }

    Err(last_err.unwrap_or_else(|| CluecardsError::Timeout { timeout: config.timeout }))
}

/// One episode link harvested from a season page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EpisodeLink {
    /// Site game id, used to build the page URL.
    pub game_id: String,
    /// Episode number from the link text, used as the saved file name.
    pub number: String,
}

/// Harvests episode links from a parsed season page, oldest first.
///
/// Season pages list newest episodes first, so the document order is
/// reversed. Links whose text carries no episode number are skipped.
pub fn episode_links(doc: &Document) -> Result<Vec<EpisodeLink>> {
    let mut links = Vec::new();
    for anchor in doc.select("a")? {
        let Some(href) = anchor.attr("href") else { continue };
        if !EPISODE_LINK.is_match(href) {
            continue;
        }
        let Some(game_id) = GAME_ID.captures(href).and_then(|c| c.get(1)) else { continue };
        let text = anchor.normalized_text();
        let Some(number) = EPISODE_NUMBER.captures(&text).and_then(|c| c.get(1)) else { continue };

        links.push(EpisodeLink {
            game_id: game_id.as_str().to_string(),
            number: number.as_str().to_string(),
        });
    }
    links.reverse();
    Ok(links)
}

/// Sleeps 2-6 seconds so episode downloads do not hammer the site.
pub async fn polite_delay() {
    let secs = { rand::rng().random_range(2u64..=6) };
    tokio::time::sleep(Duration::from_secs(secs)).await;
}

/// Outcome of downloading one season.
#[derive(Debug, Default)]
pub struct DownloadSummary {
    pub season: u32,
    /// Episode links found on the season page.
    pub found: usize,
    /// Pages fetched and saved this run.
    pub saved: usize,
    /// Episodes already on disk.
    pub skipped: usize,
    /// Episodes that failed to fetch, with their errors.
    pub failures: Vec<(String, CluecardsError)>,
}

/// Downloads one season's episode pages into the archive layout.
///
/// A failed episode is recorded and skipped; it never aborts the season.
pub async fn download_season(root: &Path, season: u32, config: &FetchConfig) -> Result<DownloadSummary> {
    let dir = season_dir(root, season);
    fs::create_dir_all(&dir)?;

    let page = fetch_url(&season_url(season), config).await?;
    let links = episode_links(&Document::parse(&page))?;

    let mut summary = DownloadSummary { season, found: links.len(), ..Default::default() };
    for link in links {
        let target = dir.join(format!("{}.html", link.number));
        if target.exists() {
            summary.skipped += 1;
            continue;
        }

        match fetch_url(&game_url(&link.game_id), config).await {
            Ok(html) => {
                fs::write(&target, html)?;
                summary.saved += 1;
                polite_delay().await;
            }
            Err(err) => summary.failures.push((link.number, err)),
        }
    }

    Ok(summary)
}
