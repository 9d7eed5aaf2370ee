//! On-disk season archive layout and batch parsing.
//!
//! Downloaded pages live under `{root}/season {n}/{epnum}.html`; parsed
//! output lands in one CSV per season. Episode extraction fans out across
//! a season in parallel, but results are collected in input order and
//! written by a single writer, so output row order is reproducible.

use std::fs;
use std::io::BufWriter;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use rayon::prelude::*;
use regex::Regex;

use crate::document::Document;
use crate::record::Record;
use crate::{CluecardsError, Result, csv, extract};

/// First run of digits in a directory name identifies the season.
static SEASON_NUMBER: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\d+").expect("season number pattern"));

/// Directory holding one season's downloaded episode pages.
pub fn season_dir(root: &Path, season: u32) -> PathBuf {
    root.join(format!("season {}", season))
}

/// Output CSV path for one season.
pub fn season_csv_path(out_dir: &Path, season: u32) -> PathBuf {
    out_dir.join(format!("j-archive-season-{}.csv", season))
}

/// Lists the season numbers present under an archive root, ascending.
pub fn list_seasons(root: &Path) -> Result<Vec<u32>> {
    let mut seasons = Vec::new();
    for entry in fs::read_dir(root)? {
        let entry = entry?;
        if !entry.file_type()?.is_dir() {
            continue;
        }
        let name = entry.file_name();
        let name = name.to_string_lossy();
        if let Some(m) = SEASON_NUMBER.find(&name)
            && let Ok(season) = m.as_str().parse()
        {
            seasons.push(season);
        }
    }
    seasons.sort_unstable();
    Ok(seasons)
}

/// Lists a season's episode files in name order.
pub fn list_episode_files(season_dir: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in fs::read_dir(season_dir)? {
        let entry = entry?;
        if entry.file_type()?.is_file() {
            files.push(entry.path());
        }
    }
    files.sort();
    Ok(files)
}

/// Reads one saved episode page and extracts its records.
pub fn extract_file(path: &Path) -> Result<Vec<Record>> {
    if !path.exists() {
        return Err(CluecardsError::FileNotFound(path.to_path_buf()));
    }
    let html = fs::read_to_string(path)?;
    extract::extract_episode(&Document::parse(&html))
}

/// Outcome of parsing one season.
#[derive(Debug, Default)]
pub struct SeasonSummary {
    pub season: u32,
    /// Episode files seen, parsed or not.
    pub episodes: usize,
    /// Records written to the season CSV.
    pub records: usize,
    /// Episodes that failed, with their errors. Failures never abort the
    /// rest of the season.
    pub failures: Vec<(PathBuf, CluecardsError)>,
}

/// Parses every episode of one season and writes the season CSV.
///
/// Episodes are extracted in parallel with no shared state; the ordered
/// collect keeps output rows in input episode order.
pub fn parse_season(root: &Path, out_dir: &Path, season: u32) -> Result<SeasonSummary> {
    let dir = season_dir(root, season);
    let files = list_episode_files(&dir)?;

    let results: Vec<(PathBuf, Result<Vec<Record>>)> = files
        .par_iter()
        .map(|path| (path.clone(), extract_file(path)))
        .collect();

    let mut summary = SeasonSummary { season, episodes: files.len(), ..Default::default() };
    let mut rows = Vec::new();
    for (path, result) in results {
        match result {
            Ok(records) => {
                summary.records += records.len();
                rows.extend(records);
            }
            Err(err) => summary.failures.push((path, err)),
        }
    }

    fs::create_dir_all(out_dir)?;
    let file = fs::File::create(season_csv_path(out_dir, season))?;
    csv::write_records(BufWriter::new(file), &rows)?;

    Ok(summary)
}

/// Parses every season found under the archive root, seasons in parallel.
pub fn parse_archive(root: &Path, out_dir: &Path) -> Result<Vec<SeasonSummary>> {
    let seasons = list_seasons(root)?;
    seasons
        .par_iter()
        .map(|&season| parse_season(root, out_dir, season))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const EPISODE_HTML: &str = r#"
        <html><head><title>Show #9000, aired 2024-05-01</title></head><body>
        <div id="jeopardy_round">
          <table><tr>
            <td class="category_name">CAT</td>
          </tr><tr>
            <td class="clue"><table><tr>
              <td class="clue_value">$200</td>
              <td class="clue_text" id="clue_J_1_1">Question one</td>
            </tr></table></td>
          </tr></table>
        </div>
        </body></html>
    "#;

    const NO_ROUNDS_HTML: &str = "<html><head><title>#1</title></head><body></body></html>";

    fn seed_archive(root: &Path) {
        let dir = season_dir(root, 40);
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("9000.html"), EPISODE_HTML).unwrap();
        fs::write(dir.join("9001.html"), NO_ROUNDS_HTML).unwrap();
    }

    #[test]
    fn test_layout_paths() {
        let root = Path::new("archive");
        assert_eq!(season_dir(root, 7), Path::new("archive/season 7"));
        assert_eq!(
            season_csv_path(Path::new("out"), 7),
            Path::new("out/j-archive-season-7.csv")
        );
    }

    #[test]
    fn test_list_seasons() {
        let tmp = TempDir::new().unwrap();
        fs::create_dir(tmp.path().join("season 12")).unwrap();
        fs::create_dir(tmp.path().join("season 3")).unwrap();
        fs::create_dir(tmp.path().join("notes")).unwrap();
        fs::write(tmp.path().join("stray 9"), "").unwrap();

        let seasons = list_seasons(tmp.path()).unwrap();
        assert_eq!(seasons, vec![3, 12]);
    }

    #[test]
    fn test_extract_file_missing() {
        let result = extract_file(Path::new("/nonexistent/9000.html"));
        assert!(matches!(result, Err(CluecardsError::FileNotFound(_))));
    }

    #[test]
    fn test_parse_season_writes_csv_and_records_failures() {
        let tmp = TempDir::new().unwrap();
        let out = tmp.path().join("csv");
        seed_archive(tmp.path());

        let summary = parse_season(tmp.path(), &out, 40).unwrap();
        assert_eq!(summary.episodes, 2);
        assert_eq!(summary.records, 1);
        assert_eq!(summary.failures.len(), 1);
        assert!(matches!(
            summary.failures[0].1,
            CluecardsError::NoRoundsFound { .. }
        ));

        let csv = fs::read_to_string(season_csv_path(&out, 40)).unwrap();
        let rows: Vec<&str> = csv.lines().collect();
        assert_eq!(rows.len(), 2);
        assert!(rows[0].starts_with("epNum,airDate"));
        assert!(rows[1].starts_with("9000,2024-05-01,Jeopardy,CAT,200,false"));
    }

    #[test]
    fn test_parse_archive_covers_all_seasons() {
        let tmp = TempDir::new().unwrap();
        let out = tmp.path().join("csv");
        seed_archive(tmp.path());
        let dir = season_dir(tmp.path(), 41);
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("9100.html"), EPISODE_HTML).unwrap();

        let summaries = parse_archive(tmp.path(), &out).unwrap();
        assert_eq!(summaries.len(), 2);
        assert!(season_csv_path(&out, 40).exists());
        assert!(season_csv_path(&out, 41).exists());
    }
}
