pub mod archive;
pub mod csv;
pub mod document;
pub mod error;
pub mod extract;
#[cfg(feature = "fetch")]
pub mod fetch;
pub mod record;
pub mod round;
pub mod value;

pub use archive::{SeasonSummary, extract_file, list_seasons, parse_archive, parse_season};
pub use csv::write_records;
pub use document::{Document, Element};
pub use error::{CluecardsError, Result};
pub use extract::{episode_from_title, extract_episode, extract_round};
#[cfg(feature = "fetch")]
pub use fetch::{DownloadSummary, EpisodeLink, FetchConfig, download_season, episode_links, fetch_url};
pub use record::{CSV_HEADER, Episode, Record};
pub use round::{Round, RoundKind, locate_rounds};
pub use value::{MISSING_VALUE, NormalizedValue, normalize};
