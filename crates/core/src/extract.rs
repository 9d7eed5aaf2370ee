//! Episode extraction: one parsed page in, ordered records out.
//!
//! The round extractor recovers each round's clues from the archive's
//! loosely structured markup; the episode extractor stitches the rounds
//! together in canonical order and stamps every record with the episode
//! fields parsed from the page title. Extraction is a pure function of
//! page content: the same page always yields the same record sequence.

use std::sync::LazyLock;

use regex::Regex;

use crate::document::{Document, Element};
use crate::record::{Episode, Record};
use crate::round::{self, Round, RoundKind};
use crate::value;
use crate::{CluecardsError, Result};

/// Episode number pattern: a `#` followed by 1-4 digits in the page title.
pub(crate) static EPISODE_NUMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"#(\d{1,4})").expect("episode number pattern"));

/// Air date pattern: an ISO `YYYY-MM-DD` date in the page title.
static AIR_DATE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d{4}-\d{2}-\d{2}").expect("air date pattern"));

/// Grid rounds are six categories wide. The column cursor cycles through
/// this width even across empty cells, which still consume a slot.
const GRID_COLUMNS: usize = 6;

/// Suffix pairing a visible clue cell with its hidden response cell.
const RESPONSE_SUFFIX: &str = "_r";

/// Extracts all records from one parsed page.
///
/// Records preserve round order (Standard, Double, Final, Tiebreaker when
/// present) and, within a round, the appearance order of clues.
///
/// # Errors
///
/// Returns [`CluecardsError::NoRoundsFound`] when no round container is
/// present anywhere in the page. Any lesser breakage degrades to empty
/// fields instead of failing.
pub fn extract_episode(doc: &Document) -> Result<Vec<Record>> {
    let episode = episode_from_title(doc);
    let rounds = round::locate_rounds(doc)?;
    if rounds.is_empty() {
        return Err(CluecardsError::NoRoundsFound {
            page: doc.title().unwrap_or_default(),
        });
    }

    let mut records = Vec::new();
    for round in &rounds {
        records.extend(extract_round(round, &episode)?);
    }
    Ok(records)
}

/// Parses the shared episode fields from the page title.
///
/// Both fields default to empty strings when absent.
pub fn episode_from_title(doc: &Document) -> Episode {
    let title = doc.title().unwrap_or_default();
    let number = EPISODE_NUMBER
        .captures(&title)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().to_string())
        .unwrap_or_default();
    let air_date = AIR_DATE
        .find(&title)
        .map(|m| m.as_str().to_string())
        .unwrap_or_default();

    Episode { number, air_date }
}

/// Extracts the ordered records of one located round.
pub fn extract_round(round: &Round<'_>, episode: &Episode) -> Result<Vec<Record>> {
    if round.kind.is_grid() {
        extract_grid_round(round, episode)
    } else {
        Ok(vec![extract_single_clue_round(round, episode)?])
    }
}

/// Grid rounds: categories across the top, clue cells in document order.
///
/// The column cursor advances for every cell, aired or not, so category
/// assignment stays in lockstep with grid position.
fn extract_grid_round(round: &Round<'_>, episode: &Episode) -> Result<Vec<Record>> {
    let categories: Vec<String> = round
        .scope
        .select("td.category_name")?
        .iter()
        .map(Element::normalized_text)
        .collect();

    let mut records = Vec::new();
    let mut column = 0usize;

    for cell in round.scope.select("td.clue")? {
        let visible = visible_clue_text(&cell)?;
        let question = visible.as_ref().map(Element::normalized_text).unwrap_or_default();
        if question.is_empty() {
            // Placeholder cell: no clue aired, but the slot still counts.
            column = (column + 1) % GRID_COLUMNS;
            continue;
        }

        let raw_value = cell
            .select("td[class*='clue_value']")?
            .first()
            .map(Element::normalized_text)
            .unwrap_or_default();
        let normalized = value::normalize(&raw_value);

        let answer = visible
            .as_ref()
            .and_then(clue_response)
            .unwrap_or_default();
        let category = categories.get(column).cloned().unwrap_or_default();

        records.push(Record {
            ep_num: episode.number.clone(),
            air_date: episode.air_date.clone(),
            round_name: round.kind.name().to_string(),
            category,
            value: normalized.value,
            daily_double: normalized.daily_double,
            question,
            answer,
        });

        column = (column + 1) % GRID_COLUMNS;
    }

    Ok(records)
}

/// Finds the clue text element currently "visible" by the archive's
/// styling rule: the first `clue_text` cell without inline `display:none`.
/// Clue cells hold multiple overlapping text nodes for different reveal
/// states.
fn visible_clue_text<'a>(cell: &Element<'a>) -> Result<Option<Element<'a>>> {
    Ok(cell
        .select("td.clue_text")?
        .into_iter()
        .find(|el| el.attr("style").is_none_or(|style| !style.contains("display:none"))))
}

/// Resolves a visible clue's paired hidden response by id convention:
/// the clue's id plus the response suffix, scoped to an ancestor row.
/// Returns the "correct response" emphasis text, or `None`.
fn clue_response(clue: &Element<'_>) -> Option<String> {
    let id = clue.attr("id")?;
    let selector = format!("td[id=\"{}{}\"]", id, RESPONSE_SUFFIX);

    for row in clue.ancestors().into_iter().filter(|el| el.tag_name() == "tr") {
        if let Ok(cells) = row.select(&selector)
            && let Some(response) = cells.first()
            && let Ok(emphases) = response.select("em.correct_response")
            && let Some(emphasis) = emphases.first()
        {
            return Some(emphasis.normalized_text());
        }
    }
    None
}

/// Single-clue rounds: one category, one clue, exactly one record.
///
/// Final rounds read the wager cells out of the auxiliary mouseover
/// fragment; Tiebreakers read their answer from it. The fragment is
/// escaped markup stored in an attribute value, parsed as a secondary
/// micro-document. An absent or unparsable fragment yields empty fields.
fn extract_single_clue_round(round: &Round<'_>, episode: &Episode) -> Result<Record> {
    let scope = &round.scope;
    let category = scope
        .select("td.category_name")?
        .first()
        .map(Element::normalized_text)
        .unwrap_or_default();
    let fragment = mouseover_fragment(scope)?;

    let (question, answer, value) = match round.kind {
        RoundKind::FinalJeopardy => {
            let question = first_text(scope, "td#clue_FJ")?;
            let answer = scope
                .select("td#clue_FJ_r")?
                .first()
                .and_then(|response| {
                    response
                        .select("em.correct_response")
                        .ok()?
                        .first()
                        .map(Element::normalized_text)
                })
                .unwrap_or_default();
            let value = fragment.map(|frag| wager_cells(&frag)).unwrap_or_default();
            (question, answer, value)
        }
        RoundKind::Tiebreaker => {
            let question = first_text(scope, "td#clue_TB")?;
            let answer = fragment
                .and_then(|frag| {
                    frag.select("em")
                        .ok()?
                        .first()
                        .map(Element::normalized_text)
                })
                .unwrap_or_default();
            // Tiebreakers have no wager.
            (question, answer, String::new())
        }
        RoundKind::Jeopardy | RoundKind::DoubleJeopardy => {
            return Err(CluecardsError::HtmlParseError(format!(
                "{} is not a single-clue round",
                round.kind.name()
            )));
        }
    };

    Ok(Record {
        ep_num: episode.number.clone(),
        air_date: episode.air_date.clone(),
        round_name: round.kind.name().to_string(),
        category,
        value,
        daily_double: false,
        question,
        answer,
    })
}

/// Parses the round's auxiliary mouseover fragment, if any.
fn mouseover_fragment(scope: &Element<'_>) -> Result<Option<Document>> {
    Ok(scope
        .select("div[onmouseover]")?
        .first()
        .and_then(|el| el.attr("onmouseover"))
        .map(Document::parse_fragment))
}

/// Comma-joined text of the fragment's table cells, in document order.
fn wager_cells(fragment: &Document) -> String {
    fragment
        .select("td")
        .map(|cells| {
            cells
                .iter()
                .map(Element::normalized_text)
                .collect::<Vec<_>>()
                .join(",")
        })
        .unwrap_or_default()
}

fn first_text(scope: &Element<'_>, selector: &str) -> Result<String> {
    Ok(scope
        .select(selector)?
        .first()
        .map(Element::normalized_text)
        .unwrap_or_default())
}
