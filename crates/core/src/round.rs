//! Round kinds and round location within a page.
//!
//! The archive marks each round with a well-known container id. Standard
//! and Double rounds each have their own container; Final and Tiebreaker
//! rounds share one container and are distinguished by position among its
//! `final_round` blocks.

use crate::document::{Document, Element};
use crate::Result;

/// The four round kinds, in canonical order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundKind {
    Jeopardy,
    DoubleJeopardy,
    FinalJeopardy,
    Tiebreaker,
}

impl RoundKind {
    /// The round name as it appears in CSV output.
    pub fn name(self) -> &'static str {
        match self {
            RoundKind::Jeopardy => "Jeopardy",
            RoundKind::DoubleJeopardy => "Double Jeopardy",
            RoundKind::FinalJeopardy => "Final Jeopardy",
            RoundKind::Tiebreaker => "Tiebreaker",
        }
    }

    /// Whether clues in this round are laid out on the category grid.
    ///
    /// Grid rounds share one set of extraction rules; Final and Tiebreaker
    /// are single-clue rounds with a different rule set.
    pub fn is_grid(self) -> bool {
        matches!(self, RoundKind::Jeopardy | RoundKind::DoubleJeopardy)
    }
}

/// A located round: its kind plus the page subtree scoping its clues.
pub struct Round<'a> {
    pub kind: RoundKind,
    pub scope: Element<'a>,
}

/// Locates the rounds present in a page, in canonical order.
///
/// The Final container's first `final_round` block scopes Final Jeopardy;
/// a second block, when present, is a Tiebreaker. An empty result means the
/// page has no recognizable round at all; the caller treats that as a
/// failed episode.
pub fn locate_rounds<'a>(doc: &'a Document) -> Result<Vec<Round<'a>>> {
    let mut rounds = Vec::new();

    if let Some(scope) = doc.select("#jeopardy_round")?.into_iter().next() {
        rounds.push(Round { kind: RoundKind::Jeopardy, scope });
    }
    if let Some(scope) = doc.select("#double_jeopardy_round")?.into_iter().next() {
        rounds.push(Round { kind: RoundKind::DoubleJeopardy, scope });
    }

    let mut finals = doc.select("#final_jeopardy_round .final_round")?.into_iter();
    if let Some(scope) = finals.next() {
        rounds.push(Round { kind: RoundKind::FinalJeopardy, scope });
    }
    if let Some(scope) = finals.next() {
        rounds.push(Round { kind: RoundKind::Tiebreaker, scope });
    }

    Ok(rounds)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_names() {
        assert_eq!(RoundKind::Jeopardy.name(), "Jeopardy");
        assert_eq!(RoundKind::DoubleJeopardy.name(), "Double Jeopardy");
        assert_eq!(RoundKind::FinalJeopardy.name(), "Final Jeopardy");
        assert_eq!(RoundKind::Tiebreaker.name(), "Tiebreaker");
    }

    #[test]
    fn test_grid_rounds() {
        assert!(RoundKind::Jeopardy.is_grid());
        assert!(RoundKind::DoubleJeopardy.is_grid());
        assert!(!RoundKind::FinalJeopardy.is_grid());
        assert!(!RoundKind::Tiebreaker.is_grid());
    }

    #[test]
    fn test_locate_standard_only() {
        let doc = Document::parse(r#"<div id="jeopardy_round"></div>"#);
        let rounds = locate_rounds(&doc).unwrap();
        assert_eq!(rounds.len(), 1);
        assert_eq!(rounds[0].kind, RoundKind::Jeopardy);
    }

    #[test]
    fn test_locate_all_four() {
        let html = r#"
            <div id="jeopardy_round"></div>
            <div id="double_jeopardy_round"></div>
            <div id="final_jeopardy_round">
                <table class="final_round"></table>
                <table class="final_round"></table>
            </div>
        "#;
        let doc = Document::parse(html);
        let kinds: Vec<RoundKind> = locate_rounds(&doc).unwrap().iter().map(|r| r.kind).collect();
        assert_eq!(
            kinds,
            vec![
                RoundKind::Jeopardy,
                RoundKind::DoubleJeopardy,
                RoundKind::FinalJeopardy,
                RoundKind::Tiebreaker,
            ]
        );
    }

    #[test]
    fn test_single_final_block_is_not_a_tiebreaker() {
        let html = r#"
            <div id="final_jeopardy_round"><table class="final_round"></table></div>
        "#;
        let doc = Document::parse(html);
        let rounds = locate_rounds(&doc).unwrap();
        assert_eq!(rounds.len(), 1);
        assert_eq!(rounds[0].kind, RoundKind::FinalJeopardy);
    }

    #[test]
    fn test_locate_nothing() {
        let doc = Document::parse("<html><body><p>not a game page</p></body></html>");
        assert!(locate_rounds(&doc).unwrap().is_empty());
    }
}
