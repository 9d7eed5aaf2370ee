//! Library API integration tests
use cluecards_core::*;

fn get_fixture_path(name: &str) -> String {
    format!("../../tests/fixtures/{}", name)
}

fn load_fixture(name: &str) -> Document {
    let html = std::fs::read_to_string(get_fixture_path(name)).expect("fixture should exist");
    Document::parse(&html)
}

#[test]
fn test_full_episode() {
    let doc = load_fixture("episode_full.html");
    let records = extract_episode(&doc).expect("should extract");

    // Six standard-round cells with one empty placeholder, one double
    // round clue, one final clue.
    assert_eq!(records.len(), 7);
    assert!(records.iter().all(|r| r.ep_num == "9000"));
    assert!(records.iter().all(|r| r.air_date == "2024-05-01"));

    let round_names: Vec<&str> = records.iter().map(|r| r.round_name.as_str()).collect();
    assert_eq!(
        round_names,
        vec![
            "Jeopardy",
            "Jeopardy",
            "Jeopardy",
            "Jeopardy",
            "Jeopardy",
            "Double Jeopardy",
            "Final Jeopardy",
        ]
    );
}

#[test]
fn test_full_episode_daily_double_lands_in_third_column() {
    let doc = load_fixture("episode_full.html");
    let records = extract_episode(&doc).expect("should extract");

    // The second grid cell is an empty placeholder; the daily double in
    // the third cell must still be assigned the third category.
    let dd = records.iter().find(|r| r.daily_double).expect("one daily double");
    assert_eq!(dd.category, "5-LETTER WORDS");
    assert_eq!(dd.value, "1000");
    assert_eq!(dd.answer, "brook");
}

#[test]
fn test_full_episode_final_wagers() {
    let doc = load_fixture("episode_full.html");
    let records = extract_episode(&doc).expect("should extract");

    let last = records.last().unwrap();
    assert_eq!(last.round_name, "Final Jeopardy");
    assert_eq!(last.category, "WORLD CAPITALS");
    assert_eq!(last.answer, "Istanbul");
    assert_eq!(last.value, "Alice,$5,000,Bob,$12,001");
    assert!(!last.daily_double);
}

#[test]
fn test_standard_only_episode() {
    let doc = load_fixture("episode_standard_only.html");
    let rounds = locate_rounds(&doc).unwrap();
    assert_eq!(rounds.len(), 1);
    assert_eq!(rounds[0].kind, RoundKind::Jeopardy);

    let records = extract_episode(&doc).expect("should extract");
    assert_eq!(records.len(), 2);
    assert!(records.iter().all(|r| r.round_name == "Jeopardy"));
}

#[test]
fn test_tiebreaker_episode() {
    let doc = load_fixture("episode_tiebreaker.html");
    let records = extract_episode(&doc).expect("should extract");

    assert_eq!(records.len(), 2);
    assert_eq!(records[0].round_name, "Final Jeopardy");
    assert_eq!(records[0].answer, "the Mayflower");
    assert_eq!(records[1].round_name, "Tiebreaker");
    assert_eq!(records[1].category, "RIVERS");
    assert_eq!(records[1].answer, "the Nile");
    assert_eq!(records[1].value, "");
    assert!(records.iter().all(|r| !r.daily_double));
}

#[test]
fn test_no_rounds_episode() {
    let doc = load_fixture("no_rounds.html");
    let result = extract_episode(&doc);
    assert!(matches!(result, Err(CluecardsError::NoRoundsFound { .. })));
}

#[test]
fn test_extraction_is_deterministic() {
    let html = std::fs::read_to_string(get_fixture_path("episode_full.html")).unwrap();
    let first = extract_episode(&Document::parse(&html)).unwrap();
    let second = extract_episode(&Document::parse(&html)).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_csv_round_trip() {
    let doc = load_fixture("episode_full.html");
    let records = extract_episode(&doc).expect("should extract");

    let mut buf = Vec::new();
    write_records(&mut buf, &records).unwrap();
    let out = String::from_utf8(buf).unwrap();
    let rows: Vec<&str> = out.lines().collect();

    assert_eq!(rows[0], CSV_HEADER.join(","));
    assert_eq!(rows.len(), records.len() + 1);
    // The final wager field embeds commas, so it must be quoted.
    assert!(rows.last().unwrap().contains("\"Alice,$5,000,Bob,$12,001\""));
}
