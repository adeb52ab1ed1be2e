//! Share text, clue and pool helper tests

mod common;

use std::collections::HashSet;

use chrono::NaiveDate;
use common::{fixture_pool, pool_country};
use geodle::puzzle::{
    format_population, result_message, share_text, CandidatePool, Clues, GameState, PuzzleConfig,
    ShareGlyph,
};

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 10, 17).unwrap()
}

fn play(target: &str, names: &[&str]) -> GameState {
    let pool = fixture_pool();
    let mut game = GameState::new(pool_country(&pool, target), &PuzzleConfig::default());
    for name in names {
        game.submit_guess(&pool_country(&pool, name));
    }
    game
}

#[test]
fn test_share_text_for_win() {
    // Japan: far, other continent. Turkey: far, Europe first. Germany: close.
    let game = play("France", &["Japan", "Turkey", "Germany", "France"]);
    let text = share_text(&game, today()).unwrap();
    assert_eq!(
        text,
        "🌍 Geodle 10/17/2026\n🟥🟧🟨🟩 4/6\n↖️↖️↙️🎯\n\ngeodle.app"
    );
}

#[test]
fn test_share_text_for_loss() {
    let game = play(
        "France",
        &["Germany", "Spain", "Italy", "Poland", "Japan", "Brazil"],
    );
    let text = share_text(&game, NaiveDate::from_ymd_opt(2026, 1, 5).unwrap()).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines[0], "🌍 Geodle 1/5/2026");
    assert!(lines[1].ends_with(" X/6"));
    assert!(lines[1].starts_with("🟨🟨🟨"));
    assert_eq!(lines[3], "");
    assert_eq!(lines[4], "geodle.app");
}

#[test]
fn test_no_share_text_while_playing() {
    let game = play("France", &["Germany"]);
    assert!(share_text(&game, today()).is_none());
    assert!(result_message(&game).is_none());
}

#[test]
fn test_glyph_classification() {
    let pool = fixture_pool();
    let target = pool_country(&pool, "France");
    let game = play("France", &["Brazil", "Egypt", "Switzerland"]);
    let glyphs: Vec<ShareGlyph> = game
        .guesses()
        .iter()
        .map(|g| ShareGlyph::classify(g, &target, 1000.0))
        .collect();
    assert_eq!(
        glyphs,
        vec![ShareGlyph::Far, ShareGlyph::Far, ShareGlyph::Close]
    );
}

#[test]
fn test_result_messages() {
    let won = play("France", &["Germany", "France"]);
    assert_eq!(result_message(&won).unwrap(), "🎉 Found it in 2!");

    let lost = play(
        "France",
        &["Germany", "Spain", "Italy", "Poland", "Japan", "Brazil"],
    );
    assert_eq!(result_message(&lost).unwrap(), "The answer was 🇫🇷 France");
}

#[test]
fn test_population_formatting() {
    assert_eq!(format_population(1_380_004_385), "1.4B");
    assert_eq!(format_population(67_391_582), "67.4M");
    assert_eq!(format_population(632_275), "632K");
    assert_eq!(format_population(451), "451");
}

#[test]
fn test_clues() {
    let pool = fixture_pool();
    let clues = Clues::for_target(&pool_country(&pool, "Turkey"));
    assert_eq!(clues.continent, "Europe");
    assert_eq!(clues.population, "84.3M");
    assert_eq!(clues.first_letter, Some('T'));
}

#[test]
fn test_pool_filters_and_keeps_order() {
    let pool = fixture_pool();
    assert_eq!(pool.len(), 14);
    assert!(pool.find_by_name("Vatican City").is_none());
    assert!(pool.find_by_name("Bouvet Island").is_none());
    assert_eq!(pool.get(0).unwrap().name, "France");
    assert_eq!(pool.get(2).unwrap().name, "Spain");
    assert_eq!(pool.get(0).unwrap().capital, vec!["Paris"]);
}

#[test]
fn test_pool_rejects_missing_coordinates() {
    let json = r#"[
        {"name":{"common":"Nowhere"},"cca2":"NW","region":"Europe","population":500000,"latlng":[],"continents":["Europe"]},
        {"name":{"common":"Halfway"},"cca2":"HW","region":"Europe","population":500000,"latlng":[10.0],"continents":["Europe"]},
        {"name":{"common":"Somewhere"},"cca2":"SW","region":"Europe","population":500000,"latlng":[10.0,20.0],"continents":["Europe"]},
        {"name":{"common":"Threshold"},"cca2":"TH","region":"Europe","population":100000,"latlng":[1.0,2.0],"continents":["Europe"]}
    ]"#;
    let pool = CandidatePool::from_json(json, 100_000).unwrap();
    assert_eq!(pool.len(), 1);
    assert_eq!(pool.get(0).unwrap().name, "Somewhere");
    assert!(pool.get(0).unwrap().capital.is_empty());
}

#[test]
fn test_pool_skips_records_with_null_fields() {
    let json = r#"[
        {"name":{"common":"Somewhere"},"cca2":"SW","region":"Europe","population":500000,"latlng":[10.0,20.0],"continents":["Europe"]},
        {"name":{"common":"Nowhere"},"cca2":"NW","region":"Europe","population":500000,"latlng":null,"continents":["Europe"]},
        {"name":{"common":"Uncounted"},"cca2":"UC","region":"Europe","population":null,"latlng":[1.0,2.0],"continents":["Europe"]},
        {"name":{"common":"Unplaced"},"cca2":null,"region":null,"subregion":null,"population":500000,"latlng":[3.0,4.0],"area":null,"capital":null,"continents":null}
    ]"#;
    let pool = CandidatePool::from_json(json, 100_000).unwrap();
    let names: Vec<&str> = pool.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["Somewhere", "Unplaced"]);

    let unplaced = pool.get(1).unwrap();
    assert!(unplaced.continents.is_empty());
    assert!(unplaced.region.is_empty());
    assert!(unplaced.capital.is_empty());
}

#[test]
fn test_suggestions() {
    let pool = fixture_pool();
    let none = HashSet::new();

    assert!(pool.suggest("a", &none).is_empty());

    let names: Vec<&str> = pool.suggest("AN", &none).iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["France", "Germany", "Poland", "Switzerland", "Japan"]);

    let guessed: HashSet<&str> = ["France", "Poland"].into_iter().collect();
    let names: Vec<&str> = pool
        .suggest("an", &guessed)
        .iter()
        .map(|c| c.name.as_str())
        .collect();
    assert_eq!(names, vec!["Germany", "Switzerland", "Japan", "Canada"]);
}

#[test]
fn test_resolve_input() {
    let pool = fixture_pool();
    assert_eq!(pool.resolve_input("france").unwrap().name, "France");
    assert_eq!(pool.resolve_input("  Japan ").unwrap().name, "Japan");
    assert!(pool.resolve_input("Fran").is_none());
}

#[test]
fn test_flag_emoji() {
    let pool = fixture_pool();
    assert_eq!(pool_country(&pool, "Japan").flag_emoji(), "🇯🇵");
}
