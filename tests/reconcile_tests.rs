use serde_json::{Value, json};

use nba_scoreboard_relay::error::ScoreboardError;
use nba_scoreboard_relay::model::game::TeamSummary;
use nba_scoreboard_relay::model::scoreboard::{Row, Scoreboard};
use nba_scoreboard_relay::reconcile::reconcile;

fn load_sample() -> Scoreboard {
    let body = std::fs::read_to_string("tests/sample_scoreboard.json").expect("failed to read sample_scoreboard.json");
    Scoreboard::from_json(&body).expect("from_json failed")
}

fn header(game_id: &str, status: Value, time: Value) -> Row {
    vec![Value::Null, Value::Null, json!(game_id), Value::Null, status, Value::Null, time]
}

fn line_score(game_id: &str, team_id: i64, abbr: &str, name: &str, pts: i64) -> Row {
    let mut row = vec![Value::Null; 23];
    row[0] = json!(game_id);
    row[1] = json!(team_id);
    row[2] = json!(abbr);
    row[4] = json!(name);
    row[22] = json!(pts);
    row
}

#[test]
fn pairs_lakers_at_celtics() {
    let headers = vec![header("0022300001", json!(3), json!(""))];
    let scores = vec![
        line_score("0022300001", 1, "LAL", "Lakers", 102),
        line_score("0022300001", 2, "BOS", "Celtics", 108),
    ];

    let games = reconcile(&headers, &scores).unwrap();

    assert_eq!(games.len(), 1);
    let expected = json!({
        "game_id": "0022300001",
        "game_status": 3,
        "away_team": {"team_id": 1, "team_abbreviation": "LAL", "team_name": "Lakers", "pts": 102},
        "home_team": {"team_id": 2, "team_abbreviation": "BOS", "team_name": "Celtics", "pts": 108},
        "game_time": "Final"
    });
    assert_eq!(serde_json::to_value(&games[0]).unwrap(), expected);
}

#[test]
fn first_match_is_away_second_is_home_regardless_of_gaps() {
    let headers = vec![header("100", json!(2), json!("Q3 5:12"))];
    let scores = vec![
        line_score("200", 9, "XXX", "Other", 1),
        line_score("100", 10, "AAA", "Away", 50),
        line_score("200", 11, "YYY", "Other", 2),
        line_score("100", 12, "HHH", "Home", 60),
    ];

    let games = reconcile(&headers, &scores).unwrap();

    assert_eq!(games[0].away_team.as_ref().unwrap().team_abbreviation, json!("AAA"));
    assert_eq!(games[0].home_team.as_ref().unwrap().team_abbreviation, json!("HHH"));
    assert_eq!(games[0].game_time, json!("Q3 5:12"));
}

#[test]
fn output_follows_header_order() {
    let headers = vec![
        header("3", json!(1), json!("7:00 pm ET")),
        header("1", json!(1), json!("7:30 pm ET")),
        header("2", json!(1), json!("8:00 pm ET")),
    ];
    let scores = vec![
        line_score("1", 1, "A", "A", 0),
        line_score("2", 2, "B", "B", 0),
        line_score("3", 3, "C", "C", 0),
    ];

    let ids: Vec<Value> = reconcile(&headers, &scores).unwrap().into_iter().map(|g| g.game_id).collect();

    assert_eq!(ids, vec![json!("3"), json!("1"), json!("2")]);
}

#[test]
fn missing_line_scores_leave_teams_empty() {
    let headers = vec![header("100", json!(1), json!("7:00 pm ET")), header("101", json!(1), json!("9:00 pm ET"))];
    let scores = vec![line_score("101", 1, "SAS", "Spurs", 0)];

    let games = reconcile(&headers, &scores).unwrap();

    assert!(games[0].away_team.is_none());
    assert!(games[0].home_team.is_none());
    assert_eq!(games[1].away_team.as_ref().unwrap().team_name, json!("Spurs"));
    assert!(games[1].home_team.is_none());

    let serialized = serde_json::to_value(&games[0]).unwrap();
    assert_eq!(serialized["home_team"], Value::Null);
    assert_eq!(serialized["away_team"], Value::Null);
}

#[test]
fn extra_line_scores_are_ignored() {
    let headers = vec![header("100", json!(3), json!(""))];
    let scores = vec![
        line_score("100", 1, "AAA", "First", 1),
        line_score("100", 2, "BBB", "Second", 2),
        line_score("100", 3, "CCC", "Third", 3),
    ];

    let games = reconcile(&headers, &scores).unwrap();

    assert_eq!(games[0].away_team.as_ref().unwrap().team_name, json!("First"));
    assert_eq!(games[0].home_team.as_ref().unwrap().team_name, json!("Second"));
}

#[test]
fn blank_game_time_becomes_final() {
    let mut short = header("4", json!(3), Value::Null);
    short.truncate(5);
    let headers = vec![
        header("1", json!(3), json!("")),
        header("2", json!(3), Value::Null),
        short,
        header("3", json!(1), json!("10:30 pm ET")),
    ];

    let times: Vec<Value> = reconcile(&headers, &[]).unwrap().into_iter().map(|g| g.game_time).collect();

    assert_eq!(times, vec![json!("Final"), json!("Final"), json!("Final"), json!("10:30 pm ET")]);
}

#[test]
fn game_ids_match_by_value_not_text() {
    // "100" and 100 are different ids to the provider.
    let headers = vec![header("100", json!(1), json!("7:00 pm ET"))];
    let mut numeric = line_score("100", 1, "AAA", "Numeric", 0);
    numeric[0] = json!(100);
    let games = reconcile(&headers, &[numeric]).unwrap();
    assert!(games[0].away_team.is_none());
}

#[test]
fn short_rows_are_errors_not_panics() {
    let headers = vec![vec![json!("2024-01-15"), json!(1), json!("100")]];
    let err = reconcile(&headers, &[]).unwrap_err();
    assert!(matches!(err, ScoreboardError::MissingColumn { table: "GameHeader", index: 4 }));

    let headers = vec![header("100", json!(3), json!(""))];
    let scores = vec![vec![json!("100"), json!(1), json!("AAA"), Value::Null, json!("Team")]];
    let err = reconcile(&headers, &scores).unwrap_err();
    assert!(matches!(err, ScoreboardError::MissingColumn { table: "LineScore", index: 22 }));

    // A line score without even a game id can't be skipped as "not this game".
    let scores = vec![Vec::new()];
    let err = reconcile(&headers, &scores).unwrap_err();
    assert!(matches!(err, ScoreboardError::MissingColumn { table: "LineScore", index: 0 }));
}

#[test]
fn reconciles_sample_response() {
    let scoreboard = load_sample();
    let games = reconcile(scoreboard.game_header().unwrap(), scoreboard.line_score().unwrap()).unwrap();

    assert_eq!(games.len(), 3);

    let lal_bos = &games[0];
    assert_eq!(lal_bos.game_id, json!("0022300001"));
    assert_eq!(lal_bos.game_time, json!("Final"));
    assert_eq!(
        lal_bos.away_team,
        Some(TeamSummary {
            team_id: json!(1610612747),
            team_abbreviation: json!("LAL"),
            team_name: json!("Lakers"),
            pts: json!(102),
        })
    );
    assert_eq!(lal_bos.home_team.as_ref().unwrap().team_abbreviation, json!("BOS"));

    let live = &games[1];
    assert_eq!(live.game_status, json!(2));
    assert_eq!(live.game_time, json!("8:00 pm ET"));
    assert_eq!(live.away_team.as_ref().unwrap().pts, json!(55));
    assert_eq!(live.home_team.as_ref().unwrap().pts, json!(61));

    // Not started yet: scores are null and passed through as such.
    let upcoming = &games[2];
    assert_eq!(upcoming.away_team.as_ref().unwrap().pts, Value::Null);
    assert_eq!(upcoming.home_team.as_ref().unwrap().team_name, json!("Heat"));
}

#[test]
fn reconcile_is_deterministic() {
    let scoreboard = load_sample();
    let first = reconcile(scoreboard.game_header().unwrap(), scoreboard.line_score().unwrap()).unwrap();
    let second = reconcile(scoreboard.game_header().unwrap(), scoreboard.line_score().unwrap()).unwrap();
    assert_eq!(first, second);
}

#[test]
fn missing_result_set_is_an_error() {
    let scoreboard = Scoreboard::from_json(r#"{"resultSets": [{"name": "GameHeader", "headers": [], "rowSet": []}]}"#).unwrap();
    assert!(scoreboard.game_header().unwrap().is_empty());
    let err = scoreboard.line_score().unwrap_err();
    assert!(matches!(err, ScoreboardError::MissingResultSet { index: 1 }));
}
