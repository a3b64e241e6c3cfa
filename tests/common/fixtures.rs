#![allow(dead_code)]
// tests/common/fixtures.rs
//! Canned API payloads for a small two-race season.

use std::collections::HashMap;

use serde_json::{Value, json};

use super::FakeApi;

fn result(given: &str, family: &str, team: &str, position: &str, points: &str, status: &str) -> Value {
    json!({
        "position": position,
        "points": points,
        "Driver": {"givenName": given, "familyName": family},
        "Constructor": {"name": team},
        "status": status
    })
}

fn race(round: u32, name: &str, date: &str, results: Vec<Value>) -> Value {
    json!({"round": round.to_string(), "raceName": name, "date": date, "Results": results})
}

fn races_page(races: Vec<Value>, total: usize) -> String {
    json!({"MRData": {"total": total.to_string(), "RaceTable": {"season": "2023", "Races": races}}}).to_string()
}

/// Six results over two races, served three per page.
///
/// Bahrain: Verstappen 1/25, Perez 2/18, Norris R/0.
/// Jeddah:  Perez 1/25, Verstappen 2/19, Norris 17/0.
pub fn two_race_season_routes() -> HashMap<String, (u16, String)> {
    let page_one = races_page(
        vec![race(
            1,
            "Bahrain Grand Prix",
            "2023-03-05",
            vec![
                result("Max", "Verstappen", "Red Bull", "1", "25", "Finished"),
                result("Sergio", "Perez", "Red Bull", "2", "18", "Finished"),
                result("Lando", "Norris", "McLaren", "R", "0", "Hydraulics"),
            ],
        )],
        6,
    );
    let page_two = races_page(
        vec![race(
            2,
            "Saudi Arabian Grand Prix",
            "2023-03-19",
            vec![
                result("Sergio", "Perez", "Red Bull", "1", "25", "Finished"),
                result("Max", "Verstappen", "Red Bull", "2", "19", "Finished"),
                result("Lando", "Norris", "McLaren", "17", "0", "+1 Lap"),
            ],
        )],
        6,
    );
    let seasons = json!({"MRData": {"total": "3", "SeasonTable": {"Seasons": [
        {"season": "2021"}, {"season": "2023"}, {"season": "2022"}
    ]}}})
    .to_string();

    HashMap::from([
        ("2023/results.json?limit=3&offset=0".to_string(), (200, page_one)),
        ("2023/results.json?limit=3&offset=3".to_string(), (200, page_two)),
        ("2024/results.json?limit=3&offset=0".to_string(), (200, races_page(vec![], 0))),
        ("seasons.json?limit=3&offset=0".to_string(), (200, seasons)),
    ])
}

pub fn start_two_race_season() -> FakeApi {
    FakeApi::start(two_race_season_routes())
}
