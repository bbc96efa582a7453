#![cfg(feature = "serde")]

use helm_nav::{Cell, CommanderConfig, Goal, Vec2};

#[test]
fn goals_roundtrip_via_serde() {
    let goals = [
        Goal::MoveTo {
            target: Vec2::new(3.5, -2.0),
            arrival_distance: 0.1,
        },
        Goal::RotateTo {
            target: 1.25,
            precision: 0.01,
        },
    ];
    for goal in goals {
        let json = serde_json::to_string(&goal).expect("serialize goal");
        let back: Goal = serde_json::from_str(&json).expect("deserialize goal");
        assert_eq!(goal, back);
    }
}

#[test]
fn cells_roundtrip_via_serde() {
    let cell = Cell::new(-7, 42);
    let json = serde_json::to_string(&cell).expect("serialize cell");
    let back: Cell = serde_json::from_str(&json).expect("deserialize cell");
    assert_eq!(cell, back);
}

#[test]
fn config_defaults_fill_an_empty_document() {
    let config: CommanderConfig = serde_json::from_str("{}").expect("defaults apply");
    assert_eq!(config, CommanderConfig::default());
}

#[test]
fn config_fields_override_defaults_individually() {
    let config: CommanderConfig =
        serde_json::from_str(r#"{"max_search_radius": 5}"#).expect("partial config");
    assert_eq!(config.max_search_radius, 5);
    assert_eq!(
        config.arrival_distance,
        CommanderConfig::default().arrival_distance
    );
}
