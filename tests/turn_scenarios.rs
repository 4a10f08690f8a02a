//! Whole-turn scenarios driven through MatchState

use camp_warden::command::{ActionCode, Command};
use camp_warden::core::config::WardenConfig;
use camp_warden::core::types::EntityId;
use camp_warden::entity::{EntityRecord, EntityType, ThreatFor, Velocity};
use camp_warden::simulation::{decide_turn, BaseStatus, MatchState, TurnSnapshot};
use camp_warden::spatial::Position;

fn hero(id: i32, x: i32, y: i32) -> EntityRecord {
    EntityRecord::hero(id, EntityType::OwnHero, x, y, 0)
}

fn still_creature(id: i32, x: i32, y: i32) -> EntityRecord {
    EntityRecord::creature(id, x, y, 0, 14, Velocity::default(), true, ThreatFor::OwnBase)
}

fn snapshot(mana: i32, entities: Vec<EntityRecord>) -> TurnSnapshot {
    TurnSnapshot::new(BaseStatus::new(3, mana), BaseStatus::new(3, 0), entities)
}

fn top_left_match() -> MatchState {
    MatchState::new(Position::new(0, 0), WardenConfig::default())
}

#[test]
fn test_defender_banishes_critical_creature() {
    let mut state = top_left_match();
    let turn = snapshot(
        50,
        vec![
            hero(0, 3000, 2500),
            hero(1, 1131, 1131),
            hero(2, 849, 1414),
            still_creature(7, 1500, 1000),
        ],
    );

    let outcome = state.play_turn(&turn);

    assert_eq!(
        outcome.codes(),
        vec![ActionCode::Banish, ActionCode::Move, ActionCode::Move]
    );
    // Pulled back toward the defender itself
    assert_eq!(
        outcome.decisions[0].decision.command,
        Command::control(EntityId(7), &Position::new(3000, 2500))
    );
    assert_eq!(outcome.mana_spent, 10);
    assert_eq!(state.own_base().mana, 40);
    assert_eq!(state.hero(EntityId(0)).unwrap().focus_target(), Some(EntityId(7)));
}

#[test]
fn test_quiet_turn_everyone_patrols() {
    let mut state = top_left_match();
    let outcome = state.play_turn(&snapshot(
        0,
        vec![hero(0, 1414, 849), hero(1, 1131, 1131), hero(2, 849, 1414)],
    ));

    assert_eq!(outcome.codes(), vec![ActionCode::Move; 3]);
    assert_eq!(outcome.mana_spent, 0);

    for decision in &outcome.decisions {
        let hero = state.hero(decision.hero).unwrap();
        let Command::Move { target, .. } = &decision.decision.command else {
            panic!("expected a move, got {:?}", decision.decision.command);
        };
        let dist = Position::from_raw(*target).distance(hero.anchor());
        assert!(
            dist <= hero.patrol_radius() as f64,
            "hero {} wandered {} from its anchor",
            hero.id,
            dist
        );
    }
}

#[test]
fn test_defenders_never_share_a_target() {
    let mut state = top_left_match();
    let outcome = state.play_turn(&snapshot(
        0,
        vec![
            hero(0, 1414, 849),
            hero(1, 1131, 1131),
            hero(2, 849, 1414),
            still_creature(7, 3000, 3000),
        ],
    ));

    assert_eq!(
        outcome.codes(),
        vec![ActionCode::Approach, ActionCode::Move, ActionCode::Move]
    );
    assert_eq!(state.hero(EntityId(0)).unwrap().focus_target(), Some(EntityId(7)));
    assert_eq!(state.hero(EntityId(1)).unwrap().focus_target(), None);
}

#[test]
fn test_defenders_never_share_a_critical_target() {
    let mut state = top_left_match();
    let outcome = state.play_turn(&snapshot(
        0,
        vec![
            hero(0, 1414, 849),
            hero(1, 1131, 1131),
            hero(2, 849, 1414),
            still_creature(7, 1200, 1200),
        ],
    ));

    assert_eq!(
        outcome.codes(),
        vec![ActionCode::Approach, ActionCode::Move, ActionCode::Move]
    );
    let focus: Vec<Option<EntityId>> = state.heroes().iter().map(|h| h.focus_target()).collect();
    assert_eq!(focus, vec![Some(EntityId(7)), None, None]);
}

#[test]
fn test_defender_spends_nothing_on_outbound_creature() {
    let mut state = top_left_match();
    let outbound = EntityRecord::creature(
        7,
        1500,
        1000,
        0,
        14,
        Velocity::new(300, 200),
        false,
        ThreatFor::OpponentBase,
    );
    let outcome = state.play_turn(&snapshot(
        50,
        vec![hero(0, 3000, 2500), hero(1, 1131, 1131), hero(2, 849, 1414), outbound],
    ));

    assert_eq!(outcome.codes(), vec![ActionCode::Move; 3]);
    assert_eq!(outcome.mana_spent, 0);
    assert_eq!(state.hero(EntityId(0)).unwrap().focus_target(), None);
}

#[test]
fn test_mana_spent_by_one_hero_is_seen_by_the_next() {
    let entities = vec![
        hero(0, 3000, 2500),
        hero(1, 2500, 3000),
        hero(2, 849, 1414),
        still_creature(7, 1500, 1000),
        still_creature(8, 1000, 1500),
    ];

    // Enough for two pulls
    let mut rich = top_left_match();
    let outcome = rich.play_turn(&snapshot(50, entities.clone()));
    assert_eq!(
        outcome.codes(),
        vec![ActionCode::Banish, ActionCode::Banish, ActionCode::Move]
    );
    assert_eq!(outcome.mana_spent, 20);

    // Only the first pull fits; the second defender closes in instead
    let mut poor = top_left_match();
    let outcome = poor.play_turn(&snapshot(15, entities));
    assert_eq!(
        outcome.codes(),
        vec![ActionCode::Banish, ActionCode::Approach, ActionCode::Move]
    );
    assert_eq!(outcome.mana_spent, 10);
    assert_eq!(poor.own_base().mana, 5);
}

#[test]
fn test_mana_accounting_over_several_turns() {
    let mut state = top_left_match();
    let entities = vec![
        hero(0, 3000, 2500),
        hero(1, 1131, 1131),
        hero(2, 849, 1414),
        still_creature(7, 1500, 1000),
    ];

    let mut mana = 60;
    for turn in 1..=4 {
        let outcome = state.play_turn(&snapshot(mana, entities.clone()));
        let spells = outcome
            .codes()
            .iter()
            .filter(|code| code.costs_mana())
            .count() as i32;

        assert_eq!(outcome.turn, turn);
        assert_eq!(outcome.mana_spent, spells * 10);
        assert_eq!(state.own_base().mana, mana - outcome.mana_spent);
        mana = state.own_base().mana;
    }
}

#[test]
fn test_missing_hero_waits() {
    let mut state = top_left_match();
    state.play_turn(&snapshot(
        0,
        vec![hero(0, 1414, 849), hero(1, 1131, 1131), hero(2, 849, 1414)],
    ));

    let outcome = state.play_turn(&snapshot(0, vec![hero(0, 1414, 849), hero(2, 849, 1414)]));

    assert_eq!(outcome.decisions.len(), 3);
    assert_eq!(outcome.decisions[1].hero, EntityId(1));
    assert!(matches!(outcome.decisions[1].decision.command, Command::Wait { .. }));
}

#[test]
fn test_bottom_right_base_mirrors_anchors() {
    let mut state = MatchState::new(Position::new(17630, 9000), WardenConfig::default());
    state.play_turn(&snapshot(0, vec![hero(0, 16216, 8151)]));

    assert_eq!(state.opponent_base().position(), &Position::new(0, 0));
    assert_eq!(
        state.hero(EntityId(0)).unwrap().anchor(),
        &Position::new(16630, 8000)
    );
}

#[test]
fn test_decide_turn_is_pure_and_seeded() {
    let state = top_left_match();
    let turn = snapshot(
        0,
        vec![hero(0, 1414, 849), hero(1, 1131, 1131), hero(2, 849, 1414)],
    );

    let (first_state, first) = decide_turn(&state, &turn);
    let (_, second) = decide_turn(&state, &turn);

    assert_eq!(first, second);
    assert_eq!(state.turn(), 0);
    assert_eq!(first_state.turn(), 1);
}
