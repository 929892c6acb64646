use super::*;
use crate::Arbitrary;
use crate::Chips;
use crate::cards::*;
use crate::difficulty::Difficulty;
use crate::icm::Payouts;
use crate::opponent::MemoryStore;
use crate::opponent::Stats;
use crate::profile::Archetype;
use crate::profile::Effective;
use crate::profile::Profile;
use crate::table::*;
use crate::tilt::Trigger;
use std::sync::Arc;

/// Heads-up spot: villain in seat 0 has `villain_bet` in, hero in seat 1.
fn heads_up(hole: &str, board: &str, pot: Chips, villain_bet: Chips, hero_bet: Chips, stack: Chips) -> TableSnapshot {
    let board = match board {
        "" => Board::empty(),
        b => Board::try_from(b).unwrap(),
    };
    TableSnapshot {
        street: board.street(),
        pot,
        current_bet: villain_bet.max(hero_bet),
        big_blind: 10,
        min_raise: villain_bet.max(10),
        seats: vec![
            Seat::new("villain", 5000).with_bet(villain_bet),
            Seat::new("hero", stack)
                .with_bet(hero_bet)
                .with_hole(Hole::try_from(hole).unwrap()),
        ],
        actor: 1,
        offset: 1,
        board,
        aggressor: Some(0),
        raises: 0,
        limpers: 0,
        format: Format::Cash,
    }
}

fn expert() -> Engine {
    Engine::from(Difficulty::Expert)
}

fn is_legal(table: &TableSnapshot, action: Action) -> bool {
    Legal::from(table).clamp(action) == action
}

#[test]
fn premium_pair_shoves_over_shallow_three_bet() {
    let mut table = heads_up("Ks Kh", "", 450, 300, 100, 800);
    table.raises = 2;
    let decision = expert()
        .decide(&Session::default(), &Profile::from(Archetype::Tag), &table)
        .unwrap();
    assert_eq!(decision.action, Action::AllIn(800));
}

#[test]
fn gto_premium_pairs_shove_over_shallow_three_bet() {
    let shark = Profile::from(Archetype::Shark);
    for hole in ["9s 9h", "Ts Th", "Js Jh", "Ks Kh"] {
        let mut table = heads_up(hole, "", 450, 300, 100, 800);
        table.raises = 2;
        let decision = expert().decide(&Session::default(), &shark, &table).unwrap();
        assert_eq!(decision.action, Action::AllIn(800), "{}", hole);
        assert!(decision.explanation.reasoning.starts_with("gto"));
    }
}

#[test]
fn gto_monster_shoves_multiway_when_stack_is_twice_the_call() {
    let mut table = heads_up("3h 2c", "Ah Kh 9h 5h 7c", 900, 300, 0, 550);
    let hero = table.seats.pop().unwrap();
    table.seats.extend(["a", "b", "c", "d"].map(|id| Seat::new(id, 5000)));
    table.seats.push(hero);
    table.actor = table.seats.len() - 1;
    for profile in [Archetype::Shark, Archetype::Rock].map(Profile::from) {
        let decision = expert().decide(&Session::default(), &profile, &table).unwrap();
        assert_eq!(decision.action, Action::AllIn(550), "{}", profile.name);
    }
}

#[test]
fn villain_range_tracks_the_street() {
    let turn = heads_up("Ac Qd", "Kh 7c 2d 9s", 300, 100, 0, 3000);
    let river = heads_up("Ac Qd", "Kh 7c 2d 9s 4h", 300, 100, 0, 3000);
    for (table, street) in [(turn, Street::Turn), (river, Street::Rive)] {
        let spot = expert().spot(&Session::default(), &table).unwrap();
        let range = spot.range.unwrap();
        assert_eq!(range.street, street);
        assert!(range.description().ends_with(&format!("on {} top {:.0}%", street, range.width() * 100.0)));
    }
}

#[test]
fn monster_shoves_when_stack_is_twice_the_call() {
    let table = heads_up("Ah Kh", "Qh 7h 2h", 900, 300, 0, 550);
    let decision = expert()
        .decide(&Session::default(), &Profile::from(Archetype::Rock), &table)
        .unwrap();
    assert_eq!(decision.action, Action::AllIn(550));
}

#[test]
fn calling_station_calls_with_a_pair() {
    let table = heads_up("9c 8d", "9h Kd 2s", 200, 80, 0, 3000);
    let decision = expert()
        .decide(&Session::default(), &Profile::from(Archetype::CallingStation), &table)
        .unwrap();
    assert_eq!(decision.action, Action::Call(80));
}

#[test]
fn calling_station_calls_with_a_draw() {
    let table = heads_up("Jc Tc", "9h 8d 2s", 200, 150, 0, 3000);
    let decision = expert()
        .decide(&Session::default(), &Profile::from(Archetype::CallingStation), &table)
        .unwrap();
    assert_eq!(decision.action, Action::Call(150));
}

#[test]
fn short_stack_on_the_bubble_opens_up() {
    let mut table = heads_up("9s 8s", "", 15, 10, 5, 295);
    table.seats = vec![
        Seat::new("a", 1000),
        Seat::new("b", 1000),
        Seat::new("c", 990).with_bet(10),
        Seat::new("hero", 295)
            .with_bet(5)
            .with_hole(Hole::try_from("9s 8s").unwrap()),
    ];
    table.actor = 3;
    table.offset = 1;
    let engine = Engine::from(Difficulty::Hard);
    let session = Session::default();
    let profile = Profile::from(Archetype::Tag);
    let base = Effective::from(&profile);
    let cash = engine.effective(&session, &profile, &table);
    table.format = Format::Tournament(Payouts::from(vec![50, 30, 20]));
    let bubble = engine.effective(&session, &profile, &table);
    assert_eq!(cash.steal_bonus, 0.0);
    assert!(bubble.steal_bonus > 0.0);
    assert!(bubble.aggression > base.aggression);
    assert!(bubble.tightness < base.tightness);
    assert!(bubble.is_bounded());
}

#[test]
fn tilt_applies_below_expert() {
    let table = heads_up("9s 8s", "", 15, 10, 5, 1000);
    let session = Session::default();
    let profile = Profile::from(Archetype::Tag);
    let hero = table.seats[1].id.clone();
    session.ledger().trigger(&hero, Trigger::BadBeat, 1.0);
    let medium = Engine::from(Difficulty::Medium).effective(&session, &profile, &table);
    let expert = expert().effective(&session, &profile, &table);
    assert!(medium.tilt > 0.0);
    assert!(medium.tightness < expert.tightness);
    assert_eq!(expert, Effective::from(&profile));
}

#[test]
fn fish_get_bigger_value_bets() {
    let fish = Stats {
        hands: 100,
        vpip: 60,
        pfr: 5,
        aggressive: 10,
        passive: 40,
        ..Stats::default()
    };
    let store = MemoryStore::default();
    store.insert(PlayerId::from("villain"), GameMode::Cash, fish);
    let session = Session::new(Arc::new(store));
    let table = heads_up("As Ad", "Ah 7c 2d", 100, 0, 0, 3000);
    let profile = Profile::from(Archetype::Tag);
    let exploiting = expert().effective(&session, &profile, &table);
    let beginner = Engine::from(Difficulty::Beginner).effective(&session, &profile, &table);
    assert!(exploiting.value_sizing > 1.0);
    assert_eq!(beginner.value_sizing, 1.0);
}

#[test]
fn gto_is_reproducible_across_sessions() {
    let profile = Profile::from(Archetype::Shark);
    let tables = [
        heads_up("Ah Kh", "", 15, 10, 5, 1000),
        heads_up("7c 6c", "8c 5d Kh", 60, 30, 0, 970),
        heads_up("Qs Js", "Ts 4h 2c 9d", 200, 0, 0, 800),
    ];
    for table in tables.iter() {
        let a = expert().decide(&Session::default(), &profile, table).unwrap();
        let b = expert().decide(&Session::default(), &profile, table).unwrap();
        assert_eq!(a, b);
        assert!(a.explanation.reasoning.starts_with("gto"));
    }
}

#[test]
fn gto_needs_the_expert_tier() {
    let table = heads_up("Ah Kh", "", 15, 10, 5, 1000);
    let profile = Profile::from(Archetype::Shark);
    let decision = Engine::from(Difficulty::Hard)
        .decide(&Session::default(), &profile, &table)
        .unwrap();
    assert!(decision.explanation.reasoning.starts_with("preflop"));
}

#[test]
fn rejects_invalid_snapshots() {
    let mut table = heads_up("Ah Kh", "", 15, 10, 5, 1000);
    table.pot = -5;
    let session = Session::default();
    assert!(expert().decide(&session, &Profile::default(), &table).is_err());
    assert_eq!(session.decisions(), 0);
}

#[test]
fn explains_with_factors() {
    let table = heads_up("9c 8d", "9h Kd 2s", 200, 80, 0, 3000);
    let decision = expert()
        .decide(&Session::default(), &Profile::default(), &table)
        .unwrap();
    let equity = decision.explanation.get("equity").unwrap();
    assert!((0.0..=1.0).contains(&equity));
    assert!((decision.explanation.get("pot odds").unwrap() - 80.0 / 280.0).abs() < 1e-6);
    assert!(decision.explanation.get("mdf").is_some());
    assert!(decision.explanation.get("villain range").is_some());
}

#[test]
fn sessions_are_isolated() {
    let table = heads_up("Ah Kh", "Qh 7c 2d", 100, 0, 0, 1000);
    let one = Session::default();
    let two = Session::default();
    Engine::default().decide(&one, &Profile::default(), &table).unwrap();
    assert_eq!(one.decisions(), 1);
    assert_eq!(one.cache().len(), 1);
    assert_eq!(two.decisions(), 0);
    assert!(two.cache().is_empty());
    one.reset();
    assert_eq!(one.decisions(), 0);
    assert!(one.cache().is_empty());
}

#[test]
fn every_decision_is_legal() {
    let session = Session::default();
    for _ in 0..16 {
        let table = TableSnapshot::random();
        for difficulty in Difficulty::all() {
            for archetype in Archetype::all() {
                let decision = Engine::from(difficulty)
                    .decide(&session, &Profile::from(archetype), &table)
                    .unwrap();
                assert!(is_legal(&table, decision.action), "{} {:?}", decision.action, table);
            }
        }
    }
}
