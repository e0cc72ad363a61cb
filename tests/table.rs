//! Table integration tests: the phase machine driven tick by tick.

use core::time::Duration;

use bjtable::{
    BetError, Card, Category, ClockError, Deck, Outcome, PlayerAction, PlayerKind, Readiness,
    RoundPhase, SeatError, Suit, Table, TableOptions,
};

const fn card(suit: Suit, rank: u8) -> Card {
    Card::new(suit, rank)
}

fn table_with_seats(seats: &[(PlayerKind, u32, u32)]) -> Table {
    let table = Table::new(TableOptions::default(), 7);
    for &(kind, seat, chips) in seats {
        table.seat_player(kind, seat, chips).unwrap();
    }
    table
}

/// Arms the clock and steps until it halts; a stuck schedule fails the test.
fn run_round(table: &Table) {
    table.begin().unwrap();
    for _ in 0..200 {
        if !table.is_running() {
            return;
        }
        table.step();
    }
    panic!("round did not complete within 200 ticks");
}

fn phase_messages(table: &Table) -> Vec<String> {
    table
        .drain_events()
        .into_iter()
        .filter(|event| event.category == Category::Phase)
        .map(|event| event.message)
        .collect()
}

#[test]
fn options_builder_sets_fields() {
    let options = TableOptions::default()
        .with_min_bet(250)
        .with_max_bet(25_000)
        .with_tick(Duration::from_millis(125));

    assert_eq!(options.min_bet, 250);
    assert_eq!(options.max_bet, 25_000);
    assert_eq!(options.tick, Duration::from_millis(125));
}

#[test]
fn seating_validation() {
    let table = Table::new(TableOptions::default(), 1);

    assert_eq!(
        table.seat_player(PlayerKind::Other, 0, 500).unwrap_err(),
        SeatError::InvalidSeat
    );

    table.seat_player(PlayerKind::Own, 1, 500).unwrap();
    assert_eq!(
        table.seat_player(PlayerKind::Other, 1, 900).unwrap_err(),
        SeatError::SeatTaken
    );

    table.begin().unwrap();
    assert_eq!(
        table.seat_player(PlayerKind::Other, 2, 500).unwrap_err(),
        SeatError::TableRunning
    );
    assert_eq!(table.leave(1).unwrap_err(), SeatError::TableRunning);
    table.stop();

    table.leave(1).unwrap();
    assert_eq!(table.leave(1).unwrap_err(), SeatError::UnknownSeat);
    assert_eq!(table.player_count(), 0);
}

#[test]
fn empty_table_faults_no_participants() {
    let table = Table::new(TableOptions::default(), 2);

    table.begin().unwrap();
    table.step();

    assert!(!table.is_running());
    assert_eq!(table.phase(), RoundPhase::Idle);

    let events = table.drain_events();
    assert!(
        events
            .iter()
            .any(|e| e.category == Category::Fault && e.message.contains("no participants"))
    );
}

#[test]
fn underfunded_seats_fault_no_participants() {
    // Chips must exceed the table minimum to qualify.
    let table = table_with_seats(&[(PlayerKind::Other, 1, 100)]);

    table.begin().unwrap();
    table.step();

    assert!(!table.is_running());
    assert_eq!(table.phase(), RoundPhase::Idle);
    assert_eq!(
        table.player(1).unwrap().readiness,
        Readiness::Observing
    );
    assert!(table.summary().is_none());
}

#[test]
fn natural_twenty_one_stands_immediately() {
    let table = table_with_seats(&[(PlayerKind::Other, 1, 30_000)]);
    table.set_deck(Deck::from_cards([
        card(Suit::Hearts, 1),   // seat 1
        card(Suit::Clubs, 10),   // dealer
        card(Suit::Spades, 13),  // seat 1
        card(Suit::Diamonds, 9), // dealer
    ]));

    table.begin().unwrap();
    for _ in 0..4 {
        table.step();
    }

    // After InitGame, StartBetting, StartBettingSettle, and PassCard,
    // everyone holds exactly two cards.
    assert_eq!(table.phase(), RoundPhase::PassCardSettle);
    let seat = table.player(1).unwrap();
    assert_eq!(seat.cards.len(), 2);
    assert_eq!(seat.score, 21);
    assert_eq!(seat.readiness, Readiness::InGame);
    assert_eq!(table.dealer().cards.len(), 2);

    while table.is_running() {
        table.step();
    }

    let summary = table.summary().unwrap();
    assert_eq!(summary.dealer_score, 19);
    assert_eq!(summary.seats.len(), 1);
    // The natural 21 never drew again and beat the dealer's 19.
    assert_eq!(summary.seats[0].cards, 2);
    assert_eq!(summary.seats[0].score, 21);
    assert_eq!(summary.seats[0].outcome, Outcome::Win);
}

#[test]
fn autonomous_seat_draws_to_the_threshold() {
    let table = table_with_seats(&[(PlayerKind::Other, 1, 30_000)]);
    table.set_deck(Deck::from_cards([
        card(Suit::Hearts, 2),    // seat 1
        card(Suit::Clubs, 10),    // dealer
        card(Suit::Spades, 3),    // seat 1
        card(Suit::Diamonds, 9),  // dealer
        card(Suit::Hearts, 10),   // seat 1 draws to 15
        card(Suit::Clubs, 5),     // seat 1 draws to 20
    ]));

    run_round(&table);

    let summary = table.summary().unwrap();
    assert_eq!(summary.seats[0].score, 20);
    assert_eq!(summary.seats[0].cards, 4);
    assert_eq!(summary.seats[0].outcome, Outcome::Win);
    assert_eq!(summary.dealer_score, 19);

    // The settle phase handed control back to the turn phase between the
    // two draws.
    let phases = phase_messages(&table);
    let player_turns = phases.iter().filter(|m| *m == "phase: PlayerTurn").count();
    assert_eq!(player_turns, 2);
}

#[test]
fn dealer_bust_wins_for_standing_seat() {
    let table = table_with_seats(&[(PlayerKind::Other, 1, 30_000)]);
    table.set_deck(Deck::from_cards([
        card(Suit::Hearts, 10),  // seat 1
        card(Suit::Clubs, 10),   // dealer
        card(Suit::Spades, 10),  // seat 1
        card(Suit::Diamonds, 6), // dealer: 16, must draw
        card(Suit::Hearts, 13),  // dealer draws to 26
    ]));

    run_round(&table);

    let summary = table.summary().unwrap();
    assert_eq!(summary.dealer_score, 26);
    assert_eq!(summary.dealer_cards, 3);
    assert_eq!(summary.seats[0].score, 20);
    assert_eq!(summary.seats[0].outcome, Outcome::Win);
}

#[test]
fn exact_tie_loses() {
    let table = table_with_seats(&[(PlayerKind::Other, 1, 30_000)]);
    table.set_deck(Deck::from_cards([
        card(Suit::Hearts, 10),  // seat 1
        card(Suit::Clubs, 10),   // dealer
        card(Suit::Spades, 9),   // seat 1
        card(Suit::Diamonds, 9), // dealer: 19, stands
    ]));

    run_round(&table);

    let summary = table.summary().unwrap();
    assert_eq!(summary.dealer_score, 19);
    assert_eq!(summary.seats[0].score, 19);
    assert_eq!(summary.seats[0].outcome, Outcome::Lose);
}

#[test]
fn action_toggles_follow_the_turn_boundaries() {
    let table = table_with_seats(&[
        (PlayerKind::Own, 1, 30_000),
        (PlayerKind::Other, 2, 30_000),
    ]);
    table.set_deck(Deck::from_cards([
        card(Suit::Hearts, 1),   // seat 1
        card(Suit::Clubs, 10),   // seat 2
        card(Suit::Spades, 10),  // dealer
        card(Suit::Hearts, 13),  // seat 1: natural 21
        card(Suit::Diamonds, 9), // seat 2: 19
        card(Suit::Clubs, 9),    // dealer: 19
    ]));

    table.begin().unwrap();
    for _ in 0..6 {
        table.step();
    }

    // PlayerTurn just ran: the host seat's controls are offered, the
    // autonomous seat's stay off.
    assert_eq!(table.phase(), RoundPhase::PlayerTurnSettle);
    let own = table.player(1).unwrap();
    let other = table.player(2).unwrap();
    for action in PlayerAction::ALL {
        assert!(own.actions.enabled(action));
        assert!(!other.actions.enabled(action));
    }

    table.step(); // PlayerTurnSettle: both seats stand
    table.step(); // DealerTurn closes the window
    let own = table.player(1).unwrap();
    for action in PlayerAction::ALL {
        assert!(!own.actions.enabled(action));
    }

    while table.is_running() {
        table.step();
    }

    let summary = table.summary().unwrap();
    assert_eq!(summary.seats[0].outcome, Outcome::Win);
    assert_eq!(summary.seats[1].outcome, Outcome::Lose);
}

#[test]
fn bets_default_to_the_minimum_and_hosts_can_raise() {
    let table = Table::new(TableOptions::default().with_max_bet(50_000), 7);
    table.seat_player(PlayerKind::Other, 1, 30_000).unwrap();
    table.seat_player(PlayerKind::Other, 2, 100).unwrap();

    assert_eq!(table.place_bet(1, 500).unwrap_err(), BetError::InvalidState);

    table.begin().unwrap();
    table.step(); // InitGame
    table.step(); // StartBetting posts the minimum
    assert_eq!(table.phase(), RoundPhase::StartBettingSettle);
    assert_eq!(table.player(1).unwrap().bet, 100);

    assert_eq!(table.place_bet(1, 50).unwrap_err(), BetError::BelowMinimum);
    assert_eq!(
        table.place_bet(1, 60_000).unwrap_err(),
        BetError::AboveMaximum
    );
    assert_eq!(table.place_bet(9, 500).unwrap_err(), BetError::UnknownSeat);
    assert_eq!(table.place_bet(2, 500).unwrap_err(), BetError::NotInRound);
    assert_eq!(
        table.place_bet(1, 40_000).unwrap_err(),
        BetError::InsufficientChips
    );

    table.place_bet(1, 500).unwrap();
    assert_eq!(table.player(1).unwrap().bet, 500);

    table.step(); // StartBettingSettle advances with the raised bet intact
    assert_eq!(table.phase(), RoundPhase::PassCard);
    assert_eq!(table.player(1).unwrap().bet, 500);

    table.stop();
}

#[test]
fn stop_is_idempotent() {
    let table = table_with_seats(&[(PlayerKind::Other, 1, 30_000)]);

    table.begin().unwrap();
    assert_eq!(table.begin().unwrap_err(), ClockError::AlreadyRunning);

    table.stop();
    assert!(!table.is_running());
    assert_eq!(table.phase(), RoundPhase::Idle);

    table.stop();
    assert!(!table.is_running());
    assert_eq!(table.phase(), RoundPhase::Idle);
}

#[test]
fn deck_exhaustion_halts_the_run() {
    let table = table_with_seats(&[(PlayerKind::Other, 1, 30_000)]);
    table.set_deck(Deck::from_cards([
        card(Suit::Hearts, 10),
        card(Suit::Clubs, 10),
        card(Suit::Spades, 10),
    ]));

    run_round(&table);

    assert!(!table.is_running());
    assert_eq!(table.phase(), RoundPhase::Idle);
    assert!(table.summary().is_none());

    let events = table.drain_events();
    assert!(
        events
            .iter()
            .any(|e| e.category == Category::Fault && e.message.contains("deck is exhausted"))
    );
}

#[test]
fn transitions_are_logged_once_per_change() {
    let table = table_with_seats(&[(PlayerKind::Other, 1, 30_000)]);
    table.set_deck(Deck::from_cards([
        card(Suit::Hearts, 1),
        card(Suit::Clubs, 10),
        card(Suit::Spades, 13),
        card(Suit::Diamonds, 9),
    ]));

    run_round(&table);

    let phases = phase_messages(&table);
    let expected = [
        "phase: InitGame",
        "phase: StartBetting",
        "phase: StartBettingSettle",
        "phase: PassCard",
        "phase: PassCardSettle",
        "phase: PlayerTurn",
        "phase: PlayerTurnSettle",
        "phase: DealerTurn",
        "phase: DealerTurnSettle",
        "phase: Result",
    ];
    assert_eq!(phases, expected);
}

#[test]
fn reshuffle_rebuilds_the_deck_between_rounds() {
    let table = table_with_seats(&[(PlayerKind::Other, 1, 30_000)]);
    table.set_deck(Deck::from_cards([card(Suit::Hearts, 2)]));

    table.reshuffle().unwrap();
    assert_eq!(table.dealer().cards_remaining, 52);

    table.begin().unwrap();
    assert_eq!(table.reshuffle().unwrap_err(), ClockError::AlreadyRunning);
    table.stop();
}

#[test]
fn background_clock_completes_a_round() {
    let options = TableOptions::default().with_tick(Duration::from_millis(1));
    let table = std::sync::Arc::new(Table::new(options, 42));
    table.seat_player(PlayerKind::Other, 1, 30_000).unwrap();

    table.clone().start().unwrap();

    for _ in 0..2_000 {
        if !table.is_running() {
            break;
        }
        std::thread::sleep(Duration::from_millis(1));
    }

    assert!(!table.is_running(), "round did not finish in time");
    assert!(table.summary().is_some());
    assert_eq!(table.phase(), RoundPhase::Idle);

    // Stopping after completion is a harmless no-op.
    table.stop();
}
