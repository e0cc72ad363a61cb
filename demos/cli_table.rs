//! CLI table demo: one autonomous round on the background clock.

#![allow(clippy::missing_docs_in_private_items)]

use core::time::Duration;
use std::sync::Arc;
use std::thread;
use std::time::{SystemTime, UNIX_EPOCH};

use bjtable::{Category, LogEvent, PlayerKind, Table, TableOptions};

fn main() {
    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let options = TableOptions::default().with_tick(Duration::from_millis(100));
    let table = Arc::new(Table::new(options, seed));

    // Autonomous seats only: a host-driven seat would act through the
    // action toggles, which this demo does not render.
    table
        .seat_player(PlayerKind::Other, 1, 30_000)
        .expect("seat 1 is free");
    table
        .seat_player(PlayerKind::Other, 2, 30_000)
        .expect("seat 2 is free");
    table
        .seat_player(PlayerKind::Other, 3, 30_000)
        .expect("seat 3 is free");

    table.clone().start().expect("clock is stopped");

    let mut last_line = None;
    while table.is_running() {
        print_events(table.drain_events(), &mut last_line);
        thread::sleep(Duration::from_millis(50));
    }
    print_events(table.drain_events(), &mut last_line);

    if let Some(summary) = table.summary() {
        println!("--- summary ---");
        for seat in &summary.seats {
            println!(
                "seat {}: {} with {} card(s), {:?}",
                seat.seat, seat.score, seat.cards, seat.outcome
            );
        }
        println!(
            "dealer: {} with {} card(s)",
            summary.dealer_score, summary.dealer_cards
        );
    }
}

/// Prints drained events, suppressing consecutive duplicate lines the way a
/// log panel would.
fn print_events(events: Vec<LogEvent>, last_line: &mut Option<String>) {
    for event in events {
        if last_line.as_deref() == Some(event.message.as_str()) {
            continue;
        }

        let tag = match event.category {
            Category::Phase => "phase",
            Category::Deal => "deal",
            Category::Result => "result",
            Category::Fault => "fault",
        };
        println!("[{tag:>6}] {}", event.message);
        *last_line = Some(event.message);
    }
}
