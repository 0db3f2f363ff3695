mod support;

use chrono::{Duration, NaiveDateTime};
use support::{date, full_draft, TestDeck};
use taskdeck::notify::{format_remaining, upcoming_alerts, MAX_ALERTS};
use taskdeck::task::{Priority, Status};

fn noon(y: i32, m: u32, d: u32) -> NaiveDateTime {
    date(y, m, d).and_hms_opt(12, 0, 0).expect("valid time")
}

#[test]
fn done_tasks_and_far_future_tasks_are_excluded() {
    let mut deck = TestDeck::new();
    // A: due tomorrow, todo. B: due yesterday but already done.
    deck.store
        .submit(
            full_draft(
                "A",
                Status::Todo,
                Priority::Medium,
                Some(date(2027, 6, 11)),
                &[],
            ),
            None,
        )
        .expect("submit");
    deck.store
        .submit(
            full_draft(
                "B",
                Status::Done,
                Priority::Medium,
                Some(date(2027, 6, 9)),
                &[],
            ),
            None,
        )
        .expect("submit");
    deck.store
        .submit(
            full_draft(
                "C next month",
                Status::Todo,
                Priority::Medium,
                Some(date(2027, 7, 10)),
                &[],
            ),
            None,
        )
        .expect("submit");

    let alerts = deck.store.upcoming_alerts(noon(2027, 6, 10));
    assert_eq!(alerts.len(), 1);
    assert_eq!(alerts[0].task.title, "A");
    assert!(!alerts[0].is_overdue());

    // The unfiltered view still shows both A and B in order.
    let view = deck.store.filtered_view(&Default::default());
    assert_eq!(view[0].title, "A");
    assert_eq!(view[1].title, "B");
}

#[test]
fn overdue_tasks_sort_before_upcoming_ones() {
    let mut deck = TestDeck::new();
    deck.store
        .submit(
            full_draft(
                "due tonight",
                Status::InProgress,
                Priority::Medium,
                Some(date(2027, 6, 11)),
                &[],
            ),
            None,
        )
        .expect("submit");
    deck.store
        .submit(
            full_draft(
                "overdue",
                Status::Todo,
                Priority::Medium,
                Some(date(2027, 6, 9)),
                &[],
            ),
            None,
        )
        .expect("submit");

    let alerts = deck.store.upcoming_alerts(noon(2027, 6, 10));
    assert_eq!(alerts.len(), 2);
    assert_eq!(alerts[0].task.title, "overdue");
    assert!(alerts[0].is_overdue());
    assert_eq!(alerts[1].task.title, "due tonight");
}

#[test]
fn alerts_are_capped() {
    let mut deck = TestDeck::new();
    for i in 0..8 {
        deck.store
            .submit(
                full_draft(
                    &format!("task {i}"),
                    Status::Todo,
                    Priority::Medium,
                    Some(date(2027, 6, 10)),
                    &[],
                ),
                None,
            )
            .expect("submit");
    }

    let alerts = deck.store.upcoming_alerts(noon(2027, 6, 10));
    assert_eq!(alerts.len(), MAX_ALERTS);
}

#[test]
fn tasks_without_due_date_never_alert() {
    let mut deck = TestDeck::new();
    deck.store
        .submit(
            full_draft("undated", Status::Todo, Priority::Medium, None, &[]),
            None,
        )
        .expect("submit");

    let alerts = deck.store.upcoming_alerts(noon(2027, 6, 10));
    assert!(alerts.is_empty());
}

#[test]
fn remaining_time_formatting() {
    assert_eq!(format_remaining(Duration::minutes(-5)), "overdue");
    assert_eq!(format_remaining(Duration::zero()), "overdue");
    assert_eq!(format_remaining(Duration::minutes(45)), "45m");
    assert_eq!(format_remaining(Duration::hours(2)), "2h");
    assert_eq!(
        format_remaining(Duration::hours(3) + Duration::minutes(20)),
        "3h 20m"
    );
}

#[test]
fn pure_function_agrees_with_store_view() {
    let mut deck = TestDeck::new();
    deck.store
        .submit(
            full_draft(
                "solo",
                Status::Todo,
                Priority::Medium,
                Some(date(2027, 6, 10)),
                &[],
            ),
            None,
        )
        .expect("submit");

    let direct = upcoming_alerts(deck.store.tasks(), noon(2027, 6, 10));
    assert_eq!(direct.len(), 1);
    // Due at midnight of the 10th, asked at noon: 12 hours overdue.
    assert_eq!(direct[0].remaining(), Duration::hours(-12));
}
