use std::sync::Arc;

use quiz_core::SessionEvent;
use quiz_core::model::AnswerOption;

use super::test_harness::{UnreachableProvider, setup_quiz_harness, setup_static_harness};

#[tokio::test(flavor = "current_thread")]
async fn start_screen_smoke_offers_counts() {
    let harness = setup_static_harness(5);
    let html = harness.render();

    assert!(html.contains("Welcome to Quiz Master"), "missing greeting in {html}");
    assert!(html.contains("How many questions would you like to do?"));
    for count in ["count-5", "count-10", "count-15", "count-20"] {
        assert!(html.contains(count), "missing {count} in {html}");
    }
    assert!(html.contains("Questions from test bank"));
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_smoke_answers_through_to_results() {
    let mut harness = setup_static_harness(2);

    harness.send(SessionEvent::CountSelected(2));
    let html = harness.drive_until("Question 1 / 2").await;
    assert!(html.contains("Sample question 1?"), "missing prompt in {html}");
    assert!(html.contains("Time: 1:00"), "missing timer in {html}");
    assert!(html.contains("0 / 2 points"));

    harness.send(SessionEvent::AnswerSubmitted(AnswerOption::new("Right 1", true)));
    let html = harness.drive_until("Question 2 / 2").await;
    assert!(html.contains("1 / 2 points"), "missing score in {html}");

    harness.send(SessionEvent::AnswerSubmitted(AnswerOption::new("Wrong 2", false)));
    let html = harness.drive_until("You scored 1 out of 2 (50%)").await;
    assert!(html.contains("Review answers"));
    assert!(!html.contains("Time's up!"));
}

#[tokio::test(flavor = "current_thread")]
async fn review_smoke_walks_recorded_answers() {
    let mut harness = setup_static_harness(2);
    harness.send(SessionEvent::CountSelected(2));
    harness.drive_until("Question 1 / 2").await;
    harness.send(SessionEvent::AnswerSubmitted(AnswerOption::new("Wrong 1", false)));
    harness.drive_until("Question 2 / 2").await;
    harness.send(SessionEvent::FinishRequested);
    harness.drive_until("You scored 0 out of 2 (0%)").await;

    harness.send(SessionEvent::ReviewRequested);
    let html = harness.drive_until("Question 1 of 2").await;
    assert!(html.contains("Your answer: Wrong 1"), "missing answer in {html}");
    assert!(html.contains("Correct answer"));

    harness.send(SessionEvent::ReviewNext);
    let html = harness.drive_until("Question 2 of 2").await;
    assert!(html.contains("Not answered"), "missing unanswered note in {html}");

    harness.send(SessionEvent::ReviewClosed);
    harness.drive_until("You scored 0 out of 2 (0%)").await;
}

#[tokio::test(flavor = "current_thread")]
async fn error_smoke_offers_start_over() {
    let mut harness = setup_quiz_harness(Arc::new(UnreachableProvider));

    harness.send(SessionEvent::CountSelected(5));
    let html = harness.drive_until("Start over").await;
    assert!(html.contains("Check your connection"), "missing error hint in {html}");

    harness.send(SessionEvent::Restart);
    harness.drive_until("Welcome to Quiz Master").await;
}
