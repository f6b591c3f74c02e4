use hilo_core::{CountingSession, TrainerSettings};

use super::test_harness::{TEST_VERSION, ViewKind, setup_view_harness};

fn seeded(seed: u64) -> TrainerSettings {
    TrainerSettings::default().with_seed(Some(seed))
}

#[tokio::test(flavor = "current_thread")]
async fn home_view_smoke_renders_title_and_modes() {
    let mut harness = setup_view_harness(ViewKind::Home, TrainerSettings::default());
    harness.rebuild();
    let html = harness.render();

    for expected in [
        "BlackJack Card Counter",
        "Train using the Hi-Lo method",
        "Normal Mode",
        "Timed Mode",
    ] {
        assert!(html.contains(expected), "missing {expected} in {html}");
    }
    let version = format!("v{TEST_VERSION}");
    assert!(html.contains(&version), "missing {version} in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn normal_view_smoke_renders_first_card_of_the_shoe() {
    let mut harness = setup_view_harness(ViewKind::Normal, seeded(7));
    harness.rebuild();
    let html = harness.render();

    let first = CountingSession::from_seed(7)
        .current_card()
        .expect("dealt session")
        .to_string();
    let title = format!("title=\"{first}\"");
    assert!(html.contains(&title), "missing {title} in {html}");
    assert!(html.contains("Next"), "missing next button in {html}");
    assert!(html.contains("Score: --"), "missing tally in {html}");
    assert!(
        !html.contains("What's the running count?"),
        "quiz prompt shown before any checkpoint in {html}"
    );
}

#[tokio::test(flavor = "current_thread")]
async fn timed_view_smoke_renders_controls() {
    let mut harness = setup_view_harness(ViewKind::Timed, seeded(7));
    harness.rebuild();
    harness.drive_async().await;
    let html = harness.render();

    assert!(html.contains("Stop"), "missing stop button in {html}");
    assert!(html.contains("type=\"range\""), "missing slider in {html}");
    assert!(html.contains("1.00s per card"), "missing speed label in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn timed_view_smoke_shows_the_first_card_once_running() {
    let mut harness = setup_view_harness(ViewKind::Timed, seeded(7));
    harness.rebuild();
    harness.drive_async().await;
    harness.drive_async().await;
    let html = harness.render();

    let first = CountingSession::from_seed(7)
        .current_card()
        .expect("dealt session")
        .to_string();
    let title = format!("title=\"{first}\"");
    assert!(html.contains(&title), "missing {title} in {html}");
}
