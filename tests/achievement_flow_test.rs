//! Integration tests for the achievement lifecycle

use std::sync::{Arc, Mutex};
use std::thread::sleep;
use std::time::Duration;

use accolade::{
    AchievementError, AchievementManager, Event, ON_ACHIEVED, ON_INCREMENT, handler,
};

#[test]
fn test_collector_scenario() {
    let manager = AchievementManager::new();
    let mut collector = manager
        .incremental(1, "collector", "Collector", "Collect five gems", 5.0)
        .expect("fresh manager has no claimed ids");

    // One shared log so the relative order of the two event streams shows.
    let log = Arc::new(Mutex::new(Vec::new()));

    let increment_log = log.clone();
    let on_increment = handler(move |event: &Event| {
        if let Event::Increment { value } = event {
            increment_log.lock().unwrap().push(format!("progress {value}"));
        }
        Ok(())
    });
    manager.bus().set_handler(ON_INCREMENT, &on_increment);

    let achieved_log = log.clone();
    let on_achieved = handler(move |event: &Event| {
        if let Event::Achieved(info) = event {
            achieved_log
                .lock()
                .unwrap()
                .push(format!("unlocked {} (id {})", info.name, info.id));
        }
        Ok(())
    });
    manager.bus().set_handler(ON_ACHIEVED, &on_achieved);

    collector.increment(2.0).expect("handlers succeed");
    collector.increment(3.0).expect("handlers succeed");

    assert!(collector.achieved(), "goal reached, must be unlocked");
    assert_eq!(collector.value(), 5.0);
    assert_eq!(
        log.lock().unwrap().as_slice(),
        ["progress 2", "progress 5", "unlocked collector (id 1)"]
    );
}

#[test]
fn test_speedrun_scenario() {
    let manager = AchievementManager::new();
    let mut speedrun = manager
        .time_based(
            2,
            "speedrun",
            "Speedrun",
            "Two laps in quick succession",
            Duration::from_millis(250),
        )
        .expect("fresh manager has no claimed ids");

    let unlocked = Arc::new(Mutex::new(Vec::new()));
    let sink = unlocked.clone();
    let on_achieved = handler(move |event: &Event| {
        if let Event::Achieved(info) = event {
            sink.lock().unwrap().push(info.name.clone());
        }
        Ok(())
    });
    manager.bus().set_handler(ON_ACHIEVED, &on_achieved);

    // First lap comes in too slow to count from construction.
    sleep(Duration::from_millis(600));
    speedrun.tick().expect("handlers succeed");
    assert!(!speedrun.achieved(), "slow lap must not unlock");

    // Second lap follows immediately.
    speedrun.tick().expect("handlers succeed");
    assert!(speedrun.achieved(), "quick lap must unlock");
    assert_eq!(unlocked.lock().unwrap().as_slice(), ["speedrun"]);
}

#[test]
fn test_id_lifecycle_across_achievement_kinds() {
    let manager = AchievementManager::new();

    let plain = manager
        .achievement(7, "first", "First!", "")
        .expect("id 7 starts free");

    // Ids live in one domain regardless of the achievement kind.
    let err = manager
        .time_based(7, "again", "Again", "", Duration::from_secs(1))
        .unwrap_err();
    assert!(matches!(err, AchievementError::DuplicateId(7)));

    // Dropping the holder frees the id for any kind.
    drop(plain);
    manager
        .incremental(7, "third", "Third", "", 3.0)
        .expect("id 7 is free again after drop");
}

#[test]
fn test_dropping_the_handle_unsubscribes() {
    let manager = AchievementManager::new();
    let mut first = manager.achievement(1, "first", "First!", "").unwrap();
    let mut second = manager.achievement(2, "second", "Second!", "").unwrap();

    let heard = Arc::new(Mutex::new(Vec::new()));
    let sink = heard.clone();
    let on_achieved = handler(move |event: &Event| {
        if let Event::Achieved(info) = event {
            sink.lock().unwrap().push(info.name.clone());
        }
        Ok(())
    });
    manager.bus().set_handler(ON_ACHIEVED, &on_achieved);

    first.set_achieved().expect("handler succeeds");
    drop(on_achieved);

    // With the handle gone the second unlock passes silently.
    second.set_achieved().expect("no live handlers, nothing can fail");

    assert_eq!(heard.lock().unwrap().as_slice(), ["first"]);
    assert_eq!(manager.bus().handler_count(ON_ACHIEVED), 0);
}

#[test]
fn test_events_serialize_for_forwarding() {
    let manager = AchievementManager::new();
    let mut gems = manager
        .incremental(3, "gems", "Gem Hunter", "Collect three gems", 3.0)
        .unwrap();

    // An embedding application would forward events over some wire; here the
    // wire is a vector of JSON lines.
    let lines = Arc::new(Mutex::new(Vec::new()));
    let sink = lines.clone();
    let forward = handler(move |event: &Event| {
        let line = serde_json::to_string(event)?;
        sink.lock().unwrap().push(line);
        Ok(())
    });
    manager.bus().set_handler(ON_INCREMENT, &forward);
    manager.bus().set_handler(ON_ACHIEVED, &forward);

    gems.increment(3.0).expect("forwarding succeeds");

    let lines = lines.lock().unwrap();
    assert_eq!(lines.len(), 2, "one increment line, one achieved line");
    assert_eq!(lines[0], r#"{"increment":{"value":3.0}}"#);
    assert!(
        lines[1].contains(r#""name":"gems""#),
        "achieved line should carry the identity, got: {}",
        lines[1]
    );
}
