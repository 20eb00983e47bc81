use super::*;

#[test]
fn starts_empty() {
    let writer = Typewriter::new("AI");
    assert_eq!(writer.visible(), "");
    assert!(!writer.is_done());
}

#[test]
fn two_ticks_reveal_ai_exactly() {
    let mut writer = Typewriter::new("AI");
    assert!(writer.tick());
    assert_eq!(writer.visible(), "A");
    assert!(writer.tick());
    assert_eq!(writer.visible(), "AI");
    assert!(writer.is_done());
}

#[test]
fn never_shows_more_than_source() {
    let mut writer = Typewriter::new("AI");
    for _ in 0..10 {
        writer.tick();
        assert!(writer.visible().chars().count() <= 2);
    }
    assert!(!writer.tick());
    assert_eq!(writer.visible(), "AI");
}

#[test]
fn reveals_multibyte_characters_whole() {
    let mut writer = Typewriter::new("né✓");
    writer.tick();
    writer.tick();
    assert_eq!(writer.visible(), "né");
    writer.tick();
    assert_eq!(writer.visible(), "né✓");
    assert!(writer.is_done());
}

#[test]
fn restart_begins_fresh_from_empty() {
    let mut writer = Typewriter::new("entropy");
    writer.tick();
    writer.tick();
    writer.restart("AI");
    assert_eq!(writer.visible(), "");
    writer.tick();
    assert_eq!(writer.visible(), "A");
}

#[test]
fn empty_target_is_done_immediately() {
    let mut writer = Typewriter::new("");
    assert!(writer.is_done());
    assert!(!writer.tick());
}
