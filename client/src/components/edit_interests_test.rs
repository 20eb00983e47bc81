use super::*;

#[test]
fn open_then_enter_then_close_then_leave() {
    let phase = PanelPhase::default();
    assert!(!phase.is_mounted());

    let phase = phase.request_open();
    assert_eq!(phase, PanelPhase::Entering);
    assert!(phase.is_mounted());
    assert!(!phase.is_visible());

    let phase = phase.entered();
    assert!(phase.is_visible());

    let phase = phase.request_close();
    assert_eq!(phase, PanelPhase::Leaving);
    assert!(phase.is_mounted());
    assert!(!phase.is_visible());

    assert_eq!(phase.left(), PanelPhase::Closed);
}

#[test]
fn reopen_during_exit_ignores_stale_exit_timer() {
    let phase = PanelPhase::Open.request_close().request_open();
    assert_eq!(phase, PanelPhase::Entering);
    assert_eq!(phase.left(), PanelPhase::Entering);
    assert_eq!(phase.entered(), PanelPhase::Open);
}

#[test]
fn close_during_enter_ignores_stale_enter_timer() {
    let phase = PanelPhase::Closed.request_open().request_close();
    assert_eq!(phase, PanelPhase::Leaving);
    assert_eq!(phase.entered(), PanelPhase::Leaving);
}

#[test]
fn close_when_closed_is_noop() {
    assert_eq!(PanelPhase::Closed.request_close(), PanelPhase::Closed);
    assert_eq!(PanelPhase::Open.request_open(), PanelPhase::Open);
}

#[test]
fn exit_animation_outlasts_enter_delay() {
    assert!(EXIT_ANIMATION > ENTER_DELAY);
}
