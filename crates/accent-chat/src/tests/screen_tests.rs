use super::*;
use crate::messages::Sender;
use crate::theme::{ACCENT_COLOR, BACKDROP_COLOR};

const FRAME: u64 = 16_666_667;

fn run_until_idle(screen: &mut ChatScreen, time: &mut u64) -> Vec<ScreenEvent> {
    let mut events = Vec::new();
    for _ in 0..1_000 {
        *time += FRAME;
        events.extend(screen.on_frame(*time));
        if screen.is_idle() {
            break;
        }
    }
    events
}

#[test]
fn starts_closed_with_default_accent() {
    let screen = ChatScreen::default();
    assert_eq!(screen.sheet_state(), SheetState::CLOSED);
    assert!(!screen.backdrop_visible());
    assert_eq!(screen.accent(), ACCENT_COLOR);
    for bubble in screen.bubbles() {
        match bubble.message.from {
            Sender::Me => {
                assert_eq!(bubble.background, ACCENT_COLOR);
                assert_eq!(bubble.text_color, Color::WHITE);
            }
            Sender::Them => {
                assert_eq!(bubble.background, THEIR_BUBBLE_COLOR);
                assert_eq!(bubble.text_color, THEIR_TEXT_COLOR);
            }
        }
    }
}

#[test]
fn settings_opens_and_backdrop_closes() {
    let mut screen = ChatScreen::default();
    assert_eq!(screen.tap_backdrop(), None);
    assert_eq!(screen.tap_settings(), Some(SheetEvent::Opened));
    assert!(screen.backdrop_visible());
    assert_eq!(screen.backdrop_color(), Some(BACKDROP_COLOR));
    assert_eq!(screen.tap_settings(), None, "already open");
    assert_eq!(screen.tap_backdrop(), Some(SheetEvent::Closed));
    assert_eq!(screen.sheet_state(), SheetState::CLOSED);
    assert_eq!(screen.backdrop_color(), None);
}

#[test]
fn pick_requires_open_sheet() {
    let mut screen = ChatScreen::default();
    assert_eq!(screen.pick_accent(1), None);
    assert_eq!(screen.accent(), ACCENT_COLOR);
}

#[test]
fn pick_out_of_range_keeps_sheet_open() {
    let mut screen = ChatScreen::default();
    screen.tap_settings();
    assert_eq!(screen.pick_accent(999), None);
    assert!(screen.sheet_state().is_open);
}

#[test]
fn pick_sets_accent_closes_sheet_and_recolors_in_order() {
    let mut screen = ChatScreen::default();
    screen.tap_settings();
    let yellow = Color::from_hex("#FFD600").expect("valid color");
    let index = screen.palette().position(yellow).expect("yellow in palette");

    assert_eq!(screen.pick_accent(index), Some(yellow));
    assert_eq!(screen.accent(), yellow);
    assert_eq!(screen.sheet_state(), SheetState::CLOSED);

    // Message 1 starts after 100ms, message 8 only after 800ms.
    let mut time = 0;
    screen.on_frame(time);
    time = 450_000_000;
    screen.on_frame(time);
    let views: Vec<_> = screen.bubbles().collect();
    let first = views.iter().find(|v| v.message.id == 1).expect("message 1");
    let last = views.iter().find(|v| v.message.id == 8).expect("message 8");
    assert_eq!(first.background, yellow);
    assert_eq!(last.background, ACCENT_COLOR);

    let events = run_until_idle(&mut screen, &mut time);
    assert_eq!(events, vec![ScreenEvent::RecolorFinished(yellow)]);
    for bubble in screen.bubbles().filter(|b| b.message.is_mine()) {
        assert_eq!(bubble.background, yellow);
        assert_eq!(bubble.text_color, Color::BLACK, "light accent needs dark text");
    }
}

#[test]
fn oversized_recolor_stagger_saturates() {
    let options = ChatOptions::default().with_recolor_stagger(u64::MAX);
    assert_eq!(options.recolor_spec_for(0).delay_millis, 0);
    assert_eq!(options.recolor_spec_for(8).delay_millis, u64::MAX);

    let mut screen = ChatScreen::new(options);
    screen.tap_settings();
    assert_eq!(screen.pick_accent(1), screen.palette().get(1));
    for frame in 0..10u64 {
        assert!(screen.on_frame(frame * FRAME).is_empty());
    }
    for bubble in screen.bubbles().filter(|b| b.message.is_mine()) {
        assert_eq!(bubble.background, ACCENT_COLOR);
    }
}

#[test]
fn pointer_drag_dismisses_sheet() {
    let mut screen = ChatScreen::default();
    screen.tap_settings();
    screen.pointer(&PointerEvent::down(100.0, 300.0));
    screen.pointer(&PointerEvent::moved(100.0, 400.0));
    screen.pointer(&PointerEvent::moved(100.0, 500.0));
    assert_eq!(screen.sheet_state().vertical_offset, 200.0);
    screen.pointer(&PointerEvent::up(100.0, 500.0));

    let mut time = 0;
    let events = run_until_idle(&mut screen, &mut time);
    assert_eq!(events, vec![ScreenEvent::Sheet(SheetEvent::Closed)]);
    assert!(!screen.backdrop_visible());
}

#[test]
fn pointer_is_ignored_while_closed() {
    let mut screen = ChatScreen::default();
    screen.pointer(&PointerEvent::down(0.0, 0.0));
    screen.pointer(&PointerEvent::moved(0.0, 200.0));
    screen.tap_settings();
    screen.pointer(&PointerEvent::moved(0.0, 300.0));
    assert_eq!(screen.sheet_state().vertical_offset, 0.0);
}

#[test]
fn custom_messages_only_tint_mine() {
    let messages = [
        Message::new(0, Sender::Them, "hi"),
        Message::new(1, Sender::Me, "hello"),
    ];
    let mut screen = ChatScreen::with_messages(ChatOptions::default(), &messages);
    screen.set_accent(Color::WHITE);
    let mut time = 0;
    run_until_idle(&mut screen, &mut time);
    let views: Vec<_> = screen.bubbles().collect();
    assert_eq!(views[0].background, THEIR_BUBBLE_COLOR);
    assert_eq!(views[1].background, Color::WHITE);
    assert_eq!(views[1].text_color, Color::BLACK);
}
