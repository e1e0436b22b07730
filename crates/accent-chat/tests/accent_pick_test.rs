use accent_graphics::{is_dark, Color};
use accent_testing::prelude::*;

#[test]
fn picking_a_color_closes_sheet_and_recolors_my_bubbles() {
    let mut robot = ChatRobot::new();
    robot.click_settings();
    let blue = robot.pick(3).expect("palette has a fourth color");
    assert_eq!(robot.accent(), blue);
    assert_eq!(robot.sheet_state(), SheetState::CLOSED);

    assert!(robot.wait_for_idle());
    assert_eq!(robot.take_events(), vec![ScreenEvent::RecolorFinished(blue)]);

    let text = if is_dark(&blue.to_hex()) {
        Color::WHITE
    } else {
        Color::BLACK
    };
    for bubble in robot.screen().bubbles().filter(|b| b.message.is_mine()) {
        assert_eq!(bubble.background, blue);
        assert_eq!(bubble.text_color, text);
    }
}

#[test]
fn bubbles_recolor_top_to_bottom() {
    let mut robot = ChatRobot::new();
    robot.click_settings();
    let white = robot
        .screen()
        .palette()
        .position(Color::from_hex("#F5F5F5").expect("valid color"))
        .expect("light entry in palette");
    let picked = robot.pick(white).expect("valid index");

    let mut first_done_at = Vec::new();
    while !robot.screen().is_idle() {
        robot.advance_frame();
        for bubble in robot.screen().bubbles().filter(|b| b.message.is_mine()) {
            if bubble.background == picked && !first_done_at.contains(&bubble.message.id) {
                first_done_at.push(bubble.message.id);
            }
        }
    }

    let mut sorted = first_done_at.clone();
    sorted.sort_unstable();
    assert_eq!(first_done_at, sorted, "later messages finish later");
    assert!(robot
        .screen()
        .bubbles()
        .filter(|b| b.message.is_mine())
        .all(|b| b.text_color == Color::BLACK));
}

#[test]
fn picking_again_mid_recolor_retargets() {
    let mut robot = ChatRobot::new();
    robot.click_settings();
    robot.pick(1);
    robot.advance_time(250_000_000);
    robot.click_settings();
    let last = robot.pick(0).expect("default accent");
    assert!(robot.wait_for_idle());
    assert_eq!(
        robot.take_events(),
        vec![ScreenEvent::RecolorFinished(last)]
    );
    for bubble in robot.screen().bubbles().filter(|b| b.message.is_mine()) {
        assert_eq!(bubble.background, last);
    }
}
