use super::*;

const FRAME: u64 = 16_666_667; // ~60 FPS

/// Tick once per frame starting at `start`, returning every sampled value
/// and the frame time at which the animation finished.
fn run_to_end(anim: &mut Animatable<f32>, start: u64, max_frames: usize) -> (Vec<f32>, Option<u64>) {
    let mut samples = Vec::new();
    let mut time = start;
    for _ in 0..max_frames {
        let status = anim.tick(time);
        samples.push(anim.value());
        if status == AnimationStatus::Finished {
            return (samples, Some(time));
        }
        time += FRAME;
    }
    (samples, None)
}

#[test]
fn new_animatable_is_idle() {
    let mut anim = Animatable::new(3.0f32);
    assert!(!anim.is_running());
    assert_eq!(anim.tick(0), AnimationStatus::Idle);
    assert_eq!(anim.value(), 3.0);
}

#[test]
fn tween_interpolates_over_time() {
    let mut anim = Animatable::new(0.0f32);
    anim.animate_to(1.0, AnimationType::Tween(AnimationSpec::linear(100)));

    let (samples, finished_at) = run_to_end(&mut anim, 0, 32);

    assert_eq!(samples[0], 0.0, "first tick anchors the start time");
    assert!(samples.iter().any(|v| *v > 0.0 && *v < 1.0));
    assert!(finished_at.is_some());
    assert_eq!(anim.value(), 1.0);
    assert!(!anim.is_running());
    assert_eq!(anim.tick(finished_at.unwrap() + FRAME), AnimationStatus::Idle);
}

#[test]
fn tween_reaches_target_after_duration() {
    let mut anim = Animatable::new(0.0f32);
    anim.animate_to(400.0, AnimationType::Tween(AnimationSpec::linear(300)));
    assert_eq!(anim.tick(1_000), AnimationStatus::Running);
    assert_eq!(anim.tick(1_000 + 150_000_000), AnimationStatus::Running);
    assert!((anim.value() - 200.0).abs() < 0.01);
    assert_eq!(anim.tick(1_000 + 300_000_000), AnimationStatus::Finished);
    assert_eq!(anim.value(), 400.0);
}

#[test]
fn tween_delay_holds_start_value() {
    let mut anim = Animatable::new(0.0f32);
    anim.animate_to(
        1.0,
        AnimationType::Tween(AnimationSpec::linear(100).with_delay(200)),
    );
    anim.tick(0);
    anim.tick(150_000_000);
    assert_eq!(anim.value(), 0.0);
    anim.tick(250_000_000);
    assert!((anim.value() - 0.5).abs() < 0.01);
    assert_eq!(anim.tick(300_000_000), AnimationStatus::Finished);
}

#[test]
fn huge_delay_and_duration_saturate_instead_of_overflowing() {
    let mut anim = Animatable::new(0.0f32);
    anim.animate_to(
        1.0,
        AnimationType::Tween(AnimationSpec::linear(u64::MAX).with_delay(u64::MAX / 1_000)),
    );
    assert_eq!(anim.tick(0), AnimationStatus::Running);
    assert_eq!(anim.tick(u64::MAX), AnimationStatus::Running);
    assert_eq!(anim.value(), 0.0);

    anim.animate_to(1.0, AnimationType::Tween(AnimationSpec::linear(u64::MAX)));
    anim.tick(0);
    assert_eq!(anim.tick(10 * FRAME), AnimationStatus::Running);
    assert!(anim.value() < 1e-3);
}

#[test]
fn zero_duration_tween_finishes_on_second_frame() {
    let mut anim = Animatable::new(0.0f32);
    anim.animate_to(5.0, AnimationType::Tween(AnimationSpec::linear(0)));
    assert_eq!(anim.tick(10), AnimationStatus::Running);
    assert_eq!(anim.tick(20), AnimationStatus::Finished);
    assert_eq!(anim.value(), 5.0);
}

#[test]
fn spring_settles_on_target() {
    let mut anim = Animatable::new(0.0f32);
    anim.animate_to(100.0, AnimationType::Spring(SpringSpec::default()));
    let (_, finished_at) = run_to_end(&mut anim, 0, 300);
    assert!(finished_at.is_some(), "spring should settle");
    assert_eq!(anim.value(), 100.0);
    assert_eq!(anim.velocity(), 0.0);
}

#[test]
fn bouncy_spring_overshoots() {
    let mut anim = Animatable::new(0.0f32);
    anim.animate_to(100.0, AnimationType::Spring(SpringSpec::new(0.5, 100.0)));
    let (samples, finished_at) = run_to_end(&mut anim, 0, 600);
    assert!(finished_at.is_some());
    assert!(samples.iter().any(|v| *v > 100.0), "under-damped spring should overshoot");
}

#[test]
fn clamped_spring_never_passes_target() {
    let mut anim = Animatable::new(0.0f32);
    anim.animate_to(
        -20.0,
        AnimationType::Spring(SpringSpec::new(0.5, 100.0).with_overshoot_clamping(true)),
    );
    let (samples, finished_at) = run_to_end(&mut anim, 0, 600);
    assert!(finished_at.is_some());
    assert!(samples.iter().all(|v| *v >= -20.0), "samples: {samples:?}");
    assert_eq!(anim.value(), -20.0);
}

#[test]
fn spring_integrates_frame_deltas_not_total_elapsed() {
    // Two animatables, one ticked every frame and one ticked at the same
    // times; both must agree, and a long gap must not re-run earlier time.
    let mut anim = Animatable::new(0.0f32);
    anim.animate_to(10.0, AnimationType::Spring(SpringSpec::new(1.0, 100.0)));
    anim.tick(0);
    anim.tick(FRAME);
    let after_one = anim.value();
    anim.tick(2 * FRAME);
    let after_two = anim.value();
    assert!(after_one > 0.0);
    assert!(after_two > after_one);
    assert!(after_two < 10.0);
}

#[test]
fn retarget_keeps_current_value_and_velocity() {
    let mut anim = Animatable::new(0.0f32);
    anim.animate_to(100.0, AnimationType::Spring(SpringSpec::new(1.0, 100.0)));
    anim.tick(0);
    anim.tick(FRAME);
    anim.tick(2 * FRAME);
    let value = anim.value();
    let velocity = anim.velocity();
    assert!(velocity > 0.0);

    anim.animate_to(0.0, AnimationType::Spring(SpringSpec::new(1.0, 100.0)));
    assert_eq!(anim.value(), value);
    assert_eq!(anim.velocity(), velocity);
    assert_eq!(anim.target(), 0.0);
    assert!(anim.is_running());
}

#[test]
fn snap_to_cancels_animation() {
    let mut anim = Animatable::new(0.0f32);
    anim.animate_to(50.0, AnimationType::Tween(AnimationSpec::default()));
    anim.tick(0);
    anim.snap_to(7.0);
    assert!(!anim.is_running());
    assert_eq!(anim.value(), 7.0);
    assert_eq!(anim.target(), 7.0);
    assert_eq!(anim.tick(FRAME), AnimationStatus::Idle);
}

#[test]
fn stop_keeps_current_value() {
    let mut anim = Animatable::new(0.0f32);
    anim.animate_to(100.0, AnimationType::Tween(AnimationSpec::linear(100)));
    anim.tick(0);
    anim.tick(50_000_000);
    let value = anim.value();
    anim.stop();
    assert!(!anim.is_running());
    assert_eq!(anim.value(), value);
}

#[test]
fn stale_timestamp_does_not_move_spring() {
    let mut anim = Animatable::new(0.0f32);
    anim.animate_to(10.0, AnimationType::Spring(SpringSpec::default()));
    anim.tick(5 * FRAME);
    anim.tick(FRAME);
    assert_eq!(anim.value(), 0.0);
}

#[test]
fn color_lerp_blends_channels() {
    let from = Color::BLACK;
    let to = Color::WHITE;
    let mid = from.lerp(&to, 0.5);
    assert_eq!(mid, Color(0.5, 0.5, 0.5, 1.0));
}

#[test]
fn animation_spec_default_has_reasonable_values() {
    let spec = AnimationSpec::default();
    assert_eq!(spec.duration_millis, 300);
    assert_eq!(spec.easing, Easing::FastOutSlowInEasing);
    assert_eq!(spec.delay_millis, 0);
}

#[test]
fn spring_spec_default_is_critically_damped() {
    let spec = SpringSpec::default();
    assert_eq!(spec.damping_ratio, 1.0);
    assert!(!spec.overshoot_clamping);
}

#[test]
fn spring_spec_bouncy_has_low_damping() {
    let spec = SpringSpec::bouncy();
    assert!(spec.damping_ratio < 1.0, "Bouncy spring should be under-damped");
}

#[test]
fn spring_spec_stiff_has_high_stiffness() {
    let spec = SpringSpec::stiff();
    assert!(spec.stiffness > SpringSpec::default().stiffness);
}
