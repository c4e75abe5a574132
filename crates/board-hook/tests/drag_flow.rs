//! Press-drag-release gestures through the hook, against an in-memory surface.

mod common;

use board_hook::{BoardHook, HookConfig, Point, PositionalEvent};
use common::{event, FakeSurface};
use proptest::prelude::*;

type Hook = BoardHook<FakeSurface, Vec<PositionalEvent>>;

fn mount_with(layout: &str, config: &HookConfig) -> Hook {
    let mut hook = BoardHook::new(FakeSurface::from_layout(layout), Vec::new(), config);
    hook.mounted();
    hook
}

fn mount(layout: &str) -> Hook {
    mount_with(layout, &HookConfig::default())
}

fn press(hook: &mut Hook, label: &str) -> bool {
    let cell = hook.surface().index_of(label);
    let point = hook.surface().center(label);
    hook.on_pointer_down(Some(&cell), point)
}

fn drag_to(hook: &mut Hook, label: &str) {
    let point = hook.surface().center(label);
    hook.on_pointer_move(point);
}

fn release_at(hook: &mut Hook, label: &str) {
    let point = hook.surface().center(label);
    hook.on_pointer_up(point);
}

fn assert_torn_down(hook: &Hook) {
    let surface = hook.surface();
    assert!(!hook.is_dragging());
    assert!(!surface.listening);
    assert!(surface.hovered.is_empty());
    assert!(surface.live_proxies.is_empty());
    assert_eq!(surface.listens, surface.unlistens);
}

#[test]
fn test_legal_drop_emits_origin_then_destination() {
    let mut hook = mount("8/8/8/8/8/x7/8/R7");

    assert!(press(&mut hook, "a1"));
    assert!(hook.is_dragging());
    assert!(hook.surface().listening);

    drag_to(&mut hook, "a2");
    release_at(&mut hook, "a2");

    assert_eq!(
        hook.host(),
        &vec![event("a", "1", "R"), event("a", "2", "0")]
    );
    assert!(hook.surface().rejections.is_empty());
    assert_torn_down(&hook);
}

#[test]
fn test_illegal_drop_still_emits_both_events_and_cues() {
    let mut hook = mount("8/8/8/8/8/x7/8/R7");

    press(&mut hook, "a1");
    drag_to(&mut hook, "a3");
    drag_to(&mut hook, "a4");
    let a4 = hook.surface().center("a4");
    let intent = hook.on_pointer_up(a4);

    assert!(intent.is_some());
    assert_eq!(
        hook.host(),
        &vec![event("a", "1", "R"), event("a", "4", "0")]
    );
    let a4 = hook.surface().index_of("a4");
    assert_eq!(hook.surface().rejections, vec![a4]);
    assert_torn_down(&hook);
}

#[test]
fn test_drop_onto_occupied_cell_is_rejected() {
    let mut hook = mount("8/8/8/8/8/x7/8/R7");

    press(&mut hook, "a1");
    release_at(&mut hook, "a3");

    assert_eq!(hook.host().len(), 2);
    assert_eq!(hook.host()[1], event("a", "3", "x"));
    assert_eq!(hook.surface().rejections.len(), 1);
}

#[test]
fn test_release_off_board_emits_nothing() {
    let mut hook = mount("8/8/8/8/8/x7/8/R7");

    press(&mut hook, "a1");
    drag_to(&mut hook, "b2");
    assert_eq!(hook.on_pointer_up(Point::new(-10.0, 900.0)), None);

    assert!(hook.host().is_empty());
    assert!(hook.surface().rejections.is_empty());
    assert_torn_down(&hook);
}

#[test]
fn test_release_on_unaddressable_cell_emits_nothing() {
    let mut hook = mount("8/8/8/8/8/x7/8/R7");

    press(&mut hook, "a1");
    let footer = hook.surface().footer_center();
    hook.on_pointer_move(footer);
    assert_eq!(hook.on_pointer_up(footer), None);

    assert!(hook.host().is_empty());
    assert_torn_down(&hook);
}

#[test]
fn test_cancel_emits_nothing() {
    let mut hook = mount("8/8/8/8/8/x7/8/R7");

    press(&mut hook, "a1");
    drag_to(&mut hook, "a2");
    hook.on_pointer_cancel();

    assert!(hook.host().is_empty());
    assert_torn_down(&hook);

    // A stray release after the cancel is inert.
    release_at(&mut hook, "a2");
    assert!(hook.host().is_empty());
}

#[test]
fn test_press_on_empty_or_blocker_does_not_start() {
    let mut hook = mount("8/8/8/8/8/x7/8/R7");

    assert!(!press(&mut hook, "a2"));
    assert!(!press(&mut hook, "a3"));
    let footer = hook.surface().footer();
    assert!(!hook.on_pointer_down(Some(&footer), Point::default()));
    assert!(!hook.on_pointer_down(None, Point::default()));

    assert!(!hook.is_dragging());
    assert_eq!(hook.surface().listens, 0);
    assert_eq!(hook.surface().spawned, 0);
}

#[test]
fn test_unrecognized_piece_drags_but_is_rejected() {
    let mut hook = mount("8/8/8/8/8/8/8/8");
    hook.surface_mut().render("b1", "Q");
    hook.updated();

    assert!(press(&mut hook, "b1"));
    release_at(&mut hook, "b2");

    assert_eq!(
        hook.host(),
        &vec![event("b", "1", "Q"), event("b", "2", "0")]
    );
    let b2 = hook.surface().index_of("b2");
    assert_eq!(hook.surface().rejections, vec![b2]);
    assert_torn_down(&hook);
}

#[test]
fn test_opponent_leaper_drop_is_rejected_by_default() {
    let mut hook = mount("8/8/8/8/3P4/8/8/8");

    assert!(press(&mut hook, "d4"));
    release_at(&mut hook, "e6");

    assert_eq!(
        hook.host(),
        &vec![event("d", "4", "P"), event("e", "6", "0")]
    );
    let e6 = hook.surface().index_of("e6");
    assert_eq!(hook.surface().rejections, vec![e6]);
}

#[test]
fn test_second_press_during_drag_is_ignored() {
    let mut hook = mount("8/8/8/8/8/x7/8/RK6");

    assert!(press(&mut hook, "a1"));
    assert!(!press(&mut hook, "b1"));
    assert_eq!(hook.surface().spawned, 1);
    assert_eq!(hook.surface().listens, 1);

    release_at(&mut hook, "a2");
    assert_eq!(hook.host()[0], event("a", "1", "R"));
}

#[test]
fn test_listeners_attach_once_per_gesture() {
    let mut hook = mount("8/8/8/8/8/x7/8/R7");

    for _ in 0..3 {
        press(&mut hook, "a1");
        drag_to(&mut hook, "a2");
        release_at(&mut hook, "a2");
    }

    assert_eq!(hook.surface().listens, 3);
    assert_eq!(hook.surface().spawned, 3);
    assert_torn_down(&hook);
}

#[test]
fn test_hover_follows_pointer_one_cell_at_a_time() {
    let mut hook = mount("8/8/8/8/8/x7/8/R7");
    press(&mut hook, "a1");

    for label in ["a2", "b2", "b2", "c3", "a3"] {
        drag_to(&mut hook, label);
        let cell = hook.surface().index_of(label);
        assert_eq!(hook.surface().hovered.iter().copied().collect::<Vec<_>>(), vec![cell]);
    }
    hook.on_pointer_move(Point::new(-5.0, -5.0));
    assert!(hook.surface().hovered.is_empty());

    assert_eq!(hook.surface().max_hovered, 1);
    hook.on_pointer_cancel();
}

#[test]
fn test_proxy_is_centered_under_pointer() {
    let mut hook = mount("8/8/8/8/8/x7/8/R7");
    press(&mut hook, "a1");

    hook.on_pointer_move(Point::new(120.0, 60.0));
    assert_eq!(hook.surface().proxy_position, Some(Point::new(100.0, 40.0)));
    hook.on_pointer_cancel();
}

#[test]
fn test_release_on_origin_emits_both_events() {
    let mut hook = mount("8/8/8/8/8/x7/8/R7");

    press(&mut hook, "a1");
    release_at(&mut hook, "a1");

    assert_eq!(
        hook.host(),
        &vec![event("a", "1", "R"), event("a", "1", "R")]
    );
    assert_eq!(hook.surface().rejections.len(), 1);
}

#[test]
fn test_click_only_config_never_drags() {
    let mut hook = mount_with("8/8/8/8/8/x7/8/R7", &HookConfig::click_only());

    assert!(!press(&mut hook, "a1"));
    release_at(&mut hook, "a2");

    assert!(hook.host().is_empty());
    assert_eq!(hook.surface().spawned, 0);
    assert_eq!(hook.surface().listens, 0);
}

#[test]
fn test_destroyed_mid_drag_tears_down_silently() {
    let mut hook = mount("8/8/8/8/8/x7/8/R7");

    press(&mut hook, "a1");
    drag_to(&mut hook, "a2");
    hook.destroyed();

    assert!(hook.host().is_empty());
    assert!(!hook.surface().bound);
    assert_torn_down(&hook);
}

#[test]
fn test_drop_reads_board_at_release_time() {
    let mut hook = mount("8/8/8/8/8/x7/8/R7");

    press(&mut hook, "a1");
    hook.surface_mut().render("a3", "0");
    release_at(&mut hook, "a5");

    assert_eq!(hook.host().len(), 2);
    assert!(hook.surface().rejections.is_empty());
}

fn arb_point() -> impl Strategy<Value = Point> {
    (-60.0f64..460.0, -60.0f64..520.0).prop_map(|(x, y)| Point::new(x, y))
}

proptest! {
    #[test]
    fn prop_at_most_one_cell_hovered(path in prop::collection::vec(arb_point(), 0..40)) {
        let mut hook = mount("8/8/8/8/8/x7/8/R7");
        prop_assert!(press(&mut hook, "a1"));

        for point in path {
            hook.on_pointer_move(point);
            prop_assert!(hook.surface().hovered.len() <= 1);
        }
        prop_assert!(hook.surface().max_hovered <= 1);

        hook.on_pointer_cancel();
        prop_assert!(hook.surface().hovered.is_empty());
        prop_assert!(!hook.surface().listening);
        prop_assert!(hook.surface().live_proxies.is_empty());
    }

    #[test]
    fn prop_every_drop_emits_zero_or_two_events(
        path in prop::collection::vec(arb_point(), 0..10),
        end in arb_point(),
    ) {
        let mut hook = mount("8/8/8/8/8/x7/8/R7");
        press(&mut hook, "a1");
        for point in path {
            hook.on_pointer_move(point);
        }
        let intent = hook.on_pointer_up(end);

        let emitted = hook.host().len();
        let expected = if intent.is_some() { 2 } else { 0 };
        prop_assert_eq!(emitted, expected);
        prop_assert!(!hook.surface().listening);
        prop_assert!(hook.surface().live_proxies.is_empty());
    }
}
