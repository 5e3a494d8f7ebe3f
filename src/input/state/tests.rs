use super::*;
use crate::config::Config;
use crate::draw::{Color, FontDescriptor, Snapshot, WHITE};
use crate::geometry::Point;
use crate::input::{DrawSettings, Key, LineWidth, Theme, Tool, WhiteboardSettings};

fn create_test_input_state() -> InputState {
    let mut state = InputState::new(
        DrawSettings::default(),
        WhiteboardSettings::default(),
        FontDescriptor::default(),
        0,
    );
    state.resize(200, 200);
    state
}

fn drag(state: &mut InputState, points: &[(f64, f64)]) {
    let (first, rest) = points.split_first().unwrap();
    state.on_pointer_down(Point::new(first.0, first.1));
    for &(x, y) in rest {
        state.on_pointer_move(Point::new(x, y));
    }
    state.on_pointer_up();
}

fn shown(state: &InputState) -> Snapshot {
    state.surface.capture_snapshot().unwrap()
}

fn ink_pixels(snapshot: &Snapshot, x0: i32, y0: i32, x1: i32, y1: i32) -> usize {
    let mut count = 0;
    for y in y0..y1 {
        for x in x0..x1 {
            if snapshot.pixel_rgba(x, y) != Some([255, 255, 255, 255]) {
                count += 1;
            }
        }
    }
    count
}

const WHITE_PX: Option<[u8; 4]> = Some([255, 255, 255, 255]);
const BLACK_PX: Option<[u8; 4]> = Some([0, 0, 0, 255]);

#[test]
fn test_events_before_first_resize_are_ignored() {
    let mut state = InputState::new(
        DrawSettings::default(),
        WhiteboardSettings::default(),
        FontDescriptor::default(),
        0,
    );
    state.on_pointer_down(Point::new(5.0, 5.0));
    state.on_pointer_move(Point::new(10.0, 10.0));
    state.on_pointer_up();

    assert_eq!(state.state, DrawingState::Idle);
    assert!(state.history.is_empty());
    assert!(!state.undo());
    state.clear_canvas();
    assert!(state.history.is_empty());
}

#[test]
fn test_first_resize_records_blank_state() {
    let state = create_test_input_state();
    assert_eq!(state.history.past_len(), 1);
    assert_eq!(state.history.future_len(), 0);
    assert!(!state.can_undo());
    assert_eq!(shown(&state).pixel_rgba(100, 100), WHITE_PX);
}

#[test]
fn test_line_gesture_commits_once() {
    let mut state = create_test_input_state();
    state.select_tool(Tool::Line);
    state.set_line_width(LineWidth::new(5).unwrap());
    state.set_color(Color::from_rgb8(0, 0, 0));
    state.set_opacity(1.0);

    drag(&mut state, &[(10.0, 10.0), (60.0, 40.0), (100.0, 10.0)]);

    let committed = state.history.current().unwrap().clone();
    assert_eq!(state.history.past_len(), 2);
    for x in [10, 30, 50, 70, 99] {
        assert_eq!(committed.pixel_rgba(x, 10), BLACK_PX, "x = {x}");
    }
    // The intermediate preview toward (60, 40) left no trail
    assert_eq!(committed.pixel_rgba(35, 25), WHITE_PX);
    assert_eq!(committed.pixel_rgba(50, 50), WHITE_PX);
    assert_eq!(committed.pixel_rgba(150, 10), WHITE_PX);
    assert_eq!(committed, shown(&state));
}

#[test]
fn test_single_click_pen_leaves_dot() {
    let mut state = create_test_input_state();
    state.set_line_width(LineWidth::new(8).unwrap());
    drag(&mut state, &[(40.0, 40.0)]);

    assert_eq!(state.history.past_len(), 2);
    assert_eq!(shown(&state).pixel_rgba(40, 40), BLACK_PX);
}

#[test]
fn test_undo_redo_after_three_strokes() {
    let mut state = create_test_input_state();
    drag(&mut state, &[(10.0, 20.0), (190.0, 20.0)]);
    drag(&mut state, &[(10.0, 60.0), (190.0, 60.0)]);
    let after_second = shown(&state);
    drag(&mut state, &[(10.0, 100.0), (190.0, 100.0)]);
    assert_eq!(state.history.past_len(), 4);

    assert!(state.undo());
    assert!(state.undo());
    assert_eq!(state.history.past_len(), 2);
    assert_eq!(state.history.future_len(), 2);
    assert_eq!(shown(&state).pixel_rgba(100, 60), WHITE_PX);

    assert!(state.redo());
    assert_eq!(state.history.past_len(), 3);
    assert_eq!(state.history.future_len(), 1);
    assert_eq!(shown(&state), after_second);
}

#[test]
fn test_new_stroke_clears_redo() {
    let mut state = create_test_input_state();
    drag(&mut state, &[(10.0, 20.0), (50.0, 20.0)]);
    drag(&mut state, &[(10.0, 60.0), (50.0, 60.0)]);
    state.undo();
    assert!(state.can_redo());

    drag(&mut state, &[(10.0, 90.0), (50.0, 90.0)]);
    assert!(!state.can_redo());
    assert!(!state.redo());
    assert_eq!(state.history.past_len(), 3);
}

#[test]
fn test_undo_at_initial_state_is_rejected() {
    let mut state = create_test_input_state();
    let before = shown(&state);
    assert!(!state.undo());
    assert_eq!(state.history.past_len(), 1);
    assert_eq!(shown(&state), before);
}

#[test]
fn test_move_and_release_while_idle_are_ignored() {
    let mut state = create_test_input_state();
    let before = shown(&state);
    state.on_pointer_move(Point::new(50.0, 50.0));
    state.on_pointer_up();
    state.on_pointer_leave();
    assert_eq!(state.history.past_len(), 1);
    assert_eq!(shown(&state), before);
}

#[test]
fn test_pointer_leave_commits_like_release() {
    let mut state = create_test_input_state();
    state.select_tool(Tool::Rectangle);
    state.on_pointer_down(Point::new(20.0, 20.0));
    state.on_pointer_move(Point::new(80.0, 80.0));
    assert!(state.gesture().active);
    state.on_pointer_leave();

    assert_eq!(state.state, DrawingState::Idle);
    assert!(!state.gesture().active);
    assert_eq!(state.history.past_len(), 2);
    assert_eq!(shown(&state).pixel_rgba(20, 50), BLACK_PX);
    assert_eq!(shown(&state).pixel_rgba(50, 50), WHITE_PX);
}

#[test]
fn test_gesture_view_tracks_anchor_and_current() {
    let mut state = create_test_input_state();
    state.select_tool(Tool::Circle);
    state.on_pointer_down(Point::new(100.0, 100.0));
    state.on_pointer_move(Point::new(130.0, 100.0));

    let gesture = state.gesture();
    assert_eq!(gesture.anchor, Some(Point::new(100.0, 100.0)));
    assert_eq!(gesture.current, Some(Point::new(130.0, 100.0)));
}

#[test]
fn test_preview_never_touches_history() {
    let mut state = create_test_input_state();
    state.select_tool(Tool::Circle);
    let blank = state.history.current().unwrap().clone();

    state.on_pointer_down(Point::new(100.0, 100.0));
    state.on_pointer_move(Point::new(160.0, 100.0));
    state.on_pointer_move(Point::new(120.0, 100.0));

    assert_eq!(state.history.past_len(), 1);
    assert_eq!(state.history.current(), Some(&blank));
    let preview = shown(&state);
    assert_eq!(preview.pixel_rgba(119, 100), BLACK_PX);
    assert_eq!(preview.pixel_rgba(160, 100), WHITE_PX);
}

#[test]
fn test_committed_shape_matches_last_preview() {
    let mut state = create_test_input_state();
    state.select_tool(Tool::Circle);
    state.on_pointer_down(Point::new(97.3, 101.6));
    state.on_pointer_move(Point::new(141.9, 77.2));
    let last_preview = shown(&state);
    state.on_pointer_up();

    assert_eq!(state.history.current(), Some(&last_preview));
}

#[test]
fn test_eraser_clears_double_width() {
    let mut state = create_test_input_state();
    state.set_line_width(LineWidth::new(12).unwrap());
    drag(&mut state, &[(20.0, 100.0), (180.0, 100.0)]);

    state.set_line_width(LineWidth::new(5).unwrap());
    state.select_tool(Tool::Eraser);
    assert_eq!(state.draw_settings.mode, crate::input::DrawingMode::Erase);
    drag(&mut state, &[(100.0, 20.0), (100.0, 180.0)]);

    let snapshot = shown(&state);
    assert_eq!(state.history.past_len(), 3);
    assert_eq!(snapshot.pixel_rgba(100, 100).map(|p| p[3]), Some(0));
    // 10px wide eraser reaches 5px either side of the centre
    assert_eq!(snapshot.pixel_rgba(96, 100).map(|p| p[3]), Some(0));
    assert_eq!(snapshot.pixel_rgba(110, 100), BLACK_PX);
}

#[test]
fn test_opacity_blends_pen_color() {
    let mut state = create_test_input_state();
    state.set_opacity(0.5);
    state.set_line_width(LineWidth::new(8).unwrap());
    drag(&mut state, &[(20.0, 50.0), (80.0, 50.0)]);

    let [r, g, b, a] = shown(&state).pixel_rgba(50, 50).unwrap();
    assert_eq!(a, 255);
    assert!((120..=135).contains(&r), "r = {r}");
    assert_eq!(r, g);
    assert_eq!(g, b);
}

#[test]
fn test_text_enter_commits_once() {
    let mut state = create_test_input_state();
    state.select_tool(Tool::Text);
    state.on_pointer_down(Point::new(20.0, 20.0));
    assert!(matches!(state.state, DrawingState::EditingText { .. }));

    state.on_key_press(Key::Char('h'));
    state.on_key_press(Key::Char('i'));
    assert_eq!(state.text_preview().as_deref(), Some("hi_"));
    state.on_key_press(Key::Return);

    assert_eq!(state.state, DrawingState::Idle);
    assert_eq!(state.history.past_len(), 2);
    let snapshot = shown(&state);
    assert!(ink_pixels(&snapshot, 20, 20, 60, 44) > 0);
    assert_eq!(ink_pixels(&snapshot, 0, 60, 200, 200), 0);
}

#[test]
fn test_empty_or_blank_text_is_discarded() {
    let mut state = create_test_input_state();
    state.select_tool(Tool::Text);

    state.on_pointer_down(Point::new(20.0, 20.0));
    assert!(!state.blur_text());

    state.on_pointer_down(Point::new(20.0, 20.0));
    state.type_text("  \n ");
    state.on_key_press(Key::Return);

    assert_eq!(state.state, DrawingState::Idle);
    assert_eq!(state.history.past_len(), 1);
}

#[test]
fn test_escape_discards_text() {
    let mut state = create_test_input_state();
    state.select_tool(Tool::Text);
    state.on_pointer_down(Point::new(20.0, 20.0));
    state.type_text("draft");
    state.on_key_press(Key::Escape);

    assert_eq!(state.state, DrawingState::Idle);
    assert_eq!(state.history.past_len(), 1);
    assert_eq!(ink_pixels(&shown(&state), 0, 0, 200, 200), 0);
}

#[test]
fn test_shift_enter_inserts_newline_and_backspace_deletes() {
    let mut state = create_test_input_state();
    state.select_tool(Tool::Text);
    state.on_pointer_down(Point::new(10.0, 10.0));

    state.on_key_press(Key::Char('a'));
    state.on_key_press(Key::Char('x'));
    state.on_key_press(Key::Backspace);
    state.on_key_press(Key::Shift);
    state.on_key_press(Key::Return);
    state.on_key_release(Key::Shift);
    state.on_key_press(Key::Char('b'));

    match &state.state {
        DrawingState::EditingText { buffer, .. } => assert_eq!(buffer, "a\nb"),
        other => panic!("expected text editing, got {other:?}"),
    }

    state.on_key_press(Key::Return);
    assert_eq!(state.history.past_len(), 2);
    let snapshot = shown(&state);
    // Second line sits one line height (20px) below the first
    assert!(ink_pixels(&snapshot, 10, 10, 40, 30) > 0);
    assert!(ink_pixels(&snapshot, 10, 31, 40, 50) > 0);
}

#[test]
fn test_pointer_down_while_editing_commits_pending_text() {
    let mut state = create_test_input_state();
    state.select_tool(Tool::Text);
    state.on_pointer_down(Point::new(10.0, 10.0));
    state.type_text("one");
    state.on_pointer_down(Point::new(10.0, 100.0));

    assert_eq!(state.history.past_len(), 2);
    match &state.state {
        DrawingState::EditingText { position, buffer } => {
            assert_eq!(*position, Point::new(10.0, 100.0));
            assert!(buffer.is_empty());
        }
        other => panic!("expected a new text session, got {other:?}"),
    }
}

#[test]
fn test_undo_while_editing_commits_then_undoes() {
    let mut state = create_test_input_state();
    state.select_tool(Tool::Text);
    state.on_pointer_down(Point::new(10.0, 10.0));
    state.type_text("note");

    assert!(state.undo());
    assert_eq!(state.state, DrawingState::Idle);
    assert_eq!(state.history.past_len(), 1);
    assert_eq!(state.history.future_len(), 1);
}

#[test]
fn test_undo_during_gesture_is_rejected() {
    let mut state = create_test_input_state();
    drag(&mut state, &[(10.0, 10.0), (20.0, 20.0)]);
    state.on_pointer_down(Point::new(50.0, 50.0));

    assert!(!state.undo());
    assert_eq!(state.history.past_len(), 2);
    state.on_pointer_up();
    assert_eq!(state.history.past_len(), 3);
}

#[test]
fn test_clear_canvas_resets_history() {
    let mut state = create_test_input_state();
    drag(&mut state, &[(10.0, 10.0), (150.0, 150.0)]);
    drag(&mut state, &[(10.0, 150.0), (150.0, 10.0)]);
    state.undo();

    state.clear_canvas();
    assert_eq!(state.history.past_len(), 1);
    assert_eq!(state.history.future_len(), 0);
    assert_eq!(ink_pixels(&shown(&state), 0, 0, 200, 200), 0);
}

#[test]
fn test_theme_background_applies_on_clear_only() {
    let mut state = create_test_input_state();
    drag(&mut state, &[(10.0, 10.0), (20.0, 10.0)]);
    state.set_theme(Theme::Dark);

    assert_eq!(state.history.past_len(), 2);
    assert_eq!(shown(&state).pixel_rgba(100, 100), WHITE_PX);

    state.clear_canvas();
    assert_eq!(
        shown(&state).pixel_rgba(100, 100),
        Some([0x1f, 0x29, 0x37, 255])
    );
}

#[test]
fn test_grid_overlay_is_never_committed() {
    let mut state = create_test_input_state();
    state.set_show_grid(true);
    state.set_grid_size(16);
    drag(&mut state, &[(100.0, 100.0)]);

    let committed = state.history.current().unwrap();
    assert_eq!(committed.pixel_rgba(16, 5), WHITE_PX);

    let view = cairo::ImageSurface::create(cairo::Format::ARgb32, 200, 200).unwrap();
    {
        let ctx = cairo::Context::new(&view).unwrap();
        state.render_view(&ctx).unwrap();
    }
    let composed = Snapshot::capture(&view).unwrap();
    assert_ne!(composed.pixel_rgba(16, 5), WHITE_PX);
    assert_eq!(composed.pixel_rgba(100, 100), BLACK_PX);
}

#[test]
fn test_render_view_shows_erased_pixels_as_background() {
    let mut state = create_test_input_state();
    state.select_tool(Tool::Eraser);
    drag(&mut state, &[(50.0, 50.0), (60.0, 50.0)]);

    let view = cairo::ImageSurface::create(cairo::Format::ARgb32, 200, 200).unwrap();
    {
        let ctx = cairo::Context::new(&view).unwrap();
        state.render_view(&ctx).unwrap();
    }
    assert_eq!(Snapshot::capture(&view).unwrap().pixel_rgba(55, 50), WHITE_PX);
}

#[test]
fn test_snap_to_grid_rounds_pointer() {
    let mut state = create_test_input_state();
    state.set_snap_to_grid(true);
    state.set_grid_size(16);
    state.select_tool(Tool::Line);
    state.on_pointer_down(Point::new(21.0, 30.0));
    state.on_pointer_move(Point::new(70.0, 30.0));

    let gesture = state.gesture();
    assert_eq!(gesture.anchor, Some(Point::new(16.0, 32.0)));
    assert_eq!(gesture.current, Some(Point::new(64.0, 32.0)));
}

#[test]
fn test_zoomed_viewport_maps_pointer() {
    let mut state = create_test_input_state();
    state.viewport.origin = Point::new(100.0, 50.0);
    state.viewport.set_scale(2.0);
    state.on_pointer_down(Point::new(200.0, 150.0));

    assert_eq!(state.gesture().anchor, Some(Point::new(50.0, 50.0)));
    state.on_pointer_up();
    assert_eq!(shown(&state).pixel_rgba(50, 50), BLACK_PX);
}

#[test]
fn test_resize_keeps_pixels_and_history() {
    let mut state = create_test_input_state();
    state.set_line_width(LineWidth::new(8).unwrap());
    drag(&mut state, &[(190.0, 190.0)]);

    state.resize(300, 250);
    assert_eq!(state.history.past_len(), 2);
    let snapshot = shown(&state);
    assert_eq!(snapshot.width(), 300);
    assert_eq!(snapshot.pixel_rgba(190, 190), BLACK_PX);
    assert_eq!(snapshot.pixel_rgba(280, 240), WHITE_PX);
}

#[test]
fn test_damage_covers_stroke() {
    let mut state = create_test_input_state();
    state.take_damage();
    drag(&mut state, &[(40.0, 40.0), (60.0, 40.0)]);

    let damage = state.take_damage().unwrap();
    assert!(damage.contains(40, 40));
    assert!(damage.contains(60, 40));
    assert!(!damage.contains(150, 150));
    assert!(state.take_damage().is_none());
}

#[test]
fn test_far_off_pointer_segment_still_commits() {
    let mut state = create_test_input_state();
    state.take_damage();
    drag(&mut state, &[(-3e9, 10.0), (50.0, 10.0)]);

    assert_eq!(state.history.past_len(), 2);
    let damage = state.take_damage().unwrap();
    assert!(damage.contains(50, 10));
}

#[test]
fn test_history_capacity_from_config() {
    let mut config = Config::default();
    config.history.max_snapshots = 3;
    config.drawing.default_tool = Tool::Rectangle;
    config.board.theme = Theme::Blue;

    let mut state = InputState::from_config(&config);
    state.resize(50, 50);
    assert_eq!(state.draw_settings.tool, Tool::Rectangle);
    assert_eq!(shown(&state).pixel_rgba(1, 1), Some([0xee, 0xf6, 0xff, 255]));

    for i in 0..5 {
        let y = 5.0 + i as f64 * 8.0;
        drag(&mut state, &[(5.0, y), (40.0, y + 4.0)]);
    }
    assert_eq!(state.history.past_len(), 3);
    assert!(state.undo());
    assert!(state.undo());
    assert!(!state.undo());
}

#[test]
fn test_selecting_other_tool_commits_text() {
    let mut state = create_test_input_state();
    state.select_tool(Tool::Text);
    state.on_pointer_down(Point::new(10.0, 10.0));
    state.type_text("x");
    state.select_tool(Tool::Pen);

    assert_eq!(state.state, DrawingState::Idle);
    assert_eq!(state.history.past_len(), 2);
    assert_eq!(state.board.canvas_background, WHITE);
}
