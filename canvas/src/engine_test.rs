#![allow(clippy::float_cmp)]

use super::*;
use crate::surface::{DrawCmd, DrawList};

// =============================================================
// Helpers
// =============================================================

const ORIGIN: Point = Point::new(300.0, 40.0);

/// Editor with the demo scene on a 600x400 canvas placed at `ORIGIN`.
fn demo() -> EditorCore {
    let mut core = EditorCore::new().with_demo_scene();
    core.set_viewport(ORIGIN, Vec2::new(600.0, 400.0));
    core
}

/// Host-screen point for a canvas-local position.
fn screen(x: f64, y: f64) -> Point {
    Point::new(ORIGIN.x + x, ORIGIN.y + y)
}

fn click(core: &mut EditorCore, x: f64, y: f64) -> Vec<Action> {
    let actions = core.on_pointer_down(screen(x, y), Button::Primary);
    core.on_pointer_up(screen(x, y), Button::Primary);
    actions
}

fn position_of(core: &EditorCore, index: usize) -> Option<Point> {
    core.registry.get(index).map(Shape::position)
}

// =============================================================
// Construction
// =============================================================

#[test]
fn demo_scene_has_two_unselected_shapes() {
    let core = demo();
    assert_eq!(core.shapes().len(), 2);
    assert_eq!(core.selected_index(), None);
    let labels: Vec<String> = core.shapes().iter().map(Shape::label).collect();
    assert_eq!(labels, ["Green Circle (Circle @ 100,100)", "Blue Rect (Rect @ 200,50)"]);
}

#[test]
fn new_core_starts_in_edit_mode() {
    let core = EditorCore::new();
    assert_eq!(core.mode, Mode::Edit2D);
    assert_eq!(core.input, InputState::Idle);
    assert!(!core.menu.open);
    assert!(core.shapes().is_empty());
}

#[test]
fn with_config_rejects_invalid() {
    let config = EditorConfig { focal_length: -1.0, ..EditorConfig::default() };
    assert!(matches!(EditorCore::with_config(config), Err(CanvasError::InvalidConfig(_))));
}

#[test]
fn with_config_applies_tunables() {
    let config = EditorConfig { rotation_speed_x: 0.5, paste_offset: Vec2::new(5.0, 5.0), ..EditorConfig::default() };
    let Ok(core) = EditorCore::with_config(config) else {
        panic!("config should validate");
    };
    assert_eq!(core.preview.speed_x, 0.5);
    assert_eq!(core.config.paste_offset, Vec2::new(5.0, 5.0));
}

#[test]
fn set_viewport_clamps_small_canvas() {
    let mut core = EditorCore::new();
    core.set_viewport(Point::new(1.0, 2.0), Vec2::new(10.0, 400.0));
    assert_eq!(core.viewport.size, Vec2::new(50.0, 400.0));
    assert_eq!(core.viewport.origin, Point::new(1.0, 2.0));
}

// =============================================================
// Shape creation
// =============================================================

#[test]
fn add_circle_selects_new_shape() {
    let mut core = demo();
    let actions = core.add_circle(Point::new(50.0, 60.0), 20.0, Color::RED, "Dot");
    assert_eq!(core.selected_index(), Some(2));
    assert!(actions.contains(&Action::SelectionChanged { index: Some(2) }));
    assert!(matches!(actions[0], Action::ShapeAdded { index: 2, .. }));
    assert_eq!(core.registry.selected().map(Shape::name), Some("Dot"));
}

#[test]
fn add_clamps_extent_to_creation_range() {
    let mut core = demo();
    core.add_circle(Point::new(0.0, 0.0), 500.0, Color::RED, "");
    core.add_rectangle(Point::new(0.0, 0.0), Vec2::new(1.0, 999.0), Color::RED, "");
    assert_eq!(core.registry.get(2).and_then(Shape::as_circle).map(|c| c.radius), Some(150.0));
    assert_eq!(core.registry.get(3).and_then(Shape::as_rectangle).map(|r| r.size), Some(Vec2::new(10.0, 200.0)));
}

#[test]
fn add_from_settings_uses_defaults_and_clears_name() {
    let mut core = EditorCore::new();
    core.creation.name = "Box".into();
    core.add_rectangle_from_settings();
    core.add_rectangle_from_settings();
    core.add_circle_from_settings();

    let names: Vec<&str> = core.shapes().iter().map(Shape::name).collect();
    assert_eq!(names, ["Box", "Rectangle", "Circle"]);
    assert_eq!(position_of(&core, 0), Some(Point::new(150.0, 150.0)));
    assert_eq!(position_of(&core, 2), Some(Point::new(100.0, 100.0)));
    assert!(core.creation.name.is_empty());
}

// =============================================================
// Pointer: selection
// =============================================================

#[test]
fn press_on_shape_selects_and_drags() {
    let mut core = demo();
    let actions = core.on_pointer_down(screen(100.0, 100.0), Button::Primary);
    assert_eq!(core.selected_index(), Some(0));
    assert!(actions.contains(&Action::SelectionChanged { index: Some(0) }));
    assert!(core.input.is_dragging());
}

#[test]
fn press_on_empty_area_clears_selection() {
    let mut core = demo();
    click(&mut core, 100.0, 100.0);
    let actions = core.on_pointer_down(screen(500.0, 350.0), Button::Primary);
    assert_eq!(core.selected_index(), None);
    assert!(actions.contains(&Action::SelectionChanged { index: None }));
    assert!(matches!(core.input, InputState::Hovering { .. }));
}

#[test]
fn press_outside_canvas_is_ignored() {
    let mut core = demo();
    click(&mut core, 100.0, 100.0);
    let actions = core.on_pointer_down(Point::new(10.0, 10.0), Button::Primary);
    assert!(actions.is_empty());
    assert_eq!(core.selected_index(), Some(0));
    assert!(!core.input.is_dragging());
}

#[test]
fn press_picks_topmost_overlapping_shape() {
    let mut core = demo();
    core.add_rectangle(Point::new(80.0, 80.0), Vec2::new(40.0, 40.0), Color::WHITE, "Cap");
    core.deselect();
    click(&mut core, 100.0, 100.0);
    assert_eq!(core.selected_index(), Some(2));
    click(&mut core, 60.0, 100.0);
    assert_eq!(core.selected_index(), Some(0));
}

#[test]
fn reselecting_same_shape_reports_no_change() {
    let mut core = demo();
    click(&mut core, 100.0, 100.0);
    let actions = click(&mut core, 105.0, 100.0);
    assert!(actions.is_empty());
}

#[test]
fn selection_flags_follow_clicks() {
    let mut core = demo();
    click(&mut core, 100.0, 100.0);
    click(&mut core, 250.0, 80.0);
    let flags: Vec<bool> = core.shapes().iter().map(Shape::is_selected).collect();
    assert_eq!(flags, [false, true]);
}

// =============================================================
// Pointer: drag
// =============================================================

#[test]
fn drag_applies_incremental_deltas() {
    let mut core = demo();
    core.on_pointer_down(screen(100.0, 100.0), Button::Primary);
    core.on_pointer_move(screen(110.0, 105.0));
    let actions = core.on_pointer_move(screen(130.0, 125.0));
    assert_eq!(position_of(&core, 0), Some(Point::new(130.0, 125.0)));
    assert_eq!(actions[0], Action::ShapeMoved { index: 0, position: Point::new(130.0, 125.0) });
}

#[test]
fn drag_grab_offset_is_preserved() {
    let mut core = demo();
    // Grab the rectangle away from its corner.
    core.on_pointer_down(screen(250.0, 80.0), Button::Primary);
    core.on_pointer_move(screen(260.0, 90.0));
    assert_eq!(position_of(&core, 1), Some(Point::new(210.0, 60.0)));
}

#[test]
fn drag_clamps_inside_canvas() {
    let mut core = demo();
    core.on_pointer_down(screen(100.0, 100.0), Button::Primary);
    core.on_pointer_move(screen(-400.0, 100.0));
    assert_eq!(position_of(&core, 0), Some(Point::new(50.0, 100.0)));
    core.on_pointer_move(Point::new(5000.0, 5000.0));
    assert_eq!(position_of(&core, 0), Some(Point::new(550.0, 350.0)));
}

#[test]
fn pinned_shape_reports_no_move() {
    let mut core = demo();
    core.on_pointer_down(screen(100.0, 100.0), Button::Primary);
    core.on_pointer_move(screen(-400.0, 100.0));
    let actions = core.on_pointer_move(screen(-500.0, 100.0));
    assert!(actions.is_empty());
}

#[test]
fn release_ends_drag() {
    let mut core = demo();
    core.on_pointer_down(screen(100.0, 100.0), Button::Primary);
    core.on_pointer_up(screen(100.0, 100.0), Button::Primary);
    assert!(!core.input.is_dragging());
    core.on_pointer_move(screen(200.0, 200.0));
    assert_eq!(position_of(&core, 0), Some(Point::new(100.0, 100.0)));
}

#[test]
fn move_without_press_only_hovers() {
    let mut core = demo();
    core.on_pointer_move(screen(10.0, 10.0));
    assert_eq!(core.input, InputState::Hovering { last: Point::new(10.0, 10.0) });
    core.on_pointer_move(Point::new(0.0, 0.0));
    assert_eq!(core.input, InputState::Idle);
}

#[test]
fn drag_stops_if_selection_disappears() {
    let mut core = demo();
    core.on_pointer_down(screen(100.0, 100.0), Button::Primary);
    core.deselect();
    assert!(core.on_pointer_move(screen(150.0, 150.0)).is_empty());
    assert_eq!(core.input, InputState::Idle);
    assert_eq!(position_of(&core, 0), Some(Point::new(100.0, 100.0)));
}

// =============================================================
// Context menu
// =============================================================

#[test]
fn right_click_opens_menu_without_selecting() {
    let mut core = demo();
    let actions = core.on_pointer_down(screen(100.0, 100.0), Button::Secondary);
    assert!(core.menu.open);
    assert_eq!(core.menu.anchor, Point::new(100.0, 100.0));
    assert_eq!(actions[0], Action::ContextMenuOpened { anchor: Point::new(100.0, 100.0) });
    assert_eq!(core.selected_index(), None);
}

#[test]
fn right_click_outside_canvas_is_ignored() {
    let mut core = demo();
    assert!(core.on_pointer_down(Point::new(0.0, 0.0), Button::Secondary).is_empty());
    assert!(!core.menu.open);
}

#[test]
fn left_press_closes_menu() {
    let mut core = demo();
    core.on_pointer_down(screen(10.0, 10.0), Button::Secondary);
    let actions = core.on_pointer_down(screen(10.0, 10.0), Button::Primary);
    assert!(!core.menu.open);
    assert_eq!(actions[0], Action::ContextMenuClosed);
}

#[test]
fn menu_items_track_availability() {
    let mut core = demo();
    let enabled = |core: &EditorCore| core.menu_items().map(|item| item.enabled);

    assert_eq!(enabled(&core), [false, false, false, false]);
    click(&mut core, 100.0, 100.0);
    assert_eq!(enabled(&core), [true, true, false, true]);
    core.copy();
    assert_eq!(enabled(&core), [true, true, true, true]);
    core.deselect();
    assert_eq!(enabled(&core), [false, false, true, false]);
}

#[test]
fn execute_menu_runs_command_and_closes() {
    let mut core = demo();
    click(&mut core, 100.0, 100.0);
    core.on_pointer_down(screen(100.0, 100.0), Button::Secondary);
    let actions = core.execute_menu(MenuCommand::Delete);
    assert!(!core.menu.open);
    assert_eq!(core.shapes().len(), 1);
    assert_eq!(actions.last(), Some(&Action::ContextMenuClosed));
}

#[test]
fn disabled_menu_command_still_closes_menu() {
    let mut core = demo();
    core.on_pointer_down(screen(10.0, 10.0), Button::Secondary);
    let actions = core.execute_menu(MenuCommand::Paste);
    assert_eq!(actions, [Action::ContextMenuClosed]);
    assert_eq!(core.shapes().len(), 2);
}

// =============================================================
// Commands
// =============================================================

#[test]
fn commands_without_prerequisites_are_noops() {
    let mut core = demo();
    assert!(core.cut().is_empty());
    assert!(core.copy().is_empty());
    assert!(core.paste().is_empty());
    assert!(core.delete_selected().is_empty());
    assert_eq!(core.shapes().len(), 2);
}

#[test]
fn cut_then_paste_reproduces_at_offset() {
    let mut core = demo();
    click(&mut core, 250.0, 80.0);
    let original_id = core.registry.selected().map(Shape::id);

    let actions = core.cut();
    assert_eq!(core.shapes().len(), 1);
    assert_eq!(core.selected_index(), None);
    assert!(core.clipboard.has_content());
    assert!(actions.contains(&Action::ClipboardChanged));
    assert!(core.shapes().iter().all(|s| Some(s.id()) != original_id));

    core.paste();
    assert_eq!(core.shapes().len(), 2);
    assert_eq!(core.selected_index(), Some(1));
    let pasted = core.registry.selected();
    assert_eq!(pasted.map(Shape::position), Some(Point::new(220.0, 70.0)));
    assert_eq!(pasted.map(Shape::name), Some("Blue Rect (Copy)"));
    assert_eq!(pasted.map(Shape::color), Some(Color::BLUE));
    assert_eq!(pasted.and_then(Shape::as_rectangle).map(|r| r.size), Some(Vec2::new(100.0, 70.0)));
}

#[test]
fn copy_then_paste_keeps_original() {
    let mut core = demo();
    click(&mut core, 100.0, 100.0);
    core.copy();
    core.paste();
    core.paste();
    assert_eq!(core.shapes().len(), 4);
    assert_eq!(position_of(&core, 0), Some(Point::new(100.0, 100.0)));
    assert_eq!(position_of(&core, 2), Some(Point::new(120.0, 120.0)));
    assert_eq!(position_of(&core, 3), Some(Point::new(120.0, 120.0)));

    let ids: Vec<ShapeId> = core.shapes().iter().map(Shape::id).collect();
    for (i, a) in ids.iter().enumerate() {
        for b in &ids[i + 1..] {
            assert_ne!(a, b);
        }
    }
}

#[test]
fn paste_uses_configured_offset() {
    let config = EditorConfig { paste_offset: Vec2::new(-10.0, 5.0), ..EditorConfig::default() };
    let Ok(core) = EditorCore::with_config(config) else {
        panic!("config should validate");
    };
    let mut core = core.with_demo_scene();
    core.set_viewport(ORIGIN, Vec2::new(600.0, 400.0));
    click(&mut core, 100.0, 100.0);
    core.copy();
    core.paste();
    assert_eq!(core.registry.selected().map(Shape::position), Some(Point::new(90.0, 105.0)));
}

#[test]
fn clipboard_survives_source_edits() {
    let mut core = demo();
    click(&mut core, 100.0, 100.0);
    core.copy();
    let Ok(()) = core.edit_shape(0, |shape| shape.set_color(Color::WHITE)) else {
        panic!("index 0 exists");
    };
    core.paste();
    assert_eq!(core.registry.selected().map(Shape::color), Some(Color::GREEN));
}

#[test]
fn delete_middle_of_three() {
    let mut core = demo();
    core.add_circle(Point::new(400.0, 300.0), 20.0, Color::RED, "Third");
    let Ok(_) = core.select(1) else {
        panic!("index 1 exists");
    };
    core.delete_selected();
    assert_eq!(core.selected_index(), None);
    assert_eq!(core.shapes().len(), 2);
    assert_eq!(core.registry.get(1).map(Shape::name), Some("Third"));
}

#[test]
fn select_out_of_range_is_an_error() {
    let mut core = demo();
    assert_eq!(core.select(9), Err(CanvasError::IndexOutOfRange { index: 9, len: 2 }));
    assert_eq!(core.selected_index(), None);
}

#[test]
fn edit_shape_changes_properties() {
    let mut core = demo();
    let resized = core.edit_shape(1, |shape| {
        if let Some(rect) = shape.as_rectangle_mut() {
            rect.size = Vec2::new(10.0, 10.0);
        }
    });
    assert_eq!(resized, Ok(()));
    assert_eq!(core.registry.get(1).and_then(Shape::as_rectangle).map(|r| r.size), Some(Vec2::new(10.0, 10.0)));
    assert_eq!(core.edit_shape(2, |_| ()), Err(CanvasError::IndexOutOfRange { index: 2, len: 2 }));
}

// =============================================================
// Mode
// =============================================================

#[test]
fn entering_preview_deselects_and_closes_menu() {
    let mut core = demo();
    click(&mut core, 100.0, 100.0);
    core.on_pointer_down(screen(10.0, 10.0), Button::Secondary);
    let actions = core.set_mode(Mode::Preview3D);
    assert_eq!(core.mode, Mode::Preview3D);
    assert_eq!(core.selected_index(), None);
    assert!(core.shapes().iter().all(|s| !s.is_selected()));
    assert!(!core.menu.open);
    assert!(actions.contains(&Action::ModeChanged(Mode::Preview3D)));
}

#[test]
fn preview_ignores_pointer_input() {
    let mut core = demo();
    core.set_mode(Mode::Preview3D);
    assert!(core.on_pointer_down(screen(100.0, 100.0), Button::Primary).is_empty());
    assert!(core.on_pointer_move(screen(200.0, 200.0)).is_empty());
    assert!(core.on_pointer_down(screen(100.0, 100.0), Button::Secondary).is_empty());
    assert_eq!(core.selected_index(), None);
    assert_eq!(position_of(&core, 0), Some(Point::new(100.0, 100.0)));
}

#[test]
fn preview_blocks_edits() {
    let mut core = demo();
    click(&mut core, 100.0, 100.0);
    core.copy();
    core.set_mode(Mode::Preview3D);
    assert!(!core.can_paste());
    assert!(core.paste().is_empty());
    assert!(core.add_circle(Point::new(1.0, 1.0), 20.0, Color::RED, "").is_empty());
    assert_eq!(core.select(0), Ok(Vec::new()));
    assert_eq!(core.shapes().len(), 2);
}

#[test]
fn drag_in_progress_is_dropped_on_preview() {
    let mut core = demo();
    core.on_pointer_down(screen(100.0, 100.0), Button::Primary);
    core.toggle_mode();
    assert_eq!(core.input, InputState::Idle);
}

#[test]
fn frames_rotate_only_in_preview() {
    let mut core = demo();
    core.advance_frame();
    assert_eq!(core.preview.angle_x, 0.0);

    core.set_mode(Mode::Preview3D);
    core.advance_frame();
    core.advance_frame();
    assert!(core.preview.angle_x > 0.0);
    assert!(core.preview.angle_y > core.preview.angle_x);
}

#[test]
fn leaving_preview_resets_rotation() {
    let mut core = demo();
    core.set_mode(Mode::Preview3D);
    for _ in 0..10 {
        core.advance_frame();
    }
    core.set_mode(Mode::Edit2D);
    assert_eq!(core.preview.angle_x, 0.0);
    assert_eq!(core.preview.angle_y, 0.0);
}

#[test]
fn preview_never_moves_shapes() {
    let mut core = demo();
    let before: Vec<Shape> = core.shapes().to_vec();
    core.set_mode(Mode::Preview3D);
    for _ in 0..100 {
        core.advance_frame();
        let mut list = DrawList::new();
        let Ok(()) = core.draw(&mut list);
    }
    assert_eq!(core.shapes(), before.as_slice());
}

#[test]
fn set_same_mode_is_noop() {
    let mut core = demo();
    assert!(core.set_mode(Mode::Edit2D).is_empty());
}

#[test]
fn set_rotation_speed_updates_preview() {
    let mut core = demo();
    assert_eq!(core.set_rotation_speed(0.1, 0.2), Ok(()));
    core.set_mode(Mode::Preview3D);
    core.advance_frame();
    assert!((core.preview.angle_x - 0.1).abs() < 1e-12);
    assert!((core.preview.angle_y - 0.2).abs() < 1e-12);
}

#[test]
fn non_finite_rotation_speed_is_rejected() {
    let mut core = demo();
    assert_eq!(core.set_rotation_speed(0.1, 0.2), Ok(()));
    assert!(matches!(core.set_rotation_speed(f64::NAN, 0.3), Err(CanvasError::InvalidConfig(_))));
    assert!(matches!(core.set_rotation_speed(0.3, f64::INFINITY), Err(CanvasError::InvalidConfig(_))));
    assert_eq!(core.preview.speed_x, 0.1);
    assert_eq!(core.config.rotation_speed_y, 0.2);
    core.set_mode(Mode::Preview3D);
    core.advance_frame();
    assert!(core.preview.angle_x.is_finite());
    assert!(core.preview.angle_y.is_finite());
}

// =============================================================
// Draw
// =============================================================

#[test]
fn draw_paints_chrome_and_shapes() {
    let mut core = demo();
    click(&mut core, 100.0, 100.0);
    let mut list = DrawList::new();
    let Ok(()) = core.draw(&mut list);
    // Background, border, circle, ring, rectangle.
    assert_eq!(list.len(), 5);
    assert_eq!(
        list.commands()[2],
        DrawCmd::FillCircle { center: screen(100.0, 100.0), radius: 50.0, color: Color::GREEN }
    );
    assert!(matches!(list.commands()[3], DrawCmd::StrokeCircle { radius, .. } if radius == 52.0));
}
