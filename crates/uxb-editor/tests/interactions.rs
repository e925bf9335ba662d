//! Integration tests: input streams driven through `CanvasEngine::handle`.

use pretty_assertions::assert_eq;
use uxb_core::{
    Board, Bounds, CanvasNode, EditorError, MIN_ZOOM, NodeData, NodeId, NodePayload, NodeType,
    Point, Size, Viewport,
};
use uxb_editor::{
    CanvasEngine, EditorConfig, Gesture, InputEvent, Modifiers, PointerButton, SurfaceRequest,
    ToolMode,
};

const CONTAINER: Size = Size::new(1200.0, 800.0);

fn init() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn engine() -> CanvasEngine {
    init();
    let mut engine = CanvasEngine::default();
    engine.set_container(CONTAINER);
    engine
}

/// Engine whose viewport is the identity, so screen and canvas coincide.
fn identity_engine(board: Board) -> CanvasEngine {
    init();
    let mut engine = CanvasEngine::with_board(board, EditorConfig::default());
    engine.set_container(CONTAINER);
    engine.set_viewport(Viewport::new(0.0, 0.0, 1.0));
    engine
}

fn boxed(name: &str, node_type: NodeType, x: f32, y: f32, w: f32, h: f32) -> CanvasNode {
    CanvasNode::new(
        NodeId::intern(name),
        node_type,
        Point::new(x, y),
        w,
        NodeData::with_height(NodePayload::Empty, h),
    )
}

fn click(engine: &mut CanvasEngine, x: f32, y: f32) {
    engine.handle(&InputEvent::pointer_down(x, y)).expect("down");
    engine.handle(&InputEvent::pointer_up(x, y)).expect("up");
}

#[test]
fn drop_centres_template_on_the_drop_point() {
    let mut engine = engine();
    let outcome = engine
        .drop_template("sticky-note", Bounds::new(100.0, 100.0, 80.0, 80.0), CONTAINER)
        .expect("drop");
    assert!(outcome.changed);

    let node = engine.board().nodes().next().expect("dropped");
    assert_eq!(node.node_type, NodeType::StickyNote);
    assert_eq!(node.origin(), Point::new(-20.0, 0.0));
    assert_eq!(node.width, 240.0);
    assert!(engine.selection().is_empty());
    assert_eq!(engine.tool(), ToolMode::Select);
}

#[test]
fn drop_rejections_leave_the_board_alone() {
    let mut engine = engine();
    let rect = Bounds::new(100.0, 100.0, 80.0, 80.0);
    assert_eq!(
        engine.drop_template("no-such-card", rect, CONTAINER),
        Err(EditorError::UnknownNodeType("no-such-card".to_string()))
    );
    assert!(matches!(
        engine.drop_template("sticky-note", Bounds::new(2000.0, 100.0, 80.0, 80.0), CONTAINER),
        Err(EditorError::InvalidDrop(_))
    ));
    assert!(matches!(
        engine.drop_template("sticky-note", Bounds::new(100.0, 100.0, 0.0, 80.0), CONTAINER),
        Err(EditorError::InvalidDrop(_))
    ));
    assert!(matches!(
        engine.drop_template("sticky-note", Bounds::new(f32::NAN, 0.0, 10.0, 10.0), CONTAINER),
        Err(EditorError::InvalidDrop(_))
    ));
    assert!(engine.board().is_empty());
}

#[test]
fn freehand_stroke_becomes_a_pencil_node() {
    let mut engine = engine();
    engine.set_tool(ToolMode::Draw);
    // Default pan is (40, 40): screen (50, 50) is canvas (10, 10).
    engine.handle(&InputEvent::pointer_down(50.0, 50.0)).expect("down");
    engine.handle(&InputEvent::pointer_move(70.0, 60.0)).expect("move");
    engine.handle(&InputEvent::pointer_move(90.0, 80.0)).expect("move");
    engine.handle(&InputEvent::pointer_up(90.0, 80.0)).expect("up");

    let node = engine.board().nodes().next().expect("stroke");
    assert_eq!(node.node_type, NodeType::Pencil);
    assert!(node.id.as_str().starts_with("pencil"));
    assert_eq!(node.origin(), Point::new(10.0, 10.0));
    assert_eq!(node.width, 40.0);
    assert_eq!(node.data.height, Some(30.0));
    match &node.data.payload {
        NodePayload::Freehand(f) => {
            assert_eq!(f.path, "M 0 0 L 20 10 L 40 30");
            assert_eq!(f.color, "#1a1a2e");
            assert_eq!(f.stroke_width, 4.0);
        }
        other => panic!("unexpected payload {other:?}"),
    }
    assert_eq!(engine.tool(), ToolMode::Draw);
}

#[test]
fn three_point_stroke_keeps_its_extent() {
    let mut engine = engine();
    engine.set_tool(ToolMode::Draw);
    engine.handle(&InputEvent::pointer_down(40.0, 40.0)).expect("down");
    engine.handle(&InputEvent::pointer_move(50.0, 40.0)).expect("move");
    engine.handle(&InputEvent::pointer_move(50.0, 50.0)).expect("move");
    engine.handle(&InputEvent::pointer_up(50.0, 50.0)).expect("up");

    let node = engine.board().nodes().next().expect("stroke");
    assert_eq!(node.origin(), Point::ORIGIN);
    assert_eq!((node.width, node.data.height), (10.0, Some(10.0)));
    match &node.data.payload {
        NodePayload::Freehand(f) => assert_eq!(f.path, "M 0 0 L 10 0 L 10 10"),
        other => panic!("unexpected payload {other:?}"),
    }
}

#[test]
fn short_stroke_is_discarded() {
    let mut engine = engine();
    engine.set_tool(ToolMode::Draw);
    engine.handle(&InputEvent::pointer_down(50.0, 50.0)).expect("down");
    engine.handle(&InputEvent::pointer_move(52.0, 50.0)).expect("move");
    assert!(matches!(
        engine.handle(&InputEvent::pointer_up(52.0, 50.0)),
        Err(EditorError::DegenerateGesture(_))
    ));
    assert!(engine.board().is_empty());
    assert!(engine.gesture().is_idle());
}

#[test]
fn stroke_colour_follows_the_toolbar() {
    let mut engine = engine();
    engine.set_tool(ToolMode::Draw);
    engine.set_stroke("#e74c3c", 8.0);
    engine.handle(&InputEvent::pointer_down(50.0, 50.0)).expect("down");
    engine.handle(&InputEvent::pointer_move(60.0, 60.0)).expect("move");
    engine.handle(&InputEvent::pointer_move(80.0, 70.0)).expect("move");
    engine.handle(&InputEvent::pointer_up(80.0, 70.0)).expect("up");
    let node = engine.board().nodes().next().expect("stroke");
    match &node.data.payload {
        NodePayload::Freehand(f) => {
            assert_eq!(f.color, "#e74c3c");
            assert_eq!(f.stroke_width, 8.0);
        }
        other => panic!("unexpected payload {other:?}"),
    }
}

#[test]
fn stamp_commits_and_reverts_to_select() {
    let mut engine = engine();
    engine.set_tool(ToolMode::Shape);
    engine.handle(&InputEvent::pointer_down(140.0, 140.0)).expect("down");
    engine.handle(&InputEvent::pointer_move(240.0, 200.0)).expect("move");
    let outcome = engine.handle(&InputEvent::pointer_up(240.0, 200.0)).expect("up");
    assert!(outcome.tool_switched);

    let node = engine.board().nodes().next().expect("stamped");
    assert_eq!(node.node_type, NodeType::SimpleShape);
    assert_eq!(node.origin(), Point::new(100.0, 100.0));
    assert_eq!(node.width, 100.0);
    assert_eq!(node.data.height, Some(60.0));
    assert_eq!(engine.tool(), ToolMode::Select);
    assert!(engine.selection().is_empty());
}

#[test]
fn shift_stamps_a_square_circle() {
    let mut engine = engine();
    engine.set_tool(ToolMode::Circle);
    engine
        .handle(&InputEvent::PointerDown {
            x: 140.0,
            y: 140.0,
            button: PointerButton::Primary,
            modifiers: Modifiers::SHIFT,
        })
        .expect("down");
    engine
        .handle(&InputEvent::PointerUp {
            x: 80.0,
            y: 120.0,
            modifiers: Modifiers::SHIFT,
        })
        .expect("up");
    let node = engine.board().nodes().next().expect("stamped");
    assert_eq!(node.node_type, NodeType::SimpleCircle);
    assert_eq!(node.origin(), Point::new(40.0, 40.0));
    assert_eq!(node.width, 60.0);
    assert_eq!(node.data.height, Some(60.0));
}

#[test]
fn stray_click_with_shape_tool_creates_nothing() {
    let mut engine = engine();
    engine.set_tool(ToolMode::Shape);
    engine.handle(&InputEvent::pointer_down(140.0, 140.0)).expect("down");
    assert!(matches!(
        engine.handle(&InputEvent::pointer_up(143.0, 150.0)),
        Err(EditorError::DegenerateGesture(_))
    ));
    assert!(engine.board().is_empty());
    assert_eq!(engine.tool(), ToolMode::Shape);
}

#[test]
fn text_tool_places_a_selected_text_node() {
    let mut engine = engine();
    engine.handle(&InputEvent::key("t")).expect("key");
    assert_eq!(engine.tool(), ToolMode::Text);
    engine.handle(&InputEvent::pointer_down(240.0, 240.0)).expect("down");
    engine.handle(&InputEvent::pointer_up(240.0, 240.0)).expect("up");

    assert_eq!(engine.board().len(), 1);
    let node = engine.board().nodes().next().expect("text");
    assert_eq!(node.node_type, NodeType::SimpleText);
    assert_eq!(node.origin(), Point::new(200.0, 190.0));
    assert!(engine.selection().contains(node.id));
    assert_eq!(engine.tool(), ToolMode::Select);
}

#[test]
fn dragging_moves_by_screen_delta_over_zoom() {
    let mut board = Board::new();
    let id = board.insert(boxed("drag-me", NodeType::StickyNote, 100.0, 100.0, 200.0, 200.0));
    let mut engine = identity_engine(board);
    engine.set_viewport(Viewport::new(0.0, 0.0, 2.0));

    engine.handle(&InputEvent::pointer_down(300.0, 300.0)).expect("down");
    assert!(engine.selection().contains(id));
    engine.handle(&InputEvent::pointer_move(340.0, 360.0)).expect("move");
    engine.handle(&InputEvent::pointer_up(400.0, 400.0)).expect("up");
    assert_eq!(engine.board().get(id).expect("node").origin(), Point::new(150.0, 150.0));
}

#[test]
fn escape_snaps_a_drag_back() {
    let mut board = Board::new();
    let id = board.insert(boxed("snap-back", NodeType::StickyNote, 0.0, 0.0, 100.0, 100.0));
    let mut engine = identity_engine(board);
    engine.handle(&InputEvent::pointer_down(50.0, 50.0)).expect("down");
    engine.handle(&InputEvent::pointer_move(250.0, 90.0)).expect("move");
    assert_eq!(engine.board().get(id).expect("node").origin(), Point::new(200.0, 40.0));

    engine.handle(&InputEvent::key("Escape")).expect("escape");
    assert!(engine.gesture().is_idle());
    assert_eq!(engine.board().get(id).expect("node").origin(), Point::ORIGIN);
    // Still selected: Escape while a gesture runs only cancels the gesture.
    assert!(engine.selection().contains(id));
}

#[test]
fn shift_click_toggles_and_empty_click_deselects() {
    let mut board = Board::new();
    let a = board.insert(boxed("toggle-a", NodeType::StickyNote, 0.0, 0.0, 100.0, 100.0));
    let b = board.insert(boxed("toggle-b", NodeType::StickyNote, 200.0, 0.0, 100.0, 100.0));
    let mut engine = identity_engine(board);

    click(&mut engine, 50.0, 50.0);
    let shift_down = InputEvent::PointerDown {
        x: 250.0,
        y: 50.0,
        button: PointerButton::Primary,
        modifiers: Modifiers::SHIFT,
    };
    engine.handle(&shift_down).expect("down");
    engine
        .handle(&InputEvent::PointerUp {
            x: 250.0,
            y: 50.0,
            modifiers: Modifiers::SHIFT,
        })
        .expect("up");
    assert_eq!(engine.selection().to_vec(), vec![a, b]);

    engine.handle(&shift_down).expect("down");
    engine.handle(&InputEvent::pointer_up(250.0, 50.0)).expect("up");
    assert_eq!(engine.selection().to_vec(), vec![a]);

    click(&mut engine, 600.0, 600.0);
    assert!(engine.selection().is_empty());
}

#[test]
fn shift_deselecting_a_node_does_not_drag_it() {
    let mut board = Board::new();
    let a = board.insert(boxed("unpick-a", NodeType::StickyNote, 0.0, 0.0, 100.0, 100.0));
    let b = board.insert(boxed("unpick-b", NodeType::StickyNote, 200.0, 0.0, 100.0, 100.0));
    let mut engine = identity_engine(board);
    engine.select_all();

    engine
        .handle(&InputEvent::PointerDown {
            x: 50.0,
            y: 50.0,
            button: PointerButton::Primary,
            modifiers: Modifiers::SHIFT,
        })
        .expect("down");
    assert!(engine.gesture().is_idle());
    engine.handle(&InputEvent::pointer_move(100.0, 100.0)).expect("move");
    engine.handle(&InputEvent::pointer_up(100.0, 100.0)).expect("up");

    assert_eq!(engine.board().get(a).expect("node").origin(), Point::ORIGIN);
    assert_eq!(engine.selection().to_vec(), vec![b]);
}

#[test]
fn connection_requests_capture_and_connects_on_release() {
    let mut board = Board::new();
    let a = board.insert(boxed("conn-a", NodeType::FlowStep, 0.0, 0.0, 100.0, 100.0));
    let b = board.insert(boxed("conn-b", NodeType::FlowStep, 300.0, 0.0, 100.0, 100.0));
    let mut engine = identity_engine(board);

    engine.begin_connection(a, Point::new(100.0, 50.0)).expect("begin");
    assert_eq!(engine.take_surface_requests(), vec![SurfaceRequest::CapturePointer]);

    // Capture keeps the gesture alive when the pointer leaves the canvas.
    engine.handle(&InputEvent::PointerLeave).expect("leave");
    assert!(matches!(engine.gesture(), Gesture::Connecting(_)));
    engine.handle(&InputEvent::pointer_move(200.0, 50.0)).expect("move");
    let scene = engine.scene();
    let preview = scene
        .connections()
        .find(|path| path.edge.is_none())
        .expect("preview path");
    assert_eq!(preview.curve.end, Point::new(200.0, 50.0));

    engine.handle(&InputEvent::pointer_up(350.0, 50.0)).expect("up");
    assert_eq!(engine.take_surface_requests(), vec![SurfaceRequest::ReleasePointer]);
    let edges: Vec<_> = engine.board().edges().copied().collect();
    assert_eq!(edges.len(), 1);
    assert_eq!((edges[0].start, edges[0].end), (a, b));
    assert!(engine.scene().connections().all(|path| path.edge.is_some()));
}

#[test]
fn connection_to_self_or_empty_canvas_is_rejected() {
    let mut board = Board::new();
    let a = board.insert(boxed("self-a", NodeType::FlowStep, 0.0, 0.0, 100.0, 100.0));
    let mut engine = identity_engine(board);

    engine.begin_connection(a, Point::new(100.0, 50.0)).expect("begin");
    assert!(matches!(
        engine.handle(&InputEvent::pointer_up(50.0, 50.0)),
        Err(EditorError::DegenerateGesture(_))
    ));
    engine.begin_connection(a, Point::new(100.0, 50.0)).expect("begin");
    assert!(matches!(
        engine.handle(&InputEvent::pointer_up(700.0, 700.0)),
        Err(EditorError::DegenerateGesture(_))
    ));
    assert_eq!(engine.board().edge_count(), 0);
    assert_eq!(
        engine.take_surface_requests(),
        vec![
            SurfaceRequest::CapturePointer,
            SurfaceRequest::ReleasePointer,
            SurfaceRequest::CapturePointer,
            SurfaceRequest::ReleasePointer,
        ]
    );
}

#[test]
fn deleting_selection_prunes_edges() {
    let mut board = Board::new();
    let a = board.insert(boxed("prune-a", NodeType::FlowStep, 0.0, 0.0, 100.0, 100.0));
    let b = board.insert(boxed("prune-b", NodeType::FlowStep, 200.0, 0.0, 100.0, 100.0));
    let c = board.insert(boxed("prune-c", NodeType::FlowStep, 400.0, 0.0, 100.0, 100.0));
    board.connect(a, b).expect("a-b");
    board.connect(b, c).expect("b-c");
    board.connect(a, c).expect("a-c");
    let mut engine = identity_engine(board);
    assert_eq!(engine.board().edges_of(b).len(), 2);

    click(&mut engine, 250.0, 50.0);
    engine.handle(&InputEvent::key("Delete")).expect("delete");
    assert!(!engine.board().contains(b));
    assert!(engine.selection().is_empty());
    let edges: Vec<_> = engine.board().edges().map(|e| (e.start, e.end)).collect();
    assert_eq!(edges, vec![(a, c)]);
}

#[test]
fn eraser_removes_the_topmost_node() {
    let mut board = Board::new();
    let below = board.insert(boxed("erase-below", NodeType::StickyNote, 0.0, 0.0, 100.0, 100.0));
    let above = board.insert(boxed("erase-above", NodeType::StickyNote, 50.0, 50.0, 100.0, 100.0));
    let mut engine = identity_engine(board);
    engine.set_tool(ToolMode::Eraser);

    click(&mut engine, 75.0, 75.0);
    assert!(engine.board().contains(below));
    assert!(!engine.board().contains(above));
    click(&mut engine, 900.0, 900.0);
    assert_eq!(engine.board().len(), 1);
}

#[test]
fn delete_of_a_gone_node_is_stale() {
    let mut engine = engine();
    let ghost = NodeId::intern("never-placed");
    assert_eq!(
        engine.delete_node(ghost),
        Err(EditorError::StaleNodeReference(ghost))
    );
    assert_eq!(
        engine.update_node_data(ghost, NodeData::new(NodePayload::Empty)),
        Err(EditorError::StaleNodeReference(ghost))
    );
    assert!(engine.duplicate_node(ghost).is_err());
}

#[test]
fn deleting_the_dragged_node_ends_the_gesture() {
    let mut board = Board::new();
    let id = board.insert(boxed("doomed", NodeType::StickyNote, 0.0, 0.0, 100.0, 100.0));
    let mut engine = identity_engine(board);
    engine.handle(&InputEvent::pointer_down(50.0, 50.0)).expect("down");
    engine.delete_node(id).expect("delete");
    assert!(engine.gesture().is_idle());
    assert!(engine.selection().is_empty());
    engine.handle(&InputEvent::pointer_move(80.0, 80.0)).expect("move");
}

#[test]
fn shortcuts_are_ignored_while_typing() {
    let mut board = Board::new();
    let id = board.insert(boxed("typing", NodeType::StickyNote, 0.0, 0.0, 100.0, 100.0));
    let mut engine = identity_engine(board);
    engine.select_all();

    let typed = |key: &str| InputEvent::KeyDown {
        key: key.to_string(),
        modifiers: Modifiers::NONE,
        text_input_focused: true,
    };
    engine.handle(&typed("d")).expect("d");
    engine.handle(&typed("Backspace")).expect("backspace");
    engine.handle(&typed(" ")).expect("space");
    assert_eq!(engine.tool(), ToolMode::Select);
    assert_eq!(engine.effective_tool(), ToolMode::Select);
    assert!(engine.board().contains(id));

    engine.handle(&InputEvent::key("d")).expect("d");
    assert_eq!(engine.tool(), ToolMode::Draw);
}

#[test]
fn space_hold_pans_then_restores_the_tool() {
    let mut engine = engine();
    engine.set_tool(ToolMode::Draw);
    engine.handle(&InputEvent::key(" ")).expect("space");
    assert_eq!(engine.effective_tool(), ToolMode::Pan);
    assert_eq!(engine.tool(), ToolMode::Draw);

    engine.handle(&InputEvent::pointer_down(100.0, 100.0)).expect("down");
    assert_eq!(engine.cursor().css(), "grabbing");
    engine.handle(&InputEvent::pointer_move(130.0, 80.0)).expect("move");
    engine.handle(&InputEvent::pointer_up(150.0, 90.0)).expect("up");
    assert_eq!(engine.viewport(), Viewport::new(90.0, 30.0, 1.0));
    assert!(engine.board().is_empty());

    engine
        .handle(&InputEvent::KeyUp {
            key: " ".to_string(),
        })
        .expect("release");
    assert_eq!(engine.effective_tool(), ToolMode::Draw);
}

#[test]
fn middle_button_pans_in_any_tool() {
    let mut engine = engine();
    engine.set_tool(ToolMode::Shape);
    engine
        .handle(&InputEvent::PointerDown {
            x: 0.0,
            y: 0.0,
            button: PointerButton::from_index(1),
            modifiers: Modifiers::NONE,
        })
        .expect("down");
    engine.handle(&InputEvent::pointer_up(-20.0, 10.0)).expect("up");
    assert_eq!(engine.viewport(), Viewport::new(20.0, 50.0, 1.0));
    assert!(engine.board().is_empty());
}

#[test]
fn wheel_zoom_keeps_the_pointer_anchored() {
    let mut engine = engine();
    let anchor = Point::new(300.0, 200.0);
    let before = engine.viewport().screen_to_canvas(anchor);

    engine
        .handle(&InputEvent::Wheel {
            x: anchor.x,
            y: anchor.y,
            delta_y: -100.0,
        })
        .expect("wheel");
    assert!((engine.viewport().zoom - 1.08).abs() < 1e-5);
    let after = engine.viewport().screen_to_canvas(anchor);
    assert!((before.x - after.x).abs() < 1e-3 && (before.y - after.y).abs() < 1e-3);

    let flat = engine.viewport();
    let outcome = engine
        .handle(&InputEvent::Wheel {
            x: 0.0,
            y: 0.0,
            delta_y: 0.0,
        })
        .expect("wheel");
    assert!(!outcome.changed);
    assert_eq!(engine.viewport(), flat);
}

#[test]
fn zoom_shortcuts_step_around_the_centre() {
    let mut engine = engine();
    let cmd = |key: &str| InputEvent::KeyDown {
        key: key.to_string(),
        modifiers: Modifiers {
            ctrl: true,
            ..Modifiers::NONE
        },
        text_input_focused: false,
    };
    engine.handle(&cmd("=")).expect("zoom in");
    assert!((engine.viewport().zoom - 1.2).abs() < 1e-5);
    engine.handle(&cmd("-")).expect("zoom out");
    assert!((engine.viewport().zoom - 1.0).abs() < 1e-5);
    for _ in 0..20 {
        engine.zoom_in();
    }
    assert_eq!(engine.viewport().zoom, 3.0);
}

#[test]
fn fit_to_screen_frames_content_or_resets() {
    let mut engine = engine();
    engine.set_viewport(Viewport::new(-500.0, 300.0, 0.5));
    engine.fit_to_screen();
    assert_eq!(engine.viewport(), Viewport::default());

    let mut board = Board::new();
    board.insert(boxed("fit-a", NodeType::StickyNote, 0.0, 0.0, 2000.0, 1000.0));
    let mut engine = identity_engine(board);
    engine.handle(&InputEvent::KeyDown {
        key: "0".to_string(),
        modifiers: Modifiers {
            meta: true,
            ..Modifiers::NONE
        },
        text_input_focused: false,
    })
    .expect("fit");
    let vp = engine.viewport();
    // (1200 - 160) / 2000 = 0.52, (800 - 160) / 1000 = 0.64.
    assert!((vp.zoom - 0.52).abs() < 1e-5);
    let centre = vp.canvas_to_screen(Point::new(1000.0, 500.0));
    assert!((centre.x - 600.0).abs() < 1e-2 && (centre.y - 400.0).abs() < 1e-2);
}

#[test]
fn select_all_then_escape_clears() {
    let mut board = Board::new();
    board.insert(boxed("all-a", NodeType::StickyNote, 0.0, 0.0, 100.0, 100.0));
    board.insert(boxed("all-b", NodeType::StickyNote, 300.0, 0.0, 100.0, 100.0));
    let mut engine = identity_engine(board);
    engine
        .handle(&InputEvent::KeyDown {
            key: "a".to_string(),
            modifiers: Modifiers {
                ctrl: true,
                ..Modifiers::NONE
            },
            text_input_focused: false,
        })
        .expect("select all");
    assert_eq!(engine.selection().len(), 2);
    engine.handle(&InputEvent::key("Escape")).expect("escape");
    assert!(engine.selection().is_empty());
}

#[test]
fn resize_reports_dimensions_and_rejects_fixed_types() {
    let mut board = Board::new();
    let shape = board.insert(boxed("resize-shape", NodeType::SimpleShape, 0.0, 0.0, 100.0, 100.0));
    let card = board.insert(boxed("resize-card", NodeType::PersonaCard, 300.0, 0.0, 480.0, 300.0));
    let mut engine = identity_engine(board);

    assert!(matches!(
        engine.begin_resize(card, uxb_editor::Handle::BottomRight, Point::new(780.0, 300.0)),
        Err(EditorError::DegenerateGesture(_))
    ));

    engine
        .begin_resize(shape, uxb_editor::Handle::BottomRight, Point::new(100.0, 100.0))
        .expect("begin");
    engine.handle(&InputEvent::pointer_move(150.0, 120.0)).expect("move");
    let labels: Vec<_> = engine
        .scene()
        .items
        .into_iter()
        .filter_map(|item| match item {
            uxb_render::RenderItem::DimensionLabel { text, .. } => Some(text),
            _ => None,
        })
        .collect();
    assert_eq!(labels, vec!["150 × 120".to_string()]);
    engine.handle(&InputEvent::pointer_up(150.0, 120.0)).expect("up");
    let node = engine.board().get(shape).expect("shape");
    assert_eq!((node.width, node.data.height), (150.0, Some(120.0)));
}

#[test]
fn resize_driven_past_the_minimum_stops_at_twenty() {
    let mut board = Board::new();
    let id = board.insert(boxed("tiny", NodeType::StickyNote, 0.0, 0.0, 240.0, 160.0));
    let mut engine = identity_engine(board);
    engine
        .begin_resize(id, uxb_editor::Handle::TopLeft, Point::ORIGIN)
        .expect("begin");
    engine.handle(&InputEvent::pointer_up(900.0, 900.0)).expect("up");
    let node = engine.board().get(id).expect("node");
    assert_eq!((node.width, node.data.height), (20.0, Some(20.0)));
    assert_eq!(node.origin(), Point::new(220.0, 140.0));
}

#[test]
fn pointer_leave_commits_a_box_select() {
    let mut board = Board::new();
    let a = board.insert(boxed("leave-a", NodeType::StickyNote, 100.0, 100.0, 100.0, 100.0));
    let mut engine = identity_engine(board);
    engine.handle(&InputEvent::pointer_down(10.0, 10.0)).expect("down");
    engine.handle(&InputEvent::pointer_move(150.0, 150.0)).expect("move");
    engine.handle(&InputEvent::PointerLeave).expect("leave");
    assert!(engine.gesture().is_idle());
    assert_eq!(engine.selection().to_vec(), vec![a]);
    assert!(engine.take_surface_requests().is_empty());
}

#[test]
fn box_select_excludes_a_node_it_only_touches() {
    let mut board = Board::new();
    let a = board.insert(boxed("edge-a", NodeType::StickyNote, 100.0, 100.0, 100.0, 100.0));
    let mut engine = identity_engine(board);
    engine.handle(&InputEvent::pointer_down(10.0, 10.0)).expect("down");
    engine.handle(&InputEvent::pointer_up(100.0, 150.0)).expect("up");
    assert!(engine.selection().is_empty());

    engine.handle(&InputEvent::pointer_down(10.0, 10.0)).expect("down");
    engine.handle(&InputEvent::pointer_up(101.0, 150.0)).expect("up");
    assert_eq!(engine.selection().to_vec(), vec![a]);
}

#[test]
fn configured_zero_zoom_is_clamped_on_construction() {
    let config: EditorConfig =
        serde_json::from_str(r#"{ "defaultViewport": { "pan_x": 0, "pan_y": 0, "zoom": 0 } }"#)
            .expect("parse");
    let mut engine = CanvasEngine::new(config);
    engine.set_container(CONTAINER);
    assert_eq!(engine.viewport().zoom, MIN_ZOOM);
    let p = engine.viewport().screen_to_canvas(Point::new(600.0, 400.0));
    assert!(p.x.is_finite() && p.y.is_finite());

    // Fit-to-screen on an empty board resets to the same clamped default.
    engine.fit_to_screen();
    assert_eq!(engine.viewport().zoom, MIN_ZOOM);
}

#[test]
fn pointer_down_during_a_gesture_is_ignored() {
    let mut board = Board::new();
    let id = board.insert(boxed("busy", NodeType::SimpleShape, 0.0, 0.0, 100.0, 100.0));
    let mut engine = identity_engine(board);
    engine
        .begin_resize(id, uxb_editor::Handle::TopLeft, Point::ORIGIN)
        .expect("begin");
    let outcome = engine.handle(&InputEvent::pointer_down(500.0, 500.0)).expect("down");
    assert!(!outcome.changed);
    assert!(matches!(engine.gesture(), Gesture::Resizing(_)));
}
