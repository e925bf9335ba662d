//! The canvas interaction engine.
//!
//! `CanvasEngine` owns the board, the selection, the viewport, the tool state
//! and the single active gesture. It is the only writer of any of them: the
//! host surface feeds it normalized input, reads back a `Scene` to draw, and
//! drains `SurfaceRequest`s (pointer capture) after each call.
//!
//! Every entry point returns `EditorResult<Outcome>`. An `Err` means the
//! operation was rejected and nothing changed, apart from a finished gesture
//! returning to idle.

use crate::config::EditorConfig;
use crate::gesture::*;
use crate::input::{InputEvent, Modifiers, PointerButton};
use crate::mutation::BoardMutation;
use crate::selection::Selection;
use crate::shortcuts::{ShortcutAction, ShortcutMap};
use crate::tools::{ToolMode, ToolState};
use rand::SeedableRng;
use rand::rngs::StdRng;
use uxb_core::{
    ANCHOR_FALLBACK_HEIGHT, Board, Bounds, CanvasNode, EditorError, EditorResult,
    FIT_FALLBACK_HEIGHT, NodeData, NodeId, NodePayload, NodeType, Point, Size, Viewport,
};
use uxb_render::{CursorHint, Preview, Scene, SceneInput, build_scene, hit_test, hit_test_rect};

/// What an operation did, so the host knows whether to redraw and whether
/// to update its toolbar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Outcome {
    /// Board, selection, viewport or gesture preview changed.
    pub changed: bool,
    /// The selected tool changed.
    pub tool_switched: bool,
}

impl Outcome {
    pub fn unchanged() -> Self {
        Self::default()
    }

    pub fn changed() -> Self {
        Self {
            changed: true,
            tool_switched: false,
        }
    }

    fn with_tool_switch(mut self, switched: bool) -> Self {
        self.tool_switched |= switched;
        self.changed |= switched;
        self
    }
}

/// Side effects the host surface must perform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SurfaceRequest {
    /// Route all pointer events to the canvas until released, even outside it.
    CapturePointer,
    ReleasePointer,
}

pub struct CanvasEngine {
    board: Board,
    selection: Selection,
    viewport: Viewport,
    tools: ToolState,
    gesture: Gesture,
    container: Size,
    config: EditorConfig,
    requests: Vec<SurfaceRequest>,
    /// Picks template colours and avatars for new nodes.
    rng: StdRng,
}

impl Default for CanvasEngine {
    fn default() -> Self {
        Self::new(EditorConfig::default())
    }
}

impl CanvasEngine {
    pub fn new(config: EditorConfig) -> Self {
        Self::with_board(Board::new(), config)
    }

    pub fn with_board(board: Board, config: EditorConfig) -> Self {
        Self {
            board,
            selection: Selection::new(),
            viewport: Viewport::new(
                config.default_viewport.pan_x,
                config.default_viewport.pan_y,
                config.default_viewport.zoom,
            ),
            tools: ToolState::default(),
            gesture: Gesture::Idle,
            container: Size::default(),
            config,
            requests: Vec::new(),
            rng: StdRng::from_entropy(),
        }
    }

    /// Reseed the template randomness, making node defaults reproducible.
    pub fn seed_rng(&mut self, seed: u64) {
        self.rng = StdRng::seed_from_u64(seed);
    }

    // ─── Accessors ───────────────────────────────────────────────────────

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn gesture(&self) -> &Gesture {
        &self.gesture
    }

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    /// The tool picked by the user.
    pub fn tool(&self) -> ToolMode {
        self.tools.selected()
    }

    /// The tool handling input right now (Space forces pan).
    pub fn effective_tool(&self) -> ToolMode {
        self.tools.effective()
    }

    /// Size of the canvas container in screen pixels. Export and zoom
    /// buttons use this as the visible area.
    pub fn container(&self) -> Size {
        self.container
    }

    pub fn cursor(&self) -> CursorHint {
        match self.gesture {
            Gesture::Panning(_) => CursorHint::Grabbing,
            _ => self.tools.cursor(false),
        }
    }

    /// Pending surface requests, oldest first. Clears the queue.
    pub fn take_surface_requests(&mut self) -> Vec<SurfaceRequest> {
        std::mem::take(&mut self.requests)
    }

    // ─── Setters ─────────────────────────────────────────────────────────

    pub fn set_container(&mut self, container: Size) {
        self.container = container;
    }

    pub fn set_viewport(&mut self, viewport: Viewport) -> Outcome {
        let viewport = Viewport::new(viewport.pan_x, viewport.pan_y, viewport.zoom);
        if viewport == self.viewport {
            return Outcome::unchanged();
        }
        self.viewport = viewport;
        Outcome::changed()
    }

    pub fn set_tool(&mut self, mode: ToolMode) -> Outcome {
        let switched = self.tools.set(mode);
        if switched {
            log::debug!("tool: {mode:?}");
        }
        Outcome::unchanged().with_tool_switch(switched)
    }

    /// Colour and width for the next freehand strokes.
    pub fn set_stroke(&mut self, color: &str, width: f32) {
        self.config.stroke_color = color.to_string();
        self.config.stroke_width = width;
    }

    pub fn set_text_color(&mut self, color: &str) {
        self.config.text_color = color.to_string();
    }

    // ─── Input routing ───────────────────────────────────────────────────

    pub fn handle(&mut self, event: &InputEvent) -> EditorResult<Outcome> {
        match event {
            InputEvent::PointerDown {
                x,
                y,
                button,
                modifiers,
            } => self.pointer_down(Point::new(*x, *y), *button, *modifiers),
            InputEvent::PointerMove { x, y, modifiers } => {
                self.pointer_move(Point::new(*x, *y), *modifiers)
            }
            InputEvent::PointerUp { x, y, modifiers } => {
                self.pointer_up(Point::new(*x, *y), *modifiers)
            }
            InputEvent::PointerLeave => self.pointer_leave(),
            InputEvent::Wheel { x, y, delta_y } => Ok(self.wheel(Point::new(*x, *y), *delta_y)),
            InputEvent::KeyDown {
                key,
                modifiers,
                text_input_focused,
            } => self.key_down(key, *modifiers, *text_input_focused),
            InputEvent::KeyUp { key } => Ok(self.key_up(key)),
        }
    }

    /// Pointer pressed on the canvas background or a node body.
    pub fn pointer_down(
        &mut self,
        screen: Point,
        button: PointerButton,
        modifiers: Modifiers,
    ) -> EditorResult<Outcome> {
        if !self.gesture.is_idle() {
            log::debug!("pointer-down ignored: {} in progress", self.gesture.name());
            return Ok(Outcome::unchanged());
        }
        match button {
            PointerButton::Middle => return Ok(self.begin_pan(screen)),
            PointerButton::Secondary => return Ok(Outcome::unchanged()),
            PointerButton::Primary => {}
        }

        let canvas = self.viewport.screen_to_canvas(screen);
        match self.tools.effective() {
            ToolMode::Pan => Ok(self.begin_pan(screen)),
            ToolMode::Text => self.place_text(canvas),
            ToolMode::Shape | ToolMode::Circle => {
                let node_type = self
                    .tools
                    .effective()
                    .stamp_type()
                    .unwrap_or(NodeType::SimpleShape);
                let mut stamp = StampGesture::new(node_type, canvas);
                stamp.square = modifiers.shift;
                log::debug!("gesture: stamp {node_type} at ({}, {})", canvas.x, canvas.y);
                self.gesture = Gesture::Stamping(stamp);
                Ok(Outcome::changed())
            }
            ToolMode::Draw => {
                log::debug!("gesture: draw");
                self.gesture = Gesture::Drawing(DrawGesture {
                    points: vec![canvas],
                });
                Ok(Outcome::changed())
            }
            ToolMode::Eraser => match hit_test(&self.board, canvas) {
                Some(id) => {
                    self.remove_nodes(&[id])?;
                    self.selection.clear();
                    Ok(Outcome::changed())
                }
                None => Ok(Outcome::unchanged()),
            },
            ToolMode::Select => match hit_test(&self.board, canvas) {
                Some(id) => self.begin_drag(id, screen, modifiers),
                None => {
                    log::debug!("gesture: box-select");
                    self.gesture = Gesture::BoxSelecting(BoxSelectGesture {
                        start: screen,
                        current: screen,
                    });
                    Ok(Outcome::changed())
                }
            },
        }
    }

    pub fn pointer_move(&mut self, screen: Point, modifiers: Modifiers) -> EditorResult<Outcome> {
        if self.gesture.is_idle() {
            return Ok(Outcome::unchanged());
        }
        log::trace!(
            "move {} at ({}, {})",
            self.gesture.name(),
            screen.x,
            screen.y
        );
        let canvas = self.viewport.screen_to_canvas(screen);
        let zoom = self.viewport.zoom;
        let mutation = match &mut self.gesture {
            Gesture::Idle => None,
            Gesture::Dragging(g) => Some(BoardMutation::MoveNode {
                id: g.node,
                to: g.position(screen, zoom),
            }),
            Gesture::Resizing(g) => Some(BoardMutation::ResizeNode {
                id: g.node,
                bounds: g.bounds(screen, zoom, modifiers.shift, self.config.min_resize),
            }),
            Gesture::BoxSelecting(g) => {
                g.current = screen;
                None
            }
            Gesture::Stamping(g) => {
                g.current = canvas;
                g.square = modifiers.shift;
                None
            }
            Gesture::Drawing(g) => {
                g.points.push(canvas);
                None
            }
            Gesture::Panning(g) => {
                self.viewport = self.viewport.with_pan(g.pan(screen));
                None
            }
            Gesture::Connecting(g) => {
                g.pointer = canvas;
                None
            }
        };
        if let Some(mutation) = mutation
            && let Err(err) = mutation.apply(&mut self.board)
        {
            log::debug!("{} aborted: {err}", self.gesture.name());
            self.end_gesture();
            return Err(err);
        }
        Ok(Outcome::changed())
    }

    pub fn pointer_up(&mut self, screen: Point, modifiers: Modifiers) -> EditorResult<Outcome> {
        if self.gesture.is_idle() {
            return Ok(Outcome::unchanged());
        }
        if !matches!(self.gesture, Gesture::Drawing(_)) {
            self.pointer_move(screen, modifiers)?;
        }
        self.finish_gesture(modifiers)
    }

    /// Pointer left the container. Ends every gesture except one holding
    /// pointer capture.
    pub fn pointer_leave(&mut self) -> EditorResult<Outcome> {
        if self.gesture.is_idle() || self.gesture.captures_pointer() {
            return Ok(Outcome::unchanged());
        }
        self.finish_gesture(Modifiers::NONE)
    }

    /// Zoom one wheel notch around the pointer.
    pub fn wheel(&mut self, screen: Point, delta_y: f32) -> Outcome {
        let factor = if delta_y < 0.0 {
            self.config.wheel_zoom_factor
        } else if delta_y > 0.0 {
            1.0 / self.config.wheel_zoom_factor
        } else {
            return Outcome::unchanged();
        };
        self.zoom_by(screen, factor)
    }

    pub fn key_down(
        &mut self,
        key: &str,
        modifiers: Modifiers,
        text_input_focused: bool,
    ) -> EditorResult<Outcome> {
        if text_input_focused {
            return Ok(Outcome::unchanged());
        }
        let Some(action) = ShortcutMap::resolve(
            key,
            modifiers.ctrl,
            modifiers.shift,
            modifiers.alt,
            modifiers.meta,
        ) else {
            return Ok(Outcome::unchanged());
        };
        log::trace!("shortcut: {key:?} -> {action:?}");
        match action {
            ShortcutAction::Delete => self.delete_selected(),
            ShortcutAction::SelectAll => Ok(self.select_all()),
            ShortcutAction::ZoomIn => Ok(self.zoom_in()),
            ShortcutAction::ZoomOut => Ok(self.zoom_out()),
            ShortcutAction::ZoomToFit => Ok(self.fit_to_screen()),
            ShortcutAction::PanStart => Ok(self.hold_space(true)),
            ShortcutAction::PanEnd => Ok(self.hold_space(false)),
            ShortcutAction::Cancel => Ok(self.cancel()),
            tool => match tool.tool() {
                Some(mode) => Ok(self.set_tool(mode)),
                None => Ok(Outcome::unchanged()),
            },
        }
    }

    /// Key released. Space release is honoured even while a text field has
    /// focus, so pan mode can never get stuck.
    pub fn key_up(&mut self, key: &str) -> Outcome {
        match ShortcutMap::resolve_release(key) {
            Some(ShortcutAction::PanEnd) => self.hold_space(false),
            _ => Outcome::unchanged(),
        }
    }

    fn hold_space(&mut self, held: bool) -> Outcome {
        if self.tools.set_space_held(held) {
            Outcome::changed()
        } else {
            Outcome::unchanged()
        }
    }

    // ─── Affordances ─────────────────────────────────────────────────────

    /// Pointer pressed on one of a node's corner handles.
    pub fn begin_resize(
        &mut self,
        id: NodeId,
        handle: Handle,
        screen: Point,
    ) -> EditorResult<Outcome> {
        let node = self.board.require(id)?;
        if !node.is_resizable() {
            return Err(EditorError::DegenerateGesture("node type is not resizable"));
        }
        if !self.gesture.is_idle() {
            log::debug!("resize ignored: {} in progress", self.gesture.name());
            return Ok(Outcome::unchanged());
        }
        let initial = node.bounds_or(ANCHOR_FALLBACK_HEIGHT);
        log::debug!("gesture: resize {id} {handle:?}");
        self.gesture = Gesture::Resizing(ResizeGesture {
            node: id,
            handle,
            pointer_start: screen,
            initial,
        });
        Ok(Outcome::changed())
    }

    /// Pointer pressed on a node's connection affordance. Requests pointer
    /// capture until the gesture ends.
    pub fn begin_connection(&mut self, id: NodeId, screen: Point) -> EditorResult<Outcome> {
        self.board.require(id)?;
        if !self.gesture.is_idle() {
            log::debug!("connection ignored: {} in progress", self.gesture.name());
            return Ok(Outcome::unchanged());
        }
        log::debug!("gesture: connect from {id}");
        self.gesture = Gesture::Connecting(ConnectGesture {
            start: id,
            pointer: self.viewport.screen_to_canvas(screen),
        });
        self.requests.push(SurfaceRequest::CapturePointer);
        Ok(Outcome::changed())
    }

    // ─── Gesture begin/end ───────────────────────────────────────────────

    fn begin_pan(&mut self, screen: Point) -> Outcome {
        log::debug!("gesture: pan");
        self.gesture = Gesture::Panning(PanGesture {
            pointer_start: screen,
            pan_start: self.viewport.pan(),
        });
        Outcome::changed()
    }

    fn begin_drag(
        &mut self,
        id: NodeId,
        screen: Point,
        modifiers: Modifiers,
    ) -> EditorResult<Outcome> {
        let origin = self.board.require(id)?.origin();
        if modifiers.shift {
            self.selection.toggle(id);
            if !self.selection.contains(id) {
                // Toggled off: nothing to drag.
                return Ok(Outcome::changed());
            }
        } else if !self.selection.contains(id) {
            self.selection.select_only(id);
        }
        log::debug!("gesture: drag {id}");
        self.gesture = Gesture::Dragging(DragGesture {
            node: id,
            pointer_start: screen,
            origin,
        });
        Ok(Outcome::changed())
    }

    fn place_text(&mut self, canvas: Point) -> EditorResult<Outcome> {
        let origin = Point::new(canvas.x, canvas.y - self.config.text_offset_y);
        let mut node = CanvasNode::from_template_with(NodeType::SimpleText, origin, &mut self.rng);
        if let NodePayload::SimpleText(text) = &mut node.data.payload {
            text.color = Some(self.config.text_color.clone());
        }
        let id = node.id;
        BoardMutation::AddNode {
            node: Box::new(node),
        }
        .apply(&mut self.board)?;
        self.selection.select_only(id);
        log::debug!("text placed: {id}");
        let switched = self.tools.set(ToolMode::Select);
        Ok(Outcome::changed().with_tool_switch(switched))
    }

    /// Leave the gesture slot idle, releasing capture if held.
    fn end_gesture(&mut self) -> Gesture {
        let ended = std::mem::take(&mut self.gesture);
        if ended.captures_pointer() {
            self.requests.push(SurfaceRequest::ReleasePointer);
        }
        ended
    }

    /// Commit the active gesture.
    fn finish_gesture(&mut self, modifiers: Modifiers) -> EditorResult<Outcome> {
        let ended = self.end_gesture();
        log::debug!("gesture: {} released", ended.name());
        match ended {
            Gesture::Idle => Ok(Outcome::unchanged()),
            Gesture::Dragging(_) | Gesture::Resizing(_) | Gesture::Panning(_) => {
                Ok(Outcome::changed())
            }
            Gesture::BoxSelecting(g) => {
                let rect = self.viewport.screen_rect_to_canvas(g.rect());
                let hits = hit_test_rect(&self.board, rect);
                if modifiers.shift {
                    self.selection.extend(hits);
                } else {
                    self.selection.set(hits);
                }
                Ok(Outcome::changed())
            }
            Gesture::Stamping(g) => {
                let Some(node) = g.commit(self.config.stamp_threshold) else {
                    log::debug!("stamp discarded: too small");
                    return Err(EditorError::DegenerateGesture("shape too small"));
                };
                log::debug!("stamp committed: {}", node.id);
                BoardMutation::AddNode {
                    node: Box::new(node),
                }
                .apply(&mut self.board)?;
                let switched = self.tools.set(ToolMode::Select);
                Ok(Outcome::changed().with_tool_switch(switched))
            }
            Gesture::Drawing(g) => {
                let Some(node) = g.commit(
                    self.config.freehand_min_points,
                    self.config.freehand_min_extent,
                    &self.config.stroke_color,
                    self.config.stroke_width,
                ) else {
                    log::debug!("stroke discarded: {} points", g.points.len());
                    return Err(EditorError::DegenerateGesture("stroke too short"));
                };
                log::debug!("stroke committed: {}", node.id);
                BoardMutation::AddNode {
                    node: Box::new(node),
                }
                .apply(&mut self.board)?;
                Ok(Outcome::changed())
            }
            Gesture::Connecting(g) => match hit_test(&self.board, g.pointer) {
                Some(end) if end != g.start => {
                    BoardMutation::Connect {
                        start: g.start,
                        end,
                    }
                    .apply(&mut self.board)?;
                    log::debug!("connected {} -> {end}", g.start);
                    Ok(Outcome::changed())
                }
                Some(_) => Err(EditorError::DegenerateGesture("connection to itself")),
                None => Err(EditorError::DegenerateGesture(
                    "connection released over empty canvas",
                )),
            },
        }
    }

    /// Escape: abandon the active gesture, or clear the selection when idle.
    /// Drag and resize snap back to where they started.
    pub fn cancel(&mut self) -> Outcome {
        if self.gesture.is_idle() {
            return self.clear_selection();
        }
        let ended = self.end_gesture();
        log::debug!("gesture: {} cancelled", ended.name());
        let restore = match ended {
            Gesture::Dragging(g) => Some(BoardMutation::MoveNode {
                id: g.node,
                to: g.origin,
            }),
            Gesture::Resizing(g) => Some(BoardMutation::ResizeNode {
                id: g.node,
                bounds: g.initial,
            }),
            _ => None,
        };
        if let Some(mutation) = restore
            && let Err(err) = mutation.apply(&mut self.board)
        {
            log::debug!("cancel: {err}");
        }
        Outcome::changed()
    }

    // ─── Board operations ────────────────────────────────────────────────

    /// Materialize a palette template dropped at `drop_rect` (screen pixels
    /// relative to the container). The node is centred horizontally on the
    /// drop and its top sits `drop_offset_y` above it.
    pub fn drop_template(
        &mut self,
        tag: &str,
        drop_rect: Bounds,
        container: Size,
    ) -> EditorResult<Outcome> {
        let node_type = NodeType::from_tag(tag)?;
        if !drop_rect.is_finite() || drop_rect.width <= 0.0 || drop_rect.height <= 0.0 {
            return Err(EditorError::InvalidDrop(format!(
                "unusable drop rectangle {drop_rect:?}"
            )));
        }
        let area = Bounds::new(0.0, 0.0, container.width, container.height);
        if !drop_rect.intersects(&area) {
            return Err(EditorError::InvalidDrop(
                "dropped outside the canvas".to_string(),
            ));
        }
        self.container = container;

        let centre = self.viewport.screen_to_canvas(drop_rect.center());
        let width = node_type.default_width();
        let origin = Point::new(centre.x - width / 2.0, centre.y - self.config.drop_offset_y);
        let node = CanvasNode::from_template_with(node_type, origin, &mut self.rng);
        log::debug!("drop {node_type} as {} at ({}, {})", node.id, origin.x, origin.y);
        BoardMutation::AddNode {
            node: Box::new(node),
        }
        .apply(&mut self.board)?;
        let switched = self.tools.set(ToolMode::Select);
        Ok(Outcome::changed().with_tool_switch(switched))
    }

    /// Payload edit from a node renderer.
    pub fn update_node_data(&mut self, id: NodeId, data: NodeData) -> EditorResult<Outcome> {
        BoardMutation::SetData { id, data }.apply(&mut self.board)?;
        Ok(Outcome::changed())
    }

    /// Per-node delete affordance.
    pub fn delete_node(&mut self, id: NodeId) -> EditorResult<Outcome> {
        self.remove_nodes(&[id])?;
        Ok(Outcome::changed())
    }

    /// Delete every selected node and its connections.
    pub fn delete_selected(&mut self) -> EditorResult<Outcome> {
        if self.selection.is_empty() {
            return Ok(Outcome::unchanged());
        }
        let ids = self.selection.to_vec();
        self.remove_nodes(&ids)?;
        self.selection.clear();
        Ok(Outcome::changed())
    }

    /// Duplicate affordance. Duplication is not offered yet: the id is
    /// checked and nothing else happens.
    pub fn duplicate_node(&mut self, id: NodeId) -> EditorResult<Outcome> {
        self.board.require(id)?;
        log::debug!("duplicate {id}: not supported");
        Ok(Outcome::unchanged())
    }

    pub fn bring_to_front(&mut self, id: NodeId) -> EditorResult<Outcome> {
        BoardMutation::BringToFront { id }.apply(&mut self.board)?;
        Ok(Outcome::changed())
    }

    pub fn select_all(&mut self) -> Outcome {
        let ids: Vec<NodeId> = self.board.node_ids().collect();
        if ids.len() == self.selection.len() {
            return Outcome::unchanged();
        }
        self.selection.set(ids);
        Outcome::changed()
    }

    pub fn clear_selection(&mut self) -> Outcome {
        if self.selection.clear() {
            Outcome::changed()
        } else {
            Outcome::unchanged()
        }
    }

    /// Remove nodes, prune the selection and end any gesture aimed at them.
    /// Every id is checked first so a stale one rejects the whole batch.
    fn remove_nodes(&mut self, ids: &[NodeId]) -> EditorResult<()> {
        for id in ids {
            self.board.require(*id)?;
        }
        for id in ids {
            BoardMutation::RemoveNode { id: *id }.apply(&mut self.board)?;
            log::debug!("removed {id}");
        }
        self.selection.prune(&self.board);
        if self
            .gesture
            .target()
            .is_some_and(|target| !self.board.contains(target))
        {
            let ended = self.end_gesture();
            log::debug!("gesture: {} dropped with its node", ended.name());
        }
        Ok(())
    }

    // ─── View ────────────────────────────────────────────────────────────

    fn zoom_by(&mut self, anchor: Point, factor: f32) -> Outcome {
        let next = self.viewport.zoom_at(anchor, factor);
        if next == self.viewport {
            return Outcome::unchanged();
        }
        log::trace!("zoom {} -> {}", self.viewport.zoom, next.zoom);
        self.viewport = next;
        Outcome::changed()
    }

    /// Zoom in one step around the container centre.
    pub fn zoom_in(&mut self) -> Outcome {
        self.zoom_by(self.container.center(), self.config.zoom_step)
    }

    pub fn zoom_out(&mut self) -> Outcome {
        self.zoom_by(self.container.center(), 1.0 / self.config.zoom_step)
    }

    /// Frame every node inside the container. An empty board resets to the
    /// default viewport.
    pub fn fit_to_screen(&mut self) -> Outcome {
        let next = match self.board.content_bounds(FIT_FALLBACK_HEIGHT) {
            Some(content) => Viewport::fit(
                Some(content),
                self.container,
                self.config.fit_padding,
                self.config.fit_max_zoom,
            ),
            None => self.config.default_viewport,
        };
        self.set_viewport(next)
    }

    // ─── Output ──────────────────────────────────────────────────────────

    fn previews(&self) -> Vec<Preview> {
        match &self.gesture {
            Gesture::Stamping(g) => vec![Preview::StampDraft {
                node_type: g.node_type,
                bounds: g.draft(),
            }],
            Gesture::Drawing(g) => vec![Preview::Freehand {
                points: g.points.clone(),
                color: self.config.stroke_color.clone(),
                stroke_width: self.config.stroke_width,
            }],
            Gesture::Connecting(g) => vec![Preview::Connection {
                start: g.start,
                pointer: g.pointer,
            }],
            Gesture::BoxSelecting(g) => vec![Preview::SelectionBox { rect: g.rect() }],
            Gesture::Resizing(g) => vec![Preview::Dimensions { node: g.node }],
            Gesture::Idle | Gesture::Dragging(_) | Gesture::Panning(_) => Vec::new(),
        }
    }

    /// Display list for the current frame.
    pub fn scene(&self) -> Scene {
        let previews = self.previews();
        let selected = |id: NodeId| self.selection.contains(id);
        build_scene(
            &self.board,
            SceneInput {
                viewport: self.viewport,
                grid_spacing: self.config.grid_spacing,
                cursor: self.cursor(),
                selected: &selected,
                previews: &previews,
            },
        )
    }
}
