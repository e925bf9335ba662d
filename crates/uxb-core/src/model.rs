//! Board data model: typed nodes, their payloads, and directed edges.
//!
//! A node's position and width are first-class. Height is not: it lives in
//! `NodeData::height` for boxes that need an explicit extent (shapes,
//! freehand strokes, resized cards) and is absent for content-sized cards.
//! The engine reads nothing else from a payload; everything past the height
//! belongs to the renderer for that node type.

use crate::error::{EditorError, EditorResult};
use crate::geometry::{Bounds, Point};
use crate::id::{EdgeId, NodeId};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Height assumed for hit testing and box selection when a node has none.
pub const HIT_FALLBACK_HEIGHT: f32 = 200.0;
/// Width assumed for hit testing and fit-to-screen when a node reports zero
/// width.
pub const HIT_FALLBACK_WIDTH: f32 = 300.0;
/// Height assumed for connection anchors and resize when a node has none.
pub const ANCHOR_FALLBACK_HEIGHT: f32 = 100.0;
/// Height assumed by fit-to-screen when a node has none.
pub const FIT_FALLBACK_HEIGHT: f32 = 300.0;

// ─── Node type tag ───────────────────────────────────────────────────────

/// The closed set of node variants. Selects default width and payload shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum NodeType {
    SectionHeader,
    StickyNote,
    TextCard,
    PersonaCard,
    UserFlow,
    HmwCard,
    Checklist,
    Matrix,
    PrincipleCard,
    Timeline,
    UserContextCard,
    WhoWhatWhy,
    ProblemBrief,
    UserContext,
    #[serde(rename = "crazy-8s")]
    Crazy8s,
    MobileFrame,
    SuccessMetrics,
    FlowStep,
    ClarifyingQuestions,
    BusinessGoals,
    KeyInsights,
    PrioritizationMatrix,
    SummaryCard,
    SimpleText,
    SimpleShape,
    SimpleCircle,
    Shape,
    CompetitorAnalysis,
    BrainstormList,
    IdeaVoting,
    UspCard,
    WireframeSketch,
    Pencil,
}

impl NodeType {
    pub const ALL: [NodeType; 33] = [
        NodeType::SectionHeader,
        NodeType::StickyNote,
        NodeType::TextCard,
        NodeType::PersonaCard,
        NodeType::UserFlow,
        NodeType::HmwCard,
        NodeType::Checklist,
        NodeType::Matrix,
        NodeType::PrincipleCard,
        NodeType::Timeline,
        NodeType::UserContextCard,
        NodeType::WhoWhatWhy,
        NodeType::ProblemBrief,
        NodeType::UserContext,
        NodeType::Crazy8s,
        NodeType::MobileFrame,
        NodeType::SuccessMetrics,
        NodeType::FlowStep,
        NodeType::ClarifyingQuestions,
        NodeType::BusinessGoals,
        NodeType::KeyInsights,
        NodeType::PrioritizationMatrix,
        NodeType::SummaryCard,
        NodeType::SimpleText,
        NodeType::SimpleShape,
        NodeType::SimpleCircle,
        NodeType::Shape,
        NodeType::CompetitorAnalysis,
        NodeType::BrainstormList,
        NodeType::IdeaVoting,
        NodeType::UspCard,
        NodeType::WireframeSketch,
        NodeType::Pencil,
    ];

    /// The kebab-case tag used by palette templates.
    pub fn tag(&self) -> &'static str {
        match self {
            NodeType::SectionHeader => "section-header",
            NodeType::StickyNote => "sticky-note",
            NodeType::TextCard => "text-card",
            NodeType::PersonaCard => "persona-card",
            NodeType::UserFlow => "user-flow",
            NodeType::HmwCard => "hmw-card",
            NodeType::Checklist => "checklist",
            NodeType::Matrix => "matrix",
            NodeType::PrincipleCard => "principle-card",
            NodeType::Timeline => "timeline",
            NodeType::UserContextCard => "user-context-card",
            NodeType::WhoWhatWhy => "who-what-why",
            NodeType::ProblemBrief => "problem-brief",
            NodeType::UserContext => "user-context",
            NodeType::Crazy8s => "crazy-8s",
            NodeType::MobileFrame => "mobile-frame",
            NodeType::SuccessMetrics => "success-metrics",
            NodeType::FlowStep => "flow-step",
            NodeType::ClarifyingQuestions => "clarifying-questions",
            NodeType::BusinessGoals => "business-goals",
            NodeType::KeyInsights => "key-insights",
            NodeType::PrioritizationMatrix => "prioritization-matrix",
            NodeType::SummaryCard => "summary-card",
            NodeType::SimpleText => "simple-text",
            NodeType::SimpleShape => "simple-shape",
            NodeType::SimpleCircle => "simple-circle",
            NodeType::Shape => "shape",
            NodeType::CompetitorAnalysis => "competitor-analysis",
            NodeType::BrainstormList => "brainstorm-list",
            NodeType::IdeaVoting => "idea-voting",
            NodeType::UspCard => "usp-card",
            NodeType::WireframeSketch => "wireframe-sketch",
            NodeType::Pencil => "pencil",
        }
    }

    /// Parse a template tag.
    ///
    /// # Errors
    /// `UnknownNodeType` if the tag names no variant.
    pub fn from_tag(tag: &str) -> EditorResult<Self> {
        NodeType::ALL
            .iter()
            .copied()
            .find(|t| t.tag() == tag)
            .ok_or_else(|| EditorError::UnknownNodeType(tag.to_string()))
    }
}

impl FromStr for NodeType {
    type Err = EditorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NodeType::from_tag(s)
    }
}

impl fmt::Display for NodeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

// ─── Payload records ─────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectionHeader {
    pub number: String,
    pub title: String,
    pub subtitle: String,
    pub color: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StickyNote {
    pub text: String,
    pub color: String,
}

/// A heading plus free text. Text card, USP, summary, legacy user context.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabeledText {
    pub label: String,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmpathyMap {
    pub who: String,
    pub what: String,
    pub why: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextItem {
    pub id: String,
    pub text: String,
}

/// "How might we" statements.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Statements {
    pub items: Vec<TextItem>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Quadrant {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuadrantItem {
    pub id: String,
    pub text: String,
    pub quadrant: Quadrant,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeedbackGrid {
    pub items: Vec<QuadrantItem>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Persona {
    pub name: String,
    pub role: String,
    pub age: String,
    pub avatar: String,
    pub bio: String,
    pub goals: Vec<String>,
    pub pain_points: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckItem {
    pub id: String,
    pub text: String,
    pub checked: bool,
}

/// Titled list of checkable items. Checklist, competitor analysis,
/// brainstorm list, idea voting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Checklist {
    pub title: String,
    pub items: Vec<CheckItem>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Principle {
    pub title: String,
    pub description: String,
    pub color: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimelineStep {
    pub id: String,
    pub title: String,
    pub date: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Timeline {
    pub title: String,
    pub steps: Vec<TimelineStep>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProblemBrief {
    pub context: String,
    pub problem: String,
    pub goals: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserSegment {
    pub id: String,
    pub name: String,
    pub count: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserSegments {
    pub users: Vec<UserSegment>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlowStep {
    pub label: String,
    #[serde(rename = "type")]
    pub step_type: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Crazy8s {
    pub grids: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Metric {
    pub id: String,
    pub label: String,
    pub value: String,
    pub target: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SuccessMetrics {
    pub metrics: Vec<Metric>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Question {
    pub id: String,
    pub text: String,
    pub answered: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClarifyingQuestions {
    pub questions: Vec<Question>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BusinessGoals {
    pub business: String,
    pub user: String,
    pub tech: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InsightKind {
    Problem,
    Stat,
    Finding,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Insight {
    pub id: String,
    pub text: String,
    #[serde(rename = "type")]
    pub kind: InsightKind,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeyInsights {
    pub insights: Vec<Insight>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShapeKind {
    Rectangle,
    Circle,
    Diamond,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Shape {
    pub shape_type: ShapeKind,
    pub color: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimpleText {
    pub text: String,
    pub font_size: f32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

/// A committed pencil stroke. `path` is in node-local coordinates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Freehand {
    pub path: String,
    pub color: String,
    pub stroke_width: f32,
}

/// Type-specific payload. One record per payload shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum NodePayload {
    SectionHeader(SectionHeader),
    StickyNote(StickyNote),
    LabeledText(LabeledText),
    EmpathyMap(EmpathyMap),
    Statements(Statements),
    FeedbackGrid(FeedbackGrid),
    Persona(Persona),
    Checklist(Checklist),
    Principle(Principle),
    Timeline(Timeline),
    ProblemBrief(ProblemBrief),
    UserSegments(UserSegments),
    FlowStep(FlowStep),
    Crazy8s(Crazy8s),
    SuccessMetrics(SuccessMetrics),
    ClarifyingQuestions(ClarifyingQuestions),
    BusinessGoals(BusinessGoals),
    KeyInsights(KeyInsights),
    Shape(Shape),
    SimpleText(SimpleText),
    Freehand(Freehand),
    /// Cards whose content lives entirely in the renderer.
    Empty,
}

// ─── Node data + height convention ───────────────────────────────────────

/// Anything that may carry an explicit box height.
pub trait HasOptionalHeight {
    fn height(&self) -> Option<f32>;

    fn set_height(&mut self, height: f32);

    fn height_or(&self, fallback: f32) -> f32 {
        match self.height() {
            Some(h) if h > 0.0 => h,
            _ => fallback,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<f32>,
    #[serde(flatten)]
    pub payload: NodePayload,
}

impl NodeData {
    pub fn new(payload: NodePayload) -> Self {
        Self {
            height: None,
            payload,
        }
    }

    pub fn with_height(payload: NodePayload, height: f32) -> Self {
        Self {
            height: Some(height),
            payload,
        }
    }
}

impl HasOptionalHeight for NodeData {
    fn height(&self) -> Option<f32> {
        self.height
    }

    fn set_height(&mut self, height: f32) {
        self.height = Some(height);
    }
}

// ─── Node ────────────────────────────────────────────────────────────────

/// A positioned, typed element on the canvas.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CanvasNode {
    pub id: NodeId,
    #[serde(rename = "type")]
    pub node_type: NodeType,
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub z_index: u32,
    pub data: NodeData,
}

impl CanvasNode {
    /// A node with an explicit payload. `z_index` is assigned when the node
    /// is inserted into a `Board`.
    pub fn new(id: NodeId, node_type: NodeType, origin: Point, width: f32, data: NodeData) -> Self {
        Self {
            id,
            node_type,
            x: origin.x,
            y: origin.y,
            width,
            z_index: 0,
            data,
        }
    }

    /// A node of `node_type` at `origin` with the registered default width and
    /// a freshly generated default payload.
    pub fn from_template(node_type: NodeType, origin: Point) -> Self {
        Self::new(
            NodeId::generate(),
            node_type,
            origin,
            node_type.default_width(),
            NodeData::new(node_type.default_payload()),
        )
    }

    /// Like `from_template`, drawing template colours from `rng`.
    pub fn from_template_with<R: Rng + ?Sized>(
        node_type: NodeType,
        origin: Point,
        rng: &mut R,
    ) -> Self {
        Self::new(
            NodeId::generate(),
            node_type,
            origin,
            node_type.default_width(),
            NodeData::new(node_type.default_payload_with(rng)),
        )
    }

    pub fn origin(&self) -> Point {
        Point::new(self.x, self.y)
    }

    /// AABB using `fallback_height` when the node carries none.
    pub fn bounds_or(&self, fallback_height: f32) -> Bounds {
        Bounds::new(self.x, self.y, self.width, self.height_or(fallback_height))
    }

    /// Width, or `fallback` when the node reports none.
    pub fn width_or(&self, fallback: f32) -> f32 {
        if self.width > 0.0 { self.width } else { fallback }
    }

    /// AABB used for hit testing and box selection.
    pub fn hit_bounds(&self) -> Bounds {
        Bounds::new(
            self.x,
            self.y,
            self.width_or(HIT_FALLBACK_WIDTH),
            self.height_or(HIT_FALLBACK_HEIGHT),
        )
    }

    pub fn is_resizable(&self) -> bool {
        self.node_type.is_resizable()
    }
}

impl HasOptionalHeight for CanvasNode {
    fn height(&self) -> Option<f32> {
        self.data.height()
    }

    fn set_height(&mut self, height: f32) {
        self.data.set_height(height);
    }
}

// ─── Edge ────────────────────────────────────────────────────────────────

/// A directed connection between two distinct nodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Edge {
    pub id: EdgeId,
    #[serde(rename = "startNodeId")]
    pub start: NodeId,
    #[serde(rename = "endNodeId")]
    pub end: NodeId,
}

impl Edge {
    pub fn touches(&self, node: NodeId) -> bool {
        self.start == node || self.end == node
    }
}
