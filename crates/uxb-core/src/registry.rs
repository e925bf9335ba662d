//! Node type registry: default width, palette placement, resizability and
//! default payload for every `NodeType`.
//!
//! Colour and avatar choices are drawn at random from fixed lists. Pass a
//! seeded RNG to `default_payload_with` for reproducible defaults.

use crate::model::*;
use rand::Rng;
use rand::seq::SliceRandom;

/// Palette grouping shown by the template side panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Category {
    Empathize,
    Define,
    Ideate,
    Prototype,
    Test,
    Tools,
    Planning,
    /// Created by tools only, never offered as a template.
    Hidden,
}

impl Category {
    pub fn title(&self) -> &'static str {
        match self {
            Category::Empathize => "1. Empathize & Analyze",
            Category::Define => "2. Define & Strategy",
            Category::Ideate => "3. Ideate & Brainstorm",
            Category::Prototype => "4. Prototype & Flow",
            Category::Test => "5. Test & Summarize",
            Category::Tools => "Tools",
            Category::Planning => "Planning",
            Category::Hidden => "Hidden",
        }
    }
}

const STICKY_COLORS: &[&str] = &[
    "yellow", "blue", "green", "pink", "purple", "orange", "red", "teal",
];
const SECTION_COLORS: &[&str] = &[
    "bg-blue-600",
    "bg-indigo-600",
    "bg-violet-600",
    "bg-orange-500",
    "bg-yellow-500",
    "bg-green-600",
    "bg-red-500",
    "bg-teal-600",
];
const PRINCIPLE_COLORS: &[&str] = &[
    "bg-blue-50 border-blue-200",
    "bg-green-50 border-green-200",
    "bg-purple-50 border-purple-200",
    "bg-orange-50 border-orange-200",
    "bg-rose-50 border-rose-200",
    "bg-teal-50 border-teal-200",
];
const AVATARS: &[&str] = &["👩‍🏫", "👨‍💻", "👩‍💼", "🧑‍🎨", "👨‍🔬"];

/// Neutral outline used for sketched/simple shapes.
pub const OUTLINE_COLOR: &str = "bg-white border-2 border-slate-300";
/// Default pencil colour.
pub const DEFAULT_STROKE_COLOR: &str = "#1a1a2e";
/// Default pencil width.
pub const DEFAULT_STROKE_WIDTH: f32 = 4.0;

fn pick<R: Rng + ?Sized>(list: &[&str], rng: &mut R) -> String {
    list.choose(rng).copied().unwrap_or_default().to_string()
}

fn text_item(id: &str, text: &str) -> TextItem {
    TextItem {
        id: id.into(),
        text: text.into(),
    }
}

fn check_item(id: &str, text: &str) -> CheckItem {
    CheckItem {
        id: id.into(),
        text: text.into(),
        checked: false,
    }
}

fn labeled(label: &str, text: &str) -> NodePayload {
    NodePayload::LabeledText(LabeledText {
        label: label.into(),
        text: text.into(),
    })
}

fn shape(shape_type: ShapeKind, color: &str) -> NodePayload {
    NodePayload::Shape(Shape {
        shape_type,
        color: color.into(),
    })
}

impl NodeType {
    /// Width in canvas units that a freshly created node of this type gets.
    pub fn default_width(&self) -> f32 {
        match self {
            NodeType::PersonaCard => 480.0,
            NodeType::WhoWhatWhy => 800.0,
            NodeType::UserContext => 360.0,
            NodeType::CompetitorAnalysis => 600.0,
            NodeType::ProblemBrief => 600.0,
            NodeType::HmwCard => 400.0,
            NodeType::BusinessGoals => 800.0,
            NodeType::UspCard => 400.0,
            NodeType::PrincipleCard => 400.0,
            NodeType::BrainstormList => 360.0,
            NodeType::IdeaVoting => 400.0,
            NodeType::StickyNote => 240.0,
            NodeType::TextCard => 400.0,
            NodeType::PrioritizationMatrix => 800.0,
            NodeType::Matrix => 600.0,
            NodeType::Crazy8s => 800.0,
            NodeType::UserFlow => 600.0,
            NodeType::MobileFrame => 375.0,
            NodeType::WireframeSketch => 500.0,
            NodeType::FlowStep => 220.0,
            NodeType::SuccessMetrics => 400.0,
            NodeType::SummaryCard => 500.0,
            NodeType::KeyInsights => 600.0,
            NodeType::Checklist => 360.0,
            NodeType::SectionHeader => 340.0,
            NodeType::ClarifyingQuestions => 500.0,
            NodeType::Timeline => 600.0,
            NodeType::Shape => 100.0,
            NodeType::SimpleText => 200.0,
            NodeType::SimpleShape => 100.0,
            NodeType::SimpleCircle => 100.0,
            NodeType::Pencil => 200.0,
            NodeType::UserContextCard => 320.0,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            NodeType::PersonaCard => "Persona Card",
            NodeType::WhoWhatWhy => "Empathy Map",
            NodeType::UserContext => "User Journey",
            NodeType::CompetitorAnalysis => "Competitor Analysis",
            NodeType::ProblemBrief => "Problem Statement",
            NodeType::HmwCard => "HMW Statement",
            NodeType::BusinessGoals => "Business Goals",
            NodeType::UspCard => "USP Card",
            NodeType::PrincipleCard => "Design Principle",
            NodeType::BrainstormList => "Brainstorm List",
            NodeType::IdeaVoting => "Idea Voting",
            NodeType::StickyNote => "Sticky Note",
            NodeType::TextCard => "Text Card",
            NodeType::PrioritizationMatrix => "Prioritization Matrix",
            NodeType::Matrix => "Feedback Grid",
            NodeType::Crazy8s => "Crazy 8s",
            NodeType::UserFlow => "User Flow",
            NodeType::MobileFrame => "Mobile Frame",
            NodeType::WireframeSketch => "Wireframe Sketch",
            NodeType::FlowStep => "Flow Step",
            NodeType::SuccessMetrics => "Success Metrics",
            NodeType::SummaryCard => "Summary Card",
            NodeType::KeyInsights => "Key Insights",
            NodeType::Checklist => "Checklist",
            NodeType::SectionHeader => "Section Header",
            NodeType::ClarifyingQuestions => "Clarifying Questions",
            NodeType::Timeline => "Timeline",
            NodeType::Shape => "Shape",
            NodeType::SimpleText => "Text",
            NodeType::SimpleShape => "Square",
            NodeType::SimpleCircle => "Circle",
            NodeType::Pencil => "Pencil",
            NodeType::UserContextCard => "User Context (Old)",
        }
    }

    pub fn category(&self) -> Category {
        match self {
            NodeType::PersonaCard
            | NodeType::WhoWhatWhy
            | NodeType::UserContext
            | NodeType::CompetitorAnalysis => Category::Empathize,
            NodeType::ProblemBrief
            | NodeType::HmwCard
            | NodeType::BusinessGoals
            | NodeType::UspCard
            | NodeType::PrincipleCard => Category::Define,
            NodeType::BrainstormList
            | NodeType::IdeaVoting
            | NodeType::StickyNote
            | NodeType::TextCard
            | NodeType::PrioritizationMatrix
            | NodeType::Matrix
            | NodeType::Crazy8s => Category::Ideate,
            NodeType::UserFlow
            | NodeType::MobileFrame
            | NodeType::WireframeSketch
            | NodeType::FlowStep => Category::Prototype,
            NodeType::SuccessMetrics
            | NodeType::SummaryCard
            | NodeType::KeyInsights
            | NodeType::Checklist => Category::Test,
            NodeType::SectionHeader | NodeType::ClarifyingQuestions => Category::Tools,
            NodeType::Timeline => Category::Planning,
            NodeType::Shape
            | NodeType::SimpleText
            | NodeType::SimpleShape
            | NodeType::SimpleCircle
            | NodeType::Pencil
            | NodeType::UserContextCard => Category::Hidden,
        }
    }

    /// Whether the node exposes corner resize handles. Everything else is
    /// sized by its content.
    pub fn is_resizable(&self) -> bool {
        matches!(
            self,
            NodeType::SimpleShape
                | NodeType::SimpleCircle
                | NodeType::SimpleText
                | NodeType::MobileFrame
                | NodeType::StickyNote
                | NodeType::WireframeSketch
        )
    }

    /// A freshly generated default payload.
    /// Default payload using the thread-local RNG.
    pub fn default_payload(&self) -> NodePayload {
        self.default_payload_with(&mut rand::thread_rng())
    }

    pub fn default_payload_with<R: Rng + ?Sized>(&self, rng: &mut R) -> NodePayload {
        match self {
            NodeType::SectionHeader => NodePayload::SectionHeader(SectionHeader {
                number: "01".into(),
                title: "Section Title".into(),
                subtitle: "Describe this section".into(),
                color: pick(SECTION_COLORS, rng),
            }),
            NodeType::TextCard => labeled("Notes", "Click to type your notes here..."),
            NodeType::WhoWhatWhy => NodePayload::EmpathyMap(EmpathyMap {
                who: "• Says: ...\n• Thinks: ...".into(),
                what: "• Does: ...\n• Feels: ...".into(),
                why: "Empathy Map".into(),
            }),
            NodeType::StickyNote => NodePayload::StickyNote(StickyNote {
                text: String::new(),
                color: pick(STICKY_COLORS, rng),
            }),
            NodeType::HmwCard => NodePayload::Statements(Statements {
                items: vec![
                    text_item(
                        "1",
                        "How might we reduce onboarding time from 10 min to under 3 min?",
                    ),
                    text_item(
                        "2",
                        "How might we help teachers personalize content without extra effort?",
                    ),
                    text_item(
                        "3",
                        "How might we make AI insights accessible to non-technical users?",
                    ),
                ],
            }),
            NodeType::Matrix => NodePayload::FeedbackGrid(FeedbackGrid {
                items: [
                    ("m1", "What worked well?", Quadrant::TopLeft),
                    ("m2", "What needs improvement?", Quadrant::TopRight),
                    ("m3", "Questions?", Quadrant::BottomLeft),
                    ("m4", "New ideas?", Quadrant::BottomRight),
                ]
                .into_iter()
                .map(|(id, text, quadrant)| QuadrantItem {
                    id: id.into(),
                    text: text.into(),
                    quadrant,
                })
                .collect(),
            }),
            NodeType::PersonaCard => NodePayload::Persona(Persona {
                name: "User Name".into(),
                role: "Role / Title".into(),
                age: "Age 30".into(),
                avatar: pick(AVATARS, rng),
                bio: "Brief description of this persona...".into(),
                goals: vec!["Goal 1".into(), "Goal 2".into()],
                pain_points: vec!["Pain point 1".into(), "Pain point 2".into()],
            }),
            NodeType::Checklist => NodePayload::Checklist(Checklist {
                title: "Checklist".into(),
                items: vec![check_item("c1", "Item 1"), check_item("c2", "Item 2")],
            }),
            NodeType::PrincipleCard => NodePayload::Principle(Principle {
                title: "Design Principle".into(),
                description: "Describe the principle and how it applies...".into(),
                color: pick(PRINCIPLE_COLORS, rng),
            }),
            NodeType::Timeline => NodePayload::Timeline(Timeline {
                title: "Project Timeline".into(),
                steps: [
                    ("t1", "Kickoff", "Week 1", "Initial meeting"),
                    ("t2", "Research", "Week 2", "User interviews"),
                    ("t3", "Design", "Week 3-4", "Wireframes & UI"),
                ]
                .into_iter()
                .map(|(id, title, date, description)| TimelineStep {
                    id: id.into(),
                    title: title.into(),
                    date: date.into(),
                    description: description.into(),
                })
                .collect(),
            }),
            NodeType::UserContextCard => labeled("User Context", "Describe the target user base..."),
            NodeType::ProblemBrief => NodePayload::ProblemBrief(ProblemBrief {
                context: "Background information...".into(),
                problem: "The core problem is...".into(),
                goals: "Success looks like...".into(),
            }),
            NodeType::UserContext => NodePayload::UserSegments(UserSegments {
                users: [
                    ("u1", "Students", "Primary"),
                    ("u2", "Teachers", "Secondary"),
                    ("u3", "Admins", "Tertiary"),
                ]
                .into_iter()
                .map(|(id, name, count)| UserSegment {
                    id: id.into(),
                    name: name.into(),
                    count: count.into(),
                })
                .collect(),
            }),
            NodeType::FlowStep => NodePayload::FlowStep(FlowStep {
                label: "Step Name".into(),
                step_type: "action".into(),
            }),
            NodeType::Crazy8s => NodePayload::Crazy8s(Crazy8s {
                grids: vec![String::new(); 8],
            }),
            NodeType::SuccessMetrics => NodePayload::SuccessMetrics(SuccessMetrics {
                metrics: vec![
                    Metric {
                        id: "m1".into(),
                        label: "Activation Rate".into(),
                        value: "20%".into(),
                        target: "30%".into(),
                    },
                    Metric {
                        id: "m2".into(),
                        label: "Retention (D30)".into(),
                        value: "15%".into(),
                        target: "25%".into(),
                    },
                ],
            }),
            NodeType::ClarifyingQuestions => NodePayload::ClarifyingQuestions(ClarifyingQuestions {
                questions: [
                    ("q1", "Who is the primary end user?"),
                    ("q2", "What is the core business goal?"),
                ]
                .into_iter()
                .map(|(id, text)| Question {
                    id: id.into(),
                    text: text.into(),
                    answered: false,
                })
                .collect(),
            }),
            NodeType::BusinessGoals => NodePayload::BusinessGoals(BusinessGoals {
                business: "Increase user engagement by 40%".into(),
                user: "Complete tasks faster with less friction".into(),
                tech: "Scalable, API-first architecture".into(),
            }),
            NodeType::KeyInsights => NodePayload::KeyInsights(KeyInsights {
                insights: [
                    ("i1", "Users drop off during onboarding", InsightKind::Problem),
                    ("i2", "Mobile usage is 65%", InsightKind::Stat),
                    ("i3", "Accessibility is a major gap", InsightKind::Finding),
                ]
                .into_iter()
                .map(|(id, text, kind)| Insight {
                    id: id.into(),
                    text: text.into(),
                    kind,
                })
                .collect(),
            }),
            NodeType::Shape => shape(ShapeKind::Rectangle, "bg-blue-500"),
            NodeType::CompetitorAnalysis => NodePayload::Checklist(Checklist {
                title: "Competitor Analysis".into(),
                items: vec![
                    check_item("1", "Competitor A: Strengths/Weaknesses"),
                    check_item("2", "Competitor B: Strengths/Weaknesses"),
                ],
            }),
            NodeType::UspCard => labeled("USP", "Unique Selling Proposition:\n\n1. "),
            NodeType::BrainstormList => NodePayload::Checklist(Checklist {
                title: "Brainstorming".into(),
                items: vec![check_item("1", "Idea 1")],
            }),
            NodeType::IdeaVoting => NodePayload::Checklist(Checklist {
                title: "Idea Voting".into(),
                items: vec![check_item("1", "Idea A")],
            }),
            NodeType::WireframeSketch | NodeType::SimpleShape => {
                shape(ShapeKind::Rectangle, OUTLINE_COLOR)
            }
            NodeType::SimpleCircle => shape(ShapeKind::Circle, OUTLINE_COLOR),
            NodeType::SummaryCard => labeled("Summary", "Reflecting on the process..."),
            NodeType::SimpleText => NodePayload::SimpleText(SimpleText {
                text: "Type here...".into(),
                font_size: 16.0,
                color: None,
            }),
            NodeType::Pencil => NodePayload::Freehand(Freehand {
                path: String::new(),
                color: DEFAULT_STROKE_COLOR.into(),
                stroke_width: DEFAULT_STROKE_WIDTH,
            }),
            NodeType::UserFlow | NodeType::MobileFrame | NodeType::PrioritizationMatrix => {
                NodePayload::Empty
            }
        }
    }
}

/// Templates offered by the palette, grouped by category in display order.
pub fn palette() -> Vec<(Category, Vec<NodeType>)> {
    let mut groups: Vec<(Category, Vec<NodeType>)> = Vec::new();
    for ty in NodeType::ALL {
        let category = ty.category();
        if category == Category::Hidden {
            continue;
        }
        match groups.iter_mut().find(|(c, _)| *c == category) {
            Some((_, types)) => types.push(ty),
            None => groups.push((category, vec![ty])),
        }
    }
    groups.sort_by_key(|(c, _)| *c);
    groups
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sticky_note_defaults() {
        assert_eq!(NodeType::StickyNote.default_width(), 240.0);
        assert!(NodeType::StickyNote.is_resizable());
        match NodeType::StickyNote.default_payload() {
            NodePayload::StickyNote(note) => {
                assert!(note.text.is_empty());
                assert!(STICKY_COLORS.contains(&note.color.as_str()));
            }
            other => panic!("expected sticky note payload, got {other:?}"),
        }
    }

    #[test]
    fn seeded_rng_gives_reproducible_defaults() {
        use rand::SeedableRng;
        use rand::rngs::StdRng;

        let draw = |seed| {
            let mut rng = StdRng::seed_from_u64(seed);
            (0..6)
                .map(|_| NodeType::PersonaCard.default_payload_with(&mut rng))
                .collect::<Vec<_>>()
        };
        assert_eq!(draw(7), draw(7));
        for payload in draw(7) {
            match payload {
                NodePayload::Persona(p) => assert!(AVATARS.contains(&p.avatar.as_str())),
                other => panic!("expected persona payload, got {other:?}"),
            }
        }
    }

    #[test]
    fn content_sized_cards_are_not_resizable() {
        assert!(!NodeType::PersonaCard.is_resizable());
        assert!(!NodeType::Timeline.is_resizable());
        assert!(!NodeType::Pencil.is_resizable());
    }

    #[test]
    fn crazy_8s_has_eight_empty_cells() {
        match NodeType::Crazy8s.default_payload() {
            NodePayload::Crazy8s(c) => {
                assert_eq!(c.grids.len(), 8);
                assert!(c.grids.iter().all(String::is_empty));
            }
            other => panic!("expected crazy 8s payload, got {other:?}"),
        }
    }

    #[test]
    fn palette_hides_tool_only_types() {
        let groups = palette();
        let all: Vec<NodeType> = groups.iter().flat_map(|(_, t)| t.iter().copied()).collect();
        assert!(!all.contains(&NodeType::Pencil));
        assert!(!all.contains(&NodeType::SimpleText));
        assert!(all.contains(&NodeType::StickyNote));
        assert_eq!(groups.first().map(|(c, _)| *c), Some(Category::Empathize));
        // Categories appear once each.
        let mut cats: Vec<Category> = groups.iter().map(|(c, _)| *c).collect();
        cats.dedup();
        assert_eq!(cats.len(), groups.len());
    }
}
