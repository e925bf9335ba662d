pub mod connection;
pub mod grid;
pub mod hit;
pub mod scene;

pub use connection::{
    Anchor, COMMITTED_STYLE, ConnectionCurve, ConnectionPath, EdgeStyle, PREVIEW_STYLE,
    connection_layer,
};
pub use grid::GridSpec;
pub use hit::{hit_test, hit_test_rect};
pub use scene::{
    CursorHint, NodeFlags, NodeRenderer, Preview, RenderItem, Scene, SceneInput, build_scene,
    polyline_path, render_nodes,
};
