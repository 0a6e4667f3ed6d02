//! Configuration data model.
//!
//! Two layers live here:
//! - `*Def` types: the permissive JSON boundary, exactly what a generator or a file provides.
//! - Normalized types ([`VideoConfig`], [`SceneData`], [`DiagramConfig`], ...): produced once by
//!   [`crate::scene::normalize`], immutable afterwards, and serialized back to the same camelCase
//!   schema for export.

use crate::assets::color::Color;
use crate::foundation::core::{Canvas, Fps, FrameIndex, FrameRange, RenderCtx};
use serde::{Deserialize, Serialize};

pub(crate) const DEFAULT_FPS: u32 = 30;
pub(crate) const DEFAULT_WIDTH: u32 = 1920;
pub(crate) const DEFAULT_HEIGHT: u32 = 1080;

fn default_fps() -> u32 {
    DEFAULT_FPS
}

fn default_width() -> u32 {
    DEFAULT_WIDTH
}

fn default_height() -> u32 {
    DEFAULT_HEIGHT
}

/// Named diagram style preset.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ThemeName {
    #[default]
    Classic,
    Neon,
}

/// Scene variant tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SceneType {
    Intro,
    BulletPoint,
    Quote,
    Outro,
    TechDiagram,
}

/// Node icon/semantics tag. Unrecognized strings land on [`NodeType::Unknown`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeType {
    Database,
    Server,
    Client,
    Code,
    Lock,
    Queue,
    Cloud,
    Firewall,
    #[serde(other)]
    Unknown,
}

/// Action variant tag. Unrecognized strings land on [`ActionType::Unknown`] and are dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionType {
    Packet,
    Highlight,
    Pulse,
    ShowLabel,
    #[serde(other)]
    Unknown,
}

// ---------------------------------------------------------------------------------------------
// Boundary (JSON) model
// ---------------------------------------------------------------------------------------------

/// Whole-video configuration as it arrives from a file or a script generator.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoConfigDef {
    pub scenes: Vec<SceneDef>,
    /// Redundant with the scene durations; recomputed during normalization.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_duration_frames: Option<i64>,
    #[serde(default = "default_fps")]
    pub fps: u32,
    #[serde(default = "default_width")]
    pub width: u32,
    #[serde(default = "default_height")]
    pub height: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suggested_music_mood: Option<String>,
    #[serde(default)]
    pub theme: ThemeName,
}

/// One scene as it arrives at the boundary.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SceneDef {
    #[serde(rename = "type")]
    pub kind: SceneType,
    pub title: String,
    #[serde(default)]
    pub subtitle: String,
    pub background_color: String,
    pub text_color: String,
    pub duration_in_frames: i64,
    /// Kept raw so a malformed payload degrades to an empty diagram instead of failing the load.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub diagram_config: Option<serde_json::Value>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct DiagramNodeDef {
    pub(crate) id: String,
    #[serde(rename = "type")]
    pub(crate) kind: NodeType,
    #[serde(default)]
    pub(crate) label: String,
    pub(crate) x: f64,
    pub(crate) y: f64,
    #[serde(default)]
    pub(crate) color: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct DiagramEdgeDef {
    pub(crate) from_id: String,
    pub(crate) to_id: String,
    #[serde(default)]
    pub(crate) label: Option<String>,
    #[serde(default)]
    pub(crate) color: Option<String>,
}

/// Flat action record; also the serialized shape of [`DiagramAction`].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct DiagramActionDef {
    #[serde(rename = "type")]
    pub(crate) kind: ActionType,
    #[serde(default)]
    pub(crate) start_delay: u32,
    pub(crate) duration: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub(crate) from_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub(crate) to_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub(crate) target_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub(crate) label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub(crate) color: Option<String>,
}

// ---------------------------------------------------------------------------------------------
// Normalized model
// ---------------------------------------------------------------------------------------------

/// Validated, immutable video configuration.
///
/// Built only through normalization (`from_reader`, `from_path`, `from_def`, ...), so every
/// invariant holds for the lifetime of the value: at least one scene, positive scene durations,
/// `total_duration_frames` equal to their sum, parsed colors, and a concrete diagram on every
/// `tech_diagram` scene.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoConfig {
    pub(crate) scenes: Vec<SceneData>,
    pub(crate) total_duration_frames: u64,
    pub(crate) fps: u32,
    pub(crate) width: u32,
    pub(crate) height: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) suggested_music_mood: Option<String>,
    pub(crate) theme: ThemeName,
}

impl VideoConfig {
    pub fn scenes(&self) -> &[SceneData] {
        &self.scenes
    }

    pub fn total_duration_frames(&self) -> u64 {
        self.total_duration_frames
    }

    pub fn fps(&self) -> Fps {
        Fps {
            num: self.fps,
            den: 1,
        }
    }

    pub fn canvas(&self) -> Canvas {
        Canvas {
            width: self.width,
            height: self.height,
        }
    }

    /// Render context matching the configured canvas and frame rate.
    pub fn render_ctx(&self) -> RenderCtx {
        RenderCtx::new(self.canvas(), self.fps())
    }

    pub fn suggested_music_mood(&self) -> Option<&str> {
        self.suggested_music_mood.as_deref()
    }

    pub fn theme(&self) -> ThemeName {
        self.theme
    }

    /// Whole timeline as a frame range `[0, total)`.
    pub fn frame_range(&self) -> FrameRange {
        FrameRange {
            start: FrameIndex(0),
            end: FrameIndex(self.total_duration_frames),
        }
    }

    pub fn duration_secs(&self) -> f64 {
        self.fps().frames_to_secs(self.total_duration_frames)
    }
}

/// A normalized scene.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SceneData {
    #[serde(flatten)]
    pub kind: SceneKind,
    pub title: String,
    pub subtitle: String,
    pub background_color: Color,
    pub text_color: Color,
    pub duration_in_frames: u32,
}

impl SceneData {
    pub fn scene_type(&self) -> SceneType {
        self.kind.scene_type()
    }

    pub fn duration_frames(&self) -> u64 {
        u64::from(self.duration_in_frames)
    }
}

/// Scene variant with its variant-specific payload.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SceneKind {
    Intro,
    BulletPoint,
    Quote,
    Outro,
    TechDiagram {
        #[serde(rename = "diagramConfig")]
        diagram: DiagramConfig,
    },
}

impl SceneKind {
    pub fn scene_type(&self) -> SceneType {
        match self {
            Self::Intro => SceneType::Intro,
            Self::BulletPoint => SceneType::BulletPoint,
            Self::Quote => SceneType::Quote,
            Self::Outro => SceneType::Outro,
            Self::TechDiagram { .. } => SceneType::TechDiagram,
        }
    }
}

/// Nodes, edges and timed actions of one `tech_diagram` scene.
///
/// Edges and actions reference nodes by id only; a dangling id is legal and simply renders nothing.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DiagramConfig {
    pub nodes: Vec<DiagramNode>,
    pub edges: Vec<DiagramEdge>,
    pub actions: Vec<DiagramAction>,
}

impl DiagramConfig {
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty() && self.edges.is_empty() && self.actions.is_empty()
    }

    /// Position of the node with `id` in declaration order.
    pub fn node_index(&self, id: &str) -> Option<usize> {
        self.nodes.iter().position(|n| n.id == id)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DiagramNode {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: NodeType,
    pub label: String,
    /// Percent of canvas width, `0..=100`.
    pub x: f64,
    /// Percent of canvas height, `0..=100`.
    pub y: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<Color>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DiagramEdge {
    pub from_id: String,
    pub to_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<Color>,
}

/// A timed effect scoped to `[start_delay, start_delay + duration)` in scene-local frames.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(into = "DiagramActionDef")]
pub struct DiagramAction {
    pub kind: ActionKind,
    pub start_delay: u32,
    /// Always > 0.
    pub duration: u32,
    pub label: Option<String>,
    pub color: Option<Color>,
}

/// Action variant with exactly the node references it needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionKind {
    Packet { from_id: String, to_id: String },
    Highlight { target_id: String },
    Pulse { target_id: String },
    ShowLabel { target_id: String },
}

impl ActionKind {
    pub fn action_type(&self) -> ActionType {
        match self {
            Self::Packet { .. } => ActionType::Packet,
            Self::Highlight { .. } => ActionType::Highlight,
            Self::Pulse { .. } => ActionType::Pulse,
            Self::ShowLabel { .. } => ActionType::ShowLabel,
        }
    }

    /// Target node of emphasis/label actions.
    pub fn target_id(&self) -> Option<&str> {
        match self {
            Self::Packet { .. } => None,
            Self::Highlight { target_id }
            | Self::Pulse { target_id }
            | Self::ShowLabel { target_id } => Some(target_id),
        }
    }
}

/// Lifecycle of an action, derived from the local frame alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionPhase {
    Pending,
    Active,
    Finished,
}

impl DiagramAction {
    pub fn window(&self) -> FrameRange {
        let start = u64::from(self.start_delay);
        FrameRange {
            start: FrameIndex(start),
            end: FrameIndex(start + u64::from(self.duration)),
        }
    }

    pub fn phase(&self, local_frame: i64) -> ActionPhase {
        let start = i64::from(self.start_delay);
        let end = start + i64::from(self.duration);
        if local_frame < start {
            ActionPhase::Pending
        } else if local_frame < end {
            ActionPhase::Active
        } else {
            ActionPhase::Finished
        }
    }

    pub fn is_active(&self, local_frame: i64) -> bool {
        self.phase(local_frame) == ActionPhase::Active
    }

    /// Whether a packet is drawn at `local_frame`.
    ///
    /// Unlike [`is_active`](Self::is_active) this includes the closing frame
    /// `startDelay + duration`, where the packet sits on its destination anchor.
    pub fn in_flight(&self, local_frame: i64) -> bool {
        (0..=i64::from(self.duration)).contains(&self.elapsed(local_frame))
    }

    /// Frames since the action started (negative while pending).
    pub fn elapsed(&self, local_frame: i64) -> i64 {
        local_frame - i64::from(self.start_delay)
    }
}

impl From<DiagramAction> for DiagramActionDef {
    fn from(a: DiagramAction) -> Self {
        let kind = a.kind.action_type();
        let (from_id, to_id, target_id) = match a.kind {
            ActionKind::Packet { from_id, to_id } => (Some(from_id), Some(to_id), None),
            ActionKind::Highlight { target_id }
            | ActionKind::Pulse { target_id }
            | ActionKind::ShowLabel { target_id } => (None, None, Some(target_id)),
        };
        Self {
            kind,
            start_delay: a.start_delay,
            duration: a.duration,
            from_id,
            to_id,
            target_id,
            label: a.label,
            color: a.color.map(|c| c.to_string()),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/model.rs"]
mod tests;
