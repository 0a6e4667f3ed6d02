//! reelgraph turns a declarative, scene-based video description into per-frame render
//! descriptions for an external player.
//!
//! The flow is the same for every caller:
//!
//! - Load or generate a [`VideoConfig`] (JSON boundary, normalized once)
//! - Create a [`PlaybackSession`] (or call [`render`] directly)
//! - Ask for any global frame, in any order; each answer is a pure function of the frame
#![forbid(unsafe_code)]

mod animation;
mod assets;
mod eval;
mod foundation;
mod scene;
mod session;

pub use crate::foundation::core::{Canvas, Fps, FrameIndex, FrameRange, Point, RenderCtx, Vec2};
pub use crate::foundation::error::{ReelError, ReelResult};
pub use crate::foundation::math::{anchor_px, percent_to_px};

pub use crate::animation::interp::{
    Extrapolate, clamp_progress, fade_window, interpolate, lerp, lerp_point,
};
pub use crate::animation::spring::{SpringConfig, settle_frames, spring, spring_between};
pub use crate::assets::color::Color;

pub use crate::scene::defaults::default_config;
pub use crate::scene::generation::{
    AspectRatio, GeneratedVideo, GenerationRequest, GenerationResponse, ScriptGenerator,
    accept_response, generate_video, response_schema,
};
pub use crate::scene::model::{
    ActionKind, ActionPhase, ActionType, DiagramAction, DiagramConfig, DiagramEdge, DiagramNode,
    NodeType, SceneData, SceneDef, SceneKind, SceneType, ThemeName, VideoConfig, VideoConfigDef,
};

pub use crate::eval::diagram::{
    ActionEffect, DiagramFrame, EdgeState, LabelState, NodeState, PacketState, evaluate_diagram,
    packet_position,
};
pub use crate::eval::scene::{
    Decoration, ProgressBar, SCENE_FADE_FRAMES, SLIDE_IN_PX, SceneContent, SceneFrame,
    StandardLayout, evaluate_scene,
};
pub use crate::eval::theme::{DiagramTheme, GlowStyle, IconSet, Palette, PulseStyle};
pub use crate::eval::timeline::{Located, Timeline, locate};

pub use crate::session::playback::{PlaybackSession, RenderDescription, render};
