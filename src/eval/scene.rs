use crate::animation::interp::{fade_window, lerp};
use crate::animation::spring::{SpringConfig, spring};
use crate::assets::color::Color;
use crate::eval::diagram::{DiagramFrame, evaluate_diagram};
use crate::eval::theme::DiagramTheme;
use crate::foundation::core::{Canvas, RenderCtx};
use crate::scene::model::{SceneData, SceneKind, SceneType};

/// Frames over which standard scenes fade in and out.
pub const SCENE_FADE_FRAMES: u64 = 10;
/// Slide-in distance of standard scene text, in pixels.
pub const SLIDE_IN_PX: f64 = 100.0;

/// Layouts are authored against a 1080px short edge and scaled from there.
const REFERENCE_SHORT_EDGE_PX: f64 = 1080.0;

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SceneFrame {
    pub scene_type: SceneType,
    pub title: String,
    pub subtitle: String,
    pub background_color: Color,
    pub text_color: Color,
    pub progress_bar: ProgressBar,
    pub content: SceneContent,
}

impl SceneFrame {
    pub fn diagram(&self) -> Option<&DiagramFrame> {
        match &self.content {
            SceneContent::Diagram(d) => Some(d),
            SceneContent::Standard(_) => None,
        }
    }

    pub fn layout(&self) -> Option<&StandardLayout> {
        match &self.content {
            SceneContent::Standard(l) => Some(l),
            SceneContent::Diagram(_) => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SceneContent {
    Standard(StandardLayout),
    Diagram(DiagramFrame),
}

/// Text block state shared by intro, bullet point, quote and outro scenes.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StandardLayout {
    pub opacity: f64,
    pub translate_y: f64,
    /// Raw entrance spring progress.
    pub entrance: f64,
    pub title_size_px: f64,
    pub subtitle_size_px: f64,
    pub decoration: Decoration,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Decoration {
    None,
    #[serde(rename_all = "camelCase")]
    Ring {
        radius_px: f64,
        stroke_px: f64,
        scale: f64,
    },
    #[serde(rename_all = "camelCase")]
    QuoteMarks {
        open: &'static str,
        close: &'static str,
        size_px: f64,
    },
    #[serde(rename_all = "camelCase")]
    Bullet { size_px: f64 },
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressBar {
    /// `local / duration`, clamped to `[0, 1]`.
    pub fraction: f64,
    pub width_px: f64,
    pub height_px: f64,
}

impl ProgressBar {
    fn at(local_frame: i64, duration: u64, canvas: Canvas) -> Self {
        let fraction = if duration == 0 {
            1.0
        } else {
            (local_frame as f64 / duration as f64).clamp(0.0, 1.0)
        };
        Self {
            fraction,
            width_px: fraction * canvas.width_f64(),
            height_px: 8.0 * layout_scale(canvas),
        }
    }
}

/// Evaluate one scene at `local_frame` (frames since the scene started).
///
/// Pure function of its arguments. Standard variants get the spring entrance and the trapezoid
/// fade; `tech_diagram` hands its diagram to [`evaluate_diagram`].
pub fn evaluate_scene(
    scene: &SceneData,
    local_frame: i64,
    ctx: &RenderCtx,
    theme: &DiagramTheme,
) -> SceneFrame {
    let duration = scene.duration_frames();
    let content = match &scene.kind {
        SceneKind::TechDiagram { diagram } => {
            SceneContent::Diagram(evaluate_diagram(diagram, local_frame, ctx, theme))
        }
        _ => SceneContent::Standard(standard_layout(
            scene.scene_type(),
            local_frame,
            duration,
            ctx,
        )),
    };

    SceneFrame {
        scene_type: scene.scene_type(),
        title: scene.title.clone(),
        subtitle: scene.subtitle.clone(),
        background_color: scene.background_color,
        text_color: scene.text_color,
        progress_bar: ProgressBar::at(local_frame, duration, ctx.canvas),
        content,
    }
}

fn standard_layout(
    kind: SceneType,
    local_frame: i64,
    duration: u64,
    ctx: &RenderCtx,
) -> StandardLayout {
    let entrance = spring(local_frame, ctx.fps, SpringConfig::CRITICAL);
    let s = layout_scale(ctx.canvas);
    let short_edge = ctx.canvas.width_f64().min(ctx.canvas.height_f64());

    let (title, subtitle, decoration) = match kind {
        SceneType::Intro => (
            96.0,
            40.0,
            Decoration::Ring {
                radius_px: 0.3 * short_edge,
                stroke_px: 4.0 * s,
                scale: entrance,
            },
        ),
        SceneType::BulletPoint => (72.0, 44.0, Decoration::Bullet { size_px: 18.0 * s }),
        SceneType::Quote => (
            64.0,
            36.0,
            Decoration::QuoteMarks {
                open: "\u{201C}",
                close: "\u{201D}",
                size_px: 160.0 * s,
            },
        ),
        SceneType::Outro => (88.0, 40.0, Decoration::None),
        // Never reached: diagram scenes are routed to the diagram evaluator.
        SceneType::TechDiagram => (64.0, 32.0, Decoration::None),
    };

    StandardLayout {
        opacity: fade_window(local_frame, duration, SCENE_FADE_FRAMES),
        translate_y: lerp(entrance, [SLIDE_IN_PX, 0.0]),
        entrance,
        title_size_px: title * s,
        subtitle_size_px: subtitle * s,
        decoration,
    }
}

fn layout_scale(canvas: Canvas) -> f64 {
    canvas.width_f64().min(canvas.height_f64()) / REFERENCE_SHORT_EDGE_PX
}

#[cfg(test)]
#[path = "../../tests/unit/eval/scene.rs"]
mod tests;
