use std::sync::Arc;

use crate::eval::scene::{SceneFrame, evaluate_scene};
use crate::eval::theme::DiagramTheme;
use crate::eval::timeline::Timeline;
use crate::foundation::core::{FrameIndex, RenderCtx};
use crate::foundation::error::ReelResult;
use crate::scene::generation::{GenerationRequest, ScriptGenerator, generate_video};
use crate::scene::model::VideoConfig;

/// What the host should draw for one global frame.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderDescription {
    /// Frame the host asked for, before clamping.
    pub requested_frame: i64,
    /// Frame actually rendered, inside `[0, total)`.
    pub global_frame: FrameIndex,
    pub scene_index: usize,
    pub local_frame: FrameIndex,
    pub scene: SceneFrame,
}

/// Render one frame of `config`.
///
/// Out-of-range frames clamp to the first/last frame. Builds the timeline on every call; use
/// [`PlaybackSession`] when rendering many frames of the same configuration.
#[tracing::instrument(level = "trace", skip(config, ctx))]
pub fn render(config: &VideoConfig, global_frame: i64, ctx: &RenderCtx) -> RenderDescription {
    let timeline = Timeline::new(config.scenes());
    let theme = DiagramTheme::named(config.theme());
    render_located(config, &timeline, &theme, global_frame, ctx)
}

fn render_located(
    config: &VideoConfig,
    timeline: &Timeline,
    theme: &DiagramTheme,
    global_frame: i64,
    ctx: &RenderCtx,
) -> RenderDescription {
    // A normalized config always has at least one non-empty scene.
    let at = timeline.locate(global_frame).unwrap_or_default();
    let scene = &config.scenes()[at.scene_index];
    let start = timeline
        .scene_range(at.scene_index)
        .map_or(0, |r| r.start.0);

    RenderDescription {
        requested_frame: global_frame,
        global_frame: FrameIndex(start + at.local_frame.0),
        scene_index: at.scene_index,
        local_frame: at.local_frame,
        scene: evaluate_scene(scene, at.local_frame.as_i64(), ctx, theme),
    }
}

/// Read-only view over one configuration for the duration of a playback session.
///
/// The configuration is never mutated; [`replace`](Self::replace) and
/// [`regenerate`](Self::regenerate) swap it out as a whole, and a failed regeneration leaves the
/// current one untouched.
#[derive(Clone, Debug)]
pub struct PlaybackSession {
    config: Arc<VideoConfig>,
    timeline: Timeline,
    theme: DiagramTheme,
    /// Set by [`with_theme`](Self::with_theme); survives `replace`/`regenerate`.
    theme_pinned: bool,
}

impl PlaybackSession {
    pub fn new(config: impl Into<Arc<VideoConfig>>) -> Self {
        let config = config.into();
        Self {
            timeline: Timeline::new(config.scenes()),
            theme: DiagramTheme::named(config.theme()),
            theme_pinned: false,
            config,
        }
    }

    pub fn config(&self) -> &Arc<VideoConfig> {
        &self.config
    }

    pub fn timeline(&self) -> &Timeline {
        &self.timeline
    }

    pub fn theme(&self) -> &DiagramTheme {
        &self.theme
    }

    /// Override the preset named by the configuration.
    ///
    /// The override stays in effect when the configuration is replaced.
    pub fn with_theme(mut self, theme: DiagramTheme) -> Self {
        self.theme = theme;
        self.theme_pinned = true;
        self
    }

    /// Render at the configuration's own canvas and frame rate.
    pub fn render(&self, global_frame: i64) -> RenderDescription {
        self.render_with(global_frame, &self.config.render_ctx())
    }

    /// Render onto a different surface (e.g. a scaled preview).
    pub fn render_with(&self, global_frame: i64, ctx: &RenderCtx) -> RenderDescription {
        render_located(&self.config, &self.timeline, &self.theme, global_frame, ctx)
    }

    /// Swap in a new configuration wholesale; returns the previous one.
    pub fn replace(&mut self, config: impl Into<Arc<VideoConfig>>) -> Arc<VideoConfig> {
        let next = Self::new(config);
        let prev = std::mem::replace(&mut self.config, next.config);
        self.timeline = next.timeline;
        if !self.theme_pinned {
            self.theme = next.theme;
        }
        tracing::info!(
            scenes = self.config.scenes().len(),
            total_frames = self.config.total_duration_frames(),
            "playback configuration replaced"
        );
        prev
    }

    /// Generate a new configuration and swap it in only if generation fully succeeds.
    ///
    /// Returns the suggested music mood of the new video.
    pub fn regenerate(
        &mut self,
        generator: &dyn ScriptGenerator,
        request: &GenerationRequest,
    ) -> ReelResult<String> {
        let video = match generate_video(generator, request) {
            Ok(v) => v,
            Err(e) => {
                tracing::warn!(
                    error = %e,
                    "regeneration failed; keeping the current configuration"
                );
                return Err(e);
            }
        };
        self.replace(video.config);
        Ok(video.music_mood)
    }

    /// Current configuration as pretty JSON, in the same schema it was loaded from.
    pub fn export_json(&self) -> ReelResult<String> {
        self.config.to_json_pretty()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/session/playback.rs"]
mod tests;
