//! Contract with the external script-generation service.
//!
//! The service itself (an LLM behind a network call) lives outside this crate. It is reached
//! through the [`ScriptGenerator`] trait, which hands back raw JSON text; everything after that
//! (parsing, sizing, normalization) happens here, and nothing is applied unless all of it succeeds.

use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::foundation::core::{Canvas, Fps};
use crate::foundation::error::{ReelError, ReelResult};
use crate::scene::model::{SceneDef, ThemeName, VideoConfig, VideoConfigDef};

pub(crate) const MIN_DURATION_SECS: u32 = 5;
pub(crate) const MAX_DURATION_SECS: u32 = 600;

/// Output aspect ratio offered to the user.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum AspectRatio {
    #[default]
    #[serde(rename = "16:9")]
    Landscape,
    #[serde(rename = "9:16")]
    Portrait,
    #[serde(rename = "1:1")]
    Square,
}

impl AspectRatio {
    pub fn canvas(self) -> Canvas {
        match self {
            Self::Landscape => Canvas {
                width: 1920,
                height: 1080,
            },
            Self::Portrait => Canvas {
                width: 1080,
                height: 1920,
            },
            Self::Square => Canvas {
                width: 1080,
                height: 1080,
            },
        }
    }
}

fn default_request_fps() -> u32 {
    30
}

/// What the user asked for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationRequest {
    pub topic: String,
    pub duration_seconds: u32,
    #[serde(default)]
    pub aspect_ratio: AspectRatio,
    #[serde(default = "default_request_fps")]
    pub fps: u32,
}

impl GenerationRequest {
    pub fn new(topic: impl Into<String>, duration_seconds: u32, aspect_ratio: AspectRatio) -> Self {
        Self {
            topic: topic.into(),
            duration_seconds,
            aspect_ratio,
            fps: default_request_fps(),
        }
    }

    pub fn validate(&self) -> ReelResult<()> {
        if self.topic.trim().is_empty() {
            return Err(ReelError::validation("generation topic must be non-empty"));
        }
        if !(MIN_DURATION_SECS..=MAX_DURATION_SECS).contains(&self.duration_seconds) {
            return Err(ReelError::validation(format!(
                "generation duration must be within {MIN_DURATION_SECS}..={MAX_DURATION_SECS} seconds"
            )));
        }
        Fps::integer(self.fps)?;
        Ok(())
    }

    pub fn canvas(&self) -> Canvas {
        self.aspect_ratio.canvas()
    }

    /// Frame budget the generated scenes should add up to.
    pub fn target_frames(&self) -> u64 {
        u64::from(self.duration_seconds) * u64::from(self.fps)
    }

    /// Instruction text sent alongside [`response_schema`].
    pub fn prompt(&self) -> String {
        let canvas = self.canvas();
        format!(
            "Write a short explainer video script about \"{topic}\".\n\
             The video runs at {fps} fps on a {w}x{h} canvas and should last about {secs} seconds \
             ({frames} frames in total); scene durationInFrames values must add up to roughly that.\n\
             Use scene types intro, bullet_point, quote, tech_diagram and outro. Start with an intro \
             and end with an outro.\n\
             For tech_diagram scenes provide diagramConfig with nodes (unique id, type one of \
             database|server|client|code|lock|queue|cloud|firewall, label, x and y as percentages \
             0-100 where 50 is the center), edges (fromId, toId, optional label) and actions \
             (packet with fromId/toId, highlight|pulse|show_label with targetId; startDelay and \
             duration in frames relative to the scene start).\n\
             Colors are #RRGGBB hex strings. Also suggest a background music mood.",
            topic = self.topic.trim(),
            fps = self.fps,
            w = canvas.width,
            h = canvas.height,
            secs = self.duration_seconds,
            frames = self.target_frames(),
        )
    }
}

/// Raw response body returned by the generator.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationResponse {
    #[serde(default)]
    pub suggested_music_mood: String,
    pub scenes: Vec<SceneDef>,
}

/// A freshly generated, normalized video.
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratedVideo {
    pub config: VideoConfig,
    pub music_mood: String,
}

/// Seam to the external script-generation service.
pub trait ScriptGenerator {
    /// Produce response JSON for `request`, or fail with a human-readable reason.
    fn generate(&self, request: &GenerationRequest) -> anyhow::Result<String>;
}

impl<F> ScriptGenerator for F
where
    F: Fn(&GenerationRequest) -> anyhow::Result<String>,
{
    fn generate(&self, request: &GenerationRequest) -> anyhow::Result<String> {
        self(request)
    }
}

/// Ask `generator` for a script and turn it into a normalized [`VideoConfig`].
#[tracing::instrument(skip(generator), fields(topic = %request.topic))]
pub fn generate_video(
    generator: &dyn ScriptGenerator,
    request: &GenerationRequest,
) -> ReelResult<GeneratedVideo> {
    request.validate()?;
    let body = generator
        .generate(request)
        .map_err(|e| ReelError::generation(format!("script generation failed: {e:#}")))?;
    accept_response(&body, request)
}

/// Parse and normalize a generator response produced for `request`.
pub fn accept_response(json: &str, request: &GenerationRequest) -> ReelResult<GeneratedVideo> {
    let resp: GenerationResponse = serde_json::from_str(json)
        .map_err(|e| ReelError::serde(format!("parse generation response: {e}")))?;

    let canvas = request.canvas();
    let def = VideoConfigDef {
        scenes: resp.scenes,
        total_duration_frames: None,
        fps: request.fps,
        width: canvas.width,
        height: canvas.height,
        suggested_music_mood: Some(resp.suggested_music_mood.clone()),
        theme: ThemeName::default(),
    };
    let config = VideoConfig::from_def(&def)?;

    let requested = request.target_frames();
    if config.total_duration_frames() != requested {
        tracing::debug!(
            requested,
            generated = config.total_duration_frames(),
            "generated timeline length differs from the requested duration"
        );
    }

    Ok(GeneratedVideo {
        config,
        music_mood: resp.suggested_music_mood,
    })
}

/// JSON schema the generator's response must satisfy.
pub fn response_schema() -> serde_json::Value {
    json!({
        "type": "object",
        "required": ["suggestedMusicMood", "scenes"],
        "properties": {
            "suggestedMusicMood": { "type": "string" },
            "scenes": { "type": "array", "minItems": 1, "items": scene_schema() }
        }
    })
}

fn hex_color_schema() -> serde_json::Value {
    json!({ "type": "string", "pattern": "^#[0-9a-fA-F]{6}$" })
}

fn scene_schema() -> serde_json::Value {
    let required = ["type", "title", "backgroundColor", "textColor", "durationInFrames"];
    let kinds = ["intro", "bullet_point", "quote", "outro", "tech_diagram"];
    json!({
        "type": "object",
        "required": required,
        "properties": {
            "type": { "type": "string", "enum": kinds },
            "title": { "type": "string" },
            "subtitle": { "type": "string" },
            "backgroundColor": hex_color_schema(),
            "textColor": hex_color_schema(),
            "durationInFrames": { "type": "integer", "minimum": 1 },
            "diagramConfig": diagram_schema()
        }
    })
}

fn diagram_schema() -> serde_json::Value {
    json!({
        "type": "object",
        "properties": {
            "nodes": { "type": "array", "items": node_schema() },
            "edges": { "type": "array", "items": edge_schema() },
            "actions": { "type": "array", "items": action_schema() }
        }
    })
}

fn node_schema() -> serde_json::Value {
    let kinds = [
        "database", "server", "client", "code", "lock", "queue", "cloud", "firewall",
    ];
    let percent = json!({ "type": "number", "minimum": 0, "maximum": 100 });
    json!({
        "type": "object",
        "required": ["id", "type", "label", "x", "y"],
        "properties": {
            "id": { "type": "string" },
            "type": { "type": "string", "enum": kinds },
            "label": { "type": "string" },
            "x": percent,
            "y": percent,
            "color": hex_color_schema()
        }
    })
}

fn edge_schema() -> serde_json::Value {
    json!({
        "type": "object",
        "required": ["fromId", "toId"],
        "properties": {
            "fromId": { "type": "string" },
            "toId": { "type": "string" },
            "label": { "type": "string" },
            "color": hex_color_schema()
        }
    })
}

fn action_schema() -> serde_json::Value {
    let kinds = ["packet", "highlight", "pulse", "show_label"];
    json!({
        "type": "object",
        "required": ["type", "startDelay", "duration"],
        "properties": {
            "type": { "type": "string", "enum": kinds },
            "startDelay": { "type": "integer", "minimum": 0 },
            "duration": { "type": "integer", "minimum": 1 },
            "fromId": { "type": "string" },
            "toId": { "type": "string" },
            "targetId": { "type": "string" },
            "label": { "type": "string" },
            "color": hex_color_schema()
        }
    })
}

#[cfg(test)]
#[path = "../../tests/unit/scene/generation.rs"]
mod tests;
