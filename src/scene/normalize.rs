use std::collections::HashSet;

use serde::de::DeserializeOwned;

use crate::assets::color::Color;
use crate::foundation::error::{ReelError, ReelResult};
use crate::foundation::math::clamp_percent;
use crate::scene::model::{
    ActionKind, ActionType, DiagramAction, DiagramActionDef, DiagramConfig, DiagramEdge,
    DiagramEdgeDef, DiagramNode, DiagramNodeDef, SceneData, SceneDef, SceneKind, SceneType,
    VideoConfig, VideoConfigDef,
};
use crate::scene::validate::{SchemaErrors, SchemaPathElem};

/// The single normalization step between the JSON boundary and the evaluator.
///
/// Hard violations (non-positive fps/canvas/durations, no scenes, bad scene colors) are collected
/// and reported together. Diagram payloads never fail: anything unusable in them is dropped with a
/// warning, and a missing or unparseable payload becomes an empty diagram.
pub(crate) fn normalize(def: &VideoConfigDef) -> ReelResult<VideoConfig> {
    let mut errors = SchemaErrors::default();

    if def.fps == 0 {
        errors.push(&[SchemaPathElem::Field("fps")], "fps must be > 0");
    }
    if def.width == 0 {
        errors.push(&[SchemaPathElem::Field("width")], "width must be > 0");
    }
    if def.height == 0 {
        errors.push(&[SchemaPathElem::Field("height")], "height must be > 0");
    }
    if def.scenes.is_empty() {
        errors.push(
            &[SchemaPathElem::Field("scenes")],
            "at least one scene is required",
        );
    }

    let mut scenes = Vec::with_capacity(def.scenes.len());
    for (i, scene) in def.scenes.iter().enumerate() {
        if let Some(s) = normalize_scene(scene, i, &mut errors) {
            scenes.push(s);
        }
    }

    if !errors.is_empty() {
        return Err(ReelError::validation(format!(
            "video config is invalid:\n{errors}"
        )));
    }

    let total: u64 = scenes.iter().map(SceneData::duration_frames).sum();
    match def.total_duration_frames {
        Some(declared) if declared != total as i64 => {
            tracing::warn!(
                declared,
                computed = total,
                "totalDurationFrames disagrees with scene durations; using the sum"
            );
        }
        _ => {}
    }

    Ok(VideoConfig {
        scenes,
        total_duration_frames: total,
        fps: def.fps,
        width: def.width,
        height: def.height,
        suggested_music_mood: def
            .suggested_music_mood
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_owned),
        theme: def.theme,
    })
}

fn normalize_scene(def: &SceneDef, index: usize, errors: &mut SchemaErrors) -> Option<SceneData> {
    let path = |field: &'static str| {
        [
            SchemaPathElem::Field("scenes"),
            SchemaPathElem::Index(index),
            SchemaPathElem::Field(field),
        ]
    };

    let duration = match u32::try_from(def.duration_in_frames) {
        Ok(d) if d > 0 => Some(d),
        _ => {
            errors.push(
                &path("durationInFrames"),
                format!(
                    "durationInFrames must be a positive integer (got {})",
                    def.duration_in_frames
                ),
            );
            None
        }
    };
    let background = parse_scene_color(&def.background_color, &path("backgroundColor"), errors);
    let text = parse_scene_color(&def.text_color, &path("textColor"), errors);

    let kind = match def.kind {
        SceneType::Intro => SceneKind::Intro,
        SceneType::BulletPoint => SceneKind::BulletPoint,
        SceneType::Quote => SceneKind::Quote,
        SceneType::Outro => SceneKind::Outro,
        SceneType::TechDiagram => SceneKind::TechDiagram {
            diagram: normalize_diagram(def.diagram_config.as_ref(), index),
        },
    };

    Some(SceneData {
        kind,
        title: def.title.clone(),
        subtitle: def.subtitle.clone(),
        background_color: background?,
        text_color: text?,
        duration_in_frames: duration?,
    })
}

fn parse_scene_color(
    raw: &str,
    path: &[SchemaPathElem],
    errors: &mut SchemaErrors,
) -> Option<Color> {
    match raw.parse::<Color>() {
        Ok(c) => Some(c),
        Err(e) => {
            errors.push(path, e);
            None
        }
    }
}

/// Turn a raw diagram payload into a renderable diagram. Never fails.
///
/// Nodes, edges and actions are parsed one element at a time, so a malformed element only
/// drops itself.
pub(crate) fn normalize_diagram(raw: Option<&serde_json::Value>, scene: usize) -> DiagramConfig {
    let raw = match raw {
        None | Some(serde_json::Value::Null) => {
            tracing::warn!(
                scene,
                "tech_diagram scene has no diagramConfig; using an empty diagram"
            );
            return DiagramConfig::default();
        }
        Some(serde_json::Value::Object(map)) => map,
        Some(_) => {
            tracing::warn!(scene, "diagramConfig is not an object; using an empty diagram");
            return DiagramConfig::default();
        }
    };
    let node_defs: Vec<DiagramNodeDef> = elements(raw, "nodes", scene);
    let edge_defs: Vec<DiagramEdgeDef> = elements(raw, "edges", scene);
    let action_defs: Vec<DiagramActionDef> = elements(raw, "actions", scene);

    let mut seen = HashSet::new();
    let mut nodes = Vec::with_capacity(node_defs.len());
    for n in node_defs {
        if n.id.trim().is_empty() {
            tracing::warn!(scene, "dropping diagram node with an empty id");
            continue;
        }
        if !seen.insert(n.id.clone()) {
            tracing::warn!(scene, id = %n.id, "dropping diagram node with a duplicate id");
            continue;
        }
        nodes.push(DiagramNode {
            color: optional_color(n.color.as_deref(), scene),
            id: n.id,
            kind: n.kind,
            label: n.label,
            x: clamp_percent(n.x),
            y: clamp_percent(n.y),
        });
    }

    let edges = edge_defs
        .into_iter()
        .map(|e| DiagramEdge {
            color: optional_color(e.color.as_deref(), scene),
            from_id: e.from_id,
            to_id: e.to_id,
            label: e.label,
        })
        .collect();

    let actions = action_defs
        .into_iter()
        .enumerate()
        .filter_map(|(i, a)| normalize_action(a, scene, i))
        .collect();

    DiagramConfig {
        nodes,
        edges,
        actions,
    }
}

/// Deserialize each element of the array at `field`, dropping the ones that do not fit.
fn elements<T: DeserializeOwned>(
    raw: &serde_json::Map<String, serde_json::Value>,
    field: &'static str,
    scene: usize,
) -> Vec<T> {
    let items = match raw.get(field) {
        None | Some(serde_json::Value::Null) => return Vec::new(),
        Some(serde_json::Value::Array(items)) => items,
        Some(_) => {
            tracing::warn!(scene, field, "diagramConfig field is not a list; ignoring it");
            return Vec::new();
        }
    };
    items
        .iter()
        .enumerate()
        .filter_map(|(index, item)| match T::deserialize(item) {
            Ok(v) => Some(v),
            Err(e) => {
                tracing::warn!(
                    scene,
                    field,
                    index,
                    error = %e,
                    "dropping malformed diagram element"
                );
                None
            }
        })
        .collect()
}

fn normalize_action(a: DiagramActionDef, scene: usize, index: usize) -> Option<DiagramAction> {
    if a.duration == 0 {
        tracing::warn!(scene, action = index, "dropping action with zero duration");
        return None;
    }

    fn required(id: Option<String>) -> Option<String> {
        id.filter(|s| !s.trim().is_empty())
    }

    let kind = match a.kind {
        ActionType::Packet => match (required(a.from_id), required(a.to_id)) {
            (Some(from_id), Some(to_id)) => Some(ActionKind::Packet { from_id, to_id }),
            _ => None,
        },
        ActionType::Highlight => {
            required(a.target_id).map(|target_id| ActionKind::Highlight { target_id })
        }
        ActionType::Pulse => required(a.target_id).map(|target_id| ActionKind::Pulse { target_id }),
        ActionType::ShowLabel => {
            required(a.target_id).map(|target_id| ActionKind::ShowLabel { target_id })
        }
        ActionType::Unknown => None,
    };
    let Some(kind) = kind else {
        tracing::warn!(
            scene,
            action = index,
            kind = ?a.kind,
            "dropping action with an unknown type or missing node ids"
        );
        return None;
    };

    Some(DiagramAction {
        kind,
        start_delay: a.start_delay,
        duration: a.duration,
        label: a.label,
        color: optional_color(a.color.as_deref(), scene),
    })
}

fn optional_color(raw: Option<&str>, scene: usize) -> Option<Color> {
    let raw = raw?;
    match raw.parse::<Color>() {
        Ok(c) => Some(c),
        Err(e) => {
            tracing::debug!(scene, color = raw, error = %e, "ignoring invalid color override");
            None
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/normalize.rs"]
mod tests;
