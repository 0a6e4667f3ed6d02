use std::collections::HashMap;

use crate::animation::interp::{Extrapolate, clamp_progress, interpolate, lerp, lerp_point};
use crate::animation::spring::spring;
use crate::assets::color::Color;
use crate::eval::theme::DiagramTheme;
use crate::foundation::core::{Point, RenderCtx, Vec2};
use crate::foundation::math::anchor_px;
use crate::scene::model::{ActionKind, DiagramAction, DiagramConfig, NodeType};

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
/// Everything needed to draw one diagram frame.
pub struct DiagramFrame {
    /// Node states in declaration order.
    pub nodes: Vec<NodeState>,
    /// Drawable edges; edges with an unresolved endpoint are absent.
    pub edges: Vec<EdgeState>,
    /// Transient per-action visuals currently on screen.
    pub effects: Vec<ActionEffect>,
}

impl DiagramFrame {
    pub fn node(&self, id: &str) -> Option<&NodeState> {
        self.nodes.iter().find(|n| n.id == id)
    }

    pub fn packets(&self) -> impl Iterator<Item = &PacketState> {
        self.effects.iter().filter_map(|e| match e {
            ActionEffect::Packet(p) => Some(p),
            ActionEffect::Label(_) => None,
        })
    }

    pub fn labels(&self) -> impl Iterator<Item = &LabelState> {
        self.effects.iter().filter_map(|e| match e {
            ActionEffect::Label(l) => Some(l),
            ActionEffect::Packet(_) => None,
        })
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeState {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: NodeType,
    pub icon: &'static str,
    pub label: String,
    /// Pixel anchor (node center).
    pub anchor: Point,
    /// Pop-in scale including any highlight/pulse emphasis.
    pub scale: f64,
    pub opacity: f64,
    pub color: Color,
    pub size_px: f64,
    pub highlighted: bool,
    pub pulsing: bool,
    /// Glow strength in `[0, 1]`, radius taken from the theme.
    pub glow: f64,
    pub glow_radius_px: f64,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EdgeState {
    /// Position of the edge in the declared edge list.
    pub index: usize,
    pub from_id: String,
    pub to_id: String,
    pub from: Point,
    pub to: Point,
    /// Reveal progress in `[0, 1]`.
    pub progress: f64,
    /// `progress` scaled by the theme's opacity ceiling.
    pub opacity: f64,
    pub label: Option<String>,
    pub color: Color,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ActionEffect {
    Packet(PacketState),
    Label(LabelState),
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PacketState {
    pub action_index: usize,
    pub from_id: String,
    pub to_id: String,
    pub label: Option<String>,
    pub color: Color,
    pub position: Point,
    /// Flight progress in `[0, 1]`.
    pub progress: f64,
    pub radius_px: f64,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LabelState {
    pub action_index: usize,
    pub target_id: String,
    pub text: String,
    pub anchor: Point,
    pub scale: f64,
    pub opacity: f64,
    pub color: Option<Color>,
}

/// Emphasis accumulated on one node from every active highlight/pulse action.
#[derive(Clone, Copy, Debug, PartialEq)]
struct Emphasis {
    factor: f64,
    highlighted: bool,
    pulsing: bool,
    glow: f64,
}

impl Emphasis {
    const NONE: Self = Self {
        factor: 1.0,
        highlighted: false,
        pulsing: false,
        glow: 0.0,
    };
}

/// Evaluate a diagram at `local_frame` (frames since scene start).
///
/// Pure: the result depends on the arguments only, so frames may be requested in any order.
#[tracing::instrument(
    level = "trace",
    skip(diagram, ctx, theme),
    fields(nodes = diagram.nodes.len())
)]
pub fn evaluate_diagram(
    diagram: &DiagramConfig,
    local_frame: i64,
    ctx: &RenderCtx,
    theme: &DiagramTheme,
) -> DiagramFrame {
    let anchors: HashMap<&str, Point> = diagram
        .nodes
        .iter()
        .map(|n| (n.id.as_str(), anchor_px(n.x, n.y, ctx.canvas)))
        .collect();

    let nodes = diagram
        .nodes
        .iter()
        .enumerate()
        .map(|(i, node)| {
            let delay = i as i64 * i64::from(theme.node_stagger_frames);
            let pop = spring(local_frame - delay, ctx.fps, theme.node_pop);
            let emphasis = emphasis_for(&node.id, &diagram.actions, local_frame, theme);
            NodeState {
                id: node.id.clone(),
                kind: node.kind,
                icon: theme.icons.icon(node.kind),
                label: node.label.clone(),
                anchor: anchor_px(node.x, node.y, ctx.canvas),
                scale: lerp(pop, [0.0, 1.0]) * emphasis.factor,
                opacity: pop.clamp(0.0, 1.0),
                color: theme.node_color(node.kind, node.color),
                size_px: theme.node_size_px,
                highlighted: emphasis.highlighted,
                pulsing: emphasis.pulsing,
                glow: emphasis.glow,
                glow_radius_px: theme.glow.radius_px,
            }
        })
        .collect();

    let edges = diagram
        .edges
        .iter()
        .enumerate()
        .filter_map(|(i, edge)| {
            let from = *anchors.get(edge.from_id.as_str())?;
            let to = *anchors.get(edge.to_id.as_str())?;
            let delay = i64::from(theme.edge_delay_frames)
                + i as i64 * i64::from(theme.edge_stagger_frames);
            let progress = spring(local_frame - delay, ctx.fps, theme.edge_reveal).clamp(0.0, 1.0);
            Some(EdgeState {
                index: i,
                from_id: edge.from_id.clone(),
                to_id: edge.to_id.clone(),
                from,
                to,
                progress,
                opacity: progress * theme.edge_opacity_ceiling,
                label: edge.label.clone(),
                color: edge.color.unwrap_or(theme.edge_color),
            })
        })
        .collect();

    let effects = diagram
        .actions
        .iter()
        .enumerate()
        .filter_map(|(i, action)| {
            action_effect(i, action, &anchors, diagram, local_frame, ctx, theme)
        })
        .collect();

    DiagramFrame {
        nodes,
        edges,
        effects,
    }
}

/// Packet position between two anchors, with progress clamped to the action window.
///
/// Defined for any frame; whether the packet is drawn at all is decided by
/// [`DiagramAction::in_flight`].
pub fn packet_position(from: Point, to: Point, action: &DiagramAction, local_frame: i64) -> Point {
    let t = clamp_progress(action.elapsed(local_frame), u64::from(action.duration));
    lerp_point(from, to, t)
}

fn action_effect(
    index: usize,
    action: &DiagramAction,
    anchors: &HashMap<&str, Point>,
    diagram: &DiagramConfig,
    local_frame: i64,
    ctx: &RenderCtx,
    theme: &DiagramTheme,
) -> Option<ActionEffect> {
    match &action.kind {
        ActionKind::Packet { from_id, to_id } => {
            if !action.in_flight(local_frame) {
                return None;
            }
            let from = *anchors.get(from_id.as_str())?;
            let to = *anchors.get(to_id.as_str())?;
            Some(ActionEffect::Packet(PacketState {
                action_index: index,
                from_id: from_id.clone(),
                to_id: to_id.clone(),
                label: action.label.clone(),
                color: action.color.unwrap_or(theme.packet_color),
                position: packet_position(from, to, action, local_frame),
                progress: clamp_progress(action.elapsed(local_frame), u64::from(action.duration)),
                radius_px: theme.packet_radius_px,
            }))
        }
        // Consumed by the target node's state.
        ActionKind::Highlight { .. } | ActionKind::Pulse { .. } => None,
        ActionKind::ShowLabel { target_id } => {
            if !action.is_active(local_frame) {
                return None;
            }
            let anchor = *anchors.get(target_id.as_str())?;
            let elapsed = action.elapsed(local_frame);
            let text = match &action.label {
                Some(l) => l.clone(),
                None => diagram
                    .node_index(target_id)
                    .map(|i| diagram.nodes[i].label.clone())
                    .unwrap_or_default(),
            };
            Some(ActionEffect::Label(LabelState {
                action_index: index,
                target_id: target_id.clone(),
                text,
                anchor: anchor - Vec2::new(0.0, theme.label_offset_px),
                scale: spring(elapsed, ctx.fps, theme.label_pop),
                opacity: label_exit_opacity(elapsed, action.duration, theme.label_fade_frames),
                color: action.color,
            }))
        }
    }
}

/// Fully opaque until the last `fade` frames of the window, then linearly down to 0 at its end.
fn label_exit_opacity(elapsed: i64, duration: u32, fade: u32) -> f64 {
    let d = f64::from(duration);
    let f = f64::from(fade.min(duration));
    if f <= 0.0 {
        return 1.0;
    }
    interpolate(elapsed as f64, &[d - f, d], &[1.0, 0.0], Extrapolate::Clamp)
}

fn emphasis_for(
    node_id: &str,
    actions: &[DiagramAction],
    local_frame: i64,
    theme: &DiagramTheme,
) -> Emphasis {
    let mut out = Emphasis::NONE;
    for action in actions {
        if action.kind.target_id() != Some(node_id) || !action.is_active(local_frame) {
            continue;
        }
        match action.kind {
            ActionKind::Highlight { .. } => {
                out.factor *= theme.highlight_scale;
                out.highlighted = true;
                out.glow = out.glow.max(theme.glow.strength);
            }
            ActionKind::Pulse { .. } => {
                let elapsed = action.elapsed(local_frame);
                out.factor *= theme.pulse.factor(elapsed);
                out.pulsing = true;
                let breath = 0.5 + 0.5 * (theme.pulse.rad_per_frame * elapsed as f64).sin();
                out.glow = out.glow.max(theme.glow.strength * breath);
            }
            ActionKind::Packet { .. } | ActionKind::ShowLabel { .. } => {}
        }
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/eval/diagram.rs"]
mod tests;
