use crate::assets::color::Color;
use crate::scene::model::{
    ActionKind, DEFAULT_FPS, DEFAULT_HEIGHT, DEFAULT_WIDTH, DiagramAction, DiagramConfig,
    DiagramEdge, DiagramNode, NodeType, SceneData, SceneKind, ThemeName, VideoConfig,
};

const BACKGROUND: Color = Color::rgb(0x0f, 0x17, 0x2a);
const TEXT: Color = Color::rgb(0xf8, 0xfa, 0xfc);
const OK_GREEN: Color = Color::rgb(0x22, 0xc5, 0x5e);
const FAIL_RED: Color = Color::rgb(0xef, 0x44, 0x44);

/// Built-in explainer shown before anything has been generated: a Redis `SETNX` distributed lock.
pub fn default_config() -> VideoConfig {
    let scenes = vec![
        scene(
            SceneKind::Intro,
            "Distributed Locks with Redis",
            "How SETNX keeps three clients from colliding",
            90,
        ),
        scene(
            SceneKind::TechDiagram {
                diagram: redis_lock_diagram(),
            },
            "Racing for the lock",
            "Only the first SETNX wins",
            210,
        ),
        scene(
            SceneKind::BulletPoint,
            "Why it works",
            "SETNX is atomic, so exactly one client sees OK",
            120,
        ),
        scene(
            SceneKind::Quote,
            "Always set an expiry on your locks.",
            "Every on-call engineer, eventually",
            120,
        ),
        scene(
            SceneKind::Outro,
            "Lock responsibly",
            "SET key value NX PX 30000",
            90,
        ),
    ];
    let total = scenes.iter().map(SceneData::duration_frames).sum();

    VideoConfig {
        scenes,
        total_duration_frames: total,
        fps: DEFAULT_FPS,
        width: DEFAULT_WIDTH,
        height: DEFAULT_HEIGHT,
        suggested_music_mood: Some("focused, minimal electronic".to_owned()),
        theme: ThemeName::Classic,
    }
}

fn scene(kind: SceneKind, title: &str, subtitle: &str, duration_in_frames: u32) -> SceneData {
    SceneData {
        kind,
        title: title.to_owned(),
        subtitle: subtitle.to_owned(),
        background_color: BACKGROUND,
        text_color: TEXT,
        duration_in_frames,
    }
}

/// Three clients race `SETNX` against one Redis node; the first one wins.
pub(crate) fn redis_lock_diagram() -> DiagramConfig {
    let node = |id: &str, kind: NodeType, label: &str, x: f64, y: f64| DiagramNode {
        id: id.to_owned(),
        kind,
        label: label.to_owned(),
        x,
        y,
        color: None,
    };
    let edge = |from: &str, to: &str| DiagramEdge {
        from_id: from.to_owned(),
        to_id: to.to_owned(),
        label: None,
        color: None,
    };
    let packet = |from: &str, to: &str, label: &str, start: u32, dur: u32, color: Option<Color>| {
        DiagramAction {
            kind: ActionKind::Packet {
                from_id: from.to_owned(),
                to_id: to.to_owned(),
            },
            start_delay: start,
            duration: dur,
            label: Some(label.to_owned()),
            color,
        }
    };

    DiagramConfig {
        nodes: vec![
            node("clientA", NodeType::Client, "Client A", 20.0, 15.0),
            node("clientB", NodeType::Client, "Client B", 50.0, 15.0),
            node("clientC", NodeType::Client, "Client C", 80.0, 15.0),
            node("redis", NodeType::Database, "Redis", 50.0, 50.0),
        ],
        edges: vec![
            edge("clientA", "redis"),
            edge("clientB", "redis"),
            edge("clientC", "redis"),
        ],
        actions: vec![
            packet("clientA", "redis", "SETNX", 30, 40, None),
            packet("clientB", "redis", "SETNX", 35, 40, None),
            packet("clientC", "redis", "SETNX", 40, 40, None),
            DiagramAction {
                kind: ActionKind::Highlight {
                    target_id: "redis".to_owned(),
                },
                start_delay: 70,
                duration: 20,
                label: None,
                color: None,
            },
            DiagramAction {
                kind: ActionKind::ShowLabel {
                    target_id: "redis".to_owned(),
                },
                start_delay: 75,
                duration: 100,
                label: Some("LOCKED".to_owned()),
                color: Some(FAIL_RED),
            },
            packet("redis", "clientA", "OK", 90, 30, Some(OK_GREEN)),
            packet("redis", "clientB", "FAIL", 95, 30, Some(FAIL_RED)),
            packet("redis", "clientC", "FAIL", 100, 30, Some(FAIL_RED)),
            DiagramAction {
                kind: ActionKind::Pulse {
                    target_id: "clientA".to_owned(),
                },
                start_delay: 125,
                duration: 45,
                label: None,
                color: None,
            },
        ],
    }
}
