use super::*;

use crate::scene::defaults::default_config;
use crate::scene::model::{SceneKind, ThemeName};

const MINIMAL: &str = r##"{
  "fps": 24,
  "width": 1280,
  "height": 720,
  "theme": "neon",
  "scenes": [
    { "type": "intro", "title": "Hello", "backgroundColor": "#000000",
      "textColor": "#ffffff", "durationInFrames": 48 },
    { "type": "tech_diagram", "title": "D", "backgroundColor": "#000000",
      "textColor": "#ffffff", "durationInFrames": 72,
      "diagramConfig": { "nodes": [ { "id": "n", "type": "queue", "label": "Q", "x": 50, "y": 50 } ] } }
  ]
}"##;

#[test]
fn from_json_str_normalizes() {
    let cfg = VideoConfig::from_json_str(MINIMAL).unwrap();
    assert_eq!(cfg.total_duration_frames(), 120);
    assert_eq!(cfg.fps().num, 24);
    assert_eq!(cfg.canvas().width, 1280);
    assert_eq!(cfg.theme(), ThemeName::Neon);
    assert_eq!(cfg.scenes()[0].subtitle, "");
    match &cfg.scenes()[1].kind {
        SceneKind::TechDiagram { diagram } => assert_eq!(diagram.nodes.len(), 1),
        other => panic!("unexpected scene kind {other:?}"),
    }
    assert!((cfg.duration_secs() - 5.0).abs() < 1e-12);

    let parsed: VideoConfig = MINIMAL.parse().unwrap();
    assert_eq!(parsed, cfg);
}

#[test]
fn syntax_errors_are_serde_errors() {
    let err = VideoConfig::from_json_str("{ \"scenes\": [").unwrap_err();
    assert!(matches!(err, ReelError::Serde(_)), "{err}");

    let err = VideoConfig::from_json_str(r#"{ "scenes": [ { "type": "credits" } ] }"#).unwrap_err();
    assert!(matches!(err, ReelError::Serde(_)), "{err}");
}

#[test]
fn missing_file_is_reported_with_path() {
    let err = VideoConfig::from_path("/definitely/not/here/reel.json").unwrap_err();
    assert!(err.to_string().contains("/definitely/not/here/reel.json"));
}

#[test]
fn export_then_reload_is_identity() {
    let cfg = VideoConfig::from_json_str(MINIMAL).unwrap();
    let mut buf = Vec::new();
    cfg.write_json(&mut buf).unwrap();
    let back = VideoConfig::from_reader(buf.as_slice()).unwrap();
    assert_eq!(back, cfg);

    let v: serde_json::Value = serde_json::from_str(&cfg.to_json_pretty().unwrap()).unwrap();
    assert_eq!(v["totalDurationFrames"], 120);
    assert_eq!(v["scenes"][1]["type"], "tech_diagram");
}

#[test]
fn default_config_exports_its_diagram() {
    let v: serde_json::Value =
        serde_json::from_str(&default_config().to_json_pretty().unwrap()).unwrap();
    let actions = v["scenes"][1]["diagramConfig"]["actions"].as_array().unwrap();
    assert_eq!(actions[0]["type"], "packet");
    assert_eq!(actions[0]["fromId"], "clientA");
    assert_eq!(actions[4]["label"], "LOCKED");
}
