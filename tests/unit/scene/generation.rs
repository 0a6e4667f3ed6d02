use super::*;

use crate::scene::model::SceneType;

const RESPONSE: &str = r##"{
  "suggestedMusicMood": "calm lo-fi",
  "scenes": [
    { "type": "intro", "title": "Queues", "subtitle": "101", "backgroundColor": "#101010",
      "textColor": "#fafafa", "durationInFrames": 150 },
    { "type": "tech_diagram", "title": "Flow", "backgroundColor": "#101010",
      "textColor": "#fafafa", "durationInFrames": 300,
      "diagramConfig": {
        "nodes": [
          { "id": "p", "type": "server", "label": "Producer", "x": 20, "y": 50 },
          { "id": "q", "type": "queue", "label": "Queue", "x": 50, "y": 50 }
        ],
        "edges": [ { "fromId": "p", "toId": "q" } ],
        "actions": [ { "type": "packet", "fromId": "p", "toId": "q", "startDelay": 10, "duration": 30 } ]
      } }
  ]
}"##;

fn request() -> GenerationRequest {
    GenerationRequest::new("message queues", 15, AspectRatio::Portrait)
}

#[test]
fn aspect_ratios_map_to_canvases() {
    assert_eq!(AspectRatio::default(), AspectRatio::Landscape);
    assert_eq!(AspectRatio::Portrait.canvas().height, 1920);
    assert_eq!(AspectRatio::Square.canvas().width, 1080);
    let a: AspectRatio = serde_json::from_str("\"9:16\"").unwrap();
    assert_eq!(a, AspectRatio::Portrait);
}

#[test]
fn request_validation() {
    assert!(request().validate().is_ok());
    assert!(GenerationRequest::new("  ", 15, AspectRatio::Square).validate().is_err());
    assert!(GenerationRequest::new("x", 2, AspectRatio::Square).validate().is_err());
    assert!(GenerationRequest::new("x", 601, AspectRatio::Square).validate().is_err());
    let mut r = request();
    r.fps = 0;
    assert!(r.validate().is_err());
}

#[test]
fn prompt_mentions_topic_and_frame_budget() {
    let r = request();
    assert_eq!(r.target_frames(), 450);
    let p = r.prompt();
    assert!(p.contains("message queues"));
    assert!(p.contains("450 frames"));
    assert!(p.contains("1080x1920"));
}

#[test]
fn generated_video_uses_request_canvas() {
    let generator = |_: &GenerationRequest| -> anyhow::Result<String> { Ok(RESPONSE.to_owned()) };
    let video = generate_video(&generator, &request()).unwrap();
    assert_eq!(video.music_mood, "calm lo-fi");
    assert_eq!(video.config.canvas().width, 1080);
    assert_eq!(video.config.canvas().height, 1920);
    assert_eq!(video.config.total_duration_frames(), 450);
    assert_eq!(video.config.scenes()[1].scene_type(), SceneType::TechDiagram);
}

#[test]
fn generator_failure_is_a_generation_error() {
    let generator =
        |_: &GenerationRequest| -> anyhow::Result<String> { Err(anyhow::anyhow!("quota exceeded")) };
    let err = generate_video(&generator, &request()).unwrap_err();
    assert!(matches!(err, ReelError::Generation(_)));
    assert!(err.to_string().contains("quota exceeded"));
}

#[test]
fn invalid_response_is_rejected() {
    let err = accept_response("not json", &request()).unwrap_err();
    assert!(matches!(err, ReelError::Serde(_)));

    let bad = RESPONSE.replace("\"durationInFrames\": 150", "\"durationInFrames\": -1");
    let err = accept_response(&bad, &request()).unwrap_err();
    assert!(matches!(err, ReelError::Validation(_)));
}

#[test]
fn invalid_request_never_reaches_generator() {
    let generator = |_: &GenerationRequest| -> anyhow::Result<String> {
        panic!("generator must not be called")
    };
    let r = GenerationRequest::new("", 15, AspectRatio::Landscape);
    assert!(generate_video(&generator, &r).is_err());
}

#[test]
fn schema_describes_scene_and_action_tags() {
    let s = response_schema();
    assert_eq!(s["required"][1], "scenes");
    let scene = &s["properties"]["scenes"]["items"];
    let kinds = scene["properties"]["type"]["enum"].as_array().unwrap();
    assert!(kinds.iter().any(|k| k == "tech_diagram"));
    let action = &scene["properties"]["diagramConfig"]["properties"]["actions"]["items"];
    assert_eq!(action["properties"]["type"]["enum"][3], "show_label");
}
