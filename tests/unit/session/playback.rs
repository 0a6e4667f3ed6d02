use super::*;

use crate::foundation::core::{Canvas, Fps};
use crate::scene::defaults::default_config;
use crate::scene::generation::AspectRatio;
use crate::scene::model::SceneType;

const GENERATED: &str = r##"{
  "suggestedMusicMood": "ambient",
  "scenes": [
    { "type": "quote", "title": "Q", "backgroundColor": "#222222",
      "textColor": "#eeeeee", "durationInFrames": 150 }
  ]
}"##;

#[test]
fn render_maps_global_to_local_frames() {
    let cfg = default_config();
    let ctx = cfg.render_ctx();

    let d = render(&cfg, 0, &ctx);
    assert_eq!((d.scene_index, d.local_frame), (0, FrameIndex(0)));
    assert_eq!(d.scene.scene_type, SceneType::Intro);

    let d = render(&cfg, 90, &ctx);
    assert_eq!((d.scene_index, d.local_frame), (1, FrameIndex(0)));
    assert_eq!(d.scene.scene_type, SceneType::TechDiagram);

    let d = render(&cfg, 299, &ctx);
    assert_eq!((d.scene_index, d.local_frame), (1, FrameIndex(209)));
}

#[test]
fn out_of_range_frames_clamp_to_ends() {
    let cfg = default_config();
    let ctx = cfg.render_ctx();
    let last = cfg.total_duration_frames() - 1;

    let d = render(&cfg, -10, &ctx);
    assert_eq!(d.requested_frame, -10);
    assert_eq!(d.global_frame, FrameIndex(0));

    let d = render(&cfg, 99_999, &ctx);
    assert_eq!(d.global_frame, FrameIndex(last));
    assert_eq!(d.scene_index, cfg.scenes().len() - 1);
    assert_eq!(d, render(&cfg, last as i64, &ctx).with_requested(99_999));
}

impl RenderDescription {
    fn with_requested(mut self, requested: i64) -> Self {
        self.requested_frame = requested;
        self
    }
}

#[test]
fn session_matches_free_function() {
    let cfg = default_config();
    let session = PlaybackSession::new(cfg.clone());
    for f in [0, 95, 170, 400, 629] {
        assert_eq!(session.render(f), render(&cfg, f, &cfg.render_ctx()));
    }
}

#[test]
fn render_with_uses_given_canvas() {
    let session = PlaybackSession::new(default_config());
    let preview = RenderCtx::new(Canvas::new(480, 270).unwrap(), Fps::integer(30).unwrap());
    let d = session.render_with(10, &preview);
    assert_eq!(d.scene.progress_bar.width_px, d.scene.progress_bar.fraction * 480.0);
}

#[test]
fn replace_swaps_whole_config() {
    let mut session = PlaybackSession::new(default_config());
    let before = session.render(95);

    let next = VideoConfig::from_json_str(
        r##"{ "theme": "neon", "scenes": [ { "type": "outro", "title": "bye",
              "backgroundColor": "#000000", "textColor": "#ffffff", "durationInFrames": 30 } ] }"##,
    )
    .unwrap();
    let prev = session.replace(next);

    assert_eq!(prev.total_duration_frames(), 630);
    assert_eq!(session.timeline().total_frames(), 30);
    assert_eq!(session.theme().name, crate::scene::model::ThemeName::Neon);
    assert_eq!(session.render(95).scene.scene_type, SceneType::Outro);
    assert_ne!(session.render(95), before);
}

#[test]
fn theme_override_survives_replace() {
    let mut session = PlaybackSession::new(default_config()).with_theme(DiagramTheme::neon());
    assert_eq!(session.config().theme(), crate::scene::model::ThemeName::Classic);

    session.replace(default_config());
    assert_eq!(session.theme(), &DiagramTheme::neon());
}

#[test]
fn failed_regeneration_keeps_current_config() {
    let mut session = PlaybackSession::new(default_config());
    let original = Arc::clone(session.config());
    let request = GenerationRequest::new("caching", 5, AspectRatio::Square);

    let failing =
        |_: &GenerationRequest| -> anyhow::Result<String> { Err(anyhow::anyhow!("timeout")) };
    assert!(session.regenerate(&failing, &request).is_err());
    assert!(Arc::ptr_eq(session.config(), &original));

    let garbage = |_: &GenerationRequest| -> anyhow::Result<String> { Ok("{}".to_owned()) };
    assert!(session.regenerate(&garbage, &request).is_err());
    assert!(Arc::ptr_eq(session.config(), &original));
}

#[test]
fn successful_regeneration_swaps_config() {
    let mut session = PlaybackSession::new(default_config());
    let request = GenerationRequest::new("caching", 5, AspectRatio::Square);
    let ok = |_: &GenerationRequest| -> anyhow::Result<String> { Ok(GENERATED.to_owned()) };

    let mood = session.regenerate(&ok, &request).unwrap();
    assert_eq!(mood, "ambient");
    assert_eq!(session.config().canvas().width, 1080);
    assert_eq!(session.config().total_duration_frames(), 150);
    assert_eq!(session.render(0).scene.scene_type, SceneType::Quote);
}

#[test]
fn export_json_reloads_to_same_config() {
    let session = PlaybackSession::new(default_config());
    let json = session.export_json().unwrap();
    let back = VideoConfig::from_json_str(&json).unwrap();
    assert_eq!(&back, session.config().as_ref());
}
