use super::*;

use crate::foundation::core::Fps;
use crate::scene::defaults::{default_config, redis_lock_diagram};

fn ctx() -> RenderCtx {
    RenderCtx::new(Canvas::new(1920, 1080).unwrap(), Fps::integer(30).unwrap())
}

fn scene(kind: SceneKind, duration: u32) -> SceneData {
    SceneData {
        kind,
        title: "Title".to_owned(),
        subtitle: "Sub".to_owned(),
        background_color: Color::BLACK,
        text_color: Color::WHITE,
        duration_in_frames: duration,
    }
}

#[test]
fn standard_scene_fades_in_and_out() {
    let s = scene(SceneKind::Intro, 90);
    let theme = DiagramTheme::classic();
    let opacity = |f| {
        evaluate_scene(&s, f, &ctx(), &theme)
            .layout()
            .unwrap()
            .opacity
    };
    assert_eq!(opacity(0), 0.0);
    assert_eq!(opacity(5), 0.5);
    assert_eq!(opacity(10), 1.0);
    assert_eq!(opacity(45), 1.0);
    assert_eq!(opacity(85), 0.5);
    assert_eq!(opacity(90), 0.0);
}

#[test]
fn entrance_slides_up_from_below() {
    let s = scene(SceneKind::Outro, 120);
    let theme = DiagramTheme::classic();
    let start = evaluate_scene(&s, 0, &ctx(), &theme);
    let l = start.layout().unwrap();
    assert_eq!(l.entrance, 0.0);
    assert_eq!(l.translate_y, SLIDE_IN_PX);

    let later = evaluate_scene(&s, 60, &ctx(), &theme);
    let l = later.layout().unwrap();
    assert!(l.translate_y.abs() < 0.01, "{}", l.translate_y);
    assert!(l.translate_y >= 0.0);
}

#[test]
fn progress_bar_grows_monotonically() {
    let s = scene(SceneKind::BulletPoint, 40);
    let theme = DiagramTheme::classic();
    let mut prev = -1.0;
    for f in 0..=40 {
        let bar = evaluate_scene(&s, f, &ctx(), &theme).progress_bar;
        assert!(bar.fraction >= prev);
        assert!((bar.width_px - bar.fraction * 1920.0).abs() < 1e-9);
        prev = bar.fraction;
    }
    assert_eq!(prev, 1.0);
    let bar = evaluate_scene(&s, 20, &ctx(), &theme).progress_bar;
    assert_eq!(bar.fraction, 0.5);
}

#[test]
fn decoration_depends_on_variant_only() {
    let theme = DiagramTheme::classic();
    let deco = |kind| {
        evaluate_scene(&scene(kind, 60), 30, &ctx(), &theme)
            .layout()
            .unwrap()
            .decoration
            .clone()
    };
    assert!(matches!(deco(SceneKind::Intro), Decoration::Ring { .. }));
    assert!(matches!(deco(SceneKind::Quote), Decoration::QuoteMarks { .. }));
    assert!(matches!(deco(SceneKind::BulletPoint), Decoration::Bullet { .. }));
    assert_eq!(deco(SceneKind::Outro), Decoration::None);
}

#[test]
fn layout_scales_with_short_edge() {
    let theme = DiagramTheme::classic();
    let s = scene(SceneKind::Intro, 60);
    let full = evaluate_scene(&s, 30, &ctx(), &theme);
    let half_ctx = ctx().with_canvas(Canvas::new(960, 540).unwrap());
    let half = evaluate_scene(&s, 30, &half_ctx, &theme);
    let (a, b) = (full.layout().unwrap(), half.layout().unwrap());
    assert!((a.title_size_px - 2.0 * b.title_size_px).abs() < 1e-9);
    assert_eq!(a.title_size_px, 96.0);
}

#[test]
fn diagram_scene_delegates_to_diagram_evaluator() {
    let s = scene(
        SceneKind::TechDiagram {
            diagram: redis_lock_diagram(),
        },
        210,
    );
    let theme = DiagramTheme::classic();
    let frame = evaluate_scene(&s, 50, &ctx(), &theme);
    assert_eq!(frame.scene_type, SceneType::TechDiagram);
    assert!(frame.layout().is_none());
    let d = frame.diagram().unwrap();
    assert_eq!(d, &evaluate_diagram(&redis_lock_diagram(), 50, &ctx(), &theme));
    assert_eq!(d.packets().count(), 3);
}

#[test]
fn scene_frame_carries_scene_colors_and_text() {
    let cfg = default_config();
    let s = &cfg.scenes()[0];
    let frame = evaluate_scene(s, 12, &cfg.render_ctx(), &DiagramTheme::classic());
    assert_eq!(frame.title, s.title);
    assert_eq!(frame.background_color, s.background_color);
    assert_eq!(frame.text_color, s.text_color);

    let v = serde_json::to_value(&frame).unwrap();
    assert_eq!(v["sceneType"], "intro");
    assert_eq!(v["content"]["kind"], "standard");
    assert_eq!(v["content"]["decoration"]["kind"], "ring");
}
