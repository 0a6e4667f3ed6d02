use super::*;

#[test]
fn frame_range_contains_boundaries() {
    let r = FrameRange::new(FrameIndex(2), FrameIndex(5)).unwrap();
    assert!(!r.contains(FrameIndex(1)));
    assert!(r.contains(FrameIndex(2)));
    assert!(r.contains(FrameIndex(4)));
    assert!(!r.contains(FrameIndex(5)));
}

#[test]
fn frame_range_clamp_stays_inside() {
    let r = FrameRange::new(FrameIndex(10), FrameIndex(20)).unwrap();
    assert_eq!(r.clamp(FrameIndex(0)), FrameIndex(10));
    assert_eq!(r.clamp(FrameIndex(99)), FrameIndex(19));
    assert!(FrameRange::new(FrameIndex(3), FrameIndex(2)).is_err());
}

#[test]
fn fps_frames_secs_roundtrip_floor() {
    let fps = Fps::new(30000, 1001).unwrap();
    let secs = fps.frames_to_secs(123);
    assert_eq!(fps.secs_to_frames_floor(secs), 123);
}

#[test]
fn zero_fps_and_canvas_are_rejected() {
    assert!(Fps::integer(0).is_err());
    assert!(Canvas::new(0, 1080).is_err());
    assert!(Canvas::new(1920, 1080).is_ok());
}

#[test]
fn render_ctx_with_canvas_keeps_fps() {
    let ctx = RenderCtx::new(Canvas::new(1920, 1080).unwrap(), Fps::integer(30).unwrap());
    let preview = ctx.with_canvas(Canvas::new(480, 270).unwrap());
    assert_eq!(preview.fps, ctx.fps);
    assert_eq!(preview.canvas.width, 480);
}
