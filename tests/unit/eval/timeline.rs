use super::*;

#[test]
fn scene_boundaries_follow_prefix_sums() {
    let durations = [90u64, 210, 120];
    let t = Timeline::from_durations(durations);
    let (d0, d1) = (durations[0] as i64, durations[1] as i64);

    let at = t.locate(d0 + d1).unwrap();
    assert_eq!(at.scene_index, 2);
    assert_eq!(at.local_frame, FrameIndex(0));

    let before = t.locate(d0 + d1 - 1).unwrap();
    assert_eq!(before.scene_index, 1);
    assert_eq!(before.local_frame, FrameIndex(durations[1] - 1));

    assert_eq!(t.total_frames(), 420);
    assert_eq!(t.len(), 3);
}

#[test]
fn out_of_range_frames_clamp() {
    let t = Timeline::from_durations([10, 20]);
    assert_eq!(t.locate(-50), Some(Located::default()));
    let end = t.locate(10_000).unwrap();
    assert_eq!(end.scene_index, 1);
    assert_eq!(end.local_frame, FrameIndex(19));
}

#[test]
fn zero_length_scenes_are_never_located() {
    let t = Timeline::from_durations([10, 0, 5]);
    let at = t.locate(10).unwrap();
    assert_eq!(at.scene_index, 2);
    assert_eq!(at.local_frame, FrameIndex(0));
    assert_eq!(t.scene_range(1).unwrap().len_frames(), 0);
}

#[test]
fn empty_timeline_has_no_frames() {
    let t = Timeline::from_durations([]);
    assert!(t.is_empty());
    assert_eq!(t.locate(0), None);
    assert_eq!(t.scene_range(0), None);
}

#[test]
fn every_frame_maps_into_its_scene_range() {
    let t = Timeline::from_durations([3, 7, 1, 4]);
    for g in 0..t.total_frames() {
        let at = t.locate(g as i64).unwrap();
        let range = t.scene_range(at.scene_index).unwrap();
        assert!(range.contains(FrameIndex(g)));
        assert_eq!(range.start.0 + at.local_frame.0, g);
    }
}

#[test]
fn locate_over_default_scenes() {
    let cfg = crate::scene::defaults::default_config();
    let at = locate(cfg.scenes(), 95).unwrap();
    assert_eq!(at.scene_index, 1);
    assert_eq!(at.local_frame, FrameIndex(5));
}
