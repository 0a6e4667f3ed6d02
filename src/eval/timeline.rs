use crate::foundation::core::{FrameIndex, FrameRange};
use crate::scene::model::SceneData;

/// Scene hit by a global frame.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Located {
    pub scene_index: usize,
    /// Frames since the start of that scene.
    pub local_frame: FrameIndex,
}

/// Cumulative scene offsets over the sequential timeline.
///
/// Scene `i` occupies `[offset(i), offset(i) + duration(i))`; scenes never overlap.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Timeline {
    /// `starts[i]` is the first global frame of scene `i`; one extra entry holds the total.
    starts: Vec<u64>,
}

impl Timeline {
    pub fn new(scenes: &[SceneData]) -> Self {
        Self::from_durations(scenes.iter().map(SceneData::duration_frames))
    }

    pub fn from_durations(durations: impl IntoIterator<Item = u64>) -> Self {
        let mut starts = vec![0u64];
        let mut acc = 0u64;
        for d in durations {
            acc = acc.saturating_add(d);
            starts.push(acc);
        }
        Self { starts }
    }

    pub fn len(&self) -> usize {
        self.starts.len() - 1
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn total_frames(&self) -> u64 {
        self.starts.last().copied().unwrap_or(0)
    }

    pub fn scene_range(&self, index: usize) -> Option<FrameRange> {
        let start = *self.starts.get(index)?;
        let end = *self.starts.get(index + 1)?;
        Some(FrameRange {
            start: FrameIndex(start),
            end: FrameIndex(end),
        })
    }

    /// Map a global frame onto a scene. Frames outside `[0, total)` are clamped to the ends.
    ///
    /// Returns `None` only when the timeline has no frames at all.
    pub fn locate(&self, global_frame: i64) -> Option<Located> {
        let total = self.total_frames();
        if total == 0 {
            return None;
        }
        let g = u64::try_from(global_frame.max(0)).unwrap_or(0).min(total - 1);
        // First scene whose end lies past `g`; zero-length scenes are skipped naturally.
        let ends = &self.starts[1..];
        let scene_index = ends.partition_point(|&end| end <= g);
        let start = self.starts[scene_index];
        Some(Located {
            scene_index,
            local_frame: FrameIndex(g - start),
        })
    }
}

/// One-shot [`Timeline::locate`] over a scene list.
pub fn locate(scenes: &[SceneData], global_frame: i64) -> Option<Located> {
    Timeline::new(scenes).locate(global_frame)
}

#[cfg(test)]
#[path = "../../tests/unit/eval/timeline.rs"]
mod tests;
