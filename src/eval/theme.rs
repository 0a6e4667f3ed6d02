use crate::animation::spring::SpringConfig;
use crate::assets::color::Color;
use crate::scene::model::{NodeType, ThemeName};

/// Breathing effect applied to a node targeted by a `pulse` action.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PulseStyle {
    /// Scale factor the oscillation is centered on.
    pub base: f64,
    pub amplitude: f64,
    pub rad_per_frame: f64,
}

impl PulseStyle {
    /// Multiplicative scale `elapsed` frames into the pulse window.
    pub fn factor(self, elapsed: i64) -> f64 {
        self.base + self.amplitude * (self.rad_per_frame * elapsed as f64).sin()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GlowStyle {
    pub radius_px: f64,
    pub strength: f64,
}

/// Icon family used for node glyphs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IconSet {
    Emoji,
    Glyph,
}

impl IconSet {
    pub fn icon(self, kind: NodeType) -> &'static str {
        match self {
            Self::Emoji => match kind {
                NodeType::Database => "\u{1F5C4}",
                NodeType::Server => "\u{1F5A5}",
                NodeType::Client => "\u{1F4BB}",
                NodeType::Code => "\u{1F4DC}",
                NodeType::Lock => "\u{1F512}",
                NodeType::Queue => "\u{1F4E5}",
                NodeType::Cloud => "\u{2601}",
                NodeType::Firewall => "\u{1F6E1}",
                NodeType::Unknown => "\u{2B1C}",
            },
            Self::Glyph => match kind {
                NodeType::Database => "db",
                NodeType::Server => "srv",
                NodeType::Client => "cli",
                NodeType::Code => "</>",
                NodeType::Lock => "lock",
                NodeType::Queue => "q",
                NodeType::Cloud => "cloud",
                NodeType::Firewall => "fw",
                NodeType::Unknown => "?",
            },
        }
    }
}

/// Default node fill per node type (used when a node has no color override).
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize)]
pub struct Palette {
    pub database: Color,
    pub server: Color,
    pub client: Color,
    pub code: Color,
    pub lock: Color,
    pub queue: Color,
    pub cloud: Color,
    pub firewall: Color,
    pub unknown: Color,
}

impl Palette {
    pub fn color(&self, kind: NodeType) -> Color {
        match kind {
            NodeType::Database => self.database,
            NodeType::Server => self.server,
            NodeType::Client => self.client,
            NodeType::Code => self.code,
            NodeType::Lock => self.lock,
            NodeType::Queue => self.queue,
            NodeType::Cloud => self.cloud,
            NodeType::Firewall => self.firewall,
            NodeType::Unknown => self.unknown,
        }
    }
}

/// Every visual knob of the diagram evaluator, as one value.
///
/// Both presets run through the same evaluator; only these numbers differ.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DiagramTheme {
    pub name: ThemeName,
    /// Delay between consecutive node pop-ins, by declaration order.
    pub node_stagger_frames: u32,
    pub edge_stagger_frames: u32,
    /// Delay before the first edge starts revealing.
    pub edge_delay_frames: u32,
    pub node_pop: SpringConfig,
    pub edge_reveal: SpringConfig,
    pub label_pop: SpringConfig,
    /// Maximum edge opacity; always below 1 so edges stay behind nodes visually.
    pub edge_opacity_ceiling: f64,
    pub highlight_scale: f64,
    pub pulse: PulseStyle,
    pub glow: GlowStyle,
    pub node_size_px: f64,
    pub packet_radius_px: f64,
    /// Vertical distance from a node anchor to its popup label.
    pub label_offset_px: f64,
    /// Frames over which a `show_label` popup fades out before its window ends.
    pub label_fade_frames: u32,
    pub icons: IconSet,
    pub palette: Palette,
    pub edge_color: Color,
    pub packet_color: Color,
}

impl Default for DiagramTheme {
    fn default() -> Self {
        Self::classic()
    }
}

impl DiagramTheme {
    pub fn named(name: ThemeName) -> Self {
        match name {
            ThemeName::Classic => Self::classic(),
            ThemeName::Neon => Self::neon(),
        }
    }

    pub fn classic() -> Self {
        Self {
            name: ThemeName::Classic,
            node_stagger_frames: 5,
            edge_stagger_frames: 5,
            edge_delay_frames: 15,
            node_pop: SpringConfig {
                stiffness: 100.0,
                damping: 12.0,
                mass: 1.0,
                overshoot_clamping: false,
            },
            edge_reveal: SpringConfig::CRITICAL,
            label_pop: SpringConfig {
                stiffness: 200.0,
                damping: 15.0,
                mass: 1.0,
                overshoot_clamping: false,
            },
            edge_opacity_ceiling: 0.6,
            highlight_scale: 1.2,
            pulse: PulseStyle {
                base: 1.0,
                amplitude: 0.08,
                rad_per_frame: 0.3,
            },
            glow: GlowStyle {
                radius_px: 24.0,
                strength: 0.8,
            },
            node_size_px: 120.0,
            packet_radius_px: 14.0,
            label_offset_px: 90.0,
            label_fade_frames: 10,
            icons: IconSet::Emoji,
            palette: Palette {
                database: Color::rgb(0xdc, 0x26, 0x26),
                server: Color::rgb(0x25, 0x63, 0xeb),
                client: Color::rgb(0x05, 0x96, 0x69),
                code: Color::rgb(0x7c, 0x3a, 0xed),
                lock: Color::rgb(0xd9, 0x77, 0x06),
                queue: Color::rgb(0x08, 0x91, 0xb2),
                cloud: Color::rgb(0x64, 0x74, 0x8b),
                firewall: Color::rgb(0xea, 0x58, 0x0c),
                unknown: Color::rgb(0x94, 0xa3, 0xb8),
            },
            edge_color: Color::rgb(0x94, 0xa3, 0xb8),
            packet_color: Color::rgb(0xfa, 0xcc, 0x15),
        }
    }

    pub fn neon() -> Self {
        Self {
            name: ThemeName::Neon,
            node_stagger_frames: 8,
            edge_stagger_frames: 6,
            edge_delay_frames: 20,
            node_pop: SpringConfig {
                stiffness: 120.0,
                damping: 14.0,
                mass: 1.0,
                overshoot_clamping: false,
            },
            edge_reveal: SpringConfig::CRITICAL,
            label_pop: SpringConfig {
                stiffness: 180.0,
                damping: 12.0,
                mass: 1.0,
                overshoot_clamping: false,
            },
            edge_opacity_ceiling: 0.45,
            highlight_scale: 1.25,
            pulse: PulseStyle {
                base: 1.05,
                amplitude: 0.1,
                rad_per_frame: 0.25,
            },
            glow: GlowStyle {
                radius_px: 40.0,
                strength: 1.0,
            },
            node_size_px: 110.0,
            packet_radius_px: 12.0,
            label_offset_px: 85.0,
            label_fade_frames: 12,
            icons: IconSet::Glyph,
            palette: Palette {
                database: Color::rgb(0xff, 0x2e, 0x88),
                server: Color::rgb(0x00, 0xe5, 0xff),
                client: Color::rgb(0x39, 0xff, 0x14),
                code: Color::rgb(0xb3, 0x88, 0xff),
                lock: Color::rgb(0xff, 0xd6, 0x00),
                queue: Color::rgb(0x00, 0xff, 0xc6),
                cloud: Color::rgb(0x9e, 0xb7, 0xff),
                firewall: Color::rgb(0xff, 0x6d, 0x00),
                unknown: Color::rgb(0xcf, 0xd8, 0xdc),
            },
            edge_color: Color::rgb(0x00, 0xe5, 0xff),
            packet_color: Color::rgb(0xff, 0xff, 0xff),
        }
    }

    pub fn node_color(&self, kind: NodeType, over: Option<Color>) -> Color {
        over.unwrap_or_else(|| self.palette.color(kind))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/eval/theme.rs"]
mod tests;
