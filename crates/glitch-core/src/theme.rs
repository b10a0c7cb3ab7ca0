//! Static theme registry
//!
//! Every visual "chapter" is a [`Theme`] record compiled into the binary.
//! Themes are never created, mutated or destroyed at runtime; the rest of the
//! application refers to them through a bounds-checked [`ThemeIndex`].

use std::fmt;

use crate::color::{RadialGradient, Rgb, Rgba};

/// One visual chapter: colours, labels and narrative text.
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    /// Stable identifier (used by `--theme` and the config file)
    pub id: &'static str,
    /// Display name shown in the picker and the content reveal
    pub name: &'static str,
    /// Status label shown in the top-left corner
    pub chapter_label: &'static str,
    /// Primary text colour; noise blocks use it too
    pub text_color: Rgba,
    /// Secondary text colour (labels, captions, dividers)
    pub sub_text_color: Rgba,
    /// Background gradient behind everything
    pub background: RadialGradient,
    /// First chromatic aberration layer of the glitch title
    pub glitch_primary: Rgb,
    /// Second chromatic aberration layer of the glitch title
    pub glitch_secondary: Rgb,
    /// Frame decoration colour (edge border and corner brackets)
    pub accent_color: Rgba,
    /// Narrative text shown once settled
    pub description: &'static str,
    /// Explanation of the colour choice, shown in the meaning overlay
    pub meaning: &'static str,
}

static THEMES: [Theme; 9] = [
    Theme {
        id: "dark",
        name: "Void",
        chapter_label: "CHAPTER_01: THE_VOID",
        text_color: Rgba::opaque(0xffffff),
        sub_text_color: Rgba::new(255, 255, 255, 0.4),
        background: RadialGradient::new(0x1a1a1a, 0x000000),
        glitch_primary: Rgb::hex(0xff0000),
        glitch_secondary: Rgb::hex(0x555555),
        accent_color: Rgba::new(255, 255, 255, 0.3),
        description: "Navigating through the silent years. The architecture of a void.",
        meaning: "Monochromatic tones represent a period of isolation and minimal sensory input, where focus was internal and quiet.",
    },
    Theme {
        id: "melancholy",
        name: "Rain",
        chapter_label: "CHAPTER_03: BLUE_HOUR",
        text_color: Rgba::opaque(0x93c5fd),
        sub_text_color: Rgba::new(147, 197, 253, 0.5),
        background: RadialGradient::new(0x1e3a8a, 0x020617),
        glitch_primary: Rgb::hex(0xffffff),
        glitch_secondary: Rgb::hex(0x60a5fa),
        accent_color: Rgba::opaque(0x3b82f6),
        description: "Finding beauty in the sadness. A quiet reflection on what was lost.",
        meaning: "Deep blues and cyan glitches simulate the atmosphere of a rainy twilight, reflecting emotional depth and processing.",
    },
    Theme {
        id: "chaos",
        name: "Static",
        chapter_label: "CHAPTER_04: DISRUPTION",
        text_color: Rgba::opaque(0xfacc15),
        sub_text_color: Rgba::new(250, 204, 21, 0.5),
        background: RadialGradient::new(0x7f1d1d, 0x000000),
        glitch_primary: Rgb::hex(0xf87171),
        glitch_secondary: Rgb::hex(0xffffff),
        accent_color: Rgba::opaque(0xef4444),
        description: "The noise became the music. Breaking down to build something new.",
        meaning: "Aggressive reds and high-contrast yellows mimic a system failure, representing a period of necessary but painful change.",
    },
    Theme {
        id: "prosperous",
        name: "Gold",
        chapter_label: "CHAPTER_05: ABUNDANCE",
        text_color: Rgba::opaque(0xfef3c7),
        sub_text_color: Rgba::new(251, 191, 36, 0.6),
        background: RadialGradient::new(0x451a03, 0x000000),
        glitch_primary: Rgb::hex(0xfbbf24),
        glitch_secondary: Rgb::hex(0xffffff),
        accent_color: Rgba::opaque(0xd97706),
        description: "Harvesting the fruits of persistence. Light through the golden gate.",
        meaning: "Amber and gold tones signify warmth, wealth, and the successful outcome of long-term efforts.",
    },
    Theme {
        id: "growth",
        name: "Root",
        chapter_label: "CHAPTER_07: ORGANIC_SYNC",
        text_color: Rgba::opaque(0xecfdf5),
        sub_text_color: Rgba::new(52, 211, 153, 0.6),
        background: RadialGradient::new(0x064e3b, 0x020617),
        glitch_primary: Rgb::hex(0x34d399),
        glitch_secondary: Rgb::hex(0xffffff),
        accent_color: Rgba::opaque(0x10b981),
        description: "Returning to nature. The slow, steady pulse of personal evolution.",
        meaning: "Verdant greens represent healing, stability, and the re-establishment of a healthy personal foundation.",
    },
    Theme {
        id: "awakening",
        name: "Neon",
        chapter_label: "CHAPTER_09: AWAKENING",
        text_color: Rgba::opaque(0xf0f9ff),
        sub_text_color: Rgba::new(56, 189, 248, 0.6),
        background: RadialGradient::new(0x082f49, 0x000000),
        glitch_primary: Rgb::hex(0x22d3ee),
        glitch_secondary: Rgb::hex(0x818cf8),
        accent_color: Rgba::opaque(0x0ea5e9),
        description: "The signal clarity is peak. Transitioning into the new paradigm.",
        meaning: "High-energy electric blues represent mental clarity, rapid learning, and the 'Aha!' moments of life.",
    },
    Theme {
        id: "rebirth",
        name: "Ash",
        chapter_label: "CHAPTER_10: REBIRTH",
        text_color: Rgba::opaque(0xffedd5),
        sub_text_color: Rgba::new(251, 146, 60, 0.6),
        background: RadialGradient::new(0x431407, 0x000000),
        glitch_primary: Rgb::hex(0xea580c),
        glitch_secondary: Rgb::hex(0xffffff),
        accent_color: Rgba::opaque(0xf97316),
        description: "Rising from the embers. The heat of a new beginning.",
        meaning: "Burnt oranges and charcoal backgrounds symbolize the process of transformation and emerging stronger from difficulty.",
    },
    Theme {
        id: "ethereal",
        name: "Dream",
        chapter_label: "CHAPTER_11: TRANSCENDENCE",
        text_color: Rgba::opaque(0xf5f3ff),
        sub_text_color: Rgba::new(196, 181, 253, 0.6),
        background: RadialGradient::new(0x4c1d95, 0x000000),
        glitch_primary: Rgb::hex(0xc084fc),
        glitch_secondary: Rgb::hex(0xffffff),
        accent_color: Rgba::opaque(0x8b5cf6),
        description: "Beyond the physical. Existing in the space between thoughts.",
        meaning: "Soft purples and deep violets signify the subconscious mind and the expansion of creative or spiritual horizons.",
    },
    Theme {
        id: "digital",
        name: "Code",
        chapter_label: "CHAPTER_12: VIRTUAL_SELF",
        text_color: Rgba::opaque(0xdcfce7),
        sub_text_color: Rgba::new(34, 197, 94, 0.7),
        background: RadialGradient::new(0x052e16, 0x000000),
        glitch_primary: Rgb::hex(0x22c55e),
        glitch_secondary: Rgb::hex(0x16a34a),
        accent_color: Rgba::opaque(0x15803d),
        description: "Merging with the machine. Logic as a secondary heartbeat.",
        meaning: "Classic 'Matrix' greens represent technical mastery and the period where career and passion for technology aligned.",
    },
];

/// All themes in display order.
pub fn themes() -> &'static [Theme] {
    &THEMES
}

pub fn theme_count() -> usize {
    THEMES.len()
}

/// Look a theme up by id or display name (case-insensitive).
pub fn find_theme(query: &str) -> Option<ThemeIndex> {
    let query = query.trim();
    THEMES
        .iter()
        .position(|t| t.id.eq_ignore_ascii_case(query) || t.name.eq_ignore_ascii_case(query))
        .map(ThemeIndex)
}

/// Index into the theme registry. Always in `[0, theme_count())`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
pub struct ThemeIndex(usize);

impl ThemeIndex {
    /// The first theme ("Void").
    pub const FIRST: ThemeIndex = ThemeIndex(0);

    /// Returns `None` when `index` is out of range.
    pub fn new(index: usize) -> Option<Self> {
        (index < THEMES.len()).then_some(Self(index))
    }

    pub fn value(self) -> usize {
        self.0
    }

    pub fn get(self) -> &'static Theme {
        &THEMES[self.0]
    }

    /// Next theme, wrapping past the last one.
    pub fn next(self) -> Self {
        Self((self.0 + 1) % THEMES.len())
    }

    /// Previous theme, wrapping before the first one.
    pub fn prev(self) -> Self {
        Self((self.0 + THEMES.len() - 1) % THEMES.len())
    }

    /// 1-based position, as shown in the `P-00n` footer.
    pub fn ordinal(self) -> usize {
        self.0 + 1
    }

    pub fn iter() -> impl Iterator<Item = ThemeIndex> {
        (0..THEMES.len()).map(ThemeIndex)
    }
}

impl fmt::Display for ThemeIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.0, self.get().name)
    }
}
