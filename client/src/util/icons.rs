//! Vector glyphs used by choice buttons, badges, and the chat widget.
//!
//! Each glyph is a set of stroke paths on a 24×24 grid in the outline style
//! of the Lucide icon set. Components render them through
//! [`crate::components::icon::IconGlyph`].

#[cfg(test)]
#[path = "icons_test.rs"]
mod icons_test;

/// A renderable glyph, referenced by identity from the catalogs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Icon {
    ArrowRight,
    Book,
    Bot,
    Briefcase,
    Gamepad,
    GraduationCap,
    Send,
    Star,
    Sword,
    Target,
    Trophy,
    Users,
    Close,
}

impl Icon {
    /// Every glyph, for exhaustive checks.
    pub const ALL: [Self; 13] = [
        Self::ArrowRight,
        Self::Book,
        Self::Bot,
        Self::Briefcase,
        Self::Gamepad,
        Self::GraduationCap,
        Self::Send,
        Self::Star,
        Self::Sword,
        Self::Target,
        Self::Trophy,
        Self::Users,
        Self::Close,
    ];

    /// SVG path data, drawn with `stroke="currentColor"` and no fill.
    #[must_use]
    pub fn paths(self) -> &'static [&'static str] {
        match self {
            Self::ArrowRight => &["M5 12h14", "m12 5 7 7-7 7"],
            Self::Book => &["M4 19.5v-15A2.5 2.5 0 0 1 6.5 2H20v20H6.5a2.5 2.5 0 0 1 0-5H20"],
            Self::Bot => &[
                "M12 8V4H8",
                "M6 8h12a2 2 0 0 1 2 2v8a2 2 0 0 1-2 2H6a2 2 0 0 1-2-2v-8a2 2 0 0 1 2-2z",
                "M2 14h2",
                "M20 14h2",
                "M15 13v2",
                "M9 13v2",
            ],
            Self::Briefcase => &[
                "M16 20V4a2 2 0 0 0-2-2h-4a2 2 0 0 0-2 2v16",
                "M4 6h16a2 2 0 0 1 2 2v10a2 2 0 0 1-2 2H4a2 2 0 0 1-2-2V8a2 2 0 0 1 2-2z",
            ],
            Self::Gamepad => &[
                "M6 11h4",
                "M8 9v4",
                "M15 12h.01",
                "M18 10h.01",
                "M17.32 5H6.68a4 4 0 0 0-3.98 3.59C2.6 9.42 2 14.46 2 16a3 3 0 0 0 3 3c1 0 1.5-.5 2-1l1.41-1.41A2 2 0 0 1 9.83 16h4.34a2 2 0 0 1 1.41.59L17 18c.5.5 1 1 2 1a3 3 0 0 0 3-3c0-1.55-.6-6.58-.69-7.26A4 4 0 0 0 17.32 5z",
            ],
            Self::GraduationCap => &["M22 10v6", "M2 10l10-5 10 5-10 5z", "M6 12v5c3 3 9 3 12 0v-5"],
            Self::Send => &["m22 2-7 20-4-9-9-4Z", "M22 2 11 13"],
            Self::Star => &["M12 2l3.09 6.26L22 9.27l-5 4.87 1.18 6.88L12 17.77l-6.18 3.25L7 14.14 2 9.27l6.91-1.01L12 2z"],
            Self::Sword => &["M14.5 17.5 3 6V3h3l11.5 11.5", "m13 19 6-6", "m16 16 4 4", "m19 21 2-2"],
            Self::Target => &[
                "M22 12a10 10 0 1 1-20 0 10 10 0 0 1 20 0z",
                "M18 12a6 6 0 1 1-12 0 6 6 0 0 1 12 0z",
                "M14 12a2 2 0 1 1-4 0 2 2 0 0 1 4 0z",
            ],
            Self::Trophy => &[
                "M6 9H4.5a2.5 2.5 0 0 1 0-5H6",
                "M18 9h1.5a2.5 2.5 0 0 0 0-5H18",
                "M4 22h16",
                "M10 14.66V17c0 .55-.47.98-.97 1.21C7.85 18.75 7 20.24 7 22",
                "M14 14.66V17c0 .55.47.98.97 1.21C16.15 18.75 17 20.24 17 22",
                "M18 2H6v7a6 6 0 0 0 12 0V2Z",
            ],
            Self::Users => &[
                "M16 21v-2a4 4 0 0 0-4-4H6a4 4 0 0 0-4 4v2",
                "M9 11a4 4 0 1 0 0-8 4 4 0 0 0 0 8z",
                "M22 21v-2a4 4 0 0 0-3-3.87",
                "M16 3.13a4 4 0 0 1 0 7.75",
            ],
            Self::Close => &["M18 6 6 18", "m6 6 12 12"],
        }
    }

    /// Accessible name announced for icon-only buttons.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::ArrowRight => "arrow right",
            Self::Book => "book",
            Self::Bot => "assistant",
            Self::Briefcase => "briefcase",
            Self::Gamepad => "gamepad",
            Self::GraduationCap => "graduation cap",
            Self::Send => "send",
            Self::Star => "star",
            Self::Sword => "sword",
            Self::Target => "target",
            Self::Trophy => "trophy",
            Self::Users => "users",
            Self::Close => "close",
        }
    }
}
