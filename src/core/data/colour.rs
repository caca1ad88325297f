/// Named colours the explorer draws with. Adapters decide how to realise them.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum PaletteColour {
    /// Bounded orbit / point inside the set.
    InSet,
    Diverging,
    /// Neutral outline around orbit markers and the unit circle.
    Border,
    /// Default stroke for lines and text.
    Ink,
}

impl PaletteColour {
    pub const ALL: &'static [PaletteColour] = &[
        PaletteColour::InSet,
        PaletteColour::Diverging,
        PaletteColour::Border,
        PaletteColour::Ink,
    ];

    #[must_use]
    pub fn rgb(self) -> [u8; 3] {
        match self {
            Self::InSet => [0, 128, 0],
            Self::Diverging => [255, 0, 0],
            Self::Border => [128, 128, 128],
            Self::Ink => [0, 0, 0],
        }
    }

    #[must_use]
    pub fn for_divergence(diverges: bool) -> Self {
        if diverges {
            Self::Diverging
        } else {
            Self::InSet
        }
    }
}
