//! Text rendering collaborators and the visual types they share with the menu.

use heapless::Vec;

/// Font faces available to menu text.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Font {
    Small,
    Medium,
    Large,
    LargeBold,
    LargeCondensed,
}

const FONT_HEIGHTS: [u8; Font::COUNT] = [7, 9, 11, 11, 11];
const DEFAULT_LINE_MARGINS: [u8; Font::COUNT] = [3, 3, 4, 4, 4];

const _: () = {
    let mut idx = 0;
    while idx < Font::COUNT {
        assert!(FONT_HEIGHTS[idx] != 0, "zero height in FONT_HEIGHTS");
        idx += 1;
    }
};

impl Font {
    pub const COUNT: usize = 5;

    pub const ALL: [Self; Self::COUNT] = [
        Self::Small,
        Self::Medium,
        Self::Large,
        Self::LargeBold,
        Self::LargeCondensed,
    ];

    /// Glyph cell height in pixels.
    pub const fn height(self) -> u8 {
        FONT_HEIGHTS[self as usize]
    }

    /// Vertical gap between two menu lines when none is configured.
    pub const fn default_line_margin(self) -> u8 {
        DEFAULT_LINE_MARGINS[self as usize]
    }
}

/// Screen position in pixels. `y` grows downwards.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub const fn offset(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

/// 15-bit BGR color as stored in sprite palettes.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub struct Color(u16);

impl Color {
    pub const BLACK: Self = Self::rgb(0, 0, 0);
    pub const WHITE: Self = Self::rgb(31, 31, 31);
    pub const GRAY: Self = Self::rgb(16, 16, 16);
    pub const YELLOW: Self = Self::rgb(31, 31, 0);

    /// Builds a color from 5-bit channels; higher bits are discarded.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self((r as u16 & 0x1F) | ((g as u16 & 0x1F) << 5) | ((b as u16 & 0x1F) << 10))
    }

    pub const fn bits(self) -> u16 {
        self.0
    }

    pub const fn red(self) -> u8 {
        (self.0 & 0x1F) as u8
    }

    pub const fn green(self) -> u8 {
        ((self.0 >> 5) & 0x1F) as u8
    }

    pub const fn blue(self) -> u8 {
        ((self.0 >> 10) & 0x1F) as u8
    }
}

/// Two-entry text palette: the transparent/background slot and the glyph ink.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct Palette {
    pub background: Color,
    pub ink: Color,
}

impl Palette {
    /// Highlighted option.
    pub const POINTED: Self = Self::new(Color::BLACK, Color::WHITE);
    /// Every other option.
    pub const UNPOINTED: Self = Self::new(Color::BLACK, Color::GRAY);

    pub const fn new(background: Color, ink: Color) -> Self {
        Self { background, ink }
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::UNPOINTED
    }
}

/// Text generation failures.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum GenerateError {
    /// The output collection has no room for the produced sprites.
    OutputFull,
}

impl core::fmt::Display for GenerateError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::OutputFull => f.write_str("sprite output is full"),
        }
    }
}

/// Renderable produced by a [`TextGenerator`].
pub trait TextSprite {
    fn set_palette(&mut self, palette: Palette);

    /// Layering hint relative to background layers; lower draws on top.
    fn set_bg_priority(&mut self, priority: u8);
}

/// Host text renderer.
pub trait TextGenerator {
    type Sprite: TextSprite;

    /// Palette applied to sprites produced by subsequent generate calls.
    fn palette(&self) -> Palette;
    fn set_palette(&mut self, palette: Palette);

    /// Rendered width of `text` in pixels.
    fn width(&self, font: Font, text: &str) -> i32;

    /// Appends the sprites for `text` with its top-left corner at `pos`.
    ///
    /// Sprites appended before an error may be left in `out`; callers that
    /// need all-or-nothing rows truncate back themselves.
    fn generate_top_left<const N: usize>(
        &mut self,
        font: Font,
        pos: Point,
        text: &str,
        out: &mut Vec<Self::Sprite, N>,
    ) -> Result<(), GenerateError>;
}

impl<T> TextGenerator for &mut T
where
    T: TextGenerator + ?Sized,
{
    type Sprite = T::Sprite;

    fn palette(&self) -> Palette {
        (**self).palette()
    }

    fn set_palette(&mut self, palette: Palette) {
        (**self).set_palette(palette);
    }

    fn width(&self, font: Font, text: &str) -> i32 {
        (**self).width(font, text)
    }

    fn generate_top_left<const N: usize>(
        &mut self,
        font: Font,
        pos: Point,
        text: &str,
        out: &mut Vec<Self::Sprite, N>,
    ) -> Result<(), GenerateError> {
        (**self).generate_top_left(font, pos, text, out)
    }
}
