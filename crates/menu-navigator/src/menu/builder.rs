use heapless::Vec;

use super::{MAX_PAGE_LINES, MenuListener, MenuNavigator, MenuSfx, ScrollTiming};
use crate::{
    audio::{SfxPlayer, SoundItem},
    error::ConfigError,
    input::Keypad,
    render::{Font, Palette, Point, TextGenerator},
};

/// Priority given to menu sprites unless configured otherwise.
pub const DEFAULT_BG_PRIORITY: u8 = 0;
/// Highest accepted bg priority.
pub const MAX_BG_PRIORITY: u8 = 3;

#[cold]
#[track_caller]
fn fatal(err: ConfigError) -> ! {
    panic!("menu config: {err}")
}

/// Collects menu settings and builds a [`MenuNavigator`].
///
/// Setters check their own range right away; cross-field checks run in
/// [`try_build`](Self::try_build). The panicking entry points treat a bad
/// configuration as a programming error.
pub struct MenuNavigatorBuilder<'a, S, const N: usize, L = ()> {
    pub(super) font: Font,
    pub(super) items: &'a [&'a str],
    pub(super) items2: Option<&'a [&'a str]>,
    pub(super) output: &'a mut Vec<S, N>,
    pub(super) pointed_palette: Palette,
    pub(super) unpointed_palette: Palette,
    pub(super) listener: L,
    pub(super) sfx: MenuSfx,
    pub(super) top_left: Point,
    pub(super) bg_priority: u8,
    pub(super) line_margin: u8,
    pub(super) max_lines: usize,
    pub(super) timing: ScrollTiming,
    pub(super) input_enabled: bool,
    pub(super) pointed_index: usize,
}

impl<'a, S, const N: usize> MenuNavigatorBuilder<'a, S, N> {
    /// Starts a single-page menu over `items`, rendering into `output`.
    ///
    /// # Panics
    ///
    /// Panics when `items` is empty.
    #[track_caller]
    pub fn new(font: Font, items: &'a [&'a str], output: &'a mut Vec<S, N>) -> Self {
        if items.is_empty() {
            fatal(ConfigError::EmptyItems);
        }

        Self {
            font,
            items,
            items2: None,
            output,
            pointed_palette: Palette::POINTED,
            unpointed_palette: Palette::UNPOINTED,
            listener: (),
            sfx: MenuSfx::default(),
            top_left: Point::default(),
            bg_priority: DEFAULT_BG_PRIORITY,
            line_margin: font.default_line_margin(),
            max_lines: items.len(),
            timing: ScrollTiming::default(),
            input_enabled: true,
            pointed_index: 0,
        }
    }
}

impl<'a, S, const N: usize, L> MenuNavigatorBuilder<'a, S, N, L> {
    pub fn font(&self) -> Font {
        self.font
    }

    pub fn items(&self) -> &'a [&'a str] {
        self.items
    }

    pub fn secondary_items(&self) -> Option<&'a [&'a str]> {
        self.items2
    }

    /// Second column, drawn right after each option's text.
    pub fn with_secondary_items(mut self, items2: &'a [&'a str]) -> Self {
        self.items2 = Some(items2);
        self
    }

    /// Top-left corner of the first line's text.
    pub fn top_left(&self) -> Point {
        self.top_left
    }

    pub fn with_top_left(mut self, top_left: Point) -> Self {
        self.top_left = top_left;
        self
    }

    pub fn bg_priority(&self) -> u8 {
        self.bg_priority
    }

    #[track_caller]
    pub fn with_bg_priority(mut self, priority: u8) -> Self {
        if priority > MAX_BG_PRIORITY {
            fatal(ConfigError::BgPriorityOutOfRange {
                priority,
                max: MAX_BG_PRIORITY,
            });
        }
        self.bg_priority = priority;
        self
    }

    pub fn line_margin(&self) -> u8 {
        self.line_margin
    }

    pub fn with_line_margin(mut self, margin: u8) -> Self {
        self.line_margin = margin;
        self
    }

    pub fn max_lines(&self) -> usize {
        self.max_lines
    }

    #[track_caller]
    pub fn with_max_lines(mut self, lines: u8) -> Self {
        if lines == 0 {
            fatal(ConfigError::ZeroMaxLines);
        }
        if usize::from(lines) > MAX_PAGE_LINES {
            fatal(ConfigError::TooManyLines {
                lines: lines.into(),
                max: MAX_PAGE_LINES,
            });
        }
        self.max_lines = lines.into();
        self
    }

    pub fn scroll_timing(&self) -> ScrollTiming {
        self.timing
    }

    pub fn with_scroll_timing(mut self, timing: ScrollTiming) -> Self {
        self.timing = timing;
        self
    }

    pub fn with_scroll_start_delay(mut self, delay: u8) -> Self {
        self.timing = self.timing.with_start_delay(delay);
        self
    }

    pub fn with_scroll_continue_delay(mut self, delay: u8) -> Self {
        self.timing = self.timing.with_continue_delay(delay);
        self
    }

    pub fn input_enabled(&self) -> bool {
        self.input_enabled
    }

    pub fn with_input_enabled(mut self, enabled: bool) -> Self {
        self.input_enabled = enabled;
        self
    }

    pub fn pointed_index(&self) -> usize {
        self.pointed_index
    }

    /// Option pointed when the menu opens. Checked at build time.
    pub fn with_pointed_index(mut self, index: usize) -> Self {
        self.pointed_index = index;
        self
    }

    pub fn pointed_palette(&self) -> Palette {
        self.pointed_palette
    }

    pub fn with_pointed_palette(mut self, palette: Palette) -> Self {
        self.pointed_palette = palette;
        self
    }

    pub fn unpointed_palette(&self) -> Palette {
        self.unpointed_palette
    }

    pub fn with_unpointed_palette(mut self, palette: Palette) -> Self {
        self.unpointed_palette = palette;
        self
    }

    pub fn sfx(&self) -> MenuSfx {
        self.sfx
    }

    pub fn with_sfx(mut self, sfx: MenuSfx) -> Self {
        self.sfx = sfx;
        self
    }

    pub fn with_pointed_changed_sfx(mut self, sfx: SoundItem) -> Self {
        self.sfx.pointed_changed = Some(sfx);
        self
    }

    pub fn with_activated_sfx(mut self, sfx: SoundItem) -> Self {
        self.sfx.activated = Some(sfx);
        self
    }

    pub fn with_activate_failed_sfx(mut self, sfx: SoundItem) -> Self {
        self.sfx.activate_failed = Some(sfx);
        self
    }

    pub fn with_cancelled_sfx(mut self, sfx: SoundItem) -> Self {
        self.sfx.cancelled = Some(sfx);
        self
    }

    pub fn listener(&self) -> &L {
        &self.listener
    }

    /// Replaces the event listener, e.g. with [`Callbacks`](super::Callbacks).
    pub fn with_listener<L2>(self, listener: L2) -> MenuNavigatorBuilder<'a, S, N, L2>
    where
        L2: MenuListener,
    {
        MenuNavigatorBuilder {
            font: self.font,
            items: self.items,
            items2: self.items2,
            output: self.output,
            pointed_palette: self.pointed_palette,
            unpointed_palette: self.unpointed_palette,
            listener,
            sfx: self.sfx,
            top_left: self.top_left,
            bg_priority: self.bg_priority,
            line_margin: self.line_margin,
            max_lines: self.max_lines,
            timing: self.timing,
            input_enabled: self.input_enabled,
            pointed_index: self.pointed_index,
        }
    }

    /// Checks the settings that depend on each other.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let count = self.items.len();

        if let Some(items2) = self.items2 {
            if items2.len() != count {
                return Err(ConfigError::SecondaryColumnMismatch {
                    primary: count,
                    secondary: items2.len(),
                });
            }
        }

        if self.max_lines > MAX_PAGE_LINES {
            return Err(ConfigError::TooManyLines {
                lines: self.max_lines,
                max: MAX_PAGE_LINES,
            });
        }

        if self.pointed_index >= count {
            return Err(ConfigError::InitialIndexOutOfRange {
                index: self.pointed_index,
                count,
            });
        }

        Ok(())
    }

    /// Builds the navigator and renders its first page.
    pub fn try_build<G, K, A>(
        self,
        text_gen: G,
        keypad: K,
        sfx_player: A,
    ) -> Result<MenuNavigator<'a, G, K, A, L, N>, ConfigError>
    where
        G: TextGenerator<Sprite = S>,
        K: Keypad,
        A: SfxPlayer,
        L: MenuListener,
    {
        self.validate()?;
        Ok(MenuNavigator::new(self, text_gen, keypad, sfx_player))
    }

    /// Same as [`try_build`](Self::try_build).
    ///
    /// # Panics
    ///
    /// Panics on any [`ConfigError`].
    #[track_caller]
    pub fn build<G, K, A>(
        self,
        text_gen: G,
        keypad: K,
        sfx_player: A,
    ) -> MenuNavigator<'a, G, K, A, L, N>
    where
        G: TextGenerator<Sprite = S>,
        K: Keypad,
        A: SfxPlayer,
        L: MenuListener,
    {
        if let Err(err) = self.validate() {
            fatal(err);
        }
        MenuNavigator::new(self, text_gen, keypad, sfx_player)
    }
}
