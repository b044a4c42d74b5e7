use heapless::Vec;
use log::{debug, warn};

use super::{
    MenuListener, MenuNavigatorBuilder, MenuSfx, PageLayout, PointedChange, ScrollTiming,
    scroll::ScrollState,
};
use crate::{
    audio::{SfxPlayer, SoundHandle, SoundItem},
    input::Keypad,
    render::{Font, GenerateError, Palette, Point, TextGenerator, TextSprite},
};

/// Most lines a single page can show.
pub const MAX_PAGE_LINES: usize = 9;

const ROW_SPANS_CAPACITY: usize = MAX_PAGE_LINES + 1;

/// Runtime side of a menu built by [`MenuNavigatorBuilder`].
///
/// The navigator appends its text sprites after whatever `output` held when
/// it was built and only ever truncates back to that length, so entries below
/// it belong to the host and keep their indices. Dropping the navigator
/// removes its sprites.
pub struct MenuNavigator<'a, G, K, A, L, const N: usize>
where
    G: TextGenerator,
    K: Keypad,
    A: SfxPlayer,
    L: MenuListener,
{
    font: Font,
    text_gen: G,
    keypad: K,
    sfx_player: A,
    listener: L,
    items: &'a [&'a str],
    items2: Option<&'a [&'a str]>,
    output: &'a mut Vec<G::Sprite, N>,
    init_output_len: usize,
    pointed_palette: Palette,
    unpointed_palette: Palette,
    sfx: MenuSfx,
    top_left: Point,
    layout: PageLayout,
    bg_priority: u8,
    line_margin: u8,
    timing: ScrollTiming,
    refresh_page_reserved: bool,
    input_enabled: bool,
    scroll: ScrollState,
    pointed_index: usize,
    sfx_handle: Option<A::Handle>,
    /// Output index where each visible row starts, plus the end of the last.
    row_spans: Vec<usize, ROW_SPANS_CAPACITY>,
}

impl<'a, G, K, A, L, const N: usize> MenuNavigator<'a, G, K, A, L, N>
where
    G: TextGenerator,
    K: Keypad,
    A: SfxPlayer,
    L: MenuListener,
{
    /// Takes a validated builder and renders the first page right away.
    pub(super) fn new(
        builder: MenuNavigatorBuilder<'a, G::Sprite, N, L>,
        text_gen: G,
        keypad: K,
        sfx_player: A,
    ) -> Self {
        let MenuNavigatorBuilder {
            font,
            items,
            items2,
            output,
            pointed_palette,
            unpointed_palette,
            listener,
            sfx,
            top_left,
            bg_priority,
            line_margin,
            max_lines,
            timing,
            input_enabled,
            pointed_index,
        } = builder;

        let init_output_len = output.len();
        let mut navigator = Self {
            font,
            text_gen,
            keypad,
            sfx_player,
            listener,
            items,
            items2,
            output,
            init_output_len,
            pointed_palette,
            unpointed_palette,
            sfx,
            top_left,
            layout: PageLayout::new(items.len(), max_lines),
            bg_priority,
            line_margin,
            timing,
            refresh_page_reserved: true,
            input_enabled,
            scroll: ScrollState::new(timing),
            pointed_index,
            sfx_handle: None,
            row_spans: Vec::new(),
        };
        navigator.commit_reserved_page();
        navigator
    }

    /// Advances one frame: regenerates a pending page, then handles input.
    pub fn update(&mut self) {
        self.commit_reserved_page();

        if self.input_enabled {
            self.handle_input();
        }
    }

    pub fn input_enabled(&self) -> bool {
        self.input_enabled
    }

    /// Disabling freezes the pointer and scroll timers; they resume where
    /// they stopped once input is enabled again.
    pub fn set_input_enabled(&mut self, enabled: bool) {
        self.input_enabled = enabled;
    }

    pub fn pointed_index(&self) -> usize {
        self.pointed_index
    }

    /// Points `index` without playing the change cue.
    ///
    /// # Panics
    ///
    /// Panics when `index` is not a valid option index.
    pub fn set_pointed_index(&mut self, index: usize) {
        assert!(
            index < self.items.len(),
            "OOB pointed index: {} (max {})",
            index,
            self.items.len() - 1
        );

        if index != self.pointed_index {
            let prev_index = self.pointed_index;
            self.pointed_index = index;
            self.apply_pointed_change(prev_index);
        }
    }

    pub fn page(&self) -> usize {
        self.layout.page_of(self.pointed_index)
    }

    pub fn total_pages(&self) -> usize {
        self.layout.total_pages()
    }

    pub fn item_count(&self) -> usize {
        self.layout.item_count()
    }

    pub fn max_lines(&self) -> usize {
        self.layout.max_lines()
    }

    pub fn layout(&self) -> &PageLayout {
        &self.layout
    }

    pub fn is_scrolling(&self) -> bool {
        self.scroll.is_scrolling()
    }

    pub fn sfx(&self) -> &MenuSfx {
        &self.sfx
    }

    /// Row start offsets into the output plus a trailing end offset; empty
    /// while no page is shown.
    pub fn row_spans(&self) -> &[usize] {
        &self.row_spans
    }

    /// The whole output collection, host entries included.
    pub fn sprites(&self) -> &[G::Sprite] {
        self.output.as_slice()
    }

    pub fn sprites_mut(&mut self) -> &mut [G::Sprite] {
        self.output.as_mut_slice()
    }

    pub fn keypad_mut(&mut self) -> &mut K {
        &mut self.keypad
    }

    pub fn listener(&self) -> &L {
        &self.listener
    }

    pub fn listener_mut(&mut self) -> &mut L {
        &mut self.listener
    }

    pub fn text_generator(&self) -> &G {
        &self.text_gen
    }

    pub fn text_generator_mut(&mut self) -> &mut G {
        &mut self.text_gen
    }

    pub fn sfx_player(&self) -> &A {
        &self.sfx_player
    }

    pub fn sfx_player_mut(&mut self) -> &mut A {
        &mut self.sfx_player
    }

    /// Drops the current page now and renders it again on the next update.
    pub fn reserve_refresh_page(&mut self) {
        self.clear_page();
        self.refresh_page_reserved = true;
    }

    /// Drops every sprite this navigator produced.
    pub fn clear_page(&mut self) {
        self.output.truncate(self.init_output_len);
        self.row_spans.clear();
    }

    fn handle_input(&mut self) {
        let keys = match self.keypad.poll_keys() {
            Ok(keys) => keys,
            Err(_) => {
                warn!("menu: keypad poll failed, skipping input this frame");
                return;
            }
        };

        let prev_index = self.pointed_index;
        if self.scroll.advance(keys.held, self.timing) {
            self.pointed_index = self.layout.resolve(self.pointed_index, keys.held);
        }

        if self.pointed_index != prev_index {
            if let Some(sfx) = self.sfx.pointed_changed {
                self.play_sfx(sfx);
            }
            self.apply_pointed_change(prev_index);
        }

        if keys.activate_pressed {
            if let Some(sfx) = self.sfx.activated {
                self.play_sfx(sfx);
            }
            self.listener.on_activated(self.pointed_index);
        } else if keys.cancel_pressed {
            if let Some(sfx) = self.sfx.cancelled {
                self.play_sfx(sfx);
            }
            self.listener.on_cancelled();
        }
    }

    fn apply_pointed_change(&mut self, prev_index: usize) {
        let change = PointedChange {
            prev_page: self.layout.page_of(prev_index),
            prev_index,
            new_page: self.layout.page_of(self.pointed_index),
            new_index: self.pointed_index,
        };
        debug!(
            "menu: pointed {} -> {} page {} -> {}",
            change.prev_index, change.new_index, change.prev_page, change.new_page
        );

        if change.page_changed() {
            self.reserve_refresh_page();
        } else {
            self.refresh_palette();
        }

        self.listener.on_pointed_changed(change);
    }

    fn commit_reserved_page(&mut self) {
        if !self.refresh_page_reserved {
            return;
        }
        self.refresh_page_reserved = false;

        let page = self.page();
        let rows = self.layout.rows_on_page(page);
        let first_index = page * self.layout.max_lines();

        self.row_spans.clear();

        let mut failed = false;
        let prev_palette = self.text_gen.palette();
        for line in 0..rows {
            let index = first_index + line;
            let palette = if index == self.pointed_index {
                self.pointed_palette
            } else {
                self.unpointed_palette
            };
            self.text_gen.set_palette(palette);

            let row_start = self.output.len();
            // rows <= MAX_PAGE_LINES, checked when the menu was built
            let _ = self.row_spans.push(row_start);

            if self.render_row(index, self.line_pos(line)).is_err() {
                self.output.truncate(row_start);
                failed = true;
            }
        }
        self.text_gen.set_palette(prev_palette);

        let _ = self.row_spans.push(self.output.len());

        let bg_priority = self.bg_priority;
        let start = self.init_output_len;
        for sprite in &mut self.output[start..] {
            sprite.set_bg_priority(bg_priority);
        }

        if failed {
            warn!(
                "menu: failed generating text sprites for page {} ({} of {} slots used)",
                page,
                self.output.len(),
                N
            );
        }
        debug!(
            "menu: rendered page {}/{} rows={} sprites={}",
            page + 1,
            self.layout.total_pages(),
            rows,
            self.output.len() - start
        );
    }

    fn render_row(&mut self, index: usize, mut pos: Point) -> Result<(), GenerateError> {
        for column in [Some(self.items), self.items2].into_iter().flatten() {
            let text = column[index];
            self.text_gen
                .generate_top_left(self.font, pos, text, &mut *self.output)?;
            pos.x += self.text_gen.width(self.font, text);
        }
        Ok(())
    }

    /// Restyles the visible rows in place after the pointer moved within
    /// the page.
    fn refresh_palette(&mut self) {
        let first_index = self.page() * self.layout.max_lines();
        let pointed_line = self.pointed_index.wrapping_sub(first_index);

        for (line, span) in self.row_spans.windows(2).enumerate() {
            let palette = if line == pointed_line {
                self.pointed_palette
            } else {
                self.unpointed_palette
            };
            for sprite in &mut self.output[span[0]..span[1]] {
                sprite.set_palette(palette);
            }
        }
    }

    fn line_pos(&self, line: usize) -> Point {
        let line_height = i32::from(self.font.height()) + i32::from(self.line_margin);
        self.top_left.offset(0, line as i32 * line_height)
    }

    fn play_sfx(&mut self, sfx: SoundItem) {
        if let Some(mut handle) = self.sfx_handle.take() {
            handle.stop();
        }
        self.sfx_handle = self.sfx_player.play(sfx);
    }
}

impl<G, K, A, L, const N: usize> Drop for MenuNavigator<'_, G, K, A, L, N>
where
    G: TextGenerator,
    K: Keypad,
    A: SfxPlayer,
    L: MenuListener,
{
    fn drop(&mut self) {
        self.clear_page();
    }
}
