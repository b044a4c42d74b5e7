use crate::input::Directions;

/// Page arithmetic for `item_count` options shown `max_lines` per page.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct PageLayout {
    item_count: usize,
    max_lines: usize,
    total_pages: usize,
}

impl PageLayout {
    /// Both counts must be non-zero; the builder validates them first.
    pub const fn new(item_count: usize, max_lines: usize) -> Self {
        assert!(item_count != 0 && max_lines != 0, "empty page layout");

        Self {
            item_count,
            max_lines,
            total_pages: item_count.div_ceil(max_lines),
        }
    }

    pub const fn item_count(&self) -> usize {
        self.item_count
    }

    pub const fn max_lines(&self) -> usize {
        self.max_lines
    }

    pub const fn total_pages(&self) -> usize {
        self.total_pages
    }

    pub const fn page_of(&self, index: usize) -> usize {
        index / self.max_lines
    }

    pub const fn line_of(&self, index: usize) -> usize {
        index % self.max_lines
    }

    /// Rows shown on `page`; only the last page can be short.
    pub const fn rows_on_page(&self, page: usize) -> usize {
        if page + 1 != self.total_pages {
            self.max_lines
        } else {
            self.line_of(self.item_count - 1) + 1
        }
    }

    /// Index pointed after one step of `held` from `index`.
    ///
    /// The page axis goes first (left, then right, keeping the line clamped to
    /// the destination page), then the line axis wraps over the whole list
    /// (up, then down). Diagonal input therefore flips the page before moving
    /// the line, which can land on the neighbouring page of the flip target.
    pub fn resolve(&self, index: usize, held: Directions) -> usize {
        let mut page = self.page_of(index);
        let mut line = self.line_of(index);

        if held.contains(Directions::LEFT) {
            page = (page + self.total_pages - 1) % self.total_pages;
        }
        if held.contains(Directions::RIGHT) {
            page = (page + 1) % self.total_pages;
        }

        line = line.min(self.rows_on_page(page) - 1);
        let mut result = page * self.max_lines + line;

        if held.contains(Directions::UP) {
            result = (result + self.item_count - 1) % self.item_count;
        }
        if held.contains(Directions::DOWN) {
            result = (result + 1) % self.item_count;
        }

        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL_HELD: [Directions; 16] = {
        let mut out = [Directions::empty(); 16];
        let mut bits = 0;
        while bits < 16 {
            let mut held = Directions::empty();
            if bits & 1 != 0 {
                held = held.union(Directions::UP);
            }
            if bits & 2 != 0 {
                held = held.union(Directions::DOWN);
            }
            if bits & 4 != 0 {
                held = held.union(Directions::LEFT);
            }
            if bits & 8 != 0 {
                held = held.union(Directions::RIGHT);
            }
            out[bits] = held;
            bits += 1;
        }
        out
    };

    #[test]
    fn pages_cover_every_item() {
        for item_count in 1..=30 {
            for max_lines in 1..=12 {
                let layout = PageLayout::new(item_count, max_lines);
                assert_eq!(layout.total_pages(), item_count.div_ceil(max_lines));

                let last = layout.rows_on_page(layout.total_pages() - 1);
                assert!((1..=max_lines).contains(&last));

                let shown: usize = (0..layout.total_pages())
                    .map(|page| layout.rows_on_page(page))
                    .sum();
                assert_eq!(shown, item_count);
            }
        }
    }

    #[test]
    fn resolve_stays_in_range_for_any_input() {
        for item_count in 1..=13 {
            for max_lines in 1..=6 {
                let layout = PageLayout::new(item_count, max_lines);
                for index in 0..item_count {
                    for held in ALL_HELD {
                        let next = layout.resolve(index, held);
                        assert!(next < item_count, "{item_count}/{max_lines} {index} {held:?}");
                    }
                }
            }
        }
    }

    #[test]
    fn line_axis_wraps_around() {
        let layout = PageLayout::new(5, 5);
        assert_eq!(layout.resolve(0, Directions::UP), 4);
        assert_eq!(layout.resolve(4, Directions::DOWN), 0);
        assert_eq!(layout.resolve(2, Directions::empty()), 2);
    }

    #[test]
    fn page_flip_clamps_to_short_last_page() {
        let layout = PageLayout::new(10, 4);
        assert_eq!(layout.total_pages(), 3);
        assert_eq!(layout.rows_on_page(2), 2);

        // page 2 line 1 -> page 0 line 1
        assert_eq!(layout.resolve(9, Directions::RIGHT), 1);
        // page 1 line 3 -> page 2, clamped to line 1
        assert_eq!(layout.resolve(7, Directions::RIGHT), 9);
        // page 0 line 3 -> page 2 wrapping left, clamped to line 1
        assert_eq!(layout.resolve(3, Directions::LEFT), 9);
    }

    #[test]
    fn diagonal_flips_page_before_moving_line() {
        let layout = PageLayout::new(10, 4);
        // page 0 line 0 -> page 2 line 0 (index 8) -> up to 7 on page 1
        assert_eq!(layout.resolve(0, Directions::LEFT | Directions::UP), 7);
        // page 1 line 3 -> page 2 clamped to 9 -> down wraps to 0
        assert_eq!(layout.resolve(7, Directions::RIGHT | Directions::DOWN), 0);
        // opposite keys on one axis cancel out
        assert_eq!(layout.resolve(5, Directions::LEFT | Directions::RIGHT), 5);
        assert_eq!(layout.resolve(5, Directions::UP | Directions::DOWN), 5);
    }
}
