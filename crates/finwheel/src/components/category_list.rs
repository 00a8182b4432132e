//! Category list shown next to the pie chart.
//!
//! Each row is `[swatch | name | amount]`, where the swatch carries the
//! category icon on the same palette color as the chart slice of that rank.

use finwheel_core::format::format_amount;
use finwheel_core::{CategorySlice, IconSet, Palette, columns};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Widget,
};

use crate::util::styles::{ACCENT_TEXT, to_color};

const SWATCH_WIDTH: usize = 4;
const COLUMN_GAP: u16 = 2;

pub struct CategoryList<'a> {
    slices: &'a [CategorySlice],
    palette: &'a Palette,
    icons: &'a IconSet,
    currency: &'a str,
}

impl<'a> CategoryList<'a> {
    pub fn new(slices: &'a [CategorySlice], palette: &'a Palette, icons: &'a IconSet) -> Self {
        Self {
            slices,
            palette,
            icons,
            currency: "",
        }
    }

    pub fn currency(mut self, currency: &'a str) -> Self {
        self.currency = currency;
        self
    }

    fn swatch(&self, rank: usize, name: &str) -> Span<'static> {
        let mut text = format!(" {}", self.icons.icon_for(name).unwrap_or(""));
        let width = Span::raw(text.as_str()).width();
        text.push_str(&" ".repeat(SWATCH_WIDTH.saturating_sub(width)));
        Span::styled(
            text,
            Style::default().bg(to_color(self.palette.color_for_rank(rank))),
        )
    }

    fn render_row(&self, rank: usize, slice: &CategorySlice, area: Rect, buf: &mut Buffer) {
        let amount = format_amount(slice.amount, self.currency);
        let amount_width = Span::raw(amount.as_str()).width() as u16;
        let [swatch_area, name_area, amount_area] = Layout::horizontal([
            Constraint::Length(SWATCH_WIDTH as u16 + 1),
            Constraint::Min(1),
            Constraint::Length(amount_width),
        ])
        .spacing(1)
        .areas(area);

        Line::from(self.swatch(rank, &slice.name)).render(swatch_area, buf);
        Line::from(slice.name.as_str()).render(name_area, buf);
        Line::from(Span::styled(
            amount,
            Style::default()
                .fg(to_color(ACCENT_TEXT))
                .add_modifier(Modifier::BOLD),
        ))
        .right_aligned()
        .render(amount_area, buf);
    }
}

/// Top offset that centers `rows` lines in `height`
fn centered_offset(height: u16, rows: usize) -> u16 {
    height.saturating_sub(rows.min(u16::MAX as usize) as u16) / 2
}

impl Widget for CategoryList<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let groups = columns(self.slices);
        if groups.is_empty() || area.is_empty() {
            return;
        }

        let column_areas = Layout::horizontal(vec![Constraint::Fill(1); groups.len()])
            .spacing(COLUMN_GAP)
            .split(area);

        let mut rank = 0;
        for (group, column) in groups.iter().zip(column_areas.iter()) {
            let top = column.y + centered_offset(column.height, group.len());
            for (row, slice) in group.iter().enumerate() {
                let y = top + row as u16;
                if y >= column.bottom() {
                    break;
                }
                let row_area = Rect::new(column.x, y, column.width, 1);
                self.render_row(rank + row, slice, row_area, buf);
            }
            rank += group.len();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn slices(amounts: &[(&str, f64)]) -> Vec<CategorySlice> {
        let total = amounts.iter().map(|(_, a)| a).sum();
        amounts
            .iter()
            .map(|(name, amount)| CategorySlice {
                name: name.to_string(),
                amount: *amount,
                total,
            })
            .collect()
    }

    fn row_text(buf: &Buffer, y: u16) -> String {
        (0..buf.area.width)
            .map(|x| buf[(x, y)].symbol().to_string())
            .collect()
    }

    #[test]
    fn test_centered_offset() {
        assert_eq!(centered_offset(10, 3), 3);
        assert_eq!(centered_offset(10, 10), 0);
        assert_eq!(centered_offset(2, 5), 0);
    }

    #[test]
    fn test_single_column_rows_are_centered() {
        let data = slices(&[("Housing", 600.0), ("Travel", 300.0), ("Pets", 100.0)]);
        let palette = Palette::default();
        let icons = IconSet::default();
        let area = Rect::new(0, 0, 40, 9);
        let mut buf = Buffer::empty(area);
        CategoryList::new(&data, &palette, &icons)
            .currency("₽")
            .render(area, &mut buf);

        assert_eq!(row_text(&buf, 2).trim(), "");
        assert!(row_text(&buf, 3).contains("Housing"));
        assert!(row_text(&buf, 3).trim_end().ends_with("600 ₽"));
        assert!(row_text(&buf, 4).contains("Travel"));
        assert!(row_text(&buf, 5).contains("Pets"));
        assert_eq!(row_text(&buf, 6).trim(), "");
    }

    #[test]
    fn test_name_and_amount_stay_apart_when_narrow() {
        let data = slices(&[("Housing", -700.0), ("Transport", -50.0)]);
        let palette = Palette::default();
        let icons = IconSet::empty();
        let area = Rect::new(0, 0, 20, 2);
        let mut buf = Buffer::empty(area);
        CategoryList::new(&data, &palette, &icons)
            .currency("₽")
            .render(area, &mut buf);

        assert!(row_text(&buf, 0).ends_with("Housing -700 ₽"));
        assert!(row_text(&buf, 1).ends_with("Transpor -50 ₽"));
    }

    #[test]
    fn test_swatch_uses_rank_color() {
        let data = slices(&[("Housing", 600.0), ("Travel", 300.0)]);
        let palette = Palette::default();
        let icons = IconSet::default();
        let area = Rect::new(0, 0, 30, 2);
        let mut buf = Buffer::empty(area);
        CategoryList::new(&data, &palette, &icons).render(area, &mut buf);

        assert_eq!(buf[(0, 0)].bg, to_color(palette.color_for_rank(0)));
        assert_eq!(buf[(0, 1)].bg, to_color(palette.color_for_rank(1)));
        assert!(row_text(&buf, 0).contains("🏠"));
    }

    #[test]
    fn test_long_lists_split_into_two_columns() {
        let data = slices(&[
            ("A", 70.0),
            ("B", 60.0),
            ("C", 50.0),
            ("D", 40.0),
            ("E", 30.0),
            ("F", 20.0),
            ("G", 10.0),
        ]);
        let palette = Palette::default();
        let icons = IconSet::empty();
        let area = Rect::new(0, 0, 62, 5);
        let mut buf = Buffer::empty(area);
        CategoryList::new(&data, &palette, &icons).render(area, &mut buf);

        // First column takes ceil(7 / 2) = 4 rows, the second 3 rows centered
        let first = row_text(&buf, 0);
        assert!(first.contains(" A "));
        assert!(!first.contains(" E "));
        assert!(row_text(&buf, 3).contains(" D "));
        assert!(row_text(&buf, 0)[32..].trim().is_empty());
        assert!(row_text(&buf, 1).contains(" E "));
        assert!(row_text(&buf, 3).contains(" G "));

        // Second column continues the rank colors
        assert_eq!(buf[(32, 1)].bg, to_color(palette.color_for_rank(4)));
    }

    #[test]
    fn test_empty_list_renders_nothing() {
        let palette = Palette::default();
        let icons = IconSet::default();
        let area = Rect::new(0, 0, 20, 3);
        let mut buf = Buffer::empty(area);
        CategoryList::new(&[], &palette, &icons).render(area, &mut buf);
        assert_eq!(buf, Buffer::empty(area));
    }
}
