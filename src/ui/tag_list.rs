//! Tag-list editor widget: search box plus removable chips.

use crate::settings::TagField;
use crate::ui::layout::{split_chars, wrap_text};
use crate::ui::theme::{ACCENT, FOCUS_BORDER, GLOBAL_BORDER, HEADER_TEXT, MUTED_TEXT, TAG_BACKGROUND};
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Widget};

const PROMPT: &str = "> ";
const CHIP_GAP: usize = 1;

#[derive(Clone, Copy)]
pub struct TagListEditor<'a> {
    field: TagField,
    tags: &'a [String],
    draft: &'a str,
    focused: bool,
    selected: Option<usize>,
}

impl<'a> TagListEditor<'a> {
    pub fn new(field: TagField, tags: &'a [String], draft: &'a str) -> Self {
        Self {
            field,
            tags,
            draft,
            focused: false,
            selected: None,
        }
    }

    pub fn focused(mut self, focused: bool, selected: Option<usize>) -> Self {
        self.focused = focused;
        self.selected = selected;
        self
    }

    /// Total height including borders when rendered `width` columns wide.
    /// Every line from `lines` fits the inner width, so this is exact.
    pub fn height(&self, width: u16) -> u16 {
        (self.lines(inner_width(width)).len() as u16).saturating_add(2)
    }

    /// Terminal cursor position while the search box has focus.
    pub fn cursor(&self, area: Rect) -> Option<(u16, u16)> {
        if !self.focused || self.selected.is_some() || area.width < 3 || area.height < 3 {
            return None;
        }
        let row = self.input_row(inner_width(area.width)) as u16;
        if row + 2 > area.height {
            return None;
        }
        let width = inner_width(area.width);
        let column = (PROMPT.chars().count() + self.visible_draft(width).chars().count()) as u16;
        let x = area.x + 1 + column.min(area.width.saturating_sub(3));
        Some((x, area.y + 1 + row))
    }

    fn input_row(&self, width: usize) -> usize {
        // description + label come first
        self.description_lines(width).len() + wrap_text(self.field.label(), width).len()
    }

    /// Tail of the draft that fits on the input row with room for the cursor.
    fn visible_draft(&self, width: usize) -> &str {
        let room = width.saturating_sub(PROMPT.chars().count() + 1);
        let skip = self.draft.chars().count().saturating_sub(room);
        match self.draft.char_indices().nth(skip) {
            Some((start, _)) => &self.draft[start..],
            None => "",
        }
    }

    fn description_lines(&self, width: usize) -> Vec<String> {
        self.field
            .description()
            .map(|text| wrap_text(text, width))
            .unwrap_or_default()
    }

    fn lines(&self, width: usize) -> Vec<Line<'static>> {
        let mut lines = Vec::new();
        lines.extend(
            self.description_lines(width)
                .into_iter()
                .map(|text| Line::from(Span::styled(text, Style::default().fg(MUTED_TEXT)))),
        );
        lines.extend(
            wrap_text(self.field.label(), width)
                .into_iter()
                .map(|text| Line::from(Span::styled(text, Style::default().fg(HEADER_TEXT)))),
        );

        let input = if self.draft.is_empty() {
            Span::styled(
                self.field.placeholder(),
                Style::default().fg(MUTED_TEXT).add_modifier(Modifier::ITALIC),
            )
        } else {
            Span::styled(
                self.visible_draft(width).to_string(),
                Style::default().fg(HEADER_TEXT),
            )
        };
        lines.push(Line::from(vec![
            Span::styled(PROMPT, Style::default().fg(ACCENT)),
            input,
        ]));

        if self.tags.is_empty() {
            lines.push(Line::from(Span::styled(
                "(none)",
                Style::default().fg(MUTED_TEXT),
            )));
            return lines;
        }

        let mut row: Vec<Span<'static>> = Vec::new();
        let mut row_width = 0usize;
        for (index, tag) in self.tags.iter().enumerate() {
            let chip = format!(" {} × ", tag);
            let chip_width = chip.chars().count();
            let style = if self.focused && self.selected == Some(index) {
                Style::default()
                    .fg(TAG_BACKGROUND)
                    .bg(ACCENT)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(HEADER_TEXT).bg(TAG_BACKGROUND)
            };

            if chip_width > width {
                // Wider than the box: give it rows of its own.
                if !row.is_empty() {
                    lines.push(Line::from(std::mem::take(&mut row)));
                    row_width = 0;
                }
                lines.extend(
                    split_chars(&chip, width)
                        .into_iter()
                        .map(|piece| Line::from(Span::styled(piece, style))),
                );
                continue;
            }

            if !row.is_empty() && row_width + CHIP_GAP + chip_width > width {
                lines.push(Line::from(std::mem::take(&mut row)));
                row_width = 0;
            }
            if !row.is_empty() {
                row.push(Span::raw(" ".repeat(CHIP_GAP)));
                row_width += CHIP_GAP;
            }
            row.push(Span::styled(chip, style));
            row_width += chip_width;
        }
        if !row.is_empty() {
            lines.push(Line::from(row));
        }
        lines
    }
}

impl Widget for TagListEditor<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let border = if self.focused { FOCUS_BORDER } else { GLOBAL_BORDER };
        let block = Block::default()
            .title(Span::styled(
                self.field.heading(),
                Style::default().fg(ACCENT),
            ))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border));
        let lines = self.lines(inner_width(area.width));
        Paragraph::new(lines).block(block).render(area, buf);
    }
}

fn inner_width(width: u16) -> usize {
    width.saturating_sub(2).max(1) as usize
}
