use crate::ui::settings::SaveStatus;
use crate::ui::theme::{ACCENT, GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT, STATUS_OK, STATUS_PENDING};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

pub struct Header;

impl Default for Header {
    fn default() -> Self {
        Self::new()
    }
}

impl Header {
    pub fn new() -> Self {
        Self
    }

    pub fn widget(&self, status: SaveStatus) -> Paragraph<'static> {
        let text_style = Style::default().fg(HEADER_TEXT);
        let separator_style = Style::default().fg(HEADER_SEPARATOR);
        let (dot, dot_style, label) = match status {
            SaveStatus::Idle => ("●", Style::default().fg(STATUS_OK), "Saved"),
            SaveStatus::Pending => ("●", Style::default().fg(STATUS_PENDING), "Unsaved"),
            SaveStatus::Saving => ("◌", Style::default().fg(STATUS_PENDING), "Saving"),
        };
        let line = Line::from(vec![
            Span::styled("  ", text_style),
            Span::styled(
                "Application Settings",
                Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
            ),
            Span::styled("  │  ", separator_style),
            Span::styled(dot, dot_style),
            Span::styled(" ", text_style),
            Span::styled(label, text_style),
        ]);

        Paragraph::new(line).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}
