use crate::settings::TagField;
use crate::ui::app::App;
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::layout::{layout_regions, stack_rows, wrap_text};
use crate::ui::settings::{FormFocus, SaveStatus, SettingsFormState};
use crate::ui::tag_list::TagListEditor;
use crate::ui::theme::{
    ACCENT, FOCUS_BORDER, GLOBAL_BORDER, HEADER_TEXT, MUTED_TEXT, STATUS_OK, STATUS_PENDING,
};
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

const NOTIFICATION_COPY: [&str; 2] = [
    "We keep the notifications off by default. You can change the settings for messages individually or you can reset to default.",
    "Do you want notifications for every message? You will receive notification on the registered email address",
];

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let (header, body, footer) = layout_regions(area);
    let state = app.settings();

    frame.render_widget(Header::new().widget(state.status()), header);
    frame.render_widget(Clear, body);

    let content = Rect {
        x: body.x.saturating_add(1),
        y: body.y,
        width: body.width.saturating_sub(2),
        height: body.height,
    };

    let notifications = notification_lines(state, content.width);
    let editors: Vec<TagListEditor> = TagField::all()
        .iter()
        .map(|&field| {
            let selected = match state.focus {
                FormFocus::Tags {
                    field: focused,
                    selected,
                } if focused == field => Some(selected),
                _ => None,
            };
            TagListEditor::new(field, state.form.tags(field), state.drafts.get(field))
                .focused(selected.is_some(), selected.flatten())
        })
        .collect();

    let mut heights = vec![(notifications.len() as u16).saturating_add(2)];
    heights.extend(editors.iter().map(|editor| editor.height(content.width)));
    heights.push(1);
    let rows = stack_rows(content, &heights);

    let notification_border = if state.focus == FormFocus::Notifications {
        FOCUS_BORDER
    } else {
        GLOBAL_BORDER
    };
    frame.render_widget(
        Paragraph::new(notifications).block(
            Block::default()
                .title(Span::styled(
                    "Notification Settings",
                    Style::default().fg(ACCENT),
                ))
                .borders(Borders::ALL)
                .border_style(Style::default().fg(notification_border)),
        ),
        rows[0],
    );

    let mut cursor = None;
    for (editor, &rect) in editors.into_iter().zip(&rows[1..]) {
        if rect.height == 0 {
            continue;
        }
        if cursor.is_none() {
            cursor = editor.cursor(rect);
        }
        frame.render_widget(editor, rect);
    }

    if let Some(message) = state.status().message() {
        let style = match state.status() {
            SaveStatus::Saving => Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
            _ => Style::default().fg(STATUS_PENDING),
        };
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(message, style))),
            rows[rows.len() - 1],
        );
    }

    frame.render_widget(Footer::new().widget(footer), footer);

    if let Some(position) = cursor {
        frame.set_cursor_position(position);
    }
}

fn notification_lines(state: &SettingsFormState, width: u16) -> Vec<Line<'static>> {
    let inner = width.saturating_sub(2).max(1) as usize;
    let mut lines: Vec<Line<'static>> = NOTIFICATION_COPY
        .iter()
        .flat_map(|text| wrap_text(text, inner))
        .map(|text| Line::from(Span::styled(text, Style::default().fg(MUTED_TEXT))))
        .collect();

    let enabled = state.form.notifications_enabled;
    let (mark, label, color) = if enabled {
        ("[x]", "Notifications on", STATUS_OK)
    } else {
        ("[ ]", "Notifications off", HEADER_TEXT)
    };
    let mut toggle = Line::from(vec![
        Span::styled(mark, Style::default().fg(color).add_modifier(Modifier::BOLD)),
        Span::raw(" "),
        Span::styled(label, Style::default().fg(HEADER_TEXT)),
    ]);
    if state.focus == FormFocus::Notifications {
        toggle = toggle.style(Style::default().add_modifier(Modifier::REVERSED));
    }
    lines.push(toggle);
    lines
}
