use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use unicode_width::UnicodeWidthChar;

use crate::palette::{ElementKind, ElementNode, PaletteSurface};

/// Draws the palette surface as a side panel.
///
/// Closed state renders only the toggle strip. Open state renders the group
/// buckets top to bottom with a blank row between buckets, wrapping into two
/// columns when the surface carries the two-column marker, plus the toggle
/// affordance as the panel footer.
pub fn draw_palette(frame: &mut Frame<'_>, area: Rect, surface: &PaletteSurface) {
    if area.width == 0 || area.height == 0 {
        return;
    }

    if !surface.markers.open {
        let strip = Paragraph::new(toggle_line(surface))
            .block(Block::default().borders(Borders::LEFT));
        frame.render_widget(strip, area);
        return;
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if inner.width == 0 || inner.height < 2 {
        return;
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(1)])
        .split(inner);

    let lines = entry_lines(surface);
    if surface.markers.two_column {
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(chunks[0]);
        let split_at = lines.len().div_ceil(2);
        let (left, right) = lines.split_at(split_at);
        frame.render_widget(Paragraph::new(left.to_vec()), columns[0]);
        frame.render_widget(Paragraph::new(right.to_vec()), columns[1]);
    } else {
        frame.render_widget(Paragraph::new(lines), chunks[0]);
    }

    frame.render_widget(
        Paragraph::new(toggle_line(surface)).style(Style::default().fg(Color::DarkGray)),
        chunks[1],
    );
}

fn entry_lines(surface: &PaletteSurface) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    for (index, group) in surface.groups().iter().enumerate() {
        if index > 0 {
            lines.push(Line::default());
        }
        for element in &group.elements {
            lines.push(element_line(element));
        }
    }
    lines
}

fn element_line(element: &ElementNode) -> Line<'static> {
    match &element.kind {
        ElementKind::Separator => Line::from(Span::styled(
            "──────".to_string(),
            Style::default().fg(Color::DarkGray),
        )),
        ElementKind::Custom(markup) => Line::from(Span::styled(
            markup.clone(),
            Style::default().fg(Color::DarkGray),
        )),
        ElementKind::Icon(_) => labeled_line("◆", element),
        ElementKind::Interactive => labeled_line("▪", element),
    }
}

fn labeled_line(glyph: &str, element: &ElementNode) -> Line<'static> {
    let label = element
        .title
        .as_deref()
        .or(element.entry_id.as_deref())
        .unwrap_or("")
        .to_string();

    let style = if element.highlighted {
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    };

    Line::from(vec![
        Span::styled(format!("{glyph} "), style),
        Span::styled(label, style),
    ])
}

fn toggle_line(surface: &PaletteSurface) -> Line<'static> {
    let title = surface.toggle_title.clone().unwrap_or_default();
    Line::from(vec![Span::raw("≡ ".to_string()), Span::raw(title)])
}

/// Truncates `label` to at most `width` terminal columns.
pub fn fit_label(label: &str, width: usize) -> String {
    let mut fitted = String::new();
    let mut used = 0usize;
    for ch in label.chars() {
        let ch_width = ch.width().unwrap_or(0);
        if used + ch_width > width {
            break;
        }
        fitted.push(ch);
        used += ch_width;
    }
    fitted
}
