//! Array pane: one vertical bar per element
//!
//! Bar color follows the element's display state: sorted elements are green,
//! elements touched by the current step take their mark color, everything
//! else uses the neutral bar color.

use crate::ui::theme::DEFAULT_THEME;
use crate::ui::view::BarView;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Bar, BarChart, BarGroup, Block, Borders, Paragraph},
    Frame,
};

/// Width of each bar and the gap between bars for `count` bars in `width` columns
pub fn bar_geometry(count: usize, width: u16) -> (u16, u16) {
    if count == 0 {
        return (1, 0);
    }
    let width = width as usize;
    let gap = if count * 2 <= width + 1 { 1 } else { 0 };
    let bar_width = (width.saturating_sub(gap * (count - 1)) / count).max(1);
    (bar_width.min(u16::MAX as usize) as u16, gap as u16)
}

/// Render the array pane
pub fn render_bars_pane(frame: &mut Frame, area: Rect, view: &BarView, title: &str) {
    let block = Block::default()
        .title(format!(" {} ", title))
        .borders(Borders::ALL)
        .border_style(
            Style::default()
                .fg(DEFAULT_THEME.border_focused)
                .add_modifier(Modifier::BOLD),
        );

    if view.values.is_empty() {
        let paragraph = Paragraph::new("(empty array)")
            .block(block)
            .style(Style::default().fg(DEFAULT_THEME.comment));
        frame.render_widget(paragraph, area);
        return;
    }

    // Shift so the smallest value still gets a visible bar
    let floor = view.values.iter().copied().min().unwrap_or(0).min(1).saturating_sub(1);
    let heights: Vec<u64> = view
        .values
        .iter()
        .map(|&v| (i64::from(v) - i64::from(floor)) as u64)
        .collect();
    let max = heights.iter().copied().max().unwrap_or(1);

    let bars: Vec<Bar> = view
        .values
        .iter()
        .zip(&heights)
        .enumerate()
        .map(|(index, (value, &height))| {
            let color = if view.sorted.contains(&index) {
                DEFAULT_THEME.sorted
            } else if let Some(mark) = view.marks.get(&index) {
                DEFAULT_THEME.mark_color(*mark)
            } else {
                DEFAULT_THEME.bar
            };
            let label = if view.show_values {
                value.to_string()
            } else {
                String::new()
            };
            Bar::default()
                .value(height)
                .text_value(label)
                .style(Style::default().fg(color))
                .value_style(Style::default().fg(Color::Black).bg(color))
        })
        .collect();

    let (bar_width, bar_gap) = bar_geometry(bars.len(), area.width.saturating_sub(2));
    let chart = BarChart::default()
        .block(block)
        .data(BarGroup::default().bars(&bars))
        .bar_width(bar_width)
        .bar_gap(bar_gap)
        .max(max);

    frame.render_widget(chart, area);
}
