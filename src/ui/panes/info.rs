//! Algorithm info pane: complexity, run settings, caption and color legend

use crate::engine::AlgorithmInfo;
use crate::generator::Distribution;
use crate::playback::{PlaybackMode, PlaybackSession};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Padding, Paragraph, Wrap},
    Frame,
};

/// Data needed to render the info pane
pub struct InfoRenderData<'a> {
    pub info: AlgorithmInfo,
    pub session: &'a PlaybackSession,
    pub distribution: Distribution,
    pub size: usize,
    /// Text shown under the settings; the last step's description while playing
    pub caption: &'a str,
}

fn field<'a>(label: &'a str, value: String) -> Line<'a> {
    Line::from(vec![
        Span::styled(format!("{:<12}", label), Style::default().fg(DEFAULT_THEME.comment)),
        Span::styled(value, Style::default().fg(DEFAULT_THEME.fg)),
    ])
}

fn swatch(label: &str, color: Color) -> Vec<Span<'_>> {
    vec![
        Span::styled("  ", Style::default().bg(color)),
        Span::styled(format!(" {}  ", label), Style::default().fg(DEFAULT_THEME.fg)),
    ]
}

/// Render the info pane
pub fn render_info_pane(frame: &mut Frame, area: Rect, data: InfoRenderData) {
    let block = Block::default()
        .title(" Algorithm ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(DEFAULT_THEME.border_normal))
        .padding(Padding::new(1, 1, 0, 0));

    let mode = match data.session.mode() {
        PlaybackMode::Continuous => "continuous",
        PlaybackMode::Step => "step",
    };

    let mut lines = vec![
        Line::from(Span::styled(
            data.info.name,
            Style::default()
                .fg(DEFAULT_THEME.primary)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        field("Time", data.info.time_complexity.to_string()),
        field("Space", data.info.space_complexity.to_string()),
        Line::from(""),
        field("Input", format!("{} ({})", data.distribution, data.size)),
        field("Speed", format!("{}/10", data.session.speed())),
        field("Mode", mode.to_string()),
        field(
            "Progress",
            format!("{}/{}", data.session.cursor(), data.session.total_steps()),
        ),
        Line::from(""),
        Line::from(Span::styled(
            data.caption.to_string(),
            Style::default().fg(DEFAULT_THEME.secondary),
        )),
        Line::from(""),
    ];

    let mut legend = Vec::new();
    legend.extend(swatch("compare", DEFAULT_THEME.comparing));
    legend.extend(swatch("swap", DEFAULT_THEME.swapping));
    legend.extend(swatch("pivot", DEFAULT_THEME.pivot));
    lines.push(Line::from(legend));
    let mut legend = Vec::new();
    legend.extend(swatch("split", DEFAULT_THEME.left_split));
    legend.extend(swatch("write", DEFAULT_THEME.written));
    legend.extend(swatch("sorted", DEFAULT_THEME.sorted));
    lines.push(Line::from(legend));

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, area);
}
