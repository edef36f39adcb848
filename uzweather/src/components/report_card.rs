use ratatui::{
    Frame,
    layout::{Constraint, Flex, Layout, Rect},
    style::{Color, Modifier, Style, Stylize},
    text::{Line, Span},
    widgets::Paragraph,
};

use super::{CityHeader, CityHeaderProps, Component};
use crate::action::Action;
use crate::icon::icon_for;
use crate::report::{Condition, WeatherReport};
use crate::state::{AppState, RequestState};

/// Header rows for the FIGlet city name: terminus(6) down to plain(1).
const HEADER_CAP: u16 = 6;
/// Title line + blank + four data rows.
const DETAILS_HEIGHT: u16 = 6;
const LABEL_WIDTH: usize = 16;

pub struct ReportCard;

pub struct ReportCardProps<'a> {
    pub state: &'a AppState,
}

impl Component<Action> for ReportCard {
    type Props<'a> = ReportCardProps<'a>;

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let state = props.state;
        let chunks = Layout::vertical([
            Constraint::Max(HEADER_CAP),
            Constraint::Length(1),
            Constraint::Length(DETAILS_HEIGHT),
        ])
        .flex(Flex::Center)
        .split(area);

        if let RequestState::Pending { query, .. } = &state.request {
            render_header(frame, chunks[0], state, query.as_str(), None);
            if let Some(report) = state.last_report.as_ref() {
                render_details(frame, chunks[2], report, true);
            }
            return;
        }

        match state.visible_report() {
            Some(report) => {
                render_header(
                    frame,
                    chunks[0],
                    state,
                    report.location.as_str(),
                    Some(report.condition),
                );
                render_details(frame, chunks[2], report, state.request.is_rejected());
            }
            None => render_hint(frame, chunks[2]),
        }
    }
}

fn render_header(
    frame: &mut Frame,
    area: Rect,
    state: &AppState,
    city: &str,
    condition: Option<Condition>,
) {
    let mut header = CityHeader;
    header.render(
        frame,
        area,
        CityHeaderProps {
            city,
            condition,
            is_animating: state.request.is_pending(),
            tick_count: state.tick_count,
        },
    );
}

fn render_details(frame: &mut Frame, area: Rect, report: &WeatherReport, dimmed: bool) {
    let icon = icon_for(report.condition);
    let value_style = if dimmed {
        Style::default().fg(Color::DarkGray)
    } else {
        Style::default().fg(Color::White)
    };

    let mut lines = vec![
        Line::from(vec![
            Span::styled(
                format!("{} ob-havo ma'lumotlari ", report.location),
                value_style.add_modifier(Modifier::BOLD),
            ),
            Span::styled(icon.glyph(), Style::default().fg(icon.color())),
        ]),
        Line::default(),
    ];
    lines.push(row("Harorat", format!("{}°C", report.temperature_celsius), value_style));
    lines.push(row("Tavsif", report.condition.label().to_string(), value_style));
    lines.push(row("Namlik", format!("{}%", report.humidity_percent), value_style));
    lines.push(row("Shamol tezligi", format!("{} m/s", report.wind_speed_mps), value_style));

    frame.render_widget(Paragraph::new(lines), centered_block(area));
}

fn row(label: &str, value: String, value_style: Style) -> Line<'static> {
    Line::from(vec![
        Span::styled(
            format!("{label:<LABEL_WIDTH$}"),
            Style::default().fg(Color::Gray),
        ),
        Span::styled(value, value_style),
    ])
}

fn render_hint(frame: &mut Frame, area: Rect) {
    let hint = Line::from(vec![
        Span::styled("Shahar nomini yozing va ", Style::default().fg(Color::DarkGray)),
        Span::styled("enter", Style::default().fg(Color::Cyan).bold()),
        Span::styled(" bosing", Style::default().fg(Color::DarkGray)),
    ])
    .centered();
    let [line] = Layout::vertical([Constraint::Length(1)])
        .flex(Flex::Center)
        .areas(area);
    frame.render_widget(Paragraph::new(hint), line);
}

/// Narrow the details to a readable column in the middle of wide terminals.
fn centered_block(area: Rect) -> Rect {
    let [column] = Layout::horizontal([Constraint::Max(40)])
        .flex(Flex::Center)
        .areas(area);
    column
}
