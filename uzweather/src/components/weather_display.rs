use crossterm::event::{KeyCode, KeyModifiers};
use ratatui::layout::{Constraint, Layout};
use ratatui::prelude::{Frame, Rect};
use ratatui::style::{Color, Modifier, Style, Stylize};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use tui_dispatch::EventKind;
use tui_dispatch_components::{
    StatusBar, StatusBarHint, StatusBarProps, StatusBarSection, StatusBarStyle,
};

use super::{Component, LookupForm, LookupFormProps, ReportCard, ReportCardProps};
use crate::action::Action;
use crate::state::{AppState, RequestState};

pub const ERROR_ICON: &str = "\u{26a0}\u{fe0f}";
pub const TITLE: &str = "O'zbekiston Ob-havosini Bilish";
pub const LOADING_TEXT: &str = "Yuklanmoqda...";

/// Props for WeatherDisplay - read-only view of state
pub struct WeatherDisplayProps<'a> {
    pub state: &'a AppState,
    pub is_focused: bool,
}

/// The whole widget: title, city field, status line, report and hints
#[derive(Default)]
pub struct WeatherDisplay {
    form: LookupForm,
}

impl WeatherDisplay {
    pub fn new() -> Self {
        Self::default()
    }

    fn form_props(state: &AppState, is_focused: bool) -> LookupFormProps<'_> {
        LookupFormProps {
            input: &state.input,
            is_pending: state.request.is_pending(),
            is_focused,
            on_change: Action::InputChange,
            on_submit: Action::LookupSubmit,
        }
    }
}

impl Component<Action> for WeatherDisplay {
    type Props<'a> = WeatherDisplayProps<'a>;

    fn handle_event(
        &mut self,
        event: &EventKind,
        props: Self::Props<'_>,
    ) -> impl IntoIterator<Item = Action> {
        if !props.is_focused {
            return Vec::new();
        }

        if let EventKind::Key(key) = event {
            match key.code {
                KeyCode::Esc => return vec![Action::Quit],
                KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                    return vec![Action::Quit];
                }
                _ => {}
            }
        }

        self.form
            .handle_event(event, Self::form_props(props.state, true))
            .into_iter()
            .collect()
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, props: WeatherDisplayProps<'_>) {
        let state = props.state;
        let chunks = Layout::vertical([
            Constraint::Length(1), // Title
            Constraint::Length(1), // Spacer
            Constraint::Length(3), // City field
            Constraint::Length(1), // Status line
            Constraint::Min(1),    // Report
            Constraint::Length(1), // Known cities
            Constraint::Length(1), // Help bar
        ])
        .split(area);

        let title = Line::from(Span::styled(
            TITLE,
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        ))
        .centered();
        frame.render_widget(Paragraph::new(title), chunks[0]);

        self.form
            .render(frame, chunks[2], Self::form_props(state, props.is_focused));

        frame.render_widget(Paragraph::new(status_line(state)), chunks[3]);

        let mut card = ReportCard;
        card.render(frame, chunks[4], ReportCardProps { state });

        let cities = state
            .allow_list
            .iter()
            .map(|city| city.as_str())
            .collect::<Vec<_>>()
            .join(", ");
        let known = Line::from(vec![
            Span::styled("Shaharlar: ", Style::default().fg(Color::DarkGray)),
            Span::styled(cities, Style::default().fg(Color::Gray)),
        ])
        .centered();
        frame.render_widget(Paragraph::new(known), chunks[5]);

        let mut status_bar = StatusBar::new();
        <StatusBar as Component<Action>>::render(
            &mut status_bar,
            frame,
            chunks[6],
            StatusBarProps {
                left: StatusBarSection::empty(),
                center: StatusBarSection::hints(&[
                    StatusBarHint::new("enter", "lookup"),
                    StatusBarHint::new("ctrl+u", "clear"),
                    StatusBarHint::new("esc", "quit"),
                ]),
                right: StatusBarSection::empty(),
                style: StatusBarStyle::default(),
                is_focused: false,
            },
        );
    }
}

fn status_line(state: &AppState) -> Line<'static> {
    match &state.request {
        RequestState::Pending { .. } => Line::from(vec![
            Span::styled(
                format!("{} ", state.spinner_frame()),
                Style::default().fg(Color::Cyan),
            ),
            Span::styled(LOADING_TEXT, Style::default().fg(Color::Gray)),
        ])
        .centered(),
        RequestState::Rejected { reason } => Line::from(vec![
            Span::raw(format!("{ERROR_ICON} ")),
            Span::styled(
                reason.to_string(),
                Style::default().fg(Color::Rgb(200, 100, 100)).bold(),
            ),
        ])
        .centered(),
        RequestState::Idle | RequestState::Resolved { .. } => Line::default(),
    }
}
