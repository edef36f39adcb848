use crossterm::event::{KeyCode, KeyModifiers};
use ratatui::{Frame, layout::Rect, style::Color};
use tui_dispatch::EventKind;
use tui_dispatch_components::{BaseStyle, Padding, TextInput, TextInputProps, TextInputStyle};

use super::Component;
use crate::action::Action;

pub const PLACEHOLDER: &str = "Viloyat nomini kiriting";

/// City text field. Enter submits; everything is disabled while pending.
pub struct LookupForm {
    input: TextInput,
}

pub struct LookupFormProps<'a> {
    pub input: &'a str,
    pub is_pending: bool,
    pub is_focused: bool,
    // Action constructors
    pub on_change: fn(String) -> Action,
    pub on_submit: fn(String) -> Action,
}

impl Default for LookupForm {
    fn default() -> Self {
        Self {
            input: TextInput::new(),
        }
    }
}

impl LookupForm {
    pub fn new() -> Self {
        Self::default()
    }

    fn input_style(bg: Option<Color>) -> TextInputStyle {
        TextInputStyle {
            base: BaseStyle {
                border: None,
                padding: Padding::all(1),
                bg,
                fg: None,
            },
            placeholder_style: None,
            cursor_style: None,
        }
    }
}

impl Component<Action> for LookupForm {
    type Props<'a> = LookupFormProps<'a>;

    fn handle_event(
        &mut self,
        event: &EventKind,
        props: Self::Props<'_>,
    ) -> impl IntoIterator<Item = Action> {
        if !props.is_focused || props.is_pending {
            return Vec::new();
        }

        let EventKind::Key(key) = event else {
            return Vec::new();
        };

        match key.code {
            KeyCode::Enter => return vec![(props.on_submit)(props.input.to_string())],
            KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                return vec![Action::InputClear];
            }
            _ => {}
        }

        let input_props = TextInputProps {
            value: props.input,
            placeholder: PLACEHOLDER,
            is_focused: true,
            style: Self::input_style(None),
            on_change: props.on_change,
            on_submit: props.on_submit,
            on_cursor_move: Some(|_| Action::Render),
        };
        self.input
            .handle_event(event, input_props)
            .into_iter()
            .collect()
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let bg = if props.is_pending {
            Color::Rgb(40, 40, 45)
        } else {
            Color::Rgb(50, 50, 60)
        };
        let input_props = TextInputProps {
            value: props.input,
            placeholder: PLACEHOLDER,
            is_focused: props.is_focused && !props.is_pending,
            style: Self::input_style(Some(bg)),
            on_change: props.on_change,
            on_submit: props.on_submit,
            on_cursor_move: Some(|_| Action::Render),
        };
        self.input.render(frame, area, input_props);
    }
}
