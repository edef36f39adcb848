use artbox::{
    Alignment as ArtAlignment, Color as ArtColor, ColorStop, Fill, LinearGradient, Renderer,
    fonts, integrations::ratatui::ArtBox,
};
use ratatui::{Frame, layout::Rect};

use super::Component;
use crate::action::Action;
use crate::report::Condition;
use crate::state::SPINNER_FRAMES;

/// FIGlet city name tinted by the sky condition
pub struct CityHeader;

pub struct CityHeaderProps<'a> {
    pub city: &'a str,
    /// `None` while the report is still on its way.
    pub condition: Option<Condition>,
    pub is_animating: bool,
    pub tick_count: u32,
}

/// Ticks for one full turn of the gradient while a lookup is pending.
const SPIN_TICKS: u32 = SPINNER_FRAMES.len() as u32 * 4;
const RESTING_ANGLE: f32 = 5.0;

fn palette(condition: Option<Condition>) -> (ArtColor, ArtColor) {
    match condition {
        Some(Condition::Sunny) => (ArtColor::rgb(255, 210, 90), ArtColor::rgb(255, 140, 60)),
        Some(Condition::Cloudy) => (ArtColor::rgb(150, 165, 185), ArtColor::rgb(225, 230, 240)),
        Some(Condition::Rainy) => (ArtColor::rgb(70, 120, 210), ArtColor::rgb(120, 200, 230)),
        None => (ArtColor::rgb(180, 180, 180), ArtColor::rgb(225, 225, 225)),
    }
}

/// Gradient angle in degrees; the pending header spins a full turn per cycle.
fn angle(is_animating: bool, tick_count: u32) -> f32 {
    if !is_animating {
        return RESTING_ANGLE;
    }
    let turn = (tick_count % SPIN_TICKS) as f32 / SPIN_TICKS as f32;
    RESTING_ANGLE + turn * 360.0
}

fn fill(props: &CityHeaderProps<'_>) -> Fill {
    let (from, to) = palette(props.condition);
    let stops = vec![
        ColorStop::new(0.0, from),
        ColorStop::new(0.5, from.interpolate(to, 0.5)),
        ColorStop::new(1.0, to),
    ];
    Fill::Linear(LinearGradient::new(
        angle(props.is_animating, props.tick_count),
        stops,
    ))
}

impl Component<Action> for CityHeader {
    type Props<'a> = CityHeaderProps<'a>;

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let renderer = Renderer::new(fonts::stack(&["terminus", "miniwi"]))
            .with_plain_fallback()
            .with_alignment(ArtAlignment::Center)
            .with_fill(fill(&props));

        frame.render_widget(ArtBox::new(&renderer, props.city), area);
    }
}
