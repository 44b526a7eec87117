//! Colors and widget styles shared by every view
//!
//! iced has no native focus outline for buttons, so every focusable control
//! takes a `focused` flag from the page's focus model and draws its own ring.

use iced::theme::Palette;
use iced::widget::{button, container};
use iced::{Background, Border, Color, Shadow, Theme, Vector};

/// Brand red used for titles and primary controls
pub const ACCENT: Color = Color::from_rgb(0.565, 0.110, 0.110);
/// Location text and the stats badge
pub const SECONDARY: Color = Color::from_rgb(0.827, 0.341, 0.235);
pub const SURFACE: Color = Color::from_rgb(0.980, 0.980, 0.980);
pub const MUTED: Color = Color::from_rgb(0.459, 0.459, 0.459);
pub const ERROR: Color = Color::from_rgb(0.780, 0.0, 0.0);
const FOCUS: Color = Color::from_rgb(0.0, 0.365, 0.710);

pub fn theme() -> Theme {
    Theme::custom(
        "FishEye".to_string(),
        Palette {
            background: Color::WHITE,
            text: Color::BLACK,
            primary: ACCENT,
            success: Color::from_rgb(0.18, 0.55, 0.34),
            danger: ERROR,
        },
    )
}

fn focus_border(focused: bool, radius: f32) -> Border {
    Border {
        color: FOCUS,
        width: if focused { 3.0 } else { 0.0 },
        radius: radius.into(),
    }
}

/// Filled red button ("Contact me", sort trigger, submit)
pub fn primary(focused: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme, status| {
        let background = match status {
            button::Status::Hovered | button::Status::Pressed => SECONDARY,
            _ => ACCENT,
        };
        button::Style {
            background: Some(Background::Color(background)),
            text_color: Color::WHITE,
            border: focus_border(focused, 5.0),
            shadow: Shadow::default(),
        }
    }
}

/// Borderless button that only shows the focus ring (cards, links, icons)
pub fn plain(focused: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme, status| button::Style {
        background: None,
        text_color: match status {
            button::Status::Hovered => SECONDARY,
            _ => ACCENT,
        },
        border: focus_border(focused, 5.0),
        shadow: Shadow::default(),
    }
}

/// Entry of the expanded sort list
pub fn sort_option(focused: bool, selected: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme, status| {
        let background = match status {
            button::Status::Hovered => SECONDARY,
            _ if focused => SECONDARY,
            _ => ACCENT,
        };
        button::Style {
            background: Some(Background::Color(background)),
            text_color: if selected {
                Color::WHITE
            } else {
                Color::from_rgb(0.95, 0.85, 0.85)
            },
            border: focus_border(focused, 0.0),
            shadow: Shadow::default(),
        }
    }
}

/// Profile header band
pub fn header_band(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(SURFACE)),
        ..Default::default()
    }
}

/// Fixed badge with the like total and daily rate
pub fn badge(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(SECONDARY)),
        text_color: Some(Color::BLACK),
        border: Border {
            radius: 5.0.into(),
            ..Default::default()
        },
        shadow: Shadow {
            color: Color::from_rgba(0.0, 0.0, 0.0, 0.25),
            offset: Vector::new(0.0, 2.0),
            blur_radius: 6.0,
        },
    }
}

/// Placeholder shown until a thumbnail arrives, and for video previews
pub fn placeholder(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color::from_rgb(0.85, 0.85, 0.85))),
        text_color: Some(MUTED),
        border: Border {
            radius: 5.0.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Dimmed layer behind a modal
pub fn backdrop(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color::from_rgba(1.0, 1.0, 1.0, 0.85))),
        ..Default::default()
    }
}

/// Modal panel
pub fn panel(background: Color) -> impl Fn(&Theme) -> container::Style {
    move |_theme| container::Style {
        background: Some(Background::Color(background)),
        border: Border {
            radius: 5.0.into(),
            ..Default::default()
        },
        shadow: Shadow {
            color: Color::from_rgba(0.0, 0.0, 0.0, 0.3),
            offset: Vector::new(0.0, 4.0),
            blur_radius: 16.0,
        },
        ..Default::default()
    }
}
