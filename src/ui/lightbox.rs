use std::time::Duration;

use iced::widget::{button, center, column, container, horizontal_space, image, mouse_area, opaque, row, text};
use iced::{Alignment, Color, ContentFit, Element, Length};

use crate::state::focus::FocusTarget;
use crate::state::lightbox::{Lightbox, Playback, Stage};
use crate::Message;

use super::style;

/// Full-window overlay; clicking the backdrop closes it
pub fn view(lightbox: &Lightbox, focus: Option<FocusTarget>) -> Element<'_, Message> {
    let control = |label: &'static str, message: Message, target: FocusTarget| {
        button(text(label).size(36))
            .on_press(message)
            .padding([4, 12])
            .style(style::plain(focus == Some(target)))
    };

    let close = control("✕", Message::LightboxClose, FocusTarget::LightboxClose);
    let prev = control("‹", Message::LightboxPrev, FocusTarget::LightboxPrev);
    let next = control("›", Message::LightboxNext, FocusTarget::LightboxNext);

    let body = row![
        container(prev).center_y(Length::Fill),
        stage(lightbox.stage(), focus),
        column![close, container(next).center_y(Length::Fill)].align_x(Alignment::End),
    ]
    .spacing(12);

    let panel = container(body)
        .padding(20)
        .max_width(1100.0)
        .height(Length::Fill)
        .style(style::panel(Color::WHITE));

    opaque(
        mouse_area(center(opaque(panel)).padding(40).style(style::backdrop))
            .on_press(Message::LightboxClose),
    )
}

fn stage(stage: &Stage, focus: Option<FocusTarget>) -> Element<'_, Message> {
    match stage {
        Stage::Empty => horizontal_space().into(),
        Stage::Image { src, alt } => column![
            image(image::Handle::from_path(src))
                .width(Length::Fill)
                .height(Length::Fill)
                .content_fit(ContentFit::Contain),
            text(alt).size(20).color(style::ACCENT),
        ]
        .spacing(10)
        .width(Length::Fill)
        .into(),
        Stage::Video { label, playback, .. } => column![
            container(video_status(playback, focus == Some(FocusTarget::LightboxPlay)))
                .center_x(Length::Fill)
                .center_y(Length::Fill)
                .style(style::placeholder),
            text(label).size(20).color(style::ACCENT),
        ]
        .spacing(10)
        .width(Length::Fill)
        .into(),
    }
}

/// Stand-in for the video surface: play/pause button, position and mute flag
fn video_status(playback: &Playback, focused: bool) -> Element<'_, Message> {
    let icon = if playback.is_playing() { "⏸" } else { "▶" };
    let toggle = button(text(icon).size(64))
        .on_press(Message::PlaybackToggle)
        .padding([0, 12])
        .style(style::plain(focused));

    let mut details = vec![format!(
        "{} / {}",
        timestamp(playback.position()),
        timestamp(playback.length())
    )];
    if playback.muted {
        details.push("muted".to_string());
    }

    column![toggle, text(details.join(" · ")).size(16)]
        .spacing(8)
        .align_x(Alignment::Center)
        .into()
}

fn timestamp(position: Duration) -> String {
    let seconds = position.as_secs();
    format!("{}:{:02}", seconds / 60, seconds % 60)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timestamp() {
        assert_eq!(timestamp(Duration::ZERO), "0:00");
        assert_eq!(timestamp(Duration::from_millis(75_500)), "1:15");
    }
}
