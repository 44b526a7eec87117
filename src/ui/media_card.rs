use iced::widget::{button, column, container, horizontal_space, image, row, text, tooltip};
use iced::{Alignment, ContentFit, Element, Length};

use crate::state::media_card::{MediaCard, Thumbnail};
use crate::Message;

use super::style;

const PREVIEW_WIDTH: f32 = 350.0;
const PREVIEW_HEIGHT: f32 = 300.0;

/// One gallery entry: the preview opens the lightbox, the heart likes
pub fn view(
    card: &MediaCard,
    index: usize,
    card_focused: bool,
    like_focused: bool,
) -> Element<'_, Message> {
    let preview = button(preview(card))
        .on_press(Message::OpenMedia(index))
        .padding(0)
        .style(style::plain(card_focused));

    let heart = if card.is_liked() { "♥" } else { "♡" };
    let like = button(text(heart).size(22))
        .on_press(Message::ToggleLike(index))
        .padding([0, 6])
        .style(style::plain(like_focused));

    let footer = row![
        text(&card.title).size(18).color(style::ACCENT),
        horizontal_space(),
        text(card.likes().to_string()).size(18).color(style::ACCENT),
        tooltip(like, text(&card.like_label).size(12), tooltip::Position::Top),
    ]
    .spacing(6)
    .align_y(Alignment::Center);

    column![preview, footer]
        .spacing(6)
        .width(Length::Fixed(PREVIEW_WIDTH))
        .into()
}

fn preview(card: &MediaCard) -> Element<'_, Message> {
    match (&card.thumbnail, card.display_path()) {
        (Thumbnail::Image { .. }, Some(path)) => image(image::Handle::from_path(path))
            .width(Length::Fixed(PREVIEW_WIDTH))
            .height(Length::Fixed(PREVIEW_HEIGHT))
            .content_fit(ContentFit::Cover)
            .into(),
        (Thumbnail::Image { .. }, None) => frame(text("…").size(32)),
        (Thumbnail::Video { .. }, _) => frame(
            column![text("▶").size(48), text(&card.label).size(14)]
                .spacing(8)
                .align_x(Alignment::Center),
        ),
    }
}

/// Grey box the size of a preview
fn frame<'a>(content: impl Into<Element<'a, Message>>) -> Element<'a, Message> {
    container(content)
        .center_x(Length::Fixed(PREVIEW_WIDTH))
        .center_y(Length::Fixed(PREVIEW_HEIGHT))
        .style(style::placeholder)
        .into()
}
