use iced::widget::{button, column, container, horizontal_space, image, row, scrollable, text};
use iced::{Alignment, ContentFit, Element, Length};
use iced_aw::Wrap;

use crate::pages::IndexPage;
use crate::state::profile::PhotographerCard;
use crate::Message;

use super::style;

pub fn view(page: &IndexPage) -> Element<'_, Message> {
    let header = row![
        text("FishEye").size(36).color(style::ACCENT),
        horizontal_space(),
        text("Our photographers").size(36).color(style::ACCENT),
    ]
    .align_y(Alignment::Center)
    .padding([20, 40]);

    let cards = page
        .cards()
        .iter()
        .enumerate()
        .map(|(index, card)| photographer_card(card, index, page.is_focused(index)))
        .collect();

    let grid = Wrap::with_elements(cards).spacing(60.0).line_spacing(40.0);

    scrollable(column![
        header,
        container(grid).padding(40).center_x(Length::Fill),
    ])
    .height(Length::Fill)
    .into()
}

/// Portrait and name form the link; location, tagline and price follow
fn photographer_card(card: &PhotographerCard, index: usize, focused: bool) -> Element<'_, Message> {
    let portrait = image(image::Handle::from_path(card.portrait.clone()))
        .width(Length::Fixed(200.0))
        .height(Length::Fixed(200.0))
        .content_fit(ContentFit::Cover);

    let link = button(
        column![portrait, text(&card.name).size(28).color(style::ACCENT)]
            .spacing(12)
            .align_x(Alignment::Center),
    )
    .on_press(Message::OpenPhotographer(index))
    .padding(8)
    .style(style::plain(focused));

    column![
        link,
        text(&card.location).size(14).color(style::SECONDARY),
        text(&card.tagline).size(12),
        text(&card.price).size(11).color(style::MUTED),
    ]
    .spacing(4)
    .width(Length::Fixed(260.0))
    .align_x(Alignment::Center)
    .into()
}
