use iced::widget::{button, column, container, horizontal_space, image, row, scrollable, text, Stack};
use iced::{Alignment, ContentFit, Element, Length, Padding};
use iced_aw::Wrap;

use crate::pages::PhotographerPage;
use crate::state::focus::FocusTarget;
use crate::state::gallery::RenderTarget;
use crate::state::profile::ProfileHeader;
use crate::Message;

use super::{contact_modal, lightbox, media_card, sort_menu, style};

pub fn view(page: &PhotographerPage) -> Element<'_, Message> {
    let focus = page.focus();

    let home = button(text("FishEye").size(36).color(style::ACCENT))
        .on_press(Message::Home)
        .padding([4, 8])
        .style(style::plain(focus == Some(FocusTarget::HomeLink)));

    let cards = page
        .grid()
        .cards()
        .iter()
        .enumerate()
        .map(|(index, card)| {
            media_card::view(
                card,
                index,
                focus == Some(FocusTarget::MediaCard(index)),
                focus == Some(FocusTarget::LikeButton(index)),
            )
        })
        .collect();

    let gallery = Wrap::with_elements(cards).spacing(40.0).line_spacing(30.0);

    let content = column![
        container(home).padding([20, 40]),
        profile_header(page.header(), focus == Some(FocusTarget::ContactButton)),
        container(sort_menu::view(page.sort(), focus)).padding([0, 100]),
        container(gallery).padding([20, 100]),
    ]
    .spacing(20)
    .padding(Padding {
        bottom: 80.0,
        ..Padding::ZERO
    });

    let mut layers = Stack::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(scrollable(content).height(Length::Fill))
        .push(stats_badge(page));

    if page.lightbox().is_open() {
        layers = layers.push(lightbox::view(page.lightbox(), focus));
    }
    if page.contact().is_open() {
        layers = layers.push(contact_modal::view(page.contact(), focus));
    }

    layers.into()
}

/// Name, location and tagline, the contact button, then the portrait
fn profile_header(header: &ProfileHeader, contact_focused: bool) -> Element<'_, Message> {
    let contact = button(text("Contact me").size(20))
        .on_press(Message::ContactOpen)
        .padding([16, 20])
        .style(style::primary(contact_focused));

    let portrait = image(image::Handle::from_path(header.portrait.clone()))
        .width(Length::Fixed(200.0))
        .height(Length::Fixed(200.0))
        .content_fit(ContentFit::Cover);

    let band = row![
        column![
            text(&header.name).size(56).color(style::ACCENT),
            text(&header.location).size(22).color(style::SECONDARY),
            text(&header.tagline).size(16).color(style::MUTED),
        ]
        .spacing(6),
        horizontal_space(),
        contact,
        horizontal_space(),
        portrait,
    ]
    .align_y(Alignment::Center);

    container(band)
        .padding([40, 50])
        .width(Length::Fill)
        .style(style::header_band)
        .into()
}

/// Pinned to the bottom-right corner of the window
fn stats_badge(page: &PhotographerPage) -> Element<'_, Message> {
    let badge = container(
        row![
            text(format!("{} ❤", page.total_likes())).size(22),
            horizontal_space(),
            text(&page.header().daily_rate).size(22),
        ]
        .width(Length::Fixed(300.0)),
    )
    .padding([18, 30])
    .style(style::badge);

    container(badge)
        .align_right(Length::Fill)
        .align_bottom(Length::Fill)
        .padding(Padding {
            right: 36.0,
            bottom: 24.0,
            ..Padding::ZERO
        })
        .into()
}
