use iced::widget::{
    button, center, column, container, horizontal_space, mouse_area, opaque, row, text, text_input, Column,
};
use iced::{Alignment, Element, Length};

use crate::state::contact::{ContactField, ContactModal};
use crate::state::focus::FocusTarget;
use crate::Message;

use super::style;

/// Dialog over the photographer page; clicking the backdrop closes it
pub fn view(modal: &ContactModal, focus: Option<FocusTarget>) -> Element<'_, Message> {
    let close = button(text("✕").size(32).color(iced::Color::WHITE))
        .on_press(Message::ContactClose)
        .padding([0, 8])
        .style(style::plain(focus == Some(FocusTarget::ContactClose)));

    let title = row![
        column![
            text("Contact me").size(40),
            text(modal.recipient()).size(40),
        ],
        horizontal_space(),
        close,
    ]
    .align_y(Alignment::Start);

    let fields = ContactField::ALL
        .iter()
        .fold(Column::new().spacing(12), |form, field| form.push(field_view(modal, *field)));

    let submit = button(text("Send").size(18))
        .on_press(Message::ContactSubmit)
        .padding([12, 40])
        .style(style::primary(focus == Some(FocusTarget::ContactSubmit)));

    let panel = container(column![title, fields, submit].spacing(20))
        .padding(35)
        .width(Length::Fixed(670.0))
        .style(style::panel(style::SECONDARY));

    opaque(
        mouse_area(center(opaque(panel)).style(style::backdrop))
            .on_press(Message::ContactClose),
    )
}

/// Label, input and the field's inline error, if any
fn field_view(modal: &ContactModal, field: ContactField) -> Element<'_, Message> {
    let input = text_input("", modal.form().value(field))
        .id(text_input::Id::new(field.input_id()))
        .on_input(move |value| Message::ContactInput(field, value))
        .on_submit(Message::ContactSubmit)
        .padding(10)
        .size(18);

    let mut column = Column::new()
        .spacing(4)
        .push(text(field.label()).size(22))
        .push(input);

    if let Some(error) = modal.error(field) {
        column = column.push(text(error.to_string()).size(14).color(style::ERROR));
    }

    column.into()
}
