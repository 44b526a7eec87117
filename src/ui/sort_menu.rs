use iced::widget::{button, row, text, Column};
use iced::{Alignment, Element, Length};

use crate::state::focus::FocusTarget;
use crate::state::sort::{SortControl, SortKey};
use crate::Message;

use super::style;

const MENU_WIDTH: f32 = 170.0;

/// "Sort by" label, trigger button and, when expanded, the option list
pub fn view(sort: &SortControl, focus: Option<FocusTarget>) -> Element<'_, Message> {
    let arrow = if sort.is_expanded() { "▲" } else { "▼" };
    let trigger = button(row![text(sort.label()), text(arrow)].spacing(30))
        .on_press(Message::SortToggle)
        .padding([12, 16])
        .width(Length::Fixed(MENU_WIDTH))
        .style(style::primary(focus == Some(FocusTarget::SortButton)));

    let mut menu = Column::new().push(trigger);
    if sort.is_expanded() {
        menu = SortKey::ALL.iter().fold(menu, |menu, key| {
            let focused = focus == Some(FocusTarget::SortOption(*key));
            menu.push(
                button(text(key.label()))
                    .on_press(Message::SortSelect(*key))
                    .padding([12, 16])
                    .width(Length::Fixed(MENU_WIDTH))
                    .style(style::sort_option(focused, sort.is_selected(*key))),
            )
        });
    }

    row![text("Sort by").size(18), menu]
        .spacing(20)
        .align_y(Alignment::Start)
        .into()
}
