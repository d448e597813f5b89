use iced::widget::{button, row, text};
use iced::{Alignment, Element};

/// "Back" affordance shown at the top of every page except the landing view
pub fn view<'a, Message: Clone + 'a>(on_press: Message) -> Element<'a, Message> {
    button(row![text("←"), text("Back")].spacing(6).align_y(Alignment::Center))
        .on_press(on_press)
        .padding([6, 14])
        .style(button::secondary)
        .into()
}
