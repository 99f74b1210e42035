// Inline error shown under a form field
use iced::{Color, Element, widget::Text};
use crate::client::models::messages::Message;

const ERROR_RED: Color = Color::from_rgb(0.94, 0.27, 0.27);

pub fn view<'a>(msg: impl ToString) -> Element<'a, Message> {
    Text::new(msg.to_string()).size(13).style(ERROR_RED).into()
}
