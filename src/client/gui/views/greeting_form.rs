use iced::{Alignment, Color, Element, Font, Length};
use iced::widget::{Button, Column, Container, Space, Text, TextInput};
use crate::client::gui::views::logger::{logger_view, LogMessage};
use crate::client::gui::widgets::alert;
use crate::client::models::form_state::GreetingFormState;
use crate::client::models::messages::Message;

const BG_MAIN: Color = Color::from_rgb(0.93, 0.95, 1.0);
const CARD_BG: Color = Color::WHITE;
const RESPONSE_BG: Color = Color::from_rgb(0.94, 0.99, 0.96);
const RESPONSE_BORDER: Color = Color::from_rgb(0.73, 0.97, 0.82);
const RESPONSE_HEADING: Color = Color::from_rgb(0.09, 0.40, 0.20);
const RESPONSE_TEXT: Color = Color::from_rgb(0.08, 0.50, 0.24);
const TEXT_PRIMARY: Color = Color::from_rgb(0.12, 0.16, 0.22);
const TEXT_SECONDARY: Color = Color::from_rgb(0.22, 0.25, 0.32);

const BOLD_FONT: Font = Font {
    family: iced::font::Family::SansSerif,
    weight: iced::font::Weight::Bold,
    ..Font::DEFAULT
};

fn bg_main_appearance(_: &iced::Theme) -> iced::widget::container::Appearance {
    iced::widget::container::Appearance {
        background: Some(iced::Background::Color(BG_MAIN)),
        text_color: Some(TEXT_PRIMARY),
        ..Default::default()
    }
}

fn card_appearance(_: &iced::Theme) -> iced::widget::container::Appearance {
    iced::widget::container::Appearance {
        background: Some(iced::Background::Color(CARD_BG)),
        text_color: Some(TEXT_PRIMARY),
        border: iced::Border {
            width: 0.0,
            color: Color::TRANSPARENT,
            radius: 12.0.into(),
        },
        shadow: iced::Shadow {
            offset: iced::Vector::new(0.0, 8.0),
            blur_radius: 24.0,
            color: Color::from_rgba(0.0, 0.0, 0.0, 0.2),
        },
    }
}

fn response_appearance(_: &iced::Theme) -> iced::widget::container::Appearance {
    iced::widget::container::Appearance {
        background: Some(iced::Background::Color(RESPONSE_BG)),
        text_color: Some(RESPONSE_TEXT),
        border: iced::Border {
            width: 1.0,
            color: RESPONSE_BORDER,
            radius: 8.0.into(),
        },
        ..Default::default()
    }
}

pub fn view<'a>(state: &'a GreetingFormState, logger: &'a [LogMessage]) -> Element<'a, Message> {
    let loading = state.is_loading();

    let title = Text::new("Hello World App")
        .size(30)
        .font(BOLD_FONT)
        .style(TEXT_PRIMARY)
        .horizontal_alignment(iced::alignment::Horizontal::Center);

    let mut name_field = Column::new()
        .spacing(8)
        .push(Text::new("Enter your name").size(14).style(TEXT_SECONDARY))
        .push(
            TextInput::new("Your name here...", state.name())
                .on_input(Message::NameChanged)
                .on_submit(Message::Submit)
                .width(Length::Fill)
                .padding(12)
                .size(15)
        );
    if let Some(err) = &state.validation_error {
        name_field = name_field.push(alert::view(err));
    }

    let label = if loading { "Sending..." } else { "Say Hello" };
    let mut submit_button = Button::new(
        Container::new(Text::new(label).font(BOLD_FONT).size(16))
            .width(Length::Fill)
            .center_x()
    )
    .style(iced::theme::Button::Primary)
    .width(Length::Fill)
    .padding(14);
    // no on_press while loading disables the button
    if !loading {
        submit_button = submit_button.on_press(Message::Submit);
    }

    let mut card_content = Column::new()
        .width(Length::Fixed(420.0))
        .spacing(24)
        .padding(32)
        .align_items(Alignment::Center)
        .push(title)
        .push(name_field)
        .push(submit_button);

    if !state.response.is_empty() {
        card_content = card_content.push(
            Container::new(
                Column::new()
                    .spacing(8)
                    .push(Text::new("Response:").font(BOLD_FONT).size(15).style(RESPONSE_HEADING))
                    .push(Text::new(&state.response).size(15).style(RESPONSE_TEXT))
            )
            .width(Length::Fill)
            .padding(16)
            .style(iced::theme::Container::Custom(Box::new(response_appearance)))
        );
    }

    let card = Container::new(card_content)
        .style(iced::theme::Container::Custom(Box::new(card_appearance)));

    let logger_bar: Element<Message> = if logger.is_empty() {
        Space::new(Length::Fill, Length::Fixed(0.0)).into()
    } else {
        Container::new(logger_view(logger))
            .width(Length::Fill)
            .padding([8, 12, 0, 12])
            .into()
    };

    let main_content = Column::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(logger_bar)
        .push(
            Container::new(card)
                .width(Length::Fill)
                .height(Length::Fill)
                .padding(16)
                .center_x()
                .center_y()
        );

    Container::new(main_content)
        .width(Length::Fill)
        .height(Length::Fill)
        .style(iced::theme::Container::Custom(Box::new(bg_main_appearance)))
        .into()
}
