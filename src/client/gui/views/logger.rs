use iced::{Element, Font, Length};
use iced::widget::{Container, Row, Space, Text};
use crate::client::models::messages::Message;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Info,
    Error,
}

#[derive(Debug, Clone)]
pub struct LogMessage {
    pub level: LogLevel,
    pub message: String,
}

impl LogMessage {
    pub fn info(message: impl Into<String>) -> Self {
        Self { level: LogLevel::Info, message: message.into() }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self { level: LogLevel::Error, message: message.into() }
    }

    pub fn emoji(&self) -> &'static str {
        match self.level {
            LogLevel::Info => "ℹ️",
            LogLevel::Error => "❌",
        }
    }

    pub fn color(&self) -> iced::Color {
        match self.level {
            LogLevel::Info => iced::Color::from_rgb(0.2, 0.6, 1.0),
            LogLevel::Error => iced::Color::from_rgb(1.0, 0.2, 0.2),
        }
    }
}

pub fn logger_view(messages: &[LogMessage]) -> Element<'_, Message> {
    // latest entry only
    if let Some(log) = messages.last() {
        let bg_color = log.color();
        Container::new(
            Row::new()
                .spacing(12)
                .push(
                    Text::new(log.emoji())
                        .font(Font::with_name("Segoe UI Emoji"))
                        .size(18)
                        .style(iced::Color::WHITE)
                )
                .push(Text::new(&log.message).size(15).style(iced::Color::WHITE))
        )
        .padding([10, 14])
        .width(Length::Fill)
        .style(iced::theme::Container::Custom(Box::new(move |_: &iced::Theme| {
            iced::widget::container::Appearance {
                background: Some(iced::Background::Color(bg_color)),
                text_color: Some(iced::Color::WHITE),
                border: iced::Border {
                    radius: 8.0.into(),
                    ..Default::default()
                },
                shadow: iced::Shadow {
                    offset: iced::Vector::new(0.0, 4.0),
                    blur_radius: 12.0,
                    color: iced::Color::from_rgba(0.0, 0.0, 0.0, 0.3),
                },
            }
        })))
        .into()
    } else {
        Space::new(Length::Fill, Length::Fixed(0.0)).into()
    }
}
