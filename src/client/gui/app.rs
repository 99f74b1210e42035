use std::sync::Arc;
use iced::{Application, Command, Element, Theme};
use log::{info, warn};
use crate::client::config::ClientConfig;
use crate::client::gui::views::greeting_form;
use crate::client::gui::views::logger::LogMessage;
use crate::client::models::form_state::{GreetingFormState, SubmitAttempt};
use crate::client::models::messages::Message;
use crate::client::services::greeting_service::GreetingService;

const LOG_CLEAR_DELAY_MS: u64 = 4000;

pub struct GreetingApp {
    pub state: GreetingFormState,
    pub logger: Vec<LogMessage>,
    pub service: Arc<GreetingService>,
}

impl GreetingApp {
    pub fn with_service(service: GreetingService) -> Self {
        Self {
            state: GreetingFormState::default(),
            logger: Vec::new(),
            service: Arc::new(service),
        }
    }

    fn schedule_log_clear() -> Command<Message> {
        Command::perform(
            async move {
                tokio::time::sleep(tokio::time::Duration::from_millis(LOG_CLEAR_DELAY_MS)).await;
            },
            |_| Message::ClearLog,
        )
    }
}

impl Application for GreetingApp {
    type Message = Message;
    type Theme = Theme;
    type Executor = iced::executor::Default;
    type Flags = ClientConfig;

    fn new(config: ClientConfig) -> (Self, Command<Message>) {
        info!("[APP] Starting with {} endpoint {}", config.environment, config.endpoint());
        (GreetingApp::with_service(GreetingService::new(config)), Command::none())
    }

    fn title(&self) -> String {
        "Hello World App".to_string()
    }

    fn update(&mut self, message: Message) -> Command<Message> {
        match message {
            Message::NameChanged(name) => {
                self.state.set_name(name);
                Command::none()
            }
            Message::Submit => match self.state.begin_submit() {
                SubmitAttempt::Dispatched(payload) => {
                    self.logger.push(LogMessage::info(format!(
                        "Sending to {}...",
                        self.service.config().endpoint()
                    )));
                    let svc = self.service.clone();
                    Command::perform(async move { svc.submit(payload).await }, Message::Settled)
                }
                SubmitAttempt::Invalid(_) => Command::none(),
                SubmitAttempt::InFlight => {
                    warn!("[APP] Submit ignored while a request is in flight");
                    Command::none()
                }
            },
            Message::Settled(settled) => {
                self.state.settle(settled.response);
                match settled.failure {
                    Some(failure) => self.logger.push(LogMessage::error(format!("Error: {}", failure))),
                    None => self.logger.clear(),
                }
                if self.logger.is_empty() {
                    Command::none()
                } else {
                    GreetingApp::schedule_log_clear()
                }
            }
            Message::ClearLog => {
                // keep the bar while a request is still pending
                if !self.state.is_loading() {
                    self.logger.clear();
                }
                Command::none()
            }
        }
    }

    fn view(&self) -> Element<Message> {
        greeting_form::view(&self.state, &self.logger)
    }

    fn theme(&self) -> Theme {
        Theme::Light
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::gui::views::logger::LogLevel;
    use crate::client::services::greeting_service::Settlement;

    fn app() -> GreetingApp {
        GreetingApp::with_service(GreetingService::new(ClientConfig::default()))
    }

    #[test]
    fn blank_submit_shows_inline_error_and_stays_idle() {
        let mut app = app();
        let _ = app.update(Message::NameChanged("  ".to_string()));
        let _ = app.update(Message::Submit);
        assert!(app.state.validation_error.is_some());
        assert!(!app.state.is_loading());
        assert!(app.logger.is_empty());
    }

    #[test]
    fn loading_spans_dispatch_to_settlement() {
        let mut app = app();
        let _ = app.update(Message::NameChanged("Alice".to_string()));
        assert!(!app.state.is_loading());
        let _ = app.update(Message::Submit);
        assert!(app.state.is_loading());
        let _ = app.update(Message::Submit);
        assert!(app.state.is_loading());

        let _ = app.update(Message::Settled(Settlement {
            response: "Hi Alice".to_string(),
            failure: None,
        }));
        assert!(!app.state.is_loading());
        assert_eq!(app.state.response, "Hi Alice");
        assert!(app.logger.is_empty());
    }

    #[test]
    fn failure_is_surfaced_in_log_bar() {
        let mut app = app();
        let _ = app.update(Message::NameChanged("Alice".to_string()));
        let _ = app.update(Message::Submit);
        let _ = app.update(Message::Settled(Settlement {
            response: "Error connecting to backend".to_string(),
            failure: Some("backend replied with HTTP 500".to_string()),
        }));
        assert_eq!(app.state.response, "Error connecting to backend");
        let last = app.logger.last().unwrap();
        assert_eq!(last.level, LogLevel::Error);
        assert!(last.message.contains("HTTP 500"));

        let _ = app.update(Message::ClearLog);
        assert!(app.logger.is_empty());
    }
}
