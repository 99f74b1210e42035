use crate::client::services::greeting_service::Settlement;

#[derive(Debug, Clone)]
pub enum Message {
    NameChanged(String),
    Submit,
    Settled(Settlement),
    ClearLog,
}
