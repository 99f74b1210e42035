pub mod greeting_form;
pub mod logger;
