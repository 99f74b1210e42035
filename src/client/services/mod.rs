pub mod greeting_service;
pub mod reply_parser;
