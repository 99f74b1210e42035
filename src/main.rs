use iced::Application;
use hello_form::client::config::ClientConfig;
use hello_form::client::gui::app::GreetingApp;

fn main() -> anyhow::Result<()> {
    // load environment from .env (optional)
    let _ = dotenvy::dotenv();
    hello_form::utils::logging::init();

    let config = ClientConfig::from_env();
    GreetingApp::run(iced::Settings::with_flags(config))?;
    Ok(())
}
