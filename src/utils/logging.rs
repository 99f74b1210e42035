/// Map `LOG_LEVEL` onto `RUST_LOG` and start env_logger. Safe to call twice.
pub fn init() {
    let log_level = std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string());
    if std::env::var_os("RUST_LOG").is_none() {
        std::env::set_var("RUST_LOG", &log_level);
    }
    let _ = env_logger::try_init();
}
