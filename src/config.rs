use std::env;

#[derive(Debug, Clone)]
pub struct Config {
    pub auth_token: String,
    pub port: u16,
    pub cors_host: Option<String>,
}

impl Config {
    pub fn init() -> Self {
        let auth_token = env::var("AUTH_TOKEN").expect("AUTH_TOKEN must be set");
        let port = env::var("PORT").unwrap_or_else(|_| "8000".to_string());
        let cors_host = env::var("CORS_HOST").ok();

        Self {
            auth_token,
            port: port.parse::<u16>().expect("PORT must be a valid port number"),
            cors_host,
        }
    }
}
