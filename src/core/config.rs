use std::env;

#[derive(Clone, Debug)]
pub struct AppConfig {
    // Origin allowed to make cross-origin requests (the web client)
    pub frontend_url: String,
    pub port: String,
    pub db_path: String,
    pub llm_api_hostname: String,
    pub llm_api_key: String,
    pub llm_model: String,
    pub llm_max_tokens: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        let frontend_url =
            env::var("FRONTEND_URL").unwrap_or_else(|_| "http://localhost:5173".to_string());
        let port = env::var("PORT").unwrap_or_else(|_| "5000".to_string());
        let db_path = env::var("CHATBOX_DB_PATH").unwrap_or_else(|_| "./chatbox.db".to_string());
        let llm_api_hostname = env::var("CHATBOX_LLM_HOST")
            .unwrap_or_else(|_| "https://openrouter.ai/api".to_string());
        let llm_api_key = env::var("OPENROUTER_API_KEY").unwrap_or_else(|_| {
            tracing::warn!("Missing env var OPENROUTER_API_KEY, completions will fail");
            String::new()
        });
        let llm_model =
            env::var("CHATBOX_LLM_MODEL").unwrap_or_else(|_| "openai/gpt-4o".to_string());
        let llm_max_tokens = env::var("CHATBOX_LLM_MAX_TOKENS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(100);

        Self {
            frontend_url,
            port,
            db_path,
            llm_api_hostname,
            llm_api_key,
            llm_model,
            llm_max_tokens,
        }
    }
}
