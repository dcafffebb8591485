// https://core.telegram.org/bots/api#sendmessage

use std::time::Duration;

pub mod models;
use reqwest::Client;
use serde_json::json;

use crate::models::SendMessageResponse;

#[derive(Debug, Clone)]
pub struct TelegramOptions {
    pub bot_token: String,
}

#[derive(Debug, Clone)]
pub struct TelegramService {
    options: TelegramOptions,
}

impl TelegramService {
    pub fn new(options: TelegramOptions) -> Self {
        Self { options }
    }

    pub async fn send_message(
        self: &TelegramService,
        chat_id: &str,
        text: &str,
    ) -> Result<SendMessageResponse, &'static str> {
        let bot_token = self.options.bot_token.clone();

        let url = format!(
            "https://api.telegram.org/bot{token}/sendMessage",
            token = bot_token
        );

        let body = json!({
            "chat_id": chat_id,
            "text": text,
        });

        let client = Client::new();
        let res = client
            .post(url)
            .timeout(Duration::from_secs(10))
            .json(&body)
            .send()
            .await;

        match res {
            Ok(response) => {
                let status = response.status();
                if !status.is_success() {
                    // Log the error response from Telegram
                    let error_body = response.text().await.unwrap_or_default();
                    eprintln!("Telegram error ({}): {}", status, error_body);
                    return Err("Telegram returned an error");
                }

                let result = response.json::<SendMessageResponse>().await;
                match result {
                    Ok(data) => Ok(data),
                    Err(e) => {
                        eprintln!("Failed to parse Telegram response: {}", e);
                        Err("Error parsing sendMessage response")
                    }
                }
            }
            Err(e) => {
                eprintln!("Request to Telegram failed: {}", e);
                Err("Error sending message")
            }
        }
    }
}
