use serde::{Deserialize, Serialize};

#[derive(Serialize)]
pub struct SendMessageRequest<'a> {
    pub chat_id: &'a str,
    pub text: &'a str,
}

/// Envelope of every Bot API response, only fields needed to detect rejection.
#[derive(Deserialize)]
pub struct SendMessageResponse {
    pub ok: bool,
    pub description: Option<String>,
}
