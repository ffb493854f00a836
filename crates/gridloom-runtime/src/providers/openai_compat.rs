//! Shared chat-completion wire dialect.
//!
//! OpenAI and Perplexity speak the same `POST {base}/chat/completions`
//! protocol with bearer auth, so the request/response types and the
//! call itself live here; the provider files contribute base URL,
//! credential, and name.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::secrets::ApiCredential;
use super::{ChatMessage, CompletionResponse, ProviderError, SamplingConfig, TokenUsage};

/// Wire request. `ChatMessage` already serializes as `{role, content}`,
/// the exact shape this dialect wants, so no conversion layer exists.
#[derive(Debug, Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: &'a [ChatMessage],
    max_tokens: u32,
    temperature: f32,
    n: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    presence_penalty: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    frequency_penalty: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    top_p: Option<f32>,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    model: String,
    choices: Vec<Choice>,
    #[serde(default)]
    usage: Option<UsageBody>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: MessageBody,
}

#[derive(Debug, Deserialize)]
struct MessageBody {
    content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct UsageBody {
    prompt_tokens: u32,
    completion_tokens: u32,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    error: ApiErrorDetail,
}

#[derive(Debug, Deserialize)]
struct ApiErrorDetail {
    message: String,
}

pub(super) fn shared_client() -> &'static reqwest::Client {
    static CLIENT: std::sync::OnceLock<reqwest::Client> = std::sync::OnceLock::new();
    CLIENT.get_or_init(|| {
        reqwest::Client::builder()
            .timeout(Duration::from_secs(60))
            .build()
            .expect("Failed to build HTTP client")
    })
}

/// Execute one chat completion against an OpenAI-compatible endpoint.
///
/// Never retries; failures map onto [`ProviderError`] and the caller's
/// policy takes over.
pub(super) async fn chat_completion(
    base_url: &str,
    credential: &ApiCredential,
    messages: &[ChatMessage],
    config: &SamplingConfig,
) -> Result<CompletionResponse, ProviderError> {
    let request = ChatCompletionRequest {
        model: &config.model,
        messages,
        max_tokens: config.max_tokens,
        temperature: config.temperature,
        n: config.num_completions,
        presence_penalty: config.presence_penalty,
        frequency_penalty: config.frequency_penalty,
        top_p: config.top_p,
    };

    // Only expose the credential here, at the point of use
    let response = shared_client()
        .post(format!("{base_url}/chat/completions"))
        .bearer_auth(credential.expose())
        .header("content-type", "application/json")
        .timeout(config.timeout)
        .json(&request)
        .send()
        .await
        .map_err(|e| {
            if e.is_timeout() {
                ProviderError::Timeout(config.timeout)
            } else {
                ProviderError::Http(e.to_string())
            }
        })?;

    let status = response.status();

    if status == 429 {
        let retry_after = response
            .headers()
            .get("retry-after")
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.parse::<u64>().ok())
            .map(Duration::from_secs);
        return Err(ProviderError::RateLimited { retry_after });
    }

    if status == 401 || status == 403 {
        return Err(ProviderError::Auth(format!(
            "endpoint rejected the credential (HTTP {})",
            status.as_u16()
        )));
    }

    if !status.is_success() {
        let message = match response.json::<ApiErrorBody>().await {
            Ok(body) => body.error.message,
            Err(e) => format!("unreadable error body: {e}"),
        };
        return Err(ProviderError::Api {
            status: status.as_u16(),
            message,
        });
    }

    let body: ChatCompletionResponse = response
        .json()
        .await
        .map_err(|e| ProviderError::Parse(e.to_string()))?;

    let usage = body
        .usage
        .map(|u| TokenUsage {
            prompt_tokens: u.prompt_tokens,
            completion_tokens: u.completion_tokens,
        })
        .unwrap_or_default();

    let content = body
        .choices
        .into_iter()
        .next()
        .and_then(|choice| choice.message.content)
        .unwrap_or_default();

    if content.trim().is_empty() {
        return Err(ProviderError::EmptyCompletion);
    }

    debug!(
        model = %body.model,
        prompt_tokens = usage.prompt_tokens,
        completion_tokens = usage.completion_tokens,
        "completion received"
    );

    Ok(CompletionResponse {
        content,
        usage,
        model: body.model,
    })
}
