use anyhow::{Context, Result, bail};
use colored::*;
use serde::Deserialize;
use std::time::Duration;

/// Produces the one-line `@brief` summary stamped into a header file.
///
/// The renderer only ever sees this trait, so the network-backed
/// implementation stays swappable with the deterministic one.
pub trait Brief {
    fn brief(&self, file_name: &str, content: &str) -> String;
}

/// Deterministic fallback: derive the summary from the file name.
pub struct FilenameBrief;

impl Brief for FilenameBrief {
    fn brief(&self, file_name: &str, _content: &str) -> String {
        filename_brief(file_name)
    }
}

/// `move_generator.hpp` -> `Move generator`.
pub fn filename_brief(file_name: &str) -> String {
    let stem = file_name
        .rsplit_once('.')
        .map(|(stem, _)| stem)
        .unwrap_or(file_name);
    let spaced = stem.replace(['_', '-'], " ");

    let mut chars = spaced.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => spaced,
    }
}

const CHAT_COMPLETIONS_URL: &str = "https://api.openai.com/v1/chat/completions";
const CONTENT_CAP_BYTES: usize = 20_000;
const REQUEST_TIMEOUT_SECS: u64 = 20;

const SYSTEM_PROMPT: &str = "You are a senior C++ engineer. Given a C/C++ header or source \
     file, produce a single concise doxygen @brief line that describes the file's purpose. \
     Keep it impersonal, at most 18 words, no trailing period, no code fences.";

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatMessage,
}

#[derive(Deserialize)]
struct ChatMessage {
    content: Option<String>,
}

/// Summarizes file content through an OpenAI-compatible chat endpoint.
/// Every failure mode (network, auth, malformed payload, empty completion)
/// logs a notice and falls back to the filename brief.
pub struct ApiBrief {
    agent: ureq::Agent,
    api_key: String,
    model: String,
}

impl ApiBrief {
    pub fn new(api_key: String, model: String) -> Self {
        let agent = ureq::Agent::config_builder()
            .timeout_global(Some(Duration::from_secs(REQUEST_TIMEOUT_SECS)))
            .build()
            .into();
        Self {
            agent,
            api_key,
            model,
        }
    }

    fn request_brief(&self, file_name: &str, content: &str) -> Result<String> {
        let slice = head_on_char_boundary(content, CONTENT_CAP_BYTES);
        let payload = serde_json::json!({
            "model": self.model,
            "messages": [
                { "role": "system", "content": SYSTEM_PROMPT },
                {
                    "role": "user",
                    "content": format!(
                        "Filename: {file_name}\n\nFile contents (truncated):\n{slice}"
                    ),
                },
            ],
        });

        let mut response = self
            .agent
            .post(CHAT_COMPLETIONS_URL)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .send_json(&payload)
            .context("chat completion request failed")?;

        let parsed: ChatResponse = response
            .body_mut()
            .read_json()
            .context("unexpected completion payload")?;

        let line = parsed
            .choices
            .first()
            .and_then(|choice| choice.message.content.as_deref())
            .unwrap_or_default();
        let line = normalize_brief(line);
        if line.is_empty() {
            bail!("empty completion");
        }
        Ok(line)
    }
}

impl Brief for ApiBrief {
    fn brief(&self, file_name: &str, content: &str) -> String {
        match self.request_brief(file_name, content) {
            Ok(line) => line,
            Err(e) => {
                println!(
                    "{} Brief generation failed for {file_name}: {e:#}",
                    "!".yellow()
                );
                filename_brief(file_name)
            }
        }
    }
}

fn head_on_char_boundary(content: &str, cap: usize) -> &str {
    if content.len() <= cap {
        return content;
    }
    let mut end = cap;
    while !content.is_char_boundary(end) {
        end -= 1;
    }
    &content[..end]
}

fn normalize_brief(line: &str) -> String {
    let collapsed = line.split_whitespace().collect::<Vec<_>>().join(" ");
    collapsed.trim_end_matches('.').to_string()
}
