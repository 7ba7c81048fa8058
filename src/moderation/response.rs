// Provider response decoding.
//
// LLM gateways wrap the answer text in a handful of JSON layouts. Each
// layout is one AnswerShape; decoding tries them in a fixed order and takes
// the first that yields text. If none does, the payload is malformed.

use serde_json::Value;

use super::traits::ProviderError;
use crate::output::truncate_chars;

/// A known location of the answer text inside a provider payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnswerShape {
    /// `choices[0].message.content` (OpenAI-style chat completions)
    ChatMessage,
    /// `result` (string, or any other JSON value rendered as text)
    Result,
    /// `output` as a plain string
    OutputString,
    /// `output.text`
    OutputText,
    /// `choices[0].text` (legacy completions)
    ChoiceText,
    /// `candidates[0].content.parts[*].text` (Gemini)
    GeminiCandidate,
}

impl AnswerShape {
    /// Every shape, in decoding priority order.
    pub const ALL: [AnswerShape; 6] = [
        AnswerShape::ChatMessage,
        AnswerShape::Result,
        AnswerShape::OutputString,
        AnswerShape::OutputText,
        AnswerShape::ChoiceText,
        AnswerShape::GeminiCandidate,
    ];

    /// Pull the answer text out of `payload` if it has this shape.
    pub fn extract(self, payload: &Value) -> Option<String> {
        match self {
            AnswerShape::ChatMessage => payload
                .pointer("/choices/0/message/content")
                .and_then(Value::as_str)
                .map(str::to_string),
            AnswerShape::Result => match payload.get("result")? {
                Value::Null => None,
                Value::String(s) => Some(s.clone()),
                other => Some(other.to_string()),
            },
            AnswerShape::OutputString => payload
                .get("output")
                .and_then(Value::as_str)
                .map(str::to_string),
            AnswerShape::OutputText => payload
                .pointer("/output/text")
                .and_then(Value::as_str)
                .map(str::to_string),
            AnswerShape::ChoiceText => payload
                .pointer("/choices/0/text")
                .and_then(Value::as_str)
                .map(str::to_string),
            AnswerShape::GeminiCandidate => {
                let parts = payload
                    .pointer("/candidates/0/content/parts")?
                    .as_array()?;
                let text: String = parts
                    .iter()
                    .filter_map(|p| p.get("text").and_then(Value::as_str))
                    .collect();
                if parts.is_empty() {
                    None
                } else {
                    Some(text)
                }
            }
        }
    }
}

/// Decode the answer text from a provider payload.
pub fn extract_answer(payload: &Value) -> Result<String, ProviderError> {
    AnswerShape::ALL
        .iter()
        .find_map(|shape| shape.extract(payload))
        .ok_or_else(|| {
            ProviderError::Malformed(format!(
                "no known answer field in {}",
                truncate_chars(&payload.to_string(), 200)
            ))
        })
}
