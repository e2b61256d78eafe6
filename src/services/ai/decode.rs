use crate::errors::AppError;
use crate::models::{CompletionResponse, ProviderResponse};

/// Unknown fields are ignored and missing ones default; type mismatches fail.
pub fn decode_chat_response(raw: &str) -> Result<ProviderResponse, AppError> {
    serde_json::from_str(raw).map_err(AppError::Decode)
}

pub fn first_reply(response: ProviderResponse) -> Result<String, AppError> {
    response
        .choices
        .into_iter()
        .next()
        .map(|choice| choice.message.content)
        .ok_or(AppError::EmptyResult)
}

pub fn chat_reply(raw: &str) -> Result<String, AppError> {
    first_reply(decode_chat_response(raw)?)
}

pub fn decode_completion_response(raw: &str) -> Result<CompletionResponse, AppError> {
    serde_json::from_str(raw).map_err(AppError::Decode)
}

pub fn completion_reply(raw: &str) -> Result<String, AppError> {
    decode_completion_response(raw)?
        .choices
        .into_iter()
        .next()
        .map(|choice| choice.text)
        .ok_or(AppError::EmptyResult)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chat_reply_takes_first_choice() {
        let raw = r#"{"choices":[
            {"index":0,"message":{"role":"assistant","content":"first"},"finish_reason":"stop"},
            {"index":1,"message":{"role":"assistant","content":"second"},"finish_reason":"stop"}
        ]}"#;
        assert_eq!(chat_reply(raw).unwrap(), "first");
    }

    #[test]
    fn test_zero_choices_is_empty_result() {
        let raw = r#"{"id":"x","choices":[]}"#;
        let resp = decode_chat_response(raw).unwrap();
        assert!(resp.choices.is_empty());
        assert!(matches!(first_reply(resp), Err(AppError::EmptyResult)));
    }

    #[test]
    fn test_missing_fields_default() {
        let resp = decode_chat_response("{}").unwrap();
        assert_eq!(resp, ProviderResponse::default());
    }

    #[test]
    fn test_invalid_json_is_decode_error() {
        assert!(matches!(chat_reply("not json"), Err(AppError::Decode(_))));
    }

    #[test]
    fn test_mismatched_type_is_decode_error() {
        let raw = r#"{"choices":"none"}"#;
        assert!(matches!(decode_chat_response(raw), Err(AppError::Decode(_))));
    }

    #[test]
    fn test_completion_reply() {
        let raw = r#"{"id":"cmpl-1","object":"text_completion","created":1,"model":"text-davinci-003",
            "choices":[{"text":"\n\nHello there","index":0,"logprobs":null,"finish_reason":"length"}],
            "usage":{"prompt_tokens":5,"completion_tokens":7,"total_tokens":12}}"#;
        assert_eq!(completion_reply(raw).unwrap(), "\n\nHello there");
    }

    #[test]
    fn test_completion_zero_choices() {
        assert!(matches!(
            completion_reply(r#"{"choices":[]}"#),
            Err(AppError::EmptyResult)
        ));
    }
}
