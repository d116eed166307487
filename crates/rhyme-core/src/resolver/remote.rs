//! Remote grapheme-to-phoneme client.
//!
//! The service answers `GET /api/v1/g2p?text=..&in-lang=..&out-lang=..` with
//! `{"input-text": "...", "output-text": "K AE T"}`. Output may lack stress
//! digits; those are synthesized with `add_stress_markers`.

use std::time::Duration;

use serde::Deserialize;

use crate::phoneme::{add_stress_markers, has_stress_markers, PhonemeError, Pronunciation};
use crate::settings::RemoteSettings;

#[derive(Debug, thiserror::Error)]
pub enum RemoteError {
    #[error("HTTP error for {word:?}: {reason}")]
    Http { word: String, reason: String },
    #[error("unexpected status {status} for {word:?}")]
    Status { word: String, status: u16 },
    #[error("invalid response for {word:?}: {reason}")]
    InvalidResponse { word: String, reason: String },
    #[error("empty phoneme string for {word:?}")]
    Empty { word: String },
    #[error("unparseable phonemes for {word:?}: {source}")]
    Phonemes {
        word: String,
        #[source]
        source: PhonemeError,
    },
}

/// A grapheme-to-phoneme service.
pub trait G2pClient: Send + Sync {
    fn fetch(&self, word: &str) -> Result<Pronunciation, RemoteError>;
}

#[derive(Deserialize)]
struct G2pResponse {
    #[serde(rename = "output-text")]
    output_text: Option<String>,
}

pub struct HttpG2pClient {
    agent: ureq::Agent,
    endpoint: String,
    in_lang: String,
    out_lang: String,
}

impl HttpG2pClient {
    pub fn new(config: &RemoteSettings) -> Self {
        let agent: ureq::Agent = ureq::Agent::config_builder()
            .timeout_global(Some(Duration::from_millis(config.timeout_ms)))
            .build()
            .into();
        Self {
            agent,
            endpoint: format!("{}/api/v1/g2p", config.base_url.trim_end_matches('/')),
            in_lang: config.in_lang.clone(),
            out_lang: config.out_lang.clone(),
        }
    }

    /// Client for `base_url` with the remaining settings from `config`.
    pub fn with_base_url(config: &RemoteSettings, base_url: &str) -> Self {
        let mut config = config.clone();
        config.base_url = base_url.to_string();
        Self::new(&config)
    }
}

impl G2pClient for HttpG2pClient {
    fn fetch(&self, word: &str) -> Result<Pronunciation, RemoteError> {
        let response = self
            .agent
            .get(&self.endpoint)
            .query("text", word)
            .query("in-lang", &self.in_lang)
            .query("out-lang", &self.out_lang)
            .call()
            .map_err(|e| match e {
                ureq::Error::StatusCode(status) => RemoteError::Status {
                    word: word.to_string(),
                    status,
                },
                other => RemoteError::Http {
                    word: word.to_string(),
                    reason: other.to_string(),
                },
            })?;
        let body = response
            .into_body()
            .read_to_string()
            .map_err(|e| RemoteError::Http {
                word: word.to_string(),
                reason: e.to_string(),
            })?;
        parse_response(word, &body)
    }
}

/// Parse a G2P JSON body into a stress-marked pronunciation.
pub(crate) fn parse_response(word: &str, body: &str) -> Result<Pronunciation, RemoteError> {
    let parsed: G2pResponse =
        serde_json::from_str(body).map_err(|e| RemoteError::InvalidResponse {
            word: word.to_string(),
            reason: e.to_string(),
        })?;
    let Some(output) = parsed.output_text else {
        return Err(RemoteError::InvalidResponse {
            word: word.to_string(),
            reason: "missing output-text".to_string(),
        });
    };
    if output.trim().is_empty() {
        return Err(RemoteError::Empty {
            word: word.to_string(),
        });
    }
    let pron = Pronunciation::parse(&output).map_err(|source| RemoteError::Phonemes {
        word: word.to_string(),
        source,
    })?;
    if has_stress_markers(pron.phonemes()) {
        return Ok(pron);
    }
    Pronunciation::new(add_stress_markers(pron.phonemes())).map_err(|source| {
        RemoteError::Phonemes {
            word: word.to_string(),
            source,
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_stressed_output() {
        let pron = parse_response(
            "glizzy",
            r#"{"input-text": "glizzy", "output-text": "G L IH1 Z IY0 "}"#,
        )
        .unwrap();
        assert_eq!(pron.to_string(), "G L IH1 Z IY0");
    }

    #[test]
    fn test_parse_unstressed_output_adds_markers() {
        let pron = parse_response("bando", r#"{"output-text": "B AE N D OW"}"#).unwrap();
        assert_eq!(pron.to_string(), "B AE1 N D OW0");
    }

    #[test]
    fn test_empty_output() {
        let err = parse_response("zzz", r#"{"output-text": "   "}"#).unwrap_err();
        assert!(matches!(err, RemoteError::Empty { .. }));
    }

    #[test]
    fn test_missing_output_field() {
        let err = parse_response("zzz", r#"{"input-text": "zzz"}"#).unwrap_err();
        assert!(matches!(err, RemoteError::InvalidResponse { .. }));
    }

    #[test]
    fn test_malformed_json() {
        let err = parse_response("zzz", "<html>502</html>").unwrap_err();
        assert!(matches!(err, RemoteError::InvalidResponse { .. }));
    }

    #[test]
    fn test_lowercase_phonemes_rejected() {
        let err = parse_response("zzz", r#"{"output-text": "z iy"}"#).unwrap_err();
        assert!(matches!(err, RemoteError::Phonemes { .. }));
    }

    #[test]
    fn test_endpoint_trims_trailing_slash() {
        let config = crate::settings::settings().remote.clone();
        let client = HttpG2pClient::with_base_url(&config, "http://g2p.local:5000/");
        assert_eq!(client.endpoint, "http://g2p.local:5000/api/v1/g2p");
    }
}
