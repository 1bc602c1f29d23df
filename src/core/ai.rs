// gemini integration - one generateContent call per chat turn

use crate::Error;
use crate::core::relay::Generate;
use serde::{Deserialize, Serialize};

const MODEL_ID: &str = "gemini-2.5-flash";

pub struct Gemini {
    client: reqwest::Client,
    api_key: String,
}

// what we send to gemini
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct Request {
    contents: Vec<Content>,
    safety_settings: Vec<SafetySetting>,
}

#[derive(Serialize)]
struct Content {
    role: &'static str,
    parts: Vec<Part>,
}

#[derive(Serialize)]
struct Part {
    text: String,
}

// gemini's own moderation knob, on top of our keyword filter
#[derive(Serialize)]
struct SafetySetting {
    category: &'static str,
    threshold: &'static str,
}

// what gemini sends back
#[derive(Deserialize)]
struct Response {
    candidates: Option<Vec<Candidate>>,
}

#[derive(Deserialize)]
struct Candidate {
    content: CandidateContent,
}

#[derive(Deserialize)]
struct CandidateContent {
    parts: Option<Vec<CandidatePart>>,
}

#[derive(Deserialize)]
struct CandidatePart {
    text: Option<String>,
}

// error envelope, for readable failure messages
#[derive(Deserialize)]
struct ErrorResponse {
    error: ErrorDetail,
}

#[derive(Deserialize)]
struct ErrorDetail {
    message: String,
}

impl Gemini {
    /// An explicit key wins; otherwise check the usual env var names.
    pub fn new(api_key: Option<String>) -> Result<Self, Error> {
        let api_key = match api_key {
            Some(key) => key,
            None => std::env::var("GEMINI_API_KEY")
                .or_else(|_| std::env::var("GOOGLE_API_KEY"))
                .map_err(|_| Error::MissingApiKey)?,
        };

        Ok(Self {
            client: reqwest::Client::new(),
            api_key,
        })
    }

    pub async fn generate(&self, prompt: &str) -> Result<String, Error> {
        // the api key travels as a query parameter, not a header
        let url = format!(
            "https://generativelanguage.googleapis.com/v1beta/models/{MODEL_ID}:generateContent?key={}",
            self.api_key
        );

        let request = Request {
            contents: vec![Content {
                role: "user",
                parts: vec![Part {
                    text: prompt.to_string(),
                }],
            }],
            safety_settings: vec![SafetySetting {
                category: "HARM_CATEGORY_DANGEROUS_CONTENT",
                threshold: "BLOCK_LOW_AND_ABOVE",
            }],
        };

        tracing::debug!("gemini request to {MODEL_ID}: {} chars", prompt.len());

        let response = self
            .client
            .post(&url)
            .header("content-type", "application/json")
            .json(&request)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await?;

            // prefer the message out of gemini's error envelope
            if let Ok(parsed) = serde_json::from_str::<ErrorResponse>(&body) {
                return Err(Error::Api(format!("{status}: {}", parsed.error.message)));
            }

            return Err(Error::Api(format!("{status}: {body}")));
        }

        let response: Response = response.json().await?;

        // text lives at candidates[0].content.parts[0].text; any missing
        // level (e.g. blocked by the safety filter) reads as empty
        let text = response
            .candidates
            .and_then(|c| c.into_iter().next())
            .and_then(|c| c.content.parts)
            .and_then(|p| p.into_iter().next())
            .and_then(|p| p.text)
            .unwrap_or_default();

        Ok(text)
    }
}

impl Generate for Gemini {
    async fn generate(&self, prompt: &str) -> Result<String, Error> {
        Gemini::generate(self, prompt).await
    }
}
