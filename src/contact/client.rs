//! HTTP client for contact form delivery.
//!
//! Posts the form field set as `multipart/form-data` to the form action and
//! asks for a JSON response. Only the status decides the outcome; an error
//! body is parsed for logging and otherwise ignored.

use super::{ContactError, ContactForm};
use log::*;
use reqwest::{header::ACCEPT, multipart, Url};
use serde::Deserialize;

/// Error payload returned by typical form backends.
///
#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    errors: Vec<ErrorEntry>,
    #[serde(default)]
    error: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ErrorEntry {
    message: String,
}

/// Delivers contact form submissions to the configured form action.
///
pub struct ContactClient {
    endpoint: Option<Url>,
    http_client: reqwest::Client,
}

impl ContactClient {
    /// Returns a new instance posting to the given endpoint. Without an
    /// endpoint every delivery fails with [`ContactError::EndpointNotSet`].
    ///
    pub fn new(endpoint: Option<&str>) -> Result<Self, ContactError> {
        let endpoint = match endpoint {
            Some(raw) => Some(
                Url::parse(raw).map_err(|_| ContactError::InvalidEndpoint(raw.to_owned()))?,
            ),
            None => None,
        };
        let http_client = reqwest::Client::builder().build()?;
        Ok(ContactClient {
            endpoint,
            http_client,
        })
    }

    pub fn endpoint(&self) -> Option<&Url> {
        self.endpoint.as_ref()
    }

    /// Post the form once. Returns `Ok` for any 2xx status.
    ///
    pub async fn deliver(&self, form: &ContactForm) -> Result<(), ContactError> {
        let endpoint = self.endpoint.as_ref().ok_or(ContactError::EndpointNotSet)?;
        let body = form
            .fields()
            .into_iter()
            .fold(multipart::Form::new(), |body, (name, value)| {
                body.text(name, value.to_owned())
            });

        debug!("Posting contact form to {}...", endpoint);
        let response = self
            .http_client
            .post(endpoint.clone())
            .header(ACCEPT, "application/json")
            .multipart(body)
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            debug!("Contact form accepted with status {}.", status);
            return Ok(());
        }

        let response_text = response
            .text()
            .await
            .unwrap_or_else(|_| String::from("Unable to read response"));
        let message = rejection_message(&response_text)
            .unwrap_or_else(|| status.canonical_reason().unwrap_or("Unknown status").to_string());
        debug!("Contact form rejected with status {}: {}", status, message);
        Err(ContactError::Rejected {
            status: status.as_u16(),
            message,
        })
    }
}

/// Extract the error messages of a JSON error body, if it is one.
///
fn rejection_message(body: &str) -> Option<String> {
    let parsed: ErrorBody = serde_json::from_str(body).ok()?;
    let mut messages: Vec<String> = parsed.errors.into_iter().map(|e| e.message).collect();
    if let Some(error) = parsed.error {
        messages.push(error);
    }
    if messages.is_empty() {
        None
    } else {
        Some(messages.join("; "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Result;
    use fake::faker::internet::en::SafeEmail;
    use fake::faker::lorem::en::Sentence;
    use fake::faker::name::en::Name;
    use fake::Fake;
    use httpmock::MockServer;
    use serde_json::json;

    fn fake_form() -> ContactForm {
        ContactForm {
            name: Name().fake(),
            email: SafeEmail().fake(),
            message: Sentence(3..8).fake(),
            honeypot: String::new(),
        }
    }

    #[tokio::test]
    async fn deliver_success() -> Result<()> {
        let form = fake_form();
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method("POST")
                    .path("/f/contact")
                    .header("Accept", "application/json")
                    .header_exists("Content-Type")
                    .body_contains("name=\"email\"")
                    .body_contains(&form.email)
                    .body_contains("name=\"honeypot\"");
                then.status(200).json_body(json!({ "ok": true }));
            })
            .await;

        let client = ContactClient::new(Some(server.url("/f/contact").as_str()))?;
        client.deliver(&form).await?;
        mock.assert_async().await;
        Ok(())
    }

    #[tokio::test]
    async fn deliver_rejected() -> Result<()> {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method("POST").path("/f/contact");
                then.status(422).json_body(json!({
                    "errors": [{ "field": "email", "message": "should be an email" }]
                }));
            })
            .await;

        let client = ContactClient::new(Some(server.url("/f/contact").as_str()))?;
        let error = client.deliver(&fake_form()).await.unwrap_err();
        mock.assert_async().await;
        match error {
            ContactError::Rejected { status, message } => {
                assert_eq!(status, 422);
                assert_eq!(message, "should be an email");
            }
            other => panic!("unexpected error: {}", other),
        }
        Ok(())
    }

    #[tokio::test]
    async fn deliver_rejected_without_json_body() -> Result<()> {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method("POST").path("/f/contact");
                then.status(500).body("<html>oops</html>");
            })
            .await;

        let client = ContactClient::new(Some(server.url("/f/contact").as_str()))?;
        let error = client.deliver(&fake_form()).await.unwrap_err();
        mock.assert_async().await;
        assert!(error.is_rejection());
        assert!(error.to_string().contains("500"));
        Ok(())
    }

    #[tokio::test]
    async fn deliver_transport_failure() -> Result<()> {
        // Nothing listens on port 1.
        let client = ContactClient::new(Some("http://127.0.0.1:1/f/contact"))?;
        let error = client.deliver(&fake_form()).await.unwrap_err();
        assert!(matches!(error, ContactError::Transport(_)));
        Ok(())
    }

    #[tokio::test]
    async fn deliver_without_endpoint() -> Result<()> {
        let client = ContactClient::new(None)?;
        let error = client.deliver(&fake_form()).await.unwrap_err();
        assert!(matches!(error, ContactError::EndpointNotSet));
        Ok(())
    }

    #[test]
    fn test_invalid_endpoint() {
        let result = ContactClient::new(Some("not a url"));
        assert!(matches!(result, Err(ContactError::InvalidEndpoint(_))));
    }

    #[test]
    fn test_rejection_message() {
        assert_eq!(
            rejection_message(r#"{"errors":[{"message":"a"},{"message":"b"}]}"#),
            Some("a; b".to_string())
        );
        assert_eq!(
            rejection_message(r#"{"error":"form not found"}"#),
            Some("form not found".to_string())
        );
        assert_eq!(rejection_message(r#"{"ok":false}"#), None);
        assert_eq!(rejection_message("not json"), None);
    }
}
