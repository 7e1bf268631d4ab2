use crate::contact::{ContactClient, Submission};
use crate::state::State;
use anyhow::Result;
use log::*;
use std::error::Error as _;
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::Mutex;

/// Specify different network event types.
///
#[derive(Debug, Clone)]
pub enum Event {
    SubmitContact(Submission),
}

/// Specify struct for managing state with network events.
///
pub struct Handler<'a> {
    state: &'a Arc<Mutex<State>>,
    client: &'a ContactClient,
}

impl<'a> Handler<'a> {
    /// Return new instance with reference to state.
    ///
    pub fn new(state: &'a Arc<Mutex<State>>, client: &'a ContactClient) -> Self {
        Handler { state, client }
    }

    /// Handle network events by type.
    ///
    pub async fn handle(&mut self, event: Event) -> Result<()> {
        debug!("Processing network event '{:?}'...", event);
        match event {
            Event::SubmitContact(submission) => self.submit_contact(submission).await?,
        }
        Ok(())
    }

    /// Deliver the contact form and report the outcome to state. Delivery
    /// failures end up in the submission state, not in the returned result.
    ///
    async fn submit_contact(&mut self, submission: Submission) -> Result<()> {
        let outcome = self.client.deliver(&submission.form).await;
        if let Err(e) = &outcome {
            let mut source = e.source();
            while let Some(err) = source {
                debug!("  Contact delivery error chain - Caused by: {}", err);
                source = err.source();
            }
        }
        let mut state = self.state.lock().await;
        state.resolve_contact(submission.attempt, outcome, Instant::now());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bmi::UnitSystem;
    use crate::contact::{
        SubmissionState, NETWORK_ERROR_MESSAGE, REJECTED_MESSAGE, SUCCESS_LABEL, SUCCESS_REVERT_DELAY,
    };
    use crate::logger::LogBuffer;
    use crate::ui::Theme;
    use httpmock::MockServer;
    use serde_json::json;
    use std::sync::mpsc;

    /// Type a name into a fresh state, submit it and return the queued event.
    async fn submitted_state() -> (Arc<Mutex<State>>, Event) {
        let (tx, rx) = mpsc::channel();
        let state = Arc::new(Mutex::new(State::new(
            tx,
            UnitSystem::Metric,
            Theme::default(),
            LogBuffer::default(),
        )));
        {
            let mut guard = state.lock().await;
            "Grace Hopper".chars().for_each(|c| guard.add_contact_char(c));
            assert!(guard.submit_contact().unwrap());
            assert_eq!(guard.contact().state(), SubmissionState::Loading);
        }
        let event = rx.try_recv().unwrap();
        (state, event)
    }

    #[tokio::test]
    async fn submit_contact_success() -> Result<()> {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method("POST")
                    .path("/contact")
                    .header("Accept", "application/json")
                    .body_contains("Grace Hopper");
                then.status(200).json_body(json!({ "ok": true }));
            })
            .await;

        let client = ContactClient::new(Some(server.url("/contact").as_str()))?;
        let (state, event) = submitted_state().await;
        Handler::new(&state, &client).handle(event).await?;
        mock.assert_async().await;

        let mut guard = state.lock().await;
        assert_eq!(guard.contact().state(), SubmissionState::Success);
        assert_eq!(guard.contact().button().label(), SUCCESS_LABEL);
        assert!(guard.contact().form().name.is_empty());

        guard.on_tick(Instant::now() + SUCCESS_REVERT_DELAY);
        assert_eq!(guard.contact().state(), SubmissionState::Idle);
        assert_eq!(guard.contact().button().label(), "Send");
        Ok(())
    }

    #[tokio::test]
    async fn submit_contact_rejected() -> Result<()> {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method("POST").path("/contact");
                then.status(500);
            })
            .await;

        let client = ContactClient::new(Some(server.url("/contact").as_str()))?;
        let (state, event) = submitted_state().await;
        Handler::new(&state, &client).handle(event).await?;
        mock.assert_async().await;

        let guard = state.lock().await;
        assert_eq!(guard.contact().state(), SubmissionState::Error);
        assert_eq!(guard.contact().status().text, REJECTED_MESSAGE);
        assert_eq!(guard.contact().form().name, "Grace Hopper");
        Ok(())
    }

    #[tokio::test]
    async fn submit_contact_transport_failure() -> Result<()> {
        let client = ContactClient::new(Some("http://127.0.0.1:1/contact"))?;
        let (state, event) = submitted_state().await;
        Handler::new(&state, &client).handle(event).await?;

        let guard = state.lock().await;
        assert_eq!(guard.contact().state(), SubmissionState::Error);
        assert_eq!(guard.contact().status().text, NETWORK_ERROR_MESSAGE);
        Ok(())
    }

    #[tokio::test]
    async fn honeypot_issues_no_request() -> Result<()> {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method("POST").path("/contact");
                then.status(200);
            })
            .await;

        let (tx, rx) = mpsc::channel();
        let mut state = State::new(tx, UnitSystem::Metric, Theme::default(), LogBuffer::default());
        state.contact_mut().form_mut().honeypot = "https://spam.example".to_string();
        assert!(!state.submit_contact()?);
        assert!(rx.try_recv().is_err());
        assert_eq!(state.contact().state(), SubmissionState::Idle);
        mock.assert_hits_async(0).await;
        Ok(())
    }
}
