//! Tickspot HTTP client: login plus one form POST per timecard entry.

use std::time::Duration;

use ureq::Agent;

use crate::config::Endpoints;
use crate::error::TickError;
use crate::sheet::DateEntry;

use super::token;

/// An authenticated Tickspot session. The agent's cookie store holds the
/// login cookies; the token goes into the `x-csrf-token` header of every
/// entry POST. Lives in memory for one run, never persisted.
#[derive(Debug)]
pub(crate) struct Session {
    pub(crate) csrf_token: String,
}

/// Outcome of a single entry POST. Reported the moment it happens; outcomes
/// are never aggregated into a summary.
#[derive(Debug, PartialEq, Eq)]
pub(crate) enum SubmissionOutcome {
    Created,
    HttpStatus(u16),
    Transport(String),
}

pub(crate) struct TickClient {
    agent: Agent,
    endpoints: Endpoints,
}

impl TickClient {
    pub(crate) fn new(endpoints: Endpoints) -> Self {
        let config = Agent::config_builder()
            .http_status_as_error(false)
            .timeout_global(Some(Duration::from_secs(30)))
            .build();
        Self {
            agent: Agent::new_with_config(config),
            endpoints,
        }
    }

    /// Sign in and pull the CSRF token out of the login page. Success is
    /// strictly HTTP 200. The agent picks up the session cookies as a side
    /// effect; they ride along on every later request.
    pub(crate) fn login(&self, email: &str, password: &str) -> Result<Session, TickError> {
        let mut response = self.agent.post(&self.endpoints.login_url).send_form([
            ("user_login", email),
            ("user_password", password),
            ("commit", "Sign In"),
            ("remember[password]", "1"),
        ])?;

        let status = response.status().as_u16();
        if status != 200 {
            return Err(TickError::LoginStatus(status));
        }

        let body = response.body_mut().read_to_string()?;
        let csrf_token = token::extract_csrf(&body).ok_or(TickError::TokenMissing)?;
        Ok(Session { csrf_token })
    }

    /// POST one timecard entry per date, in input order, one at a time.
    /// Failures are reported and skipped; no retry, no abort.
    pub(crate) fn submit(&self, dates: &[DateEntry], session: &Session, task_id: &str, hours: f64) {
        for date in dates {
            let formatted = date.entry_format();
            match self.submit_one(&formatted, session, task_id, hours) {
                SubmissionOutcome::Created => {
                    println!("Successful request for the date {formatted}");
                }
                SubmissionOutcome::HttpStatus(status) => {
                    println!("Request error for the date {formatted}. Status code: {status}");
                }
                SubmissionOutcome::Transport(e) => {
                    println!("Error making the request for the date {formatted}: {e}");
                }
            }
        }
    }

    fn submit_one(
        &self,
        entry_date: &str,
        session: &Session,
        task_id: &str,
        hours: f64,
    ) -> SubmissionOutcome {
        let hours = format!("{hours}");
        let result = self
            .agent
            .post(&self.endpoints.entries_url)
            .header("x-csrf-token", &session.csrf_token)
            .send_form([
                ("entry[id]", ""),
                ("timer[id]", ""),
                ("entry[date]", entry_date),
                ("task[id]", task_id),
                ("entry[hours]", hours.as_str()),
                ("entry[notes]", ""),
                ("commit", "Enter Time"),
            ]);

        match result {
            Ok(response) if response.status() == 200 => SubmissionOutcome::Created,
            Ok(response) => SubmissionOutcome::HttpStatus(response.status().as_u16()),
            Err(e) => SubmissionOutcome::Transport(e.to_string()),
        }
    }
}
