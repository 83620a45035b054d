//! Templated email dispatch through the transactional-mail HTTP API.
//!
//! Thin by design: this module only constructs the send payload and
//! submits it. Placeholder merging happens server-side in the template
//! engine. Delivery failure is surfaced as a typed error for the caller
//! to log; it must never abort the run.

use crate::{
    config::MailConfig,
    error::{ReportError, ReportResult},
    report::Substitution,
};
use chrono::{Local, NaiveDate};
use serde::Serialize;

#[derive(Debug, Serialize)]
struct Address<'a> {
    email: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<&'a str>,
}

#[derive(Debug, Serialize)]
struct Content<'a> {
    #[serde(rename = "type")]
    content_type: &'a str,
    value: &'a str,
}

#[derive(Debug, Serialize)]
struct MailPayload<'a> {
    from: Address<'a>,
    subject: &'a str,
    to: Address<'a>,
    substitutions: &'a [Substitution],
    content: Content<'a>,
    #[serde(rename = "templateId")]
    template_id: &'a str,
}

pub struct MailDispatcher {
    config: MailConfig,
    http: reqwest::blocking::Client,
}

impl MailDispatcher {
    /// One client per run; relies on the client library's default
    /// timeout behavior.
    pub fn new(config: MailConfig) -> Self {
        Self {
            http: reqwest::blocking::Client::new(),
            config,
        }
    }

    /// Subject line for a given report date, e.g.
    /// "Daily Sales Report for 25.08.2026".
    pub fn subject_line(&self, date: NaiveDate) -> String {
        format!("{} {}", self.config.subject_prefix, date.format("%d.%m.%Y"))
    }

    /// The JSON payload that would be submitted for this report.
    pub fn payload_json(
        &self,
        subject: &str,
        substitutions: &[Substitution],
        body_html: &str,
    ) -> ReportResult<serde_json::Value> {
        let payload = MailPayload {
            from: Address {
                email: &self.config.from_mail,
                name: Some(&self.config.from_name),
            },
            subject,
            to: Address {
                email: &self.config.to_mail,
                name: None,
            },
            substitutions,
            content: Content {
                content_type: "text/html",
                value: body_html,
            },
            template_id: &self.config.template_id,
        };
        Ok(serde_json::to_value(&payload)?)
    }

    /// Submit today's report. Best-effort: one attempt, no retry.
    pub fn send_report(
        &self,
        substitutions: &[Substitution],
        body_html: &str,
    ) -> ReportResult<()> {
        let subject = self.subject_line(Local::now().date_naive());
        let payload = self.payload_json(&subject, substitutions, body_html)?;
        log::debug!("mail payload: {payload}");

        let response = self
            .http
            .post(&self.config.api_url)
            .bearer_auth(&self.config.api_key)
            .json(&payload)
            .send()?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(ReportError::MailRejected {
                status: status.as_u16(),
                body,
            });
        }
        log::info!("daily report sent to {}", self.config.to_mail);
        Ok(())
    }
}
