use leptos::prelude::ServerFnError;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// External mail relay the server forwards submissions to.
pub const CONTACT_RELAY_URL: &str = "https://relay.noravance.dev/send";

pub const SEND_FAILED_MESSAGE: &str =
    "Something went wrong sending your message. Please try again.";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub message: String,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContactError {
    #[error("{0} is required")]
    MissingField(&'static str),
    #[error("mail relay rejected the message ({status})")]
    Rejected {
        status: u16,
        detail: Option<String>,
    },
    #[error("couldn't reach the mail relay")]
    Unreachable,
}

impl ContactError {
    /// Text shown to the visitor under the form. A relay detail passes
    /// through; everything else collapses into one generic line.
    pub fn user_message(&self) -> String {
        match self {
            ContactError::MissingField(field) => format!("Please fill in your {field}."),
            ContactError::Rejected {
                detail: Some(detail),
                ..
            } => detail.clone(),
            ContactError::Rejected { detail: None, .. } | ContactError::Unreachable => {
                SEND_FAILED_MESSAGE.to_string()
            }
        }
    }
}

impl ContactSubmission {
    /// Trims all three fields and rejects any that end up empty.
    pub fn new(name: &str, email: &str, message: &str) -> Result<Self, ContactError> {
        let name = name.trim();
        let email = email.trim();
        let message = message.trim();
        if name.is_empty() {
            return Err(ContactError::MissingField("name"));
        }
        if email.is_empty() {
            return Err(ContactError::MissingField("email"));
        }
        if message.is_empty() {
            return Err(ContactError::MissingField("message"));
        }
        Ok(Self {
            name: name.to_string(),
            email: email.to_string(),
            message: message.to_string(),
        })
    }
}

/// Lifecycle of the contact form, from untouched through a finished send.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SubmitStatus {
    #[default]
    Idle,
    Loading,
    Sent,
    Error(String),
}

impl SubmitStatus {
    pub fn is_loading(&self) -> bool {
        matches!(self, SubmitStatus::Loading)
    }

    /// Collapses a finished server call into the state shown to the visitor.
    pub fn settled(result: Result<(), ServerFnError>) -> Self {
        match result {
            Ok(()) => SubmitStatus::Sent,
            Err(ServerFnError::ServerError(message)) => SubmitStatus::Error(message),
            Err(_) => SubmitStatus::Error(SEND_FAILED_MESSAGE.to_string()),
        }
    }
}

#[cfg(feature = "ssr")]
#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: String,
}

/// POSTs the submission as JSON to the relay. A 2xx answer counts as
/// delivered; anything else is reported with the relay's `{"error": ...}`
/// body when one is present.
#[cfg(feature = "ssr")]
pub async fn deliver(relay_url: &str, submission: &ContactSubmission) -> Result<(), ContactError> {
    let client = reqwest::Client::new();
    let response = client
        .post(relay_url)
        .json(submission)
        .send()
        .await
        .map_err(|err| {
            tracing::warn!("contact relay unreachable: {err}");
            ContactError::Unreachable
        })?;

    let status = response.status();
    if status.is_success() {
        return Ok(());
    }
    let detail = response
        .json::<ErrorBody>()
        .await
        .ok()
        .map(|body| body.error)
        .filter(|error| !error.is_empty());
    Err(ContactError::Rejected {
        status: status.as_u16(),
        detail,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_submission_trims_whitespace() {
        let submission = ContactSubmission::new("  Ada  ", " ada@example.com ", " Hi there \n")
            .expect("valid submission");
        assert_eq!(submission.name, "Ada");
        assert_eq!(submission.email, "ada@example.com");
        assert_eq!(submission.message, "Hi there");
    }

    #[test]
    fn test_blank_fields_are_rejected() {
        assert_eq!(
            ContactSubmission::new("", "ada@example.com", "hi"),
            Err(ContactError::MissingField("name"))
        );
        assert_eq!(
            ContactSubmission::new("Ada", "   ", "hi"),
            Err(ContactError::MissingField("email"))
        );
        assert_eq!(
            ContactSubmission::new("Ada", "ada@example.com", "\n\t"),
            Err(ContactError::MissingField("message"))
        );
    }

    #[test]
    fn test_missing_field_message_names_the_field() {
        assert_eq!(
            ContactError::MissingField("email").user_message(),
            "Please fill in your email."
        );
    }

    #[test]
    fn test_relay_detail_passes_through_to_the_visitor() {
        let err = ContactError::Rejected {
            status: 422,
            detail: Some("Message looks like spam.".to_string()),
        };
        assert_eq!(err.user_message(), "Message looks like spam.");
    }

    #[test]
    fn test_detailless_rejections_share_the_generic_message() {
        // no error body means no relay detail to show, whatever the status
        for status in [400u16, 429, 500, 503] {
            let err = ContactError::Rejected {
                status,
                detail: None,
            };
            assert_eq!(err.user_message(), SEND_FAILED_MESSAGE, "status {status}");
        }
        assert_eq!(ContactError::Unreachable.user_message(), SEND_FAILED_MESSAGE);
    }

    #[test]
    fn test_status_starts_idle() {
        assert_eq!(SubmitStatus::default(), SubmitStatus::Idle);
    }

    #[test]
    fn test_loading_is_the_only_blocking_state() {
        assert!(SubmitStatus::Loading.is_loading());
        assert!(!SubmitStatus::Idle.is_loading());
        assert!(!SubmitStatus::Sent.is_loading());
        assert!(!SubmitStatus::Error("x".to_string()).is_loading());
    }

    #[test]
    fn test_settled_maps_success_to_sent() {
        assert_eq!(SubmitStatus::settled(Ok(())), SubmitStatus::Sent);
    }

    #[test]
    fn test_settled_keeps_the_server_error_message() {
        let result = Err(ServerFnError::ServerError("Inbox full.".to_string()));
        assert_eq!(
            SubmitStatus::settled(result),
            SubmitStatus::Error("Inbox full.".to_string())
        );
    }

    #[test]
    fn test_settled_masks_transport_errors() {
        let result = Err(ServerFnError::Request("tcp reset".to_string()));
        assert_eq!(
            SubmitStatus::settled(result),
            SubmitStatus::Error(SEND_FAILED_MESSAGE.to_string())
        );
    }
}

#[cfg(all(test, feature = "ssr"))]
mod delivery_tests {
    use super::*;
    use httpmock::prelude::*;

    fn submission() -> ContactSubmission {
        ContactSubmission::new("Ada", "ada@example.com", "Hello there").expect("valid submission")
    }

    #[tokio::test]
    async fn test_delivers_the_submission_as_json() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(POST)
                .path("/send")
                .header("content-type", "application/json")
                .json_body(serde_json::json!({
                    "name": "Ada",
                    "email": "ada@example.com",
                    "message": "Hello there",
                }));
            then.status(200);
        });

        let result = deliver(&server.url("/send"), &submission()).await;

        mock.assert();
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_surfaces_the_relay_error_body() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(POST).path("/send");
            then.status(422)
                .json_body(serde_json::json!({"error": "Message looks like spam."}));
        });

        let err = deliver(&server.url("/send"), &submission())
            .await
            .expect_err("relay rejected the message");

        assert_eq!(
            err,
            ContactError::Rejected {
                status: 422,
                detail: Some("Message looks like spam.".to_string()),
            }
        );
        assert_eq!(err.user_message(), "Message looks like spam.");
    }

    #[tokio::test]
    async fn test_rejection_without_a_body_keeps_the_generic_message() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(POST).path("/send");
            then.status(500);
        });

        let err = deliver(&server.url("/send"), &submission())
            .await
            .expect_err("relay rejected the message");

        assert_eq!(
            err,
            ContactError::Rejected {
                status: 500,
                detail: None,
            }
        );
        assert_eq!(err.user_message(), SEND_FAILED_MESSAGE);
    }

    #[tokio::test]
    async fn test_unreachable_relay_is_reported_as_such() {
        let err = deliver("http://127.0.0.1:9/send", &submission())
            .await
            .expect_err("nothing is listening there");
        assert_eq!(err, ContactError::Unreachable);
    }
}
