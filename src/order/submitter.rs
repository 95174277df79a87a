//! The order write: one POST per submission.

use std::sync::Arc;

use thiserror::Error;

use crate::clients::{HttpError, HttpMethod, HttpRequest, Transport};
use crate::config::StorefrontConfig;
use crate::envelope::ResponseEnvelope;
use crate::order::{OrderPage, OrderPayload, SubmissionOutcome};

/// The service's acknowledgement of a recorded order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OrderReceipt {
    /// The service's message, if it sent one.
    pub message: Option<String>,
}

/// Errors returned by [`OrderSubmitter::send`].
#[derive(Debug, Error)]
pub enum OrderError {
    /// The service answered without `status: "SUCCESS"`.
    #[error("Order rejected: {}", .message.as_deref().unwrap_or("no message"))]
    Rejected {
        /// The service's message, if it sent one.
        message: Option<String>,
    },

    /// The payload could not be serialized.
    #[error("Failed to encode order: {0}")]
    Encode(#[source] serde_json::Error),

    /// The request failed or the response could not be decoded.
    #[error(transparent)]
    Http(#[from] HttpError),
}

/// Sends order forms to the endpoint.
///
/// # Example
///
/// ```rust,ignore
/// use sheet_storefront::Storefront;
///
/// let storefront = Storefront::new(config)?;
/// let mut page = storefront.order_page("?produto=Mesa");
/// page.form_mut().set("Nome", "Ana");
///
/// let outcome = storefront.orders().submit(&mut page).await;
/// println!("{}", page.feedback().text);
/// ```
#[derive(Clone, Debug)]
pub struct OrderSubmitter {
    transport: Arc<dyn Transport>,
    config: Arc<StorefrontConfig>,
}

impl OrderSubmitter {
    /// Creates a submitter sending through `transport`.
    #[must_use]
    pub fn new(transport: Arc<dyn Transport>, config: Arc<StorefrontConfig>) -> Self {
        Self { transport, config }
    }

    /// Posts `payload` as a flat JSON object.
    ///
    /// The `Content-Type` is the configured
    /// [`order_body_type`](StorefrontConfig::order_body_type).
    ///
    /// # Errors
    ///
    /// Returns [`OrderError::Rejected`] when the service does not report
    /// `SUCCESS`, [`OrderError::Encode`] if the payload cannot be serialized,
    /// and [`OrderError::Http`] for HTTP, transport, and decoding failures.
    pub async fn send(&self, payload: &OrderPayload) -> Result<OrderReceipt, OrderError> {
        let body = payload.to_json().map_err(OrderError::Encode)?;
        let request = HttpRequest::builder(HttpMethod::Post)
            .body(body)
            .body_type(self.config.order_body_type())
            .build()
            .map_err(HttpError::from)?;

        let response = self.transport.send(request).await?;
        let envelope: ResponseEnvelope = response.json().map_err(HttpError::from)?;

        if !envelope.is_success() {
            if !envelope.is_error() {
                tracing::warn!(status = ?envelope.status, "unexpected order response status");
            }
            return Err(OrderError::Rejected {
                message: envelope.message,
            });
        }

        Ok(OrderReceipt {
            message: envelope.message,
        })
    }

    /// Submits the page's form, driving its visible state.
    ///
    /// The page enters the in-flight state before the request is sent and
    /// leaves it when the response (or failure) arrives. A page whose submit
    /// control is already disabled is left alone and nothing is sent.
    pub async fn submit(&self, page: &mut OrderPage) -> SubmissionOutcome {
        let Some(payload) = page.begin_submission() else {
            tracing::debug!("order submission already in flight");
            return SubmissionOutcome::Ignored;
        };

        let messages = self.config.messages();
        let outcome = match self.send(&payload).await {
            Ok(receipt) => SubmissionOutcome::Recorded {
                message: receipt
                    .message
                    .unwrap_or_else(|| messages.order_success.clone()),
            },
            Err(OrderError::Rejected { message }) => {
                tracing::error!(service_message = ?message, "order rejected by service");
                SubmissionOutcome::Rejected {
                    message: message.unwrap_or_else(|| messages.order_unknown_error.clone()),
                }
            }
            Err(e) => {
                tracing::error!(error = %e, "order submission failed");
                SubmissionOutcome::Failed {
                    message: messages.order_connection(&e),
                }
            }
        };

        page.finish(&outcome);
        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::stub::StubTransport;
    use crate::clients::{DataType, InvalidHttpRequestError};
    use crate::config::{EndpointUrl, Messages};
    use crate::order::{FeedbackTone, OrderForm};
    use serde_json::json;

    fn submitter(stub: StubTransport, body_type: DataType) -> (Arc<StubTransport>, OrderSubmitter) {
        let stub = Arc::new(stub);
        let config = StorefrontConfig::builder()
            .endpoint(EndpointUrl::new("https://script.example.com/exec").unwrap())
            .order_body_type(body_type)
            .build()
            .unwrap();
        let submitter = OrderSubmitter::new(stub.clone(), Arc::new(config));
        (stub, submitter)
    }

    fn mesa_page() -> OrderPage {
        let mut page = OrderPage::new(OrderForm::new(["Nome", "Produto"]), Messages::default());
        page.form_mut().set("Nome", "Mesa");
        page.form_mut().set("Produto", "Mesa");
        page
    }

    #[tokio::test]
    async fn test_submit_posts_form_as_json() {
        let (stub, submitter) = submitter(
            StubTransport::replying(200, json!({"status": "SUCCESS"})),
            DataType::Json,
        );
        let mut page = mesa_page();

        submitter.submit(&mut page).await;

        let requests = stub.requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].http_method, HttpMethod::Post);
        assert_eq!(requests[0].body_type, Some(DataType::Json));
        let body: serde_json::Value =
            serde_json::from_str(requests[0].body.as_deref().unwrap()).unwrap();
        assert_eq!(body, json!({"Nome": "Mesa", "Produto": "Mesa"}));
    }

    #[tokio::test]
    async fn test_submit_uses_configured_body_type() {
        let (stub, submitter) = submitter(
            StubTransport::replying(200, json!({"status": "SUCCESS"})),
            DataType::PlainText,
        );

        submitter.submit(&mut mesa_page()).await;

        assert_eq!(stub.requests()[0].body_type, Some(DataType::PlainText));
    }

    #[tokio::test]
    async fn test_submit_success_resets_page() {
        let (_, submitter) = submitter(
            StubTransport::replying(200, json!({"status": "SUCCESS", "message": "Registada!"})),
            DataType::Json,
        );
        let mut page = mesa_page();

        let outcome = submitter.submit(&mut page).await;

        assert_eq!(
            outcome,
            SubmissionOutcome::Recorded {
                message: "Registada!".to_string()
            }
        );
        assert!(page.form().fields().iter().all(|f| f.value.is_empty()));
        assert!(page.submit_control().enabled);
        assert_eq!(page.submit_control().label, "Submeter Encomenda");
        assert_eq!(page.feedback().text, "Registada!");
        assert_eq!(page.feedback().tone, FeedbackTone::Success);
    }

    #[tokio::test]
    async fn test_submit_success_without_message_uses_default() {
        let (_, submitter) = submitter(
            StubTransport::replying(200, json!({"status": "SUCCESS"})),
            DataType::Json,
        );
        let mut page = mesa_page();

        submitter.submit(&mut page).await;

        assert_eq!(page.feedback().text, "Encomenda registada com sucesso!");
    }

    #[tokio::test]
    async fn test_submit_rejection_shows_service_message() {
        let (_, submitter) = submitter(
            StubTransport::replying(200, json!({"status": "ERROR", "message": "Folha bloqueada"})),
            DataType::Json,
        );
        let mut page = mesa_page();

        let outcome = submitter.submit(&mut page).await;

        assert!(matches!(outcome, SubmissionOutcome::Rejected { .. }));
        assert_eq!(page.feedback().text, "Folha bloqueada");
        assert_eq!(page.feedback().tone, FeedbackTone::Error);
        assert!(page.submit_control().enabled);
        assert_eq!(page.form().value("Nome"), Some("Mesa"));
    }

    #[tokio::test]
    async fn test_submit_unknown_status_without_message_uses_default() {
        let (_, submitter) = submitter(StubTransport::replying(200, json!({})), DataType::Json);
        let mut page = mesa_page();

        submitter.submit(&mut page).await;

        assert_eq!(
            page.feedback().text,
            "Erro desconhecido ao registar encomenda."
        );
    }

    #[tokio::test]
    async fn test_submit_http_failure_restores_control() {
        let (_, submitter) = submitter(StubTransport::replying(500, json!({})), DataType::Json);
        let mut page = mesa_page();

        let outcome = submitter.submit(&mut page).await;

        assert!(matches!(outcome, SubmissionOutcome::Failed { .. }));
        assert!(page
            .feedback()
            .text
            .starts_with("Falha na comunicação com o servidor: "));
        assert!(page.feedback().text.contains("500"));
        assert!(page.submit_control().enabled);
        assert_eq!(page.submit_control().label, "Submeter Encomenda");
    }

    #[tokio::test]
    async fn test_submit_transport_failure_includes_error_text() {
        let (_, submitter) = submitter(
            StubTransport::failing(HttpError::from(InvalidHttpRequestError::MissingBodyType)),
            DataType::Json,
        );
        let mut page = mesa_page();

        submitter.submit(&mut page).await;

        assert_eq!(
            page.feedback().text,
            "Falha na comunicação com o servidor: Cannot set a body without also setting body_type."
        );
    }

    #[tokio::test]
    async fn test_submit_while_in_flight_sends_nothing() {
        let (stub, submitter) = submitter(StubTransport::default(), DataType::Json);
        let mut page = mesa_page();
        page.begin_submission();

        let outcome = submitter.submit(&mut page).await;

        assert_eq!(outcome, SubmissionOutcome::Ignored);
        assert!(stub.requests().is_empty());
    }

    #[tokio::test]
    async fn test_send_returns_receipt() {
        let (_, submitter) = submitter(
            StubTransport::replying(200, json!({"status": "SUCCESS", "message": "ok"})),
            DataType::Json,
        );
        let payload: OrderPayload = [("Nome", "Ana")].into_iter().collect();

        let receipt = submitter.send(&payload).await.unwrap();

        assert_eq!(receipt.message.as_deref(), Some("ok"));
    }

    #[tokio::test]
    async fn test_send_rejection_error_message() {
        let (_, submitter) = submitter(
            StubTransport::replying(200, json!({"status": "ERROR"})),
            DataType::Json,
        );

        let error = submitter.send(&OrderPayload::default()).await.unwrap_err();

        assert!(matches!(error, OrderError::Rejected { message: None }));
        assert_eq!(error.to_string(), "Order rejected: no message");
    }
}
