//! The order page's visible state: form, submit control, and feedback text.

use crate::config::Messages;
use crate::order::{product_from_query, OrderForm, OrderPayload, PRODUCT_FIELD};

/// Colour-coding of the feedback text.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FeedbackTone {
    /// Nothing submitted yet.
    #[default]
    Neutral,
    /// A submission is in flight.
    Pending,
    /// The order was recorded.
    Success,
    /// The order was rejected or never arrived.
    Error,
}

/// The feedback region under the form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Feedback {
    /// The text shown.
    pub text: String,
    /// How the text is coloured.
    pub tone: FeedbackTone,
}

/// The form's submit button.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SubmitControl {
    /// Whether the button accepts clicks.
    pub enabled: bool,
    /// The button's label.
    pub label: String,
}

/// How a submission ended, as reported by
/// [`OrderSubmitter::submit`](crate::order::OrderSubmitter::submit).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmissionOutcome {
    /// A submission was already in flight; nothing was sent.
    Ignored,
    /// The service recorded the order.
    Recorded {
        /// The feedback text shown.
        message: String,
    },
    /// The service answered without `status: "SUCCESS"`.
    Rejected {
        /// The feedback text shown.
        message: String,
    },
    /// The request failed in transit or with a non-2xx status.
    Failed {
        /// The feedback text shown, including the underlying error.
        message: String,
    },
}

impl SubmissionOutcome {
    /// Returns the feedback text, or `None` for [`Ignored`](Self::Ignored).
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        match self {
            Self::Ignored => None,
            Self::Recorded { message } | Self::Rejected { message } | Self::Failed { message } => {
                Some(message.as_str())
            }
        }
    }
}

/// Everything the order page shows.
///
/// # Example
///
/// ```rust
/// use sheet_storefront::Messages;
/// use sheet_storefront::order::{OrderForm, OrderPage};
///
/// let page = OrderPage::new(OrderForm::new(["Nome", "Produto"]), Messages::default())
///     .with_query("?produto=Mesa%20Grande");
///
/// assert_eq!(page.form().value("Produto"), Some("Mesa Grande"));
/// assert!(page.submit_control().enabled);
/// ```
#[derive(Clone, Debug)]
pub struct OrderPage {
    form: OrderForm,
    submit: SubmitControl,
    feedback: Feedback,
    prefill: Option<String>,
    messages: Messages,
}

impl OrderPage {
    /// Creates an idle page around `form`.
    #[must_use]
    pub fn new(form: OrderForm, messages: Messages) -> Self {
        Self {
            form,
            submit: SubmitControl {
                enabled: true,
                label: messages.submit_label.clone(),
            },
            feedback: Feedback::default(),
            prefill: None,
            messages,
        }
    }

    /// Reads the product name from `query` and writes it into the
    /// `Produto` field, when both exist.
    #[must_use]
    pub fn with_query(mut self, query: &str) -> Self {
        self.prefill = product_from_query(query);
        self.apply_prefill();
        self
    }

    /// Returns the form.
    #[must_use]
    pub const fn form(&self) -> &OrderForm {
        &self.form
    }

    /// Returns the form for editing.
    pub fn form_mut(&mut self) -> &mut OrderForm {
        &mut self.form
    }

    /// Returns the submit control.
    #[must_use]
    pub const fn submit_control(&self) -> &SubmitControl {
        &self.submit
    }

    /// Returns the feedback region.
    #[must_use]
    pub const fn feedback(&self) -> &Feedback {
        &self.feedback
    }

    /// Returns the pre-filled product name, if the page was opened with one.
    #[must_use]
    pub fn prefill(&self) -> Option<&str> {
        self.prefill.as_deref()
    }

    /// Enters the in-flight state and collects the payload.
    ///
    /// Disables the submit control, switches its label to the processing
    /// text, and shows the sending notice. Returns `None` without touching
    /// anything when a submission is already in flight.
    pub fn begin_submission(&mut self) -> Option<OrderPayload> {
        if !self.submit.enabled {
            return None;
        }

        self.submit.enabled = false;
        self.submit.label.clone_from(&self.messages.submit_processing);
        self.feedback = Feedback {
            text: self.messages.order_sending.clone(),
            tone: FeedbackTone::Pending,
        };

        Some(self.form.to_payload())
    }

    /// Leaves the in-flight state according to `outcome`.
    ///
    /// The control is re-enabled with its idle label and the outcome's text
    /// is shown. A recorded order also empties the form and re-applies the
    /// pre-fill.
    pub fn finish(&mut self, outcome: &SubmissionOutcome) {
        let (text, tone) = match outcome {
            SubmissionOutcome::Ignored => return,
            SubmissionOutcome::Recorded { message } => (message, FeedbackTone::Success),
            SubmissionOutcome::Rejected { message } | SubmissionOutcome::Failed { message } => {
                (message, FeedbackTone::Error)
            }
        };

        self.submit.enabled = true;
        self.submit.label.clone_from(&self.messages.submit_label);
        self.feedback = Feedback {
            text: text.clone(),
            tone,
        };

        if tone == FeedbackTone::Success {
            self.form.reset();
            self.apply_prefill();
        }
    }

    fn apply_prefill(&mut self) {
        if let Some(product) = &self.prefill {
            self.form.set(PRODUCT_FIELD, product.clone());
        }
    }
}
