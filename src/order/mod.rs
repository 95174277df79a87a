//! The order view: a form posted to the endpoint, with visible feedback.
//!
//! # Overview
//!
//! - [`OrderPage`]: form, submit control, and feedback region
//! - [`OrderForm`]: the named inputs, collected into an [`OrderPayload`]
//! - [`OrderSubmitter`]: sends the payload and updates the page
//! - [`product_from_query`]: reads the product name a catalog card links with
//!
//! # Submission lifecycle
//!
//! 1. [`OrderPage::begin_submission`] disables the control and shows the
//!    sending notice.
//! 2. One POST carries the payload as a flat JSON object.
//! 3. [`OrderPage::finish`] re-enables the control and shows the outcome; a
//!    recorded order also empties the form and re-applies the pre-fill.

mod form;
mod page;
mod prefill;
mod submitter;

pub use form::{FormField, OrderForm, OrderPayload};
pub use page::{Feedback, FeedbackTone, OrderPage, SubmissionOutcome, SubmitControl};
pub use prefill::{product_from_query, PRODUCT_FIELD, PRODUCT_QUERY_PARAM};
pub use submitter::{OrderError, OrderReceipt, OrderSubmitter};
