use std::cell::RefCell;

use log::error;

use crate::contact::{ContactClient, ContactRequest};

/// What the visitor is told after pressing the submit button.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Notice {
    EmailRequired,
    Joined,
    Failed,
}

impl Notice {
    pub fn message(&self) -> &'static str {
        match self {
            Notice::EmailRequired => "Email required",
            Notice::Joined => "Thank you for joining the circle ✨",
            Notice::Failed => "Something went wrong",
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EmailForm {
    pub value: String,
    pub submitting: bool,
}

impl EmailForm {
    pub fn edit(&mut self, value: impl Into<String>) {
        self.value = value.into();
    }

    /// Any non-empty string is accepted; there is no address validation.
    pub fn begin_submit(&mut self) -> Result<ContactRequest, Notice> {
        if self.value.is_empty() {
            return Err(Notice::EmailRequired);
        }
        self.submitting = true;
        Ok(ContactRequest {
            email: self.value.clone(),
        })
    }

    pub fn finish(&mut self, delivered: bool) -> Notice {
        self.submitting = false;
        if delivered {
            self.value.clear();
            Notice::Joined
        } else {
            Notice::Failed
        }
    }

    pub fn button_label(&self) -> &'static str {
        if self.submitting {
            "Please Wait..."
        } else {
            "Enter The Circle"
        }
    }
}

/// Runs one submission against `client`.
///
/// `changed` is called after every state transition so the view can redraw.
/// Returns `None` when a request is already in flight.
pub async fn submit<C, F>(client: &C, form: &RefCell<EmailForm>, changed: F) -> Option<Notice>
where
    C: ContactClient,
    F: Fn(),
{
    if form.borrow().submitting {
        return None;
    }

    let request = match form.borrow_mut().begin_submit() {
        Ok(request) => request,
        Err(notice) => return Some(notice),
    };
    changed();

    let outcome = client.add_contact(&request).await;
    if let Err(e) = &outcome {
        error!("Contact submission failed: {}", e);
    }

    let notice = form.borrow_mut().finish(outcome.is_ok());
    changed();
    Some(notice)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contact::ContactError;
    use futures::executor::block_on;
    use std::cell::Cell;
    use std::rc::Rc;

    struct RecordingClient {
        requests: RefCell<Vec<ContactRequest>>,
        fail: bool,
        // state observed while the request is in flight
        seen_submitting: RefCell<Vec<bool>>,
        form: Option<Rc<RefCell<EmailForm>>>,
    }

    impl RecordingClient {
        fn new(fail: bool) -> Self {
            Self {
                requests: RefCell::new(Vec::new()),
                fail,
                seen_submitting: RefCell::new(Vec::new()),
                form: None,
            }
        }

        fn watching(mut self, form: Rc<RefCell<EmailForm>>) -> Self {
            self.form = Some(form);
            self
        }
    }

    impl ContactClient for RecordingClient {
        async fn add_contact(&self, request: &ContactRequest) -> Result<(), ContactError> {
            self.requests.borrow_mut().push(request.clone());
            if let Some(form) = &self.form {
                self.seen_submitting.borrow_mut().push(form.borrow().submitting);
            }
            if self.fail {
                Err(ContactError::Status(500))
            } else {
                Ok(())
            }
        }
    }

    fn form_with(value: &str) -> Rc<RefCell<EmailForm>> {
        let mut form = EmailForm::default();
        form.edit(value);
        Rc::new(RefCell::new(form))
    }

    #[test]
    fn empty_email_never_reaches_the_endpoint() {
        let client = RecordingClient::new(false);
        let form = form_with("");
        let redraws = Cell::new(0);

        let notice = block_on(submit(&client, &form, || redraws.set(redraws.get() + 1)));

        assert_eq!(notice, Some(Notice::EmailRequired));
        assert_eq!(notice.unwrap().message(), "Email required");
        assert!(client.requests.borrow().is_empty());
        assert!(!form.borrow().submitting);
        assert_eq!(redraws.get(), 0);
    }

    #[test]
    fn success_sends_once_and_clears_the_field() {
        let form = form_with("ada@example.com");
        let client = RecordingClient::new(false).watching(form.clone());

        let notice = block_on(submit(&client, &form, || {}));

        assert_eq!(notice, Some(Notice::Joined));
        assert_eq!(
            *client.requests.borrow(),
            vec![ContactRequest { email: "ada@example.com".to_string() }]
        );
        assert_eq!(*client.seen_submitting.borrow(), vec![true]);
        assert_eq!(*form.borrow(), EmailForm::default());
    }

    #[test]
    fn failure_keeps_the_value_and_reports_generically() {
        let form = form_with("not even an address");
        let client = RecordingClient::new(true).watching(form.clone());

        let notice = block_on(submit(&client, &form, || {}));

        assert_eq!(notice, Some(Notice::Failed));
        assert_eq!(notice.unwrap().message(), "Something went wrong");
        assert_eq!(client.requests.borrow().len(), 1);
        assert_eq!(form.borrow().value, "not even an address");
        assert!(!form.borrow().submitting);
    }

    #[test]
    fn redraws_when_starting_and_when_done() {
        let form = form_with("ada@example.com");
        let client = RecordingClient::new(false);
        let redraws = Cell::new(0);

        block_on(submit(&client, &form, || redraws.set(redraws.get() + 1)));

        assert_eq!(redraws.get(), 2);
    }

    #[test]
    fn ignores_submit_while_in_flight() {
        let form = form_with("ada@example.com");
        form.borrow_mut().submitting = true;
        let client = RecordingClient::new(false);

        assert_eq!(block_on(submit(&client, &form, || {})), None);
        assert!(client.requests.borrow().is_empty());
    }

    #[test]
    fn button_label_follows_submitting() {
        let mut form = EmailForm::default();
        assert_eq!(form.button_label(), "Enter The Circle");
        form.edit("x");
        form.begin_submit().unwrap();
        assert_eq!(form.button_label(), "Please Wait...");
        form.finish(false);
        assert_eq!(form.button_label(), "Enter The Circle");
    }
}
