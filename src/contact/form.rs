//! Contact form fields.

/// Name of the hidden field that only automated submitters fill in.
pub const HONEYPOT_FIELD: &str = "honeypot";

/// Values of the contact form. The honeypot is never shown to the user.
///
#[derive(Debug, Default, PartialEq, Eq, Clone)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
    pub honeypot: String,
}

impl ContactForm {
    /// Return whether the honeypot has been filled in.
    ///
    pub fn is_bot(&self) -> bool {
        !self.honeypot.is_empty()
    }

    /// Return the named field set posted to the form action, in form order.
    ///
    pub fn fields(&self) -> Vec<(&'static str, &str)> {
        vec![
            ("name", self.name.as_str()),
            ("email", self.email.as_str()),
            ("message", self.message.as_str()),
            (HONEYPOT_FIELD, self.honeypot.as_str()),
        ]
    }

    /// Clear every field.
    ///
    pub fn reset(&mut self) {
        *self = ContactForm::default();
    }
}
