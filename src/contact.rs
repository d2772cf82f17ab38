use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContactError {
    #[error("Please enter your name")]
    MissingName,
    #[error("Please enter your email")]
    MissingEmail,
    #[error("Please enter a message")]
    MissingMessage,
    #[error("That email address doesn't look right")]
    InvalidEmail,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactMessage {
    name: String,
    email: String,
    message: String,
}

impl ContactMessage {
    pub fn new(name: &str, email: &str, message: &str) -> Result<Self, ContactError> {
        let (name, email, message) = (name.trim(), email.trim(), message.trim());
        if name.is_empty() {
            return Err(ContactError::MissingName);
        }
        if email.is_empty() {
            return Err(ContactError::MissingEmail);
        }
        if message.is_empty() {
            return Err(ContactError::MissingMessage);
        }
        match email.split_once('@') {
            Some((user, domain)) if !user.is_empty() && !domain.is_empty() => {}
            _ => return Err(ContactError::InvalidEmail),
        }
        Ok(Self {
            name: name.to_string(),
            email: email.to_string(),
            message: message.to_string(),
        })
    }

    /// A `mailto:` link that opens a pre-filled draft in the visitor's mail client.
    pub fn mailto_href(&self, recipient: &str) -> String {
        let body = format!("{}\n\nFrom: {}", self.message, self.email);
        format!(
            "mailto:{recipient}?subject=Portfolio%20Contact%20from%20{}&body={}",
            urlencoding::encode(&self.name),
            urlencoding::encode(&body)
        )
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ContactStatus {
    #[default]
    Idle,
    Invalid(ContactError),
    /// The draft was handed to the mail client.
    Opened,
}
