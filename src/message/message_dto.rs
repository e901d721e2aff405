use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct SubmitMessageForm {
    // Absent or empty field is accepted and stored as an empty message.
    pub new_message: Option<String>,
}
