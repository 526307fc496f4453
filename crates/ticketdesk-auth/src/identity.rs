use ticketdesk_models::SubjectId;

/// A verified subject, valid for the request that presented the token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    subject: SubjectId,
}

impl Identity {
    pub fn new(subject: SubjectId) -> Self {
        Self { subject }
    }

    pub fn subject(&self) -> &SubjectId {
        &self.subject
    }
}
