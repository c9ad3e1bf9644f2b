/// Raw user input handed to the assistant for a single free-form turn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AgentRequest {
    pub input: String,
}

impl AgentRequest {
    pub fn new(input: impl Into<String>) -> Self {
        Self {
            input: input.into(),
        }
    }
}
