/// Actions the decision engine can send back to the battle engine
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// move MOVEID [TARGET]
    Move { id: String, target: Option<String> },

    /// switch IDENTITY
    Switch(String),

    /// pass
    Pass,
}

impl Action {
    /// Serialize action to protocol format
    pub fn to_protocol_string(&self) -> String {
        match self {
            Self::Move {
                id,
                target: Some(target),
            } => format!("move {} {}", id, target),
            Self::Move { id, target: None } => format!("move {}", id),
            Self::Switch(identity) => format!("switch {}", identity),
            Self::Pass => "pass".to_string(),
        }
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_protocol_string())
    }
}
