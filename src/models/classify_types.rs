use serde::Serialize;

#[derive(Debug, Serialize, Clone)]
pub struct ModelStatus {
    pub loading: bool,
    pub ready: bool,
    pub error: Option<String>,
}

#[derive(Debug, Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Label {
    Dog,
    Cat,
}

impl Label {
    pub fn display_name(&self) -> &'static str {
        match self {
            Label::Dog => "Dog",
            Label::Cat => "Cat",
        }
    }
}

#[derive(Debug, Serialize, Clone)]
pub struct Classification {
    pub label: Label,
    pub confidence: f32,
    /// Ready-to-display text, e.g. "Dog (93.27%)".
    pub text: String,
}
