#[derive(Debug, Clone, PartialEq)]
pub enum ChatMessage {
    User(String),
    Assistant(String),
    System(String),
}
