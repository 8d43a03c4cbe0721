use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct VocabCard {
    pub word: String,       // Term shown on the default front face
    pub definition: String, // Meaning shown on the back face
}

#[derive(Debug, Clone, Deserialize)]
pub struct VocabSet {
    pub id: String,    // File stem of the deck resource, e.g. "unit_3"
    pub title: String,
    pub count: u32,
    pub description: Option<String>,
}
