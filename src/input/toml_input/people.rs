use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct People {
    fullnames: Vec<String>,
}

impl People {
    #[must_use]
    pub fn new(fullnames: Vec<String>) -> Self {
        Self { fullnames }
    }

    pub fn fullnames(&self) -> &[String] {
        &self.fullnames
    }
}
