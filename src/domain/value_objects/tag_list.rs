/// Tags as edited in the studio: a comma-joined string, sent to the API as a list.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TagList(Vec<String>);

impl TagList {
    pub fn parse(raw: &str) -> Self {
        Self(
            raw.split(',')
                .map(|tag| tag.trim())
                .filter(|tag| !tag.is_empty())
                .map(str::to_string)
                .collect(),
        )
    }

    pub fn add(&mut self, tag: &str) {
        let tag = tag.trim();
        if tag.is_empty() || self.0.iter().any(|existing| existing == tag) {
            return;
        }
        self.0.push(tag.to_string());
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn into_vec(self) -> Vec<String> {
        self.0
    }

    pub fn joined(&self) -> String {
        self.0.join(", ")
    }
}
