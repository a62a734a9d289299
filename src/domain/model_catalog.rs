use serde::Deserialize;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ModelCatalog {
    #[serde(default)]
    pub models: Vec<ModelEntry>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ModelEntry {
    #[serde(default)]
    pub name: Option<String>,
}

impl ModelCatalog {
    /// Names of the listed models, skipping entries without one.
    pub fn names(&self) -> Vec<String> {
        self.models
            .iter()
            .filter_map(|m| m.name.as_deref())
            .filter(|name| !name.is_empty())
            .map(String::from)
            .collect()
    }
}
