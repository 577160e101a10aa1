use serde::{Deserialize, Serialize};

/// A new course. Optional fields fall back to the server's defaults when left out
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CourseDraft {
    pub title: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub level: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<String>,
}

/// Partial course update, only set fields are sent
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CourseUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub level: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<String>,
}

/// A link style course material
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaterialDraft {
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub url: String,
    #[serde(rename = "type", default = "MaterialDraft::default_type")]
    pub material_type: String,
}

impl MaterialDraft {
    fn default_type() -> String {
        "link".to_string()
    }

    pub fn link<T: Into<String>, U: Into<String>>(title: T, url: U) -> Self {
        Self {
            title: title.into(),
            description: String::new(),
            url: url.into(),
            material_type: Self::default_type(),
        }
    }
}
