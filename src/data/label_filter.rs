use serde::{Deserialize, Serialize};

/// Set of acceptable object labels. An empty filter built with [`LabelFilter::any`]
/// accepts everything.
#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabelFilter {
    labels: Option<Vec<String>>,
}

impl LabelFilter {
    pub fn new(labels: Vec<String>) -> Self {
        Self {
            labels: Some(labels),
        }
    }

    pub fn any() -> Self {
        Self { labels: None }
    }

    pub fn accepts(&self, label: &str) -> bool {
        match &self.labels {
            Some(labels) => labels.iter().any(|l| l == label),
            None => true,
        }
    }

    pub fn labels(&self) -> Option<&Vec<String>> {
        self.labels.as_ref()
    }
}

impl From<&str> for LabelFilter {
    fn from(label: &str) -> Self {
        Self::new(vec![label.to_string()])
    }
}

impl From<&[&str]> for LabelFilter {
    fn from(labels: &[&str]) -> Self {
        Self::new(labels.iter().map(|x| x.to_string()).collect())
    }
}

impl<const N: usize> From<[&str; N]> for LabelFilter {
    fn from(labels: [&str; N]) -> Self {
        Self::new(labels.iter().map(|x| x.to_string()).collect())
    }
}

impl From<Vec<String>> for LabelFilter {
    fn from(labels: Vec<String>) -> Self {
        Self::new(labels)
    }
}
