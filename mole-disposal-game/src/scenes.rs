//! Scene loader that records requests instead of rendering.
use crate::SceneLoader;

/// Records every scene request in order. Useful for headless drivers and tests.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SceneLog {
    requests: Vec<String>,
}

impl SceneLog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Most recently requested scene.
    #[must_use]
    pub fn current(&self) -> Option<&str> {
        self.requests.last().map(String::as_str)
    }

    #[must_use]
    pub fn requests(&self) -> &[String] {
        &self.requests
    }

    pub fn clear(&mut self) {
        self.requests.clear();
    }
}

impl SceneLoader for SceneLog {
    fn load_scene(&mut self, name: &str) {
        self.requests.push(name.to_string());
    }
}
