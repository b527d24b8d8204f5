//! Mustache template store
//!
//! Templates are embedded in the crate and compiled on first use. A
//! configured directory may override them: `<dir>/<name>.html.mustache` is
//! preferred over the embedded copy when it exists. Compiled templates are
//! memoized per `(directory, name)` for the lifetime of the store.

use crate::errors::GlossError;
use serde::Serialize;
use std::cell::RefCell;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::rc::Rc;

/// Paper-mode preview
pub const PAPER_TEMPLATE: &str = "paper";

/// Word-level view of one sentence
pub const ANALYSIS_TEMPLATE: &str = "analysis";

const TEMPLATE_EXTENSION: &str = "html.mustache";

/// Get the embedded source of a template by name
pub fn embedded_template(name: &str) -> Option<&'static str> {
    match name {
        PAPER_TEMPLATE => Some(include_str!("templates/paper.html.mustache")),
        ANALYSIS_TEMPLATE => Some(include_str!("templates/analysis.html.mustache")),
        _ => None,
    }
}

type CacheKey = (Option<PathBuf>, String);

/// Memoizing `(directory, name) -> compiled template` lookup
#[derive(Default)]
pub struct TemplateStore {
    dir: Option<PathBuf>,
    cache: RefCell<HashMap<CacheKey, Rc<mustache::Template>>>,
}

impl TemplateStore {
    /// Store serving only the embedded templates
    pub fn new() -> Self {
        Self::default()
    }

    /// Store preferring templates found in `dir`
    pub fn with_dir(dir: Option<&Path>) -> Self {
        Self {
            dir: dir.map(Path::to_path_buf),
            cache: RefCell::new(HashMap::new()),
        }
    }

    /// Number of compiled templates held
    pub fn cached(&self) -> usize {
        self.cache.borrow().len()
    }

    /// Render a named template with serializable data
    pub fn render<T: Serialize>(&self, name: &str, data: &T) -> Result<String, GlossError> {
        let template = self.template(name)?;
        template
            .render_to_string(data)
            .map_err(|e| GlossError::Template(format!("rendering '{}' failed: {}", name, e)))
    }

    fn template(&self, name: &str) -> Result<Rc<mustache::Template>, GlossError> {
        let key = (self.dir.clone(), name.to_string());
        if let Some(template) = self.cache.borrow().get(&key) {
            return Ok(Rc::clone(template));
        }

        let source = self.source(name)?;
        let template = mustache::compile_str(&source)
            .map_err(|e| GlossError::Template(format!("compiling '{}' failed: {}", name, e)))?;
        let template = Rc::new(template);
        self.cache.borrow_mut().insert(key, Rc::clone(&template));
        log::debug!("Compiled template '{}'", name);
        Ok(template)
    }

    fn source(&self, name: &str) -> Result<String, GlossError> {
        if let Some(dir) = &self.dir {
            let path = dir.join(format!("{}.{}", name, TEMPLATE_EXTENSION));
            if path.is_file() {
                return std::fs::read_to_string(&path).map_err(|e| {
                    GlossError::Template(format!("cannot read {}: {}", path.display(), e))
                });
            }
        }
        embedded_template(name)
            .map(str::to_string)
            .ok_or_else(|| GlossError::Template(format!("unknown template '{}'", name)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Serialize;

    #[derive(Serialize)]
    struct Greeting {
        name: String,
    }

    #[test]
    fn test_embedded_templates_compile() {
        let store = TemplateStore::new();
        assert!(store.template(PAPER_TEMPLATE).is_ok());
        assert!(store.template(ANALYSIS_TEMPLATE).is_ok());
        assert_eq!(store.cached(), 2);
        // second lookup hits the cache
        assert!(store.template(PAPER_TEMPLATE).is_ok());
        assert_eq!(store.cached(), 2);
    }

    #[test]
    fn test_unknown_template_is_error() {
        let store = TemplateStore::new();
        let data = Greeting {
            name: "x".to_string(),
        };
        assert!(matches!(store.render("missing", &data), Err(GlossError::Template(_))));
    }

    #[test]
    fn test_directory_override() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("paper.html.mustache"), "Hello {{name}}").unwrap();
        let store = TemplateStore::with_dir(Some(dir.path()));
        let data = Greeting {
            name: "Udmurt".to_string(),
        };
        assert_eq!(store.render(PAPER_TEMPLATE, &data).unwrap(), "Hello Udmurt");
    }
}
