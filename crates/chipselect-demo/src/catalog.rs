//! Option catalog loading.

use crate::error::{DemoError, DemoResult};
use chipselect_core::{
    FnSource, SelectConfig, SelectOption, StaticSuggestions, SuggestionError, SuggestionResult,
    SuggestionSource,
};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use std::fs;
use std::path::Path;

/// Options offered by the demo and the select configuration to use.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Catalog {
    pub options: Vec<SelectOption<String>>,
    /// Maximum suggestions per query.
    pub limit: Option<usize>,
    /// Queries the source fails on, to exercise the error fallback.
    pub failing_queries: Vec<String>,
    pub config: SelectConfig,
}

impl Catalog {
    /// Build the suggestion source for this catalog.
    pub fn source(&self) -> impl SuggestionSource<String> + 'static {
        let mut options = StaticSuggestions::new(self.options.clone());
        if let Some(limit) = self.limit {
            options = options.with_limit(limit);
        }
        let failing = self.failing_queries.clone();
        FnSource::new(move |query: &str| {
            let result: SuggestionResult<String> = if failing.iter().any(|q| q == query) {
                Err(SuggestionError::Unavailable)
            } else {
                Ok(options.matching(query))
            };
            std::future::ready(result)
        })
    }
}

pub(crate) fn read_json<T: DeserializeOwned>(path: &Path) -> DemoResult<T> {
    let text = fs::read_to_string(path).map_err(|source| DemoError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&text).map_err(|source| DemoError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Load a catalog from a JSON file.
pub fn load_catalog(path: &Path) -> DemoResult<Catalog> {
    let catalog: Catalog = read_json(path)?;
    log::info!(
        "Loaded {} options from {}",
        catalog.options.len(),
        path.display()
    );
    Ok(catalog)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::task::{Context, Poll, Waker};
    use tempfile::tempdir;

    #[test]
    fn test_load_catalog() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("subjects.json");
        fs::write(
            &path,
            r#"{
                "options": [
                    {"label": "Biology", "value": "bio"},
                    {"label": "Chemistry", "value": "chem"}
                ],
                "limit": 5,
                "config": {"no_results_message": "No subjects", "auto_open_menu": true}
            }"#,
        )
        .unwrap();

        let catalog = load_catalog(&path).unwrap();
        assert_eq!(catalog.options.len(), 2);
        assert_eq!(catalog.options[1].value, "chem");
        assert_eq!(catalog.limit, Some(5));
        assert!(catalog.config.auto_open_menu);
        assert_eq!(catalog.config.no_results_message, "No subjects");
        assert_eq!(catalog.config.errored_message, "Errored, try again");
    }

    #[test]
    fn test_load_catalog_missing_file() {
        let dir = tempdir().unwrap();
        let result = load_catalog(&dir.path().join("missing.json"));
        assert!(matches!(result, Err(DemoError::Io { .. })));
    }

    #[test]
    fn test_load_catalog_bad_json() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("broken.json");
        fs::write(&path, "{ options: ").unwrap();
        let result = load_catalog(&path);
        assert!(matches!(result, Err(DemoError::Parse { .. })));
    }

    #[test]
    fn test_failing_query() {
        let catalog = Catalog {
            options: vec![SelectOption::simple("Art")],
            failing_queries: vec!["zz".to_string()],
            ..Catalog::default()
        };
        let source = catalog.source();
        let mut cx = Context::from_waker(Waker::noop());

        let mut failing = source.suggestions("zz");
        assert_eq!(
            failing.as_mut().poll(&mut cx),
            Poll::Ready(Err(SuggestionError::Unavailable))
        );
        let mut ok = source.suggestions("ar");
        match ok.as_mut().poll(&mut cx) {
            Poll::Ready(Ok(options)) => assert_eq!(options.len(), 1),
            _ => panic!("expected a match for 'ar'"),
        }
    }
}
