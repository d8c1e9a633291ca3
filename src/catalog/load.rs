use std::path::Path;

use anyhow::Context;

use super::tree::RouteCatalog;
use super::types::RouteDescriptor;

/// Load a route catalogue from a YAML or JSON file.
///
/// The file holds the top-level descriptor list; children nest inline. The
/// extension selects the format: `.yaml`/`.yml` parse as YAML, anything
/// else as JSON.
///
/// ```yaml
/// - path: /
///   name: dashboard
///   title: Dashboard
/// - path: /jobs
///   name: jobs
///   title: Job Management
///   children:
///     - path: /jobs/:id
///       name: jobs-detail
///       title: Job Details
/// ```
///
/// # Errors
///
/// Fails when the file cannot be read or does not parse as a descriptor
/// list. Structural problems beyond that (duplicate paths, ambiguous
/// siblings) are not load errors; run [`crate::linter::lint_catalog`] to
/// surface them.
pub fn load_catalog(path: &Path) -> anyhow::Result<RouteCatalog> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read route catalogue {}", path.display()))?;

    let is_yaml = path
        .extension()
        .map(|ext| ext == "yaml" || ext == "yml")
        .unwrap_or(false);

    let routes: Vec<RouteDescriptor> = if is_yaml {
        serde_yaml::from_str(&content)
            .with_context(|| format!("invalid YAML route catalogue {}", path.display()))?
    } else {
        serde_json::from_str(&content)
            .with_context(|| format!("invalid JSON route catalogue {}", path.display()))?
    };

    Ok(RouteCatalog::new(routes))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_yaml_roundtrip() {
        let yaml = r#"
- path: /
  name: dashboard
  title: Dashboard
- path: /jobs
  name: jobs
  title: Job Management
  icon: Briefcase
  meta:
    requires_auth: true
  children:
    - path: /jobs/:id
      name: jobs-detail
      title: Job Details
"#;
        let routes: Vec<RouteDescriptor> = serde_yaml::from_str(yaml).expect("valid catalogue");
        assert_eq!(routes.len(), 2);
        assert_eq!(routes[1].children[0].name, "jobs-detail");
        assert!(routes[1].meta.as_ref().expect("meta").requires_auth);
    }

    #[test]
    fn test_meta_defaults() {
        let json = r#"[{"path": "/", "name": "home", "title": "Home", "meta": {}}]"#;
        let routes: Vec<RouteDescriptor> = serde_json::from_str(json).expect("valid catalogue");
        let meta = routes[0].meta.as_ref().expect("meta");
        assert!(!meta.requires_auth);
        assert!(meta.roles.is_empty());
        assert!(meta.layout.is_none());
    }
}
