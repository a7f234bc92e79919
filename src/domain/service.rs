//! Service detail catalog shown in the services modal

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// One service entry. `content` is trusted, pre-sanitized HTML.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceDetail {
    #[serde(default, skip_serializing)]
    pub id: String,
    pub title: String,
    pub content: String,
}

impl ServiceDetail {
    pub fn new(id: impl Into<String>, title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            content: content.into(),
        }
    }

    /// HTML placed into the modal detail region
    pub fn render_html(&self) -> String {
        format!("<h3>{}</h3>{}", self.title, self.content)
    }
}

/// Read-only lookup of service id to detail
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(
    from = "BTreeMap<String, ServiceDetail>",
    into = "BTreeMap<String, ServiceDetail>"
)]
pub struct ServiceCatalog {
    entries: BTreeMap<String, ServiceDetail>,
}

impl ServiceCatalog {
    pub fn get(&self, id: &str) -> Option<&ServiceDetail> {
        self.entries.get(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.entries.contains_key(id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ServiceDetail> {
        self.entries.values()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl From<BTreeMap<String, ServiceDetail>> for ServiceCatalog {
    fn from(mut entries: BTreeMap<String, ServiceDetail>) -> Self {
        for (id, detail) in entries.iter_mut() {
            detail.id.clone_from(id);
        }
        Self { entries }
    }
}

impl From<ServiceCatalog> for BTreeMap<String, ServiceDetail> {
    fn from(catalog: ServiceCatalog) -> Self {
        catalog.entries
    }
}

impl FromIterator<ServiceDetail> for ServiceCatalog {
    fn from_iter<T: IntoIterator<Item = ServiceDetail>>(iter: T) -> Self {
        let entries = iter
            .into_iter()
            .map(|detail| (detail.id.clone(), detail))
            .collect();
        Self { entries }
    }
}

#[cfg(test)]
mod tests {
    use color_eyre::Result;
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_render_html() {
        let detail = ServiceDetail::new("polished", "Polished Concrete", "<p>Glossy.</p>");
        assert_eq!(detail.render_html(), "<h3>Polished Concrete</h3><p>Glossy.</p>");
    }

    #[test]
    fn test_ids_come_from_map_keys() -> Result<()> {
        let catalog: ServiceCatalog = json5::from_str(
            r#"{
                "fm-dm": { title: "Precision FM/DM Floors (Superflat)", content: "<p>x</p>" },
                overlay: { title: "Decorative Overlays & Resurfacing", content: "" },
            }"#,
        )?;

        assert_eq!(catalog.len(), 2);
        let detail = catalog.get("fm-dm").expect("fm-dm should exist");
        assert_eq!(detail.id, "fm-dm");
        assert_eq!(detail.title, "Precision FM/DM Floors (Superflat)");
        assert!(catalog.get("unknown").is_none());
        Ok(())
    }

    #[test]
    fn test_collect_from_details() {
        let catalog: ServiceCatalog = vec![
            ServiceDetail::new("b", "B", ""),
            ServiceDetail::new("a", "A", ""),
        ]
        .into_iter()
        .collect();

        let ids: Vec<_> = catalog.iter().map(|d| d.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b"]);
        assert!(catalog.contains("a"));
    }
}
