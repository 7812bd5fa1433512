use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub type TagId = Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Tag {
    pub id: TagId,
    pub name: String,
    pub color: String,
}

impl Tag {
    pub fn new(name: String, color: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            name,
            color,
        }
    }

    pub fn with_id(id: TagId, name: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            color: color.into(),
        }
    }
}

/// Fixed set of tags tasks may reference.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TagCatalog {
    tags: Vec<Tag>,
}

impl TagCatalog {
    pub fn new(tags: Vec<Tag>) -> Self {
        Self { tags }
    }

    pub fn tags(&self) -> &[Tag] {
        &self.tags
    }

    pub fn get(&self, id: TagId) -> Option<&Tag> {
        self.tags.iter().find(|t| t.id == id)
    }

    pub fn contains(&self, id: TagId) -> bool {
        self.get(id).is_some()
    }

    /// Case-insensitive lookup by display name.
    pub fn find_by_name(&self, name: &str) -> Option<&Tag> {
        let name = name.to_lowercase();
        self.tags.iter().find(|t| t.name.to_lowercase() == name)
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    pub fn len(&self) -> usize {
        self.tags.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_lookup() {
        let bug = Tag::new("Bug".to_string(), "#EF4444".to_string());
        let feature = Tag::new("Feature".to_string(), "#8B5CF6".to_string());
        let catalog = TagCatalog::new(vec![bug.clone(), feature.clone()]);

        assert_eq!(catalog.len(), 2);
        assert!(catalog.contains(bug.id));
        assert_eq!(catalog.get(feature.id), Some(&feature));
        assert!(!catalog.contains(Uuid::new_v4()));
    }

    #[test]
    fn test_find_by_name_ignores_case() {
        let bug = Tag::new("Bug".to_string(), "#EF4444".to_string());
        let catalog = TagCatalog::new(vec![bug.clone()]);

        assert_eq!(catalog.find_by_name("bug"), Some(&bug));
        assert_eq!(catalog.find_by_name("BUG"), Some(&bug));
        assert_eq!(catalog.find_by_name("backend"), None);

        let design = Tag::new("Éclair".to_string(), "#10B981".to_string());
        let catalog = TagCatalog::new(vec![design.clone()]);
        assert_eq!(catalog.find_by_name("ÉCLAIR"), Some(&design));
        assert_eq!(catalog.find_by_name("éclair"), Some(&design));
    }
}
