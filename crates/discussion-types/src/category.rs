use serde::{Deserialize, Serialize};

/// A discussion category on the remote repository.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// GraphQL node ID, used when creating a discussion.
    pub id: String,
    pub name: String,
    pub description: String,
    /// Machine-safe name; also the file name of the category's form.
    pub slug: String,
}

/// Result of discovering a repository's discussion categories.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Discovery {
    /// GraphQL node ID of the repository.
    pub repository_id: String,
    /// Categories sorted by slug.
    pub categories: Vec<Category>,
}

impl Discovery {
    /// Look up the ID of the category with exactly this slug.
    pub fn category_id(&self, slug: &str) -> Option<&str> {
        self.categories
            .iter()
            .find(|c| c.slug == slug)
            .map(|c| c.id.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn category(id: &str, slug: &str) -> Category {
        Category {
            id: id.to_string(),
            name: slug.to_string(),
            description: String::new(),
            slug: slug.to_string(),
        }
    }

    #[test]
    fn test_category_id_exact_match() {
        let discovery = Discovery {
            repository_id: "R_1".to_string(),
            categories: vec![category("DIC_a", "ideas"), category("DIC_b", "q-a")],
        };
        assert_eq!(discovery.category_id("q-a"), Some("DIC_b"));
        assert_eq!(discovery.category_id("Q-A"), None);
        assert_eq!(discovery.category_id("general"), None);
    }
}
