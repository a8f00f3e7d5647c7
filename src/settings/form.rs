use serde::{Deserialize, Serialize};

/// One of the three tag lists on the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TagField {
    Users,
    Categories,
    Replies,
}

impl TagField {
    /// All variants in display order.
    pub fn all() -> &'static [TagField] {
        &[Self::Users, Self::Categories, Self::Replies]
    }

    /// Section heading.
    pub fn heading(&self) -> &'static str {
        match self {
            Self::Users => "Users",
            Self::Categories => "Message Categories",
            Self::Replies => "Custom Replies",
        }
    }

    pub fn description(&self) -> Option<&'static str> {
        match self {
            Self::Users => None,
            Self::Categories => Some(
                "These are the categories which are visible to the user. This also helps you to filter and view messages as per your requirement.",
            ),
            Self::Replies => {
                Some("These are custom replies which you can send to users instantly.")
            }
        }
    }

    /// Label shown above the search box.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Users => "Add users to get particular notifications",
            Self::Categories => "Add the categories",
            Self::Replies => "Add replies",
        }
    }

    /// Placeholder shown while the draft is empty.
    pub fn placeholder(&self) -> &'static str {
        match self {
            Self::Users => "Search Users",
            Self::Categories => "Enter the category name",
            Self::Replies => "Add replies",
        }
    }
}

/// The editable settings snapshot. These four fields are everything that
/// gets saved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FormState {
    #[serde(alias = "notifications_enabled")]
    pub notifications_enabled: bool,
    pub users: Vec<String>,
    pub categories: Vec<String>,
    pub replies: Vec<String>,
}

impl Default for FormState {
    fn default() -> Self {
        Self {
            notifications_enabled: false,
            users: vec![
                "Narendra Modi".to_string(),
                "Narendra Modi".to_string(),
                "Narendra Modi".to_string(),
            ],
            categories: vec![
                "Hiring".to_string(),
                "Budget 2025".to_string(),
                "Resignation".to_string(),
            ],
            replies: vec![
                "Sorry, I won’t be able to attend".to_string(),
                "Let’s move forward on the conversation".to_string(),
            ],
        }
    }
}

impl FormState {
    pub fn tags(&self, field: TagField) -> &[String] {
        match field {
            TagField::Users => &self.users,
            TagField::Categories => &self.categories,
            TagField::Replies => &self.replies,
        }
    }

    fn tags_mut(&mut self, field: TagField) -> &mut Vec<String> {
        match field {
            TagField::Users => &mut self.users,
            TagField::Categories => &mut self.categories,
            TagField::Replies => &mut self.replies,
        }
    }

    /// Append `raw` (trimmed) to the field's list.
    ///
    /// Returns `false` without touching the list when the trimmed value is
    /// empty or already present. Matching is exact and case-sensitive.
    pub fn add_tag(&mut self, field: TagField, raw: &str) -> bool {
        let value = raw.trim();
        if value.is_empty() {
            return false;
        }
        let tags = self.tags_mut(field);
        if tags.iter().any(|tag| tag == value) {
            return false;
        }
        tags.push(value.to_string());
        true
    }

    /// Remove the tag at `index`, keeping the order of the rest.
    /// Returns the removed value, or `None` if the index is out of range.
    pub fn remove_tag(&mut self, field: TagField, index: usize) -> Option<String> {
        let tags = self.tags_mut(field);
        if index >= tags.len() {
            return None;
        }
        Some(tags.remove(index))
    }
}

/// Draft text typed into each tag list's search box. Never saved.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PendingInputs {
    users: String,
    categories: String,
    replies: String,
}

impl PendingInputs {
    pub fn get(&self, field: TagField) -> &str {
        match field {
            TagField::Users => &self.users,
            TagField::Categories => &self.categories,
            TagField::Replies => &self.replies,
        }
    }

    pub fn get_mut(&mut self, field: TagField) -> &mut String {
        match field {
            TagField::Users => &mut self.users,
            TagField::Categories => &mut self.categories,
            TagField::Replies => &mut self.replies,
        }
    }

    pub fn set(&mut self, field: TagField, value: impl Into<String>) {
        *self.get_mut(field) = value.into();
    }

    pub fn clear(&mut self, field: TagField) {
        self.get_mut(field).clear();
    }
}
