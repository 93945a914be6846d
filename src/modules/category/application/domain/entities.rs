use uuid::Uuid;

/// Upper bound on categories returned by a listing.
pub const CATEGORY_LIST_LIMIT: u64 = 500;

/// Trimmed, validated category fields shared by create and update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryFields {
    pub name: String,
    pub alias: String,
    pub description: String,
    /// Zero asks the store to append after the current last position.
    pub position: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CategoryFieldsError {
    #[error("Name cannot be blank")]
    BlankName,

    #[error("Position cannot be negative")]
    NegativePosition,
}

impl CategoryFields {
    pub fn normalize(
        name: &str,
        alias: Option<&str>,
        description: Option<&str>,
        position: i64,
    ) -> Result<Self, CategoryFieldsError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(CategoryFieldsError::BlankName);
        }
        if position < 0 {
            return Err(CategoryFieldsError::NegativePosition);
        }

        let alias = alias.map(str::trim).filter(|a| !a.is_empty()).unwrap_or(name);

        Ok(Self {
            name: name.to_string(),
            alias: alias.to_string(),
            description: description.map(str::trim).unwrap_or_default().to_string(),
            position,
        })
    }

    pub fn wants_auto_position(&self) -> bool {
        self.position == 0
    }
}

/// Position for a new row given the highest stored one.
pub fn next_position(last: Option<i64>) -> i64 {
    last.unwrap_or(0) + 1
}

/// Denormalized category aggregate: the newest topic and the number of topics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryAggregate {
    pub last_topic_id: Option<Uuid>,
    pub topics_count: i64,
}

impl CategoryAggregate {
    /// `topics_count` is only meaningful while a last topic exists.
    pub fn derive(last_topic_id: Option<Uuid>, topics_count: i64) -> Self {
        let topics_count = match last_topic_id {
            Some(_) => topics_count.max(0),
            None => 0,
        };

        Self {
            last_topic_id,
            topics_count,
        }
    }
}
