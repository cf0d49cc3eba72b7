use crate::domain::common::{
    AggregateId, AggregateRoot, BaseAggregate, EntityMetadata, EventStore, Origin,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// ID type for a managed sales page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SalesPageId(pub Uuid);

impl SalesPageId {
    pub fn new(value: Uuid) -> Self {
        Self(value)
    }
    pub fn new_v4() -> Self {
        Self(Uuid::new_v4())
    }
    pub fn value(&self) -> Uuid {
        self.0
    }
}

impl AggregateId for SalesPageId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }
    fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(SalesPageId::new)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}

/// Managed sales page (aggregate)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SalesPage {
    #[serde(flatten)]
    pub base: BaseAggregate<SalesPageId>,

    /// Page name, must match the names used on batches
    #[serde(rename = "pageName")]
    pub page_name: String,
}

impl SalesPage {
    pub fn new_for_insert(
        code: String,
        description: String,
        page_name: String,
        comment: Option<String>,
    ) -> Self {
        let mut base = BaseAggregate::new(SalesPageId::new_v4(), code, description);
        base.comment = comment;
        Self { base, page_name }
    }

    pub fn to_string_id(&self) -> String {
        self.base.id.as_string()
    }
    pub fn touch_updated(&mut self) {
        self.base.touch();
    }

    pub fn update(&mut self, dto: &SalesPageDto) {
        self.base.code = dto.code.clone().unwrap_or_default();
        self.base.description = dto.description.clone();
        self.base.comment = dto.comment.clone();
        self.page_name = dto.page_name.clone();
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.base.description.trim().is_empty() {
            return Err("Description cannot be empty".into());
        }
        if self.base.code.trim().is_empty() {
            return Err("Code cannot be empty".into());
        }
        if self.page_name.trim().is_empty() {
            return Err("Page name is required".into());
        }
        Ok(())
    }

    pub fn before_write(&mut self) {
        self.touch_updated();
    }
}

impl AggregateRoot for SalesPage {
    type Id = SalesPageId;
    fn id(&self) -> Self::Id {
        self.base.id
    }
    fn code(&self) -> &str {
        &self.base.code
    }
    fn description(&self) -> &str {
        &self.base.description
    }
    fn metadata(&self) -> &EntityMetadata {
        &self.base.metadata
    }
    fn metadata_mut(&mut self) -> &mut EntityMetadata {
        &mut self.base.metadata
    }
    fn events(&self) -> &EventStore {
        &self.base.events
    }
    fn events_mut(&mut self) -> &mut EventStore {
        &mut self.base.events
    }
    fn aggregate_index() -> &'static str {
        "a003"
    }
    fn collection_name() -> &'static str {
        "sales_page"
    }
    fn element_name() -> &'static str {
        "Sales page"
    }
    fn list_name() -> &'static str {
        "Sales pages"
    }
    fn origin() -> Origin {
        Origin::Config
    }
}

// =============================================================================
// DTO
// =============================================================================

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct SalesPageDto {
    pub id: Option<String>,
    pub code: Option<String>,
    pub description: String,
    #[serde(rename = "pageName")]
    pub page_name: String,
    pub comment: Option<String>,
}
