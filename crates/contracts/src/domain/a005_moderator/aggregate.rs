use crate::domain::common::serde_date;
use crate::domain::common::{
    AggregateId, AggregateRoot, BaseAggregate, EntityMetadata, EventStore, Origin,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// ID type for a page moderator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ModeratorId(pub Uuid);

impl ModeratorId {
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

impl AggregateId for ModeratorId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }
    fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(ModeratorId::new)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}

/// Page moderator (aggregate)
///
/// Staff member assigned to a sales page, paid a monthly salary. The
/// salary sheet converts the monthly figure to a daily rate at
/// monthly / 30 and zeroes it on absent days.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Moderator {
    #[serde(flatten)]
    pub base: BaseAggregate<ModeratorId>,

    /// Staff member name
    #[serde(rename = "moderatorName")]
    pub moderator_name: String,

    /// Sales page the moderator is assigned to
    #[serde(rename = "pageName")]
    pub page_name: String,

    /// Monthly salary
    #[serde(rename = "monthlySalary")]
    pub monthly_salary: f64,
}

impl Moderator {
    pub fn new_for_insert(
        code: String,
        description: String,
        moderator_name: String,
        page_name: String,
        monthly_salary: f64,
        comment: Option<String>,
    ) -> Self {
        let mut base = BaseAggregate::new(ModeratorId::new_v4(), code, description);
        base.comment = comment;
        Self {
            base,
            moderator_name,
            page_name,
            monthly_salary,
        }
    }

    pub fn to_string_id(&self) -> String {
        self.base.id.as_string()
    }
    pub fn touch_updated(&mut self) {
        self.base.touch();
    }

    /// Daily rate derived from the monthly salary
    pub fn daily_rate(&self) -> f64 {
        self.monthly_salary / 30.0
    }

    pub fn update(&mut self, dto: &ModeratorDto) {
        self.base.code = dto.code.clone().unwrap_or_default();
        self.base.description = dto.description.clone();
        self.base.comment = dto.comment.clone();
        self.moderator_name = dto.moderator_name.clone();
        self.page_name = dto.page_name.clone();
        self.monthly_salary = dto.monthly_salary;
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.base.description.trim().is_empty() {
            return Err("Description cannot be empty".into());
        }
        if self.base.code.trim().is_empty() {
            return Err("Code cannot be empty".into());
        }
        if self.moderator_name.trim().is_empty() {
            return Err("Moderator name is required".into());
        }
        if self.page_name.trim().is_empty() {
            return Err("Page name is required".into());
        }
        if self.monthly_salary < 0.0 {
            return Err("Monthly salary cannot be negative".into());
        }
        Ok(())
    }

    pub fn before_write(&mut self) {
        self.touch_updated();
    }
}

impl AggregateRoot for Moderator {
    type Id = ModeratorId;
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
        "a005"
    }
    fn collection_name() -> &'static str {
        "moderator"
    }
    fn element_name() -> &'static str {
        "Moderator"
    }
    fn list_name() -> &'static str {
        "Moderators"
    }
    fn origin() -> Origin {
        Origin::Config
    }
}

// =============================================================================
// DTO
// =============================================================================

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ModeratorDto {
    pub id: Option<String>,
    pub code: Option<String>,
    pub description: String,
    #[serde(rename = "moderatorName")]
    pub moderator_name: String,
    #[serde(rename = "pageName")]
    pub page_name: String,
    #[serde(rename = "monthlySalary")]
    pub monthly_salary: f64,
    pub comment: Option<String>,
}

// =============================================================================
// Attendance
// =============================================================================

/// Absence mark for a moderator on a given date
///
/// Keyed table, not an aggregate: one row per (moderator, date) that
/// exists only while the moderator is marked absent.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AttendanceRecord {
    #[serde(rename = "moderatorId")]
    pub moderator_id: String,
    #[serde(with = "serde_date")]
    #[serde(rename = "absentDate")]
    pub absent_date: chrono::NaiveDate,
}

/// Toggle request for the attendance endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AttendanceToggleDto {
    #[serde(rename = "moderatorId")]
    pub moderator_id: String,
    #[serde(with = "serde_date")]
    #[serde(rename = "absentDate")]
    pub absent_date: chrono::NaiveDate,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn daily_rate_is_monthly_over_thirty() {
        let m = Moderator::new_for_insert(
            "MOD-001".into(),
            "Rahim".into(),
            "Rahim".into(),
            "Page One".into(),
            15000.0,
            None,
        );
        assert_eq!(m.daily_rate(), 500.0);
    }
}
