use super::{EntityMetadata, EventStore, Origin};

/// Aggregate root contract
///
/// Instance accessors plus static metadata identifying the aggregate class
/// within the system (index, collection, display names).
pub trait AggregateRoot {
    /// Identifier type of the aggregate
    type Id;

    fn id(&self) -> Self::Id;

    fn code(&self) -> &str;

    fn description(&self) -> &str;

    fn metadata(&self) -> &EntityMetadata;

    fn metadata_mut(&mut self) -> &mut EntityMetadata;

    fn events(&self) -> &EventStore;

    fn events_mut(&mut self) -> &mut EventStore;

    /// Aggregate index within the system (e.g. "a001")
    fn aggregate_index() -> &'static str;

    /// Collection name used for DB tables (e.g. "order_batch")
    fn collection_name() -> &'static str;

    /// Singular display name
    fn element_name() -> &'static str;

    /// Plural display name
    fn list_name() -> &'static str;

    /// Data source of the aggregate
    fn origin() -> Origin;

    /// Full system name, e.g. "a001_order_batch"
    fn full_name() -> String {
        format!("{}_{}", Self::aggregate_index(), Self::collection_name())
    }
}
