mod aggregate_id;
mod aggregate_root;
mod base_aggregate;
mod entity_metadata;
mod event_store;
mod origin;
pub mod serde_date;

pub use aggregate_id::AggregateId;
pub use aggregate_root::AggregateRoot;
pub use base_aggregate::BaseAggregate;
pub use entity_metadata::EntityMetadata;
pub use event_store::EventStore;
pub use origin::Origin;
