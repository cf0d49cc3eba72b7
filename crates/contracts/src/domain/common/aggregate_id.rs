/// Typed aggregate identifier with a stable string form
///
/// Every aggregate wraps its uuid in a newtype implementing this trait so
/// ids of different aggregates cannot be mixed up at compile time.
pub trait AggregateId: Sized {
    /// String form used in URLs and DB keys
    fn as_string(&self) -> String;

    /// Parse from the string form
    fn from_string(s: &str) -> Result<Self, String>;
}
