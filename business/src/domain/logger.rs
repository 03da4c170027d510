/// Logging port used by the synchronizer and the use cases.
///
/// Implementations decide where records go; the business layer only
/// emits plain messages.
pub trait Logger: Send + Sync {
    fn info(&self, message: &str);
    fn warn(&self, message: &str);
    fn error(&self, message: &str);
    fn debug(&self, message: &str);
}
