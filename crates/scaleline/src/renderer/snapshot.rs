use crate::error::EngineError;

/// Destination for frame snapshots.
///
/// The runner calls `save` after `present`, so the sink always sees a
/// complete frame. Errors are reported to the caller, which logs them and
/// keeps running.
pub trait SnapshotSink {
    fn save(&mut self, path: &str) -> Result<(), EngineError>;
}
