use crate::record::EntryRecord;
use anyhow::Result;
use leptos::logging::log;

/// Receives entries that passed validation. A real deployment would post
/// them to a backend; this app only acknowledges and logs them.
pub trait EntrySink {
    fn record(&self, entry: &EntryRecord) -> Result<()>;
}

/// Sink that writes the entry to the browser console as JSON, with the same
/// field names the form uses.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleSink;

impl EntrySink for ConsoleSink {
    fn record(&self, entry: &EntryRecord) -> Result<()> {
        let json = serde_json::to_string(entry)?;
        log!("production entry submitted: {json}");
        Ok(())
    }
}
