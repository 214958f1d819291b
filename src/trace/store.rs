//! The parsed, indexed instruction trace

use crate::error::ViewerError;
use crate::trace::record::{InstructionRecord, FIRST_REGISTER};

/// Delimiter line the emulator prints before every instruction dump
pub const RECORD_DELIMITER: &str = "---\n";

/// Owns the full ordered sequence of instruction records for one emulator run,
/// plus any startup output that preceded the first real record.
///
/// Built once from the emulator's buffered stdout and read-only afterwards.
/// The instruction index is the sole cursor into the trace; every lookup is
/// bounds-checked.
#[derive(Debug)]
pub struct TraceStore {
    records: Vec<InstructionRecord>,
    ignored: Option<String>,
}

impl TraceStore {
    /// Split the raw stdout stream on the record delimiter and parse every
    /// chunk.  The chunk before the first delimiter is not an instruction
    /// record: if it carries text that does not open with the expected first
    /// register name it is diverted to the ignored/startup bucket, and if it
    /// is empty it is simply dropped.
    ///
    /// Fails with [`ViewerError::EmptyTrace`] when no records remain.
    pub fn parse(raw: &str) -> Result<Self, ViewerError> {
        let mut chunks = raw.split(RECORD_DELIMITER);
        let mut ignored = None;

        if let Some(first) = chunks.next() {
            if first.starts_with(FIRST_REGISTER) {
                // No banner: the stream opens directly with a register dump.
                chunks = raw.split(RECORD_DELIMITER);
            } else if !first.is_empty() {
                ignored = Some(first.to_string());
            }
        }

        let records: Vec<InstructionRecord> =
            chunks.filter_map(InstructionRecord::parse).collect();

        if records.is_empty() {
            return Err(ViewerError::EmptyTrace);
        }

        log::info!(
            "parsed {} instruction record(s), startup output: {}",
            records.len(),
            if ignored.is_some() { "diverted" } else { "none" }
        );

        Ok(TraceStore { records, ignored })
    }

    pub fn get(&self, index: usize) -> Result<&InstructionRecord, ViewerError> {
        self.records.get(index).ok_or(ViewerError::IndexOutOfRange {
            index,
            length: self.records.len(),
        })
    }

    /// The mnemonic line at `index`, or `None` out of range
    pub fn mnemonic(&self, index: usize) -> Option<&str> {
        self.records.get(index).map(|r| r.disassembly())
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Index of the final record, the upper navigation bound
    pub fn last_index(&self) -> usize {
        self.records.len() - 1
    }

    /// Startup output that preceded the first real record, if any
    pub fn ignored_output(&self) -> Option<&str> {
        self.ignored.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RAW: &str = "eax  0x01\neip  0x10\ncall foo\n---\neax  0x01\neip  0x20\nmov eax,2\n---\neax  0x02\neip  0x30\nret\n";

    #[test]
    fn parses_all_records_in_order() {
        let store = TraceStore::parse(RAW).expect("trace should parse");
        assert_eq!(store.len(), 3);
        assert_eq!(store.mnemonic(0), Some("call foo"));
        assert_eq!(store.mnemonic(2), Some("ret"));
        assert!(store.ignored_output().is_none());
    }

    #[test]
    fn diverts_banner_chunk() {
        let raw = format!("binee starting up\nloading sections\n---\n{}", RAW);
        let store = TraceStore::parse(&raw).expect("trace should parse");
        assert_eq!(store.len(), 3);
        assert_eq!(store.mnemonic(0), Some("call foo"));
        assert_eq!(
            store.ignored_output(),
            Some("binee starting up\nloading sections\n")
        );
    }

    #[test]
    fn drops_empty_leading_chunk() {
        let raw = format!("---\n{}", RAW);
        let store = TraceStore::parse(&raw).expect("trace should parse");
        assert_eq!(store.len(), 3);
        assert!(store.ignored_output().is_none());
    }

    #[test]
    fn empty_stream_is_an_error() {
        assert!(matches!(
            TraceStore::parse(""),
            Err(ViewerError::EmptyTrace)
        ));
        assert!(matches!(
            TraceStore::parse("banner only, no records"),
            Err(ViewerError::EmptyTrace)
        ));
    }

    #[test]
    fn get_is_bounds_checked() {
        let store = TraceStore::parse(RAW).expect("trace should parse");
        assert!(store.get(2).is_ok());
        assert!(matches!(
            store.get(3),
            Err(ViewerError::IndexOutOfRange { index: 3, length: 3 })
        ));
    }
}
