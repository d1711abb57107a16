//! Entry drafts and the late-arrival guard for enrichment.
//!
//! An enrichment call can take seconds. While it is pending the user may keep
//! typing, or abandon the form. A result is applied only if the draft has not
//! been edited since the request was issued and the request was not
//! cancelled or superseded.

use vibe_domain::{AnalysisResult, EntryInput};

/// Proof that an enrichment request was issued against a given draft state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EnrichmentTicket {
    request: u64,
    revision: u64,
}

/// A form being filled in before assembly
#[derive(Debug, Clone, Default)]
pub struct Draft {
    input: EntryInput,
    revision: u64,
    next_request: u64,
    pending: Option<u64>,
}

impl Draft {
    /// Start a draft from initial input
    pub fn new(input: EntryInput) -> Self {
        Self {
            input,
            ..Default::default()
        }
    }

    /// Current field values
    pub fn input(&self) -> &EntryInput {
        &self.input
    }

    /// Edit fields; invalidates any enrichment already in flight
    pub fn edit(&mut self, f: impl FnOnce(&mut EntryInput)) {
        f(&mut self.input);
        self.revision += 1;
    }

    /// Whether an enrichment request is in flight
    pub fn is_enriching(&self) -> bool {
        self.pending.is_some()
    }

    /// Issue an enrichment request for the current prompt
    ///
    /// Returns `None` while another request is pending, so the same form
    /// cannot be submitted twice.
    pub fn begin_enrichment(&mut self) -> Option<EnrichmentTicket> {
        if self.pending.is_some() {
            return None;
        }
        self.next_request += 1;
        self.pending = Some(self.next_request);
        Some(EnrichmentTicket {
            request: self.next_request,
            revision: self.revision,
        })
    }

    /// Deliver a successful result
    ///
    /// Returns `true` if the result was applied. Stale results (draft edited,
    /// request cancelled or superseded) are discarded.
    pub fn complete_enrichment(
        &mut self,
        ticket: EnrichmentTicket,
        analysis: &AnalysisResult,
    ) -> bool {
        if self.pending != Some(ticket.request) {
            return false;
        }
        self.pending = None;

        if ticket.revision != self.revision {
            return false;
        }
        self.input.apply_analysis(analysis);
        self.revision += 1;
        true
    }

    /// Deliver a failure; only releases the pending lock
    pub fn fail_enrichment(&mut self, ticket: EnrichmentTicket) {
        if self.pending == Some(ticket.request) {
            self.pending = None;
        }
    }

    /// Abandon the request in flight; its result will be discarded
    pub fn cancel_enrichment(&mut self) {
        self.pending = None;
    }

    /// Finish editing
    pub fn into_input(self) -> EntryInput {
        self.input
    }
}
