use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use sckit_store::{HostStore, InMemoryHostStore, Proxy, ReadOnlyHostStore};
use sckit_types::ScHname;
use sckit_views::{ImmutableRecord, MutableRecord};
use tracing::{debug, warn};

use crate::checks::CheckContext;
use crate::config::DispatchConfig;
use crate::context::{CallInfo, CallerOracle, FuncContext, ViewContext};
use crate::entry::{EntryPoint, Handler};
use crate::error::{DispatchError, DispatchResult};
use crate::payload::CallPayload;
use crate::table::ExportTable;

// ---------------------------------------------------------------------------
// Phase
// ---------------------------------------------------------------------------

/// Where an invocation is in its lifecycle.
///
/// `Idle -> Resolving -> Authorizing -> Executing -> Completed`, with a jump
/// to `Aborted` from any of the middle phases.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    Idle,
    Resolving,
    Authorizing,
    Executing,
    Completed,
    Aborted,
}

impl Phase {
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Completed | Self::Aborted)
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Idle => "idle",
            Self::Resolving => "resolving",
            Self::Authorizing => "authorizing",
            Self::Executing => "executing",
            Self::Completed => "completed",
            Self::Aborted => "aborted",
        };
        f.write_str(s)
    }
}

// ---------------------------------------------------------------------------
// CallTarget
// ---------------------------------------------------------------------------

/// How a host addresses an entry point.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CallTarget {
    Hname(ScHname),
    Index(u32),
}

impl CallTarget {
    /// Target the entry point called `name`.
    pub fn name(name: &str) -> Self {
        Self::Hname(ScHname::from_name(name))
    }
}

impl fmt::Display for CallTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Hname(hname) => write!(f, "hname {hname}"),
            Self::Index(index) => write!(f, "index {index}"),
        }
    }
}

// ---------------------------------------------------------------------------
// Invocation
// ---------------------------------------------------------------------------

/// Progress of one call through the dispatcher.
#[derive(Clone, Debug)]
pub struct Invocation {
    target: CallTarget,
    entry: Option<String>,
    phase: Phase,
    history: Vec<Phase>,
}

impl Invocation {
    fn new(target: CallTarget) -> Self {
        Self {
            target,
            entry: None,
            phase: Phase::Idle,
            history: vec![Phase::Idle],
        }
    }

    fn advance(&mut self, next: Phase) {
        debug!(
            call = %self.target,
            entry = self.entry.as_deref().unwrap_or("-"),
            from = %self.phase,
            to = %next,
            "invocation phase"
        );
        self.phase = next;
        self.history.push(next);
    }

    pub fn target(&self) -> CallTarget {
        self.target
    }

    /// Name of the resolved entry point, once resolution succeeded.
    pub fn entry(&self) -> Option<&str> {
        self.entry.as_deref()
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Every phase entered so far, starting with `Idle`.
    pub fn history(&self) -> &[Phase] {
        &self.history
    }
}

// ---------------------------------------------------------------------------
// CallOutcome
// ---------------------------------------------------------------------------

/// The result of a finished invocation.
#[derive(Clone, Debug)]
pub struct CallOutcome {
    /// The invocation record, ending in `Completed` or `Aborted`.
    pub invocation: Invocation,
    /// The results bundle of a completed call.
    pub results: Option<CallPayload>,
    /// Why the call was aborted.
    pub error: Option<DispatchError>,
}

impl CallOutcome {
    pub fn phase(&self) -> Phase {
        self.invocation.phase()
    }

    pub fn is_completed(&self) -> bool {
        self.phase() == Phase::Completed
    }

    /// The abort message, if the call was aborted.
    pub fn message(&self) -> Option<String> {
        self.error.as_ref().map(ToString::to_string)
    }

    pub fn into_result(self) -> DispatchResult<CallPayload> {
        match self.error {
            Some(err) => Err(err),
            None => Ok(self.results.unwrap_or_default()),
        }
    }
}

// ---------------------------------------------------------------------------
// Dispatcher
// ---------------------------------------------------------------------------

/// Routes calls to the entry points of one [`ExportTable`].
///
/// Each call resolves its target, runs the entry's checks against the
/// persistent state and parameters, then runs the handler. The first error
/// aborts the call; the handler is never entered after a failed check.
#[derive(Debug)]
pub struct Dispatcher {
    table: ExportTable,
    config: DispatchConfig,
}

impl Dispatcher {
    pub fn new(table: ExportTable, config: DispatchConfig) -> Self {
        Self { table, config }
    }

    pub fn table(&self) -> &ExportTable {
        &self.table
    }

    pub fn config(&self) -> &DispatchConfig {
        &self.config
    }

    /// Run one call against `state`.
    ///
    /// `payload` is the encoded parameter bundle. Writes made to `state`
    /// before an abort stay in place.
    pub fn call(
        &self,
        target: CallTarget,
        payload: &[u8],
        oracle: &dyn CallerOracle,
        state: Arc<dyn HostStore>,
    ) -> CallOutcome {
        let mut invocation = Invocation::new(target);
        match self.run(&mut invocation, payload, oracle, state) {
            Ok(results) => {
                invocation.advance(Phase::Completed);
                CallOutcome {
                    invocation,
                    results: Some(results),
                    error: None,
                }
            }
            Err(err) => {
                warn!(
                    call = %target,
                    entry = invocation.entry().unwrap_or("-"),
                    phase = %invocation.phase(),
                    error = %err,
                    "invocation aborted"
                );
                invocation.advance(Phase::Aborted);
                CallOutcome {
                    invocation,
                    results: None,
                    error: Some(err),
                }
            }
        }
    }

    fn resolve(&self, target: CallTarget) -> DispatchResult<&EntryPoint> {
        let entry = match target {
            CallTarget::Hname(hname) => self.table.by_hname(hname),
            CallTarget::Index(index) => self.table.by_index(index),
        };
        entry.ok_or_else(|| DispatchError::UnknownEntryPoint(target.to_string()))
    }

    fn run(
        &self,
        invocation: &mut Invocation,
        payload: &[u8],
        oracle: &dyn CallerOracle,
        state: Arc<dyn HostStore>,
    ) -> DispatchResult<CallPayload> {
        invocation.advance(Phase::Resolving);
        let entry = self.resolve(invocation.target)?;
        invocation.entry = Some(entry.name().to_string());

        invocation.advance(Phase::Authorizing);
        self.config.check_payload_bytes(payload.len())?;
        let params = CallPayload::decode(payload)?;
        self.config.check_payload_entries(params.len())?;

        let info = CallInfo::from_oracle(oracle);
        let params = ImmutableRecord::new(Proxy::new(Arc::new(params.to_store())));
        let guarded = Arc::new(ReadOnlyHostStore::new(state.clone()));
        let readable = ImmutableRecord::new(Proxy::new(guarded.clone()));
        let check_ctx = CheckContext {
            info: &info,
            state: &readable,
            params: &params,
        };
        for check in entry.checks() {
            if let Err(err) = check.verify(&check_ctx) {
                debug!(entry = entry.name(), check = check.name(), "check failed");
                return Err(err);
            }
        }
        refuse_writes(&guarded)?;

        invocation.advance(Phase::Executing);
        let results_store = Arc::new(InMemoryHostStore::new());
        let results = MutableRecord::new(Proxy::new(results_store.clone()));
        match entry.handler() {
            Handler::Func(handler) => {
                let state = MutableRecord::new(Proxy::new(state));
                handler(&FuncContext::new(info, params, state, results))?;
            }
            Handler::View(handler) => {
                handler(&ViewContext::new(info, params, readable, results))?;
                refuse_writes(&guarded)?;
            }
        }
        Ok(CallPayload::from_store(&results_store))
    }
}

/// Abort if anything tried to write through a read-only state handle.
fn refuse_writes(store: &ReadOnlyHostStore) -> DispatchResult<()> {
    match store.rejected_write() {
        Some(key) => Err(DispatchError::ReadOnlyState(
            String::from_utf8_lossy(&key).into_owned(),
        )),
        None => Ok(()),
    }
}
