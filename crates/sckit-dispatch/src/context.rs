use serde::{Deserialize, Serialize};
use sckit_types::ScAgentId;
use sckit_views::{ImmutableRecord, MutableRecord};

use crate::error::{DispatchError, DispatchResult};

/// Source of the identities involved in a call.
///
/// Provided by the host; the dispatcher never derives identities itself.
pub trait CallerOracle {
    /// The identity that invoked the call.
    fn caller(&self) -> ScAgentId;

    /// The identity of the contract being executed.
    fn contract_id(&self) -> ScAgentId;

    /// The identity that owns the chain the contract runs on.
    fn chain_owner(&self) -> ScAgentId;
}

/// A fixed set of call identities.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CallInfo {
    pub caller: ScAgentId,
    pub contract: ScAgentId,
    pub chain_owner: ScAgentId,
}

impl CallInfo {
    pub fn new(caller: ScAgentId, contract: ScAgentId, chain_owner: ScAgentId) -> Self {
        Self {
            caller,
            contract,
            chain_owner,
        }
    }

    /// Capture the identities an oracle reports for the current call.
    pub fn from_oracle(oracle: &dyn CallerOracle) -> Self {
        Self::new(oracle.caller(), oracle.contract_id(), oracle.chain_owner())
    }

    /// The same call made by a different caller.
    pub fn with_caller(self, caller: ScAgentId) -> Self {
        Self { caller, ..self }
    }
}

impl CallerOracle for CallInfo {
    fn caller(&self) -> ScAgentId {
        self.caller
    }

    fn contract_id(&self) -> ScAgentId {
        self.contract
    }

    fn chain_owner(&self) -> ScAgentId {
        self.chain_owner
    }
}

/// Everything a state-mutating entry point sees.
pub struct FuncContext {
    info: CallInfo,
    params: ImmutableRecord,
    state: MutableRecord,
    results: MutableRecord,
}

impl FuncContext {
    pub(crate) fn new(
        info: CallInfo,
        params: ImmutableRecord,
        state: MutableRecord,
        results: MutableRecord,
    ) -> Self {
        Self {
            info,
            params,
            state,
            results,
        }
    }

    pub fn caller(&self) -> ScAgentId {
        self.info.caller
    }

    pub fn contract_id(&self) -> ScAgentId {
        self.info.contract
    }

    pub fn chain_owner(&self) -> ScAgentId {
        self.info.chain_owner
    }

    pub fn params(&self) -> &ImmutableRecord {
        &self.params
    }

    pub fn state(&self) -> &MutableRecord {
        &self.state
    }

    pub fn results(&self) -> &MutableRecord {
        &self.results
    }

    /// Abort the call with `message` unless `condition` holds.
    pub fn require(&self, condition: bool, message: &str) -> DispatchResult<()> {
        require(condition, message)
    }
}

/// Everything a read-only entry point sees. State cannot be written.
pub struct ViewContext {
    info: CallInfo,
    params: ImmutableRecord,
    state: ImmutableRecord,
    results: MutableRecord,
}

impl ViewContext {
    pub(crate) fn new(
        info: CallInfo,
        params: ImmutableRecord,
        state: ImmutableRecord,
        results: MutableRecord,
    ) -> Self {
        Self {
            info,
            params,
            state,
            results,
        }
    }

    pub fn caller(&self) -> ScAgentId {
        self.info.caller
    }

    pub fn contract_id(&self) -> ScAgentId {
        self.info.contract
    }

    pub fn chain_owner(&self) -> ScAgentId {
        self.info.chain_owner
    }

    pub fn params(&self) -> &ImmutableRecord {
        &self.params
    }

    pub fn state(&self) -> &ImmutableRecord {
        &self.state
    }

    pub fn results(&self) -> &MutableRecord {
        &self.results
    }

    pub fn require(&self, condition: bool, message: &str) -> DispatchResult<()> {
        require(condition, message)
    }
}

fn require(condition: bool, message: &str) -> DispatchResult<()> {
    if condition {
        Ok(())
    } else {
        Err(DispatchError::abort(message))
    }
}
