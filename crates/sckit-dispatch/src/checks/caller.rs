use crate::checks::{AccessCheck, CheckContext};
use crate::error::{DispatchError, DispatchResult};

/// Only the contract itself may call this entry point.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SelfOnly;

impl AccessCheck for SelfOnly {
    fn name(&self) -> &str {
        "self-only"
    }

    fn verify(&self, ctx: &CheckContext<'_>) -> DispatchResult<()> {
        if ctx.info.caller != ctx.info.contract {
            return Err(DispatchError::NoPermission);
        }
        Ok(())
    }
}

/// Only the owner of the chain may call this entry point.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ChainOwnerOnly;

impl AccessCheck for ChainOwnerOnly {
    fn name(&self) -> &str {
        "chain-owner-only"
    }

    fn verify(&self, ctx: &CheckContext<'_>) -> DispatchResult<()> {
        if ctx.info.caller != ctx.info.chain_owner {
            return Err(DispatchError::NoPermission);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checks::fixtures::{agent, info, record};

    #[test]
    fn self_only() {
        let (_, state) = record();
        let (_, params) = record();
        let external = info(agent(1));
        let internal = external.with_caller(external.contract);

        let ctx = CheckContext {
            info: &external,
            state: &state,
            params: &params,
        };
        assert_eq!(SelfOnly.verify(&ctx).unwrap_err(), DispatchError::NoPermission);

        let ctx = CheckContext {
            info: &internal,
            state: &state,
            params: &params,
        };
        assert!(SelfOnly.verify(&ctx).is_ok());
    }

    #[test]
    fn chain_owner_only() {
        let (_, state) = record();
        let (_, params) = record();
        let owner = info(agent(200));
        let other = info(agent(3));

        let ctx = CheckContext {
            info: &owner,
            state: &state,
            params: &params,
        };
        assert!(ChainOwnerOnly.verify(&ctx).is_ok());

        let ctx = CheckContext {
            info: &other,
            state: &state,
            params: &params,
        };
        assert!(ChainOwnerOnly.verify(&ctx).is_err());
    }
}
