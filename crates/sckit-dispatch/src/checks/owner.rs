use sckit_types::ScAgentId;
use sckit_views::Immutable;

use crate::checks::{AccessCheck, CheckContext};
use crate::error::{DispatchError, DispatchResult};

/// The caller must equal the identity stored in a state field.
///
/// Fails with "access not set" while the field is empty and with
/// "no permission" for any other caller.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OwnerOnly {
    field: String,
}

impl OwnerOnly {
    /// Check against the agent id stored in state field `field`.
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
        }
    }

    pub fn field(&self) -> &str {
        &self.field
    }
}

impl AccessCheck for OwnerOnly {
    fn name(&self) -> &str {
        "owner-only"
    }

    fn verify(&self, ctx: &CheckContext<'_>) -> DispatchResult<()> {
        let access = ctx.state.field::<Immutable<ScAgentId>>(&self.field);
        if !access.exists() {
            return Err(DispatchError::AccessNotSet(self.field.clone()));
        }
        if access.value()? != ctx.info.caller {
            return Err(DispatchError::NoPermission);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use sckit_views::Mutable;

    use super::*;
    use crate::checks::fixtures::{agent, info, record};

    #[test]
    fn unset_owner_is_access_not_set() {
        let (_, state) = record();
        let (_, params) = record();
        let info = info(agent(1));
        let ctx = CheckContext {
            info: &info,
            state: &state,
            params: &params,
        };
        assert_eq!(
            OwnerOnly::new("owner").verify(&ctx).unwrap_err(),
            DispatchError::AccessNotSet("owner".into())
        );
    }

    #[test]
    fn owner_must_match_caller() {
        let (writer, state) = record();
        let (_, params) = record();
        writer.field::<Mutable<ScAgentId>>("owner").set_value(&agent(1));
        let check = OwnerOnly::new("owner");

        let stranger = info(agent(2));
        let ctx = CheckContext {
            info: &stranger,
            state: &state,
            params: &params,
        };
        assert_eq!(check.verify(&ctx).unwrap_err(), DispatchError::NoPermission);

        let owner = info(agent(1));
        let ctx = CheckContext {
            info: &owner,
            state: &state,
            params: &params,
        };
        assert!(check.verify(&ctx).is_ok());
    }

    #[test]
    fn corrupt_owner_field_is_a_codec_error() {
        let (writer, state) = record();
        let (_, params) = record();
        writer.field::<Mutable<Vec<u8>>>("owner").set_value(&vec![1, 2, 3]);
        let info = info(agent(1));
        let ctx = CheckContext {
            info: &info,
            state: &state,
            params: &params,
        };
        assert!(matches!(
            OwnerOnly::new("owner").verify(&ctx),
            Err(DispatchError::Codec(_))
        ));
    }
}
