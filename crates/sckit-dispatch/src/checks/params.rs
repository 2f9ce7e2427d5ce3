use crate::checks::{AccessCheck, CheckContext};
use crate::error::{DispatchError, DispatchResult};

/// Named parameters that must be present in the call payload.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RequireParams {
    names: Vec<String>,
}

impl RequireParams {
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            names: names.into_iter().map(Into::into).collect(),
        }
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }
}

impl AccessCheck for RequireParams {
    fn name(&self) -> &str {
        "mandatory-params"
    }

    fn verify(&self, ctx: &CheckContext<'_>) -> DispatchResult<()> {
        match self.names.iter().find(|name| !ctx.params.exists(name)) {
            Some(missing) => Err(DispatchError::MissingParameter(missing.clone())),
            None => Ok(()),
        }
    }
}
