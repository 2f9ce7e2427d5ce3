use std::fmt;

use serde::{Deserialize, Serialize};
use sckit_types::ScHname;

use crate::checks::{AccessCheck, ChainOwnerOnly, OwnerOnly, RequireParams, SelfOnly};
use crate::context::{FuncContext, ViewContext};
use crate::error::DispatchResult;

/// Handler of a state-mutating entry point.
pub type FuncHandler = Box<dyn Fn(&FuncContext) -> DispatchResult<()> + Send + Sync>;

/// Handler of a read-only entry point.
pub type ViewHandler = Box<dyn Fn(&ViewContext) -> DispatchResult<()> + Send + Sync>;

/// Whether an entry point may write persistent state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    Func,
    View,
}

impl fmt::Display for EntryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Func => write!(f, "func"),
            Self::View => write!(f, "view"),
        }
    }
}

pub(crate) enum Handler {
    Func(FuncHandler),
    View(ViewHandler),
}

/// A named, hash-addressed callable unit plus the checks that guard it.
pub struct EntryPoint {
    name: String,
    hname: ScHname,
    handler: Handler,
    checks: Vec<Box<dyn AccessCheck>>,
}

impl EntryPoint {
    /// A state-mutating entry point.
    pub fn func<F>(name: impl Into<String>, handler: F) -> Self
    where
        F: Fn(&FuncContext) -> DispatchResult<()> + Send + Sync + 'static,
    {
        Self::with_handler(name.into(), Handler::Func(Box::new(handler)))
    }

    /// A read-only entry point.
    pub fn view<F>(name: impl Into<String>, handler: F) -> Self
    where
        F: Fn(&ViewContext) -> DispatchResult<()> + Send + Sync + 'static,
    {
        Self::with_handler(name.into(), Handler::View(Box::new(handler)))
    }

    fn with_handler(name: String, handler: Handler) -> Self {
        let hname = ScHname::from_name(&name);
        Self {
            name,
            hname,
            handler,
            checks: Vec::new(),
        }
    }

    /// Append a check. Checks run in the order they were added.
    pub fn check(mut self, check: impl AccessCheck + 'static) -> Self {
        self.checks.push(Box::new(check));
        self
    }

    /// Restrict to the agent stored in state field `field`.
    pub fn owner_only(self, field: impl Into<String>) -> Self {
        self.check(OwnerOnly::new(field))
    }

    /// Restrict to calls made by the contract itself.
    pub fn self_only(self) -> Self {
        self.check(SelfOnly)
    }

    /// Restrict to the chain owner.
    pub fn chain_owner_only(self) -> Self {
        self.check(ChainOwnerOnly)
    }

    /// Require the named parameters to be present.
    pub fn mandatory<I, S>(self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.check(RequireParams::new(names))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn hname(&self) -> ScHname {
        self.hname
    }

    pub fn kind(&self) -> EntryKind {
        match self.handler {
            Handler::Func(_) => EntryKind::Func,
            Handler::View(_) => EntryKind::View,
        }
    }

    pub fn checks(&self) -> &[Box<dyn AccessCheck>] {
        &self.checks
    }

    pub(crate) fn handler(&self) -> &Handler {
        &self.handler
    }
}

impl fmt::Debug for EntryPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let checks: Vec<&str> = self.checks.iter().map(|c| c.name()).collect();
        f.debug_struct("EntryPoint")
            .field("name", &self.name)
            .field("hname", &self.hname)
            .field("kind", &self.kind())
            .field("checks", &checks)
            .finish()
    }
}
