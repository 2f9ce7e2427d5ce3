//! Caller-authorization checks run before an entry point's handler.
//!
//! Checks run in declaration order and stop at the first failure, so the
//! handler never observes a call that failed one of its preconditions.

pub mod caller;
pub mod owner;
pub mod params;

pub use caller::{ChainOwnerOnly, SelfOnly};
pub use owner::OwnerOnly;
pub use params::RequireParams;

use sckit_views::ImmutableRecord;

use crate::context::CallInfo;
use crate::error::DispatchResult;

/// What a check can inspect: the call identities, persistent state and the
/// incoming parameters.
pub struct CheckContext<'a> {
    pub info: &'a CallInfo,
    pub state: &'a ImmutableRecord,
    pub params: &'a ImmutableRecord,
}

/// A single precondition on an entry point.
///
/// Object-safe and `Send + Sync` so checks can live in a
/// `Vec<Box<dyn AccessCheck>>` inside an immutable export table.
pub trait AccessCheck: Send + Sync {
    /// Short name used in logs, e.g. "owner-only".
    fn name(&self) -> &str;

    /// Fail with the abort reason if the call may not proceed.
    fn verify(&self, ctx: &CheckContext<'_>) -> DispatchResult<()>;
}
