//! Call dispatch and caller authorization for sandboxed contracts.
//!
//! A contract exports a fixed [`ExportTable`] of entry points, each
//! addressed by the 4-byte hname of its name or by its position in the
//! table. The [`Dispatcher`] takes an incoming call through its phases:
//!
//! ```text
//! Idle -> Resolving -> Authorizing -> Executing -> Completed
//!              \            \             \
//!               +------------+-------------+--> Aborted
//! ```
//!
//! Resolving finds the entry point. Authorizing decodes the parameter
//! bundle and runs the entry's [`AccessCheck`]s. Executing hands the
//! handler a [`FuncContext`] or [`ViewContext`] with typed views over the
//! parameters, persistent state and an empty results bundle.
//!
//! # Quick Start
//!
//! ```rust
//! use std::sync::Arc;
//!
//! use sckit_dispatch::{CallInfo, CallTarget, DispatchConfig, Dispatcher, EntryPoint, ExportTable};
//! use sckit_store::InMemoryHostStore;
//! use sckit_views::{Immutable, Mutable};
//!
//! let table = ExportTable::builder()
//!     .entry(EntryPoint::func("setName", |ctx| {
//!         let name = ctx.params().field::<Immutable<String>>("name").value()?;
//!         ctx.state().field::<Mutable<String>>("name").set_value(&name);
//!         Ok(())
//!     }).mandatory(["name"]))
//!     .build()
//!     .unwrap();
//! let dispatcher = Dispatcher::new(table, DispatchConfig::default());
//!
//! let outcome = dispatcher.call(
//!     CallTarget::name("setName"),
//!     &[],
//!     &CallInfo::default(),
//!     Arc::new(InMemoryHostStore::new()),
//! );
//! assert_eq!(outcome.message().as_deref(), Some("missing mandatory name"));
//! ```

pub mod checks;
pub mod config;
pub mod context;
pub mod dispatcher;
pub mod entry;
pub mod error;
pub mod payload;
pub mod table;

pub use checks::{AccessCheck, ChainOwnerOnly, CheckContext, OwnerOnly, RequireParams, SelfOnly};
pub use config::DispatchConfig;
pub use context::{CallInfo, CallerOracle, FuncContext, ViewContext};
pub use dispatcher::{CallOutcome, CallTarget, Dispatcher, Invocation, Phase};
pub use entry::{EntryKind, EntryPoint, FuncHandler, ViewHandler};
pub use error::{DispatchError, DispatchResult};
pub use payload::CallPayload;
pub use table::{ExportTable, ExportTableBuilder};
