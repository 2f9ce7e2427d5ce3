//! End-to-end owner-gated contract: init, setOwner, setOwnerMargin and the
//! getOwner/getOwnerMargin views.

use std::sync::Arc;

use sckit_dispatch::{
    CallInfo, CallPayload, CallTarget, DispatchConfig, DispatchError, Dispatcher, EntryPoint,
    ExportTable, FuncContext, Phase, ViewContext,
};
use sckit_store::{HostStore, InMemoryHostStore};
use sckit_types::{ScAddress, ScAddressKind, ScAgentId, ScChainId, ScHname, ScType};
use sckit_views::{Immutable, Mutable};

const STATE_OWNER: &str = "owner";
const STATE_OWNER_MARGIN: &str = "ownerMargin";
const PARAM_OWNER: &str = "owner";
const PARAM_OWNER_MARGIN: &str = "ownerMargin";
const RESULT_OWNER: &str = "owner";
const RESULT_OWNER_MARGIN: &str = "ownerMargin";

const DEFAULT_OWNER_MARGIN: u64 = 50;

fn func_init(ctx: &FuncContext) -> Result<(), DispatchError> {
    let param = ctx.params().field::<Immutable<ScAgentId>>(PARAM_OWNER);
    let owner = if param.exists() {
        param.value()?
    } else {
        ctx.caller()
    };
    ctx.state()
        .field::<Mutable<ScAgentId>>(STATE_OWNER)
        .set_value(&owner);
    ctx.state()
        .field::<Mutable<u64>>(STATE_OWNER_MARGIN)
        .set_value(&DEFAULT_OWNER_MARGIN);
    Ok(())
}

fn func_set_owner(ctx: &FuncContext) -> Result<(), DispatchError> {
    let owner = ctx.params().field::<Immutable<ScAgentId>>(PARAM_OWNER).value()?;
    ctx.state()
        .field::<Mutable<ScAgentId>>(STATE_OWNER)
        .set_value(&owner);
    Ok(())
}

fn func_set_owner_margin(ctx: &FuncContext) -> Result<(), DispatchError> {
    let margin = ctx
        .params()
        .field::<Immutable<u64>>(PARAM_OWNER_MARGIN)
        .value()?;
    ctx.require(margin <= 1000, "owner margin out of range")?;
    ctx.state()
        .field::<Mutable<u64>>(STATE_OWNER_MARGIN)
        .set_value(&margin);
    Ok(())
}

fn view_get_owner(ctx: &ViewContext) -> Result<(), DispatchError> {
    let owner = ctx.state().field::<Immutable<ScAgentId>>(STATE_OWNER).value()?;
    ctx.results()
        .field::<Mutable<ScAgentId>>(RESULT_OWNER)
        .set_value(&owner);
    Ok(())
}

fn view_get_owner_margin(ctx: &ViewContext) -> Result<(), DispatchError> {
    let margin = ctx.state().field::<Immutable<u64>>(STATE_OWNER_MARGIN).value()?;
    ctx.results()
        .field::<Mutable<u64>>(RESULT_OWNER_MARGIN)
        .set_value(&margin);
    Ok(())
}

fn contract() -> Dispatcher {
    let table = ExportTable::builder()
        .entry(EntryPoint::func("init", func_init))
        .entry(
            EntryPoint::func("setOwner", func_set_owner)
                .owner_only(STATE_OWNER)
                .mandatory([PARAM_OWNER]),
        )
        .entry(
            EntryPoint::func("setOwnerMargin", func_set_owner_margin)
                .owner_only(STATE_OWNER)
                .mandatory([PARAM_OWNER_MARGIN]),
        )
        .entry(EntryPoint::view("getOwner", view_get_owner))
        .entry(EntryPoint::view("getOwnerMargin", view_get_owner_margin))
        .build()
        .unwrap();
    Dispatcher::new(table, DispatchConfig::default())
}

fn agent(b: u8) -> ScAgentId {
    ScAgentId::from_address(ScAddress::new(ScAddressKind::Ed25519, [b; 32]))
}

fn call_info(caller: ScAgentId) -> CallInfo {
    let chain = ScChainId::from_array([7; 32]);
    let contract = ScAgentId::for_contract(&chain, ScHname::from_name("ownermargin"));
    CallInfo::new(caller, contract, agent(99))
}

fn margin_params(margin: u64) -> Vec<u8> {
    let mut params = CallPayload::new();
    params.set(PARAM_OWNER_MARGIN, &margin);
    params.encode()
}

fn read_margin(d: &Dispatcher, state: &Arc<InMemoryHostStore>) -> u64 {
    d.call(
        CallTarget::name("getOwnerMargin"),
        &[],
        &call_info(agent(50)),
        state.clone(),
    )
    .into_result()
    .unwrap()
    .value::<u64>(RESULT_OWNER_MARGIN)
    .unwrap()
}

#[test]
fn owner_sets_margin_to_500() {
    let d = contract();
    let state = Arc::new(InMemoryHostStore::new());
    let owner = agent(1);

    let init = d.call(CallTarget::name("init"), &[], &call_info(owner), state.clone());
    assert!(init.is_completed());
    assert_eq!(read_margin(&d, &state), DEFAULT_OWNER_MARGIN);

    let outcome = d.call(
        CallTarget::name("setOwnerMargin"),
        &margin_params(500),
        &call_info(owner),
        state.clone(),
    );
    assert!(outcome.is_completed(), "{:?}", outcome.message());
    assert_eq!(read_margin(&d, &state), 500);
}

#[test]
fn non_owner_cannot_change_margin() {
    let d = contract();
    let state = Arc::new(InMemoryHostStore::new());
    d.call(CallTarget::name("init"), &[], &call_info(agent(1)), state.clone());
    let before = state.get(STATE_OWNER_MARGIN.as_bytes());

    let outcome = d.call(
        CallTarget::name("setOwnerMargin"),
        &margin_params(500),
        &call_info(agent(2)),
        state.clone(),
    );
    assert_eq!(outcome.phase(), Phase::Aborted);
    assert_eq!(outcome.error, Some(DispatchError::NoPermission));
    assert_eq!(outcome.message().as_deref(), Some("no permission"));
    assert!(!outcome.invocation.history().contains(&Phase::Executing));

    assert_eq!(state.get(STATE_OWNER_MARGIN.as_bytes()), before);
    assert_eq!(read_margin(&d, &state), DEFAULT_OWNER_MARGIN);
}

#[test]
fn owner_only_before_init_is_access_not_set() {
    let d = contract();
    let state = Arc::new(InMemoryHostStore::new());
    let outcome = d.call(
        CallTarget::name("setOwnerMargin"),
        &margin_params(500),
        &call_info(agent(1)),
        state.clone(),
    );
    assert_eq!(outcome.message().as_deref(), Some("access not set: owner"));
    assert!(state.is_empty());
}

#[test]
fn missing_margin_parameter() {
    let d = contract();
    let state = Arc::new(InMemoryHostStore::new());
    let owner = agent(1);
    d.call(CallTarget::name("init"), &[], &call_info(owner), state.clone());

    let outcome = d.call(
        CallTarget::name("setOwnerMargin"),
        &[],
        &call_info(owner),
        state.clone(),
    );
    assert_eq!(
        outcome.error,
        Some(DispatchError::MissingParameter(PARAM_OWNER_MARGIN.into()))
    );
}

#[test]
fn handler_requirement_aborts() {
    let d = contract();
    let state = Arc::new(InMemoryHostStore::new());
    let owner = agent(1);
    d.call(CallTarget::name("init"), &[], &call_info(owner), state.clone());

    let outcome = d.call(
        CallTarget::name("setOwnerMargin"),
        &margin_params(5000),
        &call_info(owner),
        state.clone(),
    );
    assert_eq!(outcome.message().as_deref(), Some("owner margin out of range"));
    assert_eq!(read_margin(&d, &state), DEFAULT_OWNER_MARGIN);
}

#[test]
fn ownership_transfer() {
    let d = contract();
    let state = Arc::new(InMemoryHostStore::new());
    let (first, second) = (agent(1), agent(2));

    let mut params = CallPayload::new();
    params.set(PARAM_OWNER, &first);
    d.call(CallTarget::name("init"), &params.encode(), &call_info(agent(9)), state.clone());

    let mut params = CallPayload::new();
    params.set(PARAM_OWNER, &second);
    let outcome = d.call(
        CallTarget::name("setOwner"),
        &params.encode(),
        &call_info(first),
        state.clone(),
    );
    assert!(outcome.is_completed());

    let results = d
        .call(CallTarget::name("getOwner"), &[], &call_info(first), state.clone())
        .into_result()
        .unwrap();
    assert_eq!(results.value::<ScAgentId>(RESULT_OWNER).unwrap(), second);
    assert_eq!(
        results.get(RESULT_OWNER.as_bytes()).unwrap(),
        second.to_bytes().as_slice()
    );

    let outcome = d.call(
        CallTarget::name("setOwnerMargin"),
        &margin_params(1),
        &call_info(first),
        state.clone(),
    );
    assert_eq!(outcome.error, Some(DispatchError::NoPermission));
}

#[test]
fn unresolved_hname() {
    let d = contract();
    let outcome = d.call(
        CallTarget::name("setOwnerMarginX"),
        &[],
        &call_info(agent(1)),
        Arc::new(InMemoryHostStore::new()),
    );
    assert!(matches!(
        outcome.error,
        Some(DispatchError::UnknownEntryPoint(_))
    ));
    assert_eq!(outcome.invocation.history().last(), Some(&Phase::Aborted));
}

#[test]
fn entry_points_by_index_follow_declaration_order() {
    let d = contract();
    assert_eq!(
        d.table().names().collect::<Vec<_>>(),
        vec!["init", "setOwner", "setOwnerMargin", "getOwner", "getOwnerMargin"]
    );
    let state = Arc::new(InMemoryHostStore::new());
    d.call(CallTarget::Index(0), &[], &call_info(agent(1)), state.clone());
    let results = d
        .call(CallTarget::Index(4), &[], &call_info(agent(1)), state)
        .into_result()
        .unwrap();
    assert_eq!(results.value::<u64>(RESULT_OWNER_MARGIN).unwrap(), DEFAULT_OWNER_MARGIN);
}

#[test]
fn deployed_hnames_resolve() {
    let d = contract();
    let state = Arc::new(InMemoryHostStore::new());
    let owner = agent(1);

    let init = d.call(
        CallTarget::Hname(ScHname(0x1f44_d644)),
        &[],
        &call_info(owner),
        state.clone(),
    );
    assert_eq!(init.invocation.entry(), Some("init"));
    assert!(init.is_completed());

    let outcome = d.call(
        CallTarget::Hname(ScHname(0x1774_461a)),
        &margin_params(500),
        &call_info(owner),
        state.clone(),
    );
    assert_eq!(outcome.invocation.entry(), Some("setOwnerMargin"));
    assert!(outcome.is_completed(), "{:?}", outcome.message());
    assert_eq!(read_margin(&d, &state), 500);
}
