//! Path engine tests

use std::collections::HashMap;

use mockall::mock;
use mockall::predicate::always;

use pce_ctx_memory::{ContextMemory, InMemoryContext};

use crate::engine::{
    compute_path, compute_paths, PathStatus, PARAM_BACKUP_DST_NODE, PARAM_DST_NODE,
    PARAM_LINKS_PREFIX, PARAM_OUTPUT_END_TO_END, PARAM_PNFS_PREFIX, PARAM_REQUIRE_BACKUP,
    PARAM_RESPONSE_PREFIX, PARAM_SRC_NODE,
};
use crate::error::PathEngineError;
use crate::registry::{ComputePath, OperationRegistry};

fn node(provider: u32, ip: &str) -> String {
    format!(
        "networkId-providerId-{}-clientId-0-topologyId-1-nodeId-{}",
        provider, ip
    )
}

fn itf(provider: u32, ip: &str, ltp: u32) -> String {
    format!("{}-ltpId-{}", node(provider, ip), ltp)
}

fn set_link(ctx: &mut InMemoryContext, index: usize, name: &str, src: &str, dst: &str) {
    ctx.set(&format!("links[{}].link-type", index), "OTN");
    ctx.set(&format!("links[{}].link-name", index), name);
    ctx.set(&format!("links[{}].src-interface", index), src);
    ctx.set(&format!("links[{}].dst-interface", index), dst);
}

/// Five PNFs across two domains, linked by the given pairs. Both directions
/// of every physical link are recorded under one shared link name, with
/// indexes kept dense.
fn domain_context(pairs: &[(&str, String, String)]) -> InMemoryContext {
    let mut ctx = InMemoryContext::new();
    let pnfs = [
        node(10, "10.1.1.1"),
        node(10, "10.1.1.2"),
        node(10, "10.1.1.3"),
        node(20, "10.2.1.1"),
        node(20, "10.2.1.2"),
    ];
    for (index, name) in pnfs.iter().enumerate() {
        ctx.set(&format!("pnfs[{}].pnf-name", index), name);
    }
    let mut index = 0;
    for (name, src, dst) in pairs {
        set_link(&mut ctx, index, name, src, dst);
        set_link(&mut ctx, index + 1, name, dst, src);
        index += 2;
    }
    ctx
}

/// Two domains joined by two disjoint crossings:
///
/// ```text
///   a1 -- a2 ==== b1 -- b2
///    \           /
///     a3 =======
/// ```
///
/// `====` marks the cross-domain links.
fn two_domain_context() -> InMemoryContext {
    domain_context(&[
        ("a1-a2", itf(10, "10.1.1.1", 1), itf(10, "10.1.1.2", 1)),
        ("a1-a3", itf(10, "10.1.1.1", 2), itf(10, "10.1.1.3", 2)),
        ("cross-a2", itf(10, "10.1.1.2", 8), itf(20, "10.2.1.1", 8)),
        ("cross-a3", itf(10, "10.1.1.3", 8), itf(20, "10.2.1.1", 9)),
        ("b1-b2", itf(20, "10.2.1.1", 1), itf(20, "10.2.1.2", 1)),
    ])
}

/// Like [`two_domain_context`], but with `cross-a2` as the only crossing, so
/// no crossing is left over for a backup path.
fn one_crossing_context() -> InMemoryContext {
    domain_context(&[
        ("a1-a2", itf(10, "10.1.1.1", 1), itf(10, "10.1.1.2", 1)),
        ("a1-a3", itf(10, "10.1.1.1", 2), itf(10, "10.1.1.3", 2)),
        ("cross-a2", itf(10, "10.1.1.2", 8), itf(20, "10.2.1.1", 8)),
        ("b1-b2", itf(20, "10.2.1.1", 1), itf(20, "10.2.1.2", 1)),
    ])
}

fn base_params(src: &str, dst: &str) -> HashMap<String, String> {
    [
        (PARAM_PNFS_PREFIX, "pnfs"),
        (PARAM_LINKS_PREFIX, "links"),
        (PARAM_SRC_NODE, src),
        (PARAM_DST_NODE, dst),
        (PARAM_RESPONSE_PREFIX, "resp"),
    ]
    .into_iter()
    .map(|(k, v)| (k.to_string(), v.to_string()))
    .collect()
}

#[test]
fn compute_path_writes_cross_domain_hops() {
    let mut ctx = two_domain_context();
    let params = base_params(&node(10, "10.1.1.1"), &node(20, "10.2.1.2"));
    let status = compute_path(&params, &mut ctx).unwrap();
    assert_eq!(status, PathStatus::Success);
    // Default hop filter: only the crossing is reported.
    assert_eq!(ctx.get("resp.solutions_length").as_deref(), Some("1"));
    assert_eq!(
        ctx.get("resp.solutions[0].original_link").as_deref(),
        Some("cross-a2")
    );
    assert_eq!(
        ctx.get("resp.solutions[0].inner_domain").as_deref(),
        Some("false")
    );
}

#[test]
fn end_to_end_flag_emits_every_hop() {
    let mut ctx = two_domain_context();
    let mut params = base_params(&node(10, "10.1.1.1"), &node(20, "10.2.1.2"));
    params.insert(PARAM_OUTPUT_END_TO_END.to_string(), "True".to_string());
    let status = compute_path(&params, &mut ctx).unwrap();
    assert_eq!(status, PathStatus::Success);
    assert_eq!(ctx.get("resp.solutions_length").as_deref(), Some("3"));
    assert_eq!(
        ctx.get("resp.solutions[0].original_link").as_deref(),
        Some("a1-a2")
    );
    assert_eq!(
        ctx.get("resp.solutions[0].inner_domain").as_deref(),
        Some("true")
    );
}

#[test]
fn same_node_is_a_deterministic_trivial_solution() {
    for _ in 0..2 {
        let mut ctx = two_domain_context();
        let params = base_params(&node(10, "10.1.1.1"), &node(10, "10.1.1.1"));
        let status = compute_path(&params, &mut ctx).unwrap();
        assert_eq!(status, PathStatus::Success);
        assert_eq!(ctx.get("resp.solutions_length").as_deref(), Some("0"));
    }
}

#[test]
fn disconnected_nodes_report_not_found_with_empty_list() {
    let mut ctx = InMemoryContext::new();
    ctx.set("pnfs[0].pnf-name", &node(10, "10.1.1.1"));
    ctx.set("pnfs[1].pnf-name", &node(20, "10.2.1.1"));
    let params = base_params(&node(10, "10.1.1.1"), &node(20, "10.2.1.1"));
    let status = compute_path(&params, &mut ctx).unwrap();
    assert_eq!(status, PathStatus::NotFound);
    assert_eq!(ctx.get("resp.solutions_length").as_deref(), Some("0"));
}

#[test]
fn missing_parameter_names_the_key() {
    let mut ctx = two_domain_context();
    let mut params = base_params(&node(10, "10.1.1.1"), &node(20, "10.2.1.2"));
    params.remove(PARAM_RESPONSE_PREFIX);
    let err = compute_path(&params, &mut ctx).unwrap_err();
    match err {
        PathEngineError::MissingParameter { name } => assert_eq!(name, "response-pfx"),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn backup_requires_its_destination_parameter() {
    let mut ctx = two_domain_context();
    let mut params = base_params(&node(10, "10.1.1.1"), &node(20, "10.2.1.2"));
    params.insert(PARAM_REQUIRE_BACKUP.to_string(), "true".to_string());
    let err = compute_paths(&params, &mut ctx).unwrap_err();
    match err {
        PathEngineError::MissingParameter { name } => assert_eq!(name, "dst-node-backup"),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn backup_path_avoids_the_primary_crossing() {
    let mut ctx = two_domain_context();
    let mut params = base_params(&node(10, "10.1.1.1"), &node(20, "10.2.1.2"));
    params.insert(PARAM_REQUIRE_BACKUP.to_string(), "true".to_string());
    params.insert(PARAM_BACKUP_DST_NODE.to_string(), node(20, "10.2.1.2"));
    let status = compute_paths(&params, &mut ctx).unwrap();
    assert_eq!(status, PathStatus::Success);
    assert_eq!(
        ctx.get("resp.solutions[0].original_link").as_deref(),
        Some("cross-a2")
    );
    assert_eq!(ctx.get("resp.secondarySolutions_length").as_deref(), Some("1"));
    assert_eq!(
        ctx.get("resp.secondarySolutions[0].original_link").as_deref(),
        Some("cross-a3")
    );
}

#[test]
fn unsatisfiable_backup_is_failure_with_primary_kept() {
    let mut ctx = one_crossing_context();
    // Declared length covering all eight directed records.
    ctx.set("links_length", "8");

    let mut params = base_params(&node(10, "10.1.1.1"), &node(20, "10.2.1.2"));
    params.insert(PARAM_REQUIRE_BACKUP.to_string(), "true".to_string());
    params.insert(PARAM_BACKUP_DST_NODE.to_string(), node(20, "10.2.1.1"));
    let status = compute_paths(&params, &mut ctx).unwrap();
    assert_eq!(status, PathStatus::Failure);
    assert_eq!(ctx.get("resp.solutions_length").as_deref(), Some("1"));
    assert_eq!(ctx.get("resp.secondarySolutions_length").as_deref(), Some("0"));
}

#[test]
fn compute_paths_without_backup_flag_degrades_to_single_path() {
    let mut ctx = two_domain_context();
    let params = base_params(&node(10, "10.1.1.1"), &node(20, "10.2.1.2"));
    let status = compute_paths(&params, &mut ctx).unwrap();
    assert_eq!(status, PathStatus::Success);
    assert!(ctx.get("resp.secondarySolutions_length").is_none());
}

#[test]
fn malformed_topology_aborts_without_partial_results() {
    let mut ctx = two_domain_context();
    ctx.set("links[0].link-type", "SDH");
    let params = base_params(&node(10, "10.1.1.1"), &node(20, "10.2.1.2"));
    let err = compute_path(&params, &mut ctx).unwrap_err();
    assert!(matches!(err, PathEngineError::Topology(_)));
    assert!(ctx.get("resp.solutions_length").is_none());
}

#[test]
fn registries_are_independent() {
    let with_builtins = OperationRegistry::with_builtin_operations();
    assert!(with_builtins.get("compute-path").is_some());
    assert!(with_builtins.get("compute-paths").is_some());

    let mut custom = OperationRegistry::new();
    assert!(custom.get("compute-path").is_none());
    custom.register(std::sync::Arc::new(ComputePath));
    assert_eq!(custom.operation_names(), vec!["compute-path"]);
    // The other registry is unaffected by the new registration.
    assert_eq!(with_builtins.operation_names().len(), 2);
}

mock! {
    Ctx {}

    impl ContextMemory for Ctx {
        fn get(&self, key: &str) -> Option<String>;
        fn set(&mut self, key: &str, value: &str);
    }
}

#[test]
fn empty_context_still_receives_a_zero_length_result() {
    let mut ctx = MockCtx::new();
    ctx.expect_get().with(always()).returning(|_| None);
    ctx.expect_set()
        .withf(|key, value| key == "resp.solutions_length" && value == "0")
        .times(1)
        .return_const(());

    let params = base_params("node-a", "node-b");
    let status = compute_path(&params, &mut ctx).unwrap();
    assert_eq!(status, PathStatus::NotFound);
}
