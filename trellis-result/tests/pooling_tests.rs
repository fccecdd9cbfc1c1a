//! Integration tests for pooled result ownership.
//!
//! These exercise the full rent → build → seal → release cycle and verify
//! the accounting obligations: every rented node comes back exactly once,
//! release is one-shot, and nothing leaks on abandonment.

use std::sync::Arc;

use trellis_result::{
    PoolConfig, ResultBuilder, ResultMemoryOwner, ResultPool, ResultValue, Value,
};

/// Builds `{"user": {"name": "Ada", "roles": ["admin", "dev"]}}` and
/// returns the sealed owner. Rents three nodes: the root, the user object,
/// and the roles list.
fn build_user_tree(pool: &Arc<ResultPool>) -> ResultMemoryOwner {
    let mut builder = ResultBuilder::new(Arc::clone(pool));

    let mut user = builder.rent_object();
    user.insert("name", Value::from("Ada"));

    let mut roles = builder.rent_list();
    roles.push(Value::from("admin"));
    roles.push(Value::from("dev"));
    user.insert("roles", roles);

    builder.root_mut().insert("user", user);
    builder.seal()
}

#[test]
fn release_returns_every_node_exactly_once() {
    let pool = Arc::new(ResultPool::default());

    let owner = build_user_tree(&pool);
    assert_eq!(pool.metrics().rented(), 3);
    assert_eq!(pool.metrics().returned(), 0);

    owner.release();
    assert_eq!(pool.metrics().returned(), 3);
    assert_eq!(pool.metrics().outstanding(), 0);
    assert_eq!(pool.retained_objects(), 2);
    assert_eq!(pool.retained_lists(), 1);
}

#[test]
fn explicit_release_and_drop_glue_do_not_double_return() {
    let pool = Arc::new(ResultPool::default());

    let owner = build_user_tree(&pool);
    // release(self) consumes the owner and runs the same teardown the
    // drop glue would; the counters must move exactly once.
    owner.release();

    assert_eq!(pool.metrics().rented(), pool.metrics().returned());
    assert_eq!(pool.metrics().returned(), 3);
}

#[test]
fn dropping_the_owner_releases_like_an_explicit_release() {
    let pool = Arc::new(ResultPool::default());

    {
        let _owner = build_user_tree(&pool);
    }

    assert_eq!(pool.metrics().outstanding(), 0);
}

#[test]
fn data_is_readable_until_release() {
    let pool = Arc::new(ResultPool::default());
    let owner = build_user_tree(&pool);

    let user = owner
        .data()
        .and_then(|root| root.get("user"))
        .and_then(ResultValue::as_object)
        .expect("user object");
    assert_eq!(
        user.get("name").and_then(ResultValue::as_leaf),
        Some(&Value::from("Ada"))
    );

    owner.release();
}

#[test]
fn empty_owner_supports_data_less_responses() {
    let pool = Arc::new(ResultPool::default());
    let owner = ResultMemoryOwner::empty(Arc::clone(&pool));

    assert!(owner.data().is_none());
    owner.release();
    assert_eq!(pool.metrics().rented(), 0);
    assert_eq!(pool.metrics().returned(), 0);
}

#[test]
fn abandoned_builder_leaks_nothing() {
    let pool = Arc::new(ResultPool::default());

    {
        let mut builder = ResultBuilder::new(Arc::clone(&pool));
        let mut partial = builder.rent_object();
        partial.insert("id", Value::Int(7));
        builder.root_mut().insert("partial", partial);
        // Request cancelled: builder dropped without seal().
    }

    assert_eq!(pool.metrics().outstanding(), 0);
}

#[test]
fn released_nodes_are_reused_by_the_next_request() {
    let pool = Arc::new(ResultPool::default());

    build_user_tree(&pool).release();
    let first_allocated = pool.metrics().allocated();

    build_user_tree(&pool).release();
    assert_eq!(pool.metrics().allocated(), first_allocated);
    assert!(pool.metrics().reused() >= 3);
}

#[test]
fn subtrees_can_be_populated_on_worker_threads() {
    let pool = Arc::new(ResultPool::default());
    let mut builder = ResultBuilder::new(Arc::clone(&pool));

    // Fan out sibling list elements to workers; each writes into a node
    // it exclusively owns, then the results are attached in order.
    let mut handles = Vec::new();
    for i in 0..4_i64 {
        let worker_pool = Arc::clone(builder.pool());
        handles.push(std::thread::spawn(move || {
            let mut element = worker_pool.rent_object();
            element.insert("id", Value::Int(i));
            element
        }));
    }

    let mut items = builder.rent_list();
    for handle in handles {
        items.push(handle.join().expect("worker panicked"));
    }
    builder.root_mut().insert("items", items);

    let owner = builder.seal();
    let list = owner
        .data()
        .and_then(|root| root.get("items"))
        .and_then(ResultValue::as_list)
        .expect("items list");
    assert_eq!(list.len(), 4);

    owner.release();
    assert_eq!(pool.metrics().outstanding(), 0);
}

#[test]
fn retention_cap_applies_across_whole_trees() {
    let pool = Arc::new(ResultPool::new(PoolConfig { max_retained: 1 }));

    build_user_tree(&pool).release();

    assert_eq!(pool.metrics().returned(), 3);
    assert_eq!(pool.retained_objects(), 1);
    assert_eq!(pool.retained_lists(), 1);
}

#[test]
fn owner_data_serializes_to_the_expected_shape() {
    let pool = Arc::new(ResultPool::default());
    let owner = build_user_tree(&pool);

    let json = serde_json::to_value(owner.data().expect("data")).expect("serializable");
    assert_eq!(
        json,
        serde_json::json!({
            "user": {"name": "Ada", "roles": ["admin", "dev"]}
        })
    );
}
