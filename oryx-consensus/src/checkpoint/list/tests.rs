//! Tests for CheckpointList

use super::*;

use oryx_chain::parameters::Network::*;

/// The hard-coded mainnet list parses, and its contents are reachable
/// through the read API.
#[test]
fn checkpoint_list_hard_coded_mainnet() -> Result<(), BoxError> {
    oryx_test::init();

    let list = CheckpointList::new(Mainnet);

    assert!(!list.is_empty());
    assert!(list.contains(block::Height(0)));
    assert_eq!(
        list.hash(block::Height(0)),
        Some(parameters::genesis_hash(Mainnet))
    );
    assert_eq!(
        list.hash(block::Height(95350)),
        Some("095f1cb3cf1f1300ad99f891c2c0bb13cc374d9215781ad988e82cc0086a8e45".parse()?)
    );
    assert_eq!(list.max_height(), Some(block::Height(95350)));

    // a height between two checkpoints is not checkpointed
    assert!(!list.contains(block::Height(50)));
    assert_eq!(list.hash(block::Height(50)), None);

    Ok(())
}

/// The testnet has no checkpoints, and an empty list is valid.
#[test]
fn checkpoint_list_hard_coded_testnet() {
    oryx_test::init();

    let list = CheckpointList::new(Testnet);

    assert!(list.is_empty());
    assert_eq!(list.len(), 0);
    assert_eq!(list.max_height(), None);
    assert!(!list.contains(block::Height(0)));
}

#[test]
fn checkpoint_list_empty_from_list() -> Result<(), BoxError> {
    oryx_test::init();

    let list = CheckpointList::from_list(Vec::new())?;
    assert!(list.is_empty());

    Ok(())
}

/// Lines that are not exactly `height hash` fail to parse.
#[test]
fn checkpoint_list_parse_bad_format_fail() {
    oryx_test::init();

    "0"
        .parse::<CheckpointList>()
        .expect_err("a line with one field should fail");
    "0 4b0d7f133c5267d715d4d8992635a5490d1edd6b7072cce3f8fe116aba983b6a extra"
        .parse::<CheckpointList>()
        .expect_err("a line with three fields should fail");
    "0 nothex"
        .parse::<CheckpointList>()
        .expect_err("a malformed hash should fail");
    "ten 4b0d7f133c5267d715d4d8992635a5490d1edd6b7072cce3f8fe116aba983b6a"
        .parse::<CheckpointList>()
        .expect_err("a malformed height should fail");
}

#[test]
fn checkpoint_list_duplicate_heights_fail() {
    oryx_test::init();

    let checkpoint_data = vec![
        (block::Height(100), block::Hash([0x01; 32])),
        (block::Height(100), block::Hash([0x02; 32])),
    ];

    let _ = CheckpointList::from_list(checkpoint_data)
        .expect_err("a checkpoint list with duplicate heights should fail");
}

#[test]
fn checkpoint_list_duplicate_hashes_fail() {
    oryx_test::init();

    let checkpoint_data = vec![
        (block::Height(100), block::Hash([0x01; 32])),
        (block::Height(200), block::Hash([0x01; 32])),
    ];

    let _ = CheckpointList::from_list(checkpoint_data)
        .expect_err("a checkpoint list with duplicate hashes should fail");
}

#[test]
fn checkpoint_list_null_hash_fail() {
    oryx_test::init();

    let checkpoint_data = vec![(block::Height(100), block::Hash([0; 32]))];

    let _ = CheckpointList::from_list(checkpoint_data)
        .expect_err("a checkpoint list with a null hash should fail");
}

/// A height-0 checkpoint must match a known network genesis hash.
#[test]
fn checkpoint_list_bad_genesis_fail() {
    oryx_test::init();

    let checkpoint_data = vec![(block::Height(0), block::Hash([0x42; 32]))];

    let _ = CheckpointList::from_list(checkpoint_data)
        .expect_err("a checkpoint list with a wrong genesis hash should fail");
}

#[test]
fn checkpoint_list_bad_height_fail() {
    oryx_test::init();

    let checkpoint_data = vec![(
        block::Height(block::Height::MAX.0 + 1),
        block::Hash([0x01; 32]),
    )];

    let _ = CheckpointList::from_list(checkpoint_data).expect_err(
        "a checkpoint list with an invalid block height (block::Height::MAX + 1) should fail",
    );

    let checkpoint_data = vec![(block::Height(u32::MAX), block::Hash([0x01; 32]))];

    let _ = CheckpointList::from_list(checkpoint_data)
        .expect_err("a checkpoint list with an invalid block height (u32::MAX) should fail");
}

/// The descending iterator visits checkpoints from the highest height down.
#[test]
fn checkpoint_list_descending_order() -> Result<(), BoxError> {
    oryx_test::init();

    let checkpoint_data = vec![
        (block::Height(0), parameters::genesis_hash(Network::Mainnet)),
        (block::Height(5), block::Hash([0x05; 32])),
        (block::Height(10), block::Hash([0x0a; 32])),
    ];

    let list = CheckpointList::from_list(checkpoint_data)?;
    let heights: Vec<block::Height> = list.iter_descending().map(|(height, _)| height).collect();

    assert_eq!(
        heights,
        vec![block::Height(10), block::Height(5), block::Height(0)]
    );

    Ok(())
}
