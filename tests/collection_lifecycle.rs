use epoch_merkle::{
    verify_proof, Collection, EmptyRootCache, EpochTag, LeafValue, MerkleError, BUCKET_MILLIS,
    EMPTY_LEAF,
};

#[test]
fn fresh_collection_proves_every_empty_slot() {
    let collection = Collection::new(2);
    let root = collection.root().unwrap();
    assert_eq!(root, EmptyRootCache::shared().root(2));
    for index in 0..collection.capacity() {
        let proof = collection.prove(index).unwrap();
        // Sentinel slots verify under any epoch.
        verify_proof(&root, &EMPTY_LEAF, EpochTag::from_unix_millis(0), &proof).unwrap();
    }
}

#[test]
fn registrations_fill_slots_left_to_right() {
    let mut collection = Collection::new(2);
    let epoch = EpochTag::from_unix_millis(0);

    let first = collection
        .register(LeafValue::from_text("hello world").unwrap(), epoch)
        .unwrap();
    assert_eq!(first.index, 0);
    assert_eq!(collection.used(), 1);
    assert_eq!(first.root, collection.root().unwrap());
    verify_proof(&first.root, collection.leaf(0).unwrap(), epoch, &first.proof).unwrap();

    let second = collection
        .register(LeafValue::from_text("high there").unwrap(), epoch)
        .unwrap();
    assert_eq!(second.index, 1);

    // Untouched slots still verify as empty against the latest root.
    let root = collection.root().unwrap();
    for index in 2..4 {
        let proof = collection.prove(index).unwrap();
        verify_proof(&root, &EMPTY_LEAF, epoch, &proof).unwrap();
    }
}

#[test]
fn slots_keep_their_commitment_epoch() {
    let mut collection = Collection::new(1);
    let early = EpochTag::from_unix_millis(0);
    let late = EpochTag::from_unix_millis(5 * BUCKET_MILLIS);

    collection
        .register(LeafValue::from_text("first work").unwrap(), early)
        .unwrap();
    collection
        .register(LeafValue::from_text("second work").unwrap(), late)
        .unwrap();

    let root = collection.root().unwrap();
    let first = collection.prove(0).unwrap();
    let second = collection.prove(1).unwrap();

    // Each slot verifies under the epoch it was committed in, not the
    // epoch of the most recent update.
    verify_proof(&root, collection.leaf(0).unwrap(), early, &first).unwrap();
    verify_proof(&root, collection.leaf(1).unwrap(), late, &second).unwrap();
    assert_eq!(
        verify_proof(&root, collection.leaf(0).unwrap(), late, &first),
        Err(MerkleError::VerificationFailed)
    );
}

#[test]
fn full_collection_rejects_registration() {
    let mut collection = Collection::new(1);
    let epoch = EpochTag::from_unix_millis(0);
    for text in ["a", "b"] {
        collection
            .register(LeafValue::from_text(text).unwrap(), epoch)
            .unwrap();
    }
    assert_eq!(
        collection
            .register(LeafValue::from_text("c").unwrap(), epoch)
            .unwrap_err(),
        MerkleError::CapacityExhausted { capacity: 2 }
    );
}

#[test]
fn expansion_preserves_existing_proofs() {
    let mut collection = Collection::new(2);
    let epoch = EpochTag::from_unix_millis(0);
    let registration = collection
        .register(LeafValue::from_text("hello world").unwrap(), epoch)
        .unwrap();

    let old_rank = collection.rank();
    let expanded_root = collection.expand().unwrap();
    assert_eq!(collection.capacity(), 8);
    assert_eq!(expanded_root, collection.root().unwrap());
    assert_eq!(
        expanded_root,
        epoch_merkle::node_hash(&registration.root, &EmptyRootCache::shared().root(old_rank as usize))
    );

    // The registered leaf still proves against the expanded root.
    let proof = collection.prove(0).unwrap();
    assert_eq!(proof.witnesses.len(), 3);
    verify_proof(&expanded_root, collection.leaf(0).unwrap(), epoch, &proof).unwrap();
}

#[test]
fn expansion_then_registration_uses_new_slots() {
    let mut collection = Collection::new(0);
    let epoch = EpochTag::from_unix_millis(0);
    collection
        .register(LeafValue::from_text("only").unwrap(), epoch)
        .unwrap();
    collection.expand().unwrap();
    let registration = collection
        .register(LeafValue::from_text("second").unwrap(), epoch)
        .unwrap();
    assert_eq!(registration.index, 1);
    assert_eq!(collection.capacity(), 2);
    verify_proof(
        &registration.root,
        collection.leaf(1).unwrap(),
        epoch,
        &registration.proof,
    )
    .unwrap();
}
