// ==============================================
// CRDT CONVERGENCE PROPERTIES (integration)
// ==============================================
//
// Simulated multi-replica deployments: each replica mutates its own counter
// and replicas exchange clones for merging, as a gossip transport would.

use clusterkit::crdt::{Convergent, GCounter, PNCounter};

// ==============================================
// G-Counter
// ==============================================

#[test]
fn three_replicas_converge_regardless_of_merge_order() {
    let mut a = GCounter::new("a");
    let mut b = GCounter::new("b");
    let mut c = GCounter::new("c");

    a.increment_by(5);
    b.increment_by(3);
    c.increment_by(9);

    // (a ⊔ b) ⊔ c
    let mut left = a.clone();
    left.merge(&b);
    left.merge(&c);

    // (a ⊔ c) ⊔ b
    let mut right = a.clone();
    right.merge(&c);
    right.merge(&b);

    assert_eq!(left.value(), 17);
    assert_eq!(left.value(), right.value());
    assert_eq!(left, right);
}

#[test]
fn pairwise_gossip_round_reaches_agreement() {
    let mut replicas: Vec<GCounter> = (0..4)
        .map(|i| GCounter::new(format!("replica-{}", i)))
        .collect();

    for (i, replica) in replicas.iter_mut().enumerate() {
        replica.increment_by((i as u64 + 1) * 10);
    }

    // Full mesh exchange of snapshots.
    let snapshots: Vec<GCounter> = replicas.clone();
    for replica in replicas.iter_mut() {
        for snapshot in &snapshots {
            replica.merge(snapshot);
        }
    }

    let expected = 10 + 20 + 30 + 40;
    for replica in &replicas {
        assert_eq!(replica.value(), expected);
    }
}

#[test]
fn stale_snapshot_cannot_regress_state() {
    let mut live = GCounter::new("node-1");
    live.increment_by(2);
    let stale = live.clone();

    live.increment_by(8);
    live.merge(&stale);

    assert_eq!(live.value(), 10);
    assert_eq!(live.local_value(), 10);
}

#[test]
fn merge_applied_twice_equals_merge_applied_once() {
    let mut a = GCounter::new("a");
    a.increment_by(4);
    let mut b = GCounter::new("b");
    b.increment_by(6);

    let mut once = a.clone();
    once.merge(&b);

    let mut twice = a.clone();
    twice.merge(&b);
    twice.merge(&b);

    assert_eq!(once, twice);
}

// ==============================================
// PN-Counter
// ==============================================

#[test]
fn full_merge_value_is_sum_of_local_contributions() {
    let mut a = PNCounter::new("a");
    let mut b = PNCounter::new("b");
    let mut c = PNCounter::new("c");

    // a: +3 -1 = 2, b: +1 -2 = -1, c: +4 -0 = 4
    a.increment_by(3);
    a.decrement();
    b.increment();
    b.decrement_by(2);
    c.increment_by(4);

    let snapshots = [a.clone(), b.clone(), c.clone()];
    for replica in [&mut a, &mut b, &mut c] {
        for snapshot in &snapshots {
            replica.merge(snapshot);
        }
    }

    assert_eq!(a.value(), 5);
    assert_eq!(b.value(), 5);
    assert_eq!(c.value(), 5);
}

#[test]
fn two_replica_walkthrough() {
    let mut pn1 = PNCounter::new("node-1");
    pn1.increment();
    pn1.increment();
    pn1.increment();
    pn1.decrement();
    assert_eq!(pn1.value(), 2);

    let mut pn2 = PNCounter::new("node-2");
    pn2.increment();
    pn2.decrement();
    pn2.decrement();
    assert_eq!(pn2.value(), -1);

    pn1.merge(&pn2);
    assert_eq!(pn1.value(), 1);

    // The reverse direction converges to the same value.
    pn2.merge(&pn1);
    assert_eq!(pn2.value(), 1);
}

#[test]
fn interleaved_mutation_and_gossip_converges() {
    let mut a = PNCounter::new("a");
    let mut b = PNCounter::new("b");

    for round in 0..50u64 {
        a.increment_by(round % 3);
        b.decrement_by(round % 2);

        if round % 5 == 0 {
            let snapshot = a.clone();
            b.merge(&snapshot);
        }
        if round % 7 == 0 {
            let snapshot = b.clone();
            a.merge(&snapshot);
        }
    }

    // Final anti-entropy pass in both directions.
    let a_snapshot = a.clone();
    let b_snapshot = b.clone();
    a.merge(&b_snapshot);
    b.merge(&a_snapshot);

    assert_eq!(a.value(), b.value());
    assert_eq!(a.positive().value(), b.positive().value());
    assert_eq!(a.negative().value(), b.negative().value());
}
