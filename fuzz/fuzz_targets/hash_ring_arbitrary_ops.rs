#![no_main]

use clusterkit::ring::HashRing;
use libfuzzer_sys::fuzz_target;

// Fuzz arbitrary membership churn on HashRing
//
// Tests random add/remove/lookup sequences, asserting that membership and
// vnode counts stay in lockstep and lookups only ever return members.
fuzz_target!(|data: &[u8]| {
    if data.len() < 2 {
        return;
    }

    let replicas = usize::from(data[0] % 16) + 1;
    let mut ring = HashRing::new(replicas);

    let mut idx = 1;
    while idx + 1 < data.len() {
        let op = data[idx] % 4;
        let id = data[idx + 1] % 16;
        let node = format!("node-{}", id);

        match op {
            0 => {
                let was_tracked = ring.contains_node(&node);
                let old_len = ring.len();
                ring.add_node(&node);
                assert!(ring.contains_node(&node));
                if was_tracked {
                    assert_eq!(ring.len(), old_len);
                } else {
                    assert_eq!(ring.len(), old_len + 1);
                }
            }
            1 => {
                let was_tracked = ring.contains_node(&node);
                let old_len = ring.len();
                ring.remove_node(&node);
                assert!(!ring.contains_node(&node));
                if was_tracked {
                    assert_eq!(ring.len(), old_len - 1);
                } else {
                    assert_eq!(ring.len(), old_len);
                }
            }
            2 => {
                let key = format!("key-{}", data[idx + 1]);
                match ring.node_for(&key) {
                    Some(owner) => {
                        assert!(!ring.is_empty());
                        assert!(ring.contains_node(owner));
                        // Lookups are deterministic for a fixed ring state.
                        assert_eq!(ring.node_for(&key), Some(owner));
                    }
                    None => assert!(ring.is_empty()),
                }
            }
            _ => {
                // Membership and ring entries stay in lockstep. Vnode-hash
                // collisions could break the exact product, but with 64-bit
                // positions and <= 16 nodes they do not occur in practice.
                assert_eq!(ring.vnode_count(), ring.len() * ring.replicas());
                assert_eq!(ring.is_empty(), ring.len() == 0);
            }
        }

        idx += 2;
    }
});
