//! Unit tests for brain-memory.

use brain_core::{KeyId, Tick};

use crate::{Blackboard, EntryCondition, MemoryError, MemoryKey, MemoryStatus};

// Test key declarations, the way a domain layer would write them.
const TARGET: MemoryKey<u32> = MemoryKey::new(KeyId(0), "target");
const COOLDOWN: MemoryKey<i32> = MemoryKey::new(KeyId(1), "cooldown");
const NOTE: MemoryKey<String> = MemoryKey::new(KeyId(2), "note");

fn board() -> Blackboard {
    Blackboard::with_keys(&[TARGET.id(), COOLDOWN.id(), NOTE.id()])
}

#[cfg(test)]
mod keys {
    use super::*;

    #[test]
    fn identity_comparison() {
        let a: MemoryKey<u32> = MemoryKey::new(KeyId(5), "a");
        let b: MemoryKey<u32> = MemoryKey::new(KeyId(5), "b");
        let c: MemoryKey<u32> = MemoryKey::new(KeyId(6), "a");
        assert_eq!(a, b, "keys compare by id, not name");
        assert_ne!(a, c);
    }

    #[test]
    fn display_uses_name() {
        assert_eq!(TARGET.to_string(), "target");
        assert_eq!(MemoryStatus::ValuePresent.to_string(), "present");
    }
}

#[cfg(test)]
mod blackboard {
    use super::*;

    #[test]
    fn declared_key_starts_absent() {
        let bb = board();
        assert!(bb.is_declared(TARGET.id()));
        assert_eq!(bb.get(TARGET, Tick::ZERO), None);
        assert!(bb.check(TARGET.id(), MemoryStatus::ValueAbsent, Tick::ZERO));
        assert!(bb.check(TARGET.id(), MemoryStatus::Registered, Tick::ZERO));
        assert!(!bb.check(TARGET.id(), MemoryStatus::ValuePresent, Tick::ZERO));
    }

    #[test]
    fn undeclared_key_is_not_registered() {
        let bb = board();
        assert!(!bb.check(KeyId(99), MemoryStatus::Registered, Tick::ZERO));
    }

    #[test]
    fn set_get_remove_roundtrip() {
        let mut bb = board();
        bb.set(TARGET, 7);
        assert_eq!(bb.get(TARGET, Tick::ZERO), Some(&7));
        assert!(bb.check(TARGET.id(), MemoryStatus::ValuePresent, Tick::ZERO));

        bb.remove(TARGET);
        assert_eq!(bb.get(TARGET, Tick::ZERO), None);
        // Removal clears the value but not the declaration.
        assert!(bb.check(TARGET.id(), MemoryStatus::Registered, Tick::ZERO));
    }

    #[test]
    fn heterogeneous_values() {
        let mut bb = board();
        bb.set(COOLDOWN, -3);
        bb.set(NOTE, "hello".to_string());
        assert_eq!(bb.get(COOLDOWN, Tick::ZERO), Some(&-3));
        assert_eq!(bb.get(NOTE, Tick::ZERO).map(String::as_str), Some("hello"));
    }

    #[test]
    fn write_declares() {
        let mut bb = Blackboard::new();
        bb.set(TARGET, 1);
        assert!(bb.is_declared(TARGET.id()));
        assert!(bb.check(TARGET.id(), MemoryStatus::ValuePresent, Tick::ZERO));
    }

    #[test]
    fn require_reports_missing_and_undeclared() {
        let bb = board();
        assert!(matches!(
            bb.require(TARGET, Tick::ZERO),
            Err(MemoryError::Missing(_))
        ));
        let undeclared: MemoryKey<u8> = MemoryKey::new(KeyId(50), "nowhere");
        assert!(matches!(
            bb.require(undeclared, Tick::ZERO),
            Err(MemoryError::Undeclared(_))
        ));
    }

    // A value written with TTL n at tick T is present for [T, T+n] and
    // absent strictly after, with or without an intervening purge.
    #[test]
    fn ttl_expiry_window() {
        let mut bb = board();
        let written_at = Tick(10);
        bb.set_with_expiry(TARGET, 42, 5, written_at);

        for t in 10..=15 {
            assert!(
                bb.check(TARGET.id(), MemoryStatus::ValuePresent, Tick(t)),
                "should be live at T{t}"
            );
            assert_eq!(bb.get(TARGET, Tick(t)), Some(&42));
        }
        assert!(bb.check(TARGET.id(), MemoryStatus::ValueAbsent, Tick(16)));
        assert_eq!(bb.get(TARGET, Tick(16)), None);
    }

    #[test]
    fn expired_value_purges_lazily() {
        let mut bb = board();
        bb.set_with_expiry(TARGET, 1, 2, Tick::ZERO);
        // Not yet purged: reads at a later tick already see it as absent.
        assert_eq!(bb.get(TARGET, Tick(3)), None);
        bb.purge_expired(Tick(3));
        assert!(bb.check(TARGET.id(), MemoryStatus::ValueAbsent, Tick(3)));
        assert!(bb.check(TARGET.id(), MemoryStatus::Registered, Tick(3)));
    }

    #[test]
    fn purge_keeps_live_values() {
        let mut bb = board();
        bb.set_with_expiry(TARGET, 9, 10, Tick::ZERO);
        bb.purge_expired(Tick(5));
        assert_eq!(bb.get(TARGET, Tick(5)), Some(&9));
    }

    #[test]
    fn plain_set_clears_prior_expiry() {
        let mut bb = board();
        bb.set_with_expiry(TARGET, 1, 2, Tick::ZERO);
        bb.set(TARGET, 2);
        // Far past the old expiry, still present.
        assert_eq!(bb.get(TARGET, Tick(100)), Some(&2));
    }
}

#[cfg(test)]
mod conditions {
    use super::*;

    #[test]
    fn empty_condition_always_passes() {
        let bb = Blackboard::new();
        assert!(EntryCondition::none().is_met(&bb, Tick::ZERO));
    }

    #[test]
    fn present_requirement() {
        let mut bb = board();
        let cond = EntryCondition::none().require(TARGET, MemoryStatus::ValuePresent);
        assert!(!cond.is_met(&bb, Tick::ZERO));
        bb.set(TARGET, 1);
        assert!(cond.is_met(&bb, Tick::ZERO));
    }

    #[test]
    fn mixed_requirements_all_must_hold() {
        let mut bb = board();
        bb.set(TARGET, 1);
        let cond = EntryCondition::none()
            .require(TARGET, MemoryStatus::ValuePresent)
            .require(COOLDOWN, MemoryStatus::ValueAbsent)
            .require(NOTE, MemoryStatus::Registered);
        assert!(cond.is_met(&bb, Tick::ZERO));

        bb.set(COOLDOWN, 3);
        assert!(!cond.is_met(&bb, Tick::ZERO), "cooldown present breaks the condition");
    }

    #[test]
    fn expiry_respected_by_condition() {
        let mut bb = board();
        bb.set_with_expiry(TARGET, 1, 3, Tick::ZERO);
        let cond = EntryCondition::none().require(TARGET, MemoryStatus::ValuePresent);
        assert!(cond.is_met(&bb, Tick(3)));
        assert!(!cond.is_met(&bb, Tick(4)));
    }

    #[test]
    fn merged_is_union_with_own_precedence() {
        let own = EntryCondition::none().require(TARGET, MemoryStatus::ValueAbsent);
        let delegate = EntryCondition::none()
            .require(TARGET, MemoryStatus::ValuePresent)
            .require(COOLDOWN, MemoryStatus::ValuePresent);
        let merged = own.merged(&delegate);

        assert_eq!(merged.len(), 2);
        let statuses: Vec<_> = merged.iter().collect();
        assert!(statuses.contains(&(TARGET.id(), MemoryStatus::ValueAbsent)));
        assert!(statuses.contains(&(COOLDOWN.id(), MemoryStatus::ValuePresent)));
    }
}
