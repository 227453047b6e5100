//! Boolean algebra of needs: literals, NOT / AND / OR / XOR, short-circuit
//! behaviour and the `no_need` identities.

use std::cell::Cell;

use needs::prelude::*;
use needs::{AndNeed, NotNeed, OrNeed, XorNeed, impl_need_ops};

// =============================================================================
// Test Needs
// =============================================================================

/// Need with a switchable result that counts its evaluations.
struct Tracked {
    value: Cell<bool>,
    calls: Cell<usize>,
}

impl Tracked {
    fn new(value: bool) -> Self {
        Tracked { value: Cell::new(value), calls: Cell::new(0) }
    }

    fn calls(&self) -> usize {
        self.calls.get()
    }
}

impl Need for Tracked {
    fn is_met(&self) -> bool {
        self.calls.set(self.calls.get() + 1);
        self.value.get()
    }
}

struct Session {
    user: Option<&'static str>,
    admin: bool,
}

struct LoginNeed<'a>(&'a Session);
struct AdminNeed<'a>(&'a Session);

impl Need for LoginNeed<'_> {
    fn is_met(&self) -> bool {
        self.0.user.is_some()
    }
}

impl Need for AdminNeed<'_> {
    fn is_met(&self) -> bool {
        self.0.admin
    }
}

impl_need_ops!(['a,] LoginNeed<'a>, ['a,] AdminNeed<'a>);

const BOOLS: [bool; 2] = [false, true];

// =============================================================================
// Literal / Truth Value
// =============================================================================

#[test]
fn test_literal_value() {
    assert!(literal(true).is_met());
    assert!(!literal(false).is_met());
    assert!(Literal::from(true).is_met());
    assert!(!Literal::new(false).value());
}

#[test]
fn test_bool_is_a_need() {
    assert!(true.is_met());
    assert!(!false.is_met());
    assert!((literal(true) & true).is_met());
    assert!(!(literal(true) & false).is_met());
}

#[test]
fn test_truth_value_matches_verdict() {
    for value in BOOLS {
        let tracked = Tracked::new(value);
        assert_eq!(tracked.is_met(), value);
        assert_eq!(tracked.verdict().unwrap().is_met(), value);
        assert_eq!(tracked.check().is_ok(), value);
    }
}

#[test]
fn test_no_caching() {
    let tracked = Tracked::new(false);
    assert!(!tracked.is_met());
    tracked.value.set(true);
    assert!(tracked.is_met());
    assert!(tracked.check().is_ok());
    assert_eq!(tracked.calls(), 3);
}

#[test]
fn test_closure_need_reads_external_state() {
    let logged_in = Cell::new(false);
    let need = need_fn(|| logged_in.get());
    assert!(!need.is_met());
    logged_in.set(true);
    assert!(need.is_met());
}

// =============================================================================
// NOT
// =============================================================================

#[test]
fn test_not() {
    for value in BOOLS {
        assert_eq!((!literal(value)).is_met(), !value);
        assert_eq!(NotNeed::new(literal(value)).is_met(), !value);
        assert_eq!(literal(value).not().is_met(), !value);
    }
}

#[test]
fn test_double_negation() {
    for value in BOOLS {
        assert_eq!((!!literal(value)).is_met(), value);
    }
}

// =============================================================================
// AND
// =============================================================================

#[test]
fn test_and_truth_table() {
    for a in BOOLS {
        for b in BOOLS {
            assert_eq!((literal(a) & literal(b)).is_met(), a && b, "{a} & {b}");
            assert_eq!(literal(a).and(literal(b)).is_met(), a && b);
        }
    }
}

#[test]
fn test_and_short_circuits() {
    let left = Tracked::new(false);
    let right = Tracked::new(true);
    let need = AndNeed::new(&left, &right);

    assert!(!need.is_met());
    assert!(need.check().is_err());
    assert_eq!(left.calls(), 2);
    assert_eq!(right.calls(), 0);
}

#[test]
fn test_and_evaluates_right_when_left_met() {
    let left = Tracked::new(true);
    let right = Tracked::new(true);
    assert!(AndNeed::new(&left, &right).check().is_ok());
    assert_eq!((left.calls(), right.calls()), (1, 1));
}

// =============================================================================
// OR
// =============================================================================

#[test]
fn test_or_truth_table() {
    for a in BOOLS {
        for b in BOOLS {
            assert_eq!((literal(a) | literal(b)).is_met(), a || b, "{a} | {b}");
            assert_eq!(literal(a).or(literal(b)).is_met(), a || b);
        }
    }
}

#[test]
fn test_or_short_circuits() {
    let left = Tracked::new(true);
    let right = Tracked::new(false);
    let need = OrNeed::new(&left, &right);

    assert!(need.is_met());
    assert!(need.check().is_ok());
    assert_eq!(left.calls(), 2);
    assert_eq!(right.calls(), 0);
}

#[test]
fn test_admin_or_not_logged_in() {
    for logged_in in BOOLS {
        for admin in BOOLS {
            let session = Session { user: logged_in.then_some("ana"), admin };
            let need = AdminNeed(&session) | !LoginNeed(&session);
            assert_eq!(need.is_met(), admin || !logged_in, "login={logged_in} admin={admin}");
        }
    }
}

// =============================================================================
// XOR
// =============================================================================

#[test]
fn test_xor_truth_table() {
    for a in BOOLS {
        for b in BOOLS {
            assert_eq!((literal(a) ^ literal(b)).is_met(), a != b, "{a} ^ {b}");
            assert_eq!(literal(a).xor(literal(b)).is_met(), a != b);
        }
    }
}

#[test]
fn test_xor_always_evaluates_both() {
    for a in BOOLS {
        for b in BOOLS {
            let left = Tracked::new(a);
            let right = Tracked::new(b);
            let need = XorNeed::new(&left, &right);

            let _ = need.is_met();
            assert_eq!((left.calls(), right.calls()), (1, 1));
            let _ = need.check();
            assert_eq!((left.calls(), right.calls()), (2, 2));
        }
    }
}

// =============================================================================
// Composition
// =============================================================================

#[test]
fn test_nested_trees() {
    let a = literal(true);
    let b = literal(false);
    let c = literal(true);

    assert!(((a & !b) | (b ^ c)).is_met());
    assert!(!(!(a | b) & c).is_met());
    assert!((&a & &c).is_met());
}

#[test]
fn test_operands_are_not_mutated() {
    let tracked = Tracked::new(true);
    let first = AndNeed::new(&tracked, literal(true));
    let second = NotNeed::new(&tracked);
    assert!(first.is_met());
    assert!(!second.is_met());
    assert!(tracked.value.get());
}

#[test]
fn test_describe_renders_tree() {
    let need = (literal(true) & !literal(false)) | NO_NEED;
    assert_eq!(need.describe(), "((true & !false) | no_need)");
}

// =============================================================================
// no_need
// =============================================================================

#[test]
fn test_no_need_always_met() {
    let logged_in = Cell::new(false);
    let login = need_fn(|| logged_in.get());

    for state in BOOLS {
        logged_in.set(state);
        assert_eq!(login.is_met(), state);
        assert!(NO_NEED.is_met());
        assert!(no_need().check().is_ok());
        assert!((!login | no_need()).is_met());
        assert_eq!((no_need() & login).is_met(), state);
    }
}

#[test]
fn test_no_need_identities() {
    for value in BOOLS {
        assert!((literal(value) | NO_NEED).is_met());
        assert!((NO_NEED | literal(value)).is_met());
        assert_eq!((literal(value) & NO_NEED).is_met(), value);
        assert_eq!((no_need() & literal(value)).is_met(), value);
        assert_eq!((literal(value) ^ NO_NEED).is_met(), !value);
    }
    assert!(!(!NO_NEED).is_met());
}

#[test]
fn test_no_need_is_shared() {
    fn assert_sync<T: Sync + Send + 'static>(_: &T) {}
    assert_sync(&NO_NEED);

    let handles: Vec<_> = (0..4)
        .map(|_| std::thread::spawn(|| no_need().is_met()))
        .collect();
    for handle in handles {
        assert!(handle.join().unwrap());
    }
}
