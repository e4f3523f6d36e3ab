//! Applicative combination of several remote inputs.
//!
//! Screens typically need more than one fetch before they can render. The
//! `liftN` functions combine N independently-lifecycled inputs into one
//! derived [`Remote`]: `Success` only when every input is `Success`,
//! otherwise the first `Failure` left to right, else `Loading`, else
//! `NotAsked`. Each input is read exactly once per call.

use super::Remote;

/// Obstruction one input contributes to the combined lifecycle.
enum Halt<'a, E> {
    Failure(&'a E),
    Loading,
    NotAsked,
}

fn halt_of<'a, E, V>(remote: &'a Remote<E, V>) -> Option<Halt<'a, E>> {
    match remote {
        Remote::NotAsked => Some(Halt::NotAsked),
        Remote::Loading => Some(Halt::Loading),
        Remote::Failure(e) => Some(Halt::Failure(e)),
        Remote::Success(_) => None,
    }
}

/// Collapse the inputs' obstructions: first failure wins, then loading,
/// then not-asked. Callers reach this only when at least one input is not
/// `Success`, so at least one halt is present.
fn short_circuit<E: Clone, T>(halts: &[Option<Halt<'_, E>>]) -> Remote<E, T> {
    let mut loading = false;
    for halt in halts.iter().flatten() {
        match halt {
            Halt::Failure(e) => return Remote::Failure((*e).clone()),
            Halt::Loading => loading = true,
            Halt::NotAsked => {}
        }
    }
    if loading {
        Remote::Loading
    } else {
        Remote::NotAsked
    }
}

pub fn lift2<E: Clone, A, B, T>(
    a: &Remote<E, A>,
    b: &Remote<E, B>,
    f: impl FnOnce(&A, &B) -> T,
) -> Remote<E, T> {
    match (a, b) {
        (Remote::Success(va), Remote::Success(vb)) => Remote::Success(f(va, vb)),
        _ => short_circuit(&[halt_of(a), halt_of(b)]),
    }
}

pub fn lift3<E: Clone, A, B, C, T>(
    a: &Remote<E, A>,
    b: &Remote<E, B>,
    c: &Remote<E, C>,
    f: impl FnOnce(&A, &B, &C) -> T,
) -> Remote<E, T> {
    match (a, b, c) {
        (Remote::Success(va), Remote::Success(vb), Remote::Success(vc)) => {
            Remote::Success(f(va, vb, vc))
        }
        _ => short_circuit(&[halt_of(a), halt_of(b), halt_of(c)]),
    }
}

pub fn lift4<E: Clone, A, B, C, D, T>(
    a: &Remote<E, A>,
    b: &Remote<E, B>,
    c: &Remote<E, C>,
    d: &Remote<E, D>,
    f: impl FnOnce(&A, &B, &C, &D) -> T,
) -> Remote<E, T> {
    match (a, b, c, d) {
        (
            Remote::Success(va),
            Remote::Success(vb),
            Remote::Success(vc),
            Remote::Success(vd),
        ) => Remote::Success(f(va, vb, vc, vd)),
        _ => short_circuit(&[halt_of(a), halt_of(b), halt_of(c), halt_of(d)]),
    }
}

pub fn lift5<E: Clone, A, B, C, D, G, T>(
    a: &Remote<E, A>,
    b: &Remote<E, B>,
    c: &Remote<E, C>,
    d: &Remote<E, D>,
    g: &Remote<E, G>,
    f: impl FnOnce(&A, &B, &C, &D, &G) -> T,
) -> Remote<E, T> {
    match (a, b, c, d, g) {
        (
            Remote::Success(va),
            Remote::Success(vb),
            Remote::Success(vc),
            Remote::Success(vd),
            Remote::Success(vg),
        ) => Remote::Success(f(va, vb, vc, vd, vg)),
        _ => short_circuit(&[halt_of(a), halt_of(b), halt_of(c), halt_of(d), halt_of(g)]),
    }
}
