/// A compile-time boolean.  Predicates about a type are expressed as types implementing this,
/// so they can be combined and then checked in a `where` clause.
pub trait Bool {
    const VALUE: bool;
    type Not: Bool;
    /// Conjunction.  `False` short circuits without looking at `B`.
    type And<B: Bool>: Bool;
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct True;

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct False;

impl Bool for True {
    const VALUE: bool = true;
    type Not = False;
    type And<B: Bool> = B;
}

impl Bool for False {
    const VALUE: bool = false;
    type Not = True;
    type And<B: Bool> = False;
}

/// Negation of a predicate.
pub type Not<A> = <A as Bool>::Not;

pub type AndOf<A, B> = <A as Bool>::And<B>;

/// Conjunction of a nonempty tuple of predicates, evaluated left to right.
pub trait All {
    type Output: Bool;
}

pub type AllOf<L> = <L as All>::Output;

impl<A: Bool> All for (A,) {
    type Output = A;
}

macro_rules! impl_all {
    ($first:ident, $($rest:ident),+) => {
        impl<$first: Bool, $($rest: Bool),+> All for ($first, $($rest),+) {
            type Output = AndOf<$first, AllOf<($($rest,)+)>>;
        }
    };
}

impl_all!(A, B);
impl_all!(A, B, C);
impl_all!(A, B, C, D);
impl_all!(A, B, C, D, E);
impl_all!(A, B, C, D, E, F);
impl_all!(A, B, C, D, E, F, G);
impl_all!(A, B, C, D, E, F, G, H);

/// Only `True` satisfies this bound.  An item with `where P: When` does not exist unless `P` holds.
pub trait When: Bool {}

impl When for True {}
