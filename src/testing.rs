//! Instrumented payload for lifecycle tests.  Counters are per thread, each test runs on its own.

use crate::meta::condition::True;
use crate::MoveConstruct;
use core::cell::Cell;

thread_local! {
    static CONSTRUCTED: Cell<u32> = Cell::new(0);
    static MOVED: Cell<u32> = Cell::new(0);
    static DESTRUCTED: Cell<u32> = Cell::new(0);
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Counts {
    pub constructed: u32,
    pub moved: u32,
    pub destructed: u32,
}

pub fn counts() -> Counts {
    return Counts {
        constructed: CONSTRUCTED.with(|c| c.get()),
        moved: MOVED.with(|c| c.get()),
        destructed: DESTRUCTED.with(|c| c.get()),
    };
}

pub fn reset_counts() {
    CONSTRUCTED.with(|c| c.set(0));
    MOVED.with(|c| c.set(0));
    DESTRUCTED.with(|c| c.set(0));
}

fn bump(counter: &'static std::thread::LocalKey<Cell<u32>>) {
    counter.with(|c| c.set(c.get() + 1));
}

#[derive(Debug, PartialEq)]
pub struct Tracked {
    pub value: i32,
}

impl Tracked {
    /// Counted as a construction.
    pub fn new() -> Tracked {
        bump(&CONSTRUCTED);
        return Tracked { value: 0 };
    }

    /// Not counted, so tests can set up values before resetting the counters.
    pub fn with(value: i32) -> Tracked {
        return Tracked { value: value };
    }
}

impl Drop for Tracked {
    fn drop(&mut self) {
        bump(&DESTRUCTED);
    }
}

impl MoveConstruct for Tracked {
    type NoPanicMove = True;
    type NoPanicSwap = True;

    fn move_construct(source: &mut Tracked) -> Tracked {
        bump(&MOVED);
        let value = source.value;
        source.value = 0;
        return Tracked { value: value };
    }

    fn move_assign(&mut self, source: &mut Tracked) {
        bump(&MOVED);
        self.value = source.value;
        source.value = 0;
    }
}

impl Clone for Tracked {
    fn clone(&self) -> Tracked {
        bump(&CONSTRUCTED);
        return Tracked { value: self.value };
    }
}

crate::needs_destructor!(Tracked);
