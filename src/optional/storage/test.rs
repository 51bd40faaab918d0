use crate::meta::condition::Bool;
use crate::optional::storage::{Destruction, NonTrivial, RawStorage, Trivial};
use core::cell::Cell;
use core::mem;
use pretty_assertions::assert_eq;
use std::rc::Rc;

struct CountDrops {
    drops: Rc<Cell<u32>>,
}

impl Drop for CountDrops {
    fn drop(&mut self) {
        self.drops.set(self.drops.get() + 1);
    }
}

#[test]
fn storage_never_drops() {
    let drops = Rc::new(Cell::new(0));
    {
        let _storage = RawStorage::new(CountDrops {
            drops: drops.clone(),
        });
    }
    assert_eq!(drops.get(), 0);
    assert!(!mem::needs_drop::<RawStorage<String>>());
}

#[test]
fn size_matches_payload() {
    assert_eq!(mem::size_of::<RawStorage<u64>>(), mem::size_of::<u64>());
    assert_eq!(mem::size_of::<RawStorage<String>>(), mem::size_of::<String>());
    assert_eq!(mem::size_of::<RawStorage<()>>(), 0);
}

#[test]
fn loaded() {
    let mut storage = RawStorage::new(7u32);
    unsafe {
        assert_eq!(*storage.value(), 7);
        *storage.value_mut() = 9;
        assert_eq!(*storage.value(), 9);
    }

    let source = String::from("copied");
    let mut copy = RawStorage::cloned(&source);
    unsafe {
        assert_eq!(copy.value().as_str(), "copied");
        <NonTrivial as Destruction<String>>::destroy(&mut copy);
    }
    assert_eq!(source, "copied");
}

#[test]
fn write_then_read() {
    let mut storage: RawStorage<String> = RawStorage::empty();
    unsafe {
        storage.write(String::from("moved"));
        let out = storage.read();
        assert_eq!(out, "moved");
    }
}

#[test]
fn non_trivial_destroy_runs_destructor_once() {
    let drops = Rc::new(Cell::new(0));
    let mut storage = RawStorage::new(CountDrops {
        drops: drops.clone(),
    });
    unsafe {
        <NonTrivial as Destruction<CountDrops>>::destroy(&mut storage);
    }
    assert_eq!(drops.get(), 1);
    drop(storage);
    assert_eq!(drops.get(), 1);
}

#[test]
fn trivial_destroy_is_noop() {
    let mut storage = RawStorage::new(3i32);
    unsafe {
        <Trivial as Destruction<i32>>::destroy(&mut storage);
    }
    assert_eq!(<<Trivial as Destruction<i32>>::IsTrivial as Bool>::VALUE, true);
    assert_eq!(<<NonTrivial as Destruction<i32>>::IsTrivial as Bool>::VALUE, false);
}

#[test]
fn copy_payload_copies_storage() {
    let a = RawStorage::new(5u8);
    let b = a;
    unsafe {
        assert_eq!(*a.value(), 5);
        assert_eq!(*b.value(), 5);
    }
}
