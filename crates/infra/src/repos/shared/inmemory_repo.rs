use company_registry_domain::{Entity, ID};
use std::sync::{Mutex, MutexGuard, PoisonError};

/// Useful functions for creating inmemory repositories.
///
/// Every function returns the number of affected items so that the inmemory
/// repositories report the same row counts as a relational store would.

fn lock<T>(collection: &Mutex<Vec<T>>) -> MutexGuard<'_, Vec<T>> {
    collection.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Inserts the value unless an item with the same id exists, which
/// mirrors a primary key constraint.
pub fn insert<T: Clone + Entity>(val: &T, collection: &Mutex<Vec<T>>) -> u64 {
    let mut collection = lock(collection);
    if collection.iter().any(|item| item.id() == val.id()) {
        return 0;
    }
    collection.push(val.clone());
    1
}

pub fn save<T: Clone + Entity>(val: &T, collection: &Mutex<Vec<T>>) -> u64 {
    let mut collection = lock(collection);
    let mut affected = 0;
    for item in collection.iter_mut().filter(|item| item.id() == val.id()) {
        *item = val.clone();
        affected += 1;
    }
    affected
}

pub fn find_by<T: Clone, F: FnMut(&T) -> bool>(collection: &Mutex<Vec<T>>, mut compare: F) -> Vec<T> {
    let collection = lock(collection);
    collection.iter().filter(|item| compare(item)).cloned().collect()
}

pub fn find<T: Clone + Entity>(val_id: &ID, collection: &Mutex<Vec<T>>) -> Vec<T> {
    find_by(collection, |item| item.id() == val_id)
}

pub fn delete<T: Clone + Entity>(val_id: &ID, collection: &Mutex<Vec<T>>) -> u64 {
    let mut collection = lock(collection);
    let len_before = collection.len();
    collection.retain(|item| item.id() != val_id);
    (len_before - collection.len()) as u64
}
