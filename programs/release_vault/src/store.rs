//! Host-side vault store
//!
//! Keyed by beneficiary with a zeroed default for identities never touched.
//! Each identity has its own lock, so read-modify-write sequences on one
//! beneficiary are serialized while different beneficiaries proceed in
//! parallel.

use std::collections::HashMap;
use std::sync::Arc;

use anchor_lang::prelude::Pubkey;
use parking_lot::{Mutex, RwLock};

use crate::state::VaultRecord;

type Slot = Arc<Mutex<VaultRecord>>;

#[derive(Default)]
pub struct VaultStore {
    records: RwLock<HashMap<Pubkey, Slot>>,
}

impl VaultStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current record for `identity`, or the zeroed record if it was never
    /// touched. Does not create an entry.
    pub fn get(&self, identity: &Pubkey) -> VaultRecord {
        let slot = self.records.read().get(identity).cloned();
        slot.map(|slot| *slot.lock()).unwrap_or_default()
    }

    /// Run `f` on a staged copy of the record while holding the identity's
    /// lock. The copy replaces the stored record only if `f` returns `Ok`.
    pub fn mutate<T, E>(
        &self,
        identity: &Pubkey,
        f: impl FnOnce(&mut VaultRecord) -> Result<T, E>,
    ) -> Result<T, E> {
        let slot = self.slot(identity);
        let mut record = slot.lock();
        let mut staged = *record;
        let out = f(&mut staged)?;
        *record = staged;
        Ok(out)
    }

    /// Number of identities that have been mutated at least once
    pub fn len(&self) -> usize {
        self.records.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.read().is_empty()
    }

    fn slot(&self, identity: &Pubkey) -> Slot {
        if let Some(slot) = self.records.read().get(identity) {
            return Arc::clone(slot);
        }
        let mut records = self.records.write();
        Arc::clone(records.entry(*identity).or_default())
    }
}
