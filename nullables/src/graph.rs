//! Nullable token graph: thread-safe in-memory store of output annotations.

use slp_types::{InputTokenView, OutPoint, TxId, TxInput};
use slp_validator::{TokenEffect, TokenGraph};
use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

/// An in-memory token graph for testing.
pub struct MemoryTokenGraph {
    outputs: Mutex<HashMap<OutPoint, InputTokenView>>,
}

impl MemoryTokenGraph {
    pub fn new() -> Self {
        Self {
            outputs: Mutex::new(HashMap::new()),
        }
    }

    fn outputs(&self) -> MutexGuard<'_, HashMap<OutPoint, InputTokenView>> {
        self.outputs.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Seed an annotation directly.
    pub fn insert(&self, prevout: OutPoint, view: InputTokenView) {
        self.outputs().insert(prevout, view);
    }

    /// Store the annotation of every output of `txid` that receives tokens
    /// or the mint baton. Returns how many outputs were recorded.
    pub fn record(&self, txid: TxId, effect: &TokenEffect) -> usize {
        let mut outputs = self.outputs();
        let mut recorded = 0;
        for vout in 0..effect.outputs.len() {
            if let Some(view) = effect.annotation_for(txid, vout) {
                outputs.insert(OutPoint::new(txid, vout as u32), view);
                recorded += 1;
            }
        }
        recorded
    }

    /// Forget the outputs consumed by `inputs`.
    pub fn spend(&self, inputs: &[TxInput]) {
        let mut outputs = self.outputs();
        for input in inputs {
            outputs.remove(&input.prevout);
        }
    }

    pub fn len(&self) -> usize {
        self.outputs().len()
    }

    pub fn is_empty(&self) -> bool {
        self.outputs().is_empty()
    }
}

impl Default for MemoryTokenGraph {
    fn default() -> Self {
        Self::new()
    }
}

impl TokenGraph for MemoryTokenGraph {
    fn input_token(&self, prevout: &OutPoint) -> Option<InputTokenView> {
        self.outputs().get(prevout).copied()
    }
}
