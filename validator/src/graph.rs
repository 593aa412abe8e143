//! Lookup of the token state carried by spent outputs.
//!
//! The validator never reads a chain itself. Callers resolve each spent
//! output to an [`InputTokenView`] through a [`TokenGraph`] before asking
//! for a verdict.

use std::collections::HashMap;
use std::sync::Arc;

use slp_types::{InputTokenView, OutPoint, TxInput};

/// Source of token annotations for previously validated outputs.
pub trait TokenGraph {
    /// The token state held by `prevout`, or `None` when the output holds
    /// no tokens or was never part of a valid token transaction.
    fn input_token(&self, prevout: &OutPoint) -> Option<InputTokenView>;
}

impl<G: TokenGraph + ?Sized> TokenGraph for &G {
    fn input_token(&self, prevout: &OutPoint) -> Option<InputTokenView> {
        (**self).input_token(prevout)
    }
}

impl<G: TokenGraph + ?Sized> TokenGraph for Arc<G> {
    fn input_token(&self, prevout: &OutPoint) -> Option<InputTokenView> {
        (**self).input_token(prevout)
    }
}

impl TokenGraph for HashMap<OutPoint, InputTokenView> {
    fn input_token(&self, prevout: &OutPoint) -> Option<InputTokenView> {
        self.get(prevout).copied()
    }
}

/// Build annotated inputs for a transaction spending `prevouts`, in order.
pub fn annotate_inputs<G, I>(graph: &G, prevouts: I) -> Vec<TxInput>
where
    G: TokenGraph + ?Sized,
    I: IntoIterator<Item = OutPoint>,
{
    prevouts
        .into_iter()
        .map(|prevout| TxInput {
            prevout,
            token: graph.input_token(&prevout),
        })
        .collect()
}
