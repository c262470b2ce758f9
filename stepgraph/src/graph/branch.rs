//! Conditional edge: a decision function plus the set of targets it may pick.
//!
//! The decision function sees the state after the source node ran and may draw
//! from the injected random source. Its output is a label; the label is looked up
//! in the branch's path map to find the target. When the branch is declared with
//! a plain candidate list, each candidate maps to itself.

use std::collections::BTreeMap;
use std::sync::Arc;

use rand::RngCore;

/// Decision function for a conditional edge: `(state, rng) -> label`.
pub type RouteFn<S> = Arc<dyn Fn(&S, &mut dyn RngCore) -> String + Send + Sync>;

/// A conditional edge out of one node.
pub struct Branch<S> {
    route: RouteFn<S>,
    /// label -> target node id (or END). Ordered so rendering and errors are stable.
    path_map: BTreeMap<String, String>,
}

impl<S> Clone for Branch<S> {
    fn clone(&self) -> Self {
        Self {
            route: self.route.clone(),
            path_map: self.path_map.clone(),
        }
    }
}

impl<S> Branch<S> {
    /// Branch whose decision function returns target ids directly.
    pub fn new<I, T>(route: RouteFn<S>, candidates: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        let path_map = candidates
            .into_iter()
            .map(|c| {
                let c = c.into();
                (c.clone(), c)
            })
            .collect();
        Self { route, path_map }
    }

    /// Branch whose decision function returns labels that `path_map` maps to targets.
    pub fn with_path_map<I, K, V>(route: RouteFn<S>, path_map: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let path_map = path_map
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        Self { route, path_map }
    }

    /// Distinct targets this branch may resolve to.
    pub fn targets(&self) -> impl Iterator<Item = &str> {
        let mut seen: Vec<&str> = self.path_map.values().map(String::as_str).collect();
        seen.sort_unstable();
        seen.dedup();
        seen.into_iter()
    }

    /// Label -> target pairs, in label order.
    pub fn path_map(&self) -> &BTreeMap<String, String> {
        &self.path_map
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.path_map.is_empty()
    }

    /// Runs the decision function and resolves its label.
    ///
    /// Returns `Err(label)` when the label is not in the path map.
    pub(crate) fn resolve(&self, state: &S, rng: &mut dyn RngCore) -> Result<String, String> {
        let label = (self.route)(state, rng);
        match self.path_map.get(&label) {
            Some(target) => Ok(target.clone()),
            None => Err(label),
        }
    }
}
