use std::{collections::HashMap, fmt, hash::Hash};

/// A set of simultaneous bindings from variables to terms.
///
/// Read access goes through [`Deref`](std::ops::Deref) to the underlying map.
#[derive(derive_more::Deref, Clone, Debug)]
pub struct Substitution<V, T>(HashMap<V, T>);

impl<V, T> Substitution<V, T> {
    pub fn new() -> Self {
        Self(HashMap::new())
    }
    pub fn into_inner(self) -> HashMap<V, T> {
        self.0
    }
    pub(crate) fn terms_mut(&mut self) -> impl Iterator<Item = &mut T> {
        self.0.values_mut()
    }
}

impl<V: Eq + Hash, T> Substitution<V, T> {
    pub fn singleton(var: V, term: T) -> Self {
        Self(HashMap::from([(var, term)]))
    }
    pub fn insert(&mut self, var: V, term: T) -> Option<T> {
        self.0.insert(var, term)
    }
    pub fn contains(&self, var: &V) -> bool {
        self.0.contains_key(var)
    }
}

impl<V, T> Default for Substitution<V, T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: Eq + Hash, T: PartialEq> PartialEq for Substitution<V, T> {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}
impl<V: Eq + Hash, T: Eq> Eq for Substitution<V, T> {}

impl<V: Eq + Hash, T> FromIterator<(V, T)> for Substitution<V, T> {
    fn from_iter<I: IntoIterator<Item = (V, T)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<V: Eq + Hash, T> Extend<(V, T)> for Substitution<V, T> {
    fn extend<I: IntoIterator<Item = (V, T)>>(&mut self, iter: I) {
        self.0.extend(iter)
    }
}

impl<V, T> IntoIterator for Substitution<V, T> {
    type Item = (V, T);
    type IntoIter = std::collections::hash_map::IntoIter<V, T>;
    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<V: fmt::Display, T: fmt::Display> fmt::Display for Substitution<V, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut entries = self
            .0
            .iter()
            .map(|(var, term)| (var.to_string(), term))
            .collect::<Vec<_>>();
        entries.sort_by(|(lhs, _), (rhs, _)| lhs.cmp(rhs));
        f.write_str("{")?;
        for (i, (var, term)) in entries.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            f.write_fmt(format_args!("{var} -> {term}"))?;
        }
        f.write_str("}")
    }
}
