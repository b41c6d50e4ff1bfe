//! Declarative row filtering over the node and edge tables.
//!
//! A [`Filter`] is a conjunction of predicates. Selection walks the rows
//! in table order, so "first match" and `limit` both follow file order.

/// A case-insensitive search term, lowercased once up front.
#[derive(Debug, Clone)]
pub struct Needle(String);

impl Needle {
    pub fn new(term: &str) -> Self {
        Self(term.to_lowercase())
    }

    /// Substring match, ignoring case.
    pub fn found_in(&self, haystack: &str) -> bool {
        haystack.to_lowercase().contains(&self.0)
    }

    /// Whole-string match, ignoring case.
    pub fn equals(&self, value: &str) -> bool {
        value.to_lowercase() == self.0
    }
}

/// True if any of `needles` occurs in `haystack`, ignoring case.
pub fn contains_any(haystack: &str, needles: &[&str]) -> bool {
    let haystack = haystack.to_lowercase();
    needles.iter().any(|n| haystack.contains(&n.to_lowercase()))
}

type Predicate<'a, T> = Box<dyn Fn(&T) -> bool + 'a>;

/// Conjunction of row predicates.
pub struct Filter<'a, T> {
    predicates: Vec<Predicate<'a, T>>,
}

impl<'a, T> Default for Filter<'a, T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, T> Filter<'a, T> {
    /// A filter that accepts every row.
    pub fn new() -> Self {
        Self {
            predicates: Vec::new(),
        }
    }

    /// Add a predicate every selected row must satisfy.
    pub fn with(mut self, predicate: impl Fn(&T) -> bool + 'a) -> Self {
        self.predicates.push(Box::new(predicate));
        self
    }

    /// Add a predicate only when an optional argument is present.
    pub fn with_optional<V, P>(self, value: Option<V>, make: impl FnOnce(V) -> P) -> Self
    where
        P: Fn(&T) -> bool + 'a,
    {
        match value {
            Some(v) => self.with(make(v)),
            None => self,
        }
    }

    pub fn matches(&self, row: &T) -> bool {
        self.predicates.iter().all(|p| p(row))
    }

    /// Matching rows in iteration order, at most `limit` of them.
    pub fn select<'r, I>(&self, rows: I, limit: Option<usize>) -> Vec<(usize, &'r T)>
    where
        I: IntoIterator<Item = (usize, &'r T)>,
        T: 'r,
    {
        let hits = rows.into_iter().filter(|(_, row)| self.matches(row));
        match limit {
            Some(n) => hits.take(n).collect(),
            None => hits.collect(),
        }
    }

    /// First matching row in iteration order.
    pub fn first<'r, I>(&self, rows: I) -> Option<(usize, &'r T)>
    where
        I: IntoIterator<Item = (usize, &'r T)>,
        T: 'r,
    {
        rows.into_iter().find(|(_, row)| self.matches(row))
    }
}
