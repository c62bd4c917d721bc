//! Per-leaf query-string matching.

use std::collections::BTreeMap;

use crate::params::Params;

/// How a single query parameter's registered value is matched against a
/// concrete request.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub(crate) enum QuerySpec {
    /// The request's value must equal this string exactly.
    Literal(String),
    /// Any value is accepted; nothing is bound.
    AnyValue,
    /// Any value is accepted and bound under `name` in `query_params`.
    NamedVar(String),
}

impl QuerySpec {
    /// Classifies a registered query value (already joined and percent-decoded)
    /// into its match specifier.
    fn classify(value: &str) -> Self {
        if value == "*" {
            QuerySpec::AnyValue
        } else if let Some(name) = value.strip_prefix(':') {
            let name = name.trim();
            if name.is_empty() {
                // A lone ":" with nothing after it has no useful binding;
                // treat it as a literal so it only matches a literal ":" value.
                QuerySpec::Literal(value.to_owned())
            } else {
                QuerySpec::NamedVar(name.to_owned())
            }
        } else {
            QuerySpec::Literal(value.to_owned())
        }
    }
}

/// The query-string shape attached to a single leaf: which parameters are
/// required, how each is matched, and whether unspecified extra parameters
/// are tolerated.
#[derive(Debug, Clone, Default)]
pub(crate) struct LeafQuery {
    query: BTreeMap<String, QuerySpec>,
    catch_all_query: bool,
}

/// The normalized equivalence class used to reject duplicate leaves.
type QueryShape = (bool, Vec<(String, QuerySpecKind)>);

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
enum QuerySpecKind {
    Literal(String),
    AnyValue,
    NamedVar(String),
}

impl LeafQuery {
    /// Builds a leaf's query shape from the registered pattern's query
    /// multimap. Values with the same key are joined with `,` before
    /// classification; the bare `*` marker key sets `catch_all_query`.
    pub(crate) fn from_pattern_query(query: &[(String, Vec<String>)]) -> Self {
        let mut leaf = LeafQuery::default();

        for (key, values) in query {
            if key == "*" {
                leaf.catch_all_query = true;
                continue;
            }

            let joined = values.join(",");
            leaf.query.insert(key.clone(), QuerySpec::classify(&joined));
        }

        leaf
    }

    /// The equivalence class used to detect an identical registration.
    pub(crate) fn shape(&self) -> QueryShape {
        let mut entries: Vec<_> = self
            .query
            .iter()
            .map(|(k, spec)| {
                let kind = match spec {
                    QuerySpec::Literal(v) => QuerySpecKind::Literal(v.clone()),
                    QuerySpec::AnyValue => QuerySpecKind::AnyValue,
                    QuerySpec::NamedVar(n) => QuerySpecKind::NamedVar(n.clone()),
                };
                (k.clone(), kind)
            })
            .collect();
        entries.sort();
        (self.catch_all_query, entries)
    }

    /// Matches a concrete request's query multimap against this leaf.
    ///
    /// Returns the bound query parameters on acceptance, `None` on rejection.
    pub(crate) fn matches(&self, request: &[(String, Vec<String>)]) -> Option<Params> {
        if !self.catch_all_query && self.query.len() != request.len() {
            return None;
        }

        let mut bound = Params::new();

        for (key, spec) in &self.query {
            let values = request.iter().find(|(k, _)| k == key).map(|(_, v)| v)?;
            let joined = values.join(",");

            match spec {
                QuerySpec::AnyValue => {}
                QuerySpec::NamedVar(name) => bound.push(name.clone(), joined),
                QuerySpec::Literal(lit) => {
                    if *lit != joined {
                        return None;
                    }
                }
            }
        }

        Some(bound)
    }
}
