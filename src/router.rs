//! The public routing facade: ties the URL adapter, host/method index,
//! path walker, and query matcher together behind two operations.

use crate::{
    error::{InsertError, LookupError},
    host::HostIndex,
    params::Params,
    segment::Segment,
    url,
};

/// A host/method-partitioned URL router.
///
/// See [the crate documentation](crate) for details on the wildcard
/// taxonomy and query-matching rules.
///
/// # Examples
///
/// ```rust
/// # use urlmux::Router;
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let mut router = Router::new();
/// router.add_route("GET", "https://api.github.com/search/repositories", 1)?;
/// router.add_route("POST", "https://api.github.com/users/:username/events", 2)?;
///
/// let found = router.lookup("GET", "https://api.github.com/search/repositories")?.unwrap();
/// assert_eq!(*found.value, 1);
///
/// let found = router.lookup("post", "https://api.github.com/users/john-doe/events")?.unwrap();
/// assert_eq!(*found.value, 2);
/// assert_eq!(found.url_params.get("username"), Some("john-doe"));
/// # Ok(())
/// # }
/// ```
pub struct Router<T> {
    index: HostIndex<T>,
}

impl<T> Default for Router<T> {
    fn default() -> Self {
        Self { index: HostIndex::new() }
    }
}

impl<T> Router<T> {
    /// Constructs an empty router.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `value` under `method` and `url`.
    ///
    /// `method` and the URL's host are folded to lowercase before indexing.
    /// The scheme is accepted but ignored: `http://h/p` and `https://h/p`
    /// register (and later match) identically.
    ///
    /// Not safe to call concurrently with other `add_route`/`lookup` calls on
    /// the same router; callers must externally serialize writes.
    pub fn add_route(&mut self, method: &str, url: &str, value: T) -> Result<(), InsertError> {
        let result = self.try_add_route(method, url, value);
        match &result {
            Ok(()) => tracing::debug!(method, url, "route registered"),
            Err(err) => tracing::warn!(method, url, %err, "route registration rejected"),
        }
        result
    }

    fn try_add_route(&mut self, method: &str, url: &str, value: T) -> Result<(), InsertError> {
        let parsed = url::parse(url)?;
        let method = method.to_lowercase();

        let mut current = self.index.root_mut(&parsed.host, &method);
        for segment in &parsed.path_segments {
            let classified = Segment::classify(segment)?;
            current = current.add_child(classified)?;
        }

        current.attach_leaf(&parsed.query, value)
    }

    /// Looks up the route matching `method` and `url`.
    ///
    /// Returns `Ok(None)` when the URL is well-formed but matches no
    /// registered route -- that is not an error. `Err` is returned only
    /// when the URL adapter cannot parse `url` at all.
    ///
    /// Safe to call concurrently from multiple threads once registration has
    /// finished.
    pub fn lookup(&self, method: &str, url: &str) -> Result<Option<ParsedRoute<'_, T>>, LookupError> {
        let parsed = url::parse(url).map_err(|err| {
            tracing::trace!(url, %err, "lookup url failed to parse");
            LookupError(err)
        })?;
        let method = method.to_lowercase();

        let Some(root) = self.index.root(&parsed.host, &method) else {
            return Ok(None);
        };

        let components: Vec<&str> = parsed.path_segments.iter().map(String::as_str).collect();
        let Some((node, url_params, pattern)) = root.descend(&components) else {
            return Ok(None);
        };

        let Some((value, query_params)) = node.match_query(&parsed.query) else {
            return Ok(None);
        };

        Ok(Some(ParsedRoute {
            url: url.to_lowercase(),
            pattern,
            url_params,
            query_params,
            value,
        }))
    }
}

/// A successful match: the registered value plus every variable bound along
/// the way.
#[derive(Debug)]
pub struct ParsedRoute<'v, T> {
    /// The input URL, lower-cased, verbatim.
    pub url: String,
    /// The canonical pattern reconstructed from the matched path spine, e.g.
    /// `/users/:username`. This field is informational; tests should not
    /// depend on its exact text beyond its wildcard sigils.
    pub pattern: String,
    /// Path variables bound during descent (`Variable` and `CatchVariable`).
    pub url_params: Params,
    /// Query variables bound by a `NamedVar` specifier during query matching.
    pub query_params: Params,
    /// The payload registered with the winning pattern.
    pub value: &'v T,
}
