//! The host/method index: a two-level map from lowercased host to
//! lowercased method to the root of that (host, method)'s path trie.

use std::collections::HashMap;

use crate::node::Node;

#[derive(Default)]
pub(crate) struct HostIndex<T> {
    hosts: HashMap<String, HashMap<String, Node<T>>>,
}

impl<T> HostIndex<T> {
    pub(crate) fn new() -> Self {
        Self { hosts: HashMap::new() }
    }

    /// Returns the root node for `(host, method)`, creating it (and the host
    /// entry, if needed) on first use.
    pub(crate) fn root_mut(&mut self, host: &str, method: &str) -> &mut Node<T> {
        self.hosts
            .entry(host.to_owned())
            .or_default()
            .entry(method.to_owned())
            .or_insert_with(Node::root)
    }

    /// Returns the root node for `(host, method)`, or `None` if either the
    /// host or the method was never registered.
    pub(crate) fn root(&self, host: &str, method: &str) -> Option<&Node<T>> {
        self.hosts.get(host)?.get(method)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unregistered_host_has_no_root() {
        let index = HostIndex::<i32>::new();
        assert!(index.root("api.github.com", "get").is_none());
    }

    #[test]
    fn unregistered_method_on_known_host_has_no_root() {
        let mut index = HostIndex::<i32>::new();
        index.root_mut("api.github.com", "get");
        assert!(index.root("api.github.com", "post").is_none());
    }

    #[test]
    fn each_host_method_pair_gets_an_independent_root() {
        let mut index = HostIndex::<i32>::new();
        index.root_mut("api.github.com", "get").add_child(crate::segment::Segment::Literal("a".into())).unwrap();
        assert!(index.root("api.github.com", "post").is_none());
        assert!(index.root("api.github.com", "get").is_some());
    }
}
