//! The path trie: node shape, insertion contract, lookup
//! contract, and the path walker that drives both.

use std::collections::HashMap;

use crate::{error::InsertError, params::Params, query::LeafQuery, segment::Segment};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum NodeKind {
    /// The synthetic root of a per-(host, method) trie.
    Root,
    Literal,
    Variable,
    CatchAll,
    CatchVariable,
}

/// A single registered pattern's query-shape plus its opaque payload.
pub(crate) struct LeafRecord<T> {
    query: LeafQuery,
    value: T,
}

/// A node in the path trie.
///
/// Holds literal children keyed by their exact text, at most one wildcard
/// child (`Variable`, `CatchAll`, or `CatchVariable`), and the leaves
/// (query-shape + value pairs) registered at this exact path.
pub(crate) struct Node<T> {
    pub(crate) name: String,
    pub(crate) kind: NodeKind,
    children: HashMap<String, Node<T>>,
    wildcard_child: Option<Box<Node<T>>>,
    leaves: Vec<LeafRecord<T>>,
}

impl<T> Node<T> {
    pub(crate) fn root() -> Self {
        Self {
            name: "*".to_owned(),
            kind: NodeKind::Root,
            children: HashMap::new(),
            wildcard_child: None,
            leaves: Vec::new(),
        }
    }

    /// Inserts (or reuses) the child matching `segment`, per the insertion
    /// contract.
    pub(crate) fn add_child(&mut self, segment: Segment) -> Result<&mut Node<T>, InsertError> {
        match segment {
            Segment::Literal(s) => Ok(self.children.entry(s.clone()).or_insert_with(|| Node {
                name: s,
                kind: NodeKind::Literal,
                children: HashMap::new(),
                wildcard_child: None,
                leaves: Vec::new(),
            })),

            Segment::Variable(name) => {
                match &self.wildcard_child {
                    None => {
                        self.wildcard_child = Some(Box::new(Node {
                            name,
                            kind: NodeKind::Variable,
                            children: HashMap::new(),
                            wildcard_child: None,
                            leaves: Vec::new(),
                        }));
                    }
                    Some(existing) => match existing.kind {
                        NodeKind::Variable if existing.name == name => {}
                        NodeKind::Variable => {
                            return Err(InsertError::VariableConflict {
                                existing: existing.name.clone(),
                                attempted: name,
                            });
                        }
                        NodeKind::CatchAll | NodeKind::CatchVariable => {
                            return Err(InsertError::CatchAllConflict {
                                existing: existing.name.clone(),
                            });
                        }
                        NodeKind::Root | NodeKind::Literal => unreachable!("wildcard_child is never Root/Literal"),
                    },
                }
                Ok(self.wildcard_child.as_mut().unwrap())
            }

            Segment::CatchAll => {
                match &self.wildcard_child {
                    None => {
                        self.wildcard_child = Some(Box::new(Node {
                            name: String::new(),
                            kind: NodeKind::CatchAll,
                            children: HashMap::new(),
                            wildcard_child: None,
                            leaves: Vec::new(),
                        }));
                    }
                    Some(existing) => match existing.kind {
                        NodeKind::CatchAll => {}
                        NodeKind::Variable => {
                            return Err(InsertError::CatchAllConflict {
                                existing: existing.name.clone(),
                            });
                        }
                        NodeKind::CatchVariable => {
                            return Err(InsertError::CatchVariableConflict {
                                existing: existing.name.clone(),
                                attempted: String::new(),
                            });
                        }
                        NodeKind::Root | NodeKind::Literal => unreachable!("wildcard_child is never Root/Literal"),
                    },
                }
                Ok(self.wildcard_child.as_mut().unwrap())
            }

            Segment::CatchVariable(name) => {
                match &self.wildcard_child {
                    None => {
                        self.wildcard_child = Some(Box::new(Node {
                            name,
                            kind: NodeKind::CatchVariable,
                            children: HashMap::new(),
                            wildcard_child: None,
                            leaves: Vec::new(),
                        }));
                    }
                    Some(existing) => match existing.kind {
                        NodeKind::CatchVariable if existing.name == name => {}
                        NodeKind::CatchVariable => {
                            return Err(InsertError::CatchVariableConflict {
                                existing: existing.name.clone(),
                                attempted: name,
                            });
                        }
                        NodeKind::CatchAll => {
                            return Err(InsertError::CatchVariableConflict {
                                existing: String::new(),
                                attempted: name,
                            });
                        }
                        NodeKind::Variable => {
                            return Err(InsertError::CatchAllConflict {
                                existing: existing.name.clone(),
                            });
                        }
                        NodeKind::Root | NodeKind::Literal => unreachable!("wildcard_child is never Root/Literal"),
                    },
                }
                Ok(self.wildcard_child.as_mut().unwrap())
            }
        }
    }

    /// Returns the child that matches a concrete path segment, preferring a
    /// literal match over the wildcard child.
    fn get_child(&self, segment: &str) -> Option<&Node<T>> {
        self.children.get(segment).or(self.wildcard_child.as_deref())
    }

    /// Attaches a leaf for `query` at this node, rejecting an identical
    /// query-shape already registered here.
    pub(crate) fn attach_leaf(&mut self, query: &[(String, Vec<String>)], value: T) -> Result<(), InsertError> {
        let leaf_query = LeafQuery::from_pattern_query(query);
        let shape = leaf_query.shape();

        if self.leaves.iter().any(|leaf| leaf.query.shape() == shape) {
            return Err(InsertError::AlreadyAdded);
        }

        self.leaves.push(LeafRecord { query: leaf_query, value });
        Ok(())
    }

    /// Descends the trie one path component at a time, applying the early
    /// termination and binding rules for each wildcard kind. Returns the node
    /// reached and the path variables bound along the way, or `None` if the
    /// path cannot be fully consumed.
    ///
    /// Also returns the canonical pattern text for the matched spine (the
    /// `ParsedRoute::pattern` field), e.g. `/users/:username`.
    pub(crate) fn descend<'n>(&'n self, components: &[&str]) -> Option<(&'n Node<T>, Params, String)> {
        let mut current = self;
        let mut params = Params::new();
        let mut pattern = String::new();
        let mut i = 0;

        while i < components.len() {
            let child = current.get_child(components[i])?;

            pattern.push('/');
            match child.kind {
                NodeKind::Variable => {
                    pattern.push(':');
                    pattern.push_str(&child.name);
                    params.push(child.name.clone(), components[i]);
                    current = child;
                    i += 1;
                }
                NodeKind::CatchVariable => {
                    pattern.push('*');
                    pattern.push_str(&child.name);
                    params.push(child.name.clone(), components[i..].join("/"));
                    current = child;
                    break;
                }
                NodeKind::CatchAll => {
                    pattern.push('*');
                    current = child;
                    break;
                }
                NodeKind::Literal => {
                    pattern.push_str(&child.name);
                    current = child;
                    i += 1;
                }
                NodeKind::Root => unreachable!("root is never a descended-to child"),
            }
        }

        if pattern.is_empty() {
            pattern.push('/');
        }

        Some((current, params, pattern))
    }

    /// Tries every leaf at this node, in insertion order, against `query`.
    /// Returns the first accepting leaf's value and bound query parameters.
    pub(crate) fn match_query(&self, query: &[(String, Vec<String>)]) -> Option<(&T, Params)> {
        self.leaves.iter().find_map(|leaf| leaf.query.matches(query).map(|bound| (&leaf.value, bound)))
    }
}
