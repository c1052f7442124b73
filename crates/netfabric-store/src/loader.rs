//! Two-phase fact loading
//!
//! The [`Loader`] is the only way to build a [`Snapshot`]. Facts are
//! declared one at a time; identity and reference invariants are enforced
//! on insert, so a fact can never reference something that was not declared
//! before it. [`Loader::commit`] then runs the whole-store validator and
//! commits all-or-nothing: no partially loaded store is ever visible.
//!
//! Byte-identical redeclarations are tolerated but recorded as
//! [`Issue::DuplicateFact`] warnings rather than repaired silently.

use tracing::{debug, info, trace, warn};

use netfabric_core::{EntityKind, Fact, Issue, LoadError, LoadResult};

use crate::snapshot::{
    AdminDistanceRecord, FactTables, InterfaceRecord, LinkRecord, NetworkRecord, NodeRecord,
    Snapshot,
};
use crate::validate;

/// Observable phase of a load transaction
///
/// `Validated` and `Ready` have no in-loader representation: they
/// materialize as the [`Snapshot`] returned by [`Loader::commit`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadState {
    /// No facts declared yet
    Empty,
    /// At least one fact accepted
    Loading,
    /// A fatal error was found; the load is dead
    Rejected,
}

/// Accumulates declared facts for one load transaction
#[derive(Debug, Default)]
pub struct Loader {
    tables: FactTables,
    /// Declare-phase warnings (duplicate redeclarations)
    warnings: Vec<Issue>,
    rejected: bool,
}

impl Loader {
    /// Start an empty load transaction
    pub fn new() -> Self {
        Self::default()
    }

    /// One-shot convenience: declare every fact, then commit
    pub fn load(facts: impl IntoIterator<Item = Fact>) -> LoadResult<Snapshot> {
        let mut loader = Self::new();
        for fact in facts {
            loader.declare(fact)?;
        }
        loader.commit()
    }

    /// The current phase of this load transaction
    pub fn state(&self) -> LoadState {
        if self.rejected {
            LoadState::Rejected
        } else if self.tables.nodes.is_empty()
            && self.tables.interfaces.is_empty()
            && self.tables.links.is_empty()
            && self.tables.admin_distances.is_empty()
            && self.tables.networks.is_empty()
            && self.warnings.is_empty()
        {
            LoadState::Empty
        } else {
            LoadState::Loading
        }
    }

    /// Declare one fact
    ///
    /// Fails with [`LoadError::DuplicateKey`] if a node or interface
    /// identifier is redeclared with conflicting attributes, with
    /// [`LoadError::UnknownReference`] if the fact references something not
    /// yet declared, and with [`LoadError::SelfLink`] for a link from an
    /// interface to itself. Any failure poisons the loader: the whole load
    /// is rejected and later calls report the rejection.
    pub fn declare(&mut self, fact: Fact) -> LoadResult<()> {
        if self.rejected {
            return Err(LoadError::Rejected {
                issues: self.warnings.clone(),
            });
        }
        trace!(?fact, "declaring fact");
        let result = self.insert(fact);
        if result.is_err() {
            self.rejected = true;
        }
        result
    }

    fn insert(&mut self, fact: Fact) -> LoadResult<()> {
        match fact {
            Fact::Node { id } => {
                if self.tables.nodes.contains_key(&id) {
                    // A node carries no attributes, so a redeclaration can
                    // never conflict; it is only a data-quality warning.
                    self.warnings.push(Issue::DuplicateFact {
                        fact: Fact::Node { id },
                    });
                } else {
                    self.tables.nodes.insert(id, NodeRecord::default());
                }
            }
            Fact::Interface { node, id } => {
                if !self.tables.nodes.contains_key(&node) {
                    return Err(LoadError::UnknownReference {
                        referrer: format!("interface {}", id),
                        kind: EntityKind::Node,
                        id: node.as_str().to_owned(),
                    });
                }
                if let Some(existing) = self.tables.interfaces.get(&id) {
                    if existing.node == node {
                        self.warnings.push(Issue::DuplicateFact {
                            fact: Fact::Interface { node, id },
                        });
                    } else {
                        return Err(LoadError::DuplicateKey {
                            kind: EntityKind::Interface,
                            id: id.as_str().to_owned(),
                        });
                    }
                } else {
                    self.tables
                        .interfaces
                        .insert(id.clone(), InterfaceRecord { node: node.clone() });
                    if let Some(record) = self.tables.nodes.get_mut(&node) {
                        record.interfaces.push(id);
                    }
                }
            }
            Fact::Link { a, b } => {
                if a == b {
                    return Err(LoadError::SelfLink(a));
                }
                for endpoint in [&a, &b] {
                    if !self.tables.interfaces.contains_key(endpoint) {
                        return Err(LoadError::UnknownReference {
                            referrer: format!("link {} -> {}", a, b),
                            kind: EntityKind::Interface,
                            id: endpoint.as_str().to_owned(),
                        });
                    }
                }
                let record = LinkRecord { a, b };
                if self.tables.links.contains(&record) {
                    self.warnings.push(Issue::DuplicateFact {
                        fact: Fact::Link {
                            a: record.a,
                            b: record.b,
                        },
                    });
                } else {
                    self.tables.links.push(record);
                }
            }
            Fact::AdminDistance {
                node,
                protocol,
                distance,
            } => {
                if !self.tables.nodes.contains_key(&node) {
                    return Err(LoadError::UnknownReference {
                        referrer: format!("admin distance ({}, {})", node, protocol),
                        kind: EntityKind::Node,
                        id: node.as_str().to_owned(),
                    });
                }
                let record = AdminDistanceRecord {
                    node,
                    protocol,
                    distance,
                };
                if self.tables.admin_distances.contains(&record) {
                    self.warnings.push(Issue::DuplicateFact {
                        fact: Fact::AdminDistance {
                            node: record.node,
                            protocol: record.protocol,
                            distance: record.distance,
                        },
                    });
                } else {
                    // Repeats with a *different* distance are kept; the
                    // validator reports them and the lowest value wins.
                    self.tables.admin_distances.push(record);
                }
            }
            Fact::Network { node, id } => {
                if !self.tables.nodes.contains_key(&node) {
                    return Err(LoadError::UnknownReference {
                        referrer: format!("network {}", id),
                        kind: EntityKind::Node,
                        id: node.as_str().to_owned(),
                    });
                }
                let record = NetworkRecord { node, id };
                if self.tables.networks.contains(&record) {
                    self.warnings.push(Issue::DuplicateFact {
                        fact: Fact::Network {
                            node: record.node,
                            id: record.id,
                        },
                    });
                } else {
                    self.tables.networks.push(record.clone());
                    if let Some(owner) = self.tables.nodes.get_mut(&record.node) {
                        owner.networks.push(record.id);
                    }
                }
            }
        }
        Ok(())
    }

    /// Validate the assembled tables and commit
    ///
    /// Runs the whole-store checks of [`validate`](crate::validate::validate)
    /// and either returns the immutable [`Snapshot`] (warnings attached) or
    /// fails with [`LoadError::Rejected`] carrying every issue found,
    /// declare-phase warnings first, then validation checks in order.
    pub fn commit(self) -> LoadResult<Snapshot> {
        if self.rejected {
            return Err(LoadError::Rejected {
                issues: self.warnings,
            });
        }

        let found = validate::run(&self.tables);
        let has_fatal = found.iter().any(Issue::is_fatal);

        let mut issues = self.warnings;
        issues.extend(found);

        if has_fatal {
            warn!(
                fatal = issues.iter().filter(|i| i.is_fatal()).count(),
                total = issues.len(),
                "load rejected"
            );
            return Err(LoadError::Rejected { issues });
        }

        let snapshot = Snapshot::new(self.tables, issues);
        info!(
            load_id = %snapshot.load_id(),
            nodes = snapshot.node_count(),
            interfaces = snapshot.interface_count(),
            links = snapshot.link_count(),
            warnings = snapshot.warnings().len(),
            "committed topology snapshot"
        );
        for issue in snapshot.warnings() {
            warn!(load_id = %snapshot.load_id(), %issue, "validation warning");
        }
        debug!(
            admin_distances = snapshot.admin_distances().len(),
            networks = snapshot.networks().len(),
            "snapshot tables"
        );
        Ok(snapshot)
    }
}
