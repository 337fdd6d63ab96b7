use crate::catalog::{BranchKind, BranchSpec, Catalog, CourseInfo, ReqSpec};
use crate::config::file::{DEFAULT_COURSE_COLOR, DEFAULT_KEY_COLOR};
use crate::error::Result;
use crate::graph::fingerprint::{fingerprint, FingerprintMode};
use crate::graph::session::Session;
use crate::graph::NodeId;

#[derive(Debug, Clone)]
pub struct BuildOptions {
    pub mode: FingerprintMode,
    /// Color for user-requested root courses.
    pub key_color: String,
    /// Color for courses whose prerequisite tree is expanded transitively.
    pub course_color: String,
}

impl Default for BuildOptions {
    fn default() -> Self {
        Self {
            mode: FingerprintMode::default(),
            key_color: DEFAULT_KEY_COLOR.to_string(),
            course_color: DEFAULT_COURSE_COLOR.to_string(),
        }
    }
}

/// Recursive traversal over prerequisite specifications. Consults the
/// session's registries so that repeated `add_root` calls only ever add
/// nodes and edges not already present.
pub struct GraphBuilder<'a> {
    catalog: &'a Catalog,
    options: BuildOptions,
}

impl<'a> GraphBuilder<'a> {
    pub fn new(catalog: &'a Catalog, options: BuildOptions) -> Self {
        Self { catalog, options }
    }

    /// Adds one root course to the session. The code must already be
    /// normalized. Unknown codes and codes whose course node already exists
    /// are no-ops; returns whether anything was built.
    pub fn add_root(&self, session: &mut Session, code: &str) -> Result<bool> {
        let Some(info) = self.catalog.get(code) else {
            return Ok(false);
        };
        if session.is_known_course(&info.name) {
            return Ok(false);
        }

        self.create_root(session, info, true)?;
        Ok(true)
    }

    fn create_root(&self, session: &mut Session, info: &CourseInfo, key_node: bool) -> Result<()> {
        let color = if key_node {
            &self.options.key_color
        } else {
            &self.options.course_color
        };
        let (node_id, _) = session.get_or_create_course(&info.name, Some(color));

        if let Some(prerequisites) = &info.prerequisites {
            self.create_branch(session, prerequisites, node_id)?;
        }
        Ok(())
    }

    fn create_branch(&self, session: &mut Session, spec: &ReqSpec, parent_id: NodeId) -> Result<()> {
        match spec {
            ReqSpec::Course(name) => self.create_course_ref(session, name, parent_id),
            ReqSpec::Branch(branch) => self.create_logic_node(session, branch, parent_id),
        }
    }

    fn create_logic_node(
        &self,
        session: &mut Session,
        branch: &BranchSpec,
        parent_id: NodeId,
    ) -> Result<()> {
        // Malformed kind: skip the node and its subtree, siblings continue.
        let label = match branch.kind {
            BranchKind::And => session.next_and_label(),
            BranchKind::Or => session.next_or_label(),
            BranchKind::Unknown => return Ok(()),
        };

        let key = fingerprint(
            branch.kind,
            branch.courses.as_deref(),
            branch.subbranches.as_deref(),
            self.options.mode,
        )?;
        let (node_id, created) = session.get_or_create_branch(&key, label);
        // A shared logic node may gain edges from any number of parents.
        session.add_edge_if_absent(parent_id, node_id);

        // Expansion happens exactly once per unique fingerprint; an already
        // built subtree is only linked to, never re-walked.
        if !created {
            return Ok(());
        }

        if let Some(courses) = &branch.courses {
            for name in courses {
                self.create_course_ref(session, name, node_id)?;
            }
        }
        if let Some(subbranches) = &branch.subbranches {
            for subbranch in subbranches {
                self.create_logic_node(session, subbranch, node_id)?;
            }
        }
        Ok(())
    }

    fn create_course_ref(
        &self,
        session: &mut Session,
        name: &str,
        parent_id: NodeId,
    ) -> Result<()> {
        let (node_id, created) = session.get_or_create_course(name, None);

        if created {
            if let Some(info) = self.catalog.get(name) {
                self.create_root(session, info, false)?;
            }
        }

        // No duplicate check here: incoming edges of course leaves are not
        // deduplicated, unlike every other edge.
        session.push_edge(parent_id, node_id);
        Ok(())
    }
}
