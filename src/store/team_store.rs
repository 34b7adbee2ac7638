use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{DashboardError, DashboardResult};
use crate::models::{TeamMember, TeamState};

/// Handle returned by [`TeamStore::subscribe`], used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubscriptionId(usize);

type Listener = Box<dyn Fn(&TeamState) + Send>;

/// Ordered collection of team members backed by a JSON snapshot file.
///
/// Mutations persist the full snapshot before notifying subscribers, so a
/// listener always observes state that has already been written to disk.
pub struct TeamStore {
    path: PathBuf,
    state: TeamState,
    listeners: Vec<(SubscriptionId, Listener)>,
    next_subscription: usize,
}

impl TeamStore {
    /// Load the snapshot at `path`. A missing file yields an empty store; an
    /// unreadable or unparseable snapshot is a hard error, never a silent
    /// reset to empty.
    pub fn load(path: impl Into<PathBuf>) -> DashboardResult<Self> {
        let path = path.into();

        let state = if path.exists() {
            let raw = fs::read_to_string(&path).map_err(|e| {
                DashboardError::Persistence(format!(
                    "failed to read {}: {}",
                    path.display(),
                    e
                ))
            })?;
            let team_members: Vec<TeamMember> = serde_json::from_str(&raw).map_err(|e| {
                DashboardError::Persistence(format!(
                    "corrupt snapshot at {}: {}",
                    path.display(),
                    e
                ))
            })?;
            TeamState { team_members }
        } else {
            TeamState::default()
        };

        Ok(Self {
            path,
            state,
            listeners: Vec::new(),
            next_subscription: 0,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn members(&self) -> &[TeamMember] {
        &self.state.team_members
    }

    pub fn len(&self) -> usize {
        self.state.team_members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.state.team_members.is_empty()
    }

    pub fn get(&self, id: i64) -> Option<&TeamMember> {
        self.state.team_members.iter().find(|m| m.id == id)
    }

    /// Append a member and persist the full snapshot. Presence validation is
    /// the caller's responsibility, as is id uniqueness (creation-timestamp
    /// ids); the store performs no duplicate detection.
    pub fn add_member(&mut self, member: TeamMember) -> DashboardResult<()> {
        self.state.team_members.push(member);
        self.persist()?;
        self.notify();
        Ok(())
    }

    /// Remove all entries matching `id` (at most one in practice), keeping
    /// the relative order of the rest. Returns how many entries matched.
    pub fn remove_member(&mut self, id: i64) -> DashboardResult<usize> {
        let before = self.state.team_members.len();
        self.state.team_members.retain(|m| m.id != id);
        let removed = before - self.state.team_members.len();

        if removed > 0 {
            self.persist()?;
            self.notify();
        }
        Ok(removed)
    }

    /// Register a listener invoked after every persisted mutation.
    pub fn subscribe(&mut self, listener: impl Fn(&TeamState) + Send + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) {
        self.listeners.retain(|(sid, _)| *sid != id);
    }

    fn persist(&self) -> DashboardResult<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        // The snapshot is a bare JSON array of members, same as the original
        // local-storage value.
        let raw = serde_json::to_string_pretty(&self.state.team_members)?;
        fs::write(&self.path, raw).map_err(|e| {
            DashboardError::Persistence(format!(
                "failed to write {}: {}",
                self.path.display(),
                e
            ))
        })
    }

    fn notify(&self) {
        for (_, listener) in &self.listeners {
            listener(&self.state);
        }
    }
}
