use std::path::PathBuf;

use chrono::Utc;
use crossterm::event::KeyCode;

use crate::clock::{parse_hhmm, parse_zone, zone_names};
use crate::config::Config;
use crate::grouping::group_by_zone;
use crate::models::TeamMember;
use crate::store::TeamStore;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AppMode {
    Normal,
    AddForm,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FormField {
    Name,
    Zone,
    Start,
    End,
    Avatar,
}

impl FormField {
    pub fn next(self) -> Self {
        match self {
            FormField::Name => FormField::Zone,
            FormField::Zone => FormField::Start,
            FormField::Start => FormField::End,
            FormField::End => FormField::Avatar,
            FormField::Avatar => FormField::Name,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            FormField::Name => FormField::Avatar,
            FormField::Zone => FormField::Name,
            FormField::Start => FormField::Zone,
            FormField::End => FormField::Start,
            FormField::Avatar => FormField::End,
        }
    }
}

/// In-flight state of the add-member popup.
#[derive(Debug, Clone, Default)]
pub struct AddForm {
    pub field_name: String,
    pub zone: String,
    pub start: String,
    pub end: String,
    pub avatar_path: String,
    /// Encoded data URL once the background read completes.
    pub avatar: Option<String>,
    pub avatar_loading: bool,
    pub active: FormField,
}

impl Default for FormField {
    fn default() -> Self {
        FormField::Name
    }
}

impl AddForm {
    fn with_defaults(config: &Config) -> Self {
        Self {
            start: config.default_start().to_string(),
            end: config.default_end().to_string(),
            ..Default::default()
        }
    }

    fn active_value_mut(&mut self) -> &mut String {
        match self.active {
            FormField::Name => &mut self.field_name,
            FormField::Zone => &mut self.zone,
            FormField::Start => &mut self.start,
            FormField::End => &mut self.end,
            FormField::Avatar => &mut self.avatar_path,
        }
    }

    /// Mirror of the original disabled-button rule: name and zone present.
    pub fn can_submit(&self) -> bool {
        !self.field_name.trim().is_empty() && !self.zone.trim().is_empty()
    }
}

pub struct DashboardApp {
    pub mode: AppMode,
    pub store: TeamStore,
    pub config: Config,
    /// Member ids in grouped render order; selection indexes into this.
    pub visible: Vec<i64>,
    pub selected_index: usize,
    pub form: AddForm,
    pub should_quit: bool,
    pub error_message: Option<String>,
    pub status_message: Option<String>,
    /// Avatar path waiting for a background read; drained by the run loop.
    pending_avatar: Option<PathBuf>,
}

impl DashboardApp {
    pub fn new(store: TeamStore, config: Config) -> Self {
        let mut app = Self {
            mode: AppMode::Normal,
            store,
            config,
            visible: Vec::new(),
            selected_index: 0,
            form: AddForm::default(),
            should_quit: false,
            error_message: None,
            status_message: None,
            pending_avatar: None,
        };
        app.rebuild_visible();
        app
    }

    /// Recompute the flat render order after any roster change.
    pub fn rebuild_visible(&mut self) {
        self.visible = group_by_zone(self.store.members())
            .iter()
            .flat_map(|group| group.members.iter().map(|m| m.id))
            .collect();

        if self.selected_index >= self.visible.len() && !self.visible.is_empty() {
            self.selected_index = self.visible.len() - 1;
        }
    }

    pub fn selected_member(&self) -> Option<&TeamMember> {
        self.visible
            .get(self.selected_index)
            .and_then(|id| self.store.get(*id))
    }

    pub fn take_pending_avatar(&mut self) -> Option<PathBuf> {
        self.pending_avatar.take()
    }

    pub fn handle_key(&mut self, key: KeyCode) {
        self.error_message = None;
        match self.mode {
            AppMode::Normal => self.handle_normal_mode_key(key),
            AppMode::AddForm => self.handle_form_key(key),
        }
    }

    fn handle_normal_mode_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Char('j') | KeyCode::Down => self.move_selection_down(),
            KeyCode::Char('k') | KeyCode::Up => self.move_selection_up(),
            KeyCode::Char('a') => {
                self.form = AddForm::with_defaults(&self.config);
                self.mode = AppMode::AddForm;
            }
            KeyCode::Char('d') => self.remove_selected(),
            KeyCode::Char('r') => self.reload(),
            _ => {}
        }
    }

    fn handle_form_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Esc => {
                self.mode = AppMode::Normal;
                self.form = AddForm::default();
            }
            KeyCode::Tab => {
                self.commit_avatar_field();
                self.form.active = self.form.active.next();
            }
            KeyCode::BackTab => {
                self.commit_avatar_field();
                self.form.active = self.form.active.prev();
            }
            KeyCode::Enter => {
                self.commit_avatar_field();
                self.submit_form();
            }
            KeyCode::Char(c) => {
                self.form.active_value_mut().push(c);
                // Re-typing the path invalidates a previously loaded avatar.
                if self.form.active == FormField::Avatar {
                    self.form.avatar = None;
                }
            }
            KeyCode::Backspace => {
                self.form.active_value_mut().pop();
                if self.form.active == FormField::Avatar {
                    self.form.avatar = None;
                }
            }
            _ => {}
        }
    }

    /// Leaving the avatar field kicks off the background read. The result
    /// lands in the one in-flight `form.avatar` field; submission simply
    /// uses whatever has arrived by then.
    fn commit_avatar_field(&mut self) {
        if self.form.active == FormField::Avatar
            && !self.form.avatar_path.trim().is_empty()
            && self.form.avatar.is_none()
            && !self.form.avatar_loading
        {
            self.form.avatar_loading = true;
            self.pending_avatar = Some(PathBuf::from(self.form.avatar_path.trim()));
        }
    }

    pub fn on_avatar_ready(&mut self, result: Result<String, String>) {
        self.form.avatar_loading = false;
        match result {
            Ok(data_url) => self.form.avatar = Some(data_url),
            Err(e) => self.error_message = Some(e),
        }
    }

    fn submit_form(&mut self) {
        if !self.form.can_submit() {
            self.error_message = Some("Name and time zone are required".to_string());
            return;
        }
        if let Err(e) = parse_zone(self.form.zone.trim()) {
            self.error_message = Some(e.to_string());
            return;
        }
        if let Err(e) = parse_hhmm(&self.form.start).and(parse_hhmm(&self.form.end)) {
            self.error_message = Some(e.to_string());
            return;
        }

        let id = Utc::now().timestamp_millis();
        let member = TeamMember::new(
            id,
            self.form.field_name.trim(),
            self.form.zone.trim(),
            self.form.start.clone(),
            self.form.end.clone(),
        )
        .with_avatar(self.form.avatar.clone());

        match self.store.add_member(member) {
            Ok(()) => {
                self.status_message = Some(format!("Added {}", self.form.field_name.trim()));
                self.form = AddForm::default();
                self.mode = AppMode::Normal;
                self.rebuild_visible();
            }
            Err(e) => self.error_message = Some(e.to_string()),
        }
    }

    fn remove_selected(&mut self) {
        let Some(member) = self.selected_member() else {
            return;
        };
        let (id, name) = (member.id, member.name.clone());

        match self.store.remove_member(id) {
            Ok(_) => {
                self.status_message = Some(format!("Removed {}", name));
                self.rebuild_visible();
            }
            Err(e) => self.error_message = Some(e.to_string()),
        }
    }

    fn reload(&mut self) {
        match TeamStore::load(self.store.path().to_path_buf()) {
            Ok(store) => {
                self.store = store;
                self.rebuild_visible();
                self.status_message = Some("Reloaded".to_string());
            }
            Err(e) => self.error_message = Some(e.to_string()),
        }
    }

    fn move_selection_down(&mut self) {
        if !self.visible.is_empty() {
            self.selected_index = (self.selected_index + 1) % self.visible.len();
        }
    }

    fn move_selection_up(&mut self) {
        if !self.visible.is_empty() {
            if self.selected_index == 0 {
                self.selected_index = self.visible.len() - 1;
            } else {
                self.selected_index -= 1;
            }
        }
    }

    /// Zone identifiers matching the form's current zone input.
    pub fn zone_suggestions(&self, limit: usize) -> Vec<&'static str> {
        let query = self.form.zone.trim().to_lowercase();
        if query.is_empty() {
            return Vec::new();
        }
        zone_names()
            .filter(|name| name.to_lowercase().contains(&query))
            .take(limit)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn app() -> (tempfile::TempDir, DashboardApp) {
        let dir = tempdir().unwrap();
        let store = TeamStore::load(dir.path().join("team.json")).unwrap();
        (dir, DashboardApp::new(store, Config::default()))
    }

    fn type_str(app: &mut DashboardApp, s: &str) {
        for c in s.chars() {
            app.handle_key(KeyCode::Char(c));
        }
    }

    #[test]
    fn test_add_form_flow_creates_member() {
        let (_dir, mut app) = app();

        app.handle_key(KeyCode::Char('a'));
        assert_eq!(app.mode, AppMode::AddForm);
        // Defaults are prefilled.
        assert_eq!(app.form.start, "09:00");
        assert_eq!(app.form.end, "17:00");

        type_str(&mut app, "Ada");
        app.handle_key(KeyCode::Tab);
        type_str(&mut app, "Europe/London");
        app.handle_key(KeyCode::Enter);

        assert_eq!(app.mode, AppMode::Normal);
        assert_eq!(app.store.len(), 1);
        assert_eq!(app.store.members()[0].name, "Ada");
        assert_eq!(app.visible.len(), 1);
    }

    #[test]
    fn test_submit_without_required_fields_stays_in_form() {
        let (_dir, mut app) = app();

        app.handle_key(KeyCode::Char('a'));
        app.handle_key(KeyCode::Enter);

        assert_eq!(app.mode, AppMode::AddForm);
        assert!(app.error_message.is_some());
        assert!(app.store.is_empty());
    }

    #[test]
    fn test_submit_with_bad_zone_is_rejected() {
        let (_dir, mut app) = app();

        app.handle_key(KeyCode::Char('a'));
        type_str(&mut app, "Ada");
        app.handle_key(KeyCode::Tab);
        type_str(&mut app, "Narnia/Lantern");
        app.handle_key(KeyCode::Enter);

        assert_eq!(app.mode, AppMode::AddForm);
        assert!(app.store.is_empty());
    }

    #[test]
    fn test_remove_selected_member() {
        let (_dir, mut app) = app();
        app.store
            .add_member(TeamMember::new(1, "Ada", "Europe/London", "09:00", "17:00"))
            .unwrap();
        app.rebuild_visible();

        app.handle_key(KeyCode::Char('d'));
        assert!(app.store.is_empty());
        assert!(app.visible.is_empty());
    }

    #[test]
    fn test_selection_follows_grouped_order() {
        let (_dir, mut app) = app();
        app.store
            .add_member(TeamMember::new(1, "Lin", "Asia/Tokyo", "09:00", "17:00"))
            .unwrap();
        app.store
            .add_member(TeamMember::new(
                2,
                "Sam",
                "America/New_York",
                "09:00",
                "17:00",
            ))
            .unwrap();
        app.rebuild_visible();

        // Grouped order puts America before Asia.
        assert_eq!(app.visible, vec![2, 1]);
        assert_eq!(app.selected_member().unwrap().name, "Sam");

        app.handle_key(KeyCode::Char('j'));
        assert_eq!(app.selected_member().unwrap().name, "Lin");
    }

    #[test]
    fn test_avatar_commit_queues_background_read() {
        let (_dir, mut app) = app();

        app.handle_key(KeyCode::Char('a'));
        type_str(&mut app, "Ada");
        app.form.active = FormField::Avatar;
        type_str(&mut app, "/tmp/avatar.png");
        app.handle_key(KeyCode::Tab);

        assert!(app.form.avatar_loading);
        assert_eq!(
            app.take_pending_avatar(),
            Some(PathBuf::from("/tmp/avatar.png"))
        );

        app.on_avatar_ready(Ok("data:image/png;base64,aGk=".to_string()));
        assert!(!app.form.avatar_loading);
        assert!(app.form.avatar.is_some());
    }

    #[test]
    fn test_zone_suggestions_filter() {
        let (_dir, mut app) = app();
        app.handle_key(KeyCode::Char('a'));
        app.form.active = FormField::Zone;
        type_str(&mut app, "tokyo");

        let suggestions = app.zone_suggestions(5);
        assert!(suggestions.contains(&"Asia/Tokyo"));
    }
}
