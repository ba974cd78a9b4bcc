use crate::config::Config;
use crate::error::{AppError, Result};
use crate::local_storage::{CoreLocalStorage, SettingsLocalStorage};
use crate::models::{CurrentUser, MockDataset, SettingKey};
use crate::services::{AccessDecision, AccessService};
use crate::store::MockDataStore;

use super::actions::{ActionId, ActionRegistry, ActionTarget};
use super::dashboard::DashboardStats;
use super::modal::ModalState;
use super::page::AdminPage;
use super::state::AdminUiState;
use super::surface::AdminSurface;
use super::tables::{
    PageInfo, TableKind, filter_users, render_activity, render_courses, render_modules,
    render_subscriptions, render_users,
};

/// Where the sign-in page should send an admin back to.
pub const ADMIN_DESTINATION: &str = "admin";

const BACKEND_REQUIRED: &str = "modal would open here. Backend integration required.";

/// Result of opening the admin page.
pub enum AdminInit<S: AdminSurface> {
    Ready(Box<AdminController<S>>),
    /// The visitor is not an admin; the surface has already been redirected.
    Redirected { surface: S, url: String },
}

/// The admin dashboard: page switching, tables, actions and settings.
pub struct AdminController<S: AdminSurface> {
    surface: S,
    store: MockDataStore,
    access: AccessService,
    settings: SettingsLocalStorage,
    state: AdminUiState,
    page: AdminPage,
    current_user: CurrentUser,
    modal: ModalState,
    actions: ActionRegistry<S>,
}

impl<S: AdminSurface> AdminController<S> {
    /// Gate on the stored session, then load data and show the dashboard.
    pub fn init(core_storage: CoreLocalStorage, mut surface: S, config: &Config) -> Result<AdminInit<S>> {
        let access = AccessService::new(core_storage.clone());
        let session = match access.require_admin(ADMIN_DESTINATION) {
            AccessDecision::Granted(session) => session,
            AccessDecision::Redirect(url) => {
                surface.redirect(&url);
                return Ok(AdminInit::Redirected { surface, url });
            }
        };

        let current_user = CurrentUser::from_session(Some(&session));
        surface.set_user_display(&current_user.display());

        let mut controller = Self {
            surface,
            store: MockDataStore::open(core_storage.clone()),
            access,
            settings: SettingsLocalStorage::new(core_storage),
            state: AdminUiState::new(config.users_per_page),
            page: AdminPage::Dashboard,
            current_user,
            modal: ModalState::default(),
            actions: default_actions()?,
        };

        controller.surface.render_modal(&controller.modal);
        controller.show_page(AdminPage::Dashboard);

        tracing::info!(user = %controller.current_user.email, "Admin dashboard ready");
        Ok(AdminInit::Ready(Box::new(controller)))
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn data(&self) -> &MockDataset {
        self.store.data()
    }

    pub fn ui_state(&self) -> &AdminUiState {
        &self.state
    }

    pub fn current_page(&self) -> AdminPage {
        self.page
    }

    pub fn current_user(&self) -> &CurrentUser {
        &self.current_user
    }

    pub fn modal(&self) -> &ModalState {
        &self.modal
    }

    /// Nav link click (`data-admin-page`).
    pub fn navigate(&mut self, name: &str) -> Result<()> {
        let page = AdminPage::from_name(name).ok_or_else(|| AppError::UnknownPage(name.to_string()))?;
        self.show_page(page);
        Ok(())
    }

    /// Activate a page and render its data.
    pub fn show_page(&mut self, page: AdminPage) {
        self.page = page;
        self.surface.set_active_page(page);
        tracing::debug!(page = %page, "Showing admin page");

        match page {
            AdminPage::Dashboard => self.load_dashboard(),
            AdminPage::Users => self.render_users(),
            AdminPage::Subscriptions => self.render_subscriptions(),
            AdminPage::Courses => self.render_courses(),
            AdminPage::Modules => self.render_modules(),
            AdminPage::Settings => self.load_settings(),
        }
    }

    fn load_dashboard(&mut self) {
        let stats = DashboardStats::from_dataset(self.store.data());
        for (key, value) in stats.entries() {
            self.surface.set_stat(key, &value.to_string());
        }
        let activity = render_activity(self.store.data());
        self.surface
            .set_table_body(TableKind::RecentActivity, &activity.body_html());
    }

    fn render_users(&mut self) {
        let view = render_users(self.store.data(), &self.state);
        self.surface.set_pagination(TableKind::Users, &view.page);
        self.surface.set_table_body(TableKind::Users, &view.table.body_html());
    }

    fn render_subscriptions(&mut self) {
        let view = render_subscriptions(self.store.data(), &self.state);
        self.surface
            .set_stat("activeSubs", &view.summary.active_count.to_string());
        self.surface
            .set_stat("monthlyRevenue", &view.summary.revenue_label());
        self.surface
            .set_table_body(TableKind::Subscriptions, &view.table.body_html());
    }

    fn render_courses(&mut self) {
        let table = render_courses(self.store.data());
        self.surface.set_table_body(TableKind::Courses, &table.body_html());
    }

    fn render_modules(&mut self) {
        let view = render_modules(self.store.data(), &self.state);
        self.state.course_filter = view.selected.clone();
        self.surface
            .set_filter_options("courseFilter", &view.options, &view.selected);
        self.surface.set_table_body(TableKind::Modules, &view.table.body_html());
    }

    fn load_settings(&mut self) {
        let settings = self.settings.load_settings();
        self.surface.show_settings(&settings);
    }

    /// Search box input (`data-search`). Only the users table is searchable.
    pub fn on_search(&mut self, table: &str, value: &str) {
        match TableKind::from_name(table) {
            Some(TableKind::Users) => {
                self.state.users_search = value.to_string();
                self.render_users();
            }
            _ => tracing::debug!(table, "Search ignored for table"),
        }
    }

    /// Filter select change (`data-filter`).
    pub fn on_filter(&mut self, filter: &str, value: &str) {
        match filter {
            "subscriptionStatus" => {
                self.state.subscription_status = value.to_string();
                self.render_subscriptions();
            }
            "courseFilter" => {
                self.state.course_filter = value.to_string();
                self.render_modules();
            }
            _ => tracing::debug!(filter, "Unknown filter ignored"),
        }
    }

    /// Pagination button (`data-page` = `prev` | `next`). Disabled
    /// controls do nothing.
    pub fn on_paginate(&mut self, table: &str, direction: &str) {
        if TableKind::from_name(table) != Some(TableKind::Users) {
            tracing::debug!(table, "Pagination ignored for table");
            return;
        }

        let matched = filter_users(&self.store.data().users, &self.state.users_search).len();
        let page = PageInfo::new(self.state.users_page, matched, self.state.per_page);

        match direction {
            "prev" if !page.prev_disabled => self.state.users_page -= 1,
            "next" if !page.next_disabled => self.state.users_page += 1,
            _ => return,
        }
        self.render_users();
    }

    /// Refresh button (`data-refresh`).
    pub fn on_refresh(&mut self, panel: &str) {
        match panel {
            "activity" => self.load_dashboard(),
            _ => tracing::debug!(panel, "Nothing to refresh"),
        }
    }

    /// Run the handler registered for a `data-action` name.
    pub fn dispatch(&mut self, name: &str, target: &ActionTarget) -> Result<()> {
        let (id, handler) = self.actions.resolve(name).map_err(|e| {
            tracing::warn!(action = name, "Unknown admin action");
            e
        })?;
        tracing::debug!(action = %id, ?target, "Dispatching admin action");
        handler(self, target)
    }

    /// Write one setting from the settings form.
    pub fn save_setting(&mut self, name: &str, value: &str) -> Result<()> {
        let key = SettingKey::from_name(name).ok_or_else(|| AppError::UnknownSetting(name.to_string()))?;
        if let Err(e) = self.settings.save_setting(key, value) {
            tracing::warn!(setting = name, error = %e, "Failed to save setting");
            self.surface.alert(&format!("Could not save setting: {e}"));
            return Err(e.into());
        }
        Ok(())
    }

    pub fn open_modal(&mut self, title: &str, body: &str) {
        self.modal.show(title, body);
        self.surface.render_modal(&self.modal);
    }

    pub fn close_modal(&mut self) {
        self.modal.close();
        self.surface.render_modal(&self.modal);
    }

    pub fn on_key(&mut self, key: &str) {
        if self.modal.on_key(key) {
            self.surface.render_modal(&self.modal);
        }
    }

    pub fn on_modal_click(&mut self, on_overlay: bool) {
        if self.modal.on_click(on_overlay) {
            self.surface.render_modal(&self.modal);
        }
    }

    /// Drop the session and leave for the sign-in page.
    pub fn logout(mut self) -> S {
        let destination = self.access.logout();
        tracing::info!(user = %self.current_user.email, "Admin signed out");
        self.surface.redirect(destination);
        self.surface
    }
}

fn default_actions<S: AdminSurface>() -> Result<ActionRegistry<S>> {
    let mut registry = ActionRegistry::new();
    registry.register(ActionId::CreateUser, create_user)?;
    registry.register(ActionId::EditUser, edit_user)?;
    registry.register(ActionId::DeleteUser, delete_user)?;
    registry.register(ActionId::CreateCourse, create_course)?;
    registry.register(ActionId::EditCourse, edit_course)?;
    registry.register(ActionId::ViewCourse, view_course)?;
    registry.register(ActionId::CreateModule, create_module)?;
    registry.register(ActionId::EditModule, edit_module)?;
    registry.register(ActionId::ViewModule, view_module)?;
    registry.register(ActionId::EditSubscription, edit_subscription)?;
    registry.register(ActionId::ClearMockData, clear_mock_data)?;
    Ok(registry)
}

fn id_label(id: Option<i64>) -> String {
    id.map(|id| id.to_string()).unwrap_or_else(|| "?".to_string())
}

fn create_user<S: AdminSurface>(admin: &mut AdminController<S>, _: &ActionTarget) -> Result<()> {
    admin.surface.alert(&format!("Create User {BACKEND_REQUIRED}"));
    Ok(())
}

fn edit_user<S: AdminSurface>(admin: &mut AdminController<S>, target: &ActionTarget) -> Result<()> {
    let id = id_label(target.user_id);
    admin.surface.alert(&format!("Edit User {id} {BACKEND_REQUIRED}"));
    Ok(())
}

fn delete_user<S: AdminSurface>(admin: &mut AdminController<S>, target: &ActionTarget) -> Result<()> {
    let Some(id) = target.user_id else {
        tracing::warn!("deleteUser without a user id");
        return Ok(());
    };
    if !admin
        .surface
        .confirm(&format!("Delete user {id}? This action cannot be undone."))
    {
        return Ok(());
    }

    let saved = admin.store.delete_user(id);
    admin.render_users();
    match saved {
        Ok(_) => {
            admin
                .surface
                .alert("User deleted from mock data. (In production, this would call backend API)");
            Ok(())
        }
        Err(e) => {
            admin.surface.alert(&format!("Could not save mock data: {e}"));
            Err(e.into())
        }
    }
}

fn create_course<S: AdminSurface>(admin: &mut AdminController<S>, _: &ActionTarget) -> Result<()> {
    admin.surface.alert(&format!("Create Course {BACKEND_REQUIRED}"));
    Ok(())
}

fn edit_course<S: AdminSurface>(admin: &mut AdminController<S>, target: &ActionTarget) -> Result<()> {
    let id = id_label(target.course_id);
    admin.surface.alert(&format!("Edit Course {id} {BACKEND_REQUIRED}"));
    Ok(())
}

fn view_course<S: AdminSurface>(admin: &mut AdminController<S>, target: &ActionTarget) -> Result<()> {
    if let Some(id) = target.course_id {
        admin.surface.redirect(&format!("index.html?course={id}"));
    }
    Ok(())
}

fn create_module<S: AdminSurface>(admin: &mut AdminController<S>, _: &ActionTarget) -> Result<()> {
    admin.surface.alert(&format!("Create Module {BACKEND_REQUIRED}"));
    Ok(())
}

fn edit_module<S: AdminSurface>(admin: &mut AdminController<S>, target: &ActionTarget) -> Result<()> {
    let id = id_label(target.module_id);
    admin.surface.alert(&format!("Edit Module {id} {BACKEND_REQUIRED}"));
    Ok(())
}

fn view_module<S: AdminSurface>(admin: &mut AdminController<S>, target: &ActionTarget) -> Result<()> {
    let url = target
        .module_id
        .and_then(|id| admin.store.data().module(id))
        .map(|module| module.page_url());
    match url {
        Some(url) => admin.surface.redirect(&url),
        None => tracing::debug!(module_id = ?target.module_id, "No module to view"),
    }
    Ok(())
}

fn edit_subscription<S: AdminSurface>(admin: &mut AdminController<S>, target: &ActionTarget) -> Result<()> {
    let id = id_label(target.sub_id);
    admin.surface.alert(&format!("Edit Subscription {id} {BACKEND_REQUIRED}"));
    Ok(())
}

fn clear_mock_data<S: AdminSurface>(admin: &mut AdminController<S>, _: &ActionTarget) -> Result<()> {
    if !admin
        .surface
        .confirm("Clear all mock data and reset to defaults? This cannot be undone.")
    {
        return Ok(());
    }

    let saved = admin.store.reset();
    admin.show_page(admin.page);
    match saved {
        Ok(()) => {
            admin.surface.alert("Mock data cleared and reset to defaults.");
            Ok(())
        }
        Err(e) => {
            admin.surface.alert(&format!("Could not save mock data: {e}"));
            Err(e.into())
        }
    }
}
