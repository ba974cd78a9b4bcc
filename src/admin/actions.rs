//! Admin row and toolbar actions (`data-action`), dispatched through a
//! table of handlers built once when the dashboard starts.

use std::collections::HashMap;
use std::fmt;

use crate::error::{AppError, Result};

use super::controller::AdminController;
use super::surface::AdminSurface;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActionId {
    CreateUser,
    EditUser,
    DeleteUser,
    CreateCourse,
    EditCourse,
    ViewCourse,
    CreateModule,
    EditModule,
    ViewModule,
    EditSubscription,
    ClearMockData,
}

impl ActionId {
    pub const ALL: [ActionId; 11] = [
        ActionId::CreateUser,
        ActionId::EditUser,
        ActionId::DeleteUser,
        ActionId::CreateCourse,
        ActionId::EditCourse,
        ActionId::ViewCourse,
        ActionId::CreateModule,
        ActionId::EditModule,
        ActionId::ViewModule,
        ActionId::EditSubscription,
        ActionId::ClearMockData,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            ActionId::CreateUser => "createUser",
            ActionId::EditUser => "editUser",
            ActionId::DeleteUser => "deleteUser",
            ActionId::CreateCourse => "createCourse",
            ActionId::EditCourse => "editCourse",
            ActionId::ViewCourse => "viewCourse",
            ActionId::CreateModule => "createModule",
            ActionId::EditModule => "editModule",
            ActionId::ViewModule => "viewModule",
            ActionId::EditSubscription => "editSubscription",
            ActionId::ClearMockData => "clearMockData",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|id| id.name() == name)
    }
}

impl fmt::Display for ActionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Record ids carried by the clicked element's data attributes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ActionTarget {
    pub user_id: Option<i64>,
    pub course_id: Option<i64>,
    pub module_id: Option<i64>,
    pub sub_id: Option<i64>,
}

impl ActionTarget {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn user(id: i64) -> Self {
        Self {
            user_id: Some(id),
            ..Self::default()
        }
    }

    pub fn course(id: i64) -> Self {
        Self {
            course_id: Some(id),
            ..Self::default()
        }
    }

    pub fn module(id: i64) -> Self {
        Self {
            module_id: Some(id),
            ..Self::default()
        }
    }

    pub fn subscription(id: i64) -> Self {
        Self {
            sub_id: Some(id),
            ..Self::default()
        }
    }
}

pub type ActionHandler<S> = fn(&mut AdminController<S>, &ActionTarget) -> Result<()>;

/// Handlers keyed by action. Each action can be registered once.
pub struct ActionRegistry<S: AdminSurface> {
    handlers: HashMap<ActionId, ActionHandler<S>>,
}

impl<S: AdminSurface> Default for ActionRegistry<S> {
    fn default() -> Self {
        Self {
            handlers: HashMap::new(),
        }
    }
}

impl<S: AdminSurface> ActionRegistry<S> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, id: ActionId, handler: ActionHandler<S>) -> Result<()> {
        if self.handlers.contains_key(&id) {
            return Err(AppError::DuplicateAction(id));
        }
        self.handlers.insert(id, handler);
        Ok(())
    }

    /// Register by `data-action` name, rejecting names no action answers to.
    pub fn register_named(&mut self, name: &str, handler: ActionHandler<S>) -> Result<()> {
        let id = ActionId::from_name(name).ok_or_else(|| AppError::UnknownAction(name.to_string()))?;
        self.register(id, handler)
    }

    pub fn resolve(&self, name: &str) -> Result<(ActionId, ActionHandler<S>)> {
        ActionId::from_name(name)
            .and_then(|id| self.handlers.get(&id).map(|handler| (id, *handler)))
            .ok_or_else(|| AppError::UnknownAction(name.to_string()))
    }

    /// Actions without a handler.
    pub fn missing(&self) -> Vec<ActionId> {
        ActionId::ALL
            .into_iter()
            .filter(|id| !self.handlers.contains_key(id))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }
}
