use shared_types::{AppError, Employee, EmployeeFormData, FormField};
use std::collections::BTreeMap;
use validator::Validate;

use crate::api::EmployeeApi;

/// Controls whether the form creates a record or edits an existing one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormMode {
    #[default]
    Create,
    Edit(i64),
}

impl FormMode {
    /// Edit mode when the route carries an id.
    pub fn from_route(id: Option<i64>) -> Self {
        match id {
            Some(id) => FormMode::Edit(id),
            None => FormMode::Create,
        }
    }

    pub fn is_edit(&self) -> bool {
        matches!(self, FormMode::Edit(_))
    }

    pub fn title(&self) -> &'static str {
        match self {
            FormMode::Create => "Add New Employee",
            FormMode::Edit(_) => "Edit Employee",
        }
    }

    pub fn submit_label(&self) -> &'static str {
        match self {
            FormMode::Create => "Create Employee",
            FormMode::Edit(_) => "Update Employee",
        }
    }

    pub fn success_message(&self) -> &'static str {
        match self {
            FormMode::Create => "Employee created successfully",
            FormMode::Edit(_) => "Employee updated successfully",
        }
    }

    pub fn failure_message(&self) -> &'static str {
        match self {
            FormMode::Create => "Failed to create employee",
            FormMode::Edit(_) => "Failed to update employee",
        }
    }
}

/// A validated form ready to go over the wire.
///
/// Split from [`EmployeeForm`] so UI code can release its state before
/// awaiting the request.
#[derive(Debug, Clone, PartialEq)]
pub struct Submission {
    pub mode: FormMode,
    pub data: EmployeeFormData,
}

impl Submission {
    pub async fn send(&self, api: &impl EmployeeApi) -> Result<Employee, AppError> {
        match self.mode {
            FormMode::Create => api.create_employee(&self.data).await,
            FormMode::Edit(id) => api.update_employee(id, &self.data).await,
        }
    }
}

/// Employee create/edit form state with per-field errors.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EmployeeForm {
    pub mode: FormMode,
    pub data: EmployeeFormData,
    errors: BTreeMap<FormField, String>,
}

impl EmployeeForm {
    pub fn new(mode: FormMode) -> Self {
        Self {
            mode,
            ..Self::default()
        }
    }

    /// Hydrate from a fetched record; switches to edit mode for its id.
    pub fn load(&mut self, employee: &Employee) {
        self.mode = FormMode::Edit(employee.id);
        self.data = EmployeeFormData::from(employee);
        self.errors.clear();
    }

    /// Update one field and clear only that field's error.
    pub fn set_field(&mut self, field: FormField, value: impl Into<String>) {
        self.data.set(field, value.into());
        self.errors.remove(&field);
    }

    pub fn value(&self, field: FormField) -> &str {
        self.data.get(field)
    }

    pub fn error(&self, field: FormField) -> Option<&str> {
        self.errors.get(&field).map(String::as_str)
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Run every rule, replacing the stored errors with the result.
    pub fn validate(&mut self) -> Result<(), AppError> {
        self.errors.clear();
        match self.data.validate() {
            Ok(()) => Ok(()),
            Err(errors) => {
                let err = AppError::from(errors);
                for (key, message) in &err.field_errors {
                    if let Some(field) = FormField::from_key(key) {
                        self.errors.insert(field, message.clone());
                    }
                }
                Err(err)
            }
        }
    }

    /// Validate and hand back what to send. Nothing is sent on failure.
    pub fn prepare(&mut self) -> Result<Submission, AppError> {
        self.validate()?;
        Ok(Submission {
            mode: self.mode,
            data: self.data.clone(),
        })
    }

    /// Validate, then create or update according to the mode.
    pub async fn submit(&mut self, api: &impl EmployeeApi) -> Result<Employee, AppError> {
        let submission = self.prepare()?;
        submission.send(api).await
    }
}
