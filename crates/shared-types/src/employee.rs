use serde::{Deserialize, Deserializer, Serialize};
use validator::{Validate, ValidationError};

/// Valid department values, in selector order.
pub const DEPARTMENTS: &[&str] = &[
    "Engineering",
    "Human Resources",
    "Finance",
    "Marketing",
    "Sales",
    "Operations",
    "Customer Support",
    "Research & Development",
    "Legal",
    "Executive",
];

/// An employee record as returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    pub id: i64,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub department: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub email: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub phone: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub reporting_manager: String,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// Body for creating or updating an employee.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Validate)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeFormData {
    #[validate(custom(function = "validate_name"))]
    pub name: String,
    #[validate(custom(function = "validate_department"))]
    pub department: String,
    #[validate(custom(function = "validate_email"))]
    pub email: String,
    #[validate(custom(function = "validate_phone"))]
    pub phone: String,
    #[validate(custom(function = "validate_reporting_manager"))]
    pub reporting_manager: String,
}

impl From<&Employee> for EmployeeFormData {
    fn from(e: &Employee) -> Self {
        Self {
            name: e.name.clone(),
            department: e.department.clone(),
            email: e.email.clone(),
            phone: e.phone.clone(),
            reporting_manager: e.reporting_manager.clone(),
        }
    }
}

impl EmployeeFormData {
    pub fn get(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.name,
            FormField::Department => &self.department,
            FormField::Email => &self.email,
            FormField::Phone => &self.phone,
            FormField::ReportingManager => &self.reporting_manager,
        }
    }

    pub fn set(&mut self, field: FormField, value: String) {
        match field {
            FormField::Name => self.name = value,
            FormField::Department => self.department = value,
            FormField::Email => self.email = value,
            FormField::Phone => self.phone = value,
            FormField::ReportingManager => self.reporting_manager = value,
        }
    }
}

/// Editable fields of the employee form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FormField {
    Name,
    Department,
    Email,
    Phone,
    ReportingManager,
}

impl FormField {
    pub const ALL: [FormField; 5] = [
        FormField::Name,
        FormField::Department,
        FormField::Email,
        FormField::Phone,
        FormField::ReportingManager,
    ];

    /// Key used in JSON bodies and field error maps.
    pub fn as_str(&self) -> &'static str {
        match self {
            FormField::Name => "name",
            FormField::Department => "department",
            FormField::Email => "email",
            FormField::Phone => "phone",
            FormField::ReportingManager => "reportingManager",
        }
    }

    /// Accepts both the wire key and the Rust field name.
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "name" => Some(FormField::Name),
            "department" => Some(FormField::Department),
            "email" => Some(FormField::Email),
            "phone" => Some(FormField::Phone),
            "reportingManager" | "reporting_manager" => Some(FormField::ReportingManager),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            FormField::Name => "Full Name",
            FormField::Department => "Department",
            FormField::Email => "Email Address",
            FormField::Phone => "Phone Number",
            FormField::ReportingManager => "Reporting Manager",
        }
    }
}

fn required(value: &str, message: &'static str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("required").with_message(message.into()));
    }
    Ok(())
}

fn validate_name(value: &str) -> Result<(), ValidationError> {
    required(value, "Name is required")
}

fn validate_department(value: &str) -> Result<(), ValidationError> {
    if value.is_empty() {
        return Err(ValidationError::new("required").with_message("Department is required".into()));
    }
    if !DEPARTMENTS.contains(&value) {
        return Err(ValidationError::new("department").with_message("Department is invalid".into()));
    }
    Ok(())
}

fn validate_email(value: &str) -> Result<(), ValidationError> {
    required(value, "Email is required")?;
    if !is_email_shaped(value) {
        return Err(ValidationError::new("email").with_message("Email is invalid".into()));
    }
    Ok(())
}

fn validate_phone(value: &str) -> Result<(), ValidationError> {
    required(value, "Phone number is required")
}

fn validate_reporting_manager(value: &str) -> Result<(), ValidationError> {
    required(value, "Reporting Manager is required")
}

/// `local@domain.tld`: no whitespace, exactly one `@` with text on both sides,
/// and a `.` inside the domain with text on both sides of it.
pub fn is_email_shaped(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    let last = domain.len().saturating_sub(1);
    domain
        .char_indices()
        .any(|(i, c)| c == '.' && i > 0 && i < last)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn valid_form() -> EmployeeFormData {
        EmployeeFormData {
            name: "Amy Chen".into(),
            department: "Engineering".into(),
            email: "amy@example.com".into(),
            phone: "555-0100".into(),
            reporting_manager: "Bob".into(),
        }
    }

    fn field_message(data: &EmployeeFormData, field: &str) -> Option<String> {
        let errors = data.validate().err()?;
        let errs = errors.field_errors();
        let first = errs.get(field)?.first()?;
        first.message.as_ref().map(|m| m.to_string())
    }

    #[test]
    fn ten_departments_in_order() {
        assert_eq!(DEPARTMENTS.len(), 10);
        assert_eq!(DEPARTMENTS[0], "Engineering");
        assert_eq!(DEPARTMENTS[9], "Executive");
    }

    #[test]
    fn valid_form_passes() {
        assert!(valid_form().validate().is_ok());
    }

    #[test]
    fn blank_name_is_required() {
        let mut data = valid_form();
        data.name = "   ".into();
        assert_eq!(field_message(&data, "name").as_deref(), Some("Name is required"));
    }

    #[test]
    fn empty_department_is_required() {
        let mut data = valid_form();
        data.department = String::new();
        assert_eq!(
            field_message(&data, "department").as_deref(),
            Some("Department is required")
        );
    }

    #[test]
    fn unknown_department_is_invalid() {
        let mut data = valid_form();
        data.department = "Catering".into();
        assert_eq!(
            field_message(&data, "department").as_deref(),
            Some("Department is invalid")
        );
    }

    #[test]
    fn email_required_then_shape() {
        let mut data = valid_form();
        data.email = " ".into();
        assert_eq!(field_message(&data, "email").as_deref(), Some("Email is required"));
        data.email = "not-an-email".into();
        assert_eq!(field_message(&data, "email").as_deref(), Some("Email is invalid"));
    }

    #[test]
    fn phone_and_manager_required() {
        let mut data = valid_form();
        data.phone = String::new();
        data.reporting_manager = "\t".into();
        assert_eq!(
            field_message(&data, "phone").as_deref(),
            Some("Phone number is required")
        );
        assert_eq!(
            field_message(&data, "reporting_manager").as_deref(),
            Some("Reporting Manager is required")
        );
    }

    #[test]
    fn email_shapes() {
        assert!(is_email_shaped("a@b.com"));
        assert!(is_email_shaped("first.last@sub.example.org"));
        assert!(is_email_shaped("a@b.c."));
        assert!(!is_email_shaped("a@b"));
        assert!(!is_email_shaped("@b.com"));
        assert!(!is_email_shaped("a@.com"));
        assert!(!is_email_shaped("a@com."));
        assert!(!is_email_shaped("a@@b.com"));
        assert!(!is_email_shaped("a@b@c.com"));
        assert!(!is_email_shaped("a b@c.com"));
        assert!(!is_email_shaped(" a@b.com"));
    }

    #[test]
    fn employee_uses_camel_case_on_the_wire() {
        let json = r#"{"id":7,"name":"Bob","department":"Sales","email":"b@x.io","phone":"1","reportingManager":"Amy"}"#;
        let e: Employee = serde_json::from_str(json).unwrap();
        assert_eq!(e.reporting_manager, "Amy");
        let data = EmployeeFormData::from(&e);
        let out = serde_json::to_value(&data).unwrap();
        assert_eq!(out["reportingManager"], "Amy");
        assert!(out.get("id").is_none());
    }

    #[test]
    fn missing_fields_deserialize_as_empty() {
        let e: Employee = serde_json::from_str(r#"{"id":3,"name":"Zed"}"#).unwrap();
        assert_eq!(e.department, "");
        assert_eq!(e.reporting_manager, "");
    }

    #[test]
    fn null_fields_deserialize_as_empty() {
        let json = r#"{"id":4,"name":"Ana","department":null,"email":"ana@example.com","phone":null,"reportingManager":null}"#;
        let e: Employee = serde_json::from_str(json).unwrap();
        assert_eq!(e.name, "Ana");
        assert_eq!(e.department, "");
        assert_eq!(e.phone, "");
        assert_eq!(e.reporting_manager, "");
    }

    #[test]
    fn list_with_null_manager_deserializes() {
        let json = r#"[
            {"id":1,"name":"Bob","reportingManager":"Carol"},
            {"id":2,"name":"Carol","reportingManager":null}
        ]"#;
        let list: Vec<Employee> = serde_json::from_str(json).unwrap();
        assert_eq!(list.len(), 2);
        assert_eq!(list[0].reporting_manager, "Carol");
        assert_eq!(list[1].reporting_manager, "");
    }

    #[test]
    fn form_field_keys() {
        for field in FormField::ALL {
            assert_eq!(FormField::from_key(field.as_str()), Some(field));
        }
        assert_eq!(
            FormField::from_key("reporting_manager"),
            Some(FormField::ReportingManager)
        );
        assert_eq!(FormField::from_key("id"), None);
    }

    #[test]
    fn get_and_set_by_field() {
        let mut data = EmployeeFormData::default();
        data.set(FormField::Phone, "555".into());
        assert_eq!(data.get(FormField::Phone), "555");
        assert_eq!(data.get(FormField::Name), "");
    }
}
