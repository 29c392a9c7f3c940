use icu_collator::{Collator, CollatorOptions};
use shared_types::{Employee, DEPARTMENTS};
use std::cmp::Ordering;

/// Column the employee list can be ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SortField {
    #[default]
    Name,
    Department,
    Email,
    Phone,
    ReportingManager,
}

impl SortField {
    pub const ALL: [SortField; 5] = [
        SortField::Name,
        SortField::Department,
        SortField::Email,
        SortField::Phone,
        SortField::ReportingManager,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            SortField::Name => "Name",
            SortField::Department => "Department",
            SortField::Email => "Email",
            SortField::Phone => "Phone",
            SortField::ReportingManager => "Reporting Manager",
        }
    }

    fn value<'a>(&self, employee: &'a Employee) -> &'a str {
        match self {
            SortField::Name => &employee.name,
            SortField::Department => &employee.department,
            SortField::Email => &employee.email,
            SortField::Phone => &employee.phone,
            SortField::ReportingManager => &employee.reporting_manager,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn flipped(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }

    pub fn arrow(&self) -> &'static str {
        match self {
            SortDirection::Ascending => "↑",
            SortDirection::Descending => "↓",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SortState {
    pub field: SortField,
    pub direction: SortDirection,
}

impl SortState {
    /// Same field flips direction; a new field starts ascending.
    pub fn toggle(self, field: SortField) -> Self {
        if self.field == field {
            Self {
                field,
                direction: self.direction.flipped(),
            }
        } else {
            Self {
                field,
                direction: SortDirection::Ascending,
            }
        }
    }

    /// Direction indicator for a column header, if it is the active one.
    pub fn indicator(&self, field: SortField) -> Option<&'static str> {
        (self.field == field).then(|| self.direction.arrow())
    }

    fn compare(&self, collator: Option<&Collator>, a: &Employee, b: &Employee) -> Ordering {
        let (a, b) = match self.direction {
            SortDirection::Ascending => (self.field.value(a), self.field.value(b)),
            SortDirection::Descending => (self.field.value(b), self.field.value(a)),
        };
        match collator {
            Some(collator) => collator.compare(a, b),
            None => a.to_lowercase().cmp(&b.to_lowercase()),
        }
    }
}

/// Search and sort state over the last full fetch of employees.
///
/// The visible rows are always recomputed from the full set, so they never
/// reflect a partial fetch or a stale filter.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EmployeeListView {
    all: Vec<Employee>,
    search: String,
    sort: SortState,
}

impl EmployeeListView {
    pub fn new(all: Vec<Employee>) -> Self {
        Self {
            all,
            ..Self::default()
        }
    }

    /// Replace the full set after a fetch. Search and sort are kept.
    pub fn set_all(&mut self, all: Vec<Employee>) {
        self.all = all;
    }

    pub fn all(&self) -> &[Employee] {
        &self.all
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn set_search(&mut self, term: impl Into<String>) {
        self.search = term.into();
    }

    pub fn clear_search(&mut self) {
        self.search.clear();
    }

    pub fn sort(&self) -> SortState {
        self.sort
    }

    pub fn toggle_sort(&mut self, field: SortField) {
        self.sort = self.sort.toggle(field);
    }

    /// Drop a deleted employee locally without refetching.
    pub fn remove(&mut self, id: i64) {
        self.all.retain(|e| e.id != id);
    }

    /// Filtered, sorted projection of the full set.
    pub fn rows(&self) -> Vec<Employee> {
        let term = self.search.to_lowercase();
        let mut rows: Vec<Employee> = self
            .all
            .iter()
            .filter(|e| matches_search(e, &term))
            .cloned()
            .collect();
        let collator = root_collator();
        // `sort_by` is stable: ties keep fetch order.
        rows.sort_by(|a, b| self.sort.compare(collator.as_ref(), a, b));
        rows
    }
}

/// Root-locale collation, so accented letters sort beside their base letter.
/// Falls back to lowercase code point order if the collation data is missing.
fn root_collator() -> Option<Collator> {
    match Collator::try_new(&Default::default(), CollatorOptions::new()) {
        Ok(collator) => Some(collator),
        Err(err) => {
            tracing::warn!(error = %err, "Collator unavailable, sorting by code point");
            None
        }
    }
}

/// `term` must already be lowercase. Empty matches everything.
fn matches_search(employee: &Employee, term: &str) -> bool {
    term.is_empty()
        || employee.name.to_lowercase().contains(term)
        || employee.email.to_lowercase().contains(term)
        || employee.department.to_lowercase().contains(term)
}

/// Headcount per department in department order, skipping empty ones.
/// Departments outside the fixed list are not counted.
pub fn department_headcount(employees: &[Employee]) -> Vec<(&'static str, usize)> {
    DEPARTMENTS
        .iter()
        .map(|dept| (*dept, employees.iter().filter(|e| e.department == *dept).count()))
        .filter(|(_, count)| *count > 0)
        .collect()
}
