use crate::error::Result;
use crate::upload::DepartmentOption;
use crate::utils::labels;
use derivative::Derivative;
use std::sync::mpsc::Receiver;

#[derive(Debug, Clone, PartialEq)]
pub struct DropdownOption {
    pub value: String,
    pub label: String,
}

/// Department select: a fixed placeholder followed by whatever the
/// directory service returned last.
#[derive(Debug, Clone)]
pub struct DepartmentDropdown {
    pub options: Vec<DropdownOption>,
    pub selected: String,
}

impl Default for DepartmentDropdown {
    fn default() -> Self {
        Self {
            options: vec![DropdownOption {
                value: String::new(),
                label: labels::DEPARTMENT_PLACEHOLDER.to_string(),
            }],
            selected: String::new(),
        }
    }
}

impl DepartmentDropdown {
    pub fn populate(&mut self, items: &[DepartmentOption]) {
        self.options.truncate(1);
        self.options.extend(items.iter().map(|item| DropdownOption {
            value: item.id.to_string(),
            label: item.name.clone(),
        }));

        if !self.options.iter().any(|o| o.value == self.selected) {
            self.selected.clear();
        }
    }

    pub fn selected_label(&self) -> &str {
        self.options
            .iter()
            .find(|o| o.value == self.selected)
            .map(|o| o.label.as_str())
            .unwrap_or(labels::DEPARTMENT_PLACEHOLDER)
    }
}

#[derive(Derivative, Default)]
#[derivative(Debug)]
pub struct AppState {
    pub dropdown: DepartmentDropdown,
    /// Blocking message shown until acknowledged.
    pub alert: Option<String>,
    #[derivative(Debug = "ignore")]
    pub directory_receiver: Option<Receiver<Result<Vec<DepartmentOption>>>>,
}

impl AppState {
    pub fn is_loading_departments(&self) -> bool {
        self.directory_receiver.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn department(id: i64, name: &str) -> DepartmentOption {
        DepartmentOption {
            id,
            name: name.to_string(),
        }
    }

    #[test]
    fn starts_with_placeholder_only() {
        let dropdown = DepartmentDropdown::default();
        assert_eq!(dropdown.options.len(), 1);
        assert_eq!(dropdown.selected_label(), labels::DEPARTMENT_PLACEHOLDER);
    }

    #[test]
    fn populate_replaces_everything_after_placeholder() {
        let mut dropdown = DepartmentDropdown::default();
        dropdown.populate(&[department(1, "Sales"), department(2, "Finance")]);
        dropdown.populate(&[department(7, "Logistics")]);

        assert_eq!(
            dropdown.options,
            vec![
                DropdownOption {
                    value: String::new(),
                    label: labels::DEPARTMENT_PLACEHOLDER.to_string(),
                },
                DropdownOption {
                    value: "7".to_string(),
                    label: "Logistics".to_string(),
                },
            ]
        );
    }

    #[test]
    fn stale_selection_falls_back_to_placeholder() {
        let mut dropdown = DepartmentDropdown::default();
        dropdown.populate(&[department(1, "Sales")]);
        dropdown.selected = "1".to_string();
        assert_eq!(dropdown.selected_label(), "Sales");

        dropdown.populate(&[department(2, "Finance")]);
        assert!(dropdown.selected.is_empty());
    }
}
