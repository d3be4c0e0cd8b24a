/// Step definitions and the step registry
///
/// Defines the ordered catalogue of wizard steps. Each step owns a disjoint
/// subset of the form's fields together with the rules for that subset.
use std::collections::{HashMap, HashSet};

use regex::Regex;

use crate::error::RegistryError;
use crate::validation::{FieldRule, FieldSpec, StepSchema};

/// One screen of the wizard: a unique id, a display title, and the
/// validation schema for the fields it owns.
#[derive(Debug, Clone)]
pub struct StepDefinition {
    id: String,
    title: String,
    schema: StepSchema,
}

impl StepDefinition {
    pub fn new(id: impl Into<String>, title: impl Into<String>, schema: StepSchema) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            schema,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn schema(&self) -> &StepSchema {
        &self.schema
    }

    /// Field names owned by this step, in schema declaration order.
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.schema.field_names()
    }
}

/// Ordered, read-only list of step definitions. Built once, before the
/// wizard runs.
#[derive(Debug, Clone)]
pub struct StepRegistry {
    steps: Vec<StepDefinition>,
}

impl StepRegistry {
    /// Build a registry from custom steps.
    ///
    /// Rejects an empty list, duplicate step ids, and any field declared by
    /// more than one step (or twice within one step) — per-step validation
    /// relies on the subsets being pairwise disjoint.
    pub fn new(steps: Vec<StepDefinition>) -> Result<Self, RegistryError> {
        if steps.is_empty() {
            return Err(RegistryError::Empty);
        }

        let mut ids = HashSet::new();
        let mut field_owners: HashMap<String, String> = HashMap::new();

        for step in &steps {
            if !ids.insert(step.id().to_string()) {
                return Err(RegistryError::DuplicateStepId(step.id().to_string()));
            }

            let mut own_fields = HashSet::new();
            for field in step.field_names() {
                if !own_fields.insert(field) {
                    return Err(RegistryError::DuplicateField {
                        step: step.id().to_string(),
                        field: field.to_string(),
                    });
                }
                if let Some(first) = field_owners.get(field) {
                    return Err(RegistryError::OverlappingField {
                        field: field.to_string(),
                        first: first.clone(),
                        second: step.id().to_string(),
                    });
                }
            }
            for field in step.field_names() {
                field_owners.insert(field.to_string(), step.id().to_string());
            }
        }

        Ok(Self { steps })
    }

    /// The built-in checkout flow: personal info, address, payment.
    pub fn checkout() -> Self {
        let expiry = Regex::new(r"^(0[1-9]|1[0-2])/\d{2}$").expect("hardcoded pattern");

        let personal = StepSchema::new()
            .field(FieldSpec::new("firstName").rule(FieldRule::min_len(
                2,
                "First name must be at least 2 characters",
            )))
            .field(FieldSpec::new("lastName").rule(FieldRule::min_len(
                2,
                "Last name must be at least 2 characters",
            )))
            .field(FieldSpec::new("email").rule(FieldRule::email("Invalid email address")))
            .field(FieldSpec::new("phone").rule(FieldRule::min_len(
                10,
                "Phone number must be at least 10 digits",
            )));

        let address = StepSchema::new()
            .field(FieldSpec::new("street").rule(FieldRule::min_len(
                5,
                "Street address must be at least 5 characters",
            )))
            .field(
                FieldSpec::new("city")
                    .rule(FieldRule::min_len(2, "City must be at least 2 characters")),
            )
            .field(
                FieldSpec::new("state")
                    .rule(FieldRule::min_len(2, "State must be at least 2 characters")),
            )
            .field(FieldSpec::new("zipCode").rule(FieldRule::min_len(
                5,
                "ZIP code must be at least 5 characters",
            )));

        let payment = StepSchema::new()
            .field(
                FieldSpec::new("cardNumber")
                    .rule(FieldRule::min_len(16, "Card number must be 16 digits")),
            )
            .field(
                FieldSpec::new("expiryDate")
                    .rule(FieldRule::pattern(expiry, "Invalid expiry date (MM/YY)")),
            )
            .field(
                FieldSpec::new("cvv").rule(FieldRule::min_len(3, "CVV must be at least 3 digits")),
            )
            .field(
                FieldSpec::new("cardholderName")
                    .rule(FieldRule::min_len(2, "Cardholder name is required")),
            );

        // Field subsets are disjoint by construction.
        Self {
            steps: vec![
                StepDefinition::new("personal", "Personal Info", personal),
                StepDefinition::new("address", "Address", address),
                StepDefinition::new("payment", "Payment", payment),
            ],
        }
    }

    pub fn step_at(&self, index: usize) -> Option<&StepDefinition> {
        self.steps.get(index)
    }

    pub fn step_count(&self) -> usize {
        self.steps.len()
    }

    /// Index of the final step.
    pub fn last_index(&self) -> usize {
        self.steps.len() - 1
    }

    /// Field names of one step, in schema declaration order.
    pub fn fields_of(&self, index: usize) -> Option<Vec<&str>> {
        self.steps.get(index).map(|s| s.field_names().collect())
    }

    /// Every field across all steps, registry order.
    pub fn all_fields(&self) -> Vec<&str> {
        self.steps.iter().flat_map(StepDefinition::field_names).collect()
    }

    pub fn has_field(&self, field: &str) -> bool {
        self.steps
            .iter()
            .any(|s| s.field_names().any(|f| f == field))
    }

    pub fn index_of(&self, id: &str) -> Option<usize> {
        self.steps.iter().position(|s| s.id() == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &StepDefinition> {
        self.steps.iter()
    }
}
