//! Validated, ordered collection of field specs.

use indexmap::IndexMap;
use serde::Deserialize;

use crate::date_format;
use crate::error::{Result, SchemaError};
use crate::field::{FieldKind, FieldSpec};

/// Ordered mapping from field name to [`FieldSpec`].
///
/// Insertion order is display order and payload key order. Construction
/// validates the schema, so every `RequestSchema` value is guaranteed to
/// have unique names, known guard fields and no dependency cycles.
///
/// Deserializes from a list of field specs and runs the same validation.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(try_from = "Vec<FieldSpec>")]
pub struct RequestSchema {
    fields: IndexMap<String, FieldSpec>,

    /// Field indices ordered so every guard precedes its dependents.
    eval_order: Vec<usize>,
}

impl RequestSchema {
    /// Build a schema from fields in display order.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaError`] if:
    /// - two fields share a name
    /// - a `select` field has no options
    /// - a `dateFormat` is not a valid format
    /// - a `requiredCondition` names the field itself or an unknown field
    /// - `requiredCondition` chains form a cycle
    pub fn new(fields: impl IntoIterator<Item = FieldSpec>) -> Result<Self> {
        let mut map = IndexMap::new();
        for field in fields {
            check_field(&field)?;
            if map.contains_key(&field.name) {
                return Err(SchemaError::DuplicateField { name: field.name });
            }
            map.insert(field.name.clone(), field);
        }

        for field in map.values() {
            let Some(dep) = field.depends_on() else {
                continue;
            };
            if dep == field.name {
                return Err(SchemaError::SelfDependency {
                    field: field.name.clone(),
                });
            }
            if !map.contains_key(dep) {
                return Err(SchemaError::UnknownDependency {
                    field: field.name.clone(),
                    depends_on: dep.to_string(),
                });
            }
        }

        let eval_order = dependency_order(&map)?;
        Ok(Self {
            fields: map,
            eval_order,
        })
    }

    /// Look up a field by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&FieldSpec> {
        self.fields.get(name)
    }

    /// Whether the schema defines `name`.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.fields.contains_key(name)
    }

    /// Fields in display order.
    pub fn fields(&self) -> impl Iterator<Item = &FieldSpec> {
        self.fields.values()
    }

    /// Number of fields.
    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Whether the schema has no fields.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Fields ordered so that guards come before the fields they gate.
    pub(crate) fn in_dependency_order(&self) -> impl Iterator<Item = &FieldSpec> {
        self.eval_order
            .iter()
            .filter_map(|&idx| self.fields.get_index(idx).map(|(_, f)| f))
    }
}

impl TryFrom<Vec<FieldSpec>> for RequestSchema {
    type Error = SchemaError;

    fn try_from(fields: Vec<FieldSpec>) -> Result<Self> {
        Self::new(fields)
    }
}

/// Per-field checks that do not need the rest of the schema.
fn check_field(field: &FieldSpec) -> Result<()> {
    if field.kind == FieldKind::Select && field.options.is_empty() {
        return Err(SchemaError::MissingOptions {
            field: field.name.clone(),
        });
    }
    if let Some(format) = &field.date_format {
        if !date_format::is_valid(format) {
            return Err(SchemaError::InvalidDateFormat {
                field: field.name.clone(),
                format: format.clone(),
            });
        }
    }
    Ok(())
}

/// Compute the depth of every field in its guard chain and order by it.
///
/// Each field has at most one guard, so the dependency graph is a forest of
/// chains. Walking each chain detects cycles; sorting by depth (stable on
/// display order) yields a valid evaluation order.
fn dependency_order(fields: &IndexMap<String, FieldSpec>) -> Result<Vec<usize>> {
    let mut depth: Vec<Option<usize>> = vec![None; fields.len()];

    for start in 0..fields.len() {
        if depth[start].is_some() {
            continue;
        }

        // Walk up the chain until a root or an already-resolved field.
        let mut chain: Vec<usize> = Vec::new();
        let mut current = start;
        let base = loop {
            if let Some(pos) = chain.iter().position(|&i| i == current) {
                let mut path: Vec<String> = chain[pos..]
                    .iter()
                    .map(|&i| fields[i].name.clone())
                    .collect();
                path.push(fields[current].name.clone());
                return Err(SchemaError::DependencyCycle { path });
            }
            if let Some(d) = depth[current] {
                break d + 1;
            }
            chain.push(current);
            match fields[current].depends_on().and_then(|dep| fields.get_index_of(dep)) {
                Some(parent) => current = parent,
                None => break 0,
            }
        };

        // The last pushed field is closest to the root.
        for (offset, &idx) in chain.iter().rev().enumerate() {
            depth[idx] = Some(base + offset);
        }
    }

    let mut order: Vec<usize> = (0..fields.len()).collect();
    order.sort_by_key(|&i| depth[i].unwrap_or(0));
    Ok(order)
}
