//! Property flattening.
//!
//! After flattening, each component directly holds every property it
//! inherits, so consumers never need to walk the hierarchy themselves.
//!
//! Ancestors are visited parent chain first (depth first, including each
//! parent's own interfaces), then the component's interfaces in declaration
//! order, each followed by its own ancestors. The first definition of a
//! property wins: a property already present on the component is never
//! replaced.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

use crate::domain::{DomainError, Model, entities::JsfEntity};

/// What to do when a parent or interface name is not in the model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnresolvedPolicy {
    /// Abort with [`DomainError::UnresolvedAncestor`].
    #[default]
    Fail,
    /// Log a warning; the missing ancestor contributes nothing.
    Skip,
}

/// Counters from one flatten pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FlattenReport {
    pub components: usize,
    pub properties_copied: usize,
    /// Ancestor definitions dropped because the name was already present.
    pub overrides: usize,
    pub unresolved_skipped: usize,
}

pub struct Flattener<'a> {
    model: &'a mut Model,
    policy: UnresolvedPolicy,
}

impl<'a> Flattener<'a> {
    pub fn new(model: &'a mut Model, policy: UnresolvedPolicy) -> Self {
        Self { model, policy }
    }

    #[instrument(skip_all, fields(components = self.model.component_count()))]
    pub fn flatten(mut self) -> Result<FlattenReport, DomainError> {
        let mut report = FlattenReport::default();

        for idx in 0..self.model.component_count() {
            let mut ancestors = Vec::new();
            let mut seen = HashSet::from([idx]);
            let mut path = Vec::new();
            self.collect_ancestors(idx, &mut ancestors, &mut seen, &mut path, &mut report)?;

            for ancestor in ancestors {
                // Only declared properties: every ancestor is on the list, so
                // what it inherited is copied from its own source.
                let declared: Vec<_> = self
                    .model
                    .component_at(ancestor)
                    .properties()
                    .filter(|p| !p.inherited)
                    .cloned()
                    .collect();
                let source = self.model.component_at(ancestor).class_name().to_string();
                let dst = self.model.component_at_mut(idx);

                for mut prop in declared {
                    match dst.property(&prop.name) {
                        None => {
                            prop.inherited = true;
                            dst.add_property(prop);
                            report.properties_copied += 1;
                        }
                        Some(existing) => {
                            // TODO: check that the redefinition is type-compatible
                            let kept = if existing.inherited {
                                "keeping the first inherited one"
                            } else {
                                "keeping the component's own"
                            };
                            info!(
                                class = dst.class_name(),
                                property = %prop.name,
                                ancestor = %source,
                                "Duplicate property definition, {}",
                                kept
                            );
                            report.overrides += 1;
                        }
                    }
                }
            }
            report.components += 1;
        }

        debug!(
            copied = report.properties_copied,
            overrides = report.overrides,
            "Flatten completed"
        );
        Ok(report)
    }

    /// Append the ancestors of component `idx` to `out` in walk order.
    ///
    /// `seen` keeps each ancestor to its first position; `path` is the current
    /// descent and detects cycles.
    fn collect_ancestors(
        &self,
        idx: usize,
        out: &mut Vec<usize>,
        seen: &mut HashSet<usize>,
        path: &mut Vec<usize>,
        report: &mut FlattenReport,
    ) -> Result<(), DomainError> {
        path.push(idx);
        let comp = self.model.component_at(idx);

        for reference in comp.class_meta().ancestor_references() {
            let Some(ancestor) = self.model.component_index(reference) else {
                match self.policy {
                    UnresolvedPolicy::Fail => {
                        return Err(DomainError::UnresolvedAncestor {
                            class_name: comp.class_name().to_string(),
                            reference: reference.to_string(),
                        });
                    }
                    UnresolvedPolicy::Skip => {
                        warn!(
                            class = comp.class_name(),
                            ancestor = reference,
                            "Skipping unresolved ancestor"
                        );
                        report.unresolved_skipped += 1;
                        continue;
                    }
                }
            };

            if let Some(pos) = path.iter().position(|&p| p == ancestor) {
                let chain = path[pos..]
                    .iter()
                    .chain(std::iter::once(&ancestor))
                    .map(|&p| self.model.component_at(p).class_name())
                    .collect::<Vec<_>>()
                    .join(" -> ");
                return Err(DomainError::InheritanceCycle {
                    class_name: self.model.component_at(path[0]).class_name().to_string(),
                    chain,
                });
            }

            if seen.insert(ancestor) {
                out.push(ancestor);
                self.collect_ancestors(ancestor, out, seen, path, report)?;
            }
        }

        path.pop();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::{ClassMeta, ComponentMeta, PropertyMeta};

    fn component(name: &str) -> ComponentMeta {
        ComponentMeta::new(ClassMeta::new(name))
    }

    fn names(model: &Model, class_name: &str) -> Vec<String> {
        model
            .find_component_by_class_name(class_name)
            .unwrap()
            .properties()
            .map(|p| p.name.clone())
            .collect()
    }

    #[test]
    fn chain_properties_reach_descendant() {
        let mut model = Model::new();
        model
            .add_component(
                ComponentMeta::new(ClassMeta::new("A").with_parent("B"))
                    .with_property(PropertyMeta::new("a")),
            )
            .unwrap();
        model
            .add_component(
                ComponentMeta::new(ClassMeta::new("B").with_parent("C"))
                    .with_property(PropertyMeta::new("b")),
            )
            .unwrap();
        model
            .add_component(component("C").with_property(PropertyMeta::new("c")))
            .unwrap();

        model.flatten(UnresolvedPolicy::Fail).unwrap();

        assert_eq!(names(&model, "A"), vec!["a", "b", "c"]);
        assert_eq!(names(&model, "B"), vec!["b", "c"]);
        let a = model.find_component_by_class_name("A").unwrap();
        assert!(a.property("c").unwrap().inherited);
        assert!(!a.property("a").unwrap().inherited);
    }

    #[test]
    fn interfaces_contribute_properties() {
        let mut model = Model::new();
        model
            .add_component(ComponentMeta::new(
                ClassMeta::new("Comp").with_interface("IX").with_interface("IY"),
            ))
            .unwrap();
        model
            .add_component(component("IX").with_property(PropertyMeta::new("x")))
            .unwrap();
        model
            .add_component(component("IY").with_property(PropertyMeta::new("y")))
            .unwrap();

        model.flatten(UnresolvedPolicy::Fail).unwrap();
        assert_eq!(names(&model, "Comp"), vec!["x", "y"]);
    }

    #[test]
    fn own_property_is_retained() {
        let mut model = Model::new();
        model
            .add_component(
                ComponentMeta::new(ClassMeta::new("Child").with_parent("Parent"))
                    .with_property(PropertyMeta::new("p").with_default("child")),
            )
            .unwrap();
        model
            .add_component(
                component("Parent").with_property(PropertyMeta::new("p").with_default("parent")),
            )
            .unwrap();

        let report = model.flatten(UnresolvedPolicy::Fail).unwrap();
        let p = model
            .find_component_by_class_name("Child")
            .unwrap()
            .property("p")
            .unwrap();
        assert_eq!(p.default_value.as_deref(), Some("child"));
        assert!(!p.inherited);
        assert_eq!(report.overrides, 1);
    }

    #[test]
    fn parent_chain_wins_over_interfaces() {
        let mut model = Model::new();
        model
            .add_component(ComponentMeta::new(
                ClassMeta::new("Comp").with_parent("Base").with_interface("Iface"),
            ))
            .unwrap();
        model
            .add_component(component("Base").with_property(PropertyMeta::new("p").with_default("base")))
            .unwrap();
        model
            .add_component(component("Iface").with_property(PropertyMeta::new("p").with_default("iface")))
            .unwrap();

        let report = model.flatten(UnresolvedPolicy::Fail).unwrap();
        let p = model
            .find_component_by_class_name("Comp")
            .unwrap()
            .property("p")
            .unwrap();
        assert_eq!(p.default_value.as_deref(), Some("base"));
        assert!(p.inherited);
        assert_eq!(report.overrides, 1);
    }

    #[test]
    fn flattened_parent_does_not_count_as_duplicate() {
        let mut model = Model::new();
        model
            .add_component(ComponentMeta::new(ClassMeta::new("B").with_parent("C")))
            .unwrap();
        model
            .add_component(ComponentMeta::new(ClassMeta::new("A").with_parent("B")))
            .unwrap();
        model
            .add_component(component("C").with_property(PropertyMeta::new("c")))
            .unwrap();

        let report = model.flatten(UnresolvedPolicy::Fail).unwrap();
        assert_eq!(names(&model, "A"), vec!["c"]);
        assert_eq!(report.overrides, 0);
        assert_eq!(report.properties_copied, 2);
    }

    #[test]
    fn flatten_is_idempotent() {
        let mut model = Model::new();
        model
            .add_component(
                ComponentMeta::new(ClassMeta::new("A").with_parent("B").with_interface("I"))
                    .with_property(PropertyMeta::new("a")),
            )
            .unwrap();
        model
            .add_component(component("B").with_property(PropertyMeta::new("b")))
            .unwrap();
        model
            .add_component(component("I").with_property(PropertyMeta::new("i")))
            .unwrap();

        model.flatten(UnresolvedPolicy::Fail).unwrap();
        let once: Vec<_> = model.components().to_vec();
        let second = model.flatten(UnresolvedPolicy::Fail).unwrap();
        assert_eq!(model.components(), once.as_slice());
        assert_eq!(second.properties_copied, 0);
    }

    #[test]
    fn diamond_ancestor_visited_once() {
        let mut model = Model::new();
        model
            .add_component(ComponentMeta::new(
                ClassMeta::new("D").with_interface("L").with_interface("R"),
            ))
            .unwrap();
        model
            .add_component(ComponentMeta::new(ClassMeta::new("L").with_parent("Top")))
            .unwrap();
        model
            .add_component(ComponentMeta::new(ClassMeta::new("R").with_parent("Top")))
            .unwrap();
        model
            .add_component(component("Top").with_property(PropertyMeta::new("t")))
            .unwrap();

        let report = model.flatten(UnresolvedPolicy::Fail).unwrap();
        assert_eq!(names(&model, "D"), vec!["t"]);
        assert_eq!(report.overrides, 0);
    }

    #[test]
    fn unresolved_parent_fails_by_default() {
        let mut model = Model::new();
        model
            .add_component(ComponentMeta::new(
                ClassMeta::new("A").with_parent("missing.Parent"),
            ))
            .unwrap();

        let err = model.flatten(UnresolvedPolicy::Fail).unwrap_err();
        assert_eq!(
            err,
            DomainError::UnresolvedAncestor {
                class_name: "A".into(),
                reference: "missing.Parent".into()
            }
        );
    }

    #[test]
    fn unresolved_interface_skipped_when_lenient() {
        let mut model = Model::new();
        model
            .add_component(
                ComponentMeta::new(ClassMeta::new("A").with_interface("missing.I").with_interface("I"))
                    .with_property(PropertyMeta::new("a")),
            )
            .unwrap();
        model
            .add_component(component("I").with_property(PropertyMeta::new("i")))
            .unwrap();

        let report = model.flatten(UnresolvedPolicy::Skip).unwrap();
        assert_eq!(report.unresolved_skipped, 1);
        assert_eq!(names(&model, "A"), vec!["a", "i"]);
    }

    #[test]
    fn cycle_is_reported() {
        let mut model = Model::new();
        model
            .add_component(ComponentMeta::new(ClassMeta::new("A").with_parent("B")))
            .unwrap();
        model
            .add_component(ComponentMeta::new(ClassMeta::new("B").with_parent("A")))
            .unwrap();

        match model.flatten(UnresolvedPolicy::Fail) {
            Err(DomainError::InheritanceCycle { class_name, chain }) => {
                assert_eq!(class_name, "A");
                assert_eq!(chain, "A -> B -> A");
            }
            other => panic!("expected cycle error, got {other:?}"),
        }
    }
}
