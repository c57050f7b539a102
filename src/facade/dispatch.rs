//! Routing of named arguments over prioritised target levels.
//!
//! A builder describes its targets as an ordered list of levels; each level
//! has one property kind and one or more target handles. A name goes to the
//! first level whose property set contains it and is assigned on every
//! handle of that level. The whole request is routed before anything is
//! assigned, so an unknown name leaves every target untouched.

use std::sync::Arc;

use crate::element::{ElementHandle, ElementKind, PropertyTarget};
use crate::error::{Error, Result};
use crate::registry::{PropertyRegistry, PropertySet};
use crate::value::{coerce, NamedArgs, Value};

#[derive(Debug)]
struct Route {
    level: usize,
    name: String,
    value: Value,
}

/// A fully routed and coerced configuration request.
#[derive(Debug)]
pub(crate) struct Plan {
    owner: ElementKind,
    levels: Vec<ElementKind>,
    routes: Vec<Route>,
}

impl Plan {
    /// Route every named argument to the first level that accepts it.
    pub(crate) fn resolve(
        registry: &PropertyRegistry,
        owner: ElementKind,
        levels: &[ElementKind],
        named: &NamedArgs,
    ) -> Result<Self> {
        let sets = levels
            .iter()
            .map(|&kind| registry.properties_of(kind))
            .collect::<Result<Vec<Arc<PropertySet>>>>()?;

        let routes = named
            .iter()
            .map(|(name, value)| -> Result<Route> {
                let (level, expected) = sets
                    .iter()
                    .enumerate()
                    .find_map(|(i, set)| set.get(name).map(|ty| (i, ty)))
                    .ok_or_else(|| Error::UnknownProperty {
                        kind: owner,
                        name: name.to_string(),
                    })?;

                if let Some(shadowed) = sets[level + 1..].iter().position(|s| s.contains(name)) {
                    tracing::debug!(
                        %owner,
                        property = name,
                        chosen = %levels[level],
                        shadowed = %levels[level + 1 + shadowed],
                        "property matches several targets, using the first"
                    );
                }

                Ok(Route {
                    level,
                    name: name.to_string(),
                    value: coerce(value.clone(), expected),
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            owner,
            levels: levels.to_vec(),
            routes,
        })
    }

    /// Whether any argument was routed to `level`.
    pub(crate) fn touches(&self, level: usize) -> bool {
        self.routes.iter().any(|r| r.level == level)
    }

    /// Assign the routed values; `targets[i]` holds the handles of level `i`.
    pub(crate) fn apply(self, targets: &[Vec<ElementHandle>]) -> Result<()> {
        debug_assert_eq!(targets.len(), self.levels.len());
        for route in self.routes {
            let handles = targets.get(route.level).ok_or_else(|| {
                Error::Engine(format!("{} has no {} target", self.owner, self.levels[route.level]))
            })?;
            tracing::debug!(
                owner = %self.owner,
                property = %route.name,
                target = %self.levels[route.level],
                count = handles.len(),
                "assigning property"
            );
            for handle in handles {
                handle.set_property(&route.name, route.value.clone())?;
            }
        }
        Ok(())
    }

    /// Assign the routed values of a single-level plan on one target.
    pub(crate) fn apply_to<T: PropertyTarget + ?Sized>(self, target: &T) -> Result<()> {
        for route in self.routes {
            tracing::debug!(owner = %self.owner, property = %route.name, "assigning property");
            target.set_property(&route.name, route.value)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Range;
    use crate::named_args;

    fn axis_levels() -> [ElementKind; 3] {
        [
            ElementKind::AxisGroup,
            ElementKind::TickManager,
            ElementKind::AxisTransform,
        ]
    }

    #[test]
    fn test_routes_by_priority() {
        let named = named_args! {
            tickSide = Value::constant("OUTWARD"),
            range = (0.0, 5.0),
            type = Value::constant("LOGARITHMIC"),
        };
        let plan = Plan::resolve(
            &PropertyRegistry::global(),
            ElementKind::AxisGroup,
            &axis_levels(),
            &named,
        )
        .unwrap();

        let levels: Vec<usize> = plan.routes.iter().map(|r| r.level).collect();
        assert_eq!(levels, vec![0, 1, 2]);
        assert_eq!(plan.routes[1].value, Value::Range(Range::new(0.0, 5.0)));
        assert!(plan.touches(2));
    }

    #[test]
    fn test_unknown_name_fails_whole_plan() {
        let named = named_args! { tickSide = Value::constant("OUTWARD"), tickSize = 3.0 };
        let err = Plan::resolve(
            &PropertyRegistry::global(),
            ElementKind::AxisGroup,
            &axis_levels(),
            &named,
        )
        .unwrap_err();
        assert_eq!(
            err,
            Error::UnknownProperty {
                kind: ElementKind::AxisGroup,
                name: "tickSize".to_string()
            }
        );
    }

    #[test]
    fn test_empty_request_touches_nothing() {
        let plan = Plan::resolve(
            &PropertyRegistry::global(),
            ElementKind::AxisGroup,
            &axis_levels(),
            &NamedArgs::new(),
        )
        .unwrap();
        assert!((0..3).all(|level| !plan.touches(level)));
    }
}
