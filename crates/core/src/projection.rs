//! Projections and predicates over [`SourceElement`]s.

use crate::source_element::{HasSourceElement, SourceElement};
use hierscope_api::DeclarationGraph;
use hierscope_api::models::{DeclId, Modifier};
use std::collections::{BTreeMap, BTreeSet};

/// `{contributed_by}` if present, otherwise empty.
pub fn contributing_classes(element: &SourceElement) -> BTreeSet<DeclId> {
    element.contributed_by().into_iter().collect()
}

/// Union of [`contributing_classes`] over many elements. More than one entry
/// means the members were contributed through different types.
pub fn all_contributing_classes<'a, I>(elements: I) -> BTreeSet<DeclId>
where
    I: IntoIterator<Item = &'a SourceElement>,
{
    elements
        .into_iter()
        .filter_map(SourceElement::contributed_by)
        .collect()
}

/// Predicate testing whether the element's declaration carries `modifier`.
pub fn has_modifier<G: DeclarationGraph + ?Sized>(
    graph: &G,
    modifier: Modifier,
) -> impl Fn(&SourceElement) -> bool + '_ {
    move |element| {
        graph
            .modifiers(element.element())
            .is_some_and(|mods| mods.contains(&modifier))
    }
}

pub fn source_element_of<T: HasSourceElement + ?Sized>(value: &T) -> SourceElement {
    value.source_element()
}

/// Index values by the source element they came from.
pub fn group_by_source_element<'a, T, I>(values: I) -> BTreeMap<SourceElement, Vec<&'a T>>
where
    T: HasSourceElement + ?Sized + 'a,
    I: IntoIterator<Item = &'a T>,
{
    let mut groups: BTreeMap<SourceElement, Vec<&'a T>> = BTreeMap::new();
    for value in values {
        groups.entry(source_element_of(value)).or_default().push(value);
    }
    groups
}
