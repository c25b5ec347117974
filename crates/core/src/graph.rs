//! In-memory declaration graph.
//!
//! Nodes are declarations; `Contains` edges point from a declaration to the
//! declarations lexically nested in it, `InheritsFrom`/`Implements` edges
//! point from a type to its direct supertypes.

use hierscope_api::models::{DeclId, DeclKind, EdgeType, GraphEdge, Modifier, TypeRef};
use hierscope_api::{DeclarationGraph, ResolveError, ResolveResult};
use lasso::{Spur, ThreadedRodeo};
use petgraph::Direction;
use petgraph::stable_graph::{NodeIndex, StableDiGraph};
use petgraph::visit::EdgeRef;

#[derive(Debug, Clone)]
struct DeclNode {
    name: Spur,
    kind: DeclKind,
    modifiers: Vec<Modifier>,
    declared_type: TypeRef,
    type_parameters: Vec<DeclId>,
    supertypes: Vec<TypeRef>,
}

#[derive(Debug, Default)]
pub struct DeclGraph {
    graph: StableDiGraph<DeclNode, GraphEdge>,
    rodeo: ThreadedRodeo,
}

fn node_index(decl: DeclId) -> NodeIndex {
    NodeIndex::new(decl.index())
}

fn decl_id(idx: NodeIndex) -> DeclId {
    DeclId(idx.index() as u32)
}

impl DeclGraph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.graph.node_count()
    }

    pub fn is_empty(&self) -> bool {
        self.graph.node_count() == 0
    }

    pub fn contains(&self, decl: DeclId) -> bool {
        self.graph.contains_node(node_index(decl))
    }

    fn node(&self, decl: DeclId) -> Option<&DeclNode> {
        self.graph.node_weight(node_index(decl))
    }

    fn node_mut(&mut self, decl: DeclId) -> ResolveResult<&mut DeclNode> {
        self.graph
            .node_weight_mut(node_index(decl))
            .ok_or(ResolveError::UnknownDeclaration(decl))
    }

    fn require(&self, decl: DeclId) -> ResolveResult<()> {
        if self.contains(decl) {
            Ok(())
        } else {
            Err(ResolveError::UnknownDeclaration(decl))
        }
    }

    /// Add an arbitrary declaration. No structural checks beyond the parent
    /// handle existing, so malformed graphs can be built on purpose.
    pub fn add_declaration(
        &mut self,
        parent: Option<DeclId>,
        name: &str,
        kind: DeclKind,
        modifiers: Vec<Modifier>,
        declared_type: TypeRef,
    ) -> ResolveResult<DeclId> {
        if let Some(parent) = parent {
            self.require(parent)?;
        }
        let node = DeclNode {
            name: self.rodeo.get_or_intern(name),
            kind,
            modifiers,
            declared_type,
            type_parameters: Vec::new(),
            supertypes: Vec::new(),
        };
        let idx = self.graph.add_node(node);
        if let Some(parent) = parent {
            self.graph
                .add_edge(node_index(parent), idx, GraphEdge::new(EdgeType::Contains));
        }
        Ok(decl_id(idx))
    }

    pub fn add_package(&mut self, name: &str) -> DeclId {
        let idx = self.graph.add_node(DeclNode {
            name: self.rodeo.get_or_intern(name),
            kind: DeclKind::Package,
            modifiers: Vec::new(),
            declared_type: TypeRef::Unknown,
            type_parameters: Vec::new(),
            supertypes: Vec::new(),
        });
        decl_id(idx)
    }

    /// Add a class, interface, enum or annotation. Its declared type starts
    /// out unparameterized and grows as type parameters are added.
    pub fn add_type(
        &mut self,
        parent: Option<DeclId>,
        name: &str,
        kind: DeclKind,
        modifiers: Vec<Modifier>,
    ) -> ResolveResult<DeclId> {
        let id = self.add_declaration(parent, name, kind, modifiers, TypeRef::Unknown)?;
        self.node_mut(id)?.declared_type = TypeRef::simple(id);
        Ok(id)
    }

    /// Declare a type parameter on a type or a method.
    pub fn add_type_parameter(&mut self, owner: DeclId, name: &str) -> ResolveResult<DeclId> {
        let var = self.add_declaration(
            Some(owner),
            name,
            DeclKind::TypeParameter,
            Vec::new(),
            TypeRef::Unknown,
        )?;
        self.node_mut(var)?.declared_type = TypeRef::var(var);

        let node = self.node_mut(owner)?;
        node.type_parameters.push(var);
        match &mut node.declared_type {
            TypeRef::Declared { args, .. } => args.push(TypeRef::var(var)),
            TypeRef::Executable { type_vars, .. } => type_vars.push(var),
            _ => {}
        }
        Ok(var)
    }

    pub fn add_superclass(&mut self, sub: DeclId, sup: TypeRef) -> ResolveResult<()> {
        self.add_supertype(sub, sup, EdgeType::InheritsFrom)
    }

    pub fn add_interface(&mut self, sub: DeclId, sup: TypeRef) -> ResolveResult<()> {
        self.add_supertype(sub, sup, EdgeType::Implements)
    }

    fn add_supertype(&mut self, sub: DeclId, sup: TypeRef, edge: EdgeType) -> ResolveResult<()> {
        let target = sup
            .as_declared()
            .map(|(decl, _)| decl)
            .ok_or_else(|| ResolveError::NotDeclaredType(format!("{sup:?}")))?;
        self.require(target)?;
        let node = self.node_mut(sub)?;
        // Superclass goes first so breadth-first walks prefer the class chain.
        if edge == EdgeType::InheritsFrom {
            node.supertypes.insert(0, sup);
        } else {
            node.supertypes.push(sup);
        }
        self.graph
            .add_edge(node_index(sub), node_index(target), GraphEdge::new(edge));
        Ok(())
    }

    /// Add a method with named parameters. Each parameter becomes a child
    /// declaration of the method.
    pub fn add_method(
        &mut self,
        owner: DeclId,
        name: &str,
        modifiers: Vec<Modifier>,
        params: Vec<(&str, TypeRef)>,
        ret: TypeRef,
    ) -> ResolveResult<DeclId> {
        let signature = TypeRef::method(params.iter().map(|(_, t)| t.clone()).collect(), ret);
        let method = self.add_declaration(Some(owner), name, DeclKind::Method, modifiers, signature)?;
        for (param_name, ty) in params {
            self.add_declaration(
                Some(method),
                param_name,
                DeclKind::Parameter,
                Vec::new(),
                ty,
            )?;
        }
        Ok(method)
    }

    pub fn add_field(
        &mut self,
        owner: DeclId,
        name: &str,
        modifiers: Vec<Modifier>,
        ty: TypeRef,
    ) -> ResolveResult<DeclId> {
        self.add_declaration(Some(owner), name, DeclKind::Field, modifiers, ty)
    }

    /// Replace the declared type, e.g. once a generic method's own type
    /// variables exist and its signature can mention them.
    pub fn set_declared_type(&mut self, decl: DeclId, ty: TypeRef) -> ResolveResult<()> {
        self.node_mut(decl)?.declared_type = ty;
        Ok(())
    }

    /// Directly nested declarations, in insertion order.
    pub fn children(&self, decl: DeclId) -> Vec<DeclId> {
        let mut children: Vec<DeclId> = self
            .graph
            .edges_directed(node_index(decl), Direction::Outgoing)
            .filter(|e| e.weight().edge_type == EdgeType::Contains)
            .map(|e| decl_id(e.target()))
            .collect();
        children.sort();
        children
    }

    /// Dotted name built from the enclosing chain.
    pub fn qualified_name(&self, decl: DeclId) -> String {
        let mut parts = Vec::new();
        let mut current = Some(decl);
        while let Some(id) = current {
            match self.name(id) {
                Some(name) => parts.push(name),
                None => break,
            }
            current = self.enclosing(id);
        }
        parts.reverse();
        parts.join(".")
    }

    /// Render a type using qualified names, e.g. `java.util.List<T>`.
    pub fn display_type(&self, ty: &TypeRef) -> String {
        match ty {
            TypeRef::Primitive { name } => name.clone(),
            TypeRef::Void => "void".to_string(),
            TypeRef::Declared { decl, args } => {
                let base = self.qualified_name(*decl);
                if args.is_empty() {
                    base
                } else {
                    format!("{}<{}>", base, self.display_list(args))
                }
            }
            TypeRef::TypeVar { decl } => self.name(*decl).unwrap_or("?").to_string(),
            TypeRef::Array {
                element,
                dimensions,
            } => format!("{}{}", self.display_type(element), "[]".repeat(*dimensions)),
            TypeRef::Wildcard {
                bound: None, ..
            } => "?".to_string(),
            TypeRef::Wildcard {
                bound: Some(bound),
                is_upper_bound,
            } => {
                let keyword = if *is_upper_bound { "extends" } else { "super" };
                format!("? {} {}", keyword, self.display_type(bound))
            }
            TypeRef::Executable {
                type_vars,
                params,
                ret,
                thrown,
            } => {
                let mut out = String::new();
                if !type_vars.is_empty() {
                    let names: Vec<&str> = type_vars
                        .iter()
                        .map(|v| self.name(*v).unwrap_or("?"))
                        .collect();
                    out.push_str(&format!("<{}> ", names.join(", ")));
                }
                out.push_str(&format!(
                    "({}){}",
                    self.display_list(params),
                    self.display_type(ret)
                ));
                if !thrown.is_empty() {
                    out.push_str(&format!(" throws {}", self.display_list(thrown)));
                }
                out
            }
            TypeRef::Unknown => "<unknown>".to_string(),
        }
    }

    fn display_list(&self, types: &[TypeRef]) -> String {
        types
            .iter()
            .map(|t| self.display_type(t))
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl DeclarationGraph for DeclGraph {
    fn kind(&self, decl: DeclId) -> Option<&DeclKind> {
        self.node(decl).map(|n| &n.kind)
    }

    fn name(&self, decl: DeclId) -> Option<&str> {
        self.node(decl).map(|n| self.rodeo.resolve(&n.name))
    }

    fn modifiers(&self, decl: DeclId) -> Option<&[Modifier]> {
        self.node(decl).map(|n| n.modifiers.as_slice())
    }

    fn enclosing(&self, decl: DeclId) -> Option<DeclId> {
        self.graph
            .edges_directed(node_index(decl), Direction::Incoming)
            .find(|e| e.weight().edge_type == EdgeType::Contains)
            .map(|e| decl_id(e.source()))
    }

    fn declared_type(&self, decl: DeclId) -> Option<&TypeRef> {
        self.node(decl).map(|n| &n.declared_type)
    }

    fn type_parameters(&self, decl: DeclId) -> &[DeclId] {
        self.node(decl)
            .map(|n| n.type_parameters.as_slice())
            .unwrap_or(&[])
    }

    fn supertypes(&self, decl: DeclId) -> &[TypeRef] {
        self.node(decl)
            .map(|n| n.supertypes.as_slice())
            .unwrap_or(&[])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generic_type_declared_type_tracks_parameters() {
        let mut g = DeclGraph::new();
        let pkg = g.add_package("java.util");
        let map = g
            .add_type(Some(pkg), "Map", DeclKind::Interface, vec![])
            .unwrap();
        let k = g.add_type_parameter(map, "K").unwrap();
        let v = g.add_type_parameter(map, "V").unwrap();

        assert_eq!(g.type_parameters(map), &[k, v]);
        assert_eq!(
            g.declared_type(map),
            Some(&TypeRef::declared(map, vec![TypeRef::var(k), TypeRef::var(v)]))
        );
        assert_eq!(g.display_type(g.declared_type(map).unwrap()), "java.util.Map<K, V>");
    }

    #[test]
    fn test_method_parameters_are_children() {
        let mut g = DeclGraph::new();
        let pkg = g.add_package("app");
        let int = TypeRef::primitive("int");
        let class = g.add_type(Some(pkg), "Calc", DeclKind::Class, vec![]).unwrap();
        let add = g
            .add_method(
                class,
                "add",
                vec![Modifier::Public],
                vec![("a", int.clone()), ("b", int.clone())],
                int.clone(),
            )
            .unwrap();

        let params = g.children(add);
        assert_eq!(params.len(), 2);
        assert_eq!(g.kind(params[0]), Some(&DeclKind::Parameter));
        assert_eq!(g.enclosing(params[1]), Some(add));
        assert_eq!(g.children(class), vec![add]);
        assert_eq!(g.qualified_name(params[0]), "app.Calc.add.a");
        assert_eq!(g.display_type(g.declared_type(add).unwrap()), "(int, int)int");
    }

    #[test]
    fn test_superclass_is_listed_first() {
        let mut g = DeclGraph::new();
        let i = g.add_type(None, "I", DeclKind::Interface, vec![]).unwrap();
        let base = g.add_type(None, "Base", DeclKind::Class, vec![]).unwrap();
        let c = g.add_type(None, "C", DeclKind::Class, vec![]).unwrap();
        g.add_interface(c, TypeRef::simple(i)).unwrap();
        g.add_superclass(c, TypeRef::simple(base)).unwrap();

        assert_eq!(
            g.supertypes(c),
            &[TypeRef::simple(base), TypeRef::simple(i)]
        );
    }

    #[test]
    fn test_unknown_parent_is_rejected() {
        let mut g = DeclGraph::new();
        let err = g
            .add_type(Some(DeclId(42)), "Orphan", DeclKind::Class, vec![])
            .unwrap_err();
        assert_eq!(err, ResolveError::UnknownDeclaration(DeclId(42)));
        assert!(g.is_empty());
    }
}
