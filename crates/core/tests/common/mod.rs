use hierscope_core::{DeclGraph, DeclId, DeclKind, Modifier, TypeRef};

/// A small Java-like hierarchy shared by the integration tests.
///
/// ```text
/// interface Supertype<T> { T m(); <U> Map<T, U> pair(U u); }
/// abstract class AbstractBase { abstract void run(); }
/// class Impl extends AbstractBase implements Supertype<String> { static int counter; }
///
/// class Base<A> { A value; List<A> all(); }
/// class Mid<B> extends Base<List<B>> {}
/// class Leaf extends Mid<Integer> {}
///
/// class Unrelated {}
/// ```
#[allow(dead_code)]
pub struct Hierarchy {
    pub graph: DeclGraph,
    pub string: DeclId,
    pub integer: DeclId,
    pub list: DeclId,
    pub map: DeclId,
    pub supertype: DeclId,
    pub t: DeclId,
    pub m: DeclId,
    pub pair: DeclId,
    pub u: DeclId,
    pub abstract_base: DeclId,
    pub run: DeclId,
    pub impl_class: DeclId,
    pub counter: DeclId,
    pub base: DeclId,
    pub a: DeclId,
    pub value: DeclId,
    pub all: DeclId,
    pub mid: DeclId,
    pub leaf: DeclId,
    pub unrelated: DeclId,
}

#[allow(dead_code)]
pub fn list_of(h: &Hierarchy, element: TypeRef) -> TypeRef {
    TypeRef::declared(h.list, vec![element])
}

pub fn hierarchy() -> Hierarchy {
    let mut g = DeclGraph::new();
    let lang = g.add_package("java.lang");
    let util = g.add_package("java.util");
    let app = g.add_package("com.example");

    let string = g
        .add_type(Some(lang), "String", DeclKind::Class, vec![Modifier::Public, Modifier::Final])
        .unwrap();
    let integer = g
        .add_type(Some(lang), "Integer", DeclKind::Class, vec![Modifier::Public, Modifier::Final])
        .unwrap();
    let list = g
        .add_type(Some(util), "List", DeclKind::Interface, vec![Modifier::Public])
        .unwrap();
    g.add_type_parameter(list, "E").unwrap();
    let map = g
        .add_type(Some(util), "Map", DeclKind::Interface, vec![Modifier::Public])
        .unwrap();
    g.add_type_parameter(map, "K").unwrap();
    g.add_type_parameter(map, "V").unwrap();

    // interface Supertype<T>
    let supertype = g
        .add_type(Some(app), "Supertype", DeclKind::Interface, vec![Modifier::Public])
        .unwrap();
    let t = g.add_type_parameter(supertype, "T").unwrap();
    let m = g
        .add_method(
            supertype,
            "m",
            vec![Modifier::Public, Modifier::Abstract],
            vec![],
            TypeRef::var(t),
        )
        .unwrap();
    let pair = g
        .add_method(
            supertype,
            "pair",
            vec![Modifier::Public, Modifier::Default],
            vec![],
            TypeRef::Void,
        )
        .unwrap();
    let u = g.add_type_parameter(pair, "U").unwrap();
    g.set_declared_type(
        pair,
        TypeRef::Executable {
            type_vars: vec![u],
            params: vec![TypeRef::var(u)],
            ret: Box::new(TypeRef::declared(map, vec![TypeRef::var(t), TypeRef::var(u)])),
            thrown: vec![],
        },
    )
    .unwrap();

    // abstract class AbstractBase
    let abstract_base = g
        .add_type(Some(app), "AbstractBase", DeclKind::Class, vec![Modifier::Abstract])
        .unwrap();
    let run = g
        .add_method(abstract_base, "run", vec![Modifier::Abstract], vec![], TypeRef::Void)
        .unwrap();

    // class Impl extends AbstractBase implements Supertype<String>
    let impl_class = g
        .add_type(Some(app), "Impl", DeclKind::Class, vec![Modifier::Public])
        .unwrap();
    g.add_superclass(impl_class, TypeRef::simple(abstract_base))
        .unwrap();
    g.add_interface(
        impl_class,
        TypeRef::declared(supertype, vec![TypeRef::simple(string)]),
    )
    .unwrap();
    let counter = g
        .add_field(
            impl_class,
            "counter",
            vec![Modifier::Static],
            TypeRef::primitive("int"),
        )
        .unwrap();

    // class Base<A>
    let base = g
        .add_type(Some(app), "Base", DeclKind::Class, vec![])
        .unwrap();
    let a = g.add_type_parameter(base, "A").unwrap();
    let value = g
        .add_field(base, "value", vec![Modifier::Private], TypeRef::var(a))
        .unwrap();
    let all = g
        .add_method(
            base,
            "all",
            vec![Modifier::Public],
            vec![],
            TypeRef::declared(list, vec![TypeRef::var(a)]),
        )
        .unwrap();

    // class Mid<B> extends Base<List<B>>
    let mid = g.add_type(Some(app), "Mid", DeclKind::Class, vec![]).unwrap();
    let b = g.add_type_parameter(mid, "B").unwrap();
    g.add_superclass(
        mid,
        TypeRef::declared(base, vec![TypeRef::declared(list, vec![TypeRef::var(b)])]),
    )
    .unwrap();

    // class Leaf extends Mid<Integer>
    let leaf = g.add_type(Some(app), "Leaf", DeclKind::Class, vec![]).unwrap();
    g.add_superclass(leaf, TypeRef::declared(mid, vec![TypeRef::simple(integer)]))
        .unwrap();

    let unrelated = g
        .add_type(Some(app), "Unrelated", DeclKind::Class, vec![])
        .unwrap();

    Hierarchy {
        graph: g,
        string,
        integer,
        list,
        map,
        supertype,
        t,
        m,
        pair,
        u,
        abstract_base,
        run,
        impl_class,
        counter,
        base,
        a,
        value,
        all,
        mid,
        leaf,
        unrelated,
    }
}
