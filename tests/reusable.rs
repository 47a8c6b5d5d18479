use std::collections::BTreeMap;
use std::collections::HashSet;

use pretty_assertions::assert_eq;

use corelay::*;

/// Drives a coroutine that accepts `()` to completion.
fn collect<Y, R>(coro: impl Start<(), Y, R>) -> (Vec<Y>, R) {
    let mut produced = Vec::new();
    let mut step = coro.advance();
    loop {
        match step.unwrap() {
            Yield(y, next) => {
                produced.push(y);
                step = next.resume(());
            }
            Return(r) => return (produced, r),
        }
    }
}

reusable! {
    fn mygen(a: i32, foo: i32) -> impl Start<(), i32, ()> as MyGen {
        [a, foo].into_coro()
    }
}

reusable! {
    /// my docstring
    pub fn gentype(
        a: i32,
        b: i32,
        cs: Vec<i32> = Vec::new(),
        fs: BTreeMap<String, i32> = BTreeMap::new(),
    ) -> impl Start<i32, String, i32> as GenType {
        let total = a + b + cs.iter().sum::<i32>() + fs.values().sum::<i32>() + a;
        oneyield(|n: i32| n.to_string())(total)
    }
}

reusable! {
    fn countdown() -> impl Start<(), i32, &'static str> as Countdown {
        [3, 2, 1].into_coro().map_return(|()| "liftoff")
    }
}

#[test]
fn spawn_gives_independent_coroutines() {
    let bound = MyGen::new(4, 5);
    assert_eq!(collect(bound.spawn()), (vec![4, 5], ()));
    assert_eq!(collect(bound.spawn()), (vec![4, 5], ()));
}

#[test]
fn interleaved_spawns_do_not_share_state() {
    let bound = MyGen::new(1, 2);
    let first = bound.spawn().assert_advances(1);
    let second = bound.spawn().assert_advances(1);
    first.assert_yields((), 2).assert_returns((), ());
    second.assert_yields((), 2).assert_returns((), ());
}

#[test]
fn positional_and_named_binding_are_equal() {
    let bound = GenType::builder()
        .a(4)
        .b(5)
        .fs(BTreeMap::from([("foo".to_string(), 10)]))
        .build()
        .unwrap();
    let other = GenType::new(4, 5, vec![], BTreeMap::from([("foo".to_string(), 10)]));
    assert_eq!(bound, other);
    assert!(!(bound != other));
    assert_ne!(bound, GenType::new(3, 4, vec![5], BTreeMap::new()));

    let set: HashSet<_> = [bound.clone(), other].into_iter().collect();
    assert_eq!(set.len(), 1);
    assert!(set.contains(&bound));
}

#[test]
fn arguments_are_exposed_after_defaults() {
    let bound = GenType::builder().a(4).b(5).build().unwrap();
    assert_eq!(*bound.a(), 4);
    assert_eq!(*bound.b(), 5);
    assert_eq!(*bound.cs(), Vec::<i32>::new());
    assert_eq!(*bound.fs(), BTreeMap::new());
}

#[test]
fn spawn_runs_the_function_afresh() {
    let bound = GenType::new(4, 5, vec![], BTreeMap::from([("foo".to_string(), 10)]));
    for _ in 0..2 {
        let coro = bound.spawn().assert_advances("23".to_string());
        assert_eq!(sendreturn(coro, 7).unwrap(), 7);
    }
}

#[test]
fn debug_lists_arguments() {
    let bound = GenType::new(4, 5, vec![], BTreeMap::from([("foo".to_string(), 10)]));
    assert_eq!(
        format!("{bound:?}"),
        r#"gentype(a=4, b=5, cs=[], fs={"foo": 10})"#
    );
    assert_eq!(format!("{:?}", Countdown::new()), "countdown()");
    assert_eq!(
        GenType::SIGNATURE.qualname,
        concat!(module_path!(), "::gentype")
    );
}

#[test]
fn replace_makes_a_modified_copy() {
    let bound = GenType::new(4, 5, vec![], BTreeMap::new());
    let changed = bound.replace().b(9).build().unwrap();
    assert_eq!(bound, GenType::new(4, 5, vec![], BTreeMap::new()));
    assert_eq!(changed, GenType::new(4, 9, vec![], BTreeMap::new()));
    assert_eq!(*changed.b(), 9);
}

#[test]
fn missing_required_argument() {
    match GenType::builder().a(1).build() {
        Err(e @ Error::MissingArgument { .. }) => {
            assert_eq!(e.to_string(), "gentype() missing required argument: b");
        }
        other => panic!("expected a missing argument, got {other:?}"),
    }
}

#[test]
fn signature_metadata() {
    let signature = GenType::SIGNATURE;
    assert_eq!(signature.name, "gentype");
    assert!(signature.qualname.ends_with("::gentype"));
    assert_eq!(signature.doc.trim(), "my docstring");
    let names: Vec<_> = signature.parameters.iter().map(|p| p.name).collect();
    assert_eq!(names, ["a", "b", "cs", "fs"]);
    assert_eq!(signature.parameter("a").unwrap().default, None);
    assert!(signature.parameter("cs").unwrap().default.is_some());
    assert_eq!(signature.parameter("nope"), None);

    assert_eq!(MyGen::SIGNATURE.to_string(), "mygen(a, foo)");
    assert_eq!(MyGen::SIGNATURE.doc, "");
    assert!(Countdown::SIGNATURE.parameters.is_empty());
}

#[test]
fn arguments_in_declaration_order() {
    let bound = MyGen::new(1, 2);
    let names: Vec<_> = bound.arguments().into_iter().map(|(name, _)| name).collect();
    assert_eq!(names, ["a", "foo"]);
}

#[test]
fn no_parameters() {
    let countdown = Countdown::builder().build().unwrap();
    assert_eq!(countdown, Countdown::new());
    assert_eq!(collect(countdown.spawn()), (vec![3, 2, 1], "liftoff"));
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct Parent {
    foo: i32,
}

reusable! {
    fn parent_gen(parent: Parent, value: i32) -> impl Start<(), i32, ()> as ParentGen {
        [parent.foo, value].into_coro()
    }
}

impl Parent {
    fn mygen(&self, value: i32) -> ParentGen {
        ParentGen::bind(self.clone())(value)
    }
}

#[test]
fn callable_as_method() {
    let p = Parent { foo: 4 };
    assert_eq!(collect(ParentGen::new(p.clone(), 8).spawn()).0, vec![4, 8]);
    let bound = p.mygen(9);
    assert_eq!(collect(bound.spawn()).0, collect(bound.spawn()).0);
    assert_eq!(collect(bound.spawn()).0, vec![4, 9]);
    assert_eq!(bound, ParentGen::new(p, 9));
}

#[test]
fn bind_reuses_the_receiver() {
    let make = MyGen::bind(7);
    assert_eq!(make(1), MyGen::new(7, 1));
    assert_eq!(make(2), MyGen::new(7, 2));
}
