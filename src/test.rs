use std::cell::RefCell;
use std::rc::Rc;

use core::ops::ControlFlow::{Break, Continue};

use crate::*;

#[derive(Debug, thiserror::Error)]
#[error("stop")]
struct Stop;

#[derive(Debug, thiserror::Error)]
#[error("skip")]
struct Skip;

type Log = Rc<RefCell<Vec<&'static str>>>;

/// Forwards everything to `inner`, and records its name when cancelled.
struct Tracked<K> {
    inner: K,
    name: &'static str,
    log: Log,
}

fn tracked<K>(inner: K, name: &'static str, log: &Log) -> Tracked<K> {
    Tracked {
        inner,
        name,
        log: log.clone(),
    }
}

impl<I, Y, R, K> Start<I, Y, R> for Tracked<K>
where
    K: Start<I, Y, R>,
{
    type Coro = Tracked<K::Coro>;
    fn advance(self) -> Step<Y, R, Self::Coro> {
        let Tracked { inner, name, log } = self;
        Ok(inner.advance()?.map_next(|inner| Tracked { inner, name, log }))
    }
}

impl<I, Y, R, K> Coro<I, Y, R> for Tracked<K>
where
    K: Coro<I, Y, R>,
{
    fn resume(self, input: I) -> Step<Y, R, Self> {
        let Tracked { inner, name, log } = self;
        Ok(inner.resume(input)?.map_next(|inner| Tracked { inner, name, log }))
    }

    fn fault(self, fault: Error) -> Step<Y, R, Self> {
        let Tracked { inner, name, log } = self;
        Ok(inner.fault(fault)?.map_next(|inner| Tracked { inner, name, log }))
    }

    fn cancel(self) {
        self.log.borrow_mut().push(self.name);
        self.inner.cancel()
    }
}

/// Produces 0, then echoes back whatever it is sent. A `Stop` fault makes it
/// return -1, and a `Skip` fault makes it produce 100.
struct Echo;

struct Echoing;

impl Start<i32, i32, i32> for Echo {
    type Coro = Echoing;
    fn advance(self) -> Step<i32, i32, Echoing> {
        Ok(Yield(0, Echoing))
    }
}

impl Coro<i32, i32, i32> for Echoing {
    fn resume(self, input: i32) -> Step<i32, i32, Self> {
        Ok(Yield(input, self))
    }

    fn fault(self, fault: Error) -> Step<i32, i32, Self> {
        if fault.is::<Stop>() {
            Ok(Return(-1))
        } else if fault.is::<Skip>() {
            Ok(Yield(100, self))
        } else {
            Err(fault)
        }
    }
}

fn stop() -> Error {
    Error::user(Stop)
}

#[test]
fn iterator_into_coro() {
    [1, 2, 3]
        .into_coro()
        .assert_advances(1)
        .assert_yields((), 2)
        .assert_yields((), 3)
        .assert_returns((), ());
}

#[test]
fn empty_iterator_finishes_on_advance() {
    Vec::<i32>::new().into_coro().assert_finishes(());
}

#[test]
fn from_fn_start_then_resume() {
    let mut max = 4;
    from_fn(move |sent: Option<i32>| {
        max = max.max(sent.unwrap_or(max));
        if max < 100 { Continue(max) } else { Break(max * 3) }
    })
    .assert_advances(4)
    .assert_yields(7, 7)
    .assert_yields(3, 7)
    .assert_returns(103, 309);
}

#[test]
fn map_yield_transforms_produced_values() {
    [1, 2, 3]
        .into_coro()
        .map_yield(|x: i32| x * 10)
        .assert_advances(10)
        .assert_yields((), 20)
        .assert_yields((), 30)
        .assert_returns((), ());
}

#[test]
fn map_yield_twice() {
    [1, 2]
        .into_coro()
        .map_yield(|x: i32| x * 2)
        .map_yield(|x: i32| x + 1)
        .assert_advances(3)
        .assert_yields((), 5)
        .assert_returns((), ());
}

#[test]
fn map_send_transforms_accepted_values() {
    Echo.map_send(|s: &str| s.len() as i32)
        .assert_advances(0)
        .assert_yields("abc", 3)
        .assert_yields("", 0);
}

#[test]
fn map_return_transforms_terminal_result() {
    [1].into_coro()
        .map_return(|()| "done")
        .assert_advances(1)
        .assert_returns((), "done");
}

#[test]
fn map_return_on_immediate_return() {
    just_return(2)
        .yields::<i32>()
        .accepts::<()>()
        .map_return(|r: i32| r * 2)
        .assert_finishes(4);
}

#[test]
fn just_return_through_every_combinator() {
    just_return(99)
        .yields::<i32>()
        .accepts::<i32>()
        .map_yield(|x: i32| x + 1)
        .map_send(|x: i32| x)
        .map_return(|r: i32| r)
        .relay(oneyield(|x: i32| x))
        .assert_finishes(99);
}

#[test]
fn try_map_yield_error_cancels_inner() {
    let log = Log::default();
    let coro = tracked([1, 2, 3].into_coro(), "inner", &log)
        .try_map_yield(|x: i32| if x < 2 { Ok(x) } else { Err(stop()) })
        .assert_advances(1);
    assert!(matches!(coro.resume(()), Err(e) if e.is::<Stop>()));
    assert_eq!(*log.borrow(), vec!["inner"]);
}

#[test]
fn try_map_send_error_cancels_inner() {
    let log = Log::default();
    let coro = tracked(Echo, "echo", &log)
        .try_map_send(|s: &str| s.parse::<i32>().map_err(Error::user))
        .assert_advances(0)
        .assert_yields("12", 12);
    match coro.resume("twelve") {
        Err(e) => assert!(e.is::<std::num::ParseIntError>()),
        Ok(_) => panic!("expected a parse error"),
    }
    assert_eq!(*log.borrow(), vec!["echo"]);
}

#[test]
fn try_map_return_error_propagates() {
    let coro = [1]
        .into_coro()
        .try_map_return(|()| Err::<i32, _>(stop()))
        .assert_advances(1);
    assert!(matches!(coro.resume(()), Err(e) if e.is::<Stop>()));
}

#[test]
fn fault_through_map_reaches_inner() {
    let coro = Echo.map_yield(|x: i32| x + 1).assert_advances(1);
    assert!(matches!(coro.fault(stop()), Ok(Return(-1))));
}

#[test]
fn value_produced_after_handled_fault_is_mapped() {
    let coro = Echo.map_yield(|x: i32| x * 2).assert_advances(0);
    let Ok(Yield(y, coro)) = coro.fault(Error::user(Skip)) else {
        panic!("expected a produced value");
    };
    assert_eq!(y, 200);
    coro.assert_yields(4, 8);
}

#[test]
fn unhandled_fault_propagates_unchanged() {
    let coro = Echo.map_return(|r: i32| r).assert_advances(0);
    let fault = Error::ProtocolViolation("unexpected");
    assert!(matches!(
        coro.fault(fault),
        Err(Error::ProtocolViolation("unexpected"))
    ));
}

#[test]
fn iterator_fault_is_unsupported() {
    let coro = [1, 2].into_coro().assert_advances(1);
    match coro.fault(stop()) {
        Err(Error::UnsupportedOperation { operation, payload }) => {
            assert_eq!(operation, "fault");
            assert!(payload.is::<Stop>());
        }
        _ => panic!("expected UnsupportedOperation"),
    }
}

#[test]
fn delegate_reraises_unsupported_fault_unchanged() {
    let coro = delegate([1, 2].into_coro()).assert_advances(1);
    assert!(matches!(coro.fault(stop()), Err(e) if e.is::<Stop>()));
}

#[test]
fn map_yield_reraises_unsupported_fault_unchanged() {
    let coro = [1, 2]
        .into_coro()
        .map_yield(|x: i32| x)
        .assert_advances(1);
    assert!(matches!(coro.fault(stop()), Err(e) if e.is::<Stop>()));
}

#[test]
fn delegate_forwards_until_inner_returns() {
    delegate(Echo)
        .assert_advances(0)
        .assert_yields(5, 5)
        .into_inner()
        .assert_yields(6, 6);
}

#[test]
fn delegate_cancel_reaches_inner() {
    let log = Log::default();
    delegate(tracked(Echo, "echo", &log))
        .assert_advances(0)
        .cancel();
    assert_eq!(*log.borrow(), vec!["echo"]);
}

#[test]
fn relay_cancels_relay_before_primary() {
    let log = Log::default();
    let relay_log = log.clone();
    let coro = tracked(Echo, "primary", &log)
        .relay(move |y: i32| {
            tracked(oneyield(|x: i32| x)(y), "relay", &relay_log)
        })
        .assert_advances(0);
    coro.cancel();
    assert_eq!(*log.borrow(), vec!["relay", "primary"]);
}

#[test]
fn stacked_relays_cancel_outermost_relay_first() {
    let log = Log::default();
    let (inner_log, outer_log) = (log.clone(), log.clone());
    let coro = tracked(Echo, "primary", &log)
        .relay(move |y: i32| {
            tracked(oneyield(|x: i32| x)(y), "inner", &inner_log)
        })
        .relay(move |y: i32| {
            tracked(oneyield(|x: i32| x)(y), "outer", &outer_log)
        })
        .assert_advances(0)
        .assert_yields(3, 3);
    coro.cancel();
    assert_eq!(*log.borrow(), vec!["outer", "inner", "primary"]);
}

/// Passes its prompt on and returns the reply. A `Stop` fault makes it
/// return 42 instead.
struct Settle(i32);

struct Settling;

impl Start<i32, i32, i32> for Settle {
    type Coro = Settling;
    fn advance(self) -> Step<i32, i32, Settling> {
        Ok(Yield(self.0, Settling))
    }
}

impl Coro<i32, i32, i32> for Settling {
    fn resume(self, input: i32) -> Step<i32, i32, Self> {
        Ok(Return(input))
    }

    fn fault(self, fault: Error) -> Step<i32, i32, Self> {
        if fault.is::<Stop>() {
            Ok(Return(42))
        } else {
            Err(fault)
        }
    }
}

fn non_negative(y: i32) -> impl Start<i32, i32, i32> {
    oneyield(|x: i32| x)(y).try_map_send(|n: i32| {
        if n >= 0 { Ok(n) } else { Err(stop()) }
    })
}

#[test]
fn relay_error_is_injected_into_primary() {
    Echo.relay(non_negative)
        .assert_advances(0)
        .assert_yields(5, 5)
        .assert_returns(-3, -1);
}

#[test]
fn relay_forwards_fault_to_relay_then_primary() {
    let coro = Echo.relay(non_negative).assert_advances(0);
    assert!(matches!(coro.fault(stop()), Ok(Return(-1))));
}

#[test]
fn relay_returning_from_fault_resumes_primary() {
    let coro = Echo.relay(Settle).assert_advances(0);
    let Ok(Yield(y, coro)) = coro.fault(stop()) else {
        panic!("expected the primary to produce the settled value");
    };
    assert_eq!(y, 42);
    coro.assert_yields(5, 5);
}

#[test]
fn relay_error_unhandled_by_primary_propagates() {
    let coro = [1, 2]
        .into_coro()
        .relay(|y: i32| {
            oneyield(|x: i32| x)(y)
                .try_map_send(|_: i32| Err::<(), _>(stop()))
        })
        .assert_advances(1);
    assert!(matches!(coro.resume(7), Err(e) if e.is::<Stop>()));
}

#[test]
fn relay_that_returns_immediately_resumes_primary() {
    [1, 2, 3]
        .into_coro()
        .relay(|_: i32| just_return(()).yields::<String>().accepts::<i32>())
        .assert_finishes(());
}

#[test]
fn relay_through_either() {
    let thru = |y: i32| {
        if y % 2 == 0 {
            ::either::Left(oneyield(|x: i32| x)(y).accepts::<()>())
        } else {
            ::either::Right(just_return(()).yields::<i32>().accepts::<()>())
        }
    };
    [1, 2, 3, 4]
        .into_coro()
        .relay(thru)
        .assert_advances(2)
        .assert_yields((), 4)
        .assert_returns((), ());
}

#[test]
fn oneyield_produces_once_then_returns_input() {
    oneyield(|(a, b, c): (i32, i32, i32)| a + b + c)((1, 2, 3))
        .accepts::<i32>()
        .assert_advances(6)
        .assert_returns(9, 9);
}

#[test]
fn oneyield_function_is_reusable() {
    let double = oneyield(|x: i32| x * 2);
    double(1).accepts::<&str>().assert_advances(2).assert_returns("a", "a");
    double(4).accepts::<&str>().assert_advances(8).assert_returns("b", "b");
}

#[test]
fn sendreturn_returns_result() {
    let coro = [1].into_coro().map_return(|()| "done").assert_advances(1);
    assert_eq!(sendreturn(coro, ()).unwrap(), "done");
}

#[test]
fn sendreturn_protocol_violation_cancels_coroutine() {
    let log = Log::default();
    let coro = tracked([1, 2, 3].into_coro(), "iter", &log).assert_advances(1);
    assert!(matches!(
        sendreturn(coro, ()),
        Err(Error::ProtocolViolation(_))
    ));
    assert_eq!(*log.borrow(), vec!["iter"]);
}

#[test]
fn sendreturn_propagates_coroutine_error() {
    let coro = [1]
        .into_coro()
        .try_map_return(|()| Err::<(), _>(stop()))
        .assert_advances(1);
    assert!(matches!(sendreturn(coro, ()), Err(e) if e.is::<Stop>()));
}

#[test]
fn error_messages() {
    assert_eq!(
        Error::ProtocolViolation("coroutine did not return as expected")
            .to_string(),
        "protocol violation: coroutine did not return as expected"
    );
    assert_eq!(
        Error::MissingArgument {
            function: "mymax",
            parameter: "val"
        }
        .to_string(),
        "mymax() missing required argument: val"
    );
    assert_eq!(stop().to_string(), "stop");
}
