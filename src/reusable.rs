use core::fmt;

/// One declared parameter of a reusable coroutine-producing function.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Parameter {
    pub name: &'static str,
    /// The source text of the default value, if the parameter has one.
    pub default: Option<&'static str>,
}

/// Static description of a function wrapped by [`reusable!`](crate::reusable!).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Signature {
    pub name: &'static str,
    /// `module::path::name` of the function.
    pub qualname: &'static str,
    /// The doc comment of the function, one line per `///` line.
    pub doc: &'static str,
    pub parameters: &'static [Parameter],
}

impl Signature {
    /// Looks up a parameter by name.
    pub fn parameter(&self, name: &str) -> Option<&'static Parameter> {
        self.parameters.iter().find(|p| p.name == name)
    }
}

impl fmt::Display for Signature {
    /// Formats the signature as `name(a, b = 2)`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}(", self.name)?;
        for (i, param) in self.parameters.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            f.write_str(param.name)?;
            if let Some(default) = param.default {
                write!(f, " = {default}")?;
            }
        }
        f.write_str(")")
    }
}

/// A bound invocation of a coroutine-producing function: the function's
/// signature plus a full set of resolved arguments.
///
/// Implemented by the types generated with [`reusable!`](crate::reusable!).
/// A bound invocation owns its arguments, never a coroutine. Every call to
/// its `spawn()` method starts over from the same arguments, so the same value
/// can be driven to completion any number of times.
pub trait Reusable {
    const SIGNATURE: Signature;

    /// The resolved arguments, in declaration order.
    fn arguments(&self) -> Vec<(&'static str, &dyn fmt::Debug)>;

    /// Formats the invocation as `name(a=1, b=2)`, using the short function
    /// name. The qualified name is in [`Signature::qualname`].
    fn fmt_invocation(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}(", Self::SIGNATURE.name)?;
        for (i, (name, value)) in self.arguments().into_iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{name}={value:?}")?;
        }
        f.write_str(")")
    }
}

/// Turns a coroutine-producing function into a reusable, comparable value
/// type.
///
/// ```text
/// reusable! {
///     /// Docs.
///     pub fn name(a: A, b: B = default) -> Ret as TypeName { body }
/// }
/// ```
///
/// defines `TypeName`, a struct holding one field per parameter, with:
///
///   * `TypeName::new(a, b)` to bind every argument positionally,
///   * `TypeName::builder()` to bind arguments by name, with defaults
///     pre-applied; `build()` fails with [`Error::MissingArgument`] if a
///     required argument was never set,
///   * an accessor per parameter, e.g. `a(&self) -> &A`,
///   * `replace(&self)`, a builder seeded with a copy of the arguments, for
///     making a modified copy,
///   * `spawn(&self) -> Ret`, which runs `body` with a fresh clone of the
///     arguments,
///   * `bind(a)`, a constructor with the first argument already supplied,
///     for method-style use,
///   * derived `Clone`, `PartialEq`, `Eq` and `Hash` over the arguments, a
///     `Debug` impl printing `name(a=.., b=..)` with the short function
///     name, and a [`Reusable`] impl.
///
/// Every parameter type must implement `Clone`, `Eq`, `Hash` and `Debug`,
/// because the derives cover all of them. Parameters such as `f64` or
/// closures are not accepted; wrap them in a type that implements these
/// traits, or build the coroutine in the body from accepted arguments.
///
/// The builder lives in a module named after the function, as
/// `name::Arguments`. This means the macro must be invoked at module level.
///
/// [`Error::MissingArgument`]: crate::Error::MissingArgument
///
/// # Examples
///
/// ```rust
/// use core::ops::ControlFlow::{Break, Continue};
///
/// use corelay::{CoroAssertions, Reusable, Start, StartAssertions, from_fn, reusable};
///
/// reusable! {
///     /// Counts up from `start` in steps of `step`, then returns the total.
///     fn count(start: i32, step: i32 = 1, times: usize = 3)
///         -> impl Start<(), i32, i32> as Count
///     {
///         let mut n = start;
///         let mut left = times;
///         let mut total = 0;
///         from_fn(move |_: Option<()>| {
///             if left == 0 {
///                 return Break(total);
///             }
///             let current = n;
///             total += current;
///             n += step;
///             left -= 1;
///             Continue(current)
///         })
///     }
/// }
///
/// fn main() {
///     let count = Count::builder().start(10).build().unwrap();
///     assert_eq!(count, Count::new(10, 1, 3));
///     assert_eq!(format!("{count:?}"), "count(start=10, step=1, times=3)");
///     assert_eq!(
///         Count::SIGNATURE.to_string(),
///         "count(start, step = 1, times = 3)"
///     );
///
///     // Each spawn starts from scratch.
///     for _ in 0..2 {
///         count
///             .spawn()
///             .assert_advances(10)
///             .assert_yields((), 11)
///             .assert_yields((), 12)
///             .assert_returns((), 33);
///     }
///
///     let by_two = count.replace().step(2).build().unwrap();
///     assert_eq!(*by_two.step(), 2);
///     assert_eq!(*count.step(), 1);
/// }
/// ```
#[macro_export]
macro_rules! reusable {
    (@default) => {
        ::core::option::Option::None
    };
    (@default $default:expr) => {
        ::core::option::Option::Some($default)
    };
    (
        @define [$($doc:literal)*] $vis:vis $name:ident
        [$($param:ident : $ty:ty $(= $default:expr)?,)*]
        $ret:ty, $Type:ident, $body:block
    ) => {
        $(#[doc = $doc])*
        #[derive(Clone, PartialEq, Eq, Hash)]
        $vis struct $Type {
            $($param: $ty,)*
        }

        #[allow(clippy::new_without_default, clippy::too_many_arguments)]
        impl $Type {
            /// Binds every argument positionally.
            $vis fn new($($param: $ty),*) -> Self {
                $Type { $($param),* }
            }

            /// Starts binding arguments by name, with defaults applied.
            $vis fn builder() -> $name::Arguments {
                <$name::Arguments as ::core::default::Default>::default()
            }

            /// Starts a copy of this invocation with some arguments replaced.
            $vis fn replace(&self) -> $name::Arguments {
                let $Type { $($param),* } = ::core::clone::Clone::clone(self);
                $name::Arguments {
                    $($param: ::core::option::Option::Some($param),)*
                }
            }

            /// Creates a fresh coroutine from the bound arguments.
            #[allow(unused_variables)]
            $vis fn spawn(&self) -> $ret {
                let $Type { $($param),* } = ::core::clone::Clone::clone(self);
                $body
            }

            $(
                $vis fn $param(&self) -> &$ty {
                    &self.$param
                }
            )*
        }

        impl ::core::fmt::Debug for $Type {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                $crate::Reusable::fmt_invocation(self, f)
            }
        }

        impl $crate::Reusable for $Type {
            const SIGNATURE: $crate::Signature = $crate::Signature {
                name: ::core::stringify!($name),
                qualname: ::core::concat!(
                    ::core::module_path!(),
                    "::",
                    ::core::stringify!($name)
                ),
                doc: ::core::concat!($($doc, "\n",)*),
                parameters: &[$(
                    $crate::Parameter {
                        name: ::core::stringify!($param),
                        default: $crate::reusable!(
                            @default $(::core::stringify!($default))?
                        ),
                    },
                )*],
            };

            fn arguments(&self) -> ::std::vec::Vec<(&'static str, &dyn ::core::fmt::Debug)> {
                ::std::vec![$(
                    (::core::stringify!($param), &self.$param as &dyn ::core::fmt::Debug),
                )*]
            }
        }

        #[allow(unused_imports)]
        $vis mod $name {
            use super::*;

            /// Named arguments for
            #[doc = ::core::concat!("[`", ::core::stringify!($Type), "`].")]
            pub struct Arguments {
                $(pub(super) $param: ::core::option::Option<$ty>,)*
            }

            impl ::core::default::Default for Arguments {
                fn default() -> Self {
                    Arguments {
                        $($param: $crate::reusable!(@default $($default)?),)*
                    }
                }
            }

            impl Arguments {
                $(
                    pub fn $param(mut self, $param: $ty) -> Self {
                        self.$param = ::core::option::Option::Some($param);
                        self
                    }
                )*

                /// Finishes binding, failing if a required argument is unset.
                pub fn build(self) -> ::core::result::Result<$Type, $crate::Error> {
                    ::core::result::Result::Ok($Type {
                        $($param: self.$param.ok_or($crate::Error::MissingArgument {
                            function: ::core::stringify!($name),
                            parameter: ::core::stringify!($param),
                        })?,)*
                    })
                }
            }
        }
    };
    (
        $(#[doc = $doc:literal])*
        $vis:vis fn $name:ident() -> $ret:ty as $Type:ident $body:block
    ) => {
        $crate::reusable!(@define [$($doc)*] $vis $name [] $ret, $Type, $body);
    };
    (
        $(#[doc = $doc:literal])*
        $vis:vis fn $name:ident(
            $first:ident : $first_ty:ty $(= $first_default:expr)?
            $(, $param:ident : $ty:ty $(= $default:expr)?)* $(,)?
        ) -> $ret:ty as $Type:ident $body:block
    ) => {
        $crate::reusable!(
            @define [$($doc)*] $vis $name
            [
                $first : $first_ty $(= $first_default)?,
                $($param : $ty $(= $default)?,)*
            ]
            $ret, $Type, $body
        );

        impl $Type {
            /// Supplies the first argument up front, like a method receiver,
            /// returning a constructor for the rest.
            $vis fn bind($first: $first_ty) -> impl Fn($($ty),*) -> $Type {
                move |$($param),*| $Type {
                    $first: ::core::clone::Clone::clone(&$first),
                    $($param),*
                }
            }
        }
    };
}
