/// A trait implemented by all types, where `Self::Type` is `Self`.
///
/// Used in trait bounds to state that one generic type parameter is the same
/// as another, which lets a caller name a type the compiler can't infer.
///
/// For example, `just_return(10)` implements `Start<I, Y, i32>` for every
/// input `I` and every yield type `Y`. `Start::yields::<&str>()` has a bound
/// `Y2: Is<Type = Y>`, and with `Y2` given explicitly that pins `Y` to `&str`.
pub trait Is {
    type Type;
}

impl<T> Is for T {
    type Type = T;
}
