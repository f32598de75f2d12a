//! Procedural macro implementation for mocksmith
//!
//! This crate provides one macro:
//! - `mock!` - Generate a test-double implementation of an interface
//!
//! The heavy lifting lives in the inner modules: `parse` (invocation
//! grammar), `classify` (type-shape rules), `substitute` (associated-type
//! resolution), `property`/`method` (per-member builders), and `expand`
//! (validation and assembly). Prefer depending on the `mocksmith` facade
//! crate, which re-exports the macro.

use proc_macro::TokenStream;

mod classify;
mod expand;
mod method;
mod names;
mod parse;
mod property;
mod substitute;

/// Generate a mock implementation of an interface.
///
/// The invocation declares an interface in a trait-shaped grammar: `fn`
/// members are methods, `var` members are read/write properties, and an
/// optional single `type` member is an associated-type placeholder. Types
/// are a bare name `T`, an optional `T?`, or an implicitly-unwrapped
/// optional `T!` (reads assert presence). The macro emits the interface as
/// a regular trait plus a peer struct `<Name>Mock` implementing it.
///
/// For every method the mock exposes a `*_calls_count` counter, a
/// `*_called()` predicate, a `*_closure` invocation hook (its result is
/// discarded), and — when the method returns — a `*_return_value` stub that
/// is the sole source of the return value. Plain properties trampoline
/// through a public `underlying_*` backing field; optional and
/// implicitly-unwrapped properties store directly under their own name.
/// Property and return types must implement `Clone`.
///
/// Reading a plain or implicitly-unwrapped property before assigning it,
/// or invoking a returning method before stubbing `*_return_value`, panics:
/// an un-stubbed mock is a programmer error in the test and fails loudly.
///
/// # Example
///
/// ```ignore
/// mock! {
///     pub trait TaskService {
///         var worker: String;
///         fn do_work(arg: String) -> String;
///     }
/// }
///
/// let mut service = TaskServiceMock::new();
/// service.do_work_return_value = Some("done".to_string());
/// assert_eq!(service.do_work("x".to_string()), "done");
/// assert_eq!(service.do_work_calls_count, 1);
/// ```
///
/// # Associated types
///
/// `#[mock(associated_type = "Concrete")]` written immediately before the
/// interface binds the placeholder to a concrete type in the generated
/// mock. Without the binding the placeholder name passes through verbatim
/// and only resolves if a type of that name is in scope.
///
/// ```ignore
/// mock! {
///     #[mock(associated_type = "String")]
///     pub trait Repository {
///         type Item;
///         fn load() -> Item;
///     }
/// }
/// ```
#[proc_macro]
pub fn mock(input: TokenStream) -> TokenStream {
    expand::expand(input.into()).into()
}
