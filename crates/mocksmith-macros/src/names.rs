//! Naming-convention derivation for generated members.
//!
//! Every derived identifier in the generated mock comes from one of these
//! functions so the conventions stay testable in one place instead of being
//! scattered through the builders.

use quote::format_ident;
use syn::Ident;

/// `Service` → `ServiceMock`.
pub fn mock_type_name(interface: &Ident) -> Ident {
    format_ident!("{}Mock", interface)
}

/// `worker` → `underlying_worker`, the backing field behind a plain
/// property's get/set trampoline.
pub fn underlying_field(property: &Ident) -> Ident {
    format_ident!("underlying_{}", property)
}

/// `worker` → `set_worker`.
pub fn setter_name(property: &Ident) -> Ident {
    format_ident!("set_{}", property)
}

/// `do_work` → `do_work_calls_count`.
pub fn calls_count_field(method: &Ident) -> Ident {
    format_ident!("{}_calls_count", method)
}

/// `do_work` → `do_work_called`.
pub fn called_predicate(method: &Ident) -> Ident {
    format_ident!("{}_called", method)
}

/// `do_work` → `do_work_closure`.
pub fn closure_field(method: &Ident) -> Ident {
    format_ident!("{}_closure", method)
}

/// `do_work` → `do_work_return_value`.
pub fn return_value_field(method: &Ident) -> Ident {
    format_ident!("{}_return_value", method)
}
