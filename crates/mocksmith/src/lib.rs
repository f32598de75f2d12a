//! mocksmith: generate test doubles for trait-shaped interfaces.
//!
//! Declare an interface inside [`mock!`] and get back the interface as a
//! regular trait plus a peer `<Name>Mock` struct implementing it. The mock
//! counts invocations per method, lets tests hook each invocation with a
//! closure, stubs return values, and exposes mutable backing storage for
//! properties.
//!
//! ```
//! use mocksmith::mock;
//!
//! mock! {
//!     pub trait TaskService {
//!         var worker: String;
//!         var optional_worker: String?;
//!         fn do_work(arg: String) -> String;
//!     }
//! }
//!
//! let mut service = TaskServiceMock::new();
//! service.set_worker("alice".to_string());
//! service.do_work_return_value = Some("done".to_string());
//!
//! assert_eq!(service.do_work("now".to_string()), "done");
//! assert_eq!(service.do_work_calls_count, 1);
//! assert!(service.do_work_called());
//! assert_eq!(service.worker(), "alice");
//! assert_eq!(service.optional_worker(), None);
//! ```

pub use mocksmith_macros::mock;
