//! Declare an interface, then drive its generated mock the way a test would.

use mocksmith::mock;

mock! {
    pub trait TaskService {
        var worker: String;
        var optional_worker: String?;
        var session_token: String!;
        fn do_work();
        fn do_work_with_arg(arg: String);
        fn do_work_with_return_value() -> String;
        fn do_work_with_arg_and_return_value(arg: String) -> String;
    }
}

fn main() {
    let mut service = TaskServiceMock::new();

    service.set_worker("alice".to_string());
    service.do_work_with_return_value_return_value = Some("done".to_string());
    service.do_work_with_arg_closure = Some(Box::new(|arg| {
        println!("do_work_with_arg observed {arg:?}");
    }));

    service.do_work();
    service.do_work_with_arg("report".to_string());
    let outcome = service.do_work_with_return_value();

    println!("worker = {:?}", service.worker());
    println!("optional_worker = {:?}", service.optional_worker());
    println!("do_work called {} time(s)", service.do_work_calls_count);
    println!("do_work_with_return_value -> {outcome:?}");
}
