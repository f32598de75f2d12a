//! A mock with every member shape must compile and behave.

use mocksmith_macros::mock;

mock! {
    pub trait TaskService {
        var worker: String;
        var optional_worker: String?;
        var session_token: String!;
        fn do_work();
        fn do_work_with_args(input: String, flag: bool);
        fn do_work_with_return() -> String;
        fn find_worker(name: String) -> String?;
    }
}

fn main() {
    let mut service = TaskServiceMock::new();

    service.set_worker("alice".to_string());
    assert_eq!(service.worker(), "alice");
    assert_eq!(service.optional_worker(), None);

    service.do_work();
    assert_eq!(service.do_work_calls_count, 1);
    assert!(service.do_work_called());

    service.do_work_with_return_return_value = Some("done".to_string());
    assert_eq!(service.do_work_with_return(), "done");

    assert_eq!(service.find_worker("bob".to_string()), None);
}
