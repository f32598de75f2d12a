//! Behavior tests for associated-type placeholder binding.

use mocksmith::mock;

mock! {
    #[mock(associated_type = "String")]
    pub trait Repository {
        type Item;
        var current: Item;
        fn store(item: Item);
        fn load() -> Item;
        fn find(key: String) -> Item?;
    }
}

#[test]
fn placeholder_is_bound_to_the_concrete_type() {
    let mut mock = RepositoryMock::new();
    mock.load_return_value = Some("stored".to_string());
    assert_eq!(mock.load(), "stored");
}

#[test]
fn placeholder_properties_use_the_concrete_type() {
    let mut mock = RepositoryMock::new();
    mock.set_current("current".to_string());
    assert_eq!(mock.current(), "current");
    assert_eq!(mock.underlying_current, Some("current".to_string()));
}

#[test]
fn placeholder_parameters_forward_to_the_closure() {
    let mut mock = RepositoryMock::new();
    mock.store_closure = Some(Box::new(|item: String| {
        assert_eq!(item, "forwarded");
    }));
    mock.store("forwarded".to_string());
    assert_eq!(mock.store_calls_count, 1);
}

#[test]
fn optional_placeholder_return_defaults_to_absent() {
    let mut mock = RepositoryMock::new();
    assert_eq!(mock.find("missing".to_string()), None);
}

#[test]
fn mock_satisfies_generic_bounds_on_the_interface() {
    fn load_from<R: Repository<Item = String>>(repo: &mut R) -> String {
        repo.load()
    }

    let mut mock = RepositoryMock::new();
    mock.load_return_value = Some("generic".to_string());
    assert_eq!(load_from(&mut mock), "generic");
}
