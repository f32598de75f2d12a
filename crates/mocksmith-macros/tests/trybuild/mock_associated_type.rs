//! Associated-type binding must produce a mock usable through generic bounds.

use mocksmith_macros::mock;

mock! {
    #[mock(associated_type = "String")]
    pub trait Repository {
        type Item;
        fn store(item: Item);
        fn load() -> Item;
    }
}

fn load_from<R: Repository<Item = String>>(repo: &mut R) -> String {
    repo.load()
}

fn main() {
    let mut repo = RepositoryMock::new();
    repo.load_return_value = Some("stored".to_string());
    repo.store("anything".to_string());
    assert_eq!(load_from(&mut repo), "stored");
    assert_eq!(repo.store_calls_count, 1);
}
