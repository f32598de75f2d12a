//! An interface with zero members still yields a conforming mock.

use mocksmith_macros::mock;

mock! {
    pub trait Empty {}
}

fn main() {
    fn accepts_empty(_: &impl Empty) {}

    let mock = EmptyMock::new();
    accepts_empty(&mock);
}
