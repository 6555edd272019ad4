use covenant::contract;

#[contract(
    requires: x > 0,
    ensures: *output == x * 2,
)]
async fn double_async(x: i32) -> i32 {
    x * 2
}

#[test]
fn async_function_is_checked_when_polled() {
    let future = double_async(5);

    fn is_future<T: core::future::Future>(_: &T) {}
    is_future(&future);

    assert_eq!(pollster::block_on(future), 10);
}
