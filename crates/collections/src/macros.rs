#[macro_export]
macro_rules! entry {
    ( $key: expr ) => {
        $crate::hashmap::Entry::new($key)
    };
    ( $key: expr, $count: expr ) => {
        $crate::hashmap::Entry::with_count($key, $count)
    };
}
