#[macro_export]
macro_rules! min {
    ( $a:expr $(, $tail:expr)+ ) => ({
        let other = min!($($tail),+);
        if $a < other {
            $a
        } else {
            other
        }
    });
    ( $a:expr ) => ($a);
}

#[macro_export]
macro_rules! max {
    ( $a:expr $(, $tail:expr)+ ) => ({
        let other = max!($($tail),+);
        if $a > other {
            $a
        } else {
            other
        }
    });
    ( $a:expr ) => ($a);
}
