/// Creates a [`Vector`](crate::Vector) containing the arguments.
///
/// ```
/// use vector_list::vector;
///
/// let v = vector![1, 2, 3];
/// assert_eq!(v, [1, 2, 3]);
///
/// let filled = vector![String::from("x"); 2];
/// assert_eq!(filled, ["x", "x"]);
/// ```
#[macro_export]
macro_rules! vector {
    () => {
        $crate::Vector::new()
    };
    ($elem:expr; $n:expr) => {
        $crate::Vector::from(::std::vec![$elem; $n])
    };
    ($($elem:expr),+ $(,)?) => {
        $crate::Vector::from(::std::vec![$($elem),+])
    };
}
