/// Builds a [`Value`](crate::Value) from JSON-like literal syntax.
///
/// Keys must be string literals. Any other expression is converted through
/// [`to_value`](crate::to_value), falling back to `Null` if that fails.
///
/// ```rust
/// use serde_box::value;
///
/// let length = 96;
/// let movie = value!({
///     "Director": "Mel Brooks",
///     "length": length,
///     "Stars": [{"name": "John Candy", "role": "Barf"}]
/// });
/// assert_eq!(movie["Stars"][0]["role"], "Barf");
/// ```
#[macro_export]
macro_rules! value {
    (null) => {
        $crate::Value::Null
    };

    (true) => {
        $crate::Value::Bool(true)
    };

    (false) => {
        $crate::Value::Bool(false)
    };

    ([]) => {
        $crate::Value::Array(vec![])
    };

    ([ $($elem:tt),* $(,)? ]) => {
        $crate::Value::Array(vec![$($crate::value!($elem)),*])
    };

    ({}) => {
        $crate::Value::Object($crate::Map::new())
    };

    ({ $($key:literal : $value:tt),* $(,)? }) => {{
        let mut object = $crate::Map::new();
        $(
            object.insert($key.to_string(), $crate::value!($value));
        )*
        $crate::Value::Object(object)
    }};

    ($s:expr) => {{
        $crate::to_value(&$s).unwrap_or($crate::Value::Null)
    }};
}
