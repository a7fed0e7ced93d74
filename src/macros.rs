/// Builds a [`Document`](crate::Document) from a JSON-like literal.
///
/// Scalars, `true`/`false`/`null`, nested objects and arrays are supported.
/// Arrays need at least one element: the underlying slot model has no empty
/// array representation (a slot always holds at least one cell).
///
/// # Examples
///
/// ```rust
/// use json_scribe::doc;
///
/// let document = doc! {
///     "name": "Bob",
///     "age": 44,
///     "address": { "planet": "Earth" },
///     "tags": ["engineer", "parent"],
///     "retired": false,
/// };
///
/// assert_eq!(
///     document.to_compact().unwrap(),
///     r#"{"name":"Bob","age":44,"address":{"planet":"Earth"},"tags":["engineer","parent"],"retired":false}"#
/// );
/// ```
#[macro_export]
macro_rules! doc {
    () => {
        $crate::Document::new()
    };

    ( $( $key:literal : $value:tt ),+ $(,)? ) => {{
        let mut document = $crate::Document::new();
        $( $crate::doc_field!(document, $key, $value); )+
        document
    }};
}

#[macro_export]
#[doc(hidden)]
macro_rules! doc_field {
    // an array literal promotes the slot
    ( $document:ident, $key:literal, [ $($element:tt),+ $(,)? ] ) => {{
        let slot = $document.field($key);
        let mut index = 0usize;
        $(
            *slot.at(index) = $crate::doc_value!($element);
            index += 1;
        )+
        let _ = index;
    }};

    ( $document:ident, $key:literal, $value:tt ) => {
        $document.field($key).set($crate::doc_value!($value));
    };
}

#[macro_export]
#[doc(hidden)]
macro_rules! doc_value {
    (null) => {
        $crate::Value::Null
    };

    (true) => {
        $crate::Value::True
    };

    (false) => {
        $crate::Value::False
    };

    ({ $($key:literal : $value:tt),* $(,)? }) => {
        $crate::Value::from($crate::doc! { $($key : $value),* })
    };

    ($other:expr) => {
        $crate::Value::from($other)
    };
}
