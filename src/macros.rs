/// Builds a [`KvMap`](crate::KvMap) from `key => value` pairs.
///
/// Keys and values accept anything with a `to_string`. Repeated keys merge
/// exactly as the parser merges them: values concatenated with a newline.
///
/// # Examples
///
/// ```rust
/// use kvtext::kvmap;
///
/// let map = kvmap! {
///     "title" => "Hello",
///     "body" => "line one\nline two",
/// };
/// assert_eq!(map.get("title"), Some("Hello"));
/// assert_eq!(kvmap! {}.len(), 0);
/// ```
#[macro_export]
macro_rules! kvmap {
    () => {
        $crate::KvMap::new()
    };

    ( $( $key:expr => $value:expr ),* $(,)? ) => {{
        let mut map = $crate::KvMap::new();
        $(
            map.merge(($key).to_string(), ($value).to_string());
        )*
        map
    }};
}
