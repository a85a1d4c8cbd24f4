//! Cache key construction.
//!
//! A key is the operation name followed by its arguments, all joined with
//! `:`. Arguments are used verbatim: callers pass canonical identity values.

/// Operation name for the paginated class list.
pub const READ_CLASS_LIST: &str = "read_class_list";

/// Operation name for a single class lookup.
pub const READ_CLASS: &str = "read_class";

/// Operation name for a class's notice list.
pub const READ_CLASS_NOTICE_LIST: &str = "read_class_notice_list";

/// Builds the cache key for `operation` called with `args`, in order.
///
/// # Examples
///
/// ```
/// use classboard_core::cache::build_key;
///
/// assert_eq!(build_key("read_class_list", &[]), "read_class_list");
/// assert_eq!(build_key("read_class", &["abc"]), "read_class:abc");
/// assert_eq!(build_key("op", &["a", "b"]), "op:a:b");
/// ```
pub fn build_key(operation: &str, args: &[&str]) -> String {
    let mut key = String::from(operation);
    for arg in args {
        key.push(':');
        key.push_str(arg);
    }
    key
}

/// Returns the cache key for the class list.
///
/// The key carries no pagination arguments, so every page shares one entry.
pub fn class_list_key() -> String {
    build_key(READ_CLASS_LIST, &[])
}

/// Returns the cache key for a single class.
pub fn class_key(class_id: &str) -> String {
    build_key(READ_CLASS, &[class_id])
}

/// Returns the cache key for the notices of a class.
pub fn class_notice_list_key(class_id: &str) -> String {
    build_key(READ_CLASS_NOTICE_LIST, &[class_id])
}
