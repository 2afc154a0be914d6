//! Generic arity encoding
//!
//! A generic type's identifier carries its arity as a suffix and is quoted so
//! the backtick survives diagram syntax:
//!
//! ```text
//! Box<T>            ->  "Box`1"   <T>
//! Map<TKey, TValue> ->  "Map`2"   <TKey,TValue>
//! ```
//!
//! When no parameter names are known, placeholders stand in: `<T>` for one
//! parameter, `<T1,...,TN>` for more.

/// Quote an identifier and append its arity: `"Name`N"`.
pub fn arity_suffixed(identifier: &str, arity: usize) -> String {
    format!("\"{identifier}`{arity}\"")
}

/// Arity encoded in an identifier, if any.
pub fn parse_arity(identifier: &str) -> Option<usize> {
    let (_, count) = identifier.trim_matches('"').rsplit_once('`')?;
    count.parse().ok()
}

/// Placeholder parameter list for a known arity. Empty for zero.
pub fn placeholder_parameters(arity: usize) -> String {
    match arity {
        0 => String::new(),
        1 => "<T>".to_string(),
        n => {
            let names: Vec<String> = (1..=n).map(|i| format!("T{i}")).collect();
            format!("<{}>", names.join(","))
        }
    }
}

/// Wrap argument texts as `<A,B>`.
pub fn argument_list<S: AsRef<str>>(arguments: &[S]) -> String {
    let joined: Vec<&str> = arguments.iter().map(AsRef::as_ref).collect();
    format!("<{}>", joined.join(","))
}
