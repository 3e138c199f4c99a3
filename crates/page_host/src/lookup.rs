//! Typed element lookup rules shared by every DOM adapter.
//!
//! Adapters perform the raw selector query and hand the matches here together with a cast
//! closure. The rules decide whether the lookup succeeded, so the browser adapter and tests agree
//! on the same outcomes.

use std::future;

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
/// Typed lookup failure. Every variant belongs to the type-error class.
pub enum LookupError {
    /// No element matched the selector.
    #[error("TypeError: no element matches `{selector}`")]
    NotFound {
        /// Selector that was queried.
        selector: String,
    },
    /// An element matched, but it is not of the requested type.
    #[error("TypeError: element matching `{selector}` is not a {expected}")]
    TypeMismatch {
        /// Selector that was queried.
        selector: String,
        /// Short name of the requested element type.
        expected: &'static str,
    },
    /// The selector itself was rejected by the document.
    #[error("TypeError: invalid selector `{selector}`: {reason}")]
    InvalidSelector {
        /// Selector that was queried.
        selector: String,
        /// Host-provided rejection text.
        reason: String,
    },
}

/// Last path segment of `T`'s type name, e.g. `HtmlInputElement`.
pub fn short_type_name<T: ?Sized>() -> &'static str {
    let full = std::any::type_name::<T>();
    let base = full.split('<').next().unwrap_or(full);
    base.rsplit("::").next().unwrap_or(base)
}

/// Resolves a single-element lookup.
///
/// # Errors
///
/// Returns [`LookupError::NotFound`] when `found` is `None`, and [`LookupError::TypeMismatch`]
/// when `cast` rejects the match.
pub fn typed_one<N, T>(
    selector: &str,
    found: Option<N>,
    cast: impl FnOnce(N) -> Option<T>,
) -> Result<T, LookupError> {
    let node = found.ok_or_else(|| LookupError::NotFound {
        selector: selector.to_string(),
    })?;
    cast(node).ok_or_else(|| LookupError::TypeMismatch {
        selector: selector.to_string(),
        expected: short_type_name::<T>(),
    })
}

/// Resolves a multi-element lookup. Every match must pass `cast`.
///
/// # Errors
///
/// Returns [`LookupError::NotFound`] when nothing matched, and [`LookupError::TypeMismatch`] as
/// soon as one match is rejected.
pub fn typed_all<N, T>(
    selector: &str,
    found: impl IntoIterator<Item = N>,
    mut cast: impl FnMut(N) -> Option<T>,
) -> Result<Vec<T>, LookupError> {
    let mut matches = Vec::new();
    for node in found {
        let typed = cast(node).ok_or_else(|| LookupError::TypeMismatch {
            selector: selector.to_string(),
            expected: short_type_name::<T>(),
        })?;
        matches.push(typed);
    }
    if matches.is_empty() {
        return Err(LookupError::NotFound {
            selector: selector.to_string(),
        });
    }
    Ok(matches)
}

/// Turns a finished lookup into the outcome of an awaited lookup.
///
/// Strict callers receive failures. Non-strict callers only ever receive a success: on failure the
/// returned future never completes, so it must not be awaited as the sole branch of a flow that
/// needs to continue.
pub async fn settle_lookup<T>(
    outcome: Result<T, LookupError>,
    strict: bool,
) -> Result<T, LookupError> {
    match outcome {
        Ok(found) => Ok(found),
        Err(err) if strict => Err(err),
        Err(_) => future::pending().await,
    }
}

#[cfg(test)]
mod tests {
    use futures::{executor::block_on, FutureExt};
    use pretty_assertions::assert_eq;

    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    enum Node {
        Input(&'static str),
        Button(&'static str),
    }

    #[derive(Debug, PartialEq)]
    struct InputElement(&'static str);

    fn as_input(node: Node) -> Option<InputElement> {
        match node {
            Node::Input(name) => Some(InputElement(name)),
            Node::Button(_) => None,
        }
    }

    #[test]
    fn typed_one_returns_matching_type() {
        let found = typed_one("#name", Some(Node::Input("name")), as_input);
        assert_eq!(found, Ok(InputElement("name")));
    }

    #[test]
    fn typed_one_rejects_missing_and_mismatched() {
        assert_eq!(
            typed_one("#nope", None, as_input),
            Err(LookupError::NotFound {
                selector: "#nope".to_string()
            })
        );
        assert_eq!(
            typed_one("#go", Some(Node::Button("go")), as_input),
            Err(LookupError::TypeMismatch {
                selector: "#go".to_string(),
                expected: "InputElement",
            })
        );
    }

    #[test]
    fn typed_all_requires_every_match_to_cast() {
        let all = typed_all("input", [Node::Input("a"), Node::Input("b")], as_input);
        assert_eq!(all, Ok(vec![InputElement("a"), InputElement("b")]));

        let mixed = typed_all("form *", [Node::Input("a"), Node::Button("b")], as_input);
        assert!(matches!(mixed, Err(LookupError::TypeMismatch { .. })));

        let none = typed_all("input", Vec::<Node>::new(), as_input);
        assert!(matches!(none, Err(LookupError::NotFound { .. })));
    }

    #[test]
    fn strict_settle_surfaces_errors() {
        let err = LookupError::NotFound {
            selector: "#x".to_string(),
        };
        assert_eq!(
            block_on(settle_lookup::<InputElement>(Err(err.clone()), true)),
            Err(err)
        );
        assert_eq!(
            block_on(settle_lookup(Ok(InputElement("x")), false)),
            Ok(InputElement("x"))
        );
    }

    #[test]
    fn non_strict_settle_never_completes_on_failure() {
        let err = LookupError::TypeMismatch {
            selector: "#x".to_string(),
            expected: "InputElement",
        };
        let pending = settle_lookup::<InputElement>(Err(err), false);
        assert!(pending.now_or_never().is_none());
    }

    #[test]
    fn short_type_name_strips_module_path() {
        assert_eq!(short_type_name::<InputElement>(), "InputElement");
        assert_eq!(short_type_name::<Vec<u8>>(), "Vec");
        assert!(LookupError::NotFound {
            selector: "#a".to_string()
        }
        .to_string()
        .starts_with("TypeError"));
    }
}
