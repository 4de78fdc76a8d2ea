use reqwest::Method;
use std::{borrow::Cow, fmt::Display};

/// An endpoint of the backend
///
/// Parameterised paths use `{name}` placeholders that are filled in order by
/// [`PathSpec::with_params`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathSpec {
    pub path: Cow<'static, str>,
    pub method: Method,
}

impl PathSpec {
    pub const fn get(path: &'static str) -> Self {
        Self::new(path, Method::GET)
    }

    pub const fn post(path: &'static str) -> Self {
        Self::new(path, Method::POST)
    }

    pub const fn put(path: &'static str) -> Self {
        Self::new(path, Method::PUT)
    }

    pub const fn delete(path: &'static str) -> Self {
        Self::new(path, Method::DELETE)
    }

    const fn new(path: &'static str, method: Method) -> Self {
        Self {
            path: Cow::Borrowed(path),
            method,
        }
    }

    /// Number of `{name}` placeholders left in the path
    pub fn placeholder_count(&self) -> usize {
        self.path.matches('{').count()
    }

    /// Returns a copy with the placeholders replaced by `params` in order of
    /// appearance
    ///
    /// Placeholders without a matching parameter are left as is and extra
    /// parameters are ignored (a count mismatch is logged)
    pub fn with_params(&self, params: &[&dyn Display]) -> Self {
        let placeholder_count = self.placeholder_count();
        if params.len() != placeholder_count {
            tracing::error!(
                path = ?self.path,
                placeholder_count,
                param_count = params.len(),
                "parameter count does not match placeholders"
            );
        }
        let mut result = String::with_capacity(self.path.len());
        let mut rest: &str = &self.path;
        let mut params = params.iter();
        while let Some(start) = rest.find('{') {
            let Some(len) = rest[start..].find('}') else {
                break;
            };
            let end = start + len;
            result.push_str(&rest[..start]);
            match params.next() {
                Some(param) => result.push_str(&param.to_string()),
                None => result.push_str(&rest[start..=end]),
            }
            rest = &rest[end + 1..];
        }
        result.push_str(rest);
        Self {
            path: Cow::Owned(result),
            method: self.method.clone(),
        }
    }
}
