use std::collections::HashMap;

/// Template processor for resolving $VARIABLE format variables
///
/// Variable names are runs of `A-Z`, `0-9` and `_` following a `$`. The input
/// is scanned once, so substituted values are never themselves expanded and
/// unregistered names are left as written.
pub struct Tpl {
    variables: HashMap<String, String>,
}

impl Tpl {
    pub fn new() -> Self {
        Self {
            variables: HashMap::new(),
        }
    }

    /// Register a variable with its value
    pub fn register<K: Into<String>, V: Into<String>>(&mut self, key: K, value: V) {
        self.variables.insert(key.into(), value.into());
    }

    /// Parse a string and resolve all $VARIABLE references
    pub fn parse(&self, input: &str) -> String {
        let mut result = String::with_capacity(input.len());
        let mut rest = input;

        while let Some(pos) = rest.find('$') {
            result.push_str(&rest[..pos]);
            let after = &rest[pos + 1..];
            let len = after
                .find(|c: char| !(c.is_ascii_uppercase() || c.is_ascii_digit() || c == '_'))
                .unwrap_or(after.len());
            let name = &after[..len];

            match self.variables.get(name) {
                Some(value) if !name.is_empty() => result.push_str(value),
                _ => {
                    result.push('$');
                    result.push_str(name);
                }
            }
            rest = &after[len..];
        }

        result.push_str(rest);
        result
    }
}

impl Default for Tpl {
    fn default() -> Self {
        Self::new()
    }
}
