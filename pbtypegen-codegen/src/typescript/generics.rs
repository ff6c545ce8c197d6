//! Generic type parameters for json fields.
//!
//! Every json field gets its own type parameter so callers can describe the
//! content shape. The record type declares the parameters with `unknown`
//! defaults; types built on top of the record forward them bare.

use pbtypegen_schema::types::Field;

/// Ordered generic parameters of one collection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenericParams {
    names: Vec<String>,
}

impl GenericParams {
    /// Collects one parameter per json field, in schema order.
    #[must_use]
    pub fn from_fields(fields: &[Field]) -> Self {
        let names = fields
            .iter()
            .filter(|f| f.kind.is_json())
            .map(|f| param_name(&f.name))
            .collect();
        Self { names }
    }

    /// Returns the parameter names.
    #[must_use]
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Returns true if no parameters are needed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Declaration-site list, e.g. `<Tdata = unknown>`.
    #[must_use]
    pub fn declaration(&self) -> String {
        self.render(|name| format!("{name} = unknown"))
    }

    /// Reference-site list, e.g. `<Tdata>`.
    #[must_use]
    pub fn reference(&self) -> String {
        self.render(String::clone)
    }

    fn render(&self, item: impl Fn(&String) -> String) -> String {
        if self.names.is_empty() {
            return String::new();
        }
        let items: Vec<String> = self.names.iter().map(item).collect();
        format!("<{}>", items.join(", "))
    }
}

/// Returns the generic parameter name for a json field.
///
/// ASCII letters, digits and `_` pass through. `$` is the escape character:
/// a literal `$` becomes `$$` and any other character becomes `$<hex>$`
/// (its code point in lowercase hex), so distinct field names always map to
/// distinct parameters.
#[must_use]
pub fn param_name(field_name: &str) -> String {
    let mut name = String::with_capacity(field_name.len() + 1);
    name.push('T');
    for c in field_name.chars() {
        match c {
            c if c.is_ascii_alphanumeric() || c == '_' => name.push(c),
            '$' => name.push_str("$$"),
            c => name.push_str(&format!("${:x}$", u32::from(c))),
        }
    }
    name
}
