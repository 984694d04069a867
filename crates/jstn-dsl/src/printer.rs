use std::fmt;

use jstn_core::types::{Kind, Type};

/// Indentation unit for pretty output.
const INDENT: &str = "  ";

/// Output layout of the generator.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Format {
    /// No inserted whitespace; properties separated by `;`.
    #[default]
    Canonical,
    /// One property per line, indented by object depth.
    Pretty,
}

/// Render a schema tree as JSTN text.
///
/// Properties are always emitted sorted by name, so equal trees render to
/// equal text. The output parses back to the same tree.
pub fn generate(schema: &Type, format: Format) -> String {
    let mut output = String::new();
    print_type(schema, format, 0, &mut output);
    output
}

/// Render a schema tree in canonical form, e.g. `{age:number?;name:string}`.
pub fn canonical(schema: &Type) -> String {
    generate(schema, Format::Canonical)
}

/// Render a schema tree in pretty form, one property per indented line.
pub fn pretty(schema: &Type) -> String {
    generate(schema, Format::Pretty)
}

/// Displays a schema tree in canonical form, so it can be used with `{}`.
///
/// ```
/// use jstn_core::types::Type;
/// use jstn_dsl::Canonical;
///
/// let schema = Type::array(Type::string()).into_optional();
/// assert_eq!(format!("schema {}", Canonical(&schema)), "schema [string]?");
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Canonical<'a>(pub &'a Type);

impl fmt::Display for Canonical<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&canonical(self.0))
    }
}

fn print_type(schema: &Type, format: Format, depth: usize, output: &mut String) {
    match schema.kind {
        Kind::Array => {
            output.push('[');
            if let Some(items) = &schema.items {
                print_type(items, format, depth, output);
            }
            output.push(']');
        }
        Kind::Object => print_object(schema, format, depth, output),
        scalar => output.push_str(scalar.keyword().unwrap_or_default()),
    }

    if schema.optional {
        output.push('?');
    }
}

fn print_object(schema: &Type, format: Format, depth: usize, output: &mut String) {
    output.push('{');

    if schema.properties.is_empty() {
        output.push('}');
        return;
    }

    match format {
        Format::Canonical => {
            for (i, (name, property)) in schema.properties.iter().enumerate() {
                if i > 0 {
                    output.push(';');
                }
                output.push_str(name);
                output.push(':');
                print_type(property, format, depth + 1, output);
            }
        }
        Format::Pretty => {
            output.push('\n');
            let indent = INDENT.repeat(depth + 1);
            for (name, property) in &schema.properties {
                output.push_str(&indent);
                output.push_str(name);
                output.push_str(": ");
                print_type(property, format, depth + 1, output);
                output.push('\n');
            }
            output.push_str(&INDENT.repeat(depth));
        }
    }

    output.push('}');
}
