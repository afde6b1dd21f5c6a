//! Placeholder substitution over template text and file names.
//!
//! Rendering is infallible: every `___…___` occurrence is replaced with the
//! token's resolved value (which may be empty), and everything else passes
//! through untouched.

use regex::Regex;

use crate::vars::{Token, VariableContext};

fn token_regex() -> Regex {
    // Lazy interior so adjacent tokens don't swallow each other's delimiters.
    Regex::new(r"___([A-Za-z0-9_:]+?)___").expect("valid regex")
}

/// Replace every placeholder in `text` with its resolved value.
pub fn render_str(text: &str, ctx: &mut VariableContext) -> String {
    let re = token_regex();
    re.replace_all(text, |caps: &regex::Captures<'_>| {
        ctx.resolve(&Token::parse(&caps[1]))
    })
    .into_owned()
}

/// Replace placeholders in a bundle-relative file name.
///
/// Same substitution as [`render_str`]; file names commonly carry
/// `___FILEBASENAME___` so generated files pick up the caller's name.
pub fn render_file_name(name: &str, ctx: &mut VariableContext) -> String {
    render_str(name, ctx)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use crate::env::FixedEnvironment;
    use crate::vars::ContextBuilder;

    use super::*;

    fn ctx() -> VariableContext {
        ContextBuilder::new()
            .file_name("Widget.swift")
            .project_name("MyApp")
            .option("bundleIdentifierPrefix", "com.example")
            .build(Arc::new(FixedEnvironment::default()))
    }

    #[test]
    fn substitutes_simple_fields() {
        let mut ctx = ctx();
        assert_eq!(
            render_str("// ___FILENAME___ in ___PROJECTNAME___", &mut ctx),
            "// Widget.swift in MyApp"
        );
    }

    #[test]
    fn substitutes_option_with_transform_chain() {
        let mut ctx = ctx();
        let out = render_str(
            "id = ___VARIABLE_bundleIdentifierPrefix:bundleIdentifier___.___PROJECTNAME:RFC1034identifier___",
            &mut ctx,
        );
        assert_eq!(out, "id = com.example.MyApp");
    }

    #[test]
    fn unknown_tokens_resolve_to_empty() {
        let mut ctx = ctx();
        assert_eq!(render_str("<___NOT_A_THING___>", &mut ctx), "<>");
    }

    #[test]
    fn text_without_tokens_passes_through() {
        let mut ctx = ctx();
        let text = "no placeholders here, not even _single_ underscores";
        assert_eq!(render_str(text, &mut ctx), text);
    }

    #[test]
    fn file_names_render_like_bodies() {
        let mut ctx = ctx();
        assert_eq!(
            render_file_name("___FILEBASENAME___.swift", &mut ctx),
            "Widget.swift"
        );
    }

    #[test]
    fn repeated_uuid_token_is_stable_within_one_context() {
        let mut ctx = ctx();
        let out = render_str("___UUID_a___ ___UUID_a___", &mut ctx);
        let parts: Vec<&str> = out.split(' ').collect();
        assert_eq!(parts[0], parts[1]);
    }
}
