//! Extraction for plain JavaScript checks.

use oxc_allocator::Allocator;
use oxc_ast::ast::{
    Argument, CallExpression, ExportNamedDeclaration, Expression, ImportDeclaration,
};
use oxc_ast_visit::{Visit, walk};
use oxc_span::SourceType;

use super::{ExtractError, ImportExtractor, parse_program};
use crate::dialect::Dialect;

/// Finds `require(...)` and `module.require(...)` calls anywhere in a file.
///
/// Only a string literal, or the leading static chunk of a template literal,
/// counts as a specifier. `require(name)` with a variable is skipped, as is
/// a reassigned or aliased loader; such dependencies go unreported. Static
/// `import ... from` declarations are picked up as well.
#[derive(Debug, Clone, Copy, Default)]
pub struct RequireExtractor;

impl ImportExtractor for RequireExtractor {
    fn dialect(&self) -> Dialect {
        Dialect::Dynamic
    }

    fn extract(&self, source: &str) -> Result<Vec<String>, ExtractError> {
        let allocator = Allocator::default();
        let ret = parse_program(&allocator, source, SourceType::mjs())?;

        let mut collector = RequireCollector::default();
        collector.visit_program(&ret.program);

        if collector.skipped > 0 {
            tracing::debug!(
                skipped = collector.skipped,
                "ignored require() calls without a literal specifier"
            );
        }

        Ok(collector.specifiers)
    }
}

#[derive(Default)]
struct RequireCollector {
    specifiers: Vec<String>,
    skipped: usize,
}

impl<'a> Visit<'a> for RequireCollector {
    fn visit_call_expression(&mut self, call: &CallExpression<'a>) {
        if is_loader_call(&call.callee) {
            if let Some(argument) = call.arguments.first() {
                match literal_specifier(argument) {
                    Some(specifier) => self.specifiers.push(specifier.to_string()),
                    None => self.skipped += 1,
                }
            }
        }

        // Nested calls: require(require.resolve('./x')) and friends
        walk::walk_call_expression(self, call);
    }

    fn visit_import_declaration(&mut self, decl: &ImportDeclaration<'a>) {
        self.specifiers.push(decl.source.value.to_string());
    }

    fn visit_export_named_declaration(&mut self, decl: &ExportNamedDeclaration<'a>) {
        if let Some(source) = &decl.source {
            self.specifiers.push(source.value.to_string());
        }
        walk::walk_export_named_declaration(self, decl);
    }
}

/// `require(...)` or `module.require(...)`.
fn is_loader_call(callee: &Expression<'_>) -> bool {
    match callee {
        Expression::Identifier(ident) => ident.name.as_str() == "require",
        Expression::StaticMemberExpression(member) => {
            member.property.name.as_str() == "require"
                && matches!(
                    &member.object,
                    Expression::Identifier(object) if object.name.as_str() == "module"
                )
        }
        _ => false,
    }
}

fn literal_specifier<'b>(argument: &'b Argument<'_>) -> Option<&'b str> {
    match argument {
        Argument::StringLiteral(literal) => Some(literal.value.as_str()),
        Argument::TemplateLiteral(template) => template
            .quasis
            .first()
            .and_then(|quasi| quasi.value.cooked.as_ref())
            .map(|cooked| cooked.as_str()),
        _ => None,
    }
}
