//! Extraction for TypeScript checks.

use oxc_allocator::Allocator;
use oxc_ast::ast::{Declaration, Statement, TSImportEqualsDeclaration, TSModuleReference};
use oxc_span::SourceType;

use super::{ExtractError, ImportExtractor, parse_program};
use crate::dialect::Dialect;

/// Reads `import`, `import x = require(..)` and `export { .. } from`
/// declarations at the top level.
///
/// Type-only imports count: the compiler on the remote side still needs the
/// file. `export * from` is not followed.
#[derive(Debug, Clone, Copy, Default)]
pub struct DeclarationExtractor;

impl ImportExtractor for DeclarationExtractor {
    fn dialect(&self) -> Dialect {
        Dialect::TypedSuperset
    }

    fn extract(&self, source: &str) -> Result<Vec<String>, ExtractError> {
        let allocator = Allocator::default();
        let ret = parse_program(&allocator, source, SourceType::ts())?;

        let mut specifiers = Vec::new();
        for statement in &ret.program.body {
            match statement {
                Statement::ImportDeclaration(decl) => {
                    specifiers.push(decl.source.value.to_string());
                }
                Statement::TSImportEqualsDeclaration(decl) => {
                    if let Some(source) = import_equals_source(decl) {
                        specifiers.push(source.to_string());
                    }
                }
                Statement::ExportNamedDeclaration(decl) => {
                    if let Some(source) = &decl.source {
                        specifiers.push(source.value.to_string());
                    } else if let Some(Declaration::TSImportEqualsDeclaration(inner)) =
                        &decl.declaration
                    {
                        // export import helper = require('./helper');
                        if let Some(source) = import_equals_source(inner) {
                            specifiers.push(source.to_string());
                        }
                    }
                }
                Statement::ExportAllDeclaration(decl) => {
                    tracing::debug!(
                        source = decl.source.value.as_str(),
                        "not following wildcard re-export"
                    );
                }
                _ => {}
            }
        }

        Ok(specifiers)
    }
}

/// The module path of `import x = require('..')`; `None` for namespace aliases
/// such as `import x = Foo.Bar`.
fn import_equals_source<'b>(decl: &'b TSImportEqualsDeclaration<'_>) -> Option<&'b str> {
    match &decl.module_reference {
        TSModuleReference::ExternalModuleReference(external) => {
            Some(external.expression.value.as_str())
        }
        _ => None,
    }
}
