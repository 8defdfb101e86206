//! JS/TS source parsing via swc.

use std::sync::Arc;

use anyhow::{Result, anyhow};
use swc_common::{FileName, Globals, SourceMap};
use swc_ecma_ast::Module;
use swc_ecma_parser::{Parser, StringInput, Syntax, TsSyntax};

/// A parsed source module together with the map needed to turn spans back
/// into line/column positions.
pub struct ParsedModule {
    pub module: Module,
    pub source_map: Arc<SourceMap>,
}

/// Parse JS/TS source code into an AST.
///
/// Everything is parsed with the TSX grammar, which accepts plain JS, JSX
/// and almost all TS in practice; files it rejects are reported as parse
/// errors by the caller, never fatal.
///
/// Accepts a shared SourceMap so callers can parse many files in parallel,
/// each with its own map.
pub fn parse_module_source(
    code: String,
    file_path: &str,
    source_map: Arc<SourceMap>,
) -> Result<ParsedModule> {
    use swc_common::GLOBALS;

    // Wrap in GLOBALS.set() for thread safety
    GLOBALS.set(&Globals::new(), || {
        let source_file = source_map.new_source_file(FileName::Real(file_path.into()).into(), code);

        let syntax = Syntax::Typescript(TsSyntax {
            tsx: true,
            ..Default::default()
        });

        let mut parser = Parser::new(syntax, StringInput::from(&*source_file), None);

        let module = parser
            .parse_module()
            .map_err(|e| anyhow!("Failed to parse {}: {:?}", file_path, e))?;

        Ok(ParsedModule { module, source_map })
    })
}
