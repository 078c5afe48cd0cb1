//! flowts_emitter: TypeScript output for Flow interchange files.
//!
//! Coordinates one file's trip through the pipeline:
//! 1. Load the JSON AST into a fresh arena
//! 2. Print to text
//! 3. Map the output path
//! 4. Write output files

use flowts_ast::Program;
use flowts_core::{AstArena, StringInterner};
use flowts_loader::{LoadError, Loader};
use flowts_options::{FlowTsOptions, PrintConfig, DEFAULT_OUT_EXTENSION};
use flowts_printer::Printer;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Suffixes stripped from an input file name, outermost first, before the
/// output extension is appended.
const INPUT_SUFFIXES: [&str; 3] = [".json", ".flow", ".js"];

#[derive(Debug, Error)]
pub enum EmitError {
    #[error("{file}: {source}")]
    Load {
        file: String,
        #[source]
        source: LoadError,
    },
    #[error("cannot read '{path}': {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

impl EmitError {
    pub fn load_error(&self) -> Option<&LoadError> {
        match self {
            EmitError::Load { source, .. } => Some(source),
            EmitError::Read { .. } => None,
        }
    }
}

/// The emitter produces TypeScript files from Flow ASTs.
#[derive(Debug, Clone)]
pub struct Emitter {
    /// Emit `export` on every type alias.
    pub force_export: bool,
    pub print_config: PrintConfig,
    /// Output directory override.
    pub out_dir: Option<PathBuf>,
    pub out_extension: String,
}

/// The result of emitting one input.
#[derive(Debug, Clone)]
pub struct EmitResult {
    /// The printed TypeScript text.
    pub ts_content: String,
    pub output_file: OutputFile,
}

/// A file produced by the emitter.
#[derive(Debug, Clone)]
pub struct OutputFile {
    pub path: PathBuf,
    pub text: String,
}

impl Emitter {
    pub fn new() -> Self {
        Self {
            force_export: false,
            print_config: PrintConfig::default(),
            out_dir: None,
            out_extension: DEFAULT_OUT_EXTENSION.to_string(),
        }
    }

    pub fn from_options(options: &FlowTsOptions) -> Self {
        Self {
            force_export: options.force_export(),
            print_config: options.print_config(),
            out_dir: options.out_dir.as_ref().map(PathBuf::from),
            out_extension: options.out_extension().to_string(),
        }
    }

    /// Print an already loaded program.
    pub fn emit_program(&self, program: &Program<'_>, interner: &StringInterner) -> String {
        Printer::new(interner, self.print_config).print_program(program, self.force_export)
    }

    /// Load `json` (the contents of `file_name`) and print it. Nothing is
    /// printed unless the whole document loads.
    pub fn emit_json(&self, file_name: &str, json: &str, interner: &StringInterner) -> Result<EmitResult, EmitError> {
        let arena = AstArena::new();
        let loader = Loader::new(&arena, interner);
        let program = loader.load_program_str(json).map_err(|source| EmitError::Load {
            file: file_name.to_string(),
            source,
        })?;
        let ts_content = self.emit_program(&program, interner);

        let path = self.get_output_path(Path::new(file_name));
        tracing::debug!(input = file_name, output = %path.display(), bytes = ts_content.len(), "emitted");
        Ok(EmitResult {
            output_file: OutputFile {
                path,
                text: ts_content.clone(),
            },
            ts_content,
        })
    }

    /// Read an interchange file from disk and emit it.
    pub fn emit_file(&self, path: &Path, interner: &StringInterner) -> Result<EmitResult, EmitError> {
        let file_name = path.to_string_lossy();
        let json = std::fs::read_to_string(path).map_err(|source| EmitError::Read {
            path: file_name.to_string(),
            source,
        })?;
        self.emit_json(&file_name, &json, interner)
    }

    /// Write output files to disk.
    pub fn write_output_files(&self, result: &EmitResult) -> std::io::Result<()> {
        let file = &result.output_file;
        if let Some(parent) = file.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&file.path, &file.text)
    }

    fn get_output_path(&self, source: &Path) -> PathBuf {
        let file_name = source.file_name().unwrap_or_default().to_string_lossy();
        let mut stem: &str = &file_name;
        for suffix in INPUT_SUFFIXES {
            if let Some(rest) = stem.strip_suffix(suffix) {
                if !rest.is_empty() {
                    stem = rest;
                }
            }
        }
        let base_dir = if let Some(ref out_dir) = self.out_dir {
            out_dir.clone()
        } else {
            source.parent().unwrap_or_else(|| Path::new(".")).to_path_buf()
        };
        base_dir.join(format!("{}{}", stem, self.out_extension))
    }
}

impl Default for Emitter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_emitter_creation() {
        let emitter = Emitter::new();
        assert!(!emitter.force_export);
        assert!(!emitter.print_config.use_react_null);
        assert_eq!(emitter.out_extension, ".ts");
    }

    #[test]
    fn test_from_options() {
        let options = FlowTsOptions {
            use_react_null: Some(true),
            force_export: Some(true),
            out_dir: Some("lib".to_string()),
            out_extension: None,
        };
        let emitter = Emitter::from_options(&options);
        assert!(emitter.force_export);
        assert!(emitter.print_config.use_react_null);
        assert_eq!(emitter.out_dir, Some(PathBuf::from("lib")));
    }

    #[test]
    fn test_output_path() {
        let emitter = Emitter::new();
        let path = emitter.get_output_path(Path::new("src/NativeModule.js.json"));
        assert_eq!(path, PathBuf::from("src/NativeModule.ts"));
    }

    #[test]
    fn test_output_path_strips_flow_suffix() {
        let emitter = Emitter::new();
        let path = emitter.get_output_path(Path::new("specs/Spec.flow.json"));
        assert_eq!(path, PathBuf::from("specs/Spec.ts"));
    }

    #[test]
    fn test_output_path_with_outdir() {
        let mut emitter = Emitter::new();
        emitter.out_dir = Some(PathBuf::from("dist"));
        emitter.out_extension = ".d.ts".to_string();
        let path = emitter.get_output_path(Path::new("src/foo.json"));
        assert_eq!(path, PathBuf::from("dist/foo.d.ts"));
    }

    #[test]
    fn test_output_path_keeps_bare_suffix_name() {
        let emitter = Emitter::new();
        let path = emitter.get_output_path(Path::new(".json"));
        assert_eq!(path, PathBuf::from(".json.ts"));
    }
}
