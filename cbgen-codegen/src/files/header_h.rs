use std::path::{Path, PathBuf};

use cbgen_core::GeneratedFile;

use super::{LicenseHeader, Structure};
use crate::{CodeBuilder, ConstructorMode};

/// The interface artifact, `CB<Name>.h`.
pub struct HeaderFile<'a> {
    structure: &'a Structure,
}

impl<'a> HeaderFile<'a> {
    pub fn new(structure: &'a Structure) -> Self {
        Self { structure }
    }

    fn emit_struct(&self, b: CodeBuilder) -> CodeBuilder {
        let sym = &self.structure.symbols;
        let base = &self.structure.base.type_name;

        // The base must stay the first member so a pointer to the structure
        // can be used as a pointer to CBObject.
        b.doxygen(
            [format!(
                "@brief Structure for {} objects. @see {}",
                sym.type_name,
                sym.header_file()
            )],
            "*/",
        )
        .block_with_close("typedef struct{", &format!("}} {};", sym.type_name), |b| {
            b.line(&format!("{base} base; /**< {base} base structure */"))
        })
    }

    fn emit_declarations(&self, b: CodeBuilder) -> CodeBuilder {
        let sym = &self.structure.symbols;
        let ty = sym.type_name.as_str();

        let returns_new = match self.structure.constructor {
            ConstructorMode::Legacy => format!("@returns A new {ty} object."),
            ConstructorMode::Checked => format!("@returns A new {ty} object or NULL on failure."),
        };

        b.doxygen([format!("@brief Creates a new {ty} object."), returns_new], " */")
            .line(&format!("{ty} * {}(void);", sym.constructor))
            .blank()
            .doxygen(
                [
                    format!("@brief Gets a {ty} from another object. Use this to avoid casts."),
                    format!("@param self The object to obtain the {ty} from."),
                    format!("@returns The {ty} object."),
                ],
                " */",
            )
            .line(&format!("{ty} * {}(void * self);", sym.getter))
            .blank()
            .doxygen(
                [
                    format!("@brief Initialises a {ty} object"),
                    format!("@param self The {ty} object to initialise"),
                    "@returns true on success, false on failure.".to_string(),
                ],
                " */",
            )
            .line(&format!("bool {}({ty} * self);", sym.init))
            .blank()
            .doxygen(
                [
                    format!("@brief Frees a {ty} object."),
                    format!("@param self The {ty} object to free."),
                ],
                " */",
            )
            .line(&format!("void {}(void * self);", sym.free))
    }
}

impl GeneratedFile for HeaderFile<'_> {
    fn path(&self, base: &Path) -> PathBuf {
        base.join(self.structure.symbols.header_file())
    }

    fn render(&self) -> String {
        let s = self.structure;
        let sym = &s.symbols;
        let file_name = sym.header_file();

        let b = LicenseHeader::new(&file_name, s).emit(CodeBuilder::c()).blank();
        let b = b
            .doxygen(
                [
                    "@file".to_string(),
                    format!("@brief {} Inherits {}", s.description, s.base.type_name),
                ],
                "*/",
            )
            .blank()
            .line(&format!("#ifndef {}", sym.guard))
            .line(&format!("#define {}", sym.guard))
            .blank()
            .section("Includes")
            .line(&format!("#include \"{}\"", s.base.header_file()))
            .blank();
        let b = self.emit_struct(b).blank();
        self.emit_declarations(b)
            .line(" ")
            .section("Functions")
            .raw("#endif")
            .build()
    }
}
