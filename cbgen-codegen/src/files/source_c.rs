use std::path::{Path, PathBuf};

use cbgen_core::GeneratedFile;

use super::{LicenseHeader, Structure};
use crate::{CodeBuilder, ConstructorMode};

/// The implementation artifact, `CB<Name>.c`.
pub struct SourceFile<'a> {
    structure: &'a Structure,
}

impl<'a> SourceFile<'a> {
    pub fn new(structure: &'a Structure) -> Self {
        Self { structure }
    }

    /// Allocates, installs the destructor in the base object, then initialises.
    fn emit_constructor(&self, b: CodeBuilder) -> CodeBuilder {
        let sym = &self.structure.symbols;
        let ty = sym.type_name.as_str();
        let set_free = format!("{}(self)->free = {};", self.structure.base.getter, sym.free);
        let checked = self.structure.constructor == ConstructorMode::Checked;

        b.block_with_close(&format!("{ty} * {}(){{", sym.constructor), "}", |b| {
            let b = b
                .line(&format!("{ty} * self = malloc(sizeof(*self));"))
                .when(checked, |b| {
                    b.line("if (!self)").indent().line("return NULL;").dedent()
                })
                .line(&set_free);
            let b = if checked {
                b.block_with_close(&format!("if (!{}(self)){{", sym.init), "}", |b| {
                    b.line("free(self);").line("return NULL;")
                })
            } else {
                b.line(&format!("{}(self);", sym.init))
            };
            b.line("return self;")
        })
    }

    fn emit_getter(&self, b: CodeBuilder) -> CodeBuilder {
        let sym = &self.structure.symbols;
        b.block_with_close(
            &format!("{} * {}(void * self){{", sym.type_name, sym.getter),
            "}",
            |b| b.line("return self;"),
        )
    }

    fn emit_initialiser(&self, b: CodeBuilder) -> CodeBuilder {
        let sym = &self.structure.symbols;
        let base = &self.structure.base;
        b.block_with_close(
            &format!("bool {}({} * self){{", sym.init, sym.type_name),
            "}",
            |b| {
                b.line(&format!("if (!{}({}(self)))", base.init, base.getter))
                    .indent()
                    .line("return false;")
                    .dedent()
                    .line("return true;")
            },
        )
    }

    fn emit_destructor(&self, b: CodeBuilder) -> CodeBuilder {
        let sym = &self.structure.symbols;
        let base = &self.structure.base;
        b.block_with_close(&format!("void {}(void * self){{", sym.free), "}", |b| {
            b.line(&format!("{}(self);", base.free))
        })
    }
}

impl GeneratedFile for SourceFile<'_> {
    fn path(&self, base: &Path) -> PathBuf {
        base.join(self.structure.symbols.source_file())
    }

    fn render(&self) -> String {
        let s = self.structure;
        let file_name = s.symbols.source_file();

        let b = LicenseHeader::new(&file_name, s)
            .emit(CodeBuilder::c())
            .blank()
            .section("SEE HEADER FILE FOR DOCUMENTATION ")
            .line(&format!("#include \"{}\"", s.symbols.header_file()))
            .blank()
            .section("Constructor");
        let b = self.emit_constructor(b).blank().section("Object Getter");
        let b = self.emit_getter(b).blank().section("Initialiser");
        let b = self.emit_initialiser(b).blank().section("Destructor");
        self.emit_destructor(b).blank().section("Functions").build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::files::tests::widget;

    #[test]
    fn test_path() {
        let structure = widget();
        assert_eq!(
            SourceFile::new(&structure).path(Path::new("out")),
            PathBuf::from("out/CBWidget.c")
        );
    }

    #[test]
    fn test_includes_own_header() {
        let structure = widget();
        let text = SourceFile::new(&structure).render();
        assert!(text.contains("//  SEE HEADER FILE FOR DOCUMENTATION \n\n#include \"CBWidget.h\"\n"));
        assert!(text.ends_with("//  Functions\n\n"));
    }

    #[test]
    fn test_legacy_constructor() {
        let structure = widget();
        let text = SourceFile::new(&structure).render();
        assert!(text.contains(
            "CBWidget * CBNewWidget(){\n\
             \tCBWidget * self = malloc(sizeof(*self));\n\
             \tCBGetObject(self)->free = CBFreeWidget;\n\
             \tCBInitWidget(self);\n\
             \treturn self;\n\
             }\n"
        ));
    }

    #[test]
    fn test_checked_constructor() {
        let mut structure = widget();
        structure.constructor = ConstructorMode::Checked;
        let text = SourceFile::new(&structure).render();
        assert!(text.contains(
            "CBWidget * CBNewWidget(){\n\
             \tCBWidget * self = malloc(sizeof(*self));\n\
             \tif (!self)\n\
             \t\treturn NULL;\n\
             \tCBGetObject(self)->free = CBFreeWidget;\n\
             \tif (!CBInitWidget(self)){\n\
             \t\tfree(self);\n\
             \t\treturn NULL;\n\
             \t}\n\
             \treturn self;\n\
             }\n"
        ));
    }

    #[test]
    fn test_getter_initialiser_destructor() {
        let structure = widget();
        let text = SourceFile::new(&structure).render();
        assert!(text.contains("CBWidget * CBGetWidget(void * self){\n\treturn self;\n}\n"));
        assert!(text.contains(
            "bool CBInitWidget(CBWidget * self){\n\tif (!CBInitObject(CBGetObject(self)))\n\t\treturn false;\n\treturn true;\n}\n"
        ));
        assert!(text.contains("void CBFreeWidget(void * self){\n\tCBFreeObject(self);\n}\n"));
    }
}
