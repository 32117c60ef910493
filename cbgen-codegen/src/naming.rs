//! Symbol derivation for CBObject subtypes.

/// Prefix shared by every cbitcoin symbol.
pub const PREFIX: &str = "CB";

/// Short name of the base object type.
pub const BASE_SHORT_NAME: &str = "Object";

/// Every identifier derived from one short name.
///
/// Derivation is plain concatenation. Only the include guard is uppercased;
/// all other symbols keep the short name's casing exactly as typed.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ObjectSymbols {
    /// The short name as supplied, e.g. `Widget`.
    pub short_name: String,
    /// Structure type, e.g. `CBWidget`.
    pub type_name: String,
    /// Constructor, e.g. `CBNewWidget`.
    pub constructor: String,
    /// Unchecked narrowing accessor, e.g. `CBGetWidget`.
    pub getter: String,
    /// In-place initialiser, e.g. `CBInitWidget`.
    pub init: String,
    /// Destructor, e.g. `CBFreeWidget`.
    pub free: String,
    /// Include guard token, e.g. `CBWIDGETH`.
    pub guard: String,
    /// File and directory base name, e.g. `CBWidget`.
    pub file_base: String,
}

impl ObjectSymbols {
    /// Derive the symbol set for `short_name`. Never fails and never inspects
    /// the name; see [`validate_short_name`] for the optional check.
    pub fn derive(short_name: &str) -> Self {
        Self {
            short_name: short_name.to_string(),
            type_name: format!("{PREFIX}{short_name}"),
            constructor: format!("{PREFIX}New{short_name}"),
            getter: format!("{PREFIX}Get{short_name}"),
            init: format!("{PREFIX}Init{short_name}"),
            free: format!("{PREFIX}Free{short_name}"),
            guard: format!("{PREFIX}{}H", short_name.to_uppercase()),
            file_base: format!("{PREFIX}{short_name}"),
        }
    }

    /// Symbols of `CBObject` itself, which every generated type embeds.
    pub fn base() -> Self {
        Self::derive(BASE_SHORT_NAME)
    }

    /// Name of the interface file, e.g. `CBWidget.h`.
    pub fn header_file(&self) -> String {
        format!("{}.h", self.file_base)
    }

    /// Name of the implementation file, e.g. `CBWidget.c`.
    pub fn source_file(&self) -> String {
        format!("{}.c", self.file_base)
    }
}

/// Why a short name cannot be spliced into C identifiers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NameProblem {
    Empty,
    InvalidChar { ch: char, index: usize },
}

impl std::fmt::Display for NameProblem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NameProblem::Empty => write!(f, "the name is empty"),
            NameProblem::InvalidChar { ch, index } => {
                write!(f, "'{}' at position {} is not allowed in a C identifier", ch, index)
            }
        }
    }
}

/// Check that `short_name` is a valid identifier fragment.
///
/// Every symbol is `CB...` followed by the short name, so digits are allowed
/// in the first position.
pub fn validate_short_name(short_name: &str) -> Result<(), NameProblem> {
    if short_name.is_empty() {
        return Err(NameProblem::Empty);
    }
    match short_name
        .chars()
        .enumerate()
        .find(|(_, c)| !(c.is_ascii_alphanumeric() || *c == '_'))
    {
        Some((index, ch)) => Err(NameProblem::InvalidChar { ch, index }),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_derive_widget() {
        let s = ObjectSymbols::derive("Widget");
        assert_eq!(s.type_name, "CBWidget");
        assert_eq!(s.constructor, "CBNewWidget");
        assert_eq!(s.getter, "CBGetWidget");
        assert_eq!(s.init, "CBInitWidget");
        assert_eq!(s.free, "CBFreeWidget");
        assert_eq!(s.guard, "CBWIDGETH");
        assert_eq!(s.file_base, "CBWidget");
        assert_eq!(s.header_file(), "CBWidget.h");
        assert_eq!(s.source_file(), "CBWidget.c");
    }

    #[test]
    fn test_only_guard_is_uppercased() {
        let s = ObjectSymbols::derive("chainDescriptor");
        assert_eq!(s.type_name, "CBchainDescriptor");
        assert_eq!(s.constructor, "CBNewchainDescriptor");
        assert_eq!(s.free, "CBFreechainDescriptor");
        assert_eq!(s.guard, "CBCHAINDESCRIPTORH");
    }

    #[test]
    fn test_derive_is_deterministic() {
        for name in ["Block", "VersionChecksumBytes", "x1", "A_b"] {
            assert_eq!(ObjectSymbols::derive(name), ObjectSymbols::derive(name));
        }
    }

    #[test]
    fn test_distinct_names_give_distinct_symbols() {
        let a = ObjectSymbols::derive("Block");
        let b = ObjectSymbols::derive("BlockHeader");
        assert_ne!(a.type_name, b.type_name);
        assert_ne!(a.guard, b.guard);
    }

    #[test]
    fn test_base_symbols() {
        let base = ObjectSymbols::base();
        assert_eq!(base.type_name, "CBObject");
        assert_eq!(base.getter, "CBGetObject");
        assert_eq!(base.init, "CBInitObject");
        assert_eq!(base.free, "CBFreeObject");
        assert_eq!(base.header_file(), "CBObject.h");
    }

    #[test]
    fn test_derive_does_not_validate() {
        let s = ObjectSymbols::derive("my widget");
        assert_eq!(s.type_name, "CBmy widget");
    }

    #[test]
    fn test_validate_short_name() {
        assert!(validate_short_name("Widget").is_ok());
        assert!(validate_short_name("2D").is_ok());
        assert!(validate_short_name("Script_v2").is_ok());
        assert_eq!(validate_short_name(""), Err(NameProblem::Empty));
        assert_eq!(
            validate_short_name("my-widget"),
            Err(NameProblem::InvalidChar { ch: '-', index: 2 })
        );
        assert!(validate_short_name("Wid get").is_err());
        assert!(validate_short_name("Wïdget").is_err());
    }
}
