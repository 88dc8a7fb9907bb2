//! Static format registry
//!
//! The descriptor table is built at compile time; the lowercase name index
//! used by [`resolve`] is built once on first lookup and only read afterwards.

use std::collections::HashMap;
use std::sync::OnceLock;

use super::descriptor::{Casing, FormatDescriptor, FormatId};
use crate::error::{Error, Result};

/// Every format, indexed by `FormatId as usize`
static FORMATS: [FormatDescriptor; 14] = [
    FormatDescriptor {
        id: FormatId::Camel,
        delimiter: "",
        casing: Casing::LowerFirst,
        aliases: &["camel", "camelcase", "camel_case", "lower_camel", "lowerCamel"],
        description: "First word lowercase, later words capitalized, no separators",
        example: "myNameIsBond",
        emoji: "🐪",
    },
    FormatDescriptor {
        id: FormatId::Pascal,
        delimiter: "",
        casing: Casing::Capitalize,
        aliases: &[
            "pascal",
            "pascalcase",
            "pascal_case",
            "upper_camel",
            "upperCamel",
            "studly",
        ],
        description: "All words capitalized, no separators",
        example: "MyNameIsBond",
        emoji: "👨‍🏫",
    },
    FormatDescriptor {
        id: FormatId::Snake,
        delimiter: "_",
        casing: Casing::Lower,
        aliases: &["snake", "snake_case", "underscore", "lower_snake"],
        description: "Lowercase words separated by underscores",
        example: "my_name_is_bond",
        emoji: "🐍",
    },
    FormatDescriptor {
        id: FormatId::Kebab,
        delimiter: "-",
        casing: Casing::Lower,
        aliases: &["kebab", "kebab_case", "kebab-case", "dash", "hyphen", "lisp"],
        description: "Lowercase words separated by hyphens",
        example: "my-name-is-bond",
        emoji: "🥙",
    },
    FormatDescriptor {
        id: FormatId::Macro,
        delimiter: "_",
        casing: Casing::Upper,
        aliases: &[
            "macro",
            "macro_case",
            "screamed_snake",
            "screaming_snake",
            "upper_snake",
            "constant",
        ],
        description: "Uppercase words separated by underscores",
        example: "MY_NAME_IS_BOND",
        emoji: "🔧",
    },
    FormatDescriptor {
        id: FormatId::Train,
        delimiter: "-",
        casing: Casing::Capitalize,
        aliases: &["train", "train_case", "train-case", "pascal_kebab", "pascal-kebab"],
        description: "Capitalized words separated by hyphens",
        example: "My-Name-Is-Bond",
        emoji: "🚂",
    },
    FormatDescriptor {
        id: FormatId::Dot,
        delimiter: ".",
        casing: Casing::Lower,
        aliases: &["dot", "dot_case", "dot.case", "period"],
        description: "Lowercase words separated by dots",
        example: "my.name.is.bond",
        emoji: "⚙️",
    },
    FormatDescriptor {
        id: FormatId::Lower,
        delimiter: " ",
        casing: Casing::Lower,
        aliases: &["lower", "lower_case", "space", "space_case", "lower_space"],
        description: "Lowercase words separated by spaces",
        example: "my name is bond",
        emoji: "🔡",
    },
    FormatDescriptor {
        id: FormatId::Upper,
        delimiter: " ",
        casing: Casing::Upper,
        aliases: &["upper", "upper_case", "upper_space"],
        description: "Uppercase words separated by spaces",
        example: "MY NAME IS BOND",
        emoji: "🔠",
    },
    FormatDescriptor {
        id: FormatId::Title,
        delimiter: " ",
        casing: Casing::Capitalize,
        aliases: &["title", "title_case", "start_case", "header"],
        description: "Capitalized words separated by spaces",
        example: "My Name Is Bond",
        emoji: "📰",
    },
    FormatDescriptor {
        id: FormatId::Path,
        delimiter: "/",
        casing: Casing::Lower,
        aliases: &["path", "path_case", "path/case", "slash", "directory"],
        description: "Lowercase words separated by forward slashes",
        example: "my/name/is/bond",
        emoji: "📁",
    },
    FormatDescriptor {
        id: FormatId::Ada,
        delimiter: "_",
        casing: Casing::Capitalize,
        aliases: &["ada", "ada_case", "pascal_snake", "upper_snake_case"],
        description: "Capitalized words separated by underscores",
        example: "My_Name_Is_Bond",
        emoji: "👩‍🏫",
    },
    FormatDescriptor {
        id: FormatId::Cobol,
        delimiter: "-",
        casing: Casing::Upper,
        aliases: &["cobol", "cobol_case", "upper_kebab", "screaming_kebab"],
        description: "Uppercase words separated by hyphens",
        example: "MY-NAME-IS-BOND",
        emoji: "🏦",
    },
    FormatDescriptor {
        id: FormatId::Sentence,
        delimiter: " ",
        casing: Casing::Sentence,
        aliases: &["sentence", "sentence_case", "first_upper"],
        description: "First word capitalized, rest lowercase, separated by spaces",
        example: "My name is bond",
        emoji: "✍️",
    },
];

/// Lowercased id/alias -> format
static NAME_INDEX: OnceLock<HashMap<String, FormatId>> = OnceLock::new();

fn name_index() -> &'static HashMap<String, FormatId> {
    NAME_INDEX.get_or_init(|| {
        let mut index = HashMap::new();

        // Canonical ids win over any alias spelled the same way
        for descriptor in &FORMATS {
            index.insert(descriptor.name().to_string(), descriptor.id);
        }
        for descriptor in &FORMATS {
            for alias in descriptor.aliases {
                index.entry(alias.to_lowercase()).or_insert(descriptor.id);
            }
        }

        index
    })
}

/// The descriptor for a known id
pub fn descriptor(id: FormatId) -> &'static FormatDescriptor {
    &FORMATS[id as usize]
}

/// Every descriptor in declaration order
pub fn all() -> &'static [FormatDescriptor] {
    &FORMATS
}

/// Resolve a user-supplied name to its format
///
/// Matching ignores case and surrounding whitespace and checks canonical ids
/// before aliases.
pub fn resolve(name: &str) -> Result<&'static FormatDescriptor> {
    let key = name.trim().to_lowercase();
    match name_index().get(&key) {
        Some(&id) => {
            log::debug!("resolved format name {name:?} to {id}");
            Ok(descriptor(id))
        }
        None => {
            log::debug!("no format registered under {name:?}");
            Err(Error::unsupported(name))
        }
    }
}

/// True iff [`resolve`] would succeed
pub fn is_supported(name: &str) -> bool {
    name_index().contains_key(&name.trim().to_lowercase())
}

/// Canonical ids in declaration order
pub fn canonical_ids() -> Vec<&'static str> {
    FORMATS.iter().map(FormatDescriptor::name).collect()
}

/// Every alias of every format, de-duplicated, in declaration order
pub fn supported_aliases() -> Vec<&'static str> {
    let mut aliases: Vec<&'static str> = Vec::new();
    for alias in FORMATS.iter().flat_map(|d| d.aliases.iter().copied()) {
        if !aliases.contains(&alias) {
            aliases.push(alias);
        }
    }
    aliases
}
