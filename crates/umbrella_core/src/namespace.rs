use log::trace;
use std::{
    collections::BTreeSet,
    iter,
    path::{Component, Path},
};

/// Derives the dotted namespace of a root-relative file path.
///
/// The file name is dropped and the remaining directories are joined with
/// dots, so `Widgets/Menu/Item.js` becomes `Widgets.Menu`. Files directly
/// under the root, and paths escaping it, have no namespace.
pub fn namespace_for(relative: &Path) -> Option<String> {
    let mut segments = Vec::new();
    for component in relative.components() {
        match component {
            Component::Normal(s) => segments.push(s.to_string_lossy().into_owned()),
            Component::CurDir => {}
            _ => return None,
        }
    }
    segments.pop()?;
    if segments.is_empty() { None } else { Some(segments.join(".")) }
}

/// Statement pre-declaring a namespace object in the bundle.
///
/// Top-level names become `var` declarations; nested names are property
/// assignments on their (already declared) parent.
pub fn declaration(name: &str) -> String {
    if name.contains('.') {
        format!("{} = new Object();", name)
    } else {
        format!("var {} = new Object();", name)
    }
}

/// Every namespace seen during a run, closed under prefixes and kept sorted.
#[derive(Debug, Default, Clone)]
pub struct NamespaceRegistry {
    names: BTreeSet<String>,
}

impl NamespaceRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers the namespace of a root-relative path and each of its
    /// ancestor prefixes. Returns how many names were not yet present.
    pub fn register(&mut self, relative: &Path) -> usize {
        let Some(namespace) = namespace_for(relative) else {
            trace!("No namespace for {}", relative.display());
            return 0;
        };

        let prefixes = namespace
            .match_indices('.')
            .map(|(idx, _)| &namespace[..idx])
            .chain(iter::once(namespace.as_str()));

        let mut added = 0;
        for prefix in prefixes {
            if self.names.insert(prefix.to_string()) {
                trace!("Registered namespace: {}", prefix);
                added += 1;
            }
        }
        added
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Names in lexicographic order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    pub fn declarations(&self) -> impl Iterator<Item = String> + '_ {
        self.iter().map(declaration)
    }
}
