use std::collections::BTreeMap;
use std::env;
use std::path::{Path, PathBuf};
use std::sync::{PoisonError, RwLock};
use std::time::SystemTime;

use toml_edit::{Document, Item, Table};

/// Resolve the [`syn::Path`] under which a workspace crate is reachable
/// from the crate currently being compiled.
///
/// Derive macros emit absolute paths such as `::tm_mapper::FieldTable`.
/// Those paths are only valid if the invoking crate depends on `tm_mapper`
/// directly; a crate that only depends on the umbrella crate must see
/// `::tm_core::mapper::FieldTable` instead.
///
/// # Example
///
/// ```rust
/// # use tm_macro_utils::Manifest;
/// let p: syn::Path = Manifest::shared(|m| m.get_crate_path("tm_mapper"));
/// ```
///
/// Reading the manifest touches the file system, so a proc-macro should
/// resolve each path once per invocation and pass it around.
///
/// # Resolution rules
///
/// 1. `name` itself is a dependency: `::name`.
/// 2. `name` starts with `tm_` and one of the umbrella aliases
///    (`treemarshal`, `tm_core`, `tm`, checked in that order) is a
///    dependency: `::alias::short_name` (e.g. `tm_mapper` -> `::tm_core::mapper`).
/// 3. Repeat 1-2 for `dev-dependencies`.
/// 4. Fall back to `::name`.
///
/// A crate that expands its own derive (doctests, unit tests) should carry
/// `extern crate self as tm_mapper;` so that the fallback resolves.
#[derive(Debug)]
pub struct Manifest {
    pub manifest: Document<Box<str>>,
    pub modified_time: SystemTime,
}

const UMBRELLA_ALIASES: [&str; 3] = ["treemarshal", "tm_core", "tm"];
const WORKSPACE_PREFIX: &str = "tm_";

impl Manifest {
    #[inline(never)]
    fn manifest_path() -> PathBuf {
        let Some(dir) = env::var_os("CARGO_MANIFEST_DIR") else {
            panic!("CARGO_MANIFEST_DIR should be auto-defined by cargo.");
        };
        let path = PathBuf::from(dir).join("Cargo.toml");
        assert!(
            path.exists(),
            "Cargo manifest does not exist at path {}",
            path.display(),
        );
        path
    }

    #[inline(never)]
    fn modified_time_of(path: &Path) -> Result<SystemTime, std::io::Error> {
        std::fs::metadata(path)?.modified()
    }

    #[inline(never)]
    fn load(path: &Path) -> Document<Box<str>> {
        let text = std::fs::read_to_string(path)
            .unwrap_or_else(|_| panic!("Unable to read cargo manifest: {}", path.display()))
            .into_boxed_str();
        Document::parse(text)
            .unwrap_or_else(|_| panic!("Failed to parse cargo manifest: {}", path.display()))
    }

    #[inline]
    fn parse_path(text: &str) -> syn::Path {
        // Only ever called with crate identifiers built by this module.
        syn::parse_str(text).unwrap()
    }

    fn lookup(deps: &Table, name: &str) -> Option<syn::Path> {
        if deps.contains_key(name) {
            return Some(Self::parse_path(&format!("::{name}")));
        }

        let module = name.strip_prefix(WORKSPACE_PREFIX)?;
        UMBRELLA_ALIASES
            .iter()
            .find(|alias| deps.contains_key(alias))
            .map(|alias| Self::parse_path(&format!("::{alias}::{module}")))
    }

    /// Return the [`syn::Path`] for the package `name` as seen from the
    /// invoking crate. See the type documentation for the rules.
    #[inline(never)]
    pub fn get_crate_path(&self, name: &str) -> syn::Path {
        for section in ["dependencies", "dev-dependencies"] {
            if let Some(Item::Table(deps)) = self.manifest.get(section)
                && let Some(path) = Self::lookup(deps, name)
            {
                return path;
            }
        }

        Self::parse_path(&format!("::{name}"))
    }

    /// Run `func` against the invoking crate's [`Manifest`].
    ///
    /// Manifests are cached per path and reloaded when the file's
    /// modification time changes.
    pub fn shared<R>(func: impl FnOnce(&Self) -> R) -> R {
        static MANIFESTS: RwLock<BTreeMap<PathBuf, Manifest>> = RwLock::new(BTreeMap::new());

        let path = Self::manifest_path();
        let modified_time =
            Self::modified_time_of(&path).expect("The Cargo.toml should have a modified time.");

        {
            let cache = MANIFESTS.read().unwrap_or_else(PoisonError::into_inner);
            if let Some(cached) = cache.get(&path)
                && cached.modified_time == modified_time
            {
                return func(cached);
            }
        }

        let manifest = Manifest {
            manifest: Self::load(&path),
            modified_time,
        };
        let result = func(&manifest);

        MANIFESTS
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(path, manifest);

        result
    }
}
