//! Identifier helpers. Contains [derive] that creates names of generated
//! functions from input file paths and [derive_unique] that does the same for
//! a whole run, rejecting collisions.

use anyhow::{Context, Error, anyhow, bail, ensure};
use proc_macro2::Span;
use std::{
    borrow::Borrow,
    collections::HashSet,
    fmt,
    ops::Deref,
    path::{Path, PathBuf},
};

/// Keywords reserved by newer editions that [syn] still parses as plain
/// identifiers.
pub const RESERVED: &[&str] = &["gen"];

/// [Identifier] is a validated name of an item in generated source, eg. a
/// function returning file content or the wrapping module.
///
/// Custom type is used to enforce that every value is accepted by the Rust
/// parser as an identifier: not empty, not starting with a digit, not a
/// reserved keyword and built only from identifier characters.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct Identifier {
    inner: String,
}
impl Identifier {
    /// Validates `inner` and wraps it into [self].
    ///
    /// # Examples
    ///
    /// ```
    /// # use embedgen_packer::identifier::Identifier;
    /// #
    /// assert!(Identifier::validate("logo_png".to_owned()).is_ok());
    /// assert!(Identifier::validate("2x_logo".to_owned()).is_err());
    /// assert!(Identifier::validate("match".to_owned()).is_err());
    /// assert!(Identifier::validate("gen".to_owned()).is_err());
    /// ```
    pub fn validate(inner: String) -> Result<Self, Error> {
        ensure!(!inner.is_empty(), "identifier must not be empty");

        if inner.starts_with(|c: char| c.is_ascii_digit()) {
            bail!("identifier {:?} must not start with a digit", inner);
        }

        ensure!(
            !RESERVED.contains(&inner.as_str()),
            "identifier {:?} is a reserved keyword",
            inner
        );

        syn::parse_str::<syn::Ident>(&inner).map_err(|_| {
            anyhow!(
                "{:?} is not a valid identifier (reserved keyword or disallowed character)",
                inner
            )
        })?;

        Ok(Self { inner })
    }

    /// Converts into [syn::Ident] for use in generated tokens.
    pub fn to_ident(&self) -> syn::Ident {
        // validated in constructor, so this cannot panic
        syn::Ident::new(&self.inner, Span::call_site())
    }
}

impl Deref for Identifier {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}
impl Borrow<str> for Identifier {
    fn borrow(&self) -> &str {
        self.inner.as_str()
    }
}
impl fmt::Display for Identifier {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.write_str(&self.inner)
    }
}

/// Options for [derive] and [sanitize]. Shared by all inputs of a single run.
///
/// If not sure what to set here, use [Default] (strips nothing).
#[derive(Default, Clone, Debug)]
pub struct DeriveOptions {
    /// Removed from the beginning of the path, if present.
    pub prefix: String,
    /// Removed from the end of the path, if present.
    pub suffix: String,
}

/// Turns `path` into a lowercase, underscore delimited name.
///
/// `prefix` and `suffix` from `options` are stripped (if present), then every
/// ascii character other than a letter or a digit becomes `_`, the result is
/// lowercased and surrounding `_` are trimmed. Non-ascii characters are kept.
///
/// The result is not validated, it may be empty or start with a digit. Use
/// [derive] to get an [Identifier].
///
/// # Examples
///
/// ```
/// # use embedgen_packer::identifier::{sanitize, DeriveOptions};
/// #
/// let options = DeriveOptions {
///     prefix: "assets/".to_owned(),
///     suffix: ".png".to_owned(),
/// };
/// assert_eq!(sanitize("assets/icons/Save-As.png", &options), "icons_save_as");
/// ```
pub fn sanitize(
    path: &str,
    options: &DeriveOptions,
) -> String {
    let name = path.strip_prefix(options.prefix.as_str()).unwrap_or(path);
    let name = name.strip_suffix(options.suffix.as_str()).unwrap_or(name);

    let name = name
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || !c.is_ascii() {
                c
            } else {
                '_'
            }
        })
        .collect::<String>()
        .to_lowercase();

    name.trim_matches('_').to_owned()
}

/// Creates [Identifier] from file `path`, see [sanitize] for the rules.
///
/// Fails if the path is not valid utf-8 or if the sanitized name is not a
/// valid identifier (ex. `2024.csv` or `type.rs` with `.rs` suffix).
pub fn derive(
    path: &Path,
    options: &DeriveOptions,
) -> Result<Identifier, Error> {
    let path_str = path
        .to_str()
        .ok_or_else(|| anyhow!("cannot convert path to string"))
        .with_context(|| path.to_string_lossy().into_owned())?;

    let identifier = Identifier::validate(sanitize(path_str, options))
        .with_context(|| format!("derive identifier from {}", path_str))?;

    Ok(identifier)
}

/// Runs [derive] for every path, in order, requiring all results to be
/// pairwise distinct.
///
/// Fails on the first path that derives an already seen identifier, the error
/// names the identifier. Does not touch the filesystem.
pub fn derive_unique(
    paths: &[PathBuf],
    options: &DeriveOptions,
) -> Result<Vec<Identifier>, Error> {
    let mut identifiers_seen = HashSet::<Identifier>::with_capacity(paths.len());

    paths
        .iter()
        .map(|path| {
            let identifier = derive(path, options)?;

            ensure!(
                identifiers_seen.insert(identifier.clone()),
                "duplicate identifier {:?} (derived from {})",
                &*identifier,
                path.display()
            );

            Ok(identifier)
        })
        .collect::<Result<Vec<_>, Error>>()
}
