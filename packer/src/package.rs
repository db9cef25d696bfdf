//! Package name helpers. Contains [PackageResolver] trait and its
//! [DirectoryPackageResolver] implementation, used when package name is not
//! given explicitly.

use anyhow::{Context, Error, anyhow};
use serde::Deserialize;
use std::{
    fs, io,
    path::{Path, PathBuf},
};

/// Determines package (module) name of the generated document from the
/// directory it will be written to.
pub trait PackageResolver {
    /// Returns package name for `directory_path`. Empty path means current
    /// directory.
    fn resolve_package_name(
        &self,
        directory_path: &Path,
    ) -> Result<String, Error>;
}

/// Resolves package name from the directory layout.
///
/// For crate source root (`src` directory next to `Cargo.toml`) the crate
/// name is used (with `-` replaced by `_`), for any other directory its own
/// name is used.
///
/// Returned name is not validated, it may be not a valid identifier.
///
/// # Examples
///
/// ```
/// # use anyhow::Error;
/// # use std::path::PathBuf;
/// # use embedgen_packer::package::{DirectoryPackageResolver, PackageResolver};
/// #
/// # fn main() -> Result<(), Error> {
/// #
/// let src = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("src");
/// assert_eq!(
///     DirectoryPackageResolver.resolve_package_name(&src)?,
///     "embedgen_packer"
/// );
/// #
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct DirectoryPackageResolver;
impl PackageResolver for DirectoryPackageResolver {
    fn resolve_package_name(
        &self,
        directory_path: &Path,
    ) -> Result<String, Error> {
        let directory_path = if directory_path.as_os_str().is_empty() {
            Path::new(".")
        } else {
            directory_path
        };
        let directory_path = directory_path
            .canonicalize()
            .with_context(|| directory_path.to_string_lossy().into_owned())?;

        let directory_name = directory_path
            .file_name()
            .and_then(|directory_name| directory_name.to_str())
            .ok_or_else(|| anyhow!("cannot convert directory name to string"))
            .with_context(|| directory_path.to_string_lossy().into_owned())?;

        let crate_name = match directory_path.parent() {
            Some(crate_directory_path) if directory_name == "src" => {
                crate_name_from_manifest(&crate_directory_path.join("Cargo.toml"))?
            }
            _ => None,
        };
        if let Some(crate_name) = crate_name {
            log::debug!("package name {crate_name:?} resolved from crate manifest");
            return Ok(crate_name.replace('-', "_"));
        }

        log::debug!("package name {directory_name:?} resolved from directory name");
        Ok(directory_name.to_owned())
    }
}

#[derive(Deserialize)]
struct Manifest {
    package: Option<ManifestPackage>,
}
#[derive(Deserialize)]
struct ManifestPackage {
    name: String,
}

/// Reads `[package] name` from manifest at `path`. Returns [None] if manifest
/// does not exist or is a virtual (workspace only) manifest.
fn crate_name_from_manifest(path: &Path) -> Result<Option<String>, Error> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(error) if error.kind() == io::ErrorKind::NotFound => return Ok(None),
        Err(error) => {
            return Err(Error::from(error).context(path.to_string_lossy().into_owned()));
        }
    };

    let manifest: Manifest = toml::from_str(&content)
        .with_context(|| format!("parse manifest {}", path.display()))?;

    Ok(manifest.package.map(|package| package.name))
}

/// Directory the output file will be written to, as passed to
/// [PackageResolver::resolve_package_name].
pub fn output_directory_path(output_path: &Path) -> PathBuf {
    output_path
        .parent()
        .map(Path::to_path_buf)
        .unwrap_or_default()
}

#[cfg(test)]
mod test {
    use super::{DirectoryPackageResolver, PackageResolver, output_directory_path};
    use std::{
        fs,
        path::{Path, PathBuf},
    };
    use test_case::test_case;

    #[test]
    fn plain_directory_resolves_to_its_name() {
        let root = tempfile::tempdir().unwrap();
        let directory = root.path().join("assets");
        fs::create_dir(&directory).unwrap();

        let name = DirectoryPackageResolver
            .resolve_package_name(&directory)
            .unwrap();

        assert_eq!(name, "assets");
    }

    #[test]
    fn crate_src_resolves_to_crate_name() {
        let root = tempfile::tempdir().unwrap();
        fs::write(
            root.path().join("Cargo.toml"),
            "[package]\nname = \"my-web-app\"\nversion = \"0.1.0\"\n",
        )
        .unwrap();
        let src = root.path().join("src");
        fs::create_dir(&src).unwrap();

        let name = DirectoryPackageResolver.resolve_package_name(&src).unwrap();

        assert_eq!(name, "my_web_app");
    }

    #[test]
    fn src_without_manifest_resolves_to_src() {
        let root = tempfile::tempdir().unwrap();
        let src = root.path().join("src");
        fs::create_dir(&src).unwrap();

        let name = DirectoryPackageResolver.resolve_package_name(&src).unwrap();

        assert_eq!(name, "src");
    }

    #[test]
    fn src_with_virtual_manifest_resolves_to_src() {
        let root = tempfile::tempdir().unwrap();
        fs::write(
            root.path().join("Cargo.toml"),
            "[workspace]\nmembers = [\"a\"]\n",
        )
        .unwrap();
        let src = root.path().join("src");
        fs::create_dir(&src).unwrap();

        let name = DirectoryPackageResolver.resolve_package_name(&src).unwrap();

        assert_eq!(name, "src");
    }

    #[test]
    fn broken_manifest_is_error() {
        let root = tempfile::tempdir().unwrap();
        fs::write(root.path().join("Cargo.toml"), "[package\n").unwrap();
        let src = root.path().join("src");
        fs::create_dir(&src).unwrap();

        assert!(DirectoryPackageResolver.resolve_package_name(&src).is_err());
    }

    #[test]
    fn missing_directory_is_error() {
        let root = tempfile::tempdir().unwrap();

        let result = DirectoryPackageResolver.resolve_package_name(&root.path().join("missing"));

        assert!(result.is_err());
    }

    #[test_case(Path::new("data.rs"), PathBuf::new(); "bare file name")]
    #[test_case(Path::new("src/data.rs"), PathBuf::from("src"); "relative")]
    #[test_case(Path::new("/project/src/assets/data.rs"), PathBuf::from("/project/src/assets"); "absolute")]
    fn output_directory_path_returns_expected(
        output_path: &Path,
        expected: PathBuf,
    ) {
        assert_eq!(output_directory_path(output_path), expected);
    }
}
