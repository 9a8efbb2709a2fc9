use ahash::{HashSet, HashSetExt};
use compact_str::{CompactString, ToCompactString};

use crate::{error::{ErrorKind, Result}, log, metadata::{manifest::{DepSection, Manifest}, manifest_path, read_manifest}, CliOpts};

#[derive(Debug, PartialEq)]
pub enum Listing {
    NoManifest,
    Names(Vec<CompactString>),
}

pub async fn list_dependency_names(opts: &CliOpts) -> Result<Listing> {
    let path = manifest_path(&opts.manifest).await;

    if opts.verbose {
        log(format!("reading {}", path.display()));
    }

    let data = match read_manifest(&path).await {
        Ok(v) => v,
        Err(e) => {
            // unreadable or missing manifests are not an error, there is just nothing to list
            if opts.verbose {
                log(format!("unable to read {}: {e}", path.display()));
            }

            return Ok(Listing::NoManifest)
        }
    };

    let manifest: Manifest = data.parse()?;

    dependency_names(opts, &manifest).map(Listing::Names)
}

fn dependency_names(opts: &CliOpts, manifest: &Manifest) -> Result<Vec<CompactString>> {
    let mut names = Vec::new();
    let mut seen = HashSet::<CompactString>::new();

    for section in opts.sections() {
        let Some(deps) = manifest.section(section)? else {
            if section == DepSection::Dependencies && !opts.missing_as_empty {
                return Err(ErrorKind::MissingDependencies(section))
            }

            continue
        };

        if opts.verbose {
            log(format!("{section}: {} entries", deps.len()));
        }

        for package in deps.keys() {
            let package = package.to_compact_string();

            if seen.insert(package.clone()) {
                names.push(package);
            }
        }
    }

    Ok(names)
}
