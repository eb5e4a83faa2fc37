use msm_scaffold::constants::{HEADER_ATTRIBUTION, HEADER_TITLE, META_BEGIN};
use msm_scaffold::generator::Generator;
use msm_scaffold::templating::EmbeddedStore;
use msm_scaffold::test_utils::{fixed_renderer, init_test_logging};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;
use walkdir::WalkDir;

use crate::common::{Entry, snapshot};

fn generate(target: &Path) {
    Generator::new(EmbeddedStore).renderer(fixed_renderer()).generate(target).unwrap();
}

#[test]
fn test_bundled_project_structure() {
    init_test_logging(None);
    let temp = TempDir::new().unwrap();
    generate(temp.path());

    for file in [
        "0-test-install.py",
        "1-get-example-data.py",
        "README.md",
        "analysis/gather-metadata.py",
        "analysis/gather-metadata-plot.py",
        "analysis/rmsd/rmsd.py",
        "analysis/rmsd/rmsd-plot.py",
        "analysis/landmarks/featurize.py",
        "analysis/landmarks/tica/tica.py",
        "analysis/landmarks/tica/tica-sample-coordinate-plot.py",
        "analysis/landmarks/tica/cluster/cluster.py",
        "analysis/landmarks/tica/cluster/msm/msm-1-timescales.py",
        "analysis/dihedrals/featurize-plot.py",
        "analysis/dihedrals/tica/cluster/msm/msm-2-microstate-plot.py",
    ] {
        assert!(temp.path().join(file).is_file(), "{file} missing");
    }

    // Template paths never leak into output locations.
    assert!(!temp.path().join("tica").exists());
    assert!(!temp.path().join("analysis/landmarks/tica/tica/tica.py").exists());
}

#[test]
fn test_generated_scripts_have_header_and_no_metadata() {
    let temp = TempDir::new().unwrap();
    generate(temp.path());

    for entry in WalkDir::new(temp.path()).into_iter().filter_map(Result::ok) {
        if entry.path_is_symlink() || !entry.file_type().is_file() {
            continue;
        }
        let text = fs::read_to_string(entry.path()).unwrap();
        let name = entry.path().display();
        assert!(!text.contains(META_BEGIN), "{name} still has a metadata block");
        assert!(!text.contains("{{"), "{name} has unrendered tags");

        if entry.path().extension().is_some_and(|e| e == "py") {
            assert!(text.contains(HEADER_TITLE), "{name} has no header");
            assert!(text.contains("created 2016-03-14T15:09:26.000000"), "{name}");
            assert!(text.contains(HEADER_ATTRIBUTION), "{name}");
        }
    }
}

#[cfg(unix)]
#[test]
fn test_dependency_links() {
    let temp = TempDir::new().unwrap();
    generate(temp.path());
    let link = |path: &str| fs::read_link(temp.path().join(path)).unwrap();

    assert_eq!(link("analysis/trajs"), PathBuf::from("../trajs"));
    assert_eq!(link("analysis/top.pdb"), PathBuf::from("../top.pdb"));
    assert_eq!(link("analysis/rmsd/meta.pandas.pickl"), PathBuf::from("../meta.pandas.pickl"));
    assert_eq!(link("analysis/landmarks/trajs"), PathBuf::from("../trajs"));
    assert_eq!(link("analysis/landmarks/tica/ftrajs"), PathBuf::from("../ftrajs"));
    assert_eq!(link("analysis/dihedrals/tica/meta.pandas.pickl"), PathBuf::from("../meta.pandas.pickl"));
    assert_eq!(link("analysis/landmarks/tica/cluster/ttrajs"), PathBuf::from("../ttrajs"));
    assert_eq!(link("analysis/landmarks/tica/cluster/msm/ktrajs"), PathBuf::from("../ktrajs"));
    assert_eq!(link("analysis/dihedrals/tica/cluster/msm/cluster.pickl"), PathBuf::from("../cluster.pickl"));

    // The root has no parent to link from.
    for entry in fs::read_dir(temp.path()).unwrap() {
        assert!(!entry.unwrap().file_type().unwrap().is_symlink());
    }
}

#[cfg(unix)]
#[test]
fn test_links_resolve_once_parent_data_exists() {
    let temp = TempDir::new().unwrap();
    generate(temp.path());

    // Stand in for what 1-get-example-data.py and gather-metadata.py produce.
    fs::create_dir(temp.path().join("trajs")).unwrap();
    fs::write(temp.path().join("analysis/meta.pandas.pickl"), "meta").unwrap();

    assert!(temp.path().join("analysis/landmarks/trajs").is_dir());
    assert_eq!(
        fs::read_to_string(temp.path().join("analysis/landmarks/tica/cluster/msm/meta.pandas.pickl")).unwrap(),
        "meta"
    );
}

#[test]
fn test_two_runs_are_identical() {
    let first = TempDir::new().unwrap();
    let second = TempDir::new().unwrap();
    generate(first.path());
    generate(second.path());

    let a = snapshot(first.path());
    let b = snapshot(second.path());
    assert_eq!(a, b);
    assert!(a.iter().any(|(_, kind)| matches!(kind, Entry::Dir)));
    assert!(a.iter().any(|(_, kind)| matches!(kind, Entry::File(_))));
    #[cfg(unix)]
    assert!(a.iter().any(|(_, kind)| matches!(kind, Entry::Link(_))));
}

#[test]
fn test_shared_subtrees_render_identically() {
    let temp = TempDir::new().unwrap();
    generate(temp.path());

    let landmarks = snapshot(&temp.path().join("analysis/landmarks/tica"));
    let dihedrals = snapshot(&temp.path().join("analysis/dihedrals/tica"));
    assert_eq!(landmarks, dihedrals);
}
