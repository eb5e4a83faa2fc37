use msm_scaffold::generator::Generator;
use msm_scaffold::layout::TemplateDir;
use msm_scaffold::templating::EmbeddedStore;
use msm_scaffold::test_utils::{TemplateFixture, fixed_renderer, memory_store};
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

use crate::common::backups;

#[test]
fn test_rerun_backs_up_top_level_entries() {
    let temp = TempDir::new().unwrap();
    Generator::new(EmbeddedStore).generate(temp.path()).unwrap();
    let original_readme = fs::read_to_string(temp.path().join("README.md")).unwrap();

    Generator::new(EmbeddedStore).generate(temp.path()).unwrap();

    // Root files and the analysis directory are moved aside once each; the
    // nested tree travels inside analysis.bak.1 untouched.
    assert_eq!(
        backups(temp.path())
            .into_iter()
            .filter(|p| p.components().count() == 1)
            .collect::<Vec<_>>(),
        [
            PathBuf::from("0-test-install.py.bak.1"),
            PathBuf::from("1-get-example-data.py.bak.1"),
            PathBuf::from("README.md.bak.1"),
            PathBuf::from("analysis.bak.1"),
        ]
    );
    assert_eq!(fs::read_to_string(temp.path().join("README.md.bak.1")).unwrap(), original_readme);
    assert!(temp.path().join("analysis.bak.1/landmarks/tica/cluster/msm/msm-2-microstate.py").is_file());
    assert!(temp.path().join("analysis/landmarks/tica/cluster/msm/msm-2-microstate.py").is_file());
}

#[test]
fn test_third_run_takes_next_backup_number() {
    let temp = TempDir::new().unwrap();
    for _ in 0..3 {
        Generator::new(EmbeddedStore).generate(temp.path()).unwrap();
    }

    assert!(temp.path().join("README.md.bak.1").is_file());
    assert!(temp.path().join("README.md.bak.2").is_file());
    assert!(!temp.path().join("README.md.bak.3").exists());
    assert!(temp.path().join("analysis.bak.2").is_dir());
}

#[test]
fn test_user_edits_survive_rerun() {
    let temp = TempDir::new().unwrap();
    let store = memory_store(&[
        TemplateFixture::new("notes.md", "generated\n"),
        TemplateFixture::new("a/run.py", "print('run')\n").depends(&["notes.md"]),
    ]);
    let layout = TemplateDir::root(["notes.md"], vec![TemplateDir::new("a", ["a/run.py"], vec![])]);

    Generator::new(store.clone())
        .layout(layout.clone())
        .renderer(fixed_renderer())
        .generate(temp.path())
        .unwrap();
    fs::write(temp.path().join("notes.md"), "my edits\n").unwrap();
    fs::write(temp.path().join("a/run.py"), "print('tweaked')\n").unwrap();

    Generator::new(store).layout(layout).renderer(fixed_renderer()).generate(temp.path()).unwrap();

    assert_eq!(fs::read_to_string(temp.path().join("notes.md.bak.1")).unwrap(), "my edits\n");
    assert_eq!(fs::read_to_string(temp.path().join("a.bak.1/run.py")).unwrap(), "print('tweaked')\n");
    assert_eq!(fs::read_to_string(temp.path().join("notes.md")).unwrap(), "generated\n");
}
