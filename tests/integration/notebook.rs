use msm_scaffold::constants::{HEADER_TITLE, KERNEL_NAME, NBFORMAT};
use msm_scaffold::generator::Generator;
use msm_scaffold::output::Notebook;
use msm_scaffold::templating::EmbeddedStore;
use msm_scaffold::test_utils::fixed_renderer;
use serde_json::Value;
use std::fs;
use tempfile::TempDir;
use walkdir::WalkDir;

fn generate_notebooks() -> TempDir {
    let temp = TempDir::new().unwrap();
    Generator::new(EmbeddedStore)
        .renderer(fixed_renderer())
        .notebook(true)
        .generate(temp.path())
        .unwrap();
    temp
}

#[test]
fn test_python_templates_become_notebooks_at_every_depth() {
    let temp = generate_notebooks();

    assert!(temp.path().join("0-test-install.ipynb").is_file());
    assert!(temp.path().join("analysis/gather-metadata.ipynb").is_file());
    assert!(temp.path().join("analysis/dihedrals/tica/cluster/msm/msm-2-microstate-plot.ipynb").is_file());
    assert!(temp.path().join("README.md").is_file());

    let scripts: Vec<_> = WalkDir::new(temp.path())
        .into_iter()
        .filter_map(Result::ok)
        .filter(|e| e.path().extension().is_some_and(|ext| ext == "py"))
        .collect();
    assert!(scripts.is_empty(), "scripts written in notebook mode: {scripts:?}");
}

#[test]
fn test_notebook_document_shape() {
    let temp = generate_notebooks();
    let text = fs::read_to_string(temp.path().join("analysis/landmarks/tica/tica.ipynb")).unwrap();

    let json: Value = serde_json::from_str(&text).unwrap();
    assert_eq!(json["nbformat"], NBFORMAT);
    assert_eq!(json["metadata"]["kernelspec"]["name"], KERNEL_NAME);

    let notebook: Notebook = serde_json::from_str(&text).unwrap();
    let sources: Vec<_> = notebook.cells.iter().map(|c| c.source().to_string()).collect();

    // Docstring and imports come first under the script's own name, then one
    // markdown/code pair per heading.
    assert_eq!(sources[0], "## tica.py");
    assert!(sources[1].contains(HEADER_TITLE));
    let headings: Vec<_> = sources.iter().step_by(2).map(String::as_str).collect();
    assert_eq!(headings, ["## tica.py", "## Load", "## Fit", "## Transform", "## Save"]);
    assert!(json["cells"][2]["cell_type"] == "markdown");
    assert!(json["cells"][3]["cell_type"] == "code");
}

#[cfg(unix)]
#[test]
fn test_notebook_mode_keeps_links() {
    let temp = generate_notebooks();
    let link = temp.path().join("analysis/landmarks/tica/cluster/ttrajs");
    assert!(fs::symlink_metadata(link).unwrap().file_type().is_symlink());
}
