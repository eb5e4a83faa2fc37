//! The bundled MSM analysis project layout.

use super::dir::TemplateDir;

/// Layout of a complete MSM analysis project.
///
/// Trajectories are gathered and featurized under `analysis/`; each
/// featurization (`landmarks`, `dihedrals`) gets its own copy of the
/// tICA → clustering → MSM pipeline.
#[must_use]
pub fn project_layout() -> TemplateDir {
    TemplateDir::root(
        ["0-test-install.py", "1-get-example-data.py", "README.md"],
        vec![TemplateDir::new(
            "analysis",
            ["analysis/gather-metadata.py", "analysis/gather-metadata-plot.py"],
            vec![
                TemplateDir::new("rmsd", ["analysis/rmsd/rmsd.py", "analysis/rmsd/rmsd-plot.py"], vec![]),
                TemplateDir::new(
                    "landmarks",
                    ["analysis/landmarks/featurize.py", "analysis/landmarks/featurize-plot.py"],
                    vec![tica_msm()],
                ),
                TemplateDir::new(
                    "dihedrals",
                    ["analysis/dihedrals/featurize.py", "analysis/dihedrals/featurize-plot.py"],
                    vec![tica_msm()],
                ),
            ],
        )],
    )
}

/// tICA, clustering and MSM estimation on top of one featurization.
#[must_use]
pub fn tica_msm() -> TemplateDir {
    TemplateDir::new(
        "tica",
        [
            "tica/tica.py",
            "tica/tica-plot.py",
            "tica/tica-sample-coordinate.py",
            "tica/tica-sample-coordinate-plot.py",
        ],
        vec![TemplateDir::new(
            "cluster",
            ["tica/cluster/cluster.py", "tica/cluster/cluster-plot.py"],
            vec![TemplateDir::new(
                "msm",
                [
                    "tica/cluster/msm/msm-1-timescales.py",
                    "tica/cluster/msm/msm-1-timescales-plot.py",
                    "tica/cluster/msm/msm-2-microstate.py",
                    "tica/cluster/msm/msm-2-microstate-plot.py",
                ],
                vec![],
            )],
        )],
    )
}
