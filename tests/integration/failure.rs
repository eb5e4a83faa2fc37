use msm_scaffold::core::ScaffoldError;
use msm_scaffold::generator::Generator;
use msm_scaffold::layout::TemplateDir;
use msm_scaffold::test_utils::{TemplateFixture, memory_store};
use serial_test::serial;
use std::env;
use tempfile::TempDir;

fn five_files(broken: &str) -> Vec<TemplateFixture> {
    ["1.py", "2.py", "3.py", "4.py", "5.py"]
        .iter()
        .map(|name| {
            let body = if *name == "3.py" { broken.to_string() } else { format!("print('{name}')\n") };
            TemplateFixture::new(format!("sub/{name}"), body)
        })
        .collect()
}

fn layout() -> TemplateDir {
    TemplateDir::root(
        Vec::<String>::new(),
        vec![TemplateDir::new(
            "sub",
            ["sub/1.py", "sub/2.py", "sub/3.py", "sub/4.py", "sub/5.py"],
            vec![TemplateDir::new("deeper", Vec::<String>::new(), vec![])],
        )],
    )
}

#[test]
#[serial]
fn test_failed_render_leaves_working_directory_alone() {
    let before = env::current_dir().unwrap();
    let temp = TempDir::new().unwrap();

    let err = Generator::new(memory_store(&five_files("{{ undefined_variable }}\n")))
        .layout(layout())
        .generate(temp.path())
        .unwrap_err();

    assert!(matches!(err, ScaffoldError::Render { ref template, .. } if template == "sub/3.py"));
    assert_eq!(env::current_dir().unwrap(), before);

    let sub = temp.path().join("sub");
    assert!(sub.join("1.py").is_file());
    assert!(sub.join("2.py").is_file());
    assert!(!sub.join("3.py").exists());
    assert!(!sub.join("4.py").exists());
    assert!(!sub.join("deeper").exists());
}

#[test]
#[serial]
fn test_bad_metadata_names_template() {
    let before = env::current_dir().unwrap();
    let temp = TempDir::new().unwrap();
    let fixtures = five_files("Meta\n----\ndepends: [unclosed\n----\n");

    let err = Generator::new(memory_store(&fixtures)).layout(layout()).generate(temp.path()).unwrap_err();

    assert!(matches!(err, ScaffoldError::MetadataDecode { ref template, .. } if template == "sub/3.py"));
    assert_eq!(env::current_dir().unwrap(), before);
}

#[test]
fn test_missing_template_stops_render() {
    let temp = TempDir::new().unwrap();
    let mut fixtures = five_files("print(3)\n");
    fixtures.remove(2);

    let err = Generator::new(memory_store(&fixtures)).layout(layout()).generate(temp.path()).unwrap_err();

    assert!(matches!(err, ScaffoldError::TemplateNotFound { ref name } if name == "sub/3.py"));
    assert!(!temp.path().join("sub/4.py").exists());
}
