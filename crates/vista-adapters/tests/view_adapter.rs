//! End-to-end tests: the view adapter driving the MiniJinja engine over a
//! real directory tree.

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::{Value, json};
use tempfile::TempDir;
use vista_adapters::{JinjaEngineFactory, LocalFilesystem, MemoryFilesystem};
use vista_core::prelude::*;

fn map(value: Value) -> TemplateData {
    match value {
        Value::Object(map) => map,
        other => panic!("expected object, got {other}"),
    }
}

struct App {
    temp: TempDir,
}

impl App {
    fn new() -> Self {
        Self {
            temp: TempDir::new().unwrap(),
        }
    }

    fn root(&self) -> &Path {
        self.temp.path()
    }

    fn cache_dir(&self) -> PathBuf {
        self.root().join("runtime/temp")
    }

    fn write(&self, relative: &str, body: &str) -> PathBuf {
        let path = self.root().join(relative);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, body).unwrap();
        path
    }

    fn options(&self, extra: Value) -> ConfigOptions {
        let mut options = map(json!({
            "app_path": format!("{}/", self.root().display()),
            "view_cache_path": format!("{}/", self.cache_dir().display()),
        }));
        options.extend(map(extra));
        options
    }

    fn adapter(&self, extra: Value) -> ViewAdapter {
        ViewAdapter::new(
            Box::new(JinjaEngineFactory::new()),
            Box::new(LocalFilesystem::new()),
            &self.options(extra),
        )
        .unwrap()
    }
}

fn ctx() -> RequestContext {
    RequestContext::new("index", "Index", "index")
}

fn fetch(adapter: &mut ViewAdapter, reference: &str, data: Value) -> VistaResult<String> {
    let mut out = Vec::new();
    adapter.fetch(
        reference,
        &ctx(),
        &map(data),
        &TemplateData::new(),
        &ConfigOptions::new(),
        &mut out,
    )?;
    Ok(String::from_utf8(out).unwrap())
}

#[test]
fn test_fetch_renders_default_template_for_request() {
    let app = App::new();
    app.write(
        "index/view/index/index.html",
        "<p>{{ name }}</p>{!! html !!}",
    );
    let mut adapter = app.adapter(json!({}));

    let out = fetch(
        &mut adapter,
        "",
        json!({ "name": "<Tom>", "html": "<em>hi</em>" }),
    )
    .unwrap();

    assert_eq!(out, "<p>&lt;Tom&gt;</p><em>hi</em>");
    assert!(app.cache_dir().is_dir());
}

#[test]
fn test_fetch_cross_module_reference() {
    let app = App::new();
    app.write("admin/view/user/list.html", "admins: {{ count }}");
    let mut adapter = app.adapter(json!({}));

    let out = fetch(&mut adapter, "admin@user/list", json!({ "count": 3 })).unwrap();
    assert_eq!(out, "admins: 3");
}

#[test]
fn test_fetch_missing_template_reports_resolved_path() {
    let app = App::new();
    let mut adapter = app.adapter(json!({}));

    let err = fetch(&mut adapter, "missing", json!({})).unwrap_err();

    assert!(err.is_not_found());
    let expected = app.root().join("index/view/index/missing.html");
    assert!(
        err.to_string().contains(&expected.display().to_string()),
        "{err}"
    );
}

#[test]
fn test_fetch_file_path_reference_bypasses_resolution() {
    let app = App::new();
    let path = app.write("elsewhere/page.tpl", "direct {{ x }}");
    let mut adapter = app.adapter(json!({}));

    let out = fetch(&mut adapter, &path.display().to_string(), json!({ "x": 1 })).unwrap();
    assert_eq!(out, "direct 1");
}

#[test]
fn test_shared_data_has_lowest_precedence() {
    let app = App::new();
    app.write("index/view/index/index.html", "{{ a }} {{ b }} {{ c }}");
    let mut adapter = app.adapter(json!({}));
    adapter.share("a", json!("shared"));
    adapter.share("b", json!("shared"));
    adapter.share("c", json!("shared"));

    let mut out = Vec::new();
    adapter
        .fetch(
            "",
            &ctx(),
            &map(json!({ "c": "data" })),
            &map(json!({ "b": "merge", "c": "merge" })),
            &ConfigOptions::new(),
            &mut out,
        )
        .unwrap();

    assert_eq!(String::from_utf8(out).unwrap(), "shared merge data");
}

#[test]
fn test_exists_checks_resolved_path() {
    let app = App::new();
    app.write("index/view/index/edit.html", "");
    let adapter = app.adapter(json!({}));

    assert!(adapter.exists("edit", &ctx()));
    assert!(adapter.exists("index/edit", &ctx()));
    assert!(!adapter.exists("show", &ctx()));
}

#[test]
fn test_display_renders_named_view_with_includes() {
    let app = App::new();
    app.write("index/view/partials/nav.html", "<nav>{{ user }}</nav>");
    app.write(
        "index/view/emails/welcome.html",
        "{% include 'partials.nav' %}Welcome, {{ user }}",
    );
    let mut adapter = app.adapter(json!({}));

    let out = adapter
        .display(
            "emails.welcome",
            &ctx(),
            &map(json!({ "user": "ann" })),
            &TemplateData::new(),
            &ConfigOptions::new(),
        )
        .unwrap();

    assert_eq!(out, "<nav>ann</nav>Welcome, ann");
}

#[test]
fn test_display_unknown_view_is_not_found() {
    let app = App::new();
    let mut adapter = app.adapter(json!({}));

    let err = adapter
        .display(
            "nope",
            &ctx(),
            &TemplateData::new(),
            &TemplateData::new(),
            &ConfigOptions::new(),
        )
        .unwrap_err();
    assert!(err.is_not_found());
}

#[test]
fn test_custom_delimiters_via_render_options() {
    let app = App::new();
    app.write("index/view/index/index.html", "<% a %>|<%! b !%>");
    let mut adapter = app.adapter(json!({}));

    let mut out = Vec::new();
    adapter
        .fetch(
            "",
            &ctx(),
            &map(json!({ "a": "<x>", "b": "<y>" })),
            &TemplateData::new(),
            &map(json!({
                "tpl_begin": "<%",
                "tpl_end": "%>",
                "tpl_raw_begin": "<%!",
                "tpl_raw_end": "!%>",
            })),
            &mut out,
        )
        .unwrap();

    assert_eq!(String::from_utf8(out).unwrap(), "&lt;x&gt;|<y>");
    assert_eq!(adapter.config("tpl_begin").unwrap(), json!("<%"));
}

#[test]
fn test_delimiter_change_recompiles_cached_template() {
    let app = App::new();
    app.write("index/view/index/index.html", "<% x %>");
    let mut adapter = app.adapter(json!({}));

    assert_eq!(fetch(&mut adapter, "", json!({ "x": "VAL" })).unwrap(), "<% x %>");

    let mut out = Vec::new();
    adapter
        .fetch(
            "",
            &ctx(),
            &map(json!({ "x": "VAL" })),
            &TemplateData::new(),
            &map(json!({ "tpl_begin": "<%", "tpl_end": "%>" })),
            &mut out,
        )
        .unwrap();

    assert_eq!(String::from_utf8(out).unwrap(), "VAL");
    assert_eq!(walk(&app.cache_dir()).len(), 2);
}

#[test]
fn test_compiled_templates_are_sharded_when_enabled() {
    let app = App::new();
    app.write("index/view/index/index.html", "{{ x }}");
    let mut adapter = app.adapter(json!({ "cache_subdir": true, "cache_prefix": "v_" }));

    fetch(&mut adapter, "", json!({ "x": 1 })).unwrap();

    let compiled: Vec<PathBuf> = walk(&app.cache_dir());
    assert_eq!(compiled.len(), 1);
    let file = &compiled[0];
    let name = file.file_name().unwrap().to_string_lossy().into_owned();
    assert!(name.starts_with("v_") && name.ends_with(".jinja"), "{name}");
    let depth = file.strip_prefix(app.cache_dir()).unwrap().components().count();
    assert_eq!(depth, 3);
}

#[test]
fn test_disabled_cache_writes_nothing() {
    let app = App::new();
    app.write("index/view/index/index.html", "{{ x }}");
    let mut adapter = app.adapter(json!({ "tpl_cache": false }));

    assert_eq!(fetch(&mut adapter, "", json!({ "x": 2 })).unwrap(), "2");
    assert!(walk(&app.cache_dir()).is_empty());
}

#[test]
fn test_rejected_options_leave_configuration_untouched() {
    let app = App::new();
    let mut adapter = app.adapter(json!({}));
    let before = adapter.view_config().clone();

    let err = adapter
        .configure(&map(json!({ "view_suffix": "tpl", "tpl_begin": "" })))
        .unwrap_err();

    assert!(matches!(err, VistaError::Domain(_)));
    assert_eq!(adapter.view_config(), &before);
}

#[test]
fn test_exists_with_memory_filesystem() {
    let fs = MemoryFilesystem::new();
    fs.add_file("app/index/view/index/index.html");
    let adapter = ViewAdapter::new(
        Box::new(JinjaEngineFactory::new()),
        Box::new(fs.clone()),
        &ConfigOptions::new(),
    )
    .unwrap();

    assert!(adapter.exists("", &ctx()));
    assert!(!adapter.exists("other", &ctx()));
    assert!(fs.list_directories().contains(&PathBuf::from("runtime/temp")));
}

fn walk(dir: &Path) -> Vec<PathBuf> {
    let mut files = Vec::new();
    let Ok(entries) = fs::read_dir(dir) else {
        return files;
    };
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            files.extend(walk(&path));
        } else {
            files.push(path);
        }
    }
    files
}
