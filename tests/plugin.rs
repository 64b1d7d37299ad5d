//! End-to-end tests for the build-start hook with the built-in minifier.

use std::fs;
use std::path::{Path, PathBuf};

use svg_minify::{BuildContext, BuildParticipant, PluginError, PluginOptions, svg_minify};

fn fixture(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(name)
}

fn fixture_options(output: &str) -> PluginOptions {
    PluginOptions {
        input: fixture("input.svg"),
        output: PathBuf::from(output),
        multipass: false,
        silent: true,
    }
}

#[test]
fn produces_expected_output() {
    let out_dir = tempfile::tempdir().unwrap();
    let plugin = svg_minify(fixture_options("./actual.svg"));

    plugin
        .on_build_start(&BuildContext::new(out_dir.path()))
        .unwrap();

    let actual = fs::read_to_string(out_dir.path().join("actual.svg")).unwrap();
    let expected = fs::read_to_string(fixture("expected.svg")).unwrap();
    assert_eq!(actual, expected);
}

#[test]
fn sprite_elements_survive() {
    let out_dir = tempfile::tempdir().unwrap();
    let plugin = svg_minify(fixture_options("sprites.svg"));
    plugin
        .on_build_start(&BuildContext::new(out_dir.path()))
        .unwrap();

    let actual = fs::read_to_string(out_dir.path().join("sprites.svg")).unwrap();
    assert!(actual.contains(r#"<rect width="0" height="0"/>"#));
    assert!(actual.contains(r#"<g id="hidden-layer" display="none">"#));

    // The same input under the full preset loses both.
    let input = fs::read_to_string(fixture("input.svg")).unwrap();
    let aggressive = svg_minify::minify(&input).unwrap();
    assert!(!aggressive.contains("<rect"));
    assert!(!aggressive.contains("hidden-layer"));
    assert!(aggressive.contains(r#"<symbol id="icon-spacer" viewBox="0 0 0 0"/>"#));
}

#[test]
fn repeated_builds_are_identical() {
    let out_dir = tempfile::tempdir().unwrap();
    let plugin = svg_minify(fixture_options("sprites.svg"));
    let ctx = BuildContext::new(out_dir.path());
    let target = out_dir.path().join("sprites.svg");

    plugin.on_build_start(&ctx).unwrap();
    let first = fs::read(&target).unwrap();
    plugin.on_build_start(&ctx).unwrap();
    let second = fs::read(&target).unwrap();

    assert_eq!(first, second);
}

#[test]
fn multipass_keeps_shrinking_until_stable() {
    // Removing the empty inner group leaves a one-child group that only a
    // second round collapses.
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("nested.svg");
    fs::write(
        &input,
        r#"<svg xmlns="http://www.w3.org/2000/svg"><g><g/><circle r="1"/></g></svg>"#,
    )
    .unwrap();
    let ctx = BuildContext::new(dir.path());

    svg_minify(PluginOptions {
        input: input.clone(),
        ..fixture_options("single.svg")
    })
    .on_build_start(&ctx)
    .unwrap();
    svg_minify(PluginOptions {
        input,
        multipass: true,
        ..fixture_options("multi.svg")
    })
    .on_build_start(&ctx)
    .unwrap();

    let single = fs::read_to_string(dir.path().join("single.svg")).unwrap();
    let multi = fs::read_to_string(dir.path().join("multi.svg")).unwrap();
    assert_eq!(
        single,
        r#"<svg xmlns="http://www.w3.org/2000/svg"><g><circle r="1"/></g></svg>"#
    );
    assert_eq!(
        multi,
        r#"<svg xmlns="http://www.w3.org/2000/svg"><circle r="1"/></svg>"#
    );
}

#[test]
fn symbol_defaults_survive_for_use_sites() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("icons.svg");
    fs::write(
        &input,
        r##"<svg xmlns="http://www.w3.org/2000/svg" xmlns:xlink="http://www.w3.org/1999/xlink">
  <defs>
    <symbol id="icon-line" viewBox="0 0 10 10">
      <path stroke="currentColor" stroke-width="1" stroke-linecap="butt" opacity="1" d="M0 0 L10 10"/>
    </symbol>
  </defs>
  <use xlink:href="#icon-line" stroke-width="4" stroke-linecap="round"/>
</svg>"##,
    )
    .unwrap();

    svg_minify(PluginOptions {
        input,
        ..fixture_options("icons.min.svg")
    })
    .on_build_start(&BuildContext::new(dir.path()))
    .unwrap();

    let actual = fs::read_to_string(dir.path().join("icons.min.svg")).unwrap();
    assert!(
        actual.contains(
            r#"<path stroke="currentColor" d="M0 0 10 10" stroke-linecap="butt" stroke-width="1"/>"#
        ),
        "{actual}"
    );
    assert!(actual.contains(r##"<use stroke-linecap="round" stroke-width="4" xlink:href="#icon-line"/>"##));
}

#[test]
fn overwrites_existing_output() {
    let out_dir = tempfile::tempdir().unwrap();
    let target = out_dir.path().join("sprites.svg");
    fs::write(&target, "stale contents that are much longer than anything we produce ".repeat(20))
        .unwrap();

    svg_minify(fixture_options("sprites.svg"))
        .on_build_start(&BuildContext::new(out_dir.path()))
        .unwrap();

    let expected = fs::read_to_string(fixture("expected.svg")).unwrap();
    assert_eq!(fs::read_to_string(&target).unwrap(), expected);
}

#[test]
fn missing_input_fails() {
    let out_dir = tempfile::tempdir().unwrap();
    let plugin = svg_minify(PluginOptions {
        input: out_dir.path().join("does-not-exist.svg"),
        ..fixture_options("sprites.svg")
    });

    let err = plugin
        .on_build_start(&BuildContext::new(out_dir.path()))
        .unwrap_err();

    assert!(matches!(err, PluginError::Read { .. }));
    assert!(!out_dir.path().join("sprites.svg").exists());
}

#[test]
fn malformed_input_fails() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("broken.svg");
    fs::write(&input, "<svg><g></svg>").unwrap();

    let plugin = svg_minify(PluginOptions {
        input,
        ..fixture_options("sprites.svg")
    });
    let err = plugin
        .on_build_start(&BuildContext::new(dir.path()))
        .unwrap_err();

    assert!(matches!(err, PluginError::Optimize { .. }));
    assert!(err.to_string().contains("broken.svg"));
}

#[test]
fn relative_output_lands_under_output_directory() {
    let out_dir = tempfile::tempdir().unwrap();
    fs::create_dir(out_dir.path().join("static")).unwrap();

    svg_minify(fixture_options("./static/../static/./sprites.svg"))
        .on_build_start(&BuildContext::new(out_dir.path()))
        .unwrap();

    assert!(out_dir.path().join("static/sprites.svg").is_file());
}

#[test]
fn absolute_output_is_used_verbatim() {
    let out_dir = tempfile::tempdir().unwrap();
    let elsewhere = tempfile::tempdir().unwrap();
    let target = elsewhere.path().join("sprites.svg");

    let plugin = svg_minify(PluginOptions {
        output: target.clone(),
        ..fixture_options("unused.svg")
    });
    plugin
        .on_build_start(&BuildContext::new(out_dir.path()))
        .unwrap();

    assert!(target.is_file());
    assert!(!out_dir.path().join("sprites.svg").exists());
    assert!(!out_dir.path().join("unused.svg").exists());
}
