//! Bundles `assets/css` into one minified stylesheet for `Layout`.
//!
//! The drawer backdrop uses `inset`; lowering to the browser floor below keeps
//! it working on older Safari.

use lightningcss::{
    bundler::{Bundler, FileProvider},
    stylesheet::{MinifyOptions, ParserOptions, PrinterOptions},
    targets::{Browsers, Targets},
};
use std::fs;
use std::path::Path;

const CSS_DIR: &str = "assets/css";
const ENTRY: &str = "assets/css/main.css";
const OUT_DIR: &str = "assets/dist";
const OUT_FILE: &str = "assets/dist/bundle.css";

/// Oldest browsers the shell supports, encoded as `major << 16 | minor << 8`.
fn browser_floor() -> Targets {
    Targets::from(Browsers {
        safari: Some(13 << 16),
        ios_saf: Some(13 << 16),
        chrome: Some(80 << 16),
        firefox: Some(78 << 16),
        edge: Some(80 << 16),
        ..Browsers::default()
    })
}

/// Rebuild when any stylesheet changes, including ones only reached via @import.
fn watch_stylesheets() {
    println!("cargo:rerun-if-changed={CSS_DIR}");
    let Ok(entries) = fs::read_dir(CSS_DIR) else {
        return;
    };
    for entry in entries.flatten() {
        let path = entry.path();
        if path.extension().is_some_and(|ext| ext == "css") {
            println!("cargo:rerun-if-changed={}", path.display());
        }
    }
}

fn main() {
    watch_stylesheets();

    fs::create_dir_all(OUT_DIR)
        .unwrap_or_else(|e| panic!("cannot create {OUT_DIR}: {e}"));

    let targets = browser_floor();
    let fs_provider = FileProvider::new();
    let mut bundler = Bundler::new(&fs_provider, None, ParserOptions::default());

    let mut stylesheet = bundler
        .bundle(Path::new(ENTRY))
        .unwrap_or_else(|e| panic!("cannot bundle {ENTRY}: {e}"));

    stylesheet
        .minify(MinifyOptions {
            targets,
            ..MinifyOptions::default()
        })
        .unwrap_or_else(|e| panic!("cannot minify {ENTRY}: {e}"));

    let css = stylesheet
        .to_css(PrinterOptions {
            minify: true,
            targets,
            ..PrinterOptions::default()
        })
        .unwrap_or_else(|e| panic!("cannot print {ENTRY}: {e}"));

    fs::write(OUT_FILE, css.code)
        .unwrap_or_else(|e| panic!("cannot write {OUT_FILE}: {e}"));
}
