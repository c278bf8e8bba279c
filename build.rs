use lightningcss::{
    bundler::{Bundler, FileProvider},
    stylesheet::{MinifyOptions, ParserOptions, PrinterOptions},
};
use std::fs;
use std::path::Path;

fn main() {
    println!("cargo:rerun-if-changed=assets/css/");

    fs::create_dir_all("assets/dist").expect("Failed to create assets/dist directory");

    // Bundle all @import'ed stylesheets starting from main.css
    let fs_provider = FileProvider::new();
    let mut bundler = Bundler::new(&fs_provider, None, ParserOptions::default());
    let mut stylesheet = bundler
        .bundle(Path::new("assets/css/main.css"))
        .expect("Failed to bundle CSS");

    stylesheet
        .minify(MinifyOptions::default())
        .expect("Failed to minify CSS");

    let css = stylesheet
        .to_css(PrinterOptions {
            minify: true,
            ..Default::default()
        })
        .expect("Failed to generate CSS output");

    fs::write("assets/dist/bundle.css", css.code).expect("Failed to write bundle.css");
}
