fn main() {
    // Year shown in the footer copyright line
    let build_year = chrono::Utc::now().format("%Y").to_string();
    println!("cargo:rustc-env=BUILD_YEAR={}", build_year);

    println!("cargo:rerun-if-changed=build.rs");
}
